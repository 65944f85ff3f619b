/// Runtime values.
///
/// Defines the `Object` enum produced by evaluation, the type tags used in
/// error messages, truthiness and the textual rendering of every value.
pub mod core;
/// Hash keys.
///
/// Derives the deterministic `HashKey` used to index hash values. Only
/// integers, strings and booleans have one.
pub mod hash_key;
/// Lexical scopes.
///
/// Defines the chained `Environment` that maps names to values. Frames are
/// shared between closures and the scopes that created them.
pub mod environment;
