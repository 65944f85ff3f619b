/// Core evaluation logic.
///
/// Defines the `Evaluator`, its settings, and the dispatch over statements
/// and expressions.
pub mod core;
/// Function application and builtin functions.
pub mod function;
/// Array and hash indexing, and hash literals.
pub mod index;
/// Binary operators.
pub mod infix;
/// Unary operators.
pub mod prefix;
