/// Built-in array and string functions.
///
/// `len`, `first`, `last`, `rest` and `push`. None of them modifies its
/// arguments; functions that produce an array return a new one.
pub mod builtin;
/// The `puts` function implementation.
///
/// Writes values to standard output.
pub mod print;

/// The builtin table and function application.
///
/// Looks builtins up by name, checks their arity, and applies user-defined
/// closures with the call depth guard.
pub mod core;
