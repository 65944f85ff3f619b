use crate::interpreter::{
    evaluator::core::EvalResult,
    object::core::{Object, NULL},
};

/// Prints each argument on its own line to standard output.
///
/// Accepts any number of arguments and always returns `null`. Values are
/// formatted using their `Display` implementation, so strings appear without
/// quotes.
///
/// # Example
/// ```
/// use monkey::interpreter::{evaluator::function::print::puts, object::core::{NULL, Object}};
///
/// // The function prints to stdout, but the doctest only checks the result.
/// assert_eq!(puts(&[Object::from("hello"), Object::Integer(42)]), Ok(NULL));
/// ```
pub fn puts(args: &[Object]) -> EvalResult<Object> {
    for arg in args {
        println!("{arg}");
    }

    Ok(NULL)
}
