use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        object::core::{Object, NULL},
    },
};

/// Returns the length of a string (in bytes) or of an array.
///
/// Expects exactly one argument; the count is checked by the builtin table
/// before the call.
///
/// # Example
/// ```
/// use monkey::interpreter::{evaluator::function::builtin::len, object::core::Object};
///
/// assert_eq!(len(&[Object::from("four")]), Ok(Object::Integer(4)));
/// assert_eq!(len(&[Object::from(vec![Object::Null])]), Ok(Object::Integer(1)));
/// assert_eq!(len(&[Object::Integer(1)]).unwrap_err().to_string(),
///            "argument to `len` not supported, got INTEGER");
/// ```
pub fn len(args: &[Object]) -> EvalResult<Object> {
    let length = match &args[0] {
        Object::String(s) => s.len(),
        Object::Array(elements) => elements.len(),
        other => {
            return Err(RuntimeError::UnsupportedArgument { builtin: "len",
                                                           kind:    other.object_type(), })
        },
    };

    Ok(Object::Integer(i64::try_from(length).unwrap_or(i64::MAX)))
}

/// Defines a builtin returning one element picked from an array.
///
/// The generated functions take one array argument and return
/// `null` when the array is empty. Anything other than an array produces an
/// `ExpectedArray` error.
macro_rules! array_element_builtin {
    ($fname:ident, $pick:ident) => {
        #[doc = concat!("Returns the ", stringify!($pick), " element of an array, or `null` if it is empty.")]
        pub fn $fname(args: &[Object]) -> EvalResult<Object> {
                    match &args[0] {
                Object::Array(elements) => Ok(elements.$pick().cloned().unwrap_or(NULL)),
                other => Err(RuntimeError::ExpectedArray { builtin: stringify!($fname),
                                                           kind:    other.object_type(), }),
            }
        }
    };
}

array_element_builtin!(first, first);
array_element_builtin!(last, last);

/// Returns a new array holding every element but the first.
///
/// Returns `null` for an empty array. The argument is left unchanged.
///
/// # Example
/// ```
/// use monkey::interpreter::{evaluator::function::builtin::rest, object::core::{NULL, Object}};
///
/// let array = Object::from(vec![Object::Integer(1), Object::Integer(2), Object::Integer(3)]);
///
/// assert_eq!(rest(&[array]),
///            Ok(Object::from(vec![Object::Integer(2), Object::Integer(3)])));
/// assert_eq!(rest(&[Object::from(Vec::<Object>::new())]), Ok(NULL));
/// ```
pub fn rest(args: &[Object]) -> EvalResult<Object> {
    match &args[0] {
        Object::Array(elements) => match elements.split_first() {
            Some((_, tail)) => Ok(Object::from(tail.to_vec())),
            None => Ok(NULL),
        },
        other => Err(RuntimeError::ExpectedArray { builtin: "rest",
                                                   kind:    other.object_type(), }),
    }
}

/// Returns a new array with the second argument appended to the first.
///
/// The original array is left unchanged.
///
/// # Example
/// ```
/// use monkey::interpreter::{evaluator::function::builtin::push, object::core::Object};
///
/// let array = Object::from(vec![Object::Integer(1)]);
/// let pushed = push(&[array.clone(), Object::Integer(2)]).unwrap();
///
/// assert_eq!(pushed, Object::from(vec![Object::Integer(1), Object::Integer(2)]));
/// assert_eq!(array, Object::from(vec![Object::Integer(1)]));
/// ```
pub fn push(args: &[Object]) -> EvalResult<Object> {
    match &args[0] {
        Object::Array(elements) => {
            let mut extended = Vec::with_capacity(elements.len() + 1);
            extended.extend(elements.iter().cloned());
            extended.push(args[1].clone());
            Ok(Object::Array(Rc::new(extended)))
        },
        other => Err(RuntimeError::ExpectedArray { builtin: "push",
                                                   kind:    other.object_type(), }),
    }
}
