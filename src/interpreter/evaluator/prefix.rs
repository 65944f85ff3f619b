use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        object::core::Object,
    },
};

impl Evaluator {
    /// Applies a prefix operator to an evaluated operand.
    ///
    /// - `!x` negates the truthiness of `x` and always yields a boolean.
    /// - `-x` negates an integer, wrapping on `i64::MIN`.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnknownPrefixOperator` when `-` is applied to
    /// anything other than an integer.
    ///
    /// # Example
    /// ```
    /// use monkey::{
    ///     ast::PrefixOperator,
    ///     interpreter::{evaluator::core::Evaluator, object::core::{NULL, Object}},
    /// };
    ///
    /// assert_eq!(Evaluator::eval_prefix(PrefixOperator::Not, &NULL), Ok(Object::Boolean(true)));
    /// assert_eq!(Evaluator::eval_prefix(PrefixOperator::Negate, &Object::Integer(5)),
    ///            Ok(Object::Integer(-5)));
    /// assert!(Evaluator::eval_prefix(PrefixOperator::Negate, &Object::Boolean(true)).is_err());
    /// ```
    pub fn eval_prefix(op: PrefixOperator, operand: &Object) -> EvalResult<Object> {
        match (op, operand) {
            (PrefixOperator::Not, _) => Ok(Object::from_native_bool(!operand.is_truthy())),
            (PrefixOperator::Negate, Object::Integer(n)) => Ok(Object::Integer(n.wrapping_neg())),
            (PrefixOperator::Negate, _) => {
                Err(RuntimeError::UnknownPrefixOperator { op,
                                                          operand: operand.object_type() })
            },
        }
    }
}
