use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        object::core::Object,
    },
};

impl Evaluator {
    /// Applies an infix operator to two evaluated operands.
    ///
    /// Supported combinations:
    /// - integers: `+ - * /` yield an integer, `< > == !=` a boolean,
    /// - strings: `+` concatenates, `==` and `!=` compare contents,
    /// - booleans: `==` and `!=`.
    ///
    /// Integer arithmetic wraps on overflow.
    ///
    /// # Errors
    /// - `TypeMismatch` when the operand types differ.
    /// - `UnknownInfixOperator` when the operator is not defined for the type.
    /// - `DivisionByZero` for an integer division by zero.
    pub fn eval_infix(op: InfixOperator, left: &Object, right: &Object) -> EvalResult<Object> {
        match (left, right) {
            (Object::Integer(a), Object::Integer(b)) => eval_integer_infix(op, *a, *b),
            (Object::String(a), Object::String(b)) => match op {
                InfixOperator::Add => Ok(Object::from(format!("{a}{b}"))),
                InfixOperator::Equal => Ok(Object::from_native_bool(a == b)),
                InfixOperator::NotEqual => Ok(Object::from_native_bool(a != b)),
                _ => Err(unknown_operator(op, left, right)),
            },
            (Object::Boolean(a), Object::Boolean(b)) => match op {
                InfixOperator::Equal => Ok(Object::from_native_bool(a == b)),
                InfixOperator::NotEqual => Ok(Object::from_native_bool(a != b)),
                _ => Err(unknown_operator(op, left, right)),
            },
            _ if left.object_type() != right.object_type() => {
                Err(RuntimeError::TypeMismatch { left: left.object_type(),
                                                 op,
                                                 right: right.object_type() })
            },
            _ => Err(unknown_operator(op, left, right)),
        }
    }
}

fn eval_integer_infix(op: InfixOperator, a: i64, b: i64) -> EvalResult<Object> {
    let value = match op {
        InfixOperator::Add => Object::Integer(a.wrapping_add(b)),
        InfixOperator::Sub => Object::Integer(a.wrapping_sub(b)),
        InfixOperator::Mul => Object::Integer(a.wrapping_mul(b)),
        InfixOperator::Div => {
            if b == 0 {
                return Err(RuntimeError::DivisionByZero { left: a });
            }
            Object::Integer(a.wrapping_div(b))
        },
        InfixOperator::Less => Object::from_native_bool(a < b),
        InfixOperator::Greater => Object::from_native_bool(a > b),
        InfixOperator::Equal => Object::from_native_bool(a == b),
        InfixOperator::NotEqual => Object::from_native_bool(a != b),
    };

    Ok(value)
}

fn unknown_operator(op: InfixOperator, left: &Object, right: &Object) -> RuntimeError {
    RuntimeError::UnknownInfixOperator { left: left.object_type(),
                                         op,
                                         right: right.object_type() }
}
