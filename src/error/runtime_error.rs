use thiserror::Error;

use crate::{
    ast::{InfixOperator, PrefixOperator},
    interpreter::object::core::ObjectType,
};

/// Represents all errors that can occur during evaluation.
///
/// The `Display` text of each variant is exactly the message carried by the
/// `Object::Error` value the evaluator hands back to callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// An infix operator was applied to operands of different types.
    #[error("type mismatch: {left} {op} {right}")]
    TypeMismatch {
        /// Type of the left operand.
        left:  ObjectType,
        /// The operator.
        op:    InfixOperator,
        /// Type of the right operand.
        right: ObjectType,
    },
    /// An infix operator is not defined for the operand type.
    #[error("unknown operator: {left} {op} {right}")]
    UnknownInfixOperator {
        /// Type of the left operand.
        left:  ObjectType,
        /// The operator.
        op:    InfixOperator,
        /// Type of the right operand.
        right: ObjectType,
    },
    /// A prefix operator is not defined for the operand type.
    #[error("unknown operator: {op}{operand}")]
    UnknownPrefixOperator {
        /// The operator.
        op:      PrefixOperator,
        /// Type of the operand.
        operand: ObjectType,
    },
    /// A name is neither bound nor a builtin.
    #[error("identifier not found: {name}")]
    IdentifierNotFound {
        /// The unresolved name.
        name: String,
    },
    /// A value that has no hash key was used as one.
    #[error("unusable as hash key: {kind}")]
    UnusableHashKey {
        /// Type of the offending key.
        kind: ObjectType,
    },
    /// Indexing into something that is neither an array nor a hash.
    #[error("index operator not supported: {kind}")]
    IndexNotSupported {
        /// Type of the indexed value.
        kind: ObjectType,
    },
    /// Calling something that is not callable.
    #[error("not a function: {kind}")]
    NotAFunction {
        /// Type of the callee.
        kind: ObjectType,
    },
    /// A user-defined function was called with the wrong number of arguments.
    #[error("wrong number of arguments: want={want}, got={got}")]
    ArgumentCountMismatch {
        /// Number of declared parameters.
        want: usize,
        /// Number of supplied arguments.
        got:  usize,
    },
    /// A builtin was called with the wrong number of arguments.
    #[error("wrong number of arguments. got={got}, want={want}")]
    BuiltinArgumentCount {
        /// Number of supplied arguments.
        got:  usize,
        /// Number of accepted arguments.
        want: usize,
    },
    /// A builtin does not accept an argument of this type.
    #[error("argument to `{builtin}` not supported, got {kind}")]
    UnsupportedArgument {
        /// Name of the builtin.
        builtin: &'static str,
        /// Type of the argument.
        kind:    ObjectType,
    },
    /// A builtin requires an array argument.
    #[error("argument to `{builtin}` must be ARRAY, got {kind}")]
    ExpectedArray {
        /// Name of the builtin.
        builtin: &'static str,
        /// Type of the argument.
        kind:    ObjectType,
    },
    /// Integer division by zero.
    #[error("division by zero: {left} / 0")]
    DivisionByZero {
        /// The dividend.
        left: i64,
    },
    /// Too many nested function calls.
    #[error("maximum call depth exceeded (limit {limit})")]
    CallDepthExceeded {
        /// The configured limit.
        limit: usize,
    },
}
