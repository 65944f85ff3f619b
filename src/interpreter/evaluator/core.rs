use std::rc::Rc;

use tracing::{debug, trace};

use crate::{
    ast::{BlockStatement, Expression, Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::function::core::lookup_builtin,
        object::{
            core::{Function, Object, NULL},
            environment::Env,
        },
    },
    util::stack::ensure_sufficient_stack,
};

/// Result type used by operators, indexing and builtins.
///
/// These either produce a value of type `T` or a `RuntimeError` describing
/// the failure. The error is turned into an [`Object::Error`] only once, at
/// the outermost [`Evaluator::eval`].
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Result type used while walking statements and expressions.
pub type Flow<T> = Result<T, Signal>;

/// Leaves the normal order of evaluation.
///
/// Both variants travel through the error channel, so `?` carries them out of
/// any expression position and stops the enclosing statement sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    /// A `return` on its way to the enclosing call or the program.
    Return(Object),
    /// A runtime error on its way to [`Evaluator::eval`].
    Error(RuntimeError),
}

impl From<RuntimeError> for Signal {
    fn from(error: RuntimeError) -> Self {
        Self::Error(error)
    }
}

/// Default limit on the number of nested user-function calls.
pub const MAX_CALL_DEPTH: usize = 2048;

/// Tunable evaluation settings.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EvalConfig {
    /// How many user-function calls may be active at once before evaluation
    /// fails with a call depth error.
    pub max_call_depth: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self { max_call_depth: MAX_CALL_DEPTH }
    }
}

/// Walks a syntax tree and computes its value.
///
/// The evaluator itself holds no bindings; those live in the [`Env`] passed to
/// [`Evaluator::eval`], so the same environment can be reused across many
/// programs (as the REPL does) while each evaluation keeps its own call depth
/// bookkeeping.
///
/// ## Usage
///
/// ```
/// use monkey::{
///     interpreter::{
///         evaluator::core::{EvalConfig, Evaluator},
///         object::{core::Object, environment::Environment},
///     },
///     parse,
/// };
///
/// let (program, errors) = parse("let twice = fn(f, x) { f(f(x)) }; twice(fn(n) { n * 3 }, 2)");
/// assert!(errors.is_empty());
///
/// let mut evaluator = Evaluator::with_config(EvalConfig { max_call_depth: 16 });
/// let env = Environment::root();
///
/// assert_eq!(evaluator.eval(&program, &env), Object::Integer(18));
/// ```
#[derive(Debug, Default)]
pub struct Evaluator {
    config: EvalConfig,
    depth:  usize,
}

/// Evaluates `program` in `env` with the default settings.
///
/// Runtime errors come back as [`Object::Error`]; the process is never
/// aborted.
///
/// # Example
/// ```
/// use monkey::{
///     interpreter::{
///         evaluator::core::eval,
///         object::{core::Object, environment::Environment},
///     },
///     parse,
/// };
///
/// let (program, _) = parse("5 + true; 10;");
///
/// assert_eq!(eval(&program, &Environment::root()),
///            Object::Error("type mismatch: INTEGER + BOOLEAN".to_string()));
/// ```
#[must_use]
pub fn eval(program: &Program, env: &Env) -> Object {
    Evaluator::new().eval(program, env)
}

impl Evaluator {
    /// Creates an evaluator with the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an evaluator with the given settings.
    #[must_use]
    pub const fn with_config(config: EvalConfig) -> Self {
        Self { config,
               depth: 0 }
    }

    /// The settings this evaluator runs with.
    #[must_use]
    pub const fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Evaluates a whole program.
    ///
    /// Statements run in order. The value of the program is the value of its
    /// last statement, or `null` if it has none. A top-level `return` stops
    /// the program and yields the returned value. A runtime error stops the
    /// program and is returned as [`Object::Error`].
    pub fn eval(&mut self, program: &Program, env: &Env) -> Object {
        self.depth = 0;

        match self.eval_program(program, env) {
            Ok(value) => value,
            Err(error) => {
                debug!(%error, "evaluation failed");
                Object::Error(error.to_string())
            },
        }
    }

    fn eval_program(&mut self, program: &Program, env: &Env) -> EvalResult<Object> {
        let mut result = NULL;

        for statement in &program.statements {
            result = match self.eval_statement(statement, env) {
                Ok(value) => value,
                Err(Signal::Return(value)) => return Ok(value),
                Err(Signal::Error(error)) => return Err(error),
            };
        }

        Ok(result)
    }

    /// Evaluates the statements of a block in order.
    ///
    /// A [`Signal`] stops the block and is passed on untouched so that a
    /// `return` can leave any number of nested blocks; it is caught at the
    /// enclosing call or at the program.
    pub(crate) fn eval_block(&mut self, block: &BlockStatement, env: &Env) -> Flow<Object> {
        let mut result = NULL;

        for statement in &block.statements {
            result = self.eval_statement(statement, env)?;
        }

        Ok(result)
    }

    /// Evaluates a single statement.
    ///
    /// A `let` binds its value in the innermost frame of `env` and yields
    /// `null`. A `return` raises [`Signal::Return`].
    pub fn eval_statement(&mut self, statement: &Statement, env: &Env) -> Flow<Object> {
        trace!(%statement, "eval statement");

        match statement {
            Statement::Let { name, value } => {
                let value = self.eval_expression(value, env)?;
                env.borrow_mut().set(name.name.as_str(), value);
                Ok(NULL)
            },
            Statement::Return { value } => {
                let value = self.eval_expression(value, env)?;
                Err(Signal::Return(value))
            },
            Statement::Expression(expression) => self.eval_expression(expression, env),
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant: literals, identifiers, prefix
    /// and infix operations, conditionals, function literals, calls, arrays,
    /// indexing and hash literals.
    pub fn eval_expression(&mut self, expression: &Expression, env: &Env) -> Flow<Object> {
        ensure_sufficient_stack(|| -> Flow<Object> {
            match expression {
                Expression::Integer(value) => Ok(Object::Integer(*value)),
                Expression::String(value) => Ok(Object::from(value.as_str())),
                Expression::Boolean(value) => Ok(Object::from_native_bool(*value)),
                Expression::Identifier(identifier) => {
                    Self::eval_identifier(&identifier.name, env).map_err(Signal::from)
                },
                Expression::Prefix { op, right } => {
                    let right = self.eval_expression(right, env)?;
                    Self::eval_prefix(*op, &right).map_err(Signal::from)
                },
                Expression::Infix { left, op, right } => {
                    let left = self.eval_expression(left, env)?;
                    let right = self.eval_expression(right, env)?;
                    Self::eval_infix(*op, &left, &right).map_err(Signal::from)
                },
                Expression::If { condition,
                                 consequence,
                                 alternative, } => {
                    let condition = self.eval_expression(condition, env)?;

                    if condition.is_truthy() {
                        self.eval_block(consequence, env)
                    } else if let Some(alternative) = alternative {
                        self.eval_block(alternative, env)
                    } else {
                        Ok(NULL)
                    }
                },
                Expression::Function(literal) => {
                    Ok(Object::Function(Rc::new(Function { literal: Rc::clone(literal),
                                                           env:     Rc::clone(env), })))
                },
                Expression::Call { function, arguments } => {
                    let function = self.eval_expression(function, env)?;
                    let arguments = self.eval_expressions(arguments, env)?;
                    self.apply_function(&function, arguments)
                },
                Expression::Array(elements) => Ok(Object::from(self.eval_expressions(elements, env)?)),
                Expression::Index { left, index } => {
                    let left = self.eval_expression(left, env)?;
                    let index = self.eval_expression(index, env)?;
                    Self::eval_index(&left, &index).map_err(Signal::from)
                },
                Expression::Hash(pairs) => self.eval_hash_literal(pairs, env),
            }
        })
    }

    /// Evaluates expressions left to right, stopping at the first signal.
    pub(crate) fn eval_expressions(&mut self,
                                   expressions: &[Expression],
                                   env: &Env)
                                   -> Flow<Vec<Object>> {
        expressions.iter()
                   .map(|expression| self.eval_expression(expression, env))
                   .collect()
    }

    /// Resolves a name through the scope chain, then the builtin table.
    fn eval_identifier(name: &str, env: &Env) -> EvalResult<Object> {
        if let Some(value) = env.borrow().get(name) {
            return Ok(value);
        }

        lookup_builtin(name).map(Object::Builtin)
                            .ok_or_else(|| RuntimeError::IdentifierNotFound { name: name.to_string() })
    }

    /// Enters a user-function call, failing if the depth limit is reached.
    pub(crate) fn enter_call(&mut self) -> EvalResult<()> {
        if self.depth >= self.config.max_call_depth {
            return Err(RuntimeError::CallDepthExceeded { limit: self.config.max_call_depth });
        }

        self.depth += 1;
        Ok(())
    }

    /// Leaves a user-function call.
    pub(crate) fn exit_call(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
