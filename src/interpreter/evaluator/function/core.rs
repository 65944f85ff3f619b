use tracing::debug;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator, Flow, Signal},
            function::{builtin, print},
        },
        object::{
            core::{Function, Object},
            environment::Environment,
        },
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and returns a new
/// value wrapped in `EvalResult`.
type BuiltinFn = fn(&[Object]) -> EvalResult<Object>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `Any` means the builtin accepts any number of arguments.
#[derive(Debug, Clone, Copy)]
enum Arity {
    Exact(usize),
    Any,
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (metadata, also the payload of [`Object::Builtin`]),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// A native function callable from programs.
        #[derive(Debug)]
        pub struct BuiltinDef {
            /// The name the function is bound to.
            pub name: &'static str,
            arity:    Arity,
            func:     BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of every builtin function, in lookup order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "len"   => { arity: Arity::Exact(1), func: builtin::len },
    "first" => { arity: Arity::Exact(1), func: builtin::first },
    "last"  => { arity: Arity::Exact(1), func: builtin::last },
    "rest"  => { arity: Arity::Exact(1), func: builtin::rest },
    "push"  => { arity: Arity::Exact(2), func: builtin::push },
    "puts"  => { arity: Arity::Any, func: print::puts },
}

impl Arity {
    /// Checks the given argument count against this arity constraint.
    const fn check(self, got: usize) -> EvalResult<()> {
        match self {
            Self::Exact(want) if got != want => {
                Err(RuntimeError::BuiltinArgumentCount { got, want })
            },
            Self::Exact(_) | Self::Any => Ok(()),
        }
    }
}

impl BuiltinDef {
    /// Invokes the builtin after checking the argument count.
    ///
    /// # Errors
    /// Returns `RuntimeError::BuiltinArgumentCount` for a wrong number of
    /// arguments, or whatever error the builtin itself reports.
    pub fn call(&self, args: &[Object]) -> EvalResult<Object> {
        self.arity.check(args.len())?;
        (self.func)(args)
    }
}

/// Finds the builtin bound to `name`.
///
/// # Example
/// ```
/// use monkey::interpreter::evaluator::function::core::lookup_builtin;
///
/// assert_eq!(lookup_builtin("len").map(|b| b.name), Some("len"));
/// assert!(lookup_builtin("print").is_none());
/// ```
#[must_use]
pub fn lookup_builtin(name: &str) -> Option<&'static BuiltinDef> {
    BUILTIN_TABLE.iter().find(|b| b.name == name)
}

impl Evaluator {
    /// Calls an evaluated callee with evaluated arguments.
    ///
    /// Builtins are invoked directly. User functions get a fresh frame,
    /// enclosed by the environment they captured, with each parameter bound to
    /// the matching argument. A `return` inside the body ends the call and its
    /// value becomes the value of the call.
    ///
    /// # Errors
    /// Raises [`Signal::Error`] for:
    /// - `NotAFunction` when the callee is not callable.
    /// - `ArgumentCountMismatch` when a user function gets the wrong number of
    ///   arguments.
    /// - `CallDepthExceeded` when too many calls are already active.
    /// - Any error raised while evaluating the body.
    pub(crate) fn apply_function(&mut self,
                                 function: &Object,
                                 arguments: Vec<Object>)
                                 -> Flow<Object> {
        match function {
            Object::Function(function) => self.call_user_function(function, arguments),
            Object::Builtin(builtin) => {
                debug!(name = builtin.name, args = arguments.len(), "call builtin");
                builtin.call(&arguments).map_err(Signal::from)
            },
            other => Err(RuntimeError::NotAFunction { kind: other.object_type() }.into()),
        }
    }

    fn call_user_function(&mut self,
                          function: &Function,
                          arguments: Vec<Object>)
                          -> Flow<Object> {
        let parameters = &function.literal.parameters;

        if parameters.len() != arguments.len() {
            return Err(RuntimeError::ArgumentCountMismatch { want: parameters.len(),
                                                             got:  arguments.len(), }.into());
        }

        let env = Environment::enclosed(&function.env);
        {
            let mut frame = env.borrow_mut();
            for (parameter, argument) in parameters.iter().zip(arguments) {
                frame.set(parameter.name.as_str(), argument);
            }
        }

        self.enter_call()?;
        debug!(function = %function.literal, "apply function");
        let result = self.eval_block(&function.literal.body, &env);
        self.exit_call();

        match result {
            Ok(value) | Err(Signal::Return(value)) => Ok(value),
            Err(error) => Err(error),
        }
    }
}
