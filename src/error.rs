/// Parsing errors.
///
/// Defines the diagnostics the parser collects while turning tokens into a
/// syntax tree. Parsing never stops at the first one; every diagnostic is
/// recorded together with the line it was found on.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all errors that can be raised during evaluation. They are
/// surfaced to callers as `Object::Error` values carrying the rendered
/// message.
pub mod runtime_error;

pub use parse_error::{ParseError, ParseErrors};
pub use runtime_error::RuntimeError;
