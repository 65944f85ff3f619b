//! # monkey
//!
//! monkey is a tree-walking interpreter for a small, dynamically typed
//! expression language with integers, strings, booleans, arrays, hashes and
//! first-class closures.
//!
//! Source text flows through three stages: the [lexer] turns it into tokens,
//! the [parser] builds a syntax tree and collects diagnostics, and the
//! [evaluator] walks the tree against a chain of environments.
//!
//! [lexer]: interpreter::lexer
//! [parser]: interpreter::parser
//! [evaluator]: interpreter::evaluator

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    missing_docs,
)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

use crate::{
    ast::Program,
    error::{ParseError, ParseErrors},
    interpreter::{
        evaluator::core::Evaluator,
        object::{core::Object, environment::Env},
        parser::core::Parser,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the statement and expression types that represent
/// programs as a tree, together with their canonical, fully parenthesized
/// text form. The tree is built by the parser and walked by the evaluator.
pub mod ast;
/// Provides the error types for parsing and evaluation.
///
/// Parse diagnostics are collected into a list and reported together; runtime
/// errors stop evaluation and surface as an error value.
///
/// # Responsibilities
/// - Defines one error enum per phase (parser, evaluator).
/// - Attaches line numbers to diagnostics for user feedback.
/// - Produces the exact messages shown to users through `Display`.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and the runtime value
/// model.
pub mod interpreter;
/// General utilities shared by the parser and the evaluator.
pub mod util;

/// Parses `source` into a program and its diagnostics.
///
/// The program is always returned; statements that failed to parse are left
/// out of it. Callers should only evaluate the program when the diagnostic
/// list is empty.
///
/// # Examples
/// ```
/// use monkey::parse;
///
/// let (program, errors) = parse("-a * b");
/// assert!(errors.is_empty());
/// assert_eq!(program.to_string(), "((-a) * b)");
///
/// let (_, errors) = parse("let = 5;");
/// assert_eq!(errors[0].to_string(), "expected next token to be IDENT, got = instead");
/// ```
#[must_use]
pub fn parse(source: &str) -> (Program, Vec<ParseError>) {
    let mut parser = Parser::from_source(source);
    let program = parser.parse_program();

    (program, parser.into_errors())
}

/// Parses and evaluates `source` in `env`.
///
/// Bindings made by the program stay in `env`, so calling `run` repeatedly
/// with the same environment behaves like one long session.
///
/// # Errors
/// Returns every parse diagnostic if the source does not parse cleanly; the
/// program is not evaluated in that case. Runtime errors are not Rust errors:
/// they come back as `Ok(Object::Error(..))`.
///
/// # Examples
/// ```
/// use monkey::{
///     interpreter::{evaluator::core::Evaluator, object::{core::Object, environment::Environment}},
///     run,
/// };
///
/// let env = Environment::root();
/// let mut evaluator = Evaluator::new();
///
/// run("let x = 5;", &env, &mut evaluator).unwrap();
/// assert_eq!(run("x * 2", &env, &mut evaluator), Ok(Object::Integer(10)));
///
/// let errors = run("let 5;", &env, &mut evaluator).unwrap_err();
/// assert_eq!(errors.to_string(),
///            "parser errors:\n\tline 1: expected next token to be IDENT, got INT instead");
/// ```
pub fn run(source: &str, env: &Env, evaluator: &mut Evaluator) -> Result<Object, ParseErrors> {
    let (program, errors) = parse(source);

    if !errors.is_empty() {
        return Err(ParseErrors(errors));
    }

    Ok(evaluator.eval(&program, env))
}
