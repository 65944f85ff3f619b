/// The evaluator module executes syntax trees and computes results.
///
/// The evaluator walks the tree produced by the parser, evaluates statements
/// and expressions, applies operators and functions, manages bindings through
/// environments and produces a value.
///
/// # Responsibilities
/// - Evaluates every node kind the parser can produce.
/// - Applies closures and builtin functions, guarding the call depth.
/// - Reports runtime errors such as type mismatches or unknown identifiers.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// corresponding to a meaningful language element such as a number, an
/// identifier, an operator, a delimiter or a keyword. This is the first stage
/// of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, literal text
///   and source line.
/// - Handles integer and string literals, identifiers, keywords and operators.
/// - Turns unknown characters into illegal tokens instead of failing.
pub mod lexer;
/// The object module defines the runtime data model.
///
/// Values, hash keys and the environments that bind names to values.
pub mod object;
/// The parser module builds the syntax tree from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// a tree that represents the syntactic structure of statements and
/// expressions, collecting a diagnostic for every malformed statement.
pub mod parser;
