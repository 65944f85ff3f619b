/// Parser state, the program loop and precedence climbing.
///
/// Holds the current and next token, advances explicitly and collects
/// diagnostics. `parse_expression` implements the Pratt loop.
pub mod core;

/// Statement parsing.
///
/// `let`, `return`, expression statements and `{ ... }` blocks.
pub mod statement;

/// Expressions that start with a token.
///
/// Literals, identifiers, prefix operators, grouping, `if`, function literals,
/// arrays and hashes.
pub mod prefix;

/// Expressions that continue a left operand.
///
/// Binary operators, calls and index expressions.
pub mod infix;

/// Shared helpers: comma separated lists and token expectations.
pub mod utils;
