/// Program entry point and expression entry point.
///
/// Runs the statement loop, reports syntax errors and resynchronizes after
/// each one.
pub mod core;

/// Unary and primary expressions.
///
/// Handles prefix `-` and `!`, literals, variables and parenthesized groups.
pub mod unary;

/// Binary operator levels.
///
/// Equality, comparison, term and factor, all left-associative.
pub mod binary;

/// Statement rules.
///
/// Variable declarations, `print` statements and expression statements.
pub mod statement;

/// Token-stream helpers shared by every rule.
pub mod utils;
