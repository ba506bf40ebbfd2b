/// Binary operator evaluation logic.
///
/// Handles arithmetic, string concatenation, comparisons and equality.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements numeric negation and logical NOT.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the `Interpreter`, statement execution and expression dispatch.
pub mod core;

/// Operand checks shared by the operator rules.
pub mod utils;
