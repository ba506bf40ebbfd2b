use crate::{
    error::RuntimeError,
    interpreter::{lexer::Token, value::Value},
};

/// Extracts the number behind a unary operand.
///
/// # Errors
/// `RuntimeError::OperandMustBeNumber` when `operand` is not a number.
pub fn number_operand(operator: &Token, operand: &Value) -> Result<f64, RuntimeError> {
    match operand {
        Value::Number(n) => Ok(*n),
        _ => Err(RuntimeError::OperandMustBeNumber { operator: operator.clone() }),
    }
}

/// Extracts the numbers behind both operands of a binary operator.
///
/// # Errors
/// `RuntimeError::OperandsMustBeNumbers` unless both operands are numbers.
pub fn number_operands(operator: &Token,
                       left: &Value,
                       right: &Value)
                       -> Result<(f64, f64), RuntimeError> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
        _ => Err(RuntimeError::OperandsMustBeNumbers { operator: operator.clone() }),
    }
}
