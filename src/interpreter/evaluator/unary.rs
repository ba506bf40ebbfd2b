use crate::{
    error::InternalError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Interpreter},
            utils::number_operand,
        },
        lexer::{Token, TokenType},
        value::Value,
    },
};

impl Interpreter {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `-`: numeric negation. The operand must be a number.
    /// - `!`: logical NOT of the operand's truthiness.
    ///
    /// # Parameters
    /// - `operator`: The operator token, used for error reporting.
    /// - `right`: The evaluated operand.
    ///
    /// # Returns
    /// The computed `Value` wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use treelox::interpreter::{
    ///     evaluator::core::Interpreter,
    ///     lexer::{Token, TokenType},
    ///     value::Value,
    /// };
    ///
    /// let minus = Token::new(TokenType::Minus, "-", None, 1);
    /// let v = Interpreter::eval_unary(&minus, &Value::Number(5.0)).unwrap();
    /// assert_eq!(v, Value::Number(-5.0));
    ///
    /// let bang = Token::new(TokenType::Bang, "!", None, 1);
    /// let v = Interpreter::eval_unary(&bang, &Value::Nil).unwrap();
    /// assert_eq!(v, Value::Bool(true));
    /// ```
    pub fn eval_unary(operator: &Token, right: &Value) -> EvalResult<Value> {
        match operator.kind {
            TokenType::Minus => Ok(Value::Number(-number_operand(operator, right)?)),
            TokenType::Bang => Ok(Value::Bool(!right.is_truthy())),
            _ => Err(InternalError::UnknownUnaryOperator { lexeme: operator.lexeme.clone(),
                                                          line:   operator.line, }.into()),
        }
    }
}
