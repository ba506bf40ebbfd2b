use crate::{
    error::{InternalError, RuntimeError},
    interpreter::{
        evaluator::{
            core::{EvalResult, Interpreter},
            utils::number_operands,
        },
        lexer::{Token, TokenType},
        value::Value,
    },
};

impl Interpreter {
    /// Evaluates a binary operation between two values.
    ///
    /// - `+` adds two numbers or concatenates two strings. Any other pairing
    ///   is an error; there is no coercion.
    /// - `-`, `*`, `/` and the relational operators need two numbers and
    ///   follow IEEE semantics, so dividing by zero yields an infinity or NaN.
    /// - `==` and `!=` use structural equality and accept any operands.
    ///
    /// # Parameters
    /// - `operator`: The operator token, used for error reporting.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use treelox::interpreter::{
    ///     evaluator::core::Interpreter,
    ///     lexer::{Token, TokenType},
    ///     value::Value,
    /// };
    ///
    /// let plus = Token::new(TokenType::Plus, "+", None, 1);
    ///
    /// let sum = Interpreter::eval_binary(&plus, &Value::Number(3.0), &Value::Number(4.0));
    /// assert_eq!(sum.unwrap(), Value::Number(7.0));
    ///
    /// let joined = Interpreter::eval_binary(&plus, &Value::from("1"), &Value::from("2"));
    /// assert_eq!(joined.unwrap(), Value::from("12"));
    ///
    /// let mixed = Interpreter::eval_binary(&plus, &Value::Number(1.0), &Value::from("2"));
    /// assert!(mixed.is_err());
    /// ```
    pub fn eval_binary(operator: &Token, left: &Value, right: &Value) -> EvalResult<Value> {
        match operator.kind {
            TokenType::Plus => match (left, right) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
                (Value::String(a), Value::String(b)) => Ok(Value::String(format!("{a}{b}"))),
                _ => Err(RuntimeError::InvalidPlusOperands { operator: operator.clone() }.into()),
            },

            TokenType::Minus => Self::eval_arithmetic(operator, left, right, |a, b| a - b),
            TokenType::Star => Self::eval_arithmetic(operator, left, right, |a, b| a * b),
            TokenType::Slash => Self::eval_arithmetic(operator, left, right, |a, b| a / b),

            TokenType::Greater => Self::eval_comparison(operator, left, right, |a, b| a > b),
            TokenType::GreaterEqual => Self::eval_comparison(operator, left, right, |a, b| a >= b),
            TokenType::Less => Self::eval_comparison(operator, left, right, |a, b| a < b),
            TokenType::LessEqual => Self::eval_comparison(operator, left, right, |a, b| a <= b),

            TokenType::EqualEqual => Ok(Value::Bool(left == right)),
            TokenType::BangEqual => Ok(Value::Bool(left != right)),

            _ => Err(InternalError::UnknownBinaryOperator { lexeme: operator.lexeme.clone(),
                                                           line:   operator.line, }.into()),
        }
    }

    /// Applies a numeric operator after checking both operands are numbers.
    fn eval_arithmetic(operator: &Token,
                       left: &Value,
                       right: &Value,
                       op: impl Fn(f64, f64) -> f64)
                       -> EvalResult<Value> {
        let (a, b) = number_operands(operator, left, right)?;
        Ok(Value::Number(op(a, b)))
    }

    /// Applies a relational operator after checking both operands are numbers.
    fn eval_comparison(operator: &Token,
                       left: &Value,
                       right: &Value,
                       op: impl Fn(f64, f64) -> bool)
                       -> EvalResult<Value> {
        let (a, b) = number_operands(operator, left, right)?;
        Ok(Value::Bool(op(a, b)))
    }
}
