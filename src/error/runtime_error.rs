use crate::interpreter::lexer::Token;

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during evaluation.
///
/// Every variant keeps the token that triggered it: the operator for type
/// errors, the identifier for lookups.
pub enum RuntimeError {
    /// A unary operator needed a number.
    OperandMustBeNumber {
        /// The operator token.
        operator: Token,
    },
    /// A binary arithmetic or comparison operator needed two numbers.
    OperandsMustBeNumbers {
        /// The operator token.
        operator: Token,
    },
    /// `+` got something other than two numbers or two strings.
    InvalidPlusOperands {
        /// The operator token.
        operator: Token,
    },
    /// A variable was read before any declaration bound it.
    UndefinedVariable {
        /// The identifier token.
        name: Token,
    },
}

impl RuntimeError {
    /// The token the error is attributed to.
    #[must_use]
    pub const fn token(&self) -> &Token {
        match self {
            Self::OperandMustBeNumber { operator }
            | Self::OperandsMustBeNumbers { operator }
            | Self::InvalidPlusOperands { operator } => operator,
            Self::UndefinedVariable { name } => name,
        }
    }

    /// The source line of the offending token.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.token().line
    }

    /// The human-readable message, without the line suffix.
    ///
    /// ## Example
    /// ```
    /// use treelox::{
    ///     error::RuntimeError,
    ///     interpreter::lexer::{Token, TokenType},
    /// };
    ///
    /// let name = Token::new(TokenType::Identifier, "y", None, 2);
    /// let error = RuntimeError::UndefinedVariable { name };
    ///
    /// assert_eq!(error.message(), "Undefined variable 'y'.");
    /// assert_eq!(error.to_string(), "Undefined variable 'y'.\n[line 2]");
    /// ```
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::OperandMustBeNumber { .. } => "Operand must be a number.".to_string(),
            Self::OperandsMustBeNumbers { .. } => "Operands must be a number.".to_string(),
            Self::InvalidPlusOperands { .. } => "Plus requires numbers or strings.".to_string(),
            Self::UndefinedVariable { name } => format!("Undefined variable '{}'.", name.lexeme),
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n[line {}]", self.message(), self.line())
    }
}

impl std::error::Error for RuntimeError {}
