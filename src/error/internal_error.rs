#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents inconsistencies inside the interpreter itself.
///
/// None of these can be produced from source text that went through the
/// parser. They exist for hand-built trees carrying operator tokens the
/// evaluator has no rule for.
pub enum InternalError {
    /// A unary node carried an operator other than `-` or `!`.
    UnknownUnaryOperator {
        /// The operator lexeme.
        lexeme: String,
        /// The source line of the operator.
        line:   usize,
    },
    /// A binary node carried an operator with no evaluation rule.
    UnknownBinaryOperator {
        /// The operator lexeme.
        lexeme: String,
        /// The source line of the operator.
        line:   usize,
    },
}

impl std::fmt::Display for InternalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownUnaryOperator { lexeme, line } => {
                write!(f, "Internal error on line {line}: Unknown unary operator '{lexeme}'.")
            },
            Self::UnknownBinaryOperator { lexeme, line } => {
                write!(f, "Internal error on line {line}: Unknown binary operator '{lexeme}'.")
            },
        }
    }
}

impl std::error::Error for InternalError {}
