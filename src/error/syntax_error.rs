#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during scanning or parsing.
pub enum SyntaxError {
    /// The scanner found a character that starts no token.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A string literal was still open when the input ended.
    UnterminatedString {
        /// The line on which scanning stopped.
        line: usize,
    },
    /// The parser expected something else at this token.
    UnexpectedToken {
        /// The lexeme of the token encountered.
        lexeme:  String,
        /// What the parser expected instead.
        message: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// The parser ran into the end of input.
    UnexpectedEndOfInput {
        /// What the parser expected instead.
        message: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl SyntaxError {
    /// Gets the source line of `self`.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. }
            | Self::UnterminatedString { line }
            | Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line, .. } => *line,
        }
    }

    /// Describes where on the line the error sits.
    ///
    /// Scan errors have no location. Parse errors point at the offending
    /// lexeme, or at the end of input.
    ///
    /// ## Example
    /// ```
    /// use treelox::error::SyntaxError;
    ///
    /// let error = SyntaxError::UnexpectedToken { lexeme:  ";".to_string(),
    ///                                            message: "Expect expression.".to_string(),
    ///                                            line:    3, };
    ///
    /// assert_eq!(error.location(), " at ';'");
    /// assert_eq!(error.to_string(), "[line 3] Error at ';': Expect expression.");
    /// ```
    #[must_use]
    pub fn location(&self) -> String {
        match self {
            Self::UnexpectedCharacter { .. } | Self::UnterminatedString { .. } => String::new(),
            Self::UnexpectedToken { lexeme, .. } => format!(" at '{lexeme}'"),
            Self::UnexpectedEndOfInput { .. } => " at end".to_string(),
        }
    }

    /// The human-readable message, without line or location.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::UnexpectedCharacter { character, .. } => {
                format!("Unexpected character: {character}")
            },
            Self::UnterminatedString { .. } => "Unterminated string.".to_string(),
            Self::UnexpectedToken { message, .. } | Self::UnexpectedEndOfInput { message, .. } => {
                message.clone()
            },
        }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[line {}] Error{}: {}", self.line(), self.location(), self.message())
    }
}

impl std::error::Error for SyntaxError {}
