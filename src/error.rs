/// Internal consistency failures.
///
/// These are not user-facing errors. They signal an AST the evaluator has no
/// rule for and are returned to the driver, which treats them as fatal.
pub mod internal_error;
/// Runtime errors.
///
/// Raised during evaluation when an operand has the wrong type or a variable
/// is read before it was declared. Each carries the offending token so the
/// report can name its line.
pub mod runtime_error;
/// Syntax errors.
///
/// Covers both scan-time problems (unexpected characters, unterminated
/// strings) and parse-time problems (missing tokens, unrecognized
/// expressions). All of them are recoverable: the scanner keeps scanning and
/// the parser resynchronizes at the next statement boundary.
pub mod syntax_error;

pub use internal_error::InternalError;
pub use runtime_error::RuntimeError;
pub use syntax_error::SyntaxError;

/// Failure raised while evaluating a single expression or statement.
///
/// The evaluator threads this through `?`. At the top of `interpret` the
/// runtime half is reported and swallowed while the internal half escapes to
/// the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// A user-facing runtime error.
    Runtime(RuntimeError),
    /// A programmer error in the interpreter itself.
    Internal(InternalError),
}

impl From<RuntimeError> for EvalError {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl From<InternalError> for EvalError {
    fn from(error: InternalError) -> Self {
        Self::Internal(error)
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Runtime(error) => write!(f, "{error}"),
            Self::Internal(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for EvalError {}
