use crate::{
    ast::{Expr, Statement},
    error::{EvalError, InternalError},
    interpreter::{
        environment::Environment,
        report::{ErrorReporter, Output},
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// [`EvalError`] describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Walks statements and expressions against a binding environment.
///
/// ## Usage
///
/// An `Interpreter` is created once and reused across runs; its single global
/// [`Environment`] lives as long as the interpreter does, so a variable
/// declared in one run is visible in the next.
#[derive(Debug, Default)]
pub struct Interpreter {
    environment: Environment,
}

impl Interpreter {
    /// Creates an interpreter with an empty global scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The global scope.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Executes a program.
    ///
    /// Statements run in order. The first runtime error is reported to
    /// `reporter` and stops the run; it is not returned.
    ///
    /// # Parameters
    /// - `statements`: The program.
    /// - `reporter`: Receives the runtime error, if any.
    /// - `output`: Receives the lines written by `print`.
    ///
    /// # Errors
    /// Returns an `InternalError` when the tree holds a node the evaluator
    /// has no rule for. Callers should treat it as fatal.
    ///
    /// # Example
    /// ```
    /// use treelox::interpreter::{
    ///     evaluator::core::Interpreter,
    ///     lexer::scan_tokens,
    ///     parser::core::parse,
    ///     report::{Diagnostics, ErrorReporter},
    /// };
    ///
    /// let mut diagnostics = Diagnostics::default();
    /// let tokens = scan_tokens("var x = 1 + 2; print x; print y; print x;", &mut diagnostics);
    /// let statements = parse(&tokens, &mut diagnostics);
    ///
    /// let mut output: Vec<String> = Vec::new();
    /// Interpreter::new().interpret(&statements, &mut diagnostics, &mut output).unwrap();
    ///
    /// assert_eq!(output, ["3"]);
    /// assert!(diagnostics.had_runtime_error());
    /// assert_eq!(diagnostics.messages, ["Undefined variable 'y'.\n[line 1]"]);
    /// ```
    pub fn interpret(&mut self,
                     statements: &[Statement],
                     reporter: &mut dyn ErrorReporter,
                     output: &mut dyn Output)
                     -> Result<(), InternalError> {
        for statement in statements {
            match self.execute(statement, output) {
                Ok(()) => {},
                Err(EvalError::Runtime(error)) => {
                    reporter.report_runtime_error(&error);
                    return Ok(());
                },
                Err(EvalError::Internal(error)) => return Err(error),
            }
        }
        Ok(())
    }

    /// Executes a single statement.
    ///
    /// - Expression statements are evaluated and the result discarded.
    /// - `print` writes the display form of its value to `output`.
    /// - `var` binds the name to its initializer, or to `nil` without one.
    pub fn execute(&mut self, statement: &Statement, output: &mut dyn Output) -> EvalResult<()> {
        match statement {
            Statement::Expression(expr) => {
                self.eval(expr)?;
            },
            Statement::Print(expr) => {
                let value = self.eval(expr)?;
                output.write(&value.to_string());
            },
            Statement::Var { name, initializer } => {
                let value = match initializer {
                    Some(expr) => self.eval(expr)?,
                    None => Value::Nil,
                };
                log::trace!("define {} = {value}", name.lexeme);
                self.environment.define(&name.lexeme, value);
            },
        }
        Ok(())
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Both operands of a binary node are evaluated, left first, before the
    /// operator checks their types.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal(value) => Ok(Value::from(value)),
            Expr::Grouping(inner) => self.eval(inner),
            Expr::Variable(name) => Ok(self.environment.get(name)?.clone()),
            Expr::Unary { operator, right } => {
                let right = self.eval(right)?;
                Self::eval_unary(operator, &right)
            },
            Expr::Binary { left, operator, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(operator, &left, &right)
            },
        }
    }
}
