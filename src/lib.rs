//! # treelox
//!
//! treelox is a tree-walking interpreter for the Lox scripting language.
//! Source text is scanned into tokens, parsed into statements by a
//! recursive-descent parser and executed directly against a binding
//! environment.
//!
//! The language currently covers expressions, `print` statements and global
//! variable declarations.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::InternalError,
    interpreter::{
        evaluator::core::Interpreter,
        lexer::scan_tokens,
        parser::core::parse,
        printer::print_statement,
        report::{ConsoleReporter, ErrorReporter, Output, Stdout},
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums that represent the
/// syntactic structure of a program as a tree. The tree is built by the
/// parser and traversed by the evaluator and the printer.
pub mod ast;
/// Provides error types for scanning, parsing and evaluation.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (syntax, runtime, internal).
/// - Attaches line numbers and offending lexemes for context.
/// - Implements `Display` in the exact format diagnostics are printed in.
pub mod error;
/// Orchestrates the phases of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and the reporting seams.
pub mod interpreter;
/// General utilities.
pub mod util;

/// Exit code for invalid command line usage.
pub const EX_USAGE: i32 = 64;
/// Exit code after a syntax error.
pub const EX_DATAERR: i32 = 65;
/// Exit code when the script file cannot be read.
pub const EX_NOINPUT: i32 = 66;
/// Exit code after a runtime error.
pub const EX_SOFTWARE: i32 = 70;

/// Switches that change what a run prints besides program output.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Write every scanned token to the output sink before parsing.
    pub dump_tokens: bool,
    /// Write every parsed statement in prefix form before executing.
    pub dump_ast:    bool,
}

/// An interpreter session.
///
/// The session owns one [`Interpreter`], and with it the single global
/// environment, for its whole lifetime. Successive calls to [`Lox::run`]
/// therefore see each other's variables, which is what the interactive
/// prompt relies on.
#[derive(Debug)]
pub struct Lox<R = ConsoleReporter, O = Stdout> {
    interpreter: Interpreter,
    reporter:    R,
    output:      O,
    options:     RunOptions,
}

impl Default for Lox {
    fn default() -> Self {
        Self::new(ConsoleReporter::default(), Stdout)
    }
}

impl<R: ErrorReporter, O: Output> Lox<R, O> {
    /// Creates a session reporting to `reporter` and printing to `output`.
    pub fn new(reporter: R, output: O) -> Self {
        Self { interpreter: Interpreter::new(),
               reporter,
               output,
               options: RunOptions::default() }
    }

    /// Replaces the session's run options.
    #[must_use]
    pub fn with_options(mut self, options: RunOptions) -> Self {
        self.options = options;
        self
    }

    /// Scans, parses and executes `source`.
    ///
    /// Nothing is executed when scanning or parsing reported an error. A
    /// runtime error is reported and stops the run, but is not returned.
    ///
    /// # Errors
    /// Returns an `InternalError` when the evaluator met a tree it has no
    /// rule for. The session should not be used afterwards.
    ///
    /// # Example
    /// ```
    /// use treelox::{Lox, interpreter::report::Diagnostics};
    ///
    /// let mut lox = Lox::new(Diagnostics::default(), Vec::new());
    /// lox.run("var greeting = \"hello\";").unwrap();
    /// lox.run("print greeting + \" world\";").unwrap();
    ///
    /// assert_eq!(lox.output(), &["hello world"]);
    /// assert_eq!(lox.exit_code(), None);
    /// ```
    pub fn run(&mut self, source: &str) -> Result<(), InternalError> {
        log::info!("Scanning...");
        let tokens = scan_tokens(source, &mut self.reporter);
        log::debug!("Tokens: {tokens:#?}");
        if self.options.dump_tokens {
            for token in &tokens {
                self.output.write(&token.to_string());
            }
        }

        log::info!("Parsing...");
        let statements = parse(&tokens, &mut self.reporter);
        if self.reporter.had_error() {
            return Ok(());
        }
        log::debug!("Statements: {statements:#?}");
        if self.options.dump_ast {
            for statement in &statements {
                self.output.write(&print_statement(statement));
            }
        }

        log::info!("Interpreting...");
        self.interpreter.interpret(&statements, &mut self.reporter, &mut self.output)
    }

    /// The process exit code the run history calls for.
    ///
    /// # Returns
    /// - `Some(EX_DATAERR)` after a syntax error,
    /// - `Some(EX_SOFTWARE)` after a runtime error,
    /// - `None` when everything succeeded.
    pub fn exit_code(&self) -> Option<i32> {
        if self.reporter.had_error() {
            Some(EX_DATAERR)
        } else if self.reporter.had_runtime_error() {
            Some(EX_SOFTWARE)
        } else {
            None
        }
    }

    /// Forgets earlier syntax errors so the next run can execute.
    pub fn reset_error(&mut self) {
        self.reporter.reset();
    }

    /// The diagnostic sink.
    pub const fn reporter(&self) -> &R {
        &self.reporter
    }

    /// The output sink.
    pub const fn output(&self) -> &O {
        &self.output
    }

    /// The interpreter, and through it the global environment.
    pub const fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }
}
