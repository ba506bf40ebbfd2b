use crate::error::{RuntimeError, SyntaxError};

/// Receives diagnostics from every phase.
///
/// Reporting is fire-and-forget. Implementations keep the "had error" and
/// "had runtime error" flags the driver uses to decide whether to execute a
/// program and which exit code to use.
pub trait ErrorReporter {
    /// Reports a scan or parse error.
    ///
    /// # Parameters
    /// - `line`: Source line of the error.
    /// - `location`: Where on the line, e.g. `" at ';'"` or `" at end"`. May be
    ///   empty.
    /// - `message`: The error message.
    fn report_error(&mut self, line: usize, location: &str, message: &str);

    /// Reports an error raised during evaluation.
    fn report_runtime_error(&mut self, error: &RuntimeError);

    /// Whether a scan or parse error was reported since the last reset.
    fn had_error(&self) -> bool;

    /// Whether a runtime error was ever reported.
    fn had_runtime_error(&self) -> bool;

    /// Clears the syntax error flag. The runtime error flag is sticky.
    fn reset(&mut self);

    /// Reports a [`SyntaxError`] through [`ErrorReporter::report_error`].
    fn report_syntax_error(&mut self, error: &SyntaxError) {
        self.report_error(error.line(), &error.location(), &error.message());
    }
}

/// Receives the lines produced by `print` statements.
pub trait Output {
    /// Emits one line of program output.
    fn write(&mut self, line: &str);
}

/// Formats a scan or parse diagnostic the way every reporter prints it.
///
/// # Example
/// ```
/// use treelox::interpreter::report::format_error;
///
/// assert_eq!(format_error(1, " at end", "Expect expression."),
///            "[line 1] Error at end: Expect expression.");
/// ```
#[must_use]
pub fn format_error(line: usize, location: &str, message: &str) -> String {
    format!("[line {line}] Error{location}: {message}")
}

/// Reports diagnostics to standard error.
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    had_error:         bool,
    had_runtime_error: bool,
}

impl ErrorReporter for ConsoleReporter {
    fn report_error(&mut self, line: usize, location: &str, message: &str) {
        log::trace!("syntax error on line {line}");
        eprintln!("{}", format_error(line, location, message));
        self.had_error = true;
    }

    fn report_runtime_error(&mut self, error: &RuntimeError) {
        log::trace!("runtime error on line {}", error.line());
        eprintln!("{error}");
        self.had_runtime_error = true;
    }

    fn had_error(&self) -> bool {
        self.had_error
    }

    fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }

    fn reset(&mut self) {
        self.had_error = false;
    }
}

/// Records diagnostics in memory.
///
/// Each report becomes one entry of `messages`, formatted exactly as
/// [`ConsoleReporter`] would print it.
#[derive(Debug, Default)]
pub struct Diagnostics {
    /// Every diagnostic reported so far, oldest first.
    pub messages:      Vec<String>,
    had_error:         bool,
    had_runtime_error: bool,
}

impl ErrorReporter for Diagnostics {
    fn report_error(&mut self, line: usize, location: &str, message: &str) {
        self.messages.push(format_error(line, location, message));
        self.had_error = true;
    }

    fn report_runtime_error(&mut self, error: &RuntimeError) {
        self.messages.push(error.to_string());
        self.had_runtime_error = true;
    }

    fn had_error(&self) -> bool {
        self.had_error
    }

    fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }

    fn reset(&mut self) {
        self.had_error = false;
    }
}

/// Writes program output to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stdout;

impl Output for Stdout {
    fn write(&mut self, line: &str) {
        println!("{line}");
    }
}

impl Output for Vec<String> {
    fn write(&mut self, line: &str) {
        self.push(line.to_string());
    }
}
