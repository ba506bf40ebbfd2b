use std::iter::Peekable;

use crate::{
    ast::{Expr, Statement},
    error::SyntaxError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_equality,
            statement::parse_declaration,
            utils::{is_at_end, synchronize},
        },
        report::ErrorReporter,
    },
};

/// Result type used by the parser.
///
/// An `Err` abandons the statement being parsed. It never travels past the
/// recovery loop in [`parse`].
pub type ParseResult<T> = Result<T, SyntaxError>;

/// How many groups and unary operators may enclose one another.
///
/// Deeper input is rejected with a syntax error before the recursive descent
/// can exhaust the stack. Trees built by the parser therefore also stay
/// shallow enough for the recursive evaluator and printer.
pub const MAX_NESTING: usize = 128;

/// Parses a whole program.
///
/// Declarations are parsed one after another until `EOF`. A syntax error is
/// reported to `reporter`, the parser resynchronizes at the next statement
/// boundary and carries on, so one malformed statement never hides the
/// errors or statements after it.
///
/// Statements that failed to parse are left out of the result. Callers must
/// treat the reporter's error flag as authoritative over the partial output.
///
/// # Parameters
/// - `tokens`: Scanned tokens, ending with `EOF`.
/// - `reporter`: Receives syntax errors.
///
/// # Returns
/// The successfully parsed statements, in source order.
///
/// # Example
/// ```
/// use treelox::interpreter::{
///     lexer::scan_tokens,
///     parser::core::parse,
///     report::{Diagnostics, ErrorReporter},
/// };
///
/// let mut diagnostics = Diagnostics::default();
/// let tokens = scan_tokens("print ; print 1;", &mut diagnostics);
/// let statements = parse(&tokens, &mut diagnostics);
///
/// assert_eq!(statements.len(), 1);
/// assert!(diagnostics.had_error());
/// assert_eq!(diagnostics.messages, ["[line 1] Error at ';': Expect expression."]);
/// ```
pub fn parse(tokens: &[Token], reporter: &mut dyn ErrorReporter) -> Vec<Statement> {
    let mut tokens = tokens.iter().peekable();
    let mut statements = Vec::new();

    while !is_at_end(&mut tokens) {
        match parse_declaration(&mut tokens) {
            Ok(statement) => statements.push(statement),
            Err(error) => {
                reporter.report_syntax_error(&error);
                synchronize(&mut tokens);
            },
        }
    }

    statements
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, equality, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := equality`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: How many groups and unary operators enclose this expression.
///   Statements start at `0`.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_equality(tokens, depth)
}
