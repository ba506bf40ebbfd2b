/// The binding store variables live in.
///
/// A scope node mapping identifiers to values, with an optional enclosing
/// scope for lookups to fall through to.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks statements in order, evaluates expressions against
/// the environment, writes `print` output and stops at the first runtime
/// error.
///
/// # Responsibilities
/// - Applies the typing rules of every unary and binary operator.
/// - Defines and reads variables.
/// - Reports runtime errors such as type mismatches or undefined variables.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// carrying its kind, lexeme, decoded literal and source line. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Decodes number and string literals and recognizes keywords.
/// - Reports lexical errors for invalid or malformed input and keeps going.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with one function per grammar rule. Syntax
/// errors abandon the current statement only; the parser resynchronizes and
/// continues with the next one.
pub mod parser;
/// Renders trees in parenthesized prefix form for debugging.
pub mod printer;
/// Collaborator seams: where diagnostics and program output go.
pub mod report;
/// The value module defines the runtime data types for evaluation.
///
/// Numbers, strings, booleans and `nil`, plus the truthiness, equality and
/// display rules the evaluator relies on.
pub mod value;
