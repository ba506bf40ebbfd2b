use logos::{Lexer, Logos};

use crate::{error::SyntaxError, interpreter::report::ErrorReporter, util::num::format_literal};

/// The category of a lexical token.
///
/// The lexer is derived from this enum. Helper variants at the bottom drive
/// whitespace, newline and comment handling and are never emitted.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(extras = LexerExtras)]
#[logos(error = LexError)]
pub enum TokenType {
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `{`
    #[token("{")]
    LeftBrace,
    /// `}`
    #[token("}")]
    RightBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `-`
    #[token("-")]
    Minus,
    /// `+`
    #[token("+")]
    Plus,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `/`
    #[token("/")]
    Slash,
    /// `*`
    #[token("*")]
    Star,

    /// `!`
    #[token("!")]
    Bang,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `=`
    #[token("=")]
    Equal,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,

    /// Identifier tokens such as `x` or `_count`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// String literals. Embedded newlines are allowed and counted.
    #[regex(r#""[^"]*""#, string, allow_greedy = true)]
    #[regex(r#""[^"]*"#, unterminated_string, allow_greedy = true)]
    String,
    /// Number literals such as `42` or `3.14`. A trailing `.` is not part of
    /// the number.
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    /// `and`
    #[token("and")]
    And,
    /// `class`
    #[token("class")]
    Class,
    /// `else`
    #[token("else")]
    Else,
    /// `false`
    #[token("false")]
    False,
    /// `fun`
    #[token("fun")]
    Fun,
    /// `for`
    #[token("for")]
    For,
    /// `if`
    #[token("if")]
    If,
    /// `nil`
    #[token("nil")]
    Nil,
    /// `or`
    #[token("or")]
    Or,
    /// `print`
    #[token("print")]
    Print,
    /// `return`
    #[token("return")]
    Return,
    /// `super`
    #[token("super")]
    Super,
    /// `this`
    #[token("this")]
    This,
    /// `true`
    #[token("true")]
    True,
    /// `var`
    #[token("var")]
    Var,
    /// `while`
    #[token("while")]
    While,

    /// End of input. Appended by [`scan_tokens`], never matched.
    Eof,

    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Line breaks.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and carriage returns.
    #[regex(r"[ \t\r]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::LeftParen => "LEFT_PAREN",
            Self::RightParen => "RIGHT_PAREN",
            Self::LeftBrace => "LEFT_BRACE",
            Self::RightBrace => "RIGHT_BRACE",
            Self::Comma => "COMMA",
            Self::Dot => "DOT",
            Self::Minus => "MINUS",
            Self::Plus => "PLUS",
            Self::Semicolon => "SEMICOLON",
            Self::Slash => "SLASH",
            Self::Star => "STAR",
            Self::Bang => "BANG",
            Self::BangEqual => "BANG_EQUAL",
            Self::Equal => "EQUAL",
            Self::EqualEqual => "EQUAL_EQUAL",
            Self::Greater => "GREATER",
            Self::GreaterEqual => "GREATER_EQUAL",
            Self::Less => "LESS",
            Self::LessEqual => "LESS_EQUAL",
            Self::Identifier => "IDENTIFIER",
            Self::String => "STRING",
            Self::Number => "NUMBER",
            Self::And => "AND",
            Self::Class => "CLASS",
            Self::Else => "ELSE",
            Self::False => "FALSE",
            Self::Fun => "FUN",
            Self::For => "FOR",
            Self::If => "IF",
            Self::Nil => "NIL",
            Self::Or => "OR",
            Self::Print => "PRINT",
            Self::Return => "RETURN",
            Self::Super => "SUPER",
            Self::This => "THIS",
            Self::True => "TRUE",
            Self::Var => "VAR",
            Self::While => "WHILE",
            Self::Eof => "EOF",
            Self::Comment => "COMMENT",
            Self::NewLine => "NEWLINE",
            Self::Ignored => "IGNORED",
        };
        write!(f, "{name}")
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for tokens and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Failures the lexer can hit on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LexError {
    /// No token starts with the current character.
    #[default]
    UnexpectedCharacter,
    /// A `"` was never closed.
    UnterminatedString,
}

/// The decoded value of a literal token.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// The text strictly between the quotes, without escape processing.
    String(String),
    /// The decoded number.
    Number(f64),
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s}"),
            Self::Number(n) => write!(f, "{}", format_literal(*n)),
        }
    }
}

/// A scanned token.
///
/// Tokens are only produced by [`scan_tokens`] and never change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The token category.
    pub kind:    TokenType,
    /// The exact source text the token was scanned from.
    pub lexeme:  String,
    /// The decoded value, present for `STRING` and `NUMBER` tokens only.
    pub literal: Option<Literal>,
    /// The 1-based source line.
    pub line:    usize,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(kind: TokenType, lexeme: &str, literal: Option<Literal>, line: usize) -> Self {
        Self { kind,
               lexeme: lexeme.to_string(),
               literal,
               line }
    }

    /// Creates the end-of-input token.
    #[must_use]
    pub fn eof(line: usize) -> Self {
        Self::new(TokenType::Eof, "", None, line)
    }

    /// Builds a token from a matched lexeme, decoding literal values.
    fn from_lexeme(kind: TokenType, lexeme: &str, line: usize) -> Self {
        let literal = match kind {
            TokenType::Number => lexeme.parse().ok().map(Literal::Number),
            TokenType::String => {
                Some(Literal::String(lexeme[1..lexeme.len() - 1].to_string()))
            },
            _ => None,
        };
        Self::new(kind, lexeme, literal, line)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.literal {
            Some(literal) => write!(f, "{} {} {literal}", self.kind, self.lexeme),
            None => write!(f, "{} {} null", self.kind, self.lexeme),
        }
    }
}

/// Counts the newlines inside a closed string literal.
fn string(lex: &mut Lexer<TokenType>) -> bool {
    lex.extras.line += lex.slice().matches('\n').count();
    true
}

/// Counts the newlines of an unterminated string, then rejects it.
fn unterminated_string(lex: &mut Lexer<TokenType>) -> Result<(), LexError> {
    lex.extras.line += lex.slice().matches('\n').count();
    Err(LexError::UnterminatedString)
}

/// Converts source text into tokens.
///
/// Scanning is a single left-to-right pass and never stops early: characters
/// that start no token and unterminated strings are reported to `reporter`
/// and produce no token. The result always ends with exactly one `EOF` token
/// whose line is the final line count.
///
/// # Parameters
/// - `source`: The program text.
/// - `reporter`: Receives scan errors.
///
/// # Returns
/// The scanned tokens, terminated by `EOF`.
///
/// # Example
/// ```
/// use treelox::interpreter::{
///     lexer::{TokenType, scan_tokens},
///     report::Diagnostics,
/// };
///
/// let mut diagnostics = Diagnostics::default();
/// let tokens = scan_tokens("1 + 2 * 3", &mut diagnostics);
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenType::Number,
///             TokenType::Plus,
///             TokenType::Number,
///             TokenType::Star,
///             TokenType::Number,
///             TokenType::Eof]);
/// assert!(diagnostics.messages.is_empty());
/// ```
pub fn scan_tokens(source: &str, reporter: &mut dyn ErrorReporter) -> Vec<Token> {
    let mut lexer = TokenType::lexer_with_extras(source, LexerExtras { line: 1 });
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let line = lexer.extras.line;
        match result {
            Ok(kind) => tokens.push(Token::from_lexeme(kind, lexer.slice(), line)),
            Err(LexError::UnterminatedString) => {
                reporter.report_syntax_error(&SyntaxError::UnterminatedString { line });
            },
            Err(LexError::UnexpectedCharacter) => {
                let character = lexer.slice().chars().next().unwrap_or('\u{fffd}');
                reporter.report_syntax_error(&SyntaxError::UnexpectedCharacter { character,
                                                                                 line });
            },
        }
    }

    tokens.push(Token::eof(lexer.extras.line));
    tokens
}
