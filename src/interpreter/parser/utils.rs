use std::iter::Peekable;

use crate::{
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenType},
        parser::core::ParseResult,
    },
};

/// Token kinds that begin a statement. Error recovery stops in front of them.
const STATEMENT_STARTS: &[TokenType] = &[TokenType::Class,
                                         TokenType::Fun,
                                         TokenType::Var,
                                         TokenType::For,
                                         TokenType::If,
                                         TokenType::While,
                                         TokenType::Print,
                                         TokenType::Return];

/// Whether the stream is exhausted or positioned at `EOF`.
pub(in crate::interpreter::parser) fn is_at_end<'a, I>(tokens: &mut Peekable<I>) -> bool
    where I: Iterator<Item = &'a Token>
{
    tokens.peek().is_none_or(|token| token.kind == TokenType::Eof)
}

/// Consumes the next token if its kind is one of `kinds`.
///
/// `EOF` is never consumed since no rule lists it.
///
/// # Returns
/// The consumed token, or `None` when the next token does not match.
pub(in crate::interpreter::parser) fn match_kinds<'a, I>(tokens: &mut Peekable<I>,
                                                         kinds: &[TokenType])
                                                         -> Option<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    tokens.next_if(|token| kinds.contains(&token.kind))
}

/// Consumes a token of the given kind or fails with `message`.
///
/// # Errors
/// Returns a `SyntaxError` pointing at the next token when it has a different
/// kind.
pub(in crate::interpreter::parser) fn consume<'a, I>(tokens: &mut Peekable<I>,
                                                     kind: TokenType,
                                                     message: &str)
                                                     -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next_if(|token| token.kind == kind) {
        Some(token) => Ok(token),
        None => Err(error_at(tokens.peek().copied(), message)),
    }
}

/// Builds the syntax error for `token`.
///
/// An `EOF` token, or no token at all, yields an end-of-input error.
pub(in crate::interpreter::parser) fn error_at(token: Option<&Token>, message: &str)
                                               -> SyntaxError {
    match token {
        Some(token) if token.kind != TokenType::Eof => {
            SyntaxError::UnexpectedToken { lexeme:  token.lexeme.clone(),
                                           message: message.to_string(),
                                           line:    token.line, }
        },
        Some(token) => SyntaxError::UnexpectedEndOfInput { message: message.to_string(),
                                                           line:    token.line, },
        None => SyntaxError::UnexpectedEndOfInput { message: message.to_string(),
                                                    line:    0, },
    }
}

/// Discards tokens until a statement boundary.
///
/// The token that caused the error is always skipped. Afterwards tokens are
/// discarded until one of these holds:
/// - a `;` was just passed,
/// - the next token begins a statement,
/// - the stream reached `EOF`.
pub(in crate::interpreter::parser) fn synchronize<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a Token>
{
    while let Some(token) = tokens.next_if(|token| token.kind != TokenType::Eof) {
        if token.kind == TokenType::Semicolon {
            return;
        }
        if tokens.peek().is_some_and(|next| STATEMENT_STARTS.contains(&next.kind)) {
            return;
        }
    }
}
