use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue},
    interpreter::{
        lexer::{Token, TokenType},
        parser::{
            core::{MAX_NESTING, ParseResult, parse_expression},
            utils::{consume, error_at, match_kinds},
        },
    },
};

/// Parses a unary expression.
///
/// Unary operators are right-associative, so `!-x` parses as `!(-x)`.
///
/// Grammar:
/// ```text
///     unary := ("!" | "-") unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Current group and unary nesting.
///
/// # Returns
/// An [`Expr::Unary`] or a primary expression.
///
/// # Errors
/// `Too much nesting.` when the operator would exceed [`MAX_NESTING`].
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    if let Some(operator) = match_kinds(tokens, &[TokenType::Bang, TokenType::Minus]) {
        if depth >= MAX_NESTING {
            return Err(error_at(Some(operator), "Too much nesting."));
        }
        let right = parse_unary(tokens, depth + 1)?;
        return Ok(Expr::unary(operator.clone(), right));
    }

    parse_primary(tokens, depth)
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := NUMBER | STRING | "true" | "false" | "nil"
///              | IDENTIFIER
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
/// - `depth`: Current group and unary nesting.
///
/// # Returns
/// The parsed primary [`Expr`].
///
/// # Errors
/// - `Expect expression.` when the next token starts no primary expression.
/// - `Expect ')' after expression.` when a group is not closed.
/// - `Too much nesting.` when a group would exceed [`MAX_NESTING`].
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let Some(token) = tokens.peek().copied() else {
        return Err(error_at(None, "Expect expression."));
    };

    let expr = match (token.kind, &token.literal) {
        (TokenType::False, _) => Expr::literal(false),
        (TokenType::True, _) => Expr::literal(true),
        (TokenType::Nil, _) => Expr::Literal(LiteralValue::Nil),
        (TokenType::Number | TokenType::String, Some(literal)) => {
            Expr::Literal(LiteralValue::from(literal))
        },
        (TokenType::Identifier, _) => Expr::Variable(token.clone()),
        (TokenType::LeftParen, _) => {
            if depth >= MAX_NESTING {
                return Err(error_at(Some(token), "Too much nesting."));
            }
            tokens.next();
            let inner = parse_expression(tokens, depth + 1)?;
            consume(tokens, TokenType::RightParen, "Expect ')' after expression.")?;
            return Ok(Expr::grouping(inner));
        },
        _ => return Err(error_at(Some(token), "Expect expression.")),
    };

    tokens.next();
    Ok(expr)
}
