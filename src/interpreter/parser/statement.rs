use std::iter::Peekable;

use crate::{
    ast::Statement,
    interpreter::{
        lexer::{Token, TokenType},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{consume, match_kinds},
        },
    },
};

/// Parses a declaration.
///
/// Grammar:
/// ```text
///     declaration := "var" IDENTIFIER ("=" expression)? ";"
///                  | statement
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a declaration.
///
/// # Returns
/// The parsed [`Statement`].
pub fn parse_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    if match_kinds(tokens, &[TokenType::Var]).is_some() {
        return parse_variable_declaration(tokens);
    }

    parse_statement(tokens)
}

/// Parses the rest of a variable declaration after `var`.
///
/// # Errors
/// - `Expect variable name.` when no identifier follows `var`.
/// - `Expect ';' after variable declaration.` when the `;` is missing.
fn parse_variable_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let name = consume(tokens, TokenType::Identifier, "Expect variable name.")?.clone();

    let initializer = if match_kinds(tokens, &[TokenType::Equal]).is_some() {
        Some(parse_expression(tokens, 0)?)
    } else {
        None
    };

    consume(tokens, TokenType::Semicolon, "Expect ';' after variable declaration.")?;
    Ok(Statement::Var { name, initializer })
}

/// Parses a statement.
///
/// Grammar:
/// ```text
///     statement := "print" expression ";"
///                | expression ";"
/// ```
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    if match_kinds(tokens, &[TokenType::Print]).is_some() {
        let value = parse_expression(tokens, 0)?;
        consume(tokens, TokenType::Semicolon, "Expect ';' after value.")?;
        return Ok(Statement::Print(value));
    }

    let expr = parse_expression(tokens, 0)?;
    consume(tokens, TokenType::Semicolon, "Expect ';' after expression.")?;
    Ok(Statement::Expression(expr))
}
