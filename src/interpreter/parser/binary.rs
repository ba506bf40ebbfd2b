use std::iter::Peekable;

use crate::{
    ast::Expr,
    interpreter::{
        lexer::{Token, TokenType},
        parser::{
            core::ParseResult,
            unary::parse_unary,
            utils::match_kinds,
        },
    },
};

/// Parses one left-associative binary level.
///
/// Parses an operand, then folds every following `operator operand` pair
/// into the expression built so far, so `a - b - c` becomes `(a - b) - c`.
///
/// The rule is: `level := operand (operator operand)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Current group and unary nesting, passed through unchanged.
/// - `operators`: Operator kinds handled at this level.
/// - `parse_operand`: Parser for the next-higher precedence level.
///
/// # Returns
/// The folded expression tree.
fn parse_left_associative<'a, I, F>(tokens: &mut Peekable<I>,
                                    depth: usize,
                                    operators: &[TokenType],
                                    parse_operand: F)
                                    -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>,
          F: Fn(&mut Peekable<I>, usize) -> ParseResult<Expr>
{
    let mut left = parse_operand(tokens, depth)?;
    while let Some(operator) = match_kinds(tokens, operators) {
        let right = parse_operand(tokens, depth)?;
        left = Expr::binary(left, operator.clone(), right);
    }
    Ok(left)
}

/// Parses equality expressions.
///
/// The rule is: `equality := comparison (("!=" | "==") comparison)*`
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_associative(tokens,
                           depth,
                           &[TokenType::BangEqual, TokenType::EqualEqual],
                           parse_comparison)
}

/// Parses relational expressions.
///
/// The rule is: `comparison := term ((">" | ">=" | "<" | "<=") term)*`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_associative(tokens,
                           depth,
                           &[TokenType::Greater,
                             TokenType::GreaterEqual,
                             TokenType::Less,
                             TokenType::LessEqual],
                           parse_term)
}

/// Parses addition and subtraction.
///
/// The rule is: `term := factor (("-" | "+") factor)*`
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_associative(tokens, depth, &[TokenType::Minus, TokenType::Plus], parse_factor)
}

/// Parses multiplication and division.
///
/// The rule is: `factor := unary (("/" | "*") unary)*`
pub fn parse_factor<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_associative(tokens, depth, &[TokenType::Slash, TokenType::Star], parse_unary)
}
