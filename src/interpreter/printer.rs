use crate::{
    ast::{Expr, LiteralValue, Statement},
    util::num::format_number,
};

/// Renders an expression in parenthesized prefix form.
///
/// Binary and unary nodes print as `(<operator> <operands>)`, groups as
/// `(group <inner>)`, literals as their value text and variables by name.
///
/// # Example
/// ```
/// use treelox::{
///     ast::Expr,
///     interpreter::{
///         lexer::{Token, TokenType},
///         printer::print_expr,
///     },
/// };
///
/// let expr = Expr::binary(Expr::unary(Token::new(TokenType::Minus, "-", None, 1),
///                                     Expr::literal(123.0)),
///                         Token::new(TokenType::Star, "*", None, 1),
///                         Expr::grouping(Expr::literal(45.67)));
///
/// assert_eq!(print_expr(&expr), "(* (- 123) (group 45.67))");
/// ```
#[must_use]
pub fn print_expr(expr: &Expr) -> String {
    match expr {
        Expr::Literal(value) => print_literal(value),
        Expr::Variable(name) => name.lexeme.clone(),
        Expr::Unary { operator, right } => parenthesize(&operator.lexeme, &[right]),
        Expr::Binary { left, operator, right } => parenthesize(&operator.lexeme, &[left, right]),
        Expr::Grouping(inner) => parenthesize("group", &[inner]),
    }
}

/// Renders a statement in parenthesized prefix form.
///
/// - `(; <expr>)` for expression statements,
/// - `(print <expr>)` for `print`,
/// - `(var <name> <initializer>)`, or `(var <name>)` without an initializer.
#[must_use]
pub fn print_statement(statement: &Statement) -> String {
    match statement {
        Statement::Expression(expr) => parenthesize(";", &[expr]),
        Statement::Print(expr) => parenthesize("print", &[expr]),
        Statement::Var { name, initializer: Some(initializer) } => {
            parenthesize(&format!("var {}", name.lexeme), &[initializer])
        },
        Statement::Var { name, initializer: None } => format!("(var {})", name.lexeme),
    }
}

fn print_literal(value: &LiteralValue) -> String {
    match value {
        LiteralValue::Number(n) => format_number(*n),
        LiteralValue::String(s) => s.clone(),
        LiteralValue::Bool(b) => b.to_string(),
        LiteralValue::Nil => "nil".to_string(),
    }
}

fn parenthesize(name: &str, exprs: &[&Expr]) -> String {
    let mut out = format!("({name}");
    for expr in exprs {
        out.push(' ');
        out.push_str(&print_expr(expr));
    }
    out.push(')');
    out
}
