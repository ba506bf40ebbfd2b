use crate::interpreter::lexer::{Literal, Token};

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the constants that can appear directly in source
/// code: numbers, strings, booleans and `nil`.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit floating-point literal.
    Number(f64),
    /// A string literal, already stripped of its quotes.
    String(String),
    /// `true` or `false`.
    Bool(bool),
    /// The absence-of-value marker.
    Nil,
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<&Literal> for LiteralValue {
    fn from(literal: &Literal) -> Self {
        match literal {
            Literal::Number(n) => Self::Number(*n),
            Literal::String(s) => Self::String(s.clone()),
        }
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Each node owns its children. Evaluation and printing live outside this
/// type as exhaustive matches, so adding an operation never touches the
/// definitions here.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A constant.
    Literal(LiteralValue),
    /// Reference to a previously declared variable.
    Variable(Token),
    /// A prefix `-` or `!`.
    Unary {
        /// The operator token.
        operator: Token,
        /// The operand expression.
        right:    Box<Self>,
    },
    /// An infix arithmetic, comparison or equality operation.
    Binary {
        /// Left operand.
        left:     Box<Self>,
        /// The operator token.
        operator: Token,
        /// Right operand.
        right:    Box<Self>,
    },
    /// A parenthesized sub-expression, kept so printing round-trips.
    Grouping(Box<Self>),
}

impl Expr {
    /// Builds a literal node.
    ///
    /// ## Example
    /// ```
    /// use treelox::ast::{Expr, LiteralValue};
    ///
    /// assert_eq!(Expr::literal(1.0), Expr::Literal(LiteralValue::Number(1.0)));
    /// ```
    pub fn literal(value: impl Into<LiteralValue>) -> Self {
        Self::Literal(value.into())
    }

    /// Builds a unary node.
    #[must_use]
    pub fn unary(operator: Token, right: Self) -> Self {
        Self::Unary { operator,
                      right: Box::new(right) }
    }

    /// Builds a binary node.
    #[must_use]
    pub fn binary(left: Self, operator: Token, right: Self) -> Self {
        Self::Binary { left: Box::new(left),
                       operator,
                       right: Box::new(right) }
    }

    /// Builds a grouping node.
    #[must_use]
    pub fn grouping(inner: Self) -> Self {
        Self::Grouping(Box::new(inner))
    }
}

/// Represents a statement.
///
/// A program is an ordered list of statements; order is execution order.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// An expression evaluated for its side effects.
    Expression(Expr),
    /// `print <expr>;`
    Print(Expr),
    /// A variable declaration using `var`.
    Var {
        /// The identifier token.
        name:        Token,
        /// The initial value, `nil` when absent.
        initializer: Option<Expr>,
    },
}
