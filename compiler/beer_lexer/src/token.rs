use std::fmt;

use crate::position::{Position, Span};

/// The numeric payload of an `Int` or `Float` token.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{n}"),
            Number::Float(x) => write!(f, "{x:?}"),
        }
    }
}

/// Represents the kind of a token in the Beer language.
///
/// Numeric literals carry their value, so a token has a value exactly when it
/// is an `Int` or a `Float`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenKind {
    // Literals
    Int(i64),
    Float(f64),

    // Operators
    Plus,
    Minus,
    Star,
    Slash,

    // Punctuation
    LeftParen,
    RightParen,

    Eof,
}

impl TokenKind {
    /// Returns true if this kind is one of the four arithmetic operators
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Plus | TokenKind::Minus | TokenKind::Star | TokenKind::Slash
        )
    }

    /// Short upper-case name used in token listings and AST dumps
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Int(_) => "INT",
            TokenKind::Float(_) => "FLOAT",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "MUL",
            TokenKind::Slash => "DIV",
            TokenKind::LeftParen => "LPAREN",
            TokenKind::RightParen => "RPAREN",
            TokenKind::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Int(n) => write!(f, "INT:{n}"),
            TokenKind::Float(x) => write!(f, "FLOAT:{x:?}"),
            other => f.write_str(other.name()),
        }
    }
}

/// Represents a token in the source code: its kind and the span it was read from.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token<'src> {
    /// The kind of the token, with the literal value for numbers
    pub kind: TokenKind,
    /// Where the token was read from
    pub span: Span<'src>,
}

impl<'src> Token<'src> {
    /// Creates a token with an explicit span.
    pub fn new(kind: TokenKind, span: Span<'src>) -> Self {
        Self { kind, span }
    }

    /// Creates a one-character token starting at `start`.
    pub fn single(kind: TokenKind, start: Position<'src>) -> Self {
        Self::new(kind, Span::single(start))
    }

    /// The numeric value, present only for `Int` and `Float` tokens
    pub fn value(&self) -> Option<Number> {
        match self.kind {
            TokenKind::Int(n) => Some(Number::Int(n)),
            TokenKind::Float(x) => Some(Number::Float(x)),
            _ => None,
        }
    }

    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.kind, self.span.start)
    }
}
