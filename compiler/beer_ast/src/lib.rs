//! Abstract Syntax Tree (AST) for the Beer expression language.
//!
//! This crate defines the tree the parser builds from a token sequence, along
//! with utilities for printing and serializing it.

pub mod ast;
pub mod conversions;

// Re-export commonly used types
pub use ast::{BinaryExpressionNode, BinaryOperator, ExpressionNode, LiteralNode, Spanned};
pub use conversions::NotConvertible;

use std::fmt::Write;

/// Trees deeper than this are refused by [`to_json`].
#[cfg(feature = "serde")]
pub const MAX_JSON_DEPTH: usize = 128;

/// Errors from exporting a tree
#[cfg(feature = "serde")]
#[derive(Debug, thiserror::Error)]
pub enum JsonError {
    #[error("tree depth {depth} exceeds the JSON export limit of {limit}")]
    TooDeep { depth: usize, limit: usize },
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

/// A result type for AST operations.
#[cfg(feature = "serde")]
pub type Result<T> = std::result::Result<T, JsonError>;

/// Serializes an AST to a pretty-printed JSON string.
///
/// Serialization walks the tree recursively, so trees deeper than
/// [`MAX_JSON_DEPTH`] are rejected with [`JsonError::TooDeep`].
///
/// # Example
///
/// ```
/// use beer_ast::{to_json, ExpressionNode, LiteralNode};
/// use beer_lexer::{Position, Span};
///
/// let expr = ExpressionNode::literal(LiteralNode::Int(42), Span::single(Position::default()));
/// let json = to_json(&expr).unwrap();
/// assert!(json.contains("\"Int\": 42"));
/// ```
#[cfg(feature = "serde")]
pub fn to_json(expr: &ExpressionNode<'_>) -> Result<String> {
    let depth = expr.depth();
    if depth > MAX_JSON_DEPTH {
        return Err(JsonError::TooDeep {
            depth,
            limit: MAX_JSON_DEPTH,
        });
    }
    Ok(serde_json::to_string_pretty(expr)?)
}

/// Nodes below this level are tagged `[level]` instead of being indented further.
pub const MAX_INDENT_LEVEL: usize = 32;

/// A utility for pretty-printing AST nodes as an indented tree.
///
/// ```text
/// PLUS
///   INT:2
///   MUL
///     INT:3
///     INT:4
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AstPrinter {
    indent: usize,
}

impl Default for AstPrinter {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

impl AstPrinter {
    /// Creates a new `AstPrinter`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `indent` spaces per nesting level.
    pub fn with_indent(indent: usize) -> Self {
        Self { indent }
    }

    /// Prints an AST node to a string, one node per line.
    pub fn print(&self, node: &ExpressionNode<'_>) -> String {
        let mut out = String::new();
        let mut stack = vec![(node, 0usize)];
        while let Some((node, level)) = stack.pop() {
            let pad = if level <= MAX_INDENT_LEVEL {
                " ".repeat(level * self.indent)
            } else {
                format!("{}[{level}] ", " ".repeat(MAX_INDENT_LEVEL * self.indent))
            };
            match node {
                ExpressionNode::Literal(lit) => {
                    let _ = writeln!(out, "{pad}{}", lit.node);
                }
                ExpressionNode::Binary(bin) => {
                    let _ = writeln!(out, "{pad}{}", bin.operator.node);
                    stack.push((&bin.right, level + 1));
                    stack.push((&bin.left, level + 1));
                }
            }
        }
        out
    }
}
