use beer_lexer::{Token, TokenKind};
use thiserror::Error;

use crate::ast::{BinaryOperator, LiteralNode, Spanned};

/// A token was offered where a different kind of token was required
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("token {0} cannot be used here")]
pub struct NotConvertible(pub TokenKind);

impl<'src> TryFrom<&Token<'src>> for Spanned<'src, LiteralNode> {
    type Error = NotConvertible;

    fn try_from(token: &Token<'src>) -> Result<Self, Self::Error> {
        let node = match token.kind {
            TokenKind::Int(n) => LiteralNode::Int(n),
            TokenKind::Float(x) => LiteralNode::Float(x),
            other => return Err(NotConvertible(other)),
        };
        Ok(Spanned::new(node, token.span))
    }
}

impl TryFrom<TokenKind> for BinaryOperator {
    type Error = NotConvertible;

    fn try_from(kind: TokenKind) -> Result<Self, Self::Error> {
        match kind {
            TokenKind::Plus => Ok(BinaryOperator::Add),
            TokenKind::Minus => Ok(BinaryOperator::Sub),
            TokenKind::Star => Ok(BinaryOperator::Mul),
            TokenKind::Slash => Ok(BinaryOperator::Div),
            other => Err(NotConvertible(other)),
        }
    }
}
