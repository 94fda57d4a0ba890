//! Grammar rules for arithmetic expressions.

mod binary_expressions;

pub use binary_expressions::parse_binary_operation;

use beer_ast::{BinaryOperator, ExpressionNode, LiteralNode, Spanned};
use beer_lexer::TokenKind;
use log::{debug, trace};
use nom::combinator::cut;

use super::error::ParseError;
use super::{expect_token, ParseResult, TokenSlice, MAX_NESTING_DEPTH};

/// `term (('+' | '-') term)*`
pub fn parse_expression<'a, 'src>(
    input: TokenSlice<'a, 'src>,
) -> ParseResult<'a, 'src, ExpressionNode<'src>> {
    trace!("parse_expression at depth {}", input.depth);
    parse_binary_operation(input, parse_term, &[BinaryOperator::Add, BinaryOperator::Sub])
}

/// `factor (('*' | '/') factor)*`
pub fn parse_term<'a, 'src>(
    input: TokenSlice<'a, 'src>,
) -> ParseResult<'a, 'src, ExpressionNode<'src>> {
    parse_binary_operation(input, parse_factor, &[BinaryOperator::Mul, BinaryOperator::Div])
}

/// `INT | FLOAT | '(' expression ')'`
pub fn parse_factor<'a, 'src>(
    input: TokenSlice<'a, 'src>,
) -> ParseResult<'a, 'src, ExpressionNode<'src>> {
    let Some(token) = input.peek() else {
        return Err(nom::Err::Failure(ParseError::illegal_syntax(
            "expected a number",
            input.current_span(),
        )));
    };

    match token.kind {
        TokenKind::LeftParen => {
            if input.depth >= MAX_NESTING_DEPTH {
                return Err(nom::Err::Failure(ParseError::illegal_syntax(
                    format!("maximum nesting depth of {MAX_NESTING_DEPTH} exceeded"),
                    token.span,
                )));
            }
            debug!("parsing parenthesized expression at {}", token.span);
            let inner = input.advance().with_depth(input.depth + 1);
            let (rest, expr) = parse_expression(inner)?;
            let (rest, _) = cut(expect_token(
                |k| matches!(k, TokenKind::RightParen),
                "')'",
            ))(rest)?;
            Ok((rest.with_depth(input.depth), expr))
        }
        _ => match Spanned::<LiteralNode>::try_from(token) {
            Ok(literal) => {
                trace!("literal {} at {}", literal.node, literal.span);
                Ok((input.advance(), ExpressionNode::Literal(literal)))
            }
            Err(_) => Err(nom::Err::Failure(ParseError::illegal_syntax(
                "expected a number",
                token.span,
            ))),
        },
    }
}
