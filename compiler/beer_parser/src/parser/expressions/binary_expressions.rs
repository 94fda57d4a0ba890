use beer_ast::{BinaryOperator, ExpressionNode, Spanned};
use log::trace;

use crate::parser::{ParseResult, TokenSlice};

/// Parses `sub_rule (op sub_rule)*` for the operators in `operators`, folding
/// to the left so `1 - 2 - 3` groups as `(1 - 2) - 3`.
pub fn parse_binary_operation<'a, 'src, F>(
    input: TokenSlice<'a, 'src>,
    sub_rule: F,
    operators: &[BinaryOperator],
) -> ParseResult<'a, 'src, ExpressionNode<'src>>
where
    F: Fn(TokenSlice<'a, 'src>) -> ParseResult<'a, 'src, ExpressionNode<'src>>,
{
    let (mut input, mut left) = sub_rule(input)?;

    while let Some(token) = input.peek() {
        let operator = match BinaryOperator::try_from(token.kind) {
            Ok(op) if operators.contains(&op) => op,
            _ => break,
        };
        trace!("operator {} at {}", operator, token.span);

        let (rest, right) = sub_rule(input.advance())?;
        input = rest;
        left = ExpressionNode::binary(left, Spanned::new(operator, token.span), right);
    }

    Ok((input, left))
}
