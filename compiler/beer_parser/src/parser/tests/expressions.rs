use super::*;
use beer_ast::{BinaryOperator, LiteralNode};
use pretty_assertions::assert_eq;

#[test]
fn test_single_literals() {
    assert_eq!(parse_str("42").unwrap(), "INT:42");
    assert_eq!(parse_str("2.5").unwrap(), "FLOAT:2.5");
    assert_eq!(parse_str("  7.  ").unwrap(), "FLOAT:7.0");
}

#[test]
fn test_multiplication_binds_tighter() {
    assert_eq!(parse_str("2 + 3 * 4").unwrap(), "(INT:2, PLUS, (INT:3, MUL, INT:4))");
    assert_eq!(parse_str("2 * 3 + 4").unwrap(), "((INT:2, MUL, INT:3), PLUS, INT:4)");
    assert_eq!(
        parse_str("1 - 6 / 2 * 3").unwrap(),
        "(INT:1, MINUS, ((INT:6, DIV, INT:2), MUL, INT:3))"
    );
}

#[test]
fn test_same_tier_is_left_associative() {
    assert_eq!(parse_str("3 - 2 - 1").unwrap(), "((INT:3, MINUS, INT:2), MINUS, INT:1)");
    assert_eq!(parse_str("1 + 2 - 3 + 4").unwrap(), "(((INT:1, PLUS, INT:2), MINUS, INT:3), PLUS, INT:4)");
}

#[test]
fn test_parentheses_override_precedence() {
    assert_eq!(parse_str("(2 + 3) * 4").unwrap(), "((INT:2, PLUS, INT:3), MUL, INT:4)");
    assert_eq!(parse_str("3 - (2 - 1)").unwrap(), "(INT:3, MINUS, (INT:2, MINUS, INT:1))");
    assert_eq!(parse_str("((((5))))").unwrap(), "INT:5");
}

#[test]
fn test_spans_of_built_nodes() {
    let tokens = tokenize("1.5 * (2 - 3)");
    let expr = parse(&tokens).unwrap();

    let ExpressionNode::Binary(bin) = &expr else {
        panic!("expected a binary node, got {expr:?}");
    };
    assert_eq!(bin.operator.node, BinaryOperator::Mul);
    assert_eq!(bin.operator.span, tokens[1].span);

    let ExpressionNode::Literal(left) = &bin.left else {
        panic!("expected a literal on the left");
    };
    assert_eq!(left.node, LiteralNode::Float(1.5));
    assert_eq!(left.span, tokens[0].span);

    // A group's node spans its contents, not the parentheses
    assert_eq!(bin.right.span().start, tokens[3].span.start);
    assert_eq!(bin.right.span().end, tokens[5].span.end);
}

#[test]
fn test_parsing_is_repeatable() {
    let tokens = tokenize("4 / (1 + 1) - 0.5");
    let first = parse(&tokens).unwrap();
    let second = parse(&tokens).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_deepest_allowed_nesting() {
    let source = format!(
        "{}1{}",
        "(".repeat(MAX_NESTING_DEPTH),
        ")".repeat(MAX_NESTING_DEPTH)
    );
    assert_eq!(parse_str(&source).unwrap(), "INT:1");

    let source = format!(
        "{}1 + 2{} * 3",
        "(".repeat(MAX_NESTING_DEPTH),
        ")".repeat(MAX_NESTING_DEPTH)
    );
    assert_eq!(parse_str(&source).unwrap(), "((INT:1, PLUS, INT:2), MUL, INT:3)");
}

#[test]
fn test_depth_is_restored_after_a_group() {
    let tokens = tokenize("(1) + 2");
    let (rest, _) = parse_factor(TokenSlice::new(&tokens)).unwrap();
    assert_eq!(rest.depth, 0);
    assert_eq!(rest.peek().map(|t| t.kind), Some(TokenKind::Plus));
}
