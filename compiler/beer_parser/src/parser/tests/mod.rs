use super::*;
use crate::parser::test_utils::tokenize;

mod expressions;

/// Parses `input` and renders the tree in its display form
fn parse_str(input: &str) -> Result<String, String> {
    crate::init_test_logger();
    let tokens = tokenize(input);
    Parser::new(&tokens)
        .parse()
        .map(|expr| expr.to_string())
        .map_err(|err| err.to_string())
}
