//! Test utilities for the parser

use beer_lexer::{Lexer, Token};

/// Tokenizes `input` under the source name `<test>`, panicking on lexical errors
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    match Lexer::new("<test>", input).tokenize() {
        Ok(tokens) => tokens,
        Err(err) => panic!("test input failed to lex:\n{}", err.report()),
    }
}
