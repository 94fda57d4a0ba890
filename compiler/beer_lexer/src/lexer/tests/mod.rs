use super::*;

mod basic;

/// Tokenize and keep only the kinds
fn kinds(source: &str) -> Vec<TokenKind> {
    Lexer::new("<test>", source)
        .tokenize()
        .expect("source should tokenize")
        .into_iter()
        .map(|t| t.kind)
        .collect()
}
