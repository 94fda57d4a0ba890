use logos::Logos;

/// Raw token type recognized by the logos lexer.
///
/// Only spaces and tabs count as whitespace. Anything that matches no variant
/// (letters, `.` on its own, newlines, ...) comes back from logos as `Err(())`
/// and is reported as an illegal character by [`crate::Lexer`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogosToken {
    // Kept as a token so the position cursor can walk over it
    #[regex(r"[ \t]+")]
    Whitespace,

    // A second '.' ends the literal and is left for the next scan
    #[regex(r"[0-9]+\.[0-9]*")]
    Float,
    #[regex(r"[0-9]+")]
    Int,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
}
