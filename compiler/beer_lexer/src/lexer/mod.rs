//! Lexer implementation for the Beer language
//! Converts source text into a sequence of tokens for the parser

use std::ops::Range;
use std::str::Chars;

use log::{debug, trace};
use logos::Logos;

use crate::error::LexError;
use crate::position::{Position, Span};
use crate::token::{Token, TokenKind};
use crate::LogosToken;

/// The main lexer struct that holds the state of the lexing process.
///
/// Classification is done by logos; the lexer walks its [`Position`] cursor
/// over every character logos consumed so token and error spans carry exact
/// index, line and column values.
pub struct Lexer<'src> {
    /// The source text being lexed
    source: &'src str,
    /// The inner Logos lexer
    inner: logos::Lexer<'src, LogosToken>,
    /// Characters not yet loaded into `current_char`
    chars: Chars<'src>,
    /// Cursor pointing at `current_char`
    pos: Position<'src>,
    /// The character under the cursor, `None` once the text is exhausted
    current_char: Option<char>,
    /// Byte offset of `current_char`
    offset: usize,
    /// Set once the EOF token has been handed out
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Create a lexer over `source_text`, loaded under `source_name`
    pub fn new(source_name: &'src str, source_text: &'src str) -> Self {
        let mut lexer = Self {
            source: source_text,
            inner: LogosToken::lexer(source_text),
            chars: source_text.chars(),
            pos: Position::before_start(source_name, source_text),
            current_char: None,
            offset: 0,
            finished: false,
        };
        lexer.advance();
        lexer
    }

    /// The character under the cursor
    pub fn current_char(&self) -> Option<char> {
        self.current_char
    }

    /// The cursor position
    pub fn position(&self) -> Position<'src> {
        self.pos
    }

    /// Moves the cursor forward one character.
    pub fn advance(&mut self) {
        if let Some(ch) = self.current_char {
            self.offset += ch.len_utf8();
        }
        self.pos.advance(self.current_char);
        self.current_char = self.chars.next();
    }

    /// Produces the token sequence, ending in `Eof`, or the first illegal character.
    pub fn tokenize(self) -> Result<Vec<Token<'src>>, LexError<'src>> {
        let tokens = self.collect::<Result<Vec<_>, _>>()?;
        debug!("tokenized {} tokens", tokens.len());
        Ok(tokens)
    }

    /// Like [`Lexer::tokenize`], but reports every illegal character instead of
    /// stopping at the first one. The token list still ends in `Eof`.
    pub fn tokenize_recovering(self) -> (Vec<Token<'src>>, Vec<LexError<'src>>) {
        let mut tokens = Vec::new();
        let mut errors = Vec::new();
        for item in self {
            match item {
                Ok(token) => tokens.push(token),
                Err(err) => errors.push(err),
            }
        }
        debug!(
            "tokenized {} tokens with {} errors",
            tokens.len(),
            errors.len()
        );
        (tokens, errors)
    }

    /// Walk the cursor up to byte offset `target`
    fn sync_position_to(&mut self, target: usize) {
        while self.offset < target && self.current_char.is_some() {
            self.advance();
        }
    }

    /// Build the semantic token for a logos match covering `span`.
    /// Whitespace only moves the cursor and yields nothing.
    fn convert_token(
        &mut self,
        logos_token: LogosToken,
        span: Range<usize>,
    ) -> Option<Token<'src>> {
        let start = self.pos.snapshot();
        let lexeme = &self.source[span.clone()];

        let kind = match logos_token {
            LogosToken::Whitespace => {
                self.sync_position_to(span.end);
                return None;
            }
            LogosToken::Int => match lexeme.parse::<i64>() {
                Ok(n) => TokenKind::Int(n),
                // Too large for i64, keep the closest float
                Err(_) => TokenKind::Float(parse_float(lexeme)),
            },
            LogosToken::Float => TokenKind::Float(parse_float(lexeme)),
            LogosToken::Plus => TokenKind::Plus,
            LogosToken::Minus => TokenKind::Minus,
            LogosToken::Star => TokenKind::Star,
            LogosToken::Slash => TokenKind::Slash,
            LogosToken::LParen => TokenKind::LeftParen,
            LogosToken::RParen => TokenKind::RightParen,
        };

        let token = match kind {
            TokenKind::Int(_) | TokenKind::Float(_) => {
                self.sync_position_to(span.end);
                Token::new(kind, Span::new(start, self.pos.snapshot()))
            }
            _ => {
                self.advance();
                Token::single(kind, start)
            }
        };
        trace!("token {} at {}", token.kind, token.span.start);
        Some(token)
    }

    /// Report the character under the cursor and step past it
    fn illegal_character(&mut self, ch: char) -> LexError<'src> {
        let start = self.pos.snapshot();
        self.advance();
        let err = LexError::illegal_character(ch, Span::new(start, self.pos.snapshot()));
        debug!("illegal character {:?} at {}", ch, start);
        err
    }
}

fn parse_float(lexeme: &str) -> f64 {
    lexeme.parse().unwrap_or(f64::INFINITY)
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Result<Token<'src>, LexError<'src>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let Some(scanned) = self.inner.next() else {
                self.finished = true;
                // Anything logos left behind is walked over so EOF sits at the end
                self.sync_position_to(self.source.len());
                let at = self.pos.snapshot();
                return Some(Ok(Token::new(TokenKind::Eof, Span::point(at))));
            };

            let span = self.inner.span();
            self.sync_position_to(span.start);

            match scanned {
                Ok(logos_token) => {
                    if let Some(token) = self.convert_token(logos_token, span) {
                        return Some(Ok(token));
                    }
                }
                // Tail bytes of a character that was already reported
                Err(()) if span.start < self.offset => continue,
                Err(()) => match self.current_char {
                    Some(ch) => return Some(Err(self.illegal_character(ch))),
                    None => continue,
                },
            }
        }
    }
}

#[cfg(test)]
mod tests;
