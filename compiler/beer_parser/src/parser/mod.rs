// Parser for the Beer language using nom over a slice of lexer tokens.
//
//   expression := term (('+' | '-') term)*
//   term       := factor (('*' | '/') factor)*
//   factor     := INT | FLOAT | '(' expression ')'
//
// Every syntax error is raised as `nom::Err::Failure`, so the first one found
// is the one reported and no rule backtracks past it.

pub mod error;
pub mod expressions;
pub mod test_utils;

use beer_ast::ExpressionNode;
use beer_lexer::{Span, Token, TokenKind};
use log::debug;
use nom::IResult;

pub use error::ParseError;
pub use expressions::{parse_binary_operation, parse_expression, parse_factor, parse_term};

/// Parenthesized groups nest at most this deep.
pub const MAX_NESTING_DEPTH: usize = 100;

/// The parser's input: the tokens not yet consumed, plus how many groups
/// enclose the current rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenSlice<'a, 'src> {
    pub tokens: &'a [Token<'src>],
    pub depth: usize,
}

/// The result type shared by every grammar rule
pub type ParseResult<'a, 'src, T> = IResult<TokenSlice<'a, 'src>, T, ParseError<'src>>;

impl<'a, 'src> TokenSlice<'a, 'src> {
    pub fn new(tokens: &'a [Token<'src>]) -> Self {
        Self { tokens, depth: 0 }
    }

    /// The token under the cursor, if any are left
    pub fn peek(&self) -> Option<&'a Token<'src>> {
        self.tokens.first()
    }

    /// The slice with the first token consumed
    pub fn advance(&self) -> Self {
        Self {
            tokens: self.tokens.get(1..).unwrap_or(&[]),
            depth: self.depth,
        }
    }

    pub fn with_depth(&self, depth: usize) -> Self {
        Self {
            tokens: self.tokens,
            depth,
        }
    }

    /// Span of the token under the cursor, or a default span when none are left
    pub fn current_span(&self) -> Span<'src> {
        self.peek().map(|t| t.span).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl nom::InputLength for TokenSlice<'_, '_> {
    fn input_len(&self) -> usize {
        self.tokens.len()
    }
}

/// Consumes the next token when `pred` accepts its kind. Otherwise fails with a
/// recoverable error saying `expected {expected}` at that token.
pub fn expect_token<'a, 'src, F>(
    pred: F,
    expected: &'static str,
) -> impl Fn(TokenSlice<'a, 'src>) -> ParseResult<'a, 'src, &'a Token<'src>>
where
    'src: 'a,
    F: Fn(&TokenKind) -> bool,
{
    move |input: TokenSlice<'a, 'src>| match input.peek() {
        Some(token) if pred(&token.kind) => Ok((input.advance(), token)),
        _ => Err(nom::Err::Error(ParseError::illegal_syntax(
            format!("expected {expected}"),
            input.current_span(),
        ))),
    }
}

/// Parses a whole token sequence into one expression.
pub struct Parser<'a, 'src> {
    tokens: &'a [Token<'src>],
}

impl<'a, 'src> Parser<'a, 'src> {
    pub fn new(tokens: &'a [Token<'src>]) -> Self {
        Self { tokens }
    }

    /// Parses an expression and requires that only `Eof` follows it.
    pub fn parse(&self) -> Result<ExpressionNode<'src>, ParseError<'src>> {
        debug!("parsing {} tokens", self.tokens.len());
        let input = TokenSlice::new(self.tokens);

        let result = parse_expression(input).and_then(|(rest, expr)| {
            if rest.is_empty() {
                return Ok(expr);
            }
            nom::combinator::cut(expect_token(
                |k| matches!(k, TokenKind::Eof),
                "'+', '-', '*' or '/'",
            ))(rest)
            .map(|_| expr)
        });

        result.map_err(|err| match err {
            nom::Err::Error(e) | nom::Err::Failure(e) => {
                debug!("parse failed: {e}");
                e
            }
            nom::Err::Incomplete(_) => {
                ParseError::illegal_syntax("unexpected end of input", input.current_span())
            }
        })
    }
}

/// Parses `tokens` with a fresh [`Parser`].
pub fn parse<'src>(tokens: &[Token<'src>]) -> Result<ExpressionNode<'src>, ParseError<'src>> {
    Parser::new(tokens).parse()
}

#[cfg(test)]
mod tests;
