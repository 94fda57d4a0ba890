//! The Beer expression language front end.
//!
//! [`run`] takes a named source text through the lexer and the parser and
//! returns either the expression tree or the first error met on the way.

use std::fmt;

use log::debug;
use thiserror::Error;

pub use beer_ast::{AstPrinter, BinaryOperator, ExpressionNode, LiteralNode};
pub use beer_lexer::{LexError, Lexer, Position, Span, Token, TokenKind};
pub use beer_parser::ParseError;

/// Which stage rejected the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    IllegalCharacter,
    IllegalSyntax,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorKind::IllegalCharacter => "Illegal Character",
            ErrorKind::IllegalSyntax => "Illegal Syntax",
        })
    }
}

/// Any error the pipeline can report
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BeerError<'src> {
    #[error("{0}")]
    Lex(LexError<'src>),
    #[error("{0}")]
    Parse(ParseError<'src>),
}

impl<'src> From<LexError<'src>> for BeerError<'src> {
    fn from(err: LexError<'src>) -> Self {
        BeerError::Lex(err)
    }
}

impl<'src> From<ParseError<'src>> for BeerError<'src> {
    fn from(err: ParseError<'src>) -> Self {
        BeerError::Parse(err)
    }
}

impl<'src> BeerError<'src> {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BeerError::Lex(_) => ErrorKind::IllegalCharacter,
            BeerError::Parse(_) => ErrorKind::IllegalSyntax,
        }
    }

    pub fn details(&self) -> String {
        match self {
            BeerError::Lex(e) => e.details(),
            BeerError::Parse(e) => e.details().to_string(),
        }
    }

    pub fn span(&self) -> Span<'src> {
        match self {
            BeerError::Lex(e) => e.span(),
            BeerError::Parse(e) => e.span(),
        }
    }

    /// Multi-line report: kind and details, file and line, underlined snippet
    pub fn report(&self) -> String {
        match self {
            BeerError::Lex(e) => e.report(),
            BeerError::Parse(e) => e.report(),
        }
    }
}

/// Tokenizes `text`, loaded under `source_name`, stopping at the first illegal character.
pub fn tokenize<'src>(
    source_name: &'src str,
    text: &'src str,
) -> Result<Vec<Token<'src>>, BeerError<'src>> {
    Ok(Lexer::new(source_name, text).tokenize()?)
}

/// Lexes and parses `text`. Lexing errors win over syntax errors, and the parser
/// never runs on input that failed to lex.
pub fn run<'src>(
    source_name: &'src str,
    text: &'src str,
) -> Result<ExpressionNode<'src>, BeerError<'src>> {
    debug!("running {source_name} ({} bytes)", text.len());
    let tokens = tokenize(source_name, text)?;
    let ast = beer_parser::parse(&tokens)?;
    debug!("{source_name}: parsed {} nodes", ast.node_count());
    Ok(ast)
}

/// Drops one trailing `\n` or `\r\n`, as left by files and piped stdin.
pub fn strip_line_ending(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
}
