use beer_lexer::{render_report, Span};
use nom::error::ErrorKind;
use thiserror::Error;

use super::TokenSlice;

/// A syntax error found while building the tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError<'src> {
    #[error("Illegal Syntax: {details}")]
    IllegalSyntax { details: String, span: Span<'src> },
}

impl<'src> ParseError<'src> {
    pub fn illegal_syntax(details: impl Into<String>, span: Span<'src>) -> Self {
        ParseError::IllegalSyntax {
            details: details.into(),
            span,
        }
    }

    /// The range of the offending token
    pub fn span(&self) -> Span<'src> {
        match self {
            ParseError::IllegalSyntax { span, .. } => *span,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            ParseError::IllegalSyntax { .. } => "Illegal Syntax",
        }
    }

    pub fn details(&self) -> &str {
        match self {
            ParseError::IllegalSyntax { details, .. } => details,
        }
    }

    /// Full multi-line report with file, line and an underlined snippet.
    pub fn report(&self) -> String {
        render_report(self.kind_name(), self.details(), &self.span())
    }
}

impl<'a, 'src> nom::error::ParseError<TokenSlice<'a, 'src>> for ParseError<'src> {
    fn from_error_kind(input: TokenSlice<'a, 'src>, kind: ErrorKind) -> Self {
        let details = match input.peek() {
            Some(token) => format!("unexpected {} ({})", token.kind, kind.description()),
            None => format!("unexpected end of input ({})", kind.description()),
        };
        ParseError::illegal_syntax(details, input.current_span())
    }

    // The innermost error is the most precise one
    fn append(_input: TokenSlice<'a, 'src>, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}
