use thiserror::Error;

use crate::position::Span;
use crate::snippet::render_report;

/// Errors that can occur while turning source text into tokens
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError<'src> {
    /// A character outside the language's alphabet
    #[error("Illegal Character: {ch:?}")]
    IllegalCharacter {
        /// The offending character
        ch: char,
        /// Covers exactly that character
        span: Span<'src>,
    },
}

impl<'src> LexError<'src> {
    pub fn illegal_character(ch: char, span: Span<'src>) -> Self {
        LexError::IllegalCharacter { ch, span }
    }

    pub fn span(&self) -> Span<'src> {
        match self {
            LexError::IllegalCharacter { span, .. } => *span,
        }
    }

    /// The error kind as shown to users
    pub fn kind_name(&self) -> &'static str {
        match self {
            LexError::IllegalCharacter { .. } => "Illegal Character",
        }
    }

    /// The part of the message after the kind
    pub fn details(&self) -> String {
        match self {
            LexError::IllegalCharacter { ch, .. } => format!("{ch:?}"),
        }
    }

    /// Full multi-line report with file, line and an underlined snippet.
    pub fn report(&self) -> String {
        render_report(self.kind_name(), &self.details(), &self.span())
    }
}
