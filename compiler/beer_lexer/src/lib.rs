//! Beer lexical analyzer module
//!
//! This module provides lexical analysis for the Beer expression language,
//! converting source text into a sequence of tokens for the parser and
//! rendering lexical errors against the source they came from.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod lexer;
pub mod logos_token;
pub mod position;
pub mod snippet;
pub mod token;

// Re-export the main types for convenience
pub use error::LexError;
pub use lexer::Lexer;
pub use logos_token::LogosToken;
pub use position::{Position, Span};
pub use snippet::{render_report, render_snippet};
pub use token::{Number, Token, TokenKind};
