//! Recursive-descent parser for the Beer expression language.
//!
//! Consumes the token sequence produced by `beer_lexer` and builds a
//! `beer_ast` tree, or reports the first syntax error it meets.

pub mod parser;

pub use parser::error::ParseError;
pub use parser::{parse, Parser, TokenSlice, MAX_NESTING_DEPTH};


#[cfg(test)]
pub(crate) use tests::init_test_logger;
