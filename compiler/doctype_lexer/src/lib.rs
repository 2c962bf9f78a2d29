//! Lexer for doc-comment type expressions.
//!
//! Turns strings such as `int|string[]`, `?Foo\Bar` or `array<int,string>`
//! into classified [`Token`]s for a downstream type-expression parser.
//!
//! ```
//! use doctype_lexer::{tokenize, TokenKind};
//!
//! let kinds: Vec<TokenKind> = tokenize("?Foo\\Bar|null").iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::NullableOperator,
//!         TokenKind::QualifiedName,
//!         TokenKind::CompoundOperator,
//!         TokenKind::Null,
//!     ]
//! );
//! ```
//!
//! # Layers
//!
//! - `scanner`: ordered pattern list over a byte cursor, producing raw lexemes
//! - [`classify_with`]: table lookups and structural checks, lexeme to [`TokenKind`]
//! - [`Lexer`]: owns the [`TypeTables`] and ties the two together
//! - [`TokenStream`]: lookahead/peek navigation for parsers
//!
//! Lexing is total. Anything the grammar does not know becomes a one-character
//! [`TokenKind::None`] token (or a [`TokenKind::PseudoType`] for unknown bare
//! identifiers); rejecting those is the parser's job.

mod classify;
mod cursor;
mod kind;
mod lexer;
mod scanner;
mod stream;
mod tables;
mod token;

use std::sync::LazyLock;

pub use classify::classify_with;
pub use kind::TokenKind;
pub use lexer::{Lexer, Tokens};
pub use stream::{StreamError, TokenStream};
pub use tables::{
    TypeTables, TypeTablesBuilder, DEFAULT_COLLECTIONS, DEFAULT_PRIMITIVES, DEFAULT_PSEUDO_TYPES,
};
pub use token::Token;

static DEFAULT_LEXER: LazyLock<Lexer> = LazyLock::new(Lexer::new);

/// Tokenize `input` with the default tables.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    DEFAULT_LEXER.tokenize(input)
}

/// Classify one lexeme with the default tables.
pub fn classify(lexeme: &str) -> TokenKind {
    DEFAULT_LEXER.classify(lexeme)
}

/// Tokenize `input` with the default tables into a [`TokenStream`].
pub fn stream(input: &str) -> TokenStream<'_> {
    DEFAULT_LEXER.stream(input)
}
