//! Classified tokens.

use std::fmt;

use crate::TokenKind;

/// A classified lexeme borrowed from the input.
///
/// `offset` is the byte offset of the lexeme's first byte. Tokens are
/// [`Copy`]; once emitted they belong to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub lexeme: &'src str,
    pub offset: usize,
}

impl<'src> Token<'src> {
    #[inline]
    pub const fn new(kind: TokenKind, lexeme: &'src str, offset: usize) -> Self {
        Token {
            kind,
            lexeme,
            offset,
        }
    }

    /// Exclusive end offset.
    #[inline]
    pub const fn end(&self) -> usize {
        self.offset + self.lexeme.len()
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} `{}` at {}", self.kind.name(), self.lexeme, self.offset)
    }
}
