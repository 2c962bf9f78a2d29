//! The type-expression lexer: scanner plus classifier.

use tracing::debug;

use crate::classify::classify_with;
use crate::scanner::{PatternSet, Scanner};
use crate::{Token, TokenKind, TokenStream, TypeTables};

/// Tokenizes type expressions against a fixed set of lookup tables.
///
/// The tables are immutable once the lexer is built. All scan state lives in
/// the value returned by each call, so one `Lexer` can be shared across
/// threads and used concurrently through `&self`.
#[derive(Clone, Debug, Default)]
pub struct Lexer {
    tables: TypeTables,
}

impl Lexer {
    /// A lexer with the default tables.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tables(tables: TypeTables) -> Self {
        Lexer { tables }
    }

    pub fn tables(&self) -> &TypeTables {
        &self.tables
    }

    /// Classify a single lexeme.
    #[inline]
    pub fn classify(&self, lexeme: &str) -> TokenKind {
        classify_with(&self.tables, lexeme)
    }

    /// Lazily tokenize `input`.
    pub fn tokens<'lex, 'src>(&'lex self, input: &'src str) -> Tokens<'lex, 'src> {
        Tokens {
            lexer: self,
            scanner: Scanner::new(input, &PatternSet::TYPE_EXPRESSION),
        }
    }

    /// Tokenize `input` into a vector.
    #[tracing::instrument(level = "trace", skip_all, fields(len = input.len()))]
    pub fn tokenize<'src>(&self, input: &'src str) -> Vec<Token<'src>> {
        let tokens: Vec<Token<'src>> = self.tokens(input).collect();
        debug!(count = tokens.len(), "tokenized type expression");
        tokens
    }

    /// Tokenize `input` into a navigable stream.
    pub fn stream<'src>(&self, input: &'src str) -> TokenStream<'src> {
        TokenStream::new(input, self.tokenize(input))
    }
}

/// Iterator over the classified tokens of one input.
///
/// Created by [`Lexer::tokens`].
pub struct Tokens<'lex, 'src> {
    lexer: &'lex Lexer,
    scanner: Scanner<'src>,
}

impl<'src> Iterator for Tokens<'_, 'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        let lexeme = self.scanner.next()?;
        Some(Token::new(
            self.lexer.classify(lexeme.text),
            lexeme.text,
            lexeme.offset,
        ))
    }
}

impl std::iter::FusedIterator for Tokens<'_, '_> {}
