//! Navigable token stream for parsers.
//!
//! A parser walks the stream with a one-token lookahead: [`lookahead`]
//! is the next token to consume, [`token`] the last one consumed, and
//! [`move_next`] shifts both forward. [`peek`] scans further ahead without
//! moving; its offset is reset by every `move_next`.
//!
//! [`lookahead`]: TokenStream::lookahead
//! [`token`]: TokenStream::token
//! [`move_next`]: TokenStream::move_next
//! [`peek`]: TokenStream::peek

use thiserror::Error;
use tracing::trace;

use crate::{Token, TokenKind};

/// Out-of-range positions passed to [`TokenStream`] navigation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StreamError {
    #[error("token position {position} out of bounds (stream has {len} tokens)")]
    PositionOutOfBounds { position: usize, len: usize },

    #[error("byte offset {offset} out of bounds (input is {len} bytes)")]
    OffsetOutOfBounds { offset: usize, len: usize },

    #[error("byte offset {offset} is not on a character boundary")]
    NotCharBoundary { offset: usize },
}

/// Tokens of one input plus a parser-style cursor.
#[derive(Clone, Debug)]
pub struct TokenStream<'src> {
    input: &'src str,
    tokens: Vec<Token<'src>>,
    /// Index of the lookahead; `tokens.len()` once exhausted.
    next: usize,
    /// Index of the last consumed token.
    current: Option<usize>,
    peek: usize,
}

impl<'src> TokenStream<'src> {
    /// Wrap already-scanned tokens. The lookahead starts at the first token.
    pub fn new(input: &'src str, tokens: Vec<Token<'src>>) -> Self {
        TokenStream {
            input,
            tokens,
            next: 0,
            current: None,
            peek: 0,
        }
    }

    pub fn input(&self) -> &'src str {
        self.input
    }

    pub fn tokens(&self) -> &[Token<'src>] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Index of the lookahead token; equals [`len`](Self::len) once exhausted.
    pub fn position(&self) -> usize {
        self.next
    }

    /// The last consumed token, `None` before the first [`move_next`](Self::move_next)
    /// and after moving past the end.
    pub fn token(&self) -> Option<Token<'src>> {
        self.current.and_then(|i| self.tokens.get(i).copied())
    }

    /// The next token to consume, `None` at end of stream.
    pub fn lookahead(&self) -> Option<Token<'src>> {
        self.tokens.get(self.next).copied()
    }

    /// Consume the lookahead. Returns whether a new lookahead exists.
    pub fn move_next(&mut self) -> bool {
        self.peek = 0;
        if self.next < self.tokens.len() {
            self.current = Some(self.next);
            self.next += 1;
        } else {
            self.current = None;
        }
        trace!(position = self.next, "move_next");
        self.next < self.tokens.len()
    }

    #[inline]
    pub fn is_next_token(&self, kind: TokenKind) -> bool {
        self.lookahead().is_some_and(|t| t.is(kind))
    }

    pub fn is_next_token_any(&self, kinds: &[TokenKind]) -> bool {
        self.lookahead().is_some_and(|t| kinds.contains(&t.kind))
    }

    /// Consume tokens until the lookahead has `kind` or the stream ends.
    pub fn skip_until(&mut self, kind: TokenKind) {
        while self.lookahead().is_some_and(|t| !t.is(kind)) {
            self.move_next();
        }
    }

    /// Successive tokens after the lookahead, one per call, without moving.
    pub fn peek(&mut self) -> Option<Token<'src>> {
        let token = self.tokens.get(self.next + 1 + self.peek).copied()?;
        self.peek += 1;
        Some(token)
    }

    pub fn reset_peek(&mut self) {
        self.peek = 0;
    }

    /// The token after the lookahead. Leaves the peek offset at zero.
    pub fn glimpse(&mut self) -> Option<Token<'src>> {
        let token = self.peek();
        self.peek = 0;
        token
    }

    /// Return to the initial state.
    pub fn reset(&mut self) {
        self.next = 0;
        self.current = None;
        self.peek = 0;
    }

    /// Make the token at `position` the lookahead.
    ///
    /// `position == len()` leaves the stream exhausted. The token before
    /// `position`, if any, becomes the current token.
    pub fn reset_position(&mut self, position: usize) -> Result<(), StreamError> {
        if position > self.tokens.len() {
            return Err(StreamError::PositionOutOfBounds {
                position,
                len: self.tokens.len(),
            });
        }
        self.next = position;
        self.current = position.checked_sub(1);
        self.peek = 0;
        Ok(())
    }

    /// The input up to (not including) byte `offset`.
    pub fn input_until_position(&self, offset: usize) -> Result<&'src str, StreamError> {
        if offset > self.input.len() {
            return Err(StreamError::OffsetOutOfBounds {
                offset,
                len: self.input.len(),
            });
        }
        self.input
            .get(..offset)
            .ok_or(StreamError::NotCharBoundary { offset })
    }
}
