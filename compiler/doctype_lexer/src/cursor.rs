//! Byte cursor over the type-expression source.
//!
//! Reads past the end yield `0`, so pattern code can match on bytes without
//! bounds checks. EOF is decided by position, not by the byte value, which
//! keeps interior NUL bytes distinguishable from the end of input.
//!
//! The cursor is [`Copy`]: patterns that need to look past a tentative
//! match (a trailing `\` in a qualified name) probe on a copy and commit by
//! assignment.

/// Cursor over a `&str`, advanced byte-by-byte by the pattern matchers.
///
/// # Invariant
///
/// Between scan steps `pos` lies on a UTF-8 character boundary. Matchers
/// only stop inside a multi-byte character if they consumed all of its
/// bytes, which the identifier class guarantees (every continuation byte is
/// `>= 0x80`).
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'src> {
    src: &'src str,
    pos: usize,
}

impl<'src> Cursor<'src> {
    pub(crate) fn new(src: &'src str) -> Self {
        Cursor { src, pos: 0 }
    }

    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Byte at the cursor, `0` past the end.
    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.peek_at(0)
    }

    /// Byte `n` positions ahead, `0` past the end.
    #[inline]
    pub(crate) fn peek_at(&self, n: usize) -> u8 {
        self.src.as_bytes().get(self.pos + n).copied().unwrap_or(0)
    }

    /// Remaining bytes from the cursor.
    #[inline]
    pub(crate) fn rest_bytes(&self) -> &'src [u8] {
        self.src.as_bytes().get(self.pos..).unwrap_or_default()
    }

    /// Advance one byte. No-op at EOF.
    #[inline]
    pub(crate) fn advance(&mut self) {
        if !self.is_eof() {
            self.pos += 1;
        }
    }

    /// Advance `n` bytes, clamped to the end of the source.
    #[inline]
    pub(crate) fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.src.len());
    }

    /// Width in bytes of the character at the cursor, `0` at EOF.
    pub(crate) fn char_width(&self) -> usize {
        self.src
            .get(self.pos..)
            .and_then(|rest| rest.chars().next())
            .map_or(usize::from(!self.is_eof()), char::len_utf8)
    }

    /// Advance while `pred` holds. Returns the number of bytes consumed.
    #[inline]
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> usize {
        let start = self.pos;
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
        self.pos - start
    }

    /// Source text between `start` and the cursor.
    #[inline]
    pub(crate) fn slice_from(&self, start: usize) -> &'src str {
        self.src.get(start..self.pos).unwrap_or_default()
    }
}
