//! Pattern-driven scanner producing raw lexemes.
//!
//! The scanner knows nothing about token kinds. It walks the source with a
//! [`Cursor`] and, at each position, tries the patterns of a [`PatternSet`]
//! in order:
//!
//! 1. **Catchable** patterns produce a lexeme. First match wins.
//! 2. **Non-catchable** patterns are tried only when no catchable pattern
//!    matched. Trivia patterns (whitespace) are consumed silently; any other
//!    match becomes a lexeme.
//!
//! If nothing matches, one character is consumed as a lexeme so scanning
//! always makes progress. Every byte of the input ends up in exactly one
//! lexeme or one skipped trivia run.

use tracing::trace;

use crate::cursor::Cursor;

/// A single scan rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Pattern {
    /// `$this`, matched ASCII-case-insensitively.
    ThisVariable,
    /// Identifier or backslash-separated qualified name.
    Name,
    /// Run of ASCII whitespace. Trivia.
    Whitespace,
    /// Exactly one character.
    AnyChar,
}

impl Pattern {
    /// Length in bytes of this pattern's match at the cursor, if any.
    ///
    /// A match is never empty.
    pub(crate) fn match_len(self, cursor: &Cursor<'_>) -> Option<usize> {
        let len = match self {
            Pattern::ThisVariable => this_variable(cursor),
            Pattern::Name => name(*cursor),
            Pattern::Whitespace => {
                let mut probe = *cursor;
                probe.eat_while(is_whitespace)
            }
            Pattern::AnyChar => cursor.char_width(),
        };
        (len > 0).then_some(len)
    }

    /// Trivia is consumed without producing a lexeme.
    #[inline]
    pub(crate) fn is_trivia(self) -> bool {
        matches!(self, Pattern::Whitespace)
    }
}

/// Ordered catchable and non-catchable patterns.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PatternSet {
    pub catchable: &'static [Pattern],
    pub non_catchable: &'static [Pattern],
}

impl PatternSet {
    /// The type-expression grammar.
    pub(crate) const TYPE_EXPRESSION: PatternSet = PatternSet {
        catchable: &[Pattern::ThisVariable, Pattern::Name],
        non_catchable: &[Pattern::Whitespace, Pattern::AnyChar],
    };

    fn first_match(patterns: &[Pattern], cursor: &Cursor<'_>) -> Option<(Pattern, usize)> {
        patterns
            .iter()
            .find_map(|&pattern| pattern.match_len(cursor).map(|len| (pattern, len)))
    }
}

/// A lexeme before classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct RawLexeme<'src> {
    pub text: &'src str,
    pub offset: usize,
}

/// Scan state for one input. Created per tokenization call.
pub(crate) struct Scanner<'src> {
    cursor: Cursor<'src>,
    patterns: &'static PatternSet,
}

impl<'src> Scanner<'src> {
    pub(crate) fn new(src: &'src str, patterns: &'static PatternSet) -> Self {
        Scanner {
            cursor: Cursor::new(src),
            patterns,
        }
    }

    /// Produce the next lexeme, skipping trivia. `None` at end of input.
    pub(crate) fn next_lexeme(&mut self) -> Option<RawLexeme<'src>> {
        loop {
            if self.cursor.is_eof() {
                return None;
            }
            let start = self.cursor.pos();

            if let Some((pattern, len)) =
                PatternSet::first_match(self.patterns.catchable, &self.cursor)
            {
                return Some(self.emit(start, len, Some(pattern)));
            }

            match PatternSet::first_match(self.patterns.non_catchable, &self.cursor) {
                Some((pattern, len)) if pattern.is_trivia() => {
                    self.cursor.advance_n(len);
                }
                Some((pattern, len)) => return Some(self.emit(start, len, Some(pattern))),
                None => {
                    let len = self.cursor.char_width();
                    return Some(self.emit(start, len, None));
                }
            }
        }
    }

    /// `pattern` is `None` for the progress fallback.
    fn emit(&mut self, start: usize, len: usize, pattern: Option<Pattern>) -> RawLexeme<'src> {
        self.cursor.advance_n(len);
        let text = self.cursor.slice_from(start);
        trace!(offset = start, text, ?pattern, "lexeme");
        RawLexeme {
            text,
            offset: start,
        }
    }
}

impl<'src> Iterator for Scanner<'src> {
    type Item = RawLexeme<'src>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.next_lexeme()
    }
}

// ─── Character classes ─────────────────────────────────────────

/// ASCII whitespace including vertical tab.
#[inline]
fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Bytes `0x80..=0xFF` count as letters so non-ASCII names survive intact.
#[inline]
fn is_name_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b >= 0x80
}

#[inline]
fn is_name_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b >= 0x80
}

// ─── Matchers ──────────────────────────────────────────────────

fn this_variable(cursor: &Cursor<'_>) -> usize {
    const THIS: &[u8] = b"$this";
    match cursor.rest_bytes().get(..THIS.len()) {
        Some(head) if head.eq_ignore_ascii_case(THIS) => THIS.len(),
        _ => 0,
    }
}

/// `[start\\][continue]*(\\[start][continue]*)*`
///
/// A `\` is only taken when a name segment follows it, so `Foo\` matches
/// `Foo` and leaves the backslash for the next scan step.
fn name(mut cursor: Cursor<'_>) -> usize {
    let start = cursor.pos();
    let first = cursor.current();
    if cursor.is_eof() || !(is_name_start(first) || first == b'\\') {
        return 0;
    }
    cursor.advance();
    cursor.eat_while(is_name_continue);

    while cursor.current() == b'\\' && is_name_start(cursor.peek_at(1)) {
        cursor.advance_n(2);
        cursor.eat_while(is_name_continue);
    }
    cursor.pos() - start
}
