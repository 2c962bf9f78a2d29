//! Lexeme classification.
//!
//! Rules are checked in a fixed order and the first hit wins:
//!
//! 1. primitive table
//! 2. collection table
//! 3. exactly `void`
//! 4. `null` in any ASCII case
//! 5. pseudo-type table
//! 6. names: leading ASCII letter or `\`
//! 7. single-character symbols
//! 8. everything else is [`TokenKind::None`]
//!
//! The `void`/`null` asymmetry is deliberate: `Void` is not `void`, but
//! `NULL` is `null`.

use crate::{TokenKind, TypeTables};

/// Classify `lexeme` against `tables`. Total: never fails.
pub fn classify_with(tables: &TypeTables, lexeme: &str) -> TokenKind {
    if tables.is_primitive(lexeme) {
        return TokenKind::PrimitiveType;
    }
    if tables.is_collection(lexeme) {
        return TokenKind::CollectionType;
    }
    if lexeme == "void" {
        return TokenKind::Void;
    }
    if lexeme.eq_ignore_ascii_case("null") {
        return TokenKind::Null;
    }
    if tables.is_pseudo_type(lexeme) {
        return TokenKind::PseudoType;
    }

    match lexeme.as_bytes().first() {
        Some(b'\\') => TokenKind::FullyQualifiedName,
        Some(b) if b.is_ascii_alphabetic() => {
            if lexeme.contains('\\') {
                TokenKind::QualifiedName
            } else {
                TokenKind::PseudoType
            }
        }
        _ => symbol(lexeme),
    }
}

fn symbol(lexeme: &str) -> TokenKind {
    match lexeme {
        "|" => TokenKind::CompoundOperator,
        "&" => TokenKind::IntersectionOperator,
        "," => TokenKind::Comma,
        "?" => TokenKind::NullableOperator,
        "<" => TokenKind::LessThan,
        ">" => TokenKind::GreaterThan,
        "(" => TokenKind::OpenParen,
        ")" => TokenKind::CloseParen,
        "[" => TokenKind::OpenBracket,
        "]" => TokenKind::CloseBracket,
        _ => TokenKind::None,
    }
}

#[cfg(test)]
mod tests;
