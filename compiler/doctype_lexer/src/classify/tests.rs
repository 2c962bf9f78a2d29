use super::*;
use crate::TypeTablesBuilder;

fn kind(lexeme: &str) -> TokenKind {
    classify_with(&TypeTables::default(), lexeme)
}

// === Tables ===

#[test]
fn primitives() {
    for lexeme in ["string", "integer", "boolean", "float", "object", "self"] {
        assert_eq!(kind(lexeme), TokenKind::PrimitiveType, "{lexeme}");
    }
}

#[test]
fn collections() {
    assert_eq!(kind("array"), TokenKind::CollectionType);
    assert_eq!(kind("iterable"), TokenKind::CollectionType);
}

#[test]
fn pseudo_types() {
    for lexeme in ["int", "bool", "mixed", "false", "true", "$this", "static", "class-string"] {
        assert_eq!(kind(lexeme), TokenKind::PseudoType, "{lexeme}");
    }
}

#[test]
fn primitive_wins_over_pseudo() {
    let tables = TypeTables::builder().primitive("int").build();
    assert!(tables.is_pseudo_type("int"));
    assert_eq!(classify_with(&tables, "int"), TokenKind::PrimitiveType);
}

#[test]
fn collection_wins_over_void_and_null() {
    let tables = TypeTablesBuilder::empty()
        .collection("void")
        .collection("null")
        .build();
    assert_eq!(classify_with(&tables, "void"), TokenKind::CollectionType);
    assert_eq!(classify_with(&tables, "null"), TokenKind::CollectionType);
}

#[test]
fn null_wins_over_pseudo() {
    let tables = TypeTables::builder().pseudo_type("null").build();
    assert_eq!(classify_with(&tables, "null"), TokenKind::Null);
}

// === Case rules ===

#[test]
fn null_is_case_insensitive() {
    for lexeme in ["null", "NULL", "Null", "nUlL"] {
        assert_eq!(kind(lexeme), TokenKind::Null, "{lexeme}");
    }
}

#[test]
fn void_is_case_sensitive() {
    assert_eq!(kind("void"), TokenKind::Void);
    assert_eq!(kind("Void"), TokenKind::PseudoType);
    assert_eq!(kind("VOID"), TokenKind::PseudoType);
}

#[test]
fn table_lookups_are_case_sensitive() {
    assert_eq!(kind("String"), TokenKind::PseudoType);
    assert_eq!(kind("ARRAY"), TokenKind::PseudoType);
}

#[test]
fn uppercase_this_is_unclassified() {
    assert_eq!(kind("$THIS"), TokenKind::None);
}

// === Names ===

#[test]
fn bare_identifier_is_pseudo_type() {
    assert_eq!(kind("Foo"), TokenKind::PseudoType);
    assert_eq!(kind("DateTimeImmutable"), TokenKind::PseudoType);
}

#[test]
fn qualified_name() {
    assert_eq!(kind("Foo\\Bar"), TokenKind::QualifiedName);
    assert_eq!(kind("a\\b\\c"), TokenKind::QualifiedName);
}

#[test]
fn fully_qualified_name() {
    assert_eq!(kind("\\Foo\\Bar"), TokenKind::FullyQualifiedName);
    assert_eq!(kind("\\Foo"), TokenKind::FullyQualifiedName);
    assert_eq!(kind("\\"), TokenKind::FullyQualifiedName);
}

#[test]
fn non_letter_start_is_not_a_name() {
    assert_eq!(kind("_Foo"), TokenKind::None);
    assert_eq!(kind("Über"), TokenKind::None);
    assert_eq!(kind("2"), TokenKind::None);
}

// === Symbols ===

#[test]
fn symbols() {
    let cases = [
        ("|", TokenKind::CompoundOperator),
        ("&", TokenKind::IntersectionOperator),
        (",", TokenKind::Comma),
        ("?", TokenKind::NullableOperator),
        ("<", TokenKind::LessThan),
        (">", TokenKind::GreaterThan),
        ("(", TokenKind::OpenParen),
        (")", TokenKind::CloseParen),
        ("[", TokenKind::OpenBracket),
        ("]", TokenKind::CloseBracket),
    ];
    for (lexeme, expected) in cases {
        assert_eq!(kind(lexeme), expected, "{lexeme}");
    }
}

#[test]
fn unknown_symbols_are_none() {
    for lexeme in ["$", "-", "{", "}", ":", "=", "'", "\"", "\0", "||", ""] {
        assert_eq!(kind(lexeme), TokenKind::None, "{lexeme:?}");
    }
}

// === Purity ===

#[test]
fn classification_is_repeatable() {
    let tables = TypeTables::default();
    for lexeme in ["string", "Foo", "|", "NULL", "\\A\\B", "~"] {
        assert_eq!(classify_with(&tables, lexeme), classify_with(&tables, lexeme));
    }
}
