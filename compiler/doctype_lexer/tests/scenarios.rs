//! End-to-end tokenization of common type expressions.

use doctype_lexer::{classify, stream, tokenize, Lexer, TokenKind, TypeTables};
use pretty_assertions::assert_eq;

use TokenKind::{
    CloseBracket, CollectionType, Comma, CompoundOperator, FullyQualifiedName, GreaterThan,
    LessThan, NullableOperator, OpenBracket, PrimitiveType, PseudoType, QualifiedName,
};

fn kinds(input: &str) -> Vec<TokenKind> {
    tokenize(input).iter().map(|t| t.kind).collect()
}

#[test]
fn single_names() {
    assert_eq!(kinds("string"), vec![PrimitiveType]);
    assert_eq!(kinds("int"), vec![PseudoType]);
    assert_eq!(kinds("array"), vec![CollectionType]);
    assert_eq!(kinds("\\Foo\\Bar"), vec![FullyQualifiedName]);
    assert_eq!(kinds("Foo\\Bar"), vec![QualifiedName]);
    assert_eq!(kinds("Foo"), vec![PseudoType]);
    assert_eq!(kinds("$this"), vec![PseudoType]);
}

#[test]
fn union() {
    assert_eq!(
        kinds("int|string"),
        vec![PseudoType, CompoundOperator, PrimitiveType]
    );
}

#[test]
fn nullable() {
    assert_eq!(kinds("?Foo"), vec![NullableOperator, PseudoType]);
}

#[test]
fn generic_collection() {
    assert_eq!(
        kinds("array<int,string>"),
        vec![
            CollectionType,
            LessThan,
            PseudoType,
            Comma,
            PrimitiveType,
            GreaterThan,
        ]
    );
}

#[test]
fn array_suffix() {
    assert_eq!(kinds("int[]"), vec![PseudoType, OpenBracket, CloseBracket]);
}

#[test]
fn null_and_void_case_rules() {
    for lexeme in ["null", "NULL", "Null"] {
        assert_eq!(classify(lexeme), TokenKind::Null, "{lexeme}");
    }
    assert_eq!(classify("void"), TokenKind::Void);
    assert_eq!(classify("Void"), TokenKind::PseudoType);
}

#[test]
fn primitive_precedence_with_overlapping_tables() {
    let lexer = Lexer::with_tables(
        TypeTables::builder()
            .primitive("mixed")
            .pseudo_type("string")
            .build(),
    );
    assert_eq!(lexer.classify("mixed"), PrimitiveType);
    assert_eq!(lexer.classify("string"), PrimitiveType);
}

#[test]
fn whitespace_is_insignificant() {
    assert_eq!(kinds(" array < int , string > "), kinds("array<int,string>"));
}

#[test]
fn parser_walk_over_stream() {
    let mut s = stream("?\\Foo\\Bar[]|null");
    let mut seen = Vec::new();
    while s.lookahead().is_some() {
        s.move_next();
        seen.extend(s.token().map(|t| t.kind));
    }
    assert_eq!(
        seen,
        vec![
            NullableOperator,
            FullyQualifiedName,
            OpenBracket,
            CloseBracket,
            CompoundOperator,
            TokenKind::Null,
        ]
    );
}

#[test]
fn classification_is_independent_of_preceding_tokens() {
    for prefix in ["", "?", "int|", "array<", "\\Foo\\Bar&"] {
        let input = format!("{prefix}Foo");
        let tokens = tokenize(&input);
        assert_eq!(tokens.last().map(|t| t.kind), Some(PseudoType), "{input}");
        assert_eq!(tokens.last().map(|t| t.lexeme), Some("Foo"), "{input}");
    }
}

mod properties {
    use doctype_lexer::tokenize;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn offsets_increase_and_lexemes_match_input(input in "\\PC{0,80}") {
            let tokens = tokenize(&input);
            let mut last_end = 0;
            for token in &tokens {
                prop_assert!(token.offset >= last_end);
                prop_assert_eq!(&input[token.offset..token.end()], token.lexeme);
                last_end = token.end();
            }
        }

        #[test]
        fn non_whitespace_is_fully_covered(input in "[ -~\t\n]{0,80}") {
            let joined: String = tokenize(&input).iter().map(|t| t.lexeme).collect();
            let expected: String = input.chars().filter(|c| !c.is_ascii_whitespace()).collect();
            prop_assert_eq!(joined, expected);
        }

        #[test]
        fn classification_ignores_context(
            prefix in "[a-z|&?<>,]{0,10}",
            word in "[a-zA-Z][a-zA-Z0-9_]{0,10}",
        ) {
            let alone = tokenize(&word);
            let joined = format!("{prefix} {word}");
            let in_context = tokenize(&joined);
            prop_assert_eq!(alone.last().map(|t| t.kind), in_context.last().map(|t| t.kind));
        }
    }
}
