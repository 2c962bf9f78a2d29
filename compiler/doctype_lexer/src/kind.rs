//! Token kinds for type expressions.
//!
//! `TokenKind` is `#[repr(u8)]` with explicit discriminants grouped by
//! category, so the numeric code of a kind is stable and can be handed to
//! consumers that key on integers:
//!
//! | Range     | Category                         |
//! |-----------|----------------------------------|
//! | 1         | Unclassified (`NONE`)            |
//! | 2-11      | Operators and delimiters         |
//! | 100-104   | Names and type keywords          |
//! | 200-201   | `null` and `void`                |

use std::fmt;

/// Classification of a scanned lexeme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    /// Lexeme that matched no rule. Downstream parsers treat it as a syntax error.
    None = 1,

    /// `|`
    CompoundOperator = 2,
    /// `&`
    IntersectionOperator = 3,
    /// `?`
    NullableOperator = 4,
    /// `>`
    GreaterThan = 5,
    /// `<`
    LessThan = 6,
    /// `,`
    Comma = 7,
    /// `)`
    CloseParen = 8,
    /// `(`
    OpenParen = 9,
    /// `]`
    CloseBracket = 10,
    /// `[`
    OpenBracket = 11,

    /// `Foo\Bar`
    QualifiedName = 100,
    /// `\Foo\Bar`
    FullyQualifiedName = 101,
    PrimitiveType = 102,
    CollectionType = 103,
    /// Pseudo-type keyword, or any bare identifier no table recognizes.
    PseudoType = 104,

    Null = 200,
    Void = 201,
}

impl TokenKind {
    /// Every kind, in code order.
    pub const ALL: [TokenKind; 18] = [
        TokenKind::None,
        TokenKind::CompoundOperator,
        TokenKind::IntersectionOperator,
        TokenKind::NullableOperator,
        TokenKind::GreaterThan,
        TokenKind::LessThan,
        TokenKind::Comma,
        TokenKind::CloseParen,
        TokenKind::OpenParen,
        TokenKind::CloseBracket,
        TokenKind::OpenBracket,
        TokenKind::QualifiedName,
        TokenKind::FullyQualifiedName,
        TokenKind::PrimitiveType,
        TokenKind::CollectionType,
        TokenKind::PseudoType,
        TokenKind::Null,
        TokenKind::Void,
    ];

    /// Stable numeric code of this kind.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Inverse of [`code`](Self::code). Returns `None` for unassigned codes.
    pub fn from_code(code: u8) -> Option<TokenKind> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    /// Constant-style name, e.g. `T_COMPOUND_OPERATOR`.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::None => "T_NONE",
            TokenKind::CompoundOperator => "T_COMPOUND_OPERATOR",
            TokenKind::IntersectionOperator => "T_INTERSECTION_OPERATOR",
            TokenKind::NullableOperator => "T_NULLABLE_OPERATOR",
            TokenKind::GreaterThan => "T_GREATER_THAN",
            TokenKind::LessThan => "T_LESS_THAN",
            TokenKind::Comma => "T_COMMA",
            TokenKind::CloseParen => "T_CLOSE_PARENTHESIS",
            TokenKind::OpenParen => "T_OPEN_PARENTHESIS",
            TokenKind::CloseBracket => "T_CLOSE_SQUARE_BRACKET",
            TokenKind::OpenBracket => "T_OPEN_SQUARE_BRACKET",
            TokenKind::QualifiedName => "T_QUALIFIED_NAME",
            TokenKind::FullyQualifiedName => "T_FULLY_QUALIFIED_NAME",
            TokenKind::PrimitiveType => "T_PRIMITIVE_TYPE",
            TokenKind::CollectionType => "T_COLLECTION_TYPE",
            TokenKind::PseudoType => "T_PSEUDO_TYPE",
            TokenKind::Null => "T_NULL",
            TokenKind::Void => "T_VOID",
        }
    }

    /// Human-readable description used in diagnostics.
    pub const fn description(self) -> &'static str {
        match self {
            TokenKind::None => "unrecognized input",
            TokenKind::CompoundOperator => "`|`",
            TokenKind::IntersectionOperator => "`&`",
            TokenKind::NullableOperator => "`?`",
            TokenKind::GreaterThan => "`>`",
            TokenKind::LessThan => "`<`",
            TokenKind::Comma => "`,`",
            TokenKind::CloseParen => "`)`",
            TokenKind::OpenParen => "`(`",
            TokenKind::CloseBracket => "`]`",
            TokenKind::OpenBracket => "`[`",
            TokenKind::QualifiedName => "qualified name",
            TokenKind::FullyQualifiedName => "fully qualified name",
            TokenKind::PrimitiveType => "primitive type",
            TokenKind::CollectionType => "collection type",
            TokenKind::PseudoType => "pseudo-type",
            TokenKind::Null => "`null`",
            TokenKind::Void => "`void`",
        }
    }

    /// `|` or `&`.
    #[inline]
    pub const fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::CompoundOperator | TokenKind::IntersectionOperator
        )
    }

    /// Grouping and separator punctuation: brackets, parens, angles, comma.
    #[inline]
    pub const fn is_delimiter(self) -> bool {
        matches!(
            self,
            TokenKind::GreaterThan
                | TokenKind::LessThan
                | TokenKind::Comma
                | TokenKind::CloseParen
                | TokenKind::OpenParen
                | TokenKind::CloseBracket
                | TokenKind::OpenBracket
        )
    }

    /// Namespaced references the consumer resolves against imports.
    #[inline]
    pub const fn is_name(self) -> bool {
        matches!(
            self,
            TokenKind::QualifiedName | TokenKind::FullyQualifiedName
        )
    }

    #[inline]
    pub const fn is_type_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::PrimitiveType
                | TokenKind::CollectionType
                | TokenKind::PseudoType
                | TokenKind::Null
                | TokenKind::Void
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
