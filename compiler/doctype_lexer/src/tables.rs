//! Keyword lookup tables.
//!
//! Three exact-match sets drive classification: primitive types, pseudo-types
//! and collection types. They are built once, when a [`Lexer`](crate::Lexer)
//! is constructed, and are read-only afterwards.

use rustc_hash::FxHashSet;

/// Built-in scalar and object type names.
pub const DEFAULT_PRIMITIVES: &[&str] = &[
    "string", "integer", "boolean", "float", "object", "resource", "scalar", "callable", "self",
];

/// Type-like keywords that are not primitives.
///
/// `class-string` cannot come out of the scanner (the `-` splits it) but is
/// kept so direct [`classify`](crate::classify()) calls recognize it.
pub const DEFAULT_PSEUDO_TYPES: &[&str] = &[
    "int",
    "bool",
    "mixed",
    "false",
    "true",
    "class-string",
    "callback",
    "$this",
    "static",
    "parent",
    "real",
    "double",
];

/// Built-in aggregate type names.
pub const DEFAULT_COLLECTIONS: &[&str] = &["array", "iterable"];

type NameSet = FxHashSet<Box<str>>;

fn name_set(names: &[&str]) -> NameSet {
    names.iter().map(|&name| Box::from(name)).collect()
}

/// The primitive, pseudo-type and collection sets.
///
/// Lookups are case-sensitive exact matches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeTables {
    primitives: NameSet,
    pseudo_types: NameSet,
    collections: NameSet,
}

impl TypeTables {
    /// Start a builder seeded with the default tables.
    pub fn builder() -> TypeTablesBuilder {
        TypeTablesBuilder::default()
    }

    #[inline]
    pub fn is_primitive(&self, lexeme: &str) -> bool {
        self.primitives.contains(lexeme)
    }

    #[inline]
    pub fn is_pseudo_type(&self, lexeme: &str) -> bool {
        self.pseudo_types.contains(lexeme)
    }

    #[inline]
    pub fn is_collection(&self, lexeme: &str) -> bool {
        self.collections.contains(lexeme)
    }

    /// Primitive names, in no particular order.
    pub fn primitives(&self) -> impl Iterator<Item = &str> {
        self.primitives.iter().map(AsRef::as_ref)
    }

    /// Pseudo-type names, in no particular order.
    pub fn pseudo_types(&self) -> impl Iterator<Item = &str> {
        self.pseudo_types.iter().map(AsRef::as_ref)
    }

    /// Collection names, in no particular order.
    pub fn collections(&self) -> impl Iterator<Item = &str> {
        self.collections.iter().map(AsRef::as_ref)
    }
}

impl Default for TypeTables {
    fn default() -> Self {
        TypeTablesBuilder::default().build()
    }
}

/// Builder for custom [`TypeTables`].
///
/// ```
/// use doctype_lexer::{Lexer, TokenKind, TypeTables};
///
/// let tables = TypeTables::builder().pseudo_type("non-empty-string").build();
/// let lexer = Lexer::with_tables(tables);
/// assert_eq!(lexer.classify("non-empty-string"), TokenKind::PseudoType);
/// ```
#[derive(Clone, Debug)]
pub struct TypeTablesBuilder {
    primitives: NameSet,
    pseudo_types: NameSet,
    collections: NameSet,
}

impl TypeTablesBuilder {
    /// A builder with all three tables empty.
    pub fn empty() -> Self {
        TypeTablesBuilder {
            primitives: NameSet::default(),
            pseudo_types: NameSet::default(),
            collections: NameSet::default(),
        }
    }

    #[must_use]
    pub fn primitive(mut self, name: impl Into<Box<str>>) -> Self {
        self.primitives.insert(name.into());
        self
    }

    #[must_use]
    pub fn pseudo_type(mut self, name: impl Into<Box<str>>) -> Self {
        self.pseudo_types.insert(name.into());
        self
    }

    #[must_use]
    pub fn collection(mut self, name: impl Into<Box<str>>) -> Self {
        self.collections.insert(name.into());
        self
    }

    pub fn build(self) -> TypeTables {
        TypeTables {
            primitives: self.primitives,
            pseudo_types: self.pseudo_types,
            collections: self.collections,
        }
    }
}

impl Default for TypeTablesBuilder {
    fn default() -> Self {
        TypeTablesBuilder {
            primitives: name_set(DEFAULT_PRIMITIVES),
            pseudo_types: name_set(DEFAULT_PSEUDO_TYPES),
            collections: name_set(DEFAULT_COLLECTIONS),
        }
    }
}
