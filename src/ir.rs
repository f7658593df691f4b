// Typed IR shared by inference and codegen. No serde_json::Value here.
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::options::NumericMode;

/// Name of the local alias emitted for [`NumericMode::NamedAlias`].
pub const NUMBER_ALIAS: &str = "Number";

/// Catch-all type imported from `typing` when a value has no better type.
pub const ANY: &str = "Any";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "of", rename_all = "snake_case")]
pub enum TypeRef {
    Str,
    Bool,
    Number(NumericMode),
    Any,
    /// `list` when the element type is unknown (empty array), `list[T]` otherwise
    List(Option<Box<TypeRef>>),
    Named(String),
}

/// JSON value kinds, as far as fingerprinting cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    Object,
    Array,
    String,
    Number,
    Bool,        // true and false are one kind
    Null,
}

/// Order-independent structural summary of an object shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Fingerprint(pub u64);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
    pub name: String,
    pub ty: TypeRef,
}

/// One named, fully rendered type definition.
#[derive(Debug, Clone, Serialize)]
pub struct Declaration {
    pub name: String,
    pub fingerprint: Fingerprint,
    pub members: Vec<Member>,
    /// rendered text, ending with its own line ending
    #[serde(skip)]
    pub body: String,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Str => f.write_str("str"),
            TypeRef::Bool => f.write_str("bool"),
            TypeRef::Number(NumericMode::Union) => f.write_str("int | float"),
            TypeRef::Number(NumericMode::NamedAlias) => f.write_str(NUMBER_ALIAS),
            TypeRef::Number(NumericMode::Int) => f.write_str("int"),
            TypeRef::Number(NumericMode::Float) => f.write_str("float"),
            TypeRef::Any => f.write_str(ANY),
            TypeRef::List(None) => f.write_str("list"),
            TypeRef::List(Some(item)) => write!(f, "list[{item}]"),
            TypeRef::Named(name) => f.write_str(name),
        }
    }
}

impl JsonKind {
    pub fn describe(self) -> &'static str {
        match self {
            JsonKind::Object => "an object",
            JsonKind::Array => "an array",
            JsonKind::String => "a string",
            JsonKind::Number => "a number",
            JsonKind::Bool => "a boolean",
            JsonKind::Null => "null",
        }
    }
}

impl Fingerprint {
    /// Fingerprint of anything hashable. `DefaultHasher::new()` uses fixed
    /// keys, so this is stable for a given build.
    pub fn of<T: Hash + ?Sized>(value: &T) -> Self {
        let mut h = DefaultHasher::new();
        value.hash(&mut h);
        Fingerprint(h.finish())
    }

    /// Commutative, self-cancelling fold step.
    pub fn xor(self, other: Fingerprint) -> Self {
        Fingerprint(self.0 ^ other.0)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}
