//! The kinds of value a property can hold.
#![allow(clippy::module_name_repetitions)]

use std::fmt;

use serde_plain::forward_display_to_serde;

use crate::Schema;

/// Concrete scalar types.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum ScalarType {
    String,
    Boolean,
    Integer,
    Number,
}

forward_display_to_serde!(ScalarType);

/// The declared shape of a property.
#[derive(Clone, Copy, Debug)]
pub enum ValueKind {
    /// A concrete scalar of the given type.
    Scalar(ScalarType),

    /// A concrete scalar of the given type, or a [`Token`](crate::Token) to be resolved at deploy
    /// time.
    ResolvableScalar(ScalarType),

    /// A list of strings. Individual elements may be tokens.
    StringList,

    /// A nested struct with its own schema.
    Struct(&'static Schema),

    /// A list of nested structs sharing one schema.
    StructList(&'static Schema),

    /// A map of user-controlled keys to nested structs.
    StructMap(&'static Schema),

    /// A map of user-controlled keys to strings (or tokens), such as resource tags.
    ///
    /// Keys are emitted exactly as given.
    FreeformMap,

    /// Any JSON value, emitted as given.
    Json,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(scalar) => write!(f, "{}", scalar),
            Self::ResolvableScalar(scalar) => write!(f, "{} or token", scalar),
            Self::StringList => write!(f, "list of String"),
            Self::Struct(schema) => write!(f, "{}", schema.name),
            Self::StructList(schema) => write!(f, "list of {}", schema.name),
            Self::StructMap(schema) => write!(f, "map of {}", schema.name),
            Self::FreeformMap => write!(f, "map of String"),
            Self::Json => write!(f, "JSON"),
        }
    }
}

/// The shape of a value actually supplied for a property.
///
/// This is what's reported as `got` in a [`TypeMismatch`](crate::Error::TypeMismatch).
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum ValueType {
    String,
    Boolean,
    Number,
    Token,
    List,
    Struct,
    Map,
}

forward_display_to_serde!(ValueType);
