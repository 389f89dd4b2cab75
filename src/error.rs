use crate::ValueType;

/// Errors raised when binding property values to a schema.
///
/// All of these are raised synchronously, at construction or when setting a single property.
/// Rendering a constructed instance never fails.
///
/// Property paths are dotted local names, with list elements indexed and map entries keyed, e.g.
/// `schedule.quiet_time.end` or `additional_treatments[1].size_percent`.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// A required property was not given a value.
    #[error("missing required property `{path}`")]
    MissingRequiredProperty { path: String },

    /// A property was given that the schema doesn't declare.
    #[error("unknown property `{path}`")]
    UnknownProperty { path: String },

    /// A property was given a value of the wrong shape.
    #[error("type mismatch for `{path}`: expected {expected}, got {got}")]
    TypeMismatch {
        path: String,
        expected: String,
        got: ValueType,
    },

    /// An attribute was requested that the resource type doesn't expose.
    #[error("resource type {resource_type} has no attribute `{attribute}`")]
    UnknownAttribute {
        resource_type: &'static str,
        attribute: String,
    },

    /// A resource type name didn't match any known resource type.
    #[error("unknown resource type `{0}`")]
    UnknownResourceType(String),
}

impl Error {
    /// Prefix the error's property path with a parent segment.
    pub(crate) fn nested(self, parent: &str) -> Self {
        fn join(parent: &str, path: &str) -> String {
            if path.is_empty() {
                parent.to_string()
            } else if path.starts_with('[') {
                format!("{}{}", parent, path)
            } else {
                format!("{}.{}", parent, path)
            }
        }

        match self {
            Self::MissingRequiredProperty { path } => Self::MissingRequiredProperty {
                path: join(parent, &path),
            },
            Self::UnknownProperty { path } => Self::UnknownProperty {
                path: join(parent, &path),
            },
            Self::TypeMismatch {
                path,
                expected,
                got,
            } => Self::TypeMismatch {
                path: join(parent, &path),
                expected,
                got,
            },
            other => other,
        }
    }

    /// The property path the error refers to, if any.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::MissingRequiredProperty { path }
            | Self::UnknownProperty { path }
            | Self::TypeMismatch { path, .. } => Some(path),
            Self::UnknownAttribute { .. } | Self::UnknownResourceType(_) => None,
        }
    }
}

/// Convenience alias for results with [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
