//! Binder configuration.

use std::str::FromStr;

use serde_plain::forward_display_to_serde;

/// How to treat property bag keys that the schema doesn't declare.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    /// Reject unknown keys with [`Error::UnknownProperty`](crate::Error::UnknownProperty).
    #[default]
    Strict,

    /// Drop unknown keys.
    Permissive,
}

forward_display_to_serde!(Strictness);

/// An error marker returned when trying to parse an invalid [`Strictness`].
#[derive(Debug, Eq, PartialEq)]
pub struct InvalidStrictness;

impl FromStr for Strictness {
    type Err = InvalidStrictness;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_plain::from_str(s).map_err(|_| InvalidStrictness)
    }
}

/// Options controlling how property bags are bound to schemas.
///
/// This deserializes with defaults for missing fields, so it can be embedded in a host
/// application's configuration:
///
/// ```
/// # use pinpoint_cfn::{BinderOptions, Strictness};
/// let options: BinderOptions = serde_json::from_str(r#"{"strictness": "permissive"}"#).unwrap();
/// assert_eq!(options.strictness, Strictness::Permissive);
/// ```
#[allow(clippy::module_name_repetitions)]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct BinderOptions {
    /// How to treat unknown keys. Defaults to [`Strictness::Strict`].
    pub strictness: Strictness,
}

impl BinderOptions {
    /// Options that drop unknown keys rather than rejecting them.
    #[must_use]
    pub fn permissive() -> Self {
        Self {
            strictness: Strictness::Permissive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strictness() {
        assert_eq!(Strictness::default(), Strictness::Strict);
        assert_eq!(Strictness::Permissive.to_string(), "permissive");
        assert_eq!("strict".parse(), Ok(Strictness::Strict));
        assert_eq!("lenient".parse::<Strictness>(), Err(InvalidStrictness));
    }

    #[test]
    fn deserialize_defaults() {
        let options: BinderOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, BinderOptions::default());
        assert_eq!(BinderOptions::permissive().strictness, Strictness::Permissive);
    }
}
