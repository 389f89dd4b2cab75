//! Property values and deferred tokens.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::json;

use crate::{Instance, ValueType};

/// A placeholder for a value that isn't known until deploy time.
///
/// Tokens are CloudFormation intrinsic function objects such as `{"Ref": "MyApp"}` or
/// `{"Fn::GetAtt": ["MyApp", "Arn"]}`. They are carried through to the wire format verbatim and
/// never resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct Token(serde_json::Value);

impl Token {
    /// A `Ref` to a parameter or another resource's logical ID.
    #[must_use]
    pub fn reference(logical_id: &str) -> Self {
        Self(json!({ "Ref": logical_id }))
    }

    /// An `Fn::GetAtt` of a resource attribute.
    #[must_use]
    pub fn get_att(logical_id: &str, attribute: &str) -> Self {
        Self(json!({ "Fn::GetAtt": [logical_id, attribute] }))
    }

    /// An `Fn::ImportValue` of another stack's export.
    #[must_use]
    pub fn import_value(export_name: &str) -> Self {
        Self(json!({ "Fn::ImportValue": export_name }))
    }

    /// Wrap an intrinsic function object, if `value` is one.
    ///
    /// An intrinsic is an object with exactly one key, where the key is `Ref`, `Condition`, or
    /// starts with `Fn::`.
    #[must_use]
    pub fn from_intrinsic(value: &serde_json::Value) -> Option<Self> {
        lazy_static! {
            static ref INTRINSIC_KEY: Regex = Regex::new(r"^(?:Ref|Condition|Fn::[A-Za-z0-9]+)$")
                .expect("intrinsic key pattern is valid");
        }

        let object = value.as_object()?;
        if object.len() != 1 {
            return None;
        }
        let (key, _) = object.iter().next()?;
        if INTRINSIC_KEY.is_match(key) {
            Some(Self(value.clone()))
        } else {
            None
        }
    }

    /// The intrinsic function object.
    #[must_use]
    pub fn as_json(&self) -> &serde_json::Value {
        &self.0
    }
}

/// A property value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    String(String),
    Bool(bool),
    Number(serde_json::Number),
    Token(Token),
    List(Vec<Value>),
    Struct(Instance),
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// The shape of this value, for error reporting.
    #[must_use]
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::String(_) => ValueType::String,
            Self::Bool(_) => ValueType::Boolean,
            Self::Number(_) => ValueType::Number,
            Self::Token(_) => ValueType::Token,
            Self::List(_) => ValueType::List,
            Self::Struct(_) => ValueType::Struct,
            Self::Map(_) => ValueType::Map,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Self::Token(token) => Some(token),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_struct(&self) -> Option<&Instance> {
        match self {
            Self::Struct(instance) => Some(instance),
            _ => None,
        }
    }

    /// Convert a JSON value into a property value.
    ///
    /// Intrinsic function objects become [`Token`]s, other objects become [`Value::Map`]s (which
    /// are bound to a schema if the property they're assigned to is a struct). Returns `None` for
    /// JSON `null`, which has no property value equivalent.
    #[must_use]
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        use serde_json::Value as Json;

        Some(match value {
            Json::Null => return None,
            Json::Bool(value) => Self::Bool(*value),
            Json::Number(value) => Self::Number(value.clone()),
            Json::String(value) => Self::String(value.clone()),
            Json::Array(values) => Self::List(values.iter().filter_map(Self::from_json).collect()),
            Json::Object(object) => {
                if let Some(token) = Token::from_intrinsic(value) {
                    return Some(Self::Token(token));
                }
                Self::Map(
                    object
                        .iter()
                        .filter_map(|(key, value)| Some((key.clone(), Self::from_json(value)?)))
                        .collect(),
                )
            }
        })
    }

    /// Render the value in wire format.
    pub(crate) fn to_json(&self) -> serde_json::Value {
        use serde_json::Value as Json;

        match self {
            Self::String(value) => Json::String(value.clone()),
            Self::Bool(value) => Json::Bool(*value),
            Self::Number(value) => Json::Number(value.clone()),
            Self::Token(token) => token.0.clone(),
            Self::List(values) => Json::Array(values.iter().map(Self::to_json).collect()),
            Self::Struct(instance) => Json::Object(instance.to_wire_format()),
            Self::Map(values) => Json::Object(
                values
                    .iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Number(value.into())
    }
}

impl From<f64> for Value {
    /// Non-finite floats have no JSON representation and become a `Number` of `0`.
    fn from(value: f64) -> Self {
        Self::Number(
            serde_json::Number::from_f64(value).unwrap_or_else(|| serde_json::Number::from(0_u8)),
        )
    }
}

impl From<Token> for Value {
    fn from(token: Token) -> Self {
        Self::Token(token)
    }
}

impl From<Instance> for Value {
    fn from(instance: Instance) -> Self {
        Self::Struct(instance)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<BTreeMap<String, T>> for Value {
    fn from(values: BTreeMap<String, T>) -> Self {
        Self::Map(
            values
                .into_iter()
                .map(|(key, value)| (key, value.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, T: Into<Value>, const N: usize> From<[(K, T); N]> for Value {
    fn from(entries: [(K, T); N]) -> Self {
        Self::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}
