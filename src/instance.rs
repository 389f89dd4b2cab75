//! Property values bound to a schema.

use std::{collections::BTreeMap, fmt, ptr};

use tracing::{debug, trace};

use crate::{
    BinderOptions, Error, PropertySchema, Result, ScalarType, Schema, Strictness, Value, ValueKind,
};

/// A set of property values that has been validated against a [`Schema`].
///
/// Every required property always has a value, and every value has the shape its property
/// declares. Individual values can be replaced with [`set`](Self::set) or removed with
/// [`clear`](Self::clear), but the schema is fixed.
#[derive(Clone)]
pub struct Instance {
    schema: &'static Schema,
    options: BinderOptions,

    /// One slot per schema property, in declaration order. `None` is an absent optional property.
    values: Vec<Option<Value>>,
}

impl Instance {
    /// Bind a property bag, keyed by local names, to `schema`.
    ///
    /// Unknown keys are rejected. If a key appears more than once the last value wins.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownProperty`] if a key isn't declared by the schema.
    /// - [`Error::TypeMismatch`] if a value doesn't have the shape its property declares.
    /// - [`Error::MissingRequiredProperty`] if a required property has no value.
    ///
    /// Nested structs given as [`Value::Map`]s are bound recursively, and their errors carry the
    /// full path to the offending property.
    pub fn construct<I, K, V>(schema: &'static Schema, bag: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self::construct_with(schema, bag, BinderOptions::default())
    }

    /// Bind a property bag, keyed by local names, to `schema` with the given options.
    ///
    /// # Errors
    ///
    /// As [`construct`](Self::construct), except that unknown keys are dropped under
    /// [`Strictness::Permissive`].
    pub fn construct_with<I, K, V>(
        schema: &'static Schema,
        bag: I,
        options: BinderOptions,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let binder = Binder {
            options,
            keys: Keys::Local,
        };
        binder.bind_struct(
            schema,
            bag.into_iter().map(|(key, value)| (key.into(), value.into())),
        )
    }

    /// Bind a JSON object, keyed by local names, to `schema`.
    ///
    /// Intrinsic function objects (`{"Ref": ...}`, `{"Fn::GetAtt": ...}`, etc.) become
    /// [`Token`](crate::Token)s. `null` values are treated as absent.
    ///
    /// # Errors
    ///
    /// As [`construct_with`](Self::construct_with).
    pub fn from_json(
        schema: &'static Schema,
        object: &serde_json::Map<String, serde_json::Value>,
        options: BinderOptions,
    ) -> Result<Self> {
        let binder = Binder {
            options,
            keys: Keys::Local,
        };
        binder.bind_struct(schema, json_entries(object))
    }

    /// Bind a wire format property map, keyed by wire names, to `schema`.
    ///
    /// This is the inverse of [`to_wire_format`](Self::to_wire_format), and can be used to ingest
    /// the `Properties` of a resource in an existing template.
    ///
    /// # Errors
    ///
    /// As [`construct_with`](Self::construct_with). Error paths still use local names.
    pub fn from_wire_format(
        schema: &'static Schema,
        properties: &serde_json::Map<String, serde_json::Value>,
        options: BinderOptions,
    ) -> Result<Self> {
        let binder = Binder {
            options,
            keys: Keys::Wire,
        };
        binder.bind_struct(schema, json_entries(properties))
    }

    /// The schema the instance is bound to.
    #[must_use]
    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    /// Get a property's value, or `None` if it's an optional property with no value.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownProperty`] if the schema doesn't declare `local_name`.
    pub fn get(&self, local_name: &str) -> Result<Option<&Value>> {
        let (index, _) = self.lookup(local_name)?;
        Ok(self.values[index].as_ref())
    }

    /// Replace a property's value.
    ///
    /// Only the new value is validated. Nested maps are bound with the options the instance was
    /// constructed with.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownProperty`] if the schema doesn't declare `local_name`.
    /// - [`Error::TypeMismatch`] (or any error from binding a nested struct) if the value doesn't
    ///   have the property's shape. The instance is unchanged.
    pub fn set(&mut self, local_name: &str, value: impl Into<Value>) -> Result<()> {
        let (index, property) = self.lookup(local_name)?;
        let binder = Binder {
            options: self.options,
            keys: Keys::Local,
        };
        let value = binder
            .bind_value(property.kind, value.into())
            .map_err(|error| error.nested(property.local_name))?;

        trace!(schema = self.schema.name, property = property.local_name, "Set");
        self.values[index] = Some(value);
        Ok(())
    }

    /// Remove an optional property's value.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownProperty`] if the schema doesn't declare `local_name`.
    /// - [`Error::MissingRequiredProperty`] if the property is required.
    pub fn clear(&mut self, local_name: &str) -> Result<()> {
        let (index, property) = self.lookup(local_name)?;
        if property.required {
            return Err(Error::MissingRequiredProperty {
                path: property.local_name.to_string(),
            });
        }

        trace!(schema = self.schema.name, property = property.local_name, "Clear");
        self.values[index] = None;
        Ok(())
    }

    /// Iterate over the properties that have values, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> + '_ {
        self.schema
            .properties
            .iter()
            .zip(&self.values)
            .filter_map(|(property, value)| Some((property.local_name, value.as_ref()?)))
    }

    /// Render the instance in CloudFormation's wire format.
    ///
    /// Properties are keyed by wire name, in declaration order. Absent optional properties are
    /// omitted, tokens are emitted verbatim, and nested structs are rendered recursively.
    #[must_use]
    pub fn to_wire_format(&self) -> serde_json::Map<String, serde_json::Value> {
        self.schema
            .properties
            .iter()
            .zip(&self.values)
            .filter_map(|(property, value)| {
                let value = value.as_ref()?;
                Some((property.wire_name.to_string(), value.to_json()))
            })
            .collect()
    }

    fn lookup(&self, local_name: &str) -> Result<(usize, &'static PropertySchema)> {
        self.schema
            .property(local_name)
            .ok_or_else(|| Error::UnknownProperty {
                path: local_name.to_string(),
            })
    }
}

impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.schema, other.schema) && self.values == other.values
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct(self.schema.name);
        for (name, value) in self.iter() {
            debug.field(name, value);
        }
        debug.finish()
    }
}

impl serde::Serialize for Instance {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_wire_format().serialize(serializer)
    }
}

/// Which names the keys of a property bag are matched against.
#[derive(Clone, Copy)]
enum Keys {
    Local,
    Wire,
}

struct Binder {
    options: BinderOptions,
    keys: Keys,
}

impl Binder {
    fn bind_struct(
        &self,
        schema: &'static Schema,
        entries: impl IntoIterator<Item = (String, Value)>,
    ) -> Result<Instance> {
        let mut values = vec![None; schema.properties.len()];

        for (key, value) in entries {
            let property = match self.keys {
                Keys::Local => schema.property(&key),
                Keys::Wire => schema.property_by_wire_name(&key),
            };
            let (index, property) = match (property, self.options.strictness) {
                (Some(property), _) => property,
                (None, Strictness::Strict) => return Err(Error::UnknownProperty { path: key }),
                (None, Strictness::Permissive) => {
                    debug!(schema = schema.name, property = %key, "Dropping unknown property");
                    continue;
                }
            };

            let value = self
                .bind_value(property.kind, value)
                .map_err(|error| error.nested(property.local_name))?;
            values[index] = Some(value);
        }

        if let Some(property) = schema
            .properties
            .iter()
            .zip(&values)
            .find_map(|(property, value)| {
                (property.required && value.is_none()).then_some(property)
            })
        {
            return Err(Error::MissingRequiredProperty {
                path: property.local_name.to_string(),
            });
        }

        let supplied = values.iter().filter(|value| value.is_some()).count();
        debug!(schema = schema.name, supplied, "Construct");
        Ok(Instance {
            schema,
            options: self.options,
            values,
        })
    }

    /// Check `value` against `kind`, binding nested maps to their schemas.
    ///
    /// Errors about `value` itself have an empty path, so callers can prefix the property name.
    fn bind_value(&self, kind: ValueKind, value: Value) -> Result<Value> {
        match (kind, value) {
            (ValueKind::ResolvableScalar(_), value @ Value::Token(_)) => Ok(value),
            (ValueKind::Scalar(scalar) | ValueKind::ResolvableScalar(scalar), value)
                if scalar_matches(scalar, &value) =>
            {
                Ok(value)
            }
            (ValueKind::StringList, Value::List(values)) => values
                .into_iter()
                .enumerate()
                .map(|(index, value)| match value {
                    Value::String(_) | Value::Token(_) => Ok(value),
                    other => Err(mismatch("String", &other).nested(&format!("[{}]", index))),
                })
                .collect::<Result<_>>()
                .map(Value::List),
            (ValueKind::Struct(schema), Value::Struct(instance))
                if ptr::eq(schema, instance.schema) =>
            {
                Ok(Value::Struct(instance))
            }
            (ValueKind::Struct(schema), Value::Map(entries)) => {
                self.bind_struct(schema, entries).map(Value::Struct)
            }
            (ValueKind::StructList(schema), Value::List(values)) => values
                .into_iter()
                .enumerate()
                .map(|(index, value)| {
                    self.bind_value(ValueKind::Struct(schema), value)
                        .map_err(|error| error.nested(&format!("[{}]", index)))
                })
                .collect::<Result<_>>()
                .map(Value::List),
            (ValueKind::StructMap(schema), Value::Map(entries)) => entries
                .into_iter()
                .map(|(key, value)| {
                    let value = self
                        .bind_value(ValueKind::Struct(schema), value)
                        .map_err(|error| error.nested(&key))?;
                    Ok((key, value))
                })
                .collect::<Result<BTreeMap<_, _>>>()
                .map(Value::Map),
            // A map whose only key looks like an intrinsic function is parsed as a token
            (ValueKind::StructMap(_) | ValueKind::FreeformMap, Value::Token(token)) => {
                let entries: BTreeMap<_, _> = token
                    .as_json()
                    .as_object()
                    .map(|object| json_entries(object).collect())
                    .unwrap_or_default();
                self.bind_value(kind, Value::Map(entries))
            }
            (ValueKind::FreeformMap, Value::Map(entries)) => entries
                .into_iter()
                .map(|(key, value)| match value {
                    Value::String(_) | Value::Token(_) => Ok((key, value)),
                    other => Err(mismatch("String", &other).nested(&key)),
                })
                .collect::<Result<BTreeMap<_, _>>>()
                .map(Value::Map),
            (ValueKind::Json, value) => Ok(Value::from_json(&value.to_json()).unwrap_or(value)),
            (kind, value) => Err(mismatch(kind, &value)),
        }
    }
}

fn scalar_matches(scalar: ScalarType, value: &Value) -> bool {
    match (scalar, value) {
        (ScalarType::String, Value::String(_))
        | (ScalarType::Boolean, Value::Bool(_))
        | (ScalarType::Number, Value::Number(_)) => true,
        (ScalarType::Integer, Value::Number(number)) => number.is_i64() || number.is_u64(),
        _ => false,
    }
}

fn mismatch(expected: impl fmt::Display, got: &Value) -> Error {
    Error::TypeMismatch {
        path: String::new(),
        expected: expected.to_string(),
        got: got.value_type(),
    }
}

fn json_entries(
    object: &serde_json::Map<String, serde_json::Value>,
) -> impl Iterator<Item = (String, Value)> + '_ {
    object
        .iter()
        .filter_map(|(key, value)| Some((key.clone(), Value::from_json(value)?)))
}
