//! Resources: instances bound to a CloudFormation resource type.

use std::ptr;

use serde_json::json;

use crate::{BinderOptions, Error, Instance, ResourceType, Result, Token, Value};

/// The properties of one CloudFormation resource.
#[derive(Clone, Debug)]
pub struct Resource {
    resource_type: &'static ResourceType,
    properties: Instance,
}

impl ResourceType {
    /// Declare a resource of this type from a property bag keyed by local names.
    ///
    /// # Errors
    ///
    /// See [`Instance::construct`].
    pub fn construct<I, K, V>(&'static self, bag: I) -> Result<Resource>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.construct_with(bag, BinderOptions::default())
    }

    /// Declare a resource of this type with the given binder options.
    ///
    /// # Errors
    ///
    /// See [`Instance::construct_with`].
    pub fn construct_with<I, K, V>(
        &'static self,
        bag: I,
        options: BinderOptions,
    ) -> Result<Resource>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Ok(Resource {
            resource_type: self,
            properties: Instance::construct_with(&self.schema, bag, options)?,
        })
    }

    /// Declare a resource of this type from its wire format `Properties`.
    ///
    /// # Errors
    ///
    /// See [`Instance::from_wire_format`].
    pub fn from_wire_format(
        &'static self,
        properties: &serde_json::Map<String, serde_json::Value>,
        options: BinderOptions,
    ) -> Result<Resource> {
        Ok(Resource {
            resource_type: self,
            properties: Instance::from_wire_format(&self.schema, properties, options)?,
        })
    }
}

impl Resource {
    /// The resource's type.
    #[must_use]
    pub fn resource_type(&self) -> &'static ResourceType {
        self.resource_type
    }

    /// The resource's properties.
    #[must_use]
    pub fn properties(&self) -> &Instance {
        &self.properties
    }

    /// See [`Instance::get`].
    ///
    /// # Errors
    ///
    /// [`Error::UnknownProperty`] if the resource type doesn't declare `local_name`.
    pub fn get(&self, local_name: &str) -> Result<Option<&Value>> {
        self.properties.get(local_name)
    }

    /// See [`Instance::set`].
    ///
    /// # Errors
    ///
    /// See [`Instance::set`].
    pub fn set(&mut self, local_name: &str, value: impl Into<Value>) -> Result<()> {
        self.properties.set(local_name, value)
    }

    /// See [`Instance::clear`].
    ///
    /// # Errors
    ///
    /// See [`Instance::clear`].
    pub fn clear(&mut self, local_name: &str) -> Result<()> {
        self.properties.clear(local_name)
    }

    /// Render the resource's `Properties` in wire format.
    #[must_use]
    pub fn to_wire_format(&self) -> serde_json::Map<String, serde_json::Value> {
        self.properties.to_wire_format()
    }

    /// Render the resource as it would appear under a template's `Resources`, i.e. with its
    /// `Type` and `Properties`.
    #[must_use]
    pub fn to_template_fragment(&self) -> serde_json::Value {
        json!({
            "Type": self.resource_type.type_name,
            "Properties": self.to_wire_format(),
        })
    }

    /// A token for one of the resource's attributes, given the logical ID the resource will have
    /// in its template.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownAttribute`] if the resource type doesn't expose `attribute`.
    pub fn attribute(&self, logical_id: &str, attribute: &str) -> Result<Token> {
        if !self.resource_type.has_attribute(attribute) {
            return Err(Error::UnknownAttribute {
                resource_type: self.resource_type.type_name,
                attribute: attribute.to_string(),
            });
        }
        Ok(Token::get_att(logical_id, attribute))
    }

    /// A `Ref` token for the resource, given the logical ID it will have in its template.
    #[allow(clippy::unused_self)]
    #[must_use]
    pub fn reference(&self, logical_id: &str) -> Token {
        Token::reference(logical_id)
    }
}

impl PartialEq for Resource {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.resource_type, other.resource_type) && self.properties == other.properties
    }
}

impl serde::Serialize for Resource {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_template_fragment().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use crate::{PropertySchema, ScalarType, Schema, ValueKind};

    use super::*;

    static VOICE_CHANNEL: ResourceType = ResourceType {
        type_name: "AWS::Pinpoint::VoiceChannel",
        schema: Schema {
            name: "VoiceChannel",
            properties: &[
                PropertySchema::required(
                    "ApplicationId",
                    "application_id",
                    ValueKind::ResolvableScalar(ScalarType::String),
                ),
                PropertySchema::optional(
                    "Enabled",
                    "enabled",
                    ValueKind::ResolvableScalar(ScalarType::Boolean),
                ),
            ],
        },
        attributes: &["Id"],
    };

    #[test]
    fn template_fragment() {
        let mut channel = VOICE_CHANNEL
            .construct(vec![("application_id", Token::reference("App"))])
            .unwrap();
        channel.set("enabled", true).unwrap();

        assert_eq!(
            serde_json::to_value(&channel).unwrap(),
            json!({
                "Type": "AWS::Pinpoint::VoiceChannel",
                "Properties": {
                    "ApplicationId": { "Ref": "App" },
                    "Enabled": true,
                },
            })
        );
    }

    #[test]
    fn attributes() {
        let channel = VOICE_CHANNEL
            .construct(vec![("application_id", "abc123")])
            .unwrap();

        assert_eq!(
            channel.attribute("Voice", "Id").unwrap(),
            Token::get_att("Voice", "Id")
        );
        assert_eq!(channel.reference("Voice"), Token::reference("Voice"));
        assert_matches!(
            channel.attribute("Voice", "Arn"),
            Err(Error::UnknownAttribute { resource_type: "AWS::Pinpoint::VoiceChannel", attribute })
                if attribute == "Arn"
        );
    }

    #[test]
    fn from_wire_format() {
        let properties = json!({ "ApplicationId": "abc123", "Enabled": { "Ref": "Enabled" } });
        let channel = VOICE_CHANNEL
            .from_wire_format(properties.as_object().unwrap(), BinderOptions::default())
            .unwrap();

        assert!(ptr::eq(channel.resource_type(), &VOICE_CHANNEL));
        assert_eq!(
            channel.get("enabled").unwrap(),
            Some(&Value::from(Token::reference("Enabled")))
        );
        assert_eq!(serde_json::Value::Object(channel.to_wire_format()), properties);
    }
}
