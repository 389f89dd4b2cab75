//! Declarative descriptions of resource and struct properties.

use crate::ValueKind;

/// One declared property of a resource type or nested struct.
#[derive(Clone, Copy, Debug)]
pub struct PropertySchema {
    /// The CloudFormation-side key, e.g. `ApplicationId`.
    pub wire_name: &'static str,

    /// The in-memory key, e.g. `application_id`.
    pub local_name: &'static str,

    /// Whether the property must be given a value at construction.
    pub required: bool,

    /// The shape of values the property accepts.
    pub kind: ValueKind,
}

impl PropertySchema {
    /// Declare a required property.
    #[must_use]
    pub const fn required(
        wire_name: &'static str,
        local_name: &'static str,
        kind: ValueKind,
    ) -> Self {
        Self {
            wire_name,
            local_name,
            required: true,
            kind,
        }
    }

    /// Declare an optional property.
    #[must_use]
    pub const fn optional(
        wire_name: &'static str,
        local_name: &'static str,
        kind: ValueKind,
    ) -> Self {
        Self {
            wire_name,
            local_name,
            required: false,
            kind,
        }
    }
}

/// An ordered set of property declarations.
///
/// Declaration order is the order in which properties are rendered to the wire format. Schemas
/// are expected to live in `static`s and are never mutated, so they can be shared freely between
/// threads.
#[derive(Debug)]
pub struct Schema {
    /// A name for the schema, used in error messages (e.g. `QuietTime`).
    pub name: &'static str,

    /// The declared properties, in rendering order.
    pub properties: &'static [PropertySchema],
}

impl Schema {
    /// Find a property by its local name, along with its position in the schema.
    #[must_use]
    pub fn property(&self, local_name: &str) -> Option<(usize, &'static PropertySchema)> {
        self.properties
            .iter()
            .enumerate()
            .find(|(_, property)| property.local_name == local_name)
    }

    /// Find a property by its wire name, along with its position in the schema.
    #[must_use]
    pub fn property_by_wire_name(
        &self,
        wire_name: &str,
    ) -> Option<(usize, &'static PropertySchema)> {
        self.properties
            .iter()
            .enumerate()
            .find(|(_, property)| property.wire_name == wire_name)
    }

    /// Iterate over the required properties.
    pub fn required_properties(&self) -> impl Iterator<Item = &'static PropertySchema> {
        self.properties.iter().filter(|property| property.required)
    }
}

/// A CloudFormation resource type.
#[derive(Debug)]
pub struct ResourceType {
    /// The CloudFormation resource type name, e.g. `AWS::Pinpoint::App`.
    pub type_name: &'static str,

    /// The schema for the resource's `Properties`.
    pub schema: Schema,

    /// Names of the attributes available through `Fn::GetAtt` once the resource is deployed.
    pub attributes: &'static [&'static str],
}

impl ResourceType {
    /// Indicates whether the resource type exposes the named attribute.
    #[must_use]
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains(&name)
    }
}
