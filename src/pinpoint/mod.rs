//! Schemas for the `AWS::Pinpoint::*` resource types.
//!
//! Each resource type is a [`ResourceType`] in a `static`, and the structs nested in their
//! properties are [`Schema`](crate::Schema) `static`s that can be used to build nested values
//! directly with [`Instance::construct`](crate::Instance::construct). Nested structs can equally
//! be given as plain maps keyed by local name.
//!
//! ```
//! use pinpoint_cfn::pinpoint;
//!
//! let app = pinpoint::APP.construct(vec![("name", "MyApp")]).unwrap();
//! assert_eq!(
//!     serde_json::Value::Object(app.to_wire_format()),
//!     serde_json::json!({ "Name": "MyApp" }),
//! );
//! ```
#![allow(clippy::module_name_repetitions)]

mod app;
mod campaign;
mod channels;
mod segment;
mod templates;

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{Error, PropertySchema, ResourceType, Result, ScalarType, ValueKind};

pub use app::{
    APP, APPLICATION_LIMITS, APPLICATION_SETTINGS, CAMPAIGN_HOOK, EVENT_STREAM, QUIET_TIME,
};
pub use campaign::{
    CAMPAIGN, CAMPAIGN_CUSTOM_MESSAGE, CAMPAIGN_EMAIL_MESSAGE, CAMPAIGN_EVENT_FILTER,
    CAMPAIGN_IN_APP_MESSAGE, CAMPAIGN_LIMITS, CAMPAIGN_SMS_MESSAGE, CUSTOM_DELIVERY_CONFIGURATION,
    EVENT_DIMENSIONS, MESSAGE, MESSAGE_CONFIGURATION, SCHEDULE, TEMPLATE, TEMPLATE_CONFIGURATION,
    WRITE_TREATMENT_RESOURCE,
};
pub use channels::{
    ADM_CHANNEL, APNS_CHANNEL, APNS_SANDBOX_CHANNEL, APNS_VOIP_CHANNEL, APNS_VOIP_SANDBOX_CHANNEL,
    BAIDU_CHANNEL, EMAIL_CHANNEL, GCM_CHANNEL, SMS_CHANNEL, VOICE_CHANNEL,
};
pub use segment::{
    ATTRIBUTE_DIMENSION, BEHAVIOR, COORDINATES, DEMOGRAPHIC, GPS_POINT, GROUPS, LOCATION,
    METRIC_DIMENSION, RECENCY, SEGMENT, SEGMENT_DIMENSIONS, SEGMENT_GROUPS, SET_DIMENSION,
    SOURCE_SEGMENTS,
};
pub use templates::{
    ANDROID_PUSH_NOTIFICATION_TEMPLATE, APNS_PUSH_NOTIFICATION_TEMPLATE, BODY_CONFIG,
    BUTTON_CONFIG, DEFAULT_BUTTON_CONFIGURATION, DEFAULT_PUSH_NOTIFICATION_TEMPLATE,
    EMAIL_TEMPLATE, HEADER_CONFIG, IN_APP_MESSAGE_CONTENT, IN_APP_TEMPLATE,
    OVERRIDE_BUTTON_CONFIGURATION, PUSH_TEMPLATE, SMS_TEMPLATE,
};

/// Every `AWS::Pinpoint::*` resource type.
pub static RESOURCE_TYPES: &[&ResourceType] = &[
    &ADM_CHANNEL,
    &APNS_CHANNEL,
    &APNS_SANDBOX_CHANNEL,
    &APNS_VOIP_CHANNEL,
    &APNS_VOIP_SANDBOX_CHANNEL,
    &APP,
    &APPLICATION_SETTINGS,
    &BAIDU_CHANNEL,
    &CAMPAIGN,
    &EMAIL_CHANNEL,
    &EMAIL_TEMPLATE,
    &EVENT_STREAM,
    &GCM_CHANNEL,
    &IN_APP_TEMPLATE,
    &PUSH_TEMPLATE,
    &SEGMENT,
    &SMS_CHANNEL,
    &SMS_TEMPLATE,
    &VOICE_CHANNEL,
];

/// Look up a resource type by its type name, e.g. `AWS::Pinpoint::App`.
///
/// # Errors
///
/// [`Error::UnknownResourceType`] if `type_name` isn't a Pinpoint resource type.
pub fn resource_type(type_name: &str) -> Result<&'static ResourceType> {
    lazy_static! {
        static ref BY_TYPE_NAME: HashMap<&'static str, &'static ResourceType> = RESOURCE_TYPES
            .iter()
            .map(|resource_type| (resource_type.type_name, *resource_type))
            .collect();
    }

    BY_TYPE_NAME
        .get(type_name)
        .copied()
        .ok_or_else(|| Error::UnknownResourceType(type_name.to_string()))
}

const STRING: ValueKind = ValueKind::ResolvableScalar(ScalarType::String);
const BOOLEAN: ValueKind = ValueKind::ResolvableScalar(ScalarType::Boolean);
const INTEGER: ValueKind = ValueKind::ResolvableScalar(ScalarType::Integer);
const NUMBER: ValueKind = ValueKind::ResolvableScalar(ScalarType::Number);
const STRING_LIST: ValueKind = ValueKind::StringList;
const TAGS: ValueKind = ValueKind::FreeformMap;

const fn required(
    wire_name: &'static str,
    local_name: &'static str,
    kind: ValueKind,
) -> PropertySchema {
    PropertySchema::required(wire_name, local_name, kind)
}

const fn optional(
    wire_name: &'static str,
    local_name: &'static str,
    kind: ValueKind,
) -> PropertySchema {
    PropertySchema::optional(wire_name, local_name, kind)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use assert_matches::assert_matches;
    use regex::Regex;

    use crate::{Schema, ValueKind};

    use super::*;

    fn schemas(schema: &'static Schema, seen: &mut Vec<&'static Schema>) {
        if seen.iter().any(|other| std::ptr::eq(*other, schema)) {
            return;
        }
        seen.push(schema);
        for property in schema.properties {
            match property.kind {
                ValueKind::Struct(nested)
                | ValueKind::StructList(nested)
                | ValueKind::StructMap(nested) => schemas(nested, seen),
                _ => {}
            }
        }
    }

    #[test]
    fn lookup() {
        assert!(std::ptr::eq(resource_type("AWS::Pinpoint::App").unwrap(), &APP));
        assert!(std::ptr::eq(
            resource_type("AWS::Pinpoint::APNSVoipSandboxChannel").unwrap(),
            &APNS_VOIP_SANDBOX_CHANNEL
        ));
        assert_matches!(
            resource_type("AWS::PinpointEmail::Identity"),
            Err(Error::UnknownResourceType(name)) if name == "AWS::PinpointEmail::Identity"
        );
    }

    #[test]
    fn naming_conventions() {
        let type_name = Regex::new(r"^AWS::Pinpoint::[A-Za-z]+$").unwrap();
        let wire_name = Regex::new(r"^[A-Z][A-Za-z]*$").unwrap();
        let local_name = Regex::new(r"^[a-z][a-z_]*$").unwrap();

        let mut type_names = HashSet::new();
        let mut seen = Vec::new();
        for resource_type in RESOURCE_TYPES {
            assert!(
                type_name.is_match(resource_type.type_name),
                "{}",
                resource_type.type_name
            );
            assert!(type_names.insert(resource_type.type_name));
            schemas(&resource_type.schema, &mut seen);
        }
        assert_eq!(type_names.len(), 19);

        for schema in seen {
            let mut wire_names = HashSet::new();
            let mut local_names = HashSet::new();
            for property in schema.properties {
                assert!(wire_name.is_match(property.wire_name), "{}", property.wire_name);
                assert!(local_name.is_match(property.local_name), "{}", property.local_name);
                assert!(
                    wire_names.insert(property.wire_name),
                    "{}.{}",
                    schema.name,
                    property.wire_name
                );
                assert!(
                    local_names.insert(property.local_name),
                    "{}.{}",
                    schema.name,
                    property.local_name
                );
            }
        }
    }
}
