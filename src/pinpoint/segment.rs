//! Segments and their dimensions.

use crate::{ResourceType, Schema, ValueKind};

use super::{optional, required, INTEGER, NUMBER, STRING, STRING_LIST, TAGS};

/// `AWS::Pinpoint::Segment`
pub static SEGMENT: ResourceType = ResourceType {
    type_name: "AWS::Pinpoint::Segment",
    schema: Schema {
        name: "Segment",
        properties: &[
            required("ApplicationId", "application_id", STRING),
            optional(
                "Dimensions",
                "dimensions",
                ValueKind::Struct(&SEGMENT_DIMENSIONS),
            ),
            required("Name", "name", STRING),
            optional(
                "SegmentGroups",
                "segment_groups",
                ValueKind::Struct(&SEGMENT_GROUPS),
            ),
            optional("Tags", "tags", TAGS),
        ],
    },
    attributes: &["Arn", "SegmentId"],
};

pub static SEGMENT_DIMENSIONS: Schema = Schema {
    name: "SegmentDimensions",
    properties: &[
        optional(
            "Attributes",
            "attributes",
            ValueKind::StructMap(&ATTRIBUTE_DIMENSION),
        ),
        optional("Behavior", "behavior", ValueKind::Struct(&BEHAVIOR)),
        optional("Demographic", "demographic", ValueKind::Struct(&DEMOGRAPHIC)),
        optional("Location", "location", ValueKind::Struct(&LOCATION)),
        optional("Metrics", "metrics", ValueKind::StructMap(&METRIC_DIMENSION)),
        optional(
            "UserAttributes",
            "user_attributes",
            ValueKind::StructMap(&ATTRIBUTE_DIMENSION),
        ),
    ],
};

/// A filter on a custom attribute's values.
pub static ATTRIBUTE_DIMENSION: Schema = Schema {
    name: "AttributeDimension",
    properties: &[
        optional("AttributeType", "attribute_type", STRING),
        optional("Values", "values", STRING_LIST),
    ],
};

/// A comparison against a custom metric.
pub static METRIC_DIMENSION: Schema = Schema {
    name: "MetricDimension",
    properties: &[
        required("ComparisonOperator", "comparison_operator", STRING),
        required("Value", "value", NUMBER),
    ],
};

/// An inclusive or exclusive filter on a set of values.
pub static SET_DIMENSION: Schema = Schema {
    name: "SetDimension",
    properties: &[
        optional("DimensionType", "dimension_type", STRING),
        optional("Values", "values", STRING_LIST),
    ],
};

pub static BEHAVIOR: Schema = Schema {
    name: "Behavior",
    properties: &[optional("Recency", "recency", ValueKind::Struct(&RECENCY))],
};

/// How recently endpoints were (or weren't) active.
pub static RECENCY: Schema = Schema {
    name: "Recency",
    properties: &[
        required("Duration", "duration", STRING),
        required("RecencyType", "recency_type", STRING),
    ],
};

pub static DEMOGRAPHIC: Schema = Schema {
    name: "Demographic",
    properties: &[
        optional("AppVersion", "app_version", ValueKind::Struct(&SET_DIMENSION)),
        optional("Channel", "channel", ValueKind::Struct(&SET_DIMENSION)),
        optional("DeviceType", "device_type", ValueKind::Struct(&SET_DIMENSION)),
        optional("Make", "make", ValueKind::Struct(&SET_DIMENSION)),
        optional("Model", "model", ValueKind::Struct(&SET_DIMENSION)),
        optional("Platform", "platform", ValueKind::Struct(&SET_DIMENSION)),
    ],
};

pub static LOCATION: Schema = Schema {
    name: "Location",
    properties: &[
        optional("Country", "country", ValueKind::Struct(&SET_DIMENSION)),
        optional("GPSPoint", "gps_point", ValueKind::Struct(&GPS_POINT)),
    ],
};

/// Endpoints within a radius of a point.
pub static GPS_POINT: Schema = Schema {
    name: "GPSPoint",
    properties: &[
        required("Coordinates", "coordinates", ValueKind::Struct(&COORDINATES)),
        required("RangeInKilometers", "range_in_kilometers", NUMBER),
    ],
};

pub static COORDINATES: Schema = Schema {
    name: "Coordinates",
    properties: &[
        required("Latitude", "latitude", NUMBER),
        required("Longitude", "longitude", NUMBER),
    ],
};

/// Segments built from other segments.
pub static SEGMENT_GROUPS: Schema = Schema {
    name: "SegmentGroups",
    properties: &[
        optional("Groups", "groups", ValueKind::StructList(&GROUPS)),
        optional("Include", "include", STRING),
    ],
};

pub static GROUPS: Schema = Schema {
    name: "Groups",
    properties: &[
        optional(
            "Dimensions",
            "dimensions",
            ValueKind::StructList(&SEGMENT_DIMENSIONS),
        ),
        optional(
            "SourceSegments",
            "source_segments",
            ValueKind::StructList(&SOURCE_SEGMENTS),
        ),
        optional("SourceType", "source_type", STRING),
        optional("Type", "type", STRING),
    ],
};

pub static SOURCE_SEGMENTS: Schema = Schema {
    name: "SourceSegments",
    properties: &[
        required("Id", "id", STRING),
        optional("Version", "version", INTEGER),
    ],
};
