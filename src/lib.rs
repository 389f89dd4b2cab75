//! Schema-driven CloudFormation property binding for `AWS::Pinpoint::*` resources.
//!
//! A resource type is described declaratively by a [`ResourceType`]: its type name, the
//! attributes it exposes, and a [`Schema`] listing its properties in order. Each property has a
//! wire name (the CloudFormation key), a local name (the key used when constructing), whether
//! it's required, and a [`ValueKind`] describing its shape.
//!
//! Binding a property bag to a schema produces an [`Instance`] (or a [`Resource`], when bound to a
//! resource type). Binding validates the bag up front, so rendering it to CloudFormation's wire
//! format can't fail:
//!
//! ```
//! use pinpoint_cfn::{pinpoint, Token, Value};
//!
//! let campaign = pinpoint::CAMPAIGN
//!     .construct(vec![
//!         ("application_id", Value::from(Token::reference("App"))),
//!         ("name", Value::from("Welcome")),
//!         ("segment_id", Value::from(Token::get_att("Segment", "SegmentId"))),
//!         (
//!             "schedule",
//!             Value::from([("quiet_time", [("end", "18:00"), ("start", "08:00")])]),
//!         ),
//!     ])
//!     .unwrap();
//!
//! assert_eq!(
//!     serde_json::Value::Object(campaign.to_wire_format()),
//!     serde_json::json!({
//!         "ApplicationId": { "Ref": "App" },
//!         "Name": "Welcome",
//!         "Schedule": { "QuietTime": { "End": "18:00", "Start": "08:00" } },
//!         "SegmentId": { "Fn::GetAtt": ["Segment", "SegmentId"] },
//!     }),
//! );
//! ```
//!
//! Values that aren't known until deploy time are [`Token`]s, which are carried through to the
//! wire format untouched.
#![warn(clippy::pedantic)]

mod error;
mod instance;
mod kind;
mod options;
mod resource;
mod schema;
mod value;

pub mod pinpoint;

pub use error::{Error, Result};
pub use instance::Instance;
pub use kind::{ScalarType, ValueKind, ValueType};
pub use options::{BinderOptions, InvalidStrictness, Strictness};
pub use resource::Resource;
pub use schema::{PropertySchema, ResourceType, Schema};
pub use value::{Token, Value};
