//! Applications and their settings.

use crate::{ResourceType, Schema, ValueKind};

use super::{optional, required, BOOLEAN, INTEGER, STRING, TAGS};

/// `AWS::Pinpoint::App`
pub static APP: ResourceType = ResourceType {
    type_name: "AWS::Pinpoint::App",
    schema: Schema {
        name: "App",
        properties: &[required("Name", "name", STRING), optional("Tags", "tags", TAGS)],
    },
    attributes: &["Arn", "Id"],
};

/// `AWS::Pinpoint::ApplicationSettings`
pub static APPLICATION_SETTINGS: ResourceType = ResourceType {
    type_name: "AWS::Pinpoint::ApplicationSettings",
    schema: Schema {
        name: "ApplicationSettings",
        properties: &[
            required("ApplicationId", "application_id", STRING),
            optional("CampaignHook", "campaign_hook", ValueKind::Struct(&CAMPAIGN_HOOK)),
            optional("CloudWatchMetricsEnabled", "cloud_watch_metrics_enabled", BOOLEAN),
            optional("Limits", "limits", ValueKind::Struct(&APPLICATION_LIMITS)),
            optional("QuietTime", "quiet_time", ValueKind::Struct(&QUIET_TIME)),
        ],
    },
    attributes: &["Id"],
};

/// `AWS::Pinpoint::EventStream`
pub static EVENT_STREAM: ResourceType = ResourceType {
    type_name: "AWS::Pinpoint::EventStream",
    schema: Schema {
        name: "EventStream",
        properties: &[
            required("ApplicationId", "application_id", STRING),
            required("DestinationStreamArn", "destination_stream_arn", STRING),
            required("RoleArn", "role_arn", STRING),
        ],
    },
    attributes: &["Id"],
};

/// The Lambda function or web hook invoked to customize campaign segments.
pub static CAMPAIGN_HOOK: Schema = Schema {
    name: "CampaignHook",
    properties: &[
        optional("LambdaFunctionName", "lambda_function_name", STRING),
        optional("Mode", "mode", STRING),
        optional("WebUrl", "web_url", STRING),
    ],
};

/// Default sending limits for an application's campaigns.
pub static APPLICATION_LIMITS: Schema = Schema {
    name: "Limits",
    properties: &[
        optional("Daily", "daily", INTEGER),
        optional("MaximumDuration", "maximum_duration", INTEGER),
        optional("MessagesPerSecond", "messages_per_second", INTEGER),
        optional("Total", "total", INTEGER),
    ],
};

/// A daily window, in `HH:MM` local time, during which messages aren't sent.
pub static QUIET_TIME: Schema = Schema {
    name: "QuietTime",
    properties: &[required("End", "end", STRING), required("Start", "start", STRING)],
};

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use crate::{Error, Token, Value};

    use super::*;

    #[test]
    fn application_settings() {
        let settings = APPLICATION_SETTINGS
            .construct(vec![
                ("application_id", Value::from(Token::reference("App"))),
                ("cloud_watch_metrics_enabled", Value::from(true)),
                (
                    "limits",
                    Value::from([("daily", 100), ("messages_per_second", 50)]),
                ),
                (
                    "quiet_time",
                    Value::from([("start", "22:00"), ("end", "07:00")]),
                ),
            ])
            .unwrap();

        assert_eq!(
            serde_json::Value::Object(settings.to_wire_format()),
            json!({
                "ApplicationId": { "Ref": "App" },
                "CloudWatchMetricsEnabled": true,
                "Limits": { "Daily": 100, "MessagesPerSecond": 50 },
                "QuietTime": { "End": "07:00", "Start": "22:00" },
            })
        );
    }

    #[test]
    fn event_stream_requires_everything() {
        assert_matches!(
            EVENT_STREAM.construct(vec![
                ("application_id", "abc123"),
                ("role_arn", "arn:aws:iam::123456789012:role/pinpoint"),
            ]),
            Err(Error::MissingRequiredProperty { path }) if path == "destination_stream_arn"
        );
    }
}
