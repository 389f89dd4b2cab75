//! Campaigns and the structs that configure them.

use crate::{ResourceType, Schema, ValueKind};

use super::{
    app::{CAMPAIGN_HOOK, QUIET_TIME},
    optional, required,
    segment::{ATTRIBUTE_DIMENSION, METRIC_DIMENSION, SET_DIMENSION},
    templates::IN_APP_MESSAGE_CONTENT,
    BOOLEAN, INTEGER, STRING, STRING_LIST, TAGS,
};

/// `AWS::Pinpoint::Campaign`
pub static CAMPAIGN: ResourceType = ResourceType {
    type_name: "AWS::Pinpoint::Campaign",
    schema: Schema {
        name: "Campaign",
        properties: &[
            optional(
                "AdditionalTreatments",
                "additional_treatments",
                ValueKind::StructList(&WRITE_TREATMENT_RESOURCE),
            ),
            required("ApplicationId", "application_id", STRING),
            optional("CampaignHook", "campaign_hook", ValueKind::Struct(&CAMPAIGN_HOOK)),
            optional(
                "CustomDeliveryConfiguration",
                "custom_delivery_configuration",
                ValueKind::Struct(&CUSTOM_DELIVERY_CONFIGURATION),
            ),
            optional("Description", "description", STRING),
            optional("HoldoutPercent", "holdout_percent", INTEGER),
            optional("IsPaused", "is_paused", BOOLEAN),
            optional("Limits", "limits", ValueKind::Struct(&CAMPAIGN_LIMITS)),
            optional(
                "MessageConfiguration",
                "message_configuration",
                ValueKind::Struct(&MESSAGE_CONFIGURATION),
            ),
            required("Name", "name", STRING),
            optional("Priority", "priority", INTEGER),
            required("Schedule", "schedule", ValueKind::Struct(&SCHEDULE)),
            required("SegmentId", "segment_id", STRING),
            optional("SegmentVersion", "segment_version", INTEGER),
            optional("Tags", "tags", TAGS),
            optional(
                "TemplateConfiguration",
                "template_configuration",
                ValueKind::Struct(&TEMPLATE_CONFIGURATION),
            ),
            optional("TreatmentDescription", "treatment_description", STRING),
            optional("TreatmentName", "treatment_name", STRING),
        ],
    },
    attributes: &["Arn", "CampaignId"],
};

/// An A/B test treatment of a campaign.
pub static WRITE_TREATMENT_RESOURCE: Schema = Schema {
    name: "WriteTreatmentResource",
    properties: &[
        optional(
            "CustomDeliveryConfiguration",
            "custom_delivery_configuration",
            ValueKind::Struct(&CUSTOM_DELIVERY_CONFIGURATION),
        ),
        optional(
            "MessageConfiguration",
            "message_configuration",
            ValueKind::Struct(&MESSAGE_CONFIGURATION),
        ),
        optional("Schedule", "schedule", ValueKind::Struct(&SCHEDULE)),
        optional("SizePercent", "size_percent", INTEGER),
        optional(
            "TemplateConfiguration",
            "template_configuration",
            ValueKind::Struct(&TEMPLATE_CONFIGURATION),
        ),
        optional("TreatmentDescription", "treatment_description", STRING),
        optional("TreatmentName", "treatment_name", STRING),
    ],
};

pub static CUSTOM_DELIVERY_CONFIGURATION: Schema = Schema {
    name: "CustomDeliveryConfiguration",
    properties: &[
        optional("DeliveryUri", "delivery_uri", STRING),
        optional("EndpointTypes", "endpoint_types", STRING_LIST),
    ],
};

/// Sending limits for a single campaign.
pub static CAMPAIGN_LIMITS: Schema = Schema {
    name: "Limits",
    properties: &[
        optional("Daily", "daily", INTEGER),
        optional("MaximumDuration", "maximum_duration", INTEGER),
        optional("MessagesPerSecond", "messages_per_second", INTEGER),
        optional("Session", "session", INTEGER),
        optional("Total", "total", INTEGER),
    ],
};

pub static SCHEDULE: Schema = Schema {
    name: "Schedule",
    properties: &[
        optional("EndTime", "end_time", STRING),
        optional(
            "EventFilter",
            "event_filter",
            ValueKind::Struct(&CAMPAIGN_EVENT_FILTER),
        ),
        optional("Frequency", "frequency", STRING),
        optional("IsLocalTime", "is_local_time", BOOLEAN),
        optional("QuietTime", "quiet_time", ValueKind::Struct(&QUIET_TIME)),
        optional("StartTime", "start_time", STRING),
        optional("TimeZone", "time_zone", STRING),
    ],
};

/// The events that trigger an event-based campaign.
pub static CAMPAIGN_EVENT_FILTER: Schema = Schema {
    name: "CampaignEventFilter",
    properties: &[
        optional("Dimensions", "dimensions", ValueKind::Struct(&EVENT_DIMENSIONS)),
        optional("FilterType", "filter_type", STRING),
    ],
};

pub static EVENT_DIMENSIONS: Schema = Schema {
    name: "EventDimensions",
    properties: &[
        optional(
            "Attributes",
            "attributes",
            ValueKind::StructMap(&ATTRIBUTE_DIMENSION),
        ),
        optional("EventType", "event_type", ValueKind::Struct(&SET_DIMENSION)),
        optional("Metrics", "metrics", ValueKind::StructMap(&METRIC_DIMENSION)),
    ],
};

/// Per-channel message content.
pub static MESSAGE_CONFIGURATION: Schema = Schema {
    name: "MessageConfiguration",
    properties: &[
        optional("ADMMessage", "adm_message", ValueKind::Struct(&MESSAGE)),
        optional("APNSMessage", "apns_message", ValueKind::Struct(&MESSAGE)),
        optional("BaiduMessage", "baidu_message", ValueKind::Struct(&MESSAGE)),
        optional(
            "CustomMessage",
            "custom_message",
            ValueKind::Struct(&CAMPAIGN_CUSTOM_MESSAGE),
        ),
        optional("DefaultMessage", "default_message", ValueKind::Struct(&MESSAGE)),
        optional(
            "EmailMessage",
            "email_message",
            ValueKind::Struct(&CAMPAIGN_EMAIL_MESSAGE),
        ),
        optional("GCMMessage", "gcm_message", ValueKind::Struct(&MESSAGE)),
        optional(
            "InAppMessage",
            "in_app_message",
            ValueKind::Struct(&CAMPAIGN_IN_APP_MESSAGE),
        ),
        optional(
            "SMSMessage",
            "sms_message",
            ValueKind::Struct(&CAMPAIGN_SMS_MESSAGE),
        ),
    ],
};

/// A push notification message.
pub static MESSAGE: Schema = Schema {
    name: "Message",
    properties: &[
        optional("Action", "action", STRING),
        optional("Body", "body", STRING),
        optional("ImageIconUrl", "image_icon_url", STRING),
        optional("ImageSmallIconUrl", "image_small_icon_url", STRING),
        optional("ImageUrl", "image_url", STRING),
        optional("JsonBody", "json_body", STRING),
        optional("MediaUrl", "media_url", STRING),
        optional("RawContent", "raw_content", STRING),
        optional("SilentPush", "silent_push", BOOLEAN),
        optional("TimeToLive", "time_to_live", INTEGER),
        optional("Title", "title", STRING),
        optional("Url", "url", STRING),
    ],
};

pub static CAMPAIGN_CUSTOM_MESSAGE: Schema = Schema {
    name: "CampaignCustomMessage",
    properties: &[optional("Data", "data", STRING)],
};

pub static CAMPAIGN_EMAIL_MESSAGE: Schema = Schema {
    name: "CampaignEmailMessage",
    properties: &[
        optional("Body", "body", STRING),
        optional("FromAddress", "from_address", STRING),
        optional("HtmlBody", "html_body", STRING),
        optional("Title", "title", STRING),
    ],
};

pub static CAMPAIGN_IN_APP_MESSAGE: Schema = Schema {
    name: "CampaignInAppMessage",
    properties: &[
        optional(
            "Content",
            "content",
            ValueKind::StructList(&IN_APP_MESSAGE_CONTENT),
        ),
        optional("CustomConfig", "custom_config", ValueKind::Json),
        optional("Layout", "layout", STRING),
    ],
};

pub static CAMPAIGN_SMS_MESSAGE: Schema = Schema {
    name: "CampaignSmsMessage",
    properties: &[
        optional("Body", "body", STRING),
        optional("EntityId", "entity_id", STRING),
        optional("MessageType", "message_type", STRING),
        optional("OriginationNumber", "origination_number", STRING),
        optional("SenderId", "sender_id", STRING),
        optional("TemplateId", "template_id", STRING),
    ],
};

/// The message templates a campaign uses, per channel.
pub static TEMPLATE_CONFIGURATION: Schema = Schema {
    name: "TemplateConfiguration",
    properties: &[
        optional("EmailTemplate", "email_template", ValueKind::Struct(&TEMPLATE)),
        optional("PushTemplate", "push_template", ValueKind::Struct(&TEMPLATE)),
        optional("SMSTemplate", "sms_template", ValueKind::Struct(&TEMPLATE)),
        optional("VoiceTemplate", "voice_template", ValueKind::Struct(&TEMPLATE)),
    ],
};

/// A reference to a message template, by name and (optionally) version.
pub static TEMPLATE: Schema = Schema {
    name: "Template",
    properties: &[
        optional("Name", "name", STRING),
        optional("Version", "version", STRING),
    ],
};
