//! Message templates.

use crate::{ResourceType, Schema, ValueKind};

use super::{optional, required, INTEGER, STRING, TAGS};

/// `AWS::Pinpoint::EmailTemplate`
pub static EMAIL_TEMPLATE: ResourceType = ResourceType {
    type_name: "AWS::Pinpoint::EmailTemplate",
    schema: Schema {
        name: "EmailTemplate",
        properties: &[
            optional("DefaultSubstitutions", "default_substitutions", STRING),
            optional("HtmlPart", "html_part", STRING),
            required("Subject", "subject", STRING),
            optional("Tags", "tags", TAGS),
            optional("TemplateDescription", "template_description", STRING),
            required("TemplateName", "template_name", STRING),
            optional("TextPart", "text_part", STRING),
        ],
    },
    attributes: &["Arn"],
};

/// `AWS::Pinpoint::InAppTemplate`
pub static IN_APP_TEMPLATE: ResourceType = ResourceType {
    type_name: "AWS::Pinpoint::InAppTemplate",
    schema: Schema {
        name: "InAppTemplate",
        properties: &[
            optional(
                "Content",
                "content",
                ValueKind::StructList(&IN_APP_MESSAGE_CONTENT),
            ),
            optional("CustomConfig", "custom_config", ValueKind::Json),
            optional("Layout", "layout", STRING),
            optional("Tags", "tags", TAGS),
            optional("TemplateDescription", "template_description", STRING),
            required("TemplateName", "template_name", STRING),
        ],
    },
    attributes: &["Arn"],
};

/// `AWS::Pinpoint::PushTemplate`
pub static PUSH_TEMPLATE: ResourceType = ResourceType {
    type_name: "AWS::Pinpoint::PushTemplate",
    schema: Schema {
        name: "PushTemplate",
        properties: &[
            optional(
                "ADM",
                "adm",
                ValueKind::Struct(&ANDROID_PUSH_NOTIFICATION_TEMPLATE),
            ),
            optional(
                "APNS",
                "apns",
                ValueKind::Struct(&APNS_PUSH_NOTIFICATION_TEMPLATE),
            ),
            optional(
                "Baidu",
                "baidu",
                ValueKind::Struct(&ANDROID_PUSH_NOTIFICATION_TEMPLATE),
            ),
            optional(
                "Default",
                "default",
                ValueKind::Struct(&DEFAULT_PUSH_NOTIFICATION_TEMPLATE),
            ),
            optional("DefaultSubstitutions", "default_substitutions", STRING),
            optional(
                "GCM",
                "gcm",
                ValueKind::Struct(&ANDROID_PUSH_NOTIFICATION_TEMPLATE),
            ),
            optional("Tags", "tags", TAGS),
            optional("TemplateDescription", "template_description", STRING),
            required("TemplateName", "template_name", STRING),
        ],
    },
    attributes: &["Arn"],
};

/// `AWS::Pinpoint::SmsTemplate`
pub static SMS_TEMPLATE: ResourceType = ResourceType {
    type_name: "AWS::Pinpoint::SmsTemplate",
    schema: Schema {
        name: "SmsTemplate",
        properties: &[
            required("Body", "body", STRING),
            optional("DefaultSubstitutions", "default_substitutions", STRING),
            optional("Tags", "tags", TAGS),
            optional("TemplateDescription", "template_description", STRING),
            required("TemplateName", "template_name", STRING),
        ],
    },
    attributes: &["Arn"],
};

/// Push notification content for ADM, Baidu and GCM.
pub static ANDROID_PUSH_NOTIFICATION_TEMPLATE: Schema = Schema {
    name: "AndroidPushNotificationTemplate",
    properties: &[
        optional("Action", "action", STRING),
        optional("Body", "body", STRING),
        optional("ImageIconUrl", "image_icon_url", STRING),
        optional("ImageUrl", "image_url", STRING),
        optional("RawContent", "raw_content", STRING),
        optional("SmallImageIconUrl", "small_image_icon_url", STRING),
        optional("Sound", "sound", STRING),
        optional("Title", "title", STRING),
        optional("Url", "url", STRING),
    ],
};

pub static APNS_PUSH_NOTIFICATION_TEMPLATE: Schema = Schema {
    name: "APNSPushNotificationTemplate",
    properties: &[
        optional("Action", "action", STRING),
        optional("Body", "body", STRING),
        optional("MediaUrl", "media_url", STRING),
        optional("Sound", "sound", STRING),
        optional("Title", "title", STRING),
        optional("Url", "url", STRING),
    ],
};

pub static DEFAULT_PUSH_NOTIFICATION_TEMPLATE: Schema = Schema {
    name: "DefaultPushNotificationTemplate",
    properties: &[
        optional("Action", "action", STRING),
        optional("Body", "body", STRING),
        optional("Sound", "sound", STRING),
        optional("Title", "title", STRING),
        optional("Url", "url", STRING),
    ],
};

/// One message in an in-app template or campaign.
pub static IN_APP_MESSAGE_CONTENT: Schema = Schema {
    name: "InAppMessageContent",
    properties: &[
        optional("BackgroundColor", "background_color", STRING),
        optional("BodyConfig", "body_config", ValueKind::Struct(&BODY_CONFIG)),
        optional(
            "HeaderConfig",
            "header_config",
            ValueKind::Struct(&HEADER_CONFIG),
        ),
        optional("ImageUrl", "image_url", STRING),
        optional("PrimaryBtn", "primary_btn", ValueKind::Struct(&BUTTON_CONFIG)),
        optional(
            "SecondaryBtn",
            "secondary_btn",
            ValueKind::Struct(&BUTTON_CONFIG),
        ),
    ],
};

pub static BODY_CONFIG: Schema = Schema {
    name: "BodyConfig",
    properties: &[
        optional("Alignment", "alignment", STRING),
        optional("Body", "body", STRING),
        optional("TextColor", "text_color", STRING),
    ],
};

pub static HEADER_CONFIG: Schema = Schema {
    name: "HeaderConfig",
    properties: &[
        optional("Alignment", "alignment", STRING),
        optional("Header", "header", STRING),
        optional("TextColor", "text_color", STRING),
    ],
};

/// A button, with optional per-platform overrides.
pub static BUTTON_CONFIG: Schema = Schema {
    name: "ButtonConfig",
    properties: &[
        optional(
            "Android",
            "android",
            ValueKind::Struct(&OVERRIDE_BUTTON_CONFIGURATION),
        ),
        optional(
            "DefaultConfig",
            "default_config",
            ValueKind::Struct(&DEFAULT_BUTTON_CONFIGURATION),
        ),
        optional(
            "IOS",
            "ios",
            ValueKind::Struct(&OVERRIDE_BUTTON_CONFIGURATION),
        ),
        optional(
            "Web",
            "web",
            ValueKind::Struct(&OVERRIDE_BUTTON_CONFIGURATION),
        ),
    ],
};

pub static DEFAULT_BUTTON_CONFIGURATION: Schema = Schema {
    name: "DefaultButtonConfiguration",
    properties: &[
        optional("BackgroundColor", "background_color", STRING),
        optional("BorderRadius", "border_radius", INTEGER),
        optional("ButtonAction", "button_action", STRING),
        optional("Link", "link", STRING),
        optional("Text", "text", STRING),
        optional("TextColor", "text_color", STRING),
    ],
};

pub static OVERRIDE_BUTTON_CONFIGURATION: Schema = Schema {
    name: "OverrideButtonConfiguration",
    properties: &[
        optional("ButtonAction", "button_action", STRING),
        optional("Link", "link", STRING),
    ],
};
