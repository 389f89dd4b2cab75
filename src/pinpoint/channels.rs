//! Messaging channels.

use crate::{PropertySchema, ResourceType, Schema};

use super::{optional, required, BOOLEAN, STRING};

/// `AWS::Pinpoint::ADMChannel`
pub static ADM_CHANNEL: ResourceType = ResourceType {
    type_name: "AWS::Pinpoint::ADMChannel",
    schema: Schema {
        name: "ADMChannel",
        properties: &[
            required("ApplicationId", "application_id", STRING),
            required("ClientId", "client_id", STRING),
            required("ClientSecret", "client_secret", STRING),
            optional("Enabled", "enabled", BOOLEAN),
        ],
    },
    attributes: &["Id"],
};

/// All four APNS channel variants share their properties.
static APNS_PROPERTIES: [PropertySchema; 9] = [
    required("ApplicationId", "application_id", STRING),
    optional("BundleId", "bundle_id", STRING),
    optional("Certificate", "certificate", STRING),
    optional("DefaultAuthenticationMethod", "default_authentication_method", STRING),
    optional("Enabled", "enabled", BOOLEAN),
    optional("PrivateKey", "private_key", STRING),
    optional("TeamId", "team_id", STRING),
    optional("TokenKey", "token_key", STRING),
    optional("TokenKeyId", "token_key_id", STRING),
];

/// `AWS::Pinpoint::APNSChannel`
pub static APNS_CHANNEL: ResourceType = ResourceType {
    type_name: "AWS::Pinpoint::APNSChannel",
    schema: Schema {
        name: "APNSChannel",
        properties: &APNS_PROPERTIES,
    },
    attributes: &["Id"],
};

/// `AWS::Pinpoint::APNSSandboxChannel`
pub static APNS_SANDBOX_CHANNEL: ResourceType = ResourceType {
    type_name: "AWS::Pinpoint::APNSSandboxChannel",
    schema: Schema {
        name: "APNSSandboxChannel",
        properties: &APNS_PROPERTIES,
    },
    attributes: &["Id"],
};

/// `AWS::Pinpoint::APNSVoipChannel`
pub static APNS_VOIP_CHANNEL: ResourceType = ResourceType {
    type_name: "AWS::Pinpoint::APNSVoipChannel",
    schema: Schema {
        name: "APNSVoipChannel",
        properties: &APNS_PROPERTIES,
    },
    attributes: &["Id"],
};

/// `AWS::Pinpoint::APNSVoipSandboxChannel`
pub static APNS_VOIP_SANDBOX_CHANNEL: ResourceType = ResourceType {
    type_name: "AWS::Pinpoint::APNSVoipSandboxChannel",
    schema: Schema {
        name: "APNSVoipSandboxChannel",
        properties: &APNS_PROPERTIES,
    },
    attributes: &["Id"],
};

/// `AWS::Pinpoint::BaiduChannel`
pub static BAIDU_CHANNEL: ResourceType = ResourceType {
    type_name: "AWS::Pinpoint::BaiduChannel",
    schema: Schema {
        name: "BaiduChannel",
        properties: &[
            required("ApiKey", "api_key", STRING),
            required("ApplicationId", "application_id", STRING),
            optional("Enabled", "enabled", BOOLEAN),
            required("SecretKey", "secret_key", STRING),
        ],
    },
    attributes: &["Id"],
};

/// `AWS::Pinpoint::EmailChannel`
pub static EMAIL_CHANNEL: ResourceType = ResourceType {
    type_name: "AWS::Pinpoint::EmailChannel",
    schema: Schema {
        name: "EmailChannel",
        properties: &[
            required("ApplicationId", "application_id", STRING),
            optional("ConfigurationSet", "configuration_set", STRING),
            optional("Enabled", "enabled", BOOLEAN),
            required("FromAddress", "from_address", STRING),
            required("Identity", "identity", STRING),
            optional("OrchestrationSendingRoleArn", "orchestration_sending_role_arn", STRING),
            optional("RoleArn", "role_arn", STRING),
        ],
    },
    attributes: &["Id"],
};

/// `AWS::Pinpoint::GCMChannel`
pub static GCM_CHANNEL: ResourceType = ResourceType {
    type_name: "AWS::Pinpoint::GCMChannel",
    schema: Schema {
        name: "GCMChannel",
        properties: &[
            optional("ApiKey", "api_key", STRING),
            required("ApplicationId", "application_id", STRING),
            optional("DefaultAuthenticationMethod", "default_authentication_method", STRING),
            optional("Enabled", "enabled", BOOLEAN),
            optional("ServiceJson", "service_json", STRING),
        ],
    },
    attributes: &["Id"],
};

/// `AWS::Pinpoint::SMSChannel`
pub static SMS_CHANNEL: ResourceType = ResourceType {
    type_name: "AWS::Pinpoint::SMSChannel",
    schema: Schema {
        name: "SMSChannel",
        properties: &[
            required("ApplicationId", "application_id", STRING),
            optional("Enabled", "enabled", BOOLEAN),
            optional("SenderId", "sender_id", STRING),
            optional("ShortCode", "short_code", STRING),
        ],
    },
    attributes: &["Id"],
};

/// `AWS::Pinpoint::VoiceChannel`
pub static VOICE_CHANNEL: ResourceType = ResourceType {
    type_name: "AWS::Pinpoint::VoiceChannel",
    schema: Schema {
        name: "VoiceChannel",
        properties: &[
            required("ApplicationId", "application_id", STRING),
            optional("Enabled", "enabled", BOOLEAN),
        ],
    },
    attributes: &["Id"],
};
