use assert_matches::assert_matches;
use serde_json::json;

use pinpoint_cfn::{pinpoint, BinderOptions, Error, Instance, Token, Value};

#[test]
fn app_without_tags() {
    let app = pinpoint::APP.construct(vec![("name", "MyApp")]).unwrap();

    assert_eq!(
        serde_json::Value::Object(app.to_wire_format()),
        json!({ "Name": "MyApp" })
    );
    assert!(!app.to_wire_format().contains_key("Tags"));
}

#[test]
fn app_with_tags() {
    let app = pinpoint::APP
        .construct(vec![
            ("name", Value::from("MyApp")),
            ("tags", Value::from([("env", "prod")])),
        ])
        .unwrap();

    assert_eq!(
        serde_json::Value::Object(app.to_wire_format()),
        json!({ "Name": "MyApp", "Tags": { "env": "prod" } })
    );
}

#[test]
fn app_requires_a_name() {
    assert_matches!(
        pinpoint::APP.construct(vec![("tags", Value::from([("env", "prod")]))]),
        Err(Error::MissingRequiredProperty { path }) if path == "name"
    );
}

#[test]
fn sms_channel_with_only_an_application_id() {
    let channel = pinpoint::SMS_CHANNEL
        .construct(vec![("application_id", "abc123")])
        .unwrap();

    assert_eq!(
        serde_json::Value::Object(channel.to_wire_format()),
        json!({ "ApplicationId": "abc123" })
    );
}

#[test]
fn campaign_schedule_nests_quiet_time() {
    let campaign = pinpoint::CAMPAIGN
        .construct(vec![
            ("application_id", Value::from("abc123")),
            ("name", Value::from("Welcome")),
            ("segment_id", Value::from("seg-1")),
            (
                "schedule",
                Value::from([
                    ("start_time", Value::from("IMMEDIATE")),
                    ("quiet_time", Value::from([("end", "18:00"), ("start", "08:00")])),
                ]),
            ),
        ])
        .unwrap();

    let wire = campaign.to_wire_format();
    assert_eq!(
        wire["Schedule"],
        json!({ "QuietTime": { "End": "18:00", "Start": "08:00" }, "StartTime": "IMMEDIATE" })
    );

    let quiet_time = campaign
        .get("schedule")
        .unwrap()
        .and_then(Value::as_struct)
        .and_then(|schedule| schedule.get("quiet_time").unwrap())
        .and_then(Value::as_struct)
        .unwrap();
    assert!(std::ptr::eq(quiet_time.schema(), &pinpoint::QUIET_TIME));
}

#[test]
fn resources_reference_each_other() {
    let app = pinpoint::APP.construct(vec![("name", "MyApp")]).unwrap();
    let app_id = app.attribute("MyApp", "Id").unwrap();

    let channel = pinpoint::EMAIL_CHANNEL
        .construct(vec![
            ("application_id", Value::from(app_id)),
            ("from_address", Value::from("hello@example.com")),
            ("identity", Value::from(Token::import_value("EmailIdentityArn"))),
            ("enabled", Value::from(true)),
        ])
        .unwrap();

    assert_eq!(
        serde_json::to_value(&channel).unwrap(),
        json!({
            "Type": "AWS::Pinpoint::EmailChannel",
            "Properties": {
                "ApplicationId": { "Fn::GetAtt": ["MyApp", "Id"] },
                "Enabled": true,
                "FromAddress": "hello@example.com",
                "Identity": { "Fn::ImportValue": "EmailIdentityArn" },
            },
        })
    );

    assert_matches!(
        app.attribute("MyApp", "CampaignId"),
        Err(Error::UnknownAttribute { resource_type: "AWS::Pinpoint::App", attribute })
            if attribute == "CampaignId"
    );
}

#[test]
fn template_resources_by_type_name() {
    let template = json!({
        "Resources": {
            "MyApp": {
                "Type": "AWS::Pinpoint::App",
                "Properties": { "Name": "MyApp" },
            },
            "Sms": {
                "Type": "AWS::Pinpoint::SMSChannel",
                "Properties": { "ApplicationId": { "Ref": "MyApp" }, "SenderId": "ACME" },
            },
            "Settings": {
                "Type": "AWS::Pinpoint::ApplicationSettings",
                "Properties": {
                    "ApplicationId": { "Ref": "MyApp" },
                    "Limits": { "Daily": 100, "Total": { "Ref": "TotalLimit" } },
                    "Unused": "ignored",
                },
            },
        },
    });

    let resources = template["Resources"].as_object().unwrap();
    for (logical_id, resource) in resources {
        let resource_type = pinpoint::resource_type(resource["Type"].as_str().unwrap()).unwrap();
        let properties = resource["Properties"].as_object().unwrap();

        let parsed = resource_type
            .from_wire_format(properties, BinderOptions::permissive())
            .unwrap();
        let expected = if logical_id == "Settings" {
            let mut properties = properties.clone();
            properties.remove("Unused");
            properties
        } else {
            properties.clone()
        };
        assert_eq!(parsed.to_wire_format(), expected, "{}", logical_id);
    }

    let settings = &resources["Settings"]["Properties"];
    assert_matches!(
        pinpoint::APPLICATION_SETTINGS
            .from_wire_format(settings.as_object().unwrap(), BinderOptions::default()),
        Err(Error::UnknownProperty { path }) if path == "Unused"
    );
}

#[test]
fn nested_structs_can_be_built_separately() {
    let limits = Instance::construct(
        &pinpoint::CAMPAIGN_LIMITS,
        vec![("daily", 10), ("total", 1000)],
    )
    .unwrap();

    let mut campaign = pinpoint::CAMPAIGN
        .construct(vec![
            ("application_id", Value::from(Token::reference("App"))),
            ("name", Value::from("Weekly")),
            ("segment_id", Value::from(Token::reference("Segment"))),
            ("schedule", Value::from([("frequency", "WEEKLY")])),
        ])
        .unwrap();
    campaign.set("limits", limits).unwrap();

    assert_eq!(
        campaign.to_wire_format()["Limits"],
        json!({ "Daily": 10, "Total": 1000 })
    );

    let quiet_time = Instance::construct(
        &pinpoint::QUIET_TIME,
        vec![("end", "18:00"), ("start", "08:00")],
    )
    .unwrap();
    assert_matches!(
        campaign.set("limits", quiet_time),
        Err(Error::TypeMismatch { path, expected, .. })
            if path == "limits" && expected == "Limits"
    );
}

#[test]
fn tag_keys_that_look_like_intrinsics() {
    let app = pinpoint::APP
        .construct(vec![
            ("name", Value::from("MyApp")),
            ("tags", Value::from([("Ref", "v1")])),
        ])
        .unwrap();
    let wire = app.to_wire_format();
    assert_eq!(wire["Tags"], json!({ "Ref": "v1" }));

    let parsed = pinpoint::APP
        .from_wire_format(&wire, BinderOptions::default())
        .unwrap();
    assert_eq!(parsed, app);
    assert_eq!(parsed.get("tags").unwrap(), Some(&Value::from([("Ref", "v1")])));
}

#[test]
fn segment_attributes_named_like_intrinsics() {
    let properties = json!({
        "ApplicationId": { "Ref": "App" },
        "Dimensions": {
            "Attributes": {
                "Condition": { "AttributeType": "INCLUSIVE", "Values": ["mint"] },
            },
        },
        "Name": "Mint",
    });
    let segment = pinpoint::SEGMENT
        .from_wire_format(properties.as_object().unwrap(), BinderOptions::default())
        .unwrap();
    assert_eq!(serde_json::Value::Object(segment.to_wire_format()), properties);

    let attributes = segment
        .get("dimensions")
        .unwrap()
        .and_then(Value::as_struct)
        .and_then(|dimensions| dimensions.get("attributes").unwrap());
    assert_matches!(attributes, Some(Value::Map(attributes)) if attributes.contains_key("Condition"));
}

#[test]
fn permissive_parsing_drops_nested_unknown_keys() {
    let properties = json!({
        "AdditionalTreatments": [
            { "SizePercent": 10, "Colour": "red" },
        ],
        "ApplicationId": "abc123",
        "Name": "Launch",
        "Schedule": {
            "EventFilter": {
                "Dimensions": {
                    "Attributes": {
                        "plan": { "AttributeType": "INCLUSIVE", "Values": ["pro"], "Weight": 2 },
                    },
                },
                "FilterType": "ENDPOINT",
            },
            "StartTime": "IMMEDIATE",
        },
        "SegmentId": "seg-1",
    });

    assert_matches!(
        pinpoint::CAMPAIGN
            .from_wire_format(properties.as_object().unwrap(), BinderOptions::default()),
        Err(Error::UnknownProperty { path }) if path == "additional_treatments[0].Colour"
    );

    let campaign = pinpoint::CAMPAIGN
        .from_wire_format(properties.as_object().unwrap(), BinderOptions::permissive())
        .unwrap();
    let wire = serde_json::Value::Object(campaign.to_wire_format());
    assert_eq!(wire["AdditionalTreatments"], json!([{ "SizePercent": 10 }]));
    assert_eq!(
        wire["Schedule"]["EventFilter"]["Dimensions"]["Attributes"],
        json!({ "plan": { "AttributeType": "INCLUSIVE", "Values": ["pro"] } })
    );
}

#[test]
fn custom_config_is_free_form() {
    let message = Instance::construct(
        &pinpoint::CAMPAIGN_IN_APP_MESSAGE,
        vec![
            ("layout", Value::from("MIDDLE_BANNER")),
            (
                "custom_config",
                Value::from([
                    ("priority", Value::from(2)),
                    ("dismissible", Value::from(true)),
                    ("source", Value::from(Token::reference("Source"))),
                ]),
            ),
        ],
    )
    .unwrap();

    assert_eq!(
        serde_json::to_value(&message).unwrap(),
        json!({
            "CustomConfig": { "dismissible": true, "priority": 2, "source": { "Ref": "Source" } },
            "Layout": "MIDDLE_BANNER",
        })
    );
}
