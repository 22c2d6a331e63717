use platform_contracts_canonical::{
    ButtonTitle, Contract, ConversationStatus, MessageStatus, Violation, WireEncoder,
};
use platform_contracts_schemas::messaging::{
    ConversationReplyWebhook, ConversationSession, InteractiveMessage, MessageDeliveryWebhook,
    SendMessageRequest, StartConversationRequest, TemplateButton, TemplateParameter,
    WhatsAppTemplate,
};
use serde_json::json;

#[test]
fn send_message_reports_every_missing_field() {
    let err = SendMessageRequest::from_value(json!({})).unwrap_err();
    assert_eq!(err.record(), "SendMessageRequest");
    assert_eq!(err.violations().len(), 3);
    assert!(err.mentions("tenant_id"));
    assert!(err.mentions("client_id"));
    assert!(err.mentions("contact_phone"));
    assert!(err
        .violations()
        .iter()
        .all(|v| matches!(v, Violation::Missing { .. })));
}

#[test]
fn send_message_reports_null_fields_together() {
    let err = SendMessageRequest::from_value(json!({
        "tenant_id": null,
        "client_id": null,
        "contact_phone": null
    }))
    .unwrap_err();
    let paths: Vec<&str> = err.paths().collect();
    assert_eq!(paths, vec!["tenant_id", "client_id", "contact_phone"]);
    assert!(err
        .violations()
        .iter()
        .all(|v| matches!(v, Violation::Malformed { .. })));
}

#[test]
fn send_message_reports_mistyped_fields_at_their_paths() {
    let err = SendMessageRequest::from_value(json!({
        "tenant_id": 17,
        "client_id": "c1",
        "contact_phone": ["+15551234567"],
        "schema_version": "1"
    }))
    .unwrap_err();
    let paths: Vec<&str> = err.paths().collect();
    assert_eq!(paths, vec!["tenant_id", "contact_phone", "schema_version"]);
}

#[test]
fn send_message_defaults() {
    let request = SendMessageRequest::from_value(json!({
        "tenant_id": "t1",
        "client_id": "c1",
        "contact_phone": "+15551234567",
        "template_name": "clarification_request",
        "template_params": {"1": "Jane"}
    }))
    .unwrap();
    assert_eq!(request.channel, "whatsapp");
    assert_eq!(request.schema_version, "1.0");
    assert_eq!(request.template_params["1"], "Jane");
    assert!(request.context_data.is_empty());
    assert_eq!(request, {
        let mut expected = SendMessageRequest::new("t1", "c1", "+15551234567");
        expected.template_name = "clarification_request".into();
        expected.template_params = request.template_params.clone();
        expected
    });
}

#[test]
fn delivery_webhook_status() {
    let webhook = MessageDeliveryWebhook::from_value(json!({
        "message_id": "m1",
        "status": "delivered",
        "timestamp": "2024-01-15T10:30:00Z"
    }))
    .unwrap();
    assert_eq!(webhook.message_status(), Some(MessageStatus::Delivered));
    assert!(webhook.timestamp.is_some());

    let bare = MessageDeliveryWebhook::new("m2");
    assert_eq!(serde_json::to_value(&bare).unwrap()["timestamp"], json!(null));
}

#[test]
fn start_conversation_defaults_to_one_day_timeout() {
    let request = StartConversationRequest::from_value(json!({
        "tenant_id": "t1",
        "client_id": "c1",
        "contact_phone": "+15551234567",
        "flow_type": "transaction_clarification"
    }))
    .unwrap();
    assert_eq!(request.timeout_minutes, 1440);
    assert_eq!(request.channel, "whatsapp");
}

#[test]
fn conversation_session_defaults_and_step_paths() {
    let session = ConversationSession::new("conv_1", "+15551234567");
    assert_eq!(session.status, "active");
    assert_eq!(session.current_state, "initial");
    assert_eq!(session.conversation_status(), Some(ConversationStatus::Active));

    let err = ConversationSession::from_value(json!({
        "conversation_id": "conv_1",
        "contact_phone": "+15551234567",
        "steps": [{"step_number": 1, "direction": "outbound"}, {"body": "yes"}]
    }))
    .unwrap_err();
    let paths: Vec<&str> = err.paths().collect();
    assert_eq!(paths, vec!["steps[1].step_number"]);
}

#[test]
fn reply_webhook_requires_conversation() {
    assert!(ConversationReplyWebhook::from_value(json!({"response_text": "yes"}))
        .unwrap_err()
        .mentions("conversation_id"));
    let reply = ConversationReplyWebhook::from_value(json!({
        "conversation_id": "conv_1",
        "button_id": "btn_yes"
    }))
    .unwrap();
    assert_eq!(reply.button_id, "btn_yes");
}

#[test]
fn button_title_allows_twenty_characters() {
    let ok = TemplateButton::from_value(json!({"id": "b1", "title": "12345678901234567890"})).unwrap();
    assert_eq!(ok.title, "12345678901234567890");

    let err = TemplateButton::from_value(json!({"id": "b1", "title": "123456789012345678901"}))
        .unwrap_err();
    assert!(matches!(
        err.violations()[0],
        Violation::TooLong { length: 21, max: 20, .. }
    ));
    assert!(err.mentions("title"));
}

#[test]
fn interactive_message_reports_button_paths() {
    let err = InteractiveMessage::from_value(json!({
        "buttons": [
            {"id": "yes", "title": "Yes"},
            {"id": "other", "title": "Something else entirely"}
        ]
    }))
    .unwrap_err();
    let paths: Vec<&str> = err.paths().collect();
    assert_eq!(paths, vec!["body_text", "buttons[1].title"]);

    let message = InteractiveMessage::new("Is this a business expense?")
        .with_button(TemplateButton::new("yes", ButtonTitle::parse("Yes").unwrap()));
    assert_eq!(message.buttons.len(), 1);
}

#[test]
fn template_shapes() {
    let template = WhatsAppTemplate::from_value(json!({"name": "monthly_digest"})).unwrap();
    assert_eq!(template.language, "en_US");
    assert_eq!(template.category, "UTILITY");
    assert!(template.components.is_empty());

    let bytes = WireEncoder::default()
        .encode(&TemplateParameter::text("Jane"))
        .unwrap();
    assert_eq!(bytes, br#"{"text":"Jane","type":"text"}"#.to_vec());
    assert_eq!(TemplateParameter::from_value(json!({})).unwrap(), TemplateParameter::default());
}
