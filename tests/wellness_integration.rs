//! Wellness action group integration tests
//!
//! Function-call events through the fitness/diet action group, including
//! the session-attribute envelope variant, anonymous failure envelopes, and
//! custom deployments built from `GroupConfig`.

use agent_actions::{
    ActionError, ActionGroup, GroupConfig, HandlerFn, HandlerRegistry, Parameters, Payload,
    ResponseEnvelope, UnknownAction,
};
use serde_json::{json, Value};

fn call(function: &str, parameters: Value) -> ResponseEnvelope {
    ActionGroup::wellness().handle_value(json!({
        "messageVersion": "1.0",
        "actionGroup": "wellness-actions",
        "function": function,
        "parameters": parameters
    }))
}

// ─── Functions ───────────────────────────────────────────────────

#[test]
fn test_diet_plan_end_to_end() {
    let envelope = call("get_diet_plan", json!({}));
    assert_eq!(envelope.status_code(), 200);

    let body = envelope.decode_body().unwrap();
    assert_eq!(body["calories_per_day"], 2000);
    assert_eq!(body["meals"].as_array().unwrap().len(), 4);
}

#[test]
fn test_fitness_plan() {
    let body = call("get_fitness_plan", json!({})).decode_body().unwrap();
    assert_eq!(body["duration"], "4 weeks");
    assert_eq!(body["difficulty"], "beginner");
}

#[test]
fn test_bmi_flat_parameters() {
    let body = call("calculate_bmi", json!({"weight": "20", "height": "1.0"}))
        .decode_body()
        .unwrap();
    assert_eq!(body["bmi"], 20.0);
    assert_eq!(body["category"], "Normal weight");
}

#[test]
fn test_bmi_numeric_and_list_parameters() {
    let body = call("calculate_bmi", json!({"weight": 95, "height": 1.75}))
        .decode_body()
        .unwrap();
    assert_eq!(body["bmi"], 31.02);
    assert_eq!(body["category"], "Obese");

    let body = call(
        "calculate_bmi",
        json!([
            {"name": "weight", "type": "number", "value": "50"},
            {"name": "height", "type": "number", "value": "1.8"}
        ]),
    )
    .decode_body()
    .unwrap();
    assert_eq!(body["bmi"], 15.43);
    assert_eq!(body["category"], "Underweight");
}

#[test]
fn test_bmi_without_parameters() {
    let envelope = ActionGroup::wellness().handle_value(json!({"function": "calculate_bmi"}));
    assert_eq!(envelope.status_code(), 200);
    assert_eq!(
        envelope.decode_body().unwrap()["error"],
        "Weight and height must be positive numbers"
    );
}

// ─── Unknown Functions ───────────────────────────────────────────

#[test]
fn test_unknown_function_lists_available() {
    let envelope = call("get_sleep_plan", json!({}));
    assert_eq!(envelope.status_code(), 200);

    let body = envelope.decode_body().unwrap();
    assert_eq!(body["error"], "Function get_sleep_plan not implemented yet.");
    assert_eq!(
        body["available_functions"],
        json!(["get_fitness_plan", "calculate_bmi", "get_diet_plan"])
    );
    assert!(body.get("available_actions").is_none());
}

// ─── Envelope ────────────────────────────────────────────────────

#[test]
fn test_session_attribute_variant() {
    let wire = serde_json::to_value(call("get_diet_plan", json!({}))).unwrap();
    let response = &wire["response"];

    assert_eq!(wire["messageVersion"], "1.0");
    assert_eq!(response["actionGroup"], "wellness-actions");
    assert_eq!(response["function"], "get_diet_plan");
    assert!(response["apiPath"].is_null());
    assert!(response["httpMethod"].is_null());
    assert_eq!(response["sessionAttributes"], json!({}));
    assert_eq!(response["promptSessionAttributes"], json!({}));
}

#[test]
fn test_failure_envelope_is_anonymous() {
    let envelope = ActionGroup::wellness().handle_value(json!({
        "actionGroup": "wellness-actions",
        "function": "get_diet_plan",
        "parameters": "not parameters"
    }));

    assert_eq!(envelope.status_code(), 400);
    assert!(envelope.response.action_group.is_none());
    assert!(envelope.response.function.is_none());
    assert!(envelope.response.session_attributes.is_some());

    let body = envelope.decode_body().unwrap();
    assert!(body.get("timestamp").is_none());
}

// ─── Custom Deployments ──────────────────────────────────────────

fn lookup_member(params: &Parameters) -> agent_actions::Result<Payload> {
    let member = params.require("member_id")?;
    if member.starts_with('x') {
        return Err(ActionError::Internal("member store unavailable".into()));
    }
    let mut payload = Payload::new();
    payload.insert("member_id".into(), member.into());
    Ok(payload)
}

#[test]
fn test_custom_group_failure_statuses() {
    let registry = HandlerRegistry::new([("lookup_member", lookup_member as HandlerFn)]);
    let group = ActionGroup::new(GroupConfig::wellness(), &registry).unwrap();

    let ok = group.handle_value(json!({
        "function": "lookup_member",
        "parameters": {"member_id": "m-1"}
    }));
    assert_eq!(ok.status_code(), 200);
    assert_eq!(ok.decode_body().unwrap()["member_id"], "m-1");

    let missing = group.handle_value(json!({"function": "lookup_member"}));
    assert_eq!(missing.status_code(), 400);
    assert_eq!(
        missing.decode_body().unwrap(),
        json!({"error": "Missing parameter: 'member_id'"})
    );

    let internal = group.handle_value(json!({
        "function": "lookup_member",
        "parameters": {"member_id": "x-9"}
    }));
    assert_eq!(internal.status_code(), 500);
    assert_eq!(
        internal.decode_body().unwrap(),
        json!({"error": "An error occurred: member store unavailable"})
    );
}

#[test]
fn test_custom_group_from_json_config() {
    let config = GroupConfig::from_json(
        r#"{
            "name": "members",
            "selectorProperty": "operation",
            "unknownAction": {"policy": "reject", "message": "no such operation {action}", "availableKey": "operations"},
            "envelope": {"failureTimestamp": true}
        }"#,
    )
    .unwrap();
    assert_eq!(config.unknown_action.policy, UnknownAction::Reject);

    let registry = HandlerRegistry::new([("lookup_member", lookup_member as HandlerFn)]);
    let group = ActionGroup::new(config, &registry).unwrap();

    let envelope = group.handle_value(json!({
        "actionGroup": "members",
        "apiPath": "/members",
        "httpMethod": "GET",
        "requestBody": {"content": {"application/json": {"properties": [
            {"name": "operation", "value": "lookup_member"},
            {"name": "member_id", "value": "m-2"}
        ]}}}
    }));
    assert_eq!(envelope.status_code(), 200);
    assert_eq!(envelope.response.api_path.as_deref(), Some("/members"));

    let rejected = group.handle_value(json!({
        "actionGroup": "members",
        "requestBody": {"content": {"application/json": {"properties": [
            {"name": "operation", "value": "delete_member"}
        ]}}}
    }));
    assert_eq!(rejected.status_code(), 400);
    let body = rejected.decode_body().unwrap();
    assert_eq!(body["error"], "Invalid parameter value: no such operation delete_member");
    assert!(body["timestamp"].is_string());
    assert_eq!(rejected.response.action_group.as_deref(), Some("members"));
}
