//! Parameter extraction — normalize inbound events into `ActionRequest`s
//!
//! The agent platform delivers parameters in one of two encodings:
//!
//! - **properties list**: `requestBody.content["application/json"].properties`,
//!   an ordered list of `{name, value}` pairs where one entry (the selector,
//!   `action_type` by default) names the action
//! - **function call**: the action comes from `function` and parameters
//!   from `parameters`
//!
//! The encoding is detected from which top-level fields the event carries.

use crate::types::{ActionRequest, InvocationEvent, ParameterPayload, Parameters, Property};

/// Default property naming the action in the properties-list encoding
pub const DEFAULT_SELECTOR: &str = "action_type";

/// Which parameter encoding an event used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventShape {
    /// `requestBody` with a properties list
    Properties,
    /// `function` with a `parameters` mapping
    FunctionCall,
    /// Neither encoding present
    Empty,
}

/// Converts `InvocationEvent`s into `ActionRequest`s
#[derive(Debug, Clone)]
pub struct Extractor {
    selector: String,
}

impl Extractor {
    /// Create an extractor using `selector` as the action-naming property
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
        }
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Detect the parameter encoding of an event
    pub fn shape(event: &InvocationEvent) -> EventShape {
        if event.request_body.is_some() {
            EventShape::Properties
        } else if event.function.is_some() || event.parameters.is_some() {
            EventShape::FunctionCall
        } else {
            EventShape::Empty
        }
    }

    /// Normalize an event; never fails, absent fields simply stay absent
    pub fn extract(&self, event: &InvocationEvent) -> ActionRequest {
        let request = match Self::shape(event) {
            EventShape::Properties => self.collect_properties(event.properties().unwrap_or(&[])),
            EventShape::FunctionCall => ActionRequest {
                action_id: event.function.clone(),
                parameters: event
                    .parameters
                    .as_ref()
                    .map(collect_payload)
                    .unwrap_or_default(),
            },
            EventShape::Empty => ActionRequest::default(),
        };

        tracing::debug!(
            action = ?request.action_id,
            params = request.parameters.len(),
            "Extracted action request"
        );
        request
    }

    fn collect_properties(&self, properties: &[Property]) -> ActionRequest {
        let mut request = ActionRequest::default();
        for prop in properties {
            if prop.name == self.selector {
                // A non-string selector value still names an action by its JSON text
                request.action_id = match &prop.value {
                    serde_json::Value::String(s) => Some(s.clone()),
                    serde_json::Value::Null => None,
                    other => Some(other.to_string()),
                };
            } else {
                request.parameters.insert_json(prop.name.as_str(), &prop.value);
            }
        }
        request
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(DEFAULT_SELECTOR)
    }
}

fn collect_payload(payload: &ParameterPayload) -> Parameters {
    let mut params = Parameters::new();
    match payload {
        ParameterPayload::Map(map) => {
            for (name, value) in map {
                params.insert_json(name.as_str(), value);
            }
        }
        ParameterPayload::List(list) => {
            for prop in list {
                params.insert_json(prop.name.as_str(), &prop.value);
            }
        }
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn event(value: serde_json::Value) -> InvocationEvent {
        InvocationEvent::from_value(value).unwrap()
    }

    fn properties_event(props: serde_json::Value) -> InvocationEvent {
        event(json!({
            "requestBody": {"content": {"application/json": {"properties": props}}}
        }))
    }

    #[test]
    fn test_properties_list() {
        let ev = properties_event(json!([
            {"name": "action_type", "value": "calculate_bmi"},
            {"name": "weight", "value": "30"},
            {"name": "height", "value": "1.2"}
        ]));

        let request = Extractor::default().extract(&ev);
        assert_eq!(request.action_id.as_deref(), Some("calculate_bmi"));
        assert_eq!(
            request.parameters,
            [("weight", "30"), ("height", "1.2")]
                .into_iter()
                .collect::<Parameters>()
        );
        assert_eq!(Extractor::shape(&ev), EventShape::Properties);
    }

    #[test]
    fn test_properties_without_selector() {
        let ev = properties_event(json!([{"name": "weight", "value": "30"}]));
        let request = Extractor::default().extract(&ev);
        assert!(request.action_id.is_none());
        assert_eq!(request.parameters.get("weight"), Some("30"));
    }

    #[test]
    fn test_properties_duplicates_last_write_wins() {
        let ev = properties_event(json!([
            {"name": "action_type", "value": "analyze_patient_data"},
            {"name": "patient_id", "value": "p-1"},
            {"name": "patient_id", "value": "p-2"},
            {"name": "action_type", "value": "extract_demographics"}
        ]));
        let request = Extractor::default().extract(&ev);
        assert_eq!(request.action_id.as_deref(), Some("extract_demographics"));
        assert_eq!(request.parameters.get("patient_id"), Some("p-2"));
        assert_eq!(request.parameters.len(), 1);
    }

    #[test]
    fn test_request_body_without_json_content() {
        let ev = event(json!({"requestBody": {"content": {}}, "function": "ignored"}));
        let request = Extractor::default().extract(&ev);
        assert_eq!(request, ActionRequest::default());
    }

    #[test]
    fn test_custom_selector() {
        let ev = properties_event(json!([
            {"name": "operation", "value": "calculate_bmi"},
            {"name": "action_type", "value": "kept-as-parameter"}
        ]));
        let extractor = Extractor::new("operation");
        let request = extractor.extract(&ev);
        assert_eq!(request.action_id.as_deref(), Some("calculate_bmi"));
        assert_eq!(request.parameters.get("action_type"), Some("kept-as-parameter"));
        assert_eq!(extractor.selector(), "operation");
    }

    #[test]
    fn test_function_call_map() {
        let ev = event(json!({
            "actionGroup": "wellness",
            "function": "calculate_bmi",
            "parameters": {"weight": 20, "height": "1.0"}
        }));
        let request = Extractor::default().extract(&ev);
        assert_eq!(Extractor::shape(&ev), EventShape::FunctionCall);
        assert_eq!(request.action_id.as_deref(), Some("calculate_bmi"));
        assert_eq!(request.parameters.get("weight"), Some("20"));
        assert_eq!(request.parameters.get("height"), Some("1.0"));
    }

    #[test]
    fn test_function_call_list() {
        let ev = event(json!({
            "function": "get_diet_plan",
            "parameters": [{"name": "goal", "type": "string", "value": "maintain"}]
        }));
        let request = Extractor::default().extract(&ev);
        assert_eq!(request.action_id.as_deref(), Some("get_diet_plan"));
        assert_eq!(request.parameters.get("goal"), Some("maintain"));
    }

    #[test]
    fn test_function_without_parameters() {
        let ev = event(json!({"function": "get_fitness_plan"}));
        let request = Extractor::default().extract(&ev);
        assert_eq!(request.action_id.as_deref(), Some("get_fitness_plan"));
        assert!(request.parameters.is_empty());
    }

    #[test]
    fn test_empty_event() {
        let ev = event(json!({"actionGroup": "x"}));
        assert_eq!(Extractor::shape(&ev), EventShape::Empty);
        assert_eq!(Extractor::default().extract(&ev), ActionRequest::default());
    }
}
