//! Analytics events.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::funnel::{infer_funnel_stage, payload_text};

/// Name of the derived funnel event.
pub const FUNNEL_EVENT: &str = "funnel_event";

/// Page path attached to events raised by the tools commands.
pub const TOOLS_PAGE_PATH: &str = "/tools.html";

/// One logged event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsEvent {
    pub event_name: String,
    #[serde(default)]
    pub payload: Map<String, Value>,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl AnalyticsEvent {
    pub fn new(event_name: impl Into<String>, timestamp: i64) -> Self {
        Self {
            event_name: event_name.into(),
            payload: Map::new(),
            timestamp,
        }
    }

    /// An event from the tools page, with its category and page path set.
    pub fn tools(event_name: impl Into<String>, timestamp: i64) -> Self {
        Self::new(event_name, timestamp)
            .with("event_category", "tools")
            .with("page_path", TOOLS_PAGE_PATH)
    }

    /// Set a payload field.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.payload.insert(key.to_string(), value.into());
        self
    }

    /// Set `event_label`.
    pub fn label(self, label: impl Into<String>) -> Self {
        self.with("event_label", label.into())
    }

    /// The funnel event derived from this one.
    pub fn funnel_event(&self) -> AnalyticsEvent {
        let stage = infer_funnel_stage(&self.event_name, &self.payload);
        let page_path = match self.payload.get("page_path") {
            Some(Value::String(path)) if !path.is_empty() => path.clone(),
            _ => TOOLS_PAGE_PATH.to_string(),
        };

        AnalyticsEvent::new(FUNNEL_EVENT, self.timestamp)
            .with("funnel_stage", stage.as_str())
            .with("funnel_action", self.event_name.clone())
            .with("funnel_label", payload_text(&self.payload, "event_label"))
            .with("page_path", page_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tools_event_has_category_and_path() {
        let event = AnalyticsEvent::tools("tools_result_save", 1).label("main");
        assert_eq!(event.payload["event_category"], "tools");
        assert_eq!(event.payload["page_path"], TOOLS_PAGE_PATH);
        assert_eq!(event.payload["event_label"], "main");
    }

    #[test]
    fn funnel_event_carries_stage_and_label() {
        let event = AnalyticsEvent::tools("tools_result_save", 42).label("color");
        let funnel = event.funnel_event();

        assert_eq!(funnel.event_name, FUNNEL_EVENT);
        assert_eq!(funnel.timestamp, 42);
        assert_eq!(funnel.payload["funnel_stage"], "conversion");
        assert_eq!(funnel.payload["funnel_action"], "tools_result_save");
        assert_eq!(funnel.payload["funnel_label"], "color");
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_string(&AnalyticsEvent::new("x", 1)).unwrap();
        assert!(json.contains("\"eventName\":\"x\""));
    }
}
