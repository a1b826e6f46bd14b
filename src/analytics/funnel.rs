//! Funnel stage inference.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Marketing funnel stage of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FunnelStage {
    Awareness,
    Consideration,
    Conversion,
}

impl FunnelStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Awareness => "awareness",
            Self::Consideration => "consideration",
            Self::Conversion => "conversion",
        }
    }
}

impl fmt::Display for FunnelStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const CONVERSION_TARGETS: &[&str] = &["request", "#contact", "#target-selection"];
const CONVERSION_LABELS: &[&str] = &["依頼", "お問い合わせ"];
const CONSIDERATION_TARGETS: &[&str] = &["portfolio", "pricing", "tools"];
const CONSIDERATION_LABELS: &[&str] = &["作品", "料金", "ツール"];

/// Classify an event by its name and payload.
pub fn infer_funnel_stage(event_name: &str, payload: &Map<String, Value>) -> FunnelStage {
    match event_name {
        "form_start" => return FunnelStage::Consideration,
        "form_submit" | "form_submission" | "form_complete" => return FunnelStage::Conversion,
        _ => {}
    }

    if event_name.starts_with("tools_") {
        let converts = ["save", "import", "edit_submit"]
            .iter()
            .any(|word| event_name.contains(word));
        return if converts {
            FunnelStage::Conversion
        } else {
            FunnelStage::Consideration
        };
    }

    if event_name == "ui_click" {
        let target = payload_text(payload, "link_target").to_lowercase();
        let label = payload_text(payload, "event_label").to_lowercase();
        let hit = |targets: &[&str], labels: &[&str]| {
            targets.iter().any(|t| target.contains(t)) || labels.iter().any(|l| label.contains(l))
        };

        if hit(CONVERSION_TARGETS, CONVERSION_LABELS) {
            return FunnelStage::Conversion;
        }
        if hit(CONSIDERATION_TARGETS, CONSIDERATION_LABELS) {
            return FunnelStage::Consideration;
        }
    }

    FunnelStage::Awareness
}

/// String form of a payload field; missing, null, false, zero and empty
/// values read as empty.
pub(crate) fn payload_text(payload: &Map<String, Value>, key: &str) -> String {
    match payload.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(true)) => "true".to_string(),
        Some(Value::Number(n)) if n.as_f64() != Some(0.0) => n.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    #[test]
    fn form_events() {
        let empty = Map::new();
        assert_eq!(infer_funnel_stage("form_start", &empty), FunnelStage::Consideration);
        assert_eq!(infer_funnel_stage("form_submit", &empty), FunnelStage::Conversion);
        assert_eq!(infer_funnel_stage("form_complete", &empty), FunnelStage::Conversion);
    }

    #[test]
    fn tools_events() {
        let empty = Map::new();
        assert_eq!(infer_funnel_stage("tools_result_save", &empty), FunnelStage::Conversion);
        assert_eq!(infer_funnel_stage("tools_backup_import", &empty), FunnelStage::Conversion);
        assert_eq!(
            infer_funnel_stage("tools_result_edit_submit", &empty),
            FunnelStage::Conversion
        );
        assert_eq!(
            infer_funnel_stage("tools_result_edit_open", &empty),
            FunnelStage::Consideration
        );
        assert_eq!(infer_funnel_stage("tools_sort_change", &empty), FunnelStage::Consideration);
    }

    #[test]
    fn ui_clicks_by_target_and_label() {
        let contact = payload(json!({ "link_target": "index.html#contact" }));
        assert_eq!(infer_funnel_stage("ui_click", &contact), FunnelStage::Conversion);

        let pricing = payload(json!({ "link_target": "/Pricing.html" }));
        assert_eq!(infer_funnel_stage("ui_click", &pricing), FunnelStage::Consideration);

        let label = payload(json!({ "event_label": "ツール一覧" }));
        assert_eq!(infer_funnel_stage("ui_click", &label), FunnelStage::Consideration);

        let other = payload(json!({ "link_target": "about.html" }));
        assert_eq!(infer_funnel_stage("ui_click", &other), FunnelStage::Awareness);
    }

    #[test]
    fn everything_else_is_awareness() {
        assert_eq!(infer_funnel_stage("page_view", &Map::new()), FunnelStage::Awareness);
    }

    #[test]
    fn payload_text_coerces() {
        let map = payload(json!({ "a": 3, "b": 0, "c": null, "d": "x" }));
        assert_eq!(payload_text(&map, "a"), "3");
        assert_eq!(payload_text(&map, "b"), "");
        assert_eq!(payload_text(&map, "c"), "");
        assert_eq!(payload_text(&map, "d"), "x");
        assert_eq!(payload_text(&map, "missing"), "");
    }
}
