//! Backup payload: versioned JSON snapshot for export and import.
//!
//! Export writes the stored records as-is. Import is deliberately lenient
//! per record (every field is coerced, bad records are dropped) and strict
//! per document (the text must be JSON at all).

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, SolaceError};

use super::{Category, CompareSelection, IdGenerator, SavedResult};

/// Current backup format version.
pub const BACKUP_VERSION: u32 = 1;

/// The canonical backup document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupPayload {
    /// Format version.
    pub version: u32,
    /// ISO-8601 export time.
    pub exported_at: String,
    /// Every saved result.
    pub results: Vec<SavedResult>,
    /// Comparison selection at export time.
    pub compare_ids: Vec<String>,
}

impl BackupPayload {
    /// Snapshot the given state.
    pub fn new(
        results: Vec<SavedResult>,
        compare: &CompareSelection,
        exported_at: DateTime<Utc>,
    ) -> Self {
        Self {
            version: BACKUP_VERSION,
            exported_at: exported_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            results,
            compare_ids: compare.ids().to_vec(),
        }
    }

    /// Pretty-printed JSON, as written to backup files.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SolaceError::Other(anyhow::anyhow!("Failed to encode backup: {}", e)))
    }
}

/// Default file name for a backup taken on `date`.
pub fn backup_filename(date: NaiveDate) -> String {
    format!("solace-tools-backup-{}.json", date.format("%Y%m%d"))
}

/// A backup document after normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedBackup {
    /// Records that survived normalization.
    pub results: Vec<SavedResult>,
    /// String entries of `compareIds`, untranslated.
    pub compare_ids: Vec<String>,
}

/// Parse and normalize backup text.
///
/// Fails with `Parse` when the text is not JSON, and with `Validation` when
/// the document lists results but none of them is usable.
pub fn parse_backup(
    text: &str,
    ids: &mut dyn IdGenerator,
    now_ms: i64,
) -> Result<ParsedBackup> {
    let doc: Value = serde_json::from_str(text).map_err(|e| SolaceError::Parse {
        message: e.to_string(),
    })?;

    let raw_results = doc
        .get("results")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    let results = normalize_results(raw_results, ids, now_ms);
    if results.is_empty() && !raw_results.is_empty() {
        return Err(SolaceError::validation(format!(
            "backup lists {} results but none has a title and share text",
            raw_results.len()
        )));
    }

    let compare_ids = doc
        .get("compareIds")
        .and_then(Value::as_array)
        .map(|ids| {
            ids.iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    Ok(ParsedBackup {
        results,
        compare_ids,
    })
}

/// Coerce raw records and drop those without a title or share text.
pub fn normalize_results(
    items: &[Value],
    ids: &mut dyn IdGenerator,
    now_ms: i64,
) -> Vec<SavedResult> {
    items
        .iter()
        .map(|item| normalize_result(item, ids, now_ms))
        .filter(|r| !r.title.is_empty() && !r.share_text.is_empty())
        .collect()
}

fn normalize_result(item: &Value, ids: &mut dyn IdGenerator, now_ms: i64) -> SavedResult {
    let id = match item.get("id").and_then(Value::as_str) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => ids.generate(),
    };

    SavedResult {
        id,
        title: trimmed_string(item, "title"),
        category: match item.get("category").and_then(Value::as_str) {
            Some(raw) => Category::normalize(raw),
            None => Category::Color,
        },
        before_image: trimmed_string(item, "beforeImage"),
        after_image: trimmed_string(item, "afterImage"),
        share_text: trimmed_string(item, "shareText"),
        is_favorite: item.get("isFavorite").is_some_and(is_truthy),
        created_at: item
            .get("createdAt")
            .and_then(timestamp_of)
            .unwrap_or(now_ms),
    }
}

fn trimmed_string(item: &Value, key: &str) -> String {
    item.get(key)
        .and_then(Value::as_str)
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// Truthiness of a loosely typed flag.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Numeric conversion of a loosely typed timestamp. `None` means "not a
/// finite number", in which case the caller substitutes the current time.
fn timestamp_of(value: &Value) -> Option<i64> {
    let number = match value {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => return n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                0.0
            } else {
                s.parse::<f64>().ok()?
            }
        }
        Value::Array(items) if items.is_empty() => 0.0,
        Value::Array(_) | Value::Object(_) => return None,
    };

    number.is_finite().then_some(number as i64)
}
