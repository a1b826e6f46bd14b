//! Saved result records and form input.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Result, SolaceError};

/// Which tool produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Color tools.
    #[default]
    Color,
    /// Main-flow tools.
    Main,
}

impl Category {
    /// Normalize untrusted input: `main` only on exact match, otherwise `color`.
    pub fn normalize(raw: &str) -> Self {
        if raw == "main" {
            Self::Main
        } else {
            Self::Color
        }
    }

    /// Stable string form used in storage and backups.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Main => "main",
        }
    }

    /// Human label for listings.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Color => "Color",
            Self::Main => "Main flow",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "color" => Ok(Self::Color),
            "main" => Ok(Self::Main),
            _ => Err(format!("unknown category: {}", s)),
        }
    }
}

/// One saved before/after showcase entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedResult {
    /// Unique identifier within the store.
    pub id: String,
    /// Display title (never empty).
    pub title: String,
    /// Tool category.
    #[serde(default, deserialize_with = "lenient_category")]
    pub category: Category,
    /// URL of the "before" image, may be empty.
    #[serde(default)]
    pub before_image: String,
    /// URL of the "after" image, may be empty.
    #[serde(default)]
    pub after_image: String,
    /// Text offered for copying (never empty).
    pub share_text: String,
    /// Marked as favorite.
    #[serde(default)]
    pub is_favorite: bool,
    /// Creation time in milliseconds since the epoch.
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: i64,
}

impl SavedResult {
    /// Build a new, non-favorite result from validated fields.
    pub fn new(id: impl Into<String>, fields: ValidFields, created_at: i64) -> Self {
        Self {
            id: id.into(),
            title: fields.title,
            category: fields.category,
            before_image: fields.before_image,
            after_image: fields.after_image,
            share_text: fields.share_text,
            is_favorite: false,
            created_at,
        }
    }

    /// Overwrite the editable fields. Identity, favorite flag and
    /// creation time are kept.
    pub fn apply(&mut self, fields: ValidFields) {
        self.title = fields.title;
        self.category = fields.category;
        self.before_image = fields.before_image;
        self.after_image = fields.after_image;
        self.share_text = fields.share_text;
    }

    /// The image to export: the after image, else the before image.
    pub fn image_url(&self) -> Option<&str> {
        [self.after_image.as_str(), self.before_image.as_str()]
            .into_iter()
            .find(|url| !url.is_empty())
    }

    /// File name for an exported image: whitespace runs in the title become `-`.
    pub fn image_file_name(&self) -> String {
        static WHITESPACE: OnceLock<Regex> = OnceLock::new();
        let re = WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("valid regex"));
        format!("{}.png", re.replace_all(&self.title, "-"))
    }
}

/// Untrusted form input for create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultFields {
    pub title: String,
    pub category: String,
    pub before_image: String,
    pub after_image: String,
    pub share_text: String,
}

/// Form input that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidFields {
    pub title: String,
    pub category: Category,
    pub before_image: String,
    pub after_image: String,
    pub share_text: String,
}

impl ResultFields {
    /// Convenience constructor for the two required fields.
    pub fn new(title: impl Into<String>, share_text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            share_text: share_text.into(),
            ..Default::default()
        }
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the before and after image URLs.
    pub fn with_images(mut self, before: impl Into<String>, after: impl Into<String>) -> Self {
        self.before_image = before.into();
        self.after_image = after.into();
        self
    }

    /// Trim and normalize. Fails when the title or share text is blank.
    pub fn validate(&self) -> Result<ValidFields> {
        let title = self.title.trim();
        let share_text = self.share_text.trim();

        if title.is_empty() || share_text.is_empty() {
            return Err(SolaceError::validation(
                "title and share text are required",
            ));
        }

        Ok(ValidFields {
            title: title.to_string(),
            category: Category::normalize(&self.category),
            before_image: self.before_image.trim().to_string(),
            after_image: self.after_image.trim().to_string(),
            share_text: share_text.to_string(),
        })
    }
}

fn lenient_category<'de, D>(deserializer: D) -> std::result::Result<Category, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::String(s)) => Category::normalize(&s),
        _ => Category::Color,
    })
}

// Older data stored timestamps as floats.
fn lenient_timestamp<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|f| f as i64)))
        .unwrap_or(0))
}
