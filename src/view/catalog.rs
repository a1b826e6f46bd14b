//! The tool catalog and its category/keyword filter.

use std::fmt;
use std::str::FromStr;

use include_dir::{include_dir, Dir};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SolaceError};
use crate::results::Category;

/// Embedded catalog directory.
static CATALOG_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/catalog");

const CATALOG_FILE: &str = "tools.yml";

/// Which catalog categories are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Color,
    Main,
}

impl CategoryFilter {
    /// Interpret a remembered value; unknown values mean `all`.
    pub fn from_stored(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.parse().ok()).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Color => "color",
            Self::Main => "main",
        }
    }

    fn admits(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Color => category == Category::Color,
            Self::Main => category == Category::Main,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "color" => Ok(Self::Color),
            "main" => Ok(Self::Main),
            _ => Err(format!("unknown category filter: {}", s)),
        }
    }
}

/// One entry in the tool catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCard {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Page the tool lives on, relative to the site root.
    #[serde(default)]
    pub url: Option<String>,
}

impl ToolCard {
    /// Category and keyword match.
    ///
    /// The search text is trimmed and lower-cased; an empty search matches
    /// everything. Title, description and keywords are searched as
    /// case-insensitive substrings.
    pub fn matches(&self, filter: CategoryFilter, search: &str) -> bool {
        if !filter.admits(self.category) {
            return false;
        }

        let needle = search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self.keywords.join(" ").to_lowercase().contains(&needle)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    tools: Vec<ToolCard>,
}

/// Load the catalog embedded in the binary.
pub fn builtin_catalog() -> Result<Vec<ToolCard>> {
    let file = CATALOG_DIR
        .get_file(CATALOG_FILE)
        .ok_or_else(|| SolaceError::ConfigNotFound {
            path: CATALOG_FILE.into(),
        })?;

    let content = file
        .contents_utf8()
        .ok_or_else(|| SolaceError::ConfigParseError {
            path: CATALOG_FILE.into(),
            message: "Invalid UTF-8".to_string(),
        })?;

    let catalog: CatalogFile =
        serde_yaml::from_str(content).map_err(|e| SolaceError::ConfigParseError {
            path: CATALOG_FILE.into(),
            message: e.to_string(),
        })?;

    Ok(catalog.tools)
}

/// The cards visible under `filter` and `search`, in catalog order.
pub fn filter_catalog<'a>(
    cards: &'a [ToolCard],
    filter: CategoryFilter,
    search: &str,
) -> Vec<&'a ToolCard> {
    cards.iter().filter(|c| c.matches(filter, search)).collect()
}
