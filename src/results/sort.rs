//! Result ordering.

use std::fmt;
use std::str::FromStr;

use super::SavedResult;

/// How the results list is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Newest first.
    #[default]
    Newest,
    /// Favorites first, each group newest first.
    Favorite,
}

impl SortMode {
    /// Interpret a remembered value: anything but `favorite` means newest.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("favorite") => Self::Favorite,
            _ => Self::Newest,
        }
    }

    /// Stable string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Favorite => "favorite",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(Self::Newest),
            "favorite" | "favorites" => Ok(Self::Favorite),
            _ => Err(format!("unknown sort mode: {}", s)),
        }
    }
}

/// Sort in place. Stable, so equal timestamps keep their stored order.
pub fn sort_results(results: &mut [SavedResult], mode: SortMode) {
    match mode {
        SortMode::Newest => results.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortMode::Favorite => results.sort_by(|a, b| {
            b.is_favorite
                .cmp(&a.is_favorite)
                .then_with(|| b.created_at.cmp(&a.created_at))
        }),
    }
}

/// Favorites only, newest first.
pub fn favorites(results: &[SavedResult]) -> Vec<SavedResult> {
    let mut favs: Vec<SavedResult> = results.iter().filter(|r| r.is_favorite).cloned().collect();
    sort_results(&mut favs, SortMode::Newest);
    favs
}
