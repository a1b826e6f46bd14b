//! Site-wide page favorites and visit history.
//!
//! Both live under the scoped `pgp.` keys shared by every page of the site.

pub mod favorites;
pub mod history;

pub use favorites::{PageFavorite, PageFavorites, FAVORITES_KEY};
pub use history::{PageVisit, VisitHistory, HISTORY_KEY, HISTORY_LIMIT};
