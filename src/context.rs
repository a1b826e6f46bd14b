//! Per-invocation runtime state.
//!
//! A [`ToolsContext`] is built once per command from the resolved config.
//! It owns the storage file and the analytics log and hands out the stores
//! that commands work with.

use chrono::Utc;

use crate::analytics::{AnalyticsEvent, AnalyticsLog};
use crate::config::ToolsConfig;
use crate::error::Result;
use crate::pages::{PageFavorites, VisitHistory};
use crate::results::ResultStore;
use crate::storage::{FileStorage, ScopedStorage};
use crate::view::ViewState;

/// Storage and analytics for one command run.
pub struct ToolsContext {
    config: ToolsConfig,
    storage: FileStorage,
    analytics: AnalyticsLog,
}

impl ToolsContext {
    /// Open storage and migrate legacy site-wide keys.
    ///
    /// # Errors
    ///
    /// Fails when the storage file exists but is not a JSON object.
    pub fn init(config: ToolsConfig) -> Result<Self> {
        let mut storage = FileStorage::new(config.storage_path());
        storage.verify()?;

        let migrated = ScopedStorage::new(&mut storage).migrate_legacy_keys()?;
        if migrated > 0 {
            tracing::info!("Migrated {} legacy keys in {}", migrated, storage.path().display());
        }

        let analytics = if config.analytics.enabled {
            AnalyticsLog::new(config.analytics_path())
        } else {
            AnalyticsLog::disabled(config.analytics_path())
        };

        tracing::debug!("Using storage at {}", storage.path().display());

        Ok(Self {
            config,
            storage,
            analytics,
        })
    }

    /// The loaded configuration.
    pub fn config(&self) -> &ToolsConfig {
        &self.config
    }

    /// Saved results and the compare selection.
    pub fn results(&mut self) -> ResultStore<&mut FileStorage> {
        ResultStore::new(&mut self.storage)
    }

    /// Sort mode, catalog filter, and search text.
    pub fn view(&mut self) -> ViewState<&mut FileStorage> {
        ViewState::new(&mut self.storage)
    }

    /// Pages the user starred.
    pub fn page_favorites(&mut self) -> PageFavorites<&mut FileStorage> {
        PageFavorites::new(&mut self.storage)
    }

    /// Recently visited pages.
    pub fn history(&mut self) -> VisitHistory<&mut FileStorage> {
        VisitHistory::new(&mut self.storage)
    }

    /// The analytics log, which may be disabled.
    pub fn analytics(&self) -> &AnalyticsLog {
        &self.analytics
    }

    /// A tools-page event stamped with the current time.
    pub fn event(&self, name: &str) -> AnalyticsEvent {
        AnalyticsEvent::tools(name, Utc::now().timestamp_millis())
    }

    /// Record an analytics event. Failures are logged and never abort the
    /// command that produced the event.
    pub fn track(&self, event: AnalyticsEvent) {
        if let Err(e) = self.analytics.send(&event) {
            tracing::warn!("Failed to record {}: {:#}", event.event_name, e);
        }
    }

    /// Finish the run. Every write has already reached disk.
    pub fn teardown(self) -> Result<()> {
        tracing::debug!("Closing storage at {}", self.storage.path().display());
        Ok(())
    }
}
