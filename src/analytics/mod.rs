//! Local analytics log.
//!
//! Every event is appended to a JSONL file together with a derived
//! `funnel_event` that classifies it into a marketing funnel stage.

pub mod event;
pub mod funnel;
pub mod log;

pub use event::{AnalyticsEvent, FUNNEL_EVENT, TOOLS_PAGE_PATH};
pub use funnel::{infer_funnel_stage, FunnelStage};
pub use log::AnalyticsLog;
