//! Per-run context.
//!
//! Each aggregation gets its own context; nothing is shared between runs.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::config::AggregateConfig;
use crate::logging::structured::LogContext;

/// Context for one aggregation run.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub run_id: String,
    pub started_at: DateTime<Utc>,
    pub config: AggregateConfig,
}

impl RunContext {
    pub fn new(config: AggregateConfig) -> Self {
        Self {
            run_id: format!("run-{}", &Uuid::new_v4().simple().to_string()[..8]),
            started_at: Utc::now(),
            config,
        }
    }

    pub fn log_context(&self) -> LogContext {
        LogContext::new(&self.run_id)
    }

    /// Wall time since the run started, in milliseconds.
    pub fn elapsed_ms(&self) -> i64 {
        (Utc::now() - self.started_at).num_milliseconds()
    }
}
