//! Structured logging utilities.

use std::fmt;

/// Initialize the process logger.
///
/// Defaults to `info`; `RUST_LOG` overrides. Safe to call repeatedly.
pub fn init_logger() {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .format_timestamp_millis()
    .try_init();
}

/// Logging context for one aggregation run.
#[derive(Debug, Clone)]
pub struct LogContext {
    pub run_id: String,
    pub entity_id: Option<i64>,
}

impl LogContext {
    pub fn new(run_id: &str) -> Self {
        Self {
            run_id: run_id.to_string(),
            entity_id: None,
        }
    }

    pub fn with_entity(&self, entity_id: i64) -> Self {
        Self {
            run_id: self.run_id.clone(),
            entity_id: Some(entity_id),
        }
    }
}

impl fmt::Display for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.entity_id {
            Some(id) => write!(f, "[run={}] [entity={}]", self.run_id, id),
            None => write!(f, "[run={}]", self.run_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_context_display() {
        let ctx = LogContext::new("run-1a2b3c4d");
        assert_eq!(format!("{}", ctx), "[run=run-1a2b3c4d]");

        let ctx_with_entity = ctx.with_entity(42);
        assert_eq!(
            format!("{}", ctx_with_entity),
            "[run=run-1a2b3c4d] [entity=42]"
        );
    }

    #[test]
    fn test_init_logger_is_idempotent() {
        init_logger();
        init_logger();
    }
}
