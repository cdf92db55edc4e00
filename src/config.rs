//! Aggregation configuration.

use crate::extraction::parse_flag;

/// Environment variable toggling [`AggregateConfig::include_inactive`].
pub const INCLUDE_INACTIVE_ENV: &str = "OCAP_STATS_INCLUDE_INACTIVE";

/// Knobs for a single aggregation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregateConfig {
    /// Also report roster entities that never sourced a hit or kill.
    ///
    /// Off by default: only event sources appear in the output.
    pub include_inactive: bool,
}

impl AggregateConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_include_inactive(mut self, include_inactive: bool) -> Self {
        self.include_inactive = include_inactive;
        self
    }

    /// Build a config from `OCAP_STATS_INCLUDE_INACTIVE`.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(INCLUDE_INACTIVE_ENV).ok().as_deref())
    }

    fn from_env_value(value: Option<&str>) -> Self {
        let include_inactive = match value {
            None => false,
            Some(raw) => parse_flag(raw).unwrap_or_else(|| {
                log::warn!(
                    "CONFIG_INVALID var={} value={:?} using=false",
                    INCLUDE_INACTIVE_ENV,
                    raw
                );
                false
            }),
        };
        Self { include_inactive }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_excludes_inactive() {
        assert!(!AggregateConfig::default().include_inactive);
        assert!(AggregateConfig::new().with_include_inactive(true).include_inactive);
    }

    #[test]
    fn test_from_env_reads_variable() {
        std::env::set_var(INCLUDE_INACTIVE_ENV, "yes");
        let enabled = AggregateConfig::from_env();
        std::env::remove_var(INCLUDE_INACTIVE_ENV);

        assert!(enabled.include_inactive);
        assert!(!AggregateConfig::from_env().include_inactive);
    }

    #[test]
    fn test_env_value_parsing() {
        assert!(!AggregateConfig::from_env_value(None).include_inactive);
        assert!(AggregateConfig::from_env_value(Some("1")).include_inactive);
        assert!(AggregateConfig::from_env_value(Some("TRUE")).include_inactive);
        assert!(!AggregateConfig::from_env_value(Some("no")).include_inactive);
        assert!(!AggregateConfig::from_env_value(Some("sometimes")).include_inactive);
    }
}
