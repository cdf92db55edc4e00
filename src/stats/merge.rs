//! Joins the roster with the event index into per-entity statistics.
//!
//! Only entities that sourced at least one hit or kill are reported unless
//! [`AggregateConfig::include_inactive`] is set. Events whose source is not
//! on the roster are dropped.

use serde::Serialize;

use crate::config::AggregateConfig;
use crate::events::{EventIndex, EventKind, EventTarget, SourceEvents};
use crate::logging::structured::LogContext;

use super::entities::{EntityLookup, EntityRecord};
use super::round_count;

/// Accuracy ceiling in percent. The recorder can log more hits than shots
/// (explosives, ricochets), so raw ratios above 100 are clamped.
pub const MAX_ACCURACY: u64 = 100;

/// Final statistics for one entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatRecord {
    #[serde(flatten)]
    pub entity: EntityRecord,
    pub hits: u64,
    /// Rounded mean hit distance in meters, 0 without hits.
    pub avg_hit_distance: i64,
    pub kills: u64,
    /// Rounded hit percentage in `0..=100`.
    pub accuracy: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hit: Vec<EventTarget>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub killed: Vec<EventTarget>,
}

impl StatRecord {
    pub fn new(entity: &EntityRecord, events: &SourceEvents) -> Self {
        let hit = events.targets(EventKind::Hit).to_vec();
        let killed = events.targets(EventKind::Killed).to_vec();
        let hits = hit.len() as u64;

        Self {
            entity: entity.clone(),
            hits,
            avg_hit_distance: average_distance(&hit),
            kills: killed.len() as u64,
            accuracy: accuracy(hits, entity.shots_fired),
            hit,
            killed,
        }
    }

    /// Zeroed statistics for an entity that caused no events.
    pub fn inactive(entity: &EntityRecord) -> Self {
        Self::new(entity, &SourceEvents::default())
    }

    pub fn is_player(&self) -> bool {
        self.entity.is_player
    }
}

/// Records split by controller.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CohortStats {
    pub ai: Vec<StatRecord>,
    pub player: Vec<StatRecord>,
}

impl CohortStats {
    pub fn push(&mut self, record: StatRecord) {
        if record.is_player() {
            self.player.push(record);
        } else {
            self.ai.push(record);
        }
    }

    pub fn len(&self) -> usize {
        self.ai.len() + self.player.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ai.is_empty() && self.player.is_empty()
    }

    /// Every record, AI cohort first.
    pub fn iter(&self) -> impl Iterator<Item = &StatRecord> {
        self.ai.iter().chain(self.player.iter())
    }
}

/// Percentage of shots that hit, rounded and clamped to `0..=100`.
pub fn accuracy(hits: u64, shots_fired: u64) -> u64 {
    if shots_fired == 0 {
        return 0;
    }
    round_count(hits as f64 / shots_fired as f64 * 100.0).min(MAX_ACCURACY)
}

/// Rounded mean distance of the given targets, 0 when empty.
pub fn average_distance(targets: &[EventTarget]) -> i64 {
    if targets.is_empty() {
        return 0;
    }
    let total: f64 = targets.iter().map(|t| t.distance).sum();
    (total / targets.len() as f64).round() as i64
}

/// Build cohort statistics from the event index and roster.
pub fn merge_stats(
    index: &EventIndex,
    entities: &EntityLookup,
    config: &AggregateConfig,
    ctx: &LogContext,
) -> CohortStats {
    let mut stats = CohortStats::default();
    let mut unknown_sources = 0usize;

    for (source, events) in index.iter() {
        let Some(entity) = entities.get(&source) else {
            log::debug!(
                "{} EVENT_SOURCE_UNKNOWN hits={} kills={}",
                ctx.with_entity(source),
                events.count(EventKind::Hit),
                events.count(EventKind::Killed)
            );
            unknown_sources += 1;
            continue;
        };
        stats.push(StatRecord::new(entity, events));
    }

    let mut inactive = 0usize;
    if config.include_inactive {
        for entity in entities.values().filter(|e| !index.contains(e.id)) {
            stats.push(StatRecord::inactive(entity));
            inactive += 1;
        }
    }

    log::debug!(
        "{} STATS_MERGED ai={} player={} unknown_sources={} inactive={}",
        ctx,
        stats.ai.len(),
        stats.player.len(),
        unknown_sources,
        inactive
    );

    stats
}
