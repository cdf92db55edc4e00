//! Main aggregation pipeline.
//!
//! Coordinates the capture -> statistics workflow:
//! 1. Mission header extraction (the only fatal step)
//! 2. Roster extraction with movement and shot counts
//! 3. Event normalization
//! 4. Event indexing by source
//! 5. Stats merge into player/AI cohorts

use serde::Serialize;

use crate::capture::{parse_capture, RawCapture};
use crate::config::AggregateConfig;
use crate::error::Result;
use crate::events::{normalize_events, EventIndex};
use crate::mission::{extract_mission_meta, MissionMeta};
use crate::stats::{extract_entities, merge_stats, CohortStats};

use super::context::RunContext;

/// Output of one aggregation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateResult {
    pub stats: CohortStats,
    pub mission: MissionMeta,
}

/// Aggregate a decoded capture.
pub fn aggregate_capture(capture: &RawCapture, config: &AggregateConfig) -> Result<AggregateResult> {
    aggregate_with_context(&RunContext::new(*config), capture)
}

/// Decode a JSON capture and aggregate it.
pub fn process_capture_json(json: &str, config: &AggregateConfig) -> Result<AggregateResult> {
    let capture = parse_capture(json)?;
    aggregate_capture(&capture, config)
}

/// Aggregate a decoded capture under an existing run context.
pub fn aggregate_with_context(ctx: &RunContext, capture: &RawCapture) -> Result<AggregateResult> {
    let log_ctx = ctx.log_context();

    log::info!(
        "{} CAPTURE_RECEIVED mission={:?} entities={} events={}",
        log_ctx,
        capture.mission_name,
        capture.entities.len(),
        capture.events.len()
    );

    // [1] MISSION HEADER
    let mission = extract_mission_meta(capture).map_err(|e| {
        log::warn!(
            "{} MISSION_METADATA_MALFORMED kind={} error={}",
            log_ctx,
            e.kind(),
            e
        );
        e
    })?;

    // [2] ROSTER
    let entities = extract_entities(&capture.entities, &log_ctx);

    // [3] NORMALIZE
    let events = normalize_events(&capture.events, &log_ctx);

    // [4] INDEX
    let index = EventIndex::build(&events);

    // [5] MERGE
    let stats = merge_stats(&index, &entities, &ctx.config, &log_ctx);

    log::info!(
        "{} AGGREGATE_COMPLETE entities={} combat_events={} sources={} ai={} player={} elapsed_ms={}",
        log_ctx,
        entities.len(),
        events.len(),
        index.len(),
        stats.ai.len(),
        stats.player.len(),
        ctx.elapsed_ms()
    );

    Ok(AggregateResult { stats, mission })
}
