//! Event timeline normalization.
//!
//! The capture's `events` array mixes every kind of record the recorder
//! writes (connects, chat, respawns, hits, kills, ...) as positional arrays:
//!
//! ```text
//! [frame, eventType, victimId, [sourceId, weapon, ...], distance, ...]
//! ```
//!
//! Only `hit` and `killed` records with every field present are kept. The
//! rest is expected noise and is dropped without error.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::extraction::{leading_element, present_field, value_to_float, value_to_int};
use crate::logging::structured::LogContext;

const FIELD_TYPE: usize = 1;
const FIELD_VICTIM: usize = 2;
const FIELD_SOURCE: usize = 3;
const FIELD_DISTANCE: usize = 4;
const MIN_FIELDS: usize = 5;

/// Kind of combat event that contributes to statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Hit,
    Killed,
}

impl EventKind {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "hit" => Some(EventKind::Hit),
            "killed" => Some(EventKind::Killed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Hit => "hit",
            EventKind::Killed => "killed",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A hit or kill attributed to the entity that caused it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedEvent {
    pub kind: EventKind,
    pub victim: i64,
    pub source: i64,
    pub distance: f64,
}

/// Parse one raw timeline record.
///
/// Returns `None` for anything that is not a complete `hit`/`killed`
/// record. A source whose id is not an integer (the recorder writes
/// `["null"]` for environmental kills) can never match a roster entity and
/// is dropped here as well.
pub fn parse_event(record: &Value) -> Option<NormalizedEvent> {
    let fields = record.as_array()?;
    if fields.len() < MIN_FIELDS {
        return None;
    }

    let kind = present_field(fields, FIELD_TYPE)
        .and_then(Value::as_str)
        .and_then(EventKind::from_tag)?;
    let victim = present_field(fields, FIELD_VICTIM)?;
    let source_info = present_field(fields, FIELD_SOURCE)?;
    let distance = present_field(fields, FIELD_DISTANCE)?;

    let source = leading_element(source_info).and_then(value_to_int)?;

    Some(NormalizedEvent {
        kind,
        victim: value_to_int(victim)?,
        source,
        distance: value_to_float(distance)?,
    })
}

/// Normalize the whole timeline, preserving capture order.
pub fn normalize_events(events: &[Value], ctx: &LogContext) -> Vec<NormalizedEvent> {
    let normalized: Vec<NormalizedEvent> = events.iter().filter_map(parse_event).collect();

    log::debug!(
        "{} EVENTS_NORMALIZED raw={} kept={} dropped={}",
        ctx,
        events.len(),
        normalized.len(),
        events.len() - normalized.len()
    );

    normalized
}
