//! Grouping of normalized events by source entity.

use std::collections::BTreeMap;

use serde::Serialize;

use super::normalize::{EventKind, NormalizedEvent};

/// The affected side of an event, as seen from its source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EventTarget {
    pub victim: i64,
    pub distance: f64,
}

/// All events one entity caused, grouped by kind in capture order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceEvents {
    by_kind: BTreeMap<EventKind, Vec<EventTarget>>,
}

impl SourceEvents {
    pub fn push(&mut self, kind: EventKind, target: EventTarget) {
        self.by_kind.entry(kind).or_default().push(target);
    }

    /// Targets of one kind; empty if the entity never caused that kind.
    pub fn targets(&self, kind: EventKind) -> &[EventTarget] {
        self.by_kind.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn count(&self, kind: EventKind) -> usize {
        self.targets(kind).len()
    }
}

/// Source entity id -> events it caused.
///
/// Entities that caused nothing never appear as keys. Keys iterate in
/// ascending id order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventIndex {
    sources: BTreeMap<i64, SourceEvents>,
}

impl EventIndex {
    pub fn build(events: &[NormalizedEvent]) -> Self {
        let mut index = Self::default();
        for event in events {
            index.sources.entry(event.source).or_default().push(
                event.kind,
                EventTarget {
                    victim: event.victim,
                    distance: event.distance,
                },
            );
        }
        index
    }

    pub fn get(&self, source: i64) -> Option<&SourceEvents> {
        self.sources.get(&source)
    }

    pub fn contains(&self, source: i64) -> bool {
        self.sources.contains_key(&source)
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, &SourceEvents)> {
        self.sources.iter().map(|(id, events)| (*id, events))
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
