//! Roster extraction.
//!
//! Builds the id-keyed entity lookup the merge step joins against. Each
//! record carries the derived movement and shot counts.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::capture::RawEntity;
use crate::geometry::path_length;
use crate::logging::structured::LogContext;

use super::round_count;

/// Roster metadata plus movement and shot counts for one entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityRecord {
    pub id: i64,
    pub name: String,
    pub is_player: bool,
    pub side: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Path length in whole meters.
    pub total_movement: u64,
    pub shots_fired: u64,
}

impl EntityRecord {
    pub fn from_raw(entity: &RawEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name.clone(),
            is_player: entity.is_player,
            side: entity.side.clone(),
            kind: entity.kind.clone(),
            total_movement: round_count(path_length(&entity.positions)),
            shots_fired: entity.frames_fired.len() as u64,
        }
    }
}

/// Entity records keyed by id.
pub type EntityLookup = BTreeMap<i64, EntityRecord>;

/// Build the roster lookup. A repeated id replaces the earlier entity.
pub fn extract_entities(entities: &[RawEntity], ctx: &LogContext) -> EntityLookup {
    let mut lookup = EntityLookup::new();

    for entity in entities {
        let record = EntityRecord::from_raw(entity);
        if let Some(previous) = lookup.insert(entity.id, record) {
            log::debug!(
                "{} ENTITY_DUPLICATE_ID replaced_name={:?} name={:?}",
                ctx.with_entity(entity.id),
                previous.name,
                entity.name
            );
        }
    }

    log::debug!(
        "{} ENTITIES_EXTRACTED raw={} unique={}",
        ctx,
        entities.len(),
        lookup.len()
    );

    lookup
}
