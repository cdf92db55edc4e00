//! Column-oriented view of stat records.

use crate::stats::StatRecord;

/// Columns tabulated for the charts, in display order.
pub const STAT_COLUMNS: [&str; 6] = [
    "totalMovement",
    "shotsFired",
    "hits",
    "avgHitDistance",
    "kills",
    "accuracy",
];

/// One row per record, one value per [`STAT_COLUMNS`] entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatTable {
    pub ids: Vec<i64>,
    pub rows: Vec<[f64; 6]>,
}

impl StatTable {
    pub fn from_records(records: &[StatRecord]) -> Self {
        Self {
            ids: records.iter().map(|r| r.entity.id).collect(),
            rows: records.iter().map(row).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All values of a named column, `None` for an unknown name.
    pub fn column(&self, name: &str) -> Option<Vec<f64>> {
        let idx = STAT_COLUMNS.iter().position(|c| *c == name)?;
        Some(self.rows.iter().map(|r| r[idx]).collect())
    }
}

fn row(record: &StatRecord) -> [f64; 6] {
    [
        record.entity.total_movement as f64,
        record.entity.shots_fired as f64,
        record.hits as f64,
        record.avg_hit_distance as f64,
        record.kills as f64,
        record.accuracy as f64,
    ]
}
