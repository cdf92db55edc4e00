//! Deserialization model for an OCAP capture file.
//!
//! Fields the aggregation never reads (markers, frame counts, vehicle crew
//! lists, ...) are ignored by serde. Loosely typed fields are coerced via
//! [`crate::extraction`] instead of failing the whole decode.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::extraction::{leading_element, value_to_bool, value_to_text};

/// A complete, static capture as written by the OCAP recorder.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCapture {
    #[serde(default)]
    pub entities: Vec<RawEntity>,
    /// Heterogeneous positional records, see [`crate::events::normalize`].
    #[serde(default)]
    pub events: Vec<Value>,
    #[serde(default, deserialize_with = "loose_string")]
    pub mission_name: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub mission_author: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub world_name: String,
    #[serde(default)]
    pub times: Vec<CaptureTime>,
}

/// One tracked actor: a unit or a vehicle.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEntity {
    pub id: i64,
    #[serde(default, deserialize_with = "loose_string")]
    pub name: String,
    /// The recorder writes `0`/`1`; newer exports write booleans.
    #[serde(default, deserialize_with = "loose_bool")]
    pub is_player: bool,
    #[serde(default, deserialize_with = "loose_string")]
    pub side: String,
    #[serde(default, rename = "type", deserialize_with = "loose_string")]
    pub kind: String,
    /// Samples without a readable `[x, y, z]` are skipped, so movement
    /// is measured across the gap.
    #[serde(default, deserialize_with = "lenient_positions")]
    pub positions: Vec<PositionSample>,
    /// Only the length matters here.
    #[serde(default)]
    pub frames_fired: Vec<Value>,
}

/// Entry of the capture's `times` table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CaptureTime {
    #[serde(default, rename = "systemTimeUTC")]
    pub system_time_utc: Option<String>,
}

/// An entity's location at one logged frame.
///
/// On the wire a sample is `[[x, y, z], direction, alive, ...]`; only the
/// leading coordinate triple is kept.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PositionSample {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl PositionSample {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Decode a wire sample, `None` unless it leads with three numbers.
    pub fn from_wire(sample: &Value) -> Option<Self> {
        match leading_element(sample)?.as_array()?.as_slice() {
            [x, y, z] => Some(Self::new(x.as_f64()?, y.as_f64()?, z.as_f64()?)),
            _ => None,
        }
    }
}

impl From<[f64; 3]> for PositionSample {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

fn loose_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_text).unwrap_or_default())
}

fn lenient_positions<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<PositionSample>, D::Error> {
    let samples = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(samples.iter().filter_map(PositionSample::from_wire).collect())
}

fn loose_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_bool).unwrap_or(false))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_position_sample_ignores_trailing_fields() {
        let sample =
            PositionSample::from_wire(&json!([[1.5, 2.0, 3.25], 270, 1, 0, "Rifleman", 0]));
        assert_eq!(sample, Some(PositionSample::new(1.5, 2.0, 3.25)));
    }

    #[test]
    fn test_position_sample_requires_coordinates() {
        assert_eq!(PositionSample::from_wire(&json!([])), None);
        assert_eq!(PositionSample::from_wire(&json!([[1.0, 2.0]])), None);
        assert_eq!(PositionSample::from_wire(&json!([[1.0, 2.0, 3.0, 4.0]])), None);
        assert_eq!(PositionSample::from_wire(&json!([null, 90])), None);
        assert_eq!(PositionSample::from_wire(&json!([[1.0, "2", 3.0]])), None);
    }

    #[test]
    fn test_malformed_samples_skipped() {
        let entity: RawEntity = serde_json::from_value(json!({
            "id": 2,
            "positions": [
                [[0, 0, 0], 0],
                [[0, 0]],
                [null, 0],
                [[3, 4, 0], 0]
            ]
        }))
        .unwrap();

        assert_eq!(
            entity.positions,
            vec![PositionSample::new(0.0, 0.0, 0.0), PositionSample::new(3.0, 4.0, 0.0)]
        );
    }

    #[test]
    fn test_null_positions_is_empty() {
        let entity: RawEntity =
            serde_json::from_value(json!({"id": 2, "positions": null})).unwrap();
        assert!(entity.positions.is_empty());
    }

    #[test]
    fn test_entity_loose_fields() {
        let entity: RawEntity = serde_json::from_value(json!({
            "id": 3,
            "name": "Sgt. Hale",
            "isPlayer": 1,
            "side": "WEST",
            "type": "unit",
            "group": "Alpha 1-1",
            "positions": [[[0, 0, 0], 90, 1, 0, "Sgt. Hale", 1]],
            "framesFired": [[15, [10, 10, 0]], [16, [11, 10, 0]]]
        }))
        .unwrap();

        assert_eq!(entity.id, 3);
        assert!(entity.is_player);
        assert_eq!(entity.kind, "unit");
        assert_eq!(entity.positions.len(), 1);
        assert_eq!(entity.frames_fired.len(), 2);
    }

    #[test]
    fn test_entity_defaults() {
        let entity: RawEntity =
            serde_json::from_value(json!({"id": 9, "side": null, "isPlayer": null})).unwrap();
        assert!(!entity.is_player);
        assert_eq!(entity.side, "");
        assert!(entity.positions.is_empty());
        assert!(entity.frames_fired.is_empty());
    }

    #[test]
    fn test_capture_header() {
        let capture: RawCapture = serde_json::from_value(json!({
            "missionName": "Op Dawn",
            "missionAuthor": "Kestrel",
            "worldName": "Altis",
            "endFrame": 4200,
            "times": [{"frameNum": 0, "systemTimeUTC": "2023-05-01T18:30:00.125", "time": 0}],
            "entities": [],
            "events": [[0, "connected", "Kestrel"]]
        }))
        .unwrap();

        assert_eq!(capture.mission_name, "Op Dawn");
        assert_eq!(capture.times.len(), 1);
        assert_eq!(
            capture.times[0].system_time_utc.as_deref(),
            Some("2023-05-01T18:30:00.125")
        );
        assert_eq!(capture.events.len(), 1);
    }
}
