//! Mission header extraction for labeling output.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::capture::RawCapture;
use crate::error::{AggregateError, Result};

/// Display format of the mission start time.
pub const MISSION_TIME_FORMAT: &str = "%m/%d/%Y, %H:%M:%S";

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Descriptive header of a capture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionMeta {
    pub name: String,
    pub world_name: String,
    pub author: String,
    /// Wall-clock start time, `MM/DD/YYYY, HH:MM:SS`.
    pub time: String,
}

impl MissionMeta {
    /// Rebuild a header from its serialized keys (`name`, `worldName`,
    /// `author`, `time`), as handed back by a renderer.
    pub fn from_fields(fields: &HashMap<String, String>) -> Result<Self> {
        let field = |key: &str| {
            fields
                .get(key)
                .cloned()
                .ok_or_else(|| AggregateError::malformed_mission(format!("missing key {:?}", key)))
        };
        Ok(Self {
            name: field("name")?,
            world_name: field("worldName")?,
            author: field("author")?,
            time: field("time")?,
        })
    }
}

/// Read the mission header from a capture.
///
/// Fails if `times` is empty or its first entry has no parseable
/// `systemTimeUTC`.
pub fn extract_mission_meta(capture: &RawCapture) -> Result<MissionMeta> {
    let first = capture
        .times
        .first()
        .ok_or_else(|| AggregateError::malformed_mission("capture has no times entries"))?;
    let raw_time = first
        .system_time_utc
        .as_deref()
        .ok_or_else(|| AggregateError::malformed_mission("times[0] has no systemTimeUTC"))?;

    Ok(MissionMeta {
        name: capture.mission_name.clone(),
        world_name: capture.world_name.clone(),
        author: capture.mission_author.clone(),
        time: format_capture_time(raw_time)?,
    })
}

/// Parse an ISO-8601 timestamp and render it with [`MISSION_TIME_FORMAT`].
///
/// The recorded wall-clock time is kept as-is; an offset, if present, is
/// not applied.
pub fn format_capture_time(raw: &str) -> Result<String> {
    parse_capture_time(raw.trim())
        .map(|t| t.format(MISSION_TIME_FORMAT).to_string())
        .ok_or_else(|| {
            AggregateError::malformed_mission(format!("unparsable systemTimeUTC {:?}", raw))
        })
}

fn parse_capture_time(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::CaptureTime;

    fn capture(times: Vec<Option<&str>>) -> RawCapture {
        RawCapture {
            mission_name: "Op Dawn".to_string(),
            mission_author: "Kestrel".to_string(),
            world_name: "Altis".to_string(),
            times: times
                .into_iter()
                .map(|t| CaptureTime {
                    system_time_utc: t.map(str::to_string),
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_extracts_header() {
        let meta = extract_mission_meta(&capture(vec![
            Some("2023-05-01T18:30:07.412"),
            Some("2023-05-01T18:30:08.412"),
        ]))
        .unwrap();

        assert_eq!(
            meta,
            MissionMeta {
                name: "Op Dawn".to_string(),
                world_name: "Altis".to_string(),
                author: "Kestrel".to_string(),
                time: "05/01/2023, 18:30:07".to_string(),
            }
        );
    }

    #[test]
    fn test_from_fields_round_trips_serialized_header() {
        let meta = extract_mission_meta(&capture(vec![Some("2023-05-01T18:30:07")])).unwrap();
        let fields: HashMap<String, String> =
            serde_json::from_value(serde_json::to_value(&meta).unwrap()).unwrap();
        assert_eq!(MissionMeta::from_fields(&fields).unwrap(), meta);
    }

    #[test]
    fn test_from_fields_missing_key() {
        let fields = HashMap::from([
            ("name".to_string(), "Op Dawn".to_string()),
            ("author".to_string(), "Kestrel".to_string()),
            ("time".to_string(), "05/01/2023, 18:30:07".to_string()),
        ]);
        let err = MissionMeta::from_fields(&fields).unwrap_err();
        assert!(err.to_string().contains("worldName"));
    }

    #[test]
    fn test_empty_times_is_malformed() {
        let err = extract_mission_meta(&capture(vec![])).unwrap_err();
        assert!(matches!(err, AggregateError::MalformedMissionMetadata(_)));
    }

    #[test]
    fn test_missing_system_time_is_malformed() {
        let err = extract_mission_meta(&capture(vec![None])).unwrap_err();
        assert!(matches!(err, AggregateError::MalformedMissionMetadata(_)));
    }

    #[test]
    fn test_unparsable_time_is_malformed() {
        let err = extract_mission_meta(&capture(vec![Some("yesterday")])).unwrap_err();
        assert!(matches!(err, AggregateError::MalformedMissionMetadata(_)));
    }

    #[test]
    fn test_time_formats() {
        assert_eq!(format_capture_time("2023-05-01T18:30:07").unwrap(), "05/01/2023, 18:30:07");
        assert_eq!(format_capture_time("2023-05-01 08:03:09").unwrap(), "05/01/2023, 08:03:09");
        assert_eq!(format_capture_time("2023-12-24").unwrap(), "12/24/2023, 00:00:00");
        assert_eq!(format_capture_time("2023-05-01T18:30:07Z").unwrap(), "05/01/2023, 18:30:07");
    }

    #[test]
    fn test_offset_not_applied() {
        assert_eq!(
            format_capture_time("2023-05-01T23:15:00+02:00").unwrap(),
            "05/01/2023, 23:15:00"
        );
    }
}
