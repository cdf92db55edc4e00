//! Capture decoding from text, readers and files.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::Result;

use super::model::RawCapture;

/// Decode a capture from a JSON string.
pub fn parse_capture(json: &str) -> Result<RawCapture> {
    Ok(serde_json::from_str(json)?)
}

/// Decode a capture from any reader, e.g. an upload stream.
pub fn read_capture<R: Read>(reader: R) -> Result<RawCapture> {
    Ok(serde_json::from_reader(BufReader::new(reader))?)
}

/// Decode a capture file from disk.
pub fn load_capture(path: impl AsRef<Path>) -> Result<RawCapture> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let capture = read_capture(file)?;

    log::debug!(
        "CAPTURE_LOADED path={} entities={} events={}",
        path.display(),
        capture.entities.len(),
        capture.events.len()
    );

    Ok(capture)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AggregateError;

    #[test]
    fn test_parse_invalid_json() {
        let err = parse_capture("invalid json{").unwrap_err();
        assert!(matches!(err, AggregateError::CaptureDecode(_)));
    }

    #[test]
    fn test_read_from_slice() {
        let body = br#"{"missionName": "Op Dawn", "entities": [{"id": 0}], "events": []}"#;
        let capture = read_capture(&body[..]).unwrap();
        assert_eq!(capture.mission_name, "Op Dawn");
        assert_eq!(capture.entities.len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_capture("/nonexistent/ocap_capture.json").unwrap_err();
        assert!(matches!(err, AggregateError::Io(_)));
    }
}
