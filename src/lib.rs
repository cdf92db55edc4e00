//! OCAP Stats Core - combat statistics from after-action captures
//!
//! This crate turns an OCAP capture (entity position traces plus a
//! timeline of hits and kills) into per-entity combat statistics for the
//! chart renderer. The Python renderer reaches it through the optional
//! `python` feature.
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `capture` - Raw capture model and decoding
//! - `extraction` - Loose JSON value access
//! - `geometry` - Path length over position traces
//! - `stats` - Roster extraction and the stats merge
//! - `events` - Event normalization and indexing
//! - `mission` - Mission header for labeling
//! - `pipeline` - Orchestrator and per-run context
//! - `report` - Output contract for renderers
//! - `config` - Aggregation options
//! - `logging` - Structured logging with run context
//!
//! ```
//! use ocap_stats_core::{process_capture_json, AggregateConfig};
//!
//! let capture = r#"{
//!     "missionName": "Op Dawn", "missionAuthor": "Kestrel", "worldName": "Altis",
//!     "times": [{"systemTimeUTC": "2023-05-01T18:30:07"}],
//!     "entities": [{"id": 1, "isPlayer": 0, "positions": [[[0, 0, 0]], [[3, 4, 0]]],
//!                   "framesFired": [1, 2, 3, 4]}],
//!     "events": [[10, "hit", 2, [1, "MX"], 10]]
//! }"#;
//!
//! let result = process_capture_json(capture, &AggregateConfig::default()).unwrap();
//! assert_eq!(result.stats.ai[0].accuracy, 25);
//! ```

pub mod capture;
pub mod config;
pub mod error;
pub mod events;
pub mod extraction;
pub mod geometry;
pub mod logging;
pub mod mission;
pub mod pipeline;
pub mod report;
pub mod stats;

#[cfg(feature = "python")]
mod python;

pub use capture::{load_capture, parse_capture, read_capture, RawCapture};
pub use config::AggregateConfig;
pub use error::{AggregateError, Result};
pub use mission::MissionMeta;
pub use pipeline::{aggregate_capture, process_capture_json, AggregateResult};
pub use stats::{CohortStats, EntityRecord, StatRecord};
