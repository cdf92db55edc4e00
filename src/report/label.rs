//! Chart labeling and result serialization.

use std::io::Write;

use crate::error::{AggregateError, Result};
use crate::mission::MissionMeta;
use crate::pipeline::AggregateResult;

/// Title line for the AI evaluation chart.
pub fn chart_title(mission: &MissionMeta) -> String {
    format!(
        "AI Eval - {} ({}) by {} @ {}",
        mission.name, mission.world_name, mission.author, mission.time
    )
}

/// Write the result as 2-space indented JSON.
pub fn write_result<W: Write>(result: &AggregateResult, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, result)
        .map_err(|e| AggregateError::Io(e.into()))?;
    writer.flush()?;
    Ok(())
}
