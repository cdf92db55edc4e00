//! Path length over position traces.

use crate::capture::PositionSample;

/// Euclidean distance between two samples.
pub fn distance(a: &PositionSample, b: &PositionSample) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let dz = b.z - a.z;
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Cumulative 3-D path length of an ordered trace.
///
/// Traces of zero or one sample have length 0. Non-finite coordinates are
/// not rejected; they propagate into the result.
pub fn path_length(positions: &[PositionSample]) -> f64 {
    positions
        .windows(2)
        .map(|pair| distance(&pair[0], &pair[1]))
        .sum()
}
