use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{DEFAULT_TIMESTAMP_FORMAT, parse_export_timestamp};
use crate::core::{DataTable, Position3};
use crate::error::MarmosetResult;

/// Euclidean distance between each pair of consecutive samples.
///
/// Returns `positions.len() - 1` values, or none for fewer than two samples.
#[must_use]
pub fn step_distances(positions: &[Position3]) -> Vec<f64> {
    positions
        .windows(2)
        .map(|pair| pair[0].distance_to(pair[1]))
        .collect()
}

/// Running total of step distances, starting at 0 for the first sample.
#[must_use]
pub fn cumulative_sum(steps: &[f64]) -> Vec<f64> {
    let mut total = 0.0;
    let mut out = Vec::with_capacity(steps.len() + 1);
    out.push(total);
    for step in steps {
        total += step;
        out.push(total);
    }
    out
}

/// Distance travelled up to each sample, indexed by its timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CumulativeDistance {
    pub timestamps: Vec<NaiveDateTime>,
    pub distances: Vec<f64>,
}

impl CumulativeDistance {
    #[must_use]
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Total distance travelled over the whole session.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.distances.last().copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDateTime, f64)> + '_ {
        self.timestamps
            .iter()
            .copied()
            .zip(self.distances.iter().copied())
    }
}

/// Computes the cumulative distance series with the export's default timestamp format.
pub fn compute_cumulative_distance(table: &DataTable) -> MarmosetResult<CumulativeDistance> {
    compute_cumulative_distance_with_format(table, DEFAULT_TIMESTAMP_FORMAT)
}

pub fn compute_cumulative_distance_with_format(
    table: &DataTable,
    timestamp_format: &str,
) -> MarmosetResult<CumulativeDistance> {
    let timestamps = table
        .records()
        .iter()
        .enumerate()
        .map(|(row, record)| parse_export_timestamp(&record.date_time, timestamp_format, row))
        .collect::<MarmosetResult<Vec<_>>>()?;

    if table.is_empty() {
        return Ok(CumulativeDistance {
            timestamps,
            distances: Vec::new(),
        });
    }

    let positions: Vec<Position3> = table.positions().collect();
    let distances = cumulative_sum(&step_distances(&positions));
    Ok(CumulativeDistance {
        timestamps,
        distances,
    })
}
