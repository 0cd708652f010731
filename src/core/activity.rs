use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::core::distance::step_distances;
use crate::core::histogram_series::{Histogram, bin_equal_width};
use crate::core::windowing::sliding_window_sums;
use crate::core::{DataTable, Position3};
use crate::error::{MarmosetError, MarmosetResult};

/// How step distances are turned into activity values before binning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityStrategy {
    /// Sum of step distances over each sliding window of `window_secs` samples.
    WindowedSum,
    /// Raw step distances with a leading 0, one value per sample; the window is ignored.
    RawStep,
}

/// User-chosen histogram parameters, validated against the viewer's input ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ActivityParamsRepr")]
pub struct ActivityParams {
    window_secs: usize,
    bins: usize,
}

#[derive(Deserialize)]
struct ActivityParamsRepr {
    window_secs: usize,
    bins: usize,
}

impl TryFrom<ActivityParamsRepr> for ActivityParams {
    type Error = MarmosetError;

    fn try_from(repr: ActivityParamsRepr) -> Result<Self, Self::Error> {
        Self::new(repr.window_secs, repr.bins)
    }
}

impl ActivityParams {
    pub const WINDOW_RANGE: RangeInclusive<usize> = 1..=300;
    pub const BIN_RANGE: RangeInclusive<usize> = 2..=50;

    pub fn new(window_secs: usize, bins: usize) -> MarmosetResult<Self> {
        check_range("window_secs", window_secs, Self::WINDOW_RANGE)?;
        check_range("bins", bins, Self::BIN_RANGE)?;
        Ok(Self { window_secs, bins })
    }

    #[must_use]
    pub fn window_secs(self) -> usize {
        self.window_secs
    }

    #[must_use]
    pub fn bins(self) -> usize {
        self.bins
    }
}

fn check_range(
    name: &'static str,
    value: usize,
    range: RangeInclusive<usize>,
) -> MarmosetResult<()> {
    if range.contains(&value) {
        return Ok(());
    }
    Err(MarmosetError::ParameterOutOfRange {
        name,
        value,
        min: *range.start(),
        max: *range.end(),
    })
}

/// Activity values the histogram is built from, per strategy.
pub fn activity_values(
    table: &DataTable,
    strategy: ActivityStrategy,
    window_secs: usize,
) -> MarmosetResult<Vec<f64>> {
    let positions: Vec<Position3> = table.positions().collect();
    let steps = step_distances(&positions);
    match strategy {
        ActivityStrategy::WindowedSum => sliding_window_sums(&steps, window_secs),
        ActivityStrategy::RawStep => {
            if table.is_empty() {
                return Ok(Vec::new());
            }
            let mut values = Vec::with_capacity(steps.len() + 1);
            values.push(0.0);
            values.extend(steps);
            Ok(values)
        }
    }
}

/// Histogram of activity summed over sliding windows of `window_secs` samples.
///
/// Fails with `InvalidWindow` when the window is wider than the step count.
pub fn compute_activity_histogram(
    table: &DataTable,
    params: ActivityParams,
) -> MarmosetResult<Histogram> {
    let sums = activity_values(table, ActivityStrategy::WindowedSum, params.window_secs)?;
    bin_equal_width(&sums, params.bins)
}

/// Histogram of raw per-sample step distances, without windowing.
pub fn compute_raw_step_histogram(table: &DataTable, bins: usize) -> MarmosetResult<Histogram> {
    check_range("bins", bins, ActivityParams::BIN_RANGE)?;
    let values = activity_values(table, ActivityStrategy::RawStep, 0)?;
    if values.is_empty() {
        return Err(MarmosetError::EmptySeries(
            "table has no samples".to_owned(),
        ));
    }
    bin_equal_width(&values, bins)
}

/// Dispatches to the histogram operation named by `strategy`.
pub fn compute_histogram(
    table: &DataTable,
    strategy: ActivityStrategy,
    params: ActivityParams,
) -> MarmosetResult<Histogram> {
    match strategy {
        ActivityStrategy::WindowedSum => compute_activity_histogram(table, params),
        ActivityStrategy::RawStep => compute_raw_step_histogram(table, params.bins),
    }
}
