//! Typed motion samples and the metrics derived from them.

pub mod activity;
pub mod distance;
pub mod histogram_series;
pub mod primitives;
pub mod types;
pub mod windowing;

pub use activity::{
    ActivityParams, ActivityStrategy, activity_values, compute_activity_histogram,
    compute_histogram, compute_raw_step_histogram,
};
pub use distance::{
    CumulativeDistance, compute_cumulative_distance, compute_cumulative_distance_with_format,
    cumulative_sum, step_distances,
};
pub use histogram_series::{Histogram, HistogramBin, bin_equal_width};
pub use primitives::{DEFAULT_TIMESTAMP_FORMAT, parse_export_timestamp};
pub use types::{DataTable, MotionRecord, Position3};
pub use windowing::sliding_window_sums;
