use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{MarmosetError, MarmosetResult};

/// Relative widening applied to bin edges so the extreme values stay inside.
const EDGE_ADJUSTMENT: f64 = 0.001;

/// One right-closed bin `(lower, upper]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

impl HistogramBin {
    #[must_use]
    pub fn label(&self) -> String {
        format!("({:.3}, {:.3}]", self.lower, self.upper)
    }
}

/// Equal-width histogram, bins ordered by ascending edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
}

impl Histogram {
    /// Bin edges, `bins.len() + 1` values.
    #[must_use]
    pub fn edges(&self) -> Vec<f64> {
        let mut edges: Vec<f64> = self.bins.iter().map(|bin| bin.lower).collect();
        if let Some(last) = self.bins.last() {
            edges.push(last.upper);
        }
        edges
    }

    #[must_use]
    pub fn counts(&self) -> Vec<usize> {
        self.bins.iter().map(|bin| bin.count).collect()
    }

    #[must_use]
    pub fn total_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).sum()
    }

    /// Bins by descending count; ties keep ascending edge order.
    #[must_use]
    pub fn ranked(&self) -> Vec<HistogramBin> {
        let mut ranked = self.bins.clone();
        ranked.sort_by(|lhs, rhs| rhs.count.cmp(&lhs.count));
        ranked
    }
}

/// Bins `values` into `bin_count` equal-width bins over their observed range.
///
/// Edges are evenly spaced from min to max, with the lowest edge lowered by
/// 0.1% of the range so the minimum lands in the first bin. When every value
/// is equal the range is widened by 0.1% on both sides (0.001 around zero),
/// which leaves exactly one non-empty bin. Non-finite values are skipped.
pub fn bin_equal_width(values: &[f64], bin_count: usize) -> MarmosetResult<Histogram> {
    if bin_count == 0 {
        return Err(MarmosetError::EmptySeries(
            "histogram needs at least one bin".to_owned(),
        ));
    }

    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.len() != values.len() {
        warn!(
            skipped = values.len() - finite.len(),
            "skipping non-finite values while binning"
        );
    }
    if finite.is_empty() {
        return Err(MarmosetError::EmptySeries(
            "no finite values to bin".to_owned(),
        ));
    }

    let (min, max) = finite
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    let edges = if min == max {
        let widen = |v: f64| {
            if v == 0.0 {
                EDGE_ADJUSTMENT
            } else {
                v.abs() * EDGE_ADJUSTMENT
            }
        };
        linspace(min - widen(min), max + widen(max), bin_count + 1)
    } else {
        let mut edges = linspace(min, max, bin_count + 1);
        edges[0] -= (max - min) * EDGE_ADJUSTMENT;
        edges
    };

    let mut counts = vec![0usize; bin_count];
    for value in finite {
        let index = edges[1..].partition_point(|&edge| edge < value);
        counts[index.min(bin_count - 1)] += 1;
    }

    let bins = edges
        .windows(2)
        .zip(counts)
        .map(|(pair, count)| HistogramBin {
            lower: pair[0],
            upper: pair[1],
            count,
        })
        .collect();
    Ok(Histogram { bins })
}

/// `num` evenly spaced points from `start` to exactly `stop`.
fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    let step = (stop - start) / (num - 1) as f64;
    let mut points: Vec<f64> = (0..num).map(|i| start + i as f64 * step).collect();
    if let Some(last) = points.last_mut() {
        *last = stop;
    }
    points
}
