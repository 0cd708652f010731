use std::collections::HashMap;

use crate::core::{ActivityParams, ActivityStrategy, CumulativeDistance, Histogram};

/// Runtime metrics exposed by the per-session metrics cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MetricsCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(super) struct HistogramCacheKey {
    pub(super) table_version: u64,
    pub(super) strategy: ActivityStrategy,
    pub(super) window_secs: usize,
    pub(super) bins: usize,
}

impl HistogramCacheKey {
    pub(super) fn new(
        table_version: u64,
        strategy: ActivityStrategy,
        params: ActivityParams,
    ) -> Self {
        let window_secs = match strategy {
            ActivityStrategy::WindowedSum => params.window_secs(),
            ActivityStrategy::RawStep => 0,
        };
        Self {
            table_version,
            strategy,
            window_secs,
            bins: params.bins(),
        }
    }
}

/// Memoized derived series. Entries are pure functions of their key.
#[derive(Debug, Default)]
pub(super) struct MetricsCache {
    cumulative: HashMap<u64, CumulativeDistance>,
    histograms: HashMap<HistogramCacheKey, Histogram>,
    hits: u64,
    misses: u64,
}

impl MetricsCache {
    const MAX_HISTOGRAMS: usize = 512;

    pub(super) fn cumulative(&mut self, table_version: u64) -> Option<CumulativeDistance> {
        let value = self.cumulative.get(&table_version).cloned();
        if value.is_some() {
            self.hits = self.hits.saturating_add(1);
        }
        value
    }

    pub(super) fn insert_cumulative(&mut self, table_version: u64, value: CumulativeDistance) {
        self.misses = self.misses.saturating_add(1);
        self.cumulative.insert(table_version, value);
    }

    pub(super) fn histogram(&mut self, key: HistogramCacheKey) -> Option<Histogram> {
        let value = self.histograms.get(&key).cloned();
        if value.is_some() {
            self.hits = self.hits.saturating_add(1);
        }
        value
    }

    pub(super) fn insert_histogram(&mut self, key: HistogramCacheKey, value: Histogram) {
        self.misses = self.misses.saturating_add(1);
        if self.histograms.len() >= Self::MAX_HISTOGRAMS {
            self.histograms.clear();
        }
        self.histograms.insert(key, value);
    }

    pub(super) fn clear(&mut self) {
        self.cumulative.clear();
        self.histograms.clear();
    }

    pub(super) fn stats(&self) -> MetricsCacheStats {
        MetricsCacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.cumulative.len() + self.histograms.len(),
        }
    }
}
