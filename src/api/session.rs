use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, trace};

use crate::core::{
    ActivityParams, ActivityStrategy, CumulativeDistance, DataTable, Histogram,
    compute_cumulative_distance_with_format, compute_histogram,
};
use crate::error::MarmosetResult;
use crate::ingest::{ExportLayout, MetadataBlock, load_upload};

use super::metrics_cache::{HistogramCacheKey, MetricsCache, MetricsCacheStats};

static NEXT_TABLE_VERSION: AtomicU64 = AtomicU64::new(1);

/// Main facade consumed by the presentation host.
///
/// One session owns one parsed upload. The metadata and table are immutable
/// after `load`; derived series are computed on demand and memoized by
/// `(table_version, strategy, window, bins)`.
#[derive(Debug)]
pub struct AnalysisSession {
    layout: ExportLayout,
    table_version: u64,
    metadata: MetadataBlock,
    table: DataTable,
    cache: MetricsCache,
}

impl AnalysisSession {
    /// Parses an upload with the default export layout.
    pub fn load(raw: &[u8]) -> MarmosetResult<Self> {
        Self::load_with_layout(raw, ExportLayout::default())
    }

    pub fn load_with_layout(raw: &[u8], layout: ExportLayout) -> MarmosetResult<Self> {
        let (metadata, table) = load_upload(raw, &layout)?;
        let table_version = NEXT_TABLE_VERSION.fetch_add(1, Ordering::Relaxed);
        debug!(table_version, rows = table.len(), "opened analysis session");
        Ok(Self {
            layout,
            table_version,
            metadata,
            table,
            cache: MetricsCache::default(),
        })
    }

    #[must_use]
    pub fn layout(&self) -> &ExportLayout {
        &self.layout
    }

    /// Identifier unique to this upload within the process.
    #[must_use]
    pub fn table_version(&self) -> u64 {
        self.table_version
    }

    #[must_use]
    pub fn metadata(&self) -> &MetadataBlock {
        &self.metadata
    }

    #[must_use]
    pub fn table(&self) -> &DataTable {
        &self.table
    }

    pub fn cumulative_distance(&mut self) -> MarmosetResult<CumulativeDistance> {
        if let Some(cached) = self.cache.cumulative(self.table_version) {
            trace!(table_version = self.table_version, "cumulative distance cache hit");
            return Ok(cached);
        }

        let series =
            compute_cumulative_distance_with_format(&self.table, &self.layout.timestamp_format)?;
        debug!(
            table_version = self.table_version,
            total = series.total(),
            "computed cumulative distance"
        );
        self.cache
            .insert_cumulative(self.table_version, series.clone());
        Ok(series)
    }

    pub fn activity_histogram(
        &mut self,
        strategy: ActivityStrategy,
        params: ActivityParams,
    ) -> MarmosetResult<Histogram> {
        let key = HistogramCacheKey::new(self.table_version, strategy, params);
        if let Some(cached) = self.cache.histogram(key) {
            trace!(?key, "activity histogram cache hit");
            return Ok(cached);
        }

        let histogram = compute_histogram(&self.table, strategy, params)?;
        debug!(
            ?strategy,
            window_secs = params.window_secs(),
            bins = params.bins(),
            samples = histogram.total_count(),
            "computed activity histogram"
        );
        self.cache.insert_histogram(key, histogram.clone());
        Ok(histogram)
    }

    #[must_use]
    pub fn metrics_cache_stats(&self) -> MetricsCacheStats {
        self.cache.stats()
    }

    pub fn clear_metrics_cache(&mut self) {
        self.cache.clear();
    }
}
