use serde::{Deserialize, Serialize};

use crate::core::{ActivityParams, ActivityStrategy, CumulativeDistance, Histogram};
use crate::error::{MarmosetError, MarmosetResult};
use crate::ingest::MetadataBlock;

use super::AnalysisSession;

pub const SESSION_REPORT_JSON_SCHEMA_V1: u32 = 1;

/// Histogram plus the parameters it was computed with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityReport {
    pub strategy: ActivityStrategy,
    pub params: ActivityParams,
    pub histogram: Histogram,
}

/// Everything the presentation host shows for one upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    pub metadata: MetadataBlock,
    pub columns: Vec<String>,
    pub row_count: usize,
    pub cumulative_distance: CumulativeDistance,
    #[serde(default)]
    pub activity: Option<ActivityReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionReportJsonContractV1 {
    pub schema_version: u32,
    pub report: SessionReport,
}

impl SessionReport {
    pub fn to_json_contract_v1_pretty(&self) -> MarmosetResult<String> {
        let payload = SessionReportJsonContractV1 {
            schema_version: SESSION_REPORT_JSON_SCHEMA_V1,
            report: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            MarmosetError::Serialization(format!("failed to serialize report contract v1: {e}"))
        })
    }

    /// Accepts either a bare report or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> MarmosetResult<Self> {
        if let Ok(report) = serde_json::from_str::<SessionReport>(input) {
            return Ok(report);
        }
        let payload: SessionReportJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            MarmosetError::Serialization(format!("failed to parse report json payload: {e}"))
        })?;
        if payload.schema_version != SESSION_REPORT_JSON_SCHEMA_V1 {
            return Err(MarmosetError::Serialization(format!(
                "unsupported report schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.report)
    }
}

impl AnalysisSession {
    /// Builds a report, optionally including one activity histogram.
    pub fn report(
        &mut self,
        activity: Option<(ActivityStrategy, ActivityParams)>,
    ) -> MarmosetResult<SessionReport> {
        let cumulative_distance = self.cumulative_distance()?;
        let activity = match activity {
            Some((strategy, params)) => Some(ActivityReport {
                strategy,
                params,
                histogram: self.activity_histogram(strategy, params)?,
            }),
            None => None,
        };
        Ok(SessionReport {
            metadata: self.metadata().clone(),
            columns: self.table().columns().to_vec(),
            row_count: self.table().len(),
            cumulative_distance,
            activity,
        })
    }

    pub fn report_json_contract_v1_pretty(
        &mut self,
        activity: Option<(ActivityStrategy, ActivityParams)>,
    ) -> MarmosetResult<String> {
        self.report(activity)?.to_json_contract_v1_pretty()
    }
}
