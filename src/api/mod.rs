//! Session facade for the presentation host.

mod json_contract;
mod metrics_cache;
mod session;

pub use json_contract::{
    ActivityReport, SESSION_REPORT_JSON_SCHEMA_V1, SessionReport, SessionReportJsonContractV1,
};
pub use metrics_cache::MetricsCacheStats;
pub use session::AnalysisSession;
