//! marmoset-rs: ingestion and motion metrics for marmoset motion-tracking exports.
//!
//! An upload is a single CSV stream holding an experiment metadata block and a
//! 3D position time series. This crate splits and types it, then derives the
//! distance-travelled series and activity histograms a viewer displays.

pub mod api;
pub mod core;
pub mod error;
pub mod ingest;
pub mod telemetry;

pub use api::AnalysisSession;
pub use error::{MarmosetError, MarmosetResult};
