//! Log output for ingestion and metric events.
//!
//! Parsing and metric code reports block sizes, row counts and cache
//! activity as `tracing` events under the `marmoset_rs` target. Nothing is
//! printed until a subscriber exists.

/// Installs a compact subscriber filtered by `RUST_LOG`, defaulting to
/// `marmoset_rs=info`.
///
/// Returns `true` only if this call installed the global subscriber; without
/// the `telemetry` feature it does nothing.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("marmoset_rs=info"));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
