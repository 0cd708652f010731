use chrono::NaiveDateTime;

use crate::error::{MarmosetError, MarmosetResult};

/// Milliseconds are always written as literal zeros by the exporter.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S.000";

/// Parses a `date time` cell using the export's fixed format.
pub fn parse_export_timestamp(
    value: &str,
    format: &str,
    row: usize,
) -> MarmosetResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, format).map_err(|_| MarmosetError::TimestampParseError {
        row,
        value: value.to_owned(),
    })
}
