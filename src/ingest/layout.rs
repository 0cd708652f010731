use encoding_rs::Encoding;
use serde::{Deserialize, Serialize};

use crate::core::DEFAULT_TIMESTAMP_FORMAT;
use crate::error::{MarmosetError, MarmosetResult};

pub const DEFAULT_METADATA_FIRST_LINE: usize = 1;
pub const DEFAULT_METADATA_LAST_LINE: usize = 14;
pub const DEFAULT_DATA_HEADER_LINE: usize = 15;
/// The exporter appends a footer line and a blank line after the samples.
pub const DEFAULT_TRAILING_ROWS_DISCARDED: usize = 2;
pub const DEFAULT_LIST_FIELD_ROW: usize = 9;
pub const DEFAULT_SENTINEL_KEY: &str = "***** Analysis Data *****";
pub const DEFAULT_ENCODING_LABEL: &str = "Shift_JIS";

/// Fixed-offset description of one instrument's CSV export.
///
/// Line indices are 0-based over the whole file. Everything is serializable so
/// alternate exporters can be described in a config file instead of code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportLayout {
    #[serde(default = "default_metadata_first_line")]
    pub metadata_first_line: usize,
    #[serde(default = "default_metadata_last_line")]
    pub metadata_last_line: usize,
    #[serde(default = "default_data_header_line")]
    pub data_header_line: usize,
    #[serde(default = "default_trailing_rows_discarded")]
    pub trailing_rows_discarded: usize,
    /// Metadata row (index inside the metadata block) whose fields form a list.
    #[serde(default = "default_list_field_row")]
    pub list_field_row: usize,
    #[serde(default = "default_sentinel_key")]
    pub sentinel_key: String,
    /// WHATWG encoding label of both blocks.
    #[serde(default = "default_encoding_label")]
    pub encoding: String,
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

impl Default for ExportLayout {
    fn default() -> Self {
        Self {
            metadata_first_line: DEFAULT_METADATA_FIRST_LINE,
            metadata_last_line: DEFAULT_METADATA_LAST_LINE,
            data_header_line: DEFAULT_DATA_HEADER_LINE,
            trailing_rows_discarded: DEFAULT_TRAILING_ROWS_DISCARDED,
            list_field_row: DEFAULT_LIST_FIELD_ROW,
            sentinel_key: DEFAULT_SENTINEL_KEY.to_owned(),
            encoding: DEFAULT_ENCODING_LABEL.to_owned(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_owned(),
        }
    }
}

impl ExportLayout {
    /// Sets the inclusive metadata line range and the data header line.
    #[must_use]
    pub fn with_line_ranges(
        mut self,
        metadata_first_line: usize,
        metadata_last_line: usize,
        data_header_line: usize,
    ) -> Self {
        self.metadata_first_line = metadata_first_line;
        self.metadata_last_line = metadata_last_line;
        self.data_header_line = data_header_line;
        self
    }

    #[must_use]
    pub fn with_trailing_rows_discarded(mut self, rows: usize) -> Self {
        self.trailing_rows_discarded = rows;
        self
    }

    #[must_use]
    pub fn with_list_field_row(mut self, row: usize) -> Self {
        self.list_field_row = row;
        self
    }

    #[must_use]
    pub fn with_sentinel_key(mut self, key: impl Into<String>) -> Self {
        self.sentinel_key = key.into();
        self
    }

    #[must_use]
    pub fn with_encoding(mut self, label: impl Into<String>) -> Self {
        self.encoding = label.into();
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    pub fn validate(&self) -> MarmosetResult<()> {
        if self.metadata_first_line > self.metadata_last_line {
            return Err(MarmosetError::InvalidConfig(format!(
                "metadata range {}..={} is empty",
                self.metadata_first_line, self.metadata_last_line
            )));
        }
        if self.data_header_line <= self.metadata_last_line {
            return Err(MarmosetError::InvalidConfig(format!(
                "data header line {} overlaps the metadata range ending at {}",
                self.data_header_line, self.metadata_last_line
            )));
        }
        if self.timestamp_format.is_empty() {
            return Err(MarmosetError::InvalidConfig(
                "timestamp format must not be empty".to_owned(),
            ));
        }
        self.resolve_encoding()?;
        Ok(())
    }

    pub fn resolve_encoding(&self) -> MarmosetResult<&'static Encoding> {
        Encoding::for_label(self.encoding.as_bytes()).ok_or_else(|| {
            MarmosetError::InvalidConfig(format!("unknown encoding label {:?}", self.encoding))
        })
    }

    #[must_use]
    pub(crate) fn is_metadata_line(&self, index: usize) -> bool {
        (self.metadata_first_line..=self.metadata_last_line).contains(&index)
    }

    #[must_use]
    pub(crate) fn is_data_line(&self, index: usize) -> bool {
        index >= self.data_header_line
    }
}

fn default_metadata_first_line() -> usize {
    DEFAULT_METADATA_FIRST_LINE
}

fn default_metadata_last_line() -> usize {
    DEFAULT_METADATA_LAST_LINE
}

fn default_data_header_line() -> usize {
    DEFAULT_DATA_HEADER_LINE
}

fn default_trailing_rows_discarded() -> usize {
    DEFAULT_TRAILING_ROWS_DISCARDED
}

fn default_list_field_row() -> usize {
    DEFAULT_LIST_FIELD_ROW
}

fn default_sentinel_key() -> String {
    DEFAULT_SENTINEL_KEY.to_owned()
}

fn default_encoding_label() -> String {
    DEFAULT_ENCODING_LABEL.to_owned()
}

fn default_timestamp_format() -> String {
    DEFAULT_TIMESTAMP_FORMAT.to_owned()
}
