use std::fmt;

use thiserror::Error;

pub type MarmosetResult<T> = Result<T, MarmosetError>;

/// Which region of an export a failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Metadata,
    Data,
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metadata => f.write_str("metadata"),
            Self::Data => f.write_str("data"),
        }
    }
}

#[derive(Debug, Error)]
pub enum MarmosetError {
    #[error("{block} block is empty; the upload is malformed or truncated")]
    EmptyBlock { block: BlockKind },

    #[error("{block} block is not valid {encoding}")]
    DecodeError {
        block: BlockKind,
        encoding: &'static str,
    },

    #[error("metadata line {line} has no key/field separator: {content:?}")]
    MalformedRow { line: usize, content: String },

    #[error("schema mismatch: {0}")]
    SchemaMismatch(String),

    #[error("duplicate column in data header: {0:?}")]
    DuplicateColumn(String),

    #[error("row {row}: timestamp {value:?} does not match the export format")]
    TimestampParseError { row: usize, value: String },

    #[error("window of {window} samples exceeds the {steps} available steps")]
    InvalidWindow { window: usize, steps: usize },

    #[error("{name} must be between {min} and {max}, got {value}")]
    ParameterOutOfRange {
        name: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },

    #[error("no values to bin: {0}")]
    EmptySeries(String),

    #[error("invalid export layout: {0}")]
    InvalidConfig(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}
