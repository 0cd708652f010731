use tracing::debug;

use crate::error::{BlockKind, MarmosetError, MarmosetResult};

use super::ExportLayout;

/// Raw byte regions of one upload, still in the exporter's encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitUpload {
    pub metadata: Vec<u8>,
    pub data: Vec<u8>,
}

/// Partitions an upload into its metadata and data blocks by line index.
///
/// Lines keep their terminators, so each block is a byte-exact slice of the
/// input. Lines outside both ranges (the title line) are dropped.
pub fn split_upload(raw: &[u8], layout: &ExportLayout) -> MarmosetResult<SplitUpload> {
    let mut metadata = Vec::new();
    let mut data = Vec::new();
    let mut line_count = 0usize;

    for (index, line) in raw.split_inclusive(|&byte| byte == b'\n').enumerate() {
        line_count = index + 1;
        if layout.is_metadata_line(index) {
            metadata.extend_from_slice(line);
        } else if layout.is_data_line(index) {
            data.extend_from_slice(line);
        }
    }

    debug!(
        line_count,
        metadata_bytes = metadata.len(),
        data_bytes = data.len(),
        "split upload"
    );

    if metadata.is_empty() {
        return Err(MarmosetError::EmptyBlock {
            block: BlockKind::Metadata,
        });
    }
    if data.is_empty() {
        return Err(MarmosetError::EmptyBlock {
            block: BlockKind::Data,
        });
    }

    Ok(SplitUpload { metadata, data })
}
