use tracing::debug;

use crate::core::DataTable;
use crate::error::MarmosetResult;

use super::{ExportLayout, MetadataBlock, build_table, format_metadata, split_upload};

/// Runs split, metadata formatting and table building over one upload.
///
/// Either both outputs are produced or the first error is returned; no
/// partial result escapes.
pub fn load_upload(
    raw: &[u8],
    layout: &ExportLayout,
) -> MarmosetResult<(MetadataBlock, DataTable)> {
    layout.validate()?;
    let split = split_upload(raw, layout)?;
    let metadata = format_metadata(&split.metadata, layout)?;
    let table = build_table(&split.data, layout)?;
    debug!(
        metadata_entries = metadata.len(),
        rows = table.len(),
        "loaded upload"
    );
    Ok((metadata, table))
}
