//! Upload ingestion: line splitting, metadata formatting, typed table building.

mod decode;
pub mod layout;
pub mod metadata;
pub mod splitter;
pub mod table;
mod upload;

pub use layout::ExportLayout;
pub use metadata::{MetadataBlock, format_metadata};
pub use splitter::{SplitUpload, split_upload};
pub use table::{CellValue, ColumnKind, ColumnSpec, MOTION_SCHEMA, build_table};
pub use upload::load_upload;
