mod common;

use marmoset_rs::error::{BlockKind, MarmosetError};
use marmoset_rs::ingest::{ExportLayout, split_upload};

#[test]
fn split_separates_metadata_and_data_blocks() {
    let raw = common::export_bytes(&[(0.0, 0.0, 0.0), (1.0, 0.0, 0.0)]);
    let split = split_upload(&raw, &ExportLayout::default()).expect("split");

    let metadata = common::encode(&format!("{}\r\n", common::metadata_lines().join("\r\n")));
    assert_eq!(split.metadata, metadata);
    assert!(split.data.starts_with(common::DATA_HEADER.as_bytes()));
    assert!(split.data.ends_with(format!("{}\r\n", common::FOOTER).as_bytes()));
}

#[test]
fn split_drops_title_line() {
    let raw = common::export_bytes(&[(0.0, 0.0, 0.0)]);
    let split = split_upload(&raw, &ExportLayout::default()).expect("split");

    let needle = b"Marmoset Tracker Export";
    assert!(!split.metadata.windows(needle.len()).any(|w| w == needle));
    assert!(!split.data.windows(needle.len()).any(|w| w == needle));
}

#[test]
fn split_accepts_bare_line_feeds() {
    let text = common::export_text(
        &common::metadata_lines(),
        common::DATA_HEADER,
        &[common::data_row(0, (0.0, 0.0, 0.0))],
    )
    .replace("\r\n", "\n");
    let split = split_upload(&common::encode(&text), &ExportLayout::default()).expect("split");
    assert!(split.data.starts_with(common::DATA_HEADER.as_bytes()));
    assert_eq!(split.metadata.iter().filter(|&&b| b == b'\n').count(), 14);
}

#[test]
fn empty_upload_reports_missing_metadata_block() {
    let err = split_upload(b"", &ExportLayout::default()).expect_err("empty must fail");
    assert!(matches!(
        err,
        MarmosetError::EmptyBlock {
            block: BlockKind::Metadata
        }
    ));
}

#[test]
fn truncated_upload_reports_missing_data_block() {
    let mut lines = vec!["title".to_owned()];
    lines.extend(common::metadata_lines());
    let raw = common::encode(&format!("{}\r\n", lines.join("\r\n")));

    let err = split_upload(&raw, &ExportLayout::default()).expect_err("truncated must fail");
    assert!(matches!(
        err,
        MarmosetError::EmptyBlock {
            block: BlockKind::Data
        }
    ));
    assert!(format!("{err}").contains("data block is empty"));
}

#[test]
fn custom_layout_moves_block_boundaries() {
    let raw = b"title\r\nA,1\r\nB,2\r\nh1,h2\r\n1,2\r\n";
    let layout = ExportLayout::default().with_line_ranges(1, 2, 3);
    let split = split_upload(raw, &layout).expect("split");
    assert_eq!(split.metadata, b"A,1\r\nB,2\r\n");
    assert_eq!(split.data, b"h1,h2\r\n1,2\r\n");
}
