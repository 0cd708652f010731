mod common;

use marmoset_rs::error::MarmosetError;
use marmoset_rs::ingest::{ExportLayout, format_metadata, split_upload};

fn lines_with(index: usize, line: &str) -> Vec<u8> {
    let mut lines: Vec<String> = (0..10).map(|i| format!("Key{i},v{i}")).collect();
    lines[index] = line.to_owned();
    common::encode(&format!("{}\r\n", lines.join("\r\n")))
}

#[test]
fn plain_row_concatenates_fields() {
    let block = format_metadata(&lines_with(4, "Rate,30,fps"), &ExportLayout::default())
        .expect("format");
    assert_eq!(block.get("Rate"), Some("30fps"));
}

#[test]
fn list_row_joins_fields_with_comma_space() {
    let block = format_metadata(&lines_with(9, "Rate,30,fps"), &ExportLayout::default())
        .expect("format");
    assert_eq!(block.get("Rate"), Some("30, fps"));
}

#[test]
fn bare_word_line_is_malformed() {
    let err = format_metadata(&lines_with(2, "BareWord"), &ExportLayout::default())
        .expect_err("bare word must fail");
    match err {
        MarmosetError::MalformedRow { line, content } => {
            assert_eq!(line, 2);
            assert_eq!(content, "BareWord");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn blank_interior_line_is_malformed() {
    let err = format_metadata(b"A,1\r\n\r\nB,2\r\n", &ExportLayout::default())
        .expect_err("blank line must fail");
    assert!(matches!(err, MarmosetError::MalformedRow { line: 1, .. }));
}

#[test]
fn invalid_shift_jis_bytes_are_rejected() {
    let err = format_metadata(b"Key,\xFF\r\n", &ExportLayout::default())
        .expect_err("invalid byte must fail");
    assert!(matches!(err, MarmosetError::DecodeError { .. }));
}

#[test]
fn exporter_metadata_block_is_decoded_in_order() {
    let raw = common::export_bytes(&[(0.0, 0.0, 0.0)]);
    let layout = ExportLayout::default();
    let split = split_upload(&raw, &layout).expect("split");
    let block = format_metadata(&split.metadata, &layout).expect("format");

    assert_eq!(block.len(), 13);
    assert!(!block.contains_key("***** Analysis Data *****"));
    assert_eq!(block.get("実験名"), Some("Marmoset tracking"));
    assert_eq!(block.get("Start Time"), Some("2021/06/0109:00:00"));
    assert_eq!(block.get("Areas"), Some("Nest, Feeder, Floor"));
    assert_eq!(block.get("Operator"), Some("山田"));
    assert_eq!(block.get("Comment"), Some(""));

    let keys: Vec<&str> = block.iter().map(|(key, _)| key).collect();
    assert_eq!(keys.first(), Some(&"実験名"));
    assert_eq!(keys.last(), Some(&"Comment"));
}

#[test]
fn sentinel_is_removed_even_when_it_carries_fields() {
    let raw = b"A,1\r\n***** Analysis Data *****,,\r\n";
    let block = format_metadata(raw, &ExportLayout::default()).expect("format");
    assert_eq!(block.len(), 1);
    assert!(!block.contains_key("***** Analysis Data *****"));
}

#[test]
fn markdown_table_lists_entries_in_order() {
    let block = format_metadata(b"A,1\r\nB,2,x\r\n", &ExportLayout::default()).expect("format");
    assert_eq!(
        block.to_markdown_table(),
        "|Key|Field|\n|:---|:---|\n|A|1|\n|B|2x|"
    );
}
