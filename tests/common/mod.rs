#![allow(dead_code)]

use chrono::{Duration, NaiveDate, NaiveDateTime};
use marmoset_rs::core::{DataTable, MotionRecord};

pub const DATA_HEADER: &str = "Project No,Session No,date time,Xpx,Ypx,Xcm,Ycm,Zcm,AreaNo";
pub const FOOTER: &str = "***** End of Data *****";

/// Metadata lines as the exporter writes them; index 9 is the list row and
/// the last line is the section sentinel.
pub fn metadata_lines() -> Vec<String> {
    [
        "実験名,Marmoset tracking",
        "Project No,1",
        "Session No,2",
        "Start Time,2021/06/01,09:00:00",
        "Rate,30,fps",
        "Camera,Top",
        "Cage a,50.0,cm",
        "Cage X,45.40,cm",
        "Cage Y,53.92,cm",
        "Areas,Nest,Feeder,Floor",
        "Cage Z,50.0,cm",
        "Operator,山田",
        "Comment,",
        "***** Analysis Data *****",
    ]
    .iter()
    .map(|line| (*line).to_owned())
    .collect()
}

pub fn base_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2021, 6, 1)
        .and_then(|date| date.and_hms_opt(9, 0, 0))
        .expect("valid base time")
}

pub fn timestamp(index: usize) -> String {
    (base_time() + Duration::seconds(index as i64))
        .format("%Y-%m-%d %H:%M:%S.000")
        .to_string()
}

pub fn data_row(index: usize, position: (f64, f64, f64)) -> String {
    let (x, y, z) = position;
    format!(
        "1,2,{},{},{},{x},{y},{z},3",
        timestamp(index),
        x * 10.0,
        y * 10.0
    )
}

/// Assembles an export: title, metadata, header, rows, footer, final CRLF.
pub fn export_text(metadata: &[String], header: &str, rows: &[String]) -> String {
    let mut lines = vec!["Marmoset Tracker Export".to_owned()];
    lines.extend(metadata.iter().cloned());
    lines.push(header.to_owned());
    lines.extend(rows.iter().cloned());
    lines.push(FOOTER.to_owned());
    let mut text = lines.join("\r\n");
    text.push_str("\r\n");
    text
}

pub fn encode(text: &str) -> Vec<u8> {
    let (bytes, _, had_errors) = encoding_rs::SHIFT_JIS.encode(text);
    assert!(!had_errors, "fixture must be representable in Shift_JIS");
    bytes.into_owned()
}

pub fn export_bytes(positions: &[(f64, f64, f64)]) -> Vec<u8> {
    let rows: Vec<String> = positions
        .iter()
        .enumerate()
        .map(|(index, &position)| data_row(index, position))
        .collect();
    encode(&export_text(&metadata_lines(), DATA_HEADER, &rows))
}

pub fn record(index: usize, position: (f64, f64, f64)) -> MotionRecord {
    let (x, y, z) = position;
    MotionRecord {
        project_no: 1,
        session_no: 2,
        date_time: timestamp(index),
        x_px: x * 10.0,
        y_px: y * 10.0,
        x_cm: x,
        y_cm: y,
        z_cm: z,
        area_no: 3,
    }
}

pub fn table(positions: &[(f64, f64, f64)]) -> DataTable {
    let columns = DATA_HEADER.split(',').map(str::to_owned).collect();
    let records = positions
        .iter()
        .enumerate()
        .map(|(index, &position)| record(index, position))
        .collect();
    DataTable::new(columns, records)
}
