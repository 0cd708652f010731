use std::collections::HashSet;

use tracing::{debug, warn};

use crate::core::{DataTable, MotionRecord};
use crate::error::{BlockKind, MarmosetError, MarmosetResult};

use super::ExportLayout;
use super::decode::{block_lines, decode_block};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Integer,
    Float,
    Text,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl ColumnKind {
    /// Parses a raw token into this kind, tolerating surrounding whitespace
    /// on numeric columns. `NaN` and infinities are not valid floats here.
    #[must_use]
    pub fn coerce(self, raw: &str) -> Option<CellValue> {
        match self {
            Self::Integer => raw.trim().parse().ok().map(CellValue::Integer),
            Self::Float => raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .map(CellValue::Float),
            Self::Text => Some(CellValue::Text(raw.to_owned())),
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Text => "string",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub kind: ColumnKind,
}

const fn column(name: &'static str, kind: ColumnKind) -> ColumnSpec {
    ColumnSpec { name, kind }
}

const SCHEMA_LEN: usize = 9;

/// Declared type of every column a motion table needs, in record field order.
pub const MOTION_SCHEMA: [ColumnSpec; SCHEMA_LEN] = [
    column("Project No", ColumnKind::Integer),
    column("Session No", ColumnKind::Integer),
    column("date time", ColumnKind::Text),
    column("Xpx", ColumnKind::Float),
    column("Ypx", ColumnKind::Float),
    column("Xcm", ColumnKind::Float),
    column("Ycm", ColumnKind::Float),
    column("Zcm", ColumnKind::Float),
    column("AreaNo", ColumnKind::Integer),
];

/// Decodes the data block and coerces it into a typed [`DataTable`].
///
/// The first line names the columns. The last `trailing_rows_discarded` rows
/// are dropped before typing; they hold the exporter's footer and the empty
/// remainder after the final terminator.
pub fn build_table(bytes: &[u8], layout: &ExportLayout) -> MarmosetResult<DataTable> {
    let encoding = layout.resolve_encoding()?;
    let text = decode_block(bytes, encoding, BlockKind::Data)?;

    let mut lines = block_lines(&text);
    let header = lines.next().unwrap_or_default();
    let columns: Vec<String> = header.split(',').map(str::to_owned).collect();
    let positions = resolve_schema_positions(&columns)?;

    let mut rows: Vec<&str> = lines.collect();
    if rows.len() < layout.trailing_rows_discarded {
        warn!(
            row_count = rows.len(),
            discarded = layout.trailing_rows_discarded,
            "data block is shorter than its trailer; table will be empty"
        );
    }
    rows.truncate(rows.len().saturating_sub(layout.trailing_rows_discarded));

    let mut records = Vec::with_capacity(rows.len());
    for (row, line) in rows.into_iter().enumerate() {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != columns.len() {
            return Err(MarmosetError::SchemaMismatch(format!(
                "row {row} has {} fields, header has {}",
                fields.len(),
                columns.len()
            )));
        }
        records.push(coerce_record(&fields, &positions, row)?);
    }

    debug!(
        column_count = columns.len(),
        row_count = records.len(),
        "built data table"
    );
    Ok(DataTable::new(columns, records))
}

fn resolve_schema_positions(columns: &[String]) -> MarmosetResult<[usize; SCHEMA_LEN]> {
    let mut seen = HashSet::with_capacity(columns.len());
    for name in columns {
        if !seen.insert(name.as_str()) {
            return Err(MarmosetError::DuplicateColumn(name.clone()));
        }
    }

    let mut positions = [0usize; SCHEMA_LEN];
    for (slot, spec) in positions.iter_mut().zip(MOTION_SCHEMA.iter()) {
        *slot = columns
            .iter()
            .position(|name| name == spec.name)
            .ok_or_else(|| {
                MarmosetError::SchemaMismatch(format!("missing column {:?}", spec.name))
            })?;
    }
    Ok(positions)
}

fn coerce_record(
    fields: &[&str],
    positions: &[usize; SCHEMA_LEN],
    row: usize,
) -> MarmosetResult<MotionRecord> {
    let mut cells = Vec::with_capacity(MOTION_SCHEMA.len());
    for (spec, &position) in MOTION_SCHEMA.iter().zip(positions) {
        let raw = fields[position];
        let cell = spec.kind.coerce(raw).ok_or_else(|| {
            MarmosetError::SchemaMismatch(format!(
                "row {row}, column {:?}: {raw:?} is not a valid {}",
                spec.name,
                spec.kind.label()
            ))
        })?;
        cells.push(cell);
    }

    let cells: [CellValue; SCHEMA_LEN] = cells
        .try_into()
        .map_err(|_| MarmosetError::SchemaMismatch(format!("row {row} is incomplete")))?;
    let [
        CellValue::Integer(project_no),
        CellValue::Integer(session_no),
        CellValue::Text(date_time),
        CellValue::Float(x_px),
        CellValue::Float(y_px),
        CellValue::Float(x_cm),
        CellValue::Float(y_cm),
        CellValue::Float(z_cm),
        CellValue::Integer(area_no),
    ] = cells
    else {
        return Err(MarmosetError::SchemaMismatch(format!(
            "row {row} does not match the motion schema"
        )));
    };

    Ok(MotionRecord {
        project_no,
        session_no,
        date_time,
        x_px,
        y_px,
        x_cm,
        y_cm,
        z_cm,
        area_no,
    })
}
