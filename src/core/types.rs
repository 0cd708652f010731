use serde::{Deserialize, Serialize};

/// A sample position in centimetre space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position3 {
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// One typed row of the data block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionRecord {
    #[serde(rename = "Project No")]
    pub project_no: i64,
    #[serde(rename = "Session No")]
    pub session_no: i64,
    #[serde(rename = "date time")]
    pub date_time: String,
    #[serde(rename = "Xpx")]
    pub x_px: f64,
    #[serde(rename = "Ypx")]
    pub y_px: f64,
    #[serde(rename = "Xcm")]
    pub x_cm: f64,
    #[serde(rename = "Ycm")]
    pub y_cm: f64,
    #[serde(rename = "Zcm")]
    pub z_cm: f64,
    #[serde(rename = "AreaNo")]
    pub area_no: i64,
}

impl MotionRecord {
    #[must_use]
    pub fn position_cm(&self) -> Position3 {
        Position3::new(self.x_cm, self.y_cm, self.z_cm)
    }
}

/// Typed time series of one upload.
///
/// `columns` is the data header verbatim, including columns outside the
/// motion schema. The table is never mutated by metric computations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataTable {
    columns: Vec<String>,
    records: Vec<MotionRecord>,
}

impl DataTable {
    #[must_use]
    pub fn new(columns: Vec<String>, records: Vec<MotionRecord>) -> Self {
        Self { columns, records }
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn records(&self) -> &[MotionRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn positions(&self) -> impl Iterator<Item = Position3> + '_ {
        self.records.iter().map(MotionRecord::position_cm)
    }
}
