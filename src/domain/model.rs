pub const EPOCH_TIMESTAMP: &str = "1970-01-01T00:00:00Z";

/// `[longitude, latitude]`，與 GeoJSON 的座標順序一致
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lng: f64,
    pub lat: f64,
}

impl Coordinate {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    pub fn is_in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }

    pub fn to_position(self) -> Vec<f64> {
        vec![self.lng, self.lat]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointRecord {
    pub coordinates: Coordinate,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineRecord {
    pub coordinates: Vec<Coordinate>,
    pub start_time: String,
    pub end_time: String,
}

/// 一次走訪的結果，依發現順序排列
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub points: Vec<PointRecord>,
    pub lines: Vec<LineRecord>,
    /// 因座標無法解析而略過的記錄數
    pub dropped: usize,
}

impl Extraction {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.lines.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractOptions {
    pub default_timestamp: String,
    /// 將 `timestampMs` 轉成 RFC 3339
    pub iso_timestamps: bool,
    /// 丟棄超出經緯度範圍的座標，預設關閉
    pub check_ranges: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            default_timestamp: EPOCH_TIMESTAMP.to_string(),
            iso_timestamps: false,
            check_ranges: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionSummary {
    pub points: usize,
    pub lines: usize,
    pub dropped: usize,
    pub output_path: String,
}
