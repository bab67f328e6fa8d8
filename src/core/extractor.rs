use crate::core::latlng::{check_range, parse_latlng};
use crate::domain::model::{Coordinate, Extraction, ExtractOptions, LineRecord, PointRecord};
use crate::utils::error::CoordinateParseWarning;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

const E7_SCALE: f64 = 1e7;

/// 遞迴走訪整棵 JSON 樹，收集可辨識的點與路徑
pub fn extract_locations(data: &Value, options: &ExtractOptions) -> Extraction {
    let mut extractor = Extractor::new(options);
    extractor.traverse(data);
    extractor.finish()
}

pub struct Extractor<'a> {
    options: &'a ExtractOptions,
    extraction: Extraction,
}

impl<'a> Extractor<'a> {
    pub fn new(options: &'a ExtractOptions) -> Self {
        Self {
            options,
            extraction: Extraction::default(),
        }
    }

    pub fn finish(self) -> Extraction {
        self.extraction
    }

    /// 以明確的堆疊做前序走訪，巢狀深度不受呼叫堆疊限制
    pub fn traverse(&mut self, root: &Value) {
        let mut pending = vec![root];

        while let Some(value) = pending.pop() {
            match value {
                Value::Object(obj) => {
                    self.visit_object(obj);

                    // 命中與否都要繼續往下找；反向推入以維持文件順序
                    pending.extend(obj.values().rev());
                }
                Value::Array(items) => pending.extend(items.iter().rev()),
                Value::String(_) | Value::Number(_) | Value::Bool(_) | Value::Null => {}
            }
        }
    }

    fn visit_object(&mut self, obj: &Map<String, Value>) {
        if let (Some(lat), Some(lng)) = (obj.get("latitudeE7"), obj.get("longitudeE7")) {
            self.visit_e7_point(obj, lat, lng);
        } else if let Some(lat_lng) = obj
            .get("placeLocation")
            .and_then(Value::as_object)
            .and_then(|place| place.get("latLng"))
        {
            self.visit_place(obj, lat_lng);
        } else if let Some(path) = obj.get("timelinePath") {
            self.visit_timeline_path(obj, path);
        }
    }

    fn visit_e7_point(&mut self, obj: &Map<String, Value>, lat: &Value, lng: &Value) {
        let coordinate = match (lat.as_f64(), lng.as_f64()) {
            (Some(lat), Some(lng)) => Coordinate::new(lng / E7_SCALE, lat / E7_SCALE),
            _ => {
                self.drop_record(
                    &format!("{}, {}", lat, lng),
                    CoordinateParseWarning::WrongType {
                        field: "latitudeE7/longitudeE7",
                        expected: "number",
                    },
                );
                return;
            }
        };

        let Some(coordinates) = self.accept(coordinate, &coordinate_label(coordinate)) else {
            return;
        };

        let timestamp = self.millis_timestamp(obj.get("timestampMs"));
        self.extraction.points.push(PointRecord {
            coordinates,
            timestamp,
        });
    }

    fn visit_place(&mut self, obj: &Map<String, Value>, lat_lng: &Value) {
        let Some(coordinates) = self.parse_point_value("latLng", lat_lng) else {
            return;
        };

        let timestamp = self.timestamp(obj.get("startTime"));
        self.extraction.points.push(PointRecord {
            coordinates,
            timestamp,
        });
    }

    fn visit_timeline_path(&mut self, obj: &Map<String, Value>, path: &Value) {
        let entries: &[Value] = match path.as_array() {
            Some(entries) => entries.as_slice(),
            None => {
                tracing::debug!("timelinePath is not a list, skipping");
                &[]
            }
        };

        let mut vertices = Vec::new();
        // 最後一個成功解析的座標，給只有 time 的項目使用
        let mut last_parsed: Option<Coordinate> = None;

        for entry in entries.iter().filter_map(Value::as_object) {
            if let Some(point) = entry.get("point") {
                if let Some(coordinate) = self.parse_point_value("point", point) {
                    vertices.push(coordinate);
                    last_parsed = Some(coordinate);
                }
            }

            if let Some(time) = entry.get("time") {
                match last_parsed {
                    Some(coordinates) => {
                        let timestamp = self.timestamp(Some(time));
                        self.extraction.points.push(PointRecord {
                            coordinates,
                            timestamp,
                        });
                    }
                    None => {
                        self.drop_record(&time.to_string(), CoordinateParseWarning::NoPriorPoint)
                    }
                }
            }
        }

        if !vertices.is_empty() {
            let start_time = self.timestamp(obj.get("startTime"));
            let end_time = self.timestamp(obj.get("endTime"));
            self.extraction.lines.push(LineRecord {
                coordinates: vertices,
                start_time,
                end_time,
            });
        }
    }

    fn parse_point_value(&mut self, field: &'static str, value: &Value) -> Option<Coordinate> {
        let Some(raw) = value.as_str() else {
            self.drop_record(
                &value.to_string(),
                CoordinateParseWarning::WrongType {
                    field,
                    expected: "string",
                },
            );
            return None;
        };

        match parse_latlng(raw) {
            Ok(coordinate) => self.accept(coordinate, raw),
            Err(warning) => {
                self.drop_record(raw, warning);
                None
            }
        }
    }

    fn accept(&mut self, coordinate: Coordinate, raw: &str) -> Option<Coordinate> {
        if !self.options.check_ranges {
            return Some(coordinate);
        }
        match check_range(coordinate) {
            Ok(coordinate) => Some(coordinate),
            Err(warning) => {
                self.drop_record(raw, warning);
                None
            }
        }
    }

    fn drop_record(&mut self, raw: &str, warning: CoordinateParseWarning) {
        tracing::warn!("⚠️ Skipping record, could not parse {}: {}", raw, warning);
        self.extraction.dropped += 1;
    }

    fn timestamp(&self, value: Option<&Value>) -> String {
        match value {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => self.options.default_timestamp.clone(),
        }
    }

    fn millis_timestamp(&self, value: Option<&Value>) -> String {
        let raw = self.timestamp(value);
        if !self.options.iso_timestamps || value.is_none() {
            return raw;
        }
        millis_to_rfc3339(&raw).unwrap_or(raw)
    }
}

fn coordinate_label(coordinate: Coordinate) -> String {
    format!("{}, {}", coordinate.lat, coordinate.lng)
}

/// `"1000"` → `"1970-01-01T00:00:01Z"`；不是整數毫秒時回傳 None
pub fn millis_to_rfc3339(raw: &str) -> Option<String> {
    let millis: i64 = raw.trim().parse().ok()?;
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::AutoSi, true))
}
