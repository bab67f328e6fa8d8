use crate::domain::model::{Extraction, LineRecord, PointRecord};
use crate::utils::error::Result;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value as GeometryValue};

/// 點在前、線在後，各自維持發現順序
pub fn build_feature_collection(extraction: &Extraction) -> FeatureCollection {
    let features = extraction
        .points
        .iter()
        .map(point_feature)
        .chain(extraction.lines.iter().map(line_feature))
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

pub fn point_feature(point: &PointRecord) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert(
        "timestamp".to_string(),
        JsonValue::String(point.timestamp.clone()),
    );

    feature(
        GeometryValue::Point(point.coordinates.to_position()),
        properties,
    )
}

pub fn line_feature(line: &LineRecord) -> Feature {
    let positions = line.coordinates.iter().map(|c| c.to_position()).collect();

    // startTime / endTime 不是 GeoJSON 標準屬性，但一般工具會忽略
    let mut properties = JsonObject::new();
    properties.insert(
        "startTime".to_string(),
        JsonValue::String(line.start_time.clone()),
    );
    properties.insert(
        "endTime".to_string(),
        JsonValue::String(line.end_time.clone()),
    );

    feature(GeometryValue::LineString(positions), properties)
}

fn feature(value: GeometryValue, properties: JsonObject) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(value)),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

/// 預設以兩格縮排輸出
pub fn to_geojson_string(collection: &FeatureCollection, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(collection)?
    } else {
        serde_json::to_string(collection)?
    };
    Ok(text)
}
