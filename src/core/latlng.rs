use crate::domain::model::Coordinate;
use crate::utils::error::CoordinateParseWarning;
use regex::Regex;
use std::sync::LazyLock;

// 只保留數字、小數點、逗號與負號
static INVALID_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9.,\-]").expect("latLng cleaning pattern is valid"));

/// 解析 `"53.2035733°, 5.7900171°"` 這類字串，順序為緯度在前
pub fn parse_latlng(raw: &str) -> Result<Coordinate, CoordinateParseWarning> {
    let without_degrees = raw.replace('°', "");
    let cleaned = INVALID_CHARS.replace_all(&without_degrees, "");

    let parts: Vec<&str> = cleaned.split(',').collect();
    if parts.len() != 2 {
        return Err(CoordinateParseWarning::WrongComponentCount {
            cleaned: cleaned.to_string(),
            count: parts.len(),
        });
    }

    let lat = parse_component(parts[0])?;
    let lng = parse_component(parts[1])?;
    Ok(Coordinate::new(lng, lat))
}

fn parse_component(component: &str) -> Result<f64, CoordinateParseWarning> {
    component
        .parse::<f64>()
        .map_err(|_| CoordinateParseWarning::InvalidNumber {
            component: component.to_string(),
        })
}

pub fn check_range(coordinate: Coordinate) -> Result<Coordinate, CoordinateParseWarning> {
    if coordinate.is_in_range() {
        Ok(coordinate)
    } else {
        Err(CoordinateParseWarning::OutOfRange {
            lat: coordinate.lat,
            lng: coordinate.lng,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_degree_string() {
        let c = parse_latlng("53.2035733°, 5.7900171°").unwrap();
        assert_eq!(c.lat, 53.2035733);
        assert_eq!(c.lng, 5.7900171);
    }

    #[test]
    fn test_parse_negative_and_plain() {
        let c = parse_latlng("-33.8567844,151.213108").unwrap();
        assert_eq!(c.lat, -33.8567844);
        assert_eq!(c.lng, 151.213108);

        let c = parse_latlng("geo:52.1°, -4.5° ").unwrap();
        assert_eq!((c.lat, c.lng), (52.1, -4.5));
    }

    #[test]
    fn test_wrong_component_count() {
        assert!(matches!(
            parse_latlng("53.2035733°"),
            Err(CoordinateParseWarning::WrongComponentCount { count: 1, .. })
        ));
        assert!(matches!(
            parse_latlng("1°, 2°, 3°"),
            Err(CoordinateParseWarning::WrongComponentCount { count: 3, .. })
        ));
    }

    #[test]
    fn test_invalid_number() {
        assert!(matches!(
            parse_latlng("abc°, 5.79°"),
            Err(CoordinateParseWarning::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse_latlng("1.2.3, 4"),
            Err(CoordinateParseWarning::InvalidNumber { .. })
        ));
        assert!(parse_latlng("").is_err());
    }

    #[test]
    fn test_check_range() {
        assert!(check_range(Coordinate::new(5.79, 53.2)).is_ok());
        assert!(check_range(Coordinate::new(180.0, -90.0)).is_ok());
        assert!(matches!(
            check_range(Coordinate::new(200.0, 10.0)),
            Err(CoordinateParseWarning::OutOfRange { .. })
        ));
        assert!(check_range(Coordinate::new(10.0, 91.0)).is_err());
    }
}
