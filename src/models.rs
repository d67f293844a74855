//! Core data types for tour attraction and festival records

use serde::{Deserialize, Serialize};

/// A single attraction or festival record
///
/// Immutable once parsed from a response. Optional fields follow the
/// upstream convention that null means absent; coordinates stay in the
/// numeric-string form the tour service emits them in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourItem {
    /// Identifier, unique per source
    pub content_id: String,
    /// Display name
    pub title: String,
    /// Street address
    pub addr: String,
    /// Representative image URL, if the record carries one
    pub image: Option<String>,
    /// Longitude as a numeric string (`mapx` upstream)
    pub mapx: Option<String>,
    /// Latitude as a numeric string (`mapy` upstream)
    pub mapy: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl TourItem {
    /// Parse the coordinate pair, if present and numeric
    ///
    /// A missing or malformed pair yields `None`; no stricter validation
    /// is applied.
    #[must_use]
    pub fn coordinates(&self) -> Option<Coordinates> {
        let longitude = self.mapx.as_deref()?.trim().parse().ok()?;
        let latitude = self.mapy.as_deref()?.trim().parse().ok()?;
        Some(Coordinates {
            latitude,
            longitude,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_with_coords(mapx: Option<&str>, mapy: Option<&str>) -> TourItem {
        TourItem {
            content_id: "126508".to_string(),
            title: "Gyeongbokgung Palace".to_string(),
            addr: "161 Sajik-ro, Jongno-gu, Seoul".to_string(),
            image: None,
            mapx: mapx.map(str::to_string),
            mapy: mapy.map(str::to_string),
        }
    }

    #[test]
    fn test_coordinates_from_numeric_strings() {
        let item = item_with_coords(Some("126.9769930080"), Some("37.5788222356"));
        let coords = item.coordinates().unwrap();
        assert_eq!(coords.longitude, 126.976_993_008);
        assert_eq!(coords.latitude, 37.578_822_235_6);
    }

    #[test]
    fn test_missing_coordinates_are_none() {
        assert!(item_with_coords(None, None).coordinates().is_none());
        assert!(
            item_with_coords(Some("126.97"), None)
                .coordinates()
                .is_none()
        );
    }

    #[test]
    fn test_malformed_coordinates_are_none() {
        assert!(
            item_with_coords(Some("not-a-number"), Some("37.5"))
                .coordinates()
                .is_none()
        );
    }

    #[test]
    fn test_item_serializes_to_json() {
        let item = item_with_coords(Some("126.97"), Some("37.57"));
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["content_id"], "126508");
        assert_eq!(json["image"], serde_json::Value::Null);
    }
}
