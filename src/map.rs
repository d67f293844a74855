//! Map widget capability
//!
//! The map the rendering layer plots markers on is an injected
//! capability, never a global: anything that can create a map, add
//! markers and attach hover text can stand in for the real widget.

use tracing::info;

use crate::models::{Coordinates, TourItem};

/// Default map center (Seoul city hall)
pub const DEFAULT_CENTER: Coordinates = Coordinates {
    latitude: 37.5665,
    longitude: 126.978,
};

/// Default zoom level
pub const DEFAULT_ZOOM: u8 = 5;

/// Handle to a marker previously added to a map
pub type MarkerId = usize;

/// One map marker
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub position: Coordinates,
    pub title: String,
}

/// Injected map-widget capability
pub trait MapService {
    /// Create the map centered at `center`
    fn create_map(&mut self, center: Coordinates, zoom_level: u8);

    /// Add a marker and return its handle
    fn add_marker(&mut self, marker: Marker) -> MarkerId;

    /// Attach hover text to a marker
    fn set_hover_text(&mut self, marker: MarkerId, content: String);
}

/// Plot one marker per item with a parseable coordinate pair
///
/// Items without coordinates are skipped silently. Returns the number of
/// markers placed.
pub fn plot_items(
    map: &mut dyn MapService,
    items: &[TourItem],
    center: Coordinates,
    zoom_level: u8,
) -> usize {
    map.create_map(center, zoom_level);

    let mut plotted = 0;
    for item in items {
        let Some(position) = item.coordinates() else {
            continue;
        };
        let marker = map.add_marker(Marker {
            position,
            title: item.title.clone(),
        });
        map.set_hover_text(marker, item.title.clone());
        plotted += 1;
    }
    plotted
}

/// In-memory map for tests
#[derive(Debug, Default)]
pub struct RecordingMap {
    pub maps: Vec<(Coordinates, u8)>,
    pub markers: Vec<Marker>,
    pub hover_texts: Vec<(MarkerId, String)>,
}

impl MapService for RecordingMap {
    fn create_map(&mut self, center: Coordinates, zoom_level: u8) {
        self.maps.push((center, zoom_level));
    }

    fn add_marker(&mut self, marker: Marker) -> MarkerId {
        self.markers.push(marker);
        self.markers.len() - 1
    }

    fn set_hover_text(&mut self, marker: MarkerId, content: String) {
        self.hover_texts.push((marker, content));
    }
}

/// Map that logs what a real widget would draw
#[derive(Debug, Default)]
pub struct TraceMap {
    next_id: MarkerId,
}

impl MapService for TraceMap {
    fn create_map(&mut self, center: Coordinates, zoom_level: u8) {
        info!(
            latitude = center.latitude,
            longitude = center.longitude,
            zoom_level,
            "map created"
        );
    }

    fn add_marker(&mut self, marker: Marker) -> MarkerId {
        let id = self.next_id;
        self.next_id += 1;
        info!(
            id,
            latitude = marker.position.latitude,
            longitude = marker.position.longitude,
            title = %marker.title,
            "marker placed"
        );
        id
    }

    fn set_hover_text(&mut self, _marker: MarkerId, _content: String) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TourItem;

    fn item(id: &str, mapx: Option<&str>, mapy: Option<&str>) -> TourItem {
        TourItem {
            content_id: id.to_string(),
            title: format!("Festival {id}"),
            addr: String::new(),
            image: None,
            mapx: mapx.map(str::to_string),
            mapy: mapy.map(str::to_string),
        }
    }

    #[test]
    fn test_plot_skips_items_without_coordinates() {
        let items = vec![
            item("1", Some("126.97"), Some("37.56")),
            item("2", None, None),
            item("3", Some("129.16"), Some("35.15")),
        ];

        let mut map = RecordingMap::default();
        let plotted = plot_items(&mut map, &items, DEFAULT_CENTER, DEFAULT_ZOOM);

        assert_eq!(plotted, 2);
        assert_eq!(map.maps, vec![(DEFAULT_CENTER, DEFAULT_ZOOM)]);
        assert_eq!(map.markers.len(), 2);
        assert_eq!(map.markers[0].title, "Festival 1");
        assert_eq!(map.markers[1].position.latitude, 35.15);
    }

    #[test]
    fn test_hover_text_attached_per_marker() {
        let items = vec![item("1", Some("126.97"), Some("37.56"))];

        let mut map = RecordingMap::default();
        plot_items(&mut map, &items, DEFAULT_CENTER, DEFAULT_ZOOM);

        assert_eq!(map.hover_texts, vec![(0, "Festival 1".to_string())]);
    }
}
