//! Map View
//! Icon-layer description of every airport, centered on the mean coordinate.

use crate::data::AirportRecord;
use serde::Serialize;

pub const ICON_URL: &str =
    "https://upload.wikimedia.org/wikipedia/commons/4/42/NotoSans_-_Small_Airplane_-_1F6E9.svg";
pub const MAP_STYLE: &str = "mapbox://styles/mapbox/navigation-day-v1";
pub const ZOOM: f64 = 8.0;

/// Web-mercator tile edge in pixels.
const TILE_SIZE: f64 = 256.0;

/// Rendering descriptor attached to every marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IconDescriptor {
    pub url: String,
    pub width: u32,
    pub height: u32,
    #[serde(rename = "anchorY")]
    pub anchor_y: u32,
}

impl Default for IconDescriptor {
    fn default() -> Self {
        Self {
            url: ICON_URL.to_string(),
            width: 100,
            height: 100,
            anchor_y: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IconMarker {
    pub name: String,
    #[serde(rename = "type")]
    pub airport_type: String,
    pub lat: f64,
    pub lon: f64,
    pub icon_data: IconDescriptor,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewState {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
    pub pitch: f64,
}

impl ViewState {
    /// Longitude/latitude extents visible in a `width` x `height` pixel viewport,
    /// as `([min_lon, min_lat], [max_lon, max_lat])`.
    pub fn bounds(&self, width: f64, height: f64) -> ([f64; 2], [f64; 2]) {
        let lon_span = 360.0 * width / (TILE_SIZE * 2f64.powf(self.zoom));
        // Mercator stretches latitude away from the equator.
        let lat_span = lon_span * (height / width) * self.latitude.to_radians().cos();

        (
            [self.longitude - lon_span / 2.0, self.latitude - lat_span / 2.0],
            [self.longitude + lon_span / 2.0, self.latitude + lat_span / 2.0],
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IconLayer {
    #[serde(rename = "@@type")]
    pub layer_type: &'static str,
    pub data: Vec<IconMarker>,
    pub get_icon: &'static str,
    pub get_position: &'static str,
    pub get_size: u32,
    pub size_scale: u32,
    pub pickable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapSpec {
    pub map_style: &'static str,
    pub initial_view_state: ViewState,
    pub layers: Vec<IconLayer>,
}

impl MapSpec {
    /// Build the map from the table. Rows missing a coordinate get no marker.
    pub fn from_records(records: &[AirportRecord]) -> Self {
        let markers: Vec<IconMarker> = records
            .iter()
            .filter_map(|r| match (r.lat, r.lon) {
                (Some(lat), Some(lon)) => Some(IconMarker {
                    name: r.name.clone(),
                    airport_type: r.airport_type.clone(),
                    lat,
                    lon,
                    icon_data: IconDescriptor::default(),
                }),
                _ => None,
            })
            .collect();

        let (latitude, longitude) = mean_position(&markers);

        Self {
            map_style: MAP_STYLE,
            initial_view_state: ViewState {
                latitude,
                longitude,
                zoom: ZOOM,
                pitch: 0.0,
            },
            layers: vec![IconLayer {
                layer_type: "IconLayer",
                data: markers,
                get_icon: "icon_data",
                get_position: "[lon,lat]",
                get_size: 4,
                size_scale: 10,
                pickable: true,
            }],
        }
    }

    pub fn markers(&self) -> &[IconMarker] {
        self.layers.first().map(|l| l.data.as_slice()).unwrap_or(&[])
    }

    /// deck.gl JSON description of the map.
    pub fn to_deck_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Mean (lat, lon) of the markers; the origin when there are none.
fn mean_position(markers: &[IconMarker]) -> (f64, f64) {
    if markers.is_empty() {
        return (0.0, 0.0);
    }
    let n = markers.len() as f64;
    let lat = markers.iter().map(|m| m.lat).sum::<f64>() / n;
    let lon = markers.iter().map(|m| m.lon).sum::<f64>() / n;
    (lat, lon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::record;

    #[test]
    fn test_centered_on_mean_position() {
        let mut a = record("1", "US-MA", "heliport", Some(1.0));
        a.lat = Some(42.0);
        a.lon = Some(-71.0);
        let mut b = record("2", "US-NH", "heliport", Some(2.0));
        b.lat = Some(44.0);
        b.lon = Some(-72.0);

        let spec = MapSpec::from_records(&[a, b]);
        assert_eq!(spec.initial_view_state.latitude, 43.0);
        assert_eq!(spec.initial_view_state.longitude, -71.5);
        assert_eq!(spec.initial_view_state.zoom, 8.0);
        assert_eq!(spec.initial_view_state.pitch, 0.0);
        assert_eq!(spec.markers().len(), 2);
    }

    #[test]
    fn test_every_marker_gets_same_icon() {
        let records = crate::test_support::four_rows();
        let spec = MapSpec::from_records(&records);

        assert_eq!(spec.markers().len(), records.len());
        assert!(spec
            .markers()
            .iter()
            .all(|m| m.icon_data == IconDescriptor::default()));
        assert!(spec.layers[0].pickable);
    }

    #[test]
    fn test_rows_without_coordinates_skipped() {
        let mut no_coords = record("9", "US-ME", "heliport", None);
        no_coords.lat = None;

        let spec = MapSpec::from_records(&[no_coords]);
        assert!(spec.markers().is_empty());
        assert_eq!(spec.initial_view_state.latitude, 0.0);
    }

    #[test]
    fn test_deck_json_shape() {
        let spec = MapSpec::from_records(&crate::test_support::four_rows());
        let json: serde_json::Value = serde_json::from_str(&spec.to_deck_json().unwrap()).unwrap();

        assert_eq!(json["mapStyle"], MAP_STYLE);
        assert_eq!(json["initialViewState"]["zoom"], 8.0);
        assert_eq!(json["layers"][0]["@@type"], "IconLayer");
        assert_eq!(json["layers"][0]["getPosition"], "[lon,lat]");
        assert_eq!(json["layers"][0]["data"][0]["icon_data"]["anchorY"], 1);
        assert_eq!(json["layers"][0]["data"][0]["icon_data"]["width"], 100);
        assert_eq!(json["layers"][0]["data"][0]["type"], "heliport");
    }

    #[test]
    fn test_zoom_eight_bounds() {
        let view = ViewState {
            latitude: 0.0,
            longitude: 0.0,
            zoom: 8.0,
            pitch: 0.0,
        };
        let (min, max) = view.bounds(256.0, 256.0);
        let span = 360.0 / 256.0;
        assert!((max[0] - min[0] - span).abs() < 1e-9);
        assert!((max[1] - min[1] - span).abs() < 1e-9);
    }
}
