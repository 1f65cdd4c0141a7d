use serde::{Deserialize, Serialize};
use std::fmt;

pub mod config;
pub mod dataset;
pub mod filter;
pub mod geo;
pub mod map_view;
pub mod selection;
pub mod style;

pub use config::{ConfigError, ExplorerConfig};
pub use filter::{
    TimelineEntry, event_de_emphasized, location_visible, route_visible, timeline_entries,
    visible_locations, visible_routes,
};
pub use map_view::{MapSurface, MapViewSync, MarkerCallback, PopupContent, SurfaceOptions};
pub use selection::{ExplorerSelection, SelectionCommand};
pub use style::{MarkerGlyph, MarkerIcon, PolylineStyle, Rgba};

// ===== GEOGRAPHIC TYPES =====

/// Latitude/longitude pair in degrees.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

// ===== CATEGORY TAGS =====

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum LocationCategory {
    City,
    Region,
    Route,
    Court,
    TradeCenter,
}

impl LocationCategory {
    pub const ALL: [LocationCategory; 5] = [
        LocationCategory::City,
        LocationCategory::Region,
        LocationCategory::Route,
        LocationCategory::Court,
        LocationCategory::TradeCenter,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            LocationCategory::City => "city",
            LocationCategory::Region => "region",
            LocationCategory::Route => "route",
            LocationCategory::Court => "court",
            LocationCategory::TradeCenter => "trade-center",
        }
    }

    /// Human readable label, e.g. `Trade Center`.
    pub fn label(&self) -> String {
        format_category_label(self.tag())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum RouteCategory {
    SilkRoad,
    SeaRoute,
    Overland,
}

impl RouteCategory {
    pub const ALL: [RouteCategory; 3] = [
        RouteCategory::SilkRoad,
        RouteCategory::SeaRoute,
        RouteCategory::Overland,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            RouteCategory::SilkRoad => "silk-road",
            RouteCategory::SeaRoute => "sea-route",
            RouteCategory::Overland => "overland",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum EventCategory {
    Travel,
    Political,
    Economic,
    Cultural,
    Biographical,
}

impl EventCategory {
    pub const ALL: [EventCategory; 5] = [
        EventCategory::Travel,
        EventCategory::Political,
        EventCategory::Economic,
        EventCategory::Cultural,
        EventCategory::Biographical,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            EventCategory::Travel => "travel",
            EventCategory::Political => "political",
            EventCategory::Economic => "economic",
            EventCategory::Cultural => "cultural",
            EventCategory::Biographical => "biographical",
        }
    }
}

// ===== CORE DATA TYPES =====

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub modern_name: Option<String>,
    pub coordinates: Coordinates,
    pub category: LocationCategory,
    pub year_visited: Option<i32>,
    pub significance: String,
    pub description: String,
    pub historical_context: String,
    pub economic_importance: Option<String>,
    pub cultural_notes: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Route {
    pub id: String,
    pub name: String,
    pub category: RouteCategory,
    /// Polyline vertices in traversal order.
    pub coordinates: Vec<Coordinates>,
    pub description: String,
    pub year_active: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TimelineEvent {
    pub id: String,
    pub year: i32,
    pub title: String,
    pub description: String,
    pub category: EventCategory,
    /// Free-text place name. Not guaranteed to match any `Location::name`.
    pub location: Option<String>,
    pub coordinates: Option<Coordinates>,
}

// ===== DISPLAY HELPERS =====

/// Split a category tag on `-` and capitalize each segment.
pub fn format_category_label(tag: &str) -> String {
    tag.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Coordinate line shown in the detail panel, fixed to four decimals.
pub fn format_coordinates(coordinates: Coordinates) -> String {
    format!("{:.4}°N, {:.4}°E", coordinates.lat, coordinates.lon)
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_coordinates(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_label_formatting() {
        assert_eq!(format_category_label("trade-center"), "Trade Center");
        assert_eq!(format_category_label("city"), "City");
        assert_eq!(format_category_label("silk-road"), "Silk Road");
        assert_eq!(LocationCategory::TradeCenter.label(), "Trade Center");
        assert_eq!(LocationCategory::Court.label(), "Court");
    }

    #[test]
    fn test_coordinate_display() {
        let khanbaliq = Coordinates::new(39.9042, 116.4074);
        assert_eq!(format_coordinates(khanbaliq), "39.9042°N, 116.4074°E");
        assert_eq!(Coordinates::new(1.5, 2.0).to_string(), "1.5000°N, 2.0000°E");
    }

    #[test]
    fn test_coordinate_ranges() {
        assert!(Coordinates::new(90.0, -180.0).is_valid());
        assert!(!Coordinates::new(90.5, 0.0).is_valid());
        assert!(!Coordinates::new(0.0, 181.0).is_valid());
    }

    #[test]
    fn test_category_tags_match_serde_names() {
        for category in LocationCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.tag()));
        }
        for category in RouteCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.tag()));
        }
        for category in EventCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.tag()));
        }
    }
}
