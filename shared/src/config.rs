use crate::Coordinates;
use crate::map_view::SurfaceOptions;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ===== CONFIG TYPES =====

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ExplorerConfig {
    pub app: AppSection,
    pub map: MapSection,
    pub timeline: TimelineSection,
}

// AppSection carries the format version so a future layout change can be
// migrated instead of silently misread.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AppSection {
    pub version: String,
}

impl AppSection {
    /// Current configuration format version
    pub const CURRENT_VERSION: &'static str = "1.0.0";

    pub fn migration_strategy(&self) -> MigrationStrategy {
        match self.version.as_str() {
            "1.0.0" => MigrationStrategy::None,
            _ => MigrationStrategy::Recreate,
        }
    }
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MigrationStrategy {
    None,
    Recreate,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MapSection {
    /// `[lat, lon]` of the overview.
    pub center: [f64; 2],
    pub zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Zoom used when a location gets selected.
    pub focus_zoom: f64,
}

impl Default for MapSection {
    fn default() -> Self {
        Self {
            center: [35.0, 75.0],
            zoom: 4.0,
            min_zoom: 2.0,
            max_zoom: 10.0,
            focus_zoom: 6.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TimelineSection {
    pub era_label: String,
    pub presets: Vec<YearPreset>,
}

impl Default for TimelineSection {
    fn default() -> Self {
        Self {
            era_label: "Marco Polo's era (1254-1324)".to_string(),
            presets: vec![
                YearPreset::new("All Years", None),
                YearPreset::new("Departure", Some(1271)),
                YearPreset::new("Arrival", Some(1275)),
                YearPreset::new("Return", Some(1292)),
            ],
        }
    }
}

/// Quick-filter button above the timeline. A preset without a year clears
/// the filter.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct YearPreset {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

impl YearPreset {
    pub fn new(label: &str, year: Option<i32>) -> Self {
        Self {
            label: label.to_string(),
            year,
        }
    }
}

// ===== ERRORS =====

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse explorer config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unsupported config version '{found}' (expected {expected})")]
    UnsupportedVersion { found: String, expected: &'static str },
    #[error("{name} zoom {value} is outside [{min}, {max}]")]
    ZoomOutOfBounds {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("map center [{lat}, {lon}] is not a valid coordinate")]
    CenterOutOfRange { lat: f64, lon: f64 },
    #[error("timeline needs at least one year preset")]
    NoPresets,
}

// ===== LOADING =====

impl ExplorerConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ExplorerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let MigrationStrategy::Recreate = self.app.migration_strategy() {
            return Err(ConfigError::UnsupportedVersion {
                found: self.app.version.clone(),
                expected: AppSection::CURRENT_VERSION,
            });
        }

        let map = &self.map;
        if map.min_zoom > map.max_zoom {
            return Err(ConfigError::ZoomOutOfBounds {
                name: "min",
                value: map.min_zoom,
                min: map.min_zoom,
                max: map.max_zoom,
            });
        }
        for (name, value) in [("initial", map.zoom), ("focus", map.focus_zoom)] {
            if !(map.min_zoom..=map.max_zoom).contains(&value) {
                return Err(ConfigError::ZoomOutOfBounds {
                    name,
                    value,
                    min: map.min_zoom,
                    max: map.max_zoom,
                });
            }
        }

        let [lat, lon] = map.center;
        if !Coordinates::new(lat, lon).is_valid() {
            return Err(ConfigError::CenterOutOfRange { lat, lon });
        }

        if self.timeline.presets.is_empty() {
            return Err(ConfigError::NoPresets);
        }
        Ok(())
    }

    pub fn center(&self) -> Coordinates {
        let [lat, lon] = self.map.center;
        Coordinates::new(lat, lon)
    }

    pub fn surface_options(&self) -> SurfaceOptions {
        SurfaceOptions {
            center: self.center(),
            zoom: self.map.zoom,
            min_zoom: self.map.min_zoom,
            max_zoom: self.map.max_zoom,
        }
    }
}
