//! Category → visual style tables.
//!
//! Every table is an exhaustive `match`; categories without a dedicated style
//! land in the default arm.

use crate::{EventCategory, LocationCategory, RouteCategory};

/// Straight RGBA in the `(u8, u8, u8, f32)` shape fast2d expects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba(pub u8, pub u8, pub u8, pub f32);

impl Rgba {
    pub fn with_alpha(self, alpha: f32) -> Self {
        Rgba(self.0, self.1, self.2, alpha)
    }

    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.0, self.1, self.2, self.3)
    }
}

// hsl(220, 40%, 25%)
pub const ROYAL_BLUE: Rgba = Rgba(38, 55, 89, 1.0);
// hsl(45, 85%, 55%)
pub const SILK_GOLD: Rgba = Rgba(238, 189, 43, 1.0);
// hsl(200, 60%, 50%)
pub const SEA_BLUE: Rgba = Rgba(51, 153, 204, 1.0);
// hsl(160, 40%, 45%)
pub const STEPPE_GREEN: Rgba = Rgba(69, 161, 130, 1.0);
pub const MUTED_GRAY: Rgba = Rgba(120, 113, 102, 1.0);
pub const MARKER_BORDER: Rgba = Rgba(255, 255, 255, 1.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerGlyph {
    Dot,
    Crown,
    Pentagon,
    Triangle,
}

impl MarkerGlyph {
    /// Text form used by the legend and the detail panel header.
    pub fn symbol(&self) -> &'static str {
        match self {
            MarkerGlyph::Dot => "●",
            MarkerGlyph::Crown => "♔",
            MarkerGlyph::Pentagon => "⬟",
            MarkerGlyph::Triangle => "▲",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerIcon {
    pub glyph: MarkerGlyph,
    pub color: Rgba,
    /// Pixel radius of the marker disc.
    pub radius: f32,
}

pub const MARKER_RADIUS: f32 = 12.0;

pub fn marker_icon(category: LocationCategory) -> MarkerIcon {
    let (glyph, color) = match category {
        LocationCategory::City => (MarkerGlyph::Dot, ROYAL_BLUE),
        LocationCategory::Court => (MarkerGlyph::Crown, SILK_GOLD),
        LocationCategory::TradeCenter => (MarkerGlyph::Pentagon, SEA_BLUE),
        LocationCategory::Region => (MarkerGlyph::Triangle, STEPPE_GREEN),
        _ => (MarkerGlyph::Triangle, ROYAL_BLUE),
    };
    MarkerIcon {
        glyph,
        color,
        radius: MARKER_RADIUS,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashPattern {
    pub dash: f32,
    pub gap: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolylineStyle {
    pub color: Rgba,
    pub width: f32,
    pub dash: Option<DashPattern>,
}

const ROUTE_WIDTH: f32 = 3.0;
const ROUTE_OPACITY: f32 = 0.7;

pub fn route_style(category: RouteCategory) -> PolylineStyle {
    let color = match category {
        RouteCategory::SilkRoad => SILK_GOLD,
        RouteCategory::SeaRoute | RouteCategory::Overland => SEA_BLUE,
    };
    let dash = match category {
        RouteCategory::SeaRoute => Some(DashPattern {
            dash: 5.0,
            gap: 10.0,
        }),
        RouteCategory::SilkRoad | RouteCategory::Overland => None,
    };
    PolylineStyle {
        color: color.with_alpha(ROUTE_OPACITY),
        width: ROUTE_WIDTH,
        dash,
    }
}

/// Accent color of a timeline card's icon and category badge.
pub fn event_color(category: EventCategory) -> Rgba {
    match category {
        EventCategory::Travel => SILK_GOLD,
        EventCategory::Political => ROYAL_BLUE,
        EventCategory::Biographical => SEA_BLUE,
        EventCategory::Cultural => STEPPE_GREEN,
        _ => MUTED_GRAY,
    }
}

/// Symbol in the round icon of a timeline card.
pub fn event_glyph(category: EventCategory) -> &'static str {
    match category {
        EventCategory::Travel => "✈",
        EventCategory::Political => "♔",
        EventCategory::Biographical => "☺",
        EventCategory::Cultural => "✎",
        _ => "◷",
    }
}
