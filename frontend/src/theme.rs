// Design tokens for the explorer: parchment surfaces, ink text, silk-road gold.

// Spacing scale
pub const SPACING_4: u32 = 4;
pub const SPACING_8: u32 = 8;
pub const SPACING_12: u32 = 12;
pub const SPACING_16: u32 = 16;
pub const SPACING_24: u32 = 24;

// Typography scale
pub const FONT_SIZE_12: u32 = 12;
pub const FONT_SIZE_14: u32 = 14;
pub const FONT_SIZE_16: u32 = 16;
pub const FONT_SIZE_20: u32 = 20;
pub const FONT_SIZE_30: u32 = 30;

pub const FONT_FAMILY_SERIF: &str = "Georgia";

pub const CORNER_RADIUS: u32 = 8;
pub const PILL_RADIUS: u32 = 999;

// Surfaces
pub const PAGE_BACKGROUND: &str = "hsl(40, 33%, 94%)";
pub const CARD_BACKGROUND: &str = "hsl(40, 40%, 98%)";
pub const MUTED_BACKGROUND: &str = "hsl(40, 25%, 90%)";
pub const BORDER_COLOR: &str = "hsl(35, 20%, 82%)";
pub const SHADOW_COLOR: &str = "rgba(0, 0, 0, 0.08)";

// Ink
pub const TEXT_PRIMARY: &str = "hsl(25, 30%, 15%)";
pub const TEXT_MUTED: &str = "hsl(25, 12%, 40%)";
pub const TEXT_ON_ACCENT: &str = "hsl(25, 30%, 10%)";

// Accent, matches `shared::style::SILK_GOLD`
pub const ACCENT: &str = "hsl(45, 85%, 55%)";
pub const ACCENT_HOVER: &str = "hsl(45, 85%, 48%)";
pub const ACCENT_SOFT: &str = "hsla(45, 85%, 55%, 0.15)";

pub const HEADER_BACKGROUND: &str = "hsl(220, 40%, 25%)";
pub const HEADER_TEXT: &str = "hsl(40, 40%, 96%)";

// Canvas, in fast2d's (r, g, b, a) form
pub const MAP_WATER: (u8, u8, u8, f32) = (214, 226, 228, 1.0);
pub const MAP_GRATICULE: (u8, u8, u8, f32) = (150, 140, 120, 0.25);

// Timeline de-emphasis
pub const FADED_OPACITY: &str = "0.3";
