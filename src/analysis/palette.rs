//! Named colors used by the chart builders

use egui::Color32;

pub const DARK_BLUE: Color32 = Color32::from_rgb(0, 0, 139);
pub const LIGHT_BLUE: Color32 = Color32::from_rgb(173, 216, 230);
pub const SALMON: Color32 = Color32::from_rgb(250, 128, 114);
pub const DARK_RED: Color32 = Color32::from_rgb(139, 0, 0);
pub const DARK_MAGENTA: Color32 = Color32::from_rgb(139, 0, 139);

pub const BLUE: Color32 = Color32::from_rgb(0, 0, 255);
pub const GREEN: Color32 = Color32::from_rgb(0, 128, 0);
pub const RED: Color32 = Color32::from_rgb(255, 0, 0);
pub const PURPLE: Color32 = Color32::from_rgb(128, 0, 128);
pub const CYAN: Color32 = Color32::from_rgb(0, 191, 191);
pub const MAGENTA: Color32 = Color32::from_rgb(191, 0, 191);
pub const YELLOW: Color32 = Color32::from_rgb(191, 191, 0);
pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);

pub const ORANGE: Color32 = Color32::from_rgb(255, 165, 0);
pub const BROWN: Color32 = Color32::from_rgb(165, 42, 42);
pub const OLIVE: Color32 = Color32::from_rgb(128, 128, 0);
pub const TEAL: Color32 = Color32::from_rgb(0, 128, 128);
pub const STEEL_BLUE: Color32 = Color32::from_rgb(70, 130, 180);

pub const LIGHT_GRAY: Color32 = Color32::from_rgb(211, 211, 211);

/// Fill of values outside a scheme's outer boundaries
pub const OUT_OF_RANGE: Color32 = Color32::from_rgb(150, 150, 150);

/// Country outlines on the map (gray level 0.8)
pub const BOUNDARY_EDGE: Color32 = Color32::from_rgb(204, 204, 204);
