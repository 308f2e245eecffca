//! Fixed scene parameters: window size, colors and tile geometry.
//!
//! Everything here is decided at build time. [`SceneConfig::default`] is the
//! only configuration the application ever uses; the struct exists so the
//! derived values (projection, styles) are computed in one place.

use crate::iso::{IsoProjection, ScreenPos};
use crate::scene::DiamondStyle;

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Build from a `0xRRGGBB` literal. The top byte is ignored.
    pub const fn from_hex(hex: u32) -> Self {
        Self(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }
}

impl From<Rgb> for egui::Color32 {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb.0, rgb.1, rgb.2)
    }
}

// ---------------------------------------------------------------------------
// Scene configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    /// Logical window size in points.
    pub width: f32,
    pub height: f32,
    pub background: Rgb,

    /// Full width of one tile; the diamond is `tile_size` wide and
    /// `tile_size / 2` tall.
    pub tile_size: f32,
    /// Screen position of the top vertex of cell (0, 0).
    pub origin: ScreenPos,

    pub tile_border: Rgb,
    pub border_width: f32,

    pub building_top: Rgb,
    pub building_side: Rgb,
    pub preview_opacity: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            background: Rgb::from_hex(0x2C3E50),
            tile_size: 60.0,
            origin: ScreenPos { x: 400.0, y: 200.0 },
            tile_border: Rgb::from_hex(0x444444),
            border_width: 2.0,
            building_top: Rgb::from_hex(0xFF6B6B),
            building_side: Rgb::from_hex(0xCC5555),
            preview_opacity: 0.7,
        }
    }
}

impl SceneConfig {
    pub fn projection(&self) -> IsoProjection {
        IsoProjection {
            half_width: self.tile_size / 2.0,
            half_height: self.tile_size / 4.0,
            origin: self.origin,
        }
    }

    /// Border style shared by every map tile; the fill comes from the tile kind.
    pub fn tile_style(&self, fill: Rgb) -> DiamondStyle {
        DiamondStyle {
            fill,
            border: self.tile_border,
            border_width: self.border_width,
            opacity: 1.0,
        }
    }

    pub fn building_style(&self) -> DiamondStyle {
        DiamondStyle {
            fill: self.building_top,
            border: self.building_side,
            border_width: self.border_width,
            opacity: 1.0,
        }
    }

    pub fn preview_style(&self) -> DiamondStyle {
        DiamondStyle {
            opacity: self.preview_opacity,
            ..self.building_style()
        }
    }
}
