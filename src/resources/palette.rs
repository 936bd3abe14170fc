//! Scene colors.
//!
//! The theme is fixed: the named colors below are the only source of color in
//! the scene. [`SkyPalette`] resolves the three sky colors once at startup and
//! is handed to the sequencer by reference.
use bevy_ecs::prelude::Resource;
use raylib::prelude::Color;

/// Daytime sky.
pub const BLUE_SKY: u32 = 0xFF1E_7AC7;
/// Sky while the sun touches the horizon.
pub const SUNSET_SKY: u32 = 0xFFEC_8100;
/// Sky once the sun has set.
pub const NIGHT_SKY: u32 = 0xFF05_192E;
pub const BRIGHT_SUN: u32 = 0xFFFC_FCB7;
pub const SEA: u32 = 0xFF22_4869;
/// The sun as seen on the water.
pub const SUN_REFLECTION: u32 = 0x66FC_FCB7;
/// Corona drawn behind the sun so its rotation is visible.
pub const SUN_RAYS: u32 = 0xFFFC_BC45;

/// Unpack a `0xAARRGGBB` integer.
pub fn color_from_argb(argb: u32) -> Color {
    Color::new(
        (argb >> 16) as u8,
        (argb >> 8) as u8,
        argb as u8,
        (argb >> 24) as u8,
    )
}

/// The three sky colors the sunset and sunrise sequences blend between.
#[derive(Resource, Clone, Copy, Debug)]
pub struct SkyPalette {
    pub day: Color,
    pub sunset: Color,
    pub night: Color,
}

impl SkyPalette {
    /// Resolve the palette from the built-in theme.
    pub fn from_theme() -> Self {
        Self {
            day: color_from_argb(BLUE_SKY),
            sunset: color_from_argb(SUNSET_SKY),
            night: color_from_argb(NIGHT_SKY),
        }
    }
}

impl Default for SkyPalette {
    fn default() -> Self {
        Self::from_theme()
    }
}
