//! Fill color component for scene elements.
//!
//! The render system fills each element's shape with its [`BackgroundColor`].
//! Color tweens write this component through the ARGB evaluator.
use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

/// Fill color of a scene element.
#[derive(Component, Clone, Debug, Copy)]
pub struct BackgroundColor {
    pub color: Color,
}

impl BackgroundColor {
    /// Pack into a `0xAARRGGBB` integer.
    pub fn argb(&self) -> u32 {
        (self.color.a as u32) << 24
            | (self.color.r as u32) << 16
            | (self.color.g as u32) << 8
            | self.color.b as u32
    }
}

impl From<Color> for BackgroundColor {
    fn from(color: Color) -> Self {
        Self { color }
    }
}

impl Default for BackgroundColor {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_opaque_black() {
        let bg = BackgroundColor::default();
        assert_eq!(bg.argb(), 0xFF00_0000);
    }

    #[test]
    fn test_argb_packing() {
        let bg = BackgroundColor::from(Color::new(0x1E, 0x7A, 0xC7, 0xFF));
        assert_eq!(bg.argb(), 0xFF1E_7AC7);
    }

    #[test]
    fn test_from_color() {
        let bg: BackgroundColor = Color::new(5, 25, 46, 128).into();
        assert_eq!(bg.argb(), 0x8005_192E);
    }
}
