//! Measured layout geometry.
//!
//! A [`LayoutBox`] is what the layout pass decided for an element: its
//! untranslated position and size in the parent's coordinates. Animations never
//! write it; they move [`MapPosition`](super::mapposition::MapPosition) instead,
//! so the layout top stays the reference point for both sequences.
use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutBox {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl LayoutBox {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Whether the point lies inside the box (edges included).
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.left + self.width && y >= self.top && y <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bottom() {
        let b = LayoutBox::new(0.0, 10.0, 100.0, 50.0);
        assert_eq!(b.bottom(), 60.0);
    }

    #[test]
    fn test_contains() {
        let b = LayoutBox::new(10.0, 10.0, 20.0, 20.0);
        assert!(b.contains(10.0, 10.0));
        assert!(b.contains(30.0, 30.0));
        assert!(b.contains(15.0, 25.0));
        assert!(!b.contains(9.9, 15.0));
        assert!(!b.contains(15.0, 30.1));
    }
}
