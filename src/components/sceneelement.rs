//! Scene element tag.
//!
//! The scene has exactly four elements. The sun lives inside the sky and the
//! reflection lives inside the sea: their [`LayoutBox`](super::layoutbox::LayoutBox)
//! and [`MapPosition`](super::mapposition::MapPosition) are expressed in the
//! parent's coordinates.
use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneElement {
    Sky,
    Sun,
    Sea,
    Reflection,
}

impl SceneElement {
    /// The element whose coordinate space this element is laid out in.
    pub fn parent(self) -> Option<SceneElement> {
        match self {
            SceneElement::Sun => Some(SceneElement::Sky),
            SceneElement::Reflection => Some(SceneElement::Sea),
            SceneElement::Sky | SceneElement::Sea => None,
        }
    }
}
