//! Input system.
//!
//! [`update_input_state`] polls Raylib once per frame:
//! - a left click (or tap) inside the scene emits
//!   [`SceneActivatedEvent`](crate::events::activation::SceneActivatedEvent)
//! - F11 emits [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent)
use bevy_ecs::prelude::*;
use raylib::prelude::{KeyboardKey, MouseButton};

use crate::components::layoutbox::LayoutBox;
use crate::events::activation::SceneActivatedEvent;
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::screensize::ScreenSize;

/// Key that toggles the diagnostics overlay.
pub const DEBUG_KEY: KeyboardKey = KeyboardKey::KEY_F11;

/// The tap target: the whole scene.
pub fn scene_bounds(screen: ScreenSize) -> LayoutBox {
    LayoutBox::new(0.0, 0.0, screen.w.max(0) as f32, screen.h.max(0) as f32)
}

/// Poll Raylib for the scene tap and the debug key.
pub fn update_input_state(
    rl: NonSend<raylib::RaylibHandle>,
    screen: Res<ScreenSize>,
    mut commands: Commands,
) {
    if rl.is_key_pressed(DEBUG_KEY) {
        commands.trigger(SwitchDebugEvent {});
    }

    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        let pos = rl.get_mouse_position();
        if scene_bounds(*screen).contains(pos.x, pos.y) {
            commands.trigger(SceneActivatedEvent {});
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_bounds_cover_screen() {
        let bounds = scene_bounds(ScreenSize { w: 480, h: 800 });
        assert!(bounds.contains(0.0, 0.0));
        assert!(bounds.contains(479.0, 799.0));
        assert!(!bounds.contains(-1.0, 10.0));
        assert!(!bounds.contains(10.0, 801.0));
    }
}
