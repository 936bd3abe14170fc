//! Diagnostics overlay toggle.
//!
//! F11 emits a [`SwitchDebugEvent`]; [`switch_debug_observer`] adds or removes
//! the [`DebugMode`] marker that the render system checks.
use crate::resources::debugmode::DebugMode;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

#[derive(Event, Debug, Clone, Copy)]
pub struct SwitchDebugEvent {}

/// Flip the presence of [`DebugMode`].
pub fn switch_debug_observer(
    _trigger: On<SwitchDebugEvent>,
    mut commands: Commands,
    debug_mode: Option<Res<DebugMode>>,
) {
    match debug_mode {
        Some(_) => {
            commands.remove_resource::<DebugMode>();
            info!("Diagnostics overlay off");
        }
        None => {
            commands.insert_resource(DebugMode {});
            info!("Diagnostics overlay on");
        }
    }
}
