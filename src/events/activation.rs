//! Scene activation: the single input of the scene.
//!
//! Emitting a [`SceneActivatedEvent`] (a click or tap on the scene) runs
//! [`scene_activated_observer`], which flips the [`SunToggle`] and starts the
//! matching sequence. Activations are never debounced: a sequence still in
//! flight keeps running and the newer tweens simply win where they overlap.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

use crate::components::layoutbox::LayoutBox;
use crate::components::tween::Tween;
use crate::resources::palette::SkyPalette;
use crate::resources::sceneelements::SceneElements;
use crate::resources::suntoggle::SunToggle;
use crate::resources::tweenserial::TweenSerial;
use crate::sequencer::{self, GeometrySnapshot};
use crate::tweengroup::TweenGroup;

/// The scene was clicked or tapped. Carries no data.
#[derive(Event, Debug, Clone, Copy)]
pub struct SceneActivatedEvent {}

/// Toggle controller: play the next sequence and flip the direction.
pub fn scene_activated_observer(
    _trigger: On<SceneActivatedEvent>,
    mut toggle: ResMut<SunToggle>,
    mut serial: ResMut<TweenSerial>,
    palette: Res<SkyPalette>,
    elements: Option<Res<SceneElements>>,
    layouts: Query<&LayoutBox>,
    running: Query<(Entity, &Tween)>,
    mut commands: Commands,
) {
    let Some(elements) = elements else {
        warn!("Scene activated before its elements exist; ignoring");
        return;
    };
    let Some(geometry) = GeometrySnapshot::capture(&elements, |e| layouts.get(e).ok().copied())
    else {
        warn!("Scene activated before layout; ignoring");
        return;
    };

    let sequence = toggle.activate();
    info!(
        "Activation #{}: playing {:?}",
        toggle.activations(),
        sequence
    );
    debug!("Geometry at activation: {:?}", geometry);

    match sequencer::build_group(sequence, &geometry, &palette, &elements) {
        Ok(group) => {
            supersede_endless(&group, &running, &mut commands);
            let settles_in = group.critical_path();
            let spawned = group.spawn(&mut commands, &mut serial);
            debug!(
                "Spawned {} tweens for {:?}, settling in {:.1}s",
                spawned.len(),
                sequence,
                settles_in
            );
        }
        Err(e) => log::error!("Failed to build {:?} sequence: {}", sequence, e),
    }
}

/// Despawn endless tweens that a new endless tween of `group` replaces.
///
/// Finite tweens are never cancelled. Endless ones would otherwise pile up on
/// the same property with every sunset.
fn supersede_endless(group: &TweenGroup, running: &Query<(Entity, &Tween)>, commands: &mut Commands) {
    for spec in group.specs().filter(|s| !s.is_finite()) {
        for (entity, tween) in running.iter() {
            if tween.is_endless()
                && tween.target == spec.target
                && tween.property.kind() == spec.property.kind()
            {
                debug!("Superseding endless tween {:?}", entity);
                commands.entity(entity).despawn();
            }
        }
    }
}
