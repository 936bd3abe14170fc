//! Declarative tween groups.
//!
//! A [`TweenGroup`] is a list of [`TweenSpec`]s plus a small ordering relation:
//! every entry either starts with the group or starts once a previous entry
//! has finished. The ordering is resolved into start delays when the group is
//! spawned, after which the group itself is gone; only the tween entities
//! remain, and each despawns when it completes.
//!
//! ```ignore
//! let mut group = TweenGroup::new();
//! let fade = group.add(TweenSpec::new(sky, day_to_dusk, 3.0));
//! group.add_after(fade, TweenSpec::new(sky, dusk_to_night, 1.5))?;
//! group.spawn(&mut commands, &mut serial);
//! ```

use bevy_ecs::prelude::{Commands, Entity};
use smallvec::SmallVec;

use crate::components::tween::{Easing, LoopMode, Tween, TweenProperty};
use crate::resources::tweenserial::TweenSerial;

/// One property animation, not yet started.
#[derive(Clone, Copy, Debug)]
pub struct TweenSpec {
    pub target: Entity,
    pub property: TweenProperty,
    /// Duration in seconds.
    pub duration: f32,
    pub easing: Easing,
    pub loop_mode: LoopMode,
}

impl TweenSpec {
    pub fn new(target: Entity, property: TweenProperty, duration: f32) -> Self {
        Self {
            target,
            property,
            duration,
            easing: Easing::Linear,
            loop_mode: LoopMode::Once,
        }
    }
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
    pub fn with_loop_mode(mut self, loop_mode: LoopMode) -> Self {
        self.loop_mode = loop_mode;
        self
    }

    /// Whether this animation ever completes.
    pub fn is_finite(&self) -> bool {
        self.loop_mode == LoopMode::Once
    }
}

#[derive(Clone, Copy, Debug)]
struct GroupEntry {
    spec: TweenSpec,
    after: Option<usize>,
}

/// Tweens with play-together / play-after relations.
#[derive(Clone, Debug, Default)]
pub struct TweenGroup {
    entries: SmallVec<[GroupEntry; 8]>,
}

impl TweenGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tween that starts together with the group. Returns its index.
    pub fn add(&mut self, spec: TweenSpec) -> usize {
        self.entries.push(GroupEntry { spec, after: None });
        self.entries.len() - 1
    }

    /// Add a tween that starts once entry `predecessor` has finished.
    ///
    /// Fails if `predecessor` is not in the group or never finishes.
    pub fn add_after(&mut self, predecessor: usize, spec: TweenSpec) -> Result<usize, String> {
        let pred = self
            .entries
            .get(predecessor)
            .ok_or_else(|| format!("No tween #{} in group of {}", predecessor, self.len()))?;
        if !pred.spec.is_finite() {
            return Err(format!(
                "Tween #{} loops forever ({:?}); nothing can start after it",
                predecessor, pred.spec.loop_mode
            ));
        }
        self.entries.push(GroupEntry {
            spec,
            after: Some(predecessor),
        });
        Ok(self.entries.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn get(&self, index: usize) -> Option<&TweenSpec> {
        self.entries.get(index).map(|e| &e.spec)
    }

    /// The entry that must finish before `index` starts, if any.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn predecessor(&self, index: usize) -> Option<usize> {
        self.entries.get(index).and_then(|e| e.after)
    }

    pub fn specs(&self) -> impl Iterator<Item = &TweenSpec> {
        self.entries.iter().map(|e| &e.spec)
    }

    /// Seconds from group start until entry `index` starts.
    pub fn start_offset(&self, index: usize) -> Option<f32> {
        let entry = self.entries.get(index)?;
        match entry.after {
            None => Some(0.0),
            // Predecessors always have a lower index, so this terminates.
            Some(pred) => {
                let pred_spec = &self.entries[pred].spec;
                Some(self.start_offset(pred)? + pred_spec.duration.max(0.0))
            }
        }
    }

    /// Seconds until the last finite tween of the group completes.
    ///
    /// Endless tweens are ignored; a group made only of them has a critical
    /// path of zero.
    pub fn critical_path(&self) -> f32 {
        (0..self.entries.len())
            .filter(|&i| self.entries[i].spec.is_finite())
            .filter_map(|i| Some(self.start_offset(i)? + self.entries[i].spec.duration.max(0.0)))
            .fold(0.0, f32::max)
    }

    /// Start every tween of the group. Returns the spawned tween entities in
    /// entry order.
    pub fn spawn(self, commands: &mut Commands, serial: &mut TweenSerial) -> Vec<Entity> {
        let mut spawned = Vec::with_capacity(self.entries.len());
        for (i, entry) in self.entries.iter().enumerate() {
            let spec = entry.spec;
            let tween = Tween::new(spec.target, spec.property, spec.duration)
                .with_easing(spec.easing)
                .with_loop_mode(spec.loop_mode)
                .with_delay(self.start_offset(i).unwrap_or(0.0))
                .with_serial(serial.next());
            spawned.push(commands.spawn(tween).id());
        }
        spawned
    }
}
