use bevy_ecs::prelude::Resource;

/// Monotonic counter stamped on every spawned tween.
///
/// When several tweens drive the same property, the tween system applies them
/// in serial order, so the most recently started one wins the frame.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct TweenSerial(u64);

impl TweenSerial {
    pub fn next(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn last(&self) -> u64 {
        self.0
    }
}
