//! Toggle state: which sequence the next activation plays.
//!
//! The scene has two steady states, day shown and night shown. Activating in
//! day plays the [`Sequence::Sunset`]; activating in night plays the
//! [`Sequence::Sunrise`]. The flag flips exactly once per activation, whether
//! or not the previous sequence has finished.
use bevy_ecs::prelude::Resource;

/// One of the two animation sequences.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Sequence {
    /// Forward: day to night.
    #[default]
    Sunset,
    /// Reverse: night to day.
    Sunrise,
}

impl Sequence {
    pub fn opposite(self) -> Sequence {
        match self {
            Sequence::Sunset => Sequence::Sunrise,
            Sequence::Sunrise => Sequence::Sunset,
        }
    }
}

#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct SunToggle {
    next: Sequence,
    activations: u64,
}

impl SunToggle {
    /// The sequence the next activation will play.
    pub fn next(&self) -> Sequence {
        self.next
    }

    /// Number of activations so far.
    pub fn activations(&self) -> u64 {
        self.activations
    }

    /// Whether the scene is (or is heading to) night.
    pub fn shows_night(&self) -> bool {
        self.next == Sequence::Sunrise
    }

    /// Flip the direction and return the sequence to play now.
    pub fn activate(&mut self) -> Sequence {
        let current = self.next;
        self.next = current.opposite();
        self.activations += 1;
        current
    }
}
