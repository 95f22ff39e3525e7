use std::{fmt, ops::RangeInclusive};

use rand::Rng;

use crate::{ExerciseName, Reps, catalog::ACCESSORIES};

/// Source of the random choices made for accessory exercises.
pub trait RandomSource {
    /// Uniformly chosen index in `0..len`.
    fn index(&mut self, len: usize) -> usize;
    /// Uniformly chosen value in `range`.
    fn between(&mut self, range: RangeInclusive<u32>) -> u32;
}

/// Random source backed by a `rand` generator.
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }

    fn between(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.0.gen_range(range)
    }
}

pub const ACCESSORY_REPS: RangeInclusive<u32> = 6..=10;

#[derive(Debug, Clone, PartialEq)]
pub struct Accessory {
    pub exercise: ExerciseName,
    pub reps: Reps,
}

impl fmt::Display for Accessory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Accessory: {}, {} reps", self.exercise, self.reps)
    }
}

/// Pick one of the core accessories with a rep count in `reps`.
pub fn pick_accessory(random: &mut impl RandomSource, reps: RangeInclusive<u32>) -> Accessory {
    let exercise = ACCESSORIES[random.index(ACCESSORIES.len())];
    Accessory {
        exercise: ExerciseName::from_static(exercise),
        reps: Reps(random.between(reps)),
    }
}
