use std::collections::BTreeMap;

use log::debug;
use strum::{Display, EnumString};

use crate::{ExerciseName, catalog::VOLUME_PRIORITY};

pub const DAYS_PER_WEEK: usize = 3;

/// Divide a weekly set target across `N` training days.
///
/// The first `total % N` days receive one additional set, so the result sums to
/// `total` and no two days differ by more than one set.
#[must_use]
pub fn split<const N: usize>(total: u32) -> [u32; N] {
    const { assert!(N > 0) };
    #[allow(clippy::cast_possible_truncation)]
    let days = N as u32;
    let base = total / days;
    let remainder = (total % days) as usize;
    let mut result = [base; N];
    for sets in result.iter_mut().take(remainder) {
        *sets += 1;
    }
    result
}

/// Weekly set target per exercise. Exercises without an entry have zero sets.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WeeklySets(BTreeMap<ExerciseName, u32>);

impl WeeklySets {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, exercise: &ExerciseName) -> u32 {
        self.0.get(exercise).copied().unwrap_or_default()
    }

    pub fn set(&mut self, exercise: ExerciseName, sets: u32) {
        self.0.insert(exercise, sets);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ExerciseName, u32)> {
        self.0.iter().map(|(name, sets)| (name, *sets))
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }
}

impl FromIterator<(ExerciseName, u32)> for WeeklySets {
    fn from_iter<T: IntoIterator<Item = (ExerciseName, u32)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Clone, Copy, Debug, Default, Display, EnumString, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum FormMode {
    #[default]
    FatigueMinusFitness,
    FatigueOnly,
}

/// Range of the fatigue and fitness inputs.
#[derive(Clone, Copy, Debug, Default, Display, EnumString, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum ReadinessScale {
    /// 1 to 10
    #[default]
    TenPoint,
    /// 0 to 100
    Percent,
}

impl ReadinessScale {
    #[must_use]
    pub fn bounds(self) -> (f32, f32) {
        match self {
            ReadinessScale::TenPoint => (1.0, 10.0),
            ReadinessScale::Percent => (0.0, 100.0),
        }
    }

    fn check_fatigue(self, value: f32) -> bool {
        let (min, max) = self.bounds();
        (min..=max).contains(&value)
    }

    /// Zero fitness is accepted on every scale.
    fn check_fitness(self, value: f32) -> bool {
        let (_, max) = self.bounds();
        (0.0..=max).contains(&value)
    }
}

/// Readiness score driving the volume adjustment. Positive values call for less volume.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Form(f32);

impl Form {
    /// A missing fitness value counts as zero.
    pub fn new(
        fatigue: f32,
        fitness: Option<f32>,
        mode: FormMode,
        scale: ReadinessScale,
    ) -> Result<Self, FormError> {
        if !scale.check_fatigue(fatigue) {
            return Err(FormError::FatigueOutOfRange(scale));
        }

        match mode {
            FormMode::FatigueOnly => Ok(Self(fatigue)),
            FormMode::FatigueMinusFitness => {
                if let Some(fitness) = fitness
                    && !scale.check_fitness(fitness)
                {
                    return Err(FormError::FitnessOutOfRange(scale));
                }
                Ok(Self(fatigue - fitness.unwrap_or_default()))
            }
        }
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Number of weekly sets to remove.
    #[must_use]
    pub fn budget(self) -> u32 {
        if self.0 <= 0.0 {
            return 0;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let budget = self.0.floor() as u32;
        budget
    }
}

impl From<f32> for Form {
    fn from(value: f32) -> Self {
        Self(value)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum FormError {
    #[error("Fatigue must be in the range {} to {}", .0.bounds().0, .0.bounds().1)]
    FatigueOutOfRange(ReadinessScale),
    #[error("Fitness must be in the range 0 to {}", .0.bounds().1)]
    FitnessOutOfRange(ReadinessScale),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    pub exercise: ExerciseName,
    pub removed: u32,
}

/// Reduce the weekly sets of the compound movements in priority order.
///
/// The budget is `floor(form)` sets. Each movement gives up as many sets as it has,
/// up to the remaining budget. Movements without an entry are skipped. Nothing
/// changes if the form is not positive.
pub fn adjust(weekly_sets: &mut WeeklySets, form: Form) -> Vec<Reduction> {
    let mut budget = form.budget();
    let mut reductions = vec![];

    for exercise in VOLUME_PRIORITY {
        if budget == 0 {
            break;
        }

        let exercise = ExerciseName::from_static(exercise);
        let current = weekly_sets.get(&exercise);
        let removed = budget.min(current);

        if removed == 0 {
            continue;
        }

        debug!("reducing weekly sets of {exercise} from {current} by {removed}");
        weekly_sets.set(exercise.clone(), current - removed);
        budget -= removed;
        reductions.push(Reduction { exercise, removed });
    }

    reductions
}
