use std::collections::BTreeMap;

use crate::{ExerciseName, Intensity, IntensityError, Reps, RepsError, volume::DAYS_PER_WEEK};

/// Prescription for one day of the week.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayTarget {
    pub intensity: Intensity,
    pub reps: Reps,
}

/// Intensity and rep target for each training day of a week.
#[derive(Debug, Clone, PartialEq)]
pub struct UndulationScheme([DayTarget; DAYS_PER_WEEK]);

impl UndulationScheme {
    /// Heavy, light and moderate day.
    pub const DEFAULT: UndulationScheme =
        UndulationScheme::constant([(0.85, 5), (0.70, 10), (0.75, 8)]);
    const LOW_REP: UndulationScheme =
        UndulationScheme::constant([(0.85, 3), (0.70, 6), (0.75, 5)]);
    const HIGH_REP: UndulationScheme =
        UndulationScheme::constant([(0.75, 8), (0.60, 15), (0.65, 12)]);

    pub fn new(days: [(f64, u32); DAYS_PER_WEEK]) -> Result<Self, SchemeError> {
        let mut targets = Self::DEFAULT.0;
        for (target, (intensity, reps)) in targets.iter_mut().zip(days) {
            *target = DayTarget {
                intensity: Intensity::new(intensity)?,
                reps: Reps::new(reps)?,
            };
        }
        Ok(Self(targets))
    }

    const fn constant(days: [(f64, u32); DAYS_PER_WEEK]) -> Self {
        Self([
            DayTarget {
                intensity: Intensity(days[0].0),
                reps: Reps(days[0].1),
            },
            DayTarget {
                intensity: Intensity(days[1].0),
                reps: Reps(days[1].1),
            },
            DayTarget {
                intensity: Intensity(days[2].0),
                reps: Reps(days[2].1),
            },
        ])
    }

    /// Target of a training day, counted from 1.
    #[must_use]
    pub fn day(&self, day: usize) -> Option<DayTarget> {
        day.checked_sub(1).and_then(|i| self.0.get(i)).copied()
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SchemeError {
    #[error(transparent)]
    Intensity(#[from] IntensityError),
    #[error(transparent)]
    Reps(#[from] RepsError),
    #[error("Week multipliers must not be empty")]
    NoWeekMultipliers,
    #[error("Week multipliers must be in the range 0.5 to 1.5 ({0})")]
    WeekMultiplierOutOfRange(f64),
}

/// Intensity factors applied week by week, repeating once exhausted.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekMultipliers(Vec<f64>);

impl WeekMultipliers {
    pub fn new(factors: Vec<f64>) -> Result<Self, SchemeError> {
        if factors.is_empty() {
            return Err(SchemeError::NoWeekMultipliers);
        }

        if let Some(factor) = factors.iter().find(|f| !(0.5..=1.5).contains(*f)) {
            return Err(SchemeError::WeekMultiplierOutOfRange(*factor));
        }

        Ok(Self(factors))
    }

    /// Factor of a week, counted from 0.
    #[must_use]
    pub fn factor(&self, week: usize) -> f64 {
        self.0[week % self.0.len()]
    }
}

/// Schemes of all exercises, optionally varied from week to week.
#[derive(Debug, Clone, PartialEq)]
pub struct Undulation {
    schemes: BTreeMap<ExerciseName, UndulationScheme>,
    week_multipliers: Option<WeekMultipliers>,
    bodyweight_max_reps: Option<Reps>,
}

impl Default for Undulation {
    fn default() -> Self {
        let low_rep = ["deadlift", "romanian deadlift"];
        let high_rep = ["leg press", "goblet squat", "hack squat", "lat pulldown", "dumbbell row"];
        let schemes = low_rep
            .into_iter()
            .map(|name| (ExerciseName::from_static(name), UndulationScheme::LOW_REP))
            .chain(
                high_rep
                    .into_iter()
                    .map(|name| (ExerciseName::from_static(name), UndulationScheme::HIGH_REP)),
            )
            .collect();
        Self {
            schemes,
            week_multipliers: None,
            bodyweight_max_reps: None,
        }
    }
}

impl Undulation {
    #[must_use]
    pub fn with_scheme(mut self, exercise: ExerciseName, scheme: UndulationScheme) -> Self {
        self.schemes.insert(exercise, scheme);
        self
    }

    #[must_use]
    pub fn with_week_multipliers(mut self, week_multipliers: WeekMultipliers) -> Self {
        self.week_multipliers = Some(week_multipliers);
        self
    }

    /// Derive rep targets of bodyweight exercises from the maximum number of reps.
    #[must_use]
    pub fn with_bodyweight_max_reps(mut self, max_reps: Reps) -> Self {
        self.bodyweight_max_reps = Some(max_reps);
        self
    }

    #[must_use]
    pub fn bodyweight_max_reps(&self) -> Option<Reps> {
        self.bodyweight_max_reps
    }

    #[must_use]
    pub fn scheme(&self, exercise: &ExerciseName) -> &UndulationScheme {
        self.schemes
            .get(exercise)
            .unwrap_or(&UndulationScheme::DEFAULT)
    }

    /// Target of an exercise in a given week (from 0) and day (from 1).
    #[must_use]
    pub fn target(&self, exercise: &ExerciseName, week: usize, day: usize) -> Option<DayTarget> {
        let target = self.scheme(exercise).day(day)?;
        Some(match &self.week_multipliers {
            Some(multipliers) => DayTarget {
                intensity: target.intensity.scaled(multipliers.factor(week)),
                reps: target.reps,
            },
            None => target,
        })
    }
}
