use std::collections::BTreeMap;

use log::debug;

use crate::{
    Category, DayProgram, ExerciseName, FullProgram, Intensity, Load, MaxLifts, Prescription,
};

/// Alternatives chosen per category.
///
/// Several alternatives may be chosen for a category, but only the first one replaces
/// the primary exercises of that category.
#[derive(Debug, Clone, PartialEq)]
pub struct Substitutions {
    choices: BTreeMap<Category, Vec<ExerciseName>>,
    intensity: Intensity,
}

impl Default for Substitutions {
    fn default() -> Self {
        Self {
            choices: BTreeMap::new(),
            intensity: Intensity::SUBSTITUTION,
        }
    }
}

impl Substitutions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Intensity used for the working weight of substituted exercises.
    #[must_use]
    pub fn with_intensity(mut self, intensity: Intensity) -> Self {
        self.intensity = intensity;
        self
    }

    /// Choose alternatives for a category. An empty list clears the choice.
    pub fn choose(
        &mut self,
        category: Category,
        alternatives: Vec<ExerciseName>,
    ) -> Result<(), SubstitutionError> {
        if let Some(exercise) = alternatives.iter().find(|a| !category.is_alternative(a)) {
            return Err(SubstitutionError::NotAnAlternative {
                category,
                exercise: exercise.clone(),
            });
        }

        if alternatives.is_empty() {
            self.choices.remove(&category);
        } else {
            self.choices.insert(category, alternatives);
        }

        Ok(())
    }

    /// The alternative replacing the primary exercises of a category.
    #[must_use]
    pub fn substitute(&self, category: Category) -> Option<&ExerciseName> {
        self.choices.get(&category).and_then(|a| a.first())
    }

    /// The exercises whose max lifts are needed for the substituted weights.
    pub fn substitutes(&self) -> impl Iterator<Item = &ExerciseName> {
        self.choices.values().filter_map(|a| a.first())
    }

    /// Replace primary exercises by the chosen alternatives.
    ///
    /// The working weight of a replaced exercise is derived from the max lift of the
    /// alternative at a fixed intensity, regardless of the intensity of the day.
    /// Reps and sets are kept. If an exercise ends up more than once on the same day,
    /// its sets are added to its first entry, which keeps its position, load and reps.
    #[must_use]
    pub fn resolve(&self, day: &DayProgram, max_lifts: &MaxLifts) -> DayProgram {
        let mut entries: Vec<(ExerciseName, Prescription)> = Vec::with_capacity(day.entries.len());
        for (exercise, prescription) in &day.entries {
            let (exercise, prescription) =
                match Category::of(exercise).and_then(|c| self.substitute(c)) {
                    Some(substitute) => {
                        debug!("substituting {exercise} with {substitute}");
                        let mut prescription = *prescription;
                        prescription.load =
                            Load::from_max(max_lifts.get(substitute), self.intensity);
                        (substitute, prescription)
                    }
                    None => (exercise, *prescription),
                };
            if let Some((_, existing)) = entries.iter_mut().find(|(e, _)| e == exercise) {
                debug!("merging {} sets of {exercise}", prescription.sets);
                existing.sets += prescription.sets;
            } else {
                entries.push((exercise.clone(), prescription));
            }
        }

        DayProgram {
            week: day.week,
            day: day.day,
            entries,
        }
    }

    #[must_use]
    pub fn resolve_program(&self, program: &FullProgram, max_lifts: &MaxLifts) -> Vec<DayProgram> {
        program
            .days()
            .iter()
            .map(|day| self.resolve(day, max_lifts))
            .collect()
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SubstitutionError {
    #[error("{exercise} is not an alternative for {category}")]
    NotAnAlternative {
        category: Category,
        exercise: ExerciseName,
    },
}
