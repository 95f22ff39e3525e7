use std::{fmt, ops::RangeInclusive};

use log::{info, warn};

use crate::{
    Accessory, Cursor, DayProgram, ExerciseName, Form, FullProgram, MaxLifts, ProgramError,
    ProgressionError, RandomSource, Reduction, Substitutions, Undulation, WeeklySets,
    accessory::ACCESSORY_REPS, adjust, build, pick_accessory,
};

/// Everything needed to generate a plan.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    pub exercises: Vec<ExerciseName>,
    /// Max lifts of the selected exercises and of the chosen alternatives.
    pub max_lifts: MaxLifts,
    pub weekly_sets: WeeklySets,
    pub form: Form,
    pub weeks: u32,
    pub undulation: Undulation,
    pub substitutions: Substitutions,
    pub accessory_reps: RangeInclusive<u32>,
}

impl PlanRequest {
    #[must_use]
    pub fn new(exercises: Vec<ExerciseName>, max_lifts: MaxLifts, weekly_sets: WeeklySets) -> Self {
        Self {
            exercises,
            max_lifts,
            weekly_sets,
            form: Form::default(),
            weeks: 4,
            undulation: Undulation::default(),
            substitutions: Substitutions::default(),
            accessory_reps: ACCESSORY_REPS,
        }
    }
}

/// A generated program together with the inputs needed to present it.
#[derive(Debug, Clone)]
pub struct Plan {
    program: FullProgram,
    max_lifts: MaxLifts,
    weekly_sets: WeeklySets,
    reductions: Vec<Reduction>,
    substitutions: Substitutions,
    accessory_reps: RangeInclusive<u32>,
}

impl Plan {
    /// Adjust the weekly sets to the form and build the program.
    ///
    /// The request is consumed, so the adjustment happens exactly once per build.
    pub fn generate(request: PlanRequest) -> Result<Self, PlanError> {
        let PlanRequest {
            exercises,
            max_lifts,
            mut weekly_sets,
            form,
            weeks,
            undulation,
            substitutions,
            accessory_reps,
        } = request;

        let reductions = adjust(&mut weekly_sets, form);
        let program = build(&exercises, &max_lifts, &weekly_sets, weeks, &undulation)?;

        for substitute in substitutions.substitutes() {
            if max_lifts.get(substitute).is_none() {
                warn!("no max lift for {substitute}, prescribing bodyweight");
            }
        }

        info!(
            "generated {} training days, removed {} weekly sets",
            program.len(),
            reductions.iter().map(|r| r.removed).sum::<u32>()
        );

        Ok(Self {
            program,
            max_lifts,
            weekly_sets,
            reductions,
            substitutions,
            accessory_reps,
        })
    }

    #[must_use]
    pub fn program(&self) -> &FullProgram {
        &self.program
    }

    /// Weekly sets after the adjustment.
    #[must_use]
    pub fn weekly_sets(&self) -> &WeeklySets {
        &self.weekly_sets
    }

    #[must_use]
    pub fn reductions(&self) -> &[Reduction] {
        &self.reductions
    }

    /// The upcoming workout with substitutions applied, followed by an accessory.
    pub fn today(
        &self,
        cursor: Cursor,
        random: &mut impl RandomSource,
    ) -> Result<(Cursor, TodayView), PlanError> {
        let (cursor, workout) = cursor.next_workout(&self.program)?;
        Ok((
            cursor,
            TodayView {
                workout: self.substitutions.resolve(workout, &self.max_lifts),
                accessory: pick_accessory(random, self.accessory_reps.clone()),
            },
        ))
    }

    /// All training days with substitutions applied, followed by an accessory.
    #[must_use]
    pub fn full(&self, random: &mut impl RandomSource) -> ProgramView {
        ProgramView {
            days: self
                .substitutions
                .resolve_program(&self.program, &self.max_lifts),
            accessory: pick_accessory(random, self.accessory_reps.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TodayView {
    pub workout: DayProgram,
    pub accessory: Accessory,
}

impl fmt::Display for TodayView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.workout)?;
        writeln!(f, "  {}", self.accessory)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgramView {
    pub days: Vec<DayProgram>,
    pub accessory: Accessory,
}

impl fmt::Display for ProgramView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for day in &self.days {
            writeln!(f, "{day}")?;
        }
        writeln!(f, "{}", self.accessory)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum PlanError {
    #[error(transparent)]
    Program(#[from] ProgramError),
    #[error(transparent)]
    Progression(#[from] ProgressionError),
}
