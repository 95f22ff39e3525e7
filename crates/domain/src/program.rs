use std::{collections::BTreeMap, fmt};

use log::{debug, warn};

use crate::{
    ExerciseName, Load, Reps, Undulation, Weight, WeeklySets,
    volume::{DAYS_PER_WEEK, split},
};

/// One-rep max per exercise. A missing entry or zero denotes a bodyweight exercise.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MaxLifts(BTreeMap<ExerciseName, Weight>);

impl MaxLifts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, exercise: &ExerciseName) -> Option<Weight> {
        self.0.get(exercise).copied()
    }

    pub fn set(&mut self, exercise: ExerciseName, weight: Weight) {
        self.0.insert(exercise, weight);
    }

    /// Add the entries of `other`, replacing existing entries of the same exercise.
    pub fn merge(&mut self, other: MaxLifts) {
        self.0.extend(other.0);
    }
}

impl FromIterator<(ExerciseName, Weight)> for MaxLifts {
    fn from_iter<T: IntoIterator<Item = (ExerciseName, Weight)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prescription {
    pub load: Load,
    pub reps: Reps,
    pub sets: u32,
}

impl fmt::Display for Prescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {} reps, {} sets", self.load, self.reps, self.sets)
    }
}

/// Exercises of a single training day in selection order.
#[derive(Debug, Clone, PartialEq)]
pub struct DayProgram {
    pub week: u32,
    pub day: u32,
    pub entries: Vec<(ExerciseName, Prescription)>,
}

impl DayProgram {
    #[must_use]
    pub fn get(&self, exercise: &ExerciseName) -> Option<&Prescription> {
        self.entries
            .iter()
            .find(|(name, _)| name == exercise)
            .map(|(_, prescription)| prescription)
    }
}

impl fmt::Display for DayProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Week {}, Day {}", self.week, self.day)?;
        for (exercise, prescription) in &self.entries {
            writeln!(f, "  {exercise}: {prescription}")?;
        }
        Ok(())
    }
}

/// All training days of a program, ordered by week and then by day.
#[derive(Debug, Clone, PartialEq)]
pub struct FullProgram(Vec<DayProgram>);

impl FullProgram {
    #[must_use]
    pub fn days(&self) -> &[DayProgram] {
        &self.0
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&DayProgram> {
        self.0.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ProgramError {
    #[error("Number of weeks must be positive")]
    InvalidWeeks,
}

/// Build the program of `weeks` weeks with three training days each.
///
/// The weekly sets of each exercise are split across the days of a week. Intensity
/// and reps follow the undulation of the exercise. Duplicate exercises are
/// prescribed once.
pub fn build(
    exercises: &[ExerciseName],
    max_lifts: &MaxLifts,
    weekly_sets: &WeeklySets,
    weeks: u32,
    undulation: &Undulation,
) -> Result<FullProgram, ProgramError> {
    if weeks == 0 {
        return Err(ProgramError::InvalidWeeks);
    }

    let mut selected: Vec<(&ExerciseName, [u32; DAYS_PER_WEEK])> = vec![];
    for exercise in exercises {
        if selected.iter().any(|(e, _)| *e == exercise) {
            warn!("ignoring duplicate exercise {exercise}");
            continue;
        }
        selected.push((exercise, split::<DAYS_PER_WEEK>(weekly_sets.get(exercise))));
    }

    let mut days = vec![];

    for week in 0..weeks {
        for day in 1..=DAYS_PER_WEEK {
            let entries = selected
                .iter()
                .filter_map(|(exercise, daily_sets)| {
                    let target = undulation.target(exercise, week as usize, day)?;
                    let load = Load::from_max(max_lifts.get(exercise), target.intensity);
                    let reps = match (load, undulation.bodyweight_max_reps()) {
                        (Load::Bodyweight, Some(max_reps)) => max_reps * target.intensity,
                        _ => target.reps,
                    };
                    Some((
                        (*exercise).clone(),
                        Prescription {
                            load,
                            reps,
                            sets: daily_sets[day - 1],
                        },
                    ))
                })
                .collect();
            #[allow(clippy::cast_possible_truncation)]
            days.push(DayProgram {
                week: week + 1,
                day: day as u32,
                entries,
            });
        }
    }

    debug!(
        "built program of {weeks} weeks with {} exercises",
        selected.len()
    );

    Ok(FullProgram(days))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{Intensity, WeekMultipliers};

    use super::*;

    fn name(value: &str) -> ExerciseName {
        ExerciseName::new(value).unwrap()
    }

    fn weight(value: f32) -> Weight {
        Weight::new(value).unwrap()
    }

    fn reps(value: u32) -> Reps {
        Reps::new(value).unwrap()
    }

    static MAX_LIFTS: std::sync::LazyLock<MaxLifts> = std::sync::LazyLock::new(|| {
        MaxLifts::from_iter([
            (name("back squat"), weight(100.0)),
            (name("bench press"), weight(80.0)),
            (name("pull-ups"), weight(0.0)),
        ])
    });

    static WEEKLY_SETS: std::sync::LazyLock<WeeklySets> = std::sync::LazyLock::new(|| {
        WeeklySets::from_iter([
            (name("back squat"), 14),
            (name("bench press"), 9),
            (name("pull-ups"), 4),
        ])
    });

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(4)]
    #[case(8)]
    fn test_build_length_and_order(#[case] weeks: u32) {
        let program = build(
            &[name("back squat"), name("bench press")],
            &MAX_LIFTS,
            &WEEKLY_SETS,
            weeks,
            &Undulation::default(),
        )
        .unwrap();

        assert_eq!(program.len(), weeks as usize * 3);
        let positions = program
            .days()
            .iter()
            .map(|d| (d.week, d.day))
            .collect::<Vec<_>>();
        let expected = (1..=weeks)
            .flat_map(|w| (1..=3).map(move |d| (w, d)))
            .collect::<Vec<_>>();
        assert_eq!(positions, expected);
    }

    #[test]
    fn test_build_zero_weeks() {
        assert_eq!(
            build(
                &[name("back squat")],
                &MAX_LIFTS,
                &WEEKLY_SETS,
                0,
                &Undulation::default()
            ),
            Err(ProgramError::InvalidWeeks)
        );
    }

    #[test]
    fn test_build_prescriptions() {
        let program = build(
            &[name("back squat"), name("pull-ups"), name("bench press")],
            &MAX_LIFTS,
            &WEEKLY_SETS,
            1,
            &Undulation::default(),
        )
        .unwrap();

        assert_eq!(
            program.days()[0],
            DayProgram {
                week: 1,
                day: 1,
                entries: vec![
                    (
                        name("back squat"),
                        Prescription {
                            load: Load::Weight(weight(85.0)),
                            reps: reps(5),
                            sets: 5
                        }
                    ),
                    (
                        name("pull-ups"),
                        Prescription {
                            load: Load::Bodyweight,
                            reps: reps(5),
                            sets: 2
                        }
                    ),
                    (
                        name("bench press"),
                        Prescription {
                            load: Load::Weight(weight(68.0)),
                            reps: reps(5),
                            sets: 3
                        }
                    ),
                ]
            }
        );
        assert_eq!(
            program.days()[1].get(&name("back squat")),
            Some(&Prescription {
                load: Load::Weight(weight(70.0)),
                reps: reps(10),
                sets: 5
            })
        );
        assert_eq!(
            program.days()[2].get(&name("back squat")),
            Some(&Prescription {
                load: Load::Weight(weight(75.0)),
                reps: reps(8),
                sets: 4
            })
        );
        assert_eq!(
            program.days()[2].get(&name("pull-ups")),
            Some(&Prescription {
                load: Load::Bodyweight,
                reps: reps(8),
                sets: 1
            })
        );
    }

    #[test]
    fn test_build_missing_entries() {
        let program = build(
            &[name("goblet squat")],
            &MAX_LIFTS,
            &WEEKLY_SETS,
            1,
            &Undulation::default(),
        )
        .unwrap();

        for day in program.days() {
            let prescription = day.get(&name("goblet squat")).unwrap();
            assert_eq!(prescription.load, Load::Bodyweight);
            assert_eq!(prescription.sets, 0);
        }
    }

    #[test]
    fn test_build_empty_selection() {
        let program = build(&[], &MAX_LIFTS, &WEEKLY_SETS, 2, &Undulation::default()).unwrap();
        assert_eq!(program.len(), 6);
        assert!(program.days().iter().all(|d| d.entries.is_empty()));
    }

    #[test]
    fn test_build_duplicate_exercise() {
        let program = build(
            &[name("back squat"), name("Back Squat")],
            &MAX_LIFTS,
            &WEEKLY_SETS,
            1,
            &Undulation::default(),
        )
        .unwrap();
        assert_eq!(program.days()[0].entries.len(), 1);
    }

    #[test]
    fn test_build_week_multipliers() {
        let undulation = Undulation::default()
            .with_week_multipliers(WeekMultipliers::new(vec![1.0, 0.9]).unwrap());
        let program = build(
            &[name("back squat")],
            &MAX_LIFTS,
            &WEEKLY_SETS,
            3,
            &undulation,
        )
        .unwrap();

        let loads = program
            .days()
            .iter()
            .filter(|d| d.day == 1)
            .map(|d| d.get(&name("back squat")).unwrap().load)
            .collect::<Vec<_>>();
        assert_eq!(
            loads,
            vec![
                Load::Weight(weight(85.0)),
                Load::Weight(weight(76.5)),
                Load::Weight(weight(85.0)),
            ]
        );
    }

    #[test]
    fn test_build_bodyweight_max_reps() {
        let undulation = Undulation::default().with_bodyweight_max_reps(reps(12));
        let program = build(
            &[name("pull-ups"), name("back squat")],
            &MAX_LIFTS,
            &WEEKLY_SETS,
            1,
            &undulation,
        )
        .unwrap();

        let pull_ups = program
            .days()
            .iter()
            .map(|d| d.get(&name("pull-ups")).unwrap().reps)
            .collect::<Vec<_>>();
        assert_eq!(pull_ups, vec![reps(10), reps(8), reps(9)]);
        assert_eq!(
            program.days()[0].get(&name("back squat")).unwrap().reps,
            reps(5)
        );
        assert_eq!(reps(12) * Intensity::new(0.85).unwrap(), reps(10));
    }

    #[test]
    fn test_build_rounds_half_up() {
        let program = build(
            &[name("bench press")],
            &MaxLifts::from_iter([(name("bench press"), weight(102.5))]),
            &WeeklySets::from_iter([(name("bench press"), 3)]),
            1,
            &Undulation::default(),
        )
        .unwrap();
        let loads = program
            .days()
            .iter()
            .map(|d| d.get(&name("bench press")).unwrap().load.to_string())
            .collect::<Vec<_>>();
        assert_eq!(loads, vec!["87.1 kg", "71.8 kg", "76.9 kg"]);
    }

    #[test]
    fn test_day_program_display() {
        let day = DayProgram {
            week: 2,
            day: 3,
            entries: vec![
                (
                    name("back squat"),
                    Prescription {
                        load: Load::Weight(weight(75.0)),
                        reps: reps(8),
                        sets: 4,
                    },
                ),
                (
                    name("pull-ups"),
                    Prescription {
                        load: Load::Bodyweight,
                        reps: reps(8),
                        sets: 1,
                    },
                ),
            ],
        };
        assert_eq!(
            day.to_string(),
            "Week 2, Day 3\n  back squat: 75.0 kg, 8 reps, 4 sets\n  pull-ups: Bodyweight, 8 reps, 1 sets\n"
        );
    }
}
