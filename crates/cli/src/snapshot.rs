use std::{collections::BTreeMap, fs, path::Path, str::FromStr};

use anyhow::Context;
use periodize_domain::{
    Category, ExerciseName, Form, FormError, Intensity, IntensityError, MaxLifts, NameError,
    PlanRequest, Reps, RepsError, SchemeError, SubstitutionError, Substitutions, Undulation,
    Weight, WeightError, WeekMultipliers, WeeklySets,
};

use crate::settings::Settings;

const MAX_WEEKS: u32 = 52;

/// Inputs collected from the athlete for a single plan.
#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Snapshot {
    pub exercises: Vec<String>,
    #[serde(default)]
    pub max_lifts: BTreeMap<String, f32>,
    #[serde(default)]
    pub weekly_sets: BTreeMap<String, u32>,
    pub fatigue: f32,
    #[serde(default)]
    pub fitness: Option<f32>,
    #[serde(default)]
    pub substitutions: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub alternative_max_lifts: BTreeMap<String, f32>,
    #[serde(default)]
    pub bodyweight_max_reps: Option<u32>,
    #[serde(default)]
    pub weeks: Option<u32>,
}

impl Snapshot {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read input from {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse input in {}", path.display()))
    }

    pub fn into_request(self, settings: &Settings) -> Result<PlanRequest, SnapshotError> {
        let exercises = self
            .exercises
            .iter()
            .map(|e| name(e))
            .collect::<Result<Vec<_>, _>>()?;

        let mut max_lifts = parse_max_lifts(&self.max_lifts)?;
        max_lifts.merge(parse_max_lifts(&self.alternative_max_lifts)?);

        let weekly_sets = self
            .weekly_sets
            .iter()
            .map(|(e, sets)| -> Result<_, SnapshotError> { Ok((name(e)?, *sets)) })
            .collect::<Result<WeeklySets, SnapshotError>>()?;

        let form = Form::new(
            self.fatigue,
            self.fitness,
            settings.form_mode.into(),
            settings.readiness_scale.into(),
        )?;

        let mut undulation = Undulation::default();
        if let Some(factors) = &settings.week_multipliers {
            undulation = undulation.with_week_multipliers(WeekMultipliers::new(factors.clone())?);
        }
        if let Some(max_reps) = self.bodyweight_max_reps {
            undulation = undulation.with_bodyweight_max_reps(Reps::new(max_reps)?);
        }

        let mut substitutions =
            Substitutions::new().with_intensity(Intensity::new(settings.substitution_intensity)?);
        for (category, alternatives) in &self.substitutions {
            let category = Category::from_str(category)
                .map_err(|_| SnapshotError::UnknownCategory(category.clone()))?;
            let alternatives = alternatives
                .iter()
                .map(|a| name(a))
                .collect::<Result<Vec<_>, _>>()?;
            substitutions.choose(category, alternatives)?;
        }

        let [min_reps, max_reps] = settings.accessory_reps;
        if min_reps == 0 || min_reps > max_reps || Reps::new(max_reps).is_err() {
            return Err(SnapshotError::InvalidAccessoryReps(min_reps, max_reps));
        }

        let weeks = self.weeks.unwrap_or(settings.weeks);
        if !(1..=MAX_WEEKS).contains(&weeks) {
            return Err(SnapshotError::InvalidWeeks(weeks));
        }

        Ok(PlanRequest {
            form,
            weeks,
            undulation,
            substitutions,
            accessory_reps: min_reps..=max_reps,
            ..PlanRequest::new(exercises, max_lifts, weekly_sets)
        })
    }
}

fn name(value: &str) -> Result<ExerciseName, SnapshotError> {
    ExerciseName::new(value).map_err(|source| SnapshotError::InvalidName {
        name: value.to_string(),
        source,
    })
}

fn parse_max_lifts(values: &BTreeMap<String, f32>) -> Result<MaxLifts, SnapshotError> {
    values
        .iter()
        .map(|(exercise, weight)| -> Result<_, SnapshotError> {
            let weight = Weight::new(*weight).map_err(|source| SnapshotError::InvalidMaxLift {
                exercise: exercise.clone(),
                source,
            })?;
            Ok((name(exercise)?, weight))
        })
        .collect()
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SnapshotError {
    #[error("invalid exercise name {name:?}: {source}")]
    InvalidName { name: String, source: NameError },
    #[error("invalid max lift of {exercise}: {source}")]
    InvalidMaxLift {
        exercise: String,
        source: WeightError,
    },
    #[error("unknown category {0:?}")]
    UnknownCategory(String),
    #[error("invalid accessory rep range {0} to {1}")]
    InvalidAccessoryReps(u32, u32),
    #[error("number of weeks must be in the range 1 to {MAX_WEEKS} ({0})")]
    InvalidWeeks(u32),
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Scheme(#[from] SchemeError),
    #[error(transparent)]
    Intensity(#[from] IntensityError),
    #[error(transparent)]
    Reps(#[from] RepsError),
    #[error(transparent)]
    Substitution(#[from] SubstitutionError),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use periodize_domain::{Load, Plan};

    use super::*;

    const INPUT: &str = r#"{
        "exercises": ["Back Squat", "Bench Press", "Pull-Ups"],
        "max_lifts": {"back squat": 100, "bench press": 80, "pull-ups": 0},
        "weekly_sets": {"back squat": 14, "bench press": 9, "pull-ups": 6},
        "fatigue": 10,
        "fitness": 0,
        "substitutions": {"chest": ["dumbbell press", "machine chest press"]},
        "alternative_max_lifts": {"dumbbell press": 60}
    }"#;

    fn snapshot() -> Snapshot {
        serde_json::from_str(INPUT).unwrap()
    }

    #[test]
    fn test_into_request() {
        let request = snapshot().into_request(&Settings::default()).unwrap();
        let exercise = |value: &str| ExerciseName::new(value).unwrap();

        assert_eq!(
            request.exercises,
            vec![exercise("back squat"), exercise("bench press"), exercise("pull-ups")]
        );
        assert_eq!(request.weeks, 4);
        assert_eq!(request.form, Form::from(10.0));
        assert_eq!(
            request.max_lifts.get(&exercise("dumbbell press")),
            Some(Weight::new(60.0).unwrap())
        );
        assert_eq!(
            request.substitutions.substitute(Category::Chest),
            Some(&exercise("dumbbell press"))
        );
        assert_eq!(request.accessory_reps, 6..=10);
    }

    #[test]
    fn test_into_request_generates_plan() {
        let plan = Plan::generate(snapshot().into_request(&Settings::default()).unwrap()).unwrap();
        assert_eq!(plan.program().len(), 12);
        assert_eq!(
            plan.weekly_sets()
                .get(&ExerciseName::new("back squat").unwrap()),
            4
        );
        assert_eq!(
            plan.program().days()[0]
                .get(&ExerciseName::new("pull-ups").unwrap())
                .unwrap()
                .load,
            Load::Bodyweight
        );
    }

    #[test]
    fn test_into_request_weeks_override() {
        let snapshot = Snapshot {
            weeks: Some(6),
            ..snapshot()
        };
        assert_eq!(snapshot.into_request(&Settings::default()).unwrap().weeks, 6);
    }

    #[rstest]
    #[case(
        Snapshot { fatigue: 12.0, ..snapshot() },
        SnapshotError::Form(FormError::FatigueOutOfRange(periodize_domain::ReadinessScale::TenPoint))
    )]
    #[case(
        Snapshot { exercises: vec![String::from(" ")], ..snapshot() },
        SnapshotError::InvalidName { name: String::from(" "), source: NameError::Empty }
    )]
    #[case(
        Snapshot { max_lifts: BTreeMap::from([(String::from("deadlift"), -5.0)]), ..snapshot() },
        SnapshotError::InvalidMaxLift { exercise: String::from("deadlift"), source: WeightError::OutOfRange }
    )]
    #[case(
        Snapshot { substitutions: BTreeMap::from([(String::from("arms"), vec![])]), ..snapshot() },
        SnapshotError::UnknownCategory(String::from("arms"))
    )]
    #[case(
        Snapshot {
            substitutions: BTreeMap::from([(String::from("legs"), vec![String::from("dumbbell press")])]),
            ..snapshot()
        },
        SnapshotError::Substitution(SubstitutionError::NotAnAlternative {
            category: Category::Legs,
            exercise: ExerciseName::new("dumbbell press").unwrap()
        })
    )]
    fn test_into_request_invalid(#[case] snapshot: Snapshot, #[case] expected: SnapshotError) {
        assert_eq!(
            snapshot.into_request(&Settings::default()).unwrap_err(),
            expected
        );
    }

    #[test]
    fn test_into_request_invalid_settings() {
        let settings = Settings {
            week_multipliers: Some(vec![]),
            ..Settings::default()
        };
        assert_eq!(
            snapshot().into_request(&settings).unwrap_err(),
            SnapshotError::Scheme(SchemeError::NoWeekMultipliers)
        );

        let settings = Settings {
            accessory_reps: [10, 6],
            ..Settings::default()
        };
        assert_eq!(
            snapshot().into_request(&settings).unwrap_err(),
            SnapshotError::InvalidAccessoryReps(10, 6)
        );

        let settings = Settings {
            accessory_reps: [6, 1000],
            ..Settings::default()
        };
        assert_eq!(
            snapshot().into_request(&settings).unwrap_err(),
            SnapshotError::InvalidAccessoryReps(6, 1000)
        );
    }

    #[rstest]
    #[case(Some(0), SnapshotError::InvalidWeeks(0))]
    #[case(Some(53), SnapshotError::InvalidWeeks(53))]
    #[case(Some(4_000_000_000), SnapshotError::InvalidWeeks(4_000_000_000))]
    fn test_into_request_invalid_weeks(#[case] weeks: Option<u32>, #[case] expected: SnapshotError) {
        let snapshot = Snapshot {
            weeks,
            ..snapshot()
        };
        assert_eq!(
            snapshot.into_request(&Settings::default()).unwrap_err(),
            expected
        );
    }

    #[test]
    fn test_into_request_weeks_from_settings() {
        let settings = Settings {
            weeks: 52,
            ..Settings::default()
        };
        assert_eq!(snapshot().into_request(&settings).unwrap().weeks, 52);
    }

    #[test]
    fn test_snapshot_rejects_negative_sets() {
        assert!(
            serde_json::from_str::<Snapshot>(
                r#"{"exercises": [], "weekly_sets": {"deadlift": -1}, "fatigue": 5}"#
            )
            .is_err()
        );
    }
}
