use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::ExerciseName;

/// Muscle group under which primary exercises and their alternatives are listed.
#[derive(Clone, Copy, Debug, Display, EnumIter, EnumString, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Category {
    Legs,
    Chest,
    Back,
    Shoulders,
}

impl Category {
    #[must_use]
    pub fn primary(self) -> &'static [&'static str] {
        match self {
            Category::Legs => &["back squat", "front squat", "deadlift", "romanian deadlift"],
            Category::Chest => &["bench press", "incline bench press"],
            Category::Back => &["pull-ups", "barbell row"],
            Category::Shoulders => &["shoulder press"],
        }
    }

    #[must_use]
    pub fn alternatives(self) -> &'static [&'static str] {
        match self {
            Category::Legs => &["leg press", "goblet squat", "hack squat"],
            Category::Chest => &["dumbbell press", "machine chest press"],
            Category::Back => &["lat pulldown", "dumbbell row"],
            Category::Shoulders => &["dumbbell shoulder press", "landmine press"],
        }
    }

    /// The category whose primary list contains `name`.
    #[must_use]
    pub fn of(name: &ExerciseName) -> Option<Category> {
        Category::iter().find(|category| category.is_primary(name))
    }

    #[must_use]
    pub fn is_primary(self, name: &ExerciseName) -> bool {
        self.primary().iter().any(|p| name == p)
    }

    #[must_use]
    pub fn is_alternative(self, name: &ExerciseName) -> bool {
        self.alternatives().iter().any(|a| name == a)
    }
}

/// Compound movements whose weekly volume is reduced first when readiness is low.
pub const VOLUME_PRIORITY: [&str; 6] = [
    "back squat",
    "deadlift",
    "front squat",
    "bench press",
    "shoulder press",
    "pull-ups",
];

/// Core exercises appended once per view.
pub const ACCESSORIES: [&str; 2] = ["hanging leg raise", "ab wheel rollout"];

/// All exercises known to the catalog, primaries before alternatives.
pub fn exercises() -> impl Iterator<Item = ExerciseName> {
    Category::iter()
        .flat_map(|c| c.primary().iter().chain(c.alternatives()))
        .map(|name| ExerciseName::from_static(*name))
}
