#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod accessory;
pub mod catalog;
mod name;
mod plan;
mod program;
mod progression;
mod scheme;
mod substitution;
mod training;
pub mod volume;

pub use accessory::{Accessory, RandomSource, RngSource, pick_accessory};
pub use catalog::Category;
pub use name::{ExerciseName, NameError};
pub use plan::{Plan, PlanError, PlanRequest, ProgramView, TodayView};
pub use program::{DayProgram, FullProgram, MaxLifts, Prescription, ProgramError, build};
pub use progression::{Cursor, ProgressionError};
pub use scheme::{DayTarget, SchemeError, Undulation, UndulationScheme, WeekMultipliers};
pub use substitution::{SubstitutionError, Substitutions};
pub use training::{Intensity, IntensityError, Load, Reps, RepsError, Weight, WeightError};
pub use volume::{Form, FormError, FormMode, ReadinessScale, Reduction, WeeklySets, adjust, split};
