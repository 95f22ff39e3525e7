use derive_more::{AsRef, Display};

/// Name of an exercise.
///
/// Names are compared case-insensitively by storing them lowercased, so
/// `"Back Squat"` from user input matches the catalog entry `"back squat"`.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExerciseName(String);

impl ExerciseName {
    pub fn new(name: &str) -> Result<Self, NameError> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(NameError::Empty);
        }

        let len = trimmed_name.chars().count();

        if len > 64 {
            return Err(NameError::TooLong(len));
        }

        Ok(ExerciseName(trimmed_name.to_lowercase()))
    }

    /// Names from the static catalog, which are known to be valid.
    pub(crate) fn from_static(name: &'static str) -> Self {
        ExerciseName(name.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for ExerciseName {
    type Error = NameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        ExerciseName::new(value)
    }
}

impl PartialEq<&str> for ExerciseName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,
    #[error("Name must be 64 characters or fewer ({0} > 64)")]
    TooLong(usize),
}
