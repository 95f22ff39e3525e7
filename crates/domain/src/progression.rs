use log::debug;

use crate::{DayProgram, FullProgram, volume::DAYS_PER_WEEK};

/// Position of the upcoming workout.
///
/// The cursor is independent of the program it reads from, so a regenerated program
/// can be read with a fresh cursor or with an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    week: u32,
    day: u32,
}

impl Default for Cursor {
    fn default() -> Self {
        Self { week: 1, day: 1 }
    }
}

impl Cursor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Week and day of the workout returned by the next read.
    #[must_use]
    pub fn position(self) -> (u32, u32) {
        self.normalized().into()
    }

    /// Fetch the upcoming workout and return the advanced cursor alongside it.
    ///
    /// Reading past the last day of the program fails instead of wrapping around.
    pub fn next_workout(
        self,
        program: &FullProgram,
    ) -> Result<(Cursor, &DayProgram), ProgressionError> {
        let Cursor { week, day } = self.normalized();
        let index = (week as usize - 1) * DAYS_PER_WEEK + (day as usize - 1);
        let workout = program.get(index).ok_or(ProgressionError::OutOfRange {
            index,
            len: program.len(),
        })?;
        debug!("reading workout of week {week}, day {day}");
        Ok((Cursor { week, day: day + 1 }, workout))
    }

    fn normalized(self) -> Self {
        #[allow(clippy::cast_possible_truncation)]
        let days_per_week = DAYS_PER_WEEK as u32;
        if self.day > days_per_week {
            Self {
                week: self.week + 1,
                day: 1,
            }
        } else {
            self
        }
    }
}

impl From<Cursor> for (u32, u32) {
    fn from(value: Cursor) -> Self {
        (value.week, value.day)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ProgressionError {
    #[error("No workout at position {index} of a program with {len} days")]
    OutOfRange { index: usize, len: usize },
}
