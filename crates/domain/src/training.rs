use std::{fmt, ops::Mul};

use derive_more::{Display, Into};

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reps(pub(crate) u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, RepsError> {
        if !(0..1000).contains(&value) {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<u32>() {
            Ok(parsed_value) => Reps::new(parsed_value),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

impl Mul<Intensity> for Reps {
    type Output = Reps;

    /// Scale a rep maximum by an intensity, never going below a single rep.
    fn mul(self, rhs: Intensity) -> Self::Output {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let reps = (f64::from(self.0) * rhs.0).round() as u32;
        Reps(reps.max(1))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be in the range 0 to 999")]
    OutOfRange,
    #[error("Reps must be an integer")]
    ParseError,
}

/// A weight in kilograms with a resolution of 0.1 kg.
#[derive(Debug, Default, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Weight(f32);

impl Weight {
    pub fn new(value: f32) -> Result<Self, WeightError> {
        if !(0.0..1000.0).contains(&value) {
            return Err(WeightError::OutOfRange);
        }

        if ((value * 10.0).round() - value * 10.0).abs() > 1e-3 {
            return Err(WeightError::InvalidResolution);
        }

        Ok(Self(value))
    }

    /// Weight at the given fraction, rounded to one decimal place.
    ///
    /// Exact halves round away from zero, e.g. 102.5 kg at 70 % is 71.8 kg.
    #[must_use]
    pub fn scaled(self, intensity: Intensity) -> Self {
        let tenths = (f64::from(self.0) * 10.0).round() * intensity.0;
        // Remove the representation error of the product before rounding to whole tenths.
        let tenths = (tenths * 1e6).round() / 1e6;
        #[allow(clippy::cast_possible_truncation)]
        Self((tenths.round() / 10.0) as f32)
    }

    #[must_use]
    pub fn is_bodyweight(self) -> bool {
        self.0 <= 0.0
    }
}

impl TryFrom<&str> for Weight {
    type Error = WeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<f32>() {
            Ok(parsed_value) => Weight::new(parsed_value),
            Err(_) => Err(WeightError::ParseError),
        }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must be in the range 0.0 to 999.9 kg")]
    OutOfRange,
    #[error("Weight must be a multiple of 0.1 kg")]
    InvalidResolution,
    #[error("Weight must be a decimal")]
    ParseError,
}

/// Fraction of the one-rep max.
#[derive(Debug, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Intensity(pub(crate) f64);

impl Intensity {
    pub const SUBSTITUTION: Intensity = Intensity(0.75);

    pub fn new(value: f64) -> Result<Self, IntensityError> {
        if !(value > 0.0 && value <= 1.0) {
            return Err(IntensityError::OutOfRange);
        }

        Ok(Self(value))
    }

    /// Apply a week multiplier. The result may exceed 1.0 for overreaching weeks.
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self(self.0 * factor)
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} %", self.0 * 100.0)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum IntensityError {
    #[error("Intensity must be greater than 0.0 and at most 1.0")]
    OutOfRange,
}

/// Working load of a prescribed set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Load {
    Weight(Weight),
    Bodyweight,
}

impl Load {
    /// Working weight as `round(max_lift × intensity, 1)`.
    ///
    /// A missing or non-positive max lift denotes a bodyweight exercise.
    #[must_use]
    pub fn from_max(max_lift: Option<Weight>, intensity: Intensity) -> Self {
        match max_lift {
            Some(max_lift) if !max_lift.is_bodyweight() => Load::Weight(max_lift.scaled(intensity)),
            _ => Load::Bodyweight,
        }
    }

    #[must_use]
    pub fn is_bodyweight(&self) -> bool {
        matches!(self, Load::Bodyweight)
    }
}

impl fmt::Display for Load {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Load::Weight(weight) => write!(f, "{weight} kg"),
            Load::Bodyweight => write!(f, "Bodyweight"),
        }
    }
}
