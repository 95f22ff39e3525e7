use std::{fs, path::Path};

use anyhow::Context;
use periodize_domain::{FormMode, ReadinessScale};

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub weeks: u32,
    pub form_mode: FormModeSetting,
    pub readiness_scale: ReadinessScaleSetting,
    pub week_multipliers: Option<Vec<f64>>,
    pub substitution_intensity: f64,
    pub accessory_reps: [u32; 2],
}

impl Settings {
    /// Read the settings from a JSON file, or use the defaults if no file is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Settings::default());
        };
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse settings in {}", path.display()))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            weeks: 4,
            form_mode: FormModeSetting::FatigueMinusFitness,
            readiness_scale: ReadinessScaleSetting::TenPoint,
            week_multipliers: None,
            substitution_intensity: 0.75,
            accessory_reps: [6, 10],
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum FormModeSetting {
    FatigueMinusFitness,
    FatigueOnly,
}

impl From<FormModeSetting> for FormMode {
    fn from(value: FormModeSetting) -> Self {
        match value {
            FormModeSetting::FatigueMinusFitness => FormMode::FatigueMinusFitness,
            FormModeSetting::FatigueOnly => FormMode::FatigueOnly,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessScaleSetting {
    TenPoint,
    Percent,
}

impl From<ReadinessScaleSetting> for ReadinessScale {
    fn from(value: ReadinessScaleSetting) -> Self {
        match value {
            ReadinessScaleSetting::TenPoint => ReadinessScale::TenPoint,
            ReadinessScaleSetting::Percent => ReadinessScale::Percent,
        }
    }
}
