//! # Health & Fitness Calculators
//!
//! Body-composition, energy and nutrition targets, running pace and
//! pregnancy dating. Weight and length inputs follow the
//! [`UnitSystem`] selection and are converted to metric before any
//! formula runs. Outputs are rounded to 2 decimals.
//!
//! - [`bmi`] - body mass index with WHO category
//! - [`energy`] - BMR, daily calories, carbohydrate target
//! - [`body_fat`] - U.S. Navy circumference method
//! - [`protein`] - daily protein target
//! - [`pace`] - running pace and speed
//! - [`pregnancy`] - due date by Naegele's rule

pub mod bmi;
pub mod body_fat;
pub mod energy;
pub mod pace;
pub mod pregnancy;
pub mod protein;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::settings::CalculatorSettings;
use crate::units::UnitSystem;
use crate::validation::{require_positive, RawFields};

pub use bmi::{BmiCategory, BmiInput, BmiResult};
pub use body_fat::{BodyFatCategory, BodyFatInput, BodyFatResult};
pub use energy::{BmrResult, CalorieResult, CarbInput, CarbResult, EnergyInput};
pub use pace::{PaceInput, PaceResult};
pub use pregnancy::{PregnancyInput, PregnancyResult};
pub use protein::{ProteinActivity, ProteinInput, ProteinResult};

/// Biological sex, as used by the sex-specific formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Some(Sex::Male),
            "female" | "f" => Some(Sex::Female),
            _ => None,
        }
    }

    /// Read the required `sex` field
    pub(crate) fn from_fields(fields: &RawFields) -> CalcResult<Self> {
        let raw = fields.text("sex")?;
        Sex::parse(raw).ok_or_else(|| CalcError::parse_error("sex", raw, "Expected one of: male, female"))
    }
}

/// Daily activity level for total energy expenditure.
///
/// | Level        | Multiplier |
/// |--------------|-----------|
/// | sedentary    | 1.2       |
/// | light        | 1.375     |
/// | moderate     | 1.55      |
/// | active       | 1.725     |
/// | very-active  | 1.9       |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    #[default]
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().replace(['_', ' '], "-").as_str() {
            "sedentary" => Some(ActivityLevel::Sedentary),
            "light" | "lightly-active" => Some(ActivityLevel::Light),
            "moderate" | "moderately-active" => Some(ActivityLevel::Moderate),
            "active" => Some(ActivityLevel::Active),
            "very-active" | "extra-active" | "extra" => Some(ActivityLevel::VeryActive),
            _ => None,
        }
    }

    /// Read the optional `activity` field (default moderate)
    pub(crate) fn from_fields(fields: &RawFields) -> CalcResult<Self> {
        fields.choice(
            "activity",
            ActivityLevel::default(),
            "sedentary, light, moderate, active, very-active",
            ActivityLevel::parse,
        )
    }
}

/// Weight, height, age and sex shared by the energy calculators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyProfile {
    /// Weight in kg (metric) or lb (imperial)
    pub weight: f64,
    /// Height in cm (metric) or in (imperial)
    pub height: f64,
    pub age_years: f64,
    pub sex: Sex,
    #[serde(default)]
    pub unit_system: UnitSystem,
}

impl BodyProfile {
    /// Parse `weight`, `height`, `age_years`, `sex` and optional `unit_system`.
    pub fn from_fields(fields: &RawFields, settings: &CalculatorSettings) -> CalcResult<Self> {
        let profile = BodyProfile {
            weight: fields.number("weight")?,
            height: fields.number("height")?,
            age_years: fields.number("age_years")?,
            sex: Sex::from_fields(fields)?,
            unit_system: unit_system_field(fields, settings)?,
        };
        profile.validate()?;
        Ok(profile)
    }

    pub fn validate(&self) -> CalcResult<()> {
        require_positive("weight", self.weight)?;
        require_positive("height", self.height)?;
        require_positive("age_years", self.age_years)?;
        Ok(())
    }

    pub fn weight_kg(&self) -> f64 {
        self.unit_system.weight_to_kg(self.weight).0
    }

    pub fn height_cm(&self) -> f64 {
        self.unit_system.length_to_cm(self.height).0
    }
}

/// Read the optional `unit_system` field, defaulting to the settings value
pub(crate) fn unit_system_field(fields: &RawFields, settings: &CalculatorSettings) -> CalcResult<UnitSystem> {
    fields.choice("unit_system", settings.unit_system, "metric, imperial", UnitSystem::parse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_multipliers() {
        assert_eq!(ActivityLevel::default().multiplier(), 1.55);
        assert_eq!(ActivityLevel::parse("Very Active"), Some(ActivityLevel::VeryActive));
        assert_eq!(ActivityLevel::parse("lazy"), None);
        assert_eq!(ActivityLevel::parse("very"), None);
        assert_eq!(ActivityLevel::parse("active"), Some(ActivityLevel::Active));
    }

    #[test]
    fn test_body_profile_imperial() {
        let fields = RawFields::new()
            .with("weight", "176.37")
            .with("height", "70")
            .with("age_years", "30")
            .with("sex", "M")
            .with("unit_system", "imperial");
        let profile = BodyProfile::from_fields(&fields, &CalculatorSettings::default()).unwrap();
        assert!((profile.weight_kg() - 80.0).abs() < 0.01);
        assert!((profile.height_cm() - 177.8).abs() < 1e-9);
    }

    #[test]
    fn test_body_profile_missing_sex() {
        let fields = RawFields::new()
            .with("weight", "80")
            .with("height", "180")
            .with("age_years", "30");
        let err = BodyProfile::from_fields(&fields, &CalculatorSettings::default()).unwrap_err();
        assert_eq!(err, CalcError::missing_field("sex"));
    }
}
