//! # Daily Protein Target
//!
//! `protein_g = weight_kg × factor`, where the factor comes from a
//! four-tier activity table:
//!
//! | Tier       | g/kg |
//! |------------|------|
//! | sedentary  | 0.8  |
//! | light      | 1.2  |
//! | moderate   | 1.6  |
//! | intense    | 2.0  |
//!
//! The default tier is `sedentary` (the RDA baseline).

use serde::{Deserialize, Serialize};

use super::unit_system_field;
use crate::errors::CalcResult;
use crate::format::round_currency;
use crate::settings::CalculatorSettings;
use crate::units::UnitSystem;
use crate::validation::{require_finite_result, require_positive, RawFields};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProteinActivity {
    #[default]
    Sedentary,
    Light,
    Moderate,
    Intense,
}

impl ProteinActivity {
    /// Grams of protein per kilogram of body weight
    pub fn grams_per_kg(self) -> f64 {
        match self {
            ProteinActivity::Sedentary => 0.8,
            ProteinActivity::Light => 1.2,
            ProteinActivity::Moderate => 1.6,
            ProteinActivity::Intense => 2.0,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sedentary" => Some(ProteinActivity::Sedentary),
            "light" => Some(ProteinActivity::Light),
            "moderate" => Some(ProteinActivity::Moderate),
            "intense" | "high" | "athlete" => Some(ProteinActivity::Intense),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProteinInput {
    /// kg (metric) or lb (imperial)
    pub weight: f64,
    #[serde(default)]
    pub activity: ProteinActivity,
    #[serde(default)]
    pub unit_system: UnitSystem,
}

impl ProteinInput {
    pub fn from_fields(fields: &RawFields, settings: &CalculatorSettings) -> CalcResult<Self> {
        let input = ProteinInput {
            weight: fields.number("weight")?,
            activity: fields.choice(
                "activity",
                ProteinActivity::default(),
                "sedentary, light, moderate, intense",
                ProteinActivity::parse,
            )?,
            unit_system: unit_system_field(fields, settings)?,
        };
        input.validate()?;
        Ok(input)
    }

    pub fn validate(&self) -> CalcResult<()> {
        require_positive("weight", self.weight)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProteinResult {
    pub protein_grams: f64,
    pub grams_per_kg: f64,
}

pub fn calculate(input: &ProteinInput) -> CalcResult<ProteinResult> {
    input.validate()?;

    let weight_kg = input.unit_system.weight_to_kg(input.weight).0;
    let factor = input.activity.grams_per_kg();

    Ok(ProteinResult {
        protein_grams: round_currency(require_finite_result("protein_grams", weight_kg * factor)?),
        grams_per_kg: factor,
    })
}
