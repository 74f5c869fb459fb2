//! # Body Fat (U.S. Navy Method)
//!
//! Estimates body fat percentage from height and neck/waist (and hip, for
//! women) circumferences. When weight is given the result also splits it
//! into fat mass and lean mass.

use serde::{Deserialize, Serialize};

use super::{unit_system_field, Sex};
use crate::equations::health::{navy_body_fat_female, navy_body_fat_male};
use crate::errors::{CalcError, CalcResult};
use crate::format::round_currency;
use crate::settings::CalculatorSettings;
use crate::units::UnitSystem;
use crate::validation::{require_finite_result, require_positive, RawFields};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyFatInput {
    pub sex: Sex,
    pub height: f64,
    pub neck: f64,
    pub waist: f64,
    /// Required for women, ignored for men
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hip: Option<f64>,
    /// Optional body weight for fat/lean mass
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default)]
    pub unit_system: UnitSystem,
}

impl BodyFatInput {
    /// Fields: `sex`, `height`, `neck`, `waist`, `hip` (women), optional
    /// `weight` and `unit_system`.
    pub fn from_fields(fields: &RawFields, settings: &CalculatorSettings) -> CalcResult<Self> {
        let input = BodyFatInput {
            sex: Sex::from_fields(fields)?,
            height: fields.number("height")?,
            neck: fields.number("neck")?,
            waist: fields.number("waist")?,
            hip: fields.optional_number("hip")?,
            weight: fields.optional_number("weight")?,
            unit_system: unit_system_field(fields, settings)?,
        };
        input.validate()?;
        Ok(input)
    }

    pub fn validate(&self) -> CalcResult<()> {
        require_positive("height", self.height)?;
        require_positive("neck", self.neck)?;
        require_positive("waist", self.waist)?;
        if let Some(weight) = self.weight {
            require_positive("weight", weight)?;
        }
        match self.sex {
            Sex::Male => {
                if self.waist <= self.neck {
                    return Err(CalcError::invalid_input(
                        "waist",
                        self.waist.to_string(),
                        "Waist must be larger than neck",
                    ));
                }
            }
            Sex::Female => {
                let hip = self.hip.ok_or_else(|| CalcError::missing_field("hip"))?;
                require_positive("hip", hip)?;
                if self.waist + hip <= self.neck {
                    return Err(CalcError::invalid_input(
                        "waist",
                        self.waist.to_string(),
                        "Waist plus hip must be larger than neck",
                    ));
                }
            }
        }
        Ok(())
    }
}

/// American Council on Exercise body fat classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyFatCategory {
    EssentialFat,
    Athletes,
    Fitness,
    Average,
    Obese,
}

impl BodyFatCategory {
    pub fn classify(sex: Sex, percent: f64) -> Self {
        let bounds: [f64; 4] = match sex {
            Sex::Male => [6.0, 14.0, 18.0, 25.0],
            Sex::Female => [14.0, 21.0, 25.0, 32.0],
        };
        if percent < bounds[0] {
            BodyFatCategory::EssentialFat
        } else if percent < bounds[1] {
            BodyFatCategory::Athletes
        } else if percent < bounds[2] {
            BodyFatCategory::Fitness
        } else if percent < bounds[3] {
            BodyFatCategory::Average
        } else {
            BodyFatCategory::Obese
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyFatResult {
    pub body_fat_percent: f64,
    pub category: BodyFatCategory,
    /// In the input's weight unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat_mass: Option<f64>,
    /// In the input's weight unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lean_mass: Option<f64>,
}

pub fn calculate(input: &BodyFatInput) -> CalcResult<BodyFatResult> {
    input.validate()?;

    let to_cm = |v: f64| input.unit_system.length_to_cm(v).0;
    let height = to_cm(input.height);
    let neck = to_cm(input.neck);
    let waist = to_cm(input.waist);

    let percent = match input.sex {
        Sex::Male => navy_body_fat_male(waist, neck, height),
        Sex::Female => {
            let hip = to_cm(input.hip.ok_or_else(|| CalcError::missing_field("hip"))?);
            navy_body_fat_female(waist, hip, neck, height)
        }
    };

    if !percent.is_finite() || percent <= 0.0 || percent >= 100.0 {
        return Err(CalcError::invalid_input(
            "waist",
            input.waist.to_string(),
            "Measurements fall outside the range the Navy formula supports",
        ));
    }

    let fat_mass = input
        .weight
        .map(|w| require_finite_result("fat_mass", w * percent / 100.0))
        .transpose()?;

    Ok(BodyFatResult {
        body_fat_percent: round_currency(percent),
        category: BodyFatCategory::classify(input.sex, percent),
        fat_mass: fat_mass.map(round_currency),
        lean_mass: input.weight.zip(fat_mass).map(|(w, f)| round_currency(w - f)),
    })
}
