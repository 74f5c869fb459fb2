//! # Body Mass Index
//!
//! BMI = kg / m², classified by the WHO adult cut-offs.

use serde::{Deserialize, Serialize};

use super::unit_system_field;
use crate::equations::health::bmi;
use crate::errors::CalcResult;
use crate::format::round_currency;
use crate::settings::CalculatorSettings;
use crate::units::UnitSystem;
use crate::validation::{require_finite_result, require_positive, RawFields};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiInput {
    /// Weight in kg (metric) or lb (imperial)
    pub weight: f64,
    /// Height in cm (metric) or in (imperial)
    pub height: f64,
    #[serde(default)]
    pub unit_system: UnitSystem,
}

impl BmiInput {
    pub fn from_fields(fields: &RawFields, settings: &CalculatorSettings) -> CalcResult<Self> {
        let input = BmiInput {
            weight: fields.number("weight")?,
            height: fields.number("height")?,
            unit_system: unit_system_field(fields, settings)?,
        };
        input.validate()?;
        Ok(input)
    }

    pub fn validate(&self) -> CalcResult<()> {
        require_positive("weight", self.weight)?;
        require_positive("height", self.height)?;
        Ok(())
    }
}

/// WHO adult BMI classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    pub bmi: f64,
    pub category: BmiCategory,
}

pub fn calculate(input: &BmiInput) -> CalcResult<BmiResult> {
    input.validate()?;

    let weight_kg = input.unit_system.weight_to_kg(input.weight).0;
    let height_cm = input.unit_system.length_to_cm(input.height).0;
    let value = require_finite_result("bmi", bmi(weight_kg, height_cm))?;

    Ok(BmiResult {
        bmi: round_currency(value),
        category: BmiCategory::from_bmi(value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_bmi() {
        let input = BmiInput {
            weight: 70.0,
            height: 175.0,
            unit_system: UnitSystem::Metric,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.bmi, 22.86);
        assert_eq!(result.category, BmiCategory::Normal);
    }

    #[test]
    fn test_imperial_bmi() {
        // 154 lb, 69 in → 22.74
        let input = BmiInput {
            weight: 154.0,
            height: 69.0,
            unit_system: UnitSystem::Imperial,
        };
        let result = calculate(&input).unwrap();
        assert!((result.bmi - 22.74).abs() < 0.01);
    }

    #[test]
    fn test_categories() {
        assert_eq!(BmiCategory::from_bmi(18.49), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_overflowing_bmi_rejected() {
        let input = BmiInput {
            weight: 1e308,
            height: 1.0,
            unit_system: UnitSystem::Metric,
        };
        assert_eq!(calculate(&input).unwrap_err().field(), Some("bmi"));
    }

    #[test]
    fn test_zero_height_rejected() {
        let fields = RawFields::new().with("weight", "70").with("height", "0");
        let err = BmiInput::from_fields(&fields, &CalculatorSettings::default()).unwrap_err();
        assert_eq!(err.field(), Some("height"));
    }
}
