//! # Energy Targets
//!
//! All three calculators build on the Mifflin-St Jeor BMR:
//!
//! - **BMR** - basal metabolic rate
//! - **Calories** - BMR × activity multiplier (TDEE) with goal targets
//! - **Carbohydrates** - grams supplying a share of TDEE (4 kcal/g)
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::health::{ActivityLevel, BodyProfile, EnergyInput, Sex};
//! use calc_core::calculations::health::energy::calculate_calories;
//! use calc_core::units::UnitSystem;
//!
//! let input = EnergyInput {
//!     profile: BodyProfile {
//!         weight: 80.0,
//!         height: 180.0,
//!         age_years: 30.0,
//!         sex: Sex::Male,
//!         unit_system: UnitSystem::Metric,
//!     },
//!     activity: ActivityLevel::Sedentary,
//! };
//!
//! let result = calculate_calories(&input).unwrap();
//! assert_eq!(result.bmr, 1780.0);
//! assert_eq!(result.maintenance, 2136.0);
//! ```

use serde::{Deserialize, Serialize};

use super::{ActivityLevel, BodyProfile};
use crate::equations::health::{carb_grams, mifflin_st_jeor};
use crate::errors::{CalcError, CalcResult};
use crate::format::round_currency;
use crate::settings::CalculatorSettings;
use crate::validation::{require_finite_result, RawFields};

/// Recommended carbohydrate share of daily calories (decimal)
pub const CARB_RANGE: (f64, f64) = (0.45, 0.65);

/// Daily kcal adjustment for mild weight loss
pub const MILD_DEFICIT_KCAL: f64 = 250.0;

/// Daily kcal adjustment for weight loss / gain
pub const DEFICIT_KCAL: f64 = 500.0;

/// Body profile plus activity level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyInput {
    #[serde(flatten)]
    pub profile: BodyProfile,
    #[serde(default)]
    pub activity: ActivityLevel,
}

impl EnergyInput {
    /// Parse the body profile fields plus optional `activity`.
    pub fn from_fields(fields: &RawFields, settings: &CalculatorSettings) -> CalcResult<Self> {
        Ok(EnergyInput {
            profile: BodyProfile::from_fields(fields, settings)?,
            activity: ActivityLevel::from_fields(fields)?,
        })
    }

    pub fn validate(&self) -> CalcResult<()> {
        self.profile.validate()
    }

    fn bmr(&self) -> f64 {
        let p = &self.profile;
        mifflin_st_jeor(p.weight_kg(), p.height_cm(), p.age_years, p.sex == super::Sex::Male)
    }

    fn tdee(&self) -> f64 {
        self.bmr() * self.activity.multiplier()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmrResult {
    /// kcal/day at complete rest
    pub bmr: f64,
}

/// Basal metabolic rate. Activity is ignored.
pub fn calculate_bmr(input: &EnergyInput) -> CalcResult<BmrResult> {
    input.validate()?;
    let bmr = require_finite_result("bmr", input.bmr())?;
    if bmr <= 0.0 {
        return Err(CalcError::invalid_input(
            "age_years",
            input.profile.age_years.to_string(),
            "Inputs produce a non-positive metabolic rate",
        ));
    }
    Ok(BmrResult {
        bmr: round_currency(bmr),
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalorieResult {
    pub bmr: f64,
    /// Calories to maintain weight (TDEE)
    pub maintenance: f64,
    /// −250 kcal/day
    pub mild_weight_loss: f64,
    /// −500 kcal/day
    pub weight_loss: f64,
    /// +500 kcal/day
    pub weight_gain: f64,
}

/// Daily calorie needs by goal.
pub fn calculate_calories(input: &EnergyInput) -> CalcResult<CalorieResult> {
    let bmr = calculate_bmr(input)?.bmr;
    let tdee = require_finite_result("maintenance", input.tdee())?;

    Ok(CalorieResult {
        bmr,
        maintenance: round_currency(tdee),
        mild_weight_loss: round_currency(tdee - MILD_DEFICIT_KCAL),
        weight_loss: round_currency(tdee - DEFICIT_KCAL),
        weight_gain: round_currency(tdee + DEFICIT_KCAL),
    })
}

/// Energy input plus the carbohydrate share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarbInput {
    #[serde(flatten)]
    pub energy: EnergyInput,
    /// Share of calories from carbohydrates, in percent
    pub carb_share_percent: f64,
}

impl CarbInput {
    /// Energy fields plus optional `carb_share_percent` (default from settings).
    pub fn from_fields(fields: &RawFields, settings: &CalculatorSettings) -> CalcResult<Self> {
        let input = CarbInput {
            energy: EnergyInput::from_fields(fields, settings)?,
            carb_share_percent: fields.number_or("carb_share_percent", settings.carb_share_percent)?,
        };
        input.validate()?;
        Ok(input)
    }

    pub fn validate(&self) -> CalcResult<()> {
        self.energy.validate()?;
        if !(self.carb_share_percent > 0.0 && self.carb_share_percent <= 100.0) {
            return Err(CalcError::invalid_input(
                "carb_share_percent",
                self.carb_share_percent.to_string(),
                "Share must be greater than 0 and at most 100 percent",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarbResult {
    /// TDEE the target is based on
    pub daily_calories: f64,
    /// Grams per day at the chosen share
    pub carbs_grams: f64,
    /// Grams per day at 45%
    pub range_low_grams: f64,
    /// Grams per day at 65%
    pub range_high_grams: f64,
}

/// Daily carbohydrate target in grams.
pub fn calculate_carbs(input: &CarbInput) -> CalcResult<CarbResult> {
    input.validate()?;
    calculate_bmr(&input.energy)?;
    let tdee = require_finite_result("daily_calories", input.energy.tdee())?;

    Ok(CarbResult {
        daily_calories: round_currency(tdee),
        carbs_grams: round_currency(carb_grams(tdee, input.carb_share_percent / 100.0)),
        range_low_grams: round_currency(carb_grams(tdee, CARB_RANGE.0)),
        range_high_grams: round_currency(carb_grams(tdee, CARB_RANGE.1)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::health::Sex;
    use crate::units::UnitSystem;

    fn test_energy(activity: ActivityLevel) -> EnergyInput {
        EnergyInput {
            profile: BodyProfile {
                weight: 60.0,
                height: 165.0,
                age_years: 25.0,
                sex: Sex::Female,
                unit_system: UnitSystem::Metric,
            },
            activity,
        }
    }

    #[test]
    fn test_bmr_female() {
        // 600 + 1031.25 - 125 - 161
        let result = calculate_bmr(&test_energy(ActivityLevel::Moderate)).unwrap();
        assert_eq!(result.bmr, 1345.25);
    }

    #[test]
    fn test_calorie_targets() {
        let result = calculate_calories(&test_energy(ActivityLevel::Moderate)).unwrap();
        // 1345.25 * 1.55 = 2085.1375
        assert_eq!(result.maintenance, 2085.14);
        assert_eq!(result.weight_loss, 1585.14);
        assert_eq!(result.mild_weight_loss, 1835.14);
        assert_eq!(result.weight_gain, 2585.14);
    }

    #[test]
    fn test_carbs() {
        let input = CarbInput {
            energy: test_energy(ActivityLevel::Sedentary),
            carb_share_percent: 50.0,
        };
        let result = calculate_carbs(&input).unwrap();
        // 1345.25 * 1.2 = 1614.3 kcal → 50% / 4 = 201.79 g
        assert_eq!(result.daily_calories, 1614.3);
        assert_eq!(result.carbs_grams, 201.79);
        assert!(result.range_low_grams < result.carbs_grams);
        assert!(result.range_high_grams > result.carbs_grams);
    }

    #[test]
    fn test_carbs_from_fields_default_share() {
        let fields = RawFields::new()
            .with("weight", "60")
            .with("height", "165")
            .with("age_years", "25")
            .with("sex", "female")
            .with("activity", "sedentary");
        let input = CarbInput::from_fields(&fields, &CalculatorSettings::default()).unwrap();
        assert_eq!(input.carb_share_percent, 50.0);
        assert_eq!(input.energy.activity, ActivityLevel::Sedentary);
    }

    #[test]
    fn test_implausible_profile_rejected() {
        let mut input = test_energy(ActivityLevel::Moderate);
        input.profile.weight = 1.0;
        input.profile.height = 10.0;
        input.profile.age_years = 120.0;
        assert!(calculate_bmr(&input).is_err());
    }

    #[test]
    fn test_flattened_json() {
        let json = r#"{"weight":60,"height":165,"age_years":25,"sex":"female","activity":"very-active"}"#;
        let input: EnergyInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.activity, ActivityLevel::VeryActive);
        assert_eq!(input.profile.unit_system, UnitSystem::Metric);
    }
}
