//! # Calculator Settings
//!
//! Side-band context shared by all calculators: display currency, unit
//! system, angle mode and the documented defaults some calculators fall
//! back to when a field is left blank (hours per week, rent share, carb
//! share).
//!
//! Settings are plain data. They are passed by reference into
//! `from_fields` parsers and never stored anywhere.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::settings::CalculatorSettings;
//! use calc_core::units::Currency;
//!
//! let settings = CalculatorSettings::from_json(r#"{ "currency": "EUR" }"#).unwrap();
//! assert_eq!(settings.currency, Currency::Eur);
//! assert_eq!(settings.hours_per_week, 40.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{AngleUnit, Currency, DistanceUnit, UnitSystem};

/// Default working hours per week for salary conversion
pub const DEFAULT_HOURS_PER_WEEK: f64 = 40.0;

/// Default share of monthly income spent on rent (percent)
pub const DEFAULT_RENT_SHARE_PERCENT: f64 = 30.0;

/// Default share of daily calories from carbohydrates (percent)
pub const DEFAULT_CARB_SHARE_PERCENT: f64 = 50.0;

/// Global calculator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorSettings {
    /// Currency used when formatting monetary results
    pub currency: Currency,

    /// Unit system for weight and body measurements
    pub unit_system: UnitSystem,

    /// Unit for pace and distance inputs
    pub distance_unit: DistanceUnit,

    /// Angle mode for the expression evaluator
    pub angle_unit: AngleUnit,

    /// Working hours per week used by salary conversion
    pub hours_per_week: f64,

    /// Share of income considered affordable for rent (percent)
    pub rent_share_percent: f64,

    /// Share of calories from carbohydrates (percent)
    pub carb_share_percent: f64,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        CalculatorSettings {
            currency: Currency::default(),
            unit_system: UnitSystem::default(),
            distance_unit: DistanceUnit::default(),
            angle_unit: AngleUnit::default(),
            hours_per_week: DEFAULT_HOURS_PER_WEEK,
            rent_share_percent: DEFAULT_RENT_SHARE_PERCENT,
            carb_share_percent: DEFAULT_CARB_SHARE_PERCENT,
        }
    }
}

impl CalculatorSettings {
    /// Parse settings from JSON. Missing keys take their defaults.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let settings: CalculatorSettings = serde_json::from_str(json)
            .map_err(|e| CalcError::parse_error("settings", json, e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check that numeric defaults are usable.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.hours_per_week.is_finite() || self.hours_per_week <= 0.0 || self.hours_per_week > 168.0 {
            return Err(CalcError::invalid_input(
                "hours_per_week",
                self.hours_per_week.to_string(),
                "Hours per week must be between 0 and 168",
            ));
        }
        if !self.rent_share_percent.is_finite() || self.rent_share_percent <= 0.0 || self.rent_share_percent > 100.0 {
            return Err(CalcError::invalid_input(
                "rent_share_percent",
                self.rent_share_percent.to_string(),
                "Rent share must be greater than 0 and at most 100 percent",
            ));
        }
        if !self.carb_share_percent.is_finite() || self.carb_share_percent <= 0.0 || self.carb_share_percent > 100.0 {
            return Err(CalcError::invalid_input(
                "carb_share_percent",
                self.carb_share_percent.to_string(),
                "Carb share must be greater than 0 and at most 100 percent",
            ));
        }
        Ok(())
    }
}
