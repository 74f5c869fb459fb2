//! # Running Pace
//!
//! Pace (time per km or mile) and average speed from a distance and a
//! finishing time.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::format::{format_clock, round_currency};
use crate::settings::CalculatorSettings;
use crate::units::DistanceUnit;
use crate::validation::{require_finite_result, require_non_negative, require_positive, RawFields};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaceInput {
    pub distance: f64,
    #[serde(default)]
    pub unit: DistanceUnit,
    #[serde(default)]
    pub hours: f64,
    #[serde(default)]
    pub minutes: f64,
    #[serde(default)]
    pub seconds: f64,
}

impl PaceInput {
    /// Fields: `distance`, optional `unit` (default from settings),
    /// `hours`, `minutes`, `seconds` (blank = 0).
    pub fn from_fields(fields: &RawFields, settings: &CalculatorSettings) -> CalcResult<Self> {
        let input = PaceInput {
            distance: fields.number("distance")?,
            unit: fields.choice("unit", settings.distance_unit, "km, mi", DistanceUnit::parse)?,
            hours: fields.number_or("hours", 0.0)?,
            minutes: fields.number_or("minutes", 0.0)?,
            seconds: fields.number_or("seconds", 0.0)?,
        };
        input.validate()?;
        Ok(input)
    }

    pub fn validate(&self) -> CalcResult<()> {
        require_positive("distance", self.distance)?;
        require_non_negative("hours", self.hours)?;
        require_non_negative("minutes", self.minutes)?;
        require_non_negative("seconds", self.seconds)?;
        if self.total_seconds() <= 0.0 {
            return Err(CalcError::invalid_input("seconds", "0", "Total time must be greater than zero"));
        }
        Ok(())
    }

    pub fn total_seconds(&self) -> f64 {
        self.hours * 3600.0 + self.minutes * 60.0 + self.seconds
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaceResult {
    /// Seconds per `unit`
    pub pace_seconds: f64,
    /// `m:ss` (or `h:mm:ss`) per `unit`
    pub pace: String,
    pub unit: DistanceUnit,
    /// Distance units per hour
    pub speed_per_hour: f64,
    /// Pace expressed per the other unit
    pub alternate_pace: String,
    pub alternate_unit: DistanceUnit,
}

pub fn calculate(input: &PaceInput) -> CalcResult<PaceResult> {
    input.validate()?;

    let total = input.total_seconds();
    let pace_seconds = require_finite_result("pace_seconds", total / input.distance)?;
    let speed_per_hour = require_finite_result("speed_per_hour", input.distance / (total / 3600.0))?;
    let alternate_unit = input.unit.other();
    let alternate_distance = input.unit.convert(input.distance, alternate_unit);
    let alternate_seconds = require_finite_result("alternate_pace", total / alternate_distance)?;

    Ok(PaceResult {
        pace_seconds: round_currency(pace_seconds),
        pace: format_clock(pace_seconds),
        unit: input.unit,
        speed_per_hour: round_currency(speed_per_hour),
        alternate_pace: format_clock(alternate_seconds),
        alternate_unit,
    })
}
