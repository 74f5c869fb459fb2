//! # Return on Investment
//!
//! Net profit and ROI percentage between an initial and a final value,
//! optionally annualized over a holding period.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::format::round_currency;
use crate::validation::{require_finite, require_finite_result, require_non_zero, require_positive, RawFields};

/// Input parameters for ROI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiInput {
    /// Amount invested
    pub initial_value: f64,

    /// Value at the end of the holding period
    pub final_value: f64,

    /// Holding period in years, for the annualized figure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years: Option<f64>,
}

impl RoiInput {
    /// Parse from raw form fields: `initial_value`, `final_value`, optional `years`.
    pub fn from_fields(fields: &RawFields) -> CalcResult<Self> {
        let input = RoiInput {
            initial_value: fields.number("initial_value")?,
            final_value: fields.number("final_value")?,
            years: fields.optional_number("years")?,
        };
        input.validate()?;
        Ok(input)
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_non_zero("initial_value", self.initial_value)?;
        require_finite("final_value", self.final_value)?;
        if let Some(years) = self.years {
            require_positive("years", years)?;
            if self.final_value / self.initial_value <= 0.0 {
                return Err(CalcError::invalid_input(
                    "final_value",
                    self.final_value.to_string(),
                    "Annualized ROI needs initial and final values of the same sign",
                ));
            }
        }
        Ok(())
    }
}

/// Results from an ROI calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiResult {
    /// final − initial
    pub net_profit: f64,

    /// net_profit / initial × 100
    pub roi_percent: f64,

    /// Compound annual growth rate in percent, when `years` was given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annualized_roi_percent: Option<f64>,
}

/// Calculate ROI.
pub fn calculate(input: &RoiInput) -> CalcResult<RoiResult> {
    input.validate()?;

    let net_profit = require_finite_result("net_profit", input.final_value - input.initial_value)?;
    let roi_percent = require_finite_result("roi_percent", net_profit / input.initial_value * 100.0)?;
    let annualized = input
        .years
        .map(|years| {
            let growth = (input.final_value / input.initial_value).powf(1.0 / years);
            require_finite_result("annualized_roi_percent", (growth - 1.0) * 100.0)
        })
        .transpose()?;

    Ok(RoiResult {
        net_profit: round_currency(net_profit),
        roi_percent: round_currency(roi_percent),
        annualized_roi_percent: annualized.map(round_currency),
    })
}
