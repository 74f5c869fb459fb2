//! # Salary Conversion
//!
//! Converts a pay figure between hourly, weekly, monthly and annual rates.
//! Everything is anchored on the annual figure:
//!
//! ```text
//! annual = hourly × hours_per_week × 52 = weekly × 52 = monthly × 12
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::finance::{MONTHS_PER_YEAR, WEEKS_PER_YEAR};
use crate::errors::{CalcError, CalcResult};
use crate::format::round_currency;
use crate::settings::CalculatorSettings;
use crate::validation::{require_finite_result, require_non_negative, require_positive, RawFields};

/// Pay period a salary figure is quoted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayPeriod {
    Hourly,
    Weekly,
    Monthly,
    Annually,
}

impl PayPeriod {
    pub const ALL: [PayPeriod; 4] = [PayPeriod::Hourly, PayPeriod::Weekly, PayPeriod::Monthly, PayPeriod::Annually];

    /// Field name used in raw form input
    pub fn field_name(self) -> &'static str {
        match self {
            PayPeriod::Hourly => "hourly",
            PayPeriod::Weekly => "weekly",
            PayPeriod::Monthly => "monthly",
            PayPeriod::Annually => "annually",
        }
    }

    /// How many of this period fit in a year
    pub fn periods_per_year(self, hours_per_week: f64) -> f64 {
        match self {
            PayPeriod::Hourly => hours_per_week * WEEKS_PER_YEAR,
            PayPeriod::Weekly => WEEKS_PER_YEAR,
            PayPeriod::Monthly => MONTHS_PER_YEAR,
            PayPeriod::Annually => 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryInput {
    /// Pay amount in `period` units
    pub amount: f64,
    pub period: PayPeriod,
    pub hours_per_week: f64,
}

impl SalaryInput {
    /// Parse from raw form fields.
    ///
    /// Exactly one of `hourly`, `weekly`, `monthly`, `annually` must be
    /// filled in (whichever the user edited). `hours_per_week` defaults to
    /// the settings value.
    pub fn from_fields(fields: &RawFields, settings: &CalculatorSettings) -> CalcResult<Self> {
        let mut provided = Vec::new();
        for period in PayPeriod::ALL {
            if let Some(amount) = fields.optional_number(period.field_name())? {
                provided.push((period, amount));
            }
        }
        let (period, amount) = match provided.as_slice() {
            [single] => *single,
            _ => {
                let names: Vec<&str> = PayPeriod::ALL.iter().map(|p| p.field_name()).collect();
                return Err(CalcError::field_count(&names, 1, provided.len()));
            }
        };

        let input = SalaryInput {
            amount,
            period,
            hours_per_week: fields.number_or("hours_per_week", settings.hours_per_week)?,
        };
        input.validate()?;
        Ok(input)
    }

    pub fn validate(&self) -> CalcResult<()> {
        require_non_negative(self.period.field_name(), self.amount)?;
        require_positive("hours_per_week", self.hours_per_week)?;
        if self.hours_per_week > 168.0 {
            return Err(CalcError::invalid_input(
                "hours_per_week",
                self.hours_per_week.to_string(),
                "A week has only 168 hours",
            ));
        }
        Ok(())
    }
}

/// The same pay expressed in every period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryResult {
    pub hourly: f64,
    pub weekly: f64,
    pub monthly: f64,
    pub annually: f64,
}

pub fn calculate(input: &SalaryInput) -> CalcResult<SalaryResult> {
    input.validate()?;

    let hours = input.hours_per_week;
    let annual = require_finite_result("annually", input.amount * input.period.periods_per_year(hours))?;

    Ok(SalaryResult {
        hourly: round_currency(annual / PayPeriod::Hourly.periods_per_year(hours)),
        weekly: round_currency(annual / WEEKS_PER_YEAR),
        monthly: round_currency(annual / MONTHS_PER_YEAR),
        annually: round_currency(annual),
    })
}
