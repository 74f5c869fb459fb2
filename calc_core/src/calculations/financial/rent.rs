//! # Rent Affordability
//!
//! Affordable monthly rent as a share of monthly income (30% by default,
//! configurable through [`CalculatorSettings::rent_share_percent`]).

use serde::{Deserialize, Serialize};

use crate::equations::finance::MONTHS_PER_YEAR;
use crate::errors::{CalcError, CalcResult};
use crate::format::round_currency;
use crate::settings::CalculatorSettings;
use crate::validation::{require_finite_result, require_non_negative, RawFields};

/// Period the entered income covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncomePeriod {
    #[default]
    Monthly,
    Annual,
}

impl IncomePeriod {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" | "month" => Some(IncomePeriod::Monthly),
            "annual" | "annually" | "yearly" | "year" => Some(IncomePeriod::Annual),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentInput {
    pub income: f64,
    #[serde(default)]
    pub period: IncomePeriod,
    /// Share of monthly income for rent, in percent
    pub rent_share_percent: f64,
}

impl RentInput {
    /// Parse from raw form fields: `income`, optional `period` and
    /// `rent_share_percent` (default from settings).
    pub fn from_fields(fields: &RawFields, settings: &CalculatorSettings) -> CalcResult<Self> {
        let input = RentInput {
            income: fields.number("income")?,
            period: fields.choice("period", IncomePeriod::default(), "monthly, annual", IncomePeriod::parse)?,
            rent_share_percent: fields.number_or("rent_share_percent", settings.rent_share_percent)?,
        };
        input.validate()?;
        Ok(input)
    }

    pub fn validate(&self) -> CalcResult<()> {
        require_non_negative("income", self.income)?;
        if !(self.rent_share_percent > 0.0 && self.rent_share_percent <= 100.0) {
            return Err(CalcError::invalid_input(
                "rent_share_percent",
                self.rent_share_percent.to_string(),
                "Share must be greater than 0 and at most 100 percent",
            ));
        }
        Ok(())
    }

    pub fn monthly_income(&self) -> f64 {
        match self.period {
            IncomePeriod::Monthly => self.income,
            IncomePeriod::Annual => self.income / MONTHS_PER_YEAR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentResult {
    pub monthly_income: f64,
    pub affordable_rent: f64,
}

pub fn calculate(input: &RentInput) -> CalcResult<RentResult> {
    input.validate()?;

    let monthly_income = input.monthly_income();
    let affordable_rent = require_finite_result("affordable_rent", monthly_income * input.rent_share_percent / 100.0)?;

    Ok(RentResult {
        monthly_income: round_currency(monthly_income),
        affordable_rent: round_currency(affordable_rent),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annual_income_default_share() {
        let fields = RawFields::new().with("income", "60000").with("period", "annual");
        let input = RentInput::from_fields(&fields, &CalculatorSettings::default()).unwrap();
        let result = calculate(&input).unwrap();
        assert_eq!(result.monthly_income, 5000.0);
        assert_eq!(result.affordable_rent, 1500.0);
    }

    #[test]
    fn test_custom_share() {
        let input = RentInput {
            income: 4000.0,
            period: IncomePeriod::Monthly,
            rent_share_percent: 25.0,
        };
        assert_eq!(calculate(&input).unwrap().affordable_rent, 1000.0);
    }

    #[test]
    fn test_settings_share() {
        let settings = CalculatorSettings {
            rent_share_percent: 40.0,
            ..CalculatorSettings::default()
        };
        let fields = RawFields::new().with("income", "3000");
        let input = RentInput::from_fields(&fields, &settings).unwrap();
        assert_eq!(calculate(&input).unwrap().affordable_rent, 1200.0);
    }

    #[test]
    fn test_invalid_share() {
        let input = RentInput {
            income: 4000.0,
            period: IncomePeriod::Monthly,
            rent_share_percent: 0.0,
        };
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_unknown_period() {
        let fields = RawFields::new().with("income", "3000").with("period", "fortnightly");
        assert_eq!(
            RentInput::from_fields(&fields, &CalculatorSettings::default()).unwrap_err().error_code(),
            "PARSE_ERROR"
        );
    }
}
