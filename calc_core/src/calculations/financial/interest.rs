//! # Simple & Compound Interest
//!
//! - Simple interest: `I = P · (rate%/100) · t`
//! - Compound interest: `A = P · (1 + r/k)^(k·t)`, optionally with a fixed
//!   contribution at the end of every month

use serde::{Deserialize, Serialize};

use crate::equations::finance::{compound_amount, simple_interest, MONTHS_PER_YEAR};
use crate::errors::{CalcError, CalcResult};
use crate::format::round_currency;
use crate::validation::{require_finite_result, require_non_negative, RawFields};

// ============================================================================
// Simple Interest
// ============================================================================

/// Input parameters for simple interest.
///
/// `time` is in the same unit the rate is quoted for (years for an annual rate).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleInterestInput {
    pub principal: f64,
    pub rate_percent: f64,
    pub time: f64,
}

impl SimpleInterestInput {
    /// Parse from raw form fields: `principal`, `rate_percent`, `time`.
    pub fn from_fields(fields: &RawFields) -> CalcResult<Self> {
        let input = SimpleInterestInput {
            principal: fields.number("principal")?,
            rate_percent: fields.number("rate_percent")?,
            time: fields.number("time")?,
        };
        input.validate()?;
        Ok(input)
    }

    /// All three inputs must be ≥ 0.
    pub fn validate(&self) -> CalcResult<()> {
        require_non_negative("principal", self.principal)?;
        require_non_negative("rate_percent", self.rate_percent)?;
        require_non_negative("time", self.time)?;
        Ok(())
    }
}

/// Results from a simple interest calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleInterestResult {
    pub interest: f64,
    pub total_amount: f64,
}

/// Calculate simple interest.
pub fn calculate_simple(input: &SimpleInterestInput) -> CalcResult<SimpleInterestResult> {
    input.validate()?;

    let interest = simple_interest(input.principal, input.rate_percent / 100.0, input.time);
    let total_amount = require_finite_result("total_amount", input.principal + interest)?;

    Ok(SimpleInterestResult {
        interest: round_currency(interest),
        total_amount: round_currency(total_amount),
    })
}

// ============================================================================
// Compound Interest
// ============================================================================

/// How often interest is credited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Compounding {
    Annually,
    SemiAnnually,
    Quarterly,
    #[default]
    Monthly,
    Daily,
}

impl Compounding {
    /// Compounding periods per year
    pub fn periods_per_year(self) -> f64 {
        match self {
            Compounding::Annually => 1.0,
            Compounding::SemiAnnually => 2.0,
            Compounding::Quarterly => 4.0,
            Compounding::Monthly => 12.0,
            Compounding::Daily => 365.0,
        }
    }

    /// Parse from a user-facing name
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "annually" | "yearly" | "1" => Some(Compounding::Annually),
            "semi-annually" | "semiannually" | "2" => Some(Compounding::SemiAnnually),
            "quarterly" | "4" => Some(Compounding::Quarterly),
            "monthly" | "12" => Some(Compounding::Monthly),
            "daily" | "365" => Some(Compounding::Daily),
            _ => None,
        }
    }
}

/// Input parameters for compound interest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundInterestInput {
    pub principal: f64,
    pub annual_rate_percent: f64,
    /// Whole or fractional years
    pub years: f64,
    #[serde(default)]
    pub compounding: Compounding,
    /// Deposit added at the end of every month
    #[serde(default)]
    pub monthly_contribution: f64,
}

impl CompoundInterestInput {
    /// Parse from raw form fields: `principal`, `annual_rate_percent`,
    /// `years`, optional `compounding` (default monthly) and
    /// `monthly_contribution` (default 0).
    pub fn from_fields(fields: &RawFields) -> CalcResult<Self> {
        let input = CompoundInterestInput {
            principal: fields.number("principal")?,
            annual_rate_percent: fields.number("annual_rate_percent")?,
            years: fields.number("years")?,
            compounding: fields.choice(
                "compounding",
                Compounding::default(),
                "annually, semi-annually, quarterly, monthly, daily",
                Compounding::parse,
            )?,
            monthly_contribution: fields.number_or("monthly_contribution", 0.0)?,
        };
        input.validate()?;
        Ok(input)
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_non_negative("principal", self.principal)?;
        require_non_negative("annual_rate_percent", self.annual_rate_percent)?;
        require_non_negative("years", self.years)?;
        require_non_negative("monthly_contribution", self.monthly_contribution)?;
        if self.years > 200.0 {
            return Err(CalcError::invalid_input(
                "years",
                self.years.to_string(),
                "Horizon is limited to 200 years",
            ));
        }
        Ok(())
    }
}

/// Results from a compound interest calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundInterestResult {
    pub final_amount: f64,
    /// Principal plus all monthly contributions
    pub total_contributions: f64,
    pub interest_earned: f64,
}

/// Calculate compound growth.
///
/// Contributions are simulated month by month: each month's balance grows
/// by the effective monthly rate equivalent to the chosen compounding, then
/// the contribution is added.
pub fn calculate_compound(input: &CompoundInterestInput) -> CalcResult<CompoundInterestResult> {
    input.validate()?;

    let rate = input.annual_rate_percent / 100.0;
    let k = input.compounding.periods_per_year();
    let lump_sum = compound_amount(input.principal, rate, k, input.years);

    let months = (input.years * MONTHS_PER_YEAR).floor() as u32;
    let monthly_growth = (1.0 + rate / k).powf(k / MONTHS_PER_YEAR);
    let mut contributions_value = 0.0;
    for _ in 0..months {
        contributions_value = contributions_value * monthly_growth + input.monthly_contribution;
    }
    // Grow the contribution pot over any trailing partial month
    let leftover_years = input.years - months as f64 / MONTHS_PER_YEAR;
    contributions_value *= (1.0 + rate / k).powf(k * leftover_years);

    let total_contributions = require_finite_result(
        "total_contributions",
        input.principal + input.monthly_contribution * months as f64,
    )?;
    let final_amount = require_finite_result("final_amount", lump_sum + contributions_value)?;

    Ok(CompoundInterestResult {
        final_amount: round_currency(final_amount),
        total_contributions: round_currency(total_contributions),
        interest_earned: round_currency(final_amount - total_contributions),
    })
}
