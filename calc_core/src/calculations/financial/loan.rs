//! # Loan Payment (Amortization)
//!
//! Fixed monthly payment for a fully amortizing loan, plus the
//! month-by-month schedule.
//!
//! A 0% rate is valid: the payment degrades to `principal / months`.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::financial::loan::{LoanInput, calculate};
//!
//! let input = LoanInput {
//!     principal: 10_000.0,
//!     annual_rate_percent: 5.0,
//!     term_months: 60,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.monthly_payment, 188.71);
//! assert_eq!(result.total_payment, 11322.74);
//! assert_eq!(result.total_interest, 1322.74);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::finance::{amortized_payment, monthly_rate, MONTHS_PER_YEAR};
use crate::errors::{CalcError, CalcResult};
use crate::format::round_currency;
use crate::validation::{require_finite_result, require_non_negative, require_positive, RawFields};

/// Longest accepted term (100 years)
pub const MAX_TERM_MONTHS: u32 = 1200;

/// Input parameters for an amortizing loan.
///
/// ## JSON Example
///
/// ```json
/// {
///   "principal": 10000.0,
///   "annual_rate_percent": 5.0,
///   "term_months": 60
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanInput {
    /// Amount borrowed
    pub principal: f64,

    /// Nominal annual interest rate in percent (5.0 = 5%)
    pub annual_rate_percent: f64,

    /// Number of monthly payments
    pub term_months: u32,
}

impl LoanInput {
    /// Parse from raw form fields.
    ///
    /// Fields: `principal`, `annual_rate_percent`, and exactly one of
    /// `term_months` / `term_years`.
    pub fn from_fields(fields: &RawFields) -> CalcResult<Self> {
        let principal = fields.number("principal")?;
        let annual_rate_percent = fields.number("annual_rate_percent")?;

        let term_months = match (fields.optional_number("term_months")?, fields.optional_number("term_years")?) {
            (Some(months), None) => whole_months("term_months", months)?,
            (None, Some(years)) => whole_months("term_years", years * MONTHS_PER_YEAR)?,
            (m, y) => {
                let provided = m.is_some() as usize + y.is_some() as usize;
                return Err(CalcError::field_count(&["term_months", "term_years"], 1, provided));
            }
        };

        let input = LoanInput {
            principal,
            annual_rate_percent,
            term_months,
        };
        input.validate()?;
        Ok(input)
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("principal", self.principal)?;
        require_non_negative("annual_rate_percent", self.annual_rate_percent)?;
        if self.term_months == 0 || self.term_months > MAX_TERM_MONTHS {
            return Err(CalcError::invalid_input(
                "term_months",
                self.term_months.to_string(),
                format!("Term must be between 1 and {} months", MAX_TERM_MONTHS),
            ));
        }
        Ok(())
    }

    /// Monthly decimal rate r = annual% / 100 / 12
    pub fn monthly_rate(&self) -> f64 {
        monthly_rate(self.annual_rate_percent)
    }
}

fn whole_months(field: &str, months: f64) -> CalcResult<u32> {
    let rounded = months.round();
    if (months - rounded).abs() > 1e-9 || rounded < 1.0 || rounded > MAX_TERM_MONTHS as f64 {
        return Err(CalcError::invalid_input(
            field,
            months.to_string(),
            format!("Term must be a whole number of months between 1 and {}", MAX_TERM_MONTHS),
        ));
    }
    Ok(rounded as u32)
}

/// Results from a loan calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanResult {
    /// Fixed monthly payment
    pub monthly_payment: f64,

    /// Sum of all payments
    pub total_payment: f64,

    /// Total interest paid over the life of the loan
    pub total_interest: f64,

    /// Number of monthly payments
    pub term_months: u32,
}

/// One month of an amortization schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// 1-based month number
    pub month: u32,
    /// Payment made this month
    pub payment: f64,
    /// Portion of the payment reducing principal
    pub principal: f64,
    /// Portion of the payment covering interest
    pub interest: f64,
    /// Balance remaining after the payment
    pub balance: f64,
}

/// Calculate the fixed monthly payment.
///
/// Totals are derived from the unrounded payment and rounded last, so
/// `total_payment ≈ monthly_payment * n` within a cent per payment.
pub fn calculate(input: &LoanInput) -> CalcResult<LoanResult> {
    input.validate()?;

    let n = input.term_months as f64;
    let payment = require_finite_result("monthly_payment", amortized_payment(input.principal, input.monthly_rate(), n))?;
    let total_payment = require_finite_result("total_payment", payment * n)?;
    let total_interest = total_payment - input.principal;

    Ok(LoanResult {
        monthly_payment: round_currency(payment),
        total_payment: round_currency(total_payment),
        total_interest: round_currency(total_interest),
        term_months: input.term_months,
    })
}

/// Build the month-by-month amortization schedule.
///
/// The last row absorbs floating-point drift so its balance is exactly 0.
pub fn amortization_schedule(input: &LoanInput) -> CalcResult<Vec<AmortizationRow>> {
    input.validate()?;

    let r = input.monthly_rate();
    let payment = require_finite_result(
        "monthly_payment",
        amortized_payment(input.principal, r, input.term_months as f64),
    )?;
    let mut balance = input.principal;
    let mut rows = Vec::with_capacity(input.term_months as usize);

    for month in 1..=input.term_months {
        let interest = balance * r;
        let (principal_part, paid) = if month == input.term_months {
            (balance, balance + interest)
        } else {
            (payment - interest, payment)
        };
        balance -= principal_part;
        if month == input.term_months {
            balance = 0.0;
        }

        rows.push(AmortizationRow {
            month,
            payment: round_currency(paid),
            principal: round_currency(principal_part),
            interest: round_currency(interest),
            balance: round_currency(balance),
        });
    }

    Ok(rows)
}
