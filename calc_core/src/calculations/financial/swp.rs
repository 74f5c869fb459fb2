//! # Systematic Withdrawal Plan (SWP)
//!
//! How long a corpus lasts under a fixed monthly withdrawal while the
//! remainder keeps earning a monthly return.
//!
//! If the monthly return on the starting corpus (`P·r`) already covers the
//! withdrawal, the corpus never depletes. That is reported as
//! [`Depletion::Never`], a regular result rather than an error.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::financial::swp::{SwpInput, Depletion, calculate};
//!
//! let input = SwpInput {
//!     principal: 1_000_000.0,
//!     monthly_withdrawal: 5_000.0,
//!     annual_return_percent: 12.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!(matches!(result.depletion, Depletion::Never { .. }));
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::finance::{depletion_months, monthly_rate, MONTHS_PER_YEAR};
use crate::errors::CalcResult;
use crate::format::round_currency;
use crate::validation::{require_finite_result, require_non_negative, require_positive, RawFields};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwpInput {
    /// Starting corpus
    pub principal: f64,
    /// Amount withdrawn every month
    pub monthly_withdrawal: f64,
    /// Expected annual return in percent
    pub annual_return_percent: f64,
}

impl SwpInput {
    /// Parse from raw form fields: `principal`, `monthly_withdrawal`,
    /// `annual_return_percent`.
    pub fn from_fields(fields: &RawFields) -> CalcResult<Self> {
        let input = SwpInput {
            principal: fields.number("principal")?,
            monthly_withdrawal: fields.number("monthly_withdrawal")?,
            annual_return_percent: fields.number("annual_return_percent")?,
        };
        input.validate()?;
        Ok(input)
    }

    pub fn validate(&self) -> CalcResult<()> {
        require_positive("principal", self.principal)?;
        require_positive("monthly_withdrawal", self.monthly_withdrawal)?;
        require_non_negative("annual_return_percent", self.annual_return_percent)?;
        Ok(())
    }

    /// Monthly decimal return
    pub fn monthly_rate(&self) -> f64 {
        monthly_rate(self.annual_return_percent)
    }
}

/// Whether and when the corpus runs out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Depletion {
    /// Returns cover the withdrawal; the corpus lasts indefinitely.
    Never {
        /// Monthly return on the starting corpus (P·r)
        monthly_return: f64,
        /// How much the corpus grows in the first month (P·r − W)
        monthly_surplus: f64,
    },
    /// The corpus is exhausted after `total_months`.
    After {
        /// Fractional months until exhaustion
        total_months: f64,
        /// floor(total_months / 12)
        years: u32,
        /// floor(total_months mod 12)
        months: u32,
        /// W · n
        total_withdrawn: f64,
    },
}

impl Depletion {
    pub fn is_infinite(&self) -> bool {
        matches!(self, Depletion::Never { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwpResult {
    pub depletion: Depletion,
}

pub fn calculate(input: &SwpInput) -> CalcResult<SwpResult> {
    input.validate()?;

    let p = input.principal;
    let w = input.monthly_withdrawal;
    let r = input.monthly_rate();

    let depletion = match depletion_months(p, w, r) {
        None => Depletion::Never {
            monthly_return: round_currency(require_finite_result("monthly_return", p * r)?),
            monthly_surplus: round_currency(p * r - w),
        },
        Some(n) => {
            // years and months are split from the reported figure so they agree with it
            let total_months = round_currency(require_finite_result("total_months", n)?);
            Depletion::After {
                total_months,
                years: (total_months / MONTHS_PER_YEAR).floor() as u32,
                months: (total_months % MONTHS_PER_YEAR).floor() as u32,
                total_withdrawn: round_currency(require_finite_result("total_withdrawn", w * n)?),
            }
        }
    };

    Ok(SwpResult { depletion })
}
