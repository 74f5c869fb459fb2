//! # Sales Tax
//!
//! `tax = price × rate`, `total = price + tax`.

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::format::round_currency;
use crate::validation::{require_finite_result, require_non_negative, RawFields};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesTaxInput {
    /// Pre-tax price
    pub price: f64,
    /// Tax rate in percent (8.25 = 8.25%)
    pub tax_rate_percent: f64,
}

impl SalesTaxInput {
    /// Parse from raw form fields: `price`, `tax_rate_percent`.
    pub fn from_fields(fields: &RawFields) -> CalcResult<Self> {
        let input = SalesTaxInput {
            price: fields.number("price")?,
            tax_rate_percent: fields.number("tax_rate_percent")?,
        };
        input.validate()?;
        Ok(input)
    }

    pub fn validate(&self) -> CalcResult<()> {
        require_non_negative("price", self.price)?;
        require_non_negative("tax_rate_percent", self.tax_rate_percent)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesTaxResult {
    pub tax_amount: f64,
    pub total_price: f64,
}

/// Calculate tax and the tax-inclusive total.
pub fn calculate(input: &SalesTaxInput) -> CalcResult<SalesTaxResult> {
    input.validate()?;

    let tax = require_finite_result("tax_amount", input.price * input.tax_rate_percent / 100.0)?;
    let total = require_finite_result("total_price", input.price + tax)?;

    Ok(SalesTaxResult {
        tax_amount: round_currency(tax),
        total_price: round_currency(total),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sales_tax() {
        let input = SalesTaxInput {
            price: 100.0,
            tax_rate_percent: 8.25,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.tax_amount, 8.25);
        assert_eq!(result.total_price, 108.25);
    }

    #[test]
    fn test_zero_rate() {
        let input = SalesTaxInput {
            price: 59.99,
            tax_rate_percent: 0.0,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.tax_amount, 0.0);
        assert_eq!(result.total_price, 59.99);
    }

    #[test]
    fn test_total_overflow_rejected() {
        let input = SalesTaxInput {
            price: 1e308,
            tax_rate_percent: 100.0,
        };
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert_eq!(err.field(), Some("total_price"));
    }

    #[test]
    fn test_negative_price_rejected() {
        let fields = RawFields::new().with("price", "-1").with("tax_rate_percent", "5");
        assert!(SalesTaxInput::from_fields(&fields).is_err());
    }
}
