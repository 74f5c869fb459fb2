//! # Ratio & Proportion
//!
//! Two operations on ratios:
//!
//! - **Solve**: find X in A:B = C:X, so X = B·C / A (A ≠ 0).
//! - **Simplify**: reduce A:B by their greatest common divisor. Only
//!   positive whole numbers can be simplified.

use serde::{Deserialize, Serialize};

use crate::equations::algebra::gcd;
use crate::errors::{CalcError, CalcResult};
use crate::format::round_ratio;
use crate::validation::{require_finite, require_finite_result, require_non_zero, RawFields};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RatioInput {
    /// A:B = C:X
    SolveForX { a: f64, b: f64, c: f64 },
    /// A:B in lowest terms
    Simplify { a: u64, b: u64 },
}

impl RatioInput {
    /// `mode` is `solve` (default, fields `a`, `b`, `c`) or `simplify`
    /// (fields `a`, `b`).
    pub fn from_fields(fields: &RawFields) -> CalcResult<Self> {
        let simplify = fields.choice("mode", false, "solve, simplify", |s| {
            match s.trim().to_ascii_lowercase().as_str() {
                "solve" | "proportion" => Some(false),
                "simplify" | "reduce" => Some(true),
                _ => None,
            }
        })?;

        let input = if simplify {
            RatioInput::Simplify {
                a: fields.whole_number("a")?,
                b: fields.whole_number("b")?,
            }
        } else {
            RatioInput::SolveForX {
                a: fields.number("a")?,
                b: fields.number("b")?,
                c: fields.number("c")?,
            }
        };
        input.validate()?;
        Ok(input)
    }

    pub fn validate(&self) -> CalcResult<()> {
        match *self {
            RatioInput::SolveForX { a, b, c } => {
                require_non_zero("a", a)?;
                require_finite("b", b)?;
                require_finite("c", c)?;
            }
            RatioInput::Simplify { a, b } => {
                for (name, value) in [("a", a), ("b", b)] {
                    if value == 0 {
                        return Err(CalcError::invalid_input(name, "0", "Must be a positive whole number"));
                    }
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RatioResult {
    SolveForX { x: f64 },
    Simplify { a: u64, b: u64, divisor: u64, text: String },
}

pub fn calculate(input: &RatioInput) -> CalcResult<RatioResult> {
    input.validate()?;

    let result = match *input {
        RatioInput::SolveForX { a, b, c } => RatioResult::SolveForX {
            x: round_ratio(require_finite_result("x", b * c / a)?),
        },
        RatioInput::Simplify { a, b } => {
            let divisor = gcd(a, b);
            let (a, b) = (a / divisor, b / divisor);
            RatioResult::Simplify {
                a,
                b,
                divisor,
                text: format!("{}:{}", a, b),
            }
        }
    };
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_for_x() {
        let result = calculate(&RatioInput::SolveForX { a: 2.0, b: 3.0, c: 8.0 }).unwrap();
        assert_eq!(result, RatioResult::SolveForX { x: 12.0 });

        let result = calculate(&RatioInput::SolveForX { a: 3.0, b: 1.0, c: 1.0 }).unwrap();
        assert_eq!(result, RatioResult::SolveForX { x: 0.3333 });
    }

    #[test]
    fn test_overflowing_x_rejected() {
        let err = calculate(&RatioInput::SolveForX { a: 1e-300, b: 1e200, c: 1e200 }).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert_eq!(err.field(), Some("x"));
    }

    #[test]
    fn test_zero_a_rejected() {
        let err = calculate(&RatioInput::SolveForX { a: 0.0, b: 3.0, c: 8.0 }).unwrap_err();
        assert_eq!(err.field(), Some("a"));
    }

    #[test]
    fn test_simplify() {
        let result = calculate(&RatioInput::Simplify { a: 12, b: 18 }).unwrap();
        assert_eq!(
            result,
            RatioResult::Simplify {
                a: 2,
                b: 3,
                divisor: 6,
                text: "2:3".to_string()
            }
        );
    }

    #[test]
    fn test_simplify_from_fields() {
        let fields = RawFields::new().with("mode", "simplify").with("a", "1920").with("b", "1080");
        let input = RatioInput::from_fields(&fields).unwrap();
        match calculate(&input).unwrap() {
            RatioResult::Simplify { text, .. } => assert_eq!(text, "16:9"),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_simplify_rejects_non_integers() {
        let fields = RawFields::new().with("mode", "simplify").with("a", "1.5").with("b", "3");
        assert_eq!(RatioInput::from_fields(&fields).unwrap_err().field(), Some("a"));

        let fields = RawFields::new().with("mode", "simplify").with("a", "0").with("b", "3");
        assert_eq!(RatioInput::from_fields(&fields).unwrap_err().error_code(), "INVALID_INPUT");
    }
}
