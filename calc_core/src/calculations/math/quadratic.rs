//! # Quadratic Equation
//!
//! Solves a·x² + b·x + c = 0 for real or complex roots.
//!
//! ## Discriminant
//!
//! D = b² − 4ac
//!
//! - D > 0: two real roots, x = (−b ± √D) / 2a
//! - D = 0: one repeated root, x = −b / 2a
//! - D < 0: complex pair re ± im·i, with re = −b / 2a and
//!   im = √(−D) / 2|a| so the imaginary part is always reported positive
//!
//! The vertex of the parabola is (−b/2a, c − b²/4a).

use serde::{Deserialize, Serialize};

use crate::equations::algebra::discriminant;
use crate::errors::CalcResult;
use crate::format::{format_number, round_ratio};
use crate::validation::{require_finite, require_finite_result, require_non_zero, RawFields};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadraticInput {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl QuadraticInput {
    pub fn from_fields(fields: &RawFields) -> CalcResult<Self> {
        let input = QuadraticInput {
            a: fields.number("a")?,
            b: fields.number("b")?,
            c: fields.number("c")?,
        };
        input.validate()?;
        Ok(input)
    }

    pub fn validate(&self) -> CalcResult<()> {
        require_non_zero("a", self.a)?;
        require_finite("b", self.b)?;
        require_finite("c", self.c)?;
        Ok(())
    }
}

/// Roots of the equation. Complex roots are a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Roots {
    TwoReal { x1: f64, x2: f64 },
    OneReal { x: f64 },
    Complex { real: f64, imaginary: f64, text: String },
}

impl Roots {
    pub fn is_real(&self) -> bool {
        !matches!(self, Roots::Complex { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadraticResult {
    pub discriminant: f64,
    pub roots: Roots,
    pub vertex_x: f64,
    pub vertex_y: f64,
}

pub fn calculate(input: &QuadraticInput) -> CalcResult<QuadraticResult> {
    input.validate()?;

    let QuadraticInput { a, b, c } = *input;
    let d = require_finite_result("discriminant", discriminant(a, b, c))?;
    let two_a = 2.0 * a;

    let roots = if d > 0.0 {
        let sqrt_d = d.sqrt();
        Roots::TwoReal {
            x1: round_ratio(require_finite_result("x1", (-b + sqrt_d) / two_a)?),
            x2: round_ratio(require_finite_result("x2", (-b - sqrt_d) / two_a)?),
        }
    } else if d == 0.0 {
        Roots::OneReal {
            x: round_ratio(require_finite_result("x", -b / two_a)?),
        }
    } else {
        let real = round_ratio(require_finite_result("real", -b / two_a)?);
        let imaginary = round_ratio(require_finite_result("imaginary", (-d).sqrt() / (2.0 * a.abs()))?);
        Roots::Complex {
            real,
            imaginary,
            text: format!("{} ± {}i", format_number(real), format_number(imaginary)),
        }
    };

    Ok(QuadraticResult {
        discriminant: round_ratio(d),
        roots,
        vertex_x: round_ratio(require_finite_result("vertex_x", -b / two_a)?),
        vertex_y: round_ratio(require_finite_result("vertex_y", c - b * b / (4.0 * a))?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(a: f64, b: f64, c: f64) -> QuadraticResult {
        calculate(&QuadraticInput { a, b, c }).unwrap()
    }

    #[test]
    fn test_two_real_roots() {
        let result = solve(1.0, -3.0, 2.0);
        assert_eq!(result.discriminant, 1.0);
        assert_eq!(result.roots, Roots::TwoReal { x1: 2.0, x2: 1.0 });
        assert_eq!(result.vertex_x, 1.5);
        assert_eq!(result.vertex_y, -0.25);
    }

    #[test]
    fn test_repeated_root() {
        let result = solve(1.0, -4.0, 4.0);
        assert_eq!(result.discriminant, 0.0);
        assert_eq!(result.roots, Roots::OneReal { x: 2.0 });
    }

    #[test]
    fn test_complex_roots() {
        let result = solve(1.0, 2.0, 5.0);
        assert_eq!(result.discriminant, -16.0);
        match result.roots {
            Roots::Complex { real, imaginary, ref text } => {
                assert_eq!(real, -1.0);
                assert_eq!(imaginary, 2.0);
                assert_eq!(text, "-1 ± 2i");
            }
            other => panic!("expected complex roots, got {:?}", other),
        }
        assert!(!result.roots.is_real());
    }

    #[test]
    fn test_negative_leading_coefficient_keeps_positive_imaginary() {
        // -x² + 2x - 5 = 0 has the same roots as x² - 2x + 5
        let result = solve(-1.0, 2.0, -5.0);
        match result.roots {
            Roots::Complex { real, imaginary, .. } => {
                assert_eq!(real, 1.0);
                assert_eq!(imaginary, 2.0);
            }
            other => panic!("expected complex roots, got {:?}", other),
        }
    }

    #[test]
    fn test_overflowing_coefficients_rejected() {
        let err = calculate(&QuadraticInput { a: 1.0, b: 1e200, c: 1.0 }).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert_eq!(err.field(), Some("discriminant"));
    }

    #[test]
    fn test_zero_a_rejected() {
        let fields = RawFields::new().with("a", "0").with("b", "2").with("c", "1");
        let err = QuadraticInput::from_fields(&fields).unwrap_err();
        assert_eq!(err.field(), Some("a"));
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_roots_serialization() {
        let json = serde_json::to_string(&Roots::OneReal { x: 2.0 }).unwrap();
        assert_eq!(json, r#"{"kind":"one_real","x":2.0}"#);
    }
}
