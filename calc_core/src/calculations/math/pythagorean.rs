//! # Pythagorean Theorem
//!
//! Given exactly two sides of a right triangle, solve the third.
//! `a` and `b` are the legs, `c` the hypotenuse.
//!
//! Sides are reported to 4 decimals. When one leg is tiny next to the
//! other, the rounded hypotenuse can equal the long leg, so feeding it
//! back in is rejected. `solved_value` keeps the solved side unrounded
//! for chaining into another calculation.

use serde::{Deserialize, Serialize};

use crate::equations::geometry::{hypotenuse, leg};
use crate::errors::{CalcError, CalcResult};
use crate::format::round_ratio;
use crate::validation::{require_exactly, require_finite_result, require_positive, RawFields};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PythagoreanInput {
    #[serde(default)]
    pub a: Option<f64>,
    #[serde(default)]
    pub b: Option<f64>,
    #[serde(default)]
    pub c: Option<f64>,
}

impl PythagoreanInput {
    pub fn from_fields(fields: &RawFields) -> CalcResult<Self> {
        let input = PythagoreanInput {
            a: fields.optional_number("a")?,
            b: fields.optional_number("b")?,
            c: fields.optional_number("c")?,
        };
        input.validate()?;
        Ok(input)
    }

    pub fn validate(&self) -> CalcResult<()> {
        require_exactly(&[("a", self.a), ("b", self.b), ("c", self.c)], 2)?;
        for (name, side) in [("a", self.a), ("b", self.b), ("c", self.c)] {
            if let Some(value) = side {
                require_positive(name, value)?;
            }
        }
        match (self.a, self.b, self.c) {
            (Some(a), None, Some(c)) if c <= a => Err(CalcError::invalid_input(
                "c",
                c.to_string(),
                "Hypotenuse must be longer than leg a",
            )),
            (None, Some(b), Some(c)) if c <= b => Err(CalcError::invalid_input(
                "c",
                c.to_string(),
                "Hypotenuse must be longer than leg b",
            )),
            _ => Ok(()),
        }
    }
}

/// Which side was solved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    A,
    B,
    C,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PythagoreanResult {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub solved: Side,
    /// The solved side before rounding.
    pub solved_value: f64,
}

pub fn calculate(input: &PythagoreanInput) -> CalcResult<PythagoreanResult> {
    input.validate()?;

    let (a, b, c, solved) = match (input.a, input.b, input.c) {
        (Some(a), Some(b), None) => (a, b, require_finite_result("c", hypotenuse(a, b))?, Side::C),
        (Some(a), None, Some(c)) => (a, require_finite_result("b", leg(c, a))?, c, Side::B),
        (None, Some(b), Some(c)) => (require_finite_result("a", leg(c, b))?, b, c, Side::A),
        _ => return Err(CalcError::internal("validated pythagorean input without exactly two sides")),
    };
    let solved_value = match solved {
        Side::A => a,
        Side::B => b,
        Side::C => c,
    };

    Ok(PythagoreanResult {
        a: round_ratio(a),
        b: round_ratio(b),
        c: round_ratio(c),
        solved,
        solved_value,
    })
}
