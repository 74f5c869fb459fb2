//! # Slope of a Line
//!
//! m = (y2 − y1) / (x2 − x1) through two points. A vertical line
//! (x1 == x2) has no slope and is reported as [`Line::Vertical`].
//!
//! The result does not depend on the order of the points.

use serde::{Deserialize, Serialize};

use crate::equations::geometry::slope;
use crate::errors::CalcResult;
use crate::format::{format_number, round_ratio};
use crate::validation::{require_finite, require_finite_result, RawFields};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlopeInput {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl SlopeInput {
    pub fn from_fields(fields: &RawFields) -> CalcResult<Self> {
        let input = SlopeInput {
            x1: fields.number("x1")?,
            y1: fields.number("y1")?,
            x2: fields.number("x2")?,
            y2: fields.number("y2")?,
        };
        input.validate()?;
        Ok(input)
    }

    pub fn validate(&self) -> CalcResult<()> {
        require_finite("x1", self.x1)?;
        require_finite("y1", self.y1)?;
        require_finite("x2", self.x2)?;
        require_finite("y2", self.y2)?;
        Ok(())
    }

    /// The same two points in the opposite order
    pub fn swapped(&self) -> Self {
        SlopeInput {
            x1: self.x2,
            y1: self.y2,
            x2: self.x1,
            y2: self.y1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Line {
    Defined {
        slope: f64,
        y_intercept: f64,
        /// Inclination from the positive x axis, in degrees
        angle_degrees: f64,
        /// Slope-intercept form, e.g. `y = 2x + 1`
        equation: String,
    },
    Vertical {
        x: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlopeResult {
    pub line: Line,
}

impl SlopeResult {
    pub fn slope(&self) -> Option<f64> {
        match self.line {
            Line::Defined { slope, .. } => Some(slope),
            Line::Vertical { .. } => None,
        }
    }
}

fn slope_intercept_text(m: f64, b: f64) -> String {
    let term = if m == 0.0 {
        String::new()
    } else if m == 1.0 {
        "x".to_string()
    } else if m == -1.0 {
        "-x".to_string()
    } else {
        format!("{}x", format_number(m))
    };

    match (term.is_empty(), b) {
        (true, _) => format!("y = {}", format_number(b)),
        (false, b) if b == 0.0 => format!("y = {}", term),
        (false, b) if b < 0.0 => format!("y = {} - {}", term, format_number(-b)),
        (false, b) => format!("y = {} + {}", term, format_number(b)),
    }
}

pub fn calculate(input: &SlopeInput) -> CalcResult<SlopeResult> {
    input.validate()?;

    let line = match slope(input.x1, input.y1, input.x2, input.y2) {
        None => Line::Vertical {
            x: round_ratio(input.x1),
        },
        Some(m) => {
            let m = require_finite_result("slope", m)?;
            // symmetric in the two points, so a swap gives a bit-identical result
            let b = (input.x2 * input.y1 - input.x1 * input.y2) / (input.x2 - input.x1);
            let angle_degrees = round_ratio(m.atan().to_degrees());
            let m = round_ratio(m);
            let y_intercept = round_ratio(require_finite_result("y_intercept", b)?);
            Line::Defined {
                slope: m,
                y_intercept,
                angle_degrees,
                equation: slope_intercept_text(m, y_intercept),
            }
        }
    };

    Ok(SlopeResult { line })
}
