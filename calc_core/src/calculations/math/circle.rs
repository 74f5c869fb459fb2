//! # Circle
//!
//! Area, circumference and diameter from any one known measure.
//!
//! ```rust
//! use calc_core::calculations::math::circle::{CircleInput, CircleMeasure, calculate};
//!
//! let result = calculate(&CircleInput { measure: CircleMeasure::Radius, value: 10.0 }).unwrap();
//! assert_eq!(result.area, 314.16);
//! assert_eq!(result.circumference, 62.83);
//! assert_eq!(result.diameter, 20.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::geometry::{circle_area, circle_circumference, radius_from_area, radius_from_circumference};
use crate::errors::{CalcError, CalcResult};
use crate::format::round_currency;
use crate::validation::{require_finite_result, require_positive, RawFields};

/// Which measure of the circle is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CircleMeasure {
    #[default]
    Radius,
    Diameter,
    Circumference,
    Area,
}

impl CircleMeasure {
    pub const ALL: [CircleMeasure; 4] = [
        CircleMeasure::Radius,
        CircleMeasure::Diameter,
        CircleMeasure::Circumference,
        CircleMeasure::Area,
    ];

    pub fn field_name(self) -> &'static str {
        match self {
            CircleMeasure::Radius => "radius",
            CircleMeasure::Diameter => "diameter",
            CircleMeasure::Circumference => "circumference",
            CircleMeasure::Area => "area",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleInput {
    pub measure: CircleMeasure,
    pub value: f64,
}

impl CircleInput {
    /// Exactly one of `radius`, `diameter`, `circumference`, `area`.
    pub fn from_fields(fields: &RawFields) -> CalcResult<Self> {
        let mut provided = Vec::new();
        for measure in CircleMeasure::ALL {
            if let Some(value) = fields.optional_number(measure.field_name())? {
                provided.push(CircleInput { measure, value });
            }
        }
        if provided.len() != 1 {
            let names: Vec<&str> = CircleMeasure::ALL.iter().map(|m| m.field_name()).collect();
            return Err(CalcError::field_count(&names, 1, provided.len()));
        }
        let input = provided.remove(0);
        input.validate()?;
        Ok(input)
    }

    pub fn validate(&self) -> CalcResult<()> {
        require_positive(self.measure.field_name(), self.value)?;
        Ok(())
    }

    pub fn radius(&self) -> f64 {
        match self.measure {
            CircleMeasure::Radius => self.value,
            CircleMeasure::Diameter => self.value / 2.0,
            CircleMeasure::Circumference => radius_from_circumference(self.value),
            CircleMeasure::Area => radius_from_area(self.value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleResult {
    pub radius: f64,
    pub diameter: f64,
    pub circumference: f64,
    pub area: f64,
}

pub fn calculate(input: &CircleInput) -> CalcResult<CircleResult> {
    input.validate()?;

    let r = input.radius();

    Ok(CircleResult {
        radius: round_currency(require_finite_result("radius", r)?),
        diameter: round_currency(require_finite_result("diameter", 2.0 * r)?),
        circumference: round_currency(require_finite_result("circumference", circle_circumference(r))?),
        area: round_currency(require_finite_result("area", circle_area(r))?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_area() {
        let input = CircleInput {
            measure: CircleMeasure::Area,
            value: 314.159_265_358_979_3,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.radius, 10.0);
        assert_eq!(result.diameter, 20.0);
    }

    #[test]
    fn test_from_diameter_fields() {
        let fields = RawFields::new().with("diameter", "4");
        let input = CircleInput::from_fields(&fields).unwrap();
        let result = calculate(&input).unwrap();
        assert_eq!(result.radius, 2.0);
        assert_eq!(result.area, 12.57);
    }

    #[test]
    fn test_overflowing_area_rejected() {
        let input = CircleInput {
            measure: CircleMeasure::Radius,
            value: 1e200,
        };
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert_eq!(err.field(), Some("area"));
    }

    #[test]
    fn test_exactly_one_measure() {
        let fields = RawFields::new().with("radius", "1").with("area", "3");
        assert_eq!(CircleInput::from_fields(&fields).unwrap_err().error_code(), "FIELD_COUNT");
    }

    #[test]
    fn test_non_positive_radius() {
        let input = CircleInput {
            measure: CircleMeasure::Radius,
            value: 0.0,
        };
        assert_eq!(calculate(&input).unwrap_err().field(), Some("radius"));
    }
}
