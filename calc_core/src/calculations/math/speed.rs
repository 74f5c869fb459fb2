//! # Speed, Distance & Time
//!
//! distance = speed × time. Given any two, solve the third. Time is in
//! hours and speed in distance units per hour; the distance unit itself is
//! whatever the caller uses.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::format::{format_clock, round_ratio};
use crate::validation::{require_exactly, require_finite_result, require_non_negative, require_positive, RawFields};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedInput {
    #[serde(default)]
    pub distance: Option<f64>,
    /// Hours
    #[serde(default)]
    pub time: Option<f64>,
    /// Distance per hour
    #[serde(default)]
    pub speed: Option<f64>,
}

impl SpeedInput {
    pub fn from_fields(fields: &RawFields) -> CalcResult<Self> {
        let input = SpeedInput {
            distance: fields.optional_number("distance")?,
            time: fields.optional_number("time")?,
            speed: fields.optional_number("speed")?,
        };
        input.validate()?;
        Ok(input)
    }

    pub fn validate(&self) -> CalcResult<()> {
        require_exactly(
            &[("distance", self.distance), ("time", self.time), ("speed", self.speed)],
            2,
        )?;
        if let Some(distance) = self.distance {
            require_non_negative("distance", distance)?;
        }
        match (self.time, self.speed) {
            // time is the divisor when solving for speed
            (Some(time), None) => {
                require_positive("time", time)?;
            }
            // speed is the divisor when solving for time
            (None, Some(speed)) => {
                require_positive("speed", speed)?;
            }
            (Some(time), Some(speed)) => {
                require_non_negative("time", time)?;
                require_non_negative("speed", speed)?;
            }
            (None, None) => {}
        }
        Ok(())
    }
}

/// Which quantity was solved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeedUnknown {
    Distance,
    Time,
    Speed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedResult {
    pub distance: f64,
    pub time: f64,
    pub speed: f64,
    pub solved: SpeedUnknown,
    /// `time` as `h:mm:ss`
    pub time_clock: String,
}

pub fn calculate(input: &SpeedInput) -> CalcResult<SpeedResult> {
    input.validate()?;

    let (distance, time, speed, solved) = match (input.distance, input.time, input.speed) {
        (None, Some(t), Some(s)) => (require_finite_result("distance", s * t)?, t, s, SpeedUnknown::Distance),
        (Some(d), None, Some(s)) => (d, require_finite_result("time", d / s)?, s, SpeedUnknown::Time),
        (Some(d), Some(t), None) => (d, t, require_finite_result("speed", d / t)?, SpeedUnknown::Speed),
        _ => return Err(CalcError::internal("validated speed input without exactly two values")),
    };

    Ok(SpeedResult {
        distance: round_ratio(distance),
        time: round_ratio(time),
        speed: round_ratio(speed),
        solved,
        time_clock: format_clock(time * 3600.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(distance: Option<f64>, time: Option<f64>, speed: Option<f64>) -> SpeedInput {
        SpeedInput { distance, time, speed }
    }

    #[test]
    fn test_solve_each_quantity() {
        let d = calculate(&input(None, Some(2.5), Some(60.0))).unwrap();
        assert_eq!(d.distance, 150.0);
        assert_eq!(d.solved, SpeedUnknown::Distance);

        let t = calculate(&input(Some(150.0), None, Some(60.0))).unwrap();
        assert_eq!(t.time, 2.5);
        assert_eq!(t.time_clock, "2:30:00");

        let s = calculate(&input(Some(100.0), Some(0.75), None)).unwrap();
        assert_eq!(s.speed, 133.3333);
    }

    #[test]
    fn test_zero_divisors_rejected() {
        let err = calculate(&input(Some(10.0), Some(0.0), None)).unwrap_err();
        assert_eq!(err.field(), Some("time"));

        let err = calculate(&input(Some(10.0), None, Some(0.0))).unwrap_err();
        assert_eq!(err.field(), Some("speed"));
    }

    #[test]
    fn test_zero_time_allowed_when_multiplying() {
        let result = calculate(&input(None, Some(0.0), Some(50.0))).unwrap();
        assert_eq!(result.distance, 0.0);
    }

    #[test]
    fn test_exactly_two_required() {
        let fields = RawFields::new().with("distance", "10");
        assert_eq!(SpeedInput::from_fields(&fields).unwrap_err().error_code(), "FIELD_COUNT");

        let fields = RawFields::new().with("distance", "10").with("time", "1").with("speed", "10");
        assert_eq!(SpeedInput::from_fields(&fields).unwrap_err().error_code(), "FIELD_COUNT");
    }
}
