//! # Time Duration Arithmetic
//!
//! Adds or subtracts two durations given as days, hours, minutes and
//! seconds. Both are flattened to seconds, combined, then split back with
//! carries (60 s, 60 min, 24 h).
//!
//! A subtraction that would go negative is clamped to zero and flagged via
//! [`TimeDurationResult::clamped`].

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::validation::RawFields;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_DAY: u64 = 86_400;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DurationParts {
    #[serde(default)]
    pub days: u64,
    #[serde(default)]
    pub hours: u64,
    #[serde(default)]
    pub minutes: u64,
    #[serde(default)]
    pub seconds: u64,
}

impl DurationParts {
    /// Split a second count into normalized parts
    pub fn from_seconds(total: u64) -> Self {
        DurationParts {
            days: total / SECONDS_PER_DAY,
            hours: (total % SECONDS_PER_DAY) / SECONDS_PER_HOUR,
            minutes: (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: total % SECONDS_PER_MINUTE,
        }
    }

    /// `None` on overflow
    pub fn total_seconds(&self) -> Option<u64> {
        self.days
            .checked_mul(SECONDS_PER_DAY)?
            .checked_add(self.hours.checked_mul(SECONDS_PER_HOUR)?)?
            .checked_add(self.minutes.checked_mul(SECONDS_PER_MINUTE)?)?
            .checked_add(self.seconds)
    }

    /// Read `days{suffix}`, `hours{suffix}`, ... (blank = 0)
    fn from_fields(fields: &RawFields, suffix: &str) -> CalcResult<Self> {
        Ok(DurationParts {
            days: fields.whole_number_or(&format!("days{}", suffix), 0)?,
            hours: fields.whole_number_or(&format!("hours{}", suffix), 0)?,
            minutes: fields.whole_number_or(&format!("minutes{}", suffix), 0)?,
            seconds: fields.whole_number_or(&format!("seconds{}", suffix), 0)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationOperation {
    #[default]
    Add,
    Subtract,
}

impl DurationOperation {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" | "+" | "plus" => Some(DurationOperation::Add),
            "subtract" | "-" | "minus" => Some(DurationOperation::Subtract),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeDurationInput {
    pub first: DurationParts,
    pub second: DurationParts,
    #[serde(default)]
    pub operation: DurationOperation,
}

impl TimeDurationInput {
    /// Fields `days1 hours1 minutes1 seconds1`, `days2 ... seconds2` and
    /// `operation` (`add` or `subtract`, default `add`).
    pub fn from_fields(fields: &RawFields) -> CalcResult<Self> {
        let input = TimeDurationInput {
            first: DurationParts::from_fields(fields, "1")?,
            second: DurationParts::from_fields(fields, "2")?,
            operation: fields.choice("operation", DurationOperation::Add, "add, subtract", DurationOperation::parse)?,
        };
        input.validate()?;
        Ok(input)
    }

    pub fn validate(&self) -> CalcResult<()> {
        self.first_seconds()?;
        self.second_seconds()?;
        Ok(())
    }

    fn first_seconds(&self) -> CalcResult<u64> {
        self.first
            .total_seconds()
            .ok_or_else(|| CalcError::invalid_input("days1", self.first.days.to_string(), "Duration is too large"))
    }

    fn second_seconds(&self) -> CalcResult<u64> {
        self.second
            .total_seconds()
            .ok_or_else(|| CalcError::invalid_input("days2", self.second.days.to_string(), "Duration is too large"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeDurationResult {
    pub total_seconds: u64,
    pub duration: DurationParts,
    /// The subtraction went below zero and the result was clamped to zero
    pub clamped: bool,
}

pub fn calculate(input: &TimeDurationInput) -> CalcResult<TimeDurationResult> {
    let first = input.first_seconds()?;
    let second = input.second_seconds()?;

    let (total, clamped) = match input.operation {
        DurationOperation::Add => {
            let total = first
                .checked_add(second)
                .ok_or_else(|| CalcError::invalid_input("days2", input.second.days.to_string(), "Duration is too large"))?;
            (total, false)
        }
        DurationOperation::Subtract => match first.checked_sub(second) {
            Some(total) => (total, false),
            None => (0, true),
        },
    };

    Ok(TimeDurationResult {
        total_seconds: total,
        duration: DurationParts::from_seconds(total),
        clamped,
    })
}
