//! # Pregnancy Due Date
//!
//! Naegele's rule: the due date is 280 days after the first day of the last
//! menstrual period (LMP). Gestational age is counted in whole weeks since
//! the LMP.
//!
//! `today` is an explicit input so the calculation stays deterministic.
//! An LMP later than `today` is rejected; no lower bound is applied.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::validation::RawFields;

/// Length of a full-term pregnancy counted from the LMP
pub const GESTATION_DAYS: i64 = 280;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PregnancyInput {
    /// First day of the last menstrual period
    pub last_period: NaiveDate,
    /// Reference date for "weeks pregnant"
    pub today: NaiveDate,
}

impl PregnancyInput {
    /// Fields: `last_period` and `today`, both `YYYY-MM-DD`.
    pub fn from_fields(fields: &RawFields) -> CalcResult<Self> {
        let input = PregnancyInput {
            last_period: fields.date("last_period")?,
            today: fields.date("today")?,
        };
        input.validate()?;
        Ok(input)
    }

    pub fn validate(&self) -> CalcResult<()> {
        if self.last_period > self.today {
            return Err(CalcError::invalid_input(
                "last_period",
                self.last_period.to_string(),
                "Last period cannot be after today",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PregnancyResult {
    pub due_date: NaiveDate,
    /// Completed weeks since the LMP
    pub weeks_pregnant: i64,
    /// Days past the last completed week
    pub extra_days: i64,
    /// 1, 2 or 3
    pub trimester: u8,
    /// Days until the due date (negative once it has passed)
    pub days_until_due: i64,
}

pub fn calculate(input: &PregnancyInput) -> CalcResult<PregnancyResult> {
    input.validate()?;

    let due_date = input
        .last_period
        .checked_add_signed(Duration::days(GESTATION_DAYS))
        .ok_or_else(|| CalcError::invalid_input("last_period", input.last_period.to_string(), "Date out of range"))?;

    let elapsed = (input.today - input.last_period).num_days();
    let weeks_pregnant = elapsed / 7;
    let trimester = match weeks_pregnant {
        w if w < 13 => 1,
        w if w < 27 => 2,
        _ => 3,
    };

    Ok(PregnancyResult {
        due_date,
        weeks_pregnant,
        extra_days: elapsed % 7,
        trimester,
        days_until_due: (due_date - input.today).num_days(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_due_date() {
        let input = PregnancyInput {
            last_period: date(2024, 1, 1),
            today: date(2024, 3, 1),
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.due_date, date(2024, 10, 7));
        // 60 days = 8 weeks 4 days
        assert_eq!(result.weeks_pregnant, 8);
        assert_eq!(result.extra_days, 4);
        assert_eq!(result.trimester, 1);
        assert_eq!(result.days_until_due, 220);
    }

    #[test]
    fn test_third_trimester() {
        let input = PregnancyInput {
            last_period: date(2024, 1, 1),
            today: date(2024, 8, 1),
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.weeks_pregnant, 30);
        assert_eq!(result.trimester, 3);
    }

    #[test]
    fn test_future_lmp_rejected() {
        let fields = RawFields::new().with("last_period", "2025-05-01").with("today", "2025-04-01");
        assert_eq!(PregnancyInput::from_fields(&fields).unwrap_err().field(), Some("last_period"));
    }

    #[test]
    fn test_malformed_date() {
        let fields = RawFields::new().with("last_period", "2025-02-30").with("today", "2025-04-01");
        assert_eq!(PregnancyInput::from_fields(&fields).unwrap_err().error_code(), "PARSE_ERROR");
    }

    #[test]
    fn test_serialization() {
        let input = PregnancyInput {
            last_period: date(2024, 1, 1),
            today: date(2024, 3, 1),
        };
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"2024-01-01\""));
    }
}
