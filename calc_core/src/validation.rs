//! # Input Validation
//!
//! Turns raw form values (strings) into typed inputs. Parsing is total:
//! every helper returns a [`CalcResult`], so a presentation layer can hand
//! user text straight in and render whatever error comes back.
//!
//! - Empty or absent required field → [`CalcError::MissingField`]
//! - Unparseable or non-finite number, malformed date → [`CalcError::ParseError`]
//! - Domain violations (negative, zero divisor, wrong count) →
//!   [`CalcError::InvalidInput`] / [`CalcError::FieldCount`]
//!
//! ## Example
//!
//! ```rust
//! use calc_core::validation::{RawFields, require_positive};
//!
//! let fields = RawFields::new()
//!     .with("principal", "10000")
//!     .with("annual_rate_percent", "abc");
//!
//! let principal = require_positive("principal", fields.number("principal").unwrap()).unwrap();
//! assert_eq!(principal, 10000.0);
//! assert!(fields.number("annual_rate_percent").is_err());
//! ```

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Accepted date layout for date fields (ISO 8601 calendar date)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Largest value accepted by [`RawFields::whole_number`] (2^53, exact in f64)
const MAX_WHOLE: f64 = 9_007_199_254_740_992.0;

/// Raw named string values as collected by a form.
///
/// Blank values are treated the same as absent ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawFields(BTreeMap<String, String>);

impl RawFields {
    /// Create an empty field set
    pub fn new() -> Self {
        RawFields(BTreeMap::new())
    }

    /// Builder-style insert
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }

    /// Insert or replace a field
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    /// Parse a `name=value` pair
    pub fn parse_assignment(pair: &str) -> CalcResult<(String, String)> {
        match pair.split_once('=') {
            Some((name, value)) if !name.trim().is_empty() => {
                Ok((name.trim().to_string(), value.trim().to_string()))
            }
            _ => Err(CalcError::parse_error("field", pair, "Expected name=value")),
        }
    }

    /// Field names present (including blank ones)
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Trimmed value, `None` when absent or blank
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .get(field)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// True when the field has a non-blank value
    pub fn is_provided(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Required finite number
    pub fn number(&self, field: &str) -> CalcResult<f64> {
        let raw = self.get(field).ok_or_else(|| CalcError::missing_field(field))?;
        parse_number(field, raw)
    }

    /// Optional finite number; blank means `None`
    pub fn optional_number(&self, field: &str) -> CalcResult<Option<f64>> {
        self.get(field).map(|raw| parse_number(field, raw)).transpose()
    }

    /// Finite number, falling back to `default` when blank
    pub fn number_or(&self, field: &str, default: f64) -> CalcResult<f64> {
        Ok(self.optional_number(field)?.unwrap_or(default))
    }

    /// Required non-negative whole number
    pub fn whole_number(&self, field: &str) -> CalcResult<u64> {
        let raw = self.get(field).ok_or_else(|| CalcError::missing_field(field))?;
        parse_whole_number(field, raw)
    }

    /// Non-negative whole number, falling back to `default` when blank
    pub fn whole_number_or(&self, field: &str, default: u64) -> CalcResult<u64> {
        match self.get(field) {
            Some(raw) => parse_whole_number(field, raw),
            None => Ok(default),
        }
    }

    /// Required ISO calendar date (`YYYY-MM-DD`)
    pub fn date(&self, field: &str) -> CalcResult<NaiveDate> {
        let raw = self.get(field).ok_or_else(|| CalcError::missing_field(field))?;
        parse_date(field, raw)
    }

    /// Optional ISO calendar date
    pub fn optional_date(&self, field: &str) -> CalcResult<Option<NaiveDate>> {
        self.get(field).map(|raw| parse_date(field, raw)).transpose()
    }

    /// Required free text
    pub fn text(&self, field: &str) -> CalcResult<&str> {
        self.get(field).ok_or_else(|| CalcError::missing_field(field))
    }

    /// A closed-enumeration choice, `default` when blank.
    ///
    /// `expected` lists the accepted spellings for the error message.
    pub fn choice<T>(
        &self,
        field: &str,
        default: T,
        expected: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> CalcResult<T> {
        match self.get(field) {
            Some(raw) => parse(raw).ok_or_else(|| {
                CalcError::parse_error(field, raw, format!("Expected one of: {}", expected))
            }),
            None => Ok(default),
        }
    }

    /// A list of numbers separated by commas, semicolons or whitespace
    pub fn number_list(&self, field: &str) -> CalcResult<Vec<f64>> {
        let raw = self.get(field).ok_or_else(|| CalcError::missing_field(field))?;
        raw.split(|c: char| c == ',' || c == ';' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| parse_number(field, token))
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = RawFields::new();
        for (k, v) in iter {
            fields.insert(k, v);
        }
        fields
    }
}

/// Parse a finite f64.
pub fn parse_number(field: &str, raw: &str) -> CalcResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CalcError::missing_field(field));
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| CalcError::parse_error(field, trimmed, "Not a number"))?;
    if !value.is_finite() {
        return Err(CalcError::parse_error(field, trimmed, "Must be a finite number"));
    }
    Ok(value)
}

/// Parse a non-negative whole number ("3" and "3.0" are both accepted).
pub fn parse_whole_number(field: &str, raw: &str) -> CalcResult<u64> {
    let value = parse_number(field, raw)?;
    if value < 0.0 || value.fract() != 0.0 || value > MAX_WHOLE {
        return Err(CalcError::invalid_input(
            field,
            raw.trim(),
            "Must be a non-negative whole number",
        ));
    }
    Ok(value as u64)
}

/// Parse an ISO calendar date.
pub fn parse_date(field: &str, raw: &str) -> CalcResult<NaiveDate> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|e| CalcError::parse_error(field, trimmed, format!("Expected a YYYY-MM-DD date ({})", e)))
}

/// Reject non-finite values in already-typed inputs.
pub fn require_finite(field: &str, value: f64) -> CalcResult<f64> {
    if !value.is_finite() {
        return Err(CalcError::parse_error(field, value.to_string(), "Must be a finite number"));
    }
    Ok(value)
}

/// Reject a computed value that overflowed or is undefined.
///
/// Inputs can be individually finite and still combine into an infinite
/// or NaN result (`radius = 1e200` squares to infinity).
pub fn require_finite_result(field: &str, value: f64) -> CalcResult<f64> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Result is too large to represent, use smaller inputs",
        ));
    }
    Ok(value)
}

/// Require `value > 0`.
pub fn require_positive(field: &str, value: f64) -> CalcResult<f64> {
    require_finite(field, value)?;
    if value <= 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Must be greater than zero"));
    }
    Ok(value)
}

/// Require `value >= 0`.
pub fn require_non_negative(field: &str, value: f64) -> CalcResult<f64> {
    require_finite(field, value)?;
    if value < 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Cannot be negative"));
    }
    Ok(value)
}

/// Require `value != 0` (used for divisors).
pub fn require_non_zero(field: &str, value: f64) -> CalcResult<f64> {
    require_finite(field, value)?;
    if value == 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Cannot be zero"));
    }
    Ok(value)
}

/// Require that exactly `expected` of the named optional values are present.
pub fn require_exactly(fields: &[(&str, Option<f64>)], expected: usize) -> CalcResult<()> {
    let provided = fields.iter().filter(|(_, v)| v.is_some()).count();
    if provided != expected {
        let names: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();
        return Err(CalcError::field_count(&names, expected, provided));
    }
    for (name, value) in fields {
        if let Some(v) = value {
            require_finite(name, *v)?;
        }
    }
    Ok(())
}
