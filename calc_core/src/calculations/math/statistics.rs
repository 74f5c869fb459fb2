//! # Descriptive Statistics
//!
//! Mean, median, spread and standard deviation of a list of numbers.
//! Sample variance uses Bessel's correction (n − 1), so at least two
//! values are required. Population figures divide by n.

use serde::{Deserialize, Serialize};

use crate::equations::algebra::{mean, median, population_variance, sample_variance};
use crate::errors::{CalcError, CalcResult};
use crate::format::round_ratio;
use crate::validation::{require_finite, require_finite_result, RawFields};

/// Smallest sample for which the sample variance is defined
pub const MIN_VALUES: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsInput {
    pub values: Vec<f64>,
}

impl StatisticsInput {
    /// Field `values`: numbers separated by commas or whitespace.
    pub fn from_fields(fields: &RawFields) -> CalcResult<Self> {
        let input = StatisticsInput {
            values: fields.number_list("values")?,
        };
        input.validate()?;
        Ok(input)
    }

    pub fn validate(&self) -> CalcResult<()> {
        if self.values.len() < MIN_VALUES {
            return Err(CalcError::invalid_input(
                "values",
                format!("{} value(s)", self.values.len()),
                format!("At least {} values are required", MIN_VALUES),
            ));
        }
        for value in &self.values {
            require_finite("values", *value)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsResult {
    pub count: usize,
    pub sum: f64,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    pub sample_variance: f64,
    pub sample_std_dev: f64,
    pub population_variance: f64,
    pub population_std_dev: f64,
}

pub fn calculate(input: &StatisticsInput) -> CalcResult<StatisticsResult> {
    input.validate()?;

    let values = &input.values;
    let sum = require_finite_result("sum", values.iter().sum())?;
    let sample_var = require_finite_result("sample_variance", sample_variance(values))?;
    let population_var = require_finite_result("population_variance", population_variance(values))?;
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Ok(StatisticsResult {
        count: values.len(),
        sum: round_ratio(sum),
        mean: round_ratio(mean(values)),
        median: round_ratio(median(values)),
        min: round_ratio(min),
        max: round_ratio(max),
        sample_variance: round_ratio(sample_var),
        sample_std_dev: round_ratio(sample_var.sqrt()),
        population_variance: round_ratio(population_var),
        population_std_dev: round_ratio(population_var.sqrt()),
    })
}
