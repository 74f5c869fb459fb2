//! # Calculators
//!
//! Every calculator follows the same pattern:
//!
//! - `*Input` - typed, validated parameters (JSON-serializable), built
//!   directly or from raw form fields with `*Input::from_fields`
//! - `*Result` - rounded results (JSON-serializable)
//! - `calculate(input) -> CalcResult<*Result>` - pure calculation function
//!
//! [`CalculationItem`] wraps every input type so presentation layers can
//! dispatch on a [`CalculationKind`] name without knowing the individual
//! modules.
//!
//! ## Available Calculators
//!
//! - [`financial`] - loans, ROI, interest, sales tax, rent, salary, SWP
//! - [`health`] - BMI, BMR, calories, body fat, protein, carbs, pace, pregnancy
//! - [`math`] - circle, Pythagorean, quadratic, ratio, slope, statistics,
//!   speed, time duration
//!
//! The scientific expression evaluator lives in [`crate::expression`] and is
//! registered here as the `expression` kind.

pub mod financial;
pub mod health;
pub mod math;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CalcError, CalcResult};
use crate::expression::{self, ExpressionInput, ExpressionResult};
use crate::settings::CalculatorSettings;
use crate::validation::RawFields;

use financial::{
    CompoundInterestInput, CompoundInterestResult, LoanInput, LoanResult, RentInput, RentResult, RoiInput,
    RoiResult, SalaryInput, SalaryResult, SalesTaxInput, SalesTaxResult, SimpleInterestInput,
    SimpleInterestResult, SwpInput, SwpResult,
};
use health::{
    BmiInput, BmiResult, BmrResult, BodyFatInput, BodyFatResult, CalorieResult, CarbInput, CarbResult,
    EnergyInput, PaceInput, PaceResult, PregnancyInput, PregnancyResult, ProteinInput, ProteinResult,
};
use math::{
    CircleInput, CircleResult, PythagoreanInput, PythagoreanResult, QuadraticInput, QuadraticResult, RatioInput,
    RatioResult, SlopeInput, SlopeResult, SpeedInput, SpeedResult, StatisticsInput, StatisticsResult,
    TimeDurationInput, TimeDurationResult,
};

/// Calculator grouping, used for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Financial,
    Health,
    Math,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Category::Financial => "financial",
            Category::Health => "health",
            Category::Math => "math",
        })
    }
}

/// Stable identifier of each calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalculationKind {
    Loan,
    Roi,
    SimpleInterest,
    CompoundInterest,
    SalesTax,
    Rent,
    Salary,
    Swp,
    Bmi,
    Bmr,
    Calories,
    BodyFat,
    Protein,
    Carbs,
    Pace,
    Pregnancy,
    Circle,
    Pythagorean,
    Quadratic,
    Ratio,
    Slope,
    Statistics,
    Speed,
    TimeDuration,
    Expression,
}

impl CalculationKind {
    pub const ALL: [CalculationKind; 25] = [
        CalculationKind::Loan,
        CalculationKind::Roi,
        CalculationKind::SimpleInterest,
        CalculationKind::CompoundInterest,
        CalculationKind::SalesTax,
        CalculationKind::Rent,
        CalculationKind::Salary,
        CalculationKind::Swp,
        CalculationKind::Bmi,
        CalculationKind::Bmr,
        CalculationKind::Calories,
        CalculationKind::BodyFat,
        CalculationKind::Protein,
        CalculationKind::Carbs,
        CalculationKind::Pace,
        CalculationKind::Pregnancy,
        CalculationKind::Circle,
        CalculationKind::Pythagorean,
        CalculationKind::Quadratic,
        CalculationKind::Ratio,
        CalculationKind::Slope,
        CalculationKind::Statistics,
        CalculationKind::Speed,
        CalculationKind::TimeDuration,
        CalculationKind::Expression,
    ];

    /// Kebab-case name, identical to the serde representation
    pub fn name(self) -> &'static str {
        match self {
            CalculationKind::Loan => "loan",
            CalculationKind::Roi => "roi",
            CalculationKind::SimpleInterest => "simple-interest",
            CalculationKind::CompoundInterest => "compound-interest",
            CalculationKind::SalesTax => "sales-tax",
            CalculationKind::Rent => "rent",
            CalculationKind::Salary => "salary",
            CalculationKind::Swp => "swp",
            CalculationKind::Bmi => "bmi",
            CalculationKind::Bmr => "bmr",
            CalculationKind::Calories => "calories",
            CalculationKind::BodyFat => "body-fat",
            CalculationKind::Protein => "protein",
            CalculationKind::Carbs => "carbs",
            CalculationKind::Pace => "pace",
            CalculationKind::Pregnancy => "pregnancy",
            CalculationKind::Circle => "circle",
            CalculationKind::Pythagorean => "pythagorean",
            CalculationKind::Quadratic => "quadratic",
            CalculationKind::Ratio => "ratio",
            CalculationKind::Slope => "slope",
            CalculationKind::Statistics => "statistics",
            CalculationKind::Speed => "speed",
            CalculationKind::TimeDuration => "time-duration",
            CalculationKind::Expression => "expression",
        }
    }

    pub fn category(self) -> Category {
        use CalculationKind::*;
        match self {
            Loan | Roi | SimpleInterest | CompoundInterest | SalesTax | Rent | Salary | Swp => Category::Financial,
            Bmi | Bmr | Calories | BodyFat | Protein | Carbs | Pace | Pregnancy => Category::Health,
            Circle | Pythagorean | Quadratic | Ratio | Slope | Statistics | Speed | TimeDuration | Expression => {
                Category::Math
            }
        }
    }

    /// One-line summary for listings
    pub fn description(self) -> &'static str {
        match self {
            CalculationKind::Loan => "Monthly payment, total paid and interest of an amortized loan",
            CalculationKind::Roi => "Return on investment, optionally annualized",
            CalculationKind::SimpleInterest => "Interest on principal without compounding",
            CalculationKind::CompoundInterest => "Future value with compounding and monthly contributions",
            CalculationKind::SalesTax => "Tax amount and total price",
            CalculationKind::Rent => "Affordable monthly rent from income",
            CalculationKind::Salary => "Convert pay between hourly, weekly, monthly and annual",
            CalculationKind::Swp => "How long a corpus lasts under monthly withdrawals",
            CalculationKind::Bmi => "Body mass index with WHO category",
            CalculationKind::Bmr => "Basal metabolic rate (Mifflin-St Jeor)",
            CalculationKind::Calories => "Daily calories for maintenance, loss and gain",
            CalculationKind::BodyFat => "Body fat percentage (U.S. Navy method)",
            CalculationKind::Protein => "Daily protein target",
            CalculationKind::Carbs => "Daily carbohydrate target",
            CalculationKind::Pace => "Running pace and speed",
            CalculationKind::Pregnancy => "Due date and gestational age",
            CalculationKind::Circle => "Area, circumference and diameter of a circle",
            CalculationKind::Pythagorean => "Third side of a right triangle",
            CalculationKind::Quadratic => "Roots of a·x² + b·x + c = 0",
            CalculationKind::Ratio => "Solve A:B = C:X or simplify A:B",
            CalculationKind::Slope => "Slope and equation of the line through two points",
            CalculationKind::Statistics => "Mean, median, variance and standard deviation",
            CalculationKind::Speed => "Speed, distance or time from the other two",
            CalculationKind::TimeDuration => "Add or subtract durations",
            CalculationKind::Expression => "Evaluate a scientific expression",
        }
    }

    /// Accepts the kebab-case name, with `_` or spaces in place of `-`,
    /// plus a few common aliases.
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        let alias = match normalized.as_str() {
            "emi" | "mortgage" => Some(CalculationKind::Loan),
            "tdee" => Some(CalculationKind::Calories),
            "standard-deviation" | "std-dev" | "stddev" => Some(CalculationKind::Statistics),
            "proportion" => Some(CalculationKind::Ratio),
            "due-date" => Some(CalculationKind::Pregnancy),
            "calc" | "eval" | "scientific" => Some(CalculationKind::Expression),
            _ => None,
        };
        alias.or_else(|| CalculationKind::ALL.into_iter().find(|kind| kind.name() == normalized))
    }
}

impl fmt::Display for CalculationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Enum wrapper for all calculator inputs.
///
/// Serialized with a `type` tag so heterogeneous calculations can be
/// stored or transmitted as one JSON shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum CalculationItem {
    Loan(LoanInput),
    Roi(RoiInput),
    SimpleInterest(SimpleInterestInput),
    CompoundInterest(CompoundInterestInput),
    SalesTax(SalesTaxInput),
    Rent(RentInput),
    Salary(SalaryInput),
    Swp(SwpInput),
    Bmi(BmiInput),
    Bmr(EnergyInput),
    Calories(EnergyInput),
    BodyFat(BodyFatInput),
    Protein(ProteinInput),
    Carbs(CarbInput),
    Pace(PaceInput),
    Pregnancy(PregnancyInput),
    Circle(CircleInput),
    Pythagorean(PythagoreanInput),
    Quadratic(QuadraticInput),
    Ratio(RatioInput),
    Slope(SlopeInput),
    Statistics(StatisticsInput),
    Speed(SpeedInput),
    TimeDuration(TimeDurationInput),
    Expression(ExpressionInput),
}

impl CalculationItem {
    /// Build and validate the input for `kind` from raw form fields.
    pub fn from_fields(kind: CalculationKind, fields: &RawFields, settings: &CalculatorSettings) -> CalcResult<Self> {
        let item = match kind {
            CalculationKind::Loan => CalculationItem::Loan(LoanInput::from_fields(fields)?),
            CalculationKind::Roi => CalculationItem::Roi(RoiInput::from_fields(fields)?),
            CalculationKind::SimpleInterest => {
                CalculationItem::SimpleInterest(SimpleInterestInput::from_fields(fields)?)
            }
            CalculationKind::CompoundInterest => {
                CalculationItem::CompoundInterest(CompoundInterestInput::from_fields(fields)?)
            }
            CalculationKind::SalesTax => CalculationItem::SalesTax(SalesTaxInput::from_fields(fields)?),
            CalculationKind::Rent => CalculationItem::Rent(RentInput::from_fields(fields, settings)?),
            CalculationKind::Salary => CalculationItem::Salary(SalaryInput::from_fields(fields, settings)?),
            CalculationKind::Swp => CalculationItem::Swp(SwpInput::from_fields(fields)?),
            CalculationKind::Bmi => CalculationItem::Bmi(BmiInput::from_fields(fields, settings)?),
            CalculationKind::Bmr => CalculationItem::Bmr(EnergyInput::from_fields(fields, settings)?),
            CalculationKind::Calories => CalculationItem::Calories(EnergyInput::from_fields(fields, settings)?),
            CalculationKind::BodyFat => CalculationItem::BodyFat(BodyFatInput::from_fields(fields, settings)?),
            CalculationKind::Protein => CalculationItem::Protein(ProteinInput::from_fields(fields, settings)?),
            CalculationKind::Carbs => CalculationItem::Carbs(CarbInput::from_fields(fields, settings)?),
            CalculationKind::Pace => CalculationItem::Pace(PaceInput::from_fields(fields, settings)?),
            CalculationKind::Pregnancy => CalculationItem::Pregnancy(PregnancyInput::from_fields(fields)?),
            CalculationKind::Circle => CalculationItem::Circle(CircleInput::from_fields(fields)?),
            CalculationKind::Pythagorean => CalculationItem::Pythagorean(PythagoreanInput::from_fields(fields)?),
            CalculationKind::Quadratic => CalculationItem::Quadratic(QuadraticInput::from_fields(fields)?),
            CalculationKind::Ratio => CalculationItem::Ratio(RatioInput::from_fields(fields)?),
            CalculationKind::Slope => CalculationItem::Slope(SlopeInput::from_fields(fields)?),
            CalculationKind::Statistics => CalculationItem::Statistics(StatisticsInput::from_fields(fields)?),
            CalculationKind::Speed => CalculationItem::Speed(SpeedInput::from_fields(fields)?),
            CalculationKind::TimeDuration => CalculationItem::TimeDuration(TimeDurationInput::from_fields(fields)?),
            CalculationKind::Expression => {
                CalculationItem::Expression(ExpressionInput::from_fields(fields, settings)?)
            }
        };
        Ok(item)
    }

    /// Like [`CalculationItem::from_fields`], looking the kind up by name.
    pub fn from_named_fields(name: &str, fields: &RawFields, settings: &CalculatorSettings) -> CalcResult<Self> {
        let kind = CalculationKind::parse(name).ok_or_else(|| CalcError::unknown_calculator(name))?;
        Self::from_fields(kind, fields, settings)
    }

    pub fn kind(&self) -> CalculationKind {
        match self {
            CalculationItem::Loan(_) => CalculationKind::Loan,
            CalculationItem::Roi(_) => CalculationKind::Roi,
            CalculationItem::SimpleInterest(_) => CalculationKind::SimpleInterest,
            CalculationItem::CompoundInterest(_) => CalculationKind::CompoundInterest,
            CalculationItem::SalesTax(_) => CalculationKind::SalesTax,
            CalculationItem::Rent(_) => CalculationKind::Rent,
            CalculationItem::Salary(_) => CalculationKind::Salary,
            CalculationItem::Swp(_) => CalculationKind::Swp,
            CalculationItem::Bmi(_) => CalculationKind::Bmi,
            CalculationItem::Bmr(_) => CalculationKind::Bmr,
            CalculationItem::Calories(_) => CalculationKind::Calories,
            CalculationItem::BodyFat(_) => CalculationKind::BodyFat,
            CalculationItem::Protein(_) => CalculationKind::Protein,
            CalculationItem::Carbs(_) => CalculationKind::Carbs,
            CalculationItem::Pace(_) => CalculationKind::Pace,
            CalculationItem::Pregnancy(_) => CalculationKind::Pregnancy,
            CalculationItem::Circle(_) => CalculationKind::Circle,
            CalculationItem::Pythagorean(_) => CalculationKind::Pythagorean,
            CalculationItem::Quadratic(_) => CalculationKind::Quadratic,
            CalculationItem::Ratio(_) => CalculationKind::Ratio,
            CalculationItem::Slope(_) => CalculationKind::Slope,
            CalculationItem::Statistics(_) => CalculationKind::Statistics,
            CalculationItem::Speed(_) => CalculationKind::Speed,
            CalculationItem::TimeDuration(_) => CalculationKind::TimeDuration,
            CalculationItem::Expression(_) => CalculationKind::Expression,
        }
    }

    /// Run the calculation.
    pub fn calculate(&self) -> CalcResult<CalculationOutput> {
        let kind = self.kind();
        debug!(calculator = kind.name(), "running calculation");

        let output = match self {
            CalculationItem::Loan(input) => financial::loan::calculate(input).map(CalculationOutput::Loan),
            CalculationItem::Roi(input) => financial::roi::calculate(input).map(CalculationOutput::Roi),
            CalculationItem::SimpleInterest(input) => {
                financial::interest::calculate_simple(input).map(CalculationOutput::SimpleInterest)
            }
            CalculationItem::CompoundInterest(input) => {
                financial::interest::calculate_compound(input).map(CalculationOutput::CompoundInterest)
            }
            CalculationItem::SalesTax(input) => financial::sales_tax::calculate(input).map(CalculationOutput::SalesTax),
            CalculationItem::Rent(input) => financial::rent::calculate(input).map(CalculationOutput::Rent),
            CalculationItem::Salary(input) => financial::salary::calculate(input).map(CalculationOutput::Salary),
            CalculationItem::Swp(input) => financial::swp::calculate(input).map(CalculationOutput::Swp),
            CalculationItem::Bmi(input) => health::bmi::calculate(input).map(CalculationOutput::Bmi),
            CalculationItem::Bmr(input) => health::energy::calculate_bmr(input).map(CalculationOutput::Bmr),
            CalculationItem::Calories(input) => {
                health::energy::calculate_calories(input).map(CalculationOutput::Calories)
            }
            CalculationItem::BodyFat(input) => health::body_fat::calculate(input).map(CalculationOutput::BodyFat),
            CalculationItem::Protein(input) => health::protein::calculate(input).map(CalculationOutput::Protein),
            CalculationItem::Carbs(input) => health::energy::calculate_carbs(input).map(CalculationOutput::Carbs),
            CalculationItem::Pace(input) => health::pace::calculate(input).map(CalculationOutput::Pace),
            CalculationItem::Pregnancy(input) => health::pregnancy::calculate(input).map(CalculationOutput::Pregnancy),
            CalculationItem::Circle(input) => math::circle::calculate(input).map(CalculationOutput::Circle),
            CalculationItem::Pythagorean(input) => {
                math::pythagorean::calculate(input).map(CalculationOutput::Pythagorean)
            }
            CalculationItem::Quadratic(input) => math::quadratic::calculate(input).map(CalculationOutput::Quadratic),
            CalculationItem::Ratio(input) => math::ratio::calculate(input).map(CalculationOutput::Ratio),
            CalculationItem::Slope(input) => math::slope::calculate(input).map(CalculationOutput::Slope),
            CalculationItem::Statistics(input) => {
                math::statistics::calculate(input).map(CalculationOutput::Statistics)
            }
            CalculationItem::Speed(input) => math::speed::calculate(input).map(CalculationOutput::Speed),
            CalculationItem::TimeDuration(input) => {
                math::time_duration::calculate(input).map(CalculationOutput::TimeDuration)
            }
            CalculationItem::Expression(input) => expression::calculate(input).map(CalculationOutput::Expression),
        };

        if let Err(err) = &output {
            debug!(calculator = kind.name(), error_code = err.error_code(), "calculation rejected");
        }
        output
    }
}

/// Result of [`CalculationItem::calculate`], tagged with the calculator kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "result", rename_all = "kebab-case")]
pub enum CalculationOutput {
    Loan(LoanResult),
    Roi(RoiResult),
    SimpleInterest(SimpleInterestResult),
    CompoundInterest(CompoundInterestResult),
    SalesTax(SalesTaxResult),
    Rent(RentResult),
    Salary(SalaryResult),
    Swp(SwpResult),
    Bmi(BmiResult),
    Bmr(BmrResult),
    Calories(CalorieResult),
    BodyFat(BodyFatResult),
    Protein(ProteinResult),
    Carbs(CarbResult),
    Pace(PaceResult),
    Pregnancy(PregnancyResult),
    Circle(CircleResult),
    Pythagorean(PythagoreanResult),
    Quadratic(QuadraticResult),
    Ratio(RatioResult),
    Slope(SlopeResult),
    Statistics(StatisticsResult),
    Speed(SpeedResult),
    TimeDuration(TimeDurationResult),
    Expression(ExpressionResult),
}

/// Parse `name`, build the input from `fields` and run it.
pub fn run(name: &str, fields: &RawFields, settings: &CalculatorSettings) -> CalcResult<CalculationOutput> {
    CalculationItem::from_named_fields(name, fields, settings)?.calculate()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_round_trip() {
        for kind in CalculationKind::ALL {
            assert_eq!(CalculationKind::parse(kind.name()), Some(kind));
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.name()));
        }
    }

    #[test]
    fn test_kind_aliases() {
        assert_eq!(CalculationKind::parse("Sales_Tax"), Some(CalculationKind::SalesTax));
        assert_eq!(CalculationKind::parse("standard deviation"), Some(CalculationKind::Statistics));
        assert_eq!(CalculationKind::parse("emi"), Some(CalculationKind::Loan));
        assert_eq!(CalculationKind::parse("beam"), None);
    }

    #[test]
    fn test_categories() {
        assert_eq!(CalculationKind::Swp.category(), Category::Financial);
        assert_eq!(CalculationKind::Pregnancy.category(), Category::Health);
        assert_eq!(CalculationKind::Expression.category(), Category::Math);
    }

    #[test]
    fn test_run_by_name() {
        let fields = RawFields::new().with("price", "100").with("tax_rate_percent", "8.25");
        match run("sales-tax", &fields, &CalculatorSettings::default()).unwrap() {
            CalculationOutput::SalesTax(result) => {
                assert_eq!(result.tax_amount, 8.25);
                assert_eq!(result.total_price, 108.25);
            }
            other => panic!("unexpected output {:?}", other),
        }
    }

    #[test]
    fn test_unknown_calculator() {
        let err = run("beam", &RawFields::new(), &CalculatorSettings::default()).unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_CALCULATOR");
    }

    #[test]
    fn test_item_json_shape() {
        let item = CalculationItem::Quadratic(QuadraticInput { a: 1.0, b: -3.0, c: 2.0 });
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "quadratic");
        assert_eq!(json["a"], 1.0);

        let restored: CalculationItem = serde_json::from_value(json).unwrap();
        assert_eq!(restored, item);
        assert_eq!(restored.kind(), CalculationKind::Quadratic);
    }

    #[test]
    fn test_output_json_shape() {
        let item = CalculationItem::Circle(CircleInput {
            measure: math::CircleMeasure::Radius,
            value: 10.0,
        });
        let json = serde_json::to_value(item.calculate().unwrap()).unwrap();
        assert_eq!(json["type"], "circle");
        assert_eq!(json["result"]["area"], 314.16);
    }
}
