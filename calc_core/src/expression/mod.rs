//! # Scientific Expression Evaluator
//!
//! Evaluates calculator-style expressions such as `2 * sin(30) + 5!`.
//! Input is tokenized, parsed into an [`ast::Expr`] tree by a recursive
//! descent parser and then walked by the [`evaluator::Evaluator`]. Nothing
//! is ever executed dynamically.
//!
//! ## Grammar
//!
//! - binary `+ - * / % ^` (also `×`, `÷`, `**`)
//! - unary `-` and `+`, postfix `!` (whole numbers up to 170)
//! - parentheses
//! - constants `pi`, `π`, `e`
//! - functions `sin cos tan asin acos atan sqrt cbrt ln log abs exp`
//!
//! Trigonometric functions follow the [`AngleUnit`] setting.
//!
//! ```rust
//! use calc_core::expression::evaluate;
//! use calc_core::units::AngleUnit;
//!
//! let value = evaluate("2 ^ 3 + sqrt(16)", AngleUnit::Radians).unwrap();
//! assert_eq!(value, 12.0);
//! ```

pub mod ast;
pub mod evaluator;
pub mod functions;
pub mod lexer;
pub mod parser;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::format::{format_number, round_to};
use crate::settings::CalculatorSettings;
use crate::units::AngleUnit;
use crate::validation::RawFields;

pub use evaluator::Evaluator;
pub use functions::Function;
pub use parser::parse;

/// Decimal places kept in evaluator results; hides float noise such as
/// `sin(180°) = 1.2e-16`.
pub const EXPRESSION_DECIMALS: u32 = 10;

/// Upper bound on expression length, in characters
pub const MAX_EXPRESSION_LEN: usize = 1_000;

/// Parse and evaluate `source` without rounding.
pub fn evaluate(source: &str, angle_unit: AngleUnit) -> CalcResult<f64> {
    let expr = parse(source)?;
    Evaluator::new(source, angle_unit).evaluate(&expr)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpressionInput {
    pub expression: String,
    #[serde(default)]
    pub angle_unit: AngleUnit,
}

impl ExpressionInput {
    /// Fields `expression` and optional `angle_unit` (default from settings).
    pub fn from_fields(fields: &RawFields, settings: &CalculatorSettings) -> CalcResult<Self> {
        let input = ExpressionInput {
            expression: fields.text("expression")?.to_string(),
            angle_unit: fields.choice("angle_unit", settings.angle_unit, "radians, degrees", AngleUnit::parse)?,
        };
        input.validate()?;
        Ok(input)
    }

    pub fn validate(&self) -> CalcResult<()> {
        if self.expression.trim().is_empty() {
            return Err(CalcError::missing_field("expression"));
        }
        let length = self.expression.chars().count();
        if length > MAX_EXPRESSION_LEN {
            return Err(CalcError::invalid_input(
                "expression",
                format!("{} characters", length),
                format!("Expression is longer than {} characters", MAX_EXPRESSION_LEN),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpressionResult {
    pub value: f64,
    /// `value` without trailing zeros
    pub display: String,
}

pub fn calculate(input: &ExpressionInput) -> CalcResult<ExpressionResult> {
    input.validate()?;

    let value = round_to(evaluate(&input.expression, input.angle_unit)?, EXPRESSION_DECIMALS);

    Ok(ExpressionResult {
        value,
        display: format_number(value),
    })
}
