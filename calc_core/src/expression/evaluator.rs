//! Tree-walking evaluator.
//!
//! Domain violations (division by zero, roots and logarithms of invalid
//! arguments, undefined tangents, non-finite intermediates) are reported as
//! [`CalcError::InvalidInput`] on the `expression` field.

use super::ast::{BinaryOperator, Expr};
use super::functions::Function;
use crate::errors::{CalcError, CalcResult};
use crate::units::AngleUnit;

/// Largest n for which n! fits in an f64
pub const MAX_FACTORIAL: u32 = 170;

pub struct Evaluator<'a> {
    source: &'a str,
    angle_unit: AngleUnit,
}

impl<'a> Evaluator<'a> {
    pub fn new(source: &'a str, angle_unit: AngleUnit) -> Self {
        Self { source, angle_unit }
    }

    fn domain_error(&self, reason: impl Into<String>) -> CalcError {
        CalcError::invalid_input("expression", self.source, reason)
    }

    fn finite(&self, value: f64) -> CalcResult<f64> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(self.domain_error("Result is too large or undefined"))
        }
    }

    pub fn evaluate(&self, expr: &Expr) -> CalcResult<f64> {
        let value = match expr {
            Expr::Number(n) => *n,
            Expr::Negate(operand) => -self.evaluate(operand)?,
            Expr::Factorial(operand) => self.factorial(self.evaluate(operand)?)?,
            Expr::Binary { left, op, right } => {
                let l = self.evaluate(left)?;
                let r = self.evaluate(right)?;
                self.binary(l, *op, r)?
            }
            Expr::Call { function, argument } => {
                let x = self.evaluate(argument)?;
                self.call(*function, x)?
            }
        };
        self.finite(value)
    }

    fn binary(&self, l: f64, op: BinaryOperator, r: f64) -> CalcResult<f64> {
        match op {
            BinaryOperator::Add => Ok(l + r),
            BinaryOperator::Subtract => Ok(l - r),
            BinaryOperator::Multiply => Ok(l * r),
            BinaryOperator::Divide if r == 0.0 => Err(self.domain_error("Division by zero")),
            BinaryOperator::Divide => Ok(l / r),
            BinaryOperator::Modulo if r == 0.0 => Err(self.domain_error("Modulo by zero")),
            BinaryOperator::Modulo => Ok(l % r),
            BinaryOperator::Power => {
                let value = l.powf(r);
                if value.is_nan() {
                    return Err(self.domain_error("Fractional power of a negative number"));
                }
                Ok(value)
            }
        }
    }

    fn factorial(&self, n: f64) -> CalcResult<f64> {
        if n < 0.0 || n.fract() != 0.0 {
            return Err(self.domain_error("Factorial needs a non-negative whole number"));
        }
        if n > MAX_FACTORIAL as f64 {
            return Err(self.domain_error(format!("Factorial is limited to n ≤ {}", MAX_FACTORIAL)));
        }
        Ok((2..=n as u32).fold(1.0, |acc, k| acc * k as f64))
    }

    fn call(&self, function: Function, x: f64) -> CalcResult<f64> {
        let value = match function {
            Function::Sin => self.angle_unit.to_radians(x).sin(),
            Function::Cos => self.angle_unit.to_radians(x).cos(),
            Function::Tan => {
                if self.angle_unit == AngleUnit::Degrees && x.rem_euclid(180.0) == 90.0 {
                    return Err(self.domain_error("Tangent is undefined at odd multiples of 90°"));
                }
                self.angle_unit.to_radians(x).tan()
            }
            Function::Asin | Function::Acos if !(-1.0..=1.0).contains(&x) => {
                return Err(self.domain_error(format!("{} is defined only on [-1, 1]", function.name())));
            }
            Function::Asin => self.angle_unit.from_radians(x.asin()),
            Function::Acos => self.angle_unit.from_radians(x.acos()),
            Function::Atan => self.angle_unit.from_radians(x.atan()),
            Function::Sqrt if x < 0.0 => {
                return Err(self.domain_error("Square root of a negative number"));
            }
            Function::Sqrt => x.sqrt(),
            Function::Cbrt => x.cbrt(),
            Function::Ln | Function::Log if x <= 0.0 => {
                return Err(self.domain_error("Logarithm of a non-positive number"));
            }
            Function::Ln => x.ln(),
            Function::Log => x.log10(),
            Function::Abs => x.abs(),
            Function::Exp => x.exp(),
        };
        Ok(value)
    }
}
