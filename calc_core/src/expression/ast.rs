//! Syntax tree for scientific expressions.

use std::fmt;

use super::functions::Function;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulo => "%",
            BinaryOperator::Power => "^",
        };
        f.write_str(symbol)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Negate(Box<Expr>),
    Factorial(Box<Expr>),
    Binary {
        left: Box<Expr>,
        op: BinaryOperator,
        right: Box<Expr>,
    },
    Call {
        function: Function,
        argument: Box<Expr>,
    },
}

impl Expr {
    pub fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn negate(operand: Expr) -> Self {
        Expr::Negate(Box::new(operand))
    }

    pub fn factorial(operand: Expr) -> Self {
        Expr::Factorial(Box::new(operand))
    }

    pub fn call(function: Function, argument: Expr) -> Self {
        Expr::Call {
            function,
            argument: Box::new(argument),
        }
    }
}

/// Fully parenthesized rendering, mostly for debugging and tests
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(n) => write!(f, "{}", n),
            Expr::Negate(operand) => write!(f, "(-{})", operand),
            Expr::Factorial(operand) => write!(f, "({}!)", operand),
            Expr::Binary { left, op, right } => write!(f, "({} {} {})", left, op, right),
            Expr::Call { function, argument } => write!(f, "{}({})", function.name(), argument),
        }
    }
}
