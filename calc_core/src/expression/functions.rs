//! Built-in functions and named constants.

use std::collections::HashMap;
use std::f64::consts;

use once_cell::sync::Lazy;

/// Unary functions callable as `name(x)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sqrt,
    Cbrt,
    Ln,
    Log,
    Abs,
    Exp,
}

impl Function {
    pub const ALL: [Function; 12] = [
        Function::Sin,
        Function::Cos,
        Function::Tan,
        Function::Asin,
        Function::Acos,
        Function::Atan,
        Function::Sqrt,
        Function::Cbrt,
        Function::Ln,
        Function::Log,
        Function::Abs,
        Function::Exp,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Asin => "asin",
            Function::Acos => "acos",
            Function::Atan => "atan",
            Function::Sqrt => "sqrt",
            Function::Cbrt => "cbrt",
            Function::Ln => "ln",
            Function::Log => "log",
            Function::Abs => "abs",
            Function::Exp => "exp",
        }
    }
}

static FUNCTIONS: Lazy<HashMap<&'static str, Function>> = Lazy::new(|| {
    let mut table: HashMap<&'static str, Function> = Function::ALL.iter().map(|f| (f.name(), *f)).collect();
    // aliases
    table.insert("arcsin", Function::Asin);
    table.insert("arccos", Function::Acos);
    table.insert("arctan", Function::Atan);
    table.insert("log10", Function::Log);
    table
});

static CONSTANTS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([("pi", consts::PI), ("π", consts::PI), ("e", consts::E)])
});

/// Look up a (lowercased) function name
pub fn lookup_function(name: &str) -> Option<Function> {
    FUNCTIONS.get(name).copied()
}

/// Look up a (lowercased) constant name
pub fn lookup_constant(name: &str) -> Option<f64> {
    CONSTANTS.get(name).copied()
}
