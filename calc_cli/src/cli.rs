//! CLI argument definitions for Tally.
//!
//! # Commands
//!
//! | Command    | Description                               |
//! |------------|-------------------------------------------|
//! | `list`     | List the available calculators            |
//! | `run`      | Run one calculator from `name=value` pairs |
//! | `eval`     | Evaluate a scientific expression          |
//! | `schedule` | Print a loan amortization schedule        |
//!
//! # Global Options
//!
//! | Option       | Default | Description                                 |
//! |--------------|---------|---------------------------------------------|
//! | `--settings` | none    | Settings JSON file (or `$CALC_SETTINGS`)    |
//! | `--json`     | `false` | Emit JSON instead of text                   |
//! | `--pretty`   | `false` | Indent JSON output                          |
//! | `--currency` | settings| Override the display currency               |
//! | `--units`    | settings| Override metric/imperial                    |
//! | `--angle`    | settings| Override radians/degrees                    |
//!
//! # Examples
//!
//! ```bash
//! calc_cli run loan -f principal=10000 -f annual_rate_percent=5 -f term_years=5
//! calc_cli --json run statistics -f "values=2 4 4 4 5 5 7 9"
//! calc_cli --angle degrees eval "2 * sin(30) + 5!"
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use calc_core::calculations::Category;
use calc_core::units::{AngleUnit, Currency, UnitSystem};

/// Tally - calculator formula library on the command line
#[derive(Debug, Parser)]
#[command(name = "calc_cli", author, version, about = "Financial, health and math calculators")]
pub struct Cli {
    /// Settings JSON file. Missing keys take their defaults.
    #[arg(long, global = true, env = "CALC_SETTINGS", value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Emit JSON instead of human-readable text.
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Display currency (USD, EUR, GBP, INR, JPY, CAD, AUD).
    #[arg(long, global = true, value_parser = parse_currency)]
    pub currency: Option<Currency>,

    /// Unit system for weights and lengths.
    #[arg(long, global = true, value_parser = parse_unit_system)]
    pub units: Option<UnitSystem>,

    /// Angle unit for trigonometric functions.
    #[arg(long, global = true, value_parser = parse_angle_unit)]
    pub angle: Option<AngleUnit>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the available calculators.
    List {
        /// Only show one category.
        #[arg(long, value_enum)]
        category: Option<CategoryArg>,
    },

    /// Run a calculator.
    Run {
        /// Calculator name, e.g. `loan`, `bmi`, `quadratic` (see `list`).
        kind: String,

        /// Input field as NAME=VALUE. Repeatable.
        #[arg(short = 'f', long = "field", value_name = "NAME=VALUE")]
        fields: Vec<String>,
    },

    /// Evaluate a scientific expression.
    Eval {
        /// Expression, e.g. "2 * sin(30) + sqrt(16)".
        expression: String,
    },

    /// Print the month-by-month amortization schedule of a loan.
    Schedule {
        /// Loan field as NAME=VALUE (principal, annual_rate_percent,
        /// term_months or term_years). Repeatable.
        #[arg(short = 'f', long = "field", value_name = "NAME=VALUE")]
        fields: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    Financial,
    Health,
    Math,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Financial => Category::Financial,
            CategoryArg::Health => Category::Health,
            CategoryArg::Math => Category::Math,
        }
    }
}

fn parse_currency(raw: &str) -> Result<Currency, String> {
    Currency::parse(raw).ok_or_else(|| format!("unknown currency '{}'", raw))
}

fn parse_unit_system(raw: &str) -> Result<UnitSystem, String> {
    UnitSystem::parse(raw).ok_or_else(|| format!("expected metric or imperial, got '{}'", raw))
}

fn parse_angle_unit(raw: &str) -> Result<AngleUnit, String> {
    AngleUnit::parse(raw).ok_or_else(|| format!("expected radians or degrees, got '{}'", raw))
}
