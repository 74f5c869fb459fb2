//! Command execution. Each command produces a [`Report`] that
//! [`crate::output`] renders as text or JSON.

use std::fs;

use serde::Serialize;
use tracing::{debug, info};

use calc_core::calculations::financial::loan::{self, AmortizationRow, LoanInput, LoanResult};
use calc_core::calculations::{CalculationItem, CalculationKind, CalculationOutput, Category};
use calc_core::expression::{ExpressionInput, ExpressionResult};
use calc_core::{CalcError, CalcResult, CalculatorSettings, RawFields};

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// One row of `list`
#[derive(Debug, Clone, Serialize)]
pub struct CalculatorInfo {
    pub name: &'static str,
    pub category: Category,
    pub description: &'static str,
}

/// What a command produced
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Report {
    List {
        calculators: Vec<CalculatorInfo>,
    },
    Run {
        #[serde(flatten)]
        output: CalculationOutput,
    },
    Eval {
        expression: String,
        #[serde(flatten)]
        result: ExpressionResult,
    },
    Schedule {
        summary: LoanResult,
        rows: Vec<AmortizationRow>,
    },
}

/// Load settings from the `--settings` file (or `$CALC_SETTINGS`), then
/// apply command-line overrides.
pub fn load_settings(cli: &Cli) -> Result<CalculatorSettings, CliError> {
    let mut settings = match &cli.settings {
        Some(path) => {
            let json = fs::read_to_string(path).map_err(|source| CliError::SettingsFile {
                path: path.clone(),
                source,
            })?;
            debug!(path = %path.display(), "loaded settings file");
            CalculatorSettings::from_json(&json)?
        }
        None => CalculatorSettings::default(),
    };

    if let Some(currency) = cli.currency {
        settings.currency = currency;
    }
    if let Some(units) = cli.units {
        settings.unit_system = units;
    }
    if let Some(angle) = cli.angle {
        settings.angle_unit = angle;
    }
    settings.validate()?;
    Ok(settings)
}

/// Collect `NAME=VALUE` arguments. A repeated name keeps the last value.
pub fn parse_fields(pairs: &[String]) -> CalcResult<RawFields> {
    pairs
        .iter()
        .map(|pair| RawFields::parse_assignment(pair))
        .collect::<CalcResult<Vec<_>>>()
        .map(|assignments| assignments.into_iter().collect())
}

pub fn run(cli: &Cli, settings: &CalculatorSettings) -> Result<Report, CliError> {
    let report = match &cli.command {
        Command::List { category } => {
            let wanted = category.map(Category::from);
            let calculators = CalculationKind::ALL
                .into_iter()
                .filter(|kind| wanted.map_or(true, |c| kind.category() == c))
                .map(|kind| CalculatorInfo {
                    name: kind.name(),
                    category: kind.category(),
                    description: kind.description(),
                })
                .collect();
            Report::List { calculators }
        }
        Command::Run { kind, fields } => {
            let kind = CalculationKind::parse(kind).ok_or_else(|| CalcError::unknown_calculator(kind.as_str()))?;
            let fields = parse_fields(fields)?;
            let item = CalculationItem::from_fields(kind, &fields, settings)?;
            info!(calculator = kind.name(), "running calculator");
            Report::Run {
                output: item.calculate()?,
            }
        }
        Command::Eval { expression } => {
            let input = ExpressionInput {
                expression: expression.clone(),
                angle_unit: settings.angle_unit,
            };
            let result = calc_core::expression::calculate(&input)?;
            Report::Eval {
                expression: expression.clone(),
                result,
            }
        }
        Command::Schedule { fields } => {
            let input = LoanInput::from_fields(&parse_fields(fields)?)?;
            Report::Schedule {
                summary: loan::calculate(&input)?,
                rows: loan::amortization_schedule(&input)?,
            }
        }
    };
    Ok(report)
}
