//! Text and JSON rendering of command reports and errors.

use std::io::{self, Write};

use serde::Serialize;
use serde_json::{json, Value};

use calc_core::calculations::Category;
use calc_core::format::{format_currency, format_number};
use calc_core::CalculatorSettings;

use crate::commands::Report;
use crate::error::CliError;

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Monetary fields of financial results, everything except rates, counts
/// and status tags.
fn is_money_field(key: &str) -> bool {
    !(key.ends_with("percent") || key.ends_with("months") || key == "years" || key == "status")
}

fn render_value(key: &str, value: &Value, money: bool, settings: &CalculatorSettings) -> String {
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(x) if money && is_money_field(key) => format_currency(x, settings.currency),
            Some(x) => format_number(x),
            None => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Bool(b) => (if *b { "yes" } else { "no" }).to_string(),
        Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}

/// Print an object as aligned `key: value` lines, descending into nested
/// objects with an indent.
fn write_fields<W: Write>(
    out: &mut W,
    object: &serde_json::Map<String, Value>,
    indent: usize,
    money: bool,
    settings: &CalculatorSettings,
) -> io::Result<()> {
    let width = object.keys().map(String::len).max().unwrap_or(0);
    for (key, value) in object {
        let label = key.replace('_', " ");
        match value {
            Value::Object(nested) => {
                writeln!(out, "{:indent$}{}:", "", label, indent = indent)?;
                write_fields(out, nested, indent + 2, money, settings)?;
            }
            _ => writeln!(
                out,
                "{:indent$}{:<width$}  {}",
                "",
                format!("{}:", label),
                render_value(key, value, money, settings),
                indent = indent,
                width = width + 1
            )?,
        }
    }
    Ok(())
}

fn render_text<W: Write>(out: &mut W, report: &Report, settings: &CalculatorSettings) -> Result<(), CliError> {
    match report {
        Report::List { calculators } => {
            let width = calculators.iter().map(|c| c.name.len()).max().unwrap_or(0);
            let mut current: Option<Category> = None;
            for info in calculators {
                if current != Some(info.category) {
                    if current.is_some() {
                        writeln!(out)?;
                    }
                    writeln!(out, "{}", info.category)?;
                    current = Some(info.category);
                }
                writeln!(out, "  {:<width$}  {}", info.name, info.description, width = width)?;
            }
        }
        Report::Run { output } => {
            let value = serde_json::to_value(output)?;
            let kind = value.get("type").and_then(Value::as_str).unwrap_or_default();
            let money = calc_core::CalculationKind::parse(kind).map(|k| k.category()) == Some(Category::Financial);
            writeln!(out, "{}", kind)?;
            match value.get("result") {
                Some(Value::Object(fields)) => write_fields(out, fields, 2, money, settings)?,
                Some(other) => writeln!(out, "  {}", other)?,
                None => {}
            }
        }
        Report::Eval { expression, result } => {
            writeln!(out, "{} = {}", expression, result.display)?;
        }
        Report::Schedule { summary, rows } => {
            let money = |x: f64| format_currency(x, settings.currency);
            writeln!(
                out,
                "{} payments of {} (total {}, interest {})",
                summary.term_months,
                money(summary.monthly_payment),
                money(summary.total_payment),
                money(summary.total_interest)
            )?;
            writeln!(out)?;
            writeln!(out, "{:>5}  {:>14}  {:>14}  {:>14}  {:>16}", "month", "payment", "principal", "interest", "balance")?;
            for row in rows {
                writeln!(
                    out,
                    "{:>5}  {:>14}  {:>14}  {:>14}  {:>16}",
                    row.month,
                    money(row.payment),
                    money(row.principal),
                    money(row.interest),
                    money(row.balance)
                )?;
            }
        }
    }
    Ok(())
}

/// Render a successful report to stdout.
pub fn render(report: &Report, settings: &CalculatorSettings, as_json: bool, pretty: bool) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if as_json {
        write_json(&mut out, report, pretty)
    } else {
        render_text(&mut out, report, settings)
    }
}

/// JSON body describing a failure
pub fn error_body(error: &CliError) -> Value {
    let details = match error {
        CliError::Calc(err) => serde_json::to_value(err).unwrap_or(Value::Null),
        _ => Value::Null,
    };
    json!({
        "error_code": error.error_code(),
        "message": error.to_string(),
        "details": details,
    })
}

/// Report a failure: JSON on stdout in `--json` mode, text on stderr otherwise.
pub fn render_error(error: &CliError, as_json: bool) {
    if as_json {
        let body = error_body(error);
        if write_json(&mut io::stdout().lock(), &body, false).is_ok() {
            return;
        }
    }
    eprintln!("error: {}", error);
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::calculations::financial::loan::LoanResult;
    use calc_core::{CalcError, CalculationOutput};

    fn text(report: &Report) -> String {
        let mut buffer = Vec::new();
        render_text(&mut buffer, report, &CalculatorSettings::default()).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_loan_text_uses_currency() {
        let report = Report::Run {
            output: CalculationOutput::Loan(LoanResult {
                monthly_payment: 188.71,
                total_payment: 11322.74,
                total_interest: 1322.74,
                term_months: 60,
            }),
        };
        let rendered = text(&report);
        assert!(rendered.starts_with("loan\n"));
        assert!(rendered.contains("$11,322.74"));
        assert!(rendered.contains("term months:"));
        assert!(rendered.contains(" 60\n"));
    }

    #[test]
    fn test_error_body() {
        let error = CliError::from(CalcError::missing_field("principal"));
        let body = error_body(&error);
        assert_eq!(body["error_code"], "MISSING_FIELD");
        assert_eq!(body["details"]["type"], "MissingField");
        assert_eq!(body["details"]["details"]["field"], "principal");
    }
}
