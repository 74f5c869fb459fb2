//! End-to-end calculator scenarios
//!
//! Each test goes through the same path as the CLI: raw string fields,
//! calculator lookup by name, validation and calculation.

use calc_core::calculations::financial::swp::Depletion;
use calc_core::calculations::health::bmi::BmiCategory;
use calc_core::calculations::math::pythagorean::Side;
use calc_core::calculations::math::quadratic::Roots;
use calc_core::calculations::math::slope::Line;
use calc_core::calculations::run;
use calc_core::units::AngleUnit;
use calc_core::{CalcError, CalculationItem, CalculationOutput, CalculatorSettings, ErrorKind, RawFields};
use chrono::NaiveDate;

fn fields(pairs: &[(&str, &str)]) -> RawFields {
    pairs.iter().copied().collect()
}

fn run_default(name: &str, pairs: &[(&str, &str)]) -> Result<CalculationOutput, CalcError> {
    run(name, &fields(pairs), &CalculatorSettings::default())
}

// ============================================================================
// Financial
// ============================================================================

#[test]
fn loan_five_year_reference() {
    let output = run_default(
        "loan",
        &[("principal", "10000"), ("annual_rate_percent", "5"), ("term_years", "5")],
    )
    .unwrap();

    match output {
        CalculationOutput::Loan(result) => {
            assert_eq!(result.monthly_payment, 188.71);
            assert_eq!(result.total_payment, 11322.74);
            assert_eq!(result.total_interest, 1322.74);
            assert_eq!(result.term_months, 60);
        }
        other => panic!("expected loan output, got {:?}", other),
    }
}

#[test]
fn loan_aliases_reach_the_same_calculator() {
    let pairs = [("principal", "1200"), ("annual_rate_percent", "0"), ("term_months", "12")];
    let loan = run_default("loan", &pairs).unwrap();
    assert_eq!(run_default("EMI", &pairs).unwrap(), loan);
    assert_eq!(run_default("mortgage", &pairs).unwrap(), loan);
}

#[test]
fn sales_tax_with_spaced_name() {
    match run_default("Sales Tax", &[("price", "100"), ("tax_rate_percent", "8.25")]).unwrap() {
        CalculationOutput::SalesTax(result) => {
            assert_eq!(result.tax_amount, 8.25);
            assert_eq!(result.total_price, 108.25);
        }
        other => panic!("expected sales tax output, got {:?}", other),
    }
}

#[test]
fn swp_covered_by_returns_never_depletes() {
    let output = run_default(
        "swp",
        &[("principal", "100000"), ("monthly_withdrawal", "1000"), ("annual_return_percent", "12")],
    )
    .unwrap();

    match output {
        CalculationOutput::Swp(result) => match result.depletion {
            Depletion::Never {
                monthly_return,
                monthly_surplus,
            } => {
                assert_eq!(monthly_return, 1000.0);
                assert_eq!(monthly_surplus, 0.0);
            }
            other => panic!("expected a corpus that never depletes, got {:?}", other),
        },
        other => panic!("expected swp output, got {:?}", other),
    }
}

#[test]
fn missing_principal_is_reported_by_name() {
    let err = run_default("loan", &[("annual_rate_percent", "5"), ("term_years", "5")]).unwrap_err();
    assert_eq!(err.error_code(), "MISSING_FIELD");
    assert_eq!(err.field(), Some("principal"));
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[test]
fn blank_field_counts_as_missing() {
    let err = run_default("sales-tax", &[("price", "   "), ("tax_rate_percent", "5")]).unwrap_err();
    assert_eq!(err.error_code(), "MISSING_FIELD");
}

// ============================================================================
// Health
// ============================================================================

#[test]
fn bmi_metric_normal_range() {
    match run_default("bmi", &[("weight", "70"), ("height", "175")]).unwrap() {
        CalculationOutput::Bmi(result) => {
            assert_eq!(result.bmi, 22.86);
            assert_eq!(result.category, BmiCategory::Normal);
        }
        other => panic!("expected bmi output, got {:?}", other),
    }
}

#[test]
fn pregnancy_from_last_period() {
    let output = run_default("due-date", &[("last_period", "2024-01-01"), ("today", "2024-03-01")]).unwrap();

    match output {
        CalculationOutput::Pregnancy(result) => {
            assert_eq!(result.due_date, NaiveDate::from_ymd_opt(2024, 10, 7).unwrap());
            assert_eq!(result.weeks_pregnant, 8);
            assert_eq!(result.extra_days, 4);
            assert_eq!(result.trimester, 1);
            assert_eq!(result.days_until_due, 220);
        }
        other => panic!("expected pregnancy output, got {:?}", other),
    }
}

#[test]
fn negative_weight_is_invalid() {
    let err = run_default("bmi", &[("weight", "-70"), ("height", "175")]).unwrap_err();
    assert_eq!(err.error_code(), "INVALID_INPUT");
    assert_eq!(err.field(), Some("weight"));
    assert_eq!(err.kind(), ErrorKind::Domain);
}

// ============================================================================
// Math
// ============================================================================

#[test]
fn circle_from_radius() {
    match run_default("circle", &[("radius", "10")]).unwrap() {
        CalculationOutput::Circle(result) => {
            assert_eq!(result.radius, 10.0);
            assert_eq!(result.diameter, 20.0);
            assert_eq!(result.circumference, 62.83);
            assert_eq!(result.area, 314.16);
        }
        other => panic!("expected circle output, got {:?}", other),
    }
}

#[test]
fn results_too_large_to_represent_are_rejected() {
    for (name, pairs) in [
        ("circle", vec![("radius", "1e200")]),
        ("quadratic", vec![("a", "1"), ("b", "1e200"), ("c", "1")]),
        ("loan", vec![("principal", "1e308"), ("annual_rate_percent", "5"), ("term_months", "1200")]),
    ] {
        let err = run_default(name, &pairs).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT", "{}", name);
        assert_eq!(err.kind(), ErrorKind::Domain);
    }
}

#[test]
fn circle_rejects_two_measures() {
    let err = run_default("circle", &[("radius", "1"), ("area", "3")]).unwrap_err();
    assert_eq!(err.error_code(), "FIELD_COUNT");
}

#[test]
fn pythagorean_three_four_five() {
    match run_default("pythagorean", &[("a", "3"), ("b", "4")]).unwrap() {
        CalculationOutput::Pythagorean(result) => {
            assert_eq!(result.c, 5.0);
            assert_eq!(result.solved, Side::C);
        }
        other => panic!("expected pythagorean output, got {:?}", other),
    }
}

#[test]
fn quadratic_real_and_complex() {
    match run_default("quadratic", &[("a", "1"), ("b", "-3"), ("c", "2")]).unwrap() {
        CalculationOutput::Quadratic(result) => {
            assert_eq!(result.roots, Roots::TwoReal { x1: 2.0, x2: 1.0 });
        }
        other => panic!("expected quadratic output, got {:?}", other),
    }

    match run_default("quadratic", &[("a", "1"), ("b", "2"), ("c", "5")]).unwrap() {
        CalculationOutput::Quadratic(result) => {
            assert_eq!(result.discriminant, -16.0);
            assert!(!result.roots.is_real());
            match result.roots {
                Roots::Complex { text, .. } => assert_eq!(text, "-1 ± 2i"),
                other => panic!("expected complex roots, got {:?}", other),
            }
        }
        other => panic!("expected quadratic output, got {:?}", other),
    }
}

#[test]
fn quadratic_requires_non_zero_leading_coefficient() {
    let err = run_default("quadratic", &[("a", "0"), ("b", "2"), ("c", "1")]).unwrap_err();
    assert_eq!(err.error_code(), "INVALID_INPUT");
    assert_eq!(err.field(), Some("a"));
}

#[test]
fn standard_deviation_alias() {
    let output = run_default("std-dev", &[("values", "2, 4, 4, 4, 5, 5, 7, 9")]).unwrap();

    match output {
        CalculationOutput::Statistics(result) => {
            assert_eq!(result.count, 8);
            assert_eq!(result.mean, 5.0);
            assert_eq!(result.population_std_dev, 2.0);
            assert_eq!(result.sample_std_dev, 2.1381);
        }
        other => panic!("expected statistics output, got {:?}", other),
    }
}

#[test]
fn slope_of_vertical_line() {
    let output = run_default("slope", &[("x1", "3"), ("y1", "1"), ("x2", "3"), ("y2", "8")]).unwrap();

    match output {
        CalculationOutput::Slope(result) => {
            assert_eq!(result.line, Line::Vertical { x: 3.0 });
            assert_eq!(result.slope(), None);
        }
        other => panic!("expected slope output, got {:?}", other),
    }
}

#[test]
fn duration_subtraction_clamps_at_zero() {
    let output = run_default(
        "time-duration",
        &[("hours1", "1"), ("hours2", "2"), ("operation", "subtract")],
    )
    .unwrap();

    match output {
        CalculationOutput::TimeDuration(result) => {
            assert_eq!(result.total_seconds, 0);
            assert!(result.clamped);
        }
        other => panic!("expected duration output, got {:?}", other),
    }
}

#[test]
fn speed_with_all_three_fields_is_rejected() {
    let err = run_default("speed", &[("distance", "10"), ("time", "2"), ("speed", "5")]).unwrap_err();
    assert_eq!(err.error_code(), "FIELD_COUNT");
}

#[test]
fn expression_follows_settings_angle_unit() {
    let degrees = CalculatorSettings {
        angle_unit: AngleUnit::Degrees,
        ..CalculatorSettings::default()
    };

    match run("calc", &fields(&[("expression", "2 + 3 * 4")]), &degrees).unwrap() {
        CalculationOutput::Expression(result) => {
            assert_eq!(result.value, 14.0);
            assert_eq!(result.display, "14");
        }
        other => panic!("expected expression output, got {:?}", other),
    }

    match run("expression", &fields(&[("expression", "cos(60) * 4")]), &degrees).unwrap() {
        CalculationOutput::Expression(result) => assert_eq!(result.value, 2.0),
        other => panic!("expected expression output, got {:?}", other),
    }
}

#[test]
fn malformed_expression_reports_position() {
    let err = run_default("expression", &[("expression", "3 * (4 + ")]).unwrap_err();
    assert_eq!(err.error_code(), "INVALID_EXPRESSION");
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[test]
fn unknown_calculator() {
    let err = run_default("beam", &[]).unwrap_err();
    assert_eq!(err.error_code(), "UNKNOWN_CALCULATOR");
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn calculation_item_json_round_trip() {
    let settings = CalculatorSettings::default();
    let items = [
        CalculationItem::from_named_fields(
            "loan",
            &fields(&[("principal", "250000"), ("annual_rate_percent", "6.5"), ("term_years", "30")]),
            &settings,
        )
        .unwrap(),
        CalculationItem::from_named_fields("ratio", &fields(&[("mode", "simplify"), ("a", "12"), ("b", "18")]), &settings)
            .unwrap(),
    ];

    for item in items {
        let json = serde_json::to_string(&item).unwrap();
        let restored: CalculationItem = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, item);
        assert_eq!(restored.calculate().unwrap(), item.calculate().unwrap());
    }
}

#[test]
fn output_is_tagged_by_calculator() {
    let output = run_default("sales-tax", &[("price", "10"), ("tax_rate_percent", "10")]).unwrap();
    let value = serde_json::to_value(&output).unwrap();
    assert_eq!(value["type"], "sales-tax");
    assert_eq!(value["result"]["total_price"], 11.0);
}
