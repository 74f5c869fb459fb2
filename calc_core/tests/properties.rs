//! Calculator Property Tests
//!
//! Mathematical relationships that must hold for every valid input, not
//! just the reference scenarios.

use calc_core::calculations::financial::interest::{calculate_simple, SimpleInterestInput};
use calc_core::calculations::financial::loan::{self, LoanInput};
use calc_core::calculations::financial::swp::{self, Depletion, SwpInput};
use calc_core::calculations::math::pythagorean::{self, PythagoreanInput};
use calc_core::calculations::math::slope::{self, SlopeInput};
use calc_core::calculations::math::statistics::{self, StatisticsInput};
use calc_core::calculations::math::time_duration::{self, DurationOperation, DurationParts, TimeDurationInput};
use calc_core::equations::finance::{amortized_payment, balance_after_withdrawals, depletion_months, monthly_rate};
use proptest::prelude::*;

fn duration_parts() -> impl Strategy<Value = DurationParts> {
    (0u64..3650, 0u64..48, 0u64..120, 0u64..120).prop_map(|(days, hours, minutes, seconds)| DurationParts {
        days,
        hours,
        minutes,
        seconds,
    })
}

proptest! {
    #[test]
    fn amortized_payment_is_positive(
        principal in 1.0f64..1_000_000.0,
        rate in 0.0f64..30.0,
        months in 1u32..=480,
    ) {
        let payment = amortized_payment(principal, monthly_rate(rate), months as f64);
        prop_assert!(payment > 0.0);
        // never less than straight-line repayment
        prop_assert!(payment >= principal / months as f64 - 1e-9);
    }

    #[test]
    fn loan_totals_are_consistent(
        principal in 100.0f64..1_000_000.0,
        rate in 0.0f64..30.0,
        months in 1u32..=480,
    ) {
        let input = LoanInput { principal, annual_rate_percent: rate, term_months: months };
        let result = loan::calculate(&input).unwrap();
        let n = months as f64;

        // monthly_payment is rounded to the cent, the totals are not re-derived from it
        prop_assert!((result.total_payment - result.monthly_payment * n).abs() <= 0.005 * n + 0.01);
        prop_assert!((result.total_interest - (result.total_payment - principal)).abs() <= 0.011);
        prop_assert!(result.total_interest >= -0.01);
    }

    #[test]
    fn amortization_schedule_pays_off_principal(
        principal in 100.0f64..100_000.0,
        rate in 0.0f64..20.0,
        months in 1u32..=360,
    ) {
        let input = LoanInput { principal, annual_rate_percent: rate, term_months: months };
        let rows = loan::amortization_schedule(&input).unwrap();
        prop_assert_eq!(rows.len(), months as usize);
        prop_assert_eq!(rows[rows.len() - 1].balance, 0.0);

        let repaid: f64 = rows.iter().map(|row| row.principal).sum();
        prop_assert!((repaid - principal).abs() <= 0.005 * months as f64 + 0.01);
    }

    #[test]
    fn simple_interest_matches_formula(
        principal in 0.0f64..1_000_000.0,
        rate in 0.0f64..100.0,
        time in 0.0f64..50.0,
    ) {
        let input = SimpleInterestInput { principal, rate_percent: rate, time };
        let result = calculate_simple(&input).unwrap();
        let expected = principal * (rate / 100.0) * time;
        prop_assert!((result.interest - expected).abs() <= 0.005 + expected * 1e-12);
        prop_assert!((result.total_amount - (principal + expected)).abs() <= 0.005 + expected * 1e-12 + principal * 1e-12);
    }

    #[test]
    fn slope_is_unchanged_by_point_swap(
        x1 in -1.0e6f64..1.0e6,
        y1 in -1.0e6f64..1.0e6,
        x2 in -1.0e6f64..1.0e6,
        y2 in -1.0e6f64..1.0e6,
    ) {
        let input = SlopeInput { x1, y1, x2, y2 };
        let forward = slope::calculate(&input).unwrap();
        let backward = slope::calculate(&input.swapped()).unwrap();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn vertical_lines_have_no_slope(x in -1.0e6f64..1.0e6, y1 in -1.0e6f64..1.0e6, y2 in -1.0e6f64..1.0e6) {
        let result = slope::calculate(&SlopeInput { x1: x, y1, x2: x, y2 }).unwrap();
        prop_assert_eq!(result.slope(), None);
    }

    #[test]
    fn pythagorean_round_trip(a in 0.01f64..10_000.0, b in 0.01f64..10_000.0) {
        let forward = pythagorean::calculate(&PythagoreanInput { a: Some(a), b: Some(b), c: None }).unwrap();
        let c = forward.solved_value;
        prop_assert!(c > a && c > b);
        prop_assert!((forward.c - c).abs() <= 5.1e-5);

        let back = pythagorean::calculate(&PythagoreanInput { a: Some(a), b: None, c: Some(c) }).unwrap();
        prop_assert!((back.b - b).abs() < 1e-4, "a={} b={} c={} b'={}", a, b, c, back.b);
    }

    #[test]
    fn swp_depletes_exactly_when_returns_fall_short(
        principal in 1_000.0f64..1_000_000.0,
        withdrawal in 10.0f64..100_000.0,
        annual_return in 0.0f64..24.0,
    ) {
        let input = SwpInput { principal, monthly_withdrawal: withdrawal, annual_return_percent: annual_return };
        let result = swp::calculate(&input).unwrap();
        let r = monthly_rate(annual_return);

        if principal * r >= withdrawal {
            prop_assert!(result.depletion.is_infinite());
            prop_assert_eq!(depletion_months(principal, withdrawal, r), None);
        } else {
            let n = depletion_months(principal, withdrawal, r).unwrap();
            prop_assert!(n > 0.0);
            let residual = balance_after_withdrawals(principal, withdrawal, r, n);
            prop_assert!(residual.abs() <= 1e-6 * (principal + withdrawal * n), "residual {}", residual);

            match result.depletion {
                Depletion::After { total_months, years, months, .. } => {
                    prop_assert!((total_months - n).abs() <= 0.005 + n * 1e-12);
                    prop_assert_eq!(years, (total_months / 12.0).floor() as u32);
                    prop_assert!(months < 12);
                }
                Depletion::Never { .. } => prop_assert!(false, "expected depletion"),
            }
        }
    }

    #[test]
    fn statistics_orderings(values in prop::collection::vec(-1.0e4f64..1.0e4, 2..50)) {
        let result = statistics::calculate(&StatisticsInput { values }).unwrap();
        // a constant sample can put the mean an ulp outside [min, max]
        prop_assert!(result.min - 1e-4 <= result.mean && result.mean <= result.max + 1e-4);
        prop_assert!(result.min <= result.median && result.median <= result.max);
        prop_assert!(result.population_variance <= result.sample_variance);
        prop_assert!(result.sample_std_dev >= 0.0);
    }

    #[test]
    fn duration_add_then_subtract_is_identity(first in duration_parts(), second in duration_parts()) {
        let added = time_duration::calculate(&TimeDurationInput {
            first,
            second,
            operation: DurationOperation::Add,
        }).unwrap();
        let back = time_duration::calculate(&TimeDurationInput {
            first: added.duration,
            second,
            operation: DurationOperation::Subtract,
        }).unwrap();

        prop_assert!(!back.clamped);
        prop_assert_eq!(Some(back.total_seconds), first.total_seconds());
        prop_assert!(back.duration.hours < 24 && back.duration.minutes < 60 && back.duration.seconds < 60);
    }
}
