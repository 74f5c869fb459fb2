//! # Financial Formulas
//!
//! Closed-form time-value-of-money equations. Nothing here validates or
//! rounds; callers in [`crate::calculations::financial`] do both.
//!
//! ## Notation
//!
//! - `P` = Principal (present value)
//! - `r` = Periodic (usually monthly) interest rate as a decimal
//! - `n` = Number of periods
//! - `W` = Periodic withdrawal
//! - `k` = Compounding periods per year
//! - `t` = Time in years

/// Months per year
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Weeks per year used for salary conversion
pub const WEEKS_PER_YEAR: f64 = 52.0;

/// Convert an annual percentage rate to a monthly decimal rate
///
/// # Formula
/// r = annual% / 100 / 12
#[inline]
pub fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0 / MONTHS_PER_YEAR
}

/// Fixed payment that fully amortizes `p` over `n` periods at rate `r`
///
/// # Formula
/// - payment = P·r / (1 − (1+r)^−n)    for r > 0
/// - payment = P / n                    for r = 0
///
/// The denominator is evaluated as `−expm1(−n·ln1p(r))`, which stays
/// accurate when `1 + r` rounds to 1. The r = 0 branch avoids the 0/0 the
/// general form produces.
///
/// # Example
/// ```rust
/// use calc_core::equations::finance::{amortized_payment, monthly_rate};
///
/// let payment = amortized_payment(10_000.0, monthly_rate(5.0), 60.0);
/// assert!((payment - 188.71).abs() < 0.01);
/// assert_eq!(amortized_payment(1200.0, 0.0, 12.0), 100.0);
/// ```
#[inline]
pub fn amortized_payment(p: f64, r: f64, n: f64) -> f64 {
    if r == 0.0 {
        return p / n;
    }
    let denominator = -(-n * r.ln_1p()).exp_m1();
    if denominator == 0.0 {
        // r so small the discount factor underflows: straight-line repayment
        return p / n;
    }
    p * r / denominator
}

/// Simple interest on `p` at decimal rate `rate` over `t` periods
///
/// # Formula
/// I = P·r·t
#[inline]
pub fn simple_interest(p: f64, rate: f64, t: f64) -> f64 {
    p * rate * t
}

/// Future value of a lump sum with periodic compounding
///
/// # Formula
/// A = P·(1 + r/k)^(k·t)
#[inline]
pub fn compound_amount(p: f64, annual_rate: f64, k: f64, t: f64) -> f64 {
    p * (1.0 + annual_rate / k).powf(k * t)
}

/// Months until a corpus is exhausted by a fixed monthly withdrawal
///
/// # Formula
/// - n = ln(W / (W − P·r)) / ln(1 + r)    for r > 0
/// - n = P / W                            for r = 0
///
/// Computed as `ln1p(P·r / (W − P·r)) / ln1p(r)` so a tiny positive r
/// converges to P / W instead of 0/0.
///
/// # Returns
/// `None` when P·r ≥ W: returns cover the withdrawal and the corpus never
/// runs out.
pub fn depletion_months(p: f64, w: f64, r: f64) -> Option<f64> {
    if p * r >= w {
        return None;
    }
    let pr = p * r;
    if r == 0.0 || pr == 0.0 {
        return Some(p / w);
    }
    Some((pr / (w - pr)).ln_1p() / r.ln_1p())
}

/// Balance left after `n` months of withdrawals `w` from corpus `p`
///
/// # Formula
/// - B(n) = P·(1+r)^n − W·((1+r)^n − 1)/r    for r > 0
/// - B(n) = P − W·n                          for r = 0
pub fn balance_after_withdrawals(p: f64, w: f64, r: f64, n: f64) -> f64 {
    if r == 0.0 {
        return p - w * n;
    }
    // (1+r)^n − 1, kept exact for small r
    let gain = (n * r.ln_1p()).exp_m1();
    p + p * gain - w * gain / r
}
