//! # Algebra & Statistics Formulas
//!
//! Quadratic discriminant, integer GCD and descriptive statistics.

/// Discriminant of a·x² + b·x + c: D = b² − 4ac
#[inline]
pub fn discriminant(a: f64, b: f64, c: f64) -> f64 {
    b * b - 4.0 * a * c
}

/// Greatest common divisor (Euclid)
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Arithmetic mean. Caller guarantees a non-empty slice.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sum of squared deviations from the mean
pub fn sum_squared_deviations(values: &[f64]) -> f64 {
    let m = mean(values);
    values.iter().map(|x| (x - m) * (x - m)).sum()
}

/// Sample variance: Σ(x − mean)² / (n − 1). Caller guarantees n ≥ 2.
pub fn sample_variance(values: &[f64]) -> f64 {
    sum_squared_deviations(values) / (values.len() as f64 - 1.0)
}

/// Population variance: Σ(x − mean)² / n
pub fn population_variance(values: &[f64]) -> f64 {
    sum_squared_deviations(values) / values.len() as f64
}

/// Median of a non-empty slice
pub fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [f64; 8] = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];

    #[test]
    fn test_discriminant() {
        assert_eq!(discriminant(1.0, -3.0, 2.0), 1.0);
        assert_eq!(discriminant(1.0, 2.0, 5.0), -16.0);
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(7, 13), 1);
        assert_eq!(gcd(0, 5), 5);
    }

    #[test]
    fn test_statistics() {
        assert_eq!(mean(&SAMPLE), 5.0);
        assert_eq!(sum_squared_deviations(&SAMPLE), 32.0);
        assert!((sample_variance(&SAMPLE) - 32.0 / 7.0).abs() < 1e-12);
        assert_eq!(population_variance(&SAMPLE), 4.0);
        assert_eq!(median(&SAMPLE), 4.5);
        assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
    }
}
