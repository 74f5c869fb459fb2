//! # Geometry Formulas
//!
//! Circle measures, right-triangle sides and line slope.
//!
//! ## Notation
//!
//! - `r` = Radius
//! - `a`, `b` = Legs of a right triangle, `c` = Hypotenuse
//! - `(x1, y1)`, `(x2, y2)` = Points on a line

use std::f64::consts::PI;

// =============================================================================
// CIRCLE
// =============================================================================

/// Area of a circle: A = π·r²
#[inline]
pub fn circle_area(r: f64) -> f64 {
    PI * r * r
}

/// Circumference of a circle: C = 2·π·r
#[inline]
pub fn circle_circumference(r: f64) -> f64 {
    2.0 * PI * r
}

/// Radius from area: r = √(A/π)
#[inline]
pub fn radius_from_area(area: f64) -> f64 {
    (area / PI).sqrt()
}

/// Radius from circumference: r = C / 2π
#[inline]
pub fn radius_from_circumference(circumference: f64) -> f64 {
    circumference / (2.0 * PI)
}

// =============================================================================
// RIGHT TRIANGLE
// =============================================================================

/// Hypotenuse from both legs: c = √(a² + b²)
///
/// ```rust
/// use calc_core::equations::geometry::hypotenuse;
///
/// assert_eq!(hypotenuse(3.0, 4.0), 5.0);
/// ```
#[inline]
pub fn hypotenuse(a: f64, b: f64) -> f64 {
    a.hypot(b)
}

/// Missing leg from hypotenuse and the other leg: b = √(c² − a²)
///
/// Caller must ensure c > a.
#[inline]
pub fn leg(c: f64, other_leg: f64) -> f64 {
    ((c - other_leg) * (c + other_leg)).sqrt()
}

// =============================================================================
// LINES
// =============================================================================

/// Slope between two points: m = (y2 − y1) / (x2 − x1)
///
/// # Returns
/// `None` for a vertical line (x1 == x2).
#[inline]
pub fn slope(x1: f64, y1: f64, x2: f64, y2: f64) -> Option<f64> {
    if x2 == x1 {
        None
    } else {
        Some((y2 - y1) / (x2 - x1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle() {
        assert!((circle_area(10.0) - 314.159_265).abs() < 1e-6);
        assert!((circle_circumference(10.0) - 62.831_853).abs() < 1e-6);
        assert!((radius_from_area(circle_area(3.0)) - 3.0).abs() < 1e-12);
        assert!((radius_from_circumference(circle_circumference(3.0)) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_right_triangle() {
        assert_eq!(hypotenuse(5.0, 12.0), 13.0);
        assert_eq!(leg(13.0, 5.0), 12.0);
        assert_eq!(leg(5.0, 4.0), 3.0);
    }

    #[test]
    fn test_slope() {
        assert_eq!(slope(0.0, 0.0, 2.0, 4.0), Some(2.0));
        assert_eq!(slope(2.0, 4.0, 0.0, 0.0), Some(2.0));
        assert_eq!(slope(1.0, 0.0, 1.0, 5.0), None);
    }
}
