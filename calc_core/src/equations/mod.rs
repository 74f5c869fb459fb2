//! # Calculator Equations
//!
//! The raw closed-form formulas behind every calculator, kept apart from
//! validation and rounding so they can be checked against references and
//! reused.
//!
//! Functions here take plain `f64`s, never fail and never round. They
//! assume their preconditions hold; the calculators in
//! [`crate::calculations`] establish them first.
//!
//! ## Modules
//!
//! - [`finance`] - amortization, interest, withdrawal depletion
//! - [`health`] - BMI, BMR, body fat, macronutrients
//! - [`geometry`] - circle, right triangle, slope
//! - [`algebra`] - discriminant, GCD, descriptive statistics

pub mod algebra;
pub mod finance;
pub mod geometry;
pub mod health;

pub use algebra::{discriminant, gcd, mean, median, population_variance, sample_variance};
pub use finance::{
    amortized_payment,
    balance_after_withdrawals,
    compound_amount,
    depletion_months,
    monthly_rate,
    simple_interest,
};
pub use geometry::{circle_area, circle_circumference, hypotenuse, leg, slope};
pub use health::{bmi, carb_grams, mifflin_st_jeor, navy_body_fat_female, navy_body_fat_male};
