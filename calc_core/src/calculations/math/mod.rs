//! # Math, Geometry & Statistics Calculators
//!
//! Closed-form solvers. Geometric solutions, roots, slopes and statistics
//! are rounded to 4 decimals; circle measurements to 2.
//!
//! Degenerate-but-valid outcomes (vertical line, complex roots, clamped
//! time subtraction) are result variants rather than errors.
//!
//! - [`circle`] - area, circumference, diameter
//! - [`pythagorean`] - third side of a right triangle
//! - [`quadratic`] - real or complex roots
//! - [`ratio`] - proportions and simplification
//! - [`slope`] - slope through two points
//! - [`statistics`] - mean, median, variance, standard deviation
//! - [`speed`] - speed, distance, time
//! - [`time_duration`] - duration addition and subtraction

pub mod circle;
pub mod pythagorean;
pub mod quadratic;
pub mod ratio;
pub mod slope;
pub mod speed;
pub mod statistics;
pub mod time_duration;

pub use circle::{CircleInput, CircleMeasure, CircleResult};
pub use pythagorean::{PythagoreanInput, PythagoreanResult, Side};
pub use quadratic::{QuadraticInput, QuadraticResult, Roots};
pub use ratio::{RatioInput, RatioResult};
pub use slope::{Line, SlopeInput, SlopeResult};
pub use speed::{SpeedInput, SpeedResult, SpeedUnknown};
pub use statistics::{StatisticsInput, StatisticsResult};
pub use time_duration::{DurationOperation, DurationParts, TimeDurationInput, TimeDurationResult};
