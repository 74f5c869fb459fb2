//! # calc_core - Calculator Formula Library
//!
//! `calc_core` is the computational heart of Tally: a catalog of independent,
//! stateless calculators for finance, health and math, plus a scientific
//! expression evaluator. All inputs and outputs are JSON-serializable, so
//! any presentation layer (CLI, web form, chat assistant) can drive them.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types naming the offending field
//! - **Explicit Edge Cases**: Degenerate outcomes (vertical lines, complex
//!   roots, never-depleting withdrawals) are result variants, not errors
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::calculations::financial::loan::{calculate, LoanInput};
//!
//! let input = LoanInput {
//!     principal: 10_000.0,
//!     annual_rate_percent: 5.0,
//!     term_months: 60,
//! };
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.monthly_payment, 188.71);
//!
//! // Serialize to JSON for transmission
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! Raw form fields go through the registry instead:
//!
//! ```rust
//! use calc_core::{calculations, CalculatorSettings, RawFields};
//!
//! let fields = RawFields::new().with("values", "2, 4, 4, 4, 5, 5, 7, 9");
//! let output = calculations::run("statistics", &fields, &CalculatorSettings::default()).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - All calculators and the [`CalculationItem`] registry
//! - [`equations`] - Unrounded closed-form formulas
//! - [`expression`] - Scientific expression evaluator
//! - [`settings`] - Currency, unit and default settings
//! - [`units`] - Type-safe unit wrappers
//! - [`validation`] - Raw field parsing and domain guards
//! - [`format`] - Rounding and display formatting
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod expression;
pub mod format;
pub mod settings;
pub mod units;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use calculations::{CalculationItem, CalculationKind, CalculationOutput};
pub use errors::{CalcError, CalcResult, ErrorKind};
pub use settings::CalculatorSettings;
pub use validation::RawFields;
