//! # Financial Calculators
//!
//! Loans, returns, interest, taxes, rent, salary and withdrawal plans.
//! Monetary outputs are rounded to cents.
//!
//! - [`loan`] - amortized payment and schedule
//! - [`roi`] - return on investment
//! - [`interest`] - simple and compound interest
//! - [`sales_tax`] - tax and total
//! - [`rent`] - rent affordability
//! - [`salary`] - pay period conversion
//! - [`swp`] - systematic withdrawal depletion time

pub mod interest;
pub mod loan;
pub mod rent;
pub mod roi;
pub mod sales_tax;
pub mod salary;
pub mod swp;

pub use interest::{
    CompoundInterestInput, CompoundInterestResult, Compounding, SimpleInterestInput, SimpleInterestResult,
};
pub use loan::{AmortizationRow, LoanInput, LoanResult};
pub use rent::{IncomePeriod, RentInput, RentResult};
pub use roi::{RoiInput, RoiResult};
pub use salary::{PayPeriod, SalaryInput, SalaryResult};
pub use sales_tax::{SalesTaxInput, SalesTaxResult};
pub use swp::{Depletion, SwpInput, SwpResult};
