//! Calculation logic for the payroll engine.
//!
//! This module contains the pure calculation functions: calendar arithmetic
//! for elapsed months and days, semester resolution, the prorated bonus
//! (aguinaldo), progressive income tax evaluation, the gross-to-net salary
//! breakdown, and dollar conversion with caller-supplied quotes.

mod bonus;
mod calendar;
mod currency;
mod income_tax;
mod net_salary;
mod rounding;
mod semester;

pub use bonus::compute_bonus;
pub use calendar::{days_in_month, elapsed};
pub use currency::{convert_currency, quote_variation};
pub use income_tax::{evaluate_tax, resolve_bracket};
pub use net_salary::compute_net_salary;
pub use rounding::{RESULT_DECIMAL_PLACES, round_money};
pub use semester::resolve_semester;
