//! HTTP API module for the payroll engine.
//!
//! This module exposes the engine's entry points as JSON endpoints:
//! `POST /bonus`, `POST /net-salary`, `POST /currency/convert` and
//! `POST /currency/variation`.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BonusRequest, ConversionRequest, NetSalaryRequest, VariationRequest};
pub use response::{ApiError, CalculationEnvelope, ENGINE_VERSION};
pub use state::AppState;
