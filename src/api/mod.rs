//! HTTP API module for the Loan Amortization Engine.
//!
//! This module provides the REST API endpoints for simulating and
//! comparing two loan repayment schedules.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ComparisonRequest, LoanRequest};
pub use response::ApiError;
pub use state::AppState;
