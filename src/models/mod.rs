//! Core data models for the Loan Amortization Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod loan;
mod schedule;

pub use loan::{Frequency, LoanParameters};
pub use schedule::{ComparisonRow, PeriodRecord, Schedule};
