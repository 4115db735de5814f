//! Loan Amortization and Comparison Engine
//!
//! This crate simulates the period-by-period repayment trajectory of an
//! offset home loan and merges two independently simulated schedules into
//! a single comparison series suitable for charting.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
