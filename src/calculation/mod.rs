//! Calculation logic for the Loan Amortization Engine.
//!
//! This module contains the simulation core: annual-to-periodic rate
//! conversion, fixed-day date stepping, the period-by-period schedule
//! simulator, and the merge of two schedules into one comparison series.

mod date_step;
mod merger;
mod rate;
mod simulator;

pub use date_step::step_date;
pub use merger::merge_schedules;
pub use rate::periodic_rate;
pub use simulator::{calculate_schedule, extra_period_interval};
