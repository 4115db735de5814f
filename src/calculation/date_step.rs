//! Fixed-day date stepping.

use chrono::{Duration, NaiveDate};

use crate::models::Frequency;

/// Advances a date by one payment period.
///
/// The step is a fixed day count per cadence: 7 for Weekly, 14 for
/// Fortnightly, 30 for Monthly. Monthly stepping is a deliberate
/// approximation (exactly 30 days, not a calendar month), so long
/// schedules drift away from calendar month boundaries. Applied exactly
/// once per simulated period, in period order.
///
/// # Example
///
/// ```
/// use loan_engine::calculation::step_date;
/// use loan_engine::models::Frequency;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let next = step_date(start, Frequency::Monthly);
/// assert_eq!(next, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
/// ```
pub fn step_date(date: NaiveDate, frequency: Frequency) -> NaiveDate {
    date + Duration::days(frequency.period_days())
}
