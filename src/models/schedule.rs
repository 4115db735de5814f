//! Schedule output models.
//!
//! This module contains the [`PeriodRecord`] produced per simulated
//! period and the [`ComparisonRow`] produced by merging two schedules.
//!
//! JSON field names follow the charting contract of the consuming UI
//! (`totalPaid`, `balance2`, ...), so both types rename to camelCase.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One simulated payment period.
///
/// `interest` and `total_paid` are cumulative to date, not per-period
/// amounts; all monetary fields are rounded to the nearest whole unit.
/// Records are immutable once appended to a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodRecord {
    /// The period's anchor date, before advancing to the next period.
    pub date: NaiveDate,
    /// Outstanding principal after this period's payment.
    pub balance: i64,
    /// Cumulative interest paid to date.
    pub interest: i64,
    /// Cumulative amount paid to date, including extra repayments.
    pub total_paid: i64,
}

/// An ordered repayment schedule for one loan.
///
/// At most `term_years * periods_per_year` records long; shorter when
/// the balance reaches zero before the term ends.
pub type Schedule = Vec<PeriodRecord>;

/// One index-aligned row of a two-loan comparison series.
///
/// Fields from the first schedule keep their plain names; fields from
/// the second carry a `2` suffix. A field is `None` (serialized as JSON
/// `null`, never omitted) when the owning schedule is shorter than the
/// row's index, which lets a chart skip the missing points instead of
/// rendering an already-paid-off loan as a zero balance forever.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    /// ISO date taken from schedule 1, falling back to schedule 2;
    /// empty when both schedules are exhausted.
    pub date: String,
    /// Schedule 1 outstanding balance.
    pub balance: Option<i64>,
    /// Schedule 1 cumulative interest.
    pub interest: Option<i64>,
    /// Schedule 1 cumulative amount paid.
    pub total_paid: Option<i64>,
    /// Schedule 2 outstanding balance.
    pub balance2: Option<i64>,
    /// Schedule 2 cumulative interest.
    pub interest2: Option<i64>,
    /// Schedule 2 cumulative amount paid.
    pub total_paid2: Option<i64>,
}
