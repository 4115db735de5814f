//! Null-safe alignment of two schedules.

use crate::models::{ComparisonRow, Schedule};

/// Merges two independently simulated schedules into one comparison series.
///
/// Rows are index-aligned and the result has `max(L1, L2)` rows. Where a
/// schedule is shorter than the row index its fields are `None`; the date
/// comes from the first schedule, falling back to the second, and is empty
/// only when both are exhausted (which cannot happen within the returned
/// length, but keeps the row total). A paid-off loan therefore shows a gap
/// rather than a phantom zero balance.
///
/// # Example
///
/// ```
/// use loan_engine::calculation::merge_schedules;
/// use loan_engine::models::PeriodRecord;
/// use chrono::NaiveDate;
///
/// let record = PeriodRecord {
///     date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     balance: 99_500,
///     interest: 500,
///     total_paid: 1_000,
/// };
/// let rows = merge_schedules(&vec![record], &vec![]);
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].balance, Some(99_500));
/// assert_eq!(rows[0].balance2, None);
/// ```
pub fn merge_schedules(first: &Schedule, second: &Schedule) -> Vec<ComparisonRow> {
    let row_count = first.len().max(second.len());

    (0..row_count)
        .map(|i| {
            let left = first.get(i);
            let right = second.get(i);

            ComparisonRow {
                date: left
                    .or(right)
                    .map(|record| record.date.to_string())
                    .unwrap_or_default(),
                balance: left.map(|record| record.balance),
                interest: left.map(|record| record.interest),
                total_paid: left.map(|record| record.total_paid),
                balance2: right.map(|record| record.balance),
                interest2: right.map(|record| record.interest),
                total_paid2: right.map(|record| record.total_paid),
            }
        })
        .collect()
}
