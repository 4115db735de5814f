//! Loan parameter models.
//!
//! This module contains the [`Frequency`] cadence enum and the
//! [`LoanParameters`] input to a simulation run.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A payment cadence.
///
/// The closed set of recognized repayment frequencies. Frequencies arrive
/// from callers as strings and are converted exactly once, at the input
/// boundary, via [`Frequency::parse`]; everything downstream works with
/// the typed variant and can no longer encounter an unrecognized value.
///
/// # Example
///
/// ```
/// use loan_engine::models::Frequency;
///
/// let freq = Frequency::parse("frequency", "Fortnightly").unwrap();
/// assert_eq!(freq, Frequency::Fortnightly);
/// assert_eq!(freq.periods_per_year(), 26);
/// assert_eq!(freq.period_days(), 14);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Frequency {
    /// 52 payment periods per year, 7 days apart.
    Weekly,
    /// 26 payment periods per year, 14 days apart.
    Fortnightly,
    /// 12 payment periods per year, 30 days apart.
    ///
    /// Monthly periods are modeled as exactly 30 days rather than true
    /// calendar months, so dates drift from calendar month boundaries
    /// over a long term.
    Monthly,
}

impl Frequency {
    /// Parses a frequency string from the input boundary.
    ///
    /// # Arguments
    ///
    /// * `field` - The name of the parameter field being parsed, used in
    ///   the error message (e.g., "frequency", "extra_frequency").
    /// * `value` - The raw frequency string.
    ///
    /// # Returns
    ///
    /// Returns the matching variant, or `InvalidFrequency` if `value` is
    /// not one of `Weekly`, `Fortnightly` or `Monthly` (case-sensitive).
    pub fn parse(field: &str, value: &str) -> EngineResult<Self> {
        match value {
            "Weekly" => Ok(Frequency::Weekly),
            "Fortnightly" => Ok(Frequency::Fortnightly),
            "Monthly" => Ok(Frequency::Monthly),
            _ => Err(EngineError::InvalidFrequency {
                field: field.to_string(),
                value: value.to_string(),
            }),
        }
    }

    /// Returns the number of payment periods per year for this cadence.
    pub fn periods_per_year(self) -> u32 {
        match self {
            Frequency::Weekly => 52,
            Frequency::Fortnightly => 26,
            Frequency::Monthly => 12,
        }
    }

    /// Returns the fixed number of days between consecutive periods.
    pub fn period_days(self) -> i64 {
        match self {
            Frequency::Weekly => 7,
            Frequency::Fortnightly => 14,
            Frequency::Monthly => 30,
        }
    }

    /// Returns the canonical string form of this cadence.
    pub fn as_str(self) -> &'static str {
        match self {
            Frequency::Weekly => "Weekly",
            Frequency::Fortnightly => "Fortnightly",
            Frequency::Monthly => "Monthly",
        }
    }
}

/// The full set of inputs for one loan simulation run.
///
/// A `LoanParameters` value is an immutable snapshot: the engine never
/// mutates it, and two runs with identical snapshots produce identical
/// schedules. Validation happens once, before the simulation loop, via
/// [`LoanParameters::validate`].
///
/// # Example
///
/// ```
/// use loan_engine::models::{Frequency, LoanParameters};
/// use chrono::NaiveDate;
///
/// let params = LoanParameters {
///     loan_amount: 600_000.0,
///     interest_rate: 6.25,
///     offset: 25_000.0,
///     repayment: 2_000.0,
///     extra_repayment: 0.0,
///     frequency: Frequency::Fortnightly,
///     extra_frequency: Frequency::Monthly,
///     term_years: 30,
///     start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
/// };
/// assert!(params.validate().is_ok());
/// assert_eq!(params.total_periods(), 780);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanParameters {
    /// Initial principal. Must be non-negative.
    pub loan_amount: f64,
    /// Annual nominal percentage rate (6.25 means 6.25%).
    pub interest_rate: f64,
    /// Offset account balance, subtracted from the interest-bearing
    /// principal before each period's interest is computed.
    pub offset: f64,
    /// Amount paid every primary period.
    pub repayment: f64,
    /// Additional amount paid on the extra cadence. May be zero.
    pub extra_repayment: f64,
    /// The primary repayment cadence.
    pub frequency: Frequency,
    /// The extra repayment cadence, chosen independently of `frequency`.
    pub extra_frequency: Frequency,
    /// Nominal loan duration in years. Must be positive.
    pub term_years: u32,
    /// Anchor date of the first period.
    pub start_date: NaiveDate,
}

impl LoanParameters {
    /// Validates the parameters ahead of a simulation run.
    ///
    /// # Returns
    ///
    /// `Ok(())` when the parameters are simulatable, or:
    /// - `NonPositiveTerm` when `term_years` is zero
    /// - `NegativeAmount` when any of `loan_amount`, `offset`,
    ///   `repayment` or `extra_repayment` is negative
    ///
    /// Frequencies need no ad hoc checking here: they are typed variants
    /// validated at construction.
    pub fn validate(&self) -> EngineResult<()> {
        if self.term_years == 0 {
            return Err(EngineError::NonPositiveTerm {
                term_years: self.term_years,
            });
        }

        let amounts = [
            ("loan_amount", self.loan_amount),
            ("offset", self.offset),
            ("repayment", self.repayment),
            ("extra_repayment", self.extra_repayment),
        ];
        for (field, value) in amounts {
            if value < 0.0 {
                return Err(EngineError::NegativeAmount {
                    field: field.to_string(),
                    value,
                });
            }
        }

        Ok(())
    }

    /// Returns the nominal number of periods in the full term.
    ///
    /// The simulated schedule is never longer than this; it is shorter
    /// when the balance reaches zero before the term ends.
    pub fn total_periods(&self) -> u32 {
        self.term_years * self.frequency.periods_per_year()
    }
}
