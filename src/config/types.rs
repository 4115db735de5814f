//! Configuration types for the default loan parameter set.
//!
//! This module contains the raw structures deserialized from
//! `defaults.yaml` and the validated [`LoanDefaults`] the rest of the
//! engine works with.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::{Frequency, LoanParameters};

/// Top-level structure of `defaults.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct DefaultsFile {
    /// The default loan parameter block.
    pub loan: LoanDefaultsFile,
}

/// Raw default loan parameters as they appear in `defaults.yaml`.
///
/// Frequencies are plain strings here; they are converted to typed
/// [`Frequency`] variants exactly once, when the configuration is
/// loaded.
#[derive(Debug, Clone, Deserialize)]
pub struct LoanDefaultsFile {
    /// Default initial principal.
    pub loan_amount: f64,
    /// Default annual nominal percentage rate.
    pub interest_rate: f64,
    /// Default offset account balance.
    #[serde(default)]
    pub offset: f64,
    /// Default repayment per primary period.
    pub repayment: f64,
    /// Default extra repayment per extra period.
    #[serde(default)]
    pub extra_repayment: f64,
    /// Default primary cadence as a string.
    pub frequency: String,
    /// Default extra cadence as a string.
    pub extra_frequency: String,
    /// Default loan term in years.
    pub term_years: u32,
}

/// Validated default loan parameters.
///
/// Produced by [`ConfigLoader::load`](super::ConfigLoader::load) after
/// frequency parsing and amount validation, so the accessors here are
/// infallible. No default start date is configured; callers supply one
/// (typically the current date) when turning the defaults into a
/// simulatable [`LoanParameters`].
#[derive(Debug, Clone, PartialEq)]
pub struct LoanDefaults {
    /// Initial principal.
    pub loan_amount: f64,
    /// Annual nominal percentage rate.
    pub interest_rate: f64,
    /// Offset account balance.
    pub offset: f64,
    /// Repayment per primary period.
    pub repayment: f64,
    /// Extra repayment per extra period.
    pub extra_repayment: f64,
    /// Primary cadence.
    pub frequency: Frequency,
    /// Extra cadence.
    pub extra_frequency: Frequency,
    /// Loan term in years.
    pub term_years: u32,
}

impl LoanDefaults {
    /// Builds a full parameter snapshot anchored at `start_date`.
    pub fn parameters(&self, start_date: NaiveDate) -> LoanParameters {
        LoanParameters {
            loan_amount: self.loan_amount,
            interest_rate: self.interest_rate,
            offset: self.offset,
            repayment: self.repayment,
            extra_repayment: self.extra_repayment,
            frequency: self.frequency,
            extra_frequency: self.extra_frequency,
            term_years: self.term_years,
            start_date,
        }
    }
}
