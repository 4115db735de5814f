//! Request types for the Loan Amortization Engine API.
//!
//! This module defines the JSON request structures for the `/compare`
//! endpoint. Field names follow the consuming form's camelCase contract
//! (`loanAmount`, `extraFrequency`, ...), and frequencies arrive as raw
//! strings that are converted to typed variants exactly once.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{Frequency, LoanParameters};

/// Request body for the `/compare` endpoint.
///
/// Carries the two parameter snapshots to simulate and merge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonRequest {
    /// Parameters for the first loan.
    pub loan1: LoanRequest,
    /// Parameters for the second loan.
    pub loan2: LoanRequest,
}

/// One loan's parameters in a comparison request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanRequest {
    /// Initial principal.
    pub loan_amount: f64,
    /// Annual nominal percentage rate (6.25 means 6.25%).
    pub interest_rate: f64,
    /// Offset account balance.
    #[serde(default)]
    pub offset: f64,
    /// Repayment per primary period.
    pub repayment: f64,
    /// Extra repayment per extra period.
    #[serde(default)]
    pub extra_repayment: f64,
    /// Primary cadence: "Weekly", "Fortnightly" or "Monthly".
    pub frequency: String,
    /// Extra cadence, chosen independently of `frequency`.
    pub extra_frequency: String,
    /// Loan term in years.
    pub term_years: u32,
    /// Anchor date of the first period.
    pub start_date: NaiveDate,
}

impl TryFrom<LoanRequest> for LoanParameters {
    type Error = EngineError;

    fn try_from(request: LoanRequest) -> Result<Self, Self::Error> {
        Ok(LoanParameters {
            loan_amount: request.loan_amount,
            interest_rate: request.interest_rate,
            offset: request.offset,
            repayment: request.repayment,
            extra_repayment: request.extra_repayment,
            frequency: Frequency::parse("frequency", &request.frequency)?,
            extra_frequency: Frequency::parse("extra_frequency", &request.extra_frequency)?,
            term_years: request.term_years,
            start_date: request.start_date,
        })
    }
}
