//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the
//! default loan parameter set from a YAML file.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::Frequency;

use super::types::{DefaultsFile, LoanDefaults};

/// Loads and provides access to the engine configuration.
///
/// The `ConfigLoader` reads `defaults.yaml` from a directory and
/// validates it up front: frequency strings are converted to typed
/// variants and the monetary amounts and term are checked with the same
/// rules as request input. A loader that constructed successfully can
/// therefore hand out defaults without further error paths.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── defaults.yaml   # default loan parameters
/// ```
///
/// # Example
///
/// ```no_run
/// use loan_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// let params = loader.defaults().parameters(start);
/// println!("Default repayment: ${}", params.repayment);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    defaults: LoanDefaults,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `defaults.yaml` is missing (`ConfigNotFound`)
    /// - the file contains invalid YAML (`ConfigParseError`)
    /// - a frequency string is unrecognized (`InvalidFrequency`)
    /// - an amount is negative or the term is zero (`NegativeAmount`,
    ///   `NonPositiveTerm`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let defaults_path = path.as_ref().join("defaults.yaml");
        let file = Self::load_yaml::<DefaultsFile>(&defaults_path)?;

        let defaults = LoanDefaults {
            loan_amount: file.loan.loan_amount,
            interest_rate: file.loan.interest_rate,
            offset: file.loan.offset,
            repayment: file.loan.repayment,
            extra_repayment: file.loan.extra_repayment,
            frequency: Frequency::parse("frequency", &file.loan.frequency)?,
            extra_frequency: Frequency::parse("extra_frequency", &file.loan.extra_frequency)?,
            term_years: file.loan.term_years,
        };

        // The start date never participates in validation, so any
        // anchor works for the load-time check.
        defaults.parameters(NaiveDate::MIN).validate()?;

        Ok(Self { defaults })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the validated default loan parameters.
    pub fn defaults(&self) -> &LoanDefaults {
        &self.defaults
    }
}
