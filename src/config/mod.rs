//! Configuration loading and management for the Loan Amortization Engine.
//!
//! This module provides functionality to load the default loan parameter
//! set from a YAML file. The defaults seed the comparison form in the
//! consuming UI and are served verbatim by the `/defaults` endpoint.
//!
//! # Example
//!
//! ```no_run
//! use loan_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Default loan amount: {}", config.defaults().loan_amount);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DefaultsFile, LoanDefaults, LoanDefaultsFile};
