//! Annual-to-periodic rate conversion.

use crate::models::Frequency;

/// Converts an annual nominal percentage rate to a per-period decimal rate.
///
/// The conversion is `rate / 100 / periods_per_year`, so an annual 6%
/// paid monthly becomes 0.005 per period. Pure, with no compounding
/// adjustment: the nominal annual rate is simply divided across the
/// year's periods.
///
/// # Arguments
///
/// * `interest_rate` - Annual nominal percentage rate (6.25 means 6.25%).
/// * `frequency` - The payment cadence the rate is spread across.
///
/// # Example
///
/// ```
/// use loan_engine::calculation::periodic_rate;
/// use loan_engine::models::Frequency;
///
/// let rate = periodic_rate(6.0, Frequency::Monthly);
/// assert!((rate - 0.005).abs() < 1e-12);
/// ```
pub fn periodic_rate(interest_rate: f64, frequency: Frequency) -> f64 {
    interest_rate / 100.0 / frequency.periods_per_year() as f64
}
