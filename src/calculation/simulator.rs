//! Period-by-period schedule simulation.
//!
//! This module drives the amortization loop for a single loan: it
//! converts the annual rate, reconciles the extra-repayment cadence
//! against the primary cadence, then steps through payment periods
//! applying interest, offset and repayment rules until payoff or the
//! end of the nominal term.

use crate::calculation::date_step::step_date;
use crate::calculation::rate::periodic_rate;
use crate::error::EngineResult;
use crate::models::{Frequency, LoanParameters, PeriodRecord, Schedule};

/// Reconciles the extra-repayment cadence against the primary cadence.
///
/// Returns how many primary periods elapse between extra repayments,
/// computed as `round(periods_per_year(frequency) /
/// periods_per_year(extra_frequency))` with ties rounding away from
/// zero. The value is fixed for a whole simulation run.
///
/// Two consequences of the rounding are intentional and preserved:
///
/// - When the cadences are not integer multiples of each other the
///   extra payments land on the nearest primary-period grid rather than
///   their true calendar dates (e.g. a Monthly extra on a Weekly loan
///   pays every 4 periods, i.e. every 28 days).
/// - When the extra cadence is faster than twice the primary cadence
///   the ratio rounds to 0 and no period ever qualifies, so the extra
///   repayment is never applied (e.g. a Weekly extra on a Monthly loan).
///
/// # Example
///
/// ```
/// use loan_engine::calculation::extra_period_interval;
/// use loan_engine::models::Frequency;
///
/// assert_eq!(extra_period_interval(Frequency::Weekly, Frequency::Monthly), 4);
/// assert_eq!(extra_period_interval(Frequency::Monthly, Frequency::Weekly), 0);
/// ```
pub fn extra_period_interval(frequency: Frequency, extra_frequency: Frequency) -> u32 {
    let ratio = frequency.periods_per_year() as f64 / extra_frequency.periods_per_year() as f64;
    ratio.round() as u32
}

/// Simulates the full repayment schedule for one loan.
///
/// Validates the parameters, then runs the amortization loop:
///
/// 1. Each period charges `max(0, (balance - offset) * periodic_rate)`
///    in interest; an offset exceeding the balance cannot drive the
///    charge negative.
/// 2. The repayment net of interest reduces the principal, plus the
///    extra repayment on periods matching the extra cadence (period 0
///    always qualifies when the cadence interval is at least 1).
/// 3. Overpayment clamps the balance at zero rather than going negative.
/// 4. Each period appends a [`PeriodRecord`] carrying the pre-advance
///    date and the cumulative totals rounded to whole units, then the
///    date advances by the cadence's fixed day count.
///
/// The loop ends at payoff (balance reaches zero, schedule shorter than
/// the nominal term) or after `term_years * periods_per_year` periods,
/// whichever comes first. A repayment smaller than the period's interest
/// produces a growing balance; that is a valid simulated outcome, not an
/// error, and the loop still terminates at the nominal term.
///
/// # Returns
///
/// The complete schedule, or a validation error from
/// [`LoanParameters::validate`] raised before any period is computed.
///
/// # Example
///
/// ```
/// use loan_engine::calculation::calculate_schedule;
/// use loan_engine::models::{Frequency, LoanParameters};
/// use chrono::NaiveDate;
///
/// let params = LoanParameters {
///     loan_amount: 100_000.0,
///     interest_rate: 6.0,
///     offset: 0.0,
///     repayment: 1_000.0,
///     extra_repayment: 0.0,
///     frequency: Frequency::Monthly,
///     extra_frequency: Frequency::Monthly,
///     term_years: 10,
///     start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
/// };
///
/// let schedule = calculate_schedule(&params).unwrap();
/// assert_eq!(schedule[0].balance, 99_500);
/// assert_eq!(schedule[0].interest, 500);
/// assert_eq!(schedule[0].total_paid, 1_000);
/// ```
pub fn calculate_schedule(params: &LoanParameters) -> EngineResult<Schedule> {
    params.validate()?;

    let rate = periodic_rate(params.interest_rate, params.frequency);
    let total_periods = params.total_periods();
    let extra_interval = extra_period_interval(params.frequency, params.extra_frequency);

    let mut schedule = Vec::new();
    let mut balance = params.loan_amount;
    let mut date = params.start_date;
    let mut total_interest = 0.0;
    let mut total_paid = 0.0;

    for period in 0..total_periods {
        if balance <= 0.0 {
            break;
        }

        let interest = ((balance - params.offset) * rate).max(0.0);
        let mut principal = params.repayment - interest;

        // interval 0 means the extra cadence never lines up with the
        // primary grid; period 0 qualifies for any interval >= 1.
        let is_extra_period = extra_interval > 0 && period % extra_interval == 0;
        if is_extra_period {
            principal += params.extra_repayment;
        }

        balance = (balance - principal).max(0.0);
        total_interest += interest;
        total_paid += params.repayment;
        if is_extra_period {
            total_paid += params.extra_repayment;
        }

        schedule.push(PeriodRecord {
            date,
            balance: balance.round() as i64,
            interest: total_interest.round() as i64,
            total_paid: total_paid.round() as i64,
        });

        date = step_date(date, params.frequency);
    }

    Ok(schedule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use chrono::NaiveDate;
    use proptest::prelude::{prop_assert, prop_assert_eq, proptest};

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn sample_params() -> LoanParameters {
        LoanParameters {
            loan_amount: 100_000.0,
            interest_rate: 6.0,
            offset: 0.0,
            repayment: 1_000.0,
            extra_repayment: 0.0,
            frequency: Frequency::Monthly,
            extra_frequency: Frequency::Monthly,
            term_years: 10,
            start_date: start(),
        }
    }

    /// Closed-form balance after `n` payments of a fixed-payment loan.
    fn annuity_balance(principal: f64, rate: f64, repayment: f64, n: u32) -> f64 {
        let growth = (1.0 + rate).powi(n as i32);
        principal * growth - repayment * (growth - 1.0) / rate
    }

    #[test]
    fn test_first_period_of_reference_loan() {
        let schedule = calculate_schedule(&sample_params()).unwrap();
        let first = schedule[0];

        assert_eq!(first.date, start());
        assert_eq!(first.balance, 99_500);
        assert_eq!(first.interest, 500);
        assert_eq!(first.total_paid, 1_000);
    }

    #[test]
    fn test_reference_loan_runs_the_full_term() {
        let schedule = calculate_schedule(&sample_params()).unwrap();
        // 100k at 6% repaying 1000/month is not paid off inside 10 years.
        assert_eq!(schedule.len(), 120);
        assert!(schedule.last().unwrap().balance > 0);
    }

    #[test]
    fn test_matches_closed_form_amortization_for_all_cadences() {
        for frequency in [Frequency::Weekly, Frequency::Fortnightly, Frequency::Monthly] {
            let mut params = sample_params();
            params.frequency = frequency;
            params.extra_frequency = frequency;
            params.repayment = 300.0;
            params.term_years = 5;

            let rate = periodic_rate(params.interest_rate, frequency);
            let schedule = calculate_schedule(&params).unwrap();

            for (i, record) in schedule.iter().enumerate() {
                let expected =
                    annuity_balance(params.loan_amount, rate, params.repayment, i as u32 + 1);
                if expected <= 0.0 {
                    break;
                }
                assert!(
                    (record.balance as f64 - expected).abs() <= 1.0,
                    "{frequency:?} period {i}: expected {expected}, got {}",
                    record.balance
                );
            }
        }
    }

    #[test]
    fn test_dates_advance_by_the_cadence_day_count() {
        let schedule = calculate_schedule(&sample_params()).unwrap();
        assert_eq!(schedule[0].date, start());
        assert_eq!(
            schedule[1].date,
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
        );
        assert_eq!(
            schedule[2].date,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
    }

    #[test]
    fn test_early_payoff_shortens_the_schedule() {
        let mut params = sample_params();
        params.loan_amount = 10_000.0;

        let schedule = calculate_schedule(&params).unwrap();
        assert!(schedule.len() < params.total_periods() as usize);
        assert_eq!(schedule.last().unwrap().balance, 0);
    }

    #[test]
    fn test_overpayment_clamps_balance_at_zero() {
        let mut params = sample_params();
        params.loan_amount = 500.0;
        params.repayment = 10_000.0;

        let schedule = calculate_schedule(&params).unwrap();
        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule[0].balance, 0);
        // The full repayment counts as paid even when it overshoots.
        assert_eq!(schedule[0].total_paid, 10_000);
    }

    #[test]
    fn test_offset_above_balance_charges_no_interest() {
        let mut params = sample_params();
        params.loan_amount = 50_000.0;
        params.offset = 60_000.0;

        let schedule = calculate_schedule(&params).unwrap();
        for record in &schedule {
            assert_eq!(record.interest, 0);
        }
        // With no interest the loan amortizes by the raw repayment.
        assert_eq!(schedule.len(), 50);
        assert_eq!(schedule[0].balance, 49_000);
    }

    #[test]
    fn test_offset_reduces_interest_bearing_balance() {
        let mut params = sample_params();
        params.offset = 40_000.0;

        let schedule = calculate_schedule(&params).unwrap();
        // (100000 - 40000) * 0.005 = 300 for period 0.
        assert_eq!(schedule[0].interest, 300);
        assert_eq!(schedule[0].balance, 99_300);
    }

    #[test]
    fn test_negative_amortization_grows_balance_until_term() {
        let mut params = sample_params();
        params.interest_rate = 12.0;
        params.repayment = 500.0; // below the 1000 first-period interest

        let schedule = calculate_schedule(&params).unwrap();
        assert_eq!(schedule.len(), params.total_periods() as usize);
        assert!(schedule.last().unwrap().balance > params.loan_amount as i64);
        for pair in schedule.windows(2) {
            assert!(pair[1].balance >= pair[0].balance);
        }
    }

    #[test]
    fn test_zero_loan_amount_yields_empty_schedule() {
        let mut params = sample_params();
        params.loan_amount = 0.0;
        assert!(calculate_schedule(&params).unwrap().is_empty());
    }

    #[test]
    fn test_validation_failure_precedes_simulation() {
        let mut params = sample_params();
        params.repayment = -1.0;
        let err = calculate_schedule(&params).unwrap_err();
        assert!(matches!(err, EngineError::NegativeAmount { .. }));

        params = sample_params();
        params.term_years = 0;
        let err = calculate_schedule(&params).unwrap_err();
        assert!(matches!(err, EngineError::NonPositiveTerm { .. }));
    }

    #[test]
    fn test_extra_interval_reconciliation_table() {
        use Frequency::{Fortnightly, Monthly, Weekly};

        assert_eq!(extra_period_interval(Weekly, Weekly), 1);
        assert_eq!(extra_period_interval(Weekly, Fortnightly), 2);
        assert_eq!(extra_period_interval(Weekly, Monthly), 4); // 52/12 = 4.33
        assert_eq!(extra_period_interval(Fortnightly, Weekly), 1); // 0.5 ties up
        assert_eq!(extra_period_interval(Fortnightly, Monthly), 2); // 26/12 = 2.17
        assert_eq!(extra_period_interval(Monthly, Weekly), 0); // 12/52 = 0.23
        assert_eq!(extra_period_interval(Monthly, Fortnightly), 0); // 12/26 = 0.46
        assert_eq!(extra_period_interval(Monthly, Monthly), 1);
    }

    #[test]
    fn test_extra_repayment_applies_on_its_cadence_only() {
        let mut params = sample_params();
        params.frequency = Frequency::Fortnightly;
        params.extra_frequency = Frequency::Monthly;
        params.extra_repayment = 400.0;

        let schedule = calculate_schedule(&params).unwrap();
        // Interval 2: periods 0, 2, 4, ... carry the extra payment.
        assert_eq!(schedule[0].total_paid, 1_400);
        assert_eq!(schedule[1].total_paid, 2_400);
        assert_eq!(schedule[2].total_paid, 3_800);
        assert_eq!(schedule[3].total_paid, 4_800);
    }

    #[test]
    fn test_period_zero_always_carries_the_extra_payment() {
        let mut params = sample_params();
        params.extra_repayment = 250.0;

        let schedule = calculate_schedule(&params).unwrap();
        assert_eq!(schedule[0].total_paid, 1_250);
    }

    #[test]
    fn test_zero_interval_never_applies_the_extra_payment() {
        let mut params = sample_params();
        params.frequency = Frequency::Monthly;
        params.extra_frequency = Frequency::Weekly;
        params.extra_repayment = 500.0;

        let with_extra = calculate_schedule(&params).unwrap();
        params.extra_repayment = 0.0;
        let without_extra = calculate_schedule(&params).unwrap();

        assert_eq!(with_extra, without_extra);
    }

    #[test]
    fn test_extra_repayment_shortens_payoff() {
        let mut params = sample_params();
        params.loan_amount = 50_000.0;
        let baseline = calculate_schedule(&params).unwrap();

        params.extra_repayment = 500.0;
        let accelerated = calculate_schedule(&params).unwrap();

        assert!(accelerated.len() < baseline.len());
        assert!(
            accelerated.last().unwrap().interest < baseline.last().unwrap().interest,
            "paying down faster must cost less total interest"
        );
    }

    #[test]
    fn test_identical_parameters_produce_identical_serialized_schedules() {
        let params = sample_params();
        let first = serde_json::to_string(&calculate_schedule(&params).unwrap()).unwrap();
        let second = serde_json::to_string(&calculate_schedule(&params).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_schedule_never_exceeds_total_periods(
            loan_amount in 0u32..2_000_000,
            rate_bp in 0u32..2_000,
            offset in 0u32..500_000,
            repayment in 0u32..20_000,
            extra in 0u32..5_000,
            freq_idx in 0usize..3,
            extra_idx in 0usize..3,
            term_years in 1u32..31,
        ) {
            let cadences = [Frequency::Weekly, Frequency::Fortnightly, Frequency::Monthly];
            let params = LoanParameters {
                loan_amount: loan_amount as f64,
                interest_rate: rate_bp as f64 / 100.0,
                offset: offset as f64,
                repayment: repayment as f64,
                extra_repayment: extra as f64,
                frequency: cadences[freq_idx],
                extra_frequency: cadences[extra_idx],
                term_years,
                start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            };

            let schedule = calculate_schedule(&params).unwrap();
            prop_assert!(schedule.len() <= params.total_periods() as usize);

            for record in &schedule {
                prop_assert!(record.balance >= 0);
                prop_assert!(record.interest >= 0);
                prop_assert!(record.total_paid >= 0);
            }
            for pair in schedule.windows(2) {
                prop_assert!(pair[1].interest >= pair[0].interest);
                prop_assert!(pair[1].total_paid >= pair[0].total_paid);
            }
        }

        #[test]
        fn prop_balance_is_non_increasing_when_repayment_covers_interest(
            loan_amount in 1_000u32..1_000_000,
            rate_bp in 1u32..1_500,
            offset in 0u32..200_000,
            margin in 1u32..5_000,
            freq_idx in 0usize..3,
            term_years in 1u32..31,
        ) {
            let cadences = [Frequency::Weekly, Frequency::Fortnightly, Frequency::Monthly];
            let frequency = cadences[freq_idx];
            let interest_rate = rate_bp as f64 / 100.0;

            // Interest is largest on the opening balance, so a repayment
            // above that first charge covers every later one too.
            let first_interest =
                loan_amount as f64 * periodic_rate(interest_rate, frequency);
            let params = LoanParameters {
                loan_amount: loan_amount as f64,
                interest_rate,
                offset: offset as f64,
                repayment: first_interest + margin as f64,
                extra_repayment: 0.0,
                frequency,
                extra_frequency: frequency,
                term_years,
                start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            };

            let schedule = calculate_schedule(&params).unwrap();
            prop_assert!(!schedule.is_empty());
            prop_assert!(schedule[0].balance <= loan_amount as i64);
            for pair in schedule.windows(2) {
                prop_assert!(pair[1].balance <= pair[0].balance);
            }
        }

        #[test]
        fn prop_simulation_is_deterministic(
            loan_amount in 0u32..1_000_000,
            rate_bp in 0u32..1_500,
            repayment in 0u32..10_000,
            freq_idx in 0usize..3,
            term_years in 1u32..16,
        ) {
            let cadences = [Frequency::Weekly, Frequency::Fortnightly, Frequency::Monthly];
            let params = LoanParameters {
                loan_amount: loan_amount as f64,
                interest_rate: rate_bp as f64 / 100.0,
                offset: 0.0,
                repayment: repayment as f64,
                extra_repayment: 0.0,
                frequency: cadences[freq_idx],
                extra_frequency: cadences[freq_idx],
                term_years,
                start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            };

            prop_assert_eq!(
                calculate_schedule(&params).unwrap(),
                calculate_schedule(&params).unwrap()
            );
        }
    }
}
