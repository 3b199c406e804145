//! Age gating for loan applications.
//!
//! An applicant must be an adult, and young enough that the longest loan the
//! lender issues still fits inside the expected lifespan for their sex in
//! EVERY supported country. The personal code does not encode nationality,
//! so the rule is deliberately conjunctive across the whole table: an
//! applicant who would qualify under their own country's expectancy is still
//! denied when any supported country's figure is stricter. That is lending
//! policy, not an accident, and relaxing it needs a policy decision.

use chrono::NaiveDate;

use super::domain::{DenialReason, Sex};
use super::policy::LendingPolicy;

const MINIMUM_AGE_YEARS: u32 = 18;

/// Whole-year age at `today` for someone born on `birth_date`.
fn age_in_years(birth_date: NaiveDate, today: NaiveDate) -> u32 {
    today.years_since(birth_date).unwrap_or(0)
}

/// Check both age gates against the caller-supplied reference date.
///
/// `today` comes from the caller so that day-boundary behavior stays
/// deterministic; the engine never reads the clock itself.
pub(crate) fn assess_age(
    birth_date: NaiveDate,
    sex: Sex,
    today: NaiveDate,
    policy: &LendingPolicy,
) -> Result<(), DenialReason> {
    let age = age_in_years(birth_date, today);
    if age < MINIMUM_AGE_YEARS {
        return Err(DenialReason::BelowMinimumAge);
    }

    let repayment_years = policy.max_period_months / 12;
    for expectancy in policy.life_expectancies.values() {
        let adjusted = expectancy.for_sex(sex).saturating_sub(repayment_years);
        if age > adjusted {
            return Err(DenialReason::AboveMaximumAge);
        }
    }

    Ok(())
}
