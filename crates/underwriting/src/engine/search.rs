//! Offer search: the largest loan the credit modifier can carry, at the
//! nearest period that funds at least the minimum amount.

use tracing::trace;

use super::domain::DenialReason;
use super::policy::LendingPolicy;

/// An approvable (amount, period) pair produced by the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Offer {
    pub(crate) amount: u32,
    pub(crate) period_months: u32,
}

/// Walk periods upward from the requested one until the modifier carries at
/// least the minimum amount with a sufficient credit score, or the policy
/// ceiling is passed.
///
/// The zero-modifier guard is load-bearing: a debtor's capacity is
/// identically zero at every period, so no amount of walking can reach an
/// acceptable one. The guard keeps the search bounded instead of letting it
/// spin on a condition that can never hold.
pub(crate) fn find_approvable(
    modifier: u32,
    requested_period: u32,
    policy: &LendingPolicy,
) -> Result<Offer, DenialReason> {
    if modifier == 0 {
        return Err(DenialReason::NoValidLoan);
    }

    let mut period = requested_period;
    while period <= policy.max_period_months {
        let capacity = modifier * period;
        let credit_score = f64::from(modifier) / f64::from(capacity) * f64::from(period);
        if capacity >= policy.min_amount && credit_score >= 1.0 {
            return Ok(Offer {
                amount: capacity.min(policy.max_amount),
                period_months: period,
            });
        }
        trace!(period, capacity, "period below funding floor");
        period += 1;
    }

    Err(DenialReason::NoValidLoan)
}
