use super::common::policy;
use crate::engine::search::{find_approvable, Offer};
use crate::engine::{DenialReason, LendingPolicy};

#[test]
fn zero_modifier_is_rejected_without_searching() {
    assert_eq!(
        find_approvable(0, 12, &policy()),
        Err(DenialReason::NoValidLoan)
    );
}

#[test]
fn requested_period_wins_when_it_already_funds_the_minimum() {
    // 300 * 12 = 3600 clears the 2000 floor at the requested period.
    assert_eq!(
        find_approvable(300, 12, &policy()),
        Ok(Offer {
            amount: 3600,
            period_months: 12
        })
    );
}

#[test]
fn search_walks_forward_to_the_first_funding_period() {
    // 100 per month reaches the 2000 floor at twenty months.
    assert_eq!(
        find_approvable(100, 12, &policy()),
        Ok(Offer {
            amount: 2000,
            period_months: 20
        })
    );
}

#[test]
fn approved_amount_is_capped_at_the_policy_maximum() {
    assert_eq!(
        find_approvable(1000, 24, &policy()),
        Ok(Offer {
            amount: 10_000,
            period_months: 24
        })
    );
}

#[test]
fn search_stops_at_the_maximum_period() {
    // A floor no tier can reach within sixty months: the walk must terminate
    // with a denial instead of running past the ceiling.
    let policy = LendingPolicy {
        min_amount: 100_000,
        ..LendingPolicy::default()
    };
    assert_eq!(
        find_approvable(1000, 12, &policy),
        Err(DenialReason::NoValidLoan)
    );
}

#[test]
fn late_requested_period_still_terminates() {
    assert_eq!(
        find_approvable(100, 60, &policy()),
        Ok(Offer {
            amount: 6000,
            period_months: 60
        })
    );
}
