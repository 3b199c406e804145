use super::common::{adult_code, code, engine, policy, request, today, RejectAll};
use crate::engine::{DecisionEngine, DenialReason, LoanDecision};

#[test]
fn rejected_code_denies_before_anything_else_runs() {
    let engine = DecisionEngine::new(policy(), RejectAll);
    // Amount and period are also out of range; the code failure is the one
    // reported, matching intake order.
    let decision = engine.decide(&request(adult_code(8000), 1, 1), today());
    assert_eq!(
        decision,
        LoanDecision::Denied(DenialReason::InvalidPersonalCode)
    );
}

#[test]
fn amount_outside_policy_bounds_is_denied() {
    let decision = engine().decide(&request(adult_code(8000), 1999, 24), today());
    assert_eq!(
        decision,
        LoanDecision::Denied(DenialReason::InvalidAmount { requested: 1999 })
    );

    let decision = engine().decide(&request(adult_code(8000), 10_001, 24), today());
    assert_eq!(
        decision,
        LoanDecision::Denied(DenialReason::InvalidAmount { requested: 10_001 })
    );
}

#[test]
fn period_outside_policy_bounds_is_denied() {
    let decision = engine().decide(&request(adult_code(8000), 4000, 11), today());
    assert_eq!(
        decision,
        LoanDecision::Denied(DenialReason::InvalidPeriod { requested: 11 })
    );

    let decision = engine().decide(&request(adult_code(8000), 4000, 61), today());
    assert_eq!(
        decision,
        LoanDecision::Denied(DenialReason::InvalidPeriod { requested: 61 })
    );
}

#[test]
fn amount_failure_reports_before_period_failure() {
    let decision = engine().decide(&request(adult_code(8000), 1, 1), today());
    assert_eq!(
        decision,
        LoanDecision::Denied(DenialReason::InvalidAmount { requested: 1 })
    );
}

#[test]
fn impossible_birth_date_in_the_code_is_an_invalid_code() {
    let decision = engine().decide(&request(code(3, 85, 2, 30, 8000), 4000, 24), today());
    assert_eq!(
        decision,
        LoanDecision::Denied(DenialReason::InvalidPersonalCode)
    );
}

#[test]
fn underage_applicant_is_denied() {
    let decision = engine().decide(&request(code(5, 10, 1, 1, 8000), 4000, 24), today());
    assert_eq!(decision, LoanDecision::Denied(DenialReason::BelowMinimumAge));
}

#[test]
fn overage_applicant_is_denied() {
    let decision = engine().decide(&request(code(3, 40, 1, 1, 8000), 4000, 24), today());
    assert_eq!(decision, LoanDecision::Denied(DenialReason::AboveMaximumAge));
}

#[test]
fn debt_segment_never_gets_an_offer() {
    let decision = engine().decide(&request(adult_code(1200), 4000, 36), today());
    assert_eq!(decision, LoanDecision::Denied(DenialReason::NoValidLoan));
}

#[test]
fn highest_tier_is_capped_at_the_maximum_amount() {
    let decision = engine().decide(&request(adult_code(8000), 10_000, 24), today());
    assert_eq!(
        decision,
        LoanDecision::Approved {
            amount: 10_000,
            period_months: 24
        }
    );
}

#[test]
fn lowest_tier_walks_the_period_forward_to_an_offer() {
    let decision = engine().decide(&request(adult_code(3000), 4000, 12), today());
    assert_eq!(
        decision,
        LoanDecision::Approved {
            amount: 2000,
            period_months: 20
        }
    );
}

#[test]
fn identical_inputs_produce_identical_decisions() {
    let engine = engine();
    let request = request(adult_code(5600), 4000, 36);
    let first = engine.decide(&request, today());
    let second = engine.decide(&request, today());
    assert_eq!(first, second);
}

#[test]
fn summaries_read_as_one_line_outcomes() {
    let approved = engine().decide(&request(adult_code(8000), 10_000, 24), today());
    assert_eq!(approved.summary(), "approved 10000 EUR over 24 months");
    assert!(approved.is_approved());

    let denied = engine().decide(&request(adult_code(1200), 4000, 36), today());
    assert_eq!(denied.summary(), "denied: no valid loan found");
    assert!(!denied.is_approved());
}
