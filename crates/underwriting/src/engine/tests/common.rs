use chrono::NaiveDate;

use crate::engine::identity::CodeValidator;
use crate::engine::{DecisionEngine, LendingPolicy, LoanRequest, PersonalCode};

pub(super) struct AcceptAll;

impl CodeValidator for AcceptAll {
    fn is_well_formed(&self, _code: &str) -> bool {
        true
    }
}

pub(super) struct RejectAll;

impl CodeValidator for RejectAll {
    fn is_well_formed(&self, _code: &str) -> bool {
        false
    }
}

pub(super) fn policy() -> LendingPolicy {
    LendingPolicy::default()
}

pub(super) fn engine() -> DecisionEngine<AcceptAll> {
    DecisionEngine::new(policy(), AcceptAll)
}

/// Fixed reference date so day-boundary arithmetic stays deterministic.
pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date")
}

/// Compose an eleven-digit code from its fields; the final four digits are
/// the sequence segment (serial and checksum positions).
pub(super) fn code(first: u8, year: u32, month: u32, day: u32, segment: u32) -> PersonalCode {
    PersonalCode(format!("{first}{year:02}{month:02}{day:02}{segment:04}"))
}

/// A male applicant born 1985-06-01, well inside both age gates.
pub(super) fn adult_code(segment: u32) -> PersonalCode {
    code(3, 85, 6, 1, segment)
}

pub(super) fn request(personal_code: PersonalCode, amount: u32, period_months: u32) -> LoanRequest {
    LoanRequest::new(personal_code, amount, period_months)
}
