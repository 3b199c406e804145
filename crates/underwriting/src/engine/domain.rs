use std::fmt;

use serde::{Deserialize, Serialize};

/// National personal identification code, eleven digits.
///
/// Digit positions are fixed: the first digit carries century and sex, digits
/// two through seven the two-digit birth year, month, and day, and the last
/// four digits the sequence segment used for credit-tier lookup. Checksum and
/// format rules belong to the issuing registry's validator, not to this crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonalCode(pub String);

impl PersonalCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One loan application as received from the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanRequest {
    pub personal_code: PersonalCode,
    /// Requested amount in euros.
    pub amount: u32,
    /// Requested repayment period in months.
    pub period_months: u32,
}

impl LoanRequest {
    pub fn new(personal_code: PersonalCode, amount: u32, period_months: u32) -> Self {
        Self {
            personal_code,
            amount,
            period_months,
        }
    }
}

/// Biological sex as encoded in the personal code's first digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

/// Countries the lender operates in. The personal code does not encode
/// nationality, so age rules consult every country's figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Country {
    Estonia,
    Latvia,
    Lithuania,
}

/// Adjudication outcome for one application.
///
/// Approval and denial are mutually exclusive by construction; there is no
/// state carrying both an offer and a reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanDecision {
    Approved { amount: u32, period_months: u32 },
    Denied(DenialReason),
}

impl LoanDecision {
    pub fn is_approved(&self) -> bool {
        matches!(self, LoanDecision::Approved { .. })
    }

    pub fn summary(&self) -> String {
        match self {
            LoanDecision::Approved {
                amount,
                period_months,
            } => format!("approved {amount} EUR over {period_months} months"),
            LoanDecision::Denied(reason) => format!("denied: {reason}"),
        }
    }
}

/// Why an application was turned down.
///
/// Every variant is an expected branch of normal operation and travels inside
/// [`LoanDecision::Denied`]; none of them is raised as an error across the
/// engine boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum DenialReason {
    #[error("invalid personal ID code")]
    InvalidPersonalCode,
    #[error("invalid loan amount: {requested} EUR")]
    InvalidAmount { requested: u32 },
    #[error("invalid loan period: {requested} months")]
    InvalidPeriod { requested: u32 },
    #[error("age falls below the minimum allowed limit")]
    BelowMinimumAge,
    #[error("age exceeds the maximum allowed limit")]
    AboveMaximumAge,
    #[error("no valid loan found")]
    NoValidLoan,
}
