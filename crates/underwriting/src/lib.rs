//! Loan underwriting core: the lending policy table, applicant demographics
//! derived from the national personal code, and the decision engine that
//! sizes the largest approvable loan for a request.

pub mod engine;

pub use engine::{
    CodeFieldError, CodeValidator, Country, DecisionEngine, DenialReason, LendingPolicy,
    LifeExpectancy, LoanDecision, LoanRequest, PersonalCode, Sex,
};
