//! Loan application intake, eligibility gating, and offer search.

pub(crate) mod credit;
pub mod domain;
pub(crate) mod eligibility;
pub mod identity;
pub mod policy;
pub(crate) mod search;

#[cfg(test)]
mod tests;

pub use domain::{Country, DenialReason, LoanDecision, LoanRequest, PersonalCode, Sex};
pub use identity::{CodeFieldError, CodeValidator};
pub use policy::{LendingPolicy, LifeExpectancy};

use chrono::NaiveDate;
use tracing::{debug, info};

/// Engine composing the external code validator with the lending policy.
///
/// Holds no per-request state: the credit modifier and the search cursor are
/// locals inside [`DecisionEngine::decide`], so concurrent calls share
/// nothing but the immutable policy table.
pub struct DecisionEngine<V> {
    policy: LendingPolicy,
    validator: V,
}

impl<V: CodeValidator> DecisionEngine<V> {
    pub fn new(policy: LendingPolicy, validator: V) -> Self {
        Self { policy, validator }
    }

    pub fn policy(&self) -> &LendingPolicy {
        &self.policy
    }

    /// Evaluate one application against the policy as of `today`.
    ///
    /// Every denial, malformed input included, is a regular
    /// [`LoanDecision::Denied`] value; the engine never fails outward.
    pub fn decide(&self, request: &LoanRequest, today: NaiveDate) -> LoanDecision {
        if let Err(reason) = self.validate(request) {
            return self.conclude(LoanDecision::Denied(reason));
        }

        let birth_date = match identity::birth_date(&request.personal_code) {
            Ok(date) => date,
            Err(error) => {
                debug!(%error, "code fields do not form a birth date");
                return self.conclude(LoanDecision::Denied(DenialReason::InvalidPersonalCode));
            }
        };
        let sex = match identity::sex(&request.personal_code) {
            Ok(sex) => sex,
            Err(error) => {
                debug!(%error, "code carries no sex indicator");
                return self.conclude(LoanDecision::Denied(DenialReason::InvalidPersonalCode));
            }
        };

        if let Err(reason) = eligibility::assess_age(birth_date, sex, today, &self.policy) {
            return self.conclude(LoanDecision::Denied(reason));
        }

        let modifier = match credit::credit_modifier(&request.personal_code, &self.policy) {
            Ok(modifier) => modifier,
            Err(error) => {
                debug!(%error, "code carries no sequence segment");
                return self.conclude(LoanDecision::Denied(DenialReason::InvalidPersonalCode));
            }
        };
        debug!(
            modifier,
            requested_amount = request.amount,
            requested_period = request.period_months,
            "resolved credit modifier"
        );

        let decision = match search::find_approvable(modifier, request.period_months, &self.policy)
        {
            Ok(offer) => LoanDecision::Approved {
                amount: offer.amount,
                period_months: offer.period_months,
            },
            Err(reason) => LoanDecision::Denied(reason),
        };
        self.conclude(decision)
    }

    /// Range and format checks on the raw inputs, reported in intake order:
    /// code first, then amount, then period.
    fn validate(&self, request: &LoanRequest) -> Result<(), DenialReason> {
        if !self.validator.is_well_formed(request.personal_code.as_str()) {
            return Err(DenialReason::InvalidPersonalCode);
        }
        if request.amount < self.policy.min_amount || request.amount > self.policy.max_amount {
            return Err(DenialReason::InvalidAmount {
                requested: request.amount,
            });
        }
        if request.period_months < self.policy.min_period_months
            || request.period_months > self.policy.max_period_months
        {
            return Err(DenialReason::InvalidPeriod {
                requested: request.period_months,
            });
        }
        Ok(())
    }

    fn conclude(&self, decision: LoanDecision) -> LoanDecision {
        info!(outcome = %decision.summary(), "loan decision");
        decision
    }
}
