//! Credit-tier resolution from the code's sequence segment.

use super::domain::PersonalCode;
use super::identity::{self, CodeFieldError};
use super::policy::LendingPolicy;

/// Tier band floors over the four-digit sequence segment. Each band is
/// inclusive at its floor and exclusive at the next one.
const TIER1_FLOOR: u32 = 2500;
const TIER2_FLOOR: u32 = 5000;
const TIER3_FLOOR: u32 = 7500;

/// Map the last four digits of the code to the applicant's credit modifier.
///
/// Zero marks an applicant in active debt; no loan is ever approvable for
/// them, whatever the requested amount or period.
pub(crate) fn credit_modifier(
    code: &PersonalCode,
    policy: &LendingPolicy,
) -> Result<u32, CodeFieldError> {
    let segment = identity::segment(code)?;
    Ok(match segment {
        s if s < TIER1_FLOOR => 0,
        s if s < TIER2_FLOOR => policy.tier1_modifier,
        s if s < TIER3_FLOOR => policy.tier2_modifier,
        _ => policy.tier3_modifier,
    })
}
