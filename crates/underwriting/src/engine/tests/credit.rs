use super::common::{adult_code, policy};
use crate::engine::credit::credit_modifier;

fn modifier_for(segment: u32) -> u32 {
    credit_modifier(&adult_code(segment), &policy()).expect("segment parses")
}

#[test]
fn segments_below_first_floor_mean_debt() {
    assert_eq!(modifier_for(0), 0);
    assert_eq!(modifier_for(1200), 0);
    assert_eq!(modifier_for(2499), 0);
}

#[test]
fn tier_floors_are_inclusive_and_ceilings_exclusive() {
    let policy = policy();
    assert_eq!(modifier_for(2500), policy.tier1_modifier);
    assert_eq!(modifier_for(4999), policy.tier1_modifier);
    assert_eq!(modifier_for(5000), policy.tier2_modifier);
    assert_eq!(modifier_for(7499), policy.tier2_modifier);
    assert_eq!(modifier_for(7500), policy.tier3_modifier);
    assert_eq!(modifier_for(9999), policy.tier3_modifier);
}
