use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{Country, Sex};

/// Expected lifespan in whole years for one country, split by sex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeExpectancy {
    pub male: u32,
    pub female: u32,
}

impl LifeExpectancy {
    pub const fn for_sex(self, sex: Sex) -> u32 {
        match sex {
            Sex::Male => self.male,
            Sex::Female => self.female,
        }
    }
}

/// Policy table backing every decision: loan bounds, per-tier credit
/// modifiers, and the life-expectancy figures used for the upper age gate.
///
/// Loaded once at startup and never mutated; the engine only ever reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LendingPolicy {
    /// Smallest loan the lender issues, in euros.
    pub min_amount: u32,
    /// Largest loan the lender issues, in euros.
    pub max_amount: u32,
    pub min_period_months: u32,
    pub max_period_months: u32,
    pub tier1_modifier: u32,
    pub tier2_modifier: u32,
    pub tier3_modifier: u32,
    pub life_expectancies: BTreeMap<Country, LifeExpectancy>,
}

impl Default for LendingPolicy {
    fn default() -> Self {
        let mut life_expectancies = BTreeMap::new();
        life_expectancies.insert(
            Country::Estonia,
            LifeExpectancy {
                male: 81,
                female: 88,
            },
        );
        life_expectancies.insert(
            Country::Latvia,
            LifeExpectancy {
                male: 82,
                female: 86,
            },
        );
        life_expectancies.insert(
            Country::Lithuania,
            LifeExpectancy {
                male: 83,
                female: 87,
            },
        );

        Self {
            min_amount: 2000,
            max_amount: 10_000,
            min_period_months: 12,
            max_period_months: 60,
            tier1_modifier: 100,
            tier2_modifier: 300,
            tier3_modifier: 1000,
            life_expectancies,
        }
    }
}
