use crate::state::TaxLevel;
use serde::{Deserialize, Serialize};

/// Condition of one row in the taxation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "when", rename_all = "snake_case")]
pub enum TaxCondition {
    /// `morale < morale || population < population`
    MoraleOrPopulationBelow { morale: i32, population: i32 },
    MoraleBelow { morale: i32 },
    /// `morale < morale && population > population`
    MoraleBelowPopulationAbove { morale: i32, population: i32 },
}

impl TaxCondition {
    pub fn matches(&self, morale: i32, population: i32) -> bool {
        match *self {
            TaxCondition::MoraleOrPopulationBelow {
                morale: m,
                population: p,
            } => morale < m || population < p,
            TaxCondition::MoraleBelow { morale: m } => morale < m,
            TaxCondition::MoraleBelowPopulationAbove {
                morale: m,
                population: p,
            } => morale < m && population > p,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRule {
    #[serde(flatten)]
    pub condition: TaxCondition,
    pub level: TaxLevel,
}

impl TaxRule {
    const fn new(condition: TaxCondition, level: TaxLevel) -> Self {
        Self { condition, level }
    }
}

/// Policy constants of the colony planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Kind tag of the colony hub building type.
    pub hub_kind: String,
    /// Below this treasury, repairs yield to construction.
    pub repair_money_threshold: i64,
    /// Tolerated shortage factor for hospital, police and fire checks.
    ///
    /// A planet is short only when `population > available * slack`.
    pub shortage_slack: f64,
    /// Fire brigades are only considered from this population upward.
    pub fire_population_floor: i32,
    /// Morale boosting buildings are considered below this morale...
    pub morale_boost_below: i32,
    /// ...when the previous morale was also below this.
    pub last_morale_boost_below: i32,
    /// Evaluated top to bottom; the first matching row wins.
    pub tax_rules: Vec<TaxRule>,
    /// Level used when no row matches.
    pub tax_ceiling: TaxLevel,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        use TaxCondition::*;
        Self {
            hub_kind: "MainBuilding".to_string(),
            repair_money_threshold: 10_000,
            shortage_slack: 1.1,
            fire_population_floor: 25_000,
            morale_boost_below: 21,
            last_morale_boost_below: 27,
            tax_rules: vec![
                TaxRule::new(
                    MoraleOrPopulationBelow {
                        morale: 25,
                        population: 4500,
                    },
                    TaxLevel::None,
                ),
                TaxRule::new(
                    MoraleOrPopulationBelow {
                        morale: 38,
                        population: 5000,
                    },
                    TaxLevel::VeryLow,
                ),
                TaxRule::new(
                    MoraleOrPopulationBelow {
                        morale: 55,
                        population: 5500,
                    },
                    TaxLevel::Low,
                ),
                TaxRule::new(MoraleBelow { morale: 60 }, TaxLevel::Moderate),
                TaxRule::new(MoraleBelow { morale: 65 }, TaxLevel::AboveModerate),
                TaxRule::new(
                    MoraleBelowPopulationAbove {
                        morale: 70,
                        population: 10_000,
                    },
                    TaxLevel::High,
                ),
                TaxRule::new(
                    MoraleBelowPopulationAbove {
                        morale: 78,
                        population: 15_000,
                    },
                    TaxLevel::VeryHigh,
                ),
                TaxRule::new(
                    MoraleBelowPopulationAbove {
                        morale: 85,
                        population: 20_000,
                    },
                    TaxLevel::Oppressive,
                ),
                TaxRule::new(
                    MoraleBelowPopulationAbove {
                        morale: 95,
                        population: 25_000,
                    },
                    TaxLevel::Exploiter,
                ),
            ],
            tax_ceiling: TaxLevel::Slavery,
        }
    }
}
