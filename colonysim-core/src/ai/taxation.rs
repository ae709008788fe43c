//! Taxation policy: the tax level a planet's mood and size can bear.

use crate::config::PlannerConfig;
use crate::state::{Planet, TaxLevel};

/// Tax level implied by morale and population, first matching row wins.
pub fn target_tax(config: &PlannerConfig, morale: i32, population: i32) -> TaxLevel {
    config
        .tax_rules
        .iter()
        .find(|rule| rule.condition.matches(morale, population))
        .map_or(config.tax_ceiling, |rule| rule.level)
}

/// The level this planet should move to, or `None` if it is already there.
pub fn tax_change(config: &PlannerConfig, planet: &Planet) -> Option<TaxLevel> {
    let target = target_tax(config, planet.morale, planet.population);
    (planet.tax != target).then_some(target)
}
