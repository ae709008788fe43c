//! Raising money by selling buildings.
//!
//! Used when a mandatory construction cannot be paid for. Wrecks go first,
//! then damaged buildings, then anything; within a tier the preferred planet
//! is searched before the rest, and the priciest match is demolished.

use super::VisibleWorld;
use crate::input::{ActionQueue, Command};
use crate::state::{Building, Planet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemolishTier {
    SeverelyDamaged,
    Damaged,
    Any,
}

impl DemolishTier {
    pub const ORDER: [DemolishTier; 3] = [
        DemolishTier::SeverelyDamaged,
        DemolishTier::Damaged,
        DemolishTier::Any,
    ];

    pub fn matches(self, building: &Building) -> bool {
        match self {
            DemolishTier::SeverelyDamaged => building.is_severely_damaged(),
            DemolishTier::Damaged => building.is_damaged(),
            DemolishTier::Any => true,
        }
    }
}

/// Queue a demolition that raises money, starting with `current`.
///
/// Returns true if a command was queued.
pub fn raise_money(world: &VisibleWorld<'_>, queue: &mut ActionQueue, current: &Planet) -> bool {
    for tier in DemolishTier::ORDER {
        if demolish_priciest(world, queue, current, tier) {
            return true;
        }
        for planet in world.planets().filter(|p| p.id != current.id) {
            if demolish_priciest(world, queue, planet, tier) {
                return true;
            }
        }
    }
    false
}

fn demolish_priciest(
    world: &VisibleWorld<'_>,
    queue: &mut ActionQueue,
    planet: &Planet,
    tier: DemolishTier,
) -> bool {
    let Some(building) = priciest(world, planet, tier) else {
        return false;
    };
    log::debug!(
        "Demolishing building #{} on planet {} ({:?}) to raise money",
        building.id,
        planet.id,
        tier
    );
    queue.push(Command::DemolishBuilding {
        planet: planet.id,
        building: building.id,
    });
    true
}

/// Costliest building of the tier on the planet; the first one wins ties.
pub fn priciest<'p>(
    world: &VisibleWorld<'_>,
    planet: &'p Planet,
    tier: DemolishTier,
) -> Option<&'p Building> {
    let mut best: Option<(&Building, i64)> = None;
    for building in planet.buildings.iter().filter(|b| tier.matches(b)) {
        let Some(cost) = world.cost_of(building) else {
            continue;
        };
        if best.map_or(true, |(_, best_cost)| cost > best_cost) {
            best = Some((building, cost));
        }
    }
    best.map(|(building, _)| building)
}
