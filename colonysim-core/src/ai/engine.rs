//! Building placement and upgrade search.
//!
//! The planner decides *which* category of building a colony lacks; a
//! [`BuildingEngine`] decides *what* to build about it. Policies are plain data
//! so each planner check can hand its rules over without knowing the search.

use super::selectors::BuildingSelector;
use super::VisibleWorld;
use crate::buildings::BuildingType;
use crate::input::{ActionQueue, Command};
use crate::state::{Building, Planet};
use std::cmp::Ordering;
use tracing::instrument;

/// How to choose a building on one planet.
pub struct PlacementPolicy<'a> {
    pub selector: &'a dyn BuildingSelector,
    /// Preferred candidate sorts first.
    pub cost_order: fn(&BuildingType, &BuildingType) -> Ordering,
    /// Try raising an existing building before placing a new one.
    pub allow_upgrade: bool,
}

/// How to choose a planet, and then a building on it.
pub struct CategoryPolicy<'a> {
    /// Only planets short on the category are considered.
    pub shortage: Box<dyn Fn(&Planet) -> bool + 'a>,
    /// Most distressed planet sorts first.
    pub planet_order: Box<dyn Fn(&Planet, &Planet) -> Ordering + 'a>,
    pub placement: PlacementPolicy<'a>,
}

pub trait BuildingEngine {
    /// Queue one placement or upgrade on the worst planet that is short of the
    /// category and has an eligible candidate. Returns true if a command was queued.
    fn plan_category(
        &self,
        world: &VisibleWorld<'_>,
        queue: &mut ActionQueue,
        policy: &CategoryPolicy<'_>,
    ) -> bool;

    /// Queue one placement or upgrade on the given planet.
    fn manage_buildings(
        &self,
        world: &VisibleWorld<'_>,
        queue: &mut ActionQueue,
        planet: &Planet,
        placement: &PlacementPolicy<'_>,
    ) -> bool;
}

/// Catalog-driven engine: upgrades the cheapest eligible building, otherwise
/// places the cheapest eligible type the treasury can afford.
///
/// Map layout is not modelled; a placement only names the planet and type and
/// the executor picks the spot.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogEngine;

impl BuildingEngine for CatalogEngine {
    #[instrument(skip_all, name = "plan_category")]
    fn plan_category(
        &self,
        world: &VisibleWorld<'_>,
        queue: &mut ActionQueue,
        policy: &CategoryPolicy<'_>,
    ) -> bool {
        let mut planets: Vec<&Planet> = world
            .planets()
            .filter(|&p| (policy.shortage)(p))
            .collect();
        // Stable: equally distressed planets keep snapshot order.
        planets.sort_by(|a, b| (policy.planet_order)(*a, *b));
        planets
            .into_iter()
            .any(|planet| self.manage_buildings(world, queue, planet, &policy.placement))
    }

    fn manage_buildings(
        &self,
        world: &VisibleWorld<'_>,
        queue: &mut ActionQueue,
        planet: &Planet,
        placement: &PlacementPolicy<'_>,
    ) -> bool {
        if placement.allow_upgrade {
            if let Some((building, ty)) = upgrade_candidate(world, planet, placement) {
                log::debug!(
                    "Upgrading {} #{} on planet {} to level {}",
                    ty.name,
                    building.id,
                    planet.id,
                    building.upgrade_level + 1
                );
                queue.push(Command::UpgradeBuilding {
                    planet: planet.id,
                    building: building.id,
                    level: building.upgrade_level + 1,
                });
                return true;
            }
        }
        if let Some(ty) = placement_candidate(world, planet, placement) {
            log::debug!("Placing {} on planet {}", ty.name, planet.id);
            queue.push(Command::PlaceBuilding {
                planet: planet.id,
                building_type: ty.id,
            });
            return true;
        }
        false
    }
}

fn upgrade_candidate<'w>(
    world: &VisibleWorld<'w>,
    planet: &'w Planet,
    placement: &PlacementPolicy<'_>,
) -> Option<(&'w Building, &'w BuildingType)> {
    planet
        .buildings
        .iter()
        .filter(|b| !b.is_damaged() && !b.repairing)
        .filter_map(|b| world.building_type(b).map(|ty| (b, ty)))
        .filter(|(b, ty)| {
            b.upgrade_level < ty.max_upgrade
                && ty.cost <= world.money()
                && placement.selector.accept_building(planet, b, ty)
        })
        .min_by(|(_, a), (_, b)| (placement.cost_order)(*a, *b))
}

fn placement_candidate<'w>(
    world: &VisibleWorld<'w>,
    planet: &Planet,
    placement: &PlacementPolicy<'_>,
) -> Option<&'w BuildingType> {
    if planet.statistics.constructing {
        return None;
    }
    world
        .catalog
        .iter()
        .filter(|ty| {
            ty.cost <= world.money()
                && ty.limit.map_or(true, |own| planet.count_of(ty.id) < own)
                && placement.selector.accept_type(planet, ty)
        })
        .min_by(|a, b| (placement.cost_order)(*a, *b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::compare::{cost_order, worst};
    use crate::ai::selectors::ResourceSelector;
    use crate::testing::*;

    fn food_policy() -> CategoryPolicy<'static> {
        CategoryPolicy {
            shortage: Box::new(|p: &Planet| p.population > p.statistics.food_available),
            planet_order: Box::new(|a: &Planet, b: &Planet| {
                worst(
                    a.statistics.food_available,
                    a.population,
                    b.statistics.food_available,
                    b.population,
                )
            }),
            placement: PlacementPolicy {
                selector: &ResourceSelector::FOOD,
                cost_order,
                allow_upgrade: true,
            },
        }
    }

    #[test]
    fn test_places_on_worst_planet() {
        let snapshot = SnapshotBuilder::new()
            .with_planet(PlanetBuilder::new(1).population(6000).food(5000).build())
            .with_planet(PlanetBuilder::new(2).population(6000).food(1000).build())
            .with_planet(PlanetBuilder::new(3).population(6000).food(9000).build())
            .build();
        let catalog = standard_catalog();
        let world = VisibleWorld::new(&snapshot, &catalog);
        let mut queue = ActionQueue::new();

        assert!(CatalogEngine.plan_category(&world, &mut queue, &food_policy()));
        assert_eq!(
            queue.into_commands(),
            vec![Command::PlaceBuilding {
                planet: 2,
                building_type: FARM
            }]
        );
    }

    #[test]
    fn test_upgrade_preferred_over_placement() {
        let snapshot = SnapshotBuilder::new()
            .with_planet(
                PlanetBuilder::new(1)
                    .population(6000)
                    .food(2000)
                    .building(BuildingBuilder::new(5, FARM).upgrade_level(1).build())
                    .build(),
            )
            .build();
        let catalog = standard_catalog();
        let world = VisibleWorld::new(&snapshot, &catalog);
        let mut queue = ActionQueue::new();

        assert!(CatalogEngine.plan_category(&world, &mut queue, &food_policy()));
        assert_eq!(
            queue.last(),
            Some(&Command::UpgradeBuilding {
                planet: 1,
                building: 5,
                level: 2
            })
        );
    }

    #[test]
    fn test_maxed_or_damaged_buildings_are_not_upgraded() {
        let snapshot = SnapshotBuilder::new()
            .with_planet(
                PlanetBuilder::new(1)
                    .population(6000)
                    .food(2000)
                    .building(BuildingBuilder::new(5, FARM).upgrade_level(2).build())
                    .building(BuildingBuilder::new(6, FARM).damaged().build())
                    .build(),
            )
            .build();
        let catalog = standard_catalog();
        let world = VisibleWorld::new(&snapshot, &catalog);
        let mut queue = ActionQueue::new();

        assert!(CatalogEngine.plan_category(&world, &mut queue, &food_policy()));
        assert!(matches!(
            queue.last(),
            Some(Command::PlaceBuilding {
                building_type: FARM,
                ..
            })
        ));
    }

    #[test]
    fn test_nothing_affordable() {
        let snapshot = SnapshotBuilder::new()
            .money(100)
            .with_planet(PlanetBuilder::new(1).population(6000).food(0).build())
            .build();
        let catalog = standard_catalog();
        let world = VisibleWorld::new(&snapshot, &catalog);
        let mut queue = ActionQueue::new();

        assert!(!CatalogEngine.plan_category(&world, &mut queue, &food_policy()));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_constructing_planet_gets_no_placement() {
        let snapshot = SnapshotBuilder::new()
            .with_planet(
                PlanetBuilder::new(1)
                    .population(6000)
                    .food(0)
                    .constructing()
                    .build(),
            )
            .with_planet(PlanetBuilder::new(2).population(6000).food(3000).build())
            .build();
        let catalog = standard_catalog();
        let world = VisibleWorld::new(&snapshot, &catalog);
        let mut queue = ActionQueue::new();

        assert!(CatalogEngine.plan_category(&world, &mut queue, &food_policy()));
        assert_eq!(
            queue.last(),
            Some(&Command::PlaceBuilding {
                planet: 2,
                building_type: FARM
            })
        );
    }

    #[test]
    fn test_cheapest_eligible_type_wins() {
        let snapshot = SnapshotBuilder::new()
            .with_planet(PlanetBuilder::new(1).build())
            .build();
        let catalog = standard_catalog();
        let world = VisibleWorld::new(&snapshot, &catalog);
        let mut queue = ActionQueue::new();
        let placement = PlacementPolicy {
            selector: &ResourceSelector::MORALE,
            cost_order,
            allow_upgrade: false,
        };

        let planet = &snapshot.planets[0];
        assert!(CatalogEngine.manage_buildings(&world, &mut queue, planet, &placement));
        assert_eq!(
            queue.last(),
            Some(&Command::PlaceBuilding {
                planet: 1,
                building_type: PARK
            })
        );
    }
}
