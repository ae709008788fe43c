//! Fixture builders for planner tests.

use crate::buildings::{resource, BuildingCatalog, BuildingType, BuildingTypeId};
use crate::state::{
    Building, BuildingId, Planet, PlanetId, PlanetStatistics, TaxLevel, WorldSnapshot,
};
use std::collections::BTreeMap;

pub const HUB: BuildingTypeId = BuildingTypeId(0);
pub const POWER_PLANT: BuildingTypeId = BuildingTypeId(1);
pub const FARM: BuildingTypeId = BuildingTypeId(2);
pub const APARTMENTS: BuildingTypeId = BuildingTypeId(3);
pub const HOSPITAL: BuildingTypeId = BuildingTypeId(4);
pub const POLICE_STATION: BuildingTypeId = BuildingTypeId(5);
pub const STADIUM: BuildingTypeId = BuildingTypeId(6);
pub const PARK: BuildingTypeId = BuildingTypeId(7);
pub const FIRE_STATION: BuildingTypeId = BuildingTypeId(8);

fn building_type(
    id: BuildingTypeId,
    name: &str,
    kind: &str,
    cost: i64,
    resources: &[(&str, f32)],
    max_upgrade: u8,
) -> BuildingType {
    BuildingType {
        id,
        name: name.to_string(),
        kind: kind.to_string(),
        cost,
        limit: None,
        resources: resources
            .iter()
            .map(|(name, amount)| (name.to_string(), *amount))
            .collect::<BTreeMap<_, _>>(),
        max_upgrade,
    }
}

/// A small catalog with one type per resource category; the hub costs 1000.
pub fn standard_catalog() -> BuildingCatalog {
    let mut hub = building_type(HUB, "Colony Hub", "MainBuilding", 1000, &[], 0);
    hub.limit = Some(1);
    BuildingCatalog::new(vec![
        hub,
        building_type(
            POWER_PLANT,
            "Power Plant",
            "Energy",
            600,
            &[(resource::ENERGY, 1000.0)],
            4,
        ),
        building_type(FARM, "Farm", "Economic", 300, &[(resource::FOOD, 2000.0)], 2),
        building_type(
            APARTMENTS,
            "Apartments",
            "Living",
            400,
            &[(resource::HOUSE, 3000.0)],
            3,
        ),
        building_type(
            HOSPITAL,
            "Hospital",
            "Social",
            700,
            &[(resource::HOSPITAL, 5000.0)],
            1,
        ),
        building_type(
            POLICE_STATION,
            "Police Station",
            "Social",
            500,
            &[(resource::POLICE, 5000.0)],
            1,
        ),
        building_type(
            STADIUM,
            "Stadium",
            "Social",
            900,
            &[(resource::MORALE, 15.0), (resource::POPULATION_GROWTH, 5.0)],
            0,
        ),
        building_type(PARK, "Park", "Social", 250, &[(resource::MORALE, 5.0)], 0),
        building_type(
            FIRE_STATION,
            "Fire Station",
            "Social",
            450,
            &[(resource::REPAIR, 1.0)],
            1,
        ),
    ])
}

pub struct BuildingBuilder {
    building: Building,
}

impl BuildingBuilder {
    pub fn new(id: BuildingId, type_id: BuildingTypeId) -> Self {
        Self {
            building: Building {
                id,
                type_id,
                hitpoints: 100,
                max_hitpoints: 100,
                repairing: false,
                energy: 0,
                upgrade_level: 0,
            },
        }
    }

    pub fn hitpoints(mut self, hitpoints: i32) -> Self {
        self.building.hitpoints = hitpoints;
        self
    }

    /// 75% health.
    pub fn damaged(self) -> Self {
        self.hitpoints(75)
    }

    /// 25% health.
    pub fn severely_damaged(self) -> Self {
        self.hitpoints(25)
    }

    pub fn repairing(mut self) -> Self {
        self.building.repairing = true;
        self
    }

    pub fn energy(mut self, energy: i32) -> Self {
        self.building.energy = energy;
        self
    }

    pub fn upgrade_level(mut self, level: u8) -> Self {
        self.building.upgrade_level = level;
        self
    }

    pub fn build(self) -> Building {
        self.building
    }
}

/// Builds a planet that needs nothing: content, taxed on target and fully supplied.
pub struct PlanetBuilder {
    planet: Planet,
}

impl PlanetBuilder {
    pub fn new(id: PlanetId) -> Self {
        Self {
            planet: Planet {
                id,
                name: format!("Planet {}", id),
                population: 5000,
                morale: 50,
                last_morale: 50,
                // Target level of the default tax table for morale 50, population 5000.
                tax: TaxLevel::Low,
                statistics: PlanetStatistics {
                    energy_available: 1000,
                    energy_demand: 500,
                    food_available: 10_000,
                    house_available: 10_000,
                    hospital_available: 10_000,
                    police_available: 10_000,
                    worker_demand: 1000,
                    constructing: false,
                },
                buildings: Vec::new(),
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.planet.name = name.to_string();
        self
    }

    pub fn population(mut self, population: i32) -> Self {
        self.planet.population = population;
        self
    }

    /// Sets both current and previous morale.
    pub fn morale(mut self, morale: i32) -> Self {
        self.planet.morale = morale;
        self.planet.last_morale = morale;
        self
    }

    pub fn last_morale(mut self, morale: i32) -> Self {
        self.planet.last_morale = morale;
        self
    }

    pub fn tax(mut self, tax: TaxLevel) -> Self {
        self.planet.tax = tax;
        self
    }

    pub fn energy(mut self, available: i32, demand: i32) -> Self {
        self.planet.statistics.energy_available = available;
        self.planet.statistics.energy_demand = demand;
        self
    }

    pub fn food(mut self, available: i32) -> Self {
        self.planet.statistics.food_available = available;
        self
    }

    pub fn house(mut self, available: i32) -> Self {
        self.planet.statistics.house_available = available;
        self
    }

    pub fn hospital(mut self, available: i32) -> Self {
        self.planet.statistics.hospital_available = available;
        self
    }

    pub fn police(mut self, available: i32) -> Self {
        self.planet.statistics.police_available = available;
        self
    }

    pub fn worker_demand(mut self, demand: i32) -> Self {
        self.planet.statistics.worker_demand = demand;
        self
    }

    pub fn constructing(mut self) -> Self {
        self.planet.statistics.constructing = true;
        self
    }

    pub fn building(mut self, building: Building) -> Self {
        self.planet.buildings.push(building);
        self
    }

    /// Adds an intact colony hub with the given building id.
    pub fn with_hub(self, id: BuildingId) -> Self {
        self.building(BuildingBuilder::new(id, HUB).build())
    }

    pub fn build(self) -> Planet {
        self.planet
    }
}

pub struct SnapshotBuilder {
    snapshot: WorldSnapshot,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self {
            snapshot: WorldSnapshot {
                money: 20_000,
                planets: Vec::new(),
            },
        }
    }

    pub fn money(mut self, money: i64) -> Self {
        self.snapshot.money = money;
        self
    }

    pub fn with_planet(mut self, planet: Planet) -> Self {
        self.snapshot.planets.push(planet);
        self
    }

    pub fn build(self) -> WorldSnapshot {
        self.snapshot
    }
}

impl Default for SnapshotBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_methods() {
        let snapshot = SnapshotBuilder::default()
            .money(500)
            .with_planet(PlanetBuilder::new(1).with_hub(1).build())
            .with_planet(PlanetBuilder::new(2).population(9000).build())
            .build();

        assert_eq!(snapshot.money, 500);
        assert_eq!(snapshot.planets.len(), 2);
        assert_eq!(snapshot.planet(1).unwrap().buildings[0].type_id, HUB);
        assert_eq!(snapshot.planet(2).unwrap().population, 9000);
        assert!(snapshot.planet(3).is_none());
    }

    #[test]
    fn test_standard_catalog_has_hub() {
        let catalog = standard_catalog();
        assert_eq!(catalog.find_kind("MainBuilding").unwrap().id, HUB);
        assert_eq!(catalog.len(), 9);
    }
}
