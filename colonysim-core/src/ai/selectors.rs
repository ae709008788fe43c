//! Capability selectors: which buildings count toward a resource category.
//!
//! A selector answers two questions, one for buildings already standing on a
//! planet (upgrade candidates) and one for catalog types (placement candidates).

use crate::buildings::{resource, BuildingType};
use crate::state::{Building, Planet};

pub trait BuildingSelector {
    /// Does this standing building serve the category?
    fn accept_building(&self, planet: &Planet, building: &Building, ty: &BuildingType) -> bool;

    /// May a new building of this type be placed for the category?
    fn accept_type(&self, planet: &Planet, ty: &BuildingType) -> bool;
}

/// True while the planet holds fewer than `limit` buildings of this type,
/// and fewer than the type's own per-planet limit.
pub fn within_limit(planet: &Planet, ty: &BuildingType, limit: u32) -> bool {
    let built = planet.count_of(ty.id);
    built < limit && ty.limit.map_or(true, |own| built < own)
}

/// Matches buildings providing any of the listed resource categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceSelector {
    pub resources: &'static [&'static str],
    /// Extra per-planet cap on placements.
    pub per_planet: Option<u32>,
}

impl ResourceSelector {
    pub const FOOD: Self = Self::any(&[resource::FOOD]);
    pub const HOUSE: Self = Self::any(&[resource::HOUSE]);
    pub const HOSPITAL: Self = Self::any(&[resource::HOSPITAL]);
    pub const POLICE: Self = Self::any(&[resource::POLICE]);
    pub const MORALE: Self = Self::any(&[resource::MORALE, resource::POPULATION_GROWTH]);
    pub const WORKER: Self = Self {
        resources: &[resource::MORALE, resource::POPULATION_GROWTH],
        per_planet: Some(1),
    };
    pub const FIRE_BRIGADE: Self = Self {
        resources: &[resource::REPAIR],
        per_planet: Some(1),
    };

    const fn any(resources: &'static [&'static str]) -> Self {
        Self {
            resources,
            per_planet: None,
        }
    }

    fn provides(&self, ty: &BuildingType) -> bool {
        self.resources.iter().any(|r| ty.has_resource(r))
    }
}

impl BuildingSelector for ResourceSelector {
    fn accept_building(&self, _planet: &Planet, _building: &Building, ty: &BuildingType) -> bool {
        self.provides(ty)
    }

    fn accept_type(&self, planet: &Planet, ty: &BuildingType) -> bool {
        self.provides(ty)
            && self
                .per_planet
                .map_or(true, |limit| within_limit(planet, ty, limit))
    }
}

/// Power plants: standing buildings with positive output, types with a positive
/// energy resource.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnergySelector;

impl BuildingSelector for EnergySelector {
    fn accept_building(&self, _planet: &Planet, building: &Building, _ty: &BuildingType) -> bool {
        building.energy > 0
    }

    fn accept_type(&self, _planet: &Planet, ty: &BuildingType) -> bool {
        ty.resource(resource::ENERGY).is_some_and(|e| e > 0.0)
    }
}

/// Matches by kind tag, e.g. the colony hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindSelector<'a> {
    pub kind: &'a str,
}

impl BuildingSelector for KindSelector<'_> {
    fn accept_building(&self, _planet: &Planet, _building: &Building, ty: &BuildingType) -> bool {
        ty.kind == self.kind
    }

    fn accept_type(&self, planet: &Planet, ty: &BuildingType) -> bool {
        ty.kind == self.kind && within_limit(planet, ty, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buildings::BuildingTypeId;
    use crate::testing::{
        standard_catalog, BuildingBuilder, PlanetBuilder, FIRE_STATION, HUB, POWER_PLANT, STADIUM,
    };

    #[test]
    fn test_resource_selector_matches_any_category() {
        let catalog = standard_catalog();
        let planet = PlanetBuilder::new(1).build();
        let stadium = catalog.get(STADIUM).unwrap();
        assert!(ResourceSelector::MORALE.accept_type(&planet, stadium));
        assert!(ResourceSelector::WORKER.accept_type(&planet, stadium));
        assert!(!ResourceSelector::FOOD.accept_type(&planet, stadium));
    }

    #[test]
    fn test_morale_selector_takes_growth_buildings_without_cap() {
        let mut clinic = standard_catalog().get(STADIUM).unwrap().clone();
        clinic.resources.remove(resource::MORALE);
        assert!(clinic.has_resource(resource::POPULATION_GROWTH));
        let planet = PlanetBuilder::new(1)
            .building(BuildingBuilder::new(1, STADIUM).build())
            .build();
        assert!(ResourceSelector::MORALE.accept_type(&planet, &clinic));
        // The worker selector allows one per planet.
        let stadium = standard_catalog().get(STADIUM).unwrap().clone();
        assert!(ResourceSelector::MORALE.accept_type(&planet, &stadium));
        assert!(!ResourceSelector::WORKER.accept_type(&planet, &stadium));
    }

    #[test]
    fn test_per_planet_limit() {
        let catalog = standard_catalog();
        let fire = catalog.get(FIRE_STATION).unwrap();
        let empty = PlanetBuilder::new(1).build();
        let covered = PlanetBuilder::new(2)
            .building(BuildingBuilder::new(10, FIRE_STATION).build())
            .build();
        assert!(ResourceSelector::FIRE_BRIGADE.accept_type(&empty, fire));
        assert!(!ResourceSelector::FIRE_BRIGADE.accept_type(&covered, fire));
        // Standing buildings still count for upgrades.
        assert!(ResourceSelector::FIRE_BRIGADE.accept_building(
            &covered,
            &covered.buildings[0],
            fire
        ));
    }

    #[test]
    fn test_type_limit_applies_under_selector_limit() {
        let mut catalog_type = standard_catalog().get(STADIUM).unwrap().clone();
        catalog_type.id = BuildingTypeId(99);
        catalog_type.limit = Some(0);
        let planet = PlanetBuilder::new(1).build();
        assert!(!within_limit(&planet, &catalog_type, 5));
    }

    #[test]
    fn test_energy_selector() {
        let catalog = standard_catalog();
        let planet = PlanetBuilder::new(1).build();
        let plant = catalog.get(POWER_PLANT).unwrap();
        let hub = catalog.get(HUB).unwrap();
        assert!(EnergySelector.accept_type(&planet, plant));
        assert!(!EnergySelector.accept_type(&planet, hub));

        let producing = BuildingBuilder::new(1, POWER_PLANT).energy(500).build();
        let consuming = BuildingBuilder::new(2, HUB).energy(-50).build();
        assert!(EnergySelector.accept_building(&planet, &producing, plant));
        assert!(!EnergySelector.accept_building(&planet, &consuming, hub));
    }

    #[test]
    fn test_kind_selector() {
        let catalog = standard_catalog();
        let hub = catalog.get(HUB).unwrap();
        let selector = KindSelector {
            kind: "MainBuilding",
        };
        let bare = PlanetBuilder::new(1).build();
        let settled = PlanetBuilder::new(2)
            .building(BuildingBuilder::new(1, HUB).build())
            .build();
        assert!(selector.accept_type(&bare, hub));
        assert!(!selector.accept_type(&settled, hub));
        assert!(selector.accept_building(&settled, &settled.buildings[0], hub));
    }
}
