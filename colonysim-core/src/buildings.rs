//! Building type catalog.
//!
//! Building types are loaded once by the host and shared by every planet.
//! Each type lists the resource categories it provides; the planner's
//! selectors match buildings by these category names.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Resource category names used by the catalog.
pub mod resource {
    pub const ENERGY: &str = "energy";
    pub const FOOD: &str = "food";
    pub const HOUSE: &str = "house";
    pub const HOSPITAL: &str = "hospital";
    pub const POLICE: &str = "police";
    pub const MORALE: &str = "morale";
    pub const POPULATION_GROWTH: &str = "population-growth";
    /// Fire brigades; they also repair damaged buildings.
    pub const REPAIR: &str = "repair";
}

/// Type-safe building type identifier.
#[derive(
    Hash, Eq, PartialEq, Clone, Copy, Debug, Default, Serialize, Deserialize, PartialOrd, Ord,
)]
pub struct BuildingTypeId(pub u16);

impl std::fmt::Display for BuildingTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Static building definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BuildingType {
    pub id: BuildingTypeId,
    pub name: String,
    /// Grouping tag, e.g. `MainBuilding` for the colony hub.
    #[serde(default)]
    pub kind: String,
    /// Money needed to build it (and to raise it one upgrade level).
    pub cost: i64,
    /// Maximum number of instances per planet.
    #[serde(default)]
    pub limit: Option<u32>,
    /// Resource category -> amount provided.
    #[serde(default)]
    pub resources: BTreeMap<String, f32>,
    #[serde(default)]
    pub max_upgrade: u8,
}

impl BuildingType {
    #[inline]
    pub fn has_resource(&self, name: &str) -> bool {
        self.resources.contains_key(name)
    }

    pub fn resource(&self, name: &str) -> Option<f32> {
        self.resources.get(name).copied()
    }
}

/// All building types known to the game, in load order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct BuildingCatalog {
    types: Vec<BuildingType>,
}

impl BuildingCatalog {
    pub fn new(types: Vec<BuildingType>) -> Self {
        Self { types }
    }

    pub fn get(&self, id: BuildingTypeId) -> Option<&BuildingType> {
        self.types.iter().find(|t| t.id == id)
    }

    /// First type carrying the given kind tag.
    pub fn find_kind(&self, kind: &str) -> Option<&BuildingType> {
        self.types.iter().find(|t| t.kind == kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BuildingType> + '_ {
        self.types.iter()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> BuildingCatalog {
        BuildingCatalog::new(vec![
            BuildingType {
                id: BuildingTypeId(0),
                name: "Colony Hub".to_string(),
                kind: "MainBuilding".to_string(),
                cost: 1000,
                limit: Some(1),
                resources: BTreeMap::new(),
                max_upgrade: 0,
            },
            BuildingType {
                id: BuildingTypeId(1),
                name: "Farm".to_string(),
                kind: "Economic".to_string(),
                cost: 300,
                limit: None,
                resources: [(resource::FOOD.to_string(), 2000.0)].into_iter().collect(),
                max_upgrade: 2,
            },
        ])
    }

    #[test]
    fn test_lookup_by_id_and_kind() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(BuildingTypeId(1)).unwrap().name, "Farm");
        assert!(catalog.get(BuildingTypeId(9)).is_none());
        assert_eq!(catalog.find_kind("MainBuilding").unwrap().cost, 1000);
        assert!(catalog.find_kind("Factory").is_none());
    }

    #[test]
    fn test_resources() {
        let catalog = catalog();
        let farm = catalog.get(BuildingTypeId(1)).unwrap();
        assert!(farm.has_resource(resource::FOOD));
        assert!(!farm.has_resource(resource::HOUSE));
        assert_eq!(farm.resource(resource::FOOD), Some(2000.0));
    }

    #[test]
    fn test_catalog_is_a_json_array() {
        let json = r#"[{"id": 4, "name": "Police Station", "cost": 800,
                        "resources": {"police": 5000}}]"#;
        let catalog: BuildingCatalog = serde_json::from_str(json).unwrap();
        let station = catalog.get(BuildingTypeId(4)).unwrap();
        assert!(station.has_resource(resource::POLICE));
        assert_eq!(station.limit, None);
        assert_eq!(station.kind, "");
    }
}
