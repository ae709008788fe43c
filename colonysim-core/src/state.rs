use crate::buildings::BuildingTypeId;
use serde::{Deserialize, Serialize};

pub type PlanetId = u32;
pub type BuildingId = u32;

/// Taxation policy of a planet, ordered from no tax to the harshest level.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaxLevel {
    #[default]
    None,
    VeryLow,
    Low,
    Moderate,
    AboveModerate,
    High,
    VeryHigh,
    Oppressive,
    Exploiter,
    Slavery,
}

impl TaxLevel {
    pub const ALL: [TaxLevel; 10] = [
        TaxLevel::None,
        TaxLevel::VeryLow,
        TaxLevel::Low,
        TaxLevel::Moderate,
        TaxLevel::AboveModerate,
        TaxLevel::High,
        TaxLevel::VeryHigh,
        TaxLevel::Oppressive,
        TaxLevel::Exploiter,
        TaxLevel::Slavery,
    ];
}

impl std::fmt::Display for TaxLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TaxLevel::None => "none",
            TaxLevel::VeryLow => "very low",
            TaxLevel::Low => "low",
            TaxLevel::Moderate => "moderate",
            TaxLevel::AboveModerate => "above moderate",
            TaxLevel::High => "high",
            TaxLevel::VeryHigh => "very high",
            TaxLevel::Oppressive => "oppressive",
            TaxLevel::Exploiter => "exploiter",
            TaxLevel::Slavery => "slavery",
        };
        f.write_str(name)
    }
}

/// Health bucket of a building, derived from its hitpoint ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DamageState {
    Intact,
    Damaged,
    /// Below half of the maximum hitpoints.
    SeverelyDamaged,
}

/// A building instance standing on a planet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Building {
    pub id: BuildingId,
    pub type_id: BuildingTypeId,
    pub hitpoints: i32,
    pub max_hitpoints: i32,
    #[serde(default)]
    pub repairing: bool,
    /// Net energy output; negative values are consumption.
    #[serde(default)]
    pub energy: i32,
    #[serde(default)]
    pub upgrade_level: u8,
}

impl Building {
    pub fn damage_state(&self) -> DamageState {
        if self.hitpoints.saturating_mul(2) < self.max_hitpoints {
            DamageState::SeverelyDamaged
        } else if self.hitpoints < self.max_hitpoints {
            DamageState::Damaged
        } else {
            DamageState::Intact
        }
    }

    #[inline]
    pub fn is_damaged(&self) -> bool {
        self.damage_state() != DamageState::Intact
    }

    #[inline]
    pub fn is_severely_damaged(&self) -> bool {
        self.damage_state() == DamageState::SeverelyDamaged
    }
}

/// Per-planet economy figures computed by the simulation for the current tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PlanetStatistics {
    pub energy_available: i32,
    pub energy_demand: i32,
    pub food_available: i32,
    pub house_available: i32,
    pub hospital_available: i32,
    pub police_available: i32,
    /// Population needed to staff every building.
    pub worker_demand: i32,
    /// A building is currently being constructed.
    pub constructing: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Planet {
    pub id: PlanetId,
    #[serde(default)]
    pub name: String,
    pub population: i32,
    /// 0-100
    pub morale: i32,
    /// Morale at the previous evaluation.
    pub last_morale: i32,
    #[serde(default)]
    pub tax: TaxLevel,
    #[serde(default)]
    pub statistics: PlanetStatistics,
    #[serde(default)]
    pub buildings: Vec<Building>,
}

impl Planet {
    /// Number of buildings of the given type standing on this planet.
    pub fn count_of(&self, type_id: BuildingTypeId) -> u32 {
        self.buildings
            .iter()
            .filter(|b| b.type_id == type_id)
            .count() as u32
    }

    pub fn any_repairing(&self) -> bool {
        self.buildings.iter().any(|b| b.repairing)
    }
}

/// Read-only view of everything one AI player owns, taken once per planning cycle.
///
/// Planet order is significant: checks walk it front to back and the first
/// eligible planet wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WorldSnapshot {
    /// Treasury of the player.
    pub money: i64,
    pub planets: Vec<Planet>,
}

impl WorldSnapshot {
    pub fn planet(&self, id: PlanetId) -> Option<&Planet> {
        self.planets.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn building(hitpoints: i32, max_hitpoints: i32) -> Building {
        Building {
            id: 1,
            type_id: BuildingTypeId(0),
            hitpoints,
            max_hitpoints,
            repairing: false,
            energy: 0,
            upgrade_level: 0,
        }
    }

    #[test]
    fn test_damage_thresholds() {
        assert_eq!(building(100, 100).damage_state(), DamageState::Intact);
        assert_eq!(building(99, 100).damage_state(), DamageState::Damaged);
        assert_eq!(building(50, 100).damage_state(), DamageState::Damaged);
        assert_eq!(building(49, 100).damage_state(), DamageState::SeverelyDamaged);
        assert!(building(49, 100).is_damaged());
        assert!(!building(50, 100).is_severely_damaged());
    }

    #[test]
    fn test_tax_levels_are_ordered() {
        for pair in TaxLevel::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_tax_level_serde_names() {
        let json = serde_json::to_string(&TaxLevel::AboveModerate).unwrap();
        assert_eq!(json, "\"ABOVE_MODERATE\"");
        let level: TaxLevel = serde_json::from_str("\"VERY_HIGH\"").unwrap();
        assert_eq!(level, TaxLevel::VeryHigh);
    }

    #[test]
    fn test_count_of_type() {
        let mut planet = Planet {
            id: 1,
            name: "Achilles".to_string(),
            population: 5000,
            morale: 50,
            last_morale: 50,
            tax: TaxLevel::Moderate,
            statistics: PlanetStatistics::default(),
            buildings: vec![building(10, 10), building(10, 10)],
        };
        planet.buildings[1].type_id = BuildingTypeId(3);
        assert_eq!(planet.count_of(BuildingTypeId(0)), 1);
        assert_eq!(planet.count_of(BuildingTypeId(3)), 1);
        assert_eq!(planet.count_of(BuildingTypeId(7)), 0);
    }
}
