//! Loading planner inputs from JSON files.
//!
//! The host normally builds snapshots in memory; files are used by the
//! `colonysim` driver and for replaying recorded cycles.

use crate::buildings::{BuildingCatalog, BuildingTypeId};
use crate::config::PlannerConfig;
use crate::state::{BuildingId, PlanetId, WorldSnapshot};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("catalog has no building type of kind {0:?}")]
    MissingHubType(String),
    #[error("building type {0} is defined more than once")]
    DuplicateBuildingType(BuildingTypeId),
    #[error("planet {0} appears more than once in the snapshot")]
    DuplicatePlanet(PlanetId),
    #[error("building #{building} on planet {planet} has unknown type {type_id}")]
    UnknownBuildingType {
        planet: PlanetId,
        building: BuildingId,
        type_id: BuildingTypeId,
    },
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_snapshot(path: &Path) -> Result<WorldSnapshot, LoadError> {
    let snapshot: WorldSnapshot = read_json(path)?;
    log::info!(
        "Loaded snapshot with {} planets, treasury {}",
        snapshot.planets.len(),
        snapshot.money
    );
    Ok(snapshot)
}

pub fn load_catalog(path: &Path) -> Result<BuildingCatalog, LoadError> {
    let catalog: BuildingCatalog = read_json(path)?;
    log::info!("Loaded {} building types", catalog.len());
    Ok(catalog)
}

pub fn load_config(path: &Path) -> Result<PlannerConfig, LoadError> {
    read_json(path)
}

/// Reject catalogs with clashing ids or without a colony hub type.
pub fn validate_catalog(catalog: &BuildingCatalog, hub_kind: &str) -> Result<(), LoadError> {
    let mut seen = HashSet::new();
    for ty in catalog.iter() {
        if !seen.insert(ty.id) {
            return Err(LoadError::DuplicateBuildingType(ty.id));
        }
    }
    if catalog.find_kind(hub_kind).is_none() {
        return Err(LoadError::MissingHubType(hub_kind.to_string()));
    }
    Ok(())
}

/// Reject snapshots the planner cannot reason about consistently.
pub fn validate_snapshot(
    snapshot: &WorldSnapshot,
    catalog: &BuildingCatalog,
) -> Result<(), LoadError> {
    let mut seen = HashSet::new();
    for planet in &snapshot.planets {
        if !seen.insert(planet.id) {
            return Err(LoadError::DuplicatePlanet(planet.id));
        }
        for building in &planet.buildings {
            if catalog.get(building.type_id).is_none() {
                return Err(LoadError::UnknownBuildingType {
                    planet: planet.id,
                    building: building.id,
                    type_id: building.type_id,
                });
            }
        }
    }
    Ok(())
}
