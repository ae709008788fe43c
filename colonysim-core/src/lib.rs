//! # Colony Simulation Core
//!
//! Economic planner for an AI player's colonies.
//!
//! Each planning cycle the host takes a read-only snapshot of the player's
//! planets, hands it to the planner and applies the single command it queues.
//! The planner owns no state between cycles.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ WorldSnapshot│────▶│ColonyPlanner │────▶│ ActionQueue  │
//! │ + Catalog    │     │ (check chain)│     │ (≤1 command) │
//! └──────────────┘     └──────┬───────┘     └──────────────┘
//!                             │
//!                      ┌──────▼───────┐
//!                      │BuildingEngine│
//!                      │ (placement)  │
//!                      └──────────────┘
//! ```
//!
//! ## Key Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`WorldSnapshot`] | Money and planets visible to the player this cycle |
//! | [`BuildingCatalog`] | Static building types, costs and resource categories |
//! | [`ColonyPlanner`] | Priority-ordered chain of economic checks |
//! | [`BuildingEngine`] | Picks and queues a placement or upgrade for a category |
//! | [`Command`] | Actions the host executes (repair, place, tax, ...) |
//! | [`PlannerConfig`] | Thresholds and the taxation table |

pub mod ai;
pub mod buildings;
pub mod config;
pub mod input;
pub mod snapshot;
pub mod state;
pub mod testing;

pub use ai::{BuildingEngine, CatalogEngine, Check, ColonyPlanner, Planner, VisibleWorld};
pub use buildings::{BuildingCatalog, BuildingType, BuildingTypeId};
pub use config::PlannerConfig;
pub use input::{ActionQueue, Command};
pub use snapshot::{
    load_catalog, load_config, load_snapshot, validate_catalog, validate_snapshot, LoadError,
};
pub use state::{Building, BuildingId, Planet, PlanetId, TaxLevel, WorldSnapshot};
