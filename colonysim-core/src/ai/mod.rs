//! AI decision-making subsystem
//!
//! This module defines the [`Planner`] trait and the [`ColonyPlanner`], the
//! economic policy engine of an AI player.
//!
//! # Planning cycle
//!
//! Once per cycle the host builds a [`WorldSnapshot`] of everything the AI
//! owns and hands it to a planner together with the building catalog. The
//! planner walks its checks in a fixed priority order and queues at most one
//! [`Command`](crate::input::Command) into an [`ActionQueue`]. Nothing in the
//! snapshot is mutated; the host applies the queued command afterwards.
//!
//! ```ignore
//! let world = VisibleWorld::new(&snapshot, &catalog);
//! let queue = planner.run_cycle(&world, &CatalogEngine);
//! for cmd in queue.into_commands() {
//!     executor.apply(cmd);
//! }
//! ```
//!
//! # Determinism
//!
//! Planners must be deterministic given the same snapshot. Planets are walked
//! in snapshot order and every sort is stable, so equal keys keep that order.

pub mod colony;
pub mod compare;
pub mod engine;
pub mod money;
pub mod selectors;
pub mod taxation;

pub use colony::{Check, ColonyPlanner};
pub use engine::{BuildingEngine, CatalogEngine, CategoryPolicy, PlacementPolicy};
pub use selectors::BuildingSelector;

use crate::buildings::{BuildingCatalog, BuildingType};
use crate::input::ActionQueue;
use crate::state::{Building, Planet, WorldSnapshot};

/// What a planner can see during one cycle: the player's planets and the catalog.
#[derive(Debug, Clone, Copy)]
pub struct VisibleWorld<'a> {
    pub snapshot: &'a WorldSnapshot,
    pub catalog: &'a BuildingCatalog,
}

impl<'a> VisibleWorld<'a> {
    pub fn new(snapshot: &'a WorldSnapshot, catalog: &'a BuildingCatalog) -> Self {
        Self { snapshot, catalog }
    }

    #[inline]
    pub fn money(&self) -> i64 {
        self.snapshot.money
    }

    pub fn planets(&self) -> impl Iterator<Item = &'a Planet> + 'a {
        self.snapshot.planets.iter()
    }

    /// Catalog entry of a standing building.
    pub fn building_type(&self, building: &Building) -> Option<&'a BuildingType> {
        self.catalog.get(building.type_id)
    }

    /// Catalog cost of a standing building, if its type is known.
    pub fn cost_of(&self, building: &Building) -> Option<i64> {
        self.building_type(building).map(|t| t.cost)
    }
}

/// AI planning trait.
///
/// Implementations inspect the visible world and queue what they decide.
pub trait Planner: Send + Sync {
    fn name(&self) -> &'static str;

    /// Run one planning cycle.
    ///
    /// Returns true if the cycle was handled, whether or not a command was queued.
    fn plan(
        &self,
        world: &VisibleWorld<'_>,
        engine: &dyn BuildingEngine,
        queue: &mut ActionQueue,
    ) -> bool;
}
