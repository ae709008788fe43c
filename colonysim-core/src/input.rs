use crate::buildings::BuildingTypeId;
use crate::state::{BuildingId, PlanetId, TaxLevel};
use serde::{Deserialize, Serialize};

/// A deferred order for the command executor.
///
/// The planner only decides; applying the order to the world is the
/// executor's job.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Start (`repair: true`) or stop repairing a building.
    RepairBuilding {
        planet: PlanetId,
        building: BuildingId,
        repair: bool,
    },
    PlaceBuilding {
        planet: PlanetId,
        building_type: BuildingTypeId,
    },
    UpgradeBuilding {
        planet: PlanetId,
        building: BuildingId,
        level: u8,
    },
    DemolishBuilding {
        planet: PlanetId,
        building: BuildingId,
    },
    SetTaxation {
        planet: PlanetId,
        tax: TaxLevel,
    },
    /// Deliberately do nothing this cycle.
    Pass,
}

/// Commands queued during one planning cycle.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ActionQueue {
    commands: Vec<Command>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cmd: Command) {
        log::trace!("queued {:?}", cmd);
        self.commands.push(cmd);
    }

    /// Queue the no-op that makes the player wait a cycle.
    pub fn pass(&mut self) {
        self.push(Command::Pass);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Command> + '_ {
        self.commands.iter()
    }

    pub fn last(&self) -> Option<&Command> {
        self.commands.last()
    }

    pub fn into_commands(self) -> Vec<Command> {
        self.commands
    }
}
