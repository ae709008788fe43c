//! Colony planner.
//!
//! Keeps the AI's colonies healthy: makes sure every planet has a colony hub,
//! tunes taxes to morale, repairs damage and builds whatever the worst-off
//! planet lacks most urgently. At most one command is queued per cycle.
//!
//! Checks run in a fixed priority order and the first one that handles the
//! cycle ends it:
//!
//! | # | check | handles when |
//! |---|-------|--------------|
//! | 1 | [`Check::ColonyHub`] | a planet lacks a hub, or a hub is damaged |
//! | 2 | [`Check::Taxation`] | a planet's tax is off its target level |
//! | 3 | [`Check::BuildingHealth`] | repairs are pending, started or stopped |
//! | 4 | [`Check::Power`] | energy demand exceeds supply |
//! | 5 | [`Check::Worker`] | buildings need more workers than live there |
//! | 6 | [`Check::Morale`] | morale stayed very low |
//! | 7 | [`Check::LivingSpace`] | population exceeds housing |
//! | 8 | [`Check::Food`] | population exceeds food |
//! | 9 | [`Check::Hospital`] | hospitals are short beyond tolerance |
//! | 10 | [`Check::Police`] | police are short beyond tolerance |
//! | 11 | [`Check::FireSafety`] | a large colony lacks fire brigades |

use super::compare::{cost_order, morale_order, morale_then_population, worst};
use super::engine::{BuildingEngine, CategoryPolicy, PlacementPolicy};
use super::money::raise_money;
use super::selectors::{BuildingSelector, EnergySelector, KindSelector, ResourceSelector};
use super::taxation::tax_change;
use super::{Planner, VisibleWorld};
use crate::config::PlannerConfig;
use crate::input::{ActionQueue, Command};
use crate::state::{Building, Planet};
use tracing::instrument;

/// One step of the planner's check chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Check {
    ColonyHub,
    Taxation,
    BuildingHealth,
    Power,
    Worker,
    Morale,
    LivingSpace,
    Food,
    Hospital,
    Police,
    FireSafety,
}

impl Check {
    /// Evaluation order, highest priority first.
    pub const CHAIN: [Check; 11] = [
        Check::ColonyHub,
        Check::Taxation,
        Check::BuildingHealth,
        Check::Power,
        Check::Worker,
        Check::Morale,
        Check::LivingSpace,
        Check::Food,
        Check::Hospital,
        Check::Police,
        Check::FireSafety,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Check::ColonyHub => "colony_hub",
            Check::Taxation => "taxation",
            Check::BuildingHealth => "building_health",
            Check::Power => "power",
            Check::Worker => "worker",
            Check::Morale => "morale",
            Check::LivingSpace => "living_space",
            Check::Food => "food",
            Check::Hospital => "hospital",
            Check::Police => "police",
            Check::FireSafety => "fire_safety",
        }
    }
}

impl std::fmt::Display for Check {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Economic policy engine of an AI player.
#[derive(Debug, Clone, Default)]
pub struct ColonyPlanner {
    config: PlannerConfig,
}

impl ColonyPlanner {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Run the check chain and report which check handled the cycle.
    ///
    /// A handled cycle usually queued one command. The building health check may
    /// handle a cycle without queuing anything to hold off further spending.
    #[instrument(skip_all, name = "colony_plan", fields(planets = world.snapshot.planets.len()))]
    pub fn run_chain(
        &self,
        world: &VisibleWorld<'_>,
        engine: &dyn BuildingEngine,
        queue: &mut ActionQueue,
    ) -> Option<Check> {
        for check in Check::CHAIN {
            let queued_before = queue.len();
            if self.run_check(check, world, engine, queue) {
                match queue.last().filter(|_| queue.len() > queued_before) {
                    Some(cmd) => log::debug!("{} check handled the cycle: {:?}", check, cmd),
                    None => log::debug!("{} check stalled the cycle", check),
                }
                return Some(check);
            }
            log::trace!("{} check passed", check);
        }
        None
    }

    /// Run one cycle into a fresh queue.
    pub fn run_cycle(&self, world: &VisibleWorld<'_>, engine: &dyn BuildingEngine) -> ActionQueue {
        let mut queue = ActionQueue::new();
        self.run_chain(world, engine, &mut queue);
        queue
    }

    /// Evaluate a single check. Returns true if it handled the cycle.
    pub fn run_check(
        &self,
        check: Check,
        world: &VisibleWorld<'_>,
        engine: &dyn BuildingEngine,
        queue: &mut ActionQueue,
    ) -> bool {
        match check {
            Check::ColonyHub => self.check_colony_hub(world, queue),
            Check::Taxation => self.check_taxation(world, queue),
            Check::BuildingHealth => self.check_building_health(world, queue),
            Check::Morale => self.check_morale(world, engine, queue),
            category => match self.category_policy(category) {
                Some(policy) => engine.plan_category(world, queue, &policy),
                None => false,
            },
        }
    }

    #[instrument(skip_all, name = "check_colony_hub")]
    fn check_colony_hub(&self, world: &VisibleWorld<'_>, queue: &mut ActionQueue) -> bool {
        let hub = KindSelector {
            kind: &self.config.hub_kind,
        };
        let is_hub = |planet: &Planet, building: &Building| {
            world
                .building_type(building)
                .is_some_and(|ty| hub.accept_building(planet, building, ty))
        };

        if let Some(planet) = world
            .planets()
            .find(|&p| !p.buildings.iter().any(|b| is_hub(p, b)))
        {
            let Some(hub_type) = world.catalog.find_kind(&self.config.hub_kind) else {
                log::warn!(
                    "Planet {} has no colony hub and the catalog has no {} type",
                    planet.id,
                    self.config.hub_kind
                );
                return false;
            };
            if world.money() < hub_type.cost {
                if !raise_money(world, queue, planet) {
                    // Nothing left to sell: wait for income.
                    queue.pass();
                }
                return true;
            }
            queue.push(Command::PlaceBuilding {
                planet: planet.id,
                building_type: hub_type.id,
            });
            return true;
        }

        for planet in world.planets() {
            if let Some(building) = planet
                .buildings
                .iter()
                .find(|&b| is_hub(planet, b) && b.is_damaged() && !b.repairing)
            {
                queue.push(Command::RepairBuilding {
                    planet: planet.id,
                    building: building.id,
                    repair: true,
                });
                return true;
            }
        }
        false
    }

    #[instrument(skip_all, name = "check_taxation")]
    fn check_taxation(&self, world: &VisibleWorld<'_>, queue: &mut ActionQueue) -> bool {
        for planet in world.planets() {
            if let Some(tax) = tax_change(&self.config, planet) {
                log::debug!(
                    "Planet {} (morale {}, population {}): tax {} -> {}",
                    planet.id,
                    planet.morale,
                    planet.population,
                    planet.tax,
                    tax
                );
                queue.push(Command::SetTaxation {
                    planet: planet.id,
                    tax,
                });
                return true;
            }
        }
        false
    }

    #[instrument(skip_all, name = "check_building_health")]
    fn check_building_health(&self, world: &VisibleWorld<'_>, queue: &mut ActionQueue) -> bool {
        if world.money() < self.config.repair_money_threshold {
            // Short on money: construction takes precedence over repairs.
            let mut any_construction = false;
            for planet in world.planets().filter(|p| p.statistics.constructing) {
                any_construction = true;
                if let Some(building) = planet.buildings.iter().find(|b| b.repairing) {
                    queue.push(Command::RepairBuilding {
                        planet: planet.id,
                        building: building.id,
                        repair: false,
                    });
                    return true;
                }
            }
            if any_construction {
                return true;
            }
        }

        for planet in world.planets() {
            // One repair at a time.
            if planet.any_repairing() {
                return true;
            }
            let mut cheapest: Option<(&Building, i64)> = None;
            for building in planet
                .buildings
                .iter()
                .filter(|b| b.is_damaged() && !b.repairing)
            {
                let Some(cost) = world.cost_of(building) else {
                    continue;
                };
                if cheapest.map_or(true, |(_, best)| cost < best) {
                    cheapest = Some((building, cost));
                }
            }
            if let Some((building, _)) = cheapest {
                queue.push(Command::RepairBuilding {
                    planet: planet.id,
                    building: building.id,
                    repair: true,
                });
                return true;
            }
        }
        false
    }

    #[instrument(skip_all, name = "check_morale")]
    fn check_morale(
        &self,
        world: &VisibleWorld<'_>,
        engine: &dyn BuildingEngine,
        queue: &mut ActionQueue,
    ) -> bool {
        let mut planets: Vec<&Planet> = world.planets().collect();
        planets.sort_by(|a, b| morale_then_population(a, b));

        let placement = PlacementPolicy {
            selector: &ResourceSelector::MORALE,
            cost_order,
            allow_upgrade: true,
        };
        planets
            .into_iter()
            .filter(|p| {
                p.morale < self.config.morale_boost_below
                    && p.last_morale < self.config.last_morale_boost_below
                    && !p.statistics.constructing
            })
            .any(|planet| engine.manage_buildings(world, queue, planet, &placement))
    }

    /// Shortage rules of the checks delegated to the building engine.
    pub fn category_policy(&self, check: Check) -> Option<CategoryPolicy<'_>> {
        let slack = self.config.shortage_slack;
        let fire_floor = self.config.fire_population_floor;
        let policy = match check {
            Check::Power => category(
                |p| p.statistics.energy_available < p.statistics.energy_demand,
                |a, b| {
                    worst(
                        a.statistics.energy_available,
                        a.statistics.energy_demand,
                        b.statistics.energy_available,
                        b.statistics.energy_demand,
                    )
                },
                &EnergySelector,
            ),
            Check::Worker => category(
                |p| p.population < p.statistics.worker_demand,
                morale_order,
                &ResourceSelector::WORKER,
            ),
            Check::LivingSpace => category(
                |p| p.population > p.statistics.house_available,
                |a, b| by_population(a, b, |p| p.statistics.house_available),
                &ResourceSelector::HOUSE,
            ),
            Check::Food => category(
                |p| p.population > p.statistics.food_available,
                |a, b| by_population(a, b, |p| p.statistics.food_available),
                &ResourceSelector::FOOD,
            ),
            Check::Hospital => category(
                move |p| short_with_slack(p.population, p.statistics.hospital_available, slack),
                |a, b| by_population(a, b, |p| p.statistics.hospital_available),
                &ResourceSelector::HOSPITAL,
            ),
            Check::Police => category(
                move |p| short_with_slack(p.population, p.statistics.police_available, slack),
                |a, b| by_population(a, b, |p| p.statistics.police_available),
                &ResourceSelector::POLICE,
            ),
            Check::FireSafety => category(
                move |p| {
                    p.population >= fire_floor
                        && short_with_slack(p.population, p.statistics.worker_demand, slack)
                },
                move |a, b| worst(fire_floor, a.population, fire_floor, b.population),
                &ResourceSelector::FIRE_BRIGADE,
            ),
            Check::ColonyHub | Check::Taxation | Check::BuildingHealth | Check::Morale => {
                return None
            }
        };
        Some(policy)
    }
}

impl Planner for ColonyPlanner {
    fn name(&self) -> &'static str {
        "ColonyPlanner"
    }

    fn plan(
        &self,
        world: &VisibleWorld<'_>,
        engine: &dyn BuildingEngine,
        queue: &mut ActionQueue,
    ) -> bool {
        self.run_chain(world, engine, queue).is_some()
    }
}

fn category<'a>(
    shortage: impl Fn(&Planet) -> bool + 'a,
    planet_order: impl Fn(&Planet, &Planet) -> std::cmp::Ordering + 'a,
    selector: &'a dyn BuildingSelector,
) -> CategoryPolicy<'a> {
    CategoryPolicy {
        shortage: Box::new(shortage),
        planet_order: Box::new(planet_order),
        placement: PlacementPolicy {
            selector,
            cost_order,
            allow_upgrade: true,
        },
    }
}

/// Rank planets by how well `available` covers their population.
fn by_population(a: &Planet, b: &Planet, available: impl Fn(&Planet) -> i32) -> std::cmp::Ordering {
    worst(available(a), a.population, available(b), b.population)
}

/// `demand > available * slack`: small shortfalls are tolerated.
fn short_with_slack(demand: i32, available: i32, slack: f64) -> bool {
    f64::from(demand) > f64::from(available) * slack
}
