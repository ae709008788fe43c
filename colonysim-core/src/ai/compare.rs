//! Orderings shared by the planner checks.
//!
//! Planet orders sort ascending with the most distressed planet first.

use crate::buildings::BuildingType;
use crate::state::Planet;
use std::cmp::Ordering;

/// Compare two (availability, demand) pairs by how badly the demand is unmet.
///
/// `Less` means the first pair is worse off. A self-sufficient pair always
/// ranks above a deficient one; two self-sufficient pairs rank by surplus;
/// two deficient pairs rank by coverage ratio `available / demand`, compared
/// through 64-bit cross products so no division or overflow happens.
pub fn worst(
    first_available: i32,
    first_demand: i32,
    second_available: i32,
    second_demand: i32,
) -> Ordering {
    let first_ok = first_available >= first_demand;
    let second_ok = second_available >= second_demand;
    match (first_ok, second_ok) {
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (true, true) => {
            let first_surplus = i64::from(first_available) - i64::from(first_demand);
            let second_surplus = i64::from(second_available) - i64::from(second_demand);
            first_surplus.cmp(&second_surplus)
        }
        (false, false) => {
            let lhs = i64::from(second_demand) * i64::from(first_available);
            let rhs = i64::from(first_demand) * i64::from(second_available);
            lhs.cmp(&rhs)
        }
    }
}

/// Cheapest building type first.
pub fn cost_order(a: &BuildingType, b: &BuildingType) -> Ordering {
    a.cost.cmp(&b.cost)
}

/// Lowest morale first.
pub fn morale_order(a: &Planet, b: &Planet) -> Ordering {
    a.morale.cmp(&b.morale)
}

/// Lowest morale first, smaller population breaking ties.
pub fn morale_then_population(a: &Planet, b: &Planet) -> Ordering {
    a.morale
        .cmp(&b.morale)
        .then_with(|| a.population.cmp(&b.population))
}
