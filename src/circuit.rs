use crate::config::ShipParams;
use crate::goods::Commodity;
use crate::world::Starport;
use serde::Serialize;
use std::cmp::Ordering;

/// One directed hop inside a circuit. Non-viable legs are still flown
/// (their distance counts) but carry no profit.
#[derive(Debug, Clone, Serialize)]
pub struct Leg {
    pub from: String,
    pub to: String,
    pub distance: u32,
    pub profit_per_ton: f64,
    pub goods: Vec<Commodity>,
    pub viable: bool,
}

/// A closed trade loop, including the wraparound leg back to the first stop.
#[derive(Debug, Clone, Serialize)]
pub struct Circuit {
    pub worlds: Vec<String>,
    pub hexes: Vec<String>,
    pub starports: Vec<Starport>,
    pub sectors: Vec<String>,
    pub legs: Vec<Leg>,
    pub total_distance: u32,
    pub profit_per_ton: f64,
    pub gross_profit: f64,
    pub fuel_cost: f64,
    pub maintenance_cost: f64,
    pub net_profit: f64,
    pub efficiency: f64,
}

impl Circuit {
    pub fn stops(&self) -> usize {
        self.worlds.len()
    }
}

/// Applies ship economics to a circuit's raw per-ton profit. One jump per
/// stop, since the loop closes on itself.
pub fn apply_costs(circuit: &mut Circuit, ship: &ShipParams) {
    circuit.gross_profit = circuit.profit_per_ton * ship.cargo_tons as f64;
    circuit.fuel_cost = circuit.stops() as f64 * ship.fuel_per_jump;
    circuit.maintenance_cost = ship.maintenance;
    circuit.net_profit = circuit.gross_profit - circuit.fuel_cost - circuit.maintenance_cost;
    circuit.efficiency = if circuit.total_distance > 0 {
        circuit.profit_per_ton / circuit.total_distance as f64
    } else {
        0.0
    };
}

/// Ranks by gross profit descending and truncates. Gross, not net, is the
/// reference ordering; net is reported alongside for decision-making.
/// The sort is stable, so ties keep discovery order.
pub fn rank_circuits(circuits: &mut Vec<Circuit>, cap: usize) {
    circuits.sort_by(|a, b| {
        b.gross_profit
            .partial_cmp(&a.gross_profit)
            .unwrap_or(Ordering::Equal)
    });
    circuits.truncate(cap);
}
