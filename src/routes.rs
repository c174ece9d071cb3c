use crate::profit::{self, LegProfit};
use crate::world::{Starport, World};
use serde::Serialize;
use std::cmp::Ordering;

/// A bilateral trade pairing: both directions of one world pair within
/// jump range.
#[derive(Debug, Clone, Serialize)]
pub struct Route {
    pub origin: String,
    pub origin_hex: String,
    pub origin_starport: Starport,
    pub destination: String,
    pub dest_hex: String,
    pub dest_starport: Starport,
    pub distance: u32,
    pub outbound: LegProfit,
    pub inbound: LegProfit,
    pub round_trip_profit: f64,
}

/// Scores every unordered world pair within `jump_range` in both directions
/// and keeps pairs where at least one direction is viable, ranked by
/// round-trip profit-per-ton descending.
pub fn find_routes(worlds: &[World], jump_range: u32, min_leg_profit: f64) -> Vec<Route> {
    let mut routes = Vec::new();

    for i in 0..worlds.len() {
        for j in (i + 1)..worlds.len() {
            let a = &worlds[i];
            let b = &worlds[j];

            let distance = a.hex.distance(b.hex);
            if distance > jump_range {
                continue;
            }

            let outbound = profit::evaluate(a, b, min_leg_profit);
            let inbound = profit::evaluate(b, a, min_leg_profit);
            if !outbound.viable && !inbound.viable {
                continue;
            }

            routes.push(Route {
                origin: a.name.clone(),
                origin_hex: a.hex.to_string(),
                origin_starport: a.starport,
                destination: b.name.clone(),
                dest_hex: b.hex.to_string(),
                dest_starport: b.starport,
                distance,
                round_trip_profit: outbound.profit_per_ton + inbound.profit_per_ton,
                outbound,
                inbound,
            });
        }
    }

    routes.sort_by(|x, y| {
        y.round_trip_profit
            .partial_cmp(&x.round_trip_profit)
            .unwrap_or(Ordering::Equal)
    });
    routes
}
