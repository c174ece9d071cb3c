pub mod enumerate;

use crate::circuit::{self, Circuit, Leg};
use crate::config::Config;
use crate::error::TradeResult;
use crate::profit;
use crate::world::{TradeCode, World};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use self::enumerate::{orderings, Combinations};

/// Output of the candidate filter.
pub struct CandidateSelection {
    pub worlds: Vec<World>,
    pub truncated: bool,
}

/// Keeps worlds worth routing through: economically significant
/// (resource units above the floor) or tagged Ag/In/Ri/Hi. Oversized sets
/// are cut to the top-N by resource units to bound the search.
pub fn select_candidates(worlds: &[World], config: &Config) -> CandidateSelection {
    let search = &config.search;
    let mut picked: Vec<World> = worlds
        .iter()
        .filter(|w| {
            w.resource_units > search.min_resource_units
                || w.has_code(TradeCode::Ag)
                || w.has_code(TradeCode::In)
                || w.has_code(TradeCode::Ri)
                || w.has_code(TradeCode::Hi)
        })
        .cloned()
        .collect();

    let mut truncated = false;
    if picked.len() > search.candidate_cap {
        picked.sort_by(|a, b| {
            b.resource_units
                .partial_cmp(&a.resource_units)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        picked.truncate(search.candidate_cap);
        truncated = true;
        warn!(
            cap = search.candidate_cap,
            "candidate set truncated to top worlds by resource units"
        );
    }

    CandidateSelection {
        worlds: picked,
        truncated,
    }
}

/// Heuristic circuit search over a candidate world set. Enumerates
/// stop-sets per circuit length under the work budget, tries a capped
/// number of orderings per set, and keeps the best-profit valid circuit
/// per set.
pub struct CircuitFinder<'a> {
    worlds: &'a [World],
    config: &'a Config,
}

impl<'a> CircuitFinder<'a> {
    pub fn new(worlds: &'a [World], config: &'a Config) -> Self {
        Self { worlds, config }
    }

    /// Returns up to `max_circuits` circuits ranked by gross profit
    /// descending, ties broken by discovery order. An empty result is not
    /// an error; bad configuration is.
    pub fn find_circuits(&self) -> TradeResult<Vec<Circuit>> {
        self.config.validate()?;

        let selection = select_candidates(self.worlds, self.config);
        let candidates = &selection.worlds;
        info!(count = candidates.len(), "candidate worlds for circuit search");
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let search = &self.config.search;
        let max_len = search.max_stops.min(candidates.len());
        let mut kept: Vec<Circuit> = Vec::new();

        for length in search.min_stops..=max_len {
            let budget = (search.search_budget / length).max(1);
            let stop_sets: Vec<Vec<usize>> = Combinations::new(candidates.len(), length)
                .take(budget)
                .collect();
            debug!(length, trials = stop_sets.len(), "evaluating stop-sets");

            // Stop-sets are materialized in canonical order, so the indexed
            // parallel walk reproduces the sequential discovery order.
            let mut found: Vec<(usize, Circuit)> = stop_sets
                .par_iter()
                .enumerate()
                .filter_map(|(idx, set)| {
                    self.best_circuit_for(set, candidates, idx as u64)
                        .map(|c| (idx, c))
                })
                .collect();
            found.sort_by_key(|(idx, _)| *idx);
            kept.extend(found.into_iter().map(|(_, c)| c));
        }

        for c in &mut kept {
            circuit::apply_costs(c, &self.config.ship);
        }
        circuit::rank_circuits(&mut kept, search.max_circuits);
        Ok(kept)
    }

    /// Best valid ordering of one stop-set, or None if no ordering fits the
    /// jump range or the set misses the circuit-viability threshold.
    fn best_circuit_for(&self, set: &[usize], candidates: &[World], set_idx: u64) -> Option<Circuit> {
        let jump_range = self.config.ship.jump_range;
        let min_leg_profit = self.config.thresholds.min_leg_profit;

        // Per-set rng keeps the sampled shuffle independent of evaluation
        // order across threads.
        let mut rng = fastrand::Rng::with_seed(
            self.config
                .search
                .seed
                .wrapping_add(set_idx.wrapping_mul(0x9E37_79B9_7F4A_7C15)),
        );

        let mut best: Option<(f64, u32, Vec<usize>, Vec<Leg>)> = None;

        'orderings: for order in orderings(set, &mut rng) {
            let mut total_distance = 0u32;
            let mut profit_per_ton = 0.0;
            let mut legs = Vec::with_capacity(order.len());

            for i in 0..order.len() {
                let origin = &candidates[order[i]];
                let destination = &candidates[order[(i + 1) % order.len()]];

                let distance = origin.hex.distance(destination.hex);
                if distance > jump_range {
                    continue 'orderings;
                }
                total_distance += distance;

                let leg = profit::evaluate(origin, destination, min_leg_profit);
                if leg.viable {
                    profit_per_ton += leg.profit_per_ton;
                }
                legs.push(Leg {
                    from: origin.name.clone(),
                    to: destination.name.clone(),
                    distance,
                    profit_per_ton: leg.profit_per_ton,
                    goods: leg.goods,
                    viable: leg.viable,
                });
            }

            let improved = best
                .as_ref()
                .map(|(p, _, _, _)| profit_per_ton > *p)
                .unwrap_or(true);
            if improved {
                best = Some((profit_per_ton, total_distance, order, legs));
            }
        }

        let (profit_per_ton, total_distance, order, legs) = best?;
        if profit_per_ton <= self.config.thresholds.min_circuit_profit {
            return None;
        }

        let stops: Vec<&World> = order.iter().map(|&i| &candidates[i]).collect();
        Some(Circuit {
            worlds: stops.iter().map(|w| w.name.clone()).collect(),
            hexes: stops.iter().map(|w| w.hex.to_string()).collect(),
            starports: stops.iter().map(|w| w.starport).collect(),
            sectors: stops.iter().map(|w| w.sector.clone()).collect(),
            legs,
            total_distance,
            profit_per_ton,
            // Filled in by apply_costs once the ship economics are known.
            gross_profit: 0.0,
            fuel_cost: 0.0,
            maintenance_cost: 0.0,
            net_profit: 0.0,
            efficiency: 0.0,
        })
    }
}
