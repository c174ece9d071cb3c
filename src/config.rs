use crate::error::{TradeError, TradeResult};
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct Config {
    #[command(flatten)]
    pub ship: ShipParams,
    #[command(flatten)]
    pub search: SearchParams,
    #[command(flatten)]
    pub thresholds: ProfitThresholds,
}

#[derive(Args, Debug, Clone)]
pub struct ShipParams {
    /// Maximum per-leg distance in parsecs.
    #[arg(short = 'j', long, default_value_t = 2)]
    pub jump_range: u32,

    /// Cargo capacity in tons.
    #[arg(short = 'c', long, default_value_t = 64)]
    pub cargo_tons: u32,

    /// Fuel cost in credits per jump.
    #[arg(long, default_value_t = 1000.0)]
    pub fuel_per_jump: f64,

    /// Flat maintenance cost in credits per completed circuit.
    #[arg(long, default_value_t = 18_500.0)]
    pub maintenance: f64,
}

#[derive(Args, Debug, Clone)]
pub struct SearchParams {
    #[arg(long, default_value_t = 3)]
    pub min_stops: usize,

    #[arg(long, default_value_t = 6)]
    pub max_stops: usize,

    /// How many ranked circuits to keep.
    #[arg(short = 'n', long, default_value_t = 10)]
    pub max_circuits: usize,

    /// Total combination work budget. Each circuit length L gets
    /// search_budget / L stop-set trials.
    #[arg(long, default_value_t = 5000)]
    pub search_budget: usize,

    /// Hard cap on candidate worlds entering the search; excess is cut to
    /// the top worlds by resource units.
    #[arg(long, default_value_t = 200)]
    pub candidate_cap: usize,

    /// Resource-unit floor for the candidate filter. Worlds below it still
    /// qualify when tagged Ag/In/Ri/Hi.
    #[arg(long, default_value_t = 100.0)]
    pub min_resource_units: f64,

    /// Seed for the sampled ordering shuffle on long circuits.
    #[arg(long, default_value_t = 1105)]
    pub seed: u64,
}

#[derive(Args, Debug, Clone)]
pub struct ProfitThresholds {
    /// Minimum Cr/ton for a leg to count toward a circuit. 400 is the
    /// relaxed multi-sector figure; single-sector analysis uses 500.
    #[arg(long, default_value_t = 400.0)]
    pub min_leg_profit: f64,

    /// Minimum total Cr/ton for a circuit to be retained. 100 is the
    /// relaxed multi-sector figure; single-sector analysis uses 2000.
    #[arg(long, default_value_t = 100.0)]
    pub min_circuit_profit: f64,
}

impl Default for ShipParams {
    fn default() -> Self {
        Self {
            jump_range: 2,
            cargo_tons: 64,
            fuel_per_jump: 1000.0,
            maintenance: 18_500.0,
        }
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            min_stops: 3,
            max_stops: 6,
            max_circuits: 10,
            search_budget: 5000,
            candidate_cap: 200,
            min_resource_units: 100.0,
            seed: 1105,
        }
    }
}

impl Default for ProfitThresholds {
    fn default() -> Self {
        Self {
            min_leg_profit: 400.0,
            min_circuit_profit: 100.0,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ship: ShipParams::default(),
            search: SearchParams::default(),
            thresholds: ProfitThresholds::default(),
        }
    }
}

impl Config {
    /// Rejects unusable parameter combinations before any search starts.
    /// A failure here is distinct from "no circuits found".
    pub fn validate(&self) -> TradeResult<()> {
        let fail = |msg: String| Err(TradeError::Config(msg));

        if self.ship.jump_range < 1 {
            return fail("jump_range must be at least 1 parsec".into());
        }
        if self.ship.cargo_tons < 1 {
            return fail("cargo_tons must be at least 1".into());
        }
        if self.ship.fuel_per_jump < 0.0 || self.ship.maintenance < 0.0 {
            return fail("operating costs cannot be negative".into());
        }
        if self.search.min_stops < 2 {
            return fail("min_stops must be at least 2".into());
        }
        if self.search.min_stops > self.search.max_stops {
            return fail(format!(
                "min_stops ({}) exceeds max_stops ({})",
                self.search.min_stops, self.search.max_stops
            ));
        }
        if self.search.max_circuits < 1 {
            return fail("max_circuits must be at least 1".into());
        }
        if self.search.search_budget < 1 {
            return fail("search_budget must be at least 1".into());
        }
        if self.search.candidate_cap < 1 {
            return fail("candidate_cap must be at least 1".into());
        }
        if self.thresholds.min_leg_profit < 0.0 || self.thresholds.min_circuit_profit < 0.0 {
            return fail("profit thresholds cannot be negative".into());
        }
        Ok(())
    }
}
