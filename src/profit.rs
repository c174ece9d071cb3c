use crate::goods::Commodity;
use crate::world::{TradeCode, World};
use serde::Serialize;

/// Base value of one ton of matched cargo, in credits, before multipliers.
pub const BASE_PROFIT: f64 = 1000.0;

/// Special origin/destination pairings. Ordered: the first matching pair is
/// the only one applied.
pub const PAIR_BONUSES: [(TradeCode, TradeCode, f64); 6] = [
    (TradeCode::Ag, TradeCode::Hi, 1.5),
    (TradeCode::In, TradeCode::Po, 1.4),
    (TradeCode::Ri, TradeCode::Hi, 1.6),
    (TradeCode::De, TradeCode::Ag, 1.3),
    (TradeCode::Ic, TradeCode::De, 1.4),
    (TradeCode::As, TradeCode::In, 1.3),
];

/// Scored result for one directed leg.
#[derive(Debug, Clone, Serialize)]
pub struct LegProfit {
    pub profit_per_ton: f64,
    pub goods: Vec<Commodity>,
    pub viable: bool,
    pub distance: u32,
}

/// Scores a directed origin -> destination leg. Total over any pair of
/// worlds: no goods match means a non-viable zero-profit leg, never an
/// error.
///
/// profit/ton = 1000 * origin port bonus * destination port bonus
///            * min(2, dest pop exponent / 6) * min(2, dest RU / 500)
///            * max(0.5, 1 - distance / 10)   [* one pair bonus]
pub fn evaluate(origin: &World, destination: &World, min_leg_profit: f64) -> LegProfit {
    let distance = origin.hex.distance(destination.hex);

    let goods: Vec<Commodity> = origin
        .goods()
        .exports
        .intersection(&destination.goods().imports)
        .copied()
        .collect();

    if goods.is_empty() {
        return LegProfit {
            profit_per_ton: 0.0,
            goods,
            viable: false,
            distance,
        };
    }

    let pop_factor = (destination.population_exp as f64 / 6.0).min(2.0);
    let economic_factor = (destination.resource_units / 500.0).min(2.0);
    let distance_penalty = (1.0 - distance as f64 * 0.1).max(0.5);

    let mut profit_per_ton = BASE_PROFIT
        * origin.starport.bonus()
        * destination.starport.bonus()
        * pop_factor
        * economic_factor
        * distance_penalty;

    for (o_code, d_code, bonus) in PAIR_BONUSES {
        if origin.has_code(o_code) && destination.has_code(d_code) {
            profit_per_ton *= bonus;
            break;
        }
    }

    LegProfit {
        viable: profit_per_ton > min_leg_profit,
        profit_per_ton,
        goods,
        distance,
    }
}
