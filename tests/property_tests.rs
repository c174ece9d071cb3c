use freetrader::goods::classify;
use freetrader::hex::HexCoord;
use freetrader::profit;
use freetrader::world::{Starport, TradeCode, World};
use proptest::prelude::*;
use std::collections::BTreeSet;

// --- STRATEGIES ---

fn arb_code() -> impl Strategy<Value = TradeCode> {
    prop::sample::select(vec![
        TradeCode::Ag,
        TradeCode::In,
        TradeCode::Ri,
        TradeCode::Hi,
        TradeCode::Po,
        TradeCode::De,
        TradeCode::Ic,
        TradeCode::Na,
        TradeCode::As,
    ])
}

fn arb_starport() -> impl Strategy<Value = Starport> {
    prop::sample::select(vec![
        Starport::A,
        Starport::B,
        Starport::C,
        Starport::D,
        Starport::E,
        Starport::X,
    ])
}

prop_compose! {
    fn arb_hex()(x in 0u8..100, y in 0u8..100) -> HexCoord {
        HexCoord::new(x, y)
    }
}

prop_compose! {
    fn arb_world()(
        hex in arb_hex(),
        starport in arb_starport(),
        population_exp in 0u8..=15,
        resource_units in 0.0..5000.0f64,
        trade_codes in prop::collection::btree_set(arb_code(), 0..4)
    ) -> World {
        World {
            name: "Prop".to_string(),
            sector: "Prop Reach".to_string(),
            hex,
            starport,
            population_exp,
            resource_units,
            trade_codes,
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn distance_is_symmetric(a in arb_hex(), b in arb_hex()) {
        prop_assert_eq!(a.distance(b), b.distance(a));
    }

    #[test]
    fn distance_is_zero_only_at_identity(a in arb_hex(), b in arb_hex()) {
        prop_assert_eq!(a.distance(a), 0);
        if a != b {
            prop_assert!(a.distance(b) >= 1);
        }
    }

    #[test]
    fn distance_never_exceeds_manhattan(a in arb_hex(), b in arb_hex()) {
        let manhattan = (a.x as i32 - b.x as i32).unsigned_abs()
            + (a.y as i32 - b.y as i32).unsigned_abs();
        prop_assert!(a.distance(b) <= manhattan);
    }

    #[test]
    fn hex_display_parse_round_trips(h in arb_hex()) {
        let parsed = HexCoord::parse(&h.to_string()).unwrap();
        prop_assert_eq!(parsed, h);
    }

    #[test]
    fn classification_is_total(codes in prop::collection::btree_set(arb_code(), 0..9)) {
        let profile = classify(&codes);
        if codes.is_empty() {
            prop_assert!(profile.exports.is_empty());
            prop_assert!(profile.imports.is_empty());
        } else {
            // Every code contributes at least one export and one import.
            prop_assert!(!profile.exports.is_empty());
            prop_assert!(!profile.imports.is_empty());
        }
    }

    #[test]
    fn classification_unions_monotonically(
        codes in prop::collection::btree_set(arb_code(), 1..5),
        extra in arb_code()
    ) {
        let base = classify(&codes);
        let mut wider: BTreeSet<TradeCode> = codes.clone();
        wider.insert(extra);
        let grown = classify(&wider);
        prop_assert!(base.exports.is_subset(&grown.exports));
        prop_assert!(base.imports.is_subset(&grown.imports));
    }

    #[test]
    fn leg_profit_is_finite_and_non_negative(
        origin in arb_world(),
        dest in arb_world(),
        threshold in 0.0..2000.0f64
    ) {
        let leg = profit::evaluate(&origin, &dest, threshold);
        prop_assert!(leg.profit_per_ton.is_finite());
        prop_assert!(leg.profit_per_ton >= 0.0);
        if leg.viable {
            prop_assert!(leg.profit_per_ton > threshold);
            prop_assert!(!leg.goods.is_empty());
        }
        if leg.goods.is_empty() {
            prop_assert_eq!(leg.profit_per_ton, 0.0);
        }
    }
}
