use freetrader::config::Config;
use freetrader::error::TradeError;
use freetrader::hex::HexCoord;
use freetrader::optimizer::{select_candidates, CircuitFinder};
use freetrader::world::{Starport, TradeCode, World};

fn world(
    name: &str,
    hex: &str,
    starport: Starport,
    population_exp: u8,
    resource_units: f64,
    codes: &[TradeCode],
) -> World {
    World {
        name: name.to_string(),
        sector: "Test Reach".to_string(),
        hex: HexCoord::parse(hex).unwrap(),
        starport,
        population_exp,
        resource_units,
        trade_codes: codes.iter().copied().collect(),
    }
}

/// Three mutually adjacent worlds with two profitable legs
/// (Agria -> Hive food, Forge -> Agria machinery).
fn viable_triangle() -> Vec<World> {
    vec![
        world("Agria", "0101", Starport::A, 5, 800.0, &[TradeCode::Ag]),
        world("Hive", "0102", Starport::A, 9, 1000.0, &[TradeCode::Hi]),
        world("Forge", "0202", Starport::A, 8, 900.0, &[TradeCode::In]),
    ]
}

#[test]
fn out_of_range_leg_kills_the_whole_circuit() {
    // Hive (0103) -> Forge (0301) is 4 parsecs: no Jump-2 triangle exists,
    // and a 2-stop loop is below min_stops. Expect nothing, not an error.
    let worlds = vec![
        world("Agria", "0101", Starport::A, 5, 800.0, &[TradeCode::Ag]),
        world("Hive", "0103", Starport::A, 9, 1000.0, &[TradeCode::Hi]),
        world("Forge", "0301", Starport::X, 8, 900.0, &[TradeCode::In]),
    ];
    let config = Config::default();

    let circuits = CircuitFinder::new(&worlds, &config).find_circuits().unwrap();
    assert!(circuits.is_empty());
}

#[test]
fn triangle_circuit_honors_all_invariants() {
    let worlds = viable_triangle();
    let config = Config::default();

    let circuits = CircuitFinder::new(&worlds, &config).find_circuits().unwrap();
    assert_eq!(circuits.len(), 1);

    let c = &circuits[0];
    assert_eq!(c.stops(), 3);
    assert_eq!(c.total_distance, 3);

    // All stops distinct.
    let mut names = c.worlds.clone();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), 3);

    // Every leg, wraparound included, within jump range.
    assert_eq!(c.legs.len(), 3);
    for leg in &c.legs {
        assert!(leg.distance <= config.ship.jump_range);
    }
    assert_eq!(c.legs[0].from, c.worlds[0]);
    assert_eq!(c.legs[2].to, c.worlds[0]);

    // Best ordering keeps both viable legs: 7938 (Ag->Hi) + 2352 (In->Ag).
    assert!((c.profit_per_ton - 10290.0).abs() < 1e-6);
}

#[test]
fn costing_identity_holds() {
    let worlds = viable_triangle();
    let config = Config::default();

    let circuits = CircuitFinder::new(&worlds, &config).find_circuits().unwrap();
    let c = &circuits[0];

    assert!((c.gross_profit - c.profit_per_ton * config.ship.cargo_tons as f64).abs() < 1e-9);
    assert!((c.fuel_cost - c.stops() as f64 * config.ship.fuel_per_jump).abs() < 1e-9);
    assert_eq!(c.maintenance_cost, config.ship.maintenance);
    assert!((c.net_profit - (c.gross_profit - c.fuel_cost - c.maintenance_cost)).abs() < 1e-9);
    assert!((c.efficiency - c.profit_per_ton / c.total_distance as f64).abs() < 1e-9);
}

#[test]
fn results_rank_by_gross_profit_descending() {
    // Two disjoint triangles far apart; the B-port copy earns less.
    let mut worlds = viable_triangle();
    worlds.push(world("Agria II", "2020", Starport::B, 5, 800.0, &[TradeCode::Ag]));
    worlds.push(world("Hive II", "2021", Starport::B, 9, 1000.0, &[TradeCode::Hi]));
    worlds.push(world("Forge II", "2121", Starport::B, 8, 900.0, &[TradeCode::In]));

    let config = Config::default();
    let circuits = CircuitFinder::new(&worlds, &config).find_circuits().unwrap();

    assert_eq!(circuits.len(), 2);
    for pair in circuits.windows(2) {
        assert!(pair[0].gross_profit >= pair[1].gross_profit);
    }
    assert_eq!(circuits[0].worlds[0], "Agria");
}

#[test]
fn circuit_viability_threshold_filters_sets() {
    let worlds = viable_triangle();
    let mut config = Config::default();
    // The triangle earns 10290 Cr/ton; a sky-high floor rejects it.
    config.thresholds.min_circuit_profit = 20_000.0;

    let circuits = CircuitFinder::new(&worlds, &config).find_circuits().unwrap();
    assert!(circuits.is_empty());
}

#[test]
fn stop_count_respects_configured_bounds() {
    // Five eligible worlds packed within mutual Jump-2 range.
    let worlds = vec![
        world("Agria", "0101", Starport::A, 5, 800.0, &[TradeCode::Ag]),
        world("Hive", "0102", Starport::A, 9, 1000.0, &[TradeCode::Hi]),
        world("Forge", "0202", Starport::A, 8, 900.0, &[TradeCode::In]),
        world("Gilt", "0201", Starport::A, 7, 700.0, &[TradeCode::Ri]),
        world("Slag", "0203", Starport::B, 6, 600.0, &[TradeCode::Po]),
    ];
    let config = Config::default();

    let circuits = CircuitFinder::new(&worlds, &config).find_circuits().unwrap();
    assert!(!circuits.is_empty());
    for c in &circuits {
        assert!(c.stops() >= config.search.min_stops);
        assert!(c.stops() <= config.search.max_stops);
        let mut names = c.worlds.clone();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), c.stops());
        for leg in &c.legs {
            assert!(leg.distance <= config.ship.jump_range);
        }
    }
}

#[test]
fn empty_input_is_not_an_error() {
    let config = Config::default();
    let circuits = CircuitFinder::new(&[], &config).find_circuits().unwrap();
    assert!(circuits.is_empty());
}

#[test]
fn invalid_configuration_fails_before_search() {
    let worlds = viable_triangle();
    let mut config = Config::default();
    config.search.min_stops = 5;
    config.search.max_stops = 3;

    let err = CircuitFinder::new(&worlds, &config)
        .find_circuits()
        .unwrap_err();
    assert!(matches!(err, TradeError::Config(_)));
}

#[test]
fn candidate_filter_keeps_significant_or_tagged_worlds() {
    let worlds = vec![
        world("Rich Rock", "0101", Starport::C, 3, 500.0, &[]),
        world("Farm", "0102", Starport::D, 4, 10.0, &[TradeCode::Ag]),
        world("Backwater", "0103", Starport::E, 2, 5.0, &[TradeCode::Po]),
    ];
    let config = Config::default();

    let selection = select_candidates(&worlds, &config);
    let names: Vec<&str> = selection.worlds.iter().map(|w| w.name.as_str()).collect();
    assert_eq!(names, vec!["Rich Rock", "Farm"]);
    assert!(!selection.truncated);
}

#[test]
fn oversized_candidate_sets_truncate_to_top_output() {
    let worlds: Vec<World> = (0..10)
        .map(|i| {
            world(
                &format!("W{}", i),
                "0101",
                Starport::C,
                5,
                1000.0 + i as f64,
                &[],
            )
        })
        .collect();
    let mut config = Config::default();
    config.search.candidate_cap = 4;

    let selection = select_candidates(&worlds, &config);
    assert!(selection.truncated);
    assert_eq!(selection.worlds.len(), 4);
    // Top worlds by resource units survive.
    assert_eq!(selection.worlds[0].name, "W9");
    assert_eq!(selection.worlds[3].name, "W6");
}
