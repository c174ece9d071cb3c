use criterion::{criterion_group, criterion_main, Criterion};
use freetrader::config::Config;
use freetrader::hex::HexCoord;
use freetrader::optimizer::CircuitFinder;
use freetrader::world::{Starport, TradeCode, World};
use std::hint::black_box;

fn survey_grid() -> Vec<World> {
    let ports = [
        Starport::A,
        Starport::B,
        Starport::C,
        Starport::A,
        Starport::B,
        Starport::D,
    ];
    let codes = [
        TradeCode::Ag,
        TradeCode::Hi,
        TradeCode::In,
        TradeCode::Ri,
        TradeCode::Po,
        TradeCode::Na,
    ];

    let mut worlds = Vec::new();
    for col in 1u8..=6 {
        for row in 1u8..=5 {
            let i = (col as usize * 5 + row as usize) % 6;
            worlds.push(World {
                name: format!("W{:02}{:02}", col, row),
                sector: "Bench Reach".to_string(),
                hex: HexCoord::new(col, row),
                starport: ports[i],
                population_exp: 3 + i as u8,
                resource_units: 200.0 + (i as f64) * 150.0,
                trade_codes: [codes[i]].into_iter().collect(),
            });
        }
    }
    worlds
}

fn criterion_benchmark(c: &mut Criterion) {
    let worlds = survey_grid();
    let config = Config::default();

    c.bench_function("find_circuits (30-world grid)", |b| {
        b.iter(|| {
            CircuitFinder::new(black_box(&worlds), black_box(&config))
                .find_circuits()
                .unwrap()
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
