use crate::circuit::Circuit;
use crate::error::TradeResult;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes ranked circuits and their leg detail to two CSV files under
/// `out_dir`, returning the paths. File naming mirrors the survey
/// pipeline's convention: `<prefix>_circuits.csv` and
/// `<prefix>_circuit_legs.csv`.
pub fn export_circuits(
    circuits: &[Circuit],
    out_dir: &Path,
    prefix: &str,
) -> TradeResult<(PathBuf, PathBuf)> {
    fs::create_dir_all(out_dir)?;

    let circuits_path = out_dir.join(format!("{}_circuits.csv", prefix));
    let mut wtr = csv::Writer::from_path(&circuits_path)?;
    wtr.write_record([
        "circuit_rank",
        "worlds",
        "sectors",
        "hexes",
        "starports",
        "stops",
        "total_distance",
        "profit_per_ton",
        "gross_profit",
        "fuel_cost",
        "maintenance_cost",
        "net_profit",
        "efficiency",
    ])?;
    for (rank, c) in circuits.iter().enumerate() {
        let mut sectors: Vec<&str> = Vec::new();
        for s in &c.sectors {
            if !sectors.contains(&s.as_str()) {
                sectors.push(s);
            }
        }
        wtr.write_record([
            (rank + 1).to_string(),
            format!("{} \u{2192} {}", c.worlds.join(" \u{2192} "), c.worlds[0]),
            sectors.join(", "),
            c.hexes.join(" \u{2192} "),
            c.starports
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(" \u{2192} "),
            c.stops().to_string(),
            c.total_distance.to_string(),
            format!("{:.0}", c.profit_per_ton),
            format!("{:.0}", c.gross_profit),
            format!("{:.0}", c.fuel_cost),
            format!("{:.0}", c.maintenance_cost),
            format!("{:.0}", c.net_profit),
            format!("{:.1}", c.efficiency),
        ])?;
    }
    wtr.flush()?;

    let legs_path = out_dir.join(format!("{}_circuit_legs.csv", prefix));
    let mut wtr = csv::Writer::from_path(&legs_path)?;
    wtr.write_record([
        "circuit_rank",
        "leg_number",
        "from_world",
        "to_world",
        "distance",
        "profit_per_ton",
        "viable",
        "goods",
    ])?;
    for (rank, c) in circuits.iter().enumerate() {
        for (n, leg) in c.legs.iter().enumerate() {
            wtr.write_record([
                (rank + 1).to_string(),
                (n + 1).to_string(),
                leg.from.clone(),
                leg.to.clone(),
                leg.distance.to_string(),
                format!("{:.0}", leg.profit_per_ton),
                leg.viable.to_string(),
                leg.goods
                    .iter()
                    .map(|g| g.to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            ])?;
        }
    }
    wtr.flush()?;

    Ok((circuits_path, legs_path))
}
