use crate::error::{TradeError, TradeResult};
use crate::hex::HexCoord;
use crate::world::{Starport, World};
use std::fs::File;
use std::io::Read;
use tracing::{info, warn};

/// Loads the enriched world table produced by the survey pipeline.
pub fn load_worlds_from_path(path: &str) -> TradeResult<Vec<World>> {
    let file = File::open(path).map_err(|e| {
        TradeError::Validation(format!("Could not open world data at '{}': {}", path, e))
    })?;
    load_worlds(file)
}

/// Parses world records from any reader. Rows with an unusable name or hex
/// are skipped with a warning; every other malformed cell degrades to a
/// default (empty tag set, X starport, zero output) so one bad column never
/// kills a run.
pub fn load_worlds<R: Read>(reader: R) -> TradeResult<Vec<World>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let col = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));

    let name_i = col("Name")
        .ok_or_else(|| TradeError::Validation("world data is missing a 'Name' column".into()))?;
    let hex_i = col("Hex")
        .ok_or_else(|| TradeError::Validation("world data is missing a 'Hex' column".into()))?;
    let sector_i = col("Sector");
    let port_i = col("Starport");
    let pop_i = col("PopulationExp");
    let ru_i = col("ResourceUnits");
    let codes_i = col("TradeCodes");

    let mut worlds = Vec::new();
    let mut skipped = 0usize;

    for (row, result) in rdr.records().enumerate() {
        let rec = match result {
            Ok(r) => r,
            Err(e) => {
                warn!(row, "skipping unreadable row: {}", e);
                skipped += 1;
                continue;
            }
        };

        let name = rec.get(name_i).unwrap_or("").trim();
        if name.is_empty() {
            skipped += 1;
            continue;
        }

        let hex = match HexCoord::parse(rec.get(hex_i).unwrap_or("")) {
            Ok(h) => h,
            Err(e) => {
                warn!(row, world = name, "skipping world without a usable hex: {}", e);
                skipped += 1;
                continue;
            }
        };

        let field = |i: Option<usize>| i.and_then(|i| rec.get(i)).unwrap_or("").trim();

        worlds.push(World {
            name: name.to_string(),
            sector: field(sector_i).to_string(),
            hex,
            starport: Starport::from_code(field(port_i)),
            population_exp: field(pop_i)
                .parse::<f64>()
                .ok()
                .map(|p| p.clamp(0.0, 15.0) as u8)
                .unwrap_or(0),
            resource_units: field(ru_i).parse::<f64>().ok().unwrap_or(0.0).max(0.0),
            trade_codes: World::parse_trade_codes(field(codes_i)),
        });
    }

    info!(count = worlds.len(), skipped, "loaded world records");
    Ok(worlds)
}
