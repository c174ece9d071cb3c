pub mod circuits;
pub mod routes;

use freetrader::world::{self, World};

/// Applies the optional sector filter; when it matches nothing, lists the
/// sectors that do exist so the user can correct the spelling.
pub fn sector_scope(worlds: &[World], sectors: &[String]) -> Vec<World> {
    let scoped = world::in_sectors(worlds, sectors);
    if scoped.is_empty() && !sectors.is_empty() {
        println!("No worlds found for sectors: {}", sectors.join(", "));
        let mut available: Vec<&str> = worlds.iter().map(|w| w.sector.as_str()).collect();
        available.sort_unstable();
        available.dedup();
        println!("Available sectors: {}", available.join(", "));
    }
    scoped
}
