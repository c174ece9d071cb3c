// ===== freetrader/src/reports/mod.rs =====
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use freetrader::circuit::Circuit;
use freetrader::config::ShipParams;
use freetrader::routes::Route;

fn numeric_columns(table: &mut Table, range: std::ops::RangeInclusive<usize>) {
    for i in range {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

fn credits(value: f64) -> String {
    format!("Cr {:.0}", value)
}

pub fn print_circuit_report(circuits: &[Circuit], ship: &ShipParams) {
    println!("\n=== 🏆 TOP {} TRADE CIRCUITS ===", circuits.len());

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Circuit").add_attribute(Attribute::Bold),
        Cell::new("Stops"),
        Cell::new("Dist (pc)"),
        Cell::new("Cr/ton"),
        Cell::new("Gross").fg(Color::Cyan),
        Cell::new("Fuel"),
        Cell::new("Maint"),
        Cell::new("Net").add_attribute(Attribute::Bold),
        Cell::new("Eff (Cr/pc)"),
    ]);
    numeric_columns(&mut table, 2..=9);

    for (i, c) in circuits.iter().enumerate() {
        let loop_str = format!("{} \u{2192} {}", c.worlds.join(" \u{2192} "), c.worlds[0]);
        let net_cell = if c.net_profit >= 0.0 {
            Cell::new(credits(c.net_profit)).fg(Color::Green)
        } else {
            Cell::new(credits(c.net_profit)).fg(Color::Red)
        };
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(loop_str),
            Cell::new(c.stops()),
            Cell::new(c.total_distance),
            Cell::new(format!("{:.0}", c.profit_per_ton)),
            Cell::new(credits(c.gross_profit)).fg(Color::Cyan),
            Cell::new(credits(c.fuel_cost)),
            Cell::new(credits(c.maintenance_cost)),
            net_cell,
            Cell::new(format!("{:.1}", c.efficiency)),
        ]);
    }
    println!("{}", table);
    println!(
        "Gross figures assume a full {}-ton hold on every viable leg.",
        ship.cargo_tons
    );

    for (i, c) in circuits.iter().enumerate() {
        print_leg_detail(i + 1, c);
    }
}

fn print_leg_detail(rank: usize, circuit: &Circuit) {
    println!(
        "\n{}. {} \u{2192} {}  (hexes {})",
        rank,
        circuit.worlds.join(" \u{2192} "),
        circuit.worlds[0],
        circuit.hexes.join(" \u{2192} ")
    );

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.add_row(vec![
        Cell::new("Leg"),
        Cell::new("From"),
        Cell::new("To"),
        Cell::new("pc"),
        Cell::new("Cr/ton"),
        Cell::new("Goods"),
    ]);
    numeric_columns(&mut table, 3..=4);

    for (n, leg) in circuit.legs.iter().enumerate() {
        let goods = leg
            .goods
            .iter()
            .take(3)
            .map(|g| g.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let profit_cell = if leg.viable {
            Cell::new(format!("{:.0}", leg.profit_per_ton))
        } else {
            Cell::new("dead leg").fg(Color::Red)
        };
        table.add_row(vec![
            Cell::new(n + 1),
            Cell::new(&leg.from),
            Cell::new(&leg.to),
            Cell::new(leg.distance),
            profit_cell,
            Cell::new(goods),
        ]);
    }
    println!("{}", table);
}

pub fn print_route_report(routes: &[Route], cargo_tons: u32, limit: usize) {
    println!("\n=== 🔁 TOP BILATERAL ROUTES ===");

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Route").add_attribute(Attribute::Bold),
        Cell::new("pc"),
        Cell::new("Ports"),
        Cell::new("Out Cr/ton"),
        Cell::new("Back Cr/ton"),
        Cell::new("Round trip").fg(Color::Cyan),
        Cell::new(format!("x{} tons", cargo_tons)).add_attribute(Attribute::Bold),
    ]);
    numeric_columns(&mut table, 2..=7);

    let fmt_dir = |profit: f64, viable: bool| {
        if viable {
            format!("{:.0}", profit)
        } else {
            "-".to_string()
        }
    };

    for (i, r) in routes.iter().take(limit).enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(format!(
                "{} ({}) \u{2194} {} ({})",
                r.origin, r.origin_hex, r.destination, r.dest_hex
            )),
            Cell::new(r.distance),
            Cell::new(format!("{} \u{2192} {}", r.origin_starport, r.dest_starport)),
            Cell::new(fmt_dir(r.outbound.profit_per_ton, r.outbound.viable)),
            Cell::new(fmt_dir(r.inbound.profit_per_ton, r.inbound.viable)),
            Cell::new(format!("{:.0}", r.round_trip_profit)).fg(Color::Cyan),
            Cell::new(credits(r.round_trip_profit * cargo_tons as f64)),
        ]);
    }
    println!("{}", table);
}
