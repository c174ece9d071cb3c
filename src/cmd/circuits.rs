use crate::reports;
use clap::Args;
use freetrader::config::Config;
use freetrader::error::TradeResult;
use freetrader::export;
use freetrader::optimizer::CircuitFinder;
use freetrader::world::World;
use std::path::Path;

#[derive(Args, Debug, Clone)]
pub struct CircuitArgs {
    #[command(flatten)]
    pub config: Config,

    /// Restrict the analysis to one or more sectors.
    #[arg(short, long)]
    pub sector: Vec<String>,

    /// Export ranked circuits and leg detail to CSV.
    #[arg(long, default_value_t = false)]
    pub save: bool,

    /// Print ranked circuits as JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long, default_value = "output")]
    pub out_dir: String,
}

pub fn run(args: CircuitArgs, worlds: &[World]) -> TradeResult<()> {
    args.config.validate()?;

    let scoped = super::sector_scope(worlds, &args.sector);
    if scoped.is_empty() {
        return Ok(());
    }

    println!(
        "\n🛰️  Circuit search: Jump-{}, {} tons cargo, {} worlds in scope",
        args.config.ship.jump_range,
        args.config.ship.cargo_tons,
        scoped.len()
    );

    let circuits = CircuitFinder::new(&scoped, &args.config).find_circuits()?;

    if circuits.is_empty() {
        println!("\nNo viable circuits found with current parameters.");
        println!("Try:");
        println!("- Increasing jump range");
        println!("- Selecting sectors with more interconnected worlds");
        println!("- Reducing minimum profit requirements");
        return Ok(());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&circuits)?);
    } else {
        reports::print_circuit_report(&circuits, &args.config.ship);
    }

    if args.save {
        let prefix = if args.sector.is_empty() {
            "all_sectors".to_string()
        } else {
            args.sector
                .iter()
                .map(|s| s.replace(' ', "_").to_lowercase())
                .collect::<Vec<_>>()
                .join("_")
        };
        let prefix = format!(
            "{}_j{}_c{}",
            prefix, args.config.ship.jump_range, args.config.ship.cargo_tons
        );
        let (circuits_file, legs_file) =
            export::export_circuits(&circuits, Path::new(&args.out_dir), &prefix)?;
        println!("\nResults saved to:");
        println!("- {}", circuits_file.display());
        println!("- {}", legs_file.display());
    }

    Ok(())
}
