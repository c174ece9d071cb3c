use crate::reports;
use clap::Args;
use freetrader::config::Config;
use freetrader::error::TradeResult;
use freetrader::routes;
use freetrader::world::World;

#[derive(Args, Debug, Clone)]
pub struct RouteArgs {
    #[command(flatten)]
    pub config: Config,

    /// Restrict the analysis to one or more sectors.
    #[arg(short, long)]
    pub sector: Vec<String>,

    /// How many top routes to display.
    #[arg(long, default_value_t = 10)]
    pub limit: usize,

    /// Print ranked routes as JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: RouteArgs, worlds: &[World]) -> TradeResult<()> {
    args.config.validate()?;

    let scoped = super::sector_scope(worlds, &args.sector);
    if scoped.is_empty() {
        return Ok(());
    }

    println!(
        "\n🛰️  Route search: Jump-{}, {} worlds in scope",
        args.config.ship.jump_range,
        scoped.len()
    );

    let routes = routes::find_routes(
        &scoped,
        args.config.ship.jump_range,
        args.config.thresholds.min_leg_profit,
    );

    if routes.is_empty() {
        println!("\nNo viable bilateral routes found. Try a wider jump range.");
        return Ok(());
    }

    println!("Found {} viable routes", routes.len());
    if args.json {
        let top: Vec<_> = routes.iter().take(args.limit).collect();
        println!("{}", serde_json::to_string_pretty(&top)?);
    } else {
        reports::print_route_report(&routes, args.config.ship.cargo_tons, args.limit);
    }

    Ok(())
}
