// ===== freetrader/src/main.rs =====
use clap::{Parser, Subcommand};
use std::process;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enriched world table (CSV) produced by the survey pipeline.
    #[arg(global = true, short, long, default_value = "data/worlds.csv")]
    worlds: String,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Find and rank circular multi-stop trade circuits.
    Circuits(cmd::circuits::CircuitArgs),
    /// Find and rank bilateral trade routes within jump range.
    Routes(cmd::routes::RouteArgs),
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_target(false)
        .init();

    println!("\n🚀 Initializing Free Trader...");
    println!("📂 Loading worlds: {}", cli.worlds);

    let worlds = match freetrader::loader::load_worlds_from_path(&cli.worlds) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("\n❌ FATAL ERROR LOADING WORLD DATA:");
            eprintln!("   {}", e);
            process::exit(1);
        }
    };
    println!("🌍 {} worlds loaded", worlds.len());

    let result = match cli.command {
        Commands::Circuits(args) => cmd::circuits::run(args, &worlds),
        Commands::Routes(args) => cmd::routes::run(args, &worlds),
    };

    if let Err(e) = result {
        eprintln!("\n❌ {}", e);
        process::exit(1);
    }
}
