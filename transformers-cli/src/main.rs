//! Transformers CLI - Command-line interface
//!
//! Commands:
//! - battle: Resolve a battle between transformers by id
//! - list: List the roster
//! - show: Show a single transformer

mod battle_cmd;
mod config;
mod roster_cmd;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use config::CliConfig;

#[derive(Parser)]
#[command(name = "transformers")]
#[command(about = "Transformers roster and battle resolver")]
struct Cli {
    /// Roster JSON file (defaults to the built-in reference roster)
    #[arg(long, global = true, value_name = "FILE")]
    roster: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a battle between transformers
    Battle(battle_cmd::BattleArgs),
    /// List every transformer in the roster
    List(roster_cmd::ListArgs),
    /// Show a single transformer
    Show(roster_cmd::ShowArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = CliConfig {
        roster: cli.roster,
        verbose: cli.verbose,
    };
    config.init_logging();

    match cli.command {
        Commands::Battle(args) => battle_cmd::run(args, &config),
        Commands::List(args) => roster_cmd::list(args, &config),
        Commands::Show(args) => roster_cmd::show(args, &config),
    }
}
