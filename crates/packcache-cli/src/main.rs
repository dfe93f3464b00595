//! PackCache CLI
//!
//! Operator tool for PackCache state and settings files

use clap::{Parser, Subcommand};
use packcache_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "packcache")]
#[command(about = "PackCache - graphic pack selection state", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the contents of a state file
    Inspect(commands::inspect::InspectArgs),
    /// Settings file operations
    Settings(commands::settings::SettingsArgs),
}

fn main() {
    init(Profile::Development);
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Inspect(args) => commands::inspect::execute(args),
        Commands::Settings(args) => commands::settings::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
