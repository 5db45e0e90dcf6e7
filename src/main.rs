mod cli;
mod config;
mod db;
mod error;
mod loader;
mod models;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { database, table } => cli::init::run(database.as_deref(), table.as_deref()),
        Commands::Load {
            workbook,
            database,
            table,
            ref_tag,
            config,
        } => cli::load::run(
            workbook.as_deref(),
            database.as_deref(),
            table.as_deref(),
            ref_tag.as_deref(),
            config.as_deref(),
        ),
        Commands::Status { database, table } => cli::status::run(database.as_deref(), table.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
