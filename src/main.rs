mod cli;
mod config;
mod error;
mod patcher;
mod sync;
mod version;
mod workflow;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use config::SyncConfig;
use std::process;

fn main() {
    let cli = Cli::parse();

    let result = SyncConfig::resolve(&cli.path, &cli.target, &cli.files).and_then(|config| {
        // Bare `cmver` behaves like `cmver sync`.
        match cli.command.unwrap_or(Commands::Sync) {
            Commands::Sync => workflow::execute_sync(&config),
            Commands::Check => workflow::execute_check(&config),
            Commands::List => workflow::execute_list(&config),
        }
    });

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}
