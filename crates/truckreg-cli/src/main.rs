//! Truck registration CLI
//!
//! Admin and inspection commands over the same tables and handlers the GUI
//! uses.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
