//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use truckreg_types::OutputFormat;

#[derive(Parser)]
#[command(name = "truckreg")]
#[command(version)]
#[command(about = "Truck registration and account management over CSV tables")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Override the directory holding the backing tables
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new user account
    Register {
        username: String,
        password: String,
    },

    /// Check credentials against the user table
    Login {
        username: String,
        password: String,
    },

    /// Register a truck under an account
    AddTruck {
        /// Truck number (unique key)
        number: String,

        /// Account username
        #[arg(long, short = 'u')]
        user: String,

        /// Account password
        #[arg(long, short = 'p')]
        password: String,

        /// Driver's name
        #[arg(long)]
        driver: String,

        /// Contact number
        #[arg(long)]
        contact: String,

        /// Registration date (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        date: Option<String>,
    },

    /// List trucks registered by an account
    ListTrucks {
        username: String,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set the data directory holding the backing tables
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}
