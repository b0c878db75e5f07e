//! Command handlers

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use truckreg_app::{auth, registration, Config, Session};
use truckreg_store::{TruckStore, UserStore};
use truckreg_types::{Error, OutputFormat, Result};

use crate::cli::{Cli, Commands};
use crate::output::print_trucks;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(ref dir) = cli.data_dir {
        config.data_dir = Some(dir.clone());
    }

    match &cli.command {
        Commands::Register { username, password } => cmd_register(&config, username, password),

        Commands::Login { username, password } => cmd_login(&config, username, password),

        Commands::AddTruck {
            number,
            user,
            password,
            driver,
            contact,
            date,
        } => cmd_add_truck(&config, number, user, password, driver, contact, date.as_deref()),

        Commands::ListTrucks { username } => {
            let output_format = cli.format.unwrap_or(config.output_format);
            cmd_list_trucks(&config, username, output_format)
        }

        Commands::Config {
            show,
            set_data_dir,
            reset,
        } => cmd_config(*show, set_data_dir.clone(), *reset),
    }
}

fn cmd_register(config: &Config, username: &str, password: &str) -> Result<()> {
    let mut users = UserStore::open(config.users_path()?)?;
    let mut session = Session::new();

    auth::register(&mut users, &mut session, username, password)?;
    println!("Account registered: {}", username);
    Ok(())
}

fn cmd_login(config: &Config, username: &str, password: &str) -> Result<()> {
    let users = UserStore::open(config.users_path()?)?;
    let mut session = Session::new();

    auth::login(&users, &mut session, username, password)?;
    println!("Login OK: {}", username);
    Ok(())
}

fn cmd_add_truck(
    config: &Config,
    number: &str,
    user: &str,
    password: &str,
    driver: &str,
    contact: &str,
    date: Option<&str>,
) -> Result<()> {
    // Authenticate before writing on behalf of the account
    let users = UserStore::open(config.users_path()?)?;
    let mut session = Session::new();
    auth::login(&users, &mut session, user, password)?;

    let registration_date = match date {
        Some(s) => parse_date(s)?,
        None => Local::now().date_naive(),
    };

    let mut trucks = TruckStore::open(config.trucks_path()?)?;
    registration::register_truck(&mut trucks, number, driver, contact, registration_date, user)?;
    println!("Truck {} registered for {}", number, user);
    Ok(())
}

fn cmd_list_trucks(config: &Config, username: &str, output_format: OutputFormat) -> Result<()> {
    let trucks = TruckStore::open(config.trucks_path()?)?;
    let owned = registration::list_owned_trucks(&trucks, username);
    print_trucks(output_format, username, &owned)
}

fn cmd_config(show: bool, set_data_dir: Option<PathBuf>, reset: bool) -> Result<()> {
    let mut config = Config::load()?;
    let mut changed = false;

    if reset {
        config = Config::default();
        changed = true;
    }
    if let Some(dir) = set_data_dir {
        config.data_dir = Some(dir);
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration updated.");
    }
    if show || !changed {
        println!("{}", config);
    }
    Ok(())
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    let formats = ["%Y-%m-%d", "%Y/%m/%d"];

    for fmt in formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(date);
        }
    }

    Err(Error::InvalidDate(s.to_string()))
}
