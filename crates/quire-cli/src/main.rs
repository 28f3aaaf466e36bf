//! Quire CLI
//!
//! Reads an unprotected and a protected document as a series of users and
//! prints what each of them gets.

use anyhow::Result;
use clap::Parser;
use quire_cli::{QuireConfig, run_demo};
use tracing_subscriber::EnvFilter;

/// Quire - protected document demo
#[derive(Parser, Debug)]
#[command(name = "quire")]
#[command(author, version, about = "Protected document access demo", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<String>,

    /// Reader usernames, in order (overrides `users` from config)
    #[arg(short, long = "user")]
    users: Vec<String>,

    /// Print the resolved configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = QuireConfig::load(args.config.as_deref())?;
    if !args.users.is_empty() {
        config.users = args.users;
    }

    if args.print_config {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    let stdout = std::io::stdout();
    run_demo(&config, &mut stdout.lock())?;
    Ok(())
}
