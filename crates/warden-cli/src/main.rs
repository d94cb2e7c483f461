//! Command-line tool for Warden
//!
//! Loads authority configuration files, runs the initialization pass over
//! the built-in registries, and inspects authority identifiers.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use warden_core::EnclaveIdentityType;

mod commands;

#[derive(Parser)]
#[command(name = "warden")]
#[command(about = "Warden - Enclave Assertion Authority Initialization", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize every built-in authority from a configuration file
    Init {
        /// Config file path
        #[arg(short, long)]
        config: PathBuf,
    },

    /// Validate a configuration file without initializing anything
    Check {
        /// Config file path
        #[arg(short, long)]
        config: PathBuf,
    },

    /// List built-in generators and verifiers with their initialization state
    List {
        /// Run the initialization pass with this config first
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the registry key derived for an authority
    Id {
        /// Identity type, e.g. NULL_IDENTITY
        identity_type: EnclaveIdentityType,

        /// Authority type within the identity family
        authority_type: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Init { config } => {
            commands::init::run(&config)?;
        }

        Commands::Check { config } => {
            commands::check::run(&config)?;
        }

        Commands::List { config } => {
            commands::list::run(config.as_deref())?;
        }

        Commands::Id {
            identity_type,
            authority_type,
        } => {
            println!("{}", commands::id::derive(identity_type, &authority_type)?);
        }
    }

    Ok(())
}
