//! # ecskit
//!
//! Command-line front end for the EDNS Client Subnet codec

mod bootstrap;
mod commands;

use clap::{Parser, Subcommand};
use ecskit_domain::CliOverrides;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "ecskit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect and build DNS messages carrying EDNS Client Subnet")]
struct Cli {
    /// Path to configuration file
    #[arg(short = 'c', long, global = true)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Overrides `ecs.default_subnet` from the configuration file
    #[arg(long, global = true, allow_hyphen_values = true)]
    default_subnet: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse an address or CIDR into a client subnet descriptor
    ParseSubnet {
        #[arg(allow_hyphen_values = true)]
        subnet: String,
    },

    /// Decode a wire-format DNS message and show its A records and subnet
    Inspect { file: PathBuf },

    /// Write a wire-format query, optionally carrying a client subnet
    BuildQuery {
        domain: String,

        #[arg(short = 't', long = "type", default_value = "A")]
        record_type: String,

        /// Address or CIDR; defaults to `ecs.default_subnet`
        #[arg(short = 's', long)]
        subnet: Option<String>,

        #[arg(short = 'o', long)]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        default_subnet: cli.default_subnet.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    info!("Starting ecskit v{}", env!("CARGO_PKG_VERSION"));

    let output = match cli.command {
        Command::ParseSubnet { subnet } => commands::parse_subnet(&subnet)?,
        Command::Inspect { file } => commands::inspect(&file)?,
        Command::BuildQuery {
            domain,
            record_type,
            subnet,
            out,
        } => commands::build_query(&config, &domain, &record_type, subnet.as_deref(), &out)?,
    };

    println!("{}", output);
    Ok(())
}
