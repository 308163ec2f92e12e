use clap::{Parser, Subcommand};
use roster_core::config::DEFAULT_CONFIG_FILE;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::list::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "roster", version, about = "Employee directory behind an operator login")]
struct Cli {
    /// Path to the roster configuration file
    #[arg(long, short, global = true, env = "ROSTER_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Log at debug level (RUST_LOG overrides)
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in, then print the employee directory.
    List {
        /// Print JSON instead of a table
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Validate the configuration file and report what it resolves to.
    Check {
        /// Also run one fetch cycle against the store
        #[arg(long, default_value_t = false)]
        connect: bool,
    },

    /// Write a starter configuration file.
    Init {
        /// Where to write it (defaults to --config)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long, default_value_t = false)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::List { json } => {
            let format = if json {
                OutputFormat::Json
            } else {
                OutputFormat::Table
            };
            commands::list::run(&cli.config, format).await
        }
        Command::Check { connect } => commands::check::run(&cli.config, connect).await,
        Command::Init { output, force } => {
            let output = output.unwrap_or(cli.config);
            commands::init::run(&output, force)
        }
    }
}
