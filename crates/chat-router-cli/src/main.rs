mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chat-router")]
#[command(version, about = "Inspect and resolve chat-router route tables", long_about = None)]
struct Cli {
    /// Route table config (defaults to ./routes.toml, then the built-in chat table)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log resolution steps
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve one or more paths
    Resolve {
        /// Paths to resolve
        #[arg(required = true)]
        paths: Vec<String>,

        /// Print outcomes as JSON
        #[arg(long)]
        json: bool,

        /// Report redirects instead of following them
        #[arg(long)]
        no_follow: bool,

        /// Strip query/fragment and fix slashes before resolving
        #[arg(long)]
        normalize: bool,
    },

    /// List routes in declaration order
    Routes,

    /// Validate the route table
    Check,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.config.as_deref();

    match cli.command {
        Commands::Resolve {
            paths,
            json,
            no_follow,
            normalize,
        } => {
            let options = commands::resolve::Options {
                json,
                follow: !no_follow,
                normalize,
            };
            commands::resolve::execute(config, &paths, &options)?;
        }
        Commands::Routes => {
            commands::routes::execute(config)?;
        }
        Commands::Check => {
            commands::check::execute(config)?;
        }
    }

    Ok(())
}
