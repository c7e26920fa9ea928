//! geolab CLI - Entry point
//!
//! Usage: geolab <command> [options]

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use geolab::cli::{Cli, Commands};
use geolab::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise warn, or debug with -v
    let default_level = if cli.verbose { "geolab=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = Config::load_or_default(cli.config.as_deref().map(Path::new))?;

    match cli.command {
        Commands::Ls(args) => geolab::cli::browse::run_ls(args),
        Commands::Show(args) => geolab::cli::show::run(args),
        Commands::Search(args) => geolab::cli::search::run(args, &config),
        Commands::Hints(args) => geolab::cli::hints::run(args),
        Commands::Ask(args) => geolab::cli::ask::run(args, &config).await,
        Commands::Chat(args) => geolab::cli::chat::run(args, &config).await,
        Commands::Settings(args) => geolab::cli::settings::run(args),
        Commands::Check(args) => geolab::cli::check::run(args),
        Commands::Serve(args) => geolab::cli::serve::run(args, &config).await,
    }
}
