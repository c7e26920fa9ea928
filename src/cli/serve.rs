//! Serve command - Start the edge HTTP endpoints

use std::sync::Arc;

use anyhow::Result;
use clap::Args;

use super::utils::{load_catalog, tutor_client};
use crate::config::Config;
use crate::server::{self, AppState};

/// Run the edge HTTP endpoints
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to bind (default from `[server]` config)
    #[arg(long)]
    pub bind: Option<String>,
}

pub async fn run(args: ServeArgs, config: &Config) -> Result<()> {
    let bind = args.bind.unwrap_or_else(|| config.server.bind.clone());
    let state = AppState::new(Arc::new(load_catalog()?), tutor_client(config)?);

    eprintln!("GeoLab edge endpoints on http://{}/api", bind);
    server::run(&bind, state).await
}
