//! CLI module - Command definitions and handlers

use clap::{Parser, Subcommand};

pub mod ask;
pub mod browse;
pub mod chat;
pub mod check;
pub mod hints;
pub mod search;
pub mod serve;
pub mod settings;
pub mod show;
pub mod utils;

/// geolab - Interactive geography lab
///
/// Browse the high-school geography curriculum and ask an AI tutor about
/// any knowledge point.
#[derive(Parser, Debug)]
#[command(name = "geolab")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path
    #[arg(short, long, global = true, env = "GEOLAB_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List categories, subcategories and knowledge points
    Ls(browse::LsArgs),

    /// Show a knowledge point or category
    Show(show::ShowArgs),

    /// Search knowledge points
    Search(search::SearchArgs),

    /// Show study hints for a knowledge point
    Hints(hints::HintsArgs),

    /// Ask the tutor one question
    Ask(ask::AskArgs),

    /// Interactive tutoring session
    Chat(chat::ChatArgs),

    /// Manage the stored API key
    Settings(settings::SettingsArgs),

    /// Check catalog integrity and coverage
    Check(check::CheckArgs),

    /// Run the edge HTTP endpoints
    Serve(serve::ServeArgs),
}
