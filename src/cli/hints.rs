//! `geolab hints` command

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::utils::load_catalog;
use crate::core::hints::{has_hints, hints_for};

#[derive(Args, Debug)]
pub struct HintsArgs {
    /// Knowledge point id
    pub id: String,

    /// Output format (pretty, json)
    #[arg(short, long, default_value = "pretty")]
    pub format: String,
}

pub fn run(args: HintsArgs) -> Result<()> {
    let hints = hints_for(&args.id);

    if args.format == "json" {
        let value = serde_json::json!({ "knowledgeId": args.id, "hints": hints });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let catalog = load_catalog()?;
    let title = catalog
        .knowledge_point(&args.id)
        .map(|p| p.title.as_str())
        .unwrap_or(args.id.as_str());
    println!("{}", title.bold());

    for (i, hint) in hints.iter().enumerate() {
        println!("  {}. {}", i + 1, hint);
    }
    if !has_hints(&args.id) {
        println!("{}", "(general study hints)".dimmed());
    }
    Ok(())
}
