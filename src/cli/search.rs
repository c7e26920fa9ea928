//! `geolab search` command
//!
//! Searches knowledge points by title, description and keywords.
//!
//! # Usage
//! ```bash
//! geolab search 洋流
//! geolab search cbd --limit 3
//! geolab search 交通 --format compact
//! ```
//!
//! Matching is a case-insensitive substring test. Results keep catalog
//! order and are truncated to `--limit` (default from `[search]` config).

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use super::utils::load_catalog;
use crate::config::Config;
use crate::core::knowledge::KnowledgePoint;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query
    pub query: String,

    /// Maximum results
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Output format (pretty, json, compact)
    #[arg(short, long, default_value = "pretty")]
    pub format: String,
}

#[derive(Tabled)]
struct ResultRow<'a> {
    #[tabled(rename = "ID")]
    id: &'a str,
    #[tabled(rename = "Title")]
    title: &'a str,
    #[tabled(rename = "Keywords")]
    keywords: String,
}

pub fn run(args: SearchArgs, config: &Config) -> Result<()> {
    let catalog = load_catalog()?;
    let limit = args.limit.unwrap_or(config.search.default_limit);

    let matches = catalog.search(&args.query);
    let total = matches.len();
    let points: Vec<&KnowledgePoint> = matches.into_iter().take(limit).collect();

    tracing::debug!(query = %args.query, total, shown = points.len(), "search");

    match args.format.as_str() {
        "json" => print_json(&points)?,
        "compact" => print_compact(&points),
        _ => print_pretty(&points, total),
    }

    Ok(())
}

fn print_pretty(points: &[&KnowledgePoint], total: usize) {
    if points.is_empty() {
        println!("No results found.");
        return;
    }

    let rows: Vec<ResultRow> = points
        .iter()
        .map(|p| ResultRow {
            id: &p.id,
            title: &p.title,
            keywords: p.keywords.join("、"),
        })
        .collect();

    println!("{}", Table::new(rows).with(Style::rounded()));

    if total > points.len() {
        println!(
            "{}",
            format!("Showing {} of {} results (use --limit)", points.len(), total).dimmed()
        );
    }
}

fn print_compact(points: &[&KnowledgePoint]) {
    for point in points {
        println!("{}\t{}", point.id, point.title);
    }
}

fn print_json(points: &[&KnowledgePoint]) -> Result<()> {
    let json = serde_json::to_string_pretty(points)?;
    println!("{}", json);
    Ok(())
}
