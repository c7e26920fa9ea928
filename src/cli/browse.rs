//! `geolab ls` command
//!
//! Prints the curriculum tree.
//!
//! # Usage
//! ```bash
//! geolab ls                  # Full tree
//! geolab ls required2        # One category
//! geolab ls --format json    # Frontend-shaped JSON
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::utils::{load_catalog, print_not_found};
use crate::core::knowledge::Category;

#[derive(Args, Debug)]
pub struct LsArgs {
    /// Only list this category
    pub category: Option<String>,

    /// Output format (pretty, json)
    #[arg(short, long, default_value = "pretty")]
    pub format: String,
}

pub fn run_ls(args: LsArgs) -> Result<()> {
    let catalog = load_catalog()?;

    let categories: Vec<&Category> = match &args.category {
        Some(id) => match catalog.category(id) {
            Some(category) => vec![category],
            None => {
                print_not_found(id);
                return Ok(());
            }
        },
        None => catalog.categories().iter().collect(),
    };

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&categories)?),
        _ => print_tree(&categories),
    }

    Ok(())
}

fn print_tree(categories: &[&Category]) {
    for category in categories {
        println!(
            "{} {} {}",
            category.name.bold(),
            format!("({})", category.id).dimmed(),
            format!("[{}]", category.point_count()).cyan()
        );

        let last_sub = category.subcategories.len().saturating_sub(1);
        for (i, sub) in category.subcategories.iter().enumerate() {
            let (branch, indent) = if i == last_sub {
                ("└──", "    ")
            } else {
                ("├──", "│   ")
            };
            println!("{} {}", branch, sub.name);

            let last_point = sub.knowledge_points.len().saturating_sub(1);
            for (j, point) in sub.knowledge_points.iter().enumerate() {
                let leaf = if j == last_point { "└──" } else { "├──" };
                println!("{}{} {}  {}", indent, leaf, point.id.green(), point.title);
            }
        }
        println!();
    }
}
