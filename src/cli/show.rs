//! `geolab show` command
//!
//! Shows a knowledge point (or a whole category) by id.
//!
//! # Usage
//! ```bash
//! geolab show earth-rotation
//! geolab show required1
//! geolab show ocean-currents --format json
//! ```
//!
//! Unknown ids print a "not found" state and exit successfully.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde_json::json;

use super::utils::{load_catalog, print_not_found};
use crate::core::catalog::Catalog;
use crate::core::diagram::Diagram;
use crate::core::hints;
use crate::core::knowledge::{Category, KnowledgePoint};
use crate::tutor::FallbackTable;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Knowledge point or category id
    pub id: String,

    /// Output format (pretty, json)
    #[arg(short, long, default_value = "pretty")]
    pub format: String,
}

pub fn run(args: ShowArgs) -> Result<()> {
    let catalog = load_catalog()?;

    if let Some(point) = catalog.knowledge_point(&args.id) {
        match args.format.as_str() {
            "json" => {
                let value = json!({
                    "knowledgePoint": point,
                    "diagram": Diagram::for_point(&point.id),
                    "hints": hints::hints_for(&point.id),
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            }
            _ => print_point(&catalog, point),
        }
        return Ok(());
    }

    if let Some(category) = catalog.category(&args.id) {
        match args.format.as_str() {
            "json" => println!("{}", serde_json::to_string_pretty(category)?),
            _ => print_category(category),
        }
        return Ok(());
    }

    print_not_found(&args.id);
    Ok(())
}

fn print_point(catalog: &Catalog, point: &KnowledgePoint) {
    let category = catalog.category(&point.category);
    let subcategory = category.and_then(|c| c.subcategory(&point.subcategory));

    println!("{}", point.title.bold());
    println!("{}", point.id.dimmed());
    println!();
    println!("{}", point.description);
    println!();

    println!(
        "{} {} / {}",
        "Category:".cyan(),
        category.map(|c| c.name.as_str()).unwrap_or(&point.category),
        subcategory.map(|s| s.name.as_str()).unwrap_or(&point.subcategory)
    );
    if !point.keywords.is_empty() {
        println!("{} {}", "Keywords:".cyan(), point.keywords.join("、"));
    }

    let diagram = Diagram::for_point(&point.id);
    let simulation = match (point.has_simulation, diagram.is_default()) {
        (false, _) => "none".dimmed().to_string(),
        (true, false) => format!("{:?}", diagram),
        (true, true) => "placeholder".yellow().to_string(),
    };
    println!("{} {}", "Diagram:".cyan(), simulation);

    let offline = if FallbackTable::builtin().contains(&point.id) {
        "point-specific answers"
    } else {
        "generic answer only"
    };
    println!("{} {}", "Offline:".cyan(), offline);

    println!();
    println!("{}", "Hints:".cyan());
    for hint in hints::hints_for(&point.id) {
        println!("  • {}", hint);
    }
}

fn print_category(category: &Category) {
    println!("{} {}", category.name.bold(), format!("({})", category.id).dimmed());
    println!("{}", category.description);
    println!();
    for sub in &category.subcategories {
        println!("{}", sub.name.cyan());
        for point in &sub.knowledge_points {
            println!("  {}  {}", point.id.green(), point.title);
        }
    }
}
