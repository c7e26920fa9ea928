//! `geolab check` command
//!
//! Catalog integrity plus coverage of the per-point tables. Ids in the
//! diagram, hint or fallback tables that the catalog does not know are
//! errors; points without a diagram or offline answers are reported.

use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;

use super::utils::load_catalog;
use crate::core::diagram::Diagram;
use crate::core::hints;
use crate::core::knowledge::KnowledgePoint;
use crate::tutor::FallbackTable;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// List every uncovered point
    #[arg(long)]
    pub details: bool,
}

pub fn run(args: CheckArgs) -> Result<()> {
    let catalog = load_catalog()?;
    let fallback = FallbackTable::builtin();

    println!(
        "{} {} categories, {} knowledge points, ids unique",
        "✓".green(),
        catalog.categories().len(),
        catalog.len()
    );

    let mut dangling: Vec<String> = Vec::new();
    dangling.extend(Diagram::dangling(&catalog).into_iter().map(|id| format!("diagram: {id}")));
    dangling.extend(hints::dangling(&catalog).into_iter().map(|id| format!("hints: {id}")));
    dangling.extend(fallback.dangling(&catalog).into_iter().map(|id| format!("fallback: {id}")));

    report(
        "diagrams",
        &Diagram::uncovered(&catalog),
        catalog.all_knowledge_points().filter(|p| p.has_simulation).count(),
        args.details,
    );
    let without_hints: Vec<&KnowledgePoint> = catalog
        .all_knowledge_points()
        .filter(|p| !hints::has_hints(&p.id))
        .collect();
    report("hints", &without_hints, catalog.len(), args.details);
    report("offline answers", &fallback.uncovered(&catalog), catalog.len(), args.details);

    if !dangling.is_empty() {
        for entry in &dangling {
            println!("{} unknown id in {}", "✗".red(), entry);
        }
        bail!("{} table entries reference unknown knowledge points", dangling.len());
    }

    Ok(())
}

fn report(label: &str, uncovered: &[&KnowledgePoint], total: usize, details: bool) {
    let covered = total.saturating_sub(uncovered.len());
    let mark = if uncovered.is_empty() { "✓".green() } else { "•".yellow() };
    println!("{} {}: {}/{} covered", mark, label, covered, total);

    if details {
        for point in uncovered {
            println!("    {}  {}", point.id.dimmed(), point.title);
        }
    }
}
