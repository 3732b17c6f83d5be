//! Inspection commands - ranked matches and catalog listing

use clap::Args;

use super::bootstrap;
use crate::domain::{Catalog, RankedResult};
use crate::load_catalog;
use crate::score_and_rank;

/// Arguments for the match command
#[derive(Args, Clone)]
pub struct MatchArgs {
    /// Free-text query to score against the catalog
    pub query: String,

    /// Number of products to keep (overrides config)
    #[arg(long)]
    pub top_k: Option<usize>,
}

pub fn run_match(args: MatchArgs) -> anyhow::Result<()> {
    let config = bootstrap()?;
    let catalog = load_catalog(&config)?;

    let top_k = args.top_k.unwrap_or(config.matching.top_k);
    let ranked = score_and_rank(&args.query, catalog.records(), top_k);

    print!("{}", format_matches(&ranked));
    Ok(())
}

pub fn run_catalog() -> anyhow::Result<()> {
    let config = bootstrap()?;
    let catalog = load_catalog(&config)?;

    print!("{}", format_catalog(&catalog));
    Ok(())
}

fn format_matches(ranked: &RankedResult) -> String {
    if ranked.is_empty() {
        return "No matching products.\n".to_string();
    }

    ranked
        .matches()
        .iter()
        .enumerate()
        .map(|(i, m)| format!("{}. {} (score {})\n", i + 1, m.record.title, m.score))
        .collect()
}

fn format_catalog(catalog: &Catalog) -> String {
    catalog
        .records()
        .iter()
        .map(|r| format!("{}\n  keywords: {}\n", r.title, r.keywords.join(", ")))
        .collect()
}
