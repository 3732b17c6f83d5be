//! CLI module for MedAssist
//!
//! Provides subcommands around the matching and reply core:
//! - `chat`: interactive chat loop (default)
//! - `ask`: answer a single question
//! - `match`: show how the catalog ranks for a query
//! - `catalog`: list catalog products
//! - `examples`: example questions to try
//! - `status`: generative backend status

pub mod ask;
pub mod chat;
pub mod examples;
pub mod inspect;
pub mod status;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// MedAssist - find Biofina products for your symptoms
#[derive(Parser)]
#[command(name = "medassist")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Interactive chat loop (default mode)
    Chat,

    /// Answer a single question and exit
    Ask(ask::AskArgs),

    /// Show ranked catalog matches and scores for a query
    Match(inspect::MatchArgs),

    /// List the products in the catalog
    Catalog,

    /// Print example questions by category
    Examples,

    /// Report whether the generative backend is configured
    Status,
}

/// Load `.env`, read configuration and install logging
pub(crate) fn bootstrap() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    logging::init_logging(&config.logging);

    Ok(config)
}
