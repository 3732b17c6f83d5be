use clap::Parser;
use medassist::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Chat) {
        Command::Chat => cli::chat::run().await,
        Command::Ask(args) => cli::ask::run(args).await,
        Command::Match(args) => cli::inspect::run_match(args),
        Command::Catalog => cli::inspect::run_catalog(),
        Command::Examples => cli::examples::run(),
        Command::Status => cli::status::run(),
    }
}
