//! Ask command - answers one question

use clap::Args;

use super::bootstrap;
use crate::create_assistant;

/// Arguments for the ask command
#[derive(Args, Clone)]
pub struct AskArgs {
    /// The question, e.g. "What can help with my headache?"
    #[arg(required = true, num_args = 1..)]
    pub words: Vec<String>,
}

impl AskArgs {
    pub fn question(&self) -> String {
        self.words.join(" ")
    }
}

pub async fn run(args: AskArgs) -> anyhow::Result<()> {
    let config = bootstrap()?;
    let assistant = create_assistant(&config)?;

    let response = assistant.respond(&args.question()).await;

    if let Some(notice) = &response.notice {
        eprintln!("warning: {}", notice);
    }
    println!("{}", response.text);

    Ok(())
}
