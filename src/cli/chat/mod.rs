//! Chat command - line-oriented chat loop on stdin/stdout

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;

use super::bootstrap;
use crate::create_assistant;
use crate::infrastructure::services::AssistantService;

const GREETING: &str = "MedAssist - Your AI Medical Assistant by Biofina Pharmaceuticals\n\
Ask about symptoms or medications. Type 'exit' to quit.\n";

const DISCLAIMER: &str = "Disclaimer: This chatbot is for informational purposes only and does not replace \
professional medical advice. Always consult with a healthcare professional for medical concerns.";

pub async fn run() -> anyhow::Result<()> {
    let config = bootstrap()?;
    let assistant = create_assistant(&config)?;

    info!("Starting chat session");
    println!("{}", GREETING);

    chat_loop(&assistant).await?;

    println!("\n{}", DISCLAIMER);
    Ok(())
}

async fn chat_loop(assistant: &AssistantService) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    let mut turns = 0usize;

    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        if is_exit(query) {
            break;
        }

        let response = assistant.respond(query).await;
        turns += 1;

        if let Some(notice) = &response.notice {
            eprintln!("warning: {}", notice);
        }
        stdout
            .write_all(format!("\n{}\n\n", response.text).as_bytes())
            .await?;
    }

    info!(turns, "Chat session ended");
    Ok(())
}

fn is_exit(input: &str) -> bool {
    matches!(input.to_lowercase().as_str(), "exit" | "quit" | ":q")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_words() {
        assert!(is_exit("exit"));
        assert!(is_exit("QUIT"));
        assert!(!is_exit("exit strategy for insomnia"));
    }
}
