//! Status command - generative backend readiness

use super::bootstrap;
use crate::domain::GenerativeBackend;
use crate::infrastructure::llm::BackendFactory;

const SETUP_STEPS: &str = "How to configure Gemini:\n\
  1. Get a free API key at https://aistudio.google.com/app/apikey\n\
  2. Add your key to the .env file as GEMINI_API_KEY=your_key_here\n\
  3. Restart the application\n";

pub fn run() -> anyhow::Result<()> {
    let config = bootstrap()?;
    let backend = BackendFactory::create_gemini(&config.backend)?;

    print!("{}", status_report(backend.is_configured(), backend.model()));
    Ok(())
}

fn status_report(configured: bool, model: &str) -> String {
    if configured {
        format!("Gemini AI is active and ready (model {})\n", model)
    } else {
        format!("Gemini API key not configured; using fallback replies\n\n{}", SETUP_STEPS)
    }
}
