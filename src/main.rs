use std::io;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;
use wellness_agent::cli::run_session;
use wellness_agent::config::Config;
use wellness_agent::controller::Controller;
use wellness_agent::llm::{GeminiClient, LlmClient};
use wellness_agent::memory::Memory;

fn main() -> wellness_agent::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env()?;
    info!(?config, "configuration loaded");

    let llm: Arc<dyn LlmClient> = Arc::new(GeminiClient::new(&config));
    info!(model = llm.model_name(), "model client ready");
    let mut controller = Controller::new(llm);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let end = run_session(&mut controller, stdin.lock(), &mut stdout)?;

    info!(?end, turns = controller.memory().len(), "session ended");
    Ok(())
}
