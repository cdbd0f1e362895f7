//! gyt-assistant — console entry point.
//!
//! Startup sequence:
//!   1. Load .env (if present)
//!   2. Load config (optional path as first argument)
//!   3. Init logger at the configured level
//!   4. Open the knowledge slot and load (or seed) the corpus
//!   5. Build the online provider
//!   6. Spawn Ctrl-C → shutdown watcher
//!   7. Run the console until quit / EOF / shutdown

use std::sync::Arc;

use tokio::io::BufReader;
use tokio_util::sync::CancellationToken;
use tracing::info;

use gyt_assistant::config::{self, SlotKind};
use gyt_assistant::error::AppError;
use gyt_assistant::knowledge::{FileSlot, KnowledgeStore, LoadOutcome, Slot, TmpSlot};
use gyt_assistant::llm::{PromptedProvider, providers};
use gyt_assistant::{AssistantEngine, console, logger};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    // .env is optional.
    let _ = dotenvy::dotenv();

    let config_path = std::env::args().nth(1);
    let config = config::load(config_path.as_deref())?;

    logger::init(&config.log_level)?;

    info!(
        name = %config.name,
        work_dir = %config.work_dir.display(),
        log_level = %config.log_level,
        "config loaded"
    );

    let slot: Arc<dyn Slot> = match config.knowledge.slot {
        SlotKind::File => Arc::new(FileSlot::new(&config.work_dir)),
        SlotKind::Tmp => Arc::new(TmpSlot::new()),
    };
    let mut store = KnowledgeStore::new(slot, config.knowledge.key.clone());
    match store.load() {
        LoadOutcome::Loaded { entries, rejected } => info!(entries, rejected, "knowledge ready"),
        LoadOutcome::Seeded { entries } => info!(entries, "knowledge seeded"),
        LoadOutcome::Recovered { entries } => info!(entries, "knowledge recovered from seed"),
    }

    let provider = providers::build(&config.llm, config.llm_api_key.clone())
        .map_err(|e| AppError::Config(e.to_string()))?;
    let generator = PromptedProvider::new(provider, config.llm.system_prompt.clone());
    info!(provider = generator.provider_name(), online = config.start_online, "online provider ready");
    let engine = AssistantEngine::new(store, generator, config.replies.clone());

    let shutdown = CancellationToken::new();
    let ctrlc_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("ctrl-c received — initiating shutdown");
            ctrlc_token.cancel();
        }
    });

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    let online = console::serve(&engine, &config.name, config.start_online, stdin, &mut stdout, shutdown).await?;

    info!(online, entries = engine.knowledge_len(), "console closed");
    Ok(())
}
