mod boot;
mod chat_view;
mod cli;

use std::process::ExitCode;
use std::sync::Arc;

use folio_ai::ConversationSession;
use folio_common::FolioError;
use folio_config::FolioConfig;
use tracing_subscriber::EnvFilter;

use cli::{Args, Command};

/// Crates whose logs are shown at the chosen level.
const LOG_TARGETS: [&str; 4] = ["folio_app", "folio_ai", "folio_config", "folio_common"];

/// Load environment variables from a .env file (KEY=VALUE lines).
///
/// Variables that are already set win over the file.
fn load_dotenv() {
    let Ok(contents) = std::fs::read_to_string(".env") else {
        return;
    };
    for (key, value) in parse_dotenv(&contents) {
        if std::env::var(key).is_err() {
            std::env::set_var(key, value);
        }
    }
}

fn parse_dotenv(contents: &str) -> Vec<(&str, &str)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| {
            let value = value.trim().trim_matches('"').trim_matches('\'');
            (key.trim(), value)
        })
        .filter(|(key, _)| !key.is_empty())
        .collect()
}

/// Filter directives for a level name; anything containing `=` is taken as
/// a full directive string.
fn log_directives(level: &str) -> String {
    if level.contains('=') {
        return level.to_string();
    }
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_directives(level)))
        .unwrap_or_else(|_| EnvFilter::new(log_directives("info")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file before anything else
    load_dotenv();

    let args = cli::parse();

    let loaded = folio_config::load_config(args.config.as_deref());
    let level = args.log_level.clone().unwrap_or_else(|| {
        loaded
            .as_ref()
            .map(|config| config.logging.level)
            .unwrap_or_default()
            .as_filter()
            .to_string()
    });
    init_logging(&level);

    tracing::info!("folio v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        FolioConfig::default()
    });

    match run(args, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("folio: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args, config: FolioConfig) -> Result<(), FolioError> {
    let persona = config.chat.resolve_persona()?;
    let client = boot::build_client(&config.assistant);

    match args.command {
        Some(Command::Ask { text }) => {
            let reply = client
                .invoke(&persona, &text.join(" "))
                .await
                .map_err(|e| FolioError::Ai(e.to_string()))?;
            println!("{reply}");
        }
        None => {
            let settings = boot::session_settings(&config.chat, persona, args.replay_history);
            let session = Arc::new(ConversationSession::new(client, settings));
            chat_view::run(session).await?;
        }
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
