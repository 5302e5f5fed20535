// ============================================================================
// SnappQuest - Proxy Google Sheets
// ============================================================================
// Binaire serveur : expose GET /api/sheets et garde la clé API côté serveur.
// Les logs vont sur stdout (pas de TUI ici, donc pas besoin de fichier).
// ============================================================================

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use snappquest::config::{load_dotenv, Config};
use snappquest::server::start_server;

#[tokio::main]
async fn main() -> Result<()> {
    load_dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "snappquest=debug,info".into()),
        )
        .init();

    let config = Config::load()?;
    info!(
        port = config.port,
        range = %config.default_range,
        credentials = config.credentials.is_some(),
        "SnappQuest proxy starting up"
    );

    start_server(config).await
}
