//! Proxy HTTP vers l'API Google Sheets.
//!
//! Le client TUI ne détient aucun secret : il appelle `GET /api/sheets?range=...`
//! et ce serveur ajoute la clé API et l'identifiant de la feuille avant de
//! transmettre la requête à Google.
//!
//! # Réponses
//! - `200 {"values": [[...]]}` en cas de succès
//! - `500 {"error": "..."}` pour toute erreur (configuration, statut amont, réseau)
//!
//! # Configuration
//! - `SHEETS_API_KEY`, `SHEETS_SPREADSHEET_ID` : requis, sinon chaque requête échoue
//! - `SHEETS_RANGE` : range par défaut si `?range=` est absent
//! - `SNAPPQUEST_PORT` : port d'écoute (3000)
//!
//! ```sh
//! RUST_LOG=snappquest=debug cargo run --bin snappquest-proxy
//! curl 'http://127.0.0.1:3000/api/sheets?range=Sheet1!A1:D10'
//! ```
use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result};
use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

pub mod error;
pub mod routes;
pub mod state;

use crate::config::Config;
use routes::sheets_handler;
use state::State;

/// Construit le router (sans réseau, utilisable en test)
pub fn router(state: Arc<State>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/api/sheets", get(sheets_handler))
        .layer(cors)
        .with_state(state)
}

/// Démarre le proxy et bloque jusqu'à Ctrl+C / SIGTERM
pub async fn start_server(config: Config) -> Result<()> {
    info!("Initializing state...");
    let port = config.port;
    let state = State::new(config);

    info!("Starting server...");
    let app = router(state);

    let address = format!("0.0.0.0:{port}");
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Impossible d'écouter sur {address}"))?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Le serveur s'est arrêté sur une erreur")?;

    info!("Server shutting down...");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::models::SheetsErrorBody;

    #[tokio::test]
    async fn test_missing_credentials_returns_500() {
        let app = router(State::new(Config::default()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/sheets?range=Sheet1!A1:B2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: SheetsErrorBody = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body.error,
            "Server configuration missing SHEETS_API_KEY or SHEETS_SPREADSHEET_ID"
        );
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let app = router(State::new(Config::default()));
        let response = app
            .oneshot(Request::builder().uri("/api/other").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
