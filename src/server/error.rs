use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::api::UpstreamError;
use crate::models::SheetsErrorBody;

/// Message renvoyé quand l'erreur n'a pas de texte
pub const UNKNOWN_ERROR: &str = "Unknown error";

#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("Server configuration missing SHEETS_API_KEY or SHEETS_SPREADSHEET_ID")]
    MissingConfiguration,

    #[error("{0}")]
    Upstream(#[from] UpstreamError),
}

/// Texte exposé au client : jamais vide
pub fn client_message(message: String) -> String {
    if message.trim().is_empty() {
        UNKNOWN_ERROR.to_string()
    } else {
        message
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        // Toutes les erreurs du proxy sont des 500, le message suffit au client
        let status = match self {
            ProxyError::MissingConfiguration => StatusCode::INTERNAL_SERVER_ERROR,
            ProxyError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = client_message(self.to_string());
        error!(error = %message, "Sheets proxy request failed");

        (status, Json(SheetsErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_message_becomes_unknown_error() {
        assert_eq!(client_message(String::new()), "Unknown error");
        assert_eq!(client_message("  \n".to_string()), "Unknown error");
        assert_eq!(client_message("boom".to_string()), "boom");
    }

    #[test]
    fn test_upstream_error_is_500() {
        let err = ProxyError::from(UpstreamError::Status {
            status: 404,
            body: String::new(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
