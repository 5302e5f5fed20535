// ============================================================================
// API Client : Google Sheets v4
// ============================================================================
// Lit les valeurs d'un range A1 dans une feuille Google Sheets.
// Utilisé uniquement par le proxy : la clé API ne quitte jamais le serveur.
//
// GET {base}/v4/spreadsheets/{id}/values/{range encodé}?key={api_key}
//
// Pas de retry, pas de cache : chaque appel est un aller-retour réseau.
// ============================================================================

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error, info, instrument};

use crate::config::SheetsCredentials;
use crate::models::{cell_to_string, SheetRow};

/// Réponse de l'endpoint values.get
///
/// CONCEPT RUST : Option<T> + serde
/// - Champ absent ou null -> None
/// - Une feuille vide renvoie un objet sans "values"
#[derive(Debug, Deserialize)]
struct ValueRangeResponse {
    values: Option<Vec<Vec<Value>>>,
}

/// Erreurs de l'appel amont
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Statut HTTP non-2xx, avec le corps de la réponse tel quel
    #[error("Sheets API error: {status} {body}")]
    Status { status: u16, body: String },

    /// Erreur réseau ou JSON invalide, URL retirée (elle porte la clé)
    #[error("{0}")]
    Request(reqwest::Error),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        UpstreamError::Request(err.without_url())
    }
}

/// Client de l'API Google Sheets
#[derive(Debug, Clone)]
pub struct SheetsClient {
    http: reqwest::Client,
    base_url: String,
    credentials: SheetsCredentials,
}

impl SheetsClient {
    pub fn new(base_url: impl Into<String>, credentials: SheetsCredentials) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            credentials,
        }
    }

    /// Récupère les lignes d'un range
    #[instrument(skip(self), fields(spreadsheet = %self.credentials.spreadsheet_id))]
    pub async fn fetch_values(&self, range: &str) -> Result<Vec<SheetRow>, UpstreamError> {
        let url = build_values_url(
            &self.base_url,
            &self.credentials.spreadsheet_id,
            range,
            &self.credentials.api_key,
        );

        debug!("Sending HTTP request to Google Sheets");
        let response = self.http.get(&url).send().await?;

        let status = response.status();
        debug!(status = %status, "Received HTTP response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, "Google Sheets returned error status");
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ValueRangeResponse = response.json().await?;
        let rows: Vec<SheetRow> = parsed
            .values
            .unwrap_or_default()
            .into_iter()
            .map(|row| row.into_iter().map(cell_to_string).collect())
            .collect();

        info!(rows = rows.len(), "Successfully fetched sheet values");
        Ok(rows)
    }
}

/// Construit l'URL values.get
///
/// Le range contient des espaces et un '!' ("Form responses 3!A1:K1000") :
/// il est encodé comme un segment de chemin.
pub fn build_values_url(base: &str, spreadsheet_id: &str, range: &str, api_key: &str) -> String {
    format!(
        "{}/v4/spreadsheets/{}/values/{}?key={}",
        base.trim_end_matches('/'),
        spreadsheet_id,
        urlencoding::encode(range),
        urlencoding::encode(api_key)
    )
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_values_url() {
        let url = build_values_url(
            "https://sheets.googleapis.com/",
            "abc123",
            "Form responses 3!A1:K1000",
            "KEY",
        );
        assert_eq!(
            url,
            "https://sheets.googleapis.com/v4/spreadsheets/abc123/values/Form%20responses%203%21A1%3AK1000?key=KEY"
        );
    }

    #[test]
    fn test_status_error_message() {
        let err = UpstreamError::Status {
            status: 403,
            body: "forbidden".to_string(),
        };
        assert_eq!(err.to_string(), "Sheets API error: 403 forbidden");
    }

    #[tokio::test]
    async fn test_network_error_hides_api_key() {
        // Port libéré juste après le bind : la connexion est refusée
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = SheetsClient::new(
            format!("http://{addr}"),
            SheetsCredentials {
                api_key: "s3cr3t-key".to_string(),
                spreadsheet_id: "abc123".to_string(),
            },
        );

        let err = client.fetch_values("Sheet1!A1:B2").await.unwrap_err();
        assert!(matches!(err, UpstreamError::Request(_)));

        let message = err.to_string();
        assert!(!message.trim().is_empty());
        assert!(!message.contains("s3cr3t-key"));
        assert!(!format!("{err:?}").contains("s3cr3t-key"));
    }

    #[test]
    fn test_missing_values_field() {
        let parsed: ValueRangeResponse =
            serde_json::from_str(r#"{"range":"Sheet1!A1:B2","majorDimension":"ROWS"}"#).unwrap();
        assert!(parsed.values.is_none());
    }
}
