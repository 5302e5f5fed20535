// ============================================================================
// API Client : proxy SnappQuest (/api/sheets)
// ============================================================================
// Côté client : récupère les lignes de la feuille via notre propre proxy.
// Le client ne connaît ni la clé API ni l'identifiant de la feuille.
//
// CONCEPTS RUST :
// 1. async/await : appel réseau non-bloquant
// 2. anyhow::Context : messages d'erreur enrichis
// 3. #[instrument] : span tracing avec le range demandé
// ============================================================================

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, error, info, instrument};

use crate::models::SheetRow;

/// Réponse du proxy, "values" absent ou null -> aucune ligne
#[derive(Debug, Deserialize)]
struct ProxyResponse {
    values: Option<Vec<SheetRow>>,
}

/// Client HTTP du proxy
#[derive(Debug, Clone)]
pub struct ProxyClient {
    http: reqwest::Client,
    base_url: String,
}

impl ProxyClient {
    /// Crée un client pour un proxy donné (ex: "http://127.0.0.1:3000")
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// URL de l'endpoint /api/sheets
    pub fn endpoint(&self) -> String {
        format!("{}/api/sheets", self.base_url)
    }

    /// Récupère les lignes d'un range (en-tête compris)
    ///
    /// CONCEPT RUST : Result<T>
    /// - Statut non-2xx -> Err("Sheets API error: <status>")
    /// - Pas de retry : l'erreur remonte directement à l'UI
    #[instrument(skip(self))]
    pub async fn fetch_sheet(&self, range: &str) -> Result<Vec<SheetRow>> {
        let url = self.endpoint();
        debug!(url = %url, "Sending HTTP request to sheets proxy");

        let response = self
            .http
            .get(&url)
            .query(&[("range", range)])
            .send()
            .await
            .context("Échec de la requête HTTP vers le proxy")?;

        let status = response.status();
        debug!(status = %status, "Received HTTP response");

        if !status.is_success() {
            error!(status = %status, "Sheets proxy returned error status");
            anyhow::bail!("Sheets API error: {}", status.as_u16());
        }

        let parsed: ProxyResponse = response
            .json()
            .await
            .context("Échec du parsing JSON de la réponse du proxy")?;

        let rows = parsed.values.unwrap_or_default();
        info!(rows = rows.len(), "Successfully fetched sheet rows");
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint() {
        let client = ProxyClient::new("http://localhost:3000/");
        assert_eq!(client.endpoint(), "http://localhost:3000/api/sheets");
    }

    #[test]
    fn test_null_values_parse_as_empty() {
        let parsed: ProxyResponse = serde_json::from_str(r#"{"values":null}"#).unwrap();
        assert!(parsed.values.unwrap_or_default().is_empty());

        let parsed: ProxyResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.values.is_none());
    }
}
