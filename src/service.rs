// ============================================================================
// Service : fetch + résolution
// ============================================================================
// Enchaîne les étapes d'une action utilisateur :
// proxy -> lignes brutes -> résolution des colonnes -> matcher / ranker.
//
// Utilisé par le worker thread du TUI. Chaque appel refait un fetch complet
// (pas de cache).
// ============================================================================

use anyhow::Result;
use tracing::{info, instrument};

use crate::api::ProxyClient;
use crate::config::ColumnConfig;
use crate::models::{BalanceRecord, Leaderboard};
use crate::resolver::{lookup_balance, rank_leaderboard};

/// Récupère la feuille et construit le classement
///
/// `Ok(None)` si la feuille ne contient aucune ligne.
#[instrument(skip(client, columns))]
pub async fn load_leaderboard(
    client: &ProxyClient,
    range: &str,
    columns: &ColumnConfig,
) -> Result<Option<Leaderboard>> {
    let rows = client.fetch_sheet(range).await?;
    let leaderboard = rank_leaderboard(&rows, columns);

    info!(
        entries = leaderboard.as_ref().map(|l| l.len()).unwrap_or(0),
        "Leaderboard ranked"
    );
    Ok(leaderboard)
}

/// Récupère la feuille et cherche la ligne de l'utilisateur
///
/// Les erreurs de recherche (`LookupError`) remontent telles quelles,
/// leur message est affiché directement à l'utilisateur.
#[instrument(skip(client, columns))]
pub async fn check_balance(
    client: &ProxyClient,
    range: &str,
    identifier: &str,
    columns: &ColumnConfig,
) -> Result<BalanceRecord> {
    let rows = client.fetch_sheet(range).await?;
    let record = lookup_balance(&rows, identifier, columns)?;

    info!(
        balance = ?record.balance,
        earnings = ?record.earnings,
        completed = ?record.completed,
        "Balance record found"
    );
    Ok(record)
}
