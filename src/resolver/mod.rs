// ============================================================================
// Module : resolver
// ============================================================================
// Transforme les lignes brutes de la feuille en valeurs exploitables :
// - columns : retrouve les colonnes par nom (avec heuristiques)
// - numeric : extrait les nombres du texte libre
// - matcher : recherche de solde d'un utilisateur
// - ranker  : classement par gains
// ============================================================================

use thiserror::Error;

pub mod columns;
pub mod matcher;
pub mod numeric;
pub mod ranker;

pub use columns::{BalanceColumns, LeaderboardColumns};
pub use matcher::lookup_balance;
pub use numeric::parse_numeric;
pub use ranker::rank_leaderboard;

/// Conditions "métier" de la recherche de solde
///
/// Ce ne sont pas des pannes : l'UI les affiche telles quelles à l'utilisateur.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("No data returned from sheet")]
    NoData,

    #[error("User not found. Please check the username and try again.")]
    UserNotFound,
}
