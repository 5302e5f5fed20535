// ============================================================================
// Résolution des colonnes
// ============================================================================
// Retrouve l'index d'une colonne dans l'en-tête à partir de son nom.
//
// Ordre de résolution (best effort, pas de garantie de justesse) :
// 1. Égalité exacte (trim + minuscules) avec un des noms candidats, par priorité
// 2. Heuristique par sous-chaînes (mots obligatoires / mots interdits)
// 3. Position fixe (colonne identité uniquement), en évitant un horodatage
//
// Si plusieurs en-têtes satisfont la même règle, le premier gagne.
// ============================================================================

use crate::config::ColumnConfig;

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Index de la première colonne dont le nom est égal à `name`
pub fn find_column_index(headers: &[String], name: &str) -> Option<usize> {
    let target = normalize(name);
    headers.iter().position(|h| normalize(h) == target)
}

/// Essaie chaque nom candidat dans l'ordre, retourne le premier trouvé
pub fn find_first_existing_index<S: AsRef<str>>(headers: &[String], names: &[S]) -> Option<usize> {
    names
        .iter()
        .find_map(|name| find_column_index(headers, name.as_ref()))
}

/// Première colonne contenant tous les mots de `must_include` et aucun de `must_not_include`
///
/// CONCEPT RUST : Iterator adapters
/// - .any() / .all() court-circuitent dès que le résultat est connu
pub fn find_by_includes(
    headers: &[String],
    must_include: &[&str],
    must_not_include: &[&str],
) -> Option<usize> {
    headers.iter().position(|h| {
        let h = h.to_lowercase();
        !must_not_include.iter().any(|w| h.contains(&w.to_lowercase()))
            && must_include.iter().all(|w| h.contains(&w.to_lowercase()))
    })
}

/// Colonne identité du leaderboard (nom du participant)
///
/// Ne renvoie jamais None : en dernier recours on prend la colonne 0,
/// ou la colonne 1 si la première ressemble à un horodatage.
pub fn resolve_identity_column(headers: &[String], columns: &ColumnConfig) -> usize {
    let candidates = [
        columns.name.as_str(),
        columns.username.as_str(),
        "Name",
        "Username",
    ];

    find_first_existing_index(headers, &candidates)
        .or_else(|| find_by_includes(headers, &["name"], &[]))
        .or_else(|| find_by_includes(headers, &["user"], &[]))
        .unwrap_or_else(|| {
            let first_is_timestamp = headers
                .first()
                .map(|h| h.to_lowercase().contains("time"))
                .unwrap_or(false);
            if headers.len() > 1 && first_is_timestamp {
                1
            } else {
                0
            }
        })
}

/// Colonne "quêtes complétées" du leaderboard
pub fn resolve_completed_column(headers: &[String], columns: &ColumnConfig) -> Option<usize> {
    let candidates = [
        columns.leaderboard_completed.as_str(),
        "Completed Quests",
        "Total Quests Completed",
    ];

    find_first_existing_index(headers, &candidates)
        .or_else(|| find_by_includes(headers, &["quest", "complet"], &[]))
}

/// Colonnes utilisées par la recherche de solde (noms exacts uniquement)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceColumns {
    pub username: Option<usize>,
    pub balance: Option<usize>,
    pub earnings: Option<usize>,
    pub completed: Option<usize>,
}

impl BalanceColumns {
    pub fn resolve(headers: &[String], columns: &ColumnConfig) -> Self {
        Self {
            username: find_column_index(headers, &columns.username),
            balance: find_column_index(headers, &columns.balance),
            earnings: find_column_index(headers, &columns.earnings),
            completed: find_column_index(headers, &columns.completed),
        }
    }
}

/// Colonnes utilisées par le leaderboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaderboardColumns {
    pub identity: usize,

    /// Colonne 0 si le nom configuré est introuvable
    pub earnings: usize,

    pub completed: Option<usize>,
}

impl LeaderboardColumns {
    pub fn resolve(headers: &[String], columns: &ColumnConfig) -> Self {
        Self {
            identity: resolve_identity_column(headers, columns),
            earnings: find_column_index(headers, &columns.earnings).unwrap_or(0),
            completed: resolve_completed_column(headers, columns),
        }
    }
}
