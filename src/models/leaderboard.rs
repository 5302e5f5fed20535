// ============================================================================
// Structures : Leaderboard / LeaderboardEntry
// ============================================================================
// Classement trié par gains décroissants.
// Le rang est purement positionnel : rank = index + 1.
// ============================================================================

use crate::models::SheetRow;

/// Une ligne du classement
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    /// Rang (1-based)
    pub rank: usize,

    /// Nom affiché ("Unknown" si la cellule est vide)
    pub name: String,

    pub earnings: f64,
    pub completed: f64,

    pub row: SheetRow,
}

/// Classement complet avec les colonnes résolues
#[derive(Debug, Clone, PartialEq)]
pub struct Leaderboard {
    pub headers: SheetRow,
    pub entries: Vec<LeaderboardEntry>,

    pub identity_column: usize,
    pub earnings_column: usize,
    pub completed_column: Option<usize>,
}

impl Leaderboard {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Retourne l'entrée à une position donnée
    pub fn get(&self, index: usize) -> Option<&LeaderboardEntry> {
        self.entries.get(index)
    }
}
