// ============================================================================
// Classement (Leaderboard Ranker)
// ============================================================================
// Trie les lignes de données par gains décroissants.
//
// - Colonne des gains : nom exact, sinon colonne 0
// - Cellule non numérique : 0.0
// - Tri stable : à gains égaux, l'ordre de la feuille est conservé
// - Rang = position + 1
// ============================================================================

use tracing::{debug, instrument};

use crate::config::ColumnConfig;
use crate::models::{Leaderboard, LeaderboardEntry, SheetRow};
use crate::resolver::columns::LeaderboardColumns;
use crate::resolver::numeric::parse_cell_or_zero;

/// Nom affiché quand la cellule identité est vide ou absente
pub const UNKNOWN_NAME: &str = "Unknown";

/// Construit le classement, None si la feuille est vide
#[instrument(skip_all, fields(rows = rows.len()))]
pub fn rank_leaderboard(rows: &[SheetRow], columns: &ColumnConfig) -> Option<Leaderboard> {
    let (headers, data) = rows.split_first()?;
    let cols = LeaderboardColumns::resolve(headers, columns);
    debug!(?cols, "Resolved leaderboard columns");

    // CONCEPT RUST : sort_by est stable
    // - Les éléments égaux gardent leur ordre relatif
    // - total_cmp : ordre total sur f64 (les valeurs sont toujours finies ici)
    let mut sorted: Vec<(f64, &SheetRow)> = data
        .iter()
        .map(|row| (parse_cell_or_zero(row, cols.earnings), row))
        .collect();
    sorted.sort_by(|a, b| b.0.total_cmp(&a.0));

    let entries = sorted
        .into_iter()
        .enumerate()
        .map(|(index, (earnings, row))| {
            let name = row
                .get(cols.identity)
                .filter(|cell| !cell.is_empty())
                .cloned()
                .unwrap_or_else(|| UNKNOWN_NAME.to_string());
            let completed = cols
                .completed
                .map(|idx| parse_cell_or_zero(row, idx))
                .unwrap_or(0.0);

            LeaderboardEntry {
                rank: index + 1,
                name,
                earnings,
                completed,
                row: row.clone(),
            }
        })
        .collect();

    Some(Leaderboard {
        headers: headers.clone(),
        entries,
        identity_column: cols.identity,
        earnings_column: cols.earnings,
        completed_column: cols.completed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[&[&str]]) -> Vec<SheetRow> {
        data.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_sorted_by_earnings_descending() {
        let data = rows(&[
            &["Timestamp", "Name", "Total Earnings", "Total Quests Completed"],
            &["t1", "alice", "₦1,000", "3"],
            &["t2", "bob", "₦12,345.67", "9"],
            &["t3", "carol", "500", "1"],
        ]);
        let board = rank_leaderboard(&data, &ColumnConfig::default()).unwrap();

        let names: Vec<&str> = board.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["bob", "alice", "carol"]);
        assert_eq!(board.entries[0].earnings, 12345.67);
        assert_eq!(board.entries[0].completed, 9.0);

        for (i, entry) in board.entries.iter().enumerate() {
            assert_eq!(entry.rank, i + 1);
        }
        assert!(board
            .entries
            .windows(2)
            .all(|w| w[0].earnings >= w[1].earnings));
    }

    #[test]
    fn test_ties_keep_sheet_order() {
        let data = rows(&[
            &["Name", "Total Earnings"],
            &["first", "100"],
            &["top", "200"],
            &["second", "100"],
            &["third", "100"],
        ]);
        let board = rank_leaderboard(&data, &ColumnConfig::default()).unwrap();
        let names: Vec<&str> = board.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["top", "first", "second", "third"]);
    }

    #[test]
    fn test_invalid_earnings_count_as_zero() {
        let data = rows(&[
            &["Name", "Total Earnings"],
            &["nobody", "n/a"],
            &["someone", "5"],
            &["short"],
        ]);
        let board = rank_leaderboard(&data, &ColumnConfig::default()).unwrap();
        assert_eq!(board.entries[0].name, "someone");
        assert_eq!(board.entries[1].earnings, 0.0);
        assert_eq!(board.entries[2].earnings, 0.0);
    }

    #[test]
    fn test_missing_name_is_unknown_and_completed_defaults_to_zero() {
        let data = rows(&[&["Name", "Total Earnings"], &["", "10"]]);
        let board = rank_leaderboard(&data, &ColumnConfig::default()).unwrap();
        assert_eq!(board.entries[0].name, UNKNOWN_NAME);
        assert_eq!(board.entries[0].completed, 0.0);
        assert_eq!(board.completed_column, None);
    }

    #[test]
    fn test_unresolved_earnings_uses_column_zero() {
        let data = rows(&[
            &["Points", "Name"],
            &["3", "low"],
            &["30", "high"],
        ]);
        let board = rank_leaderboard(&data, &ColumnConfig::default()).unwrap();
        assert_eq!(board.earnings_column, 0);
        assert_eq!(board.entries[0].name, "high");
        assert_eq!(board.entries[0].earnings, 30.0);
    }

    #[test]
    fn test_empty_sheet() {
        assert!(rank_leaderboard(&[], &ColumnConfig::default()).is_none());

        let header_only = rows(&[&["Name", "Total Earnings"]]);
        let board = rank_leaderboard(&header_only, &ColumnConfig::default()).unwrap();
        assert!(board.is_empty());
    }
}
