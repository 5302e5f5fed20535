// ============================================================================
// Module : models
// ============================================================================
// Ce module contient toutes les structures de données de l'application
//
// CONCEPT RUST : Modules et visibilité
// - "pub mod" : déclare un sous-module publique (accessible depuis l'extérieur)
// - Sans "pub", le module serait privé au crate
// ============================================================================

pub mod sheet;       // Lignes brutes de la feuille et payloads JSON
pub mod balance;     // Résultat d'une recherche de solde
pub mod leaderboard; // Classement trié
pub mod currency;    // Devises (NGN, USDC) et formatage des montants
pub mod quest;       // Quêtes et tâches

// Re-export des structures principales pour simplifier les imports
// Au lieu de : use snappquest::models::sheet::SheetRow;
// On peut faire : use snappquest::models::SheetRow;
pub use sheet::{cell_to_string, SheetRow, SheetsErrorBody, SheetsValuesBody};
pub use balance::BalanceRecord;
pub use leaderboard::{Leaderboard, LeaderboardEntry};
pub use currency::{format_locale, Currency};
pub use quest::{Quest, QuestDraft, Task, TaskDraft};
