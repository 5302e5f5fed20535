// ============================================================================
// Module : ui
// ============================================================================
// Gère toute l'interface utilisateur (Terminal User Interface)
// ============================================================================

pub mod events;      // Gestion des événements clavier
pub mod dashboard;   // Cadre commun : onglets, footer, mode input
pub mod leaderboard; // Tableau du classement
pub mod balance;     // Cartes du solde
pub mod quests;      // Profil et quêtes

// Re-exports pour simplifier les imports
pub use events::{Event, EventHandler};
pub use dashboard::render;
