// ============================================================================
// SnappQuest - Library
// ============================================================================
// Expose les modules publics pour les binaires et les tests d'intégration
// ============================================================================

pub mod config;    // Configuration (env, .env, défauts)
pub mod api;       // Clients HTTP (Google Sheets, proxy)
pub mod models;    // Structures de données
pub mod resolver;  // Résolution des colonnes, recherche de solde, classement
pub mod service;   // Fetch + résolution pour le TUI
pub mod quests;    // Quêtes et profil
pub mod server;    // Proxy HTTP /api/sheets
pub mod app;       // État de l'application
pub mod ui;        // Interface utilisateur
