// ============================================================================
// Structures : Quest / Task
// ============================================================================
// Une quête sponsorisée = une liste de tâches + une récompense.
//
// CONCEPTS RUST :
// 1. Composition : Quest contient Vec<Task>
// 2. DateTime<Utc> (chrono) pour la date de création
// 3. Serde : sérialisable pour un futur backend de persistance
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Currency;

/// Tâche à accomplir dans une quête
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,

    /// Lien externe (profil X, groupe Telegram, ...)
    pub link: Option<String>,

    pub completed: bool,
}

/// Quête avec ses tâches et sa récompense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    pub id: u32,
    pub title: String,
    pub sponsor: String,
    pub description: String,
    pub reward: f64,
    pub reward_currency: Currency,
    pub created_at: DateTime<Utc>,
    pub tasks: Vec<Task>,
    pub completed: bool,
}

impl Quest {
    /// Fraction des tâches complétées, entre 0.0 et 1.0
    ///
    /// Une quête sans tâche compte comme complète si elle est marquée comme telle.
    pub fn progress(&self) -> f64 {
        if self.tasks.is_empty() {
            return if self.completed { 1.0 } else { 0.0 };
        }
        let done = self.tasks.iter().filter(|t| t.completed).count();
        done as f64 / self.tasks.len() as f64
    }

    /// Récompense formatée dans la devise de la quête
    pub fn reward_label(&self) -> String {
        self.reward_currency.format(self.reward)
    }

    /// Texte partageable résumant la quête
    ///
    /// Format :
    /// ```text
    /// Quest: <titre>
    /// Description: <description>
    /// Reward: <montant>
    /// Tasks:
    ///   1. <titre> - <description>
    /// ```
    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!("Quest: {}", self.title),
            format!("Description: {}", self.description),
            format!("Reward: {}", self.reward_label()),
            "Tasks:".to_string(),
        ];
        lines.extend(
            self.tasks
                .iter()
                .enumerate()
                .map(|(i, t)| format!("  {}. {} - {}", i + 1, t.title, t.description)),
        );
        lines.join("\n")
    }
}

/// Brouillon de tâche saisi par un créateur de quête
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub link: Option<String>,
}

/// Brouillon de quête avant validation par le repository
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestDraft {
    pub title: String,
    pub sponsor: String,
    pub description: String,
    pub reward: f64,
    pub reward_currency: Currency,
    pub tasks: Vec<TaskDraft>,
}
