// ============================================================================
// Repository de quêtes
// ============================================================================
// CONCEPT RUST : Trait comme point d'extension
// - QuestRepository décrit les opérations (list, get, create, complete)
// - InMemoryQuestRepository est l'implémentation actuelle (données d'exemple)
// - Un backend persistant pourra implémenter le même trait plus tard
// ============================================================================

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::{Currency, Quest, QuestDraft, Task};

#[derive(Debug, Error, PartialEq)]
pub enum QuestError {
    #[error("Quest {0} not found")]
    NotFound(u32),

    #[error("Quest {0} is already completed")]
    AlreadyCompleted(u32),

    #[error("Quest title is required")]
    EmptyTitle,

    #[error("A quest needs at least one task")]
    NoTasks,
}

pub trait QuestRepository {
    /// Toutes les quêtes, dans l'ordre de création
    fn list(&self) -> &[Quest];

    fn get(&self, id: u32) -> Option<&Quest>;

    /// Valide le brouillon et enregistre la quête
    fn create(&mut self, draft: QuestDraft) -> Result<Quest, QuestError>;

    /// Marque la quête (et ses tâches) comme complétée
    ///
    /// Retourne le message de félicitations affiché à l'utilisateur.
    fn complete(&mut self, id: u32) -> Result<String, QuestError>;
}

/// Repository en mémoire, perdu à la fermeture de l'application
#[derive(Debug, Clone, Default)]
pub struct InMemoryQuestRepository {
    quests: Vec<Quest>,
    next_id: u32,
}

impl InMemoryQuestRepository {
    pub fn new() -> Self {
        Self {
            quests: Vec::new(),
            next_id: 1,
        }
    }

    /// Repository pré-rempli avec les trois quêtes d'exemple du profil
    pub fn with_sample_quests() -> Self {
        let mut repo = Self::new();

        let samples = [
            (
                "Promote Solana DeFi Project",
                "SolanaDeFi Inc.",
                "Spread the word about SolanaDeFi on X",
                500.0,
                true,
                vec![
                    ("Follow @SolanaDeFi on X", Some("https://x.com/SolanaDeFi")),
                    ("Like and retweet the latest announcement", Some("https://x.com/SolanaDeFi/status/123456")),
                    ("Comment with your thoughts on DeFi", Some("https://x.com/SolanaDeFi/status/123456")),
                ],
            ),
            (
                "Join NFT Community Engagement",
                "NFTCollective",
                "Get involved with the NFTCollective community",
                300.0,
                true,
                vec![
                    ("Join the Telegram group", Some("https://t.me/NFTCollective")),
                    ("Mint a free NFT", Some("https://nftcollective.io/mint")),
                    ("Share your minted NFT on X", Some("https://x.com/NFTCollective")),
                ],
            ),
            (
                "Test New Wallet Feature",
                "Phantom Wallet",
                "Try out the new Phantom wallet onboarding",
                750.0,
                false,
                vec![
                    ("Download Phantom Wallet", Some("https://phantom.app")),
                    ("Create a new wallet", Some("https://phantom.app")),
                    ("Complete KYC verification", Some("https://phantom.app/kyc")),
                ],
            ),
        ];

        for (title, sponsor, description, reward, completed, tasks) in samples {
            let id = repo.allocate_id();
            repo.quests.push(Quest {
                id,
                title: title.to_string(),
                sponsor: sponsor.to_string(),
                description: description.to_string(),
                reward,
                reward_currency: Currency::Ngn,
                created_at: Utc::now(),
                tasks: tasks
                    .into_iter()
                    .enumerate()
                    .map(|(i, (task, link))| Task {
                        id: format!("{}-{}", id, i + 1),
                        title: task.to_string(),
                        description: task.to_string(),
                        link: link.map(str::to_string),
                        completed,
                    })
                    .collect(),
                completed,
            });
        }

        repo
    }

    fn allocate_id(&mut self) -> u32 {
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        id
    }
}

impl QuestRepository for InMemoryQuestRepository {
    fn list(&self) -> &[Quest] {
        &self.quests
    }

    fn get(&self, id: u32) -> Option<&Quest> {
        self.quests.iter().find(|q| q.id == id)
    }

    fn create(&mut self, draft: QuestDraft) -> Result<Quest, QuestError> {
        let title = draft.title.trim();
        if title.is_empty() {
            warn!("Quest creation rejected: empty title");
            return Err(QuestError::EmptyTitle);
        }

        // Les tâches sans titre sont ignorées
        let tasks: Vec<_> = draft
            .tasks
            .into_iter()
            .filter(|t| !t.title.trim().is_empty())
            .collect();
        if tasks.is_empty() {
            warn!(title, "Quest creation rejected: no tasks");
            return Err(QuestError::NoTasks);
        }

        let id = self.allocate_id();
        let quest = Quest {
            id,
            title: title.to_string(),
            sponsor: draft.sponsor.trim().to_string(),
            description: draft.description.trim().to_string(),
            reward: draft.reward,
            reward_currency: draft.reward_currency,
            created_at: Utc::now(),
            tasks: tasks
                .into_iter()
                .enumerate()
                .map(|(i, t)| Task {
                    id: format!("{}-{}", id, i + 1),
                    title: t.title.trim().to_string(),
                    description: t.description.trim().to_string(),
                    link: t.link.map(|l| l.trim().to_string()).filter(|l| !l.is_empty()),
                    completed: false,
                })
                .collect(),
            completed: false,
        };

        info!(id, title = %quest.title, tasks = quest.tasks.len(), "Quest created");
        self.quests.push(quest.clone());
        Ok(quest)
    }

    fn complete(&mut self, id: u32) -> Result<String, QuestError> {
        let quest = self
            .quests
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or(QuestError::NotFound(id))?;

        if quest.completed {
            debug!(id, "Quest already completed");
            return Err(QuestError::AlreadyCompleted(id));
        }

        quest.completed = true;
        for task in &mut quest.tasks {
            task.completed = true;
        }

        info!(id, title = %quest.title, "Quest completed");
        Ok(format!(
            "Congratulations! You have completed \"{}\" and earned {}.",
            quest.title,
            quest.reward_label()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskDraft;

    fn draft(title: &str, tasks: &[&str]) -> QuestDraft {
        QuestDraft {
            title: title.to_string(),
            sponsor: " Acme ".to_string(),
            description: "Do things".to_string(),
            reward: 1200.0,
            reward_currency: Currency::Ngn,
            tasks: tasks
                .iter()
                .map(|t| TaskDraft {
                    title: t.to_string(),
                    description: format!("{t} now"),
                    link: None,
                })
                .collect(),
        }
    }

    #[test]
    fn test_sample_quests() {
        let repo = InMemoryQuestRepository::with_sample_quests();
        let quests = repo.list();

        assert_eq!(quests.len(), 3);
        assert_eq!(quests[0].title, "Promote Solana DeFi Project");
        assert_eq!(quests[0].reward_label(), "₦500");
        assert_eq!(quests[2].sponsor, "Phantom Wallet");
        assert!(!quests[2].completed);
        assert_eq!(quests[2].tasks[0].id, "3-1");
        assert_eq!(quests[2].progress(), 0.0);
        assert_eq!(quests[1].progress(), 1.0);
    }

    #[test]
    fn test_get() {
        let repo = InMemoryQuestRepository::with_sample_quests();
        assert_eq!(repo.get(2).map(|q| q.sponsor.as_str()), Some("NFTCollective"));
        assert!(repo.get(42).is_none());
    }

    #[test]
    fn test_complete_returns_message() {
        let mut repo = InMemoryQuestRepository::with_sample_quests();

        let message = repo.complete(3).unwrap();
        assert_eq!(
            message,
            "Congratulations! You have completed \"Test New Wallet Feature\" and earned ₦750."
        );

        let quest = repo.get(3).unwrap();
        assert!(quest.completed);
        assert!(quest.tasks.iter().all(|t| t.completed));
    }

    #[test]
    fn test_complete_errors() {
        let mut repo = InMemoryQuestRepository::with_sample_quests();
        assert_eq!(repo.complete(1), Err(QuestError::AlreadyCompleted(1)));
        assert_eq!(repo.complete(99), Err(QuestError::NotFound(99)));
    }

    #[test]
    fn test_create_assigns_ids_and_trims() {
        let mut repo = InMemoryQuestRepository::with_sample_quests();

        let quest = repo.create(draft("  Launch party ", &["Follow", "", "Share"])).unwrap();
        assert_eq!(quest.id, 4);
        assert_eq!(quest.title, "Launch party");
        assert_eq!(quest.sponsor, "Acme");
        assert_eq!(quest.tasks.len(), 2);
        assert_eq!(quest.tasks[1].id, "4-2");
        assert_eq!(quest.tasks[1].title, "Share");
        assert_eq!(repo.list().len(), 4);
    }

    #[test]
    fn test_create_validation() {
        let mut repo = InMemoryQuestRepository::new();

        assert_eq!(repo.create(draft("   ", &["Follow"])), Err(QuestError::EmptyTitle));
        assert_eq!(repo.create(draft("Quest", &[])), Err(QuestError::NoTasks));
        assert_eq!(repo.create(draft("Quest", &["  "])), Err(QuestError::NoTasks));
        assert!(repo.list().is_empty());

        let quest = repo.create(draft("Quest", &["Follow"])).unwrap();
        assert_eq!(quest.id, 1);
    }
}
