// ============================================================================
// Module : quests
// ============================================================================
// Quêtes sponsorisées côté profil utilisateur :
// - repository : stockage des quêtes (trait + implémentation en mémoire)
// - pagination : découpage des listes en pages de QUESTS_PER_PAGE
// - ProfileStats : compteurs affichés en tête du profil
// ============================================================================

pub mod pagination;
pub mod repository;

pub use pagination::{page_count, paginate, QUESTS_PER_PAGE};
pub use repository::{InMemoryQuestRepository, QuestError, QuestRepository};

use crate::models::{Currency, Quest};

/// Statistiques du profil calculées à partir des quêtes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProfileStats {
    pub total_quests: usize,
    pub completed_quests: usize,

    /// Somme des récompenses NGN des quêtes complétées
    pub total_earnings: f64,
}

impl ProfileStats {
    pub fn from_quests(quests: &[Quest]) -> Self {
        let completed: Vec<&Quest> = quests.iter().filter(|q| q.completed).collect();

        Self {
            total_quests: quests.len(),
            completed_quests: completed.len(),
            total_earnings: completed
                .iter()
                .filter(|q| q.reward_currency == Currency::Ngn)
                .map(|q| q.reward)
                .sum(),
        }
    }
}

/// Quêtes encore disponibles, dans l'ordre du repository
pub fn available_quests(quests: &[Quest]) -> Vec<&Quest> {
    quests.iter().filter(|q| !q.completed).collect()
}

/// Quêtes déjà complétées, dans l'ordre du repository
pub fn completed_quests(quests: &[Quest]) -> Vec<&Quest> {
    quests.iter().filter(|q| q.completed).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_stats_from_seed() {
        let repo = InMemoryQuestRepository::with_sample_quests();
        let stats = ProfileStats::from_quests(repo.list());

        assert_eq!(stats.total_quests, 3);
        assert_eq!(stats.completed_quests, 2);
        assert_eq!(stats.total_earnings, 800.0);
    }

    #[test]
    fn test_profile_stats_ignores_usdc_rewards() {
        let mut repo = InMemoryQuestRepository::with_sample_quests();
        let mut quest = repo.list()[2].clone();
        quest.reward_currency = Currency::Usdc;
        quest.completed = true;

        let mut quests = repo.list().to_vec();
        quests[2] = quest;
        let stats = ProfileStats::from_quests(&quests);
        assert_eq!(stats.completed_quests, 3);
        assert_eq!(stats.total_earnings, 800.0);

        // Même quête en NGN : comptée
        assert!(repo.complete(3).is_ok());
        assert_eq!(ProfileStats::from_quests(repo.list()).total_earnings, 1550.0);
    }

    #[test]
    fn test_available_and_completed_split() {
        let repo = InMemoryQuestRepository::with_sample_quests();
        let available: Vec<u32> = available_quests(repo.list()).iter().map(|q| q.id).collect();
        let completed: Vec<u32> = completed_quests(repo.list()).iter().map(|q| q.id).collect();

        assert_eq!(available, vec![3]);
        assert_eq!(completed, vec![1, 2]);
    }

    #[test]
    fn test_empty_profile() {
        assert_eq!(ProfileStats::from_quests(&[]), ProfileStats::default());
    }
}
