// ============================================================================
// Structure : App
// ============================================================================
// Gère l'état global de l'application TUI
//
// CONCEPTS RUST :
// 1. State Management : centraliser l'état dans une seule structure
// 2. Mutabilité contrôlée : &mut self pour modifier l'état
// 3. Trait object : Box<dyn QuestRepository + Send> pour le stockage des quêtes
//
// PATTERN : Cette structure suit le pattern "Application State"
// - Tous les composants de l'UI lisent depuis App
// - Toutes les modifications passent par les méthodes de App
// - Les résultats du worker sont appliqués dans l'ordre d'arrivée
//   (le dernier arrivé gagne)
// ============================================================================

use tracing::{debug, info};

use crate::models::{BalanceRecord, Currency, Leaderboard, Quest, QuestDraft, TaskDraft};
use crate::quests::{
    available_quests, completed_quests, page_count, paginate, InMemoryQuestRepository,
    ProfileStats, QuestError, QuestRepository, QUESTS_PER_PAGE,
};
use crate::resolver::parse_numeric;

// ============================================================================
// Enum : Screen
// ============================================================================
// CONCEPT RUST : Enums pour state machines
// - Un seul écran actif à la fois
// - Tab fait tourner Leaderboard -> Balance -> Quests -> Leaderboard
// ============================================================================

/// Écrans de l'application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Classement trié par gains (écran de démarrage)
    Leaderboard,

    /// Résultat de la dernière recherche de solde
    Balance,

    /// Profil : statistiques et quêtes disponibles / complétées
    Quests,

    /// Mode saisie du username
    /// CONCEPT : Modal input mode (Vim-like)
    /// - Enter valide, ESC annule
    InputMode,
}

impl Screen {
    /// Écran suivant dans le cycle Tab (InputMode n'en fait pas partie)
    pub fn next(&self) -> Screen {
        match self {
            Screen::Leaderboard => Screen::Balance,
            Screen::Balance => Screen::Quests,
            Screen::Quests => Screen::Leaderboard,
            Screen::InputMode => Screen::InputMode,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Leaderboard => "Leaderboard",
            Screen::Balance => "Balance",
            Screen::Quests => "Quests",
            Screen::InputMode => "Input",
        }
    }
}

// ============================================================================
// Enum : InputTarget
// ============================================================================
// Champ en cours de saisie. La création de quête enchaîne
// QuestTitle -> QuestSponsor -> QuestDescription -> QuestReward -> QuestTasks.
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputTarget {
    Username,
    QuestTitle,
    QuestSponsor,
    QuestDescription,
    QuestReward,
    QuestTasks,
}

impl InputTarget {
    pub fn prompt(&self) -> &'static str {
        match self {
            InputTarget::Username => "Username: ",
            InputTarget::QuestTitle => "Quest title: ",
            InputTarget::QuestSponsor => "Sponsor: ",
            InputTarget::QuestDescription => "Description: ",
            InputTarget::QuestReward => "Reward (e.g. 500 or 25 USDC): ",
            InputTarget::QuestTasks => "Tasks (separated by ;): ",
        }
    }

    /// Le username reste limité aux caractères d'un identifiant
    pub fn accepts(&self, c: char) -> bool {
        match self {
            InputTarget::Username => c.is_alphanumeric() || " -_.@".contains(c),
            _ => !c.is_control(),
        }
    }

    /// Étape suivante de la création de quête (None : fin)
    fn next_quest_step(&self) -> Option<InputTarget> {
        match self {
            InputTarget::QuestTitle => Some(InputTarget::QuestSponsor),
            InputTarget::QuestSponsor => Some(InputTarget::QuestDescription),
            InputTarget::QuestDescription => Some(InputTarget::QuestReward),
            InputTarget::QuestReward => Some(InputTarget::QuestTasks),
            InputTarget::QuestTasks | InputTarget::Username => None,
        }
    }
}

/// Lit une récompense saisie : "500", "₦1,200", "25 USDC"
///
/// Un montant illisible vaut 0, comme un champ laissé vide.
pub fn parse_reward(input: &str) -> (f64, Currency) {
    let currency = if input.to_uppercase().contains("USDC") {
        Currency::Usdc
    } else {
        Currency::Ngn
    };
    (parse_numeric(input).unwrap_or(0.0), currency)
}

/// Découpe "Follow us; Retweet" en brouillons de tâches
pub fn parse_tasks(input: &str) -> Vec<TaskDraft> {
    input
        .split(';')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| TaskDraft {
            title: t.to_string(),
            description: t.to_string(),
            link: None,
        })
        .collect()
}

/// État principal de l'application
pub struct App {
    /// Indique si l'application doit continuer à tourner
    pub running: bool,

    pub current_screen: Screen,

    /// Écran à restaurer en sortant du mode input
    pub previous_screen: Screen,

    /// Préfixe des montants (ex: "₦")
    pub currency_symbol: String,

    // --- Leaderboard ---
    /// None tant que rien n'est chargé, ou si la feuille est vide
    pub leaderboard: Option<Leaderboard>,
    pub leaderboard_error: Option<String>,
    pub leaderboard_index: usize,

    // --- Balance ---
    /// Username de la dernière recherche
    pub balance_query: Option<String>,
    pub balance: Option<BalanceRecord>,
    pub balance_error: Option<String>,

    // --- Quêtes ---
    quests: Box<dyn QuestRepository + Send>,

    /// Page courante des quêtes disponibles (1-based)
    pub quest_page: usize,

    /// Index de la quête sélectionnée dans la page courante
    pub quest_index: usize,

    /// Page courante des quêtes complétées (1-based)
    pub completed_page: usize,

    /// Message affiché sous les listes : félicitations, résumé ou erreur
    pub quest_message: Option<String>,

    /// Quête en cours de création (mode input)
    pub quest_draft: Option<QuestDraft>,

    /// Two-step quit
    /// - Première pression de 'q' : confirm_quit = true
    /// - Deuxième pression de 'q' : running = false (quit réel)
    /// - N'importe quelle autre touche : annulation
    pub confirm_quit: bool,

    pub is_loading: bool,
    pub loading_message: Option<String>,

    /// Buffer de saisie pour le mode Input
    pub input_buffer: String,

    /// Prompt affiché en mode Input (ex: "Username: ")
    pub input_prompt: String,

    /// Champ auquel est destiné le buffer
    pub input_target: InputTarget,
}

impl App {
    /// Crée une App avec les quêtes d'exemple et le symbole "₦"
    pub fn new() -> Self {
        Self::with_repository(
            Box::new(InMemoryQuestRepository::with_sample_quests()),
            crate::config::DEFAULT_CURRENCY_SYMBOL.to_string(),
        )
    }

    /// Crée une App avec un repository de quêtes et un symbole donnés
    ///
    /// CONCEPT RUST : Injection de dépendance par trait object
    pub fn with_repository(quests: Box<dyn QuestRepository + Send>, currency_symbol: String) -> Self {
        Self {
            running: true,
            current_screen: Screen::Leaderboard,
            previous_screen: Screen::Leaderboard,
            currency_symbol,
            leaderboard: None,
            leaderboard_error: None,
            leaderboard_index: 0,
            balance_query: None,
            balance: None,
            balance_error: None,
            quests,
            quest_page: 1,
            quest_index: 0,
            completed_page: 1,
            quest_message: None,
            quest_draft: None,
            confirm_quit: false,
            is_loading: false,
            loading_message: None,
            input_buffer: String::new(),
            input_prompt: String::new(),
            input_target: InputTarget::Username,
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Tick : appelé à chaque itération de la boucle (rien à animer pour l'instant)
    pub fn tick(&mut self) {}

    // ========================================================================
    // Navigation entre écrans
    // ========================================================================

    /// Tab : passe à l'écran suivant
    pub fn next_screen(&mut self) {
        self.current_screen = self.current_screen.next();
    }

    pub fn show_screen(&mut self, screen: Screen) {
        self.current_screen = screen;
    }

    pub fn is_on(&self, screen: Screen) -> bool {
        self.current_screen == screen
    }

    /// Navigue vers le haut dans la liste de l'écran courant
    ///
    /// CONCEPT RUST : Saturating arithmetic
    /// - saturating_sub() ne descend pas en dessous de 0
    pub fn navigate_up(&mut self) {
        match self.current_screen {
            Screen::Leaderboard => {
                self.leaderboard_index = self.leaderboard_index.saturating_sub(1);
            }
            Screen::Quests => {
                self.quest_index = self.quest_index.saturating_sub(1);
            }
            _ => {}
        }
    }

    /// Navigue vers le bas dans la liste de l'écran courant
    pub fn navigate_down(&mut self) {
        match self.current_screen {
            Screen::Leaderboard => {
                let len = self.leaderboard.as_ref().map(|l| l.len()).unwrap_or(0);
                self.leaderboard_index = (self.leaderboard_index + 1).min(len.saturating_sub(1));
            }
            Screen::Quests => {
                let len = self.visible_quests().len();
                self.quest_index = (self.quest_index + 1).min(len.saturating_sub(1));
            }
            _ => {}
        }
    }

    // ========================================================================
    // Two-step quit
    // ========================================================================

    pub fn request_quit(&mut self) {
        self.confirm_quit = true;
    }

    pub fn cancel_quit(&mut self) {
        self.confirm_quit = false;
    }

    pub fn is_awaiting_quit_confirmation(&self) -> bool {
        self.confirm_quit
    }

    // ========================================================================
    // Chargement
    // ========================================================================

    pub fn start_loading(&mut self, message: Option<String>) {
        self.is_loading = true;
        self.loading_message = message;
    }

    pub fn stop_loading(&mut self) {
        self.is_loading = false;
        self.loading_message = None;
    }

    pub fn is_loading_data(&self) -> bool {
        self.is_loading
    }

    // ========================================================================
    // Résultats du worker
    // ========================================================================

    /// Remplace le classement affiché
    pub fn set_leaderboard(&mut self, leaderboard: Option<Leaderboard>) {
        let len = leaderboard.as_ref().map(|l| l.len()).unwrap_or(0);
        self.leaderboard = leaderboard;
        self.leaderboard_error = None;
        self.leaderboard_index = self.leaderboard_index.min(len.saturating_sub(1));
    }

    /// Erreur de chargement : l'ancien classement est vidé
    pub fn set_leaderboard_error(&mut self, error: String) {
        self.leaderboard = None;
        self.leaderboard_error = Some(error);
        self.leaderboard_index = 0;
    }

    /// Prépare une recherche de solde (efface le résultat précédent)
    pub fn begin_balance_lookup(&mut self, username: &str) {
        self.balance_query = Some(username.to_string());
        self.balance = None;
        self.balance_error = None;
        self.current_screen = Screen::Balance;
    }

    pub fn set_balance(&mut self, record: BalanceRecord) {
        self.balance = Some(record);
        self.balance_error = None;
    }

    pub fn set_balance_error(&mut self, error: String) {
        self.balance = None;
        self.balance_error = Some(error);
    }

    // ========================================================================
    // Quêtes
    // ========================================================================

    pub fn quests(&self) -> &[Quest] {
        self.quests.list()
    }

    pub fn profile_stats(&self) -> ProfileStats {
        ProfileStats::from_quests(self.quests.list())
    }

    /// Nombre de pages de quêtes disponibles
    pub fn quest_page_count(&self) -> usize {
        page_count(available_quests(self.quests.list()).len(), QUESTS_PER_PAGE)
    }

    /// Quêtes disponibles de la page courante
    pub fn visible_quests(&self) -> Vec<&Quest> {
        let available = available_quests(self.quests.list());
        paginate(&available, self.quest_page, QUESTS_PER_PAGE).to_vec()
    }

    pub fn completed_quests(&self) -> Vec<&Quest> {
        completed_quests(self.quests.list())
    }

    pub fn completed_page_count(&self) -> usize {
        page_count(self.completed_quests().len(), QUESTS_PER_PAGE)
    }

    /// Quêtes complétées de la page courante
    pub fn visible_completed_quests(&self) -> Vec<&Quest> {
        let completed = self.completed_quests();
        paginate(&completed, self.completed_page, QUESTS_PER_PAGE).to_vec()
    }

    pub fn next_completed_page(&mut self) {
        if self.completed_page < self.completed_page_count() {
            self.completed_page += 1;
        }
    }

    pub fn previous_completed_page(&mut self) {
        self.completed_page = self.completed_page.saturating_sub(1).max(1);
    }

    pub fn selected_quest(&self) -> Option<&Quest> {
        self.visible_quests().get(self.quest_index).copied()
    }

    pub fn next_quest_page(&mut self) {
        if self.quest_page < self.quest_page_count() {
            self.quest_page += 1;
            self.quest_index = 0;
        }
    }

    pub fn previous_quest_page(&mut self) {
        if self.quest_page > 1 {
            self.quest_page -= 1;
            self.quest_index = 0;
        }
    }

    /// Complète la quête sélectionnée et stocke le message à afficher
    pub fn complete_selected_quest(&mut self) {
        let Some(id) = self.selected_quest().map(|q| q.id) else {
            return;
        };

        self.quest_message = Some(match self.quests.complete(id) {
            Ok(message) => message,
            Err(e) => e.to_string(),
        });

        // La quête quitte la liste des disponibles : on recale page et index
        self.quest_page = self.quest_page.min(self.quest_page_count());
        let len = self.visible_quests().len();
        self.quest_index = self.quest_index.min(len.saturating_sub(1));
    }

    pub fn dismiss_quest_message(&mut self) {
        self.quest_message = None;
    }

    /// Affiche le résumé partageable de la quête sélectionnée
    pub fn show_selected_summary(&mut self) {
        if let Some(summary) = self.selected_quest().map(Quest::summary) {
            self.quest_message = Some(summary);
        }
    }

    // ========================================================================
    // Création de quête
    // ========================================================================

    /// Démarre la saisie guidée d'une nouvelle quête
    pub fn start_quest_creation(&mut self) {
        self.quest_draft = Some(QuestDraft::default());
        self.quest_message = None;
        self.start_input(InputTarget::QuestTitle);
    }

    pub fn is_creating_quest(&self) -> bool {
        self.quest_draft.is_some()
    }

    /// Range la valeur saisie dans le brouillon et passe au champ suivant
    ///
    /// Après la dernière étape, la quête est créée et son résumé affiché.
    pub fn advance_quest_creation(&mut self, target: InputTarget, value: &str) {
        let Some(draft) = self.quest_draft.as_mut() else {
            return;
        };

        match target {
            InputTarget::QuestTitle => {
                if value.trim().is_empty() {
                    self.quest_draft = None;
                    self.quest_message = Some(QuestError::EmptyTitle.to_string());
                    return;
                }
                draft.title = value.to_string();
            }
            InputTarget::QuestSponsor => draft.sponsor = value.to_string(),
            InputTarget::QuestDescription => draft.description = value.to_string(),
            InputTarget::QuestReward => {
                let (reward, currency) = parse_reward(value);
                draft.reward = reward;
                draft.reward_currency = currency;
            }
            InputTarget::QuestTasks => draft.tasks = parse_tasks(value),
            InputTarget::Username => return,
        }

        match target.next_quest_step() {
            Some(next) => self.start_input(next),
            None => self.finish_quest_creation(),
        }
    }

    fn finish_quest_creation(&mut self) {
        let Some(draft) = self.quest_draft.take() else {
            return;
        };

        self.quest_message = Some(match self.quests.create(draft) {
            Ok(quest) => {
                info!(id = quest.id, title = %quest.title, "Quest created from the TUI");
                format!("Quest created!\n{}", quest.summary())
            }
            Err(e) => {
                debug!(error = %e, "Quest draft rejected");
                e.to_string()
            }
        });
        self.current_screen = Screen::Quests;
    }

    // ========================================================================
    // Input Mode Management
    // ========================================================================

    /// Entre en mode input pour un champ donné
    pub fn start_input(&mut self, target: InputTarget) {
        if self.current_screen != Screen::InputMode {
            self.previous_screen = self.current_screen;
        }
        self.current_screen = Screen::InputMode;
        self.input_buffer.clear();
        self.input_prompt = target.prompt().to_string();
        self.input_target = target;
    }

    /// Annule le mode input (et la quête en cours) puis retourne à l'écran précédent
    pub fn cancel_input(&mut self) {
        self.current_screen = self.previous_screen;
        self.input_buffer.clear();
        self.input_prompt.clear();
        self.quest_draft = None;
    }

    /// Récupère la valeur saisie et retourne à l'écran précédent
    pub fn submit_input(&mut self) -> String {
        let value = std::mem::take(&mut self.input_buffer);
        self.current_screen = self.previous_screen;
        self.input_prompt.clear();
        value
    }

    /// Ajoute un caractère si le champ courant l'accepte
    pub fn append_char(&mut self, c: char) {
        if self.input_target.accepts(c) {
            self.input_buffer.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.input_buffer.pop();
    }

    pub fn is_in_input_mode(&self) -> bool {
        self.current_screen == Screen::InputMode
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LeaderboardEntry;

    fn leaderboard(names: &[&str]) -> Leaderboard {
        Leaderboard {
            headers: vec!["Name".to_string(), "Total Earnings".to_string()],
            entries: names
                .iter()
                .enumerate()
                .map(|(i, name)| LeaderboardEntry {
                    rank: i + 1,
                    name: name.to_string(),
                    earnings: (100 * (names.len() - i)) as f64,
                    completed: 0.0,
                    row: vec![name.to_string()],
                })
                .collect(),
            identity_column: 0,
            earnings_column: 1,
            completed_column: None,
        }
    }

    #[test]
    fn test_app_creation() {
        let app = App::new();
        assert!(app.is_running());
        assert!(app.is_on(Screen::Leaderboard));
        assert!(app.leaderboard.is_none());
        assert_eq!(app.currency_symbol, "₦");
        assert_eq!(app.quests().len(), 3);
    }

    #[test]
    fn test_app_quit() {
        let mut app = App::new();
        app.request_quit();
        assert!(app.is_awaiting_quit_confirmation());
        app.cancel_quit();
        assert!(!app.is_awaiting_quit_confirmation());

        app.quit();
        assert!(!app.is_running());
    }

    #[test]
    fn test_screen_cycle() {
        let mut app = App::new();
        app.next_screen();
        assert!(app.is_on(Screen::Balance));
        app.next_screen();
        assert!(app.is_on(Screen::Quests));
        app.next_screen();
        assert!(app.is_on(Screen::Leaderboard));
    }

    #[test]
    fn test_leaderboard_navigation() {
        let mut app = App::new();
        app.set_leaderboard(Some(leaderboard(&["alice", "bob", "carol"])));

        app.navigate_down();
        app.navigate_down();
        app.navigate_down();
        assert_eq!(app.leaderboard_index, 2);

        app.navigate_up();
        assert_eq!(app.leaderboard_index, 1);

        // Un classement plus court recale la sélection
        app.set_leaderboard(Some(leaderboard(&["dave"])));
        assert_eq!(app.leaderboard_index, 0);
    }

    #[test]
    fn test_leaderboard_error_clears_data() {
        let mut app = App::new();
        app.set_leaderboard(Some(leaderboard(&["alice"])));
        app.set_leaderboard_error("Sheets API error: 500".to_string());

        assert!(app.leaderboard.is_none());
        assert_eq!(app.leaderboard_error.as_deref(), Some("Sheets API error: 500"));

        app.set_leaderboard(None);
        assert!(app.leaderboard_error.is_none());
    }

    #[test]
    fn test_balance_last_result_wins() {
        let mut app = App::new();
        app.begin_balance_lookup("alice");
        assert!(app.is_on(Screen::Balance));
        assert_eq!(app.balance_query.as_deref(), Some("alice"));

        app.set_balance_error("User not found. Please check the username and try again.".to_string());
        app.set_balance(BalanceRecord {
            balance: Some(250.0),
            earnings: None,
            completed: Some(3.0),
            row: vec![],
        });

        assert!(app.balance_error.is_none());
        assert_eq!(app.balance.as_ref().and_then(|b| b.balance), Some(250.0));

        app.set_balance_error("Sheets API error: 500".to_string());
        assert!(app.balance.is_none());
    }

    #[test]
    fn test_input_mode_returns_to_previous_screen() {
        let mut app = App::new();
        app.show_screen(Screen::Quests);

        app.start_input(InputTarget::Username);
        assert!(app.is_in_input_mode());
        app.append_char('b');
        app.append_char('o');
        app.append_char('x');
        app.backspace();
        app.append_char('#');
        app.append_char('b');
        assert_eq!(app.input_prompt, "Username: ");

        assert_eq!(app.submit_input(), "bob");
        assert!(app.is_on(Screen::Quests));
        assert!(app.input_buffer.is_empty());

        app.start_input(InputTarget::Username);
        app.append_char('z');
        app.cancel_input();
        assert!(app.is_on(Screen::Quests));
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn test_complete_selected_quest() {
        let mut app = App::new();
        app.show_screen(Screen::Quests);

        assert_eq!(app.visible_quests().len(), 1);
        assert_eq!(app.selected_quest().map(|q| q.id), Some(3));

        app.complete_selected_quest();
        assert_eq!(
            app.quest_message.as_deref(),
            Some("Congratulations! You have completed \"Test New Wallet Feature\" and earned ₦750.")
        );
        assert!(app.visible_quests().is_empty());
        assert_eq!(app.completed_quests().len(), 3);
        assert_eq!(app.profile_stats().total_earnings, 1550.0);

        // Plus rien à compléter
        app.dismiss_quest_message();
        app.complete_selected_quest();
        assert!(app.quest_message.is_none());
    }

    #[test]
    fn test_quest_pages() {
        use crate::models::{QuestDraft, TaskDraft};

        let mut repo = InMemoryQuestRepository::new();
        for i in 0..6 {
            repo.create(QuestDraft {
                title: format!("Quest {i}"),
                tasks: vec![TaskDraft {
                    title: "Follow".to_string(),
                    ..Default::default()
                }],
                ..Default::default()
            })
            .unwrap();
        }

        let mut app = App::with_repository(Box::new(repo), "$".to_string());
        app.show_screen(Screen::Quests);
        assert_eq!(app.quest_page_count(), 2);
        assert_eq!(app.visible_quests().len(), 4);

        app.navigate_down();
        app.next_quest_page();
        assert_eq!(app.quest_page, 2);
        assert_eq!(app.quest_index, 0);
        assert_eq!(app.visible_quests().len(), 2);

        app.next_quest_page();
        assert_eq!(app.quest_page, 2);

        app.previous_quest_page();
        app.previous_quest_page();
        assert_eq!(app.quest_page, 1);
    }

    #[test]
    fn test_completed_quest_pages() {
        let mut repo = InMemoryQuestRepository::new();
        for i in 0..5 {
            let quest = repo
                .create(QuestDraft {
                    title: format!("Quest {i}"),
                    tasks: parse_tasks("Follow"),
                    ..Default::default()
                })
                .unwrap();
            repo.complete(quest.id).unwrap();
        }

        let mut app = App::with_repository(Box::new(repo), "₦".to_string());
        assert_eq!(app.completed_page_count(), 2);
        assert_eq!(app.visible_completed_quests().len(), 4);

        app.next_completed_page();
        assert_eq!(app.completed_page, 2);
        let titles: Vec<&str> = app.visible_completed_quests().iter().map(|q| q.title.as_str()).collect();
        assert_eq!(titles, vec!["Quest 4"]);

        app.next_completed_page();
        assert_eq!(app.completed_page, 2);

        app.previous_completed_page();
        app.previous_completed_page();
        assert_eq!(app.completed_page, 1);
        // Les disponibles gardent leur propre page
        assert_eq!(app.quest_page, 1);
    }

    /// Saisit chaque champ comme le ferait la boucle d'événements
    fn type_and_submit(app: &mut App, value: &str) {
        for c in value.chars() {
            app.append_char(c);
        }
        let target = app.input_target;
        let value = app.submit_input();
        app.advance_quest_creation(target, &value);
    }

    #[test]
    fn test_create_quest_flow() {
        let mut app = App::new();
        app.show_screen(Screen::Quests);

        app.start_quest_creation();
        assert!(app.is_in_input_mode());
        assert_eq!(app.input_prompt, "Quest title: ");

        type_and_submit(&mut app, "Join Discord");
        assert_eq!(app.input_target, InputTarget::QuestSponsor);
        type_and_submit(&mut app, "Acme");
        type_and_submit(&mut app, "Say hi to the community");
        assert_eq!(app.input_prompt, "Reward (e.g. 500 or 25 USDC): ");
        type_and_submit(&mut app, "1,200");
        type_and_submit(&mut app, "Join the server; Say hi ;");

        assert!(!app.is_in_input_mode());
        assert!(!app.is_creating_quest());
        assert!(app.is_on(Screen::Quests));
        assert_eq!(app.quests().len(), 4);

        let quest = &app.quests()[3];
        assert_eq!(quest.title, "Join Discord");
        assert_eq!(quest.reward_label(), "₦1,200");
        assert_eq!(quest.tasks.len(), 2);
        assert_eq!(quest.progress(), 0.0);

        let message = app.quest_message.clone().unwrap();
        assert!(message.starts_with("Quest created!\nQuest: Join Discord"));
        assert!(message.contains("  2. Say hi - Say hi"));

        // Nouvelle quête disponible et sélectionnable
        assert_eq!(app.visible_quests().len(), 2);
    }

    #[test]
    fn test_create_quest_rejected() {
        let mut app = App::new();

        app.start_quest_creation();
        type_and_submit(&mut app, "   ");
        assert!(!app.is_in_input_mode());
        assert!(!app.is_creating_quest());
        assert_eq!(app.quest_message.as_deref(), Some("Quest title is required"));

        app.start_quest_creation();
        for value in ["Empty quest", "", "", "25 USDC", " ; "] {
            type_and_submit(&mut app, value);
        }
        assert_eq!(app.quest_message.as_deref(), Some("A quest needs at least one task"));
        assert_eq!(app.quests().len(), 3);
    }

    #[test]
    fn test_cancel_quest_creation() {
        let mut app = App::new();
        app.start_quest_creation();
        type_and_submit(&mut app, "Half done");
        app.cancel_input();

        assert!(!app.is_creating_quest());
        assert!(app.quest_message.is_none());
        assert_eq!(app.quests().len(), 3);
    }

    #[test]
    fn test_show_selected_summary() {
        let mut app = App::new();
        app.show_screen(Screen::Quests);
        app.show_selected_summary();

        let summary = app.quest_message.clone().unwrap();
        assert!(summary.starts_with("Quest: Test New Wallet Feature\n"));
        assert!(summary.contains("Reward: ₦750"));
        assert!(summary.contains("  3. Complete KYC verification - Complete KYC verification"));
    }

    #[test]
    fn test_parse_reward() {
        assert_eq!(parse_reward("₦1,200"), (1200.0, Currency::Ngn));
        assert_eq!(parse_reward("25 usdc"), (25.0, Currency::Usdc));
        assert_eq!(parse_reward("lots"), (0.0, Currency::Ngn));
    }
}
