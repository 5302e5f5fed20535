// ============================================================================
// Gestion des événements
// ============================================================================
// Lit le clavier (crossterm) et traduit les touches en actions.
//
// - Hors saisie : une touche -> une Action (quitter, onglet, quêtes...)
// - En saisie   : une touche -> une InputAction (valider, annuler, éditer)
//
// La boucle principale ne connaît que ces deux enums, jamais les KeyCode.
// ============================================================================

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind};

/// Événements de l'application
#[derive(Debug, Clone)]
pub enum Event {
    /// Touche pressée
    Key(KeyEvent),

    /// Aucun événement pendant le délai de poll
    Tick,
}

/// Lecture du clavier avec un délai maximal par appel
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::with_tick_rate(Duration::from_millis(250))
    }

    pub fn with_tick_rate(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Attend au plus `tick_rate` ; Tick si rien n'arrive
    ///
    /// Seuls les appuis sont transmis : certains terminaux envoient aussi
    /// Release et Repeat, ce qui doublerait chaque action.
    pub fn next(&self) -> Result<Event> {
        if !event::poll(self.tick_rate)? {
            return Ok(Event::Tick);
        }

        Ok(match event::read()? {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Event::Key(key),
            _ => Event::Tick,
        })
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Actions hors saisie
// ============================================================================

/// Action déclenchée par une touche en dehors du mode input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// q : demande (puis confirme) la sortie
    Quit,
    /// Esc / Espace : ferme le message de quête
    Dismiss,
    /// Tab
    NextScreen,
    /// b ou / : saisir un username
    SearchBalance,
    /// r : recharger le classement ou le dernier solde
    Reload,
    Up,
    Down,
    /// c : compléter la quête sélectionnée
    CompleteQuest,
    /// n : créer une quête
    NewQuest,
    /// s : afficher le résumé partageable de la quête sélectionnée
    ShowSummary,
    /// ← / h et → / l : pages des quêtes disponibles
    PreviousPage,
    NextPage,
    /// [ et ] : pages des quêtes complétées
    PreviousCompletedPage,
    NextCompletedPage,
}

/// Traduit une touche en action (None : touche sans effet)
pub fn action_for(event: &Event) -> Option<Action> {
    let Event::Key(key) = event else {
        return None;
    };

    let action = match key.code {
        KeyCode::Char('q' | 'Q') => Action::Quit,
        KeyCode::Esc | KeyCode::Char(' ') => Action::Dismiss,
        KeyCode::Tab => Action::NextScreen,
        KeyCode::Char('b' | 'B' | '/') => Action::SearchBalance,
        KeyCode::Char('r' | 'R') => Action::Reload,
        KeyCode::Up | KeyCode::Char('k' | 'K') => Action::Up,
        KeyCode::Down | KeyCode::Char('j' | 'J') => Action::Down,
        KeyCode::Char('c' | 'C') => Action::CompleteQuest,
        KeyCode::Char('n' | 'N') => Action::NewQuest,
        KeyCode::Char('s' | 'S') => Action::ShowSummary,
        KeyCode::Left | KeyCode::Char('h') => Action::PreviousPage,
        KeyCode::Right | KeyCode::Char('l') => Action::NextPage,
        KeyCode::Char('[') => Action::PreviousCompletedPage,
        KeyCode::Char(']') => Action::NextCompletedPage,
        _ => return None,
    };
    Some(action)
}

// ============================================================================
// Édition en mode input
// ============================================================================

/// Action sur le buffer de saisie
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Submit,
    Cancel,
    Backspace,
    /// Caractère imprimable ; le champ courant décide s'il l'accepte
    Insert(char),
}

pub fn input_action_for(event: &Event) -> Option<InputAction> {
    let Event::Key(key) = event else {
        return None;
    };

    match key.code {
        KeyCode::Enter => Some(InputAction::Submit),
        KeyCode::Esc => Some(InputAction::Cancel),
        KeyCode::Backspace => Some(InputAction::Backspace),
        KeyCode::Char(c) if !c.is_control() => Some(InputAction::Insert(c)),
        _ => None,
    }
}
