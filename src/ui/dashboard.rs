// ============================================================================
// Dashboard - Cadre commun de l'interface
// ============================================================================
// Header (onglets), contenu de l'écran courant, footer (raccourcis ou saisie).
//
// CONCEPTS RATATUI :
// 1. Frame : surface de dessin
// 2. Layout : découpage de l'espace en zones
// 3. Tabs : barre d'onglets avec l'écran actif en surbrillance
// ============================================================================

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::app::{App, InputTarget, Screen};
use crate::ui::{balance, leaderboard, quests};

/// Écrans accessibles par Tab, dans l'ordre des onglets
const TABS: [Screen; 3] = [Screen::Leaderboard, Screen::Balance, Screen::Quests];

/// Dessine l'interface complète
///
/// CONCEPT RUST : Routing avec match sur enum
/// - Le compilateur garantit l'exhaustivité (tous les cas gérés)
/// - En mode input, l'écran précédent reste visible derrière la saisie
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = create_layout(frame.size());

    let content_screen = match app.current_screen {
        Screen::InputMode => app.previous_screen,
        screen => screen,
    };

    render_header(frame, content_screen, chunks[0]);

    match content_screen {
        Screen::Leaderboard => leaderboard::render_leaderboard(frame, app, chunks[1]),
        Screen::Balance => balance::render_balance(frame, app, chunks[1]),
        Screen::Quests => quests::render_quests(frame, app, chunks[1]),
        // previous_screen n'est jamais InputMode
        Screen::InputMode => {}
    }

    if app.is_in_input_mode() {
        render_input_footer(frame, app, chunks[2]);
    } else {
        render_footer(frame, app, chunks[2]);
    }
}

/// Crée le layout principal (header, content, footer)
fn create_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(5), // Footer (3 lignes + bordures)
        ])
        .split(area)
        .to_vec()
}

/// Dessine le header : titre + onglets
fn render_header(frame: &mut Frame, active: Screen, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" SnappQuest ")
        .title_alignment(Alignment::Center);

    let selected = TABS.iter().position(|s| *s == active).unwrap_or(0);

    let tabs = Tabs::new(TABS.iter().map(|s| s.title()).collect::<Vec<_>>())
        .block(block)
        .select(selected)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .divider("│");

    frame.render_widget(tabs, area);
}

/// Dessine le footer : statut + raccourcis de l'écran courant
fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let key = |k: &'static str| {
        Span::styled(k, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    };

    let status = if app.is_awaiting_quit_confirmation() {
        Line::from(vec![
            Span::styled(
                "⚠  Appuyez sur ",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "[q]",
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD)
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
            Span::styled(
                " à nouveau pour quitter, ou n'importe quelle autre touche pour annuler ⚠",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
        ])
    } else if app.is_loading_data() {
        Line::from(Span::styled(
            app.loading_message.clone().unwrap_or_else(|| "Loading...".to_string()),
            Style::default().fg(Color::Yellow),
        ))
    } else {
        Line::from("")
    };

    let global = Line::from(vec![
        key("[q]"),
        Span::raw(" Quit  "),
        key("[Tab]"),
        Span::raw(" Screen  "),
        key("[b /]"),
        Span::raw(" Balance"),
    ]);
    let screen = match app.current_screen {
        Screen::Leaderboard => vec![key("[↑↓ / j k]"), Span::raw(" Navigate  "), key("[r]"), Span::raw(" Reload")],
        Screen::Balance => vec![key("[r]"), Span::raw(" Refresh")],
        Screen::Quests => vec![
            key("[↑↓]"),
            Span::raw(" Navigate  "),
            key("[← →]"),
            Span::raw(" Page  "),
            key("[[ ]]"),
            Span::raw(" Completed page  "),
            key("[c]"),
            Span::raw(" Complete  "),
            key("[s]"),
            Span::raw(" Summary  "),
            key("[n]"),
            Span::raw(" New quest"),
        ],
        Screen::InputMode => vec![],
    };

    let paragraph = Paragraph::new(vec![status, global, Line::from(screen)])
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Dessine le footer en mode input avec la ligne de saisie
fn render_input_footer(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green)); // Vert pour indiquer mode input

    let input_line = Line::from(vec![
        Span::styled(
            app.input_prompt.as_str(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(app.input_buffer.as_str(), Style::default().fg(Color::White)),
        Span::styled(
            "█", // Curseur
            Style::default().fg(Color::White).add_modifier(Modifier::SLOW_BLINK),
        ),
    ]);

    let submit = match app.input_target {
        InputTarget::Username => " Check balance  ",
        InputTarget::QuestTasks => " Create quest  ",
        _ => " Next  ",
    };

    let help_line = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        Span::raw(submit),
        Span::styled("[ESC]", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Span::raw(" Cancel"),
    ]);

    let paragraph = Paragraph::new(vec![input_line, help_line])
        .block(block)
        .alignment(Alignment::Left);

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    use crate::models::{BalanceRecord, Leaderboard, LeaderboardEntry};

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_render_leaderboard() {
        let mut app = App::new();
        app.set_leaderboard(Some(Leaderboard {
            headers: vec!["Name".into(), "Total Earnings".into(), "Total Quests Completed".into()],
            entries: vec![
                LeaderboardEntry {
                    rank: 1,
                    name: "carol".into(),
                    earnings: 1500.0,
                    completed: 7.0,
                    row: vec![],
                },
                LeaderboardEntry {
                    rank: 2,
                    name: "alice".into(),
                    earnings: 300.0,
                    completed: 2.0,
                    row: vec![],
                },
            ],
            identity_column: 0,
            earnings_column: 1,
            completed_column: Some(2),
        }));

        let text = draw(&app);
        assert!(text.contains("SnappQuest"));
        assert!(text.contains("carol"));
        assert!(text.contains("₦1,500"));
        assert!(text.contains("alice"));
    }

    #[test]
    fn test_render_balance_with_missing_values() {
        let mut app = App::new();
        app.begin_balance_lookup("alice");
        app.set_balance(BalanceRecord {
            balance: Some(250.0),
            earnings: None,
            completed: Some(3.0),
            row: vec![],
        });

        let text = draw(&app);
        assert!(text.contains("alice"));
        assert!(text.contains("$250"));
        assert!(!text.contains("₦250"));
        assert!(text.contains("—"));
    }

    #[test]
    fn test_render_balance_error() {
        let mut app = App::new();
        app.begin_balance_lookup("nobody");
        app.set_balance_error("User not found. Please check the username and try again.".into());

        let text = draw(&app);
        assert!(text.contains("User not found."));
    }

    #[test]
    fn test_render_quests_and_input_mode() {
        let mut app = App::new();
        app.show_screen(Screen::Quests);

        let text = draw(&app);
        assert!(text.contains("Test New Wallet Feature"));
        assert!(text.contains("Promote Solana DeFi Project"));

        app.start_input(InputTarget::Username);
        app.append_char('b');
        app.append_char('o');
        app.append_char('b');
        let text = draw(&app);
        assert!(text.contains("Username: bob"));
        // L'écran des quêtes reste visible derrière la saisie
        assert!(text.contains("Test New Wallet Feature"));
    }

    #[test]
    fn test_render_quest_progress_and_summary() {
        let mut app = App::new();
        app.show_screen(Screen::Quests);

        let text = draw(&app);
        assert!(text.contains("0/3 tasks (0%)"));
        assert!(text.contains("Completed Quests (1/1)"));

        app.show_selected_summary();
        let text = draw(&app);
        assert!(text.contains("Quest: Test New Wallet Feature"));
        assert!(text.contains("Reward: ₦750"));
    }

    #[test]
    fn test_render_quest_creation_prompt() {
        let mut app = App::new();
        app.show_screen(Screen::Quests);
        app.start_quest_creation();
        for c in "Airdrop".chars() {
            app.append_char(c);
        }

        let text = draw(&app);
        assert!(text.contains("Quest title: Airdrop"));
        assert!(text.contains("[Enter] Next"));
    }
}
