// ============================================================================
// Vue Leaderboard
// ============================================================================
// Tableau : rang, nom, gains (avec symbole de devise), quêtes complétées.
//
// CONCEPT RATATUI : Table widget
// - Row::new() : une ligne de cellules
// - widths : contraintes par colonne
// - La ligne sélectionnée est inversée (REVERSED) via TableState
// ============================================================================

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::app::App;
use crate::models::{format_locale, LeaderboardEntry};

/// Style du podium (1er, 2e, 3e)
fn rank_style(rank: usize) -> Style {
    match rank {
        1 => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        2 => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        3 => Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD),
        _ => Style::default().fg(Color::Gray),
    }
}

fn entry_row(entry: &LeaderboardEntry, currency_symbol: &str) -> Row<'static> {
    Row::new(vec![
        format!("#{}", entry.rank),
        entry.name.clone(),
        format!("{}{}", currency_symbol, format_locale(entry.earnings)),
        format_locale(entry.completed),
    ])
    .style(rank_style(entry.rank))
}

pub fn render_leaderboard(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" 🏆 Leaderboard ");

    let Some(leaderboard) = app.leaderboard.as_ref().filter(|l| !l.is_empty()) else {
        let message = match (&app.leaderboard_error, app.is_loading_data()) {
            (Some(error), _) => Span::styled(error.as_str(), Style::default().fg(Color::Red)),
            (None, true) => Span::styled("Loading leaderboard...", Style::default().fg(Color::Yellow)),
            (None, false) => Span::styled("No leaderboard data", Style::default().fg(Color::Gray)),
        };

        let paragraph = Paragraph::new(vec![Line::from(""), Line::from(message)])
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    };

    let completed_header = leaderboard
        .completed_column
        .and_then(|i| leaderboard.headers.get(i))
        .map(|h| h.trim().to_string())
        .unwrap_or_else(|| "Completed".to_string());

    let header = Row::new(vec![
        "Rank".to_string(),
        "Name".to_string(),
        "Earnings".to_string(),
        completed_header,
    ])
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    .bottom_margin(1);

    let rows: Vec<Row> = leaderboard
        .entries
        .iter()
        .map(|entry| entry_row(entry, &app.currency_symbol))
        .collect();

    let widths = [
        Constraint::Length(6),
        Constraint::Min(20),
        Constraint::Length(16),
        Constraint::Length(24),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    // CONCEPT RATATUI : StatefulWidget
    // - TableState garde la sélection et fait défiler la table si besoin
    let mut state = TableState::default().with_selected(Some(app.leaderboard_index));
    frame.render_stateful_widget(table, area, &mut state);
}
