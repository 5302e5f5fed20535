// ============================================================================
// Vue Balance
// ============================================================================
// Trois cartes : solde, gains totaux, quêtes complétées.
// Une valeur absente (colonne introuvable ou cellule non numérique) -> "—".
// Les montants du solde sont affichés en "$", quel que soit CURRENCY_SYMBOL.
// ============================================================================

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::models::BalanceRecord;

/// Préfixe des cartes Balance et Total Earnings
pub const BALANCE_PREFIX: &str = "$";

pub fn render_balance(frame: &mut Frame, app: &App, area: Rect) {
    let title = match &app.balance_query {
        Some(username) => format!(" 💰 Balance : {} ", username),
        None => " 💰 Balance ".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(title);

    let Some(record) = app.balance.as_ref() else {
        let message = if let Some(error) = &app.balance_error {
            Span::styled(error.as_str(), Style::default().fg(Color::Red))
        } else if app.balance_query.is_some() {
            Span::styled("Checking balance...", Style::default().fg(Color::Yellow))
        } else {
            Span::styled(
                "Press [b] or [/] and enter a username to check a balance",
                Style::default().fg(Color::Gray),
            )
        };

        let paragraph = Paragraph::new(vec![Line::from(""), Line::from(message)])
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    };

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(inner);

    render_card(frame, cards[0], "Balance", BalanceRecord::format_stat(record.balance, BALANCE_PREFIX));
    render_card(frame, cards[1], "Total Earnings", BalanceRecord::format_stat(record.earnings, BALANCE_PREFIX));
    render_card(frame, cards[2], "Completed Quests", BalanceRecord::format_stat(record.completed, ""));
}

fn render_card(frame: &mut Frame, area: Rect, label: &str, value: String) {
    let style = if value == "—" {
        Style::default().fg(Color::Gray)
    } else {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {} ", label));

    let paragraph = Paragraph::new(vec![Line::from(""), Line::from(Span::styled(value, style))])
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
