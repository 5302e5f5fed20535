// ============================================================================
// Vue Quests (profil)
// ============================================================================
// - Statistiques du profil en haut
// - Quêtes disponibles (paginées, sélectionnables) à gauche
// - Quêtes complétées (paginées séparément) à droite
// - Message en bas : félicitations, résumé ou erreur de création
// ============================================================================

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::models::{format_locale, Quest};

pub fn render_quests(frame: &mut Frame, app: &App, area: Rect) {
    // Hauteur du message : ses lignes + bordures, au plus la moitié de l'écran
    let message_height = app
        .quest_message
        .as_ref()
        .map(|m| (m.lines().count() as u16 + 2).min(area.height / 2))
        .unwrap_or(0);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(message_height),
        ])
        .split(area);

    render_stats(frame, app, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);

    render_available(frame, app, columns[0]);
    render_completed(frame, app, columns[1]);

    if let Some(message) = &app.quest_message {
        let paragraph = Paragraph::new(message.as_str())
            .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Green)))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, rows[2]);
    }
}

fn render_stats(frame: &mut Frame, app: &App, area: Rect) {
    let stats = app.profile_stats();
    let value = Style::default().fg(Color::Green).add_modifier(Modifier::BOLD);

    let line = Line::from(vec![
        Span::raw("Total Quests: "),
        Span::styled(stats.total_quests.to_string(), value),
        Span::raw("   Completed Quests: "),
        Span::styled(stats.completed_quests.to_string(), value),
        Span::raw("   Earnings: "),
        Span::styled(format!("{}{}", app.currency_symbol, format_locale(stats.total_earnings)), value),
    ]);

    let paragraph = Paragraph::new(line)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" 👤 Profile "),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Lignes d'une quête : titre, sponsor/récompense, tâches
fn quest_item(quest: &Quest, selected: bool) -> ListItem<'static> {
    let mut title_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    if selected {
        title_style = title_style.add_modifier(Modifier::REVERSED);
    }

    let mut lines = vec![
        Line::from(Span::styled(quest.title.clone(), title_style)),
        Line::from(vec![
            Span::styled(format!("  Sponsored by: {}", quest.sponsor), Style::default().fg(Color::Gray)),
            Span::styled(format!("  {}", quest.reward_label()), Style::default().fg(Color::Yellow)),
        ]),
    ];

    lines.extend(quest.tasks.iter().map(|task| {
        let (mark, color) = if task.completed {
            ("✓", Color::Green)
        } else {
            ("○", Color::Gray)
        };
        Line::from(Span::styled(format!("    {} {}", mark, task.title), Style::default().fg(color)))
    }));
    let done = quest.tasks.iter().filter(|t| t.completed).count();
    lines.push(Line::from(Span::styled(
        format!(
            "    Progress: {}/{} tasks ({:.0}%)",
            done,
            quest.tasks.len(),
            quest.progress() * 100.0
        ),
        Style::default().fg(Color::Cyan),
    )));
    lines.push(Line::from(""));

    ListItem::new(lines)
}

fn render_available(frame: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        " Available Quests ({}/{}) ",
        app.quest_page,
        app.quest_page_count()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(title);

    let visible = app.visible_quests();
    if visible.is_empty() {
        let paragraph = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("No quests available", Style::default().fg(Color::Gray))),
        ])
        .block(block)
        .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(i, quest)| quest_item(quest, i == app.quest_index))
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn render_completed(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(
            " Completed Quests ({}/{}) ",
            app.completed_page,
            app.completed_page_count()
        ));

    let items: Vec<ListItem> = app
        .visible_completed_quests()
        .iter()
        .map(|quest| {
            ListItem::new(Line::from(vec![
                Span::styled("✓ ", Style::default().fg(Color::Green)),
                Span::raw(quest.title.clone()),
                Span::styled(format!("  {}", quest.reward_label()), Style::default().fg(Color::Yellow)),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
