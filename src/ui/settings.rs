use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::app::App;
use crate::ui::components;

pub fn render_settings_view(f: &mut Frame, app: &App) {
    let reason_height = if app.settings.reason.is_some() { 4 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Header
            Constraint::Length(reason_height), // Fallback reason
            Constraint::Min(0),                // Entries
            Constraint::Length(3),             // Footer
        ])
        .split(f.area());

    if let [header, reason, body, footer] = &chunks[..] {
        render_header(f, *header);
        if let Some(message) = &app.settings.reason {
            render_reason(f, *reason, message);
        }
        render_entries(f, app, *body);
        components::render_key_hints(f, *footer, &[("↑↓", "select"), ("q", "quit")]);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw(" "),
            Span::styled(
                "joyconsole",
                Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled("Settings", Style::default().fg(Color::Cyan)),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        area,
    );
}

fn render_reason(f: &mut Frame, area: Rect, message: &str) {
    f.render_widget(
        Paragraph::new(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Yellow),
        ))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Console unavailable ")
                .border_style(Style::default().fg(Color::Yellow)),
        ),
        area,
    );
}

fn render_entries(f: &mut Frame, app: &App, area: Rect) {
    let width = app
        .settings
        .entries
        .iter()
        .map(|entry| entry.name.len())
        .max()
        .unwrap_or(0);
    let items: Vec<ListItem> = app
        .settings
        .entries
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!(" {:<width$}  ", entry.name),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(entry.value.clone(), Style::default().fg(Color::White)),
            ]))
        })
        .collect();

    let mut state = ListState::default().with_selected(Some(app.settings.selected_index));
    f.render_stateful_widget(
        List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Configuration ")
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED)),
        area,
        &mut state,
    );
}
