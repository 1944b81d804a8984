use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::ui::components;

pub fn render_help_view(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    if let [header, body, footer] = &chunks[..] {
        render_help_header(f, *header);
        render_help_body(f, app, *body);
        render_help_footer(f, *footer);
    }
}

fn render_help_header(f: &mut Frame, area: Rect) {
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw(" "),
            Span::styled(
                "joyconsole",
                Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ", Style::default().fg(Color::DarkGray)),
            Span::styled("Help", Style::default().fg(Color::Cyan)),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .alignment(Alignment::Left),
        area,
    );
}

fn shortcut(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<10}"), Style::default().fg(Color::Yellow)),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}

fn section(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {title}"),
        Style::default().fg(Color::Cyan),
    ))
}

fn render_help_body(f: &mut Frame, app: &App, area: Rect) {
    let wrap = if app.navigator.config().wrap {
        "wrap around row ends"
    } else {
        "stop at row ends"
    };

    let mut lines = vec![
        Line::from(""),
        section("Search field"),
        Line::from(""),
        shortcut("Enter", "Filter the library"),
        shortcut("↓ / Tab", "Enter the grid"),
        shortcut("← →", "Move the cursor"),
        shortcut("Esc", "Quit"),
        Line::from(""),
        section("Grid"),
        Line::from(""),
        shortcut("← ↑ → ↓", "Move the highlight"),
        shortcut("", wrap),
        shortcut("↑", "From the top row, back to search"),
        shortcut("Enter", "Open item"),
        shortcut("Esc / Tab", "Back to search"),
        shortcut("? / F1", "This help"),
        shortcut("q", "Quit"),
        Line::from(""),
        section("Buttons"),
        Line::from(""),
    ];
    lines.extend(
        app.config
            .bindings
            .iter()
            .map(|(key, control)| shortcut(key, &format!("{control:?}"))),
    );

    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Shortcuts ")
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        area,
    );
}

fn render_help_footer(f: &mut Frame, area: Rect) {
    components::render_key_hints(f, area, &[("Esc", "back"), ("q", "back")]);
}
