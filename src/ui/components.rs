use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::SearchQuery;

const PROMPT: &str = "⌕ ";

/// Search field. The cursor is drawn only while the field has focus.
pub fn render_search_field(f: &mut Frame, area: Rect, query: &SearchQuery, focused: bool) {
    let accent = if focused { Color::Cyan } else { Color::DarkGray };
    let cursor = Style::default().fg(Color::Black).bg(Color::Cyan);

    let mut spans = vec![Span::styled(PROMPT, Style::default().fg(accent))];
    if query.is_empty() {
        if focused {
            spans.push(Span::styled(" ", cursor));
        }
        spans.push(Span::styled(
            "type and press Enter",
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        // Borders, prompt and one column for the cursor at the end
        let width = usize::from(area.width.saturating_sub(5));
        let (before, after) = query.visible(width);
        let mut after = after.chars();
        spans.push(Span::styled(before, Style::default().fg(Color::White)));
        if focused {
            let under = after.next().map_or_else(|| " ".to_string(), String::from);
            spans.push(Span::styled(under, cursor));
        }
        spans.push(Span::styled(
            after.collect::<String>(),
            Style::default().fg(Color::White),
        ));
    }

    let title = if focused {
        Span::styled(
            " Search ",
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(" Search ", Style::default().fg(accent))
    };
    f.render_widget(
        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(accent))
                .title(title),
        ),
        area,
    );
}

/// Bordered row of `key label` hints shown at the bottom of a page
pub fn render_key_hints(f: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let spans: Vec<Span> = hints
        .iter()
        .enumerate()
        .flat_map(|(index, &(key, label))| {
            let gap = if index == 0 { " " } else { "   " };
            [
                Span::raw(gap),
                Span::styled(
                    key.to_string(),
                    Style::default()
                        .fg(Color::LightRed)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" {label}"), Style::default().fg(Color::Gray)),
            ]
        })
        .collect();

    f.render_widget(
        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        area,
    );
}

/// One-line notice pinned to the right edge of `area`
pub fn render_toast(f: &mut Frame, area: Rect, message: &str) {
    f.render_widget(
        Paragraph::new(Span::styled(
            format!(" {message} "),
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::CursorMove;
    use ratatui::{Terminal, backend::TestBackend};

    fn row_text(query: &SearchQuery, focused: bool, width: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, 3)).unwrap();
        terminal
            .draw(|f| render_search_field(f, f.area(), query, focused))
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..width)
            .filter_map(|x| buffer.cell((x, 1)).map(|cell| cell.symbol().to_string()))
            .collect()
    }

    #[test]
    fn test_empty_field_shows_placeholder() {
        let text = row_text(&SearchQuery::default(), false, 40);
        assert!(text.contains("type and press Enter"));
    }

    #[test]
    fn test_long_query_keeps_cursor_end_visible() {
        let mut query = SearchQuery::default();
        "the legend of zelda tears of the kingdom"
            .chars()
            .for_each(|character| query.insert(character));
        let text = row_text(&query, true, 20);
        assert!(text.contains("kingdom"));
        assert!(!text.contains("legend"));

        query.move_cursor(CursorMove::Start);
        let text = row_text(&query, true, 20);
        assert!(text.contains("he legend"));
    }
}
