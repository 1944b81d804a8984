use crate::app::{App, Geometry};
use crate::ui::components;
use crate::ui::utils::truncate_to_width;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};

/// Search field on top, item tiles below
pub fn render_screen(f: &mut Frame, app: &App, geometry: &Geometry) {
    let search_area = Rect {
        height: 3.min(geometry.screen.height),
        ..geometry.screen
    };
    render_search(f, app, search_area);
    render_tiles(f, app, geometry.grid);
}

fn render_search(f: &mut Frame, app: &App, area: Rect) {
    components::render_search_field(f, area, &app.search, app.search_focused());
}

fn render_tiles(f: &mut Frame, app: &App, area: Rect) {
    if app.grid.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled("No results", Style::default().fg(Color::DarkGray)))
                .alignment(Alignment::Center),
            area,
        );
        return;
    }

    let layout = app.layout;
    for (index, cell) in app.grid.cells().iter().enumerate() {
        let Some((_, column)) = app.grid.position(index) else {
            continue;
        };
        let Some(top) = cell.offset_top().checked_sub(app.scroll_top) else {
            continue;
        };
        let left = layout.column_offset(column);
        if top.saturating_add(layout.tile_height) > area.height
            || left.saturating_add(layout.tile_width) > area.width
        {
            continue;
        }

        let tile = Rect::new(
            area.x + left,
            area.y + top,
            layout.tile_width,
            layout.tile_height,
        );
        render_tile(f, tile, cell.label(), cell.is_active());
    }

    let content_height = layout.content_height(&app.grid);
    if content_height > area.height {
        let mut state = ScrollbarState::new(usize::from(content_height - area.height))
            .position(usize::from(app.scroll_top));
        f.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area,
            &mut state,
        );
    }
}

fn render_tile(f: &mut Frame, area: Rect, label: &str, active: bool) {
    let (border, text) = if active {
        (
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::White),
        )
    };
    let label = truncate_to_width(label, usize::from(area.width.saturating_sub(2)));

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(label, text)))
            .alignment(Alignment::Center)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(border),
            ),
        area,
    );
}

