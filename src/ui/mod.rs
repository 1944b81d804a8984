mod background;
mod components;
mod console;
mod help;
mod screen;
mod settings;
mod utils;

pub use console::geometry;

use crate::app::{App, AppMode};
use ratatui::{Frame, layout::Rect};

pub fn render(f: &mut Frame, app: &App) {
    match app.mode {
        AppMode::Console => {
            if app.config.background.enabled {
                background::render_background(f, app);
            }
            console::render_console(f, app);
        }
        AppMode::Help => help::render_help_view(f, app),
        AppMode::Settings => settings::render_settings_view(f, app),
    }

    if let Some(toast) = &app.status_toast {
        let area = f.area();
        let toast_area = Rect {
            height: 1.min(area.height),
            ..area
        };
        components::render_toast(f, toast_area, &toast.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::nav::Direction;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                if let Some(cell) = buffer.cell((x, y)) {
                    text.push_str(cell.symbol());
                }
            }
            text.push('\n');
        }
        text
    }

    fn console_app(width: u16, height: u16) -> App {
        let mut config = Config::default();
        config.background.enabled = false;
        let mut app = App::new(config);
        let area = Rect::new(0, 0, width, height);
        app.init_console(area, geometry(area)).unwrap();
        app
    }

    #[test]
    fn test_console_shows_search_and_tiles() {
        let app = console_app(120, 30);
        let screen = draw(&app, 120, 30);
        assert!(screen.contains("Search"));
        assert!(screen.contains("Metroid Dread"));
        assert!(screen.contains("▲"));
        assert!(screen.contains("X"));
    }

    #[test]
    fn test_active_tile_is_highlighted() {
        let mut app = console_app(120, 30);
        app.navigate(Direction::Down);
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| render(f, &app)).unwrap();
        let buffer = terminal.backend().buffer();
        let highlighted = buffer
            .content()
            .iter()
            .filter(|cell| cell.bg == ratatui::style::Color::Yellow)
            .count();
        assert!(highlighted > 0);
    }

    #[test]
    fn test_settings_view_shows_reason() {
        let mut app = App::new(Config::default());
        app.enter_settings_mode(Some("no items to host".to_string()));
        let screen = draw(&app, 100, 30);
        assert!(screen.contains("Settings"));
        assert!(screen.contains("no items to host"));
        assert!(screen.contains("navigation.loop"));
    }

    #[test]
    fn test_help_lists_bindings() {
        let mut app = console_app(120, 30);
        app.open_help();
        let screen = draw(&app, 120, 40);
        assert!(screen.contains("Shortcuts"));
        assert!(screen.contains("Capture"));
    }
}
