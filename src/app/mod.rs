mod background;
mod controls;
mod help;
mod joystick;
mod navigation;
mod query;
mod screen;
mod scroll;
mod search;
mod settings;
mod types;

pub use background::{Background, Sprite, SpriteVariant};
pub use controls::Controls;
pub use joystick::StickPosition;
pub use navigation::Navigable;
pub use query::SearchQuery;
pub use screen::ScreenState;
pub use settings::SettingsView;
pub use types::*;

use crate::config::Config;
use crate::input::{Command, InputRouter};
use crate::nav::{Direction, FlowLayout, Grid, Navigator, Outcome, Presenter};
use color_eyre::{Result, eyre::eyre};
use ratatui::layout::{Position, Rect};
use std::fs;
use std::time::{Duration, Instant};

/// Smallest terminal that can host the console skin
pub const MIN_CONSOLE_SIZE: (u16, u16) = (60, 18);

const TOAST_DURATION: Duration = Duration::from_millis(1500);

/// Application mode state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Console,
    Help,
    Settings,
}

/// Main application state
pub struct App {
    pub mode: AppMode,
    pub previous_mode: Option<AppMode>,
    pub should_quit: bool,
    pub config: Config,
    pub router: InputRouter,
    pub navigator: Navigator,
    pub layout: FlowLayout,

    // Tablet screen
    pub library: Vec<String>,
    pub grid: Grid,
    pub screen: ScreenState,
    pub search: SearchQuery,
    pub scroll_top: u16,
    pub geometry: Geometry,

    // Decoration
    pub stick: StickPosition,
    pub controls: Controls,
    pub background: Background,
    pub status_toast: Option<StatusToast>,

    pub settings: SettingsView,
}

impl App {
    pub fn new(config: Config) -> Self {
        let router = InputRouter::new(config.key_bindings());
        let navigator = Navigator::new(config.navigation);
        let layout = config.screen.layout();
        let sprites = if config.background.enabled {
            config.background.sprites
        } else {
            0
        };

        Self {
            mode: AppMode::Console,
            previous_mode: None,
            should_quit: false,
            router,
            navigator,
            layout,
            library: Vec::new(),
            grid: Grid::default(),
            screen: ScreenState::default(),
            search: SearchQuery::default(),
            scroll_top: 0,
            geometry: Geometry::default(),
            stick: StickPosition::Center,
            controls: Controls::default(),
            background: Background::new(sprites),
            status_toast: None,
            settings: SettingsView::default(),
            config,
        }
    }

    /// Loads the library and lays it out on the tablet screen.
    ///
    /// Fails when there is nothing to host or the terminal cannot fit the
    /// console; the caller falls back to settings mode.
    pub fn init_console(&mut self, terminal: Rect, geometry: Geometry) -> Result<()> {
        let (min_width, min_height) = MIN_CONSOLE_SIZE;
        if terminal.width < min_width || terminal.height < min_height {
            return Err(eyre!(
                "terminal is {}x{}, the console needs at least {min_width}x{min_height}",
                terminal.width,
                terminal.height
            ));
        }

        let mut library = self.config.library.items.clone();
        if let Some(path) = &self.config.library.items_file {
            let contents = fs::read_to_string(path)
                .map_err(|err| eyre!("failed to read {}: {err}", path.display()))?;
            library.extend(
                contents
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(String::from),
            );
        }
        if library.is_empty() {
            return Err(eyre!("no items to host on the tablet screen"));
        }

        tracing::info!(items = library.len(), "console initialized");
        self.library = library;
        self.geometry = geometry;
        self.grid = self.layout.arrange(self.library.iter(), geometry.grid.width);
        self.mode = AppMode::Console;
        Ok(())
    }

    /// Adopts the regions of the latest frame, re-wrapping the grid when
    /// the number of columns changed
    pub fn sync_geometry(&mut self, geometry: Geometry) {
        if geometry == self.geometry {
            return;
        }
        let columns = self.layout.columns_for(geometry.grid.width);
        self.geometry = geometry;
        if !self.grid.is_empty() && columns != self.grid.num_per_row() {
            tracing::debug!(columns, "re-wrapping grid");
            self.grid = self.layout.rearrange(&self.grid, geometry.grid.width);
            if let Some(active) = self.grid.active() {
                self.screen.scroll_into_view(active);
                self.resolve_scroll();
            }
        }
        self.clamp_scroll();
    }

    /// Periodic work of the event loop
    pub fn tick(&mut self, now: Instant) {
        self.controls.tick(now);
        self.background.tick(now);
        self.clear_expired_status_toast();
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Navigate(direction) => {
                self.navigate(direction);
            }
            Command::Press(control) => self.controls.press(control, Instant::now()),
            Command::Release(control) => self.controls.release(control),
            Command::Activate => self.open_active(),
            Command::Back => self.return_to_search(),
            Command::SearchInput(character) => self.search.insert(character),
            Command::SearchBackspace => self.search.backspace(),
            Command::SearchDelete => self.search.delete(),
            Command::SearchCursor(movement) => self.search.move_cursor(movement),
            Command::SearchSubmit => self.submit_search(),
            Command::PointTo { column, row } => self.point_to(Position::new(column, row)),
            Command::ToggleHelp => self.toggle_help(),
            Command::Quit => self.should_quit = true,
        }
    }

    pub fn navigate(&mut self, direction: Direction) -> Outcome {
        let outcome = self
            .navigator
            .navigate(&mut self.grid, &mut self.screen, direction);
        self.resolve_scroll();
        outcome
    }

    pub fn return_to_search(&mut self) {
        self.navigator.leave(&mut self.grid, &mut self.screen);
    }

    fn open_active(&mut self) {
        let Some(label) = self.grid.active_cell().map(|cell| cell.label().to_string()) else {
            return;
        };
        tracing::info!(item = %label, "opening item");
        self.show_status_toast(format!("OPENING {}", label.to_uppercase()));
    }

    /// Moves the stick towards the pointer; over the tablet screen it recentres
    fn point_to(&mut self, pointer: Position) {
        if self.geometry.screen.contains(pointer) {
            self.stick = StickPosition::Center;
            return;
        }
        let origin = self.geometry.stick_origin;
        let dx = f64::from(pointer.x) - f64::from(origin.x);
        // Terminal cells are about twice as tall as wide
        let dy = (f64::from(pointer.y) - f64::from(origin.y)) * 2.0;
        self.stick = joystick::quantize(dx, dy);
        tracing::trace!(bearing = joystick::bearing(dx, dy), stick = ?self.stick, "pointer moved");
    }

    pub fn show_status_toast(&mut self, message: impl Into<String>) {
        self.status_toast = Some(StatusToast::new(message));
    }

    pub fn clear_expired_status_toast(&mut self) {
        if self
            .status_toast
            .as_ref()
            .is_some_and(|toast| toast.is_expired(TOAST_DURATION))
        {
            self.status_toast = None;
        }
    }
}
