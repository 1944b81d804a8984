use crate::app::{App, AppMode};

impl App {
    pub fn open_help(&mut self) {
        if self.mode != AppMode::Help {
            self.previous_mode = Some(self.mode);
            self.mode = AppMode::Help;
        }
    }

    pub fn close_help(&mut self) {
        self.mode = self.previous_mode.take().unwrap_or(AppMode::Console);
    }

    pub fn toggle_help(&mut self) {
        if self.mode == AppMode::Help {
            self.close_help();
        } else {
            self.open_help();
        }
    }
}
