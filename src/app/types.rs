use ratatui::layout::{Position, Rect};

/// Screen regions the app needs outside of rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Geometry {
    /// Inside of the tablet frame; the pointer recentres the stick here
    pub screen: Rect,
    /// Part of the screen hosting the item tiles
    pub grid: Rect,
    /// Centre of the left joy-con stick
    pub stick_origin: Position,
}

/// What currently holds input focus on the tablet screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    Cell(usize),
}

#[derive(Debug, Clone)]
pub struct StatusToast {
    pub message: String,
    pub created_at: std::time::Instant,
}

impl StatusToast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created_at: std::time::Instant::now(),
        }
    }

    pub fn is_expired(&self, duration: std::time::Duration) -> bool {
        self.created_at.elapsed() >= duration
    }
}

/// A name/value row of the settings view
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsEntry {
    pub name: String,
    pub value: String,
}

impl SettingsEntry {
    pub fn new(name: impl Into<String>, value: impl ToString) -> Self {
        Self {
            name: name.into(),
            value: value.to_string(),
        }
    }
}
