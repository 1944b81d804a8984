//! Keyboard navigation over a wrapped grid of cells.

mod grid;
mod layout;
mod navigator;

pub use grid::Grid;
pub use layout::FlowLayout;
pub use navigator::{FocusHost, Navigator, Outcome, Presenter};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

/// Navigation behaviour at the grid edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Wrap left/right movement around the ends of a row
    #[serde(rename = "loop")]
    pub wrap: bool,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self { wrap: true }
    }
}
