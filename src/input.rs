//! Decodes terminal events into console commands.
//!
//! The router keeps no state beyond its key bindings: each event is mapped
//! on its own, given whether the search field currently holds focus.

use crate::nav::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Decorative controls on the joy-cons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlId {
    DpadUp,
    DpadDown,
    DpadLeft,
    DpadRight,
    X,
    Y,
    A,
    B,
    Minus,
    Plus,
    Capture,
    Home,
}

impl ControlId {
    #[must_use]
    pub fn for_direction(direction: Direction) -> Self {
        match direction {
            Direction::Up => ControlId::DpadUp,
            Direction::Down => ControlId::DpadDown,
            Direction::Left => ControlId::DpadLeft,
            Direction::Right => ControlId::DpadRight,
        }
    }
}

/// What an input event asks the console to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Navigate(Direction),
    Press(ControlId),
    Release(ControlId),
    /// Open the focused cell
    Activate,
    /// Return focus to the search field
    Back,
    SearchInput(char),
    SearchBackspace,
    SearchDelete,
    SearchCursor(CursorMove),
    SearchSubmit,
    /// Pointer moved to a terminal cell
    PointTo { column: u16, row: u16 },
    ToggleHelp,
    Quit,
}

/// Cursor movement inside the search field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Left,
    Right,
    Start,
    End,
}

#[derive(Debug, Clone)]
pub struct InputRouter {
    bindings: BTreeMap<char, ControlId>,
}

impl InputRouter {
    pub fn new(bindings: BTreeMap<char, ControlId>) -> Self {
        Self { bindings }
    }

    /// Maps a key event to zero or more commands
    #[must_use]
    pub fn decode_key(&self, key: KeyEvent, search_focused: bool) -> Vec<Command> {
        if key.kind == KeyEventKind::Release {
            return self.decode_release(key.code).into_iter().collect();
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return vec![Command::Quit];
        }

        match key.code {
            KeyCode::Up => arrow(Direction::Up, search_focused),
            KeyCode::Down => arrow(Direction::Down, search_focused),
            KeyCode::Left => arrow(Direction::Left, search_focused),
            KeyCode::Right => arrow(Direction::Right, search_focused),
            KeyCode::Enter if search_focused => vec![Command::SearchSubmit],
            KeyCode::Enter => vec![Command::Press(ControlId::A), Command::Activate],
            KeyCode::Esc if search_focused => vec![Command::Quit],
            KeyCode::Esc => vec![Command::Press(ControlId::B), Command::Back],
            KeyCode::Tab if search_focused => vec![Command::Navigate(Direction::Down)],
            KeyCode::Tab | KeyCode::BackTab => vec![Command::Back],
            KeyCode::Backspace if search_focused => vec![Command::SearchBackspace],
            KeyCode::Delete if search_focused => vec![Command::SearchDelete],
            KeyCode::Home if search_focused => vec![Command::SearchCursor(CursorMove::Start)],
            KeyCode::End if search_focused => vec![Command::SearchCursor(CursorMove::End)],
            KeyCode::F(1) => vec![Command::ToggleHelp],
            KeyCode::Char(character) if search_focused => vec![Command::SearchInput(character)],
            KeyCode::Char('?') => vec![Command::ToggleHelp],
            KeyCode::Char('q') => vec![Command::Quit],
            KeyCode::Char(character) => self.decode_binding(character),
            KeyCode::Backspace
            | KeyCode::Home
            | KeyCode::End
            | KeyCode::PageUp
            | KeyCode::PageDown
            | KeyCode::Delete
            | KeyCode::Insert
            | KeyCode::F(_)
            | KeyCode::Null
            | KeyCode::CapsLock
            | KeyCode::ScrollLock
            | KeyCode::NumLock
            | KeyCode::PrintScreen
            | KeyCode::Pause
            | KeyCode::Menu
            | KeyCode::KeypadBegin
            | KeyCode::Media(_)
            | KeyCode::Modifier(_) => Vec::new(),
        }
    }

    fn decode_binding(&self, character: char) -> Vec<Command> {
        let Some(&control) = self.bindings.get(&character) else {
            return Vec::new();
        };
        let mut commands = vec![Command::Press(control)];
        match control {
            ControlId::A => commands.push(Command::Activate),
            ControlId::B => commands.push(Command::Back),
            ControlId::Home => commands.push(Command::ToggleHelp),
            ControlId::DpadUp
            | ControlId::DpadDown
            | ControlId::DpadLeft
            | ControlId::DpadRight
            | ControlId::X
            | ControlId::Y
            | ControlId::Minus
            | ControlId::Plus
            | ControlId::Capture => {}
        }
        commands
    }

    fn decode_release(&self, code: KeyCode) -> Option<Command> {
        let control = match code {
            KeyCode::Up => ControlId::DpadUp,
            KeyCode::Down => ControlId::DpadDown,
            KeyCode::Left => ControlId::DpadLeft,
            KeyCode::Right => ControlId::DpadRight,
            KeyCode::Enter => ControlId::A,
            KeyCode::Esc => ControlId::B,
            KeyCode::Char(character) => *self.bindings.get(&character)?,
            _ => return None,
        };
        Some(Command::Release(control))
    }

    /// Pointer motion drives the joystick indicator; clicks and scrolls are ignored
    #[must_use]
    pub fn decode_mouse(&self, mouse: MouseEvent) -> Option<Command> {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(Command::PointTo {
                column: mouse.column,
                row: mouse.row,
            }),
            MouseEventKind::Down(_)
            | MouseEventKind::Up(_)
            | MouseEventKind::ScrollDown
            | MouseEventKind::ScrollUp
            | MouseEventKind::ScrollLeft
            | MouseEventKind::ScrollRight => None,
        }
    }
}

/// Arrows always press the d-pad. In the search field only Down navigates;
/// Left and Right move the text cursor.
fn arrow(direction: Direction, search_focused: bool) -> Vec<Command> {
    let press = Command::Press(ControlId::for_direction(direction));
    if !search_focused {
        return vec![press, Command::Navigate(direction)];
    }
    match direction {
        Direction::Down => vec![press, Command::Navigate(direction)],
        Direction::Up => vec![press],
        Direction::Left => vec![press, Command::SearchCursor(CursorMove::Left)],
        Direction::Right => vec![press, Command::SearchCursor(CursorMove::Right)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseButton};

    fn router() -> InputRouter {
        InputRouter::new(crate::config::Config::default().key_bindings())
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn release(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_arrow_in_grid_presses_and_navigates() {
        assert_eq!(
            router().decode_key(press(KeyCode::Left), false),
            vec![
                Command::Press(ControlId::DpadLeft),
                Command::Navigate(Direction::Left)
            ]
        );
    }

    #[test]
    fn test_search_focus_only_lets_down_navigate() {
        let router = router();
        assert_eq!(
            router.decode_key(press(KeyCode::Up), true),
            vec![Command::Press(ControlId::DpadUp)]
        );
        assert_eq!(
            router.decode_key(press(KeyCode::Right), true),
            vec![
                Command::Press(ControlId::DpadRight),
                Command::SearchCursor(CursorMove::Right)
            ]
        );
        assert_eq!(
            router.decode_key(press(KeyCode::Down), true),
            vec![
                Command::Press(ControlId::DpadDown),
                Command::Navigate(Direction::Down)
            ]
        );
    }

    #[test]
    fn test_letters_type_into_search() {
        let router = router();
        assert_eq!(
            router.decode_key(press(KeyCode::Char('a')), true),
            vec![Command::SearchInput('a')]
        );
        assert_eq!(
            router.decode_key(press(KeyCode::Char('a')), false),
            vec![Command::Press(ControlId::A), Command::Activate]
        );
    }

    #[test]
    fn test_unbound_letter_does_nothing_in_grid() {
        assert!(router().decode_key(press(KeyCode::Char('z')), false).is_empty());
    }

    #[test]
    fn test_release_maps_to_control() {
        let router = router();
        assert_eq!(
            router.decode_key(release(KeyCode::Down), false),
            vec![Command::Release(ControlId::DpadDown)]
        );
        assert_eq!(
            router.decode_key(release(KeyCode::Char('x')), true),
            vec![Command::Release(ControlId::X)]
        );
        assert!(router.decode_key(release(KeyCode::Home), false).is_empty());
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(router().decode_key(key, true), vec![Command::Quit]);
        assert_eq!(router().decode_key(key, false), vec![Command::Quit]);
    }

    #[test]
    fn test_mouse_motion_points() {
        let moved = MouseEvent {
            kind: MouseEventKind::Moved,
            column: 4,
            row: 9,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(
            router().decode_mouse(moved),
            Some(Command::PointTo { column: 4, row: 9 })
        );
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            ..moved
        };
        assert_eq!(router().decode_mouse(click), None);
    }
}
