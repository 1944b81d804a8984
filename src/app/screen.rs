use super::types::Focus;
use crate::nav::{FocusHost, Presenter};

/// Focus and presentation state of the tablet screen.
///
/// The navigator reports through this; scroll requests are queued and
/// resolved by the app once the move is complete.
#[derive(Debug, Clone)]
pub struct ScreenState {
    pub focus: Focus,
    pending_scroll: Option<usize>,
}

impl Default for ScreenState {
    fn default() -> Self {
        Self {
            focus: Focus::Search,
            pending_scroll: None,
        }
    }
}

impl ScreenState {
    pub fn take_scroll_request(&mut self) -> Option<usize> {
        self.pending_scroll.take()
    }
}

impl FocusHost for ScreenState {
    fn search_focused(&self) -> bool {
        self.focus == Focus::Search
    }

    fn focus_search(&mut self) {
        self.focus = Focus::Search;
    }

    fn focus_cell(&mut self, index: usize) {
        self.focus = Focus::Cell(index);
    }
}

impl Presenter for ScreenState {
    fn active_changed(&mut self, previous: Option<usize>, current: Option<usize>) {
        tracing::trace!(?previous, ?current, "active cell changed");
    }

    fn scroll_into_view(&mut self, index: usize) {
        self.pending_scroll = Some(index);
    }
}
