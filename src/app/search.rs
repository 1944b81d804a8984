use crate::app::App;
use crate::app::types::Focus;

impl App {
    pub fn search_focused(&self) -> bool {
        self.screen.focus == Focus::Search
    }

    /// Rebuilds the grid from the library items matching the search text.
    /// An empty query restores the whole library.
    pub fn submit_search(&mut self) {
        let query = self.search.needle();
        let matches: Vec<&String> = self
            .library
            .iter()
            .filter(|item| query.is_empty() || item.to_lowercase().contains(&query))
            .collect();

        tracing::info!(query = %query, results = matches.len(), "search submitted");

        self.grid = self.layout.arrange(matches, self.geometry.grid.width);
        self.screen.focus = Focus::Search;
        self.reset_scroll();

        let message = match self.grid.len() {
            0 => "NO RESULTS".to_string(),
            1 => "1 RESULT".to_string(),
            count => format!("{count} RESULTS"),
        };
        self.show_status_toast(message);
    }
}
