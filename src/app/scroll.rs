impl crate::app::App {
    /// Scrolls the grid so the cell the navigator asked for is visible
    pub fn resolve_scroll(&mut self) {
        let Some(index) = self.screen.take_scroll_request() else {
            return;
        };
        let Some(cell) = self.grid.cell(index) else {
            return;
        };
        self.scroll_top = nearest_scroll(
            self.scroll_top,
            cell.offset_top(),
            self.layout.tile_height,
            self.geometry.grid.height,
        );
    }

    /// Keeps the scroll offset inside the content after a resize or a new grid
    pub fn clamp_scroll(&mut self) {
        let content_height = self.layout.content_height(&self.grid);
        let max_scroll = content_height.saturating_sub(self.geometry.grid.height);
        self.scroll_top = self.scroll_top.min(max_scroll);
    }

    pub fn reset_scroll(&mut self) {
        self.scroll_top = 0;
    }
}

/// Smallest scroll change that brings `[top, top + height)` into a viewport
/// of `viewport` rows starting at `scroll_top`
#[must_use]
pub fn nearest_scroll(scroll_top: u16, top: u16, height: u16, viewport: u16) -> u16 {
    let bottom = top.saturating_add(height);
    if top < scroll_top {
        top
    } else if bottom > scroll_top.saturating_add(viewport) {
        bottom.saturating_sub(viewport)
    } else {
        scroll_top
    }
}
