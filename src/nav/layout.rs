use super::grid::Grid;

/// Wrapping flow layout for fixed-size tiles.
///
/// Tiles are placed left to right and wrap when the next tile would overflow
/// the available width. Each tile's vertical offset is recorded on its cell;
/// the column count is not handed to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowLayout {
    pub tile_width: u16,
    pub tile_height: u16,
    pub gap: u16,
}

impl Default for FlowLayout {
    fn default() -> Self {
        Self {
            tile_width: 18,
            tile_height: 3,
            gap: 1,
        }
    }
}

impl FlowLayout {
    /// Tiles that fit on one row of `width` columns, never less than one
    #[must_use]
    pub fn columns_for(&self, width: u16) -> usize {
        let stride = self.tile_width.saturating_add(self.gap).max(1);
        let fitting = width.saturating_add(self.gap) / stride;
        usize::from(fitting.max(1))
    }

    /// Vertical distance between two consecutive rows
    #[must_use]
    pub fn row_stride(&self) -> u16 {
        self.tile_height.saturating_add(self.gap)
    }

    /// Lays out `labels` into a grid for a screen `width` columns wide
    pub fn arrange<I, S>(&self, labels: I, width: u16) -> Grid
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns = self.columns_for(width);
        let stride = self.row_stride();
        Grid::from_offsets(labels.into_iter().enumerate().map(|(index, label)| {
            let row = u16::try_from(index / columns).unwrap_or(u16::MAX);
            (label, row.saturating_mul(stride))
        }))
    }

    /// Re-wraps an existing grid for a new width, keeping the active cell
    pub fn rearrange(&self, grid: &Grid, width: u16) -> Grid {
        let mut next = self.arrange(grid.cells().iter().map(|cell| cell.label().to_string()), width);
        if let Some(active) = grid.active() {
            next.set_active(active);
        }
        next
    }

    /// Rows spanned by `grid`, down to the bottom of its last tile
    #[must_use]
    pub fn content_height(&self, grid: &Grid) -> u16 {
        grid.cells()
            .last()
            .map_or(0, |cell| cell.offset_top().saturating_add(self.tile_height))
    }

    /// Horizontal offset of a tile within its row
    #[must_use]
    pub fn column_offset(&self, column: usize) -> u16 {
        let column = u16::try_from(column).unwrap_or(u16::MAX);
        column.saturating_mul(self.tile_width.saturating_add(self.gap))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::grid::Cell;

    #[test]
    fn test_columns_for_width() {
        let layout = FlowLayout {
            tile_width: 10,
            tile_height: 3,
            gap: 2,
        };
        // 4 tiles need 4*10 + 3*2 = 46 columns
        assert_eq!(layout.columns_for(46), 4);
        assert_eq!(layout.columns_for(45), 3);
        assert_eq!(layout.columns_for(3), 1);
    }

    #[test]
    fn test_arrange_wraps_rows_by_offset() {
        let layout = FlowLayout {
            tile_width: 10,
            tile_height: 3,
            gap: 2,
        };
        let grid = layout.arrange((0..10).map(|i| format!("t{i}")), 46);
        assert_eq!(grid.num_per_row(), 4);
        assert_eq!(grid.last_row_count(), 2);
        assert_eq!(grid.cell(4).map(Cell::offset_top), Some(5));
        assert_eq!(grid.cell(9).map(Cell::offset_top), Some(10));
    }

    #[test]
    fn test_rearrange_keeps_active_cell() {
        let layout = FlowLayout::default();
        let mut grid = layout.arrange(["a", "b", "c", "d"], 80);
        grid.set_active(3);
        let narrow = layout.rearrange(&grid, 20);
        assert_eq!(narrow.num_per_row(), 1);
        assert_eq!(narrow.active(), Some(3));
        assert_eq!(narrow.active_count(), 1);
    }

    #[test]
    fn test_content_height_covers_last_row() {
        let layout = FlowLayout::default();
        let grid = layout.arrange((0..9).map(|i| format!("Game {i}")), 40);
        // Two per row, five rows with a stride of 4
        assert_eq!(layout.content_height(&grid), 19);
        assert_eq!(layout.content_height(&Grid::default()), 0);
    }

    #[test]
    fn test_content_height_saturates_for_huge_libraries() {
        let layout = FlowLayout::default();
        let grid = layout.arrange((0..40_000).map(|i| format!("Game {i}")), 18);
        assert_eq!(grid.cells().last().map(Cell::offset_top), Some(u16::MAX));
        assert_eq!(layout.content_height(&grid), u16::MAX);
    }
}
