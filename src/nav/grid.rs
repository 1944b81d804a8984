//! Cell sequence of the navigable grid.
//!
//! Rows are implicit: a flow layout wraps the cells and records each cell's
//! vertical offset. The row length is recovered from those offsets on every
//! query rather than stored, so the grid follows whatever the layout did.

/// One selectable item of the grid
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    label: String,
    offset_top: u16,
    active: bool,
}

impl Cell {
    pub fn new(label: impl Into<String>, offset_top: u16) -> Self {
        Self {
            label: label.into(),
            offset_top,
            active: false,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Vertical position assigned by the layout provider
    #[must_use]
    pub fn offset_top(&self) -> u16 {
        self.offset_top
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Ordered cells plus the index of the active one.
///
/// The active flag on the cells and `active` always agree; only
/// [`Grid::set_active`] and [`Grid::clear_active`] touch either.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    cells: Vec<Cell>,
    active: Option<usize>,
}

impl Grid {
    pub fn new(cells: Vec<Cell>) -> Self {
        let mut grid = Self {
            cells,
            active: None,
        };
        // Incoming cells may carry stale flags from a previous grid.
        for cell in &mut grid.cells {
            cell.active = false;
        }
        grid
    }

    /// Builds a grid from `(label, offset_top)` pairs
    pub fn from_offsets<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = (S, u16)>,
        S: Into<String>,
    {
        Self::new(
            items
                .into_iter()
                .map(|(label, offset)| Cell::new(label, offset))
                .collect(),
        )
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[must_use]
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    #[must_use]
    pub fn active_cell(&self) -> Option<&Cell> {
        self.active.and_then(|index| self.cells.get(index))
    }

    /// Number of cells currently flagged active. Always 0 or 1.
    #[cfg(test)]
    pub fn active_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.active).count()
    }

    /// Marks `index` active and clears the previous one.
    /// Returns the previously active index. Out of range is ignored.
    pub(crate) fn set_active(&mut self, index: usize) -> Option<usize> {
        if index >= self.cells.len() {
            return self.active;
        }
        let previous = self.clear_active();
        if let Some(cell) = self.cells.get_mut(index) {
            cell.active = true;
            self.active = Some(index);
        }
        previous
    }

    pub(crate) fn clear_active(&mut self) -> Option<usize> {
        let previous = self.active.take();
        if let Some(cell) = previous.and_then(|index| self.cells.get_mut(index)) {
            cell.active = false;
        }
        previous
    }

    /// Cells per row, inferred from the first change in vertical offset.
    /// A grid whose cells all share one offset is a single row.
    #[must_use]
    pub fn num_per_row(&self) -> usize {
        let Some(first) = self.cells.first() else {
            return 0;
        };
        self.cells
            .iter()
            .position(|cell| cell.offset_top != first.offset_top)
            .unwrap_or(self.cells.len())
    }

    /// Length of the final row; a full final row counts as `num_per_row`
    #[must_use]
    pub fn last_row_count(&self) -> usize {
        let per_row = self.num_per_row();
        if per_row == 0 {
            return 0;
        }
        match self.cells.len() % per_row {
            0 => per_row,
            remainder => remainder,
        }
    }

    /// Index of the first cell in the bottom row
    #[must_use]
    pub fn bottom_row_start(&self) -> usize {
        self.cells.len().saturating_sub(self.last_row_count())
    }

    #[must_use]
    pub fn is_top_row(&self, index: usize) -> bool {
        index < self.num_per_row()
    }

    #[must_use]
    pub fn is_bottom_row(&self, index: usize) -> bool {
        index < self.cells.len() && index >= self.bottom_row_start()
    }

    #[must_use]
    pub fn is_left_column(&self, index: usize) -> bool {
        match self.num_per_row() {
            0 => false,
            per_row => index % per_row == 0,
        }
    }

    /// The last cell of a short final row also counts as right column.
    #[must_use]
    pub fn is_right_column(&self, index: usize) -> bool {
        match self.num_per_row() {
            0 => false,
            per_row => index % per_row == per_row - 1 || index + 1 == self.cells.len(),
        }
    }

    /// Row and column of `index`
    #[must_use]
    pub fn position(&self, index: usize) -> Option<(usize, usize)> {
        let per_row = self.num_per_row();
        if per_row == 0 || index >= self.cells.len() {
            return None;
        }
        Some((index / per_row, index % per_row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `len` cells wrapped at `per_row`, one offset unit per row
    fn wrapped(len: usize, per_row: usize) -> Grid {
        Grid::from_offsets((0..len).map(|i| (format!("item {i}"), (i / per_row) as u16)))
    }

    #[test]
    fn test_num_per_row_inferred_from_offsets() {
        assert_eq!(wrapped(10, 4).num_per_row(), 4);
        assert_eq!(wrapped(3, 1).num_per_row(), 1);
    }

    #[test]
    fn test_single_row_uses_full_length() {
        let grid = wrapped(5, 5);
        assert_eq!(grid.num_per_row(), 5);
        assert!(grid.is_top_row(4));
        assert!(grid.is_bottom_row(0));
    }

    #[test]
    fn test_last_row_count_short_and_full() {
        assert_eq!(wrapped(10, 4).last_row_count(), 2);
        assert_eq!(wrapped(8, 4).last_row_count(), 4);
        assert_eq!(Grid::default().last_row_count(), 0);
    }

    #[test]
    fn test_boundary_predicates() {
        let grid = wrapped(10, 4);
        assert!(grid.is_top_row(3));
        assert!(!grid.is_top_row(4));
        assert!(grid.is_bottom_row(8));
        assert!(!grid.is_bottom_row(7));
        assert!(grid.is_left_column(8));
        assert!(grid.is_right_column(7));
        assert!(grid.is_right_column(9));
        assert!(!grid.is_right_column(8));
        assert_eq!(grid.position(9), Some((2, 1)));
        assert_eq!(grid.position(10), None);
    }

    #[test]
    fn test_set_active_keeps_single_flag() {
        let mut grid = wrapped(6, 3);
        assert_eq!(grid.set_active(1), None);
        assert_eq!(grid.set_active(4), Some(1));
        assert_eq!(grid.active(), Some(4));
        assert_eq!(grid.active_count(), 1);
        assert!(grid.cell(4).is_some_and(Cell::is_active));
    }

    #[test]
    fn test_set_active_out_of_range_is_ignored() {
        let mut grid = wrapped(3, 3);
        grid.set_active(2);
        grid.set_active(9);
        assert_eq!(grid.active(), Some(2));
        assert_eq!(grid.active_count(), 1);
    }

    #[test]
    fn test_new_clears_stale_flags() {
        let mut source = wrapped(2, 2);
        source.set_active(0);
        let grid = Grid::new(source.cells().to_vec());
        assert_eq!(grid.active_count(), 0);
        assert_eq!(grid.active(), None);
    }
}
