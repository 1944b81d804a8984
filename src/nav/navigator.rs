use super::{Direction, Grid, NavigationConfig};

/// Where a navigation request leads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Cell(usize),
    /// Focus leaves the grid through its top edge
    Search,
}

/// What [`Navigator::navigate`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Moved { from: Option<usize>, to: usize },
    ExitedToSearch { from: usize },
    Unchanged,
}

/// Owner of input focus: the search field or one of the grid cells
pub trait FocusHost {
    fn search_focused(&self) -> bool;
    fn focus_search(&mut self);
    fn focus_cell(&mut self, index: usize);
}

/// Consumer of active-cell changes
pub trait Presenter {
    fn active_changed(&mut self, previous: Option<usize>, current: Option<usize>);
    fn scroll_into_view(&mut self, index: usize);
}

/// Computes where `direction` leads from `active`.
///
/// Returns `None` when the move is not possible: no active cell, an index
/// that is not in the grid, or an edge without wrapping.
#[must_use]
pub fn next_target(
    grid: &Grid,
    active: Option<usize>,
    direction: Direction,
    config: NavigationConfig,
) -> Option<Target> {
    let index = active?;
    if index >= grid.len() {
        return None;
    }

    let target = match direction {
        Direction::Up => up(grid, index),
        Direction::Down => down(grid, index),
        Direction::Left => left(grid, index, config.wrap),
        Direction::Right => right(grid, index, config.wrap),
    }?;

    match target {
        Target::Cell(next) if next >= grid.len() => None,
        other => Some(other),
    }
}

fn up(grid: &Grid, index: usize) -> Option<Target> {
    if grid.len() == 1 {
        return None;
    }
    if grid.is_top_row(index) {
        return Some(Target::Search);
    }

    let per_row = grid.num_per_row();
    let bottom_start = grid.bottom_row_start();
    if grid.is_bottom_row(index) && grid.last_row_count() != per_row {
        // Keep the column when leaving a short final row
        let column = index - bottom_start;
        let row_above = bottom_start.checked_sub(per_row)?;
        return Some(Target::Cell(row_above + column));
    }

    index.checked_sub(per_row).map(Target::Cell)
}

fn down(grid: &Grid, index: usize) -> Option<Target> {
    if grid.is_bottom_row(index) {
        // Pressing down on the bottom row behaves like up.
        return up(grid, index);
    }

    let per_row = grid.num_per_row();
    let next = index + per_row;
    let bottom_start = grid.bottom_row_start();
    if next >= bottom_start && grid.last_row_count() != per_row {
        let column = (index % per_row).min(grid.last_row_count() - 1);
        return Some(Target::Cell(bottom_start + column));
    }

    Some(Target::Cell(next))
}

fn left(grid: &Grid, index: usize, wrap: bool) -> Option<Target> {
    if !grid.is_left_column(index) {
        return Some(Target::Cell(index - 1));
    }
    if !wrap {
        return None;
    }
    let row_end = (index + grid.num_per_row() - 1).min(grid.len() - 1);
    Some(Target::Cell(row_end))
}

fn right(grid: &Grid, index: usize, wrap: bool) -> Option<Target> {
    if !grid.is_right_column(index) {
        return Some(Target::Cell(index + 1));
    }
    if !wrap {
        return None;
    }
    let row_start = index - index % grid.num_per_row();
    Some(Target::Cell(row_start))
}

/// Applies navigation requests to a grid and reports them to the host
#[derive(Debug, Clone, Copy, Default)]
pub struct Navigator {
    config: NavigationConfig,
}

impl Navigator {
    pub fn new(config: NavigationConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> NavigationConfig {
        self.config
    }

    /// Moves the active cell one step in `direction`.
    ///
    /// While focus is outside the grid only `Down` does anything: it enters
    /// the grid at its first row.
    pub fn navigate<H>(&self, grid: &mut Grid, host: &mut H, direction: Direction) -> Outcome
    where
        H: FocusHost + Presenter,
    {
        if host.search_focused() || grid.active().is_none() {
            return match direction {
                Direction::Down => self.enter(grid, host),
                Direction::Up | Direction::Left | Direction::Right => Outcome::Unchanged,
            };
        }

        let active = grid.active();
        let outcome = match next_target(grid, active, direction, self.config) {
            Some(Target::Cell(to)) => Self::activate(grid, host, to),
            Some(Target::Search) => self.leave(grid, host),
            None => Outcome::Unchanged,
        };

        tracing::debug!(%direction, ?active, ?outcome, "navigate");
        outcome
    }

    /// Clears the active cell and hands focus back to the search field
    pub fn leave<H>(&self, grid: &mut Grid, host: &mut H) -> Outcome
    where
        H: FocusHost + Presenter,
    {
        let from = grid.clear_active();
        if from.is_some() {
            host.active_changed(from, None);
        }
        host.focus_search();
        from.map_or(Outcome::Unchanged, |from| Outcome::ExitedToSearch { from })
    }

    /// Selects the first cell, then steps right once per column
    fn enter<H>(&self, grid: &mut Grid, host: &mut H) -> Outcome
    where
        H: FocusHost + Presenter,
    {
        if grid.is_empty() {
            return Outcome::Unchanged;
        }

        let from = grid.active();
        let mut outcome = Self::activate(grid, host, 0);
        for _ in 0..grid.num_per_row() {
            if let Some(Target::Cell(to)) =
                next_target(grid, grid.active(), Direction::Right, self.config)
            {
                outcome = Self::activate(grid, host, to);
            }
        }

        let to = grid.active().unwrap_or(0);
        tracing::debug!(?from, to, "entered grid from search");
        match outcome {
            Outcome::Moved { .. } => Outcome::Moved { from, to },
            other => other,
        }
    }

    fn activate<H>(grid: &mut Grid, host: &mut H, to: usize) -> Outcome
    where
        H: FocusHost + Presenter,
    {
        let from = grid.set_active(to);
        host.active_changed(from, Some(to));
        host.scroll_into_view(to);
        host.focus_cell(to);
        Outcome::Moved { from, to }
    }
}
