// cell.rs - Cell records owned by a Universe

use crate::rules;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum CellState {
    #[default]
    Dead  = 0,
    Alive = 1,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive { CellState::Alive } else { CellState::Dead }
    }
}

/// One grid position. `x` is the row (outer loop, bounded by height) and `y`
/// the column (inner loop, bounded by width); neither changes after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    x: usize,
    y: usize,
    state: CellState,
    live_neighbours: u8,
}

impl Cell {
    pub(crate) fn new(x: usize, y: usize) -> Self {
        Self { x, y, state: CellState::Dead, live_neighbours: 0 }
    }

    pub fn x(&self) -> usize { self.x }
    pub fn y(&self) -> usize { self.y }
    pub fn state(&self) -> CellState { self.state }

    /// Neighbour count from the most recent tick.
    pub fn live_neighbours(&self) -> u8 { self.live_neighbours }

    pub fn is_alive(&self) -> bool {
        self.state.is_alive()
    }

    pub(crate) fn set_state(&mut self, state: CellState) {
        self.state = state;
    }

    pub(crate) fn set_live_neighbours(&mut self, count: u8) {
        debug_assert!(count <= 8);
        self.live_neighbours = count;
    }

    /// Applies the life/death rule to the stored neighbour count.
    /// Returns true when the state changed.
    pub(crate) fn update_status(&mut self) -> bool {
        let next = rules::next_state(self.state, self.live_neighbours);
        let changed = next != self.state;
        self.state = next;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell_with(state: CellState, live_neighbours: u8) -> Cell {
        let mut cell = Cell::new(0, 0);
        cell.set_state(state);
        cell.set_live_neighbours(live_neighbours);
        cell
    }

    #[test]
    fn update_status_reports_changes() {
        let mut lonely = cell_with(CellState::Alive, 1);
        assert!(lonely.update_status());
        assert_eq!(lonely.state(), CellState::Dead);

        let mut crowded = cell_with(CellState::Alive, 4);
        assert!(crowded.update_status());
        assert_eq!(crowded.state(), CellState::Dead);

        let mut stable = cell_with(CellState::Alive, 2);
        assert!(!stable.update_status());
        assert!(stable.is_alive());

        let mut born = cell_with(CellState::Dead, 3);
        assert!(born.update_status());
        assert!(born.is_alive());

        let mut empty = cell_with(CellState::Dead, 2);
        assert!(!empty.update_status());
        assert!(!empty.is_alive());
    }

    #[test]
    fn state_converts_to_reference_integers() {
        assert_eq!(CellState::Dead as u8, 0);
        assert_eq!(CellState::Alive as u8, 1);
        assert_eq!(CellState::from(true), CellState::Alive);
    }
}
