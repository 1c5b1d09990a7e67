// universe.rs - Fixed-size bounded universe and the per-tick update

use std::slice::Chunks;
use std::sync::Arc;

use log::{debug, trace};

use crate::cell::{Cell, CellState};
use crate::error::{Axis, Result, UniverseError};
use crate::rules::directions;
use crate::seed::Seed;

/// How a tick orders its reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateMode {
    /// Every cell sees the previous generation (double-buffered).
    #[default]
    Synchronous,
    /// Cells are updated in place in row-major order, so cells later in the
    /// scan see neighbours that already moved on this tick.
    Sequential,
}

/// Row-major linear index, or the axis that falls outside the grid.
pub(crate) fn linear_index(width: usize, height: usize, row: isize, column: isize) -> Result<usize> {
    if row < 0 || row as usize >= height {
        return Err(UniverseError::OutOfRange { axis: Axis::Row, index: row, len: height });
    }
    if column < 0 || column as usize >= width {
        return Err(UniverseError::OutOfRange { axis: Axis::Column, index: column, len: width });
    }
    Ok(row as usize * width + column as usize)
}

/// Immutable copy of one generation, cheap to share between row tasks.
#[derive(Debug, Clone)]
pub struct Snapshot {
    width: usize,
    height: usize,
    states: Arc<[CellState]>,
}

impl Snapshot {
    pub fn width(&self) -> usize { self.width }
    pub fn height(&self) -> usize { self.height }

    pub fn state(&self, row: usize, column: usize) -> Result<CellState> {
        let idx = linear_index(self.width, self.height, row as isize, column as isize)?;
        Ok(self.states[idx])
    }

    /// Live neighbours of (row, column); off-grid positions count as dead.
    pub fn live_neighbours(&self, row: usize, column: usize) -> u8 {
        directions()
            .iter()
            .filter_map(|&(di, dj)| {
                linear_index(self.width, self.height, row as isize + di, column as isize + dj).ok()
            })
            .map(|idx| self.states[idx] as u8)
            .sum()
    }
}

/// Flat two-dimensional universe where Life plays out.
#[derive(Debug, Clone)]
pub struct Universe {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    cells_updated: usize,
    total_updates: u64,
    generation: u64,
    mode: UpdateMode,
}

impl Universe {
    /// All-dead universe of `width` columns by `height` rows.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(UniverseError::InvalidDimensions { width, height });
        }

        let mut cells = Vec::with_capacity(width * height);
        for x in 0..height {
            for y in 0..width {
                cells.push(Cell::new(x, y));
            }
        }

        Ok(Self {
            width,
            height,
            cells,
            cells_updated: 0,
            total_updates: 0,
            generation: 0,
            mode: UpdateMode::default(),
        })
    }

    pub fn with_seed(width: usize, height: usize, seed: &Seed) -> Result<Self> {
        let mut universe = Self::new(width, height)?;
        seed.apply(&mut universe)?;
        Ok(universe)
    }

    pub fn with_mode(mut self, mode: UpdateMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn set_mode(&mut self, mode: UpdateMode) {
        self.mode = mode;
    }

    pub fn mode(&self) -> UpdateMode { self.mode }
    pub fn width(&self) -> usize { self.width }
    pub fn height(&self) -> usize { self.height }
    pub fn generation(&self) -> u64 { self.generation }

    /// Cells that changed state during the most recent tick.
    pub fn cells_updated(&self) -> usize { self.cells_updated }

    /// Cells changed across every tick since the universe was last seeded.
    pub fn total_updates(&self) -> u64 { self.total_updates }

    /// `row * width + column`, checking row against height and column
    /// against width.
    pub fn index(&self, row: isize, column: isize) -> Result<usize> {
        linear_index(self.width, self.height, row, column)
    }

    /// Inverse of [`Universe::index`].
    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index / self.width, index % self.width)
    }

    /// State at an index previously returned by [`Universe::index`].
    pub fn cell_state(&self, index: usize) -> CellState {
        self.cells[index].state()
    }

    pub fn cell(&self, row: usize, column: usize) -> Result<&Cell> {
        let idx = self.index(row as isize, column as isize)?;
        Ok(&self.cells[idx])
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cells grouped into rows of `width`.
    pub fn rows(&self) -> Chunks<'_, Cell> {
        self.cells.chunks(self.width)
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    pub fn is_extinct(&self) -> bool {
        self.cells.iter().all(|c| !c.is_alive())
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            width: self.width,
            height: self.height,
            states: self.cells.iter().map(Cell::state).collect(),
        }
    }

    /// How many of the 8 neighbour positions of (row, column) lie on the grid.
    pub fn candidate_neighbours(&self, row: usize, column: usize) -> usize {
        directions()
            .iter()
            .filter(|&&(di, dj)| self.index(row as isize + di, column as isize + dj).is_ok())
            .count()
    }

    /// Live neighbours of (row, column) as currently stored.
    pub fn live_neighbours(&self, row: usize, column: usize) -> u8 {
        directions()
            .iter()
            .filter_map(|&(di, dj)| self.index(row as isize + di, column as isize + dj).ok())
            .map(|idx| self.cell_state(idx) as u8)
            .sum()
    }

    pub(crate) fn set_state(&mut self, row: usize, column: usize, state: CellState) -> Result<()> {
        let idx = self.index(row as isize, column as isize)?;
        self.cells[idx].set_state(state);
        Ok(())
    }

    /// All cells dead, counters back to generation zero.
    pub(crate) fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.set_state(CellState::Dead);
            cell.set_live_neighbours(0);
        }
        self.cells_updated = 0;
        self.total_updates = 0;
        self.generation = 0;
    }

    /// Advances one generation; returns the number of cells that changed.
    pub fn tick(&mut self) -> usize {
        match self.mode {
            UpdateMode::Synchronous => {
                let snapshot = self.snapshot();
                let counts: Vec<u8> = (0..self.height)
                    .flat_map(|row| (0..self.width).map(move |column| (row, column)))
                    .map(|(row, column)| snapshot.live_neighbours(row, column))
                    .collect();
                self.commit(&counts)
            }
            UpdateMode::Sequential => self.tick_sequential(),
        }
    }

    /// Runs `n` ticks; returns the number of changes across all of them.
    pub fn tick_n(&mut self, n: u64) -> usize {
        (0..n).map(|_| self.tick()).sum()
    }

    fn tick_sequential(&mut self) -> usize {
        let mut changed = 0;
        for row in 0..self.height {
            for column in 0..self.width {
                let idx = match self.index(row as isize, column as isize) {
                    Ok(idx) => idx,
                    Err(_) => continue,
                };
                let count = self.live_neighbours(row, column);
                let cell = &mut self.cells[idx];
                cell.set_live_neighbours(count);
                if cell.update_status() { changed += 1; }
            }
        }
        self.finish_tick(changed)
    }

    /// Writes a whole generation from neighbour counts taken against the
    /// previous one. `counts` is row-major, one entry per cell.
    pub(crate) fn commit(&mut self, counts: &[u8]) -> usize {
        debug_assert_eq!(counts.len(), self.cells.len());
        let mut changed = 0;
        for (cell, &count) in self.cells.iter_mut().zip(counts) {
            cell.set_live_neighbours(count);
            if cell.update_status() { changed += 1; }
        }
        self.finish_tick(changed)
    }

    fn finish_tick(&mut self, changed: usize) -> usize {
        self.cells_updated = changed;
        self.total_updates += changed as u64;
        self.generation += 1;
        trace!("generation {}: {} cells changed", self.generation, changed);
        if changed == 0 {
            debug!("generation {} is stable", self.generation);
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_dimensions() {
        assert_eq!(
            Universe::new(0, 4).unwrap_err(),
            UniverseError::InvalidDimensions { width: 0, height: 4 }
        );
        assert!(Universe::new(4, 0).is_err());
    }

    #[test]
    fn index_names_the_failing_axis() {
        let universe = Universe::new(4, 2).unwrap();
        assert_eq!(universe.index(1, 3), Ok(7));
        assert_eq!(
            universe.index(2, 0),
            Err(UniverseError::OutOfRange { axis: Axis::Row, index: 2, len: 2 })
        );
        assert_eq!(
            universe.index(0, -1),
            Err(UniverseError::OutOfRange { axis: Axis::Column, index: -1, len: 4 })
        );
    }

    #[test]
    fn cells_carry_row_and_column() {
        let universe = Universe::new(3, 2).unwrap();
        assert_eq!(universe.cells().len(), 6);
        let cell = universe.cell(1, 2).unwrap();
        assert_eq!((cell.x(), cell.y()), (1, 2));
        assert_eq!(universe.rows().count(), 2);
    }

    #[test]
    fn counters_reset_each_tick_but_total_accumulates() {
        let seed = Seed::Cells(vec![(1, 2), (2, 2), (3, 2)]);
        let mut universe = Universe::with_seed(5, 5, &seed).unwrap();

        assert_eq!(universe.tick(), 4);
        assert_eq!(universe.tick(), 4);
        assert_eq!(universe.cells_updated(), 4);
        assert_eq!(universe.total_updates(), 8);
        assert_eq!(universe.generation(), 2);
    }

    #[test]
    fn snapshot_state_is_bounds_checked() {
        let universe = Universe::with_seed(3, 2, &Seed::Cells(vec![(1, 0)])).unwrap();
        let snapshot = universe.snapshot();
        assert_eq!(snapshot.state(1, 0), Ok(CellState::Alive));
        assert_eq!(
            snapshot.state(0, 3),
            Err(UniverseError::OutOfRange { axis: Axis::Column, index: 3, len: 3 })
        );
        assert!(snapshot.state(2, 0).is_err());
    }

    #[test]
    fn tick_records_neighbour_counts() {
        let seed = Seed::Cells(vec![(1, 2), (2, 2), (3, 2)]);
        let mut universe = Universe::with_seed(5, 5, &seed).unwrap();
        universe.tick();
        assert_eq!(universe.cell(2, 2).unwrap().live_neighbours(), 2);
        assert_eq!(universe.cell(2, 1).unwrap().live_neighbours(), 3);
        assert_eq!(universe.cell(0, 0).unwrap().live_neighbours(), 0);
    }
}
