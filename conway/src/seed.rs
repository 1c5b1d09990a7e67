// seed.rs - Deterministic initial generations

use log::info;
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use crate::cell::CellState;
use crate::error::{Result, UniverseError};
use crate::patterns::{self, Pattern};
use crate::universe::{linear_index, Universe};

/// How the first generation is populated.
#[derive(Debug, Clone, Default)]
pub enum Seed {
    /// Upper-right quadrant, rows that are even or a multiple of 7.
    #[default]
    Quadrant,
    Empty,
    /// Explicit (row, column) live cells.
    Cells(Vec<(usize, usize)>),
    /// A named pattern centred in the grid.
    Pattern(&'static Pattern),
    /// Each cell alive with probability `density`, reproducible from `seed`.
    Random { seed: u64, density: f64 },
}

impl Seed {
    /// Resolves `quadrant`, `empty`, `random` or a pattern name.
    pub fn parse(name: &str, rng_seed: u64, density: f64) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "quadrant" => Ok(Seed::Quadrant),
            "empty"    => Ok(Seed::Empty),
            "random"   => Ok(Seed::Random { seed: rng_seed, density }),
            _ => patterns::find(name)
                .map(Seed::Pattern)
                .ok_or_else(|| UniverseError::UnknownPattern(name.to_string())),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Seed::Quadrant       => "quadrant",
            Seed::Empty          => "empty",
            Seed::Cells(_)       => "cells",
            Seed::Pattern(p)     => p.name,
            Seed::Random { .. }  => "random",
        }
    }

    /// Replaces the universe's contents with this seed and restarts its
    /// generation and change counters. The universe is left untouched when
    /// the seed does not fit.
    pub fn apply(&self, universe: &mut Universe) -> Result<()> {
        let (width, height) = (universe.width(), universe.height());
        let live = self.live_cells(width, height)?;

        universe.reset();
        for &(row, column) in &live {
            universe.set_state(row, column, CellState::Alive)?;
        }

        info!(
            "seeded {}x{} universe with {}: {} live cells",
            width,
            height,
            self.name(),
            live.len()
        );
        Ok(())
    }

    /// Live (row, column) cells this seed produces on a `width`×`height` grid.
    fn live_cells(&self, width: usize, height: usize) -> Result<Vec<(usize, usize)>> {
        let mut live = Vec::new();

        match self {
            Seed::Quadrant => {
                for row in 0..height {
                    for column in 0..width {
                        if quadrant_alive(width, height, row, column) {
                            live.push((row, column));
                        }
                    }
                }
            }
            Seed::Empty => {}
            Seed::Cells(cells) => {
                for &(row, column) in cells {
                    linear_index(width, height, row as isize, column as isize)?;
                    live.push((row, column));
                }
            }
            Seed::Pattern(pattern) => {
                let (rows, columns) = pattern.extent();
                if rows > height || columns > width {
                    return Err(UniverseError::PatternTooLarge {
                        name: pattern.name,
                        rows,
                        columns,
                        width,
                        height,
                    });
                }
                let top = (height - rows) / 2;
                let left = (width - columns) / 2;
                live.extend(pattern.cells.iter().map(|&(row, column)| (top + row, left + column)));
            }
            Seed::Random { seed, density } => {
                if !(0.0..=1.0).contains(density) {
                    return Err(UniverseError::InvalidDensity(*density));
                }
                let mut rng = StdRng::seed_from_u64(*seed);
                for row in 0..height {
                    for column in 0..width {
                        if rng.gen_bool(*density) {
                            live.push((row, column));
                        }
                    }
                }
            }
        }
        Ok(live)
    }
}

fn quadrant_alive(width: usize, height: usize, row: usize, column: usize) -> bool {
    column > width / 2 && row < height / 2 && (row % 2 == 0 || row % 7 == 0)
}
