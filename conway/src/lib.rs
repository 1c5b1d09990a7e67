//! Conway's Game of Life (B3/S23) on a fixed-size, non-wrapping grid.

mod cell;
mod display;
mod error;
mod rules;
mod seed;
mod universe;

pub mod coro;
pub mod history;
pub mod patterns;

pub use cell::{Cell, CellState};
pub use coro::RowScheduler;
pub use error::{Axis, Result, UniverseError};
pub use history::CycleDetector;
pub use rules::{directions, next_state};
pub use seed::Seed;
pub use universe::{Snapshot, Universe, UpdateMode};
