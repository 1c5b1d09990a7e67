// coro.rs - One async task per row over a shared snapshot of the previous generation

use log::debug;
use tokio::runtime::Runtime;
use tokio::task::JoinError;

use crate::universe::{Snapshot, Universe};

/// Row coroutine: live-neighbour counts for every cell of `row_index`.
async fn process_row(row_index: usize, snapshot: Snapshot) -> (usize, Vec<u8>) {
    let mut counts = Vec::with_capacity(snapshot.width());
    for column in 0..snapshot.width() {
        counts.push(snapshot.live_neighbours(row_index, column));
        tokio::task::yield_now().await;  // Cooperative yielding
    }
    (row_index, counts)
}

/// Computes the next generation of `universe` with one spawned task per row,
/// then commits every row at once. Must run inside a tokio runtime. The
/// universe is left untouched if any row task fails.
///
/// Always synchronous: the universe's [`UpdateMode`](crate::UpdateMode) is
/// not consulted.
pub async fn tick_rows(universe: &mut Universe) -> Result<usize, JoinError> {
    let snapshot = universe.snapshot();
    let width = universe.width();
    let height = universe.height();

    let mut handles = Vec::with_capacity(height);
    for row in 0..height {
        handles.push(tokio::spawn(process_row(row, snapshot.clone())));
    }

    let mut counts = vec![0u8; width * height];
    for handle in handles {
        let (row_index, row_counts) = handle.await?;
        counts[row_index * width..(row_index + 1) * width].copy_from_slice(&row_counts);
    }

    Ok(universe.commit(&counts))
}

/// Owns the runtime used to drive row tasks from synchronous code.
pub struct RowScheduler {
    runtime: Runtime,
}

impl RowScheduler {
    pub fn new() -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        debug!("row scheduler started");
        Ok(Self { runtime })
    }

    pub fn tick(&self, universe: &mut Universe) -> Result<usize, JoinError> {
        self.runtime.block_on(tick_rows(universe))
    }
}
