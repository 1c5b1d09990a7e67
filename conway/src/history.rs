// history.rs - Spot still lifes and short oscillators by hashing recent generations

use std::collections::VecDeque;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::universe::Universe;

pub const HISTORY_LEN: usize = 10;

#[derive(Debug, Clone, Default)]
pub struct CycleDetector {
    history: VecDeque<u64>,
}

impl CycleDetector {
    pub fn new() -> Self {
        Self { history: VecDeque::with_capacity(HISTORY_LEN) }
    }

    /// Records the current generation. Returns true when it repeats one of
    /// the last `HISTORY_LEN` observed generations.
    pub fn observe(&mut self, universe: &Universe) -> bool {
        let current_hash = hash_universe(universe);
        if self.history.contains(&current_hash) { return true; }
        if self.history.len() == HISTORY_LEN {
            self.history.pop_front();
        }
        self.history.push_back(current_hash);
        false
    }

    pub fn reset(&mut self) {
        self.history.clear();
    }
}

pub fn hash_universe(universe: &Universe) -> u64 {
    let mut hasher = DefaultHasher::new();
    universe.width().hash(&mut hasher);
    universe.height().hash(&mut hasher);
    for cell in universe.cells() {
        cell.state().hash(&mut hasher);
    }
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::Seed;

    #[test]
    fn block_is_detected_after_one_tick() {
        let seed = Seed::Cells(vec![(1, 1), (1, 2), (2, 1), (2, 2)]);
        let mut universe = Universe::with_seed(4, 4, &seed).unwrap();
        let mut detector = CycleDetector::new();

        assert!(!detector.observe(&universe));
        universe.tick();
        assert!(detector.observe(&universe));
    }

    #[test]
    fn blinker_repeats_every_other_generation() {
        let seed = Seed::Cells(vec![(1, 2), (2, 2), (3, 2)]);
        let mut universe = Universe::with_seed(5, 5, &seed).unwrap();
        let mut detector = CycleDetector::new();

        assert!(!detector.observe(&universe));
        universe.tick();
        assert!(!detector.observe(&universe));
        universe.tick();
        assert!(detector.observe(&universe));

        detector.reset();
        assert!(!detector.observe(&universe));
    }
}
