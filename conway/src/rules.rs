// rules.rs - B3/S23 transition and the 8 neighbour directions

use crate::cell::CellState;

/// Neighbour offsets as (row, column) deltas, every pair from {-1, 0, 1}
/// except (0, 0).
pub fn directions() -> [(isize, isize); 8] {
    const DELTAS: [isize; 3] = [0, 1, -1];

    let mut result = [(0, 0); 8];
    let mut n = 0;
    for &dj in &DELTAS {
        for &di in &DELTAS {
            if di == 0 && dj == 0 { continue; }
            result[n] = (dj, di);
            n += 1;
        }
    }
    result
}

/// Next state of a cell given its current state and live neighbour count.
pub fn next_state(state: CellState, live_neighbours: u8) -> CellState {
    match (state, live_neighbours) {
        (CellState::Alive, 2) | (CellState::Alive, 3) => CellState::Alive,  // Survival
        (CellState::Dead, 3)                          => CellState::Alive,  // Birth
        (CellState::Alive, _)                         => CellState::Dead,   // Under/overpopulation
        (CellState::Dead, _)                          => CellState::Dead,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn eight_distinct_directions_without_origin() {
        let dirs = directions();
        let unique: HashSet<_> = dirs.iter().copied().collect();
        assert_eq!(unique.len(), 8);
        assert!(!unique.contains(&(0, 0)));
        for (di, dj) in dirs {
            assert!((-1..=1).contains(&di) && (-1..=1).contains(&dj));
        }
    }

    #[test]
    fn transition_table_matches_b3_s23() {
        for n in 0..=8u8 {
            let survives = n == 2 || n == 3;
            let born = n == 3;
            assert_eq!(
                next_state(CellState::Alive, n) == CellState::Alive,
                survives,
                "alive cell with {n} neighbours"
            );
            assert_eq!(
                next_state(CellState::Dead, n) == CellState::Alive,
                born,
                "dead cell with {n} neighbours"
            );
        }
    }
}
