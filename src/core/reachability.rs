use std::collections::VecDeque;

use log::trace;

use crate::core::{Grid, Symbols};

impl Grid {
    /// Whether the player could walk from `origin` to `destination` right now.
    /// Only floor and player cells are entered; boxes block like walls.
    pub fn can_reach(&self, symbols: &Symbols, origin: usize, destination: usize) -> bool {
        let mut found = false;
        let explored = self.flood(symbols, origin, |cell| {
            found = cell == destination;
            found
        });
        trace!("reach {origin} -> {destination}: {found} after {explored} cells");
        found
    }

    /// Every cell the player can walk to from `origin`, `origin` included.
    pub fn reachable_cells(&self, symbols: &Symbols, origin: usize) -> Vec<usize> {
        let mut cells = Vec::new();
        self.flood(symbols, origin, |cell| {
            cells.push(cell);
            false
        });
        cells.sort_unstable();
        cells
    }

    /// Breadth-first flood from `origin`, calling `visit` on every labeled cell until
    /// it returns true. Returns how many cells were labeled.
    fn flood<F>(&self, symbols: &Symbols, origin: usize, mut visit: F) -> usize
    where
        F: FnMut(usize) -> bool,
    {
        let mut labeled = vec![false; self.len()];
        let mut frontier = VecDeque::new();
        labeled[origin] = true;
        frontier.push_back(origin);
        let mut count = 0;

        while let Some(cell) = frontier.pop_front() {
            count += 1;
            if visit(cell) {
                break;
            }
            for next in self.neighbors(cell) {
                if labeled[next] {
                    continue;
                }
                labeled[next] = true;
                if self.get(next).is_some_and(|symbol| symbols.is_walkable(symbol)) {
                    frontier.push_back(next);
                }
            }
        }
        count
    }
}
