use std::collections::BTreeMap;

use crate::core::{Cell, GameState, GoalState, Grid, Symbols};

impl GameState {
    /// Solved once every box stands on a goal. A board without boxes is never solved.
    pub fn is_solved(&self) -> bool {
        let mut any_box = false;
        for &symbol in self.grid.as_bytes() {
            if let Cell::Box { goal, .. } = self.symbols.classify(symbol) {
                if goal == GoalState::OffGoal {
                    return false;
                }
                any_box = true;
            }
        }
        any_box
    }

    pub fn boxes_on_goals(&self) -> usize {
        self.grid
            .as_bytes()
            .iter()
            .filter(|&&symbol| {
                matches!(
                    self.symbols.classify(symbol),
                    Cell::Box { goal: GoalState::OnGoal, .. }
                )
            })
            .count()
    }
}

impl Grid {
    pub fn count_players(&self, symbols: &Symbols) -> usize {
        self.as_bytes()
            .iter()
            .filter(|&&symbol| symbols.is_player(symbol))
            .count()
    }

    /// Cells per box letter, keyed by the uppercase identity.
    pub fn box_counts(&self, symbols: &Symbols) -> BTreeMap<u8, usize> {
        let mut counts = BTreeMap::new();
        for &symbol in self.as_bytes() {
            if let Cell::Box { letter, .. } = symbols.classify(symbol) {
                *counts.entry(letter).or_insert(0) += 1;
            }
        }
        counts
    }
}
