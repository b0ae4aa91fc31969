use crate::core::{Cell, GoalState};

pub const ROW_TERMINATOR: u8 = b'\n';

/// Difference between the ASCII codes of a lowercase letter and its uppercase form.
const CHANGE_CASE: u8 = b'a' - b'A';

/// The marker characters of a board. Box letters and the row terminator are fixed;
/// the four markers can be remapped through the config file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Symbols {
    pub player: u8,
    pub player_on_goal: u8,
    pub floor: u8,
    pub goal: u8,
}

impl Default for Symbols {
    fn default() -> Self {
        Symbols {
            player: b'@',
            player_on_goal: b'*',
            floor: b'-',
            goal: b'+',
        }
    }
}

impl Symbols {
    pub fn classify(&self, symbol: u8) -> Cell {
        match symbol {
            s if s == self.floor => Cell::Floor(GoalState::OffGoal),
            s if s == self.goal => Cell::Floor(GoalState::OnGoal),
            s if s == self.player => Cell::Player(GoalState::OffGoal),
            s if s == self.player_on_goal => Cell::Player(GoalState::OnGoal),
            b'A'..=b'Z' => Cell::Box {
                letter: symbol,
                goal: GoalState::OffGoal,
            },
            b'a'..=b'z' => Cell::Box {
                letter: symbol - CHANGE_CASE,
                goal: GoalState::OnGoal,
            },
            _ => Cell::Blocked,
        }
    }

    /// A player or a pushed box may step onto this symbol.
    pub fn is_walkable(&self, symbol: u8) -> bool {
        matches!(self.classify(symbol), Cell::Floor(_) | Cell::Player(_))
    }

    pub fn is_player(&self, symbol: u8) -> bool {
        symbol == self.player || symbol == self.player_on_goal
    }

    /// Walls and void count as off-goal.
    pub fn goal_state(&self, symbol: u8) -> GoalState {
        match self.classify(symbol) {
            Cell::Floor(goal) | Cell::Player(goal) | Cell::Box { goal, .. } => goal,
            Cell::Blocked => GoalState::OffGoal,
        }
    }

    pub fn floor_for(&self, goal: GoalState) -> u8 {
        match goal {
            GoalState::OffGoal => self.floor,
            GoalState::OnGoal => self.goal,
        }
    }

    pub fn player_for(&self, goal: GoalState) -> u8 {
        match goal {
            GoalState::OffGoal => self.player,
            GoalState::OnGoal => self.player_on_goal,
        }
    }

    pub fn markers(&self) -> [u8; 4] {
        [self.player, self.player_on_goal, self.floor, self.goal]
    }
}

/// `letter` is the uppercase identity of the box.
pub fn box_symbol(letter: u8, goal: GoalState) -> u8 {
    match goal {
        GoalState::OffGoal => letter,
        GoalState::OnGoal => letter + CHANGE_CASE,
    }
}
