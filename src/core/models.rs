use std::fmt;

use crate::core::{Grid, Symbols, UndoLog};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "Up"),
            Direction::Down => write!(f, "Down"),
            Direction::Left => write!(f, "Left"),
            Direction::Right => write!(f, "Right"),
        }
    }
}

/// Whether the entity occupying a cell stands on a goal tile.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum GoalState {
    OffGoal,
    OnGoal,
}

/// A decoded grid symbol. Box letters are always stored uppercase; the goal
/// state carries the case.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Cell {
    Floor(GoalState),
    Player(GoalState),
    Box { letter: u8, goal: GoalState },
    Blocked,
}

/// One applied push, as much as undo needs to invert it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Move {
    pub player_pos: usize,
    /// The letter as the caller supplied it, in either case.
    pub box_letter: u8,
    pub direction: Direction,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.box_letter as char, self.direction)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum UserAction {
    Push { letter: u8, direction: Direction },
    Undo,
}

/// A whole session: the board, how to read it, and the pushes that can be undone.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) grid: Grid,
    pub(crate) symbols: Symbols,
    pub(crate) undo_log: UndoLog,
}

pub enum GameUpdate {
    NextState(GameChangeType),
    NoChange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameChangeType {
    Push(Move),
    Undo(Move),
}

/// Why a push did not happen. Only ever logged; callers see a plain `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PushRejection {
    #[error("no player on the board")]
    NoPlayer,
    #[error("box '{}' is not on the board", letter(.0))]
    UnknownBox(u8),
    #[error("box has no neighbor in the push direction")]
    NoDestination,
    #[error("there is no cell to push from")]
    NoPushFromCell,
    #[error("destination cell is not enterable")]
    DestinationBlocked,
    #[error("player cannot reach the push-from cell")]
    Unreachable,
}

fn letter(byte: &u8) -> char {
    *byte as char
}
