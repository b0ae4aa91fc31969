mod cell;
mod grid;
mod model_helpers;
mod models;
mod reachability;
mod undo_log;
mod update;

pub use cell::{ROW_TERMINATOR, Symbols};
pub use grid::Grid;
pub use models::{
    Cell, Direction, GameChangeType, GameState, GameUpdate, GoalState, Move, PushRejection,
    UserAction,
};
pub use undo_log::UndoLog;
pub use update::step;
