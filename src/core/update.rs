use log::{debug, warn};

use crate::core::cell::box_symbol;
use crate::core::{
    Cell, Direction, GameChangeType, GameState, GameUpdate, Grid, Move, PushRejection, Symbols,
    UndoLog, UserAction,
};

/// Cells involved in one accepted push.
struct PushPlan {
    player: usize,
    origin: usize,
    destination: usize,
}

impl GameState {
    /// The board must hold exactly one player marker and at most one cell per box
    /// letter; nothing here checks that.
    pub fn new(grid: Grid, symbols: Symbols) -> Self {
        GameState {
            grid,
            symbols,
            undo_log: UndoLog::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn symbols(&self) -> &Symbols {
        &self.symbols
    }

    pub fn undo_log(&self) -> &UndoLog {
        &self.undo_log
    }

    pub fn player_position(&self) -> Option<usize> {
        self.grid
            .find(self.symbols.player)
            .or_else(|| self.grid.find(self.symbols.player_on_goal))
    }

    /// Finds box `letter` in whichever case it currently has.
    pub fn find_box(&self, letter: u8) -> Option<usize> {
        if !letter.is_ascii_alphabetic() {
            return None;
        }
        self.grid
            .find(letter.to_ascii_uppercase())
            .or_else(|| self.grid.find(letter.to_ascii_lowercase()))
    }

    /// Pushes box `letter` one cell towards `direction`, walking the player to the
    /// far side first. Illegal pushes leave the board and the undo log untouched.
    pub fn try_push(&mut self, letter: u8, direction: Direction) -> bool {
        self.push_move(letter, direction).is_some()
    }

    /// Reverts the most recent push. False when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.undo_move().is_some()
    }

    fn push_move(&mut self, letter: u8, direction: Direction) -> Option<Move> {
        let plan = match self.plan_push(letter, direction) {
            Ok(plan) => plan,
            Err(rejection) => {
                debug!("push {} {} rejected: {}", letter as char, direction, rejection);
                return None;
            }
        };

        let record = Move {
            player_pos: plan.player,
            box_letter: letter,
            direction,
        };
        self.undo_log.push(record);
        self.move_box(plan.player, plan.origin, plan.destination);
        debug!("pushed {}, {} in the undo log", record, self.undo_log.len());
        Some(record)
    }

    fn plan_push(&self, letter: u8, direction: Direction) -> Result<PushPlan, PushRejection> {
        let player = self.player_position().ok_or(PushRejection::NoPlayer)?;
        let origin = self
            .find_box(letter)
            .ok_or(PushRejection::UnknownBox(letter))?;
        let destination = self
            .grid
            .neighbor(origin, direction)
            .ok_or(PushRejection::NoDestination)?;
        let push_from = self
            .grid
            .neighbor(origin, direction.opposite())
            .ok_or(PushRejection::NoPushFromCell)?;

        if !self.grid.get(destination).is_some_and(|s| self.symbols.is_walkable(s)) {
            return Err(PushRejection::DestinationBlocked);
        }
        if !self.grid.can_reach(&self.symbols, player, push_from) {
            return Err(PushRejection::Unreachable);
        }

        Ok(PushPlan {
            player,
            origin,
            destination,
        })
    }

    fn undo_move(&mut self) -> Option<Move> {
        let Some(record) = self.undo_log.pop() else {
            debug!("nothing to undo");
            return None;
        };

        // The box sits one step past the cell it was pushed from; the player sits on that cell.
        let located = self.find_box(record.box_letter).and_then(|origin| {
            let back = self.grid.neighbor(origin, record.direction.opposite())?;
            let player = self.player_position()?;
            Some((player, origin, back))
        });
        let Some((player, origin, back)) = located else {
            warn!("cannot undo {}: board no longer matches the undo log", record);
            return None;
        };

        self.move_box(player, origin, back);
        self.step_off(origin);
        self.step_on(record.player_pos);
        debug!("undid {}, {} left in the undo log", record, self.undo_log.len());
        Some(record)
    }

    /// Moves the box at `origin` onto `destination` and the player from `player`
    /// onto `origin`, re-deriving every touched cell's goal form.
    fn move_box(&mut self, player: usize, origin: usize, destination: usize) {
        let Cell::Box { letter, goal } = self.symbols.classify(self.grid.as_bytes()[origin]) else {
            warn!("no box at {origin}, nothing moved");
            return;
        };
        // The player may be standing on the destination, so vacate first.
        self.step_off(player);
        let landing = self.symbols.goal_state(self.grid.as_bytes()[destination]);
        self.grid.set(destination, box_symbol(letter, landing));
        self.grid.set(origin, self.symbols.player_for(goal));
    }

    /// Replaces the player marker at `cell` with the floor it was standing on.
    fn step_off(&mut self, cell: usize) {
        let goal = self.symbols.goal_state(self.grid.as_bytes()[cell]);
        self.grid.set(cell, self.symbols.floor_for(goal));
    }

    /// Puts the player onto the floor at `cell`.
    fn step_on(&mut self, cell: usize) {
        let goal = self.symbols.goal_state(self.grid.as_bytes()[cell]);
        self.grid.set(cell, self.symbols.player_for(goal));
    }
}

pub fn step(game: &mut GameState, action: UserAction) -> GameUpdate {
    let change = match action {
        UserAction::Push { letter, direction } => {
            game.push_move(letter, direction).map(GameChangeType::Push)
        }
        UserAction::Undo => game.undo_move().map(GameChangeType::Undo),
    };
    match change {
        Some(change) => GameUpdate::NextState(change),
        None => GameUpdate::NoChange,
    }
}
