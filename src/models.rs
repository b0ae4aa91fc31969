use crate::config::Controls;
use crate::core::{GameChangeType, GameState};

pub struct GameRenderState<'a> {
    pub game: &'a GameState,
    pub controls: &'a Controls,
    pub selected: Option<u8>,
    pub last_change: Option<GameChangeType>,
}

impl<'a> GameRenderState<'a> {
    pub fn new(
        game: &'a GameState,
        controls: &'a Controls,
        selected: Option<u8>,
        last_change: Option<GameChangeType>,
    ) -> Self {
        Self {
            game,
            controls,
            selected,
            last_change,
        }
    }
}
