use crate::core::Move;

/// Applied pushes, most recent last. Each record is dropped once it is undone.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UndoLog {
    moves: Vec<Move>,
}

impl UndoLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: Move) {
        self.moves.push(record);
    }

    pub fn pop(&mut self) -> Option<Move> {
        self.moves.pop()
    }

    pub fn last(&self) -> Option<&Move> {
        self.moves.last()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Most recent first, the order undo consumes them.
    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter().rev()
    }
}
