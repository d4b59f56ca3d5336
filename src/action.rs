use crate::TermInt;
use crate::cast::{Cast, Player};

/// A step run against the cast once per frame.
pub trait Action {
    fn execute(&mut self, cast: &mut Cast);
}

/// Moves both snakes one cell, wrapping at the grid edges.
pub struct MoveActorsAction {
    max_x: TermInt,
    max_y: TermInt,
}

impl MoveActorsAction {
    pub fn new(max_x: TermInt, max_y: TermInt) -> Self {
        MoveActorsAction { max_x, max_y }
    }
}

impl Action for MoveActorsAction {
    fn execute(&mut self, cast: &mut Cast) {
        for player in Player::ALL {
            cast.snake_mut(player).move_step(self.max_x, self.max_y);
        }
    }
}
