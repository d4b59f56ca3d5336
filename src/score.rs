use crossterm::style::Color;

use crate::Coords;
use crate::actor::Actor;

/// Points earned by one player, shown as `Score: <n>`.
#[derive(Clone, Debug, PartialEq)]
pub struct Score {
    actor: Actor,
    points: i32,
}

impl Score {
    pub fn new(position: Coords, color: Color) -> Self {
        let mut score = Score { actor: Actor::new(position, "", color), points: -1 };
        score.add_points();
        score
    }

    pub fn add_points(&mut self) {
        self.points += 1;
        self.actor.set_text(format!("Score: {}", self.points));
    }

    pub fn points(&self) -> i32 {
        self.points
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }
}
