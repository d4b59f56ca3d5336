use crossterm::style::Color;

use crate::{log, Coords, TermInt};
use crate::action::Action;
use crate::actor::Actor;
use crate::cast::{Cast, Player};

#[derive(Clone, Debug, PartialEq)]
pub struct CollisionSettings {
    /// Where the game over message goes.
    pub center: Coords,
    /// Both snakes grow by one segment every this many frames.
    pub growth_interval: u32,
    /// Colour both snakes turn once the game is over.
    pub game_over_color: Color,
}

impl CollisionSettings {
    pub fn new(max_x: TermInt, max_y: TermInt, growth_interval: u32) -> Self {
        CollisionSettings {
            center: (max_x / 2, max_y / 2),
            growth_interval,
            game_over_color: Color::White,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Winner {
    Undecided,
    Blue,
    Green,
}

/// Per-frame update: grows both snakes on a timer, checks each head
/// against the other snake's body and ends the game on the first hit.
///
/// A head running into the other snake's body scores for the snake that
/// was hit. A snake running into its own body is not a collision.
pub struct HandleCollisionsAction {
    settings: CollisionSettings,
    is_game_over: bool,
    winner: Winner,
    timer: u32,
}

impl HandleCollisionsAction {
    pub fn new(settings: CollisionSettings) -> Self {
        HandleCollisionsAction { settings, is_game_over: false, winner: Winner::Undecided, timer: 0 }
    }

    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    pub fn winner(&self) -> Winner {
        self.winner
    }

    pub fn timer(&self) -> u32 {
        self.timer
    }

    fn handle_tail_growing(&mut self, cast: &mut Cast) {
        self.timer += 1;
        if self.timer % self.settings.growth_interval.max(1) == 0 {
            for player in Player::ALL {
                cast.snake_mut(player).grow_tail(1);
            }
            log!("Frame {}: both snakes grew", self.timer);
        }
    }

    fn handle_segment_collision(&mut self, cast: &mut Cast) {
        let head = cast.snake(Player::One).head().position;
        let head2 = cast.snake(Player::Two).head().position;

        // Every overlapping segment counts, so a head on a stacked segment
        // scores more than once.
        let hits = count_hits(cast, Player::One, head2);
        for _ in 0..hits {
            cast.score_mut(Player::One).add_points();
            self.winner = Winner::Blue;
            self.is_game_over = true;
        }
        if hits > 0 {
            log!("Green snake ran into blue snake at ({}, {})", head2.0, head2.1);
        }

        let hits2 = count_hits(cast, Player::Two, head);
        for _ in 0..hits2 {
            cast.score_mut(Player::Two).add_points();
            self.winner = Winner::Green;
            self.is_game_over = true;
        }
        if hits2 > 0 {
            log!("Blue snake ran into green snake at ({}, {})", head.0, head.1);
        }
    }

    fn handle_game_over(&mut self, cast: &mut Cast) {
        if !self.is_game_over {
            return;
        }

        let text = if self.winner == Winner::Blue {
            "Game Over, Blue Snake Wins!"
        } else {
            "Game Over, Green Snake Wins!"
        };

        let mut message = Actor::default();
        message.set_text(text);
        message.set_position(self.settings.center);
        message.set_color(self.settings.game_over_color);
        cast.add_message(message);

        for player in Player::ALL {
            for segment in cast.snake_mut(player).segments_mut() {
                segment.color = self.settings.game_over_color;
            }
        }

        log!("{} (frame {})", text, self.timer);
    }
}

impl Action for HandleCollisionsAction {
    fn execute(&mut self, cast: &mut Cast) {
        if !self.is_game_over {
            self.handle_tail_growing(cast);
            self.handle_segment_collision(cast);
            self.handle_game_over(cast);
        }
    }
}

fn count_hits(cast: &Cast, body_owner: Player, head: Coords) -> usize {
    cast.snake(body_owner).tail().iter()
        .filter(|segment| segment.position == head)
        .count()
}
