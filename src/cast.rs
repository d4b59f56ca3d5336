use crate::actor::Actor;
use crate::score::Score;
use crate::snake::Snake;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

/// Everything on the board: one snake and one score per player, plus the
/// messages shown on top.
#[derive(Clone, Debug, PartialEq)]
pub struct Cast {
    snakes: [Snake; 2],
    scores: [Score; 2],
    messages: Vec<Actor>,
}

impl Cast {
    pub fn new(snake: Snake, snake2: Snake, score: Score, score2: Score) -> Self {
        Cast { snakes: [snake, snake2], scores: [score, score2], messages: vec![] }
    }

    pub fn snake(&self, player: Player) -> &Snake {
        &self.snakes[player.index()]
    }

    pub fn snake_mut(&mut self, player: Player) -> &mut Snake {
        &mut self.snakes[player.index()]
    }

    pub fn snakes(&self) -> &[Snake] {
        &self.snakes
    }

    pub fn score(&self, player: Player) -> &Score {
        &self.scores[player.index()]
    }

    pub fn score_mut(&mut self, player: Player) -> &mut Score {
        &mut self.scores[player.index()]
    }

    pub fn scores(&self) -> &[Score] {
        &self.scores
    }

    pub fn add_message(&mut self, message: Actor) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Actor] {
        &self.messages
    }

    /// Starts a new round: fresh snakes, no messages. Scores carry over.
    pub fn reset_snakes(&mut self, snake: Snake, snake2: Snake) {
        self.snakes = [snake, snake2];
        self.messages.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::Direction;
    use crossterm::style::Color;

    fn cast() -> Cast {
        Cast::new(
            Snake::from_positions(&[(1, 1), (0, 1)], Direction::Right, Color::Blue),
            Snake::from_positions(&[(8, 8), (9, 8)], Direction::Left, Color::Green),
            Score::new((2, 0), Color::Blue),
            Score::new((20, 0), Color::Green),
        )
    }

    #[test]
    fn test_lookup_by_player() {
        let cast = cast();
        assert_eq!(cast.snake(Player::One).head().position, (1, 1));
        assert_eq!(cast.snake(Player::Two).head().position, (8, 8));
        assert_eq!(cast.score(Player::Two).actor().position(), (20, 0));
        assert!(cast.messages().is_empty());
    }

    #[test]
    fn test_add_message_keeps_insertion_order() {
        let mut cast = cast();
        cast.add_message(Actor::new((3, 3), "first", Color::White));
        cast.add_message(Actor::new((3, 4), "second", Color::White));
        let texts: Vec<&str> = cast.messages().iter().map(|m| m.text()).collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[test]
    fn test_reset_snakes_keeps_scores() {
        let mut cast = cast();
        cast.score_mut(Player::One).add_points();
        cast.add_message(Actor::new((3, 3), "Game Over", Color::White));

        cast.reset_snakes(
            Snake::from_positions(&[(4, 4)], Direction::Up, Color::Blue),
            Snake::from_positions(&[(6, 6)], Direction::Down, Color::Green),
        );

        assert_eq!(cast.snake(Player::One).head().position, (4, 4));
        assert_eq!(cast.snake(Player::Two).head().position, (6, 6));
        assert_eq!(cast.score(Player::One).points(), 1);
        assert!(cast.messages().is_empty());
    }
}
