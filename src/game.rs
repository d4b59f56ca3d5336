use std::{thread::sleep, time::Duration};

use crate::{Coords, TermInt};
use crate::action::{Action, MoveActorsAction};
use crate::cast::{Cast, Player};
use crate::collisions::{CollisionSettings, HandleCollisionsAction};
use crate::config::Config;
use crate::log;
use crate::score::Score;
use crate::snake::{Snake, Direction::{*, self}};
use crate::term::TermManager;

use anyhow::bail;
use crossterm::event::{KeyEvent, KeyModifiers, KeyCode};
use crossterm::style::Color;
use rand::Rng;

const MIN_WIDTH: TermInt = 12;
const MIN_HEIGHT: TermInt = 8;

const SNAKE_BODY_CHAR: char = '█';
const BLUE: Color = Color::Blue;
const GREEN: Color = Color::Green;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    PlayAgain,
    Quit,
}

pub struct DuelGame {
    config: Config,
    width: TermInt,
    height: TermInt,
    paused: bool,
    term: TermManager,
    drawn: Vec<Coords>,
}

impl DuelGame {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        Ok(DuelGame { config, width: 0, height: 0, paused: false, term: TermManager::new()?, drawn: vec![] })
    }

    pub fn initialize(&mut self) -> anyhow::Result<()> {
        let (w, h) = self.term.get_terminal_size();
        if w < MIN_WIDTH || h < MIN_HEIGHT {
            bail!("terminal is {}x{}, need at least {}x{}", w, h, MIN_WIDTH, MIN_HEIGHT);
        }
        self.width = w;
        self.height = h;

        self.term.setup()?;
        log!("Playing on a {}x{} grid", self.max_x(), self.max_y());
        Ok(())
    }

    pub fn shutdown(&mut self) -> anyhow::Result<()> {
        self.term.restore()?;
        Ok(())
    }

    pub fn show_intro(&mut self) -> anyhow::Result<Flow> {
        let lines = &[
            "Blue: WASD    Green: arrow keys",
            "Run into the other snake's body and you lose",
            "Esc to pause",
            "CTRL+C to quit",
            "",
            "Press any key to begin"
        ];

        self.term.show_message(lines)?;

        if is_ctrl_c(&self.term.read_key_blocking()?) {
            return Ok(Flow::Quit);
        }

        self.term.hide_message()?;
        Ok(Flow::PlayAgain)
    }

    /// Builds the cast for the first round, scores at zero.
    pub fn new_cast(&self) -> Cast {
        let (snake, snake2) = self.spawn_snakes();
        let score2_x = self.width.saturating_sub(12);
        Cast::new(snake, snake2, Score::new((2, 0), BLUE), Score::new((score2_x, 0), GREEN))
    }

    /// Plays one round on `cast` until a snake loses, then waits for a key.
    pub fn play(&mut self, cast: &mut Cast) -> anyhow::Result<Flow> {
        let (snake, snake2) = self.spawn_snakes();
        cast.reset_snakes(snake, snake2);

        let (max_x, max_y) = (self.max_x(), self.max_y());
        let mut mover = MoveActorsAction::new(max_x, max_y);
        let mut collisions = HandleCollisionsAction::new(
            CollisionSettings::new(max_x, max_y, self.config.growth_interval));

        let mut dir_changes: [Option<Direction>; 2] = [None, None];
        let mut ticks_until_step = self.config.ticks_per_step;

        self.redraw(cast)?;

        loop {
            sleep(Duration::from_millis(self.config.tick_interval_ms));

            for key_ev in self.term.read_key_events_queue()? {
                match &key_ev {
                    ev if is_ctrl_c(ev) => return Ok(Flow::Quit),
                    KeyEvent { code, modifiers: _ } => match code {
                        KeyCode::Char('w') => dir_changes[0] = Some(Up),
                        KeyCode::Char('a') => dir_changes[0] = Some(Left),
                        KeyCode::Char('s') => dir_changes[0] = Some(Down),
                        KeyCode::Char('d') => dir_changes[0] = Some(Right),
                        KeyCode::Up => dir_changes[1] = Some(Up),
                        KeyCode::Left => dir_changes[1] = Some(Left),
                        KeyCode::Down => dir_changes[1] = Some(Down),
                        KeyCode::Right => dir_changes[1] = Some(Right),
                        KeyCode::Esc => self.toggle_pause(cast)?,
                        _ => {}
                    }
                }
            }

            if self.paused { continue; }

            ticks_until_step -= 1;
            if ticks_until_step > 0 { continue; }
            ticks_until_step = self.config.ticks_per_step;

            for player in Player::ALL {
                if let Some(dir) = dir_changes[player.index()].take() {
                    cast.snake_mut(player).set_direction(dir);
                }
            }

            mover.execute(cast);
            collisions.execute(cast);
            self.draw_actors(cast)?;

            if collisions.is_game_over() {
                log!("Round over after {} frames: {:?} wins", collisions.timer(), collisions.winner());
                log!("Scores: blue {}, green {}", cast.score(Player::One).points(), cast.score(Player::Two).points());
                break;
            }
        }

        let hint = "Any key: play again, CTRL+C: quit";
        let (cx, cy) = to_screen(CollisionSettings::new(max_x, max_y, 1).center);
        self.term.print_text_at((centered_start(cx, hint), (cy + 2).min(self.height - 2)), hint, Color::Reset)?;
        self.term.flush()?;

        if is_ctrl_c(&self.term.read_key_blocking()?) {
            return Ok(Flow::Quit);
        }
        Ok(Flow::PlayAgain)
    }

    ///////////////////////////////////////////////////////////////////////////

    fn max_x(&self) -> TermInt {
        self.width - 2
    }

    fn max_y(&self) -> TermInt {
        self.height - 2
    }

    fn spawn_snakes(&self) -> (Snake, Snake) {
        let (max_x, max_y) = (self.max_x(), self.max_y());
        let length = self.config.initial_snake_length;
        let mut rng = rand::thread_rng();

        let blue_head = (max_x / 4, rng.gen_range(0..max_y / 2));
        let green_head = (max_x - 1 - max_x / 4, rng.gen_range(max_y / 2..max_y));

        (
            Snake::new(blue_head, length, Right, BLUE, max_x, max_y),
            Snake::new(green_head, length, Left, GREEN, max_x, max_y),
        )
    }

    fn redraw(&mut self, cast: &Cast) -> anyhow::Result<()> {
        self.term.clear()?;
        self.drawn.clear();
        self.term.draw_borders()?;
        self.draw_actors(cast)
    }

    fn draw_actors(&mut self, cast: &Cast) -> anyhow::Result<()> {
        for pos in self.drawn.drain(..) {
            self.term.print_at(pos, ' ', Color::Reset)?;
        }

        for snake in cast.snakes() {
            // Tail first so the head always ends up on top.
            for segment in snake.tail().iter().rev() {
                let pos = to_screen(segment.position);
                self.term.print_at(pos, SNAKE_BODY_CHAR, segment.color)?;
                self.drawn.push(pos);
            }
            let head = snake.head();
            let pos = to_screen(head.position);
            self.term.print_at(pos, snake.head_char(), head.color)?;
            self.drawn.push(pos);
        }

        for score in cast.scores() {
            let actor = score.actor();
            self.term.print_text_at(actor.position(), &format!(" {} ", actor.text()), actor.color())?;
        }

        for message in cast.messages() {
            let (x, y) = to_screen(message.position());
            self.term.print_text_at((centered_start(x, message.text()), y), message.text(), message.color())?;
        }

        self.term.flush()?;
        Ok(())
    }

    fn toggle_pause(&mut self, cast: &Cast) -> anyhow::Result<()> {
        if !self.paused {
            self.term.show_message(&["Paused", "Press Esc to resume", "or Ctrl+C to quit"])?;
        } else {
            self.term.hide_message()?;
            self.redraw(cast)?;
        }

        self.paused = !self.paused;
        Ok(())
    }
}

/// Grid cells sit inside the border.
fn to_screen(pos: Coords) -> Coords {
    (pos.0 + 1, pos.1 + 1)
}

fn centered_start(center_x: TermInt, text: &str) -> TermInt {
    center_x.saturating_sub(text.chars().count() as TermInt / 2)
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_screen_skips_border() {
        assert_eq!(to_screen((0, 0)), (1, 1));
        assert_eq!(to_screen((10, 4)), (11, 5));
    }

    #[test]
    fn test_centered_start() {
        assert_eq!(centered_start(20, "abcd"), 18);
        assert_eq!(centered_start(1, "a long message"), 0);
    }

    #[test]
    fn test_is_ctrl_c() {
        assert!(is_ctrl_c(&KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL }));
        assert!(!is_ctrl_c(&KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::NONE }));
    }
}
