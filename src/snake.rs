use crossterm::style::Color;

use crate::{Coords, TermInt};
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    fn delta(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }
}

/// One body cell of a snake. Segments have no identity beyond where they
/// are and how they are drawn.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment {
    pub position: Coords,
    pub color: Color,
}

/// A snake on a wrapping grid. `segments[0]` is always the head and the
/// list is never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct Snake {
    segments: Vec<Segment>,
    direction: Direction,
}

impl Snake {
    /// Lays out `size` segments starting at `head` and trailing away from
    /// `direction`, wrapping around the `max_x` x `max_y` grid.
    pub fn new(head: Coords, size: u16, direction: Direction, color: Color, max_x: TermInt, max_y: TermInt) -> Self {
        let (dx, dy) = direction.delta();

        let positions: Vec<Coords> = (0..size.max(1) as i32)
            .map(|i| wrap(head, -dx * i, -dy * i, max_x, max_y))
            .collect();

        Snake::from_positions(&positions, direction, color)
    }

    pub fn from_positions(positions: &[Coords], direction: Direction, color: Color) -> Self {
        assert!(!positions.is_empty(), "a snake needs at least one segment");

        let segments = positions.iter()
            .map(|&position| Segment { position, color })
            .collect();
        Snake { segments, direction }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segments_mut(&mut self) -> &mut [Segment] {
        &mut self.segments
    }

    pub fn head(&self) -> Segment {
        self.segments[0]
    }

    /// Every segment behind the head.
    pub fn tail(&self) -> &[Segment] {
        &self.segments[1..]
    }

    /// Appends `n` segments on top of the current last one. They spread out
    /// as the snake moves.
    pub fn grow_tail(&mut self, n: usize) {
        let last = self.segments[self.segments.len() - 1];
        self.segments.extend(std::iter::repeat(last).take(n));
    }

    /// Moves the head one cell forward and pulls each segment into the spot
    /// of the one in front of it.
    pub fn move_step(&mut self, max_x: TermInt, max_y: TermInt) {
        let (dx, dy) = self.direction.delta();
        let new_head = wrap(self.segments[0].position, dx, dy, max_x, max_y);

        for i in (1..self.segments.len()).rev() {
            self.segments[i].position = self.segments[i - 1].position;
        }
        self.segments[0].position = new_head;
    }

    pub fn set_direction(&mut self, new_direction: Direction) {
        match (&new_direction, &self.direction) {
            (Up, Down) | (Down, Up) | (Right, Left) | (Left, Right) => {},
            _ => self.direction = new_direction,
        };
    }

    pub fn head_char(&self) -> char {
        match self.direction {
            Up => '^',
            Down => 'v',
            Left => '<',
            Right => '>',
        }
    }
}

fn wrap(pos: Coords, dx: i32, dy: i32, max_x: TermInt, max_y: TermInt) -> Coords {
    let (w, h) = (max_x.max(1) as i32, max_y.max(1) as i32);
    let x = (pos.0 as i32 + dx).rem_euclid(w);
    let y = (pos.1 as i32 + dy).rem_euclid(h);
    (x as TermInt, y as TermInt)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(snake: &Snake) -> Vec<Coords> {
        snake.segments().iter().map(|s| s.position).collect()
    }

    #[test]
    fn test_new_trails_behind_head() {
        let snake = Snake::new((5, 3), 3, Right, Color::Blue, 20, 10);
        assert_eq!(positions(&snake), vec![(5, 3), (4, 3), (3, 3)]);
        assert_eq!(snake.head().position, (5, 3));
        assert_eq!(snake.tail().len(), 2);
    }

    #[test]
    fn test_new_wraps_across_edge() {
        let snake = Snake::new((1, 0), 3, Right, Color::Green, 20, 10);
        assert_eq!(positions(&snake), vec![(1, 0), (0, 0), (19, 0)]);
    }

    #[test]
    fn test_new_never_builds_an_empty_snake() {
        let snake = Snake::new((1, 1), 0, Up, Color::Blue, 20, 10);
        assert_eq!(snake.segments().len(), 1);
        assert!(snake.tail().is_empty());
    }

    #[test]
    #[should_panic]
    fn test_from_positions_rejects_empty() {
        Snake::from_positions(&[], Up, Color::Blue);
    }

    #[test]
    fn test_grow_tail_stacks_on_last_segment() {
        let mut snake = Snake::from_positions(&[(4, 4), (3, 4)], Right, Color::Blue);
        snake.grow_tail(2);
        assert_eq!(positions(&snake), vec![(4, 4), (3, 4), (3, 4), (3, 4)]);
        assert!(snake.segments().iter().all(|s| s.color == Color::Blue));
    }

    #[test]
    fn test_move_step_follows_the_head() {
        let mut snake = Snake::from_positions(&[(4, 4), (3, 4), (2, 4)], Right, Color::Blue);
        snake.move_step(20, 10);
        assert_eq!(positions(&snake), vec![(5, 4), (4, 4), (3, 4)]);

        snake.set_direction(Down);
        snake.move_step(20, 10);
        assert_eq!(positions(&snake), vec![(5, 5), (5, 4), (4, 4)]);
    }

    #[test]
    fn test_move_step_separates_grown_segments() {
        let mut snake = Snake::from_positions(&[(4, 4), (3, 4)], Right, Color::Blue);
        snake.grow_tail(1);
        snake.move_step(20, 10);
        assert_eq!(positions(&snake), vec![(5, 4), (4, 4), (3, 4)]);
    }

    #[test]
    fn test_move_step_wraps_around() {
        let mut snake = Snake::from_positions(&[(0, 0)], Left, Color::Blue);
        snake.move_step(20, 10);
        assert_eq!(snake.head().position, (19, 0));

        snake.set_direction(Up);
        snake.move_step(20, 10);
        assert_eq!(snake.head().position, (19, 9));
    }

    #[test]
    fn test_set_direction_ignores_reversal() {
        let mut snake = Snake::from_positions(&[(4, 4)], Right, Color::Blue);
        snake.set_direction(Left);
        assert_eq!(snake.head_char(), '>');
        snake.set_direction(Up);
        assert_eq!(snake.head_char(), '^');
    }
}
