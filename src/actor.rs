use crossterm::style::Color;

use crate::Coords;

/// Something drawn on the board: a position, some text and a colour.
#[derive(Clone, Debug, PartialEq)]
pub struct Actor {
    position: Coords,
    text: String,
    color: Color,
}

impl Actor {
    pub fn new(position: Coords, text: impl Into<String>, color: Color) -> Self {
        Actor { position, text: text.into(), color }
    }

    pub fn position(&self) -> Coords {
        self.position
    }

    pub fn set_position(&mut self, position: Coords) {
        self.position = position;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

impl Default for Actor {
    fn default() -> Self {
        Actor::new((0, 0), "", Color::White)
    }
}
