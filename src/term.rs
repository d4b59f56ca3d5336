use crate::{TermInt, Coords};
use std::{io::{Stdout, Write, stdout}, time::Duration};

use crossterm::{cursor, execute, queue, style, terminal, Result};
use crossterm::style::Color;
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyEvent, read, poll};

pub struct TermManager {
    width: TermInt,
    height: TermInt,
    stdout: Stdout,
    current_msg: Option<Message>,
}

struct Message {
    top_left: Coords,
    width: TermInt,
    height: TermInt,
}

impl TermManager {
    pub fn new() -> Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(TermManager { width, height, stdout: stdout(), current_msg: None })
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen, cursor::Hide, cursor::DisableBlinking)?;
        terminal::enable_raw_mode()
    }

    pub fn restore(&mut self) -> Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.stdout, style::ResetColor, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)
    }

    pub fn read_key_blocking(&self) -> Result<KeyEvent> {
        loop {
            if let Event::Key(ev) = read()? {
                return Ok(ev);
            }
        }
    }

    pub fn read_key_events_queue(&self) -> Result<Vec<KeyEvent>> {
        let mut events = vec![];

        while poll(Duration::from_millis(1))? {
            if let Event::Key(ev) = read()? {
                events.push(ev);
            }
        }

        Ok(events)
    }

    pub fn get_terminal_size(&self) -> Coords {
        (self.width, self.height)
    }

    pub fn draw_borders(&mut self) -> Result<()> {
        let (width, height) = (self.width, self.height);
        let end_x = width - 1;
        let end_y = height - 1;

        for x in 0..width {
            let ch = if x == 0 || x == end_x {'+'} else {'-'};
            self.print_at((x, 0), ch, Color::Reset)?;
            self.print_at((x, end_y), ch, Color::Reset)?;
        }

        for y in 1..end_y {
            self.print_at((0, y), '|', Color::Reset)?;
            self.print_at((end_x, y), '|', Color::Reset)?;
        }

        self.flush()
    }

    /// Draws a box of centred lines in the middle of the screen.
    pub fn show_message(&mut self, lines: &[&str]) -> Result<()> {
        if self.has_message() {
            self.hide_message()?;
        }

        let msg_height = (lines.len() + 2) as TermInt;
        let msg_width = (lines.iter().map(|x| x.len()).max().unwrap_or(0) + 2) as TermInt;
        let center = (self.width / 2, self.height / 2);
        let top_left = (center.0.saturating_sub(msg_width / 2), center.1.saturating_sub(msg_height / 2));

        for y_diff in 0..msg_height {
            let line = match y_diff {
                0 => "",
                d if d == msg_height - 1 => "",
                d => lines[d as usize - 1],
            };
            let padded_line = format!("{line: ^width$}", line = line, width = msg_width as usize);
            self.print_text_at((top_left.0, top_left.1 + y_diff), &padded_line, Color::Reset)?;
        }

        self.current_msg = Some(Message { top_left, width: msg_width, height: msg_height });
        self.flush()
    }

    /// Blanks the message box. Whatever was underneath has to be redrawn
    /// by the caller.
    pub fn hide_message(&mut self) -> Result<()> {
        if let Some(msg) = self.current_msg.take() {
            let blank = " ".repeat(msg.width as usize);
            for y_diff in 0..msg.height {
                self.print_text_at((msg.top_left.0, msg.top_left.1 + y_diff), &blank, Color::Reset)?;
            }
            self.flush()?;
        }
        Ok(())
    }

    pub fn print_at(&mut self, pos: Coords, ch: char, color: Color) -> Result<()> {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::SetForegroundColor(color), style::Print(ch), style::ResetColor)
    }

    pub fn print_text_at(&mut self, pos: Coords, text: &str, color: Color) -> Result<()> {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::SetForegroundColor(color), style::Print(text), style::ResetColor)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.current_msg = None;
        execute!(self.stdout, terminal::Clear(ClearType::All))
    }

    pub fn flush(&mut self) -> Result<()> {
        self.stdout.flush()?;
        Ok(())
    }

    pub fn has_message(&self) -> bool {
        self.current_msg.is_some()
    }
}
