/// Line-mode terminal output with colour, for the non-fullscreen shells
use crossterm::{
    cursor,
    style::{Color, ResetColor, SetForegroundColor},
    terminal, QueueableCommand,
};
use std::io::{self, Stdout, Write};

pub struct TerminalContext<W: Write = Stdout> {
    out: W,
}

impl<W: Write> TerminalContext<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Clear the entire screen and position cursor
    pub fn clear_screen(&mut self) -> io::Result<()> {
        self.out.queue(cursor::MoveTo(0, 0))?;
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    pub fn print_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    /// Print colored text with automatic reset
    pub fn print_colored(&mut self, text: &str, color: TerminalColor) -> io::Result<()> {
        self.out.queue(SetForegroundColor(color.into()))?;
        write!(self.out, "{text}")?;
        self.out.queue(ResetColor)?;
        Ok(())
    }

    pub fn print_colored_line(&mut self, text: &str, color: TerminalColor) -> io::Result<()> {
        self.print_colored(text, color)?;
        writeln!(self.out)
    }

    pub fn empty_line(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    /// Print text without newline
    pub fn print(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{text}")
    }

    /// Flush all queued output; call at the end of a render
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerminalColor {
    Red,
    Green,
    Yellow,
    Cyan,
    Default,
}

impl TerminalColor {
    /// Countdown colour: green above ten seconds, yellow above five, red after.
    pub fn for_remaining(secs: u64) -> Self {
        match secs {
            s if s > 10 => TerminalColor::Green,
            s if s > 5 => TerminalColor::Yellow,
            _ => TerminalColor::Red,
        }
    }
}

impl From<TerminalColor> for Color {
    fn from(color: TerminalColor) -> Self {
        match color {
            TerminalColor::Red => Color::Red,
            TerminalColor::Green => Color::Green,
            TerminalColor::Yellow => Color::Yellow,
            TerminalColor::Cyan => Color::Cyan,
            TerminalColor::Default => Color::Reset,
        }
    }
}
