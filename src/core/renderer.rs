/// Generic line-mode renderer trait
use std::io::{self, Write};

use crate::core::terminal::TerminalContext;

/// Draws a game's state into a terminal context. Renderers hold no game
/// logic; they only read the state they are handed.
pub trait GameRenderer<State> {
    fn new(player_name: String) -> Self
    where
        Self: Sized;

    fn render<W: Write>(&self, state: &State, ctx: &mut TerminalContext<W>) -> io::Result<()>;
}
