pub mod console;
pub mod lobby;
pub mod logging;
pub mod renderer;  // Line-mode renderer trait
pub mod runner;    // Full-screen tokio/ratatui loop
pub mod terminal;  // Terminal context wrapper
