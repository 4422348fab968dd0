use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::console;
use crate::core::logging::{self, LogTarget};
use crate::core::runner::TuiRunner;
use crate::games::hangman::content::{self, PHRASES, WORDS};
use crate::games::hangman::{ContentProvider, GameConfig, Level, SystemClock};

#[derive(Parser, Debug)]
#[command(name = "hangterm")]
#[command(about = "Timed word and phrase guessing in the terminal")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub options: GameOptions,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Debug, Clone)]
pub struct GameOptions {
    /// Lives per game
    #[arg(long, global = true, env = "HANGTERM_LIVES", default_value_t = 6,
          value_parser = clap::value_parser!(u8).range(1..))]
    pub lives: u8,

    /// Seconds allowed for each guess
    #[arg(long, global = true, env = "HANGTERM_TURN_SECONDS", default_value_t = 15,
          value_parser = clap::value_parser!(u64).range(1..))]
    pub turn_seconds: u64,

    /// Word list file, one word per line
    #[arg(long, global = true)]
    pub words: Option<PathBuf>,

    /// Phrase list file, one phrase per line
    #[arg(long, global = true)]
    pub phrases: Option<PathBuf>,

    /// Seed for secret selection
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Write logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

impl GameOptions {
    pub fn config(&self) -> GameConfig {
        GameConfig::new(self.lives, Duration::from_secs(self.turn_seconds))
    }

    pub fn content(&self) -> Result<ContentProvider<StdRng>> {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let words = match &self.words {
            Some(path) => content::load_list(path)?,
            None => WORDS.iter().map(|w| (*w).to_string()).collect(),
        };
        let phrases = match &self.phrases {
            Some(path) => content::load_list(path)?,
            None => PHRASES.iter().map(|p| (*p).to_string()).collect(),
        };
        ContentProvider::new(words, phrases, rng).context("invalid content list")
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Full-screen game (default)
    Play {
        /// Skip the level menu for the first game
        #[arg(short, long, value_enum)]
        level: Option<Level>,
    },
    /// Line-by-line game for plain terminals
    Text {
        #[arg(short, long, value_enum, default_value_t = Level::Word)]
        level: Level,
    },
    /// Headless game: guesses on stdin, JSON snapshots on stdout
    Script {
        #[arg(short, long, value_enum, default_value_t = Level::Word)]
        level: Level,
    },
    /// Show levels and content sizes
    List,
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let options = cli.options;
    let command = cli.command.unwrap_or(Commands::Play { level: None });

    let log_target = match (&options.log_file, &command) {
        (Some(path), _) => LogTarget::File(path),
        (None, Commands::Play { .. }) => LogTarget::Off,
        (None, _) => LogTarget::Stderr,
    };
    logging::init(log_target)?;

    let config = options.config();
    let mut content = options.content()?;

    match command {
        Commands::Play { level } => {
            let terminal = ratatui::try_init().context("failed to initialise terminal")?;
            let result = TuiRunner::new(content, config).run(terminal, level).await;
            ratatui::restore();
            result
        }
        Commands::Text { level } => {
            let stdin = io::stdin();
            console::run_text(&mut content, config, level, SystemClock, stdin.lock(), io::stdout())
        }
        Commands::Script { level } => {
            let stdin = io::stdin();
            console::run_script(&mut content, config, level, SystemClock, stdin.lock(), io::stdout())
        }
        Commands::List => {
            println!("Levels:");
            for level in Level::ALL {
                println!(
                    "  {:<7} {} - {} ({} entries)",
                    level.to_string(),
                    level.title(),
                    level.description(),
                    content.entries(level).len()
                );
            }
            println!();
            println!("Lives: {}   Turn: {}s", config.max_lives, config.turn_duration.as_secs());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_match_engine_constants() {
        let cli = Cli::try_parse_from(["hangterm"]).unwrap();
        assert_eq!(cli.options.config(), GameConfig::default());
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_level_and_overrides() {
        let cli = Cli::try_parse_from(["hangterm", "text", "--level", "phrase", "--lives", "3"]).unwrap();
        assert_eq!(cli.options.lives, 3);
        assert!(matches!(cli.command, Some(Commands::Text { level: Level::Phrase })));
    }

    #[test]
    fn zero_lives_and_zero_turns_are_rejected() {
        assert!(Cli::try_parse_from(["hangterm", "--lives", "0"]).is_err());
        assert!(Cli::try_parse_from(["hangterm", "--turn-seconds", "0"]).is_err());
    }

    #[test]
    fn seeded_content_is_repeatable() {
        let cli = Cli::try_parse_from(["hangterm", "--seed", "9"]).unwrap();
        let mut a = cli.options.content().unwrap();
        let mut b = cli.options.content().unwrap();
        assert_eq!(a.pick(Level::Phrase), b.pick(Level::Phrase));
    }
}
