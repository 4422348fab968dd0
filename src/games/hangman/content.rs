/// Secrets, levels, and the word/phrase lists they are drawn from
use std::fmt;
use std::path::Path;

use rand::rngs::ThreadRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::error::ContentError;

/// The only character in a phrase that is never guessed.
pub const SEPARATOR: char = ' ';

pub const WORDS: &[&str] = &[
    "python", "rust", "terminal", "keyboard", "compiler", "network", "socket", "garden",
    "library", "mountain", "puzzle", "rocket", "galaxy", "lantern", "harbor", "journey",
    "whisper", "thunder", "blanket", "orchard", "kitchen", "volcano", "penguin", "crystal",
];

pub const PHRASES: &[&str] = &[
    "hello world",
    "break a leg",
    "piece of cake",
    "under the weather",
    "once in a blue moon",
    "the early bird catches the worm",
    "actions speak louder than words",
    "better late than never",
    "hit the nail on the head",
    "every cloud has a silver lining",
    "time flies when you are having fun",
    "curiosity killed the cat",
];

/// Which content tier a game draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Basic mode: a single word.
    Word,
    /// Intermediate mode: a phrase of several words.
    Phrase,
}

impl Level {
    pub const ALL: [Level; 2] = [Level::Word, Level::Phrase];

    pub fn title(self) -> &'static str {
        match self {
            Level::Word => "Basic Mode",
            Level::Phrase => "Intermediate Mode",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Level::Word => "Guess a single word",
            Level::Phrase => "Guess a whole phrase, spaces are free",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Word => f.write_str("word"),
            Level::Phrase => f.write_str("phrase"),
        }
    }
}

/// The lowercase text a game is played against.
///
/// Deserializing goes through the same checks as [`Secret::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "level", content = "text", rename_all = "lowercase", try_from = "RawSecret")]
pub enum Secret {
    Word(String),
    Phrase(String),
}

#[derive(Deserialize)]
#[serde(tag = "level", content = "text", rename_all = "lowercase")]
enum RawSecret {
    Word(String),
    Phrase(String),
}

impl TryFrom<RawSecret> for Secret {
    type Error = ContentError;

    fn try_from(raw: RawSecret) -> Result<Self, Self::Error> {
        match raw {
            RawSecret::Word(text) => Secret::word(&text),
            RawSecret::Phrase(text) => Secret::phrase(&text),
        }
    }
}

impl Secret {
    pub fn new(level: Level, text: &str) -> Result<Self, ContentError> {
        match level {
            Level::Word => Self::word(text),
            Level::Phrase => Self::phrase(text),
        }
    }

    pub fn word(text: &str) -> Result<Self, ContentError> {
        let text = text.to_lowercase();
        if !is_letter_run(&text) {
            return Err(ContentError::InvalidWord(text));
        }
        Ok(Secret::Word(text))
    }

    pub fn phrase(text: &str) -> Result<Self, ContentError> {
        let text = text.to_lowercase();
        if !text.split(SEPARATOR).all(is_letter_run) {
            return Err(ContentError::InvalidPhrase(text));
        }
        Ok(Secret::Phrase(text))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Secret::Word(text) | Secret::Phrase(text) => text,
        }
    }

    pub fn level(&self) -> Level {
        match self {
            Secret::Word(_) => Level::Word,
            Secret::Phrase(_) => Level::Phrase,
        }
    }

    /// Separators only exist in phrases.
    pub fn is_separator(&self, c: char) -> bool {
        matches!(self, Secret::Phrase(_)) && c == SEPARATOR
    }

    /// Guessable characters, in order, duplicates included.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.as_str().chars().filter(move |&c| !self.is_separator(c))
    }

    pub fn contains_letter(&self, letter: char) -> bool {
        self.letters().any(|c| c == letter)
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_letter_run(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_alphabetic)
}

/// Validated word and phrase lists plus the random source used to pick from them.
///
/// The generator is injected so callers can seed it; games never reach for a
/// global RNG.
#[derive(Debug, Clone)]
pub struct ContentProvider<R = ThreadRng> {
    words: Vec<Secret>,
    phrases: Vec<Secret>,
    rng: R,
}

impl ContentProvider<ThreadRng> {
    /// Built-in lists with the thread-local generator.
    pub fn builtin() -> Self {
        Self::with_builtin(rand::rng())
    }
}

impl<R: Rng> ContentProvider<R> {
    pub fn new<W, P>(words: W, phrases: P, rng: R) -> Result<Self, ContentError>
    where
        W: IntoIterator,
        W::Item: AsRef<str>,
        P: IntoIterator,
        P::Item: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| Secret::word(w.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        let phrases = phrases
            .into_iter()
            .map(|p| Secret::phrase(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        if words.is_empty() {
            return Err(ContentError::EmptyList(Level::Word));
        }
        if phrases.is_empty() {
            return Err(ContentError::EmptyList(Level::Phrase));
        }

        Ok(Self { words, phrases, rng })
    }

    pub fn with_builtin(rng: R) -> Self {
        Self {
            words: WORDS.iter().map(|w| Secret::Word((*w).to_string())).collect(),
            phrases: PHRASES.iter().map(|p| Secret::Phrase((*p).to_string())).collect(),
            rng,
        }
    }

    pub fn entries(&self, level: Level) -> &[Secret] {
        match level {
            Level::Word => &self.words,
            Level::Phrase => &self.phrases,
        }
    }

    /// Uniform pick, with replacement across calls.
    pub fn pick(&mut self, level: Level) -> Secret {
        let entries = match level {
            Level::Word => &self.words,
            Level::Phrase => &self.phrases,
        };
        // Both lists are non-empty from construction on.
        let index = self.rng.random_range(0..entries.len());
        entries[index].clone()
    }
}

/// Reads a newline separated list, skipping blank lines and `#` comments.
pub fn load_list(path: &Path) -> Result<Vec<String>, ContentError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}
