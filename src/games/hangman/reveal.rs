/// Display projection of a secret given the guessed letters.
///
/// Always recomputed from scratch; nothing here is patched incrementally.
use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use super::content::Secret;

pub const PLACEHOLDER: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    Revealed(char),
    Hidden,
    Separator,
}

impl Cell {
    /// Single character token used by the text display.
    pub fn token(self) -> char {
        match self {
            Cell::Revealed(c) => c,
            Cell::Hidden => PLACEHOLDER,
            Cell::Separator => ' ',
        }
    }
}

/// One cell per character of the secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevealState {
    cells: Vec<Cell>,
}

impl RevealState {
    pub fn compute(secret: &Secret, guessed: &BTreeSet<char>) -> Self {
        let cells = secret
            .as_str()
            .chars()
            .map(|c| {
                if secret.is_separator(c) {
                    Cell::Separator
                } else if guessed.contains(&c) {
                    Cell::Revealed(c)
                } else {
                    Cell::Hidden
                }
            })
            .collect();
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn hidden_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == Cell::Hidden).count()
    }

    pub fn is_complete(&self) -> bool {
        self.hidden_count() == 0
    }
}

/// Tokens joined by single spaces, so `"h_"` shows as `h _` and a phrase
/// separator becomes a run of three blanks.
impl fmt::Display for RevealState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", cell.token())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guessed(letters: &str) -> BTreeSet<char> {
        letters.chars().collect()
    }

    #[test]
    fn nothing_guessed_hides_every_letter() {
        let secret = Secret::word("python").unwrap();
        let state = RevealState::compute(&secret, &BTreeSet::new());
        assert_eq!(state.to_string(), "_ _ _ _ _ _");
        assert_eq!(state.hidden_count(), 6);
        assert!(!state.is_complete());
    }

    #[test]
    fn phrase_separator_is_blank_from_the_start() {
        let secret = Secret::phrase("hello world").unwrap();
        let state = RevealState::compute(&secret, &BTreeSet::new());
        assert_eq!(state.to_string(), "_ _ _ _ _   _ _ _ _ _");
        assert_eq!(state.cells()[5], Cell::Separator);
    }

    #[test]
    fn guessed_letter_shows_in_every_position() {
        let secret = Secret::phrase("hello world").unwrap();
        let state = RevealState::compute(&secret, &guessed("l"));
        let revealed: Vec<usize> = state
            .cells()
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Revealed('l'))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(revealed, vec![2, 3, 9]);
        assert_eq!(state.to_string(), "_ _ l l _   _ _ _ l _");
    }

    #[test]
    fn letters_not_in_secret_change_nothing() {
        let secret = Secret::word("hi").unwrap();
        let before = RevealState::compute(&secret, &guessed("h"));
        let after = RevealState::compute(&secret, &guessed("hzq"));
        assert_eq!(before, after);
    }

    #[test]
    fn all_letters_guessed_is_complete() {
        let secret = Secret::phrase("hi there").unwrap();
        let state = RevealState::compute(&secret, &guessed("hiter"));
        assert!(state.is_complete());
        let tokens: String = state.cells().iter().map(|c| c.token()).collect();
        assert_eq!(tokens, "hi there");
    }

    #[test]
    fn partial_word_mixes_revealed_and_hidden() {
        let secret = Secret::word("ab").unwrap();
        let state = RevealState::compute(&secret, &guessed("a"));
        assert_eq!(state.cells(), &[Cell::Revealed('a'), Cell::Hidden]);
    }
}
