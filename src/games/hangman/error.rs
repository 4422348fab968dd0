/// Rejections and content faults for the hangman engine
use std::path::PathBuf;

use thiserror::Error;

use super::content::Level;

/// Why a guess was turned away. None of these touch the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    /// Empty or more than one character after trimming.
    #[error("Please enter a single letter.")]
    InvalidLength,

    /// A single character that is not alphabetic.
    #[error("Please enter a valid letter.")]
    NotALetter,

    #[error("You have already guessed the letter \"{0}\".")]
    AlreadyGuessed(char),
}

/// Problems with a word or phrase list.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("the {0} list is empty")]
    EmptyList(Level),

    #[error("word {0:?} must be a single run of letters")]
    InvalidWord(String),

    /// Phrases are letter runs joined by exactly one space.
    #[error("phrase {0:?} must be words of letters separated by single spaces")]
    InvalidPhrase(String),

    #[error("failed to read content list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
