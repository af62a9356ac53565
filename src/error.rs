use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::direction::Direction;

/// Everything that can abort a generation run.
#[derive(Error, Debug)]
pub enum WordSearchError {
    #[error("No words were supplied.")]
    EmptyWordList,
    #[error("Word {word} is too long for a {width}x{height} grid going {direction}.")]
    WordTooLong {
        word: String,
        direction: Direction,
        width: usize,
        height: usize,
    },
    #[error("Could not place word in grid after {attempts} attempts. Word: {word}, Direction: {direction}")]
    PlacementExhausted {
        word: String,
        direction: Direction,
        attempts: usize,
    },
    #[error("A {width}x{height} grid is too large to allocate.")]
    GridTooLarge { width: usize, height: usize },
    #[error("Cell ({x}, {y}) is outside the {width}x{height} grid.")]
    OutOfBounds {
        x: isize,
        y: isize,
        width: usize,
        height: usize,
    },
    #[error("Internal error: placed letter changed at ({x}, {y}): {expected} -> {found}")]
    ProtectedCellMutated {
        x: usize,
        y: usize,
        expected: char,
        found: char,
    },
    #[error("Failed to read word list {path:?}: {source}")]
    DictionaryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WordSearchError {
    /// True for errors that can only come from a defect in the generator itself.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            WordSearchError::ProtectedCellMutated { .. } | WordSearchError::OutOfBounds { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, WordSearchError>;
