//! Word search generation: hide a list of words in a letter grid, fill the
//! rest at random, and scrub any dictionary word the filler spells by accident.

pub mod api;
pub mod config;
pub mod dictionary;
pub mod direction;
pub mod error;
pub mod fill;
pub mod format;
pub mod grid;
pub mod placement;
pub mod scanner;
pub mod trie;

#[cfg(target_arch = "wasm32")]
mod wasm;

pub use api::{generate, normalize_words, random_seed, GeneratorOptions, Puzzle};
pub use config::Config;
pub use dictionary::{DictionaryCache, DictionarySources};
pub use direction::{is_geometrically_feasible, Direction, Hardness};
pub use error::WordSearchError;
pub use fill::{fill_and_repair, Alphabet, RepairReport};
pub use format::{format_grid, format_placements};
pub use grid::Grid;
pub use placement::{place_word, place_words, protected_cells, Cell, PlacementRecord};
pub use scanner::{Scanner, Violation};
pub use trie::PrefixTrie;
