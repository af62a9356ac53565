use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::direction::Hardness;
use crate::error::{Result, WordSearchError};
use crate::fill::{fill_and_repair, Alphabet, RepairReport};
use crate::grid::Grid;
use crate::placement::{place_words, protected_cells, PlacementRecord};
use crate::scanner::Scanner;
use crate::trie::PrefixTrie;

/// Seeds drawn when the caller has none are kept short enough to type back in.
pub const GENERATED_SEED_LIMIT: u64 = 1 << 10;

/// Knobs for one generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Defaults to the longest word plus two.
    pub width: Option<usize>,
    /// Defaults to the longest word plus two.
    pub height: Option<usize>,
    pub hardness: Hardness,
    /// Drawn at random (and reported in the result) when absent.
    pub seed: Option<u64>,
}

/// A finished word search.
#[derive(Debug, Clone, Serialize)]
pub struct Puzzle {
    pub seed: u64,
    pub hardness: Hardness,
    pub grid: Grid,
    /// Same size as `grid`, holding only the placed words.
    pub answer_key: Grid,
    pub placements: Vec<PlacementRecord>,
    pub repair: RepairReport,
}

/// Trim, drop blanks, squeeze out inner spaces and upper-case. Order is kept.
pub fn normalize_words<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    let mut squeezed = false;
    let words: Vec<String> = words
        .iter()
        .map(|w| w.as_ref().trim())
        .filter(|w| !w.is_empty())
        .map(|w| {
            if w.contains(char::is_whitespace) {
                squeezed = true;
            }
            w.chars()
                .filter(|c| !c.is_whitespace())
                .flat_map(char::to_uppercase)
                .collect()
        })
        .collect();
    if squeezed {
        info!("Removing spaces from within words, as that prints funny");
    }
    words
}

pub fn random_seed() -> u64 {
    rand::thread_rng().gen_range(0..GENERATED_SEED_LIMIT)
}

/// Build a puzzle hiding `words`. With a dictionary, accidental dictionary
/// words are scrubbed from the filler; without one the filler is left as drawn.
///
/// Every random draw comes from one stream seeded by `options.seed`, so the
/// same words, options and dictionary always give the same grid.
pub fn generate<S: AsRef<str>>(
    words: &[S],
    options: &GeneratorOptions,
    dictionary: Option<&PrefixTrie>,
) -> Result<Puzzle> {
    let words = normalize_words(words);
    let longest = words
        .iter()
        .map(|w| w.chars().count())
        .max()
        .ok_or(WordSearchError::EmptyWordList)?;
    let width = options.width.unwrap_or(longest + 2);
    let height = options.height.unwrap_or(longest + 2);
    let seed = options.seed.unwrap_or_else(random_seed);
    info!("Using random seed: {seed}");
    info!("Building a {width}x{height} grid for {} words", words.len());

    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = Grid::try_new(width, height)?;
    let placements = place_words(&mut grid, &words, options.hardness.directions(), &mut rng)?;
    let answer_key = grid.masked(&protected_cells(&placements));

    let alphabet = Alphabet::for_words(&words);
    let scanner = dictionary
        .filter(|trie| !trie.is_empty())
        .map(|trie| Scanner::new(trie, &words));
    let repair = fill_and_repair(&mut grid, &placements, &alphabet, scanner.as_ref(), &mut rng)?;
    info!(
        "Filled grid after {} scans, {} letters replaced, {} violations left in place",
        repair.scans, repair.mutations, repair.exempted
    );

    for record in &placements {
        for ((x, y), letter) in record.letters() {
            let found = grid.get(x, y).unwrap_or_default();
            if found != letter || answer_key.get(x, y) != Some(letter) {
                return Err(WordSearchError::ProtectedCellMutated {
                    x,
                    y,
                    expected: letter,
                    found,
                });
            }
        }
    }

    Ok(Puzzle {
        seed,
        hardness: options.hardness,
        grid,
        answer_key,
        placements,
        repair,
    })
}
