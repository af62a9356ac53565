use std::collections::BTreeSet;

use hashbrown::HashSet;
use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::error::{Result, WordSearchError};
use crate::grid::Grid;
use crate::placement::{protected_cells, Cell, PlacementRecord};
use crate::scanner::{Scanner, Violation};

/// Filler characters: every letter twice, plus each digit used by a target word once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    pub fn new(digits: impl IntoIterator<Item = char>) -> Self {
        let digits: BTreeSet<char> = digits.into_iter().filter(char::is_ascii_digit).collect();
        let mut symbols: Vec<char> = ('A'..='Z').chain('A'..='Z').collect();
        symbols.extend(digits);
        Alphabet { symbols }
    }

    /// Alphabet for a set of target words.
    pub fn for_words(words: &[String]) -> Self {
        Alphabet::new(words.iter().flat_map(|w| w.chars()))
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        *self.symbols.choose(rng).unwrap_or(&'A')
    }

    /// Random symbol guaranteed to differ from `current`.
    pub fn pick_other<R: Rng + ?Sized>(&self, current: char, rng: &mut R) -> char {
        let others: Vec<char> = self.symbols.iter().copied().filter(|&c| c != current).collect();
        *others.choose(rng).unwrap_or(&current)
    }
}

/// What the repair loop had to do.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RepairReport {
    /// Filler cells rewritten.
    pub mutations: usize,
    /// Violations given up on.
    pub exempted: usize,
    /// Full-grid scans run.
    pub scans: usize,
    /// Cells no longer used as scan starts, in the order they were given up on.
    pub exempted_cells: Vec<Cell>,
}

enum RepairState {
    Filling,
    Scanning,
    Repairing(Violation),
    Done,
}

/// Fill every empty cell, then rewrite filler letters until `scanner` no
/// longer finds an accidental word. Without a scanner only the fill happens.
///
/// A filler cell is rewritten at most once. When every cell of a violation is
/// either a placed letter or already rewritten, the whole run is exempted so
/// the loop cannot spin forever.
pub fn fill_and_repair<R: Rng + ?Sized>(
    grid: &mut Grid,
    placements: &[PlacementRecord],
    alphabet: &Alphabet,
    scanner: Option<&Scanner<'_>>,
    rng: &mut R,
) -> Result<RepairReport> {
    let protected = protected_cells(placements);
    let mut ignored: HashSet<Cell> = HashSet::new();
    let mut changed: HashSet<Cell> = HashSet::new();
    let mut report = RepairReport::default();
    let mut snapshot: Option<Grid> = None;
    let mut state = RepairState::Filling;

    loop {
        state = match state {
            RepairState::Filling => {
                let empty: Vec<Cell> = grid.empty_cells().collect();
                for (x, y) in empty {
                    grid.set(x, y, alphabet.pick(rng))?;
                }
                snapshot = Some(grid.clone());
                match scanner {
                    Some(_) => RepairState::Scanning,
                    None => RepairState::Done,
                }
            }
            RepairState::Scanning => {
                report.scans += 1;
                match scanner.and_then(|s| s.scan(grid, &ignored)) {
                    Some(violation) => RepairState::Repairing(violation),
                    None => RepairState::Done,
                }
            }
            RepairState::Repairing(violation) => {
                let target = violation
                    .cells
                    .iter()
                    .copied()
                    .find(|cell| !protected.contains(cell) && !changed.contains(cell));
                match target {
                    Some((x, y)) => {
                        let current = grid.get(x, y).unwrap_or_default();
                        let replacement = alphabet.pick_other(current, rng);
                        debug!(
                            "Replacing {current} at ({x}, {y}) with {replacement} to break {}",
                            violation.word
                        );
                        grid.set(x, y, replacement)?;
                        changed.insert((x, y));
                        report.mutations += 1;
                    }
                    None => {
                        warn!(
                            "Cannot break {} at ({}, {}) going {}, leaving it",
                            violation.word, violation.x, violation.y, violation.direction
                        );
                        for &cell in &violation.cells {
                            if ignored.insert(cell) {
                                report.exempted_cells.push(cell);
                            }
                        }
                        report.exempted += 1;
                    }
                }
                RepairState::Scanning
            }
            RepairState::Done => break,
        };
    }

    if let Some(snapshot) = &snapshot {
        verify_protected(grid, snapshot, &protected)?;
    }
    Ok(report)
}

/// Placed letters must read the same as they did right after filling.
fn verify_protected(grid: &Grid, snapshot: &Grid, protected: &HashSet<Cell>) -> Result<()> {
    for &(x, y) in protected {
        let expected = snapshot.get(x, y);
        let found = grid.get(x, y);
        if expected != found {
            return Err(WordSearchError::ProtectedCellMutated {
                x,
                y,
                expected: expected.unwrap_or_default(),
                found: found.unwrap_or_default(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;
    use crate::placement::place_words;
    use crate::trie::PrefixTrie;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn alphabet_weights_letters_double_and_adds_digits() {
        let alphabet = Alphabet::for_words(&words(&["R2D2", "C3PO"]));
        assert_eq!(alphabet.symbols().len(), 52 + 2);
        assert_eq!(alphabet.symbols().iter().filter(|&&c| c == 'Q').count(), 2);
        assert!(alphabet.symbols().contains(&'2'));
        assert!(alphabet.symbols().contains(&'3'));
    }

    #[test]
    fn pick_other_never_returns_current() {
        let mut rng = StdRng::seed_from_u64(9);
        let alphabet = Alphabet::new(std::iter::empty());
        for _ in 0..200 {
            assert_ne!(alphabet.pick_other('E', &mut rng), 'E');
        }
    }

    #[test]
    fn fill_without_dictionary_is_a_single_pass() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut grid = Grid::new(5, 3);
        let targets = words(&["CAT", "DOG"]);
        let records = place_words(&mut grid, &targets, &[Direction::Forward], &mut rng).unwrap();
        let alphabet = Alphabet::for_words(&targets);
        let report = fill_and_repair(&mut grid, &records, &alphabet, None, &mut rng).unwrap();
        assert_eq!(report, RepairReport::default());
        assert!(grid.is_full());
    }

    #[test]
    fn changed_placed_letter_is_an_internal_error() {
        let mut snapshot = Grid::new(3, 1);
        for (x, letter) in "CAT".chars().enumerate() {
            snapshot.set(x, 0, letter).unwrap();
        }
        let mut grid = snapshot.clone();
        grid.set(1, 0, 'O').unwrap();
        let protected: HashSet<Cell> = [(0, 0), (1, 0), (2, 0)].into_iter().collect();

        let err = verify_protected(&grid, &snapshot, &protected).unwrap_err();
        assert!(matches!(
            err,
            WordSearchError::ProtectedCellMutated { x: 1, y: 0, expected: 'A', found: 'O' }
        ));
        assert!(err.is_internal());
        assert!(verify_protected(&snapshot, &snapshot, &protected).is_ok());
    }

    #[test]
    fn filler_changes_outside_placed_cells_pass_verification() {
        let mut snapshot = Grid::new(2, 1);
        snapshot.set(0, 0, 'A').unwrap();
        snapshot.set(1, 0, 'B').unwrap();
        let mut grid = snapshot.clone();
        grid.set(1, 0, 'Z').unwrap();
        let protected: HashSet<Cell> = [(0, 0)].into_iter().collect();
        assert!(verify_protected(&grid, &snapshot, &protected).is_ok());
    }

    #[test]
    fn repair_reaches_a_fixed_point() {
        let mut rng = StdRng::seed_from_u64(4);
        let trie = PrefixTrie::from_words(["at", "ta", "it", "ti", "on", "no", "an", "na"]);
        let targets = words(&["ROBOT"]);
        let mut grid = Grid::new(7, 7);
        let records = place_words(&mut grid, &targets, &Direction::ALL, &mut rng).unwrap();
        let scanner = Scanner::new(&trie, &targets);
        let alphabet = Alphabet::for_words(&targets);
        let report =
            fill_and_repair(&mut grid, &records, &alphabet, Some(&scanner), &mut rng).unwrap();
        assert!(report.scans >= 1);
        let ignored: HashSet<Cell> = report.exempted_cells.iter().copied().collect();
        assert_eq!(scanner.scan(&grid, &ignored), None);
        if report.exempted == 0 {
            assert_eq!(scanner.scan(&grid, &HashSet::new()), None);
        }
        for ((x, y), letter) in records[0].letters() {
            assert_eq!(grid.get(x, y), Some(letter));
        }
    }

    #[test]
    fn unrepairable_violation_is_exempted() {
        let mut rng = StdRng::seed_from_u64(8);
        // Every letter of "BOO" belongs to the placed word, so nothing can be rewritten.
        let trie = PrefixTrie::from_words(["boo"]);
        let targets = words(&["BOOT"]);
        let mut grid = Grid::new(4, 1);
        let records = place_words(&mut grid, &targets, &[Direction::Forward], &mut rng).unwrap();
        let scanner = Scanner::new(&trie, &words(&["TOOB"]));
        let alphabet = Alphabet::for_words(&targets);
        let report =
            fill_and_repair(&mut grid, &records, &alphabet, Some(&scanner), &mut rng).unwrap();
        assert_eq!(report.mutations, 0);
        assert_eq!(report.exempted, 1);
        assert_eq!(report.exempted_cells, vec![(0, 0), (1, 0), (2, 0)]);
        assert_eq!(grid.rows(), vec![vec![Some('B'), Some('O'), Some('O'), Some('T')]]);
    }
}
