use hashbrown::HashSet;
use log::debug;
use smallvec::SmallVec;

use crate::direction::Direction;
use crate::grid::Grid;
use crate::placement::Cell;
use crate::trie::PrefixTrie;

pub type CellRun = SmallVec<[Cell; 16]>;

/// A dictionary word spelled somewhere in the grid that nobody asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub word: String,
    pub x: usize,
    pub y: usize,
    pub direction: Direction,
    /// Cells of the word, from its first letter.
    pub cells: CellRun,
}

/// Looks for accidental dictionary words, tolerating the target words and
/// anything they start with.
pub struct Scanner<'a> {
    trie: &'a PrefixTrie,
    targets: Vec<String>,
}

impl<'a> Scanner<'a> {
    pub fn new(trie: &'a PrefixTrie, targets: &[String]) -> Self {
        Scanner {
            trie,
            targets: targets.iter().map(|t| t.to_uppercase()).collect(),
        }
    }

    /// `candidate` is the target word itself or the start of one.
    fn is_allowed(&self, candidate: &str) -> bool {
        let upper = candidate.to_uppercase();
        self.targets.iter().any(|target| target.starts_with(&upper))
    }

    fn is_violation(&self, candidate: &str) -> bool {
        self.trie.contains_word(candidate) && !self.is_allowed(candidate)
    }

    /// First violation found, scanning starts row by row and skipping starts in
    /// `ignored`. Runs may still pass through ignored cells.
    pub fn scan(&self, grid: &Grid, ignored: &HashSet<Cell>) -> Option<Violation> {
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                if ignored.contains(&(x, y)) {
                    continue;
                }
                for direction in Direction::ALL {
                    if let Some(violation) = self.scan_from(grid, x, y, direction) {
                        debug!(
                            "Found {} at ({}, {}) going {}",
                            violation.word, violation.x, violation.y, violation.direction
                        );
                        return Some(violation);
                    }
                }
            }
        }
        None
    }

    /// Grow a string from `(x, y)` while it is still a dictionary prefix.
    fn scan_from(&self, grid: &Grid, x: usize, y: usize, direction: Direction) -> Option<Violation> {
        let mut candidate = String::new();
        let mut cells = CellRun::new();
        let mut index = 0;
        while let Some((cx, cy)) = direction.offset(x, y, index) {
            let Some(letter) = grid.get(cx, cy) else {
                break;
            };
            candidate.push(letter);
            if !self.trie.is_prefix(&candidate) {
                break;
            }
            cells.push((cx, cy));
            if self.is_violation(&candidate) {
                return Some(Violation {
                    word: candidate,
                    x,
                    y,
                    direction,
                    cells,
                });
            }
            index += 1;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from(rows: &[&str]) -> Grid {
        let mut grid = Grid::new(rows[0].len(), rows.len());
        for (y, row) in rows.iter().enumerate() {
            for (x, letter) in row.chars().enumerate() {
                grid.set(x, y, letter).unwrap();
            }
        }
        grid
    }

    fn targets(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn prefix_of_a_target_is_not_a_violation() {
        let trie = PrefixTrie::from_words(["cat", "cats"]);
        let grid = grid_from(&["CATS", "QQQQ"]);
        let scanner = Scanner::new(&trie, &targets(&["CATS"]));
        assert_eq!(scanner.scan(&grid, &HashSet::new()), None);
    }

    #[test]
    fn accidental_word_reports_its_cells() {
        let trie = PrefixTrie::from_words(["dog"]);
        let grid = grid_from(&["QQQ", "QQQ", "GOD"]);
        let scanner = Scanner::new(&trie, &targets(&["QQ"]));
        let violation = scanner.scan(&grid, &HashSet::new()).unwrap();
        assert_eq!(violation.word, "DOG");
        assert_eq!((violation.x, violation.y), (2, 2));
        assert_eq!(violation.direction, Direction::Reverse);
        assert_eq!(violation.cells.as_slice(), &[(2, 2), (1, 2), (0, 2)]);
    }

    #[test]
    fn diagonal_words_are_found() {
        let trie = PrefixTrie::from_words(["axe"]);
        let grid = grid_from(&["AQQ", "QXQ", "QQE"]);
        let scanner = Scanner::new(&trie, &[]);
        let violation = scanner.scan(&grid, &HashSet::new()).unwrap();
        assert_eq!(violation.direction, Direction::RightDown);
        assert_eq!(violation.cells.as_slice(), &[(0, 0), (1, 1), (2, 2)]);
    }

    #[test]
    fn single_letter_words_count() {
        let trie = PrefixTrie::from_words(["x"]);
        let grid = grid_from(&["QX"]);
        let violation = Scanner::new(&trie, &[]).scan(&grid, &HashSet::new()).unwrap();
        assert_eq!(violation.cells.as_slice(), &[(1, 0)]);
    }

    #[test]
    fn ignored_starts_are_skipped() {
        let trie = PrefixTrie::from_words(["dog"]);
        let grid = grid_from(&["DOG"]);
        let scanner = Scanner::new(&trie, &[]);
        let ignored: HashSet<Cell> = [(0, 0)].into_iter().collect();
        assert_eq!(scanner.scan(&grid, &ignored), None);
    }

    #[test]
    fn superstring_of_a_target_is_a_violation() {
        let trie = PrefixTrie::from_words(["cat", "cats"]);
        let grid = grid_from(&["CATS"]);
        let violation = Scanner::new(&trie, &targets(&["CAT"]))
            .scan(&grid, &HashSet::new())
            .unwrap();
        assert_eq!(violation.word, "CATS");
    }
}
