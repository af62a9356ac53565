use serde::Serialize;

use crate::error::{Result, WordSearchError};

/// Fixed-size board of optional letters, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Grid {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    /// Like [`Grid::new`], but rejects sizes whose cell count does not fit in memory.
    pub fn try_new(width: usize, height: usize) -> Result<Self> {
        let limit = isize::MAX as usize / std::mem::size_of::<Option<char>>();
        match width.checked_mul(height) {
            Some(cells) if cells <= limit => Ok(Grid::new(width, height)),
            _ => Err(WordSearchError::GridTooLarge { width, height }),
        }
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    fn index(&self, x: usize, y: usize) -> Result<usize> {
        if !self.contains(x, y) {
            return Err(WordSearchError::OutOfBounds {
                x: x as isize,
                y: y as isize,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y * self.width + x)
    }

    /// Letter at `(x, y)`; None for an empty cell or a cell off the board.
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        self.index(x, y).ok().and_then(|idx| self.cells[idx])
    }

    /// Empty, or already holding `letter` (two words crossing).
    pub fn can_place(&self, x: usize, y: usize, letter: char) -> bool {
        match self.index(x, y) {
            Ok(idx) => self.cells[idx].map_or(true, |current| current == letter),
            Err(_) => false,
        }
    }

    pub fn set(&mut self, x: usize, y: usize, letter: char) -> Result<()> {
        let idx = self.index(x, y)?;
        self.cells[idx] = Some(letter);
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Coordinates of every empty cell, row by row.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(move |(idx, _)| (idx % self.width, idx / self.width))
    }

    /// Rows as plain vectors, for renderers that want a 2D array.
    pub fn rows(&self) -> Vec<Vec<Option<char>>> {
        if self.width == 0 {
            return vec![Vec::new(); self.height];
        }
        self.cells.chunks(self.width).map(<[_]>::to_vec).collect()
    }

    /// Copy keeping only the given cells; everything else is empty.
    pub fn masked<'a>(&self, keep: impl IntoIterator<Item = &'a (usize, usize)>) -> Grid {
        let mut out = Grid::new(self.width, self.height);
        for &(x, y) in keep {
            if let Ok(idx) = self.index(x, y) {
                out.cells[idx] = self.cells[idx];
            }
        }
        out
    }
}
