use hashbrown::HashSet;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::direction::{is_geometrically_feasible, Direction};
use crate::error::{Result, WordSearchError};
use crate::grid::Grid;

/// Random start positions tried per word before giving up.
pub const PLACEMENT_ATTEMPTS: usize = 500;

pub type Cell = (usize, usize);

/// Where a target word ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacementRecord {
    pub word: String,
    pub x: usize,
    pub y: usize,
    pub direction: Direction,
}

impl PlacementRecord {
    /// Cells covered by the word, first letter first.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let (dx, dy) = self.direction.step();
        (0..self.word.chars().count()).map(move |i| {
            let i = i as isize;
            (
                (self.x as isize + dx * i) as usize,
                (self.y as isize + dy * i) as usize,
            )
        })
    }

    /// `(cell, letter)` pairs of the placed word.
    pub fn letters(&self) -> impl Iterator<Item = (Cell, char)> + '_ {
        self.cells().zip(self.word.chars())
    }
}

/// Every cell covered by at least one placement.
pub fn protected_cells(records: &[PlacementRecord]) -> HashSet<Cell> {
    records.iter().flat_map(PlacementRecord::cells).collect()
}

/// Put `word` somewhere along `direction`, trying random starts until a run of
/// compatible cells turns up. Returns the start cell; the grid is only touched
/// on success.
pub fn place_word<R: Rng + ?Sized>(
    grid: &mut Grid,
    word: &str,
    direction: Direction,
    rng: &mut R,
) -> Result<Cell> {
    let letters: Vec<char> = word.chars().collect();
    let (width, height) = (grid.width(), grid.height());
    let too_long = || WordSearchError::WordTooLong {
        word: word.to_string(),
        direction,
        width,
        height,
    };
    if !is_geometrically_feasible(letters.len(), width, height, direction) {
        return Err(too_long());
    }
    let (xs, ys) = direction
        .start_ranges(letters.len(), width, height)
        .ok_or_else(too_long)?;

    for _ in 0..PLACEMENT_ATTEMPTS {
        let x = rng.gen_range(xs.clone());
        let y = rng.gen_range(ys.clone());
        let fits = letters.iter().enumerate().all(|(i, &letter)| {
            direction
                .offset(x, y, i)
                .is_some_and(|(cx, cy)| grid.can_place(cx, cy, letter))
        });
        if !fits {
            continue;
        }
        for (i, &letter) in letters.iter().enumerate() {
            let (cx, cy) = direction.offset(x, y, i).ok_or(WordSearchError::OutOfBounds {
                x: x as isize,
                y: y as isize,
                width,
                height,
            })?;
            grid.set(cx, cy, letter)?;
        }
        return Ok((x, y));
    }

    Err(WordSearchError::PlacementExhausted {
        word: word.to_string(),
        direction,
        attempts: PLACEMENT_ATTEMPTS,
    })
}

/// Place each word in order, drawing its direction from `directions` first.
pub fn place_words<R: Rng + ?Sized>(
    grid: &mut Grid,
    words: &[String],
    directions: &[Direction],
    rng: &mut R,
) -> Result<Vec<PlacementRecord>> {
    let mut records = Vec::with_capacity(words.len());
    for word in words {
        let direction = *directions.choose(rng).unwrap_or(&Direction::Forward);
        let (x, y) = place_word(grid, word, direction, rng)?;
        debug!("Placed {word} at ({x}, {y}) going {direction}");
        records.push(PlacementRecord {
            word: word.clone(),
            x,
            y,
            direction,
        });
    }
    Ok(records)
}
