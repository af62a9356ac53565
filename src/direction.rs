use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Direction a word is read in, named from the reader's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    Forward,
    Reverse,
    Down,
    Up,
    RightDown,
    RightUp,
    LeftDown,
    LeftUp,
}

/// Unit step of every direction, in declaration order.
const STEPS: [(Direction, isize, isize); 8] = [
    (Direction::Forward, 1, 0),
    (Direction::Reverse, -1, 0),
    (Direction::Down, 0, 1),
    (Direction::Up, 0, -1),
    (Direction::RightDown, 1, 1),
    (Direction::RightUp, 1, -1),
    (Direction::LeftDown, -1, 1),
    (Direction::LeftUp, -1, -1),
];

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Forward,
        Direction::Reverse,
        Direction::Down,
        Direction::Up,
        Direction::RightDown,
        Direction::RightUp,
        Direction::LeftDown,
        Direction::LeftUp,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Direction::Forward => "FORWARD",
            Direction::Reverse => "REVERSE",
            Direction::Down => "DOWN",
            Direction::Up => "UP",
            Direction::RightDown => "RIGHT_DOWN",
            Direction::RightUp => "RIGHT_UP",
            Direction::LeftDown => "LEFT_DOWN",
            Direction::LeftUp => "LEFT_UP",
        }
    }

    /// `(dx, dy)` with y growing downwards.
    pub const fn step(&self) -> (isize, isize) {
        let (_, dx, dy) = STEPS[*self as usize];
        (dx, dy)
    }

    pub const fn is_diagonal(&self) -> bool {
        let (dx, dy) = self.step();
        dx != 0 && dy != 0
    }

    /// The `index`-th cell of a run starting at `(x, y)`, or None once it leaves
    /// the non-negative quadrant. Upper bounds are the grid's business.
    pub fn offset(&self, x: usize, y: usize, index: usize) -> Option<(usize, usize)> {
        let (dx, dy) = self.step();
        let index = isize::try_from(index).ok()?;
        let nx = isize::try_from(x).ok()?.checked_add(dx * index)?;
        let ny = isize::try_from(y).ok()?.checked_add(dy * index)?;
        if nx < 0 || ny < 0 {
            return None;
        }
        Some((nx as usize, ny as usize))
    }

    /// Start columns and rows from which a run of `length` cells stays inside a
    /// `width` x `height` grid. None when no such start exists.
    pub fn start_ranges(
        &self,
        length: usize,
        width: usize,
        height: usize,
    ) -> Option<(RangeInclusive<usize>, RangeInclusive<usize>)> {
        let (dx, dy) = self.step();
        Some((axis_range(dx, length, width)?, axis_range(dy, length, height)?))
    }
}

fn axis_range(delta: isize, length: usize, extent: usize) -> Option<RangeInclusive<usize>> {
    if length == 0 || extent == 0 {
        return None;
    }
    match delta {
        0 => Some(0..=extent - 1),
        _ if length > extent => None,
        1 => Some(0..=extent - length),
        _ => Some(length - 1..=extent - 1),
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a word of `word_length` letters can go into the grid along `direction`.
///
/// A word longer than both sides never fits; a diagonal word additionally has
/// to be no longer than the grid's diagonal. Beyond these coarse limits the
/// run must fit along each axis the direction actually moves on.
pub fn is_geometrically_feasible(
    word_length: usize,
    width: usize,
    height: usize,
    direction: Direction,
) -> bool {
    let longer_than_sides = word_length > width && word_length > height;
    let diagonal_extent = (width as f64).hypot(height as f64);
    if longer_than_sides && (!direction.is_diagonal() || word_length as f64 > diagonal_extent) {
        return false;
    }
    direction.start_ranges(word_length, width, height).is_some()
}

/// How many directions a puzzle may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Hardness {
    /// Left to right only.
    Easy,
    /// Adds backwards, down and right-down.
    #[default]
    Medium,
    /// All eight directions.
    Hard,
}

impl Hardness {
    pub const fn directions(&self) -> &'static [Direction] {
        match self {
            Hardness::Easy => &[Direction::Forward],
            Hardness::Medium => &[
                Direction::Forward,
                Direction::Reverse,
                Direction::Down,
                Direction::RightDown,
            ],
            Hardness::Hard => &Direction::ALL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_follow_declaration_order() {
        let expected = [(1, 0), (-1, 0), (0, 1), (0, -1), (1, 1), (1, -1), (-1, 1), (-1, -1)];
        for (direction, step) in Direction::ALL.iter().zip(expected) {
            assert_eq!(direction.step(), step, "{direction}");
        }
    }

    #[test]
    fn start_ranges_keep_every_run_in_bounds() {
        let (width, height, length) = (7, 5, 4);
        for direction in Direction::ALL {
            let (xs, ys) = direction.start_ranges(length, width, height).unwrap();
            for x in xs.clone() {
                for y in ys.clone() {
                    for i in 0..length {
                        let (cx, cy) = direction.offset(x, y, i).unwrap();
                        assert!(cx < width && cy < height, "{direction} from ({x}, {y})");
                    }
                }
            }
        }
    }

    #[test]
    fn start_ranges_match_hand_computed_bounds() {
        assert_eq!(Direction::Forward.start_ranges(3, 5, 3), Some((0..=2, 0..=2)));
        assert_eq!(Direction::Reverse.start_ranges(3, 5, 3), Some((2..=4, 0..=2)));
        assert_eq!(Direction::Up.start_ranges(3, 5, 3), Some((0..=4, 2..=2)));
        assert_eq!(Direction::LeftDown.start_ranges(2, 4, 4), Some((1..=3, 0..=2)));
        assert_eq!(Direction::Down.start_ranges(4, 5, 3), None);
    }

    #[test]
    fn offset_walks_start_plus_index_times_step() {
        for direction in Direction::ALL {
            let (dx, dy) = direction.step();
            for i in 0..3 {
                let (x, y) = direction.offset(5, 5, i).unwrap();
                assert_eq!(x as isize, 5 + dx * i as isize);
                assert_eq!(y as isize, 5 + dy * i as isize);
            }
        }
        assert_eq!(Direction::LeftUp.offset(0, 3, 1), None);
    }

    #[test]
    fn word_longer_than_both_sides_is_infeasible() {
        assert!(!is_geometrically_feasible(2, 1, 1, Direction::Forward));
        assert!(!is_geometrically_feasible(4, 3, 3, Direction::RightDown));
        assert!(is_geometrically_feasible(3, 3, 1, Direction::Forward));
        assert!(!is_geometrically_feasible(3, 3, 1, Direction::Down));
    }

    #[test]
    fn hardness_widens_direction_set() {
        assert_eq!(Hardness::Easy.directions(), &[Direction::Forward]);
        assert_eq!(Hardness::Medium.directions().len(), 4);
        assert_eq!(Hardness::Hard.directions().len(), 8);
        assert_eq!(Hardness::default(), Hardness::Medium);
    }
}
