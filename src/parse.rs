use crate::grid::{Direction, Grid};
use rustc_hash::FxHashSet;
use std::fmt;

/// A crossword variable: a maximal run of open cells in one direction.
/// Immutable once extracted from the grid.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct Slot {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub length: usize,
}

impl Slot {
    /// Grid coordinates of the cell holding the letter at `offset`.
    pub fn cell(&self, offset: usize) -> (usize, usize) {
        match self.direction {
            Direction::Across => (self.row, self.col + offset),
            Direction::Down => (self.row + offset, self.col),
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) {} of length {}",
            self.row, self.col, self.direction, self.length
        )
    }
}

/// Extract every slot from the grid: first the across runs in reading
/// order, then the down runs column by column. A lone open cell is not a
/// slot; a run has to span at least two cells.
pub fn parse_slots(grid: &Grid) -> Vec<Slot> {
    let mut result = vec![];

    let mut start = None;
    let mut length = 0;

    for row in 0..grid.height() {
        for col in 0..grid.width() {
            if grid.is_open(row, col) {
                if start.is_none() {
                    start = Some(col);
                }
                length += 1;
            } else {
                if let Some(start_col) = start.take() {
                    if length > 1 {
                        result.push(Slot {
                            row,
                            col: start_col,
                            direction: Direction::Across,
                            length,
                        });
                    }
                }
                length = 0;
            }
        }
        // have to close out the run at the end of the row
        if let Some(start_col) = start.take() {
            if length > 1 {
                result.push(Slot {
                    row,
                    col: start_col,
                    direction: Direction::Across,
                    length,
                });
            }
        }
        length = 0;
    }

    let mut start = None;
    let mut length = 0;

    for col in 0..grid.width() {
        for row in 0..grid.height() {
            if grid.is_open(row, col) {
                if start.is_none() {
                    start = Some(row);
                }
                length += 1;
            } else {
                if let Some(start_row) = start.take() {
                    if length > 1 {
                        result.push(Slot {
                            row: start_row,
                            col,
                            direction: Direction::Down,
                            length,
                        });
                    }
                }
                length = 0;
            }
        }
        if let Some(start_row) = start.take() {
            if length > 1 {
                result.push(Slot {
                    row: start_row,
                    col,
                    direction: Direction::Down,
                    length,
                });
            }
        }
        length = 0;
    }

    result
}

/// Normalize a vocabulary text: one word per line, uppercased, blank lines
/// skipped, duplicates dropped while keeping first-seen order.
pub fn parse_words(text: &str) -> Vec<String> {
    let mut seen = FxHashSet::default();
    let mut words = vec![];

    for line in text.lines() {
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        let word = word.to_ascii_uppercase();
        if seen.insert(word.clone()) {
            words.push(word);
        }
    }

    words
}
