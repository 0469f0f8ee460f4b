use crate::error::{XfillError, XfillResult};
use std::fmt;

/// Direction that a slot runs in.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Direction {
    Across,
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Across => write!(f, "across"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// The static shape of a puzzle: which cells may hold a letter and which are
/// blocked. Computed once from a textual template and read-only afterwards.
#[derive(PartialEq, Eq, Debug, Hash, Clone)]
pub struct Grid {
    open: Vec<bool>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Parse a template into a grid. Each line is a row; `*` marks a blocked
    /// cell and any other character an open cell. Lines shorter than the
    /// widest one are padded with blocked cells. Zero-length lines are
    /// ignored, so templates may start and end with a newline.
    pub fn parse(template: &str) -> XfillResult<Grid> {
        let rows: Vec<&str> = template.lines().filter(|line| !line.is_empty()).collect();

        let height = rows.len();
        let width = rows.iter().map(|row| row.len()).max().unwrap_or(0);
        if width == 0 {
            return Err(XfillError::EmptyGrid);
        }

        let mut open = Vec::with_capacity(width * height);
        for row in &rows {
            let bytes = row.as_bytes();
            for col in 0..width {
                open.push(bytes.get(col).map_or(false, |&b| b != b'*'));
            }
        }

        Ok(Grid {
            open,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_open(&self, row: usize, col: usize) -> bool {
        self.open[row * self.width + col]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                write!(f, "{}", if self.is_open(row, col) { '·' } else { '█' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
