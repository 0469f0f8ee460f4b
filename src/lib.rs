//! Fills crossword grids with words from a vocabulary.
//!
//! A grid is parsed into slots (maximal open runs in either direction),
//! the slots and their overlaps form a constraint satisfaction problem,
//! and the solver prunes each slot's candidate words with node and arc
//! consistency before running a heuristic backtracking search. Solving
//! yields either a complete assignment of one distinct word per slot, with
//! every crossing agreeing on its shared letter, or the definite answer
//! that no such assignment exists.
//!
//! ```
//! use xfill::{parse_words, render, Grid, Puzzle, Solver};
//!
//! let grid = Grid::parse("*.*\n...\n*.*\n").unwrap();
//! let puzzle = Puzzle::from_grid(grid).unwrap();
//! let words = parse_words("cat\ncar\n");
//!
//! let assignment = Solver::new(&puzzle, &words).solve().expect("solvable");
//! print!("{}", render(&puzzle, &assignment));
//! ```

mod domains;
pub mod error;
pub mod grid;
mod order;
pub mod parse;
pub mod puzzle;
pub mod render;
pub mod solve;

pub use error::{XfillError, XfillResult};
pub use grid::{Direction, Grid};
pub use parse::{parse_slots, parse_words, Slot};
pub use puzzle::{Puzzle, SlotId};
pub use render::render;
pub use solve::{Assignment, Solver};
