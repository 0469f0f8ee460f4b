use crate::error::{XfillError, XfillResult};
use crate::grid::{Direction, Grid};
use crate::parse::{parse_slots, Slot};
use rustc_hash::FxHashMap;

/// Index of a slot in the puzzle's slot vector. Assignments and domains are
/// keyed by it.
pub type SlotId = usize;

/// The static half of the problem: the grid, the slots, and the precomputed
/// overlap relation between every pair of intersecting slots. Read-only
/// during solving.
#[derive(Debug, Clone)]
pub struct Puzzle {
    grid: Grid,
    slots: Vec<Slot>,
    overlaps: FxHashMap<(SlotId, SlotId), (usize, usize)>,
    neighbors: Vec<Vec<SlotId>>,
}

impl Puzzle {
    /// Extract the slots from the grid and build the puzzle.
    pub fn from_grid(grid: Grid) -> XfillResult<Puzzle> {
        let slots = parse_slots(&grid);
        Puzzle::new(grid, slots)
    }

    /// Build a puzzle from a grid and an explicit slot list. Every slot has
    /// to lie fully on open cells of the grid; a slot that leaves the grid
    /// or crosses a blocked cell is a configuration error.
    pub fn new(grid: Grid, slots: Vec<Slot>) -> XfillResult<Puzzle> {
        for slot in &slots {
            for offset in 0..slot.length {
                let (row, col) = slot.cell(offset);
                if row >= grid.height() || col >= grid.width() {
                    return Err(XfillError::SlotOutOfBounds {
                        slot: slot.clone(),
                        width: grid.width(),
                        height: grid.height(),
                    });
                }
                if !grid.is_open(row, col) {
                    return Err(XfillError::SlotBlocked { slot: slot.clone() });
                }
            }
        }

        // Which slot of each direction covers each cell. Two slots can only
        // intersect perpendicular to each other, since same-direction runs
        // are maximal and therefore disjoint.
        let mut lookup: FxHashMap<(Direction, usize, usize), SlotId> = FxHashMap::default();
        for (id, slot) in slots.iter().enumerate() {
            for offset in 0..slot.length {
                let (row, col) = slot.cell(offset);
                lookup.insert((slot.direction, row, col), id);
            }
        }

        let mut overlaps = FxHashMap::default();
        let mut neighbors = vec![vec![]; slots.len()];
        for (id, slot) in slots.iter().enumerate() {
            if slot.direction != Direction::Across {
                continue;
            }
            for offset in 0..slot.length {
                let (row, col) = slot.cell(offset);
                if let Some(&other) = lookup.get(&(Direction::Down, row, col)) {
                    let other_offset = row - slots[other].row;
                    overlaps.insert((id, other), (offset, other_offset));
                    overlaps.insert((other, id), (other_offset, offset));
                    neighbors[id].push(other);
                    neighbors[other].push(id);
                }
            }
        }

        Ok(Puzzle {
            grid,
            slots,
            overlaps,
            neighbors,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot(&self, id: SlotId) -> &Slot {
        &self.slots[id]
    }

    /// The character offsets at which `x` and `y` share a cell, or `None`
    /// when the two slots do not intersect.
    pub fn overlap(&self, x: SlotId, y: SlotId) -> Option<(usize, usize)> {
        self.overlaps.get(&(x, y)).copied()
    }

    /// Every slot intersecting `x`.
    pub fn neighbors(&self, x: SlotId) -> &[SlotId] {
        &self.neighbors[x]
    }

    /// All ordered pairs of intersecting slots.
    pub(crate) fn arcs(&self) -> impl Iterator<Item = (SlotId, SlotId)> + '_ {
        self.overlaps.keys().copied()
    }
}
