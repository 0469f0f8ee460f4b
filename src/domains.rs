use crate::puzzle::{Puzzle, SlotId};
use log::debug;
use rustc_hash::FxHashSet;

/// The mutable half of the problem: which candidate words are still legal
/// for each slot. Domains only ever shrink; every mutation computes the
/// retained set first and then swaps it in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Domains {
    candidates: Vec<FxHashSet<String>>,
}

impl Domains {
    /// Every slot starts out with the full vocabulary; the length filter is
    /// the solver's job, not the loader's.
    pub(crate) fn new(puzzle: &Puzzle, vocabulary: &[String]) -> Domains {
        let full: FxHashSet<String> = vocabulary.iter().cloned().collect();
        Domains {
            candidates: vec![full; puzzle.slots().len()],
        }
    }

    pub(crate) fn candidates(&self, slot: SlotId) -> &FxHashSet<String> {
        &self.candidates[slot]
    }

    pub(crate) fn len(&self, slot: SlotId) -> usize {
        self.candidates[slot].len()
    }

    pub(crate) fn replace(&mut self, slot: SlotId, retained: FxHashSet<String>) {
        self.candidates[slot] = retained;
    }

    pub(crate) fn first_empty(&self) -> Option<SlotId> {
        self.candidates.iter().position(|set| set.is_empty())
    }

    /// Enforce the unary constraint: drop every candidate whose length does
    /// not match its slot. Idempotent.
    pub(crate) fn enforce_node_consistency(&mut self, puzzle: &Puzzle) {
        let mut removed = 0;
        for (id, slot) in puzzle.slots().iter().enumerate() {
            let retained: FxHashSet<String> = self.candidates[id]
                .iter()
                .filter(|word| word.len() == slot.length)
                .cloned()
                .collect();
            removed += self.candidates[id].len() - retained.len();
            self.candidates[id] = retained;
        }
        debug!("node consistency removed {} candidates", removed);
    }
}
