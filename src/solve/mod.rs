use crate::domains::Domains;
use crate::order;
use crate::puzzle::{Puzzle, SlotId};
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

mod propagate;

/// A partial or complete choice of word per slot. Cloned, not mutated, when
/// the search branches, so abandoning a branch discards its choices.
pub type Assignment = FxHashMap<SlotId, String>;

/// One solve over one puzzle. The solver owns its own copy of the domains,
/// so concurrent or repeated solves over the same puzzle cannot interfere;
/// `solve` consumes the solver because the domains are spent afterwards.
pub struct Solver<'p> {
    puzzle: &'p Puzzle,
    domains: Domains,
    vocabulary: FxHashSet<String>,
    nodes: u64,
}

impl<'p> Solver<'p> {
    pub fn new(puzzle: &'p Puzzle, vocabulary: &[String]) -> Solver<'p> {
        Solver {
            puzzle,
            domains: Domains::new(puzzle, vocabulary),
            vocabulary: vocabulary.iter().cloned().collect(),
            nodes: 0,
        }
    }

    /// Prune the domains with node and arc consistency, then search. Either
    /// phase can already prove the puzzle unsatisfiable; search exhaustion
    /// is the remaining way to come up empty. `None` is a result, not a
    /// fault.
    pub fn solve(mut self) -> Option<Assignment> {
        self.domains.enforce_node_consistency(self.puzzle);
        if let Some(slot) = self.domains.first_empty() {
            debug!(
                "no candidate matches slot {} {}",
                slot,
                self.puzzle.slot(slot)
            );
            return None;
        }
        if !self.ac3(None) {
            return None;
        }

        let solution = self.backtrack(Assignment::default());
        debug!("search explored {} nodes", self.nodes);
        solution
    }

    fn backtrack(&mut self, assignment: Assignment) -> Option<Assignment> {
        if self.assignment_complete(&assignment) {
            return Some(assignment);
        }
        self.nodes += 1;

        let slot = order::select_unassigned_variable(self.puzzle, &self.domains, &assignment)?;
        for word in order::order_domain_values(self.puzzle, &self.domains, &assignment, slot) {
            let mut extended = assignment.clone();
            extended.insert(slot, word);
            if self.consistent(&extended) {
                if let Some(solution) = self.backtrack(extended) {
                    return Some(solution);
                }
            }
        }

        None
    }

    /// A complete assignment covers every slot with a non-empty word of the
    /// right length drawn from the vocabulary.
    fn assignment_complete(&self, assignment: &Assignment) -> bool {
        self.puzzle
            .slots()
            .iter()
            .enumerate()
            .all(|(id, slot)| match assignment.get(&id) {
                Some(word) => {
                    !word.is_empty()
                        && word.len() == slot.length
                        && self.vocabulary.contains(word)
                }
                None => false,
            })
    }

    /// A valid assignment uses pairwise distinct words, matches every
    /// slot's length, and agrees on the shared letter of every assigned
    /// overlapping pair.
    fn consistent(&self, assignment: &Assignment) -> bool {
        let mut seen = FxHashSet::default();
        for (&id, word) in assignment {
            if !seen.insert(word.as_str()) {
                return false;
            }
            if word.len() != self.puzzle.slot(id).length {
                return false;
            }
        }

        for (&x, word_x) in assignment {
            for &y in self.puzzle.neighbors(x) {
                let word_y = match assignment.get(&y) {
                    Some(word) => word,
                    None => continue,
                };
                if let Some((p, q)) = self.puzzle.overlap(x, y) {
                    if word_x.as_bytes()[p] != word_y.as_bytes()[q] {
                        return false;
                    }
                }
            }
        }

        true
    }
}
