use super::Solver;
use crate::puzzle::SlotId;
use log::debug;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// An ordered pair of intersecting slots, read "make `0` consistent with
/// `1`".
pub(crate) type Arc = (SlotId, SlotId);

impl Solver<'_> {
    /// Make `x` arc consistent with `y`: drop every candidate of `x` that
    /// has no support at the overlap, i.e. no candidate of `y` carrying the
    /// same letter on the shared cell. A word may support itself; words
    /// being pairwise distinct is an assignment-time constraint, not a
    /// propagation one. Returns whether the domain of `x` shrank.
    pub(crate) fn revise(&mut self, x: SlotId, y: SlotId) -> bool {
        let (p, q) = match self.puzzle.overlap(x, y) {
            Some(overlap) => overlap,
            None => return false,
        };

        let supported: FxHashSet<u8> = self
            .domains
            .candidates(y)
            .iter()
            .map(|word| word.as_bytes()[q])
            .collect();

        let retained: FxHashSet<String> = self
            .domains
            .candidates(x)
            .iter()
            .filter(|word| supported.contains(&word.as_bytes()[p]))
            .cloned()
            .collect();

        if retained.len() == self.domains.len(x) {
            return false;
        }
        self.domains.replace(x, retained);
        true
    }

    /// Run AC-3 over the worklist, seeding it with every overlapping pair
    /// when the caller passes none. Revising an arc to an empty domain
    /// fails the whole propagation; revising it to a smaller domain puts
    /// every other inbound arc of that slot back on the queue. Re-enqueuing
    /// an arc that is already pending is redundant but harmless.
    pub(crate) fn ac3(&mut self, arcs: Option<Vec<Arc>>) -> bool {
        let mut worklist: VecDeque<Arc> = match arcs {
            Some(arcs) => arcs.into(),
            None => self.puzzle.arcs().collect(),
        };

        let mut revisions = 0u64;
        while let Some((x, y)) = worklist.pop_front() {
            revisions += 1;
            if self.revise(x, y) {
                if self.domains.candidates(x).is_empty() {
                    debug!(
                        "arc consistency emptied the domain of slot {} after {} revisions",
                        x, revisions
                    );
                    return false;
                }
                for &z in self.puzzle.neighbors(x) {
                    if z != y {
                        worklist.push_back((z, x));
                    }
                }
            }
        }

        debug!("arc consistency reached a fixpoint after {} revisions", revisions);
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::Grid;
    use crate::parse::parse_words;
    use crate::puzzle::Puzzle;
    use crate::solve::Solver;

    fn crossing() -> Puzzle {
        let grid = Grid::parse(
            "
*.*
...
*.*
",
        )
        .unwrap();
        Puzzle::from_grid(grid).unwrap()
    }

    #[test]
    fn revise_drops_unsupported_candidates() {
        let puzzle = crossing();
        let words = parse_words("cat\ndog\n");
        let mut solver = Solver::new(&puzzle, &words);
        solver.domains.replace(1, parse_words("cog").into_iter().collect());

        assert!(solver.revise(0, 1));
        assert_eq!(
            vec![String::from("DOG")],
            solver.domains.candidates(0).iter().cloned().collect::<Vec<_>>()
        );
    }

    #[test]
    fn revise_without_overlap_is_a_no_op() {
        let grid = Grid::parse(
            "
...
***
...
",
        )
        .unwrap();
        let puzzle = Puzzle::from_grid(grid).unwrap();
        let words = parse_words("cat\ndog\n");
        let mut solver = Solver::new(&puzzle, &words);

        assert!(!solver.revise(0, 1));
        assert_eq!(2, solver.domains.len(0));
    }

    #[test]
    fn a_word_may_support_itself() {
        let puzzle = crossing();
        let words = parse_words("cat\n");
        let mut solver = Solver::new(&puzzle, &words);

        // Both domains are {CAT}; the shared A is support enough even
        // though the supporting word is the candidate itself.
        assert!(solver.ac3(None));
        assert_eq!(1, solver.domains.len(0));
        assert_eq!(1, solver.domains.len(1));
    }

    #[test]
    fn ac3_reaches_a_global_fixpoint() {
        let puzzle = crossing();
        let words = parse_words("cat\ndog\ncog\noat\n");
        let mut solver = Solver::new(&puzzle, &words);
        solver.domains.enforce_node_consistency(&puzzle);

        assert!(solver.ac3(None));

        for x in 0..puzzle.slots().len() {
            for &y in puzzle.neighbors(x) {
                let (p, q) = puzzle.overlap(x, y).unwrap();
                for word in solver.domains.candidates(x) {
                    assert!(solver
                        .domains
                        .candidates(y)
                        .iter()
                        .any(|other| other.as_bytes()[q] == word.as_bytes()[p]));
                }
            }
        }
    }

    #[test]
    fn rerunning_ac3_changes_nothing() {
        let puzzle = crossing();
        let words = parse_words("cat\ndog\ncog\noat\n");
        let mut solver = Solver::new(&puzzle, &words);
        solver.domains.enforce_node_consistency(&puzzle);

        assert!(solver.ac3(None));
        let settled = solver.domains.clone();
        assert!(solver.ac3(None));

        assert_eq!(settled, solver.domains);
    }

    #[test]
    fn emptied_domain_fails_propagation() {
        let puzzle = crossing();
        let words = parse_words("cat\n");
        let mut solver = Solver::new(&puzzle, &words);
        solver.domains.replace(1, parse_words("dog").into_iter().collect());

        // No candidate of slot 0 carries an O on the shared cell.
        assert!(!solver.ac3(Some(vec![(0, 1)])));
        assert!(solver.domains.candidates(0).is_empty());
    }

    #[test]
    fn explicit_worklists_are_honored() {
        let puzzle = crossing();
        let words = parse_words("cat\ncog\n");
        let mut solver = Solver::new(&puzzle, &words);
        solver.domains.replace(1, parse_words("cog").into_iter().collect());

        // Only the supplied arc is revised; slot 1 is left alone.
        assert!(solver.ac3(Some(vec![(0, 1)])));
        assert_eq!(1, solver.domains.len(0));
        assert_eq!(1, solver.domains.len(1));
    }
}
