use crate::domains::Domains;
use crate::puzzle::{Puzzle, SlotId};
use crate::solve::Assignment;
use std::cmp::Ordering;

/// Pick the next slot to fill: fewest remaining candidates first, with the
/// number of intersecting slots as the tie-breaker. Remaining ties fall to
/// the lowest slot id; any tied slot would do.
pub(crate) fn select_unassigned_variable(
    puzzle: &Puzzle,
    domains: &Domains,
    assignment: &Assignment,
) -> Option<SlotId> {
    let mut best: Option<SlotId> = None;

    for id in 0..puzzle.slots().len() {
        if assignment.contains_key(&id) {
            continue;
        }
        best = match best {
            None => Some(id),
            Some(current) => {
                let by_domain = domains.len(id).cmp(&domains.len(current));
                let by_degree = puzzle.neighbors(id).len().cmp(&puzzle.neighbors(current).len());
                if by_domain == Ordering::Less
                    || (by_domain == Ordering::Equal && by_degree == Ordering::Greater)
                {
                    Some(id)
                } else {
                    Some(current)
                }
            }
        };
    }

    best
}

/// Rank the candidates of `slot` least-constraining first: for each word,
/// count how many candidates it would rule out across the unassigned
/// neighbors, and sort ascending by that count. The counts are taken
/// against the neighbors' domains as they stand now and are not recomputed
/// while the caller walks the list.
pub(crate) fn order_domain_values(
    puzzle: &Puzzle,
    domains: &Domains,
    assignment: &Assignment,
    slot: SlotId,
) -> Vec<String> {
    let unassigned_neighbors: Vec<SlotId> = puzzle
        .neighbors(slot)
        .iter()
        .copied()
        .filter(|neighbor| !assignment.contains_key(neighbor))
        .collect();

    let mut ranked: Vec<(String, usize)> = domains
        .candidates(slot)
        .iter()
        .map(|word| {
            let mut eliminated = 0;
            for &neighbor in &unassigned_neighbors {
                if let Some((p, q)) = puzzle.overlap(slot, neighbor) {
                    let letter = word.as_bytes()[p];
                    eliminated += domains
                        .candidates(neighbor)
                        .iter()
                        .filter(|other| other.as_bytes()[q] != letter)
                        .count();
                }
            }
            (word.clone(), eliminated)
        })
        .collect();

    ranked.sort_by_key(|(_, eliminated)| *eliminated);
    ranked.into_iter().map(|(word, _)| word).collect()
}

#[cfg(test)]
mod tests {
    use super::{order_domain_values, select_unassigned_variable};
    use crate::domains::Domains;
    use crate::grid::Grid;
    use crate::parse::parse_words;
    use crate::puzzle::Puzzle;
    use crate::solve::Assignment;

    fn word_set(words: &[&str]) -> rustc_hash::FxHashSet<String> {
        words.iter().map(|word| String::from(*word)).collect()
    }

    #[test]
    fn select_prefers_smallest_domain() {
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
        let mut domains = Domains::new(&puzzle, &words);
        domains.replace(1, word_set(&["DOG"]));

        let selected = select_unassigned_variable(&puzzle, &domains, &Assignment::default());
        assert_eq!(Some(1), selected);
    }

    #[test]
    fn select_breaks_ties_by_degree() {
        // Slot 0 spans the top row and crosses both columns; slots 1 and 2
        // each cross a single column.
        let grid = Grid::parse(
            "
.....
*.*.*
..*..
",
        )
        .unwrap();
        let puzzle = Puzzle::from_grid(grid).unwrap();
        assert_eq!(5, puzzle.slots().len());

        let words = parse_words("");
        let mut domains = Domains::new(&puzzle, &words);
        domains.replace(0, word_set(&["AAAAA", "BBBBB", "CCCCC"]));
        domains.replace(1, word_set(&["AA", "BB"]));
        domains.replace(2, word_set(&["CC", "DD"]));
        domains.replace(3, word_set(&["EEE", "FFF"]));
        domains.replace(4, word_set(&["GGG", "HHH"]));

        // Sizes tie at two for slots 1..=4; the down slots have two
        // neighbors each while the short across slots have one.
        let selected = select_unassigned_variable(&puzzle, &domains, &Assignment::default());
        assert_eq!(Some(3), selected);
    }

    #[test]
    fn select_skips_assigned_slots() {
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
        let domains = Domains::new(&puzzle, &words);

        let mut assignment = Assignment::default();
        assignment.insert(0, String::from("CAT"));
        assert_eq!(
            Some(1),
            select_unassigned_variable(&puzzle, &domains, &assignment)
        );

        assignment.insert(1, String::from("DOG"));
        assert_eq!(
            None,
            select_unassigned_variable(&puzzle, &domains, &assignment)
        );
    }

    #[test]
    fn values_ordered_least_constraining_first() {
        let grid = Grid::parse(
            "
*.*
...
*.*
",
        )
        .unwrap();
        let puzzle = Puzzle::from_grid(grid).unwrap();
        let words = parse_words("");
        let mut domains = Domains::new(&puzzle, &words);
        // The across slot crosses the down slot at offset (1, 1). CAT keeps
        // ARE and ANT alive through the shared A; COO rules out all three.
        domains.replace(0, word_set(&["CAT", "COO"]));
        domains.replace(1, word_set(&["ARE", "OAK", "ANT"]));

        let ordered = order_domain_values(&puzzle, &domains, &Assignment::default(), 0);
        assert_eq!(vec![String::from("CAT"), String::from("COO")], ordered);
    }

    #[test]
    fn assigned_neighbors_do_not_count() {
        let grid = Grid::parse(
            "
*.*
...
*.*
",
        )
        .unwrap();
        let puzzle = Puzzle::from_grid(grid).unwrap();
        let words = parse_words("");
        let mut domains = Domains::new(&puzzle, &words);
        domains.replace(0, word_set(&["CAT", "COO"]));
        domains.replace(1, word_set(&["ARE", "OAK", "ANT"]));

        let mut assignment = Assignment::default();
        assignment.insert(1, String::from("OAK"));

        // With the only neighbor assigned nothing can be eliminated, so
        // both candidates come back.
        let ordered = order_domain_values(&puzzle, &domains, &assignment, 0);
        assert_eq!(2, ordered.len());
    }
}
