use crate::puzzle::Puzzle;
use crate::solve::Assignment;

/// Render an assignment as a text grid: one line per row, `█` on blocked
/// cells, the assigned letter on open cells. Open cells no assigned slot
/// covers come out as spaces, so partial assignments render too.
pub fn render(puzzle: &Puzzle, assignment: &Assignment) -> String {
    let grid = puzzle.grid();

    let mut letters = vec![vec![None; grid.width()]; grid.height()];
    for (&id, word) in assignment {
        let slot = puzzle.slot(id);
        for (offset, &byte) in word.as_bytes().iter().take(slot.length).enumerate() {
            let (row, col) = slot.cell(offset);
            letters[row][col] = Some(byte as char);
        }
    }

    let mut out = String::new();
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            if grid.is_open(row, col) {
                out.push(letters[row][col].unwrap_or(' '));
            } else {
                out.push('█');
            }
        }
        out.push('\n');
    }

    out
}
