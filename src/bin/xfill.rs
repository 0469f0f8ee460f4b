use std::fs;
use std::path::PathBuf;

use clap::Parser;
use log::info;
use log::LevelFilter;
use xfill::parse_words;
use xfill::render;
use xfill::Grid;
use xfill::Puzzle;
use xfill::Solver;
use xfill::XfillResult;

#[derive(Debug, Parser)]
#[command(version, about = "Fill a crossword structure with words from a vocabulary")]
struct Args {
    /// The structure template. Each line is a grid row; `*` marks a blocked
    /// cell, any other character an open cell.
    structure: PathBuf,

    /// The vocabulary, one word per line.
    words: PathBuf,

    /// Also write the rendered solution to this file.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enables log message output from the solver
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> XfillResult<()> {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new().filter_level(level).init();

    let grid = Grid::parse(&fs::read_to_string(&args.structure)?)?;
    let words = parse_words(&fs::read_to_string(&args.words)?);
    let puzzle = Puzzle::from_grid(grid)?;
    info!(
        "{} slots, {} words in the vocabulary",
        puzzle.slots().len(),
        words.len()
    );

    match Solver::new(&puzzle, &words).solve() {
        Some(assignment) => {
            let rendered = render(&puzzle, &assignment);
            print!("{}", rendered);
            if let Some(path) = args.output {
                fs::write(path, rendered)?;
            }
        }
        None => println!("No solution."),
    }

    Ok(())
}
