use std::path::PathBuf;

use clap::Parser;
use miette::*;

use aoc2025_day_4::grid::PaperGrid;
use aoc2025_day_4::{part1, part2};

#[derive(Parser, Debug)]
#[command(name = "printing-department", version)]
#[command(about = "Count paper rolls that are accessible and that can be removed")]
struct Args {
    /// Puzzle input: a grid of '@' (paper roll) and '.' (empty)
    input_file: PathBuf,
}

fn main() -> Result<()> {
    aoc2025_day_4::init_logging();

    let args = Args::parse();
    let input = aoc2025_day_4::read_input(&args.input_file)?;
    let grid = PaperGrid::parse(&input)?;

    println!("Solution to part 1: {}", part1::count_accessible(&grid));
    println!("Solution to part 2: {}", part2::count_removable(grid));
    Ok(())
}
