use std::path::PathBuf;

use clap::Parser;
use miette::*;

use aoc2025_day_7::manifold::Manifold;
use aoc2025_day_7::{part1, part2};

#[derive(Parser, Debug)]
#[command(name = "laboratories", version)]
#[command(about = "Count beam splits and timelines in a tachyon manifold")]
struct Args {
    /// Puzzle input: a grid with one 'S' in the first row and '^' splitters below
    input_file: PathBuf,
}

fn main() -> Result<()> {
    aoc2025_day_7::init_logging();

    let args = Args::parse();
    let input = aoc2025_day_7::read_input(&args.input_file)?;
    let manifold = Manifold::parse(&input)?;

    let splits = part1::count_splits(&manifold);
    println!("Solution to part 1: {}", splits);

    let timelines = part2::count_timelines(&manifold);
    println!("Solution to part 2: {}", timelines);
    Ok(())
}
