use std::path::PathBuf;

use clap::Parser;
use miette::*;

use aoc2025_day_1::instruction::parse_instructions;
use aoc2025_day_1::{part1, part2};

#[derive(Parser, Debug)]
#[command(name = "secret-entrance", version)]
#[command(about = "Count how often the safe dial points at zero")]
struct Args {
    /// Puzzle input with one rotation (`L<n>` or `R<n>`) per line
    input_file: PathBuf,
}

fn main() -> Result<()> {
    aoc2025_day_1::init_logging();

    let args = Args::parse();
    let input = aoc2025_day_1::read_input(&args.input_file)?;
    let instructions = parse_instructions(&input)?;

    let password = part1::count_zero_landings(&instructions);
    println!("Solution to part 1: {}", password);

    let clicks = part2::count_zero_clicks(&instructions);
    println!("Solution to part 2: {}", clicks);
    Ok(())
}
