use miette::*;

use crate::dial::Dial;
use crate::instruction::{parse_instructions, Instruction};

/// Counts how many instructions leave the dial pointing at zero.
///
/// Only the final position of each rotation matters here, intermediate clicks are ignored.
#[tracing::instrument(skip_all, fields(instructions = instructions.len()))]
pub fn count_zero_landings(instructions: &[Instruction]) -> u64 {
    let zero_hits = instructions
        .iter()
        // scan carries the dial through the iterator
        .scan(Dial::default(), |dial, instruction| {
            Some(dial.rotate(*instruction))
        })
        .filter(|&position| position == 0)
        .count();

    zero_hits as u64
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let instructions = parse_instructions(input)?;
    Ok(count_zero_landings(&instructions).to_string())
}
