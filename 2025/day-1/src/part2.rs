use miette::*;

use crate::dial::Dial;
use crate::instruction::{parse_instructions, Instruction};

/// Counts every click that points the dial at zero, during a rotation or at its end.
#[tracing::instrument(skip_all, fields(instructions = instructions.len()))]
pub fn count_zero_clicks(instructions: &[Instruction]) -> u64 {
    // fold keeps the dial and the running total together
    let (dial, total_clicks) = instructions
        .iter()
        .fold((Dial::default(), 0), |(mut dial, count), instruction| {
            let clicks = dial.rotate_counting_clicks(*instruction);
            (dial, count + clicks)
        });

    tracing::debug!(final_position = dial.position(), total_clicks);
    total_clicks
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let instructions = parse_instructions(input)?;
    Ok(count_zero_clicks(&instructions).to_string())
}
