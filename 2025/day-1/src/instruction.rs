use std::fmt;
use std::num::ParseIntError;

use chumsky::prelude::*;
use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// A single rotation of the dial: a direction and a strictly positive number of clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    direction: Direction,
    magnitude: u32,
}

impl Instruction {
    /// Returns `None` for a zero magnitude, which is not a valid rotation.
    pub fn new(direction: Direction, magnitude: u32) -> Option<Self> {
        (magnitude > 0).then_some(Self {
            direction,
            magnitude,
        })
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn magnitude(&self) -> u32 {
        self.magnitude
    }

    /// Signed number of clicks, negative when turning left.
    pub fn offset(&self) -> i64 {
        signed(self.direction, self.magnitude as i64)
    }
}

/// Applies the sign of `direction` to an unsigned amount of clicks.
pub(crate) fn signed(direction: Direction, amount: i64) -> i64 {
    match direction {
        Direction::Left => -amount,
        Direction::Right => amount,
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self.direction {
            Direction::Left => 'L',
            Direction::Right => 'R',
        };
        write!(f, "{letter}{}", self.magnitude)
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum DialError {
    #[error("Invalid instruction: '{instruction}'")]
    #[diagnostic(
        code(secret_entrance::invalid_instruction),
        help("every line must be `L` or `R` followed by a positive integer, e.g. `L68`")
    )]
    InvalidInstruction {
        instruction: String,
        #[source_code]
        input: String,
        #[label("this instruction")]
        span: SourceSpan,
    },
}

/// Parses one instruction token.
///
/// The magnitude is kept as a `Result` so that overflowing numbers end up as a
/// regular validation failure instead of a panic inside the parser.
fn parser<'a>(
) -> impl Parser<'a, &'a str, (Direction, Result<u32, ParseIntError>), extra::Err<Rich<'a, char>>> {
    one_of("LR")
        .map(|dir| match dir {
            'L' => Direction::Left,
            'R' => Direction::Right,
            _ => unreachable!("one_of ensures only L or R are parsed"),
        })
        .then(text::digits(10).to_slice().from_str::<u32>())
        .then_ignore(end())
}

/// Parses the whole puzzle input, one instruction per line.
///
/// Blank lines are skipped. The first malformed line aborts parsing, so callers
/// never see a partial list.
#[tracing::instrument(skip(input), fields(bytes = input.len()))]
pub fn parse_instructions(input: &str) -> Result<Vec<Instruction>, DialError> {
    let parser = parser();
    let mut instructions = Vec::new();
    let mut offset = 0;

    for line in input.split_inclusive('\n') {
        let token = line.trim_end_matches(['\r', '\n']);

        if !token.trim().is_empty() {
            let instruction = parser
                .parse(token)
                .into_result()
                .ok()
                .and_then(|(direction, magnitude)| Instruction::new(direction, magnitude.ok()?))
                .ok_or_else(|| DialError::InvalidInstruction {
                    instruction: token.to_string(),
                    input: input.to_string(),
                    span: (offset, token.len()).into(),
                })?;
            instructions.push(instruction);
        }

        offset += line.len();
    }

    tracing::debug!(count = instructions.len(), "parsed instructions");
    Ok(instructions)
}
