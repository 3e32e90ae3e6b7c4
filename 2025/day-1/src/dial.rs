use crate::instruction::{signed, Instruction};

/// Number of positions on the dial, `0..DIAL_SIZE`.
pub const DIAL_SIZE: i64 = 100;
/// Position the dial points at before the first instruction.
pub const START_POSITION: i64 = 50;

/// Current position of the dial, always within `0..DIAL_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dial {
    position: i64,
}

impl Default for Dial {
    fn default() -> Self {
        Self::at(START_POSITION)
    }
}

impl Dial {
    pub fn at(position: i64) -> Self {
        Self {
            position: position.rem_euclid(DIAL_SIZE),
        }
    }

    pub fn position(&self) -> i64 {
        self.position
    }

    /// Applies the whole rotation at once and returns the resulting position.
    pub fn rotate(&mut self, instruction: Instruction) -> i64 {
        self.position = (self.position + instruction.offset()).rem_euclid(DIAL_SIZE);
        self.position
    }

    /// Applies the rotation and returns how many clicks pointed the dial at zero.
    ///
    /// Full revolutions always pass zero once each. The remaining partial turn
    /// counts once more if it ends exactly on zero, or if it wrapped around the
    /// dial. A partial turn starting at zero is never counted as a wrap.
    pub fn rotate_counting_clicks(&mut self, instruction: Instruction) -> u64 {
        let magnitude = instruction.magnitude() as i64;
        let mut clicks = (magnitude / DIAL_SIZE) as u64;
        let remainder = magnitude % DIAL_SIZE;

        let original = self.position;
        let raw = original + signed(instruction.direction(), remainder);
        let wrapped = raw.rem_euclid(DIAL_SIZE);

        let passed_zero = original != 0 && wrapped != raw;
        if raw == 0 || passed_zero {
            clicks += 1;
        }

        tracing::trace!(%instruction, original, raw, clicks, "rotated");
        self.position = wrapped;
        clicks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::instruction::Direction;
    use rstest::rstest;

    fn rotation(direction: Direction, magnitude: u32) -> Instruction {
        Instruction::new(direction, magnitude).unwrap()
    }

    #[test]
    fn starts_at_fifty() {
        assert_eq!(Dial::default().position(), START_POSITION);
    }

    #[rstest]
    #[case(50, Direction::Left, 68, 82)]
    #[case(82, Direction::Right, 48, 30)]
    #[case(0, Direction::Left, 1, 99)]
    #[case(99, Direction::Right, 1, 0)]
    #[case(50, Direction::Right, 250, 0)]
    fn rotate_wraps_around(
        #[case] start: i64,
        #[case] direction: Direction,
        #[case] magnitude: u32,
        #[case] expected: i64,
    ) {
        let mut dial = Dial::at(start);
        assert_eq!(dial.rotate(rotation(direction, magnitude)), expected);
        assert_eq!(dial.position(), expected);
    }

    #[rstest]
    // lands on zero
    #[case(50, Direction::Right, 50, 1, 0)]
    #[case(50, Direction::Left, 50, 1, 0)]
    // one full revolution plus a remainder that lands on zero
    #[case(50, Direction::Right, 150, 2, 0)]
    // passes zero without stopping there
    #[case(50, Direction::Left, 68, 1, 82)]
    #[case(95, Direction::Right, 60, 1, 55)]
    // neither passes nor lands on zero
    #[case(50, Direction::Right, 10, 0, 60)]
    #[case(50, Direction::Left, 49, 0, 1)]
    // leaving zero is not a wrap
    #[case(0, Direction::Left, 5, 0, 95)]
    #[case(0, Direction::Right, 5, 0, 5)]
    // full revolutions only
    #[case(50, Direction::Right, 100, 1, 50)]
    // an empty remainder starting from zero still ends on zero
    #[case(0, Direction::Left, 300, 4, 0)]
    fn rotate_counting_clicks_counts_zero_passes(
        #[case] start: i64,
        #[case] direction: Direction,
        #[case] magnitude: u32,
        #[case] clicks: u64,
        #[case] end: i64,
    ) {
        let mut dial = Dial::at(start);
        assert_eq!(dial.rotate_counting_clicks(rotation(direction, magnitude)), clicks);
        assert_eq!(dial.position(), end);
    }
}
