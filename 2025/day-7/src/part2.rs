use std::collections::HashMap;

use miette::*;
use num_bigint::BigUint;

use crate::manifold::{cell_at, Cell, Manifold};

/// Number of timelines occupying each column.
///
/// Every splitter can double the count, so a few hundred rows outgrow any
/// fixed-width integer.
pub type TimelineMap = HashMap<usize, BigUint>;

/// Counts the timelines a single particle ends up in after crossing the manifold.
///
/// Unlike the beams of part 1, timelines reaching the same column keep their
/// individual weight: the counts are added together instead of merged.
#[tracing::instrument(skip_all, fields(start = manifold.start()))]
pub fn count_timelines(manifold: &Manifold) -> BigUint {
    let mut timelines = TimelineMap::from([(manifold.start(), BigUint::from(1u32))]);

    for row in manifold.rows() {
        let mut next_timelines = TimelineMap::with_capacity(timelines.len() * 2);
        for (&beam, count) in &timelines {
            match cell_at(row, beam) {
                Cell::Split => {
                    *next_timelines.entry(beam - 1).or_default() += count;
                    *next_timelines.entry(beam + 1).or_default() += count;
                }
                Cell::Start | Cell::Empty => {
                    *next_timelines.entry(beam).or_default() += count;
                }
            }
        }
        timelines = next_timelines;
        tracing::trace!(columns = timelines.len(), "advanced one row");
    }

    timelines.values().sum()
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let manifold = Manifold::parse(input)?;
    Ok(count_timelines(&manifold).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn it_works() -> Result<()> {
        let input = ".......S.......
...............
.......^.......
...............
......^.^......
...............
.....^.^.^.....
...............
....^.^...^....
...............
...^.^...^.^...
...............
..^...^.....^..
...............
.^.^.^.^.^...^.
...............";
        assert_eq!("40", process(input)?);
        Ok(())
    }

    #[rstest]
    // one split, two timelines
    #[case(".S.\n.^.", "2")]
    // one of the two resulting beams splits again
    #[case("..S..\n..^..\n.^...", "3")]
    // no splitter on the path keeps the single timeline
    #[case("..S..\n.^...\n.....", "1")]
    // timelines meeting on column 3 add up instead of merging
    #[case("...S...\n...^...\n..^.^..\n...^...", "6")]
    fn counts_timelines(#[case] input: &str, #[case] expected: &str) -> Result<()> {
        assert_eq!(expected, process(input)?);
        Ok(())
    }

    /// Stacks `depth` rows of splitters so that every beam splits on every row.
    fn full_split_pyramid(depth: usize) -> String {
        let width = 2 * depth + 3;
        let center = depth + 1;
        let mut rows = vec![String::new(); depth + 1];
        rows[0] = (0..width).map(|x| if x == center { 'S' } else { '.' }).collect();
        for (k, row) in rows.iter_mut().enumerate().skip(1) {
            *row = (0..width)
                .map(|x| {
                    let reached = x + k > center && x < center + k;
                    if reached && (x + k - center) % 2 == 1 {
                        '^'
                    } else {
                        '.'
                    }
                })
                .collect();
        }
        rows.join("\n")
    }

    #[test]
    fn timelines_grow_past_fixed_width_integers() -> Result<()> {
        let manifold = Manifold::parse(&full_split_pyramid(130))?;
        assert_eq!(count_timelines(&manifold), BigUint::from(1u32) << 130usize);
        Ok(())
    }

    #[test]
    fn invalid_manifold_is_reported() {
        let err = process("..S..\n....^").unwrap_err();
        assert!(err.to_string().contains("edge of the manifold"));
    }
}
