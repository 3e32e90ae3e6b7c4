use miette::*;
use rayon::prelude::*;

use crate::grid::PaperGrid;

/// Counts rolls a forklift can reach right away.
///
/// Rows are independent reads of the same grid, so they are scanned in parallel.
#[tracing::instrument(skip_all, fields(width = grid.width(), height = grid.height()))]
pub fn count_accessible(grid: &PaperGrid) -> usize {
    (0..grid.height())
        .into_par_iter()
        .map(|y| {
            grid.row_positions(y)
                .filter(|&pos| grid.is_accessible(pos))
                .count()
        })
        .sum()
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let grid = PaperGrid::parse(input)?;
    Ok(count_accessible(&grid).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn it_works() -> Result<()> {
        let input = "..@@.@@@@.
@@@.@.@.@@
@@@@@.@.@@
@.@@@@..@.
@@.@@@@.@@
.@@@@@@@.@
.@.@.@.@@@
@.@@@.@@@@
.@@@@@@@@.
@.@.@@@.@.";
        assert_eq!("13", process(input)?);
        Ok(())
    }

    #[rstest]
    #[case("...\n...", "0")]
    #[case("@@\n@@", "4")]
    #[case("@@@\n@@@\n@@@", "4")]
    #[case("", "0")]
    fn counts_accessible_rolls(#[case] input: &str, #[case] expected: &str) -> Result<()> {
        assert_eq!(expected, process(input)?);
        Ok(())
    }
}
