use miette::*;

use crate::grid::PaperGrid;

/// Removes accessible rolls until none are left to take and returns how many went.
///
/// Taking a roll only ever lowers its neighbors' counts, so removing a whole
/// pass at once reaches the same end state as removing rolls one by one.
#[tracing::instrument(skip_all, fields(rolls = grid.roll_count()))]
pub fn count_removable(mut grid: PaperGrid) -> usize {
    let mut total_removed = 0;

    loop {
        let to_remove: Vec<_> = grid
            .positions()
            .filter(|&pos| grid.is_accessible(pos))
            .collect();

        if to_remove.is_empty() {
            break;
        }
        total_removed += to_remove.len();
        tracing::debug!(removed = to_remove.len(), total_removed, "removal pass");

        for pos in to_remove {
            grid.remove(pos);
        }
    }

    total_removed
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let grid = PaperGrid::parse(input)?;
    Ok(count_removable(grid).to_string())
}
