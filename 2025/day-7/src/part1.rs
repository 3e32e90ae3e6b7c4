use std::collections::HashSet;

use miette::*;

use crate::manifold::{cell_at, Cell, Manifold};

/// Columns currently holding a beam. Beams sharing a column merge into one.
pub type BeamSet = HashSet<usize>;

/// Counts how often a beam is split on its way down the manifold.
///
/// Beams that land on the same column merge, so a splitter reached by two
/// beams at once only counts a single split.
#[tracing::instrument(skip_all, fields(start = manifold.start()))]
pub fn count_splits(manifold: &Manifold) -> u64 {
    let mut beams = BeamSet::from([manifold.start()]);
    let mut splits = 0;

    for row in manifold.rows() {
        let mut next_beams = BeamSet::with_capacity(beams.len() * 2);
        for &beam in &beams {
            match cell_at(row, beam) {
                // Parsing rejects splitters in the first column, so `beam - 1` cannot underflow
                Cell::Split => {
                    next_beams.insert(beam - 1);
                    next_beams.insert(beam + 1);
                    splits += 1;
                }
                Cell::Start | Cell::Empty => {
                    next_beams.insert(beam);
                }
            }
        }
        beams = next_beams;
    }

    tracing::debug!(splits, beams = beams.len(), "beams left the manifold");
    splits
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let manifold = Manifold::parse(input)?;
    Ok(count_splits(&manifold).to_string())
}
