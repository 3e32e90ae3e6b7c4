use chumsky::prelude::*;
use glam::IVec2;
use miette::*;

pub const ROLL_SYMBOL: char = '@';
pub const EMPTY_SYMBOL: char = '.';
/// A roll is accessible when fewer than this many rolls surround it.
pub const ROLL_THRESHOLD: usize = 4;

const NEIGHBOR_OFFSETS: [IVec2; 8] = [
    IVec2::new(-1, -1),
    IVec2::new(0, -1),
    IVec2::new(1, -1),
    IVec2::new(-1, 0),
    IVec2::new(1, 0),
    IVec2::new(-1, 1),
    IVec2::new(0, 1),
    IVec2::new(1, 1),
];

/// Floor plan of the printing department, stored row by row.
#[derive(Debug, Clone)]
pub struct PaperGrid {
    width: usize,
    height: usize,
    // true = '@' (paper roll), false = '.' (empty)
    cells: Vec<bool>,
}

/// Parses rows of '@' and '.' separated by newlines.
fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Vec<bool>>, extra::Err<Rich<'a, char>>> {
    let cell = just(ROLL_SYMBOL).to(true).or(just(EMPTY_SYMBOL).to(false));

    cell.repeated()
        .collect::<Vec<_>>()
        .separated_by(text::newline())
        .allow_trailing()
        .collect::<Vec<_>>()
}

impl PaperGrid {
    #[tracing::instrument(skip(input), fields(bytes = input.len()))]
    pub fn parse(input: &str) -> Result<Self> {
        let rows = parser()
            .parse(input)
            .into_result()
            .map_err(|e| miette!("Parse failed: {:?}", e))?;

        Self::from_rows(rows)
    }

    /// Builds the grid from parsed rows.
    ///
    /// Empty rows at the end (trailing newlines) are dropped, a blank row
    /// anywhere else is an error.
    pub fn from_rows(mut rows: Vec<Vec<bool>>) -> Result<Self> {
        while rows.last().is_some_and(|r| r.is_empty()) {
            rows.pop();
        }
        if let Some(y) = rows.iter().position(|r| r.is_empty()) {
            bail!("Row {} is blank, rows must be contiguous", y + 1);
        }

        let height = rows.len();
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        if let Some(y) = rows.iter().position(|r| r.len() != width) {
            bail!(
                "Row {} has {} cells, expected {} like the first row",
                y + 1,
                rows[y].len(),
                width
            );
        }

        let cells = rows.into_iter().flatten().collect();
        Ok(PaperGrid {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, pos: IVec2) -> Option<usize> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        let (x, y) = (pos.x as usize, pos.y as usize);
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Returns whether a roll sits at `pos`, false outside the grid.
    pub fn has_roll(&self, pos: IVec2) -> bool {
        self.index(pos).is_some_and(|idx| self.cells[idx])
    }

    /// Counts rolls in the eight surrounding cells.
    pub fn count_neighbors(&self, pos: IVec2) -> usize {
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&offset| self.has_roll(pos + offset))
            .count()
    }

    pub fn is_accessible(&self, pos: IVec2) -> bool {
        self.has_roll(pos) && self.count_neighbors(pos) < ROLL_THRESHOLD
    }

    /// Positions of row `y`, left to right.
    pub fn row_positions(&self, y: usize) -> impl Iterator<Item = IVec2> {
        (0..self.width).map(move |x| IVec2::new(x as i32, y as i32))
    }

    pub fn positions(&self) -> impl Iterator<Item = IVec2> + '_ {
        (0..self.height).flat_map(move |y| self.row_positions(y))
    }

    pub fn remove(&mut self, pos: IVec2) {
        if let Some(idx) = self.index(pos) {
            self.cells[idx] = false;
        }
    }

    pub fn roll_count(&self) -> usize {
        self.cells.iter().filter(|&&roll| roll).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn parses_rows() -> Result<()> {
        let grid = PaperGrid::parse("@.@\n.@.\n")?;
        assert_eq!((grid.width(), grid.height()), (3, 2));
        assert_eq!(grid.roll_count(), 3);
        assert!(grid.has_roll(IVec2::new(2, 0)));
        assert!(!grid.has_roll(IVec2::new(1, 0)));
        Ok(())
    }

    #[test]
    fn trailing_blank_lines_are_ignored() -> Result<()> {
        let grid = PaperGrid::parse("@@\n@@\n\n\n")?;
        assert_eq!((grid.width(), grid.height()), (2, 2));
        Ok(())
    }

    #[test]
    fn blank_row_is_not_squeezed_out() {
        let err = PaperGrid::parse("@@\n\n@@").unwrap_err();
        assert!(err.to_string().contains("Row 2 is blank"));
    }

    #[test]
    fn outside_the_grid_is_empty() -> Result<()> {
        let grid = PaperGrid::parse("@@\n@@")?;
        assert!(!grid.has_roll(IVec2::new(-1, 0)));
        assert!(!grid.has_roll(IVec2::new(0, 2)));
        assert_eq!(grid.count_neighbors(IVec2::new(0, 0)), 3);
        Ok(())
    }

    #[rstest]
    #[case("@x@")]
    #[case("@@\n@@@")]
    #[case("@@\n\n@@")]
    #[case("\n@@")]
    fn rejects_malformed_grids(#[case] input: &str) {
        assert!(PaperGrid::parse(input).is_err());
    }

    #[test]
    fn removing_a_roll_frees_its_neighbors() -> Result<()> {
        let mut grid = PaperGrid::parse("@@@\n@@@\n@@@")?;
        let center = IVec2::new(1, 1);
        assert!(!grid.is_accessible(center));
        assert!(grid.is_accessible(IVec2::new(0, 0)));

        grid.remove(IVec2::new(0, 0));
        grid.remove(IVec2::new(2, 0));
        grid.remove(IVec2::new(0, 2));
        grid.remove(IVec2::new(2, 2));
        grid.remove(IVec2::new(1, 0));
        assert!(grid.is_accessible(center));
        Ok(())
    }
}
