use itertools::Itertools;
use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

pub const START_TOKEN: char = 'S';
pub const SPLIT_TOKEN: char = '^';

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Start,
    Split,
    Empty,
}

impl From<char> for Cell {
    fn from(c: char) -> Self {
        match c {
            START_TOKEN => Cell::Start,
            SPLIT_TOKEN => Cell::Split,
            // Anything else ('.') lets the beam through
            _ => Cell::Empty,
        }
    }
}

/// Reads a cell of `row`, treating columns past the end of the row as empty.
pub(crate) fn cell_at(row: &[Cell], column: usize) -> Cell {
    row.get(column).copied().unwrap_or(Cell::Empty)
}

#[derive(Debug, Error, Diagnostic)]
pub enum ManifoldError {
    #[error("The manifold is empty")]
    #[diagnostic(code(laboratories::empty))]
    Empty,

    #[error("No start position 'S' found in the first row")]
    #[diagnostic(code(laboratories::missing_start))]
    MissingStart {
        #[source_code]
        input: String,
        #[label("expected an 'S' here")]
        span: SourceSpan,
    },

    #[error("Found {count} start positions in the first row, expected exactly one")]
    #[diagnostic(code(laboratories::multiple_starts))]
    MultipleStarts {
        count: usize,
        #[source_code]
        input: String,
        #[label("first row")]
        span: SourceSpan,
    },

    #[error("Splitter at line {line}, column {column} sits on the edge of the manifold")]
    #[diagnostic(
        code(laboratories::edge_splitter),
        help("a split beam would leave the manifold, keep '^' out of the first and last column")
    )]
    EdgeSplitter {
        line: usize,
        column: usize,
        #[source_code]
        input: String,
        #[label("splitter")]
        span: SourceSpan,
    },
}

/// The tachyon manifold: the column the beam enters at and every row below it.
#[derive(Debug, Clone)]
pub struct Manifold {
    start: usize,
    rows: Vec<Vec<Cell>>,
}

impl Manifold {
    /// Parses the manifold and checks the assumptions the simulations rely on.
    ///
    /// The first row must contain exactly one `S`. No row may hold a splitter in
    /// its first or last column, so a split beam always stays inside the grid.
    #[tracing::instrument(skip(input), fields(bytes = input.len()))]
    pub fn parse(input: &str) -> Result<Self, ManifoldError> {
        let mut lines = Vec::new();
        let mut offset = 0;
        for line in input.split_inclusive('\n') {
            lines.push((offset, line.trim_end_matches(['\r', '\n'])));
            offset += line.len();
        }

        let Some(&(first_offset, first)) = lines.first() else {
            return Err(ManifoldError::Empty);
        };

        let starts = first.chars().positions(|c| c == START_TOKEN).collect_vec();
        let start = match starts.as_slice() {
            [start] => *start,
            [] => {
                return Err(ManifoldError::MissingStart {
                    input: input.to_string(),
                    span: (first_offset, first.len()).into(),
                })
            }
            _ => {
                return Err(ManifoldError::MultipleStarts {
                    count: starts.len(),
                    input: input.to_string(),
                    span: (first_offset, first.len()).into(),
                })
            }
        };

        let mut rows = Vec::with_capacity(lines.len() - 1);
        for (index, &(line_offset, line)) in lines.iter().enumerate().skip(1) {
            let cells: Vec<Cell> = line.chars().map(Cell::from).collect();

            let last = cells.len().saturating_sub(1);
            for column in [0, last] {
                if cells.get(column) != Some(&Cell::Split) {
                    continue;
                }
                let (byte, c) = line
                    .char_indices()
                    .nth(column)
                    .unwrap_or((0, SPLIT_TOKEN));
                return Err(ManifoldError::EdgeSplitter {
                    line: index + 1,
                    column: column + 1,
                    input: input.to_string(),
                    span: (line_offset + byte, c.len_utf8()).into(),
                });
            }

            rows.push(cells);
        }

        tracing::debug!(start, rows = rows.len(), "parsed manifold");
        Ok(Manifold { start, rows })
    }

    /// Column of the `S` in the first row.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Rows below the start row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn height(&self) -> usize {
        self.rows.len() + 1
    }
}
