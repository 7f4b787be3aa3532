//! Fixed-size, read-only 2D grid with a sentinel for out-of-range reads.
//!
//! A [`Grid`] is built once from parsed input and never changes afterwards.
//! Reads outside `[0, rows) x [0, cols)` return the sentinel value chosen at
//! construction, so neighbour rules can probe past the edge without bounds
//! checks of their own.
//!
//! # Example
//!
//! ```rust
//! use aoc_solutions::utils::geometry::Coord;
//! use aoc_solutions::utils::grid::Grid;
//!
//! let grid = Grid::parse("S.#\n..E", '#').unwrap();
//! assert_eq!(grid.rows(), 2);
//! assert_eq!(grid.cols(), 3);
//! assert_eq!(*grid.get(Coord::new(0, 1)), '.');
//! assert_eq!(*grid.get(Coord::new(-1, 0)), '#');
//! assert_eq!(grid.find(&'E').unwrap(), Coord::new(1, 2));
//! ```

use std::fmt::Debug;

use thiserror::Error;

use super::geometry::Coord;

/// Errors raised while building or querying a [`Grid`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// No rows, or a first row with no cells
    #[error("grid is empty")]
    Empty,
    /// A row whose length differs from the first row
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// `find` scanned every cell without a match
    #[error("value {0} not found in grid")]
    NotFound(String),
    /// A character the cell parser rejected
    #[error("invalid cell {cell:?} at {at}")]
    InvalidCell { cell: char, at: Coord },
}

/// A rectangular grid of `T`, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Vec<T>,
    rows: usize,
    cols: usize,
    sentinel: T,
}

impl<T> Grid<T> {
    /// Builds a grid from rows of cells.
    ///
    /// Fails with [`GridError::Empty`] when there are no cells and
    /// [`GridError::Ragged`] when the rows differ in length.
    pub fn of(data: Vec<Vec<T>>, sentinel: T) -> Result<Self, GridError> {
        let cols = data.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(GridError::Empty);
        }
        let rows = data.len();

        let mut cells = Vec::with_capacity(rows * cols);
        for (row, line) in data.into_iter().enumerate() {
            if line.len() != cols {
                return Err(GridError::Ragged {
                    row,
                    expected: cols,
                    found: line.len(),
                });
            }
            cells.extend(line);
        }

        Ok(Self {
            cells,
            rows,
            cols,
            sentinel,
        })
    }

    /// Builds a grid from text, one row per line, mapping each character with `cell`.
    ///
    /// Blank lines around the text are ignored.
    pub fn parse_with<F>(input: &str, sentinel: T, mut cell: F) -> Result<Self, GridError>
    where
        F: FnMut(char) -> Option<T>,
    {
        let data = input
            .trim()
            .lines()
            .enumerate()
            .map(|(row, line)| {
                line.trim_end()
                    .chars()
                    .enumerate()
                    .map(|(col, c)| {
                        cell(c).ok_or(GridError::InvalidCell {
                            cell: c,
                            at: Coord::new(row as i32, col as i32),
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::of(data, sentinel)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The cell at `at`, or the sentinel when `at` is out of range.
    pub fn get(&self, at: Coord) -> &T {
        match self.index(at) {
            Some(i) => &self.cells[i],
            None => &self.sentinel,
        }
    }

    /// Every in-range coordinate, row-major.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let cols = self.cols;
        (0..self.cells.len()).map(move |i| Coord::new((i / cols) as i32, (i % cols) as i32))
    }

    /// Every cell with its coordinate, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &T)> + '_ {
        self.coords().zip(self.cells.iter())
    }

    fn index(&self, at: Coord) -> Option<usize> {
        let row = usize::try_from(at.row).ok().filter(|r| *r < self.rows)?;
        let col = usize::try_from(at.col).ok().filter(|c| *c < self.cols)?;
        Some(row * self.cols + col)
    }
}

impl<T: PartialEq + Debug> Grid<T> {
    /// The first coordinate, row-major, holding `value`.
    pub fn find(&self, value: &T) -> Result<Coord, GridError> {
        self.iter()
            .find(|(_, cell)| *cell == value)
            .map(|(at, _)| at)
            .ok_or_else(|| GridError::NotFound(format!("{value:?}")))
    }
}

impl Grid<char> {
    /// Character grid straight from puzzle text.
    pub fn parse(input: &str, sentinel: char) -> Result<Self, GridError> {
        Self::parse_with(input, sentinel, Some)
    }
}
