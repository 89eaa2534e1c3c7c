use crate::{Grid, Limits};
use std::iter::FusedIterator;
use std::ops::Range;
use tinyvec::TinyVec;

/// Cell indices of a path through the grid, in the order they are visited
pub type Path = TinyVec<[usize; 16]>;

/// Offsets (row, col) to the 8 neighbours of a cell, in row-major order.
/// The cell itself is not a neighbour.
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A path through the grid, and the word it spells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub cells: Path,
    pub word: String,
}

/// Iterator over all paths through a [`Grid`] with a length within [`Limits`].
///
/// A path starts at any cell, and continues to one of the (up to 8) adjacent cells,
/// including the diagonals. A cell can be used only once in a path.
/// Paths are produced depth first: a path is returned as soon as it is reached,
/// before any of its extensions. Start cells and neighbours are visited in row-major order.
///
/// The iterator owns the "in use" markers for the cells, so any number of `Paths`
/// can walk the same grid at the same time, and dropping one halfway has no effect on others.
#[derive(Debug, Clone)]
pub struct Paths<'a> {
    grid: &'a Grid,
    limits: Limits,
    starts: Range<usize>,
    used: Vec<bool>,
    path: Path,
    /// For each cell on the path: the index in `NEIGHBORS` to try next
    cursors: Vec<usize>,
    word: String,
}

impl<'a> Iterator for Paths<'a> {
    type Item = Candidate;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let next = match self.path.len() {
                0 => Some(self.starts.next()?),
                len if len < self.limits.max() => self.next_neighbor(),
                _ => None,
            };
            match next {
                Some(cell) => {
                    self.push(cell);
                    if self.path.len() >= self.limits.min() {
                        return Some(self.candidate());
                    }
                }
                // no way to extend the path: backtrack
                None => self.pop(),
            }
        }
    }
}

impl<'a> FusedIterator for Paths<'a> {}

impl<'a> Paths<'a> {
    /// Iterate over all paths in `grid`.
    /// ## Examples
    /// ```
    /// # use boggle_solver::{Grid, Limits, Paths, Error};
    /// let grid = Grid::from_strings(&["ca", "ts"])?;
    /// let words: Vec<String> = Paths::new(&grid, Limits::new(1, 2)?)
    ///     .take(4)
    ///     .map(|candidate| candidate.word)
    ///     .collect();
    /// assert_eq!(words, &["c", "ca", "ct", "cs"]);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn new(grid: &'a Grid, limits: Limits) -> Paths<'a> {
        Paths::with_starts(grid, limits, 0..grid.len())
    }

    /// Iterate over the paths in `grid` that begin at cell index `start`.
    ///
    /// Chaining `from_start` for all cells in order gives the same paths as [`Paths::new`].
    /// If `start` is not a cell of the grid, there are no paths.
    pub fn from_start(grid: &'a Grid, limits: Limits, start: usize) -> Paths<'a> {
        let start = start.min(grid.len());
        let end = (start + 1).min(grid.len());
        Paths::with_starts(grid, limits, start..end)
    }

    fn with_starts(grid: &'a Grid, limits: Limits, starts: Range<usize>) -> Paths<'a> {
        Paths {
            grid,
            limits,
            starts,
            used: vec![false; grid.len()],
            path: Path::default(),
            cursors: Vec::with_capacity(limits.max()),
            word: String::with_capacity(limits.max()),
        }
    }

    fn push(&mut self, cell: usize) {
        self.used[cell] = true;
        self.path.push(cell);
        self.cursors.push(0);
        self.word.push(self.grid[cell]);
    }

    fn pop(&mut self) {
        if let Some(cell) = self.path.pop() {
            self.used[cell] = false;
            self.cursors.pop();
            self.word.pop();
        }
    }

    /// Return the next unused neighbour of the last cell in the path, if any.
    fn next_neighbor(&mut self) -> Option<usize> {
        let cell = *self.path.last()?;
        let (row, col) = self.grid.position(cell);
        let (width, height) = (self.grid.width() as isize, self.grid.height() as isize);
        let cursor = self.cursors.last_mut()?;
        while let Some(&(dr, dc)) = NEIGHBORS.get(*cursor) {
            *cursor += 1;
            let (r, c) = (row as isize + dr, col as isize + dc);
            if r < 0 || c < 0 || r >= height || c >= width {
                continue;
            }
            let next = (r * width + c) as usize;
            if !self.used[next] {
                return Some(next);
            }
        }
        None
    }

    fn candidate(&self) -> Candidate {
        Candidate {
            cells: self.path.clone(),
            word: self.word.clone(),
        }
    }
}
