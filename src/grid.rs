use crate::Error;
use rand::{rngs::StdRng, Rng, SeedableRng};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use std::convert::TryFrom;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// A boggle board: `width` x `height` dice, each showing a single character.
///
/// The cells are stored row-major, so the cell at `row`, `col` has index `row * width + col`.
/// A grid can not be modified once created.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid", into = "RawGrid"))]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

/// Serialized form of a `Grid`, checked by [`Grid::new`] when read back.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct RawGrid {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for Grid {
    type Error = Error;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        Grid::new(raw.width, raw.height, raw.cells)
    }
}

#[cfg(feature = "serde")]
impl From<Grid> for RawGrid {
    fn from(grid: Grid) -> Self {
        RawGrid {
            width: grid.width,
            height: grid.height,
            cells: grid.cells,
        }
    }
}

impl Deref for Grid {
    type Target = [char];
    fn deref(&self) -> &Self::Target {
        &self.cells
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_strings().join("\n"))
    }
}

impl FromStr for Grid {
    type Err = Error;

    /// Parse a grid from rows separated by whitespace, e.g. `"ca ts"` or `"ca\nts"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.split_whitespace().collect();
        Grid::from_strings(&rows)
    }
}

impl Grid {
    /// Create a grid from its row-major `cells`.
    /// ## Errors
    /// [`InvalidDimensions`](Error::InvalidDimensions) if `width` or `height` is 0,
    /// or the number of cells is not `width * height`.
    pub fn new(width: usize, height: usize, cells: Vec<char>) -> Result<Grid, Error> {
        if width == 0 || height == 0 || cells.len() != width * height {
            return Err(Error::InvalidDimensions {
                width,
                height,
                cells: cells.len(),
            });
        }
        Ok(Grid {
            width,
            height,
            cells,
        })
    }

    /// Create a `Grid` from strings, one string per row.
    ///
    /// ## Errors
    /// If there are no rows, or the rows do not all have the same number of characters.
    /// ## Examples
    /// ```
    /// # use boggle_solver::{Grid, Error};
    /// let grid = Grid::from_strings(&["ca", "ts"])?;
    /// assert_eq!(grid.width(), 2);
    /// assert_eq!(grid.at(1, 0)?, 't');
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_strings<S: AsRef<str>>(rows: &[S]) -> Result<Grid, Error> {
        let width = rows.first().map_or(0, |row| row.as_ref().chars().count());
        let mut cells = Vec::with_capacity(width * rows.len());
        for row in rows {
            let row = row.as_ref();
            let len = row.chars().count();
            if len != width {
                return Err(Error::InvalidRowLength(String::from(row), len, width));
            }
            cells.extend(row.chars());
        }
        Grid::new(width, rows.len(), cells)
    }

    /// Create a grid filled with random lowercase letters `a..z`.
    pub fn random<R: Rng>(width: usize, height: usize, rng: &mut R) -> Result<Grid, Error> {
        let cells = (0..width * height)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect();
        Grid::new(width, height, cells)
    }

    /// Create a random grid that is the same for every call with the same `seed`.
    /// ## Examples
    /// ```
    /// # use boggle_solver::{Grid, Error};
    /// let grid = Grid::random_seeded(4, 4, 123)?;
    /// assert_eq!(grid, Grid::random_seeded(4, 4, 123)?);
    /// println!("{}", grid);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn random_seeded(width: usize, height: usize, seed: u64) -> Result<Grid, Error> {
        let mut rng = StdRng::seed_from_u64(seed);
        Grid::random(width, height, &mut rng)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The row-major cells of the grid
    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    /// Return the character at `row`, `col`.
    /// ## Errors
    /// [`OutOfBounds`](Error::OutOfBounds) if the position is outside the grid.
    pub fn at(&self, row: usize, col: usize) -> Result<char, Error> {
        if row >= self.height || col >= self.width {
            return Err(Error::OutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.cells[row * self.width + col])
    }

    /// Return (`row`, `col`) of the cell with `index`
    pub fn position(&self, index: usize) -> (usize, usize) {
        (index / self.width, index % self.width)
    }

    /// Get the grid rows as strings
    pub fn to_strings(&self) -> Vec<String> {
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().collect::<String>())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_from_strings() -> Result<(), Error> {
        let grid = Grid::from_strings(&["abc", "def"])?;
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.len(), 6);
        assert_eq!(grid.at(1, 2)?, 'f');
        assert_eq!(grid.position(4), (1, 1));
        assert_eq!(Grid::from_strings(&grid.to_strings())?, grid);
        assert_eq!(grid.to_string(), "abc\ndef");
        Ok(())
    }

    #[test]
    fn test_parse() -> Result<(), Error> {
        let grid: Grid = "ca\nts".parse()?;
        assert_eq!(grid.cells(), &['c', 'a', 't', 's']);
        Ok(())
    }

    #[test]
    #[should_panic(expected = "OutOfBounds { row: 2, col: 0, width: 3, height: 2 }")]
    fn test_out_of_bounds_row() {
        let grid = Grid::from_strings(&["abc", "def"]).unwrap();
        grid.at(2, 0).unwrap();
    }

    #[test]
    fn test_out_of_bounds_col() -> Result<(), Error> {
        let grid = Grid::from_strings(&["abc", "def"])?;
        assert!(matches!(grid.at(0, 3), Err(Error::OutOfBounds { col: 3, .. })));
        Ok(())
    }

    #[test]
    #[should_panic(expected = "InvalidRowLength(\"de\", 2, 3)")]
    fn test_ragged_rows() {
        Grid::from_strings(&["abc", "de"]).unwrap();
    }

    #[test]
    fn test_invalid_dimensions() {
        let empty: &[&str] = &[];
        assert!(matches!(
            Grid::from_strings(empty),
            Err(Error::InvalidDimensions { .. })
        ));
        assert!(Grid::new(2, 2, vec!['a'; 3]).is_err());
        assert!(Grid::new(0, 2, vec![]).is_err());
    }

    #[cfg(feature = "bincode")]
    #[test]
    fn test_deserialize_validates() -> Result<(), Error> {
        let grid = Grid::from_strings(&["ca", "ts"])?;
        let bytes = bincode::serialize(&grid).unwrap();
        assert_eq!(bincode::deserialize::<Grid>(&bytes).unwrap(), grid);

        // 3 cells for a 2x2 grid
        let bytes = bincode::serialize(&(2usize, 2usize, vec!['a', 'b', 'c'])).unwrap();
        assert!(bincode::deserialize::<Grid>(&bytes).is_err());
        let bytes = bincode::serialize(&(0usize, 2usize, Vec::<char>::new())).unwrap();
        assert!(bincode::deserialize::<Grid>(&bytes).is_err());
        Ok(())
    }

    #[test]
    fn test_random() -> Result<(), Error> {
        let grid = Grid::random_seeded(5, 3, 7)?;
        assert_eq!(grid.len(), 15);
        assert!(grid.iter().all(char::is_ascii_lowercase));
        assert_eq!(grid, Grid::random_seeded(5, 3, 7)?);
        Ok(())
    }
}
