use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading wordfile
    #[error("Wordfile \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Error writing wordfile
    #[error("Wordfile \"{path}\" could not be written")]
    WriteError {
        path: String,
        source: std::io::Error,
    },

    /// Error deserializing bincoded wordfile
    #[cfg(feature = "bincode")]
    #[error("Wordfile {0} could not be deserialized")]
    WordfileDeserializeError(String),

    /// Error serializing the dictionary to a bincoded wordfile
    #[cfg(feature = "bincode")]
    #[error("Wordfile {0} could not be serialized")]
    WordfileSerializeError(String),

    /// Attempt to read a cell outside the grid
    #[error("Cell at row={row}, col={col} is outside the {width}x{height} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },

    /// Grid dimensions are zero, or do not match the number of cells
    #[error("Invalid grid {width}x{height} with {cells} cells")]
    InvalidDimensions {
        width: usize,
        height: usize,
        cells: usize,
    },

    /// All rows of a grid must have the same length
    #[error("Invalid row \"{0}\": length {1}, expect {2}")]
    InvalidRowLength(String, usize, usize),

    /// Word length bounds must satisfy `1 <= min <= max`
    #[error("Invalid word length bounds: min {min}, max {max}")]
    InvalidConfiguration { min: usize, max: usize },

    /// Most frequent word asked for, but nothing was found on the board
    #[error("This board contains no words")]
    NoMatches,
}
