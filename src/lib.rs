//! A boggle library for Rust.
//! <br>
//! This crate finds all words on a boggle board: a grid of letter dice, where a word is
//! formed by a path of adjacent dice (including diagonals), using each die at most once.
//! It can be used to count the words on random boards, or just to cheat.
//! It can use the `rayon` crate to search a board in parallel.
//!
//! # How to use `boggle_solver`
//! Start by creating a [`Solver`] with the word length limits, then specify the dictionary to be used.
//! The dictionary file must be in utf-8 and contain one word per line.
//! Boards can be read from strings, or filled with random letters.
//!
//! # Basic usage
//!  ```
//! # use boggle_solver::{Error, Grid, Limits, Solver};
//! let solver = Solver::new(Limits::new(3, 4)?).with_dictionary_from_words(&["cat", "cats", "act"]);
//! let grid = Grid::from_strings(&["ca", "ts"])?;
//! for word in solver.find_words(&grid) {
//!     println!("{}", word);
//! }
//! let stats = solver.word_stats(&grid);
//! assert_eq!(stats.total(), 3);
//! assert_eq!(stats.unique(), 3);
//! # Ok::<(), Error>(())
//! ```
//!
//! # About implementation
//! [`Paths`] walks the board depth first, with an explicit stack, and marks the dice in use
//! for the path it is on. It stops extending a path at the maximum word length.
//! The words on the board are the paths that spell a word in the [`Dictionary`];
//! [`WordStats`] counts them.
mod config;
mod dictionary;
mod error;
mod grid;
mod paths;
mod solver;
mod stats;
mod words;

pub use crate::config::{
    Limits, DEFAULT_HEIGHT, DEFAULT_MAX_WORD_LEN, DEFAULT_MIN_WORD_LEN, DEFAULT_WIDTH,
};
pub use crate::dictionary::Dictionary;
pub use crate::error::Error;
pub use crate::grid::Grid;
pub use crate::paths::{Candidate, Path, Paths};
pub use crate::solver::Solver;
pub use crate::stats::WordStats;
pub use crate::words::{MatchedPaths, Words};
