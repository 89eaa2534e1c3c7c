use crate::words::{MatchedPaths, Words};
use crate::{Dictionary, Error, Grid, Limits, Paths, WordStats};
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use std::fmt;

impl Default for Solver {
    fn default() -> Self {
        Self::new(Limits::default())
    }
}

impl fmt::Display for Solver {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<Solver: words {} in {}>", self.limits, self.dictionary)
    }
}

/// Finds the words on boggle boards.
///
/// A `Solver` holds the word length [`Limits`] and the [`Dictionary`] with valid words.
/// It does not hold a board: every search borrows the [`Grid`] to search,
/// so one solver can be used for any number of boards, also from multiple threads.
#[derive(Debug, Clone)]
pub struct Solver {
    limits: Limits,
    dictionary: Dictionary,
}

impl Solver {
    /// Create a new solver for words within `limits`, with an empty dictionary.
    ///
    /// ## Examples
    ///```
    /// use boggle_solver::{Limits, Solver};
    ///
    /// let solver = Solver::new(Limits::new(3, 8)?);
    /// # Ok::<(), boggle_solver::Error>(())
    ///```
    /// Builder functions can be used to set the dictionary:
    /// - [`with_dictionary_from_file`](Solver::with_dictionary_from_file)
    /// - [`with_dictionary_from_words`](Solver::with_dictionary_from_words)
    /// - [`with_dictionary`](Solver::with_dictionary)
    #[must_use]
    pub fn new(limits: Limits) -> Solver {
        Solver {
            limits,
            dictionary: Dictionary::new(limits),
        }
    }

    /// Read the dictionary from `wordfile`, and return the modified solver.
    ///
    /// The `wordfile` must contain one word per line. Words with a length outside
    /// the solver limits are left out.
    /// ## Errors
    /// If the `wordfile` can not be read.
    /// ## Examples
    /// ```
    /// # use boggle_solver::{Solver, Error};
    /// let solver = Solver::default().with_dictionary_from_file("wordlists/words.txt")?;
    /// assert!(solver.dictionary().contains("cats"));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn with_dictionary_from_file(mut self, wordfile: &str) -> Result<Solver, Error> {
        self.dictionary = Dictionary::from_file(wordfile, self.limits)?;
        Ok(self)
    }

    /// Specify the dictionary by a list of words, and return the modified solver.
    /// ## Example
    /// ```
    /// use boggle_solver::Solver;
    /// let solver = Solver::default().with_dictionary_from_words(&["aardvark", "zebra"]);
    /// assert_eq!(solver.dictionary().word_count(), 1);
    ///```
    #[must_use]
    pub fn with_dictionary_from_words<S: AsRef<str>>(mut self, words: &[S]) -> Solver {
        self.dictionary = Dictionary::from_words(words, self.limits);
        self
    }

    /// Use a dictionary that was built before, and return the modified solver.
    ///
    /// The solver limits decide which paths are searched; the dictionary limits only decide
    /// which words it holds. If they differ, only words within both limits can be found.
    #[must_use]
    pub fn with_dictionary(mut self, dictionary: Dictionary) -> Solver {
        if dictionary.limits() != self.limits {
            log::debug!(
                "dictionary words {} differ from solver words {}",
                dictionary.limits(),
                self.limits
            );
        }
        self.dictionary = dictionary;
        self
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Return reference to our dictionary
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Iterate over all paths in `grid` with a length within our limits,
    /// whether they spell a word or not.
    pub fn paths<'a>(&self, grid: &'a Grid) -> Paths<'a> {
        Paths::new(grid, self.limits)
    }

    /// Iterate over the words in `grid`.
    /// A word is returned once for each path that spells it.
    /// ## Examples
    /// ```
    /// # use boggle_solver::{Grid, Limits, Solver, Error};
    /// let solver = Solver::new(Limits::new(3, 4)?).with_dictionary_from_words(&["cat", "cats", "dog"]);
    /// let grid = Grid::from_strings(&["ca", "ts"])?;
    /// let words: Vec<String> = solver.find_words(&grid).collect();
    /// assert_eq!(words, &["cat", "cats"]);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn find_words<'a>(&'a self, grid: &'a Grid) -> Words<'a> {
        Words::new(self.paths(grid), &self.dictionary)
    }

    /// Iterate over the paths in `grid` that spell a word, together with the word.
    pub fn find_paths<'a>(&'a self, grid: &'a Grid) -> MatchedPaths<'a> {
        MatchedPaths::new(self.paths(grid), &self.dictionary)
    }

    /// The number of words in `grid`, counting a word once for each path that spells it.
    pub fn total_words(&self, grid: &Grid) -> usize {
        self.find_words(grid).count()
    }

    /// The number of distinct words in `grid`.
    pub fn unique_words(&self, grid: &Grid) -> usize {
        self.word_stats(grid).unique()
    }

    /// Collect the words in `grid`, with the number of times each word was found.
    pub fn word_stats(&self, grid: &Grid) -> WordStats {
        let stats: WordStats = self.find_words(grid).collect();
        log::debug!(
            "{}x{} grid: {} words, {} unique",
            grid.width(),
            grid.height(),
            stats.total(),
            stats.unique()
        );
        stats
    }

    fn word_stats_from(&self, grid: &Grid, start: usize) -> WordStats {
        let paths = Paths::from_start(grid, self.limits, start);
        let stats: WordStats = Words::new(paths, &self.dictionary).collect();
        log::trace!("start {:?}: {} words", grid.position(start), stats.total());
        stats
    }

    /// Collect the word statistics like [`word_stats`](Solver::word_stats),
    /// searching from the start cells in parallel.
    #[cfg(feature = "rayon")]
    pub fn par_word_stats(&self, grid: &Grid) -> WordStats {
        (0..grid.len())
            .into_par_iter()
            .map(|start| self.word_stats_from(grid, start))
            .reduce(WordStats::new, |mut stats, other| {
                stats.merge(other);
                stats
            })
    }

    /// Collect the word statistics like [`word_stats`](Solver::word_stats),
    /// one start cell at a time.
    #[cfg(not(feature = "rayon"))]
    pub fn par_word_stats(&self, grid: &Grid) -> WordStats {
        (0..grid.len()).fold(WordStats::new(), |mut stats, start| {
            stats.merge(self.word_stats_from(grid, start));
            stats
        })
    }
}
