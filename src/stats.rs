use crate::Error;
use multiset::HashMultiSet;
use std::iter::FromIterator;

/// Keeps track of the words found on a board, and how often each word was found.
#[derive(Debug, Clone)]
pub struct WordStats(HashMultiSet<String>);

impl Default for WordStats {
    fn default() -> Self {
        WordStats::new()
    }
}

impl Extend<String> for WordStats {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        for word in iter {
            self.0.insert(word);
        }
    }
}

impl FromIterator<String> for WordStats {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut stats = WordStats::new();
        stats.extend(iter);
        stats
    }
}

impl WordStats {
    pub fn new() -> Self {
        WordStats(HashMultiSet::new())
    }

    /// The number of words found, counting a word once for every path that spells it.
    pub fn total(&self) -> usize {
        self.0.len()
    }

    /// The number of distinct words found.
    pub fn unique(&self) -> usize {
        self.0.distinct_elements().count()
    }

    /// How often `word` was found
    pub fn count_of(&self, word: &str) -> usize {
        self.0.count_of(&String::from(word))
    }

    /// The distinct words, sorted
    pub fn words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.0.distinct_elements().map(String::as_str).collect();
        words.sort_unstable();
        words
    }

    /// Return the highest number of times a word was found, and the (sorted) words found that often.
    /// ## Errors
    /// [`NoMatches`](Error::NoMatches) if no words were found.
    /// ## Examples
    /// ```
    /// # use boggle_solver::{WordStats, Error};
    /// let stats: WordStats = vec!["tat", "at", "tat"].into_iter().map(String::from).collect();
    /// assert_eq!(stats.most_frequent()?, (2, vec!["tat"]));
    /// assert!(WordStats::new().most_frequent().is_err());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn most_frequent(&self) -> Result<(usize, Vec<&str>), Error> {
        let highest = self
            .0
            .distinct_elements()
            .map(|word| self.0.count_of(word))
            .max()
            .ok_or(Error::NoMatches)?;
        let words = self
            .words()
            .into_iter()
            .filter(|&word| self.count_of(word) == highest)
            .collect();
        Ok((highest, words))
    }

    /// Add the words of `other`, e.g. found by searching another part of the board.
    pub fn merge(&mut self, other: WordStats) {
        for word in other.0.distinct_elements() {
            self.0.insert_times(word.clone(), other.0.count_of(word));
        }
    }
}
