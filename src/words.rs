use crate::paths::{Candidate, Paths};
use crate::Dictionary;
use std::iter::FusedIterator;

/// The paths through a grid that spell a word in the [`Dictionary`].
///
/// Paths come in the same order as from [`Paths`]. A word that can be formed by
/// more than one path is returned once for every path.
#[derive(Debug, Clone)]
pub struct MatchedPaths<'a> {
    paths: Paths<'a>,
    dictionary: &'a Dictionary,
}

impl<'a> Iterator for MatchedPaths<'a> {
    type Item = Candidate;

    fn next(&mut self) -> Option<Self::Item> {
        let dictionary = self.dictionary;
        self.paths
            .find(|candidate| dictionary.contains(&candidate.word))
    }
}

impl<'a> FusedIterator for MatchedPaths<'a> {}

impl<'a> MatchedPaths<'a> {
    pub fn new(paths: Paths<'a>, dictionary: &'a Dictionary) -> MatchedPaths<'a> {
        MatchedPaths { paths, dictionary }
    }
}

/// The words found in a grid, including duplicates.
#[derive(Debug, Clone)]
pub struct Words<'a>(MatchedPaths<'a>);

impl<'a> Iterator for Words<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|candidate| candidate.word)
    }
}

impl<'a> FusedIterator for Words<'a> {}

impl<'a> Words<'a> {
    pub fn new(paths: Paths<'a>, dictionary: &'a Dictionary) -> Words<'a> {
        Words(MatchedPaths::new(paths, dictionary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, Grid, Limits};

    #[test]
    fn test_words() -> Result<(), Error> {
        let limits = Limits::new(3, 4)?;
        let grid = Grid::from_strings(&["ca", "ts"])?;
        let dictionary = Dictionary::from_words(&["cat", "cats", "sat", "dog"], limits);
        let words: Vec<String> = Words::new(Paths::new(&grid, limits), &dictionary).collect();
        assert_eq!(words, &["cat", "cats", "sat"]);
        Ok(())
    }

    #[test]
    fn test_matched_paths() -> Result<(), Error> {
        let limits = Limits::new(3, 3)?;
        let grid = Grid::from_strings(&["tat"])?;
        let dictionary = Dictionary::from_words(&["tat"], limits);
        let found: Vec<Candidate> =
            MatchedPaths::new(Paths::new(&grid, limits), &dictionary).collect();
        let cells: Vec<Vec<usize>> = found.iter().map(|c| c.cells.to_vec()).collect();
        assert_eq!(cells, vec![vec![0, 1, 2], vec![2, 1, 0]]);
        Ok(())
    }

    #[test]
    fn test_empty_dictionary() -> Result<(), Error> {
        let limits = Limits::default();
        let grid = Grid::random_seeded(3, 3, 9)?;
        let dictionary = Dictionary::new(limits);
        assert_eq!(Words::new(Paths::new(&grid, limits), &dictionary).count(), 0);
        Ok(())
    }
}
