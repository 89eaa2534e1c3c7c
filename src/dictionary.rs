mod trie;

use self::trie::Trie;
use crate::{Error, Limits};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::read_to_string;

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// The set of valid words, restricted to the word lengths given by a [`Limits`].
///
/// Words are kept in a trie. Duplicates in the source collapse to a single entry,
/// and words with a length outside the limits are dropped (and counted in [`skipped`](Dictionary::skipped)).
pub struct Dictionary {
    trie: Trie,
    limits: Limits,
    /// The number of distinct words
    word_count: usize,
    /// The number of nodes in the trie
    node_count: usize,
    /// The number of source words dropped because of their length
    skipped: usize,
    /// Path of the wordfile used to build the dictionary.
    /// Empty if the dictionary is not build from a file.
    wordfile: String,
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Dictionary: {} words, {} nodes from '{}'>",
            self.word_count, self.node_count, self.wordfile
        )
    }
}

impl Dictionary {
    /// Create an empty dictionary for words within `limits`.
    pub fn new(limits: Limits) -> Dictionary {
        Dictionary {
            trie: Trie::new(),
            limits,
            word_count: 0,
            node_count: 1,
            skipped: 0,
            wordfile: String::new(),
        }
    }

    fn from_lines<'a, I: IntoIterator<Item = &'a str>>(lines: I, limits: Limits) -> Dictionary {
        let mut dictionary = Dictionary::new(limits);
        for word in lines {
            dictionary.insert(word);
        }
        dictionary.node_count = dictionary.trie.node_count();
        log::debug!(
            "dictionary: {} words in {}, {} skipped",
            dictionary.word_count,
            limits,
            dictionary.skipped
        );
        dictionary
    }

    /// Build a dictionary from a list of words.
    /// ## Examples
    /// ```
    /// # use boggle_solver::{Dictionary, Limits, Error};
    /// let dictionary = Dictionary::from_words(&["cat", "cats", "at", "cat"], Limits::new(3, 4)?);
    /// assert_eq!(dictionary.word_count(), 2);
    /// assert_eq!(dictionary.skipped(), 1);
    /// assert!(dictionary.contains("cats"));
    /// assert!(!dictionary.contains("at"));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_words<S: AsRef<str>>(words: &[S], limits: Limits) -> Dictionary {
        Dictionary::from_lines(words.iter().map(AsRef::as_ref), limits)
    }

    /// Read the dictionary from a file. The file must be encoded in utf-8 and
    /// have one word per line.
    /// ## Errors
    /// [`ReadError`](Error::ReadError) if the file can not be read.
    pub fn from_file(wordfile: &str, limits: Limits) -> Result<Dictionary, Error> {
        let contents = read_to_string(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let mut dictionary = Dictionary::from_lines(contents.lines(), limits);
        dictionary.wordfile = String::from(wordfile);
        Ok(dictionary)
    }

    #[cfg(feature = "bincode")]
    /// Deserialize the dictionary from a bincoded file.
    /// ## Errors
    /// - If the file can not be read.
    /// - If the contents can not be deserialized
    pub fn deserialize_from(wordfile: &str) -> Result<Dictionary, Error> {
        use std::fs::File;
        use std::io::BufReader;
        let file = File::open(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let reader = BufReader::new(file);
        let mut dictionary: Dictionary = bincode::deserialize_from(reader)
            .map_err(|_| Error::WordfileDeserializeError(String::from(wordfile)))?;
        dictionary.wordfile = String::from(wordfile);
        Ok(dictionary)
    }

    #[cfg(feature = "bincode")]
    /// Serialize the dictionary to a bincoded file, to be read back with
    /// [`deserialize_from`](Dictionary::deserialize_from).
    /// ## Errors
    /// - If the file can not be created.
    /// - If the dictionary can not be serialized
    pub fn serialize_into(&self, wordfile: &str) -> Result<(), Error> {
        use std::fs::File;
        use std::io::BufWriter;
        let file = File::create(wordfile).map_err(|source| Error::WriteError {
            path: String::from(wordfile),
            source,
        })?;
        let writer = BufWriter::new(file);
        bincode::serialize_into(writer, self)
            .map_err(|_| Error::WordfileSerializeError(String::from(wordfile)))
    }

    fn insert(&mut self, word: &str) {
        let word = word.trim();
        if word.is_empty() {
            return;
        }
        if !self.limits.contains(word.chars().count()) {
            self.skipped += 1;
            return;
        }
        if self.trie.insert(word) {
            self.word_count += 1;
        }
    }

    /// Returns true if `word` is in the dictionary
    pub fn contains(&self, word: &str) -> bool {
        self.trie.contains(word)
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn wordfile(&self) -> &str {
        &self.wordfile
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &[&str] = &[
        "at", "cat", "cats", "act", "acts", "scat", "tacos", "castles", "cat",
    ];

    fn wordfile() -> String {
        format!("{}/wordlists/words.txt", env!("CARGO_MANIFEST_DIR"))
    }

    #[test]
    fn test_from_words() -> Result<(), Error> {
        let dictionary = Dictionary::from_words(WORDS, Limits::new(3, 5)?);
        println!("{}", dictionary);
        assert_eq!(dictionary.word_count(), 6);
        // "at" and "castles"
        assert_eq!(dictionary.skipped(), 2);
        for &word in &["cat", "cats", "act", "acts", "scat", "tacos"] {
            assert!(dictionary.contains(word), "missing '{}'", word);
        }
        assert!(!dictionary.contains("at"));
        assert!(!dictionary.contains("castles"));
        assert!(!dictionary.contains("ca"));
        Ok(())
    }

    #[test]
    fn test_display() -> Result<(), Error> {
        // root, c, a, t, s
        let dictionary = Dictionary::from_words(&["cat", "cats"], Limits::new(3, 4)?);
        assert_eq!(
            dictionary.to_string(),
            "<Dictionary: 2 words, 5 nodes from ''>"
        );
        Ok(())
    }

    #[test]
    fn test_trim() {
        let dictionary = Dictionary::from_words(&["  cat\r", "", "\t"], Limits::default());
        assert_eq!(dictionary.word_count(), 1);
        assert_eq!(dictionary.skipped(), 0);
        assert!(dictionary.contains("cat"));
    }

    #[test]
    fn test_length_in_chars() -> Result<(), Error> {
        let dictionary = Dictionary::from_words(&["über"], Limits::new(4, 4)?);
        assert!(dictionary.contains("über"));
        Ok(())
    }

    #[test]
    fn test_empty() {
        let dictionary = Dictionary::new(Limits::default());
        assert!(dictionary.is_empty());
        assert!(!dictionary.contains(""));
        assert!(!dictionary.contains("cat"));
    }

    #[test]
    fn test_from_file() -> Result<(), Error> {
        let wordfile = wordfile();
        let dictionary = Dictionary::from_file(&wordfile, Limits::default())?;
        assert_eq!(dictionary.wordfile(), wordfile);
        assert!(dictionary.word_count() > 0);
        assert!(dictionary.contains("cat"));
        assert!(dictionary.contains("cats"));
        // too short for the default limits
        assert!(!dictionary.contains("at"));
        Ok(())
    }

    #[test]
    fn test_missing_file() {
        let result = Dictionary::from_file("no/such/wordfile.txt", Limits::default());
        match result {
            Err(Error::ReadError { path, .. }) => assert_eq!(path, "no/such/wordfile.txt"),
            other => panic!("expected ReadError, got {:?}", other),
        }
    }

    #[cfg(feature = "bincode")]
    #[test]
    fn test_serialize_roundtrip() -> Result<(), Error> {
        let dictionary = Dictionary::from_words(WORDS, Limits::default());
        let path = std::env::temp_dir().join("boggle-solver-test-dictionary.bin");
        let path = path.to_string_lossy();
        dictionary.serialize_into(&path)?;
        let restored = Dictionary::deserialize_from(&path)?;
        assert_eq!(restored.word_count(), dictionary.word_count());
        assert_eq!(restored.wordfile(), path);
        assert_eq!(restored.limits(), dictionary.limits());
        assert!(restored.contains("scat"));
        Ok(())
    }

    #[cfg(feature = "bincode")]
    #[test]
    fn test_serialize_into_missing_dir() {
        let dictionary = Dictionary::from_words(WORDS, Limits::default());
        let result = dictionary.serialize_into("no/such/dir/dictionary.bin");
        assert!(matches!(result, Err(Error::WriteError { .. })));
    }
}
