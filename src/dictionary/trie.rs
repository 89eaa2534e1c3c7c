#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered tree to manage a set of words. It can answer whether it contains a given word or not.
///
/// The children of each node are kept sorted by character, so lookup is a binary search per level.
#[derive(Debug, Default, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Trie {
    children: Vec<(char, Trie)>,
    terminal: bool,
}

impl Trie {
    pub fn new() -> Trie {
        Trie {
            children: Vec::new(),
            terminal: false,
        }
    }

    /// Insert `word`. Returns `true` if the word was not yet present.
    pub fn insert(&mut self, word: &str) -> bool {
        let mut t = self;
        for c in word.chars() {
            let pos = match t.children.binary_search_by(|(c2, _)| c2.cmp(&c)) {
                Ok(pos) => pos,
                Err(pos) => {
                    t.children.insert(pos, (c, Trie::new()));
                    pos
                }
            };
            t = &mut { t }.children[pos].1;
        }
        let inserted = !t.terminal;
        t.terminal = true;
        inserted
    }

    /// Returns `true` if the trie contains `word`.
    pub fn contains(&self, word: &str) -> bool {
        let mut t = self;
        for c in word.chars() {
            match t.children.binary_search_by(|(c2, _)| c2.cmp(&c)) {
                Ok(pos) => {
                    t = &t.children[pos].1;
                }
                Err(_) => {
                    return false;
                }
            }
        }
        t.terminal
    }

    /// Number of nodes below (and including) this one
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|(_, t)| t.node_count())
            .sum::<usize>()
    }
}
