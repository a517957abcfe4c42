use crate::{
    error::*, Compressor, IndexNode, NaiveNode, PatriciaNode, Trie, TrieNodeInterface, TrieRecord,
};
use tracing::{debug, warn};

/// The trie installed in a [Container](self::Container).
#[derive(Debug, Clone)]
pub enum Root {
    /// A naive trie, which can still receive new words.
    Uncompressed(Trie<NaiveNode>),

    /// A PATRICIA trie, built by the [Compressor](crate::Compressor) and immutable.
    Compressed(Trie<PatriciaNode>),
}

impl Default for Root {
    fn default() -> Self {
        Self::Uncompressed(Trie::new())
    }
}

// Run the same expression whatever the representation of the installed trie.
macro_rules! with_trie {
    ($root:expr, $trie:ident => $body:expr) => {
        match $root {
            Root::Uncompressed($trie) => $body,
            Root::Compressed($trie) => $body,
        }
    };
}

/// A word dictionary backed by a trie.
///
/// Words are added to a naive trie, which can then be compressed into a
/// PATRICIA trie. Every query gives the same answer on both representations.
#[derive(Debug, Clone, Default)]
pub struct Container {
    root: Root,
    compressor: Compressor,
}

impl Container {
    /// Create an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a container around an already built trie.
    pub fn with_root(root: Root, compressor: Compressor) -> Self {
        Self { root, compressor }
    }

    /// Rebuild a container from a stored trie.
    /// The representation of the trie is given by the `compressed` flag of the record.
    pub fn from_record(record: &TrieRecord) -> Result<Self> {
        let root = if record.compressed {
            Root::Compressed(Trie::from_record(record)?)
        } else {
            Root::Uncompressed(Trie::from_record(record)?)
        };
        Ok(Self::with_root(root, Compressor::new()))
    }

    /// Export the installed trie as a flat list of records.
    pub fn to_record(&self) -> TrieRecord {
        with_trie!(&self.root, trie => trie.to_record())
    }

    /// Return the installed trie.
    pub fn root(&self) -> &Root {
        &self.root
    }

    pub fn is_compressed(&self) -> bool {
        matches!(self.root, Root::Compressed(_))
    }

    /// Insert a word and return the index of its last node.
    /// Fail with an [InvalidOperation](crate::Error::InvalidOperation) error once compressed.
    pub fn add(&mut self, word: &str) -> Result<IndexNode> {
        let res = with_trie!(&mut self.root, trie => trie.add(word));
        if let Err(e) = &res {
            warn!("{}", e);
        }
        res
    }

    /// Replace the installed trie by its compressed version.
    /// Does nothing if the trie is already compressed.
    pub fn compress(&mut self) {
        if let Root::Uncompressed(trie) = &self.root {
            let compressed = self.compressor.compress(trie);
            self.root = Root::Compressed(compressed);
        } else {
            debug!("trie already compressed");
        }
    }

    /// Whether the word has been inserted.
    pub fn is_word(&self, word: &str) -> bool {
        with_trie!(&self.root, trie => trie.is_word(word))
    }

    /// Whether the word is the start of at least one inserted word.
    pub fn is_partial_word(&self, word: &str) -> bool {
        with_trie!(&self.root, trie => trie.is_partial_word(word))
    }

    /// Return an iterator over the words starting with the prefix, sorted by character.
    pub fn scan<'a>(&'a self, prefix: &str) -> Box<dyn Iterator<Item = String> + 'a> {
        with_trie!(&self.root, trie => Box::new(trie.scan(prefix)))
    }

    /// Return an iterator over all the words, sorted by character.
    pub fn words(&self) -> Box<dyn Iterator<Item = String> + '_> {
        self.scan("")
    }

    /// Return an iterator over the words that are prefixes of the phrase,
    /// from the shortest to the longest.
    pub fn match_prefix<'a, 'p: 'a>(
        &'a self,
        phrase: &'p str,
    ) -> Box<dyn Iterator<Item = &'p str> + 'a> {
        with_trie!(&self.root, trie => Box::new(trie.match_prefix(phrase)))
    }

    /// Return the number of words.
    pub fn size(&self) -> usize {
        with_trie!(&self.root, trie => trie.nb_words())
    }

    /// Get the child of the root whose label starts with the given character.
    pub fn child(&self, first_char: char) -> Option<IndexNode> {
        with_trie!(&self.root, trie => trie.child(IndexNode::ROOT, first_char))
    }

    /// Rebuild the word spelled from the root to the node.
    pub fn as_word(&self, index: IndexNode) -> Option<String> {
        with_trie!(&self.root, trie => trie.as_word(index))
    }

    /// Return every word found in the phrase, starting at any character.
    /// Found words may overlap, they are sorted by position then length.
    pub fn words_within<'p>(&self, phrase: &'p str) -> Vec<&'p str> {
        with_trie!(&self.root, trie => words_within(trie, phrase))
    }

    /// Whether at least one word can be found in the phrase.
    pub fn has_words_within(&self, phrase: &str) -> bool {
        with_trie!(&self.root, trie => has_words_within(trie, phrase))
    }

    /// Return the words found in the phrase from left to right, without overlap,
    /// keeping the longest word at each position.
    pub fn longest_words_within<'p>(&self, phrase: &'p str) -> Vec<&'p str> {
        with_trie!(&self.root, trie => longest_words_within(trie, phrase))
    }

    /// Return the words that are prefixes of the phrase, from the shortest to the longest.
    pub fn words_prefix<'p>(&self, phrase: &'p str) -> Vec<&'p str> {
        with_trie!(&self.root, trie => trie.match_prefix(phrase).collect())
    }

    /// Return the longest word that is a prefix of the phrase.
    pub fn longest_words_prefix<'p>(&self, phrase: &'p str) -> Option<&'p str> {
        with_trie!(&self.root, trie => trie.match_prefix(phrase).last())
    }
}

/// Containers are equal when their tries hold the same structure.
/// An uncompressed trie is compressed before being compared to a compressed one.
impl PartialEq for Container {
    fn eq(&self, other: &Self) -> bool {
        match (&self.root, &other.root) {
            (Root::Uncompressed(left), Root::Uncompressed(right)) => left == right,
            (Root::Compressed(left), Root::Compressed(right)) => left == right,
            (Root::Uncompressed(left), Root::Compressed(right)) => {
                &self.compressor.compress(left) == right
            }
            (Root::Compressed(left), Root::Uncompressed(right)) => {
                left == &other.compressor.compress(right)
            }
        }
    }
}

impl Eq for Container {}

/// Iterate over the suffixes of the phrase, starting at each character.
fn suffixes(phrase: &str) -> impl Iterator<Item = &str> {
    phrase.char_indices().map(move |(offset, _)| &phrase[offset..])
}

fn words_within<'p, N: TrieNodeInterface>(trie: &Trie<N>, phrase: &'p str) -> Vec<&'p str> {
    suffixes(phrase)
        .flat_map(|suffix| trie.match_prefix(suffix))
        .collect()
}

fn has_words_within<N: TrieNodeInterface>(trie: &Trie<N>, phrase: &str) -> bool {
    suffixes(phrase).any(|suffix| trie.match_prefix(suffix).next().is_some())
}

fn longest_words_within<'p, N: TrieNodeInterface>(trie: &Trie<N>, phrase: &'p str) -> Vec<&'p str> {
    let mut found = Vec::new();
    let mut rest = phrase;
    while !rest.is_empty() {
        // Words matched at one position are prefixes of each other:
        // the last one is the single longest
        match trie.match_prefix(rest).last() {
            Some(word) => {
                found.push(word);
                rest = &rest[word.len()..];
            }
            None => {
                let mut chars = rest.chars();
                chars.next();
                rest = chars.as_str();
            }
        }
    }
    found
}
