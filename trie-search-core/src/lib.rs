//! The core library of the trie-search project.
//!
//! Define the trie data structures, their compression and the word searching
//! functions shared by the binaries.

mod compressor;
mod container;
mod error;
mod trie;
mod word_file;

pub use compressor::Compressor;
pub use container::{Container, Root};
pub use error::{Error, Result};
pub use trie::{
    index::IndexNode,
    record::{NodeRecord, TrieRecord},
    trie::{PrefixMatches, Scan, Trie},
    trie_node::{Label, NaiveNode, PatriciaNode},
    trie_node_interface::{Step, TrieNodeInterface},
};
pub use word_file::read_words;
