use super::{
    index::IndexNode,
    trie_node_interface::{Step, TrieNodeInterface},
};
use crate::error::*;

/// A prefix tree whose nodes are stored in a contiguous arena.
///
/// The root is always the first node of the arena, and nodes reference their
/// parent and children by [IndexNode](crate::IndexNode). The arena only grows:
/// no node is ever removed from a trie.
///
/// The representation of the nodes is given by `N`:
/// - [NaiveNode](crate::NaiveNode): one character per node, the trie can grow.
/// - [PatriciaNode](crate::PatriciaNode): multiple characters per node, built
///   by the [Compressor](crate::Compressor) and immutable.
#[derive(Debug, Clone)]
pub struct Trie<N> {
    nodes: Vec<N>,
}

/// Where a walk from the root along an input stopped.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Walk {
    /// The input was entirely consumed by whole labels, ending on this node.
    Landed(IndexNode),
    /// The input ended inside the label of this node.
    Inside(IndexNode),
    /// The input leaves the trie.
    Missing,
}

impl<N: TrieNodeInterface> Default for Trie<N> {
    fn default() -> Self {
        Self {
            nodes: vec![N::root()],
        }
    }
}

impl<N: TrieNodeInterface> Trie<N> {
    /// Create a trie containing only its root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the trie is made of compressed nodes.
    pub fn is_compressed(&self) -> bool {
        N::COMPRESSED
    }

    /// Return the root node.
    pub fn root(&self) -> &N {
        self.node(IndexNode::ROOT)
    }

    /// Get a node from the trie.
    pub fn get_node(&self, index: IndexNode) -> Option<&N> {
        self.nodes.get(usize::from(index))
    }

    /// Return the number of nodes in the trie, root included.
    pub fn nb_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Get the child of a node whose label starts with the given character.
    pub fn child(&self, index: IndexNode, first_char: char) -> Option<IndexNode> {
        self.get_node(index)?.children().get(&first_char).copied()
    }

    /// Iterate over the nodes in arena order, where every node comes after its parent.
    pub(crate) fn iter_nodes(&self) -> impl Iterator<Item = &N> {
        self.nodes.iter()
    }

    /// Access a node created by this trie.
    pub(crate) fn node(&self, index: IndexNode) -> &N {
        // Indexes are only created by the trie and nodes are never removed
        &self.nodes[usize::from(index)]
    }

    pub(crate) fn node_mut(&mut self, index: IndexNode) -> &mut N {
        &mut self.nodes[usize::from(index)]
    }

    /// Append a node to the arena and register it as a child of `parent`.
    pub(crate) fn insert_child(
        &mut self,
        parent: IndexNode,
        first_char: char,
        node: N,
    ) -> IndexNode {
        let index = IndexNode::from_position(self.nodes.len())
            .expect("the trie arena is full, nodes are indexed on 32 bits");
        self.nodes.push(node);
        self.node_mut(parent).children_mut().insert(first_char, index);
        index
    }

    /// Insert a word in the trie, one character at a time, and return the
    /// index of the node ending it.
    ///
    /// Inserting the empty word does nothing and returns the root.
    /// A compressed trie cannot be modified: the insertion fails with an
    /// [InvalidOperation](crate::Error::InvalidOperation) error and the trie is left untouched.
    pub fn add(&mut self, word: &str) -> Result<IndexNode> {
        if N::COMPRESSED {
            return InvalidOperation { word }.fail();
        }
        if word.is_empty() {
            return Ok(IndexNode::ROOT);
        }

        let mut current = IndexNode::ROOT;
        for c in word.chars() {
            current = match self.node(current).children().get(&c).copied() {
                Some(child) => child,
                None => self.insert_child(current, c, N::from_char(c, current)),
            };
        }
        self.node_mut(current).set_terminal(true);

        Ok(current)
    }

    /// Follow the labels of the trie along the input, starting at the root.
    fn walk(&self, mut input: &str) -> Walk {
        let mut current = IndexNode::ROOT;
        loop {
            let first_char = match input.chars().next() {
                Some(c) => c,
                None => return Walk::Landed(current),
            };
            let child = match self.node(current).children().get(&first_char) {
                Some(&child) => child,
                None => return Walk::Missing,
            };

            match self.node(child).step(input) {
                Step::Consumed(rest) => {
                    input = rest;
                    current = child;
                }
                Step::Exhausted => return Walk::Inside(child),
                Step::Diverged => return Walk::Missing,
            }
        }
    }

    /// Whether the word has been inserted in the trie.
    pub fn is_word(&self, word: &str) -> bool {
        match self.walk(word) {
            Walk::Landed(index) => self.node(index).is_terminal(),
            Walk::Inside(_) | Walk::Missing => false,
        }
    }

    /// Whether the word is the prefix of at least one path of the trie.
    /// The empty word is the prefix of every path.
    pub fn is_partial_word(&self, word: &str) -> bool {
        !matches!(self.walk(word), Walk::Missing)
    }

    /// Return an iterator over every word of the trie starting with the prefix,
    /// sorted by character.
    pub fn scan(&self, prefix: &str) -> Scan<'_, N> {
        let stack = match self.walk(prefix) {
            Walk::Landed(index) | Walk::Inside(index) => vec![index],
            Walk::Missing => Vec::new(),
        };

        Scan { trie: self, stack }
    }

    /// Return an iterator over every word of the trie, sorted by character.
    pub fn words(&self) -> Scan<'_, N> {
        self.scan("")
    }

    /// Return an iterator over the words of the trie that are prefixes of the
    /// phrase, from the shortest to the longest.
    pub fn match_prefix<'p>(&self, phrase: &'p str) -> PrefixMatches<'_, 'p, N> {
        PrefixMatches {
            trie: self,
            phrase,
            rest: phrase,
            current: Some(IndexNode::ROOT),
        }
    }

    /// Rebuild the word spelled by the path from the root to the node.
    pub fn as_word(&self, index: IndexNode) -> Option<String> {
        self.get_node(index).map(|_| self.word_of(index))
    }

    fn word_of(&self, index: IndexNode) -> String {
        let mut path = vec![index];
        let mut current = index;
        while let Some(parent) = self.node(current).parent() {
            path.push(parent);
            current = parent;
        }

        let mut word = String::new();
        for &index in path.iter().rev() {
            self.node(index).push_label(&mut word);
        }
        word
    }

    /// Return the number of words ending in the subtree of the node.
    pub fn size_of(&self, index: IndexNode) -> Option<usize> {
        self.get_node(index)?;

        let mut size = 0;
        let mut stack = vec![index];
        while let Some(current) = stack.pop() {
            let node = self.node(current);
            size += node.is_terminal() as usize;
            stack.extend(node.children().values());
        }
        Some(size)
    }

    /// Return the number of words in the trie.
    pub fn nb_words(&self) -> usize {
        self.size_of(IndexNode::ROOT).unwrap_or(0)
    }
}

/// Two tries are equal when their nodes have the same labels, terminal flags
/// and children, wherever they are placed in the arenas.
impl<N: TrieNodeInterface> PartialEq for Trie<N> {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(IndexNode::ROOT, IndexNode::ROOT)];
        while let Some((left, right)) = stack.pop() {
            let (left, right) = (self.node(left), other.node(right));
            if !left.label_eq(right)
                || left.is_terminal() != right.is_terminal()
                || left.children().len() != right.children().len()
            {
                return false;
            }

            for ((left_char, &left_child), (right_char, &right_child)) in
                left.children().iter().zip(right.children())
            {
                if left_char != right_char {
                    return false;
                }
                stack.push((left_child, right_child));
            }
        }
        true
    }
}

impl<N: TrieNodeInterface> Eq for Trie<N> {}

/// A depth-first iterator over the words of a subtree.
/// See [scan](crate::Trie::scan).
#[derive(Debug, Clone)]
pub struct Scan<'t, N> {
    trie: &'t Trie<N>,
    stack: Vec<IndexNode>,
}

impl<N: TrieNodeInterface> Iterator for Scan<'_, N> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(index) = self.stack.pop() {
            let node = self.trie.node(index);

            // Push the children in reverse order to pop them in the correct order
            self.stack.extend(node.children().values().rev());

            if node.is_terminal() {
                return Some(self.trie.word_of(index));
            }
        }
        None
    }
}

/// An iterator over the words of a trie that are prefixes of a phrase.
/// See [match_prefix](crate::Trie::match_prefix).
#[derive(Debug, Clone)]
pub struct PrefixMatches<'t, 'p, N> {
    trie: &'t Trie<N>,
    phrase: &'p str,
    rest: &'p str,
    /// The last node reached, None once the walk left the trie.
    current: Option<IndexNode>,
}

impl<'p, N: TrieNodeInterface> Iterator for PrefixMatches<'_, 'p, N> {
    type Item = &'p str;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let current = self.current.take()?;
            let first_char = self.rest.chars().next()?;
            let child = *self.trie.node(current).children().get(&first_char)?;

            match self.trie.node(child).step(self.rest) {
                Step::Consumed(rest) => {
                    self.rest = rest;
                    self.current = Some(child);
                    if self.trie.node(child).is_terminal() {
                        let phrase = self.phrase;
                        return Some(&phrase[..phrase.len() - rest.len()]);
                    }
                }
                Step::Exhausted | Step::Diverged => return None,
            }
        }
    }
}
