use super::index::IndexNode;
use std::collections::BTreeMap;

/// The outcome of matching the label of a node against the start of an input.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Step<'a> {
    /// The whole label was consumed, holds the rest of the input.
    Consumed(&'a str),
    /// The input ended inside the label, which starts with the whole input.
    Exhausted,
    /// The input and the label differ.
    Diverged,
}

/// The capabilities shared by every node representation of a [Trie](crate::Trie).
///
/// All the traversal algorithms of the trie are written once over this trait,
/// the only matching primitive that differs between representations being
/// [step](TrieNodeInterface::step).
pub trait TrieNodeInterface: Sized {
    /// Whether the nodes of this representation belong to a compressed trie.
    const COMPRESSED: bool;

    /// Create a root node: empty label, non-terminal and without parent.
    fn root() -> Self;

    /// Create a non-terminal node holding a single character.
    fn from_char(character: char, parent: IndexNode) -> Self;

    /// Create a node from a stored label.
    /// Return None if the label is not valid for this representation.
    fn from_label(label: &str, terminal: bool, parent: IndexNode) -> Option<Self>;

    /// Try to consume the whole label of the node at the start of the input.
    fn step<'a>(&self, input: &'a str) -> Step<'a>;

    /// Append the label of the node to the word.
    fn push_label(&self, word: &mut String);

    /// Compare the labels of two nodes.
    fn label_eq(&self, other: &Self) -> bool;

    /// Whether the path from the root to this node spells a complete word.
    fn is_terminal(&self) -> bool;

    fn set_terminal(&mut self, terminal: bool);

    /// Whether a non-root node fits the shape of its trie: every branch leads
    /// to a word, and a compressed trie holds no non-terminal node with a single child.
    fn is_well_formed(&self) -> bool {
        let min_children = if Self::COMPRESSED { 2 } else { 1 };
        self.is_terminal() || self.children().len() >= min_children
    }

    /// Return the index of the parent node, None for the root.
    fn parent(&self) -> Option<IndexNode>;

    /// Return the children of the node, indexed by the first character of their label.
    fn children(&self) -> &BTreeMap<char, IndexNode>;

    fn children_mut(&mut self) -> &mut BTreeMap<char, IndexNode>;
}
