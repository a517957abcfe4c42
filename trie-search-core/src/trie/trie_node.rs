use super::{
    index::IndexNode,
    trie_node_interface::{Step, TrieNodeInterface},
};
use smartstring::{LazyCompact, SmartString};
use std::collections::BTreeMap;

/// The label of a [PatriciaNode](self::PatriciaNode).
/// Most labels are short and stay inlined.
pub type Label = SmartString<LazyCompact>;

/// A node following the structure of a naive trie.
/// More efficient to build, one node per inserted character (e.g. a-f-i-z).
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct NaiveNode {
    /// The character associated to this node, None for the root.
    pub(crate) character: Option<char>,

    /// Whether the node ends a word.
    pub(crate) terminal: bool,

    /// The index of the parent node in the trie, None for the root.
    pub(crate) parent: Option<IndexNode>,

    /// The children of the node, indexed by their character.
    pub(crate) children: BTreeMap<char, IndexNode>,
}

/// A node following the structure of a PATRICIA trie, produced by the
/// [Compressor](crate::Compressor).
/// More efficient to hold multiple-characters strings (e.g. bar-foo).
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PatriciaNode {
    /// The characters associated to this node, empty for the root only.
    pub(crate) characters: Label,

    /// Whether the node ends a word.
    pub(crate) terminal: bool,

    /// The index of the parent node in the trie, None for the root.
    pub(crate) parent: Option<IndexNode>,

    /// The children of the node, indexed by the first character of their label.
    pub(crate) children: BTreeMap<char, IndexNode>,
}

impl NaiveNode {
    /// Get the character of the node, None for the root.
    pub fn character(&self) -> Option<char> {
        self.character
    }
}

impl PatriciaNode {
    pub(crate) fn new(characters: Label, terminal: bool, parent: IndexNode) -> Self {
        Self {
            characters,
            terminal,
            parent: Some(parent),
            children: BTreeMap::new(),
        }
    }

    /// Get the characters of the node, empty for the root.
    pub fn characters(&self) -> &str {
        &self.characters
    }
}

// Implement the accessors for the fields that are common to all node structures.
macro_rules! impl_common_fields {
    () => {
        fn is_terminal(&self) -> bool {
            self.terminal
        }

        fn set_terminal(&mut self, terminal: bool) {
            self.terminal = terminal;
        }

        fn parent(&self) -> Option<IndexNode> {
            self.parent
        }

        fn children(&self) -> &BTreeMap<char, IndexNode> {
            &self.children
        }

        fn children_mut(&mut self) -> &mut BTreeMap<char, IndexNode> {
            &mut self.children
        }
    };
}

impl TrieNodeInterface for NaiveNode {
    const COMPRESSED: bool = false;

    fn root() -> Self {
        Self {
            character: None,
            terminal: false,
            parent: None,
            children: BTreeMap::new(),
        }
    }

    fn from_char(character: char, parent: IndexNode) -> Self {
        Self {
            character: Some(character),
            terminal: false,
            parent: Some(parent),
            children: BTreeMap::new(),
        }
    }

    fn from_label(label: &str, terminal: bool, parent: IndexNode) -> Option<Self> {
        let mut chars = label.chars();
        match (chars.next(), chars.next()) {
            (Some(character), None) => {
                let mut node = Self::from_char(character, parent);
                node.terminal = terminal;
                Some(node)
            }
            _ => None,
        }
    }

    fn step<'a>(&self, input: &'a str) -> Step<'a> {
        let mut chars = input.chars();
        match chars.next() {
            None => Step::Exhausted,
            Some(c) if Some(c) == self.character => Step::Consumed(chars.as_str()),
            Some(_) => Step::Diverged,
        }
    }

    fn push_label(&self, word: &mut String) {
        word.extend(self.character);
    }

    fn label_eq(&self, other: &Self) -> bool {
        self.character == other.character
    }

    impl_common_fields!();
}

impl TrieNodeInterface for PatriciaNode {
    const COMPRESSED: bool = true;

    fn root() -> Self {
        Self {
            characters: Label::new(),
            terminal: false,
            parent: None,
            children: BTreeMap::new(),
        }
    }

    fn from_char(character: char, parent: IndexNode) -> Self {
        let mut characters = Label::new();
        characters.push(character);
        Self::new(characters, false, parent)
    }

    fn from_label(label: &str, terminal: bool, parent: IndexNode) -> Option<Self> {
        if label.is_empty() {
            None
        } else {
            Some(Self::new(Label::from(label), terminal, parent))
        }
    }

    fn step<'a>(&self, input: &'a str) -> Step<'a> {
        let label: &str = &self.characters;
        if let Some(rest) = input.strip_prefix(label) {
            Step::Consumed(rest)
        } else if label.starts_with(input) {
            // Never split a label: a shorter input only stops inside it
            Step::Exhausted
        } else {
            Step::Diverged
        }
    }

    fn push_label(&self, word: &mut String) {
        word.push_str(&self.characters);
    }

    fn label_eq(&self, other: &Self) -> bool {
        self.characters == other.characters
    }

    impl_common_fields!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn naive_step() {
        let node = NaiveNode::from_char('a', IndexNode::ROOT);
        assert_eq!(node.character(), Some('a'));
        assert_eq!(NaiveNode::root().character(), None);
        assert_eq!(node.step("abc"), Step::Consumed("bc"));
        assert_eq!(node.step("a"), Step::Consumed(""));
        assert_eq!(node.step("ba"), Step::Diverged);
        assert_eq!(node.step(""), Step::Exhausted);
    }

    #[test]
    fn patricia_step() {
        let node = PatriciaNode::from_label("ll", true, IndexNode::ROOT).unwrap();
        assert_eq!(node.step("llama"), Step::Consumed("ama"));
        assert_eq!(node.step("ll"), Step::Consumed(""));
        assert_eq!(node.step("l"), Step::Exhausted);
        assert_eq!(node.step("lo"), Step::Diverged);
    }

    #[test]
    fn patricia_step_multibyte() {
        let node = PatriciaNode::from_label("été", false, IndexNode::ROOT).unwrap();
        assert_eq!(node.step("étés"), Step::Consumed("s"));
        assert_eq!(node.step("ét"), Step::Exhausted);
        assert_eq!(node.step("éta"), Step::Diverged);
    }

    #[test]
    fn from_label_validation() {
        assert!(NaiveNode::from_label("a", false, IndexNode::ROOT).is_some());
        assert!(NaiveNode::from_label("ab", false, IndexNode::ROOT).is_none());
        assert!(NaiveNode::from_label("", false, IndexNode::ROOT).is_none());
        assert!(PatriciaNode::from_label("ab", true, IndexNode::ROOT).is_some());
        assert!(PatriciaNode::from_label("", true, IndexNode::ROOT).is_none());
    }

    #[test]
    fn push_labels() {
        let mut word = String::new();
        NaiveNode::root().push_label(&mut word);
        NaiveNode::from_char('y', IndexNode::ROOT).push_label(&mut word);
        PatriciaNode::from_label("ou", true, IndexNode::ROOT)
            .unwrap()
            .push_label(&mut word);
        assert_eq!(word, "you");
    }
}
