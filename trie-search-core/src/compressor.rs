use crate::{
    trie::trie_node::Label, IndexNode, NaiveNode, PatriciaNode, Trie, TrieNodeInterface,
};
use tracing::debug;

/// Transform a naive trie into an equivalent PATRICIA trie.
///
/// Every chain of non-terminal nodes having a single child is folded into one
/// node holding the characters of the whole chain. Terminal nodes and nodes
/// with multiple children are never folded, they delimit the chains.
/// The words and prefixes accepted by the compressed trie are the same as the
/// ones accepted by the naive trie.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct Compressor;

impl Compressor {
    pub fn new() -> Self {
        Self
    }

    /// Build the compressed version of the trie, without modifying it.
    pub fn compress(&self, trie: &Trie<NaiveNode>) -> Trie<PatriciaNode> {
        let mut compressed = Trie::<PatriciaNode>::new();
        compressed
            .node_mut(IndexNode::ROOT)
            .set_terminal(trie.root().is_terminal());

        // Pairs of (naive node, compressed node) whose children are still to be folded.
        // The root is never folded into its children.
        let mut stack = vec![(IndexNode::ROOT, IndexNode::ROOT)];
        while let Some((naive, parent)) = stack.pop() {
            for (&first_char, &child) in trie.node(naive).children() {
                let (characters, chain_end) = fold_chain(trie, child);
                let terminal = trie.node(chain_end).is_terminal();

                let node = PatriciaNode::new(characters, terminal, parent);
                let index = compressed.insert_child(parent, first_char, node);
                stack.push((chain_end, index));
            }
        }

        debug!(
            naive_nodes = trie.nb_nodes(),
            compressed_nodes = compressed.nb_nodes(),
            "compressed trie"
        );
        compressed
    }
}

/// Follow the chain of single-child non-terminal nodes starting at `start`.
/// Return the characters of the chain and the node ending it.
fn fold_chain(trie: &Trie<NaiveNode>, start: IndexNode) -> (Label, IndexNode) {
    let mut characters = Label::new();
    let mut current = start;
    loop {
        let node = trie.node(current);
        if let Some(c) = node.character {
            characters.push(c);
        }

        if node.is_terminal() || node.children().len() != 1 {
            return (characters, current);
        }
        match node.children().values().next() {
            Some(&next) => current = next,
            None => return (characters, current),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_trie(words: &[&str]) -> Trie<NaiveNode> {
        let mut trie = Trie::new();
        for word in words {
            trie.add(word).unwrap();
        }
        trie
    }

    fn get_child<'a>(
        trie: &'a Trie<PatriciaNode>,
        index: IndexNode,
        first_char: char,
    ) -> (IndexNode, &'a PatriciaNode) {
        let child = trie.child(index, first_char).unwrap();
        (child, trie.get_node(child).unwrap())
    }

    #[test]
    fn compress_empty() {
        let compressed = Compressor.compress(&Trie::new());
        assert_eq!(compressed.nb_nodes(), 1);
        assert!(compressed.is_compressed());
        assert!(!compressed.root().is_terminal());
        assert!(compressed.root().children().is_empty());
    }

    #[test]
    fn compress_branch() {
        let compressed = Compressor.compress(&create_trie(&["all", "ask"]));

        // root -> a -> {ll, sk}
        assert_eq!(compressed.nb_nodes(), 4);
        let (a, a_node) = get_child(&compressed, IndexNode::ROOT, 'a');
        assert_eq!(a_node.characters(), "a");
        assert!(!a_node.is_terminal());
        assert_eq!(a_node.children().len(), 2);

        let (_, ll) = get_child(&compressed, a, 'l');
        assert_eq!(ll.characters(), "ll");
        assert!(ll.is_terminal());
        assert!(ll.children().is_empty());

        let (_, sk) = get_child(&compressed, a, 's');
        assert_eq!(sk.characters(), "sk");
        assert!(sk.is_terminal());
        assert!(sk.children().is_empty());
    }

    #[test]
    fn compress_terminal_chain() {
        let compressed = Compressor.compress(&create_trie(&["you", "your", "yours"]));

        // root -> you -> r -> s
        assert_eq!(compressed.nb_nodes(), 4);
        let (you, you_node) = get_child(&compressed, IndexNode::ROOT, 'y');
        assert_eq!(you_node.characters(), "you");
        assert!(you_node.is_terminal());

        let (r, r_node) = get_child(&compressed, you, 'r');
        assert_eq!(r_node.characters(), "r");
        assert!(r_node.is_terminal());
        assert_eq!(r_node.children().len(), 1);

        let (s, s_node) = get_child(&compressed, r, 's');
        assert_eq!(s_node.characters(), "s");
        assert!(s_node.is_terminal());
        assert_eq!(compressed.as_word(s).unwrap(), "yours");
    }

    #[test]
    fn compress_single_word() {
        let compressed = Compressor.compress(&create_trie(&["abracadabra"]));
        assert_eq!(compressed.nb_nodes(), 2);
        let (index, node) = get_child(&compressed, IndexNode::ROOT, 'a');
        assert_eq!(node.characters(), "abracadabra");
        assert_eq!(node.parent(), Some(IndexNode::ROOT));
        assert_eq!(compressed.as_word(index).unwrap(), "abracadabra");
    }

    #[test]
    fn compress_keeps_input() {
        let trie = create_trie(&["tea", "ten", "inn"]);
        let copy = trie.clone();
        let _ = Compressor.compress(&trie);
        assert_eq!(trie, copy);
    }

    #[test]
    fn compress_no_single_child_chain() {
        let words = ["romane", "romanus", "romulus", "rubens", "ruber", "rubicon", "rubicundus"];
        let compressed = Compressor.compress(&create_trie(&words));

        let mut stack = vec![IndexNode::ROOT];
        while let Some(index) = stack.pop() {
            let node = compressed.get_node(index).unwrap();
            if index != IndexNode::ROOT {
                assert!(node.is_terminal() || node.children().len() != 1);
            }
            stack.extend(node.children().values());
        }

        let found: Vec<_> = compressed.words().collect();
        let mut expected = words.to_vec();
        expected.sort_unstable();
        assert_eq!(found, expected);
    }
}
