pub(crate) mod index;
pub(crate) mod record;
#[allow(clippy::module_inception)]
pub(crate) mod trie;
pub(crate) mod trie_node;
pub(crate) mod trie_node_interface;
