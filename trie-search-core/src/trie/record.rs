use super::{index::IndexNode, trie::Trie, trie_node_interface::TrieNodeInterface};
use crate::error::*;
use serde::{Deserialize, Serialize};
use snafu::{ensure, OptionExt};

/// The stored form of a trie.
///
/// This is the contract with persistence: a serializer only needs to write
/// these fields, and a trie can be rebuilt from them with
/// [Trie::from_record](crate::Trie::from_record).
/// Nodes are listed flat, so the nesting of the stored form does not grow
/// with the length of the words.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TrieRecord {
    /// Whether the nodes belong to a compressed trie.
    pub compressed: bool,

    /// The nodes of the trie, the root first. Every node comes after its parent.
    pub nodes: Vec<NodeRecord>,
}

/// The stored form of a trie node.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// The characters of the node, empty for the root.
    pub label: String,

    /// Whether the node ends a word.
    pub terminal: bool,

    /// The position of the parent node in [nodes](TrieRecord::nodes), None for the root.
    #[serde(default)]
    pub parent: Option<u32>,
}

impl<N: TrieNodeInterface> Trie<N> {
    /// Export the trie as a flat list of records, in arena order.
    pub fn to_record(&self) -> TrieRecord {
        let nodes = self
            .iter_nodes()
            .map(|node| {
                let mut label = String::new();
                node.push_label(&mut label);
                NodeRecord {
                    label,
                    terminal: node.is_terminal(),
                    parent: node.parent().map(u32::from),
                }
            })
            .collect();

        TrieRecord {
            compressed: N::COMPRESSED,
            nodes,
        }
    }

    /// Rebuild a trie from its records, checking that every record is
    /// valid for the node representation `N`.
    ///
    /// The node at each position of the record is placed at the same position
    /// of the arena, so exporting the loaded trie gives back the same record.
    pub fn from_record(record: &TrieRecord) -> Result<Self> {
        ensure!(
            record.compressed == N::COMPRESSED,
            MalformedRecord {
                cause: format!(
                    "a {}compressed record cannot be loaded in a {}compressed trie",
                    if record.compressed { "" } else { "non-" },
                    if N::COMPRESSED { "" } else { "non-" },
                ),
            }
        );

        let (root, nodes) = record.nodes.split_first().context(MalformedRecord {
            cause: "the record has no root",
        })?;
        ensure!(
            root.label.is_empty(),
            MalformedRecord {
                cause: format!("the root has the label '{}'", root.label),
            }
        );
        ensure!(
            root.parent.is_none(),
            MalformedRecord {
                cause: "the root has a parent",
            }
        );

        let mut trie = Self::new();
        trie.node_mut(IndexNode::ROOT).set_terminal(root.terminal);

        for node in nodes {
            let parent = node
                .parent
                .map(IndexNode::new)
                .filter(|&parent| usize::from(parent) < trie.nb_nodes())
                .context(MalformedRecord {
                    cause: format!("the node '{}' does not come after its parent", node.label),
                })?;
            let first_char = node.label.chars().next().context(MalformedRecord {
                cause: "a node has an empty label",
            })?;
            ensure!(
                trie.child(parent, first_char).is_none(),
                MalformedRecord {
                    cause: format!("two sibling nodes start with '{}'", first_char),
                }
            );

            let child = N::from_label(&node.label, node.terminal, parent).context(
                MalformedRecord {
                    cause: format!("invalid label '{}'", node.label),
                },
            )?;
            trie.insert_child(parent, first_char, child);
        }

        // The shape can only be checked once every child is attached
        for (node, stored) in trie.iter_nodes().zip(&record.nodes).skip(1) {
            ensure!(
                node.is_well_formed(),
                MalformedRecord {
                    cause: format!(
                        "the non-terminal node '{}' has {} children",
                        stored.label,
                        node.children().len()
                    ),
                }
            );
        }

        Ok(trie)
    }
}
