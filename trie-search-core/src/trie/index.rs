//! Define the index wrapper used to access the node arena of a [Trie](crate::Trie).
//! If instead an index was returned as an integer, it could be used with any
//! array, or with the arena of another trie.
//! Here, the inner index integer is kept private and can only be created by the
//! trie itself, to keep every access in bounds.

use std::{convert::TryFrom, ops::Deref};

/// Represent a valid index in the node arena of a [Trie](crate::Trie).
/// Indexes are stored on 32 bits, which limits a trie to `u32::MAX + 1` nodes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct IndexNode {
    index: u32,
}

impl IndexNode {
    /// The index of the root, always the first node of the arena.
    pub const ROOT: Self = Self::new(0);

    pub(crate) const fn new(index: u32) -> Self {
        Self { index }
    }

    /// Create the index of a position in the arena, None if it does not fit on 32 bits.
    pub(crate) fn from_position(position: usize) -> Option<Self> {
        u32::try_from(position).ok().map(Self::new)
    }
}

impl Deref for IndexNode {
    type Target = u32;

    fn deref(&self) -> &Self::Target {
        &self.index
    }
}

macro_rules! derive_from {
    ($index: ident, $( $into: ident ),+) => {
        $(
            impl From<$index> for $into {
                fn from(value: $index) -> Self {
                    value.index as $into
                }
            }
        )*
    };
}

derive_from!(IndexNode, u32, u64, usize);
