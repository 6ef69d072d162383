//! Errors raised by tree operations that can't be expressed as a plain
//! `bool` or `Option`.

use thiserror::Error;

/// Everything that can go wrong when moving elements between a tree and a
/// [`Sequence`](crate::Sequence), or when reading a tree from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BinTreeError {
    /// The sequence can't hold every element of the tree being flattened.
    #[error("sequence has room for {available} more elements but the tree holds {required}")]
    CapacityExceeded {
        /// Elements in the tree.
        required: usize,
        /// Free slots left in the sequence.
        available: usize,
    },

    /// A tree can only be rebuilt from a strictly ascending sequence.
    #[error("sequence is not strictly ascending at index {index}")]
    Unsorted {
        /// The first element that isn't greater than its predecessor.
        index: usize,
    },

    /// The input ran out before the `$$` that ends a tree.
    #[error("input ended before the `$$` terminator")]
    MissingTerminator,

    /// A token couldn't be parsed into an element.
    #[error("could not parse element {token:?}: {reason}")]
    Parse {
        /// The offending token.
        token: String,
        /// The parser's error message.
        reason: String,
    },
}

/// Shorthand for results carrying a [`BinTreeError`].
pub type Result<T, E = BinTreeError> = std::result::Result<T, E>;
