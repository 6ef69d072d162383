//! A Binary Search Tree (BST) of unique elements that can be rebalanced on
//! demand.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one element
//! and may have up to two child `Node`s. The most important invariants of
//! a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)`. [`BinTree`] doesn't balance itself while
//! inserting so inserting sorted data gives a tree whose height is its
//! length. [`BinTree::flatten_into`] followed by [`BinTree::rebuild_from`]
//! moves every element out into a [`Sequence`] and back, producing a tree of
//! minimal height.
//!
//! Elements only need to be [`Ord`]. Printing a tree additionally requires
//! [`Display`](std::fmt::Display) and copying it requires [`Clone`].

#![deny(missing_docs)]

mod display;
mod error;
pub mod input;
mod sequence;
mod tree;

pub use display::{Sideways, SIDEWAYS_INDENT};
pub use error::{BinTreeError, Result};
pub use sequence::Sequence;
pub use tree::BinTree;
