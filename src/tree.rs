//! An owning, non-balancing BST. Every `Node` is exclusively owned by its
//! parent (or by the `BinTree` for the root) so there are no parent pointers
//! and nothing is reference counted.
//!
//! The tree never rebalances itself on insert. Instead, a skewed tree can be
//! rebalanced explicitly by flattening it into a [`Sequence`] and rebuilding
//! it from that same sequence.
//!
//! # Examples
//!
//! ```
//! use bintree::{BinTree, Sequence};
//!
//! let mut tree: BinTree<i32> = (1..=7).collect();
//!
//! // Ascending inserts produce a "linked list".
//! assert_eq!(tree.height(), 7);
//!
//! let mut sequence = Sequence::with_capacity(tree.len());
//! tree.flatten_into(&mut sequence).unwrap();
//! assert!(tree.is_empty());
//!
//! tree.rebuild_from(&mut sequence).unwrap();
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.root(), Some(&4));
//! assert!(sequence.is_empty());
//! ```

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::error::{BinTreeError, Result};
use crate::sequence::Sequence;

type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) element: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(element: T) -> Box<Self> {
        Box::new(Self {
            element,
            left: None,
            right: None,
        })
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    fn height(&self) -> usize {
        let mut level = vec![self];
        let mut height = 0;
        while !level.is_empty() {
            height += 1;
            level = level
                .iter()
                .flat_map(|n| n.left().into_iter().chain(n.right()))
                .collect();
        }
        height
    }
}

/// Compares two subtrees by shape and by element, in lockstep.
fn subtrees_equal<T: PartialEq>(left: Option<&Node<T>>, right: Option<&Node<T>>) -> bool {
    let mut pending = vec![(left, right)];
    while let Some(pair) = pending.pop() {
        match pair {
            (None, None) => {}
            (Some(l), Some(r)) => {
                if l.element != r.element {
                    return false;
                }
                pending.push((l.left(), r.left()));
                pending.push((l.right(), r.right()));
            }
            _ => return false,
        }
    }
    true
}

/// Moves every element of the subtree into `out` in ascending order, freeing
/// each node as soon as its element has been taken.
fn drain_in_order<T>(root: Box<Node<T>>, out: &mut Vec<T>) {
    let mut pending: Vec<Box<Node<T>>> = Vec::new();
    let mut current = Some(root);
    loop {
        // Detach the left spine so each popped node only owns its right child.
        while let Some(mut node) = current {
            current = node.left.take();
            pending.push(node);
        }
        let Some(node) = pending.pop() else {
            return;
        };
        let Node { element, right, .. } = *node;
        out.push(element);
        current = right;
    }
}

/// A Binary Search Tree of unique elements. Duplicates are rejected on
/// insert and the tree only ever grows through [`BinTree::insert`] or
/// [`BinTree::rebuild_from`].
pub struct BinTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for BinTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for BinTree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> BinTree<T> {
    /// Generates a new, empty `BinTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns `true` if the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of elements in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// The element stored at the root, if any.
    pub fn root(&self) -> Option<&T> {
        self.root.as_deref().map(|n| &n.element)
    }

    /// The number of levels in the tree. An empty tree has a height of 0.
    pub fn height(&self) -> usize {
        self.root_node().map_or(0, Node::height)
    }

    /// Releases every node and element in the tree. Calling this on an
    /// empty tree does nothing.
    ///
    /// Nodes are torn down with an explicit stack so that dropping a badly
    /// skewed tree can't overflow the call stack.
    pub fn clear(&mut self) {
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
            // `node` is childless now so dropping it only drops its element.
        }
        self.len = 0;
    }

    /// Moves every element of the tree into the end of `sequence` in ascending
    /// order, leaving the tree empty.
    ///
    /// Fails without changing the tree or the sequence if `sequence` doesn't
    /// have room for all of the tree's elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{BinTree, BinTreeError, Sequence};
    ///
    /// let mut tree: BinTree<i32> = vec![50, 30, 70].into_iter().collect();
    ///
    /// let mut too_small = Sequence::with_capacity(2);
    /// assert_eq!(
    ///     tree.flatten_into(&mut too_small),
    ///     Err(BinTreeError::CapacityExceeded { required: 3, available: 2 })
    /// );
    /// assert_eq!(tree.len(), 3);
    ///
    /// let mut sequence = Sequence::with_capacity(3);
    /// tree.flatten_into(&mut sequence).unwrap();
    /// assert_eq!(sequence.as_slice(), &[30, 50, 70]);
    /// assert!(tree.is_empty());
    /// ```
    pub fn flatten_into(&mut self, sequence: &mut Sequence<T>) -> Result<()> {
        if sequence.remaining() < self.len {
            return Err(BinTreeError::CapacityExceeded {
                required: self.len,
                available: sequence.remaining(),
            });
        }

        let moved = self.len;
        if let Some(root) = self.root.take() {
            drain_in_order(root, sequence.items_mut());
        }
        self.len = 0;
        debug!(moved, "flattened tree into sequence");
        Ok(())
    }

    pub(crate) fn root_node(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Visits every element in ascending order, stopping at the first error.
    pub(crate) fn try_for_each_in_order<'a, E>(
        &'a self,
        mut visit: impl FnMut(&'a T) -> std::result::Result<(), E>,
    ) -> std::result::Result<(), E> {
        let mut pending = Vec::new();
        let mut current = self.root_node();
        loop {
            while let Some(node) = current {
                pending.push(node);
                current = node.left();
            }
            let Some(node) = pending.pop() else {
                return Ok(());
            };
            visit(&node.element)?;
            current = node.right();
        }
    }
}

impl<T: Ord> BinTree<T> {
    /// Inserts the element into the tree. Returns `false` (and drops the
    /// element) if an equal element is already present, in which case the
    /// tree is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::BinTree;
    ///
    /// let mut tree = BinTree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, element: T) -> bool {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match element.cmp(&node.element) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => {
                    trace!("rejected duplicate element");
                    return false;
                }
                Ordering::Greater => &mut node.right,
            };
        }

        *link = Some(Node::new_boxed(element));
        self.len += 1;
        true
    }

    /// Potentially finds the stored element equal to `target`. If no node
    /// holds an equal element, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::BinTree;
    ///
    /// let mut tree = BinTree::new();
    /// tree.insert(String::from("fox"));
    ///
    /// assert_eq!(tree.retrieve(&"fox".to_string()), Some(&"fox".to_string()));
    /// assert_eq!(tree.retrieve(&"dog".to_string()), None);
    /// ```
    pub fn retrieve(&self, target: &T) -> Option<&T> {
        self.find_node(target).map(|n| &n.element)
    }

    /// The height of the subtree rooted at the node holding `target`. A leaf
    /// has a height of 1 and an absent element has a height of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::BinTree;
    ///
    /// let tree: BinTree<i32> = vec![50, 30, 70, 20, 40].into_iter().collect();
    ///
    /// assert_eq!(tree.height_of(&50), 3);
    /// assert_eq!(tree.height_of(&30), 2);
    /// assert_eq!(tree.height_of(&20), 1);
    /// assert_eq!(tree.height_of(&99), 0);
    /// ```
    pub fn height_of(&self, target: &T) -> usize {
        // Only the target's own subtree affects the answer, so we descend to
        // it and measure from there.
        self.find_node(target).map_or(0, Node::height)
    }

    /// Replaces the contents of this tree with a balanced tree built from
    /// `sequence`, which must be strictly ascending. The sequence is drained.
    ///
    /// The midpoint of each range (biased low) is inserted before either of
    /// its halves, so a tree of `n` elements ends up with the minimal height
    /// of `⌈log2(n + 1)⌉`.
    ///
    /// Fails without changing the tree or the sequence if the sequence isn't
    /// strictly ascending.
    pub fn rebuild_from(&mut self, sequence: &mut Sequence<T>) -> Result<()> {
        if let Some(index) = sequence.first_unsorted() {
            return Err(BinTreeError::Unsorted { index });
        }

        self.clear();
        self.insert_midpoints(sequence.take_items());
        debug!(len = self.len, height = self.height(), "rebuilt tree from sequence");
        Ok(())
    }

    /// Recursion only goes `⌈log2(n + 1)⌉` deep since each call halves
    /// `lower`.
    fn insert_midpoints(&mut self, mut lower: Vec<T>) {
        if lower.is_empty() {
            return;
        }

        let mid = (lower.len() - 1) / 2;
        let upper = lower.split_off(mid + 1);
        // `mid` is the last index now so nothing gets reordered.
        let inserted = self.insert(lower.swap_remove(mid));
        debug_assert!(inserted, "a strictly ascending sequence has no duplicates");
        self.insert_midpoints(lower);
        self.insert_midpoints(upper);
    }

    fn find_node(&self, target: &T) -> Option<&Node<T>> {
        let mut current = self.root_node();
        while let Some(node) = current {
            current = match target.cmp(&node.element) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// Re-inserts a copy of every element under `root`, parents before
    /// children.
    fn insert_copies_of(&mut self, root: Option<&Node<T>>)
    where
        T: Clone,
    {
        let mut pending: Vec<&Node<T>> = root.into_iter().collect();
        while let Some(node) = pending.pop() {
            self.insert(node.element.clone());
            pending.extend(node.right());
            pending.extend(node.left());
        }
    }
}

/// Two trees are equal when they have the same shape and every pair of
/// corresponding nodes holds equal elements. Trees holding the same elements
/// but built with a different insertion order may therefore be unequal.
impl<T: PartialEq> PartialEq for BinTree<T> {
    fn eq(&self, other: &Self) -> bool {
        subtrees_equal(self.root_node(), other.root_node())
    }
}

impl<T: Eq> Eq for BinTree<T> {}

/// Copies are made by inserting a fresh clone of every element into a new
/// tree so the copy shares nothing with the original.
impl<T: Clone + Ord> Clone for BinTree<T> {
    fn clone(&self) -> Self {
        let mut tree = Self::new();
        tree.insert_copies_of(self.root_node());
        tree
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.insert_copies_of(source.root_node());
    }
}

impl<T: Ord> Extend<T> for BinTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
