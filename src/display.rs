//! Text output for trees: the one-line in-order listing used by `Display`
//! and a sideways view for debugging.

use std::fmt;

use crate::tree::{BinTree, Node};

/// Indentation for each level of the sideways view.
pub const SIDEWAYS_INDENT: &str = "    ";

/// Writes the elements in ascending order separated by single spaces,
/// followed by a newline.
///
/// ```
/// use bintree::BinTree;
///
/// let tree: BinTree<i32> = vec![50, 30, 70, 20, 40].into_iter().collect();
/// assert_eq!(tree.to_string(), "20 30 40 50 70\n");
/// ```
impl<T: fmt::Display> fmt::Display for BinTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut separator = "";
        self.try_for_each_in_order(|element| {
            write!(f, "{}{}", separator, element)?;
            separator = " ";
            Ok::<_, fmt::Error>(())
        })?;
        writeln!(f)
    }
}

impl<T: fmt::Debug> fmt::Debug for BinTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        self.try_for_each_in_order(|element| {
            list.entry(element);
            Ok::<_, fmt::Error>(())
        })?;
        list.finish()
    }
}

/// The tree rotated 90° counter-clockwise: the right subtree is printed
/// above its root and the left subtree below, one element per line, indented
/// by depth. Made by [`BinTree::sideways`].
pub struct Sideways<'a, T> {
    tree: &'a BinTree<T>,
}

impl<T: fmt::Display> fmt::Display for Sideways<'_, T> {
    /// A reverse in-order walk (right, node, left) tracking each node's level.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending: Vec<(&Node<T>, usize)> = Vec::new();
        let mut current = self.tree.root_node();
        let mut level = 1;
        loop {
            while let Some(node) = current {
                pending.push((node, level));
                current = node.right();
                level += 1;
            }
            let Some((node, node_level)) = pending.pop() else {
                return Ok(());
            };
            // The root already sits two indents in.
            for _ in 0..=node_level {
                f.write_str(SIDEWAYS_INDENT)?;
            }
            writeln!(f, "{}", node.element)?;
            current = node.left();
            level = node_level + 1;
        }
    }
}

impl<T> BinTree<T> {
    /// A [`Display`](fmt::Display) adapter rendering this tree sideways.
    ///
    /// ```
    /// use bintree::BinTree;
    ///
    /// let tree: BinTree<i32> = vec![2, 1, 3].into_iter().collect();
    /// let expected = "            3\n        2\n            1\n";
    /// assert_eq!(tree.sideways().to_string(), expected);
    /// ```
    pub fn sideways(&self) -> Sideways<'_, T> {
        Sideways { tree: self }
    }

    /// Prints the sideways view to stdout.
    pub fn display_sideways(&self)
    where
        T: fmt::Display,
    {
        print!("{}", self.sideways());
    }
}
