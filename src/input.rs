//! Reading trees from whitespace separated tokens. Each tree's tokens end
//! with [`TERMINATOR`] and repeated tokens are skipped.
//!
//! ```
//! use bintree::input;
//!
//! let trees = input::parse_trees::<i32>("50 30 70 30 $$\n 1 2 $$").unwrap();
//!
//! assert_eq!(trees.len(), 2);
//! assert_eq!(trees[0].to_string(), "30 50 70\n");
//! assert_eq!(trees[1].to_string(), "1 2\n");
//! ```

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{BinTreeError, Result};
use crate::tree::BinTree;

/// Marks the end of one tree's tokens.
pub const TERMINATOR: &str = "$$";

/// Builds a tree from `tokens`, consuming them up to and including the next
/// [`TERMINATOR`].
pub fn parse_tree<'a, T, I>(tokens: &mut I) -> Result<BinTree<T>>
where
    I: Iterator<Item = &'a str>,
    T: FromStr + Ord,
    T::Err: fmt::Display,
{
    let mut tree = BinTree::new();
    for token in tokens {
        if token == TERMINATOR {
            return Ok(tree);
        }

        let element = token.parse::<T>().map_err(|e| BinTreeError::Parse {
            token: token.to_owned(),
            reason: e.to_string(),
        })?;
        if !tree.insert(element) {
            debug!(token, "skipping duplicate element");
        }
    }

    Err(BinTreeError::MissingTerminator)
}

/// Builds one tree for every terminated group of tokens in `input`.
pub fn parse_trees<T>(input: &str) -> Result<Vec<BinTree<T>>>
where
    T: FromStr + Ord,
    T::Err: fmt::Display,
{
    let mut tokens = input.split_whitespace().peekable();
    let mut trees = Vec::new();
    while tokens.peek().is_some() {
        trees.push(parse_tree(&mut tokens)?);
    }
    debug!(count = trees.len(), "parsed trees");
    Ok(trees)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tree_stops_at_terminator() {
        let mut tokens = "b a c $$ z".split_whitespace();
        let tree: BinTree<String> = parse_tree(&mut tokens).unwrap();

        assert_eq!(tree.to_string(), "a b c\n");
        assert_eq!(tree.root().map(String::as_str), Some("b"));
        assert_eq!(tokens.next(), Some("z"));
    }

    #[test]
    fn duplicates_are_skipped() {
        let trees = parse_trees::<i32>("3 3 1 3 $$").unwrap();
        assert_eq!(trees[0].len(), 2);
    }

    #[test]
    fn empty_tree_between_terminators() {
        let trees = parse_trees::<i32>("$$ 1 $$").unwrap();
        assert_eq!(trees.len(), 2);
        assert!(trees[0].is_empty());
    }

    #[test]
    fn empty_input() {
        assert!(parse_trees::<i32>("  \n ").unwrap().is_empty());
    }

    #[test]
    fn missing_terminator() {
        assert_eq!(
            parse_trees::<i32>("1 2 $$ 3").unwrap_err(),
            BinTreeError::MissingTerminator
        );
    }

    #[test]
    fn bad_token() {
        match parse_trees::<i32>("1 two $$") {
            Err(BinTreeError::Parse { token, .. }) => assert_eq!(token, "two"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
