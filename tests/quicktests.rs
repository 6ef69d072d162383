use std::collections::BTreeSet;

use bintree::{BinTree, Sequence};

fn build(xs: &[i8]) -> BinTree<i8> {
    let mut tree = BinTree::new();
    for x in xs {
        tree.insert(*x);
    }
    tree
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let tree = build(&xs);

        xs.iter().all(|x| tree.retrieve(x) == Some(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree = build(&xs);
        let added: BTreeSet<_> = xs.into_iter().collect();
        let nots: BTreeSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.retrieve(x).is_none() && tree.height_of(x) == 0)
    }
}

quickcheck::quickcheck! {
    fn output_is_strictly_ascending(xs: Vec<i8>) -> bool {
        let tree = build(&xs);
        let printed: Vec<i8> = tree
            .to_string()
            .split_whitespace()
            .map(|s| s.parse().unwrap())
            .collect();

        let expected: Vec<i8> = xs.into_iter().collect::<BTreeSet<_>>().into_iter().collect();
        printed == expected
    }
}

quickcheck::quickcheck! {
    fn duplicates_change_nothing(xs: Vec<i8>) -> bool {
        let mut tree = build(&xs);
        let before = tree.to_string();
        let copy = tree.clone();

        xs.iter().all(|x| !tree.insert(*x)) && tree.to_string() == before && tree == copy
    }
}

quickcheck::quickcheck! {
    fn copy_is_independent(xs: Vec<i8>, extra: i8) -> bool {
        let original = build(&xs);
        let mut copy = original.clone();
        let was_equal = copy == original;

        let inserted = copy.insert(extra);
        was_equal && original.retrieve(&extra).is_some() != inserted
    }
}

quickcheck::quickcheck! {
    fn flatten_rebuild_is_minimal(xs: Vec<i8>) -> bool {
        let mut tree = build(&xs);
        let before = tree.to_string();
        let n = tree.len();

        let mut sequence = Sequence::with_capacity(n);
        tree.flatten_into(&mut sequence).unwrap();
        let drained = tree.is_empty() && sequence.len() == n;
        tree.rebuild_from(&mut sequence).unwrap();

        let minimal = (usize::BITS - n.leading_zeros()) as usize;
        drained && sequence.is_empty() && tree.to_string() == before && tree.height() == minimal
    }
}
