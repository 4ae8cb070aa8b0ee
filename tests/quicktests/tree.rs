use copse::{Error, Order, Tree};

use quickcheck_macros::quickcheck;

#[quickcheck]
fn inorder_is_sorted(xs: Vec<u8>) -> bool {
    let tree: Tree<u8> = xs.into_iter().collect();
    let values: Vec<_> = tree.inorder().unwrap().collect();

    values.windows(2).all(|pair| pair[0] <= pair[1])
}

#[quickcheck]
fn traversals_have_one_entry_per_insert(xs: Vec<u8>) -> bool {
    let tree: Tree<u8> = xs.iter().copied().collect();

    [Order::Preorder, Order::Inorder, Order::Postorder]
        .into_iter()
        .all(|order| tree.traverse(order).unwrap().len() == xs.len())
}

#[quickcheck]
fn remove_takes_exactly_one_occurrence(xs: Vec<u8>, x: u8) -> bool {
    let mut tree: Tree<u8> = xs.iter().copied().collect();
    let mut expected: Vec<_> = tree.inorder().unwrap().collect();

    let result = tree.remove(&x);
    match expected.iter().position(|y| *y == x) {
        Some(position) => {
            expected.remove(position);
            result == Ok(()) && tree.inorder().unwrap().eq(expected)
        }
        None if xs.is_empty() => result == Err(Error::EmptyTree),
        None => result == Err(Error::ElementNotFound) && tree.inorder().unwrap().eq(expected),
    }
}

#[quickcheck]
fn with_deletions(xs: Vec<u8>, deletes: Vec<u8>) -> bool {
    let mut tree: Tree<u8> = xs.iter().copied().collect();
    for delete in &deletes {
        // Keep going until every occurrence is gone.
        while tree.remove(delete).is_ok() {}
    }

    let still_present: Vec<_> = {
        let mut kept: Vec<_> = xs.into_iter().filter(|x| !deletes.contains(x)).collect();
        kept.sort_unstable();
        kept
    };

    tree.len() == still_present.len() && tree.inorder().unwrap().eq(still_present)
}
