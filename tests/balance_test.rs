//! Tests for SearchTree::balance

use bstree::util::testing;
use bstree::SearchTree;
use rstest::rstest;

fn ceil_log2_plus_one(n: usize) -> usize {
    (usize::BITS - n.leading_zeros()) as usize
}

#[test]
fn given_ascending_values_when_balancing_then_upper_median_shape() {
    testing::init_test_setup();
    let mut tree: SearchTree<i32> = (0..=16).collect();
    assert_eq!(tree.height(), 17);

    tree.balance();

    assert_eq!(
        tree.to_vec(),
        vec![8, 4, 2, 1, 0, 3, 6, 5, 7, 13, 11, 10, 9, 12, 15, 14, 16]
    );
    assert_eq!(tree.height(), 5);
    assert_eq!(tree.len(), 17);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(7)]
#[case(8)]
#[case(100)]
#[case(1023)]
#[case(1024)]
fn given_n_values_when_balancing_then_minimal_height(#[case] n: i32) {
    let mut tree: SearchTree<i32> = (0..n).rev().collect();
    tree.balance();

    let n = n as usize;
    assert_eq!(tree.len(), n);
    assert_eq!(tree.height(), ceil_log2_plus_one(n));
    assert_eq!(tree.sort(), (0..n as i32).collect::<Vec<_>>());
    assert!(tree.is_ordered());
}

#[test]
fn given_same_set_in_different_orders_when_balancing_then_identical_shape() {
    let mut a: SearchTree<i32> = [5, 1, 9, 3, 7, 2, 8].into_iter().collect();
    let mut b: SearchTree<i32> = [1, 2, 3, 5, 7, 8, 9].into_iter().collect();
    a.balance();
    b.balance();
    assert_eq!(a.to_vec(), b.to_vec());
    assert_eq!(a.to_vec(), vec![5, 2, 1, 3, 8, 7, 9]);
}

#[test]
fn given_balanced_tree_when_balancing_again_then_unchanged() {
    let mut tree: SearchTree<i32> = (0..=16).collect();
    tree.balance();
    let once = tree.to_vec();
    tree.balance();
    assert_eq!(tree.to_vec(), once);
}

#[test]
fn given_skewed_tree_when_walking_and_balancing_then_iterative_walks_complete() {
    let mut tree: SearchTree<u32> = (0..2_000).collect();
    assert_eq!(tree.height(), 2_000);
    assert_eq!(tree.inorder().count(), 2_000);
    assert_eq!(tree.postorder().last(), Some(&0));
    tree.balance();
    assert_eq!(tree.height(), 11);
}
