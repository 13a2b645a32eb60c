//! Set builders.
//!
//! Hash-based sets are pre-sized with `hash_capacity_threshold` so that they do not rehash
//! while being filled. `make_linked*` keeps first-insertion order, `make_tree*` keeps
//! elements sorted.

use crate::common::{add_all, capacity_threshold, hash_capacity_threshold, presized, signed, transform as transform_into, EMPTY_SIZE};
use crate::{SortedSet, Unmodifiable, UnmodifiableSet};
use indexmap::IndexSet;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::hash::Hash;

/// Read-only set holding the distinct `elements`.
pub fn make<T, I>(elements: I) -> UnmodifiableSet<T>
    where
        T: Eq + Hash,
        I: IntoIterator<Item=T>,
        I::IntoIter: ExactSizeIterator,
{
    let elements = elements.into_iter();
    let len = elements.len();
    Unmodifiable::new(make_mutable_with_size(signed(len), elements))
}

/// Read-only set drained from a single-pass iterator.
pub fn make_from_iter<T, I>(iter: I) -> UnmodifiableSet<T>
    where
        T: Eq + Hash,
        I: IntoIterator<Item=T>,
{
    Unmodifiable::new(make_mutable_from_iter(iter))
}

pub fn make_mutable<T, I>(elements: I) -> HashSet<T>
    where
        T: Eq + Hash,
        I: IntoIterator<Item=T>,
        I::IntoIter: ExactSizeIterator,
{
    let elements = elements.into_iter();
    let size = capacity_threshold(signed(elements.len()));
    make_mutable_with_size(signed(size), elements)
}

/// Mutable set sized for `size` elements.
pub fn make_mutable_with_size<T, I>(size: isize, elements: I) -> HashSet<T>
    where
        T: Eq + Hash,
        I: IntoIterator<Item=T>,
{
    let capacity = hash_capacity_threshold(size, signed(EMPTY_SIZE));
    debug!("hash set capacity {} for size {}", capacity, size);
    add_all(presized(capacity), elements)
}

pub fn make_mutable_from_iter<T, I>(iter: I) -> HashSet<T>
    where
        T: Eq + Hash,
        I: IntoIterator<Item=T>,
{
    add_all(HashSet::new(), iter)
}

/// Insertion-ordered set holding the distinct `elements`.
pub fn make_linked<T, I>(elements: I) -> IndexSet<T>
    where
        T: Eq + Hash,
        I: IntoIterator<Item=T>,
        I::IntoIter: ExactSizeIterator,
{
    let elements = elements.into_iter();
    let size = capacity_threshold(signed(elements.len()));
    make_linked_with_size(signed(size), elements)
}

pub fn make_linked_with_size<T, I>(size: isize, elements: I) -> IndexSet<T>
    where
        T: Eq + Hash,
        I: IntoIterator<Item=T>,
{
    let capacity = hash_capacity_threshold(size, signed(EMPTY_SIZE));
    debug!("linked set capacity {} for size {}", capacity, size);
    add_all(presized(capacity), elements)
}

pub fn make_linked_from_iter<T, I>(iter: I) -> IndexSet<T>
    where
        T: Eq + Hash,
        I: IntoIterator<Item=T>,
{
    add_all(IndexSet::new(), iter)
}

/// Set in ascending natural order.
pub fn make_tree<T, I>(elements: I) -> SortedSet<T>
    where
        T: Ord,
        I: IntoIterator<Item=T>,
{
    add_all(SortedSet::natural(), elements)
}

/// Set ordered by `comparator`; elements it reports as `Equal` collapse into the first one.
pub fn make_tree_by<T, C, I>(comparator: C, elements: I) -> SortedSet<T, C>
    where
        C: Fn(&T, &T) -> Ordering,
        I: IntoIterator<Item=T>,
{
    add_all(SortedSet::by(comparator), elements)
}

/// Maps every element of `original` into a new hash set. Mapped values that collide are kept once.
pub fn transform<O, R, F>(original: &HashSet<O>, mapper: F) -> HashSet<R>
    where
        R: Eq + Hash,
        F: FnMut(&O) -> R,
{
    transform_into(original.iter(), mapper, HashSet::new)
}

pub fn transform_with<'a, O, R, C, F, S, I>(original: I, mapper: F, supplier: S) -> C
    where
        O: 'a,
        I: IntoIterator<Item=&'a O>,
        F: FnMut(&'a O) -> R,
        C: Extend<R>,
        S: FnOnce() -> C,
{
    transform_into(original, mapper, supplier)
}

#[cfg(test)]
mod set_tests {
    use super::*;
    use crate::CollectionError;

    #[test]
    fn make_mutable_drops_duplicates() {
        let set = make_mutable(vec![1, 2, 2, 3]);
        assert_eq!(3, set.len());
        for i in 1..=3 {
            assert!(set.contains(&i));
        }
    }

    #[test]
    fn make_mutable_pre_sizes_table() {
        let set = make_mutable(vec![1, 2, 3]);
        assert!(set.capacity() >= hash_capacity_threshold(13, 0));
    }

    #[test]
    fn oversized_hints_fall_back_to_growth() {
        let set = make_mutable_with_size(isize::MAX, vec![1]);
        assert_eq!(1, set.len());
        assert!(set.contains(&1));
        let set = make_mutable_with_size(isize::MIN, vec![2, 2]);
        assert_eq!(1, set.len());
        let linked = make_linked_with_size(isize::MAX, vec![5, 4]);
        assert_eq!(vec![5, 4], linked.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn make_linked_with_size_reserves_and_keeps_order() {
        let set = make_linked_with_size(12, vec!["z", "a", "z", "m"]);
        assert_eq!(vec!["z", "a", "m"], set.iter().copied().collect::<Vec<_>>());
        assert!(set.capacity() >= hash_capacity_threshold(12, 0));
    }

    #[test]
    fn make_is_read_only() {
        let mut set = make(vec!["a", "b", "a"]);
        assert_eq!(2, set.len());
        assert_eq!(Err(CollectionError::UnsupportedMutation { operation: "insert" }), set.insert("c"));
        assert_eq!(Err(CollectionError::UnsupportedMutation { operation: "remove" }), set.remove(&"a"));
        assert!(!set.contains(&"c"));
        assert!(set.contains(&"a"));
    }

    #[test]
    fn make_from_iter_dedupes() {
        let set = make_from_iter((0..10).map(|i| i % 4));
        assert_eq!(4, set.len());
    }

    #[test]
    fn linked_keeps_first_insertion_order() {
        let set = make_linked(vec![3, 1, 3, 2, 1]);
        assert_eq!(vec![3, 1, 2], set.into_iter().collect::<Vec<_>>());
        let set = make_linked_from_iter("hello".chars());
        assert_eq!("helo", set.iter().collect::<String>());
    }

    #[test]
    fn tree_uses_natural_order() {
        let set = make_tree(vec![3, 1, 2, 3]);
        assert_eq!(&[1, 2, 3][..], set.as_slice());
    }

    #[test]
    fn tree_uses_comparator_order() {
        let set = make_tree_by(|a: &i32, b: &i32| b.cmp(a), vec![3, 1, 2, 3]);
        assert_eq!(&[3, 2, 1][..], set.as_slice());
    }

    #[test]
    fn transform_dedupes_after_mapping() {
        let original = make_mutable(vec![1, 2, 3, 4]);
        let parity = transform(&original, |i| i % 2);
        assert_eq!(2, parity.len());
        let doubled: Vec<i32> = transform_with(&original, |i| i * 2, Vec::new);
        assert_eq!(4, doubled.len());
    }
}
