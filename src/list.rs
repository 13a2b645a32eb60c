//! List builders.

use crate::common::{add_all, capacity_threshold, presized, signed, transform as transform_into, EMPTY_SIZE};
use crate::{Unmodifiable, UnmodifiableList};
use std::collections::LinkedList;

/// Read-only list holding `elements`, sized exactly to their count.
pub fn make<T, I>(elements: I) -> UnmodifiableList<T>
    where
        I: IntoIterator<Item=T>,
        I::IntoIter: ExactSizeIterator,
{
    let elements = elements.into_iter();
    let len = elements.len();
    Unmodifiable::new(make_mutable_with_size(len, elements))
}

/// Read-only list drained from a single-pass iterator.
pub fn make_from_iter<T, I>(iter: I) -> UnmodifiableList<T> where I: IntoIterator<Item=T> {
    Unmodifiable::new(make_mutable_from_iter(iter))
}

/// Mutable list holding `elements`, with room for a few more.
pub fn make_mutable<T, I>(elements: I) -> Vec<T>
    where
        I: IntoIterator<Item=T>,
        I::IntoIter: ExactSizeIterator,
{
    let elements = elements.into_iter();
    let capacity = capacity_threshold(signed(elements.len()));
    debug!("list capacity {} for {} elements", capacity, elements.len());
    make_mutable_with_size(capacity, elements)
}

/// Mutable list with an initial capacity hint of `size`.
pub fn make_mutable_with_size<T, I>(size: usize, elements: I) -> Vec<T> where I: IntoIterator<Item=T> {
    add_all(presized(size), elements)
}

pub fn make_mutable_from_iter<T, I>(iter: I) -> Vec<T> where I: IntoIterator<Item=T> {
    make_mutable_with_size(capacity_threshold(signed(EMPTY_SIZE)), iter)
}

pub fn make_linked<T, I>(elements: I) -> LinkedList<T> where I: IntoIterator<Item=T> {
    add_all(LinkedList::new(), elements)
}

/// Maps every element of `original` into a new list, keeping order.
pub fn transform<O, R, F>(original: &[O], mapper: F) -> Vec<R> where F: FnMut(&O) -> R {
    transform_into(original.iter(), mapper, Vec::new)
}

/// Maps every element of `original` into the collection produced by `supplier`.
pub fn transform_with<O, R, C, F, S>(original: &[O], mapper: F, supplier: S) -> C
    where
        F: FnMut(&O) -> R,
        C: Extend<R>,
        S: FnOnce() -> C,
{
    transform_into(original.iter(), mapper, supplier)
}
