//! Sizing heuristics and bulk helpers shared by the list, set, vector and stack builders.

use crate::CollectionError;
use indexmap::IndexSet;
use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

/// Padding added to a requested size when pre-sizing a linear collection.
pub const COLLECTION_SIZE_THRESHOLD: usize = 10;

/// Load factor assumed when pre-sizing a hash-based collection.
pub const COLLECTION_HASH_FACTOR: f32 = 0.75;

pub const EMPTY_SIZE: usize = 0;

/// Returned by search operations when the value is absent.
pub const INDEX_NOT_FOUND: isize = -1;

/// Largest capacity a builder reserves up front. Bigger hints are clamped to it.
pub const MAX_CAPACITY_HINT: usize = 1 << 20;

/// Initial capacity for a list, vector or stack expected to hold `size` items.
#[inline]
pub fn capacity_threshold(size: isize) -> usize {
    size.unsigned_abs().saturating_add(COLLECTION_SIZE_THRESHOLD)
}

/// Initial capacity for a hash-based collection expected to hold `size` items plus `reserved`
/// spare slots, chosen so that it does not rehash before reaching that amount.
#[inline]
pub fn hash_capacity_threshold(size: isize, reserved: isize) -> usize {
    let amount = size.unsigned_abs().saturating_add(reserved.unsigned_abs());
    ((amount as f32 / COLLECTION_HASH_FACTOR) as usize).saturating_add(1)
}

/// `hash_capacity_threshold` with `COLLECTION_SIZE_THRESHOLD` reserved slots.
#[inline]
pub fn default_hash_capacity_threshold(size: isize) -> usize {
    hash_capacity_threshold(size, COLLECTION_SIZE_THRESHOLD as isize)
}

#[inline(always)]
pub(crate) fn signed(len: usize) -> isize {
    len.min(isize::MAX as usize) as isize
}

/// Collections that can reserve room up front without aborting on a bad request.
pub(crate) trait Presize: Default {
    fn try_presize(&mut self, capacity: usize) -> bool;
}

impl<T> Presize for Vec<T> {
    fn try_presize(&mut self, capacity: usize) -> bool {
        self.try_reserve(capacity).is_ok()
    }
}

impl<T, S> Presize for HashSet<T, S> where T: Eq + Hash, S: BuildHasher + Default {
    fn try_presize(&mut self, capacity: usize) -> bool {
        self.try_reserve(capacity).is_ok()
    }
}

impl<T, S> Presize for IndexSet<T, S> where T: Eq + Hash, S: BuildHasher + Default {
    fn try_presize(&mut self, capacity: usize) -> bool {
        self.try_reserve(capacity).is_ok()
    }
}

/// Empty collection with room for `capacity` items, clamped to `MAX_CAPACITY_HINT`.
///
/// Capacity is only a hint: if the allocator refuses it the collection starts unsized.
pub(crate) fn presized<C: Presize>(capacity: usize) -> C {
    let mut target = C::default();
    let hint = capacity.min(MAX_CAPACITY_HINT);
    if !target.try_presize(hint) {
        debug!("capacity hint {} refused, starting unsized", hint);
    }
    target
}

/// Appends every element to `target` in iteration order and hands the target back.
pub fn add_all<C, I>(mut target: C, elements: I) -> C
    where
        C: Extend<I::Item>,
        I: IntoIterator,
{
    target.extend(elements);
    target
}

/// Like `add_all`, but rejects an absent source before touching `target`.
pub fn try_add_all<C, I>(target: C, elements: Option<I>) -> Result<C, CollectionError>
    where
        C: Extend<I::Item>,
        I: IntoIterator,
{
    let elements = elements.ok_or(CollectionError::NullArgument { name: "elements" })?;
    Ok(add_all(target, elements))
}

/// Maps every element of `original` into a fresh collection produced by `supplier`.
///
/// Source order is preserved; deduplication happens only if the target collection does it.
pub fn transform<I, R, C, F, S>(original: I, mapper: F, supplier: S) -> C
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> R,
        C: Extend<R>,
        S: FnOnce() -> C,
{
    add_all(supplier(), original.into_iter().map(mapper))
}
