//! Last-in-first-out stack and its builders.

use crate::common::{add_all, capacity_threshold, presized, signed, transform as transform_into, EMPTY_SIZE, INDEX_NOT_FOUND};
use std::fmt::Debug;

/// LIFO stack. Iteration runs from the bottom (first pushed) to the top.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Stack<T> {
        Stack { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Stack<T> {
        Stack { items: Vec::with_capacity(capacity) }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// The top element, left in place.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Distance of the topmost `value` from the top of the stack, where the top itself is 1.
    /// Returns `INDEX_NOT_FOUND` if the value is not on the stack.
    pub fn search(&self, value: &T) -> isize where T: PartialEq {
        self.items.iter()
            .rposition(|item| item == value)
            .map(|index| signed(self.items.len() - index))
            .unwrap_or(INDEX_NOT_FOUND)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item=T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> std::iter::FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item=T>>(iter: I) -> Self {
        Stack { items: iter.into_iter().collect() }
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> Debug for Stack<T> where T: Debug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

/// Stack with `elements` pushed in order, so the last one ends up on top.
pub fn make<T, I>(elements: I) -> Stack<T>
    where
        I: IntoIterator<Item=T>,
        I::IntoIter: ExactSizeIterator,
{
    let elements = elements.into_iter();
    let capacity = capacity_threshold(signed(elements.len()));
    debug!("stack capacity {} for {} elements", capacity, elements.len());
    add_all(Stack { items: presized(capacity) }, elements)
}

pub fn make_from_iter<T, I>(iter: I) -> Stack<T> where I: IntoIterator<Item=T> {
    add_all(Stack { items: presized(capacity_threshold(signed(EMPTY_SIZE))) }, iter)
}

/// Maps every element bottom to top, so the mapped stack has the same shape.
pub fn transform<O, R, F>(original: &Stack<O>, mapper: F) -> Stack<R> where F: FnMut(&O) -> R {
    transform_into(original.iter(), mapper, Stack::new)
}
