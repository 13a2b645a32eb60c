use crate::CollectionError;
use std::collections::HashSet;
use std::fmt::Debug;
use std::ops::Deref;

/// Read-only wrapper around a built collection.
///
/// All read access goes through `Deref` to the wrapped collection. Methods that would mutate
/// it exist only to report `CollectionError::UnsupportedMutation`.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Unmodifiable<C> {
    inner: C,
}

pub type UnmodifiableList<T> = Unmodifiable<Vec<T>>;
pub type UnmodifiableSet<T> = Unmodifiable<HashSet<T>>;

#[inline(always)]
fn unsupported(operation: &'static str) -> CollectionError {
    CollectionError::UnsupportedMutation { operation }
}

impl<C> Unmodifiable<C> {
    pub fn new(inner: C) -> Unmodifiable<C> {
        Unmodifiable { inner }
    }

    /// Returns an independent mutable copy of the wrapped collection.
    pub fn to_mutable(&self) -> C where C: Clone {
        self.inner.clone()
    }

    pub fn push<T>(&mut self, _item: T) -> Result<(), CollectionError> {
        Err(unsupported("push"))
    }

    pub fn insert<T>(&mut self, _item: T) -> Result<bool, CollectionError> {
        Err(unsupported("insert"))
    }

    pub fn remove<Q>(&mut self, _item: Q) -> Result<bool, CollectionError> {
        Err(unsupported("remove"))
    }

    pub fn clear(&mut self) -> Result<(), CollectionError> {
        Err(unsupported("clear"))
    }

    pub fn extend<I: IntoIterator>(&mut self, _items: I) -> Result<(), CollectionError> {
        Err(unsupported("extend"))
    }
}

impl<C> Deref for Unmodifiable<C> {
    type Target = C;

    #[inline(always)]
    fn deref(&self) -> &C {
        &self.inner
    }
}

impl<C> AsRef<C> for Unmodifiable<C> {
    fn as_ref(&self) -> &C {
        &self.inner
    }
}

impl<'a, C> IntoIterator for &'a Unmodifiable<C> where &'a C: IntoIterator {
    type Item = <&'a C as IntoIterator>::Item;
    type IntoIter = <&'a C as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        (&self.inner).into_iter()
    }
}

impl<C> Debug for Unmodifiable<C> where C: Debug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.inner, f)
    }
}

#[cfg(test)]
mod view_tests {
    use super::{Unmodifiable, UnmodifiableList};
    use crate::CollectionError;

    #[test]
    fn reads_through_to_wrapped_list() {
        let view: UnmodifiableList<i32> = Unmodifiable::new(vec![1, 2, 3]);
        assert_eq!(3, view.len());
        assert_eq!(Some(&2), view.get(1));
        assert_eq!(vec![1, 2, 3], view.iter().copied().collect::<Vec<_>>());
        let mut sum = 0;
        for i in &view {
            sum += *i;
        }
        assert_eq!(6, sum);
    }

    #[test]
    fn rejects_every_mutation() {
        let mut view: UnmodifiableList<i32> = Unmodifiable::new(vec![1, 2, 3]);
        assert_eq!(Err(CollectionError::UnsupportedMutation { operation: "push" }), view.push(4));
        assert_eq!(Err(CollectionError::UnsupportedMutation { operation: "insert" }), view.insert(4));
        assert_eq!(Err(CollectionError::UnsupportedMutation { operation: "remove" }), view.remove(0usize));
        assert_eq!(Err(CollectionError::UnsupportedMutation { operation: "clear" }), view.clear());
        assert_eq!(Err(CollectionError::UnsupportedMutation { operation: "extend" }), view.extend(vec![5]));
        assert_eq!(&[1, 2, 3][..], &view[..]);
    }

    #[test]
    fn mutable_copy_is_independent() {
        let view: UnmodifiableList<i32> = Unmodifiable::new(vec![1, 2]);
        let mut copy = view.to_mutable();
        copy.push(3);
        assert_eq!(2, view.len());
        assert_eq!(3, copy.len());
    }
}
