use crate::{list, set, stack};
use crate::{SortedSet, Stack, TypedArray, UnmodifiableList, UnmodifiableSet};
use indexmap::IndexSet;
use std::hash::Hash;

/// Implements collect into the crate's array and collection types.
pub trait CollectionIterator: Iterator {
    fn collect_typed_array(self) -> TypedArray<Self::Item>;

    fn collect_result_typed_array<I, E>(self) -> Result<TypedArray<I>, E>
        where
            Self: Iterator<Item=Result<I, E>>;

    fn collect_unmodifiable_list(self) -> UnmodifiableList<Self::Item>;

    fn collect_unmodifiable_set(self) -> UnmodifiableSet<Self::Item> where Self::Item: Eq + Hash;

    fn collect_linked_set(self) -> IndexSet<Self::Item> where Self::Item: Eq + Hash;

    fn collect_tree(self) -> SortedSet<Self::Item> where Self::Item: Ord;

    fn collect_stack(self) -> Stack<Self::Item>;
}

impl<Q: Iterator> CollectionIterator for Q {
    fn collect_typed_array(self) -> TypedArray<Self::Item> {
        TypedArray::from_vec(self.collect())
    }

    fn collect_result_typed_array<I, E>(self) -> Result<TypedArray<I>, E>
        where
            Self: Iterator<Item=Result<I, E>>
    {
        let mut items = Vec::with_capacity(self.size_hint().0);
        for mi in self {
            let i = mi?;
            items.push(i);
        }
        Ok(TypedArray::from_vec(items))
    }

    fn collect_unmodifiable_list(self) -> UnmodifiableList<Self::Item> {
        list::make_from_iter(self)
    }

    fn collect_unmodifiable_set(self) -> UnmodifiableSet<Self::Item> where Self::Item: Eq + Hash {
        set::make_from_iter(self)
    }

    fn collect_linked_set(self) -> IndexSet<Self::Item> where Self::Item: Eq + Hash {
        set::make_linked_from_iter(self)
    }

    fn collect_tree(self) -> SortedSet<Self::Item> where Self::Item: Ord {
        set::make_tree(self)
    }

    fn collect_stack(self) -> Stack<Self::Item> {
        stack::make_from_iter(self)
    }
}
