use std::cmp::Ordering;
use std::fmt::Debug;

/// Comparator used by a naturally ordered `SortedSet`.
pub type NaturalOrder<T> = fn(&T, &T) -> Ordering;

/// Set kept in the order of a comparator.
///
/// Two elements the comparator reports as `Equal` are the same element as far as the set
/// is concerned; the first one inserted is kept.
#[derive(Clone)]
pub struct SortedSet<T, C = NaturalOrder<T>> where C: Fn(&T, &T) -> Ordering {
    items: Vec<T>,
    comparator: C,
}

impl<T: Ord> SortedSet<T> {
    /// Empty set ordered by `Ord`.
    pub fn natural() -> SortedSet<T> {
        SortedSet::by(<T as Ord>::cmp as NaturalOrder<T>)
    }
}

impl<T, C> SortedSet<T, C> where C: Fn(&T, &T) -> Ordering {
    /// Empty set ordered by `comparator`.
    pub fn by(comparator: C) -> SortedSet<T, C> {
        SortedSet {
            items: Vec::new(),
            comparator,
        }
    }

    fn search(&self, value: &T) -> Result<usize, usize> {
        let comparator = &self.comparator;
        self.items.binary_search_by(|probe| comparator(probe, value))
    }

    /// Adds `value` unless an equal element is already present. Returns whether it was added.
    pub fn insert(&mut self, value: T) -> bool {
        match self.search(&value) {
            Ok(_) => false,
            Err(index) => {
                self.items.insert(index, value);
                true
            }
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_ok()
    }

    /// Removes and returns the element equal to `value`.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        match self.search(value) {
            Ok(index) => Some(self.items.remove(index)),
            Err(_) => None,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Smallest element.
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Largest element.
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Ascending iteration.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T, C> Extend<T> for SortedSet<T, C> where C: Fn(&T, &T) -> Ordering {
    fn extend<I: IntoIterator<Item=T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Ord> std::iter::FromIterator<T> for SortedSet<T> {
    fn from_iter<I: IntoIterator<Item=T>>(iter: I) -> Self {
        let mut set = SortedSet::natural();
        set.extend(iter);
        set
    }
}

impl<T, C> IntoIterator for SortedSet<T, C> where C: Fn(&T, &T) -> Ordering {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T, C> IntoIterator for &'a SortedSet<T, C> where C: Fn(&T, &T) -> Ordering {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T, C> Debug for SortedSet<T, C> where T: Debug, C: Fn(&T, &T) -> Ordering {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.items.iter()).finish()
    }
}

#[cfg(test)]
mod sorted_tests {
    use super::SortedSet;

    #[test]
    fn natural_order_ascends_and_dedupes() {
        let mut set = SortedSet::natural();
        set.extend(vec![5, 1, 4, 1, 3]);
        assert_eq!(&[1, 3, 4, 5][..], set.as_slice());
        assert_eq!(Some(&1), set.first());
        assert_eq!(Some(&5), set.last());
    }

    #[test]
    fn comparator_decides_order_and_identity() {
        let mut set = SortedSet::by(|a: &String, b: &String| a.len().cmp(&b.len()));
        assert!(set.insert("ccc".to_string()));
        assert!(set.insert("a".to_string()));
        assert!(!set.insert("b".to_string()));
        assert_eq!(vec!["a", "ccc"], set.iter().map(|s| s.as_str()).collect::<Vec<_>>());
        assert!(set.contains(&"z".to_string()));
    }

    #[test]
    fn remove_takes_matching_element() {
        let mut set: SortedSet<i32> = vec![3, 2, 1].into_iter().collect();
        assert_eq!(Some(2), set.remove(&2));
        assert_eq!(None, set.remove(&2));
        assert_eq!(2, set.len());
    }
}
