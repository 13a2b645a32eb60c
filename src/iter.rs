use std::iter::FusedIterator;

/// By-value iterator over the elements of an array at the moment it was created.
///
/// Every call to `TypedArray::stream` produces a fresh `Stream` starting at the first element.
pub struct Stream<'a, T> {
    items: &'a [T],
    front: usize,
    back: usize,
}

impl<'a, T> Stream<'a, T> {
    pub(crate) fn new(items: &'a [T]) -> Stream<'a, T> {
        Stream {
            items,
            front: 0,
            back: items.len(),
        }
    }
}

impl<'a, T: Clone> Iterator for Stream<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.items[self.front].clone();
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<'a, T: Clone> DoubleEndedIterator for Stream<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.items[self.back].clone())
    }
}

impl<'a, T: Clone> ExactSizeIterator for Stream<'a, T> {
    fn len(&self) -> usize {
        self.back - self.front
    }
}

impl<'a, T: Clone> FusedIterator for Stream<'a, T> {}
