//! Vector builders. A vector here is a plain `Vec`, always mutable.

use crate::common::{add_all, capacity_threshold, presized, signed, transform as transform_into, EMPTY_SIZE};

pub fn make<T, I>(elements: I) -> Vec<T>
    where
        I: IntoIterator<Item=T>,
        I::IntoIter: ExactSizeIterator,
{
    let elements = elements.into_iter();
    let capacity = capacity_threshold(signed(elements.len()));
    debug!("vector capacity {} for {} elements", capacity, elements.len());
    make_with_size(capacity, elements)
}

pub fn make_with_size<T, I>(size: usize, elements: I) -> Vec<T> where I: IntoIterator<Item=T> {
    add_all(presized(size), elements)
}

pub fn make_from_iter<T, I>(iter: I) -> Vec<T> where I: IntoIterator<Item=T> {
    make_with_size(capacity_threshold(signed(EMPTY_SIZE)), iter)
}

pub fn transform<O, R, F>(original: &[O], mapper: F) -> Vec<R> where F: FnMut(&O) -> R {
    transform_into(original.iter(), mapper, Vec::new)
}
