use crate::common::{signed, INDEX_NOT_FOUND};
use crate::iter::Stream;
use crate::{list, set, stack, vector};
use crate::{CollectionError, ComponentType, Narrow, Stack, UnmodifiableList, UnmodifiableSet};
use std::collections::HashSet;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Growable array of a single element type backed by one contiguous allocation.
///
/// Every append replaces the backing allocation with a new one sized exactly to the new
/// length, so the array never holds spare capacity and never shrinks.
pub struct TypedArray<T> {
    array: Box<[T]>,
    component: ComponentType,
}

pub type ByteArray = TypedArray<i8>;
/// UTF-16 code units, one per slot. Surrogate halves are stored unpaired if that is how
/// they were added.
pub type CharArray = TypedArray<u16>;
pub type DoubleArray = TypedArray<f64>;
pub type FloatArray = TypedArray<f32>;
pub type IntArray = TypedArray<i32>;
pub type LongArray = TypedArray<i64>;
pub type ShortArray = TypedArray<i16>;

/// Object array whose slots may be empty; `None` matches `None` when searching.
pub type NullableArray<T> = TypedArray<Option<T>>;

impl<T> TypedArray<T> {
    pub fn new() -> TypedArray<T> {
        TypedArray::from_vec(Vec::new())
    }

    pub fn from_vec(elements: Vec<T>) -> TypedArray<T> {
        TypedArray::with_component(ComponentType::of::<T>(), elements)
    }

    pub(crate) fn with_component(component: ComponentType, elements: Vec<T>) -> TypedArray<T> {
        TypedArray {
            array: elements.into_boxed_slice(),
            component,
        }
    }

    #[inline(always)]
    pub fn component_type(&self) -> ComponentType {
        self.component
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.array.len()
    }

    #[inline(always)]
    pub fn size(&self) -> usize {
        self.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    #[inline(always)]
    pub fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    /// The backing array.
    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        &self.array
    }

    /// Appends one element, reallocating the backing array to `len + 1`.
    pub fn add(&mut self, element: T) {
        let mut grown = std::mem::take(&mut self.array).into_vec();
        grown.reserve_exact(1);
        grown.push(element);
        trace!("grow {} array to {}", self.component, grown.len());
        self.array = grown.into_boxed_slice();
    }

    /// Appends a contiguous block, reallocating the backing array once to `len + elements.len()`.
    pub fn add_all(&mut self, elements: &[T]) where T: Clone {
        self.append_vec(elements.to_vec());
    }

    /// Like `add_all`, but fails without touching the array when `elements` is absent.
    pub fn try_add_all(&mut self, elements: Option<&[T]>) -> Result<(), CollectionError> where T: Clone {
        let elements = elements.ok_or(CollectionError::NullArgument { name: "elements" })?;
        self.add_all(elements);
        Ok(())
    }

    fn append_vec(&mut self, mut elements: Vec<T>) {
        let mut grown = Vec::with_capacity(self.array.len() + elements.len());
        grown.extend(std::mem::take(&mut self.array).into_vec());
        grown.append(&mut elements);
        trace!("grow {} array to {}", self.component, grown.len());
        self.array = grown.into_boxed_slice();
    }

    /// Bounds-checked read.
    pub fn get(&self, index: isize) -> Result<&T, CollectionError> {
        if index < 0 || index as usize >= self.array.len() {
            return Err(CollectionError::IndexOutOfRange { index, len: self.array.len() });
        }
        Ok(&self.array[index as usize])
    }

    pub fn first(&self) -> Option<&T> {
        self.array.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.array.last()
    }

    /// Position of the first element equal to `value`, or `INDEX_NOT_FOUND`.
    pub fn index_of(&self, value: &T) -> isize where T: PartialEq {
        self.array.iter()
            .position(|element| element == value)
            .map(signed)
            .unwrap_or(INDEX_NOT_FOUND)
    }

    /// Position of the last element equal to `value`, or `INDEX_NOT_FOUND`.
    pub fn last_index_of(&self, value: &T) -> isize where T: PartialEq {
        self.array.iter()
            .rposition(|element| element == value)
            .map(signed)
            .unwrap_or(INDEX_NOT_FOUND)
    }

    pub fn contains(&self, value: &T) -> bool where T: PartialEq {
        self.index_of(value) != INDEX_NOT_FOUND
    }

    /// Returns an independent array with a shallow clone of every element.
    pub fn copy(&self) -> TypedArray<T> where T: Clone {
        TypedArray {
            array: self.array.clone(),
            component: self.component,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.array.iter()
    }

    /// Iterates over clones of the current elements, starting over on each call.
    pub fn stream(&self) -> Stream<'_, T> where T: Clone {
        Stream::new(&self.array)
    }

    pub fn for_each_indexed<F>(&self, mut consumer: F) where F: FnMut(usize, &T) {
        for (index, element) in self.array.iter().enumerate() {
            consumer(index, element);
        }
    }

    pub fn to_list(&self) -> UnmodifiableList<T> where T: Clone {
        list::make(self.array.iter().cloned())
    }

    pub fn to_mutable_list(&self) -> Vec<T> where T: Clone {
        list::make_mutable(self.array.iter().cloned())
    }

    pub fn to_set(&self) -> UnmodifiableSet<T> where T: Clone + Eq + Hash {
        set::make(self.array.iter().cloned())
    }

    pub fn to_mutable_set(&self) -> HashSet<T> where T: Clone + Eq + Hash {
        set::make_mutable(self.array.iter().cloned())
    }

    pub fn to_vector(&self) -> Vec<T> where T: Clone {
        vector::make(self.array.iter().cloned())
    }

    pub fn to_stack(&self) -> Stack<T> where T: Clone {
        stack::make(self.array.iter().cloned())
    }
}

impl<T: Narrow> TypedArray<T> {
    /// Appends `element` narrowed to the array's width.
    pub fn add_i32(&mut self, element: i32) {
        self.add(T::narrow(element));
    }

    /// Appends every value narrowed to the array's width.
    pub fn add_all_i32(&mut self, elements: &[i32]) {
        self.append_vec(elements.iter().map(|v| T::narrow(*v)).collect());
    }

    pub fn try_add_all_i32(&mut self, elements: Option<&[i32]>) -> Result<(), CollectionError> {
        let elements = elements.ok_or(CollectionError::NullArgument { name: "elements" })?;
        self.add_all_i32(elements);
        Ok(())
    }

    pub fn index_of_i32(&self, value: i32) -> isize where T: PartialEq {
        self.index_of(&T::narrow(value))
    }

    pub fn last_index_of_i32(&self, value: i32) -> isize where T: PartialEq {
        self.last_index_of(&T::narrow(value))
    }

    pub fn contains_i32(&self, value: i32) -> bool where T: PartialEq {
        self.contains(&T::narrow(value))
    }
}

impl TypedArray<u16> {
    /// Appends the UTF-16 encoding of `c`, one or two code units.
    pub fn add_char(&mut self, c: char) {
        let mut units = [0u16; 2];
        self.add_all(c.encode_utf16(&mut units));
    }

    /// Decodes the code units, yielding an error for every unpaired surrogate.
    pub fn chars(&self) -> std::char::DecodeUtf16<std::iter::Copied<std::slice::Iter<'_, u16>>> {
        std::char::decode_utf16(self.array.iter().copied())
    }

    /// Decodes the code units, replacing unpaired surrogates with U+FFFD.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(&self.array)
    }
}

impl<T> TypedArray<Option<T>> {
    /// Calls `consumer` for every present element.
    pub fn for_each_not_null<F>(&self, mut consumer: F) where F: FnMut(&T) {
        for element in self.array.iter().flatten() {
            consumer(element);
        }
    }

    /// Calls `consumer` for every present element with its slot index; empty slots still
    /// advance the index.
    pub fn for_each_indexed_not_null<F>(&self, mut consumer: F) where F: FnMut(usize, &T) {
        for (index, element) in self.array.iter().enumerate() {
            if let Some(element) = element {
                consumer(index, element);
            }
        }
    }
}

impl<T> Default for TypedArray<T> {
    fn default() -> Self {
        TypedArray::new()
    }
}

impl<T: Clone> Clone for TypedArray<T> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl<T: PartialEq> PartialEq for TypedArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.array == other.array
    }
}

impl<T> From<Vec<T>> for TypedArray<T> {
    fn from(elements: Vec<T>) -> Self {
        TypedArray::from_vec(elements)
    }
}

impl<T> std::iter::FromIterator<T> for TypedArray<T> {
    fn from_iter<I: IntoIterator<Item=T>>(iter: I) -> Self {
        TypedArray::from_vec(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for TypedArray<T> {
    fn extend<I: IntoIterator<Item=T>>(&mut self, iter: I) {
        self.append_vec(iter.into_iter().collect());
    }
}

impl<'a, T> IntoIterator for &'a TypedArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.array.iter()
    }
}

impl<T> Debug for TypedArray<T> where T: Debug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.array.iter()).finish()
    }
}

impl<T> Display for TypedArray<T> where T: Display {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        for (i, element) in self.array.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            Display::fmt(element, f)?;
        }
        f.write_str("]")
    }
}
