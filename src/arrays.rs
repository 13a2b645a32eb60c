//! Constructors for `TypedArray` and its primitive specializations.

use crate::{ByteArray, CharArray, CollectionError, ComponentType, DoubleArray, FloatArray, IntArray,
            LongArray, NullableArray, ShortArray, TypedArray};

pub fn of<T>(elements: Vec<T>) -> TypedArray<T> {
    TypedArray::from_vec(elements)
}

/// Empty array of `T`.
pub fn empty<T>() -> TypedArray<T> {
    TypedArray::new()
}

/// Array with empty slots allowed. The component type names `T`, not `Option<T>`; equality
/// only looks at the elements.
pub fn of_nullable<T>(elements: Vec<Option<T>>) -> NullableArray<T> {
    TypedArray::with_component(ComponentType::of::<T>(), elements)
}

pub fn try_of<T>(elements: Option<Vec<T>>) -> Result<TypedArray<T>, CollectionError> {
    elements
        .map(TypedArray::from_vec)
        .ok_or(CollectionError::NullArgument { name: "elements" })
}

pub fn of_byte(elements: Vec<i8>) -> ByteArray {
    TypedArray::from_vec(elements)
}

/// Byte array from `i32` values, each truncated to its low 8 bits.
pub fn of_byte_from_ints(elements: &[i32]) -> ByteArray {
    from_ints(elements)
}

pub fn of_char(elements: Vec<u16>) -> CharArray {
    TypedArray::from_vec(elements)
}

/// Char array holding the UTF-16 encoding of `text`.
pub fn of_char_from_str(text: &str) -> CharArray {
    TypedArray::from_vec(text.encode_utf16().collect())
}

/// Char array from UTF-16 code units given as `i32`, each truncated to 16 bits.
pub fn of_char_from_ints(elements: &[i32]) -> CharArray {
    from_ints(elements)
}

pub fn of_double(elements: Vec<f64>) -> DoubleArray {
    TypedArray::from_vec(elements)
}

pub fn of_float(elements: Vec<f32>) -> FloatArray {
    TypedArray::from_vec(elements)
}

pub fn of_int(elements: Vec<i32>) -> IntArray {
    TypedArray::from_vec(elements)
}

pub fn of_long(elements: Vec<i64>) -> LongArray {
    TypedArray::from_vec(elements)
}

pub fn of_short(elements: Vec<i16>) -> ShortArray {
    TypedArray::from_vec(elements)
}

/// Short array from `i32` values, each truncated to its low 16 bits.
pub fn of_short_from_ints(elements: &[i32]) -> ShortArray {
    from_ints(elements)
}

fn from_ints<T: crate::Narrow>(elements: &[i32]) -> TypedArray<T> {
    let mut array = TypedArray::new();
    array.add_all_i32(elements);
    array
}

#[cfg(test)]
mod arrays_tests {
    use super::*;

    #[test]
    fn of_keeps_every_element() {
        let array = of(vec!["Hello", ", ", "World", "!"]);
        assert_eq!(4, array.size());
        assert_eq!(Ok(&"World"), array.get(2));
    }

    #[test]
    fn empty_has_component_but_no_elements() {
        let array = empty::<String>();
        assert!(array.is_empty());
        assert!(array.component_type().is::<String>());
    }

    #[test]
    fn try_of_rejects_missing_elements() {
        assert_eq!(Err(CollectionError::NullArgument { name: "elements" }), try_of::<u8>(None));
        assert_eq!(Ok(of(vec![1u8])), try_of(Some(vec![1u8])));
    }

    #[test]
    fn primitive_factories_tag_their_width() {
        assert!(of_byte(vec![1]).component_type().is::<i8>());
        assert!(of_char(vec![b'a' as u16]).component_type().is::<u16>());
        assert!(of_double(vec![1.0]).component_type().is::<f64>());
        assert!(of_float(vec![1.0]).component_type().is::<f32>());
        assert!(of_int(vec![1]).component_type().is::<i32>());
        assert!(of_long(vec![1]).component_type().is::<i64>());
        assert!(of_short(vec![1]).component_type().is::<i16>());
    }

    #[test]
    fn wide_factories_truncate() {
        assert_eq!(&[-1i8, 0, 127][..], of_byte_from_ints(&[255, 256, 127]).as_slice());
        assert_eq!(&[-32768i16, 7][..], of_short_from_ints(&[32768, 7]).as_slice());
        assert_eq!(&[0x48u16, 0x69][..], of_char_from_ints(&[72, 0x10069]).as_slice());
        assert_eq!(&[0xD800u16, 0xDFFF][..], of_char_from_ints(&[0xD800, 0x1DFFF]).as_slice());
    }

    #[test]
    fn char_factory_encodes_utf16() {
        let array = of_char_from_str("hé\u{1F600}");
        assert_eq!(4, array.size());
        assert_eq!(Ok(&0x68u16), array.get(0));
        assert_eq!("hé\u{1F600}", array.to_string_lossy());
    }

    #[test]
    fn nullable_factory_names_inner_type() {
        let array = of_nullable(vec![Some(1u64), None]);
        assert!(array.component_type().is::<u64>());
        assert_eq!(Some(&None), array.last());
    }
}
