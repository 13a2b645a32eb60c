use std::fmt::Display;

/// Errors reported by arrays, builders and unmodifiable views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// A required argument was absent.
    NullArgument { name: &'static str },
    /// Indexed access outside of `[0, len)`.
    IndexOutOfRange { index: isize, len: usize },
    /// A write was attempted through an unmodifiable view.
    UnsupportedMutation { operation: &'static str },
}

impl Display for CollectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectionError::NullArgument { name } => write!(f, "Argument `{}` must not be null", name),
            CollectionError::IndexOutOfRange { index, len } => write!(f, "Index out of range: {} (length {})", index, len),
            CollectionError::UnsupportedMutation { operation } => write!(f, "Unsupported operation `{}` on an unmodifiable view", operation),
        }
    }
}

impl std::error::Error for CollectionError {}

#[cfg(test)]
mod error_tests {
    use super::CollectionError;

    #[test]
    fn displays_index_and_length() {
        let e = CollectionError::IndexOutOfRange { index: -1, len: 4 };
        assert_eq!("Index out of range: -1 (length 4)", e.to_string());
    }

    #[test]
    fn displays_argument_name() {
        let e = CollectionError::NullArgument { name: "elements" };
        assert_eq!("Argument `elements` must not be null", e.to_string());
    }
}
