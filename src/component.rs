use std::fmt::{Debug, Display};

/// Runtime tag for the element type of a `TypedArray`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentType {
    name: &'static str,
    size: usize,
}

impl ComponentType {
    pub fn of<T>() -> ComponentType {
        ComponentType {
            name: std::any::type_name::<T>(),
            size: std::mem::size_of::<T>(),
        }
    }

    /// Fully qualified type name, as reported by `std::any::type_name`.
    #[inline(always)]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Size of one element in bytes.
    #[inline(always)]
    pub fn size_of(&self) -> usize {
        self.size
    }

    pub fn is<T>(&self) -> bool {
        *self == ComponentType::of::<T>()
    }
}

impl Debug for ComponentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ComponentType({})", self.name)
    }
}

impl Display for ComponentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self.name, f)
    }
}
