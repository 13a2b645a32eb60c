#[macro_use]
mod logging;

mod error;
mod component;
mod narrow;
mod iter;
mod array;
mod view;
mod sorted;
mod traits;
pub mod common;
pub mod arrays;
pub mod list;
pub mod set;
pub mod vector;
pub mod stack;

pub use error::CollectionError;
pub use component::ComponentType;
pub use narrow::Narrow;
pub use iter::Stream;
pub use array::{TypedArray, ByteArray, CharArray, DoubleArray, FloatArray, IntArray, LongArray, ShortArray, NullableArray};
pub use view::{Unmodifiable, UnmodifiableList, UnmodifiableSet};
pub use sorted::{SortedSet, NaturalOrder};
pub use stack::Stack;
pub use traits::CollectionIterator;
pub use common::{COLLECTION_SIZE_THRESHOLD, COLLECTION_HASH_FACTOR, EMPTY_SIZE, INDEX_NOT_FOUND, MAX_CAPACITY_HINT};
pub use indexmap::IndexSet;

#[cfg(test)]
pub mod dropflag;
