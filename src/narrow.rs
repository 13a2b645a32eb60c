/// Element types that accept a wider `i32` input and truncate it to their own width.
///
/// Callers are expected to pass values inside the target range. Values outside it are not
/// rejected; they are narrowed the way an `as` cast narrows an integer, keeping only the
/// low-order bits.
pub trait Narrow: Copy {
    fn narrow(value: i32) -> Self;
}

impl Narrow for i8 {
    #[inline(always)]
    fn narrow(value: i32) -> i8 {
        value as i8
    }
}

impl Narrow for i16 {
    #[inline(always)]
    fn narrow(value: i32) -> i16 {
        value as i16
    }
}

/// UTF-16 code unit. Surrogate halves are kept as they are.
impl Narrow for u16 {
    #[inline(always)]
    fn narrow(value: i32) -> u16 {
        value as u16
    }
}
