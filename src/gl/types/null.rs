// MIT/Apache2 License

use std::ptr;

/// The value an entry point returns when nothing implements it.
///
/// Every value here reads as "the call did not happen": booleans are false, handles, sizes and
/// counts are zero, and pointers are null. Status codes that need a specific failure value are
/// spelled out in the entry point catalogue instead.
pub trait NullValue {
    /// Get the null value for this type.
    fn null_value() -> Self;
}

impl NullValue for () {
    #[inline]
    fn null_value() -> Self {}
}

macro_rules! zero_null_value {
    ($($ty: ty),*) => {
        $(
            impl NullValue for $ty {
                #[inline]
                fn null_value() -> Self {
                    0 as $ty
                }
            }
        )*
    }
}

zero_null_value! {
    u8, i8, u16, i16, u32, i32, u64, i64, usize, isize, f32, f64
}

impl<T> NullValue for *const T {
    #[inline]
    fn null_value() -> Self {
        ptr::null()
    }
}

impl<T> NullValue for *mut T {
    #[inline]
    fn null_value() -> Self {
        ptr::null_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gl::types::{GLboolean, GLsync, BOOL, GL_FALSE, HGLRC, PROC};

    #[test]
    fn failure_shaped_values() {
        assert_eq!(GLboolean::null_value(), GL_FALSE);
        assert_eq!(BOOL::null_value(), 0);
        assert_eq!(f32::null_value(), 0.0);
        assert!(GLsync::null_value().is_null());
        assert!(HGLRC::null_value().is_null());
        assert!(PROC::null_value().is_null());
    }
}
