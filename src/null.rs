// MIT/Apache2 License

use crate::GlFuncs;
use std::sync::{Arc, LazyLock};

/// The backend that is used when no real one is attached.
///
/// It implements every entry point with the default bodies of [`GlFuncs`]: nothing happens, and
/// whatever comes back reads as a failure. See [`NullValue`](crate::NullValue) for the general
/// policy.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct NullBackend;

impl GlFuncs for NullBackend {}

static NULL_BACKEND: LazyLock<Arc<dyn GlFuncs>> = LazyLock::new(|| Arc::new(NullBackend));

/// Get the one shared instance of the null backend.
///
/// Every null slot of every table points at this instance.
#[inline]
pub fn null_backend() -> &'static Arc<dyn GlFuncs> {
    &NULL_BACKEND
}
