// MIT/Apache2 License

use crate::ContextHandle;
use std::fmt;

/// Sum error type for dispatch operations.
///
/// Calling an entry point never produces one of these; missing implementations are served by the
/// null backend instead. Errors only come out of context management and registration.
#[derive(Debug)]
pub enum Error {
    /// A static string message.
    StaticMsg(&'static str),
    /// The handle does not name a live context.
    InvalidHandle(ContextHandle),
    /// The context is current on another thread.
    Busy(ContextHandle),
    /// Every slot of the context handle table is in use.
    TooManyHandles,
    /// Memory for a registration could not be reserved.
    OutOfMemory,
    /// The driver refused to switch contexts.
    Driver(String),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StaticMsg(s) => f.write_str(s),
            Self::InvalidHandle(h) => write!(f, "Context of handle {} does not exist", h),
            Self::Busy(h) => write!(f, "Context of handle {} is current on another thread", h),
            Self::TooManyHandles => f.write_str("Context handle table is full"),
            Self::OutOfMemory => f.write_str("Could not reserve memory for the registration"),
            Self::Driver(msg) => write!(f, "Driver error: {}", msg),
        }
    }
}

impl Error {
    /// Create a driver error from an error-like type.
    #[inline]
    pub fn driver(f: impl fmt::Display) -> Self {
        Self::Driver(f.to_string())
    }
}

/// Convenience result type.
pub type Result<T = ()> = std::result::Result<T, Error>;
