// MIT/Apache2 License

mod null;
pub mod raw;

pub use null::NullValue;
pub use raw::*;
