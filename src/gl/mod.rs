// MIT/Apache2 License

mod dispatch;
mod functions;
pub mod types;

pub use dispatch::*;
pub use functions::*;

pub(crate) use functions::builtin_extensions;
#[cfg(test)]
pub(crate) use functions::null_checks;
