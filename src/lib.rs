// MIT/Apache2 License

//! Runtime dispatch tables for the GL/WGL entry point surface.
//!
//! Every entry point is reached through a [`DispatchTable`] that the calling thread has bound.
//! Until a driver is attached, the table in use is the shared null table, whose entries do
//! nothing and return failure-shaped values. Extension entry points are additionally resolvable
//! by name through the [`ExtensionRegistry`].

#![deny(unsafe_code)]

mod entry;
mod error;
mod extensions;
mod null;
mod table;

pub mod binding;
pub mod config;
pub mod context;
pub mod gl;
pub mod registry;

pub use binding::ContextBinding;
pub use config::Config;
pub use context::{contexts, ContextHandle, ContextManager, MAX_HANDLES};
pub use entry::*;
pub use error::*;
pub use extensions::*;
pub use gl::{api, attach, types::NullValue, GlDriver, GlFuncs, Slot, ENTRY_POINTS};
pub use null::*;
pub use registry::{ExtensionEntry, ExtensionRegistry, Proc};
pub use table::*;
