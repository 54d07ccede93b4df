// MIT/Apache2 License

//! The name-keyed catalogue of extension entry points.

use crate::{gl::builtin_extensions, Error, Result, Slot};
use arc_swap::ArcSwapOption;
use parking_lot::{Mutex, RwLock};
use rustc_hash::FxHashMap;
use std::{
    any::Any,
    borrow::Cow,
    fmt,
    sync::{Arc, LazyLock},
};

/// A type-erased callable handed out by name resolution.
///
/// Catalogue entries hold the function pointer of their forwarding thunk; late registrations can
/// hold anything that is `Send + Sync`. The concrete type is recovered with [`cast`](Proc::cast)
/// or [`downcast_ref`](Proc::downcast_ref).
#[derive(Clone)]
pub struct Proc {
    inner: Arc<dyn Any + Send + Sync>,
}

impl Proc {
    #[inline]
    pub fn new<F: Any + Send + Sync>(f: F) -> Self {
        Self { inner: Arc::new(f) }
    }

    /// Get a copy of the callable if it has type `F`.
    ///
    /// For thunks `F` is the exact `fn(..) -> ..` type of the entry point.
    #[inline]
    pub fn cast<F: Any + Copy>(&self) -> Option<F> {
        self.inner.downcast_ref::<F>().copied()
    }

    #[inline]
    pub fn downcast_ref<F: Any>(&self) -> Option<&F> {
        self.inner.downcast_ref::<F>()
    }

    /// Tell whether two procs are the same callable.
    #[inline]
    pub fn ptr_eq(&self, other: &Proc) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Proc {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Proc({:p})", Arc::as_ptr(&self.inner))
    }
}

/// One named extension entry point.
#[derive(Debug, Clone)]
pub struct ExtensionEntry {
    name: Cow<'static, str>,
    proc: Proc,
    slot: Option<Slot>,
    requires: Cow<'static, str>,
}

impl ExtensionEntry {
    /// Create an entry with no extension requirement.
    #[inline]
    pub fn new(name: impl Into<Cow<'static, str>>, proc: Proc, slot: Option<Slot>) -> Self {
        Self {
            name: name.into(),
            proc,
            slot,
            requires: Cow::Borrowed(""),
        }
    }

    /// Set the space separated list of extensions, any of which enables this entry.
    #[inline]
    pub fn requires(mut self, requires: impl Into<Cow<'static, str>>) -> Self {
        self.requires = requires.into();
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn proc(&self) -> &Proc {
        &self.proc
    }

    /// Get the fixed slot of this entry; `None` for registry-only extensions.
    #[inline]
    pub fn slot(&self) -> Option<Slot> {
        self.slot
    }

    #[inline]
    pub fn required_extensions(&self) -> &str {
        &self.requires
    }
}

/// A concurrency-safe map from extension names to their entries.
///
/// Names are compared exactly. Registering a name that is already present replaces the old entry
/// in one step; readers see either the old entry or the new one.
#[derive(Default)]
pub struct ExtensionRegistry {
    entries: RwLock<FxHashMap<String, Arc<ExtensionEntry>>>,
}

impl ExtensionRegistry {
    /// Create an empty registry.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry that holds every extension of the fixed catalogue.
    pub fn with_builtins() -> Self {
        let builtins = builtin_extensions();
        let mut entries =
            FxHashMap::with_capacity_and_hasher(builtins.len(), Default::default());
        for entry in builtins {
            entries.insert(entry.name().to_string(), Arc::new(entry));
        }

        log::debug!("Extension registry created with {} entries", entries.len());

        Self {
            entries: RwLock::new(entries),
        }
    }

    /// Find the callable registered under `name`.
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<Proc> {
        self.entries.read().get(name).map(|e| e.proc.clone())
    }

    /// Find the full entry registered under `name`.
    #[inline]
    pub fn entry(&self, name: &str) -> Option<Arc<ExtensionEntry>> {
        self.entries.read().get(name).cloned()
    }

    /// Register a callable under `name`, replacing any previous registration.
    ///
    /// This only affects tables built after the call; tables that already exist are immutable.
    #[inline]
    pub fn register(&self, name: &str, proc: Proc, slot: Option<Slot>) -> Result {
        self.register_entry(ExtensionEntry::new(name.to_string(), proc, slot))
    }

    /// Register a fully described entry, replacing any previous registration.
    pub fn register_entry(&self, entry: ExtensionEntry) -> Result {
        let mut key = String::new();
        key.try_reserve_exact(entry.name().len())
            .map_err(|_| Error::OutOfMemory)?;
        key.push_str(entry.name());
        let entry = Arc::new(entry);

        let mut entries = self.entries.write();
        entries.try_reserve(1).map_err(|_| Error::OutOfMemory)?;
        if entries.insert(key, entry.clone()).is_some() {
            log::debug!("Replaced extension \"{}\"", entry.name());
        } else {
            log::trace!("Registered extension \"{}\"", entry.name());
        }

        Ok(())
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.read().contains_key(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Get every registered name, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.read().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Get every entry that occupies a fixed slot, in slot order.
    pub fn slotted(&self) -> Vec<Arc<ExtensionEntry>> {
        let mut slotted: Vec<Arc<ExtensionEntry>> = self
            .entries
            .read()
            .values()
            .filter(|entry| entry.slot.is_some())
            .cloned()
            .collect();
        slotted.sort_by_key(|entry| entry.slot);
        slotted
    }
}

impl fmt::Debug for ExtensionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtensionRegistry")
            .field("len", &self.len())
            .finish()
    }
}

static GLOBAL: LazyLock<ArcSwapOption<ExtensionRegistry>> = LazyLock::new(ArcSwapOption::empty);
static INIT_GUARD: Mutex<()> = parking_lot::const_mutex(());

/// Construct the process-wide registry if it does not exist yet, and return it.
pub fn init() -> Arc<ExtensionRegistry> {
    if let Some(registry) = GLOBAL.load_full() {
        return registry;
    }

    let _guard = INIT_GUARD.lock();
    // another thread may have won the race
    if let Some(registry) = GLOBAL.load_full() {
        return registry;
    }

    let registry = Arc::new(ExtensionRegistry::with_builtins());
    GLOBAL.store(Some(registry.clone()));
    registry
}

/// Get the process-wide registry, constructing it on first use.
#[inline]
pub fn global() -> Arc<ExtensionRegistry> {
    init()
}

/// Drop the process-wide registry.
///
/// Handles obtained earlier stay usable; the next [`init`] or [`global`] builds a fresh registry
/// from the catalogue, without any late registrations.
pub fn shutdown() {
    let _guard = INIT_GUARD.lock();
    if GLOBAL.swap(None).is_some() {
        log::debug!("Extension registry shut down");
    }
}
