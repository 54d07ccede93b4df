// MIT/Apache2 License

//! Rendering contexts and the threads they are current on.

use crate::{
    attach, binding, config, filter_extensions, registry, resolve, DispatchTable, Error,
    GlDriver, Proc,
};
use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use std::{
    fmt,
    num::NonZeroU32,
    sync::{Arc, LazyLock},
    thread::{self, ThreadId},
};

/// The most contexts that can be alive at once.
pub const MAX_HANDLES: usize = 1024;

/// Identifies a rendering context.
///
/// The low 16 bits are an index into the handle table and the high 16 bits are a generation that
/// changes every time the index is reused, so a handle to a deleted context never names a new
/// one.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ContextHandle(NonZeroU32);

impl ContextHandle {
    #[inline]
    fn new(index: usize, generation: u16) -> Option<Self> {
        NonZeroU32::new(((generation as u32) << 16) | (index as u32 & 0xFFFF)).map(Self)
    }

    /// Rebuild a handle from its raw value.
    #[inline]
    pub fn from_raw(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(Self)
    }

    #[inline]
    pub fn into_raw(self) -> u32 {
        self.0.get()
    }

    #[inline]
    fn index(self) -> usize {
        (self.0.get() & 0xFFFF) as usize
    }

    #[inline]
    fn generation(self) -> u16 {
        (self.0.get() >> 16) as u16
    }
}

impl fmt::Display for ContextHandle {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0.get())
    }
}

struct GlContext {
    driver: Arc<dyn GlDriver>,
    table: Arc<DispatchTable>,
    owner: Option<ThreadId>,
}

struct HandleEntry {
    generation: u16,
    context: Option<GlContext>,
    next_free: Option<usize>,
}

#[derive(Default)]
struct HandleTable {
    entries: Vec<HandleEntry>,
    free: Option<usize>,
    current: FxHashMap<ThreadId, ContextHandle>,
}

impl HandleTable {
    fn alloc(&mut self, context: GlContext) -> crate::Result<ContextHandle> {
        let index = match self.free {
            Some(index) => {
                let entry = &mut self.entries[index];
                self.free = entry.next_free.take();
                entry.context = Some(context);
                index
            }
            None if self.entries.len() < MAX_HANDLES => {
                self.entries.push(HandleEntry {
                    generation: 1,
                    context: Some(context),
                    next_free: None,
                });
                self.entries.len() - 1
            }
            None => return Err(Error::TooManyHandles),
        };

        ContextHandle::new(index, self.entries[index].generation)
            .ok_or(Error::StaticMsg("Handle generation wrapped to zero"))
    }

    fn free(&mut self, handle: ContextHandle) -> Option<GlContext> {
        let index = handle.index();
        let context = self.get_mut(handle)?.context.take();

        let entry = &mut self.entries[index];
        entry.generation = match entry.generation.wrapping_add(1) {
            0 => 1,
            generation => generation,
        };
        entry.next_free = self.free.replace(index);
        context
    }

    fn get_mut(&mut self, handle: ContextHandle) -> Option<&mut HandleEntry> {
        self.entries
            .get_mut(handle.index())
            .filter(|entry| entry.generation == handle.generation() && entry.context.is_some())
    }

    fn context(&mut self, handle: ContextHandle) -> crate::Result<&mut GlContext> {
        self.get_mut(handle)
            .and_then(|entry| entry.context.as_mut())
            .ok_or(Error::InvalidHandle(handle))
    }

    /// Clear the owner of `handle` if it is still `thread`.
    fn disown(&mut self, handle: ContextHandle, thread: ThreadId) {
        if let Ok(context) = self.context(handle) {
            if context.owner == Some(thread) {
                context.owner = None;
            }
        }
    }
}

/// Keeps track of every live rendering context.
pub struct ContextManager {
    handles: Mutex<HandleTable>,
    config: config::Config,
}

impl ContextManager {
    /// Create a manager that uses the process-wide configuration.
    #[inline]
    pub fn new() -> Self {
        Self::with_config(config::global().clone())
    }

    #[inline]
    pub fn with_config(config: config::Config) -> Self {
        Self {
            handles: Mutex::new(HandleTable::default()),
            config,
        }
    }

    /// Attach `driver` and store the resulting table under a new handle.
    pub fn create_context<D: GlDriver + 'static>(
        &self,
        driver: Arc<D>,
    ) -> crate::Result<ContextHandle> {
        let table = Arc::new(attach(&driver, &registry::global(), &self.config));
        let driver: Arc<dyn GlDriver> = driver;
        let name = driver.name().to_string();

        let handle = self.handles.lock().alloc(GlContext {
            driver,
            table,
            owner: None,
        })?;

        log::debug!("Created context {} for \"{}\"", handle, name);
        Ok(handle)
    }

    /// Make a context current on the calling thread, or release the current one with `None`.
    ///
    /// Switching contexts swaps the thread's whole dispatch table; releasing rebinds the thread
    /// to the null table. Driver hooks run without the handle table locked, so a driver may call
    /// back into the manager.
    ///
    /// A thread that exits while a context is current keeps owning it, and that context stays
    /// [`Busy`](Error::Busy) for every other thread. Release contexts before a thread exits.
    pub fn make_current(&self, handle: Option<ContextHandle>) -> crate::Result {
        let thread = thread::current().id();
        let handle = match handle {
            Some(handle) => handle,
            None => {
                if let Some(previous) = self.release(thread) {
                    log::trace!("Released context {}", previous);
                    binding::unbind();
                }
                return Ok(());
            }
        };

        // claim the context so no other thread can take it while the driver switches
        let driver = {
            let mut handles = self.handles.lock();
            let context = handles.context(handle)?;
            match context.owner {
                Some(owner) if owner == thread => return Ok(()),
                Some(_) => return Err(Error::Busy(handle)),
                None => {}
            }
            context.owner = Some(thread);
            context.driver.clone()
        };

        if let Err(e) = driver.make_current() {
            self.handles.lock().disown(handle, thread);
            return Err(e);
        }

        let table = {
            let mut handles = self.handles.lock();
            let table = handles.context(handle)?.table.clone();
            // the previous context is only disowned, the driver switch already replaced it
            if let Some(previous) = handles.current.insert(thread, handle) {
                if previous != handle {
                    handles.disown(previous, thread);
                }
            }
            table
        };
        binding::bind(table);

        log::trace!("Context {} is now current", handle);
        Ok(())
    }

    /// Release the context that is current on `thread` through its driver.
    fn release(&self, thread: ThreadId) -> Option<ContextHandle> {
        let (handle, driver) = {
            let mut handles = self.handles.lock();
            let handle = handles.current.remove(&thread)?;
            let driver = handles.context(handle).ok().map(|c| c.driver.clone());
            (handle, driver)
        };

        if let Some(driver) = driver {
            if let Err(e) = driver.unmake_current() {
                log::warn!("Failed to release context {}: {}", handle, e);
            }
            self.handles.lock().disown(handle, thread);
        }
        Some(handle)
    }

    /// Delete a context.
    ///
    /// A context that is current on the calling thread is released first; one that is current
    /// on another thread cannot be deleted.
    pub fn delete_context(&self, handle: ContextHandle) -> crate::Result {
        let thread = thread::current().id();

        let owner = self.handles.lock().context(handle)?.owner;
        match owner {
            Some(owner) if owner != thread => return Err(Error::Busy(handle)),
            Some(_) => {
                self.release(thread);
                binding::unbind();
            }
            None => {}
        }

        let context = {
            let mut handles = self.handles.lock();
            // someone may have picked it up while it was being released
            match handles.context(handle)?.owner {
                Some(owner) if owner != thread => return Err(Error::Busy(handle)),
                _ => {}
            }
            handles.free(handle)
        };

        if let Some(context) = context {
            log::debug!("Deleted context {} of \"{}\"", handle, context.driver.name());
        }
        Ok(())
    }

    /// Get the context that is current on the calling thread.
    #[inline]
    pub fn current_context(&self) -> Option<ContextHandle> {
        self.handles
            .lock()
            .current
            .get(&thread::current().id())
            .copied()
    }

    /// Get the driver behind a context.
    #[inline]
    pub fn driver(&self, handle: ContextHandle) -> crate::Result<Arc<dyn GlDriver>> {
        Ok(self.handles.lock().context(handle)?.driver.clone())
    }

    /// Get the dispatch table of a context.
    #[inline]
    pub fn table(&self, handle: ContextHandle) -> crate::Result<Arc<DispatchTable>> {
        Ok(self.handles.lock().context(handle)?.table.clone())
    }

    /// Get the extensions of a context's driver, minus the disabled ones.
    pub fn available_extensions(&self, handle: ContextHandle) -> crate::Result<String> {
        let driver = self.driver(handle)?;
        Ok(filter_extensions(driver.extensions(), &self.config).join(" "))
    }

    /// Resolve an extension entry point for the calling thread's current context.
    pub fn get_proc_address(&self, name: &str) -> Option<Proc> {
        let handle = match self.current_context() {
            Some(handle) => handle,
            None => {
                log::warn!("No active context while resolving {}", name);
                return None;
            }
        };

        let table = self.table(handle).ok()?;
        resolve(&registry::global(), &table, name)
    }
}

impl Default for ContextManager {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ContextManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let handles = self.handles.lock();
        f.debug_struct("ContextManager")
            .field(
                "live",
                &handles.entries.iter().filter(|e| e.context.is_some()).count(),
            )
            .field("current", &handles.current.len())
            .finish()
    }
}

static CONTEXTS: LazyLock<ContextManager> = LazyLock::new(ContextManager::new);

/// Get the process-wide context manager.
#[inline]
pub fn contexts() -> &'static ContextManager {
    &CONTEXTS
}
