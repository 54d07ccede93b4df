// MIT/Apache2 License

//! Which dispatch table is active for which thread.

use crate::{null_table, DispatchTable};
use arc_swap::ArcSwapOption;
use std::{fmt, sync::Arc};

/// The active-table slot of one execution context.
///
/// A binding starts out unbound, which serves the null table. Rebinding is a single atomic
/// pointer swap, so a call racing with `bind` sees either the old table or the new one in full.
pub struct ContextBinding {
    active: ArcSwapOption<DispatchTable>,
}

impl ContextBinding {
    /// Create a new, unbound binding.
    #[inline]
    pub fn new() -> Self {
        Self {
            active: ArcSwapOption::empty(),
        }
    }

    /// Make `table` the active table, returning the one it replaces.
    #[inline]
    pub fn bind(&self, table: Arc<DispatchTable>) -> Option<Arc<DispatchTable>> {
        log::trace!("Binding table \"{}\"", table.label());
        self.active.swap(Some(table))
    }

    /// Get the active table.
    #[inline]
    pub fn current(&self) -> Arc<DispatchTable> {
        self.active
            .load_full()
            .unwrap_or_else(|| null_table().clone())
    }

    /// Run a closure against the active table without touching its reference count.
    #[inline]
    pub fn with_current<R>(&self, f: impl FnOnce(&DispatchTable) -> R) -> R {
        let guard = self.active.load();
        match &*guard {
            Some(table) => f(table.as_ref()),
            None => f(null_table().as_ref()),
        }
    }

    /// Tell whether `bind` has ever been called on this binding.
    #[inline]
    pub fn is_bound(&self) -> bool {
        self.active.load().is_some()
    }
}

impl Default for ContextBinding {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ContextBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.active.load();
        f.debug_tuple("ContextBinding")
            .field(&(*guard).as_ref().map(|table| table.label()))
            .finish()
    }
}

thread_local! {
    static THREAD_BINDING: Arc<ContextBinding> = Arc::new(ContextBinding::new());
}

/// Get the binding of the calling thread.
///
/// Returns `None` while the thread is being torn down.
#[inline]
fn thread_binding() -> Option<Arc<ContextBinding>> {
    THREAD_BINDING.try_with(Arc::clone).ok()
}

/// Get a handle to the calling thread's binding.
///
/// The handle stays valid after the thread exits, but nothing reads it anymore.
#[inline]
pub fn handle() -> Arc<ContextBinding> {
    thread_binding().unwrap_or_else(|| Arc::new(ContextBinding::new()))
}

/// Make `table` the active table of the calling thread.
#[inline]
pub fn bind(table: Arc<DispatchTable>) -> Option<Arc<DispatchTable>> {
    match thread_binding() {
        Some(binding) => binding.bind(table),
        None => None,
    }
}

/// Rebind the calling thread to the null table.
#[inline]
pub fn unbind() -> Option<Arc<DispatchTable>> {
    bind(null_table().clone())
}

/// Get the active table of the calling thread.
#[inline]
pub fn current() -> Arc<DispatchTable> {
    match thread_binding() {
        Some(binding) => binding.current(),
        None => null_table().clone(),
    }
}

/// Run a closure against the calling thread's active table.
///
/// This is the lookup every forwarding thunk goes through.
#[inline]
pub fn with_current<R>(f: impl FnOnce(&DispatchTable) -> R) -> R {
    match thread_binding() {
        Some(binding) => binding.with_current(f),
        None => f(null_table().as_ref()),
    }
}

/// Tell whether the calling thread has ever been bound.
#[inline]
pub fn is_bound() -> bool {
    thread_binding().map_or(false, |binding| binding.is_bound())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{gl::types::*, GlFuncs, Overrides, Slot};
    use std::{sync::Barrier, thread};

    struct Cleared;

    impl GlFuncs for Cleared {
        fn glGetError(&self) -> GLenum {
            GL_NO_ERROR
        }
    }

    fn cleared_table() -> Arc<DispatchTable> {
        Arc::new(
            null_table()
                .derive(&Overrides::new().with(Slot::glGetError, Arc::new(Cleared)))
                .with_label("cleared"),
        )
    }

    #[test]
    fn unbound_serves_null() {
        let binding = ContextBinding::new();
        assert!(!binding.is_bound());
        assert!(Arc::ptr_eq(&binding.current(), null_table()));
        binding.with_current(|table| {
            assert_eq!(table.get(Slot::glGetError).glGetError(), GL_INVALID_OPERATION)
        });
    }

    #[test]
    fn bind_swaps_whole_table() {
        let binding = ContextBinding::new();
        let table = cleared_table();

        assert!(binding.bind(table.clone()).is_none());
        assert!(binding.is_bound());
        assert!(Arc::ptr_eq(&binding.current(), &table));

        let previous = binding.bind(null_table().clone());
        assert!(previous.map_or(false, |p| Arc::ptr_eq(&p, &table)));
        assert!(binding.is_bound());
        binding.with_current(|table| assert_eq!(table.label(), "null"));
    }

    #[test]
    fn bindings_are_per_thread() {
        let table = cleared_table();
        let barrier = Arc::new(Barrier::new(2));

        let other = {
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                // the main thread has bound by now
                barrier.wait();
                (is_bound(), current().label().to_string())
            })
        };

        bind(table.clone());
        barrier.wait();
        barrier.wait();

        let (other_bound, other_label) = other.join().unwrap();
        assert!(!other_bound);
        assert_eq!(other_label, "null");
        assert!(Arc::ptr_eq(&current(), &table));
        unbind();
        assert_eq!(with_current(|table| table.label().to_string()), "null");
    }

    #[test]
    fn handle_observes_thread_binding() {
        let handle = thread::spawn(|| {
            let handle = handle();
            bind(cleared_table());
            handle
        })
        .join()
        .unwrap();

        assert_eq!(handle.current().label(), "cleared");
    }
}
