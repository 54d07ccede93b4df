// MIT/Apache2 License

use super::{types::*, GlFuncs, Slot};
use crate::{
    filter_extensions, is_extension_supported, null_backend, null_table, Callable, Config,
    DispatchTable, ExtensionRegistry, Overrides,
};
use std::{ffi::CString, ptr, sync::Arc};

/// A real implementation of the entry point surface.
///
/// The driver implements the [`GlFuncs`] methods it supports and reports them through
/// [`provides`](GlDriver::provides); anything it does not report keeps the null behavior.
pub trait GlDriver: GlFuncs {
    /// The name of this driver, used to label its tables.
    fn name(&self) -> &str;
    /// Tell whether this driver implements the named entry point.
    fn provides(&self, name: &str) -> bool;

    /// The GL version string of this driver.
    #[inline]
    fn version(&self) -> &str {
        ""
    }

    /// The space separated list of extensions this driver supports.
    #[inline]
    fn extensions(&self) -> &str {
        ""
    }

    /// Make this driver's context current on the calling thread.
    #[inline]
    fn make_current(&self) -> crate::Result {
        Ok(())
    }

    /// Release this driver's context from the calling thread.
    #[inline]
    fn unmake_current(&self) -> crate::Result {
        Ok(())
    }
}

/// Build the dispatch table for a driver.
///
/// Context and core slots are taken from the driver when it provides them. Extension slots are
/// taken from the registry's slotted entries, and only when the driver provides the entry and
/// one of its required extensions survives `config`.
pub fn attach<D: GlDriver + 'static>(
    driver: &Arc<D>,
    registry: &ExtensionRegistry,
    config: &Config,
) -> DispatchTable {
    let callable: Callable = driver.clone();
    let mut overrides = Overrides::new();

    let fixed = Slot::CONTEXT_COUNT + Slot::CORE_COUNT;
    for slot in Slot::ALL[..fixed].iter().copied() {
        if driver.provides(slot.name()) {
            overrides.insert(slot, callable.clone());
        }
    }

    let available = filter_extensions(driver.extensions(), config).join(" ");
    let version = driver.version();
    for entry in registry.slotted() {
        let slot = match entry.slot() {
            Some(slot) => slot,
            None => continue,
        };

        if !driver.provides(entry.name()) {
            continue;
        }

        if is_extension_supported(entry.required_extensions(), &available, version) {
            overrides.insert(slot, callable.clone());
        } else {
            log::debug!(
                "{} provided by \"{}\" but {} is not supported",
                entry.name(),
                driver.name(),
                entry.required_extensions()
            );
        }
    }

    if !config.disabled_extensions.trim().is_empty() {
        ExtensionFilter::install(&mut overrides, &available);
    }

    log::debug!(
        "Attached \"{}\" ({}) with {} entry points",
        driver.name(),
        version,
        overrides.len()
    );

    null_table()
        .derive(&overrides)
        .with_label(driver.name().to_string())
}

/// Hides disabled extensions from the queries that list them.
///
/// Wraps `glGetString`, `glGetStringi` and `glGetIntegerv` of a driver; every other query is
/// passed through unchanged.
struct ExtensionFilter {
    get_string: Callable,
    get_stringi: Callable,
    get_integerv: Callable,
    extensions: CString,
    tokens: Vec<CString>,
}

impl ExtensionFilter {
    /// Wrap whichever of the three query slots the driver fills.
    fn install(overrides: &mut Overrides, available: &str) {
        let slots = [Slot::glGetString, Slot::glGetStringi, Slot::glGetIntegerv];
        if slots.iter().all(|slot| overrides.get(*slot).is_none()) {
            return;
        }

        let inner = |slot| {
            overrides
                .get(slot)
                .cloned()
                .unwrap_or_else(|| null_backend().clone())
        };
        let filter: Callable = Arc::new(ExtensionFilter {
            get_string: inner(Slot::glGetString),
            get_stringi: inner(Slot::glGetStringi),
            get_integerv: inner(Slot::glGetIntegerv),
            extensions: CString::new(available).unwrap_or_default(),
            tokens: available
                .split_ascii_whitespace()
                .filter_map(|ext| CString::new(ext).ok())
                .collect(),
        });

        for slot in slots.iter().copied() {
            if overrides.get(slot).is_some() {
                overrides.insert(slot, filter.clone());
            }
        }
    }
}

impl GlFuncs for ExtensionFilter {
    fn glGetString(&self, name: GLenum) -> *const GLubyte {
        match name {
            GL_EXTENSIONS => self.extensions.as_ptr() as *const GLubyte,
            name => self.get_string.glGetString(name),
        }
    }

    fn glGetStringi(&self, name: GLenum, index: GLuint) -> *const GLubyte {
        match name {
            GL_EXTENSIONS => self
                .tokens
                .get(index as usize)
                .map_or(ptr::null(), |ext| ext.as_ptr() as *const GLubyte),
            name => self.get_stringi.glGetStringi(name, index),
        }
    }

    #[allow(unsafe_code)]
    fn glGetIntegerv(&self, pname: GLenum, data: *mut GLint) {
        match pname {
            GL_NUM_EXTENSIONS if !data.is_null() => {
                // SAFETY: the caller passes storage for at least one value, as for any driver
                unsafe { *data = self.tokens.len() as GLint };
            }
            pname => self.get_integerv.glGetIntegerv(pname, data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{gl::types::*, Region};
    use std::sync::atomic::{AtomicU32, Ordering};

    #[derive(Default)]
    struct Recorder {
        clears: AtomicU32,
        divisors: AtomicU32,
    }

    impl GlFuncs for Recorder {
        fn glClear(&self, _mask: GLbitfield) {
            self.clears.fetch_add(1, Ordering::SeqCst);
        }

        fn glVertexAttribDivisor(&self, _index: GLuint, _divisor: GLuint) {
            self.divisors.fetch_add(1, Ordering::SeqCst);
        }

        fn glVertexAttribDivisorARB(&self, _index: GLuint, _divisor: GLuint) {
            self.divisors.fetch_add(1, Ordering::SeqCst);
        }

        fn wglSwapBuffers(&self, _hdc: HDC) -> BOOL {
            TRUE
        }
    }

    impl GlDriver for Recorder {
        fn name(&self) -> &str {
            "recorder"
        }

        fn provides(&self, name: &str) -> bool {
            matches!(
                name,
                "glClear" | "glVertexAttribDivisor" | "glVertexAttribDivisorARB" | "wglSwapBuffers"
            )
        }

        fn version(&self) -> &str {
            "2.1 Recorder"
        }

        fn extensions(&self) -> &str {
            "GL_ARB_instanced_arrays GL_ARB_multitexture"
        }
    }

    #[test]
    fn provided_entries_are_routed() {
        let driver = Arc::new(Recorder::default());
        let table = attach(&driver, &ExtensionRegistry::with_builtins(), &Config::default());

        assert_eq!(table.label(), "recorder");
        assert!(!table.is_null(Slot::glClear));
        assert!(!table.is_null(Slot::wglSwapBuffers));
        assert!(table.is_null(Slot::glFlush));

        // 2.1 is below GL_VERSION_3_3, the ARB variant is enabled by its extension
        assert!(table.is_null(Slot::glVertexAttribDivisor));
        assert!(!table.is_null(Slot::glVertexAttribDivisorARB));
        assert_eq!(table.bound_in(Region::Extension), 1);

        table.get(Slot::glClear).glClear(GL_COLOR_BUFFER_BIT);
        table.get(Slot::glVertexAttribDivisorARB).glVertexAttribDivisorARB(0, 1);
        assert_eq!(driver.clears.load(Ordering::SeqCst), 1);
        assert_eq!(driver.divisors.load(Ordering::SeqCst), 1);
        assert_eq!(table.get(Slot::wglSwapBuffers).wglSwapBuffers(std::ptr::null_mut()), TRUE);
    }

    #[test]
    fn disabled_extensions_stay_null() {
        let driver = Arc::new(Recorder::default());
        let config = Config::default().with_disabled_extensions("GL_ARB_instanced_arrays");
        let table = attach(&driver, &ExtensionRegistry::with_builtins(), &config);

        assert!(table.is_null(Slot::glVertexAttribDivisorARB));
        assert_eq!(table.bound_in(Region::Extension), 0);
        assert!(!table.is_null(Slot::glClear));
    }

    #[test]
    fn empty_registry_leaves_extensions_null() {
        let driver = Arc::new(Recorder::default());
        let table = attach(&driver, &ExtensionRegistry::new(), &Config::default());
        assert_eq!(table.bound_in(Region::Extension), 0);
        assert_eq!(table.bound_in(Region::Core), 1);
        assert_eq!(table.bound_in(Region::Context), 1);
    }

    #[derive(Default)]
    struct Queries {
        integer_queries: AtomicU32,
    }

    impl GlFuncs for Queries {
        fn glGetString(&self, name: GLenum) -> *const GLubyte {
            match name {
                GL_VERSION => b"3.0 Queries\0".as_ptr(),
                GL_EXTENSIONS => b"GL_ARB_sync GL_EXT_copy_texture GL_ARB_multitexture\0".as_ptr(),
                _ => ptr::null(),
            }
        }

        fn glGetStringi(&self, _name: GLenum, _index: GLuint) -> *const GLubyte {
            b"unfiltered\0".as_ptr()
        }

        fn glGetIntegerv(&self, _pname: GLenum, _data: *mut GLint) {
            self.integer_queries.fetch_add(1, Ordering::SeqCst);
        }
    }

    impl GlDriver for Queries {
        fn name(&self) -> &str {
            "queries"
        }

        fn provides(&self, name: &str) -> bool {
            matches!(name, "glGetString" | "glGetStringi" | "glGetIntegerv")
        }

        fn version(&self) -> &str {
            "3.0 Queries"
        }

        fn extensions(&self) -> &str {
            "GL_ARB_sync GL_EXT_copy_texture GL_ARB_multitexture"
        }
    }

    #[allow(unsafe_code)]
    fn read(string: *const GLubyte) -> Option<String> {
        if string.is_null() {
            return None;
        }
        // SAFETY: every string handed out in these tests is nul-terminated and outlives the call
        let string = unsafe { std::ffi::CStr::from_ptr(string as *const std::os::raw::c_char) };
        Some(string.to_string_lossy().into_owned())
    }

    #[test]
    fn extension_queries_hide_disabled_extensions() {
        let driver = Arc::new(Queries::default());
        let config = Config::default().with_disabled_extensions("GL_EXT_copy_texture");
        let table = attach(&driver, &ExtensionRegistry::with_builtins(), &config);

        let get_string = table.get(Slot::glGetString);
        assert_eq!(
            read(get_string.glGetString(GL_EXTENSIONS)).as_deref(),
            Some("GL_ARB_sync GL_ARB_multitexture")
        );
        assert_eq!(read(get_string.glGetString(GL_VERSION)).as_deref(), Some("3.0 Queries"));

        // disabled extensions are skipped by index
        let get_stringi = table.get(Slot::glGetStringi);
        assert_eq!(read(get_stringi.glGetStringi(GL_EXTENSIONS, 0)).as_deref(), Some("GL_ARB_sync"));
        assert_eq!(
            read(get_stringi.glGetStringi(GL_EXTENSIONS, 1)).as_deref(),
            Some("GL_ARB_multitexture")
        );
        assert_eq!(read(get_stringi.glGetStringi(GL_EXTENSIONS, 2)), None);
        assert_eq!(read(get_stringi.glGetStringi(GL_VERSION, 0)).as_deref(), Some("unfiltered"));

        let mut count: GLint = 0;
        table.get(Slot::glGetIntegerv).glGetIntegerv(GL_NUM_EXTENSIONS, &mut count);
        assert_eq!(count, 2);
        assert_eq!(driver.integer_queries.load(Ordering::SeqCst), 0);
        table.get(Slot::glGetIntegerv).glGetIntegerv(0x0D33, &mut count);
        assert_eq!(driver.integer_queries.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn extension_queries_untouched_without_disabled_extensions() {
        let driver = Arc::new(Queries::default());
        let table = attach(&driver, &ExtensionRegistry::with_builtins(), &Config::default());

        assert_eq!(
            read(table.get(Slot::glGetString).glGetString(GL_EXTENSIONS)).as_deref(),
            Some("GL_ARB_sync GL_EXT_copy_texture GL_ARB_multitexture")
        );
        let mut count: GLint = 0;
        table.get(Slot::glGetIntegerv).glGetIntegerv(GL_NUM_EXTENSIONS, &mut count);
        assert_eq!(driver.integer_queries.load(Ordering::SeqCst), 1);
    }
}
