// MIT/Apache2 License

use gldispatch::{
    api, attach, binding, contexts, gl::types::*, null_table, ContextBinding, Config,
    ExtensionRegistry, GlDriver, GlFuncs, Slot,
};
use std::sync::{
    atomic::{AtomicU32, Ordering},
    Arc,
};

fn setup_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Default)]
struct Minimal {
    clears: AtomicU32,
}

impl GlFuncs for Minimal {
    fn glClear(&self, _mask: GLbitfield) {
        self.clears.fetch_add(1, Ordering::SeqCst);
    }

    fn glGetError(&self) -> GLenum {
        GL_NO_ERROR
    }
}

impl GlDriver for Minimal {
    fn name(&self) -> &str {
        "minimal"
    }

    fn provides(&self, name: &str) -> bool {
        name == "glClear" || name == "glGetError"
    }
}

#[test]
fn attach_and_detach_through_binding() {
    setup_logger();

    // nothing attached: every call is inert
    assert_eq!(api::glGetError(), GL_INVALID_OPERATION);
    assert!(api::glGetString(GL_VERSION).is_null());
    assert_eq!(api::glIsEnabled(0x0B71), GL_FALSE);
    api::glClear(GL_COLOR_BUFFER_BIT);

    let driver = Arc::new(Minimal::default());
    let table = Arc::new(attach(
        &driver,
        &ExtensionRegistry::with_builtins(),
        &Config::default(),
    ));
    assert_eq!(table.bound_slots().collect::<Vec<_>>(), vec![Slot::glClear, Slot::glGetError]);

    binding::bind(table);
    api::glClear(GL_COLOR_BUFFER_BIT);
    assert_eq!(driver.clears.load(Ordering::SeqCst), 1);
    assert_eq!(api::glGetError(), GL_NO_ERROR);
    // everything else still behaves as null
    assert_eq!(api::glIsEnabled(0x0B71), GL_FALSE);
    assert!(api::glGetString(GL_VERSION).is_null());

    binding::unbind();
    api::glClear(GL_COLOR_BUFFER_BIT);
    assert_eq!(driver.clears.load(Ordering::SeqCst), 1);
    assert_eq!(api::glGetError(), GL_INVALID_OPERATION);
}

#[test]
fn attach_and_detach_through_contexts() {
    setup_logger();

    let driver = Arc::new(Minimal::default());
    let handle = contexts().create_context(driver.clone()).unwrap();

    api::glClear(GL_COLOR_BUFFER_BIT);
    assert_eq!(driver.clears.load(Ordering::SeqCst), 0);

    contexts().make_current(Some(handle)).unwrap();
    api::glClear(GL_COLOR_BUFFER_BIT);
    api::glClear(GL_DEPTH_BUFFER_BIT);
    assert_eq!(driver.clears.load(Ordering::SeqCst), 2);
    assert_eq!(api::glGetError(), GL_NO_ERROR);

    contexts().make_current(None).unwrap();
    api::glClear(GL_COLOR_BUFFER_BIT);
    assert_eq!(driver.clears.load(Ordering::SeqCst), 2);
    assert_eq!(api::glGetError(), GL_INVALID_OPERATION);

    contexts().delete_context(handle).unwrap();
}

#[test]
fn explicit_binding_handles() {
    setup_logger();

    let binding = ContextBinding::new();
    let driver = Arc::new(Minimal::default());
    binding.bind(Arc::new(attach(
        &driver,
        &ExtensionRegistry::new(),
        &Config::default(),
    )));

    binding.with_current(|table| table.get(Slot::glClear).glClear(GL_STENCIL_BUFFER_BIT));
    assert_eq!(driver.clears.load(Ordering::SeqCst), 1);

    // explicit handles do not leak into the calling thread
    assert!(Arc::ptr_eq(&binding::current(), null_table()));
    assert!(!binding.current().is_null(Slot::glClear));
}
