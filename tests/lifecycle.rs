// MIT/Apache2 License

use gldispatch::{registry, Proc};
use std::sync::Arc;

// the global registry is process-wide state, so the whole lifecycle runs in one test
#[test]
fn registry_lifecycle() {
    let _ = env_logger::builder().is_test(true).try_init();

    let first = registry::init();
    assert!(Arc::ptr_eq(&first, &registry::global()));
    let builtins = first.len();
    assert!(first.contains("glBindBuffer"));

    first
        .register("glLateRegisteredEXT", Proc::new(42u32), None)
        .unwrap();
    assert_eq!(
        registry::global()
            .lookup("glLateRegisteredEXT")
            .and_then(|p| p.cast::<u32>()),
        Some(42)
    );

    registry::shutdown();
    // handles obtained before teardown stay usable
    assert!(first.lookup("glLateRegisteredEXT").is_some());
    registry::shutdown();

    let second = registry::global();
    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(second.len(), builtins);
    assert!(second.lookup("glLateRegisteredEXT").is_none());
    assert!(Arc::ptr_eq(&second, &registry::init()));
}
