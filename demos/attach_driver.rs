// MIT/Apache2 License

use gldispatch::{api, contexts, gl::types::*, GlDriver, GlFuncs, Result};
use std::sync::{
    atomic::{AtomicU32, Ordering},
    Arc,
};

/// A driver that only knows how to clear.
#[derive(Default)]
struct ClearOnly {
    clears: AtomicU32,
}

impl GlFuncs for ClearOnly {
    fn glClear(&self, mask: GLbitfield) {
        log::info!("glClear({:#x})", mask);
        self.clears.fetch_add(1, Ordering::SeqCst);
    }

    fn glGetError(&self) -> GLenum {
        GL_NO_ERROR
    }
}

impl GlDriver for ClearOnly {
    fn name(&self) -> &str {
        "clear-only"
    }

    fn provides(&self, name: &str) -> bool {
        matches!(name, "glClear" | "glGetError")
    }

    fn version(&self) -> &str {
        "1.1 clear-only"
    }
}

fn main() -> Result {
    env_logger::init();

    println!("before attaching: glGetError() = {:#x}", api::glGetError());

    let driver = Arc::new(ClearOnly::default());
    let context = contexts().create_context(driver.clone())?;
    contexts().make_current(Some(context))?;

    api::glClear(GL_COLOR_BUFFER_BIT | GL_DEPTH_BUFFER_BIT);
    println!("while current:    glGetError() = {:#x}", api::glGetError());
    println!("                  glGetString() is null: {}", api::glGetString(GL_VERSION).is_null());

    match contexts().get_proc_address("glBindBuffer") {
        Some(_) => println!("glBindBuffer resolved"),
        None => println!("glBindBuffer is not available on {}", context),
    }

    contexts().make_current(None)?;
    contexts().delete_context(context)?;

    println!("after detaching:  glGetError() = {:#x}", api::glGetError());
    println!("clears routed to the driver: {}", driver.clears.load(Ordering::SeqCst));
    Ok(())
}
