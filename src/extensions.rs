// MIT/Apache2 License

//! Extension strings, version gating and name resolution.

use crate::{Config, DispatchTable, ExtensionRegistry, Proc};

/// Names that stand in for each other when one of them is not implemented.
const ALTERNATIVES: &[(&str, &str)] = &[
    ("glCopyTexSubImage3DEXT", "glCopyTexSubImage3D"),
    ("glVertexAttribDivisor", "glVertexAttribDivisorARB"),
];

/// Tell whether `ext` is one of the tokens of the space separated `list`.
#[inline]
pub fn has_extension(list: &str, ext: &str) -> bool {
    !ext.is_empty() && list.split_ascii_whitespace().any(|token| token == ext)
}

/// Drop every extension the configuration disables.
pub fn filter_extensions<'a>(list: &'a str, config: &Config) -> Vec<&'a str> {
    list.split_ascii_whitespace()
        .filter(|ext| {
            if config.is_disabled(ext) {
                log::trace!("-- {}", ext);
                false
            } else {
                log::trace!("++ {}", ext);
                true
            }
        })
        .collect()
}

/// Get the major and minor numbers out of a GL version string.
///
/// Anything after the minor number, like a release number or a vendor string, is ignored.
pub fn parse_version(version: &str) -> Option<(u32, u32)> {
    let numbers = version.split_ascii_whitespace().next()?;
    let mut parts = numbers.split('.');
    let major = parts.next()?.parse().ok()?;
    let minor = parts.next()?.parse().ok()?;
    Some((major, minor))
}

/// Tell whether any token of `requires` is satisfied.
///
/// A token is satisfied if it is in `available`, or if it reads `GL_VERSION_x_y` and the
/// driver reports at least version x.y. No requirement at all is always satisfied.
pub fn is_extension_supported(requires: &str, available: &str, version: &str) -> bool {
    let mut tokens = requires.split_ascii_whitespace().peekable();
    if tokens.peek().is_none() {
        return true;
    }

    let driver_version = parse_version(version);
    tokens.any(|token| match token.strip_prefix("GL_VERSION_") {
        Some(wanted) => match (version_token(wanted), driver_version) {
            (Some(wanted), Some(have)) => have >= wanted,
            _ => false,
        },
        None => has_extension(available, token),
    })
}

#[inline]
fn version_token(token: &str) -> Option<(u32, u32)> {
    let mut parts = token.split('_');
    let major = parts.next()?.parse().ok()?;
    let minor = parts.next()?.parse().ok()?;
    Some((major, minor))
}

/// Resolve an extension name against a registry and the table it will be called through.
///
/// An entry whose slot is still served by the null backend in `table` is not handed out; its
/// known alternative is tried instead.
pub fn resolve(registry: &ExtensionRegistry, table: &DispatchTable, name: &str) -> Option<Proc> {
    resolve_inner(registry, table, name, ALTERNATIVES.len())
}

fn resolve_inner(
    registry: &ExtensionRegistry,
    table: &DispatchTable,
    name: &str,
    depth: usize,
) -> Option<Proc> {
    let entry = match registry.entry(name) {
        Some(entry) => entry,
        None => {
            log::warn!("Unknown extension {}", name);
            return None;
        }
    };

    match entry.slot() {
        Some(slot) if table.is_null(slot) => {
            let alternative = ALTERNATIVES
                .iter()
                .find(|(from, _)| *from == name)
                .map(|(_, to)| *to);

            match alternative {
                Some(alternative) if depth > 0 => {
                    log::debug!("{} not supported, trying {}", name, alternative);
                    resolve_inner(registry, table, alternative, depth - 1)
                }
                _ => {
                    log::warn!(
                        "Extension {} not supported by \"{}\"",
                        name,
                        table.label()
                    );
                    None
                }
            }
        }
        _ => Some(entry.proc().clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{gl::types::*, null_table, GlFuncs, Overrides, Slot};
    use std::sync::Arc;

    #[test]
    fn extension_tokens() {
        let list = "GL_ARB_multitexture GL_ARB_vertex_buffer_object";
        assert!(has_extension(list, "GL_ARB_multitexture"));
        assert!(!has_extension(list, "GL_ARB_vertex"));
        assert!(!has_extension(list, ""));
        assert!(!has_extension("", "GL_ARB_multitexture"));
    }

    #[test]
    fn filter_drops_disabled() {
        let config = Config::default().with_disabled_extensions("GL_EXT_copy_texture");
        assert_eq!(
            filter_extensions("GL_ARB_multitexture GL_EXT_copy_texture GL_ARB_sync", &config),
            vec!["GL_ARB_multitexture", "GL_ARB_sync"]
        );
        assert!(filter_extensions("", &config).is_empty());
    }

    #[test]
    fn versions() {
        assert_eq!(parse_version("4.6.0 NVIDIA 535.54"), Some((4, 6)));
        assert_eq!(parse_version("2.1"), Some((2, 1)));
        assert_eq!(parse_version("3"), None);
        assert_eq!(parse_version(""), None);
        assert_eq!(parse_version("OpenGL ES 3.2"), None);
    }

    #[test]
    fn support_checks() {
        assert!(is_extension_supported("", "", ""));
        assert!(is_extension_supported("GL_VERSION_1_5", "", "2.1"));
        assert!(is_extension_supported("GL_VERSION_1_5", "", "1.5.0"));
        assert!(!is_extension_supported("GL_VERSION_3_0", "", "2.1"));
        assert!(!is_extension_supported("GL_VERSION_1_5", "", ""));
        assert!(is_extension_supported(
            "GL_VERSION_3_0 GL_ARB_uniform_buffer_object",
            "GL_ARB_uniform_buffer_object",
            "2.1"
        ));
        assert!(!is_extension_supported("GL_ARB_sync", "GL_ARB_sync_extra", "4.6"));
    }

    struct ArbDivisor;

    impl GlFuncs for ArbDivisor {
        fn glVertexAttribDivisorARB(&self, _index: GLuint, _divisor: GLuint) {}
    }

    #[test]
    fn resolution_uses_alternatives() {
        let registry = ExtensionRegistry::with_builtins();
        let table = null_table().derive(
            &Overrides::new().with(Slot::glVertexAttribDivisorARB, Arc::new(ArbDivisor)),
        );

        let arb = registry.lookup("glVertexAttribDivisorARB").unwrap();
        let resolved = resolve(&registry, &table, "glVertexAttribDivisor").unwrap();
        assert!(resolved.ptr_eq(&arb));

        assert!(resolve(&registry, &table, "glCopyTexSubImage3DEXT").is_none());
        assert!(resolve(&registry, &table, "glBindBuffer").is_none());
        assert!(resolve(&registry, &table, "glNoSuchThing").is_none());
    }

    #[test]
    fn unslotted_entries_always_resolve() {
        let registry = ExtensionRegistry::new();
        registry
            .register("glLateEXT", Proc::new(5u32), None)
            .unwrap();
        let resolved = resolve(&registry, null_table(), "glLateEXT");
        assert_eq!(resolved.and_then(|p| p.cast::<u32>()), Some(5));
    }
}
