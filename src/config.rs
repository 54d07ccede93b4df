// MIT/Apache2 License

use std::{env, sync::LazyLock};

/// The environment variable holding the space separated list of disabled extensions.
pub const DISABLED_EXTENSIONS_VAR: &str = "GLDISPATCH_DISABLED_EXTENSIONS";

/// Settings that affect how drivers are attached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Extensions that are hidden from every driver, separated by spaces.
    pub disabled_extensions: String,
}

impl Config {
    /// Build the configuration from the environment.
    pub fn from_env() -> Self {
        let disabled_extensions = env::var(DISABLED_EXTENSIONS_VAR).unwrap_or_default();
        if !disabled_extensions.is_empty() {
            log::debug!("Disabled extensions: {}", disabled_extensions);
        }

        Self {
            disabled_extensions,
        }
    }

    #[inline]
    pub fn with_disabled_extensions(mut self, disabled: impl Into<String>) -> Self {
        self.disabled_extensions = disabled.into();
        self
    }

    /// Tell whether `ext` has been disabled.
    #[inline]
    pub fn is_disabled(&self, ext: &str) -> bool {
        crate::has_extension(&self.disabled_extensions, ext)
    }
}

static GLOBAL: LazyLock<Config> = LazyLock::new(Config::from_env);

/// Get the process-wide configuration, read from the environment on first use.
#[inline]
pub fn global() -> &'static Config {
    &GLOBAL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_tokens_match_exactly() {
        let config = Config::default()
            .with_disabled_extensions("GL_ARB_instanced_arrays  WGL_EXT_swap_control");
        assert!(config.is_disabled("GL_ARB_instanced_arrays"));
        assert!(config.is_disabled("WGL_EXT_swap_control"));
        assert!(!config.is_disabled("GL_ARB_instanced"));
        assert!(!config.is_disabled(""));
        assert!(!Config::default().is_disabled("GL_ARB_instanced_arrays"));
    }
}
