//! Environment configuration.
//!
//! Read once per process and cached. Without the `std` feature there is no
//! environment and the defaults apply.

use crate::backend::Implementation;

/// Preferred default implementation, used when none was set explicitly.
pub const IMPLEMENTATION_ENV: &str = "POLYFFT_IMPLEMENTATION";
/// Minimum debug level applied to every engine.
pub const DEBUG_LEVEL_ENV: &str = "POLYFFT_DEBUG_LEVEL";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnvConfig {
    pub implementation: Option<Implementation>,
    pub debug_level: u32,
}

impl EnvConfig {
    pub const EMPTY: EnvConfig = EnvConfig {
        implementation: None,
        debug_level: 0,
    };

    /// Build a configuration from a variable lookup. Unparseable values are
    /// ignored with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<alloc::string::String>,
    {
        let implementation = lookup(IMPLEMENTATION_ENV).and_then(|name| {
            let name = name.trim();
            let parsed = Implementation::from_name(name);
            if parsed.is_none() && !name.is_empty() {
                log::warn!("{}: unknown implementation \"{}\"", IMPLEMENTATION_ENV, name);
            }
            parsed
        });
        let debug_level = lookup(DEBUG_LEVEL_ENV)
            .and_then(|v| match v.trim().parse::<u32>() {
                Ok(level) => Some(level),
                Err(_) => {
                    log::warn!("{}: expected an integer, got \"{}\"", DEBUG_LEVEL_ENV, v);
                    None
                }
            })
            .unwrap_or(0);
        Self {
            implementation,
            debug_level,
        }
    }
}

#[cfg(feature = "std")]
pub fn env() -> &'static EnvConfig {
    static ENV: std::sync::OnceLock<EnvConfig> = std::sync::OnceLock::new();
    ENV.get_or_init(|| EnvConfig::from_lookup(|key| std::env::var(key).ok()))
}

#[cfg(not(feature = "std"))]
pub fn env() -> &'static EnvConfig {
    &EnvConfig::EMPTY
}
