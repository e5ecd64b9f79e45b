//! Implementation registry.
//!
//! Holds the process-wide default implementation. The default is chosen
//! lazily on first query (environment override first, then priority order)
//! and can be replaced at any time. It is a single atomic byte: concurrent
//! writers race and the last store wins, so callers that need ordering
//! between changing the default and building engines elsewhere must
//! serialize that themselves.

use core::sync::atomic::{AtomicU8, Ordering};

use hashbrown::HashSet;

use crate::backend::Implementation;
use crate::config;

const UNSET: u8 = u8::MAX;

pub struct Registry {
    current: AtomicU8,
}

static GLOBAL: Registry = Registry::new();

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// A registry with no default chosen yet.
    pub const fn new() -> Self {
        Self {
            current: AtomicU8::new(UNSET),
        }
    }

    /// The process-wide registry used by [`crate::Fft`].
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    /// Compiled-in implementations in priority order. Never empty, and
    /// always ends with [`Implementation::Dft`].
    pub fn compiled_in() -> impl Iterator<Item = Implementation> {
        Implementation::PRIORITY
            .into_iter()
            .filter(|imp| imp.is_compiled_in())
    }

    /// Names of the compiled-in implementations.
    pub fn implementations(&self) -> HashSet<&'static str> {
        Self::compiled_in().map(Implementation::name).collect()
    }

    /// The current default, choosing one on first use.
    pub fn default_implementation(&self) -> Implementation {
        if let Some(imp) = Implementation::from_index(self.current.load(Ordering::Acquire)) {
            return imp;
        }
        let picked = Self::pick(config::env().implementation);
        match self.current.compare_exchange(
            UNSET,
            picked.index(),
            Ordering::AcqRel,
            Ordering::Acquire,
        ) {
            Ok(_) => {
                log::debug!("default FFT implementation: {}", picked);
                picked
            }
            // Someone else chose first.
            Err(existing) => Implementation::from_index(existing).unwrap_or(picked),
        }
    }

    /// Automatic choice: `preferred` if it is compiled in, else the
    /// highest-priority compiled-in implementation.
    pub fn pick(preferred: Option<Implementation>) -> Implementation {
        if let Some(imp) = preferred.filter(|imp| imp.is_compiled_in()) {
            return imp;
        }
        if let Some(imp) = preferred {
            log::warn!("preferred FFT implementation {} is not compiled in", imp);
        }
        Self::compiled_in().next().unwrap_or(Implementation::Dft)
    }

    /// Replace the default by name.
    ///
    /// Names that are unknown or not compiled in leave the current default
    /// untouched; this is not an error. The empty name returns to automatic
    /// selection.
    pub fn set_default_implementation(&self, name: &str) {
        if name.is_empty() {
            self.reset();
            return;
        }
        match Implementation::from_name(name).filter(|imp| imp.is_compiled_in()) {
            Some(imp) => {
                log::debug!("default FFT implementation set to {}", imp);
                self.current.store(imp.index(), Ordering::Release);
            }
            None => log::warn!(
                "requested FFT implementation \"{}\" is not compiled in; keeping {}",
                name,
                self.default_implementation()
            ),
        }
    }

    /// Forget the chosen default; the next query picks again.
    pub fn reset(&self) {
        self.current.store(UNSET, Ordering::Release);
    }
}
