//! Backend adapters.
//!
//! Every FFT engine the facade knows about is a variant of the closed
//! [`Implementation`] enum. A variant describes its capabilities (which sizes,
//! which native precisions) and builds a size-bound [`RealTransform`] handle
//! on request. Only `cross` (behind the `cross` feature) and the reference
//! `dft` carry a kernel in this crate; the remaining variants are known names
//! that are never compiled in.

use alloc::boxed::Box;

use crate::error::FftError;
use crate::num::{Float, Precision, Precisions};
use crate::precision::Emulate;

#[cfg(feature = "cross")]
pub mod cross;
pub mod dft;

/// A real-to-complex transform bound to one size and one precision.
///
/// Callers pass slices of exactly the transform extents: `size` time-domain
/// samples and `size / 2 + 1` bins per spectral half. Implementations must
/// write exactly zero into `im[0]` and, for even sizes, `im[size / 2]`, and
/// must ignore the stored imaginary value in those two bins on inverse.
/// Neither direction is scaled.
pub trait RealTransform<T: Float>: Send {
    fn size(&self) -> usize;
    fn forward(&mut self, input: &[T], re: &mut [T], im: &mut [T]) -> Result<(), FftError>;
    fn inverse(&mut self, re: &[T], im: &[T], output: &mut [T]) -> Result<(), FftError>;
}

/// Known FFT implementations.
///
/// Declaration order is the auto-selection priority: native vendor libraries
/// first, portable libraries next, the built-in kernels last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Implementation {
    Ipp,
    Vdsp,
    Fftw,
    Sfft,
    OpenMax,
    MediaLib,
    KissFft,
    Cross,
    Dft,
}

impl Implementation {
    /// All variants in priority order. `Dft` is always last.
    pub const PRIORITY: [Implementation; 9] = [
        Implementation::Ipp,
        Implementation::Vdsp,
        Implementation::Fftw,
        Implementation::Sfft,
        Implementation::OpenMax,
        Implementation::MediaLib,
        Implementation::KissFft,
        Implementation::Cross,
        Implementation::Dft,
    ];

    /// Stable identifier used by the registry and the environment override.
    pub fn name(self) -> &'static str {
        match self {
            Implementation::Ipp => "ipp",
            Implementation::Vdsp => "vdsp",
            Implementation::Fftw => "fftw",
            Implementation::Sfft => "sfft",
            Implementation::OpenMax => "openmax",
            Implementation::MediaLib => "medialib",
            Implementation::KissFft => "kissfft",
            Implementation::Cross => "cross",
            Implementation::Dft => "dft",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::PRIORITY.iter().copied().find(|imp| imp.name() == name)
    }

    pub(crate) fn from_index(index: u8) -> Option<Self> {
        Self::PRIORITY.get(index as usize).copied()
    }

    pub(crate) fn index(self) -> u8 {
        self as u8
    }

    pub fn is_compiled_in(self) -> bool {
        match self {
            Implementation::Dft => true,
            Implementation::Cross => cfg!(feature = "cross"),
            _ => false,
        }
    }

    /// Whether the kernel can transform `size` points. Always false for
    /// variants that are not compiled in.
    pub fn supports_size(self, size: usize) -> bool {
        match self {
            Implementation::Dft => size >= 1,
            #[cfg(feature = "cross")]
            Implementation::Cross => cross::supports_size(size),
            _ => false,
        }
    }

    /// Precisions the kernel computes natively.
    pub fn precisions(self) -> Precisions {
        match self {
            Implementation::Dft => Precisions::BOTH,
            #[cfg(feature = "cross")]
            Implementation::Cross => Precisions::DOUBLE,
            _ => Precisions::NONE,
        }
    }

    /// Whether a handle for `(size, precision)` can be built, natively or
    /// through the precision emulator.
    pub fn supports(self, size: usize, precision: Precision) -> bool {
        let native = self.precisions();
        self.is_compiled_in()
            && self.supports_size(size)
            && (native.contains(precision) || native.contains(precision.other()))
    }

    /// Build a transform handle for `size` points in precision `T`.
    ///
    /// Precisions the kernel lacks natively are wrapped in
    /// [`crate::precision::Emulated`].
    pub fn plan<T: Emulate>(self, size: usize) -> Result<Box<dyn RealTransform<T>>, FftError> {
        if !self.supports(size, T::PRECISION) {
            return Err(FftError::InvalidImplementation);
        }
        match self {
            Implementation::Dft => Ok(Box::new(dft::Dft::<T>::new(size)?)),
            #[cfg(feature = "cross")]
            Implementation::Cross => T::via_double(Box::new(cross::Cross::new(size)?)),
            _ => Err(FftError::InvalidImplementation),
        }
    }
}

impl core::fmt::Display for Implementation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
