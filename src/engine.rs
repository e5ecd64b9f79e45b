//! Transform engine.
//!
//! [`Fft`] is bound to one size. Each precision gets its own backend handle,
//! chosen and planned on first use and kept until the engine is dropped.
//! Every entry point validates its buffers before anything is bound, then
//! hands the backend slices of exactly the transform extents.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashSet;
use log::Level;

use crate::backend::{Implementation, RealTransform};
use crate::config;
use crate::error::{check_extent, FftError};
use crate::format::{self, bins};
use crate::num::{Float, Precision, Precisions};
use crate::precision::{scratch, Emulate};
use crate::registry::Registry;

/// A backend handle for one precision plus split-spectrum scratch for the
/// interleaved, polar and cepstral entry points.
pub struct Bound<T: Float> {
    implementation: Implementation,
    transform: Box<dyn RealTransform<T>>,
    re: Vec<T>,
    im: Vec<T>,
}

impl<T: Float> Bound<T> {
    fn forward_scratch(&mut self, input: &[T]) -> Result<(), FftError> {
        self.transform.forward(input, &mut self.re, &mut self.im)?;
        format::zero_real_bins(self.transform.size(), &mut self.im);
        Ok(())
    }

    fn inverse_scratch(&mut self, output: &mut [T]) -> Result<(), FftError> {
        self.transform.inverse(&self.re, &self.im, output)
    }
}

mod sealed {
    use super::{Bound, Fft};

    pub trait Slot: crate::num::Float {
        fn slot(fft: &mut Fft) -> &mut Option<Bound<Self>>;
        fn slot_ref(fft: &Fft) -> Option<&Bound<Self>>;
    }

    impl Slot for f32 {
        fn slot(fft: &mut Fft) -> &mut Option<Bound<f32>> {
            &mut fft.single
        }
        fn slot_ref(fft: &Fft) -> Option<&Bound<f32>> {
            fft.single.as_ref()
        }
    }

    impl Slot for f64 {
        fn slot(fft: &mut Fft) -> &mut Option<Bound<f64>> {
            &mut fft.double
        }
        fn slot_ref(fft: &Fft) -> Option<&Bound<f64>> {
            fft.double.as_ref()
        }
    }
}

/// Sample types accepted by [`Fft`]: `f32` and `f64`.
pub trait Sample: Emulate + sealed::Slot {}

impl Sample for f32 {}
impl Sample for f64 {}

/// A real FFT of fixed size over whichever backend suits it.
///
/// Transforms are unscaled: `inverse(forward(x))` yields `size * x`.
/// Spectra hold `size / 2 + 1` bins, DC first; the imaginary parts of DC and
/// (for even sizes) Nyquist are always exactly zero on output and ignored on
/// input.
///
/// ```
/// use polyfft::Fft;
///
/// let mut fft = Fft::new(4, 0).unwrap();
/// let (mut re, mut im) = ([0.0f64; 3], [0.0f64; 3]);
/// fft.forward(&[1.0, 1.0, 1.0, 1.0], &mut re, &mut im).unwrap();
/// assert!((re[0] - 4.0).abs() < 1e-12);
/// assert!(re[1].abs() < 1e-12 && re[2].abs() < 1e-12);
/// assert_eq!((im[0], im[2]), (0.0, 0.0));
/// ```
pub struct Fft {
    size: usize,
    debug_level: u32,
    forced: Option<Implementation>,
    single: Option<Bound<f32>>,
    double: Option<Bound<f64>>,
}

impl fmt::Debug for Fft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fft")
            .field("size", &self.size)
            .field("debug_level", &self.debug_level)
            .field("forced", &self.forced)
            .field("single", &self.implementation_for::<f32>())
            .field("double", &self.implementation_for::<f64>())
            .finish()
    }
}

impl Fft {
    /// Create an engine for `size` points using the registry default, with
    /// automatic fallback where the default cannot handle the size.
    ///
    /// `debug_level` 1 reports binding decisions at info level, 2 adds a
    /// trace line per transform. `POLYFFT_DEBUG_LEVEL` raises it further.
    pub fn new(size: usize, debug_level: u32) -> Result<Self, FftError> {
        if size == 0 {
            return Err(FftError::InvalidSize);
        }
        Ok(Self {
            size,
            debug_level: debug_level.max(config::env().debug_level),
            forced: None,
            single: None,
            double: None,
        })
    }

    /// Create an engine that only ever uses `implementation`.
    ///
    /// Fails with [`FftError::InvalidImplementation`] when it is not compiled
    /// in or cannot handle `size`; there is no fallback.
    pub fn with_implementation(
        size: usize,
        implementation: Implementation,
        debug_level: u32,
    ) -> Result<Self, FftError> {
        let mut fft = Self::new(size, debug_level)?;
        if !implementation.is_compiled_in() || !implementation.supports_size(size) {
            log::warn!(
                "FFT implementation {} cannot transform {} points",
                implementation,
                size
            );
            return Err(FftError::InvalidImplementation);
        }
        fft.forced = Some(implementation);
        Ok(fft)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn debug_level(&self) -> u32 {
        self.debug_level
    }

    /// The implementation bound for precision `T`, if it has been bound.
    pub fn implementation_for<T: Sample>(&self) -> Option<Implementation> {
        T::slot_ref(self).map(|b| b.implementation)
    }

    /// Bind the single-precision backend now instead of on first use.
    pub fn init_float(&mut self) -> Result<(), FftError> {
        self.bind::<f32>().map(|_| ())
    }

    /// Bind the double-precision backend now instead of on first use.
    pub fn init_double(&mut self) -> Result<(), FftError> {
        self.bind::<f64>().map(|_| ())
    }

    /// Native precisions of the backends serving this engine. Binds both
    /// precisions if they are not bound yet.
    pub fn supported_precisions(&mut self) -> Result<Precisions, FftError> {
        let single = self.bind::<f32>()?.implementation.precisions();
        let double = self.bind::<f64>()?.implementation.precisions();
        Ok(single | double)
    }

    /// Names of the compiled-in implementations.
    pub fn implementations() -> HashSet<&'static str> {
        Registry::global().implementations()
    }

    /// Name of the process-wide default implementation.
    pub fn default_implementation() -> &'static str {
        Registry::global().default_implementation().name()
    }

    /// Change the process-wide default for engines that bind afterwards.
    /// Unknown names are ignored; the empty name restores automatic choice.
    pub fn set_default_implementation(name: &str) {
        Registry::global().set_default_implementation(name)
    }

    /// Real input of `size` samples to split spectrum of `size / 2 + 1` bins.
    pub fn forward<T: Sample>(
        &mut self,
        real_in: &[T],
        real_out: &mut [T],
        imag_out: &mut [T],
    ) -> Result<(), FftError> {
        let (n, h) = (self.size, bins(self.size));
        check_extent(real_in, n)?;
        check_extent(real_out, h)?;
        check_extent(imag_out, h)?;
        self.trace::<T>("forward");
        let bound = self.bind::<T>()?;
        bound
            .transform
            .forward(&real_in[..n], &mut real_out[..h], &mut imag_out[..h])?;
        format::zero_real_bins(n, imag_out);
        Ok(())
    }

    /// Forward transform into interleaved `[re0, im0, re1, im1, ...]`.
    pub fn forward_interleaved<T: Sample>(
        &mut self,
        real_in: &[T],
        complex_out: &mut [T],
    ) -> Result<(), FftError> {
        let (n, h) = (self.size, bins(self.size));
        check_extent(real_in, n)?;
        check_extent(complex_out, 2 * h)?;
        self.trace::<T>("forward_interleaved");
        let bound = self.bind::<T>()?;
        bound.forward_scratch(&real_in[..n])?;
        format::split_to_interleaved(n, &bound.re, &bound.im, complex_out);
        Ok(())
    }

    /// Forward transform into magnitude and phase.
    pub fn forward_polar<T: Sample>(
        &mut self,
        real_in: &[T],
        mag_out: &mut [T],
        phase_out: &mut [T],
    ) -> Result<(), FftError> {
        let (n, h) = (self.size, bins(self.size));
        check_extent(real_in, n)?;
        check_extent(mag_out, h)?;
        check_extent(phase_out, h)?;
        self.trace::<T>("forward_polar");
        let bound = self.bind::<T>()?;
        bound.forward_scratch(&real_in[..n])?;
        format::split_to_polar(n, &bound.re, &bound.im, mag_out, phase_out);
        Ok(())
    }

    /// Forward transform keeping only the magnitude.
    pub fn forward_magnitude<T: Sample>(
        &mut self,
        real_in: &[T],
        mag_out: &mut [T],
    ) -> Result<(), FftError> {
        let (n, h) = (self.size, bins(self.size));
        check_extent(real_in, n)?;
        check_extent(mag_out, h)?;
        self.trace::<T>("forward_magnitude");
        let bound = self.bind::<T>()?;
        bound.forward_scratch(&real_in[..n])?;
        format::split_to_magnitude(n, &bound.re, &bound.im, mag_out);
        Ok(())
    }

    /// Split spectrum back to `size` real samples, unscaled.
    pub fn inverse<T: Sample>(
        &mut self,
        real_in: &[T],
        imag_in: &[T],
        real_out: &mut [T],
    ) -> Result<(), FftError> {
        let (n, h) = (self.size, bins(self.size));
        check_extent(real_in, h)?;
        check_extent(imag_in, h)?;
        check_extent(real_out, n)?;
        self.trace::<T>("inverse");
        let bound = self.bind::<T>()?;
        bound
            .transform
            .inverse(&real_in[..h], &imag_in[..h], &mut real_out[..n])
    }

    /// Inverse of an interleaved spectrum.
    pub fn inverse_interleaved<T: Sample>(
        &mut self,
        complex_in: &[T],
        real_out: &mut [T],
    ) -> Result<(), FftError> {
        let (n, h) = (self.size, bins(self.size));
        check_extent(complex_in, 2 * h)?;
        check_extent(real_out, n)?;
        self.trace::<T>("inverse_interleaved");
        let bound = self.bind::<T>()?;
        format::interleaved_to_split(n, complex_in, &mut bound.re, &mut bound.im);
        bound.inverse_scratch(&mut real_out[..n])
    }

    /// Inverse of a magnitude/phase spectrum.
    pub fn inverse_polar<T: Sample>(
        &mut self,
        mag_in: &[T],
        phase_in: &[T],
        real_out: &mut [T],
    ) -> Result<(), FftError> {
        let (n, h) = (self.size, bins(self.size));
        check_extent(mag_in, h)?;
        check_extent(phase_in, h)?;
        check_extent(real_out, n)?;
        self.trace::<T>("inverse_polar");
        let bound = self.bind::<T>()?;
        format::polar_to_split(n, mag_in, phase_in, &mut bound.re, &mut bound.im);
        bound.inverse_scratch(&mut real_out[..n])
    }

    /// Real cepstrum of a magnitude spectrum: the unscaled inverse of
    /// `ln(mag + 1e-6)` with zero phase.
    pub fn inverse_cepstral<T: Sample>(
        &mut self,
        mag_in: &[T],
        cep_out: &mut [T],
    ) -> Result<(), FftError> {
        let (n, h) = (self.size, bins(self.size));
        check_extent(mag_in, h)?;
        check_extent(cep_out, n)?;
        self.trace::<T>("inverse_cepstral");
        let bound = self.bind::<T>()?;
        format::magnitude_to_log_spectrum(n, mag_in, &mut bound.re, &mut bound.im);
        bound.inverse_scratch(&mut cep_out[..n])
    }

    fn level(&self) -> Level {
        if self.debug_level >= 1 {
            Level::Info
        } else {
            Level::Debug
        }
    }

    fn trace<T: Sample>(&self, op: &str) {
        if self.debug_level >= 2 {
            log::trace!("{} size={} precision={:?}", op, self.size, T::PRECISION);
        }
    }

    /// The handle for precision `T`, bound on first call.
    fn bind<T: Sample>(&mut self) -> Result<&mut Bound<T>, FftError> {
        if T::slot(self).is_none() {
            let bound = self.create::<T>()?;
            *T::slot(self) = Some(bound);
        }
        T::slot(self).as_mut().ok_or(FftError::InternalError)
    }

    fn create<T: Sample>(&self) -> Result<Bound<T>, FftError> {
        let implementation = self.select(T::PRECISION)?;
        let transform = implementation.plan::<T>(self.size)?;
        let emulated = !implementation.precisions().contains(T::PRECISION);
        log::log!(
            self.level(),
            "FFT size {} {:?}: bound to {}{}",
            self.size,
            T::PRECISION,
            implementation,
            if emulated { " (emulated precision)" } else { "" }
        );
        let h = bins(self.size);
        Ok(Bound {
            implementation,
            transform,
            re: scratch(h)?,
            im: scratch(h)?,
        })
    }

    /// Forced implementation, else the registry default if it can handle
    /// `(size, precision)`, else the first compiled-in implementation in
    /// priority order that can.
    fn select(&self, precision: Precision) -> Result<Implementation, FftError> {
        if let Some(forced) = self.forced {
            return if forced.supports(self.size, precision) {
                Ok(forced)
            } else {
                Err(FftError::InvalidImplementation)
            };
        }
        let preferred = Registry::global().default_implementation();
        if preferred.supports(self.size, precision) {
            return Ok(preferred);
        }
        let fallback = Registry::compiled_in()
            .find(|imp| imp.supports(self.size, precision))
            .unwrap_or(Implementation::Dft);
        log::log!(
            self.level(),
            "FFT implementation {} cannot transform {} points, falling back to {}",
            preferred,
            self.size,
            fallback
        );
        Ok(fallback)
    }
}
