//! Spectral format conversions.
//!
//! The transform engine produces and consumes the canonical split form: the
//! first `n / 2 + 1` bins of a conjugate-symmetric spectrum as separate real
//! and imaginary arrays. The functions here convert that form to and from the
//! other layouts. They touch exactly `bins` elements of each split array (and
//! `2 * bins` of an interleaved one) and nothing past that.

use crate::num::Float;

/// Added to every magnitude before taking its logarithm for a cepstrum, so a
/// silent bin maps to `ln(1e-6)` rather than `-inf`.
pub const CEPSTRAL_FLOOR: f64 = 0.000001;

/// Number of spectral bins stored for a real transform of `size` points.
#[inline]
pub const fn bins(size: usize) -> usize {
    size / 2 + 1
}

/// Indices of the bins whose imaginary part is zero by construction:
/// DC always, Nyquist when `size` is even.
fn real_bins(size: usize) -> (usize, Option<usize>) {
    (0, if size % 2 == 0 { Some(size / 2) } else { None })
}

/// Pack split real/imaginary bins into CCS layout `[re0, im0, re1, im1, ...]`.
///
/// The imaginary slots of DC and (for even `size`) Nyquist are written as
/// exact zeros whatever `im` holds there.
pub fn split_to_interleaved<T: Float>(size: usize, re: &[T], im: &[T], out: &mut [T]) {
    let n = bins(size);
    for (k, pair) in out[..2 * n].chunks_exact_mut(2).enumerate() {
        pair[0] = re[k];
        pair[1] = im[k];
    }
    zero_real_bins_interleaved(size, out);
}

/// Unpack CCS layout into split bins, zeroing the always-real imaginary slots.
pub fn interleaved_to_split<T: Float>(size: usize, input: &[T], re: &mut [T], im: &mut [T]) {
    let n = bins(size);
    for (k, pair) in input[..2 * n].chunks_exact(2).enumerate() {
        re[k] = pair[0];
        im[k] = pair[1];
    }
    zero_real_bins(size, im);
}

/// Magnitude and phase of each bin. Phase is unspecified where the magnitude
/// is zero.
pub fn split_to_polar<T: Float>(
    size: usize,
    re: &[T],
    im: &[T],
    mag: &mut [T],
    phase: &mut [T],
) {
    let n = bins(size);
    for k in 0..n {
        mag[k] = re[k].hypot(im[k]);
        phase[k] = im[k].atan2(re[k]);
    }
}

/// Magnitude of each bin.
pub fn split_to_magnitude<T: Float>(size: usize, re: &[T], im: &[T], mag: &mut [T]) {
    let n = bins(size);
    for ((m, &r), &i) in mag[..n].iter_mut().zip(&re[..n]).zip(&im[..n]) {
        *m = r.hypot(i);
    }
}

/// Rebuild split bins from magnitude and phase.
pub fn polar_to_split<T: Float>(
    size: usize,
    mag: &[T],
    phase: &[T],
    re: &mut [T],
    im: &mut [T],
) {
    let n = bins(size);
    for k in 0..n {
        let (sin, cos) = phase[k].sin_cos();
        re[k] = mag[k] * cos;
        im[k] = mag[k] * sin;
    }
    zero_real_bins(size, im);
}

/// Log-magnitude spectrum feeding the cepstral inverse:
/// `re = ln(mag + CEPSTRAL_FLOOR)`, `im = 0`.
pub fn magnitude_to_log_spectrum<T: Float>(size: usize, mag: &[T], re: &mut [T], im: &mut [T]) {
    let n = bins(size);
    let floor = T::from_f64(CEPSTRAL_FLOOR);
    for k in 0..n {
        re[k] = (mag[k] + floor).ln();
        im[k] = T::zero();
    }
}

/// Force the imaginary parts of the DC and Nyquist bins to exact zero.
pub fn zero_real_bins<T: Float>(size: usize, im: &mut [T]) {
    let (dc, nyquist) = real_bins(size);
    im[dc] = T::zero();
    if let Some(k) = nyquist {
        im[k] = T::zero();
    }
}

fn zero_real_bins_interleaved<T: Float>(size: usize, out: &mut [T]) {
    let (dc, nyquist) = real_bins(size);
    out[2 * dc + 1] = T::zero();
    if let Some(k) = nyquist {
        out[2 * k + 1] = T::zero();
    }
}
