//! Reference discrete Fourier transform.
//!
//! Direct O(N²) evaluation against a precomputed table of the `N` distinct
//! roots of unity. Handles every size from 1 up and computes natively in
//! both precisions, which makes it the terminal fallback of the registry.

use alloc::vec::Vec;

use super::RealTransform;
use crate::error::FftError;
use crate::num::{Complex, Float};

pub struct Dft<T: Float> {
    size: usize,
    /// `exp(-2πi j / size)` for `j = 0..size`, rounded once from f64.
    roots: Vec<Complex<T>>,
}

impl<T: Float> Dft<T> {
    pub fn new(size: usize) -> Result<Self, FftError> {
        if size == 0 {
            return Err(FftError::InvalidSize);
        }
        let mut roots = Vec::new();
        roots
            .try_reserve_exact(size)
            .map_err(|_| FftError::InternalError)?;
        let step = -2.0 * core::f64::consts::PI / size as f64;
        roots.extend((0..size).map(|j| Complex::expi(step * j as f64)));
        Ok(Self { size, roots })
    }
}

impl<T: Float> RealTransform<T> for Dft<T> {
    fn size(&self) -> usize {
        self.size
    }

    fn forward(&mut self, input: &[T], re: &mut [T], im: &mut [T]) -> Result<(), FftError> {
        let n = self.size;
        let bins = n / 2 + 1;
        let input = &input[..n];
        for k in 0..bins {
            let mut acc = Complex::<T>::zero();
            // Root index (k * t) mod n, advanced incrementally.
            let mut idx = 0usize;
            for &x in input {
                let w = self.roots[idx];
                acc.re = acc.re + x * w.re;
                acc.im = acc.im + x * w.im;
                idx += k;
                if idx >= n {
                    idx -= n;
                }
            }
            re[k] = acc.re;
            im[k] = acc.im;
        }
        im[0] = T::zero();
        if n % 2 == 0 {
            im[n / 2] = T::zero();
        }
        Ok(())
    }

    fn inverse(&mut self, re: &[T], im: &[T], output: &mut [T]) -> Result<(), FftError> {
        let n = self.size;
        let bins = n / 2 + 1;
        let nyquist = if n % 2 == 0 { Some(n / 2) } else { None };
        let two = T::one() + T::one();
        for (t, out) in output[..n].iter_mut().enumerate() {
            let mut acc = re[0];
            let mut idx = 0usize;
            for k in 1..bins {
                idx += t;
                if idx >= n {
                    idx -= n;
                }
                // Re(X e^{+iθ}) with w = e^{-iθ}; bins past n/2 are the
                // conjugates of these, hence the factor two.
                let w = self.roots[idx];
                if Some(k) == nyquist {
                    acc = acc + re[k] * w.re;
                } else {
                    acc = acc + two * (re[k] * w.re + im[k] * w.im);
                }
            }
            *out = acc;
        }
        Ok(())
    }
}
