//! Built-in radix-2 backend (`cross`).
//!
//! A real transform of `n = 2m` points runs as one complex Stockham FFT of
//! `m` points over the even/odd-packed input, followed by the split step that
//! separates the two interleaved real spectra. Power-of-two sizes only,
//! double precision only; single precision reaches it through the emulator.

use alloc::vec::Vec;

use super::RealTransform;
use crate::error::FftError;
use crate::num::{Complex, Complex64};

/// Number of real samples packed into one complex value.
const STRIDE: usize = 2;

pub fn supports_size(size: usize) -> bool {
    size >= STRIDE && size.is_power_of_two()
}

fn table(len: usize, step: f64) -> Result<Vec<Complex64>, FftError> {
    let mut t = Vec::new();
    t.try_reserve_exact(len)
        .map_err(|_| FftError::InternalError)?;
    t.extend((0..len).map(|k| Complex::expi(step * k as f64)));
    Ok(t)
}

fn buffer(len: usize) -> Result<Vec<Complex64>, FftError> {
    let mut b = Vec::new();
    b.try_reserve_exact(len)
        .map_err(|_| FftError::InternalError)?;
    b.resize(len, Complex::zero());
    Ok(b)
}

pub struct Cross {
    size: usize,
    /// `exp(-2πi k / m)` for `k = 0..m/2`, per-stage twiddles of the
    /// half-size complex FFT.
    twiddles: Vec<Complex64>,
    /// `exp(-πi k / m)` for `k = 0..m`, used by the real split/merge step.
    split: Vec<Complex64>,
    work: Vec<Complex64>,
    scratch: Vec<Complex64>,
}

impl Cross {
    pub fn new(size: usize) -> Result<Self, FftError> {
        if !supports_size(size) {
            return Err(FftError::InvalidImplementation);
        }
        let m = size / STRIDE;
        let pi = core::f64::consts::PI;
        Ok(Self {
            size,
            twiddles: table(m / 2, -2.0 * pi / m as f64)?,
            split: table(m, -pi / m as f64)?,
            work: buffer(m)?,
            scratch: buffer(m)?,
        })
    }

    /// Unscaled forward complex FFT of `self.work`, in place.
    fn fft_work(&mut self) {
        let n = self.work.len();
        let data = &mut self.work[..];
        let scratch = &mut self.scratch[..n];
        let mut in_data = true;
        // n1: number of groups, n2: half-length of each group in this pass.
        let mut n1 = 1usize;
        let mut n2 = n;
        while n1 < n {
            n2 >>= 1;
            let (src, dst): (&[Complex64], &mut [Complex64]) = if in_data {
                (&*data, &mut *scratch)
            } else {
                (&*scratch, &mut *data)
            };
            for k in 0..n1 {
                // exp(-2πi k / (2 n1))
                let w = self.twiddles[k * n2];
                let base0 = 2 * k * n2;
                let base1 = base0 + n2;
                for j in 0..n2 {
                    let u = src[base0 + j];
                    let v = src[base1 + j] * w;
                    dst[k * n2 + j] = u + v;
                    dst[(k + n1) * n2 + j] = u - v;
                }
            }
            in_data = !in_data;
            n1 <<= 1;
        }
        if !in_data {
            data.copy_from_slice(scratch);
        }
    }

    /// Unscaled inverse complex FFT of `self.work`, via conjugation.
    fn ifft_work(&mut self) {
        for c in self.work.iter_mut() {
            *c = c.conj();
        }
        self.fft_work();
        for c in self.work.iter_mut() {
            *c = c.conj();
        }
    }
}

impl RealTransform<f64> for Cross {
    fn size(&self) -> usize {
        self.size
    }

    fn forward(&mut self, input: &[f64], re: &mut [f64], im: &mut [f64]) -> Result<(), FftError> {
        let m = self.size / STRIDE;
        for (i, z) in self.work.iter_mut().enumerate() {
            *z = Complex::new(input[STRIDE * i], input[STRIDE * i + 1]);
        }
        self.fft_work();
        let z0 = self.work[0];
        re[0] = z0.re + z0.im;
        im[0] = 0.0;
        re[m] = z0.re - z0.im;
        im[m] = 0.0;
        for k in 1..m {
            let a = self.work[k];
            let b = self.work[m - k].conj();
            let sum = a + b;
            let t = self.split[k] * (a - b);
            // (sum - i t) / 2
            re[k] = 0.5 * (sum.re + t.im);
            im[k] = 0.5 * (sum.im - t.re);
        }
        Ok(())
    }

    fn inverse(&mut self, re: &[f64], im: &[f64], output: &mut [f64]) -> Result<(), FftError> {
        let m = self.size / STRIDE;
        // Without the usual halving, the unscaled inverse below yields
        // 2m = n times the packed signal.
        self.work[0] = Complex::new(re[0] + re[m], re[0] - re[m]);
        for k in 1..m {
            let a = Complex::new(re[k], im[k]);
            let b = Complex::new(re[m - k], -im[m - k]);
            let sum = a + b;
            let t = self.split[k].conj() * (a - b);
            // sum + i t
            self.work[k] = Complex::new(sum.re - t.im, sum.im + t.re);
        }
        self.ifft_work();
        for (i, z) in self.work.iter().enumerate() {
            output[STRIDE * i] = z.re;
            output[STRIDE * i + 1] = z.im;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::dft::Dft;
    use alloc::vec;
    use alloc::vec::Vec;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn rejects_unsupported_sizes() {
        for size in [0, 1, 3, 6, 12] {
            assert!(matches!(
                Cross::new(size),
                Err(FftError::InvalidImplementation)
            ));
        }
    }

    #[test]
    fn smallest_size() {
        let mut cross = Cross::new(2).unwrap();
        let (mut re, mut im) = ([0.0; 2], [0.0; 2]);
        cross.forward(&[3.0, 1.0], &mut re, &mut im).unwrap();
        assert_eq!(re, [4.0, 2.0]);
        assert_eq!(im, [0.0, 0.0]);
        let mut out = [0.0; 2];
        cross.inverse(&re, &im, &mut out).unwrap();
        assert_eq!(out, [6.0, 2.0]);
    }

    #[test]
    fn matches_reference_dft() {
        let mut rng = StdRng::seed_from_u64(7);
        for size in [4usize, 8, 16, 64, 256] {
            let input: Vec<f64> = (0..size).map(|_| rng.gen_range(-1.0..1.0)).collect();
            let bins = size / 2 + 1;
            let mut cross = Cross::new(size).unwrap();
            let mut dft = Dft::<f64>::new(size).unwrap();
            let (mut re_a, mut im_a) = (vec![0.0; bins], vec![0.0; bins]);
            let (mut re_b, mut im_b) = (vec![0.0; bins], vec![0.0; bins]);
            cross.forward(&input, &mut re_a, &mut im_a).unwrap();
            dft.forward(&input, &mut re_b, &mut im_b).unwrap();
            for k in 0..bins {
                assert!((re_a[k] - re_b[k]).abs() < 1e-9, "size {} bin {}", size, k);
                assert!((im_a[k] - im_b[k]).abs() < 1e-9, "size {} bin {}", size, k);
            }
            let mut back = vec![0.0; size];
            cross.inverse(&re_a, &im_a, &mut back).unwrap();
            for (b, x) in back.iter().zip(input.iter()) {
                assert!((b / size as f64 - x).abs() < 1e-12);
            }
        }
    }
}
