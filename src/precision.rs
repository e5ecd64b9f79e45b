//! Precision emulation.
//!
//! A backend that only computes in one precision still serves the other:
//! [`Emulated`] widens or narrows the caller's buffers into scratch of the
//! native precision, runs the native transform and converts the results
//! back. The scratch is allocated once, when the handle is built.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::marker::PhantomData;

use crate::backend::RealTransform;
use crate::error::FftError;
use crate::num::Float;

/// Sample types that can adopt a transform computed in another precision.
pub trait Emulate: Float {
    fn via_double(
        inner: Box<dyn RealTransform<f64>>,
    ) -> Result<Box<dyn RealTransform<Self>>, FftError>;

    fn via_single(
        inner: Box<dyn RealTransform<f32>>,
    ) -> Result<Box<dyn RealTransform<Self>>, FftError>;
}

impl Emulate for f64 {
    fn via_double(
        inner: Box<dyn RealTransform<f64>>,
    ) -> Result<Box<dyn RealTransform<f64>>, FftError> {
        Ok(inner)
    }

    fn via_single(
        inner: Box<dyn RealTransform<f32>>,
    ) -> Result<Box<dyn RealTransform<f64>>, FftError> {
        Ok(Box::new(Emulated::<f64, f32>::new(inner)?))
    }
}

impl Emulate for f32 {
    fn via_double(
        inner: Box<dyn RealTransform<f64>>,
    ) -> Result<Box<dyn RealTransform<f32>>, FftError> {
        Ok(Box::new(Emulated::<f32, f64>::new(inner)?))
    }

    fn via_single(
        inner: Box<dyn RealTransform<f32>>,
    ) -> Result<Box<dyn RealTransform<f32>>, FftError> {
        Ok(inner)
    }
}

pub(crate) fn scratch<U: Float>(len: usize) -> Result<Vec<U>, FftError> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)
        .map_err(|_| FftError::InternalError)?;
    v.resize(len, U::zero());
    Ok(v)
}

/// Convert element-wise between precisions. Narrowing rounds to nearest.
pub fn convert<A: Float, B: Float>(src: &[A], dst: &mut [B]) {
    for (d, &s) in dst.iter_mut().zip(src.iter()) {
        *d = B::from_f64(s.to_f64());
    }
}

/// A `RealTransform<T>` computed by a `RealTransform<U>`.
pub struct Emulated<T: Float, U: Float> {
    inner: Box<dyn RealTransform<U>>,
    time: Vec<U>,
    re: Vec<U>,
    im: Vec<U>,
    _caller: PhantomData<T>,
}

impl<T: Float, U: Float> Emulated<T, U> {
    pub fn new(inner: Box<dyn RealTransform<U>>) -> Result<Self, FftError> {
        let n = inner.size();
        let bins = n / 2 + 1;
        Ok(Self {
            time: scratch(n)?,
            re: scratch(bins)?,
            im: scratch(bins)?,
            inner,
            _caller: PhantomData,
        })
    }
}

impl<T: Float, U: Float> RealTransform<T> for Emulated<T, U> {
    fn size(&self) -> usize {
        self.inner.size()
    }

    fn forward(&mut self, input: &[T], re: &mut [T], im: &mut [T]) -> Result<(), FftError> {
        convert(input, &mut self.time);
        self.inner.forward(&self.time, &mut self.re, &mut self.im)?;
        convert(&self.re, re);
        convert(&self.im, im);
        Ok(())
    }

    fn inverse(&mut self, re: &[T], im: &[T], output: &mut [T]) -> Result<(), FftError> {
        convert(re, &mut self.re);
        convert(im, &mut self.im);
        self.inner.inverse(&self.re, &self.im, &mut self.time)?;
        convert(&self.time, output);
        Ok(())
    }
}
