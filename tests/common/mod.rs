#![allow(dead_code)]

use polyfft::{Fft, Float, Implementation, Registry};

/// One engine per compiled-in implementation able to transform `size`
/// points, each forced so no fallback hides a broken backend.
pub fn engines(size: usize) -> Vec<(Implementation, Fft)> {
    Registry::compiled_in()
        .filter(|imp| imp.supports_size(size))
        .map(|imp| (imp, Fft::with_implementation(size, imp, 0).unwrap()))
        .collect()
}

pub fn to_vec<T: Float>(values: &[f64]) -> Vec<T> {
    values.iter().map(|&v| T::from_f64(v)).collect()
}

pub fn assert_close<T: Float>(got: &[T], want: &[f64], tol: f64, context: &str) {
    assert_eq!(got.len(), want.len(), "{}: length", context);
    for (k, (g, w)) in got.iter().zip(want).enumerate() {
        let g = g.to_f64();
        assert!(
            (g - w).abs() <= tol,
            "{}: index {}: got {}, want {}",
            context,
            k,
            g,
            w
        );
    }
}
