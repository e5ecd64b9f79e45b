mod common;

use common::{assert_close, engines, to_vec};
use polyfft::{Fft, Implementation, Sample};

struct Case {
    name: &'static str,
    input: [f64; 4],
    re: [f64; 3],
    im: [f64; 3],
}

const CASES: [Case; 6] = [
    Case {
        name: "dc",
        input: [1.0, 1.0, 1.0, 1.0],
        re: [4.0, 0.0, 0.0],
        im: [0.0, 0.0, 0.0],
    },
    Case {
        name: "sine",
        input: [0.0, 1.0, 0.0, -1.0],
        re: [0.0, 0.0, 0.0],
        im: [0.0, -2.0, 0.0],
    },
    Case {
        name: "cosine",
        input: [1.0, 0.0, -1.0, 0.0],
        re: [0.0, 2.0, 0.0],
        im: [0.0, 0.0, 0.0],
    },
    Case {
        name: "sine+cosine",
        input: [0.5, 1.0, -0.5, -1.0],
        re: [0.0, 1.0, 0.0],
        im: [0.0, -2.0, 0.0],
    },
    Case {
        name: "nyquist",
        input: [1.0, -1.0, 1.0, -1.0],
        re: [0.0, 0.0, 4.0],
        im: [0.0, 0.0, 0.0],
    },
    Case {
        name: "dirac",
        input: [1.0, 0.0, 0.0, 0.0],
        re: [1.0, 1.0, 1.0],
        im: [0.0, 0.0, 0.0],
    },
];

fn run_cases<T: Sample>(tol: f64) {
    for (imp, mut fft) in engines(4) {
        for case in &CASES {
            let context = format!("{} {} {:?}", imp, case.name, T::PRECISION);
            let input: Vec<T> = to_vec(&case.input);
            let (mut re, mut im) = (vec![T::zero(); 3], vec![T::zero(); 3]);
            fft.forward(&input, &mut re, &mut im).unwrap();
            assert_close(&re, &case.re, tol, &context);
            assert_close(&im, &case.im, tol, &context);
            assert_eq!(im[0], T::zero(), "{}", context);
            assert_eq!(im[2], T::zero(), "{}", context);

            let mut back = vec![T::zero(); 4];
            fft.inverse(&re, &im, &mut back).unwrap();
            let scaled: Vec<f64> = case.input.iter().map(|x| 4.0 * x).collect();
            assert_close(&back, &scaled, 4.0 * tol, &context);
        }
        assert_eq!(fft.implementation_for::<T>(), Some(imp));
    }
}

#[test]
fn size_four_double() {
    run_cases::<f64>(1e-12);
}

#[test]
fn size_four_single() {
    run_cases::<f32>(1e-5);
}

fn signal(size: usize) -> Vec<f64> {
    (0..size)
        .map(|i| {
            let t = i as f64;
            (0.37 * t).sin() + 0.5 * (1.3 * t).cos() - 0.1 * t / size as f64
        })
        .collect()
}

fn round_trip<T: Sample>(fft: &mut Fft, tol: f64, context: &str) {
    let size = fft.size();
    let bins = size / 2 + 1;
    let x = signal(size);
    let input: Vec<T> = to_vec(&x);
    let (mut re, mut im) = (vec![T::zero(); bins], vec![T::zero(); bins]);
    fft.forward(&input, &mut re, &mut im).unwrap();
    assert_eq!(im[0], T::zero(), "{}", context);
    if size % 2 == 0 {
        assert_eq!(im[size / 2], T::zero(), "{}", context);
    }
    let mut back = vec![T::zero(); size];
    fft.inverse(&re, &im, &mut back).unwrap();
    let scaled: Vec<f64> = x.iter().map(|v| v * size as f64).collect();
    let peak = scaled.iter().fold(1.0f64, |m, v| m.max(v.abs()));
    assert_close(&back, &scaled, tol * peak, context);
}

#[test]
fn every_implementation_round_trips() {
    for size in [1usize, 2, 3, 4, 5, 6, 7, 8, 12, 16, 31, 64, 100, 256] {
        for (imp, mut fft) in engines(size) {
            let context = format!("{} size {}", imp, size);
            round_trip::<f64>(&mut fft, 1e-10, &context);
            round_trip::<f32>(&mut fft, 1e-4, &context);
        }
    }
}

#[test]
fn automatic_selection_handles_any_size() {
    for size in [1usize, 6, 7, 8, 10] {
        let mut fft = Fft::new(size, 0).unwrap();
        round_trip::<f64>(&mut fft, 1e-10, "auto double");
        round_trip::<f32>(&mut fft, 1e-4, "auto single");
        let double = fft.implementation_for::<f64>().unwrap();
        let single = fft.implementation_for::<f32>().unwrap();
        assert!(double.supports_size(size));
        assert!(single.supports_size(size));
        if !size.is_power_of_two() || size == 1 {
            assert_eq!(double, Implementation::Dft);
            assert_eq!(single, Implementation::Dft);
        }
    }
}

#[test]
fn size_one_is_identity() {
    for (imp, mut fft) in engines(1) {
        let (mut re, mut im) = ([0.0f64], [5.0f64]);
        fft.forward(&[2.5], &mut re, &mut im).unwrap();
        assert_eq!((re[0], im[0]), (2.5, 0.0), "{}", imp);
        let mut out = [0.0f64];
        fft.inverse(&re, &[9.0], &mut out).unwrap();
        assert_eq!(out[0], 2.5, "{}", imp);
    }
}

#[test]
fn inverse_ignores_imaginary_part_of_real_bins() {
    for (imp, mut fft) in engines(8) {
        let re = [1.0f64, 0.5, -0.25, 0.0, 2.0];
        let mut im = [0.0f64, 1.0, 0.0, -0.5, 0.0];
        let mut clean = [0.0f64; 8];
        fft.inverse(&re, &im, &mut clean).unwrap();
        im[0] = 7.0;
        im[4] = -3.0;
        let mut dirty = [0.0f64; 8];
        fft.inverse(&re, &im, &mut dirty).unwrap();
        assert_close(&dirty, &clean, 1e-12, imp.name());
    }
}

#[test]
fn inverse_ignores_data_past_last_bin() {
    for (imp, mut fft) in engines(4) {
        let mut re = vec![4.0f64, 0.0, 0.0, 99.0, -99.0];
        let mut im = vec![0.0f64, 0.0, 0.0, 42.0, 42.0];
        let mut out = [0.0f64; 4];
        fft.inverse(&re, &im, &mut out).unwrap();
        assert_close(&out, &[4.0; 4], 1e-12, imp.name());
        re.truncate(3);
        im.truncate(3);
        let mut again = [0.0f64; 4];
        fft.inverse(&re, &im, &mut again).unwrap();
        assert_eq!(out, again, "{}", imp);
    }
}
