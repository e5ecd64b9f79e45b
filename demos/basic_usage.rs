//! Basic usage example for polyfft
//!
//! Forward and inverse transforms in both precisions and the alternate
//! spectral layouts, on a power-of-two and a non-power-of-two size.

use polyfft::{Fft, Precision};

fn main() -> Result<(), polyfft::FftError> {
    println!("=== polyfft Basic Usage Example ===\n");
    println!("Compiled in: {:?}", Fft::implementations());
    println!("Default: {}\n", Fft::default_implementation());

    // 1. Split real/imaginary spectrum
    println!("1. Forward transform (split)");
    let mut fft = Fft::new(8, 0)?;
    let input = [0.0f64, 1.0, 0.0, -1.0, 0.0, 1.0, 0.0, -1.0];
    let (mut re, mut im) = ([0.0; 5], [0.0; 5]);
    fft.forward(&input, &mut re, &mut im)?;
    println!("   Input: {:?}", input);
    println!("   Re:    {:?}", re.map(|v| (v * 100.0).round() / 100.0));
    println!("   Im:    {:?}", im.map(|v| (v * 100.0).round() / 100.0));

    let mut back = [0.0; 8];
    fft.inverse(&re, &im, &mut back)?;
    println!(
        "   Inverse / N: {:?}\n",
        back.map(|v| (v / 8.0 * 100.0).round() / 100.0)
    );

    // 2. Same engine, single precision
    println!("2. Single precision on the same engine");
    let input32 = [1.0f32, 2.0, 3.0, 4.0, 4.0, 3.0, 2.0, 1.0];
    let mut mag = [0.0f32; 5];
    fft.forward_magnitude(&input32, &mut mag)?;
    println!("   Magnitude: {:?}", mag);
    println!(
        "   Bound: single={:?} double={:?}",
        fft.implementation_for::<f32>(),
        fft.implementation_for::<f64>()
    );
    let native = fft.supported_precisions()?;
    println!(
        "   Native single: {}, native double: {}\n",
        native.contains(Precision::Single),
        native.contains(Precision::Double)
    );

    // 3. Interleaved and polar layouts on an odd size
    println!("3. Interleaved and polar (N = 7)");
    let mut odd = Fft::new(7, 0)?;
    let signal: Vec<f64> = (0..7).map(|i| (i as f64 * 0.9).sin()).collect();
    let mut ccs = [0.0; 8];
    odd.forward_interleaved(&signal, &mut ccs)?;
    println!("   CCS: {:?}", ccs.map(|v| (v * 100.0).round() / 100.0));
    let (mut mag, mut phase) = ([0.0; 4], [0.0; 4]);
    odd.forward_polar(&signal, &mut mag, &mut phase)?;
    let mut restored = [0.0; 7];
    odd.inverse_polar(&mag, &phase, &mut restored)?;
    let err = restored
        .iter()
        .zip(&signal)
        .map(|(r, s)| (r / 7.0 - s).abs())
        .fold(0.0, f64::max);
    println!("   Polar round trip max error: {:e}", err);
    println!("   Bound: {:?}", odd.implementation_for::<f64>());

    Ok(())
}
