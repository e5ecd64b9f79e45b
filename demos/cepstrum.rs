//! Real cepstrum example.
//!
//! A pulse train with period 4 shows up as a cepstral peak at quefrency 4.

use polyfft::Fft;

fn main() -> Result<(), polyfft::FftError> {
    println!("=== Cepstrum example ===\n");
    const N: usize = 32;
    let signal: Vec<f64> = (0..N).map(|i| if i % 4 == 0 { 1.0 } else { 0.0 }).collect();

    let mut fft = Fft::new(N, 0)?;
    let mut mag = vec![0.0; N / 2 + 1];
    fft.forward_magnitude(&signal, &mut mag)?;
    let mut cep = vec![0.0; N];
    fft.inverse_cepstral(&mag, &mut cep)?;

    for (q, c) in cep.iter().enumerate().take(N / 2 + 1) {
        println!("quefrency {:2}: {:8.3}", q, c / N as f64);
    }
    Ok(())
}
