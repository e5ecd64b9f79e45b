//! Demonstrates enabling verbose logging for polyfft.
//!
//! Debug level 1 reports which backend each precision binds to, level 2
//! adds a trace line per transform.
use polyfft::Fft;

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .init();

    // Power of two: the default backend takes it.
    let mut fft = Fft::new(16, 2).unwrap();
    let signal = vec![1.0f32; 16];
    let mut mag = vec![0.0f32; 9];
    fft.forward_magnitude(&signal, &mut mag).unwrap();

    // Odd size: falls back down the priority list.
    let mut odd = Fft::new(15, 1).unwrap();
    let mut ccs = vec![0.0f64; 16];
    odd.forward_interleaved(&vec![0.5f64; 15], &mut ccs).unwrap();

    // Unknown names are logged and ignored.
    Fft::set_default_implementation("no-such-backend");
}
