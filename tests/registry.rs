// Tests here change the process-wide default, so they serialize on a lock.

use std::sync::Mutex;

use polyfft::{Fft, Implementation, Registry};

static DEFAULT_LOCK: Mutex<()> = Mutex::new(());

fn lock() -> std::sync::MutexGuard<'static, ()> {
    DEFAULT_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

#[test]
fn dft_is_always_available() {
    let names = Fft::implementations();
    assert!(names.contains("dft"));
    assert!(!names.contains("fftw"));
    assert_eq!(names.contains("cross"), cfg!(feature = "cross"));
}

#[test]
fn default_is_always_listed() {
    let _guard = lock();
    Registry::global().reset();
    assert!(Fft::implementations().contains(Fft::default_implementation()));
}

#[test]
fn set_and_reset_default() {
    let _guard = lock();
    Fft::set_default_implementation("dft");
    assert_eq!(Fft::default_implementation(), "dft");

    Fft::set_default_implementation("not-a-backend");
    assert_eq!(Fft::default_implementation(), "dft");
    Fft::set_default_implementation("vdsp");
    assert_eq!(Fft::default_implementation(), "dft");

    Fft::set_default_implementation("");
    let automatic = Fft::default_implementation();
    assert!(Fft::implementations().contains(automatic));
    Registry::global().reset();
}

#[test]
fn default_applies_to_engines_bound_afterwards() {
    let _guard = lock();
    Fft::set_default_implementation("dft");
    let mut fft = Fft::new(16, 0).unwrap();
    fft.init_double().unwrap();
    assert_eq!(fft.implementation_for::<f64>(), Some(Implementation::Dft));

    if cfg!(feature = "cross") {
        Fft::set_default_implementation("cross");
        // Already bound: unaffected.
        fft.init_double().unwrap();
        assert_eq!(fft.implementation_for::<f64>(), Some(Implementation::Dft));
        // Unbound precision picks up the new default.
        fft.init_float().unwrap();
        assert_eq!(fft.implementation_for::<f32>(), Some(Implementation::Cross));
    }
    Registry::global().reset();
}

#[cfg(feature = "cross")]
#[test]
fn default_falls_back_for_unsupported_sizes() {
    let _guard = lock();
    Fft::set_default_implementation("cross");
    for (size, want) in [
        (1, Implementation::Dft),
        (6, Implementation::Dft),
        (7, Implementation::Dft),
        (8, Implementation::Cross),
    ] {
        let mut fft = Fft::new(size, 0).unwrap();
        fft.init_float().unwrap();
        fft.init_double().unwrap();
        assert_eq!(fft.implementation_for::<f32>(), Some(want), "size {}", size);
        assert_eq!(fft.implementation_for::<f64>(), Some(want), "size {}", size);
    }
    Registry::global().reset();
}

#[test]
fn supported_precisions_follow_binding() {
    let _guard = lock();
    Fft::set_default_implementation("dft");
    let mut fft = Fft::new(8, 0).unwrap();
    let precisions = fft.supported_precisions().unwrap();
    assert_eq!(precisions, polyfft::Precisions::BOTH);
    assert!(!precisions.is_empty());
    Registry::global().reset();
}

#[test]
fn local_registries_are_independent() {
    let local = Registry::new();
    local.set_default_implementation("dft");
    assert_eq!(local.default_implementation(), Implementation::Dft);
    let other = Registry::new();
    assert_eq!(
        other.default_implementation(),
        Registry::pick(polyfft::config::env().implementation)
    );
}
