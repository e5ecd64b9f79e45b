//! # polyfft - real FFT facade over interchangeable backends
//!
//! One API for real-input FFTs whatever kernel ends up running them. Each
//! [`Fft`] engine is bound to a size; per precision it picks the registry
//! default implementation, falls back along a fixed priority order when the
//! default cannot handle the size, and emulates a precision the chosen
//! kernel lacks by converting through the other one.
//!
//! ## Cargo Features
//!
//! - `std` (default): environment configuration and `std::error::Error`
//! - `cross` (default): built-in radix-2 kernel for power-of-two sizes
//!
//! The reference `dft` kernel is always present, so every size from 1 up can
//! be transformed in both precisions.
//!
//! ## Environment
//!
//! - `POLYFFT_IMPLEMENTATION`: default implementation name, used until one is
//!   set through [`Fft::set_default_implementation`]
//! - `POLYFFT_DEBUG_LEVEL`: minimum debug level for every engine
//!
//! Diagnostics go through the `log` facade; install any logger to see them.
//!
//! ## Examples
//!
//! ```bash
//! cargo run --example basic_usage
//! cargo run --example cepstrum
//! RUST_LOG=trace cargo run --example verbose_logging
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

/// Backend adapters and the closed set of known implementations.
pub mod backend;
/// Environment configuration.
pub mod config;
mod engine;
pub mod error;
/// Conversions between split, interleaved, polar and log-magnitude spectra.
pub mod format;
pub mod num;
/// Running a transform in a precision its kernel does not support natively.
pub mod precision;
pub mod registry;

pub use backend::{Implementation, RealTransform};
pub use engine::{Fft, Sample};
pub use error::FftError;
pub use num::{Complex, Complex32, Complex64, Float, Precision, Precisions};
pub use registry::Registry;
