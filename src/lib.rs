#![no_std]

// Enables the standard library only for tests,
// so you can run 'cargo test' on your PC normally.
#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod common;
pub mod fft;
pub mod signal;
pub mod spectrum;
pub mod trig;

pub use common::{FftError, NopTrace, TraceSink};
pub use fft::{Direction, Fft, DEFAULT_ACCURACY};
pub use signal::Signal;
