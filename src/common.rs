// src/common.rs

use core::fmt;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum FftError {
    SizeMismatch,
    NotPowerOfTwo,
    BufferTooSmall,
}

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::SizeMismatch => write!(f, "Real and imaginary buffers differ in length"),
            FftError::NotPowerOfTwo => write!(f, "Size must be a power of 2 (and at least 2)"),
            FftError::BufferTooSmall => write!(f, "Output buffer is too small"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

/// Diagnostic text sink. Purely a side channel: the numeric results never
/// depend on what (if anything) is listening.
///
/// The engine emits array dumps and out-of-range-parameter warnings through
/// this trait. Inject `NopTrace` (the default) to suppress everything.
pub trait TraceSink {
    fn line(&mut self, args: fmt::Arguments<'_>);
}

/// Default sink that discards every line.
#[derive(Debug, Default, Clone, Copy)]
pub struct NopTrace;

impl TraceSink for NopTrace {
    #[inline]
    fn line(&mut self, _args: fmt::Arguments<'_>) {}
}

/// Sink that forwards every line to the `log` facade at debug level.
#[cfg(feature = "log")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTrace;

#[cfg(feature = "log")]
impl TraceSink for LogTrace {
    fn line(&mut self, args: fmt::Arguments<'_>) {
        log::debug!("{}", args);
    }
}
