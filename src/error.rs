/// Errors reported by the transform facade.
///
/// Backend unavailability is never reported: the engine falls back to another
/// implementation instead. What remains are caller mistakes and genuine
/// failures inside a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftError {
    /// A required buffer was empty.
    NullArgument,
    /// A buffer was shorter than the extent the operation reads or writes.
    BufferTooShort { expected: usize, actual: usize },
    /// Transform size was zero.
    InvalidSize,
    /// A forced implementation is not compiled in or cannot handle the size.
    InvalidImplementation,
    /// Backend failure while planning or executing, e.g. allocation failure.
    InternalError,
}

impl core::fmt::Display for FftError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FftError::NullArgument => write!(f, "required buffer argument is empty"),
            FftError::BufferTooShort { expected, actual } => write!(
                f,
                "buffer too short: need {} elements, got {}",
                expected, actual
            ),
            FftError::InvalidSize => write!(f, "transform size must be at least 1"),
            FftError::InvalidImplementation => {
                write!(f, "implementation unavailable for this transform")
            }
            FftError::InternalError => write!(f, "internal backend failure"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

/// Check that `buf` is present and covers `extent` elements.
pub(crate) fn check_extent<T>(buf: &[T], extent: usize) -> Result<(), FftError> {
    if buf.is_empty() {
        return Err(FftError::NullArgument);
    }
    if buf.len() < extent {
        return Err(FftError::BufferTooShort {
            expected: extent,
            actual: buf.len(),
        });
    }
    Ok(())
}
