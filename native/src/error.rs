use std::path::PathBuf;

use thiserror::Error;

use crate::status::AnalysisStatus;

/// Failures surfaced by the native analysis library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NativeError {
    /// Built without the `link` feature.
    #[error("native analysis library is not linked into this build")]
    Unlinked,

    /// `ta_init` returned a non-zero code.
    #[error("native library initialisation failed with status {0}")]
    Init(i32),

    /// The analysis itself failed.
    #[error("{status} in native analysis: {message}")]
    Analysis { status: AnalysisStatus, message: String },

    /// Status code outside the known set.
    #[error("unknown native status code: {0}")]
    UnknownStatus(i32),

    #[error("Can't open image: {}", .0.display())]
    ImageRead(PathBuf),

    /// Path not representable as a C string.
    #[error("invalid image path: {}", .0.display())]
    InvalidPath(PathBuf),
}
