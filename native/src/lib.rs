//! bloodtest-native
//!
//! Binding to the native TestAnalysis library: explicit one-time library
//! initialisation, the `AnalysisRoutine` that calls into it, and natively
//! loaded images.

pub mod error;
pub mod status;

mod ffi;
mod mat;

pub use error::NativeError;
pub use mat::NativeMat;
pub use status::AnalysisStatus;

use bloodtest_core::{
    analyzer::{AnalysisRoutine, BloodTestImageAnalyzer},
    image::ImageHandle,
    result::TestResult,
    runtime::{InitGuard, InitState},
};
use tracing::{debug, info};

/// Facts recorded when the library was initialised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryInfo {
    pub version: String,
}

static LIBRARY: InitGuard<LibraryInfo> = InitGuard::new();

/// Initialise the native library once per process.
///
/// Later calls return the recorded `LibraryInfo` without touching the library.
/// A failed attempt can be retried.
pub fn initialize() -> Result<&'static LibraryInfo, NativeError> {
    let (info, state) = LIBRARY.get_or_try_init(ffi::init)?;
    if state == InitState::Initialized {
        info!(version = %info.version, "native analysis library initialised");
    }
    Ok(info)
}

pub fn is_initialized() -> bool {
    LIBRARY.is_initialized()
}

/// `AnalysisRoutine` backed by `ta_detect_concentrations`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeRoutine;

impl AnalysisRoutine for NativeRoutine {
    type Error = NativeError;

    fn analyze_image(&self, handle: ImageHandle) -> Result<TestResult, NativeError> {
        initialize()?;
        debug!(%handle, "native detect_concentrations");
        let raw = ffi::detect_concentrations(handle)?;
        Ok(TestResult::from(raw))
    }
}

/// Analyzer wired to the native library.
pub fn native_analyzer() -> BloodTestImageAnalyzer<NativeRoutine> {
    BloodTestImageAnalyzer::new(NativeRoutine)
}
