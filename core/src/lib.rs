//! bloodtest-core
//!
//! Pure Rust boundary around the blood-test image analysis routine.
//! No JNI, no FFI calls.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;

pub mod analyzer;
pub mod image;
pub mod result;
pub mod runtime;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::analyzer::{AnalysisRoutine, BloodTestImageAnalyzer, FnRoutine};
    pub use crate::image::{ImageHandle, NativeImage};
    pub use crate::result::{RawTestInfo, RenderedLine, SampleType, TestResult};
    pub use crate::runtime::{InitGuard, InitState};
    pub use crate::types::ResultError;
}
