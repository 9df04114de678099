// ## 📂 File: `core/src/analyzer.rs`

//! Single-call delegator in front of the foreign analysis routine.
//!
//! The analyzer reads the image handle once, hands it to the routine as the
//! sole argument, and returns the routine's result or error untouched. It holds
//! no state between calls.

use std::sync::Arc;

use crate::{
    image::{ImageHandle, NativeImage},
    result::TestResult,
};

/// Computation that turns an image handle into a `TestResult`.
///
/// Implemented by the native binding and by substitutes in tests.
pub trait AnalysisRoutine {
    type Error;

    fn analyze_image(&self, handle: ImageHandle) -> Result<TestResult, Self::Error>;
}

impl<R: AnalysisRoutine + ?Sized> AnalysisRoutine for &R {
    type Error = R::Error;

    fn analyze_image(&self, handle: ImageHandle) -> Result<TestResult, Self::Error> {
        (**self).analyze_image(handle)
    }
}

impl<R: AnalysisRoutine + ?Sized> AnalysisRoutine for Box<R> {
    type Error = R::Error;

    fn analyze_image(&self, handle: ImageHandle) -> Result<TestResult, Self::Error> {
        (**self).analyze_image(handle)
    }
}

impl<R: AnalysisRoutine + ?Sized> AnalysisRoutine for Arc<R> {
    type Error = R::Error;

    fn analyze_image(&self, handle: ImageHandle) -> Result<TestResult, Self::Error> {
        (**self).analyze_image(handle)
    }
}

/// Adapter turning a closure into a routine.
#[derive(Debug, Clone, Copy)]
pub struct FnRoutine<F>(pub F);

impl<F, E> AnalysisRoutine for FnRoutine<F>
where
    F: Fn(ImageHandle) -> Result<TestResult, E>,
{
    type Error = E;

    fn analyze_image(&self, handle: ImageHandle) -> Result<TestResult, E> {
        (self.0)(handle)
    }
}

#[derive(Debug, Clone, Default)]
pub struct BloodTestImageAnalyzer<R> {
    routine: R,
}

impl<R: AnalysisRoutine> BloodTestImageAnalyzer<R> {
    pub fn new(routine: R) -> Self {
        Self { routine }
    }

    pub fn routine(&self) -> &R {
        &self.routine
    }

    pub fn into_inner(self) -> R {
        self.routine
    }

    /// Analyze `image`. Blocks until the routine returns.
    ///
    /// The image must expose a currently-allocated buffer for the whole call.
    pub fn analyze<I: NativeImage + ?Sized>(&self, image: &I) -> Result<TestResult, R::Error> {
        self.routine.analyze_image(image.native_handle())
    }
}
