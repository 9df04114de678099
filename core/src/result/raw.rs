//! result/raw.rs
//! FFI-safe mirror of `TestResult`.
//!
//! Only primitive fields, `#[repr(C)]`, so the native analysis library can
//! fill it through an out-pointer.

use crate::{constants::VALUE_COUNT, result::TestResult};

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RawTestInfo {
    pub conc: [f64; VALUE_COUNT],
    pub qc1_variation: f64,
    pub qc2_variation: f64,
}

impl From<RawTestInfo> for TestResult {
    fn from(raw: RawTestInfo) -> Self {
        TestResult::from_parts(raw.conc, raw.qc1_variation, raw.qc2_variation)
    }
}

impl From<TestResult> for RawTestInfo {
    fn from(result: TestResult) -> Self {
        Self {
            conc: result.values,
            qc1_variation: result.qc1_variation,
            qc2_variation: result.qc2_variation,
        }
    }
}
