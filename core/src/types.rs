use thiserror::Error;

use crate::result::SampleType;

/// Errors raised while assembling a `TestResult` from per-sample concentrations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResultError {
    /// The analysis produced no concentration for this sample.
    #[error("missing concentration for sample {0:?}")]
    MissingSample(SampleType),

    /// Raw channel index outside `0..VALUE_COUNT`.
    #[error("unknown sample index: {0}")]
    UnknownSample(u8),
}
