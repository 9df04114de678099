//! result/mod.rs
//! Outcome of one analysis run: nine positional concentrations plus the two
//! quality-control variations.

pub mod raw;
pub mod render;
pub mod sample;

pub use raw::*;
pub use render::*;
pub use sample::*;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{constants::VALUE_COUNT, types::ResultError};

/// Result of one analysis run.
///
/// Filled once by the analysis routine and treated as a read-only snapshot by
/// every consumer afterwards. `values[i]` belongs to `SampleType` with index `i`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TestResult {
    pub values: [f64; VALUE_COUNT],
    pub qc1_variation: f64,
    pub qc2_variation: f64,
}

impl TestResult {
    /// All-zero result.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(values: [f64; VALUE_COUNT], qc1_variation: f64, qc2_variation: f64) -> Self {
        Self { values, qc1_variation, qc2_variation }
    }

    /// Build from a per-sample concentration map. Every sample type must be present.
    pub fn from_concentrations(
        conc: &BTreeMap<SampleType, f64>,
        qc1_variation: f64,
        qc2_variation: f64,
    ) -> Result<Self, ResultError> {
        let mut values = [0.0; VALUE_COUNT];
        for sample in SampleType::ALL {
            values[sample.index()] = *conc
                .get(&sample)
                .ok_or(ResultError::MissingSample(sample))?;
        }
        Ok(Self { values, qc1_variation, qc2_variation })
    }

    pub fn value(&self, sample: SampleType) -> f64 {
        self.values[sample.index()]
    }

    /// Channels paired with their sample type, in index order.
    pub fn concentrations(&self) -> impl Iterator<Item = (SampleType, f64)> + '_ {
        SampleType::ALL.into_iter().map(move |s| (s, self.value(s)))
    }
}
