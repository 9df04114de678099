//! result/sample.rs
//! Positional sample channels of a `TestResult`.

use std::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

use crate::{constants::VALUE_COUNT, types::ResultError};

/// Sample measured on the test strip. The discriminant is the channel's index
/// in `TestResult::values`.
#[repr(u8)]
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash,
    TryFromPrimitive, IntoPrimitive, Serialize, Deserialize,
)]
pub enum SampleType {
    C1 = 0,
    C2 = 1,
    C3 = 2,
    C4 = 3,
    C5 = 4,
    C6 = 5,
    Qc1 = 6,
    Qc2 = 7,
    Tested = 8,
}

impl SampleType {
    /// Every channel in index order.
    pub const ALL: [SampleType; VALUE_COUNT] = [
        SampleType::C1,
        SampleType::C2,
        SampleType::C3,
        SampleType::C4,
        SampleType::C5,
        SampleType::C6,
        SampleType::Qc1,
        SampleType::Qc2,
        SampleType::Tested,
    ];

    pub fn index(self) -> usize {
        u8::from(self) as usize
    }

    pub fn from_index(raw: u8) -> Result<Self, ResultError> {
        SampleType::try_from_primitive(raw).map_err(|e| ResultError::UnknownSample(e.number))
    }

    pub fn is_calibration(self) -> bool {
        self.index() < SampleType::Qc1.index()
    }

    pub fn is_quality_control(self) -> bool {
        matches!(self, SampleType::Qc1 | SampleType::Qc2)
    }
}

impl fmt::Display for SampleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SampleType::C1 => "C1",
            SampleType::C2 => "C2",
            SampleType::C3 => "C3",
            SampleType::C4 => "C4",
            SampleType::C5 => "C5",
            SampleType::C6 => "C6",
            SampleType::Qc1 => "QC1",
            SampleType::Qc2 => "QC2",
            SampleType::Tested => "Tested",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_index_order() {
        for (i, sample) in SampleType::ALL.iter().enumerate() {
            assert_eq!(sample.index(), i);
        }
    }

    #[test]
    fn from_index_rejects_out_of_range() {
        assert_eq!(SampleType::from_index(8), Ok(SampleType::Tested));
        assert_eq!(SampleType::from_index(9), Err(ResultError::UnknownSample(9)));
    }

    #[test]
    fn classification() {
        assert!(SampleType::C6.is_calibration());
        assert!(!SampleType::Qc1.is_calibration());
        assert!(SampleType::Qc2.is_quality_control());
        assert!(!SampleType::Tested.is_quality_control());
    }
}
