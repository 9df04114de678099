//! status.rs
//! Status codes returned by the native analysis entry points.

use std::fmt;

use num_enum::TryFromPrimitive;

use crate::error::NativeError;

#[repr(i32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, TryFromPrimitive)]
pub enum AnalysisStatus {
    Ok = 0,
    /// OpenCV raised a `cv::Exception`.
    CvError = 1,
    /// Any other exception escaped the analysis.
    Unknown = 2,
}

impl fmt::Display for AnalysisStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisStatus::Ok => write!(f, "ok"),
            AnalysisStatus::CvError => write!(f, "OpenCV error"),
            AnalysisStatus::Unknown => write!(f, "unknown exception"),
        }
    }
}

/// Map a raw status code to a result. `last_error` is only consulted on failure.
pub fn check_status<F>(code: i32, last_error: F) -> Result<(), NativeError>
where
    F: FnOnce() -> String,
{
    match AnalysisStatus::try_from_primitive(code) {
        Ok(AnalysisStatus::Ok) => Ok(()),
        Ok(status) => Err(NativeError::Analysis { status, message: last_error() }),
        Err(_) => Err(NativeError::UnknownStatus(code)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_does_not_read_last_error() {
        assert_eq!(check_status(0, || panic!("must not be called")), Ok(()));
    }

    #[test]
    fn cv_error_carries_message() {
        let err = check_status(1, || "bad mat".to_string()).unwrap_err();
        assert_eq!(
            err,
            NativeError::Analysis { status: AnalysisStatus::CvError, message: "bad mat".into() }
        );
        assert_eq!(err.to_string(), "OpenCV error in native analysis: bad mat");
    }

    #[test]
    fn unknown_exception_status() {
        let err = check_status(2, String::new).unwrap_err();
        assert!(matches!(err, NativeError::Analysis { status: AnalysisStatus::Unknown, .. }));
    }

    #[test]
    fn unmapped_code_is_reported_raw() {
        assert_eq!(check_status(-7, String::new), Err(NativeError::UnknownStatus(-7)));
    }
}
