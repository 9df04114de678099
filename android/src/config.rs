//! Java-side names the binding resolves at call time.

/// JNI class path of the result object.
pub const RESULT_CLASS: &str = "org/master/bloodtestapp/TestResult";
pub const VALUES_FIELD: &str = "values";
pub const QC1_FIELD: &str = "qc1Variation";
pub const QC2_FIELD: &str = "qc2Variation";

/// Thrown when OpenCV rejects the image.
pub const CV_EXCEPTION_CLASS: &str = "org/opencv/core/CvException";
/// Thrown for every other failure.
pub const FALLBACK_EXCEPTION_CLASS: &str = "java/lang/Exception";

/// Message used when a panic or an unidentified native exception reaches the boundary.
pub const PANIC_MESSAGE: &str = "Unknown exception in JNI code";

/// Java-side names used by the binding.
///
/// `DEFAULT` is the app's own layout; it is a `const`, so the entry point
/// never allocates to resolve names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindingConfig {
    pub result_class: &'static str,
    pub values_field: &'static str,
    pub qc1_field: &'static str,
    pub qc2_field: &'static str,
    pub cv_exception_class: &'static str,
    pub fallback_exception_class: &'static str,
}

impl BindingConfig {
    pub const DEFAULT: BindingConfig = BindingConfig {
        result_class: RESULT_CLASS,
        values_field: VALUES_FIELD,
        qc1_field: QC1_FIELD,
        qc2_field: QC2_FIELD,
        cv_exception_class: CV_EXCEPTION_CLASS,
        fallback_exception_class: FALLBACK_EXCEPTION_CLASS,
    };
}

impl Default for BindingConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Usable in a `static` only because `DEFAULT` is a constant expression.
    static APP_CONFIG: &BindingConfig = &BindingConfig::DEFAULT;

    #[test]
    fn default_is_the_app_layout() {
        assert_eq!(BindingConfig::default(), *APP_CONFIG);
        assert_eq!(APP_CONFIG.result_class, "org/master/bloodtestapp/TestResult");
        assert_eq!(APP_CONFIG.values_field, "values");
        assert_eq!(APP_CONFIG.qc1_field, "qc1Variation");
        assert_eq!(APP_CONFIG.qc2_field, "qc2Variation");
    }
}
