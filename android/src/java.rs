//! java.rs
//! Building the Java `TestResult` and raising Java exceptions.

use bloodtest_core::{constants::VALUE_COUNT, result::TestResult};
use bloodtest_native::{AnalysisStatus, NativeError};
use jni::{
    objects::{JDoubleArray, JObject, JValue},
    sys::jsize,
    JNIEnv,
};
use tracing::{error, warn};

use crate::{
    config::{BindingConfig, PANIC_MESSAGE},
    error::BindingError,
};

/// Instantiate the Java result class and copy `result` into it.
///
/// The class must have a no-arg constructor that allocates `values` as a
/// `double[9]`.
pub fn build_test_result<'local>(
    env: &mut JNIEnv<'local>,
    config: &BindingConfig,
    result: &TestResult,
) -> Result<JObject<'local>, BindingError> {
    let class = env.find_class(config.result_class)?;
    let object = env.new_object(&class, "()V", &[])?;

    env.set_field(&object, config.qc1_field, "D", JValue::Double(result.qc1_variation))?;
    env.set_field(&object, config.qc2_field, "D", JValue::Double(result.qc2_variation))?;

    let values = JDoubleArray::from(env.get_field(&object, config.values_field, "[D")?.l()?);
    check_values_len(env.get_array_length(&values)?)?;
    env.set_double_array_region(&values, 0, &result.values)?;

    Ok(object)
}

pub fn check_values_len(len: jsize) -> Result<(), BindingError> {
    if usize::try_from(len).ok() != Some(VALUE_COUNT) {
        return Err(BindingError::ValuesLength { expected: VALUE_COUNT, actual: len });
    }
    Ok(())
}

/// Java exception class for `err`.
pub fn exception_class(config: &BindingConfig, err: &BindingError) -> &'static str {
    match err {
        BindingError::Native(NativeError::Analysis { status: AnalysisStatus::CvError, .. }) => {
            config.cv_exception_class
        }
        _ => config.fallback_exception_class,
    }
}

pub fn exception_message(err: &BindingError) -> String {
    match err {
        BindingError::Native(NativeError::Analysis { status: AnalysisStatus::Unknown, .. })
        | BindingError::Panic(_) => PANIC_MESSAGE.to_string(),
        BindingError::Native(NativeError::Analysis { message, .. }) => message.clone(),
        other => other.to_string(),
    }
}

/// Raise `err` as a Java exception unless one is already pending.
pub fn throw(env: &mut JNIEnv<'_>, config: &BindingConfig, err: &BindingError) {
    if env.exception_check().unwrap_or(false) {
        warn!(%err, "Java exception already pending");
        return;
    }
    let class = exception_class(config, err);
    warn!(class, %err, "throwing Java exception");
    if let Err(e) = env.throw_new(class, exception_message(err)) {
        error!(class, error = %e, "failed to throw Java exception");
    }
}
