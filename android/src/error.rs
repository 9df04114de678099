use bloodtest_native::NativeError;
use thiserror::Error;

/// Everything that can go wrong between the Java call and the returned object.
#[derive(Debug, Error)]
pub enum BindingError {
    #[error("native analysis failed: {0}")]
    Native(#[from] NativeError),

    #[error("JNI call failed: {0}")]
    Jni(#[from] jni::errors::Error),

    /// `TestResult.values` has the wrong length on the Java side.
    #[error("TestResult.values has length {actual}, expected {expected}")]
    ValuesLength { expected: usize, actual: i32 },

    /// A panic was caught before it crossed into the JVM.
    #[error("panic in native code: {0}")]
    Panic(String),
}
