//! bloodtest-android
//!
//! JNI bindings for `org.master.bloodtestapp.BloodTestImageAnalyzer`.

use std::ffi::c_void;
use std::panic::{catch_unwind, AssertUnwindSafe};

use bloodtest_core::image::ImageHandle;
use jni::{
    objects::JObject,
    sys::{jint, jlong, jobject, JavaVM, JNI_VERSION_1_6},
    JNIEnv,
};
use tracing::{debug, warn};

pub mod config;
pub mod error;
pub mod java;
pub mod logging;

use config::BindingConfig;
use error::BindingError;

/// Analyze the image at `handle` and return it as a Java `TestResult`.
pub fn analyze_to_java<'local>(
    env: &mut JNIEnv<'local>,
    config: &BindingConfig,
    handle: ImageHandle,
) -> Result<JObject<'local>, BindingError> {
    let result = bloodtest_native::native_analyzer().analyze(&handle)?;
    java::build_test_result(env, config, &result)
}

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_default()
}

/// `private native TestResult analyzeImage(long imageNativeId)`
#[no_mangle]
pub extern "system" fn Java_org_master_bloodtestapp_BloodTestImageAnalyzer_analyzeImage<'local>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
    image_ptr: jlong,
) -> jobject {
    debug!("Enter native analysis");
    let config = &BindingConfig::DEFAULT;
    let handle = ImageHandle::from_raw(image_ptr);

    let outcome = catch_unwind(AssertUnwindSafe(|| analyze_to_java(&mut env, config, handle)))
        .unwrap_or_else(|payload| Err(BindingError::Panic(panic_message(payload))));
    debug!("Exit image analysis");

    match outcome {
        Ok(object) => object.into_raw(),
        Err(err) => {
            java::throw(&mut env, config, &err);
            JObject::null().into_raw()
        }
    }
}

/// Library load hook. Routes logging to logcat, then performs the one-time
/// native initialisation.
#[no_mangle]
pub extern "system" fn JNI_OnLoad(_vm: *mut JavaVM, _reserved: *mut c_void) -> jint {
    // Logging stays off if logcat cannot be opened; there is nowhere to report it.
    let _ = logging::init_logging();
    if let Err(err) = bloodtest_native::initialize() {
        // Not fatal: `analyzeImage` retries and reports the failure.
        warn!(%err, "native analysis library not initialised on load");
    }
    JNI_VERSION_1_6
}
