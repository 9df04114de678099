// ## 📂 File: `native/src/ffi.rs`

//! Raw C ABI of the native analysis library and thin safe wrappers around it.
//!
//! The library exports:
//!
//! ```c
//! typedef struct { double conc[9]; double qc1_variation; double qc2_variation; } ta_test_info;
//! int32_t     ta_init(void);
//! const char *ta_version(void);
//! int32_t     ta_detect_concentrations(int64_t mat, ta_test_info *out);
//! const char *ta_last_error(void);
//! int64_t     ta_image_read(const char *path);
//! void        ta_image_release(int64_t mat);
//! ```
//!
//! `mat` is the address of a `cv::Mat`. Without the `link` feature the
//! wrappers report `NativeError::Unlinked` instead of calling out.

use std::path::Path;

use bloodtest_core::{image::ImageHandle, result::RawTestInfo};

use crate::{error::NativeError, LibraryInfo};

pub(crate) use imp::*;

#[cfg(feature = "link")]
mod imp {
    use std::ffi::{c_char, CStr, CString};

    use super::*;
    use crate::status::check_status;

    #[link(name = "TestAnalysis")]
    extern "C" {
        fn ta_init() -> i32;
        fn ta_version() -> *const c_char;
        fn ta_detect_concentrations(mat: i64, out: *mut RawTestInfo) -> i32;
        fn ta_last_error() -> *const c_char;
        fn ta_image_read(path: *const c_char) -> i64;
        fn ta_image_release(mat: i64);
    }

    /// Copy a borrowed, NUL-terminated string owned by the library.
    fn owned_string(ptr: *const c_char) -> String {
        if ptr.is_null() {
            return String::new();
        }
        // SAFETY: non-null pointers returned by the library point to a
        // NUL-terminated string that stays valid until the next library call.
        unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
    }

    fn last_error() -> String {
        // SAFETY: no arguments; returns a library-owned string or NULL.
        owned_string(unsafe { ta_last_error() })
    }

    pub(crate) fn init() -> Result<LibraryInfo, NativeError> {
        // SAFETY: no arguments; safe to call more than once.
        let code = unsafe { ta_init() };
        if code != 0 {
            return Err(NativeError::Init(code));
        }
        // SAFETY: no arguments; returns a static string or NULL.
        let version = owned_string(unsafe { ta_version() });
        Ok(LibraryInfo { version })
    }

    pub(crate) fn detect_concentrations(handle: ImageHandle) -> Result<RawTestInfo, NativeError> {
        let mut out = RawTestInfo::default();
        // SAFETY: `out` is a valid, exclusively borrowed `#[repr(C)]` struct.
        // The caller guarantees `handle` names a live `cv::Mat` for this call.
        let code = unsafe { ta_detect_concentrations(handle.as_raw(), &mut out) };
        check_status(code, last_error)?;
        Ok(out)
    }

    pub(crate) fn image_read(path: &Path) -> Result<ImageHandle, NativeError> {
        let c_path = path
            .to_str()
            .and_then(|s| CString::new(s).ok())
            .ok_or_else(|| NativeError::InvalidPath(path.to_path_buf()))?;
        // SAFETY: `c_path` is NUL-terminated and outlives the call.
        let mat = unsafe { ta_image_read(c_path.as_ptr()) };
        if mat == 0 {
            return Err(NativeError::ImageRead(path.to_path_buf()));
        }
        Ok(ImageHandle::from_raw(mat))
    }

    pub(crate) fn image_release(handle: ImageHandle) {
        // SAFETY: `handle` came from `ta_image_read` and is released exactly once.
        unsafe { ta_image_release(handle.as_raw()) }
    }
}

#[cfg(not(feature = "link"))]
mod imp {
    use super::*;

    pub(crate) fn init() -> Result<LibraryInfo, NativeError> {
        Err(NativeError::Unlinked)
    }

    pub(crate) fn detect_concentrations(_handle: ImageHandle) -> Result<RawTestInfo, NativeError> {
        Err(NativeError::Unlinked)
    }

    pub(crate) fn image_read(_path: &Path) -> Result<ImageHandle, NativeError> {
        Err(NativeError::Unlinked)
    }

    pub(crate) fn image_release(_handle: ImageHandle) {}
}
