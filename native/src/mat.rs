use std::path::{Path, PathBuf};

use bloodtest_core::image::{ImageHandle, NativeImage};
use tracing::debug;

use crate::{error::NativeError, ffi, initialize};

/// Image decoded and owned by the native library. Released on drop.
#[derive(Debug)]
pub struct NativeMat {
    handle: ImageHandle,
    path: PathBuf,
}

impl NativeMat {
    pub fn read(path: impl AsRef<Path>) -> Result<Self, NativeError> {
        let path = path.as_ref();
        initialize()?;
        let handle = ffi::image_read(path)?;
        debug!(%handle, path = %path.display(), "image loaded");
        Ok(Self { handle, path: path.to_path_buf() })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl NativeImage for NativeMat {
    fn native_handle(&self) -> ImageHandle {
        self.handle
    }
}

impl Drop for NativeMat {
    fn drop(&mut self) {
        ffi::image_release(self.handle);
    }
}
