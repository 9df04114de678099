//! Opaque handles to natively allocated image buffers.

use std::fmt;

/// Address-like handle naming an image buffer owned by the native side.
///
/// Same width and signedness as a JNI `jlong`. The buffer is never owned
/// through the handle; it is only guaranteed valid for the duration of the
/// call it is passed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle(i64);

impl ImageHandle {
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    pub const fn as_raw(self) -> i64 {
        self.0
    }

    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl From<i64> for ImageHandle {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ImageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

/// An image object able to expose a stable handle to its native memory.
pub trait NativeImage {
    fn native_handle(&self) -> ImageHandle;
}

impl NativeImage for ImageHandle {
    fn native_handle(&self) -> ImageHandle {
        *self
    }
}

impl<T: NativeImage + ?Sized> NativeImage for &T {
    fn native_handle(&self) -> ImageHandle {
        (**self).native_handle()
    }
}
