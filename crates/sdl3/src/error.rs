//! Error surface: the native thread-local error string, verbatim.
//!
//! SDL3 signals failure through sentinel returns (`false`, null, negative
//! values) and leaves detail in a per-thread error string. This module
//! copies that string out; it never invents error categories of its own.

use std::ffi::CStr;

use sdl3_sys::error as sys;

/// An error reported by the native SDL3 library.
///
/// Carries exactly the message `SDL_GetError` produced at the failing
/// call site.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct Error(pub(crate) String);

impl Error {
    /// Capture the current native error string.
    pub(crate) fn from_sdl() -> Self {
        Error(get_error())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Fetch the calling thread's current SDL error message.
///
/// The message is only meaningful directly after a failed call; SDL does
/// not clear it on success.
pub fn get_error() -> String {
    unsafe {
        let ptr = sys::SDL_GetError();
        if ptr.is_null() {
            String::new()
        } else {
            CStr::from_ptr(ptr).to_string_lossy().into_owned()
        }
    }
}

/// Clear the calling thread's SDL error message.
pub fn clear_error() {
    unsafe {
        sys::SDL_ClearError();
    }
}
