//! Marshalling helpers shared by every wrapper module.

use std::ffi::{c_char, c_int, CStr, CString};

use crate::error::{Error, Result};

/// Decode a borrowed, native-owned C string. Invalid UTF-8 is replaced
/// rather than rejected; SDL strings are UTF-8 by contract.
pub(crate) unsafe fn cstr_to_string(ptr: *const c_char) -> String {
    unsafe { CStr::from_ptr(ptr).to_string_lossy().into_owned() }
}

/// Decode a nullable, native-owned C string.
pub(crate) unsafe fn cstr_opt(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        None
    } else {
        Some(unsafe { cstr_to_string(ptr) })
    }
}

/// Encode a Rust string for a `const char *` parameter.
pub(crate) fn to_cstring(s: &str) -> Result<CString> {
    CString::new(s).map_err(|_| Error("string contains an interior NUL byte".into()))
}

/// Copy a native-allocated, caller-owned array out and release it with
/// `SDL_free`. A null pointer yields an empty vector (the caller decides
/// whether null was an error from the function's other sentinels).
pub(crate) unsafe fn copy_and_free<T: Copy>(ptr: *mut T, count: c_int) -> Vec<T> {
    if ptr.is_null() {
        return Vec::new();
    }
    let out = unsafe { std::slice::from_raw_parts(ptr, count.max(0) as usize).to_vec() };
    unsafe { sdl3_sys::stdinc::SDL_free(ptr.cast()) };
    out
}

/// Take ownership of a native-allocated string: copy it out, then
/// `SDL_free` the original. Null maps to `None`.
pub(crate) unsafe fn take_sdl_string(ptr: *mut c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    let out = unsafe { cstr_to_string(ptr) };
    unsafe { sdl3_sys::stdinc::SDL_free(ptr.cast()) };
    Some(out)
}

/// Map an optional struct reference to SDL's "null means default/absent"
/// pointer convention.
pub(crate) fn opt_ptr<T>(opt: Option<&T>) -> *const T {
    match opt {
        Some(value) => value as *const T,
        None => std::ptr::null(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_borrowed_c_strings() {
        let owned = CString::new("gamepad").unwrap();
        assert_eq!(unsafe { cstr_to_string(owned.as_ptr()) }, "gamepad");
        assert_eq!(unsafe { cstr_opt(owned.as_ptr()) }.as_deref(), Some("gamepad"));
        assert_eq!(unsafe { cstr_opt(std::ptr::null()) }, None);
    }

    #[test]
    fn rejects_interior_nul() {
        assert!(to_cstring("a\0b").is_err());
        assert!(to_cstring("plain").is_ok());
    }

    #[test]
    fn optional_refs_become_null_pointers() {
        let rect = sdl3_sys::rect::SDL_Rect { x: 1, y: 2, w: 3, h: 4 };
        assert!(opt_ptr::<sdl3_sys::rect::SDL_Rect>(None).is_null());
        assert_eq!(opt_ptr(Some(&rect)), &rect as *const _);
    }
}
