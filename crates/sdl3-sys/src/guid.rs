//! SDL_guid.h: the 128-bit device GUID and its string form.

use std::ffi::{c_char, c_int};

/// A 128-bit identifier for an input device, stable across runs.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct SDL_GUID {
    pub data: [u8; 16],
}

sdl3_fn! {
    /// Writes an ASCII representation into `pszGUID` (needs 33 bytes).
    pub fn SDL_GUIDToString(guid: SDL_GUID, pszGUID: *mut c_char, cbGUID: c_int);
    pub fn SDL_StringToGUID(pchGUID: *const c_char) -> SDL_GUID;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{align_of, size_of};

    #[test]
    fn guid_is_sixteen_packed_bytes() {
        assert_eq!(size_of::<SDL_GUID>(), 16);
        assert_eq!(align_of::<SDL_GUID>(), 1);
    }
}
