//! Device GUIDs and their canonical 32-character hex form.

use std::ffi::c_char;
use std::fmt;
use std::str::FromStr;

use sdl3_sys::guid as sys;

use crate::error::{Error, Result};
use crate::ffi_util::to_cstring;

/// A 128-bit device identifier, stable for a given device model across
/// runs. The all-zero GUID is the invalid sentinel.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Guid {
    raw: sys::SDL_GUID,
}

impl Guid {
    pub fn from_raw(raw: sys::SDL_GUID) -> Guid {
        Guid { raw }
    }

    pub fn raw(&self) -> sys::SDL_GUID {
        self.raw
    }

    pub fn is_zero(&self) -> bool {
        self.raw.data == [0; 16]
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 32 hex digits plus the terminator.
        let mut buf = [0u8; 33];
        unsafe {
            sys::SDL_GUIDToString(self.raw, buf.as_mut_ptr() as *mut c_char, buf.len() as i32);
        }
        let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
        f.write_str(std::str::from_utf8(&buf[..end]).unwrap_or(""))
    }
}

impl FromStr for Guid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Guid> {
        let c = to_cstring(s)?;
        Ok(Guid {
            raw: unsafe { sys::SDL_StringToGUID(c.as_ptr()) },
        })
    }
}
