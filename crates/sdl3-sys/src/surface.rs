//! SDL_surface.h: the public surface struct and the pieces the render API
//! needs from it (`SDL_RenderReadPixels` hands ownership of one to the
//! caller).

use std::ffi::{c_int, c_void};

use crate::pixels::SDL_PixelFormat;

pub type SDL_SurfaceFlags = u32;

pub const SDL_SURFACE_PREALLOCATED: SDL_SurfaceFlags = 0x0000_0001;
pub const SDL_SURFACE_LOCK_NEEDED: SDL_SurfaceFlags = 0x0000_0002;
pub const SDL_SURFACE_LOCKED: SDL_SurfaceFlags = 0x0000_0004;
pub const SDL_SURFACE_SIMD_ALIGNED: SDL_SurfaceFlags = 0x0000_0008;

/// Unlike most SDL3 resources the surface struct is public; everything past
/// `reserved` is implementation detail behind the pointer.
#[repr(C)]
#[derive(Debug)]
pub struct SDL_Surface {
    pub flags: SDL_SurfaceFlags,
    pub format: SDL_PixelFormat,
    pub w: c_int,
    pub h: c_int,
    pub pitch: c_int,
    pub pixels: *mut c_void,
    pub refcount: c_int,
    pub reserved: *mut c_void,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SDL_ScaleMode {
    Nearest = 0,
    Linear = 1,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SDL_FlipMode {
    None = 0,
    Horizontal = 1,
    Vertical = 2,
}

sdl3_fn! {
    pub fn SDL_DestroySurface(surface: *mut SDL_Surface);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{offset_of, size_of};

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn surface_layout_matches_native() {
        assert_eq!(size_of::<SDL_Surface>(), 48);
        assert_eq!(offset_of!(SDL_Surface, pixels), 24);
        assert_eq!(offset_of!(SDL_Surface, refcount), 32);
        assert_eq!(offset_of!(SDL_Surface, reserved), 40);
    }
}
