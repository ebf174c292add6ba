//! Pixel formats and color re-exports.

use sdl3_sys::pixels as sys;

pub use sdl3_sys::pixels::{SDL_Color as Color, SDL_FColor as FColor};

/// A pixel format code.
///
/// SDL's format space is open-ended (bit-packed descriptors plus FourCC
/// codes), so this is a transparent newtype over the raw value rather than
/// a closed enum; drivers may report formats not named here.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PixelFormat(pub u32);

impl PixelFormat {
    pub const UNKNOWN: PixelFormat = PixelFormat(sys::SDL_PIXELFORMAT_UNKNOWN);
    pub const RGB565: PixelFormat = PixelFormat(sys::SDL_PIXELFORMAT_RGB565);
    pub const RGB24: PixelFormat = PixelFormat(sys::SDL_PIXELFORMAT_RGB24);
    pub const BGR24: PixelFormat = PixelFormat(sys::SDL_PIXELFORMAT_BGR24);
    pub const XRGB8888: PixelFormat = PixelFormat(sys::SDL_PIXELFORMAT_XRGB8888);
    pub const XBGR8888: PixelFormat = PixelFormat(sys::SDL_PIXELFORMAT_XBGR8888);
    pub const ARGB8888: PixelFormat = PixelFormat(sys::SDL_PIXELFORMAT_ARGB8888);
    pub const RGBA8888: PixelFormat = PixelFormat(sys::SDL_PIXELFORMAT_RGBA8888);
    pub const ABGR8888: PixelFormat = PixelFormat(sys::SDL_PIXELFORMAT_ABGR8888);
    pub const BGRA8888: PixelFormat = PixelFormat(sys::SDL_PIXELFORMAT_BGRA8888);
    pub const ARGB2101010: PixelFormat = PixelFormat(sys::SDL_PIXELFORMAT_ARGB2101010);
    pub const NV12: PixelFormat = PixelFormat(sys::SDL_PIXELFORMAT_NV12);

    pub fn from_raw(raw: u32) -> PixelFormat {
        PixelFormat(raw)
    }

    pub fn to_raw(self) -> u32 {
        self.0
    }

    /// True for FourCC (YUV-family) formats, whose bits don't follow the
    /// packed-descriptor encoding.
    pub fn is_fourcc(self) -> bool {
        self.0 != 0 && (self.0 >> 28) != 1
    }

    /// Bytes per pixel for packed/array formats; `None` for FourCC.
    pub fn bytes_per_pixel(self) -> Option<u32> {
        if self.is_fourcc() || self.0 == 0 {
            None
        } else {
            Some(self.0 & 0xFF)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_descriptors_decode() {
        assert_eq!(PixelFormat::RGBA8888.bytes_per_pixel(), Some(4));
        assert_eq!(PixelFormat::RGB565.bytes_per_pixel(), Some(2));
        assert_eq!(PixelFormat::RGB24.bytes_per_pixel(), Some(3));
        assert!(!PixelFormat::RGBA8888.is_fourcc());
    }

    #[test]
    fn fourcc_formats_are_flagged() {
        assert!(PixelFormat::NV12.is_fourcc());
        assert_eq!(PixelFormat::NV12.bytes_per_pixel(), None);
        assert_eq!(PixelFormat::UNKNOWN.bytes_per_pixel(), None);
    }
}
