//! SDL_pixels.h: color value types and the pixel-format constant table.
//!
//! `SDL_PixelFormat` is an open-ended set (the native header computes most
//! values from packed bit-field macros, plus FourCC codes), so it is mirrored
//! as an integer alias with constants rather than a closed Rust enum.

pub type SDL_PixelFormat = u32;

pub const SDL_PIXELFORMAT_UNKNOWN: SDL_PixelFormat = 0;
pub const SDL_PIXELFORMAT_INDEX8: SDL_PixelFormat = 0x1300_0801;
pub const SDL_PIXELFORMAT_RGB565: SDL_PixelFormat = 0x1515_1002;
pub const SDL_PIXELFORMAT_RGB24: SDL_PixelFormat = 0x1710_1803;
pub const SDL_PIXELFORMAT_BGR24: SDL_PixelFormat = 0x1740_1803;
pub const SDL_PIXELFORMAT_XRGB8888: SDL_PixelFormat = 0x1616_1804;
pub const SDL_PIXELFORMAT_RGBX8888: SDL_PixelFormat = 0x1626_1804;
pub const SDL_PIXELFORMAT_XBGR8888: SDL_PixelFormat = 0x1656_1804;
pub const SDL_PIXELFORMAT_BGRX8888: SDL_PixelFormat = 0x1666_1804;
pub const SDL_PIXELFORMAT_ARGB8888: SDL_PixelFormat = 0x1636_2004;
pub const SDL_PIXELFORMAT_RGBA8888: SDL_PixelFormat = 0x1646_2004;
pub const SDL_PIXELFORMAT_ABGR8888: SDL_PixelFormat = 0x1676_2004;
pub const SDL_PIXELFORMAT_BGRA8888: SDL_PixelFormat = 0x1686_2004;
pub const SDL_PIXELFORMAT_ARGB2101010: SDL_PixelFormat = 0x1637_2004;

// FourCC formats.
pub const SDL_PIXELFORMAT_YV12: SDL_PixelFormat = 0x3231_5659;
pub const SDL_PIXELFORMAT_IYUV: SDL_PixelFormat = 0x5655_5949;
pub const SDL_PIXELFORMAT_YUY2: SDL_PixelFormat = 0x3259_5559;
pub const SDL_PIXELFORMAT_NV12: SDL_PixelFormat = 0x3231_564E;
pub const SDL_PIXELFORMAT_NV21: SDL_PixelFormat = 0x3132_564E;

pub const SDL_ALPHA_OPAQUE: u8 = 255;
pub const SDL_ALPHA_TRANSPARENT: u8 = 0;
pub const SDL_ALPHA_OPAQUE_FLOAT: f32 = 1.0;
pub const SDL_ALPHA_TRANSPARENT_FLOAT: f32 = 0.0;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct SDL_Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct SDL_FColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn color_layouts_match_native() {
        assert_eq!(size_of::<SDL_Color>(), 4);
        assert_eq!(size_of::<SDL_FColor>(), 16);
    }

    #[test]
    fn fourcc_formats_spell_their_codes() {
        // FourCC values are the four ASCII bytes little-endian.
        assert_eq!(&SDL_PIXELFORMAT_NV12.to_le_bytes(), b"NV12");
        assert_eq!(&SDL_PIXELFORMAT_NV21.to_le_bytes(), b"NV21");
        assert_eq!(&SDL_PIXELFORMAT_YV12.to_le_bytes(), b"YV12");
        assert_eq!(&SDL_PIXELFORMAT_YUY2.to_le_bytes(), b"YUY2");
    }

    #[test]
    fn packed_format_bit_fields() {
        // SDL_DEFINE_PIXELFORMAT(type, order, layout, bits, bytes):
        // bit 28 set, then nibbles for type/order/layout, bits<<8, bytes.
        assert_eq!(SDL_PIXELFORMAT_RGBA8888 >> 28, 1);
        assert_eq!(SDL_PIXELFORMAT_RGBA8888 & 0xFF, 4); // bytes per pixel
        assert_eq!((SDL_PIXELFORMAT_RGBA8888 >> 8) & 0xFF, 32); // bits per pixel
        assert_eq!((SDL_PIXELFORMAT_RGB565 >> 8) & 0xFF, 16);
        assert_eq!(SDL_PIXELFORMAT_RGB565 & 0xFF, 2);
    }
}
