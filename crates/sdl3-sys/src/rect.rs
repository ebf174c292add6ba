//! SDL_rect.h: point and rectangle value types.

use std::ffi::c_int;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct SDL_Point {
    pub x: c_int,
    pub y: c_int,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct SDL_FPoint {
    pub x: f32,
    pub y: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct SDL_Rect {
    pub x: c_int,
    pub y: c_int,
    pub w: c_int,
    pub h: c_int,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct SDL_FRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{align_of, size_of};

    #[test]
    fn layouts_match_native() {
        assert_eq!(size_of::<SDL_Point>(), 8);
        assert_eq!(size_of::<SDL_FPoint>(), 8);
        assert_eq!(size_of::<SDL_Rect>(), 16);
        assert_eq!(size_of::<SDL_FRect>(), 16);
        assert_eq!(align_of::<SDL_Rect>(), 4);
        assert_eq!(align_of::<SDL_FRect>(), 4);
    }
}
