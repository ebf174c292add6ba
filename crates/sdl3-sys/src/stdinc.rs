//! Allocation entry points from SDL_stdinc.h.
//!
//! Several SDL3 query functions return buffers the caller owns; those must
//! be released through [`SDL_free`] (the native allocator), never through
//! Rust's.

use std::ffi::c_void;

sdl3_fn! {
    pub fn SDL_malloc(size: usize) -> *mut c_void;
    pub fn SDL_free(mem: *mut c_void);
}
