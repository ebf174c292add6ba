//! SDL_error.h: the thread-local error string.
//!
//! Every failing SDL3 call leaves detail here. The pointer returned by
//! [`SDL_GetError`] is owned by SDL and only valid until the next SDL call
//! on the same thread; copy it out before calling anything else.

use std::ffi::c_char;

sdl3_fn! {
    pub fn SDL_GetError() -> *const c_char;
    pub fn SDL_ClearError() -> bool;
}
