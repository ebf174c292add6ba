//! Low-level unsafe FFI bindings to the SDL3 shared library.
//!
//! Every type in this crate mirrors the corresponding SDL 3.2 public header
//! byte for byte, and every function forwards a single call to the native
//! entry point of the same name. Nothing here interprets results: failure
//! sentinels (`false`, null, negative values) come back exactly as the
//! native library produced them, with detail available via
//! [`error::SDL_GetError`].
//!
//! Symbols are resolved lazily at first call from the installed SDL3 shared
//! library (see [`loader`]), so building and running layout tests does not
//! require SDL3 to be present. Use the `sdl3` crate for safe, idiomatic
//! wrappers.
//!
//! Modules are grouped by SDL header of origin: [`video`] (SDL_video.h),
//! [`render`] (SDL_render.h), [`gamepad`] (SDL_gamepad.h), and the support
//! headers they pull in.

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(non_upper_case_globals)]
#![allow(clippy::missing_safety_doc)]
#![allow(clippy::too_many_arguments)]

#[macro_use]
mod macros;
pub mod loader;

pub mod blendmode;
pub mod error;
pub mod gamepad;
pub mod guid;
pub mod init;
pub mod joystick;
pub mod pixels;
pub mod power;
pub mod properties;
pub mod rect;
pub mod render;
pub mod sensor;
pub mod stdinc;
pub mod surface;
pub mod video;
