//! Safe, idiomatic bindings over the SDL3 2D stack: initialization,
//! windows and displays, accelerated rendering, property bags, and
//! gamepads.
//!
//! Resources are RAII handles over the native create/destroy pairs: a
//! [`video::Window`] destroys its window on drop, a [`render::Texture`]
//! borrows its [`render::Renderer`] so it cannot outlive it, and the
//! [`init::Sdl`] guard shuts the library down last. Fallible native
//! calls surface as [`Result`] carrying the native error string.
//!
//! The raw layer is re-exported as [`sys`] for callers that need a
//! function this crate does not wrap.

pub use sdl3_sys as sys;

pub mod error;
mod ffi_util;
pub mod gamepad;
pub mod guid;
pub mod init;
pub mod pixels;
pub mod properties;
pub mod render;
pub mod video;

pub use error::{clear_error, get_error, Error, Result};
pub use guid::Guid;
pub use init::{InitFlags, Sdl};
pub use pixels::{Color, FColor, PixelFormat};
pub use properties::Properties;
pub use render::{BlendMode, Renderer, Surface, Texture, TextureAccess, Vertex, Vsync};
pub use video::{DisplayId, DisplayMode, Window, WindowFlags, WindowId, WindowPos};

// Geometry value types, shared verbatim with the raw layer.
pub use sdl3_sys::rect::{
    SDL_FPoint as FPoint, SDL_FRect as FRect, SDL_Point as Point, SDL_Rect as Rect,
};
