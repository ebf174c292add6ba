//! SDL_init.h: subsystem initialization, plus the version/metadata calls
//! from SDL_version.h that live alongside it.

use std::ffi::{c_char, c_int};

pub type SDL_InitFlags = u32;

pub const SDL_INIT_AUDIO: SDL_InitFlags = 0x0000_0010;
pub const SDL_INIT_VIDEO: SDL_InitFlags = 0x0000_0020;
pub const SDL_INIT_JOYSTICK: SDL_InitFlags = 0x0000_0200;
pub const SDL_INIT_HAPTIC: SDL_InitFlags = 0x0000_1000;
pub const SDL_INIT_GAMEPAD: SDL_InitFlags = 0x0000_2000;
pub const SDL_INIT_EVENTS: SDL_InitFlags = 0x0000_4000;
pub const SDL_INIT_SENSOR: SDL_InitFlags = 0x0000_8000;
pub const SDL_INIT_CAMERA: SDL_InitFlags = 0x0001_0000;

sdl3_fn! {
    pub fn SDL_Init(flags: SDL_InitFlags) -> bool;
    pub fn SDL_InitSubSystem(flags: SDL_InitFlags) -> bool;
    pub fn SDL_QuitSubSystem(flags: SDL_InitFlags);
    /// Returns the subset of `flags` that is currently initialized; pass 0
    /// to query all subsystems.
    pub fn SDL_WasInit(flags: SDL_InitFlags) -> SDL_InitFlags;
    pub fn SDL_Quit();
    pub fn SDL_SetAppMetadata(appname: *const c_char, appversion: *const c_char, appidentifier: *const c_char) -> bool;
    pub fn SDL_GetVersion() -> c_int;
    pub fn SDL_GetRevision() -> *const c_char;
}
