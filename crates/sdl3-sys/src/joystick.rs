//! SDL_joystick.h: the subset the gamepad API is built on.
//!
//! The gamepad layer hands out joystick instance IDs and an underlying
//! `SDL_Joystick` handle; only those crossover pieces are bound here.

use std::ffi::{c_char, c_int};

/// Opaque joystick handle; owned by the native library.
#[repr(C)]
pub struct SDL_Joystick {
    _private: [u8; 0],
}

/// Joystick instance ID. 0 is the invalid sentinel.
pub type SDL_JoystickID = u32;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SDL_JoystickConnectionState {
    Invalid = -1,
    Unknown = 0,
    Wired = 1,
    Wireless = 2,
}

// Capability property keys shared with the gamepad API (the gamepad
// SDL_PROP_GAMEPAD_CAP_* defines alias these verbatim).
pub const SDL_PROP_JOYSTICK_CAP_MONO_LED_BOOLEAN: &str = "SDL.joystick.cap.mono_led";
pub const SDL_PROP_JOYSTICK_CAP_RGB_LED_BOOLEAN: &str = "SDL.joystick.cap.rgb_led";
pub const SDL_PROP_JOYSTICK_CAP_PLAYER_LED_BOOLEAN: &str = "SDL.joystick.cap.player_led";
pub const SDL_PROP_JOYSTICK_CAP_RUMBLE_BOOLEAN: &str = "SDL.joystick.cap.rumble";
pub const SDL_PROP_JOYSTICK_CAP_TRIGGER_RUMBLE_BOOLEAN: &str = "SDL.joystick.cap.trigger_rumble";

sdl3_fn! {
    /// Caller owns the returned array; release it with
    /// [`crate::stdinc::SDL_free`].
    pub fn SDL_GetJoysticks(count: *mut c_int) -> *mut SDL_JoystickID;
    pub fn SDL_GetJoystickFromID(instance_id: SDL_JoystickID) -> *mut SDL_Joystick;
    pub fn SDL_GetJoystickID(joystick: *mut SDL_Joystick) -> SDL_JoystickID;
    pub fn SDL_GetJoystickName(joystick: *mut SDL_Joystick) -> *const c_char;
}
