//! SDL_gamepad.h: the gamepad (game controller) API.
//!
//! A gamepad is a joystick with a standardized button/axis layout applied
//! via mapping strings; both the joystick instance ID space and the
//! underlying `SDL_Joystick` handle show through here.

use std::ffi::{c_char, c_int, c_void};

use crate::guid::SDL_GUID;
use crate::joystick::{SDL_Joystick, SDL_JoystickConnectionState, SDL_JoystickID};
use crate::power::SDL_PowerState;
use crate::properties::SDL_PropertiesID;
use crate::sensor::SDL_SensorType;

// ---------------------------------------------------------------------------
// Handle and enums
// ---------------------------------------------------------------------------

/// Opaque gamepad handle; owned by the native library.
#[repr(C)]
pub struct SDL_Gamepad {
    _private: [u8; 0],
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SDL_GamepadType {
    Unknown = 0,
    Standard = 1,
    Xbox360 = 2,
    XboxOne = 3,
    Ps3 = 4,
    Ps4 = 5,
    Ps5 = 6,
    NintendoSwitchPro = 7,
    NintendoSwitchJoyconLeft = 8,
    NintendoSwitchJoyconRight = 9,
    NintendoSwitchJoyconPair = 10,
    Count = 11,
}

/// Positional button layout (matches Xbox positions; use
/// [`SDL_GetGamepadButtonLabel`] for the glyph on the physical controller).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SDL_GamepadButton {
    Invalid = -1,
    South = 0,
    East = 1,
    West = 2,
    North = 3,
    Back = 4,
    Guide = 5,
    Start = 6,
    LeftStick = 7,
    RightStick = 8,
    LeftShoulder = 9,
    RightShoulder = 10,
    DpadUp = 11,
    DpadDown = 12,
    DpadLeft = 13,
    DpadRight = 14,
    Misc1 = 15,
    RightPaddle1 = 16,
    LeftPaddle1 = 17,
    RightPaddle2 = 18,
    LeftPaddle2 = 19,
    Touchpad = 20,
    Misc2 = 21,
    Misc3 = 22,
    Misc4 = 23,
    Misc5 = 24,
    Misc6 = 25,
    Count = 26,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SDL_GamepadButtonLabel {
    Unknown = 0,
    A = 1,
    B = 2,
    X = 3,
    Y = 4,
    Cross = 5,
    Circle = 6,
    Square = 7,
    Triangle = 8,
}

/// Axis values range from -32768 to 32767; triggers rest at 0 and report
/// only positive values.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SDL_GamepadAxis {
    Invalid = -1,
    LeftX = 0,
    LeftY = 1,
    RightX = 2,
    RightY = 3,
    LeftTrigger = 4,
    RightTrigger = 5,
    Count = 6,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SDL_GamepadBindingType {
    None = 0,
    Button = 1,
    Axis = 2,
    Hat = 3,
}

// ---------------------------------------------------------------------------
// Binding struct (nested C unions mirrored exactly)
// ---------------------------------------------------------------------------

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct SDL_GamepadBindingInputAxis {
    pub axis: c_int,
    pub axis_min: c_int,
    pub axis_max: c_int,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct SDL_GamepadBindingInputHat {
    pub hat: c_int,
    pub hat_mask: c_int,
}

#[repr(C)]
#[derive(Copy, Clone)]
pub union SDL_GamepadBindingInput {
    pub button: c_int,
    pub axis: SDL_GamepadBindingInputAxis,
    pub hat: SDL_GamepadBindingInputHat,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct SDL_GamepadBindingOutputAxis {
    pub axis: SDL_GamepadAxis,
    pub axis_min: c_int,
    pub axis_max: c_int,
}

#[repr(C)]
#[derive(Copy, Clone)]
pub union SDL_GamepadBindingOutput {
    pub button: SDL_GamepadButton,
    pub axis: SDL_GamepadBindingOutputAxis,
}

/// One raw-input-to-gamepad-control mapping entry. Which union arm is
/// valid is selected by the matching `*_type` discriminant.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct SDL_GamepadBinding {
    pub input_type: SDL_GamepadBindingType,
    pub input: SDL_GamepadBindingInput,
    pub output_type: SDL_GamepadBindingType,
    pub output: SDL_GamepadBindingOutput,
}

// ---------------------------------------------------------------------------
// Property keys (aliases of the joystick capability keys, verbatim)
// ---------------------------------------------------------------------------

pub const SDL_PROP_GAMEPAD_CAP_MONO_LED_BOOLEAN: &str =
    crate::joystick::SDL_PROP_JOYSTICK_CAP_MONO_LED_BOOLEAN;
pub const SDL_PROP_GAMEPAD_CAP_RGB_LED_BOOLEAN: &str =
    crate::joystick::SDL_PROP_JOYSTICK_CAP_RGB_LED_BOOLEAN;
pub const SDL_PROP_GAMEPAD_CAP_PLAYER_LED_BOOLEAN: &str =
    crate::joystick::SDL_PROP_JOYSTICK_CAP_PLAYER_LED_BOOLEAN;
pub const SDL_PROP_GAMEPAD_CAP_RUMBLE_BOOLEAN: &str =
    crate::joystick::SDL_PROP_JOYSTICK_CAP_RUMBLE_BOOLEAN;
pub const SDL_PROP_GAMEPAD_CAP_TRIGGER_RUMBLE_BOOLEAN: &str =
    crate::joystick::SDL_PROP_JOYSTICK_CAP_TRIGGER_RUMBLE_BOOLEAN;

// ---------------------------------------------------------------------------
// Mapping management
// ---------------------------------------------------------------------------

sdl3_fn! {
    /// Legacy int convention: 1 if a new mapping was added, 0 if an
    /// existing one was updated, -1 on error.
    pub fn SDL_AddGamepadMapping(mapping: *const c_char) -> c_int;
    /// Returns the number of mappings added, or -1 on error.
    pub fn SDL_AddGamepadMappingsFromFile(file: *const c_char) -> c_int;
    pub fn SDL_ReloadGamepadMappings() -> bool;
    /// Caller owns the returned array; it is a single allocation (the
    /// string data lives behind the pointer array), so release it with one
    /// [`crate::stdinc::SDL_free`] on the array pointer.
    pub fn SDL_GetGamepadMappings(count: *mut c_int) -> *mut *mut c_char;
    /// Caller owns the returned string; release with SDL_free.
    pub fn SDL_GetGamepadMappingForGUID(guid: SDL_GUID) -> *mut c_char;
    /// Caller owns the returned string; release with SDL_free.
    pub fn SDL_GetGamepadMapping(gamepad: *mut SDL_Gamepad) -> *mut c_char;
    pub fn SDL_SetGamepadMapping(instance_id: SDL_JoystickID, mapping: *const c_char) -> bool;
}

// ---------------------------------------------------------------------------
// Enumeration and preview accessors (no open handle required)
// ---------------------------------------------------------------------------

sdl3_fn! {
    pub fn SDL_HasGamepad() -> bool;
    /// Caller owns the returned array; release it with
    /// [`crate::stdinc::SDL_free`].
    pub fn SDL_GetGamepads(count: *mut c_int) -> *mut SDL_JoystickID;
    pub fn SDL_IsGamepad(instance_id: SDL_JoystickID) -> bool;
    pub fn SDL_GetGamepadNameForID(instance_id: SDL_JoystickID) -> *const c_char;
    pub fn SDL_GetGamepadPathForID(instance_id: SDL_JoystickID) -> *const c_char;
    pub fn SDL_GetGamepadPlayerIndexForID(instance_id: SDL_JoystickID) -> c_int;
    pub fn SDL_GetGamepadGUIDForID(instance_id: SDL_JoystickID) -> SDL_GUID;
    pub fn SDL_GetGamepadVendorForID(instance_id: SDL_JoystickID) -> u16;
    pub fn SDL_GetGamepadProductForID(instance_id: SDL_JoystickID) -> u16;
    pub fn SDL_GetGamepadProductVersionForID(instance_id: SDL_JoystickID) -> u16;
    pub fn SDL_GetGamepadTypeForID(instance_id: SDL_JoystickID) -> SDL_GamepadType;
    pub fn SDL_GetRealGamepadTypeForID(instance_id: SDL_JoystickID) -> SDL_GamepadType;
    /// Caller owns the returned string; release with SDL_free.
    pub fn SDL_GetGamepadMappingForID(instance_id: SDL_JoystickID) -> *mut c_char;
}

// ---------------------------------------------------------------------------
// Open handles
// ---------------------------------------------------------------------------

sdl3_fn! {
    pub fn SDL_OpenGamepad(instance_id: SDL_JoystickID) -> *mut SDL_Gamepad;
    pub fn SDL_GetGamepadFromID(instance_id: SDL_JoystickID) -> *mut SDL_Gamepad;
    pub fn SDL_GetGamepadFromPlayerIndex(player_index: c_int) -> *mut SDL_Gamepad;
    pub fn SDL_CloseGamepad(gamepad: *mut SDL_Gamepad);

    pub fn SDL_GetGamepadProperties(gamepad: *mut SDL_Gamepad) -> SDL_PropertiesID;
    pub fn SDL_GetGamepadID(gamepad: *mut SDL_Gamepad) -> SDL_JoystickID;
    pub fn SDL_GetGamepadName(gamepad: *mut SDL_Gamepad) -> *const c_char;
    pub fn SDL_GetGamepadPath(gamepad: *mut SDL_Gamepad) -> *const c_char;
    pub fn SDL_GetGamepadType(gamepad: *mut SDL_Gamepad) -> SDL_GamepadType;
    pub fn SDL_GetRealGamepadType(gamepad: *mut SDL_Gamepad) -> SDL_GamepadType;
    pub fn SDL_GetGamepadPlayerIndex(gamepad: *mut SDL_Gamepad) -> c_int;
    pub fn SDL_SetGamepadPlayerIndex(gamepad: *mut SDL_Gamepad, player_index: c_int) -> bool;
    pub fn SDL_GetGamepadVendor(gamepad: *mut SDL_Gamepad) -> u16;
    pub fn SDL_GetGamepadProduct(gamepad: *mut SDL_Gamepad) -> u16;
    pub fn SDL_GetGamepadProductVersion(gamepad: *mut SDL_Gamepad) -> u16;
    pub fn SDL_GetGamepadFirmwareVersion(gamepad: *mut SDL_Gamepad) -> u16;
    pub fn SDL_GetGamepadSerial(gamepad: *mut SDL_Gamepad) -> *const c_char;
    pub fn SDL_GetGamepadSteamHandle(gamepad: *mut SDL_Gamepad) -> u64;
    pub fn SDL_GetGamepadConnectionState(gamepad: *mut SDL_Gamepad) -> SDL_JoystickConnectionState;
    /// `percent` may be null; otherwise receives -1 or a 0..=100 estimate.
    pub fn SDL_GetGamepadPowerInfo(gamepad: *mut SDL_Gamepad, percent: *mut c_int) -> SDL_PowerState;
    pub fn SDL_GamepadConnected(gamepad: *mut SDL_Gamepad) -> bool;
    pub fn SDL_GetGamepadJoystick(gamepad: *mut SDL_Gamepad) -> *mut SDL_Joystick;
}

// ---------------------------------------------------------------------------
// Event pump control and string/enum mapping
// ---------------------------------------------------------------------------

sdl3_fn! {
    pub fn SDL_SetGamepadEventsEnabled(enabled: bool);
    pub fn SDL_GamepadEventsEnabled() -> bool;
    /// Manual state refresh for callers that don't run the event loop.
    pub fn SDL_UpdateGamepads();

    pub fn SDL_GetGamepadTypeFromString(str_: *const c_char) -> SDL_GamepadType;
    pub fn SDL_GetGamepadStringForType(type_: SDL_GamepadType) -> *const c_char;
    pub fn SDL_GetGamepadAxisFromString(str_: *const c_char) -> SDL_GamepadAxis;
    pub fn SDL_GetGamepadStringForAxis(axis: SDL_GamepadAxis) -> *const c_char;
    pub fn SDL_GetGamepadButtonFromString(str_: *const c_char) -> SDL_GamepadButton;
    pub fn SDL_GetGamepadStringForButton(button: SDL_GamepadButton) -> *const c_char;
}

// ---------------------------------------------------------------------------
// State queries
// ---------------------------------------------------------------------------

sdl3_fn! {
    /// Caller owns the returned array of pointers (a single allocation);
    /// release it with one [`crate::stdinc::SDL_free`] on the array pointer.
    pub fn SDL_GetGamepadBindings(gamepad: *mut SDL_Gamepad, count: *mut c_int) -> *mut *mut SDL_GamepadBinding;

    pub fn SDL_GamepadHasAxis(gamepad: *mut SDL_Gamepad, axis: SDL_GamepadAxis) -> bool;
    pub fn SDL_GetGamepadAxis(gamepad: *mut SDL_Gamepad, axis: SDL_GamepadAxis) -> i16;
    pub fn SDL_GamepadHasButton(gamepad: *mut SDL_Gamepad, button: SDL_GamepadButton) -> bool;
    pub fn SDL_GetGamepadButton(gamepad: *mut SDL_Gamepad, button: SDL_GamepadButton) -> bool;
    pub fn SDL_GetGamepadButtonLabelForType(type_: SDL_GamepadType, button: SDL_GamepadButton) -> SDL_GamepadButtonLabel;
    pub fn SDL_GetGamepadButtonLabel(gamepad: *mut SDL_Gamepad, button: SDL_GamepadButton) -> SDL_GamepadButtonLabel;

    pub fn SDL_GetNumGamepadTouchpads(gamepad: *mut SDL_Gamepad) -> c_int;
    pub fn SDL_GetNumGamepadTouchpadFingers(gamepad: *mut SDL_Gamepad, touchpad: c_int) -> c_int;
    pub fn SDL_GetGamepadTouchpadFinger(gamepad: *mut SDL_Gamepad, touchpad: c_int, finger: c_int, down: *mut bool, x: *mut f32, y: *mut f32, pressure: *mut f32) -> bool;

    pub fn SDL_GamepadHasSensor(gamepad: *mut SDL_Gamepad, type_: SDL_SensorType) -> bool;
    pub fn SDL_SetGamepadSensorEnabled(gamepad: *mut SDL_Gamepad, type_: SDL_SensorType, enabled: bool) -> bool;
    pub fn SDL_GamepadSensorEnabled(gamepad: *mut SDL_Gamepad, type_: SDL_SensorType) -> bool;
    pub fn SDL_GetGamepadSensorDataRate(gamepad: *mut SDL_Gamepad, type_: SDL_SensorType) -> f32;
    pub fn SDL_GetGamepadSensorData(gamepad: *mut SDL_Gamepad, type_: SDL_SensorType, data: *mut f32, num_values: c_int) -> bool;
}

// ---------------------------------------------------------------------------
// Output (rumble, LED, effects) and platform decorations
// ---------------------------------------------------------------------------

sdl3_fn! {
    /// Rumble intensities are 0..=0xFFFF; a fresh call cancels the
    /// previous effect.
    pub fn SDL_RumbleGamepad(gamepad: *mut SDL_Gamepad, low_frequency_rumble: u16, high_frequency_rumble: u16, duration_ms: u32) -> bool;
    pub fn SDL_RumbleGamepadTriggers(gamepad: *mut SDL_Gamepad, left_rumble: u16, right_rumble: u16, duration_ms: u32) -> bool;
    pub fn SDL_SetGamepadLED(gamepad: *mut SDL_Gamepad, red: u8, green: u8, blue: u8) -> bool;
    pub fn SDL_SendGamepadEffect(gamepad: *mut SDL_Gamepad, data: *const c_void, size: c_int) -> bool;

    pub fn SDL_GetGamepadAppleSFSymbolsNameForButton(gamepad: *mut SDL_Gamepad, button: SDL_GamepadButton) -> *const c_char;
    pub fn SDL_GetGamepadAppleSFSymbolsNameForAxis(gamepad: *mut SDL_Gamepad, axis: SDL_GamepadAxis) -> *const c_char;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{offset_of, size_of};

    #[test]
    fn binding_layout_matches_native() {
        // input_type (4) + input union (12) + output_type (4) + output
        // union (12), all 4-aligned.
        assert_eq!(size_of::<SDL_GamepadBindingInput>(), 12);
        assert_eq!(size_of::<SDL_GamepadBindingOutput>(), 12);
        assert_eq!(size_of::<SDL_GamepadBinding>(), 32);
        assert_eq!(offset_of!(SDL_GamepadBinding, input), 4);
        assert_eq!(offset_of!(SDL_GamepadBinding, output_type), 16);
        assert_eq!(offset_of!(SDL_GamepadBinding, output), 20);
    }

    #[test]
    fn axis_values_match_header() {
        assert_eq!(SDL_GamepadAxis::Invalid as i32, -1);
        assert_eq!(SDL_GamepadAxis::LeftX as i32, 0);
        assert_eq!(SDL_GamepadAxis::RightTrigger as i32, 5);
        assert_eq!(SDL_GamepadAxis::Count as i32, 6);
    }

    #[test]
    fn button_values_match_header() {
        assert_eq!(SDL_GamepadButton::South as i32, 0);
        assert_eq!(SDL_GamepadButton::DpadRight as i32, 14);
        assert_eq!(SDL_GamepadButton::Touchpad as i32, 20);
        assert_eq!(SDL_GamepadButton::Count as i32, 26);
    }

    #[test]
    fn type_values_match_header() {
        assert_eq!(SDL_GamepadType::Standard as i32, 1);
        assert_eq!(SDL_GamepadType::Ps5 as i32, 6);
        assert_eq!(SDL_GamepadType::NintendoSwitchJoyconPair as i32, 10);
    }

    #[test]
    fn capability_keys_alias_joystick_keys() {
        assert_eq!(SDL_PROP_GAMEPAD_CAP_RUMBLE_BOOLEAN, "SDL.joystick.cap.rumble");
        assert_eq!(SDL_PROP_GAMEPAD_CAP_RGB_LED_BOOLEAN, "SDL.joystick.cap.rgb_led");
    }
}
