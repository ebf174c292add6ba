//! Gamepads: enumeration, mappings, input state, and output effects.
//!
//! A gamepad is a joystick that SDL has applied a standardized
//! button/axis layout to via a mapping string. Devices are named by
//! joystick instance IDs; opening one yields a [`Gamepad`] handle.

use std::ffi::c_int;
use std::fmt;

use sdl3_sys::gamepad as sys;
pub use sdl3_sys::gamepad::{
    SDL_GamepadAxis as Axis, SDL_GamepadButton as Button,
    SDL_GamepadButtonLabel as ButtonLabel, SDL_GamepadType as GamepadType,
};
pub use sdl3_sys::joystick::SDL_JoystickConnectionState as ConnectionState;
pub use sdl3_sys::power::SDL_PowerState as PowerState;
pub use sdl3_sys::sensor::{SDL_SensorType as SensorType, SDL_STANDARD_GRAVITY as STANDARD_GRAVITY};

use crate::error::{Error, Result};
use crate::ffi_util::{copy_and_free, cstr_opt, cstr_to_string, take_sdl_string, to_cstring};
use crate::guid::Guid;
use crate::properties::Properties;

/// Joystick instance ID, the device name space gamepads live in. Assigned
/// at hotplug time and never reused within a run; 0 never names a device.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct JoystickId(pub u32);

impl fmt::Display for JoystickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ---------------------------------------------------------------------------
// Mappings
// ---------------------------------------------------------------------------

/// What [`add_mapping`] did with the mapping string.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MappingOutcome {
    Added,
    Updated,
}

/// Install or replace a mapping string
/// (`"guid,name,element:binding,..."` format).
pub fn add_mapping(mapping: &str) -> Result<MappingOutcome> {
    let mapping = to_cstring(mapping)?;
    match unsafe { sys::SDL_AddGamepadMapping(mapping.as_ptr()) } {
        1 => Ok(MappingOutcome::Added),
        0 => Ok(MappingOutcome::Updated),
        _ => Err(Error::from_sdl()),
    }
}

/// Load mappings from a file in the community mapping-database format.
/// Returns how many were added.
pub fn add_mappings_from_file(path: &str) -> Result<i32> {
    let path = to_cstring(path)?;
    let n = unsafe { sys::SDL_AddGamepadMappingsFromFile(path.as_ptr()) };
    if n < 0 {
        return Err(Error::from_sdl());
    }
    Ok(n)
}

/// Re-read mappings from their original sources, dropping ones added at
/// runtime.
pub fn reload_mappings() -> Result<()> {
    if unsafe { sys::SDL_ReloadGamepadMappings() } {
        Ok(())
    } else {
        Err(Error::from_sdl())
    }
}

/// Every installed mapping string.
pub fn mappings() -> Result<Vec<String>> {
    let mut count: c_int = 0;
    let ptr = unsafe { sys::SDL_GetGamepadMappings(&mut count) };
    if ptr.is_null() {
        return Err(Error::from_sdl());
    }
    // Single allocation: the string data lives behind the pointer array,
    // so copy everything out, then free only the array pointer.
    let mut out = Vec::with_capacity(count.max(0) as usize);
    for i in 0..count.max(0) as usize {
        let s = unsafe { *ptr.add(i) };
        if !s.is_null() {
            out.push(unsafe { cstr_to_string(s) });
        }
    }
    unsafe { sdl3_sys::stdinc::SDL_free(ptr.cast()) };
    Ok(out)
}

pub fn mapping_for_guid(guid: Guid) -> Result<String> {
    let ptr = unsafe { sys::SDL_GetGamepadMappingForGUID(guid.raw()) };
    unsafe { take_sdl_string(ptr) }.ok_or_else(Error::from_sdl)
}

/// Override the mapping for one connected device.
pub fn set_mapping(id: JoystickId, mapping: &str) -> Result<()> {
    let mapping = to_cstring(mapping)?;
    if unsafe { sys::SDL_SetGamepadMapping(id.0, mapping.as_ptr()) } {
        Ok(())
    } else {
        Err(Error::from_sdl())
    }
}

// ---------------------------------------------------------------------------
// Enumeration and preview accessors
// ---------------------------------------------------------------------------

pub fn has_gamepad() -> bool {
    unsafe { sys::SDL_HasGamepad() }
}

/// Instance IDs of every connected device SDL recognizes as a gamepad.
pub fn gamepads() -> Result<Vec<JoystickId>> {
    let mut count: c_int = 0;
    let ptr = unsafe { sys::SDL_GetGamepads(&mut count) };
    if ptr.is_null() {
        return Err(Error::from_sdl());
    }
    Ok(unsafe { copy_and_free(ptr, count) }
        .into_iter()
        .map(JoystickId)
        .collect())
}

impl JoystickId {
    /// True if the device has a mapping and can be opened as a gamepad.
    pub fn is_gamepad(self) -> bool {
        unsafe { sys::SDL_IsGamepad(self.0) }
    }

    pub fn name(self) -> Option<String> {
        unsafe { cstr_opt(sys::SDL_GetGamepadNameForID(self.0)) }
    }

    pub fn path(self) -> Option<String> {
        unsafe { cstr_opt(sys::SDL_GetGamepadPathForID(self.0)) }
    }

    /// Player slot, or `None` if unassigned.
    pub fn player_index(self) -> Option<i32> {
        match unsafe { sys::SDL_GetGamepadPlayerIndexForID(self.0) } {
            -1 => None,
            n => Some(n),
        }
    }

    pub fn guid(self) -> Guid {
        Guid::from_raw(unsafe { sys::SDL_GetGamepadGUIDForID(self.0) })
    }

    /// USB vendor ID, or `None` if unavailable.
    pub fn vendor(self) -> Option<u16> {
        match unsafe { sys::SDL_GetGamepadVendorForID(self.0) } {
            0 => None,
            v => Some(v),
        }
    }

    pub fn product(self) -> Option<u16> {
        match unsafe { sys::SDL_GetGamepadProductForID(self.0) } {
            0 => None,
            p => Some(p),
        }
    }

    pub fn product_version(self) -> Option<u16> {
        match unsafe { sys::SDL_GetGamepadProductVersionForID(self.0) } {
            0 => None,
            v => Some(v),
        }
    }

    /// Type after mapping overrides are applied.
    pub fn gamepad_type(self) -> GamepadType {
        unsafe { sys::SDL_GetGamepadTypeForID(self.0) }
    }

    /// Type from the device itself, ignoring mapping overrides.
    pub fn real_gamepad_type(self) -> GamepadType {
        unsafe { sys::SDL_GetRealGamepadTypeForID(self.0) }
    }

    pub fn mapping(self) -> Option<String> {
        unsafe { take_sdl_string(sys::SDL_GetGamepadMappingForID(self.0)) }
    }
}

// ---------------------------------------------------------------------------
// Event pump control and string/enum mapping
// ---------------------------------------------------------------------------

pub fn set_events_enabled(enabled: bool) {
    unsafe { sys::SDL_SetGamepadEventsEnabled(enabled) }
}

pub fn events_enabled() -> bool {
    unsafe { sys::SDL_GamepadEventsEnabled() }
}

/// Refresh gamepad state by hand. Only needed by callers that don't run
/// an event loop.
pub fn update() {
    unsafe { sys::SDL_UpdateGamepads() }
}

pub fn gamepad_type_from_string(s: &str) -> Result<GamepadType> {
    let s = to_cstring(s)?;
    Ok(unsafe { sys::SDL_GetGamepadTypeFromString(s.as_ptr()) })
}

pub fn string_for_gamepad_type(type_: GamepadType) -> Option<String> {
    unsafe { cstr_opt(sys::SDL_GetGamepadStringForType(type_)) }
}

pub fn axis_from_string(s: &str) -> Result<Axis> {
    let s = to_cstring(s)?;
    Ok(unsafe { sys::SDL_GetGamepadAxisFromString(s.as_ptr()) })
}

pub fn string_for_axis(axis: Axis) -> Option<String> {
    unsafe { cstr_opt(sys::SDL_GetGamepadStringForAxis(axis)) }
}

pub fn button_from_string(s: &str) -> Result<Button> {
    let s = to_cstring(s)?;
    Ok(unsafe { sys::SDL_GetGamepadButtonFromString(s.as_ptr()) })
}

pub fn string_for_button(button: Button) -> Option<String> {
    unsafe { cstr_opt(sys::SDL_GetGamepadStringForButton(button)) }
}

pub fn button_label_for_type(type_: GamepadType, button: Button) -> ButtonLabel {
    unsafe { sys::SDL_GetGamepadButtonLabelForType(type_, button) }
}

// ---------------------------------------------------------------------------
// Bindings, decoded from the raw tagged unions
// ---------------------------------------------------------------------------

/// Raw device input side of a binding.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BindingInput {
    None,
    Button(i32),
    Axis { axis: i32, min: i32, max: i32 },
    Hat { hat: i32, mask: i32 },
}

/// Gamepad control side of a binding.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BindingOutput {
    None,
    Button(Button),
    Axis { axis: Axis, min: i32, max: i32 },
}

/// One decoded mapping entry: which raw input drives which gamepad
/// control.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Binding {
    pub input: BindingInput,
    pub output: BindingOutput,
}

impl Binding {
    fn from_raw(raw: &sys::SDL_GamepadBinding) -> Binding {
        // The discriminants select the live union arms.
        let input = match raw.input_type {
            sys::SDL_GamepadBindingType::None => BindingInput::None,
            sys::SDL_GamepadBindingType::Button => {
                BindingInput::Button(unsafe { raw.input.button })
            }
            sys::SDL_GamepadBindingType::Axis => {
                let a = unsafe { raw.input.axis };
                BindingInput::Axis { axis: a.axis, min: a.axis_min, max: a.axis_max }
            }
            sys::SDL_GamepadBindingType::Hat => {
                let h = unsafe { raw.input.hat };
                BindingInput::Hat { hat: h.hat, mask: h.hat_mask }
            }
        };
        let output = match raw.output_type {
            sys::SDL_GamepadBindingType::Button => {
                BindingOutput::Button(unsafe { raw.output.button })
            }
            sys::SDL_GamepadBindingType::Axis => {
                let a = unsafe { raw.output.axis };
                BindingOutput::Axis { axis: a.axis, min: a.axis_min, max: a.axis_max }
            }
            _ => BindingOutput::None,
        };
        Binding { input, output }
    }
}

// ---------------------------------------------------------------------------
// Open handles
// ---------------------------------------------------------------------------

/// Battery state: power source plus an optional 0..=100 charge estimate.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PowerInfo {
    pub state: PowerState,
    pub percent: Option<i32>,
}

/// A finger resting on (or lifted from) a gamepad touchpad.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TouchpadFinger {
    pub down: bool,
    /// Normalized 0.0..=1.0, origin at the top left.
    pub x: f32,
    pub y: f32,
    pub pressure: f32,
}

/// An open gamepad. Dropping it calls `SDL_CloseGamepad`.
pub struct Gamepad {
    ptr: *mut sys::SDL_Gamepad,
}

impl Gamepad {
    /// Open the device with the given instance ID for use as a gamepad.
    pub fn open(id: JoystickId) -> Result<Gamepad> {
        let ptr = unsafe { sys::SDL_OpenGamepad(id.0) };
        if ptr.is_null() {
            return Err(Error::from_sdl());
        }
        tracing::debug!(id = id.0, "gamepad opened");
        Ok(Gamepad { ptr })
    }

    pub fn raw(&self) -> *mut sys::SDL_Gamepad {
        self.ptr
    }

    pub fn id(&self) -> Result<JoystickId> {
        let id = unsafe { sys::SDL_GetGamepadID(self.ptr) };
        if id == 0 {
            return Err(Error::from_sdl());
        }
        Ok(JoystickId(id))
    }

    pub fn properties(&self) -> Result<Properties> {
        Properties::borrowed(unsafe { sys::SDL_GetGamepadProperties(self.ptr) })
    }

    pub fn name(&self) -> Option<String> {
        unsafe { cstr_opt(sys::SDL_GetGamepadName(self.ptr)) }
    }

    pub fn path(&self) -> Option<String> {
        unsafe { cstr_opt(sys::SDL_GetGamepadPath(self.ptr)) }
    }

    pub fn gamepad_type(&self) -> GamepadType {
        unsafe { sys::SDL_GetGamepadType(self.ptr) }
    }

    pub fn real_gamepad_type(&self) -> GamepadType {
        unsafe { sys::SDL_GetRealGamepadType(self.ptr) }
    }

    pub fn player_index(&self) -> Option<i32> {
        match unsafe { sys::SDL_GetGamepadPlayerIndex(self.ptr) } {
            -1 => None,
            n => Some(n),
        }
    }

    /// Assign a player slot; `None` clears the assignment.
    pub fn set_player_index(&self, index: Option<i32>) -> Result<()> {
        if unsafe { sys::SDL_SetGamepadPlayerIndex(self.ptr, index.unwrap_or(-1)) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn vendor(&self) -> Option<u16> {
        match unsafe { sys::SDL_GetGamepadVendor(self.ptr) } {
            0 => None,
            v => Some(v),
        }
    }

    pub fn product(&self) -> Option<u16> {
        match unsafe { sys::SDL_GetGamepadProduct(self.ptr) } {
            0 => None,
            p => Some(p),
        }
    }

    pub fn product_version(&self) -> Option<u16> {
        match unsafe { sys::SDL_GetGamepadProductVersion(self.ptr) } {
            0 => None,
            v => Some(v),
        }
    }

    pub fn firmware_version(&self) -> Option<u16> {
        match unsafe { sys::SDL_GetGamepadFirmwareVersion(self.ptr) } {
            0 => None,
            v => Some(v),
        }
    }

    pub fn serial(&self) -> Option<String> {
        unsafe { cstr_opt(sys::SDL_GetGamepadSerial(self.ptr)) }
    }

    /// Steam Input handle, or `None` when not opened through Steam.
    pub fn steam_handle(&self) -> Option<u64> {
        match unsafe { sys::SDL_GetGamepadSteamHandle(self.ptr) } {
            0 => None,
            h => Some(h),
        }
    }

    pub fn connection_state(&self) -> Result<ConnectionState> {
        match unsafe { sys::SDL_GetGamepadConnectionState(self.ptr) } {
            ConnectionState::Invalid => Err(Error::from_sdl()),
            state => Ok(state),
        }
    }

    pub fn power_info(&self) -> Result<PowerInfo> {
        let mut percent: c_int = -1;
        let state = unsafe { sys::SDL_GetGamepadPowerInfo(self.ptr, &mut percent) };
        if state == PowerState::Error {
            return Err(Error::from_sdl());
        }
        Ok(PowerInfo {
            state,
            percent: if percent < 0 { None } else { Some(percent) },
        })
    }

    /// False once the device has been unplugged; the handle stays valid
    /// (and keeps erroring) until dropped.
    pub fn connected(&self) -> bool {
        unsafe { sys::SDL_GamepadConnected(self.ptr) }
    }

    /// The mapping string currently applied to this gamepad.
    pub fn mapping(&self) -> Option<String> {
        unsafe { take_sdl_string(sys::SDL_GetGamepadMapping(self.ptr)) }
    }

    /// The decoded raw-input-to-control bindings of the current mapping.
    pub fn bindings(&self) -> Result<Vec<Binding>> {
        let mut count: c_int = 0;
        let ptr = unsafe { sys::SDL_GetGamepadBindings(self.ptr, &mut count) };
        if ptr.is_null() {
            return Err(Error::from_sdl());
        }
        // Single allocation, same shape as the mapping list: decode
        // everything, then free only the array pointer.
        let mut out = Vec::with_capacity(count.max(0) as usize);
        for i in 0..count.max(0) as usize {
            let entry = unsafe { *ptr.add(i) };
            if !entry.is_null() {
                out.push(Binding::from_raw(unsafe { &*entry }));
            }
        }
        unsafe { sdl3_sys::stdinc::SDL_free(ptr.cast()) };
        Ok(out)
    }

    // -- input state -------------------------------------------------------

    pub fn has_axis(&self, axis: Axis) -> bool {
        unsafe { sys::SDL_GamepadHasAxis(self.ptr, axis) }
    }

    /// Current axis position, -32768..=32767. Triggers rest at 0 and only
    /// go positive.
    pub fn axis(&self, axis: Axis) -> i16 {
        unsafe { sys::SDL_GetGamepadAxis(self.ptr, axis) }
    }

    pub fn has_button(&self, button: Button) -> bool {
        unsafe { sys::SDL_GamepadHasButton(self.ptr, button) }
    }

    pub fn button(&self, button: Button) -> bool {
        unsafe { sys::SDL_GetGamepadButton(self.ptr, button) }
    }

    /// The glyph physically printed on `button` for this controller.
    pub fn button_label(&self, button: Button) -> ButtonLabel {
        unsafe { sys::SDL_GetGamepadButtonLabel(self.ptr, button) }
    }

    // -- touchpads ---------------------------------------------------------

    pub fn num_touchpads(&self) -> i32 {
        unsafe { sys::SDL_GetNumGamepadTouchpads(self.ptr) }
    }

    pub fn num_touchpad_fingers(&self, touchpad: i32) -> i32 {
        unsafe { sys::SDL_GetNumGamepadTouchpadFingers(self.ptr, touchpad) }
    }

    pub fn touchpad_finger(&self, touchpad: i32, finger: i32) -> Result<TouchpadFinger> {
        let mut down = false;
        let (mut x, mut y, mut pressure) = (0.0, 0.0, 0.0);
        let ok = unsafe {
            sys::SDL_GetGamepadTouchpadFinger(
                self.ptr, touchpad, finger, &mut down, &mut x, &mut y, &mut pressure,
            )
        };
        if !ok {
            return Err(Error::from_sdl());
        }
        Ok(TouchpadFinger { down, x, y, pressure })
    }

    // -- sensors -----------------------------------------------------------

    pub fn has_sensor(&self, type_: SensorType) -> bool {
        unsafe { sys::SDL_GamepadHasSensor(self.ptr, type_) }
    }

    pub fn set_sensor_enabled(&self, type_: SensorType, enabled: bool) -> Result<()> {
        if unsafe { sys::SDL_SetGamepadSensorEnabled(self.ptr, type_, enabled) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn sensor_enabled(&self, type_: SensorType) -> bool {
        unsafe { sys::SDL_GamepadSensorEnabled(self.ptr, type_) }
    }

    /// Sampling rate in Hz, or 0.0 if unknown.
    pub fn sensor_data_rate(&self, type_: SensorType) -> f32 {
        unsafe { sys::SDL_GetGamepadSensorDataRate(self.ptr, type_) }
    }

    /// Fill `data` with the most recent reading (3 values for
    /// accelerometer and gyroscope).
    pub fn sensor_data(&self, type_: SensorType, data: &mut [f32]) -> Result<()> {
        let ok = unsafe {
            sys::SDL_GetGamepadSensorData(
                self.ptr,
                type_,
                data.as_mut_ptr(),
                data.len() as c_int,
            )
        };
        if ok {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    // -- output ------------------------------------------------------------

    /// Rumble both motors at the given 0..=0xFFFF intensities for
    /// `duration_ms`. A fresh call cancels the previous effect.
    pub fn rumble(&self, low_frequency: u16, high_frequency: u16, duration_ms: u32) -> Result<()> {
        let ok = unsafe {
            sys::SDL_RumbleGamepad(self.ptr, low_frequency, high_frequency, duration_ms)
        };
        if ok {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    /// Trigger rumble, on controllers that have it (DualSense, some Xbox).
    pub fn rumble_triggers(&self, left: u16, right: u16, duration_ms: u32) -> Result<()> {
        if unsafe { sys::SDL_RumbleGamepadTriggers(self.ptr, left, right, duration_ms) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn set_led(&self, red: u8, green: u8, blue: u8) -> Result<()> {
        if unsafe { sys::SDL_SetGamepadLED(self.ptr, red, green, blue) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    /// Send a driver-specific effect packet.
    pub fn send_effect(&self, data: &[u8]) -> Result<()> {
        let ok = unsafe {
            sys::SDL_SendGamepadEffect(self.ptr, data.as_ptr().cast(), data.len() as c_int)
        };
        if ok {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }
}

impl Drop for Gamepad {
    fn drop(&mut self) {
        unsafe { sys::SDL_CloseGamepad(self.ptr) }
    }
}

impl fmt::Debug for Gamepad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gamepad").field("ptr", &self.ptr).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_binding(
        input_type: sys::SDL_GamepadBindingType,
        input: sys::SDL_GamepadBindingInput,
        output_type: sys::SDL_GamepadBindingType,
        output: sys::SDL_GamepadBindingOutput,
    ) -> sys::SDL_GamepadBinding {
        sys::SDL_GamepadBinding { input_type, input, output_type, output }
    }

    #[test]
    fn decodes_button_to_button_binding() {
        let raw = raw_binding(
            sys::SDL_GamepadBindingType::Button,
            sys::SDL_GamepadBindingInput { button: 3 },
            sys::SDL_GamepadBindingType::Button,
            sys::SDL_GamepadBindingOutput { button: Button::North },
        );
        let binding = Binding::from_raw(&raw);
        assert_eq!(binding.input, BindingInput::Button(3));
        assert_eq!(binding.output, BindingOutput::Button(Button::North));
    }

    #[test]
    fn decodes_axis_to_axis_binding_with_range() {
        let raw = raw_binding(
            sys::SDL_GamepadBindingType::Axis,
            sys::SDL_GamepadBindingInput {
                axis: sys::SDL_GamepadBindingInputAxis {
                    axis: 2,
                    axis_min: 0,
                    axis_max: 32767,
                },
            },
            sys::SDL_GamepadBindingType::Axis,
            sys::SDL_GamepadBindingOutput {
                axis: sys::SDL_GamepadBindingOutputAxis {
                    axis: Axis::LeftTrigger,
                    axis_min: 0,
                    axis_max: 32767,
                },
            },
        );
        let binding = Binding::from_raw(&raw);
        assert_eq!(binding.input, BindingInput::Axis { axis: 2, min: 0, max: 32767 });
        assert_eq!(
            binding.output,
            BindingOutput::Axis { axis: Axis::LeftTrigger, min: 0, max: 32767 }
        );
    }

    #[test]
    fn decodes_hat_input_binding() {
        let raw = raw_binding(
            sys::SDL_GamepadBindingType::Hat,
            sys::SDL_GamepadBindingInput {
                hat: sys::SDL_GamepadBindingInputHat { hat: 0, hat_mask: 4 },
            },
            sys::SDL_GamepadBindingType::Button,
            sys::SDL_GamepadBindingOutput { button: Button::DpadDown },
        );
        let binding = Binding::from_raw(&raw);
        assert_eq!(binding.input, BindingInput::Hat { hat: 0, mask: 4 });
        assert_eq!(binding.output, BindingOutput::Button(Button::DpadDown));
    }

    #[test]
    fn none_discriminants_decode_to_none() {
        let raw = raw_binding(
            sys::SDL_GamepadBindingType::None,
            sys::SDL_GamepadBindingInput { button: 0 },
            sys::SDL_GamepadBindingType::None,
            sys::SDL_GamepadBindingOutput { button: Button::Invalid },
        );
        let binding = Binding::from_raw(&raw);
        assert_eq!(binding.input, BindingInput::None);
        assert_eq!(binding.output, BindingOutput::None);
    }
}
