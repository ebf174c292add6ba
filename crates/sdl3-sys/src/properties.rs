//! SDL_properties.h: the runtime property-bag API.
//!
//! Property bags are addressed by string keys interpreted at runtime by the
//! native library. The `SDL_PROP_*` key tables live in the module of the
//! header that defines them ([`crate::video`], [`crate::render`],
//! [`crate::joystick`]).

use std::ffi::{c_char, c_void};

/// Property-bag handle. 0 is the invalid sentinel.
pub type SDL_PropertiesID = u32;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SDL_PropertyType {
    Invalid = 0,
    Pointer = 1,
    String = 2,
    Number = 3,
    Float = 4,
    Boolean = 5,
}

pub type SDL_EnumeratePropertiesCallback =
    Option<unsafe extern "C" fn(userdata: *mut c_void, props: SDL_PropertiesID, name: *const c_char)>;

sdl3_fn! {
    pub fn SDL_GetGlobalProperties() -> SDL_PropertiesID;
    pub fn SDL_CreateProperties() -> SDL_PropertiesID;
    pub fn SDL_CopyProperties(src: SDL_PropertiesID, dst: SDL_PropertiesID) -> bool;
    pub fn SDL_LockProperties(props: SDL_PropertiesID) -> bool;
    pub fn SDL_UnlockProperties(props: SDL_PropertiesID);
    pub fn SDL_SetPointerProperty(props: SDL_PropertiesID, name: *const c_char, value: *mut c_void) -> bool;
    pub fn SDL_SetStringProperty(props: SDL_PropertiesID, name: *const c_char, value: *const c_char) -> bool;
    pub fn SDL_SetNumberProperty(props: SDL_PropertiesID, name: *const c_char, value: i64) -> bool;
    pub fn SDL_SetFloatProperty(props: SDL_PropertiesID, name: *const c_char, value: f32) -> bool;
    pub fn SDL_SetBooleanProperty(props: SDL_PropertiesID, name: *const c_char, value: bool) -> bool;
    pub fn SDL_HasProperty(props: SDL_PropertiesID, name: *const c_char) -> bool;
    pub fn SDL_GetPropertyType(props: SDL_PropertiesID, name: *const c_char) -> SDL_PropertyType;
    pub fn SDL_GetPointerProperty(props: SDL_PropertiesID, name: *const c_char, default_value: *mut c_void) -> *mut c_void;
    /// The returned pointer is owned by the bag and invalidated by any
    /// mutation of the property; copy it out before touching the bag again.
    pub fn SDL_GetStringProperty(props: SDL_PropertiesID, name: *const c_char, default_value: *const c_char) -> *const c_char;
    pub fn SDL_GetNumberProperty(props: SDL_PropertiesID, name: *const c_char, default_value: i64) -> i64;
    pub fn SDL_GetFloatProperty(props: SDL_PropertiesID, name: *const c_char, default_value: f32) -> f32;
    pub fn SDL_GetBooleanProperty(props: SDL_PropertiesID, name: *const c_char, default_value: bool) -> bool;
    pub fn SDL_ClearProperty(props: SDL_PropertiesID, name: *const c_char) -> bool;
    pub fn SDL_EnumerateProperties(props: SDL_PropertiesID, callback: SDL_EnumeratePropertiesCallback, userdata: *mut c_void) -> bool;
    pub fn SDL_DestroyProperties(props: SDL_PropertiesID);
}
