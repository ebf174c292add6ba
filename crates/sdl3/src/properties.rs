//! Property bags: SDL3's string-keyed runtime configuration mechanism.
//!
//! Keys are verbatim runtime lookup strings interpreted by the native
//! library; the `SDL_PROP_*` tables in `sdl3-sys` hold the official ones.

use std::ffi::c_void;

use sdl3_sys::properties as sys;
pub use sdl3_sys::properties::SDL_PropertyType as PropertyType;

use crate::error::{Error, Result};
use crate::ffi_util::{cstr_to_string, to_cstring};

/// A property bag. Owned bags (from [`Properties::new`]) are destroyed on
/// drop; borrowed bags (from windows, renderers, textures, gamepads or the
/// global bag) belong to the native object and are left alone.
pub struct Properties {
    id: sys::SDL_PropertiesID,
    owned: bool,
}

impl Properties {
    /// Create a fresh bag, destroyed when this handle drops.
    pub fn new() -> Result<Properties> {
        let id = unsafe { sys::SDL_CreateProperties() };
        if id == 0 {
            return Err(Error::from_sdl());
        }
        Ok(Properties { id, owned: true })
    }

    /// The process-global bag.
    pub fn global() -> Result<Properties> {
        let id = unsafe { sys::SDL_GetGlobalProperties() };
        if id == 0 {
            return Err(Error::from_sdl());
        }
        Ok(Properties { id, owned: false })
    }

    pub(crate) fn borrowed(id: sys::SDL_PropertiesID) -> Result<Properties> {
        if id == 0 {
            return Err(Error::from_sdl());
        }
        Ok(Properties { id, owned: false })
    }

    /// Raw bag handle for passing to `SDL_Create*WithProperties` calls.
    pub fn id(&self) -> sys::SDL_PropertiesID {
        self.id
    }

    /// Copy all non-locked properties of `self` into `dst`.
    pub fn copy_to(&self, dst: &Properties) -> Result<()> {
        if unsafe { sys::SDL_CopyProperties(self.id, dst.id) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn set_string(&self, key: &str, value: &str) -> Result<()> {
        let key = to_cstring(key)?;
        let value = to_cstring(value)?;
        if unsafe { sys::SDL_SetStringProperty(self.id, key.as_ptr(), value.as_ptr()) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn get_string(&self, key: &str, default: &str) -> Result<String> {
        let key = to_cstring(key)?;
        let default_c = to_cstring(default)?;
        // The returned pointer is invalidated by any mutation of the bag;
        // copy it out before returning.
        let ptr = unsafe { sys::SDL_GetStringProperty(self.id, key.as_ptr(), default_c.as_ptr()) };
        if ptr.is_null() {
            return Ok(default.to_owned());
        }
        Ok(unsafe { cstr_to_string(ptr) })
    }

    pub fn set_number(&self, key: &str, value: i64) -> Result<()> {
        let key = to_cstring(key)?;
        if unsafe { sys::SDL_SetNumberProperty(self.id, key.as_ptr(), value) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn get_number(&self, key: &str, default: i64) -> Result<i64> {
        let key = to_cstring(key)?;
        Ok(unsafe { sys::SDL_GetNumberProperty(self.id, key.as_ptr(), default) })
    }

    pub fn set_float(&self, key: &str, value: f32) -> Result<()> {
        let key = to_cstring(key)?;
        if unsafe { sys::SDL_SetFloatProperty(self.id, key.as_ptr(), value) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn get_float(&self, key: &str, default: f32) -> Result<f32> {
        let key = to_cstring(key)?;
        Ok(unsafe { sys::SDL_GetFloatProperty(self.id, key.as_ptr(), default) })
    }

    pub fn set_boolean(&self, key: &str, value: bool) -> Result<()> {
        let key = to_cstring(key)?;
        if unsafe { sys::SDL_SetBooleanProperty(self.id, key.as_ptr(), value) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn get_boolean(&self, key: &str, default: bool) -> Result<bool> {
        let key = to_cstring(key)?;
        Ok(unsafe { sys::SDL_GetBooleanProperty(self.id, key.as_ptr(), default) })
    }

    /// Store a raw pointer. The bag does not manage the pointee's
    /// lifetime; whatever it addresses must outlive its use by SDL.
    pub fn set_pointer(&self, key: &str, value: *mut c_void) -> Result<()> {
        let key = to_cstring(key)?;
        if unsafe { sys::SDL_SetPointerProperty(self.id, key.as_ptr(), value) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn get_pointer(&self, key: &str, default: *mut c_void) -> Result<*mut c_void> {
        let key = to_cstring(key)?;
        Ok(unsafe { sys::SDL_GetPointerProperty(self.id, key.as_ptr(), default) })
    }

    pub fn has(&self, key: &str) -> Result<bool> {
        let key = to_cstring(key)?;
        Ok(unsafe { sys::SDL_HasProperty(self.id, key.as_ptr()) })
    }

    pub fn property_type(&self, key: &str) -> Result<PropertyType> {
        let key = to_cstring(key)?;
        Ok(unsafe { sys::SDL_GetPropertyType(self.id, key.as_ptr()) })
    }

    /// Hold the bag's lock while `f` runs, for multi-property updates
    /// that must not interleave with other threads.
    pub fn with_lock<R>(&self, f: impl FnOnce(&Properties) -> R) -> Result<R> {
        if !unsafe { sys::SDL_LockProperties(self.id) } {
            return Err(Error::from_sdl());
        }
        let out = f(self);
        unsafe { sys::SDL_UnlockProperties(self.id) };
        Ok(out)
    }

    pub fn clear(&self, key: &str) -> Result<()> {
        let key = to_cstring(key)?;
        if unsafe { sys::SDL_ClearProperty(self.id, key.as_ptr()) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }
}

impl Drop for Properties {
    fn drop(&mut self) {
        if self.owned {
            unsafe { sys::SDL_DestroyProperties(self.id) }
        }
    }
}
