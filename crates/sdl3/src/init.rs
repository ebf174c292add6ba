//! Library initialization and shutdown.

use bitflags::bitflags;

use sdl3_sys::init as sys;

use crate::error::{Error, Result};
use crate::ffi_util::to_cstring;

bitflags! {
    /// Subsystems to initialize, mirroring the `SDL_INIT_*` masks.
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct InitFlags: u32 {
        const AUDIO = sys::SDL_INIT_AUDIO;
        const VIDEO = sys::SDL_INIT_VIDEO;
        const JOYSTICK = sys::SDL_INIT_JOYSTICK;
        const HAPTIC = sys::SDL_INIT_HAPTIC;
        const GAMEPAD = sys::SDL_INIT_GAMEPAD;
        const EVENTS = sys::SDL_INIT_EVENTS;
        const SENSOR = sys::SDL_INIT_SENSOR;
        const CAMERA = sys::SDL_INIT_CAMERA;
    }
}

/// Guard over `SDL_Init`/`SDL_Quit`.
///
/// Dropping it shuts SDL down, so keep it alive for as long as any window,
/// renderer, or gamepad exists. Video and window calls must additionally
/// happen on the main thread; that rule is the native library's and is not
/// enforced here.
pub struct Sdl {
    _priv: (),
}

impl Sdl {
    /// Initialize the given subsystems.
    pub fn init(flags: InitFlags) -> Result<Sdl> {
        if !unsafe { sys::SDL_Init(flags.bits()) } {
            return Err(Error::from_sdl());
        }
        tracing::debug!(?flags, "SDL initialized");
        Ok(Sdl { _priv: () })
    }

    /// Bring up additional subsystems after [`Sdl::init`].
    pub fn init_subsystem(&self, flags: InitFlags) -> Result<()> {
        if unsafe { sys::SDL_InitSubSystem(flags.bits()) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    /// Shut down specific subsystems (reference counted by SDL).
    pub fn quit_subsystem(&self, flags: InitFlags) {
        unsafe { sys::SDL_QuitSubSystem(flags.bits()) }
    }

    /// Which of `flags` are currently initialized; pass
    /// [`InitFlags::all`] to query everything.
    pub fn was_init(&self, flags: InitFlags) -> InitFlags {
        InitFlags::from_bits_truncate(unsafe { sys::SDL_WasInit(flags.bits()) })
    }
}

impl Drop for Sdl {
    fn drop(&mut self) {
        tracing::debug!("SDL shutting down");
        unsafe { sys::SDL_Quit() }
    }
}

/// Linked SDL library version.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Version {
    pub major: i32,
    pub minor: i32,
    pub micro: i32,
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)
    }
}

/// Version of the SDL3 library actually loaded at runtime.
pub fn version() -> Version {
    // Encoded as major * 1000000 + minor * 1000 + micro.
    let packed = unsafe { sys::SDL_GetVersion() };
    Version {
        major: packed / 1_000_000,
        minor: (packed / 1_000) % 1_000,
        micro: packed % 1_000,
    }
}

/// Source revision string of the loaded library.
pub fn revision() -> String {
    unsafe { crate::ffi_util::cstr_to_string(sys::SDL_GetRevision()) }
}

/// Set application metadata SDL surfaces to the OS (about dialogs, audio
/// device names). Call before [`Sdl::init`].
pub fn set_app_metadata(name: &str, version: &str, identifier: &str) -> Result<()> {
    let name = to_cstring(name)?;
    let version = to_cstring(version)?;
    let identifier = to_cstring(identifier)?;
    if unsafe { sys::SDL_SetAppMetadata(name.as_ptr(), version.as_ptr(), identifier.as_ptr()) } {
        Ok(())
    } else {
        Err(Error::from_sdl())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_round_trip_the_native_masks() {
        assert_eq!(InitFlags::VIDEO.bits(), sys::SDL_INIT_VIDEO);
        assert_eq!(InitFlags::GAMEPAD.bits(), sys::SDL_INIT_GAMEPAD);
        let both = InitFlags::VIDEO | InitFlags::GAMEPAD;
        assert_eq!(InitFlags::from_bits_truncate(both.bits()), both);
    }
}
