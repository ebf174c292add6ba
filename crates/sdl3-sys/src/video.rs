//! SDL_video.h: windows, displays, and display modes.
//!
//! Most of these calls must be made on the main thread; that rule is the
//! native library's, documented on the safe wrappers, and not enforced
//! here.

use std::ffi::{c_char, c_int};

use crate::pixels::SDL_PixelFormat;
use crate::properties::SDL_PropertiesID;
use crate::rect::{SDL_Point, SDL_Rect};
use crate::surface::SDL_Surface;

// ---------------------------------------------------------------------------
// Handles and IDs
// ---------------------------------------------------------------------------

/// Opaque window handle; owned by the native library.
#[repr(C)]
pub struct SDL_Window {
    _private: [u8; 0],
}

/// Window ID. 0 is the invalid sentinel.
pub type SDL_WindowID = u32;

/// Display ID. 0 is the invalid sentinel.
pub type SDL_DisplayID = u32;

// ---------------------------------------------------------------------------
// Window flags (u64 masks)
// ---------------------------------------------------------------------------

pub type SDL_WindowFlags = u64;

pub const SDL_WINDOW_FULLSCREEN: SDL_WindowFlags = 0x0000_0000_0000_0001;
pub const SDL_WINDOW_OPENGL: SDL_WindowFlags = 0x0000_0000_0000_0002;
pub const SDL_WINDOW_OCCLUDED: SDL_WindowFlags = 0x0000_0000_0000_0004;
pub const SDL_WINDOW_HIDDEN: SDL_WindowFlags = 0x0000_0000_0000_0008;
pub const SDL_WINDOW_BORDERLESS: SDL_WindowFlags = 0x0000_0000_0000_0010;
pub const SDL_WINDOW_RESIZABLE: SDL_WindowFlags = 0x0000_0000_0000_0020;
pub const SDL_WINDOW_MINIMIZED: SDL_WindowFlags = 0x0000_0000_0000_0040;
pub const SDL_WINDOW_MAXIMIZED: SDL_WindowFlags = 0x0000_0000_0000_0080;
pub const SDL_WINDOW_MOUSE_GRABBED: SDL_WindowFlags = 0x0000_0000_0000_0100;
pub const SDL_WINDOW_INPUT_FOCUS: SDL_WindowFlags = 0x0000_0000_0000_0200;
pub const SDL_WINDOW_MOUSE_FOCUS: SDL_WindowFlags = 0x0000_0000_0000_0400;
pub const SDL_WINDOW_EXTERNAL: SDL_WindowFlags = 0x0000_0000_0000_0800;
pub const SDL_WINDOW_MODAL: SDL_WindowFlags = 0x0000_0000_0000_1000;
pub const SDL_WINDOW_HIGH_PIXEL_DENSITY: SDL_WindowFlags = 0x0000_0000_0000_2000;
pub const SDL_WINDOW_MOUSE_CAPTURE: SDL_WindowFlags = 0x0000_0000_0000_4000;
pub const SDL_WINDOW_MOUSE_RELATIVE_MODE: SDL_WindowFlags = 0x0000_0000_0000_8000;
pub const SDL_WINDOW_ALWAYS_ON_TOP: SDL_WindowFlags = 0x0000_0000_0001_0000;
pub const SDL_WINDOW_UTILITY: SDL_WindowFlags = 0x0000_0000_0002_0000;
pub const SDL_WINDOW_TOOLTIP: SDL_WindowFlags = 0x0000_0000_0004_0000;
pub const SDL_WINDOW_POPUP_MENU: SDL_WindowFlags = 0x0000_0000_0008_0000;
pub const SDL_WINDOW_KEYBOARD_GRABBED: SDL_WindowFlags = 0x0000_0000_0010_0000;
pub const SDL_WINDOW_VULKAN: SDL_WindowFlags = 0x0000_0000_1000_0000;
pub const SDL_WINDOW_METAL: SDL_WindowFlags = 0x0000_0000_2000_0000;
pub const SDL_WINDOW_TRANSPARENT: SDL_WindowFlags = 0x0000_0000_4000_0000;
pub const SDL_WINDOW_NOT_FOCUSABLE: SDL_WindowFlags = 0x0000_0000_8000_0000;

/// "Don't care" position sentinel (SDL_WINDOWPOS_UNDEFINED).
pub const SDL_WINDOWPOS_UNDEFINED: c_int = 0x1FFF_0000;
/// Centered position sentinel (SDL_WINDOWPOS_CENTERED).
pub const SDL_WINDOWPOS_CENTERED: c_int = 0x2FFF_0000;

// ---------------------------------------------------------------------------
// Display modes and related enums
// ---------------------------------------------------------------------------

/// Opaque driver-private display mode data.
#[repr(C)]
pub struct SDL_DisplayModeData {
    _private: [u8; 0],
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct SDL_DisplayMode {
    pub displayID: SDL_DisplayID,
    pub format: SDL_PixelFormat,
    pub w: c_int,
    pub h: c_int,
    pub pixel_density: f32,
    pub refresh_rate: f32,
    pub refresh_rate_numerator: c_int,
    pub refresh_rate_denominator: c_int,
    pub internal: *mut SDL_DisplayModeData,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SDL_DisplayOrientation {
    Unknown = 0,
    Landscape = 1,
    LandscapeFlipped = 2,
    Portrait = 3,
    PortraitFlipped = 4,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SDL_FlashOperation {
    Cancel = 0,
    Briefly = 1,
    UntilFocused = 2,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SDL_SystemTheme {
    Unknown = 0,
    Light = 1,
    Dark = 2,
}

// ---------------------------------------------------------------------------
// Property keys (runtime lookup strings, verbatim from SDL_video.h)
// ---------------------------------------------------------------------------

pub const SDL_PROP_DISPLAY_HDR_ENABLED_BOOLEAN: &str = "SDL.display.HDR_enabled";
pub const SDL_PROP_DISPLAY_KMSDRM_PANEL_ORIENTATION_NUMBER: &str =
    "SDL.display.KMSDRM.panel_orientation";

pub const SDL_PROP_WINDOW_CREATE_ALWAYS_ON_TOP_BOOLEAN: &str = "SDL.window.create.always_on_top";
pub const SDL_PROP_WINDOW_CREATE_BORDERLESS_BOOLEAN: &str = "SDL.window.create.borderless";
pub const SDL_PROP_WINDOW_CREATE_FOCUSABLE_BOOLEAN: &str = "SDL.window.create.focusable";
pub const SDL_PROP_WINDOW_CREATE_EXTERNAL_GRAPHICS_CONTEXT_BOOLEAN: &str =
    "SDL.window.create.external_graphics_context";
pub const SDL_PROP_WINDOW_CREATE_FLAGS_NUMBER: &str = "SDL.window.create.flags";
pub const SDL_PROP_WINDOW_CREATE_FULLSCREEN_BOOLEAN: &str = "SDL.window.create.fullscreen";
pub const SDL_PROP_WINDOW_CREATE_HEIGHT_NUMBER: &str = "SDL.window.create.height";
pub const SDL_PROP_WINDOW_CREATE_HIDDEN_BOOLEAN: &str = "SDL.window.create.hidden";
pub const SDL_PROP_WINDOW_CREATE_HIGH_PIXEL_DENSITY_BOOLEAN: &str =
    "SDL.window.create.high_pixel_density";
pub const SDL_PROP_WINDOW_CREATE_MAXIMIZED_BOOLEAN: &str = "SDL.window.create.maximized";
pub const SDL_PROP_WINDOW_CREATE_MENU_BOOLEAN: &str = "SDL.window.create.menu";
pub const SDL_PROP_WINDOW_CREATE_METAL_BOOLEAN: &str = "SDL.window.create.metal";
pub const SDL_PROP_WINDOW_CREATE_MINIMIZED_BOOLEAN: &str = "SDL.window.create.minimized";
pub const SDL_PROP_WINDOW_CREATE_MODAL_BOOLEAN: &str = "SDL.window.create.modal";
pub const SDL_PROP_WINDOW_CREATE_MOUSE_GRABBED_BOOLEAN: &str = "SDL.window.create.mouse_grabbed";
pub const SDL_PROP_WINDOW_CREATE_OPENGL_BOOLEAN: &str = "SDL.window.create.opengl";
pub const SDL_PROP_WINDOW_CREATE_PARENT_POINTER: &str = "SDL.window.create.parent";
pub const SDL_PROP_WINDOW_CREATE_RESIZABLE_BOOLEAN: &str = "SDL.window.create.resizable";
pub const SDL_PROP_WINDOW_CREATE_TITLE_STRING: &str = "SDL.window.create.title";
pub const SDL_PROP_WINDOW_CREATE_TRANSPARENT_BOOLEAN: &str = "SDL.window.create.transparent";
pub const SDL_PROP_WINDOW_CREATE_TOOLTIP_BOOLEAN: &str = "SDL.window.create.tooltip";
pub const SDL_PROP_WINDOW_CREATE_UTILITY_BOOLEAN: &str = "SDL.window.create.utility";
pub const SDL_PROP_WINDOW_CREATE_VULKAN_BOOLEAN: &str = "SDL.window.create.vulkan";
pub const SDL_PROP_WINDOW_CREATE_WIDTH_NUMBER: &str = "SDL.window.create.width";
pub const SDL_PROP_WINDOW_CREATE_X_NUMBER: &str = "SDL.window.create.x";
pub const SDL_PROP_WINDOW_CREATE_Y_NUMBER: &str = "SDL.window.create.y";

pub const SDL_PROP_WINDOW_SHAPE_POINTER: &str = "SDL.window.shape";
pub const SDL_PROP_WINDOW_HDR_ENABLED_BOOLEAN: &str = "SDL.window.HDR_enabled";
pub const SDL_PROP_WINDOW_SDR_WHITE_LEVEL_FLOAT: &str = "SDL.window.SDR_white_level";
pub const SDL_PROP_WINDOW_HDR_HEADROOM_FLOAT: &str = "SDL.window.HDR_headroom";
pub const SDL_PROP_WINDOW_WIN32_HWND_POINTER: &str = "SDL.window.win32.hwnd";
pub const SDL_PROP_WINDOW_COCOA_WINDOW_POINTER: &str = "SDL.window.cocoa.window";
pub const SDL_PROP_WINDOW_X11_DISPLAY_POINTER: &str = "SDL.window.x11.display";
pub const SDL_PROP_WINDOW_X11_SCREEN_NUMBER: &str = "SDL.window.x11.screen";
pub const SDL_PROP_WINDOW_X11_WINDOW_NUMBER: &str = "SDL.window.x11.window";
pub const SDL_PROP_WINDOW_WAYLAND_DISPLAY_POINTER: &str = "SDL.window.wayland.display";
pub const SDL_PROP_WINDOW_WAYLAND_SURFACE_POINTER: &str = "SDL.window.wayland.surface";

// ---------------------------------------------------------------------------
// Driver and display queries
// ---------------------------------------------------------------------------

sdl3_fn! {
    pub fn SDL_GetNumVideoDrivers() -> c_int;
    pub fn SDL_GetVideoDriver(index: c_int) -> *const c_char;
    pub fn SDL_GetCurrentVideoDriver() -> *const c_char;
    pub fn SDL_GetSystemTheme() -> SDL_SystemTheme;

    /// Caller owns the returned array; release it with
    /// [`crate::stdinc::SDL_free`].
    pub fn SDL_GetDisplays(count: *mut c_int) -> *mut SDL_DisplayID;
    pub fn SDL_GetPrimaryDisplay() -> SDL_DisplayID;
    pub fn SDL_GetDisplayProperties(displayID: SDL_DisplayID) -> SDL_PropertiesID;
    pub fn SDL_GetDisplayName(displayID: SDL_DisplayID) -> *const c_char;
    pub fn SDL_GetDisplayBounds(displayID: SDL_DisplayID, rect: *mut SDL_Rect) -> bool;
    pub fn SDL_GetDisplayUsableBounds(displayID: SDL_DisplayID, rect: *mut SDL_Rect) -> bool;
    pub fn SDL_GetNaturalDisplayOrientation(displayID: SDL_DisplayID) -> SDL_DisplayOrientation;
    pub fn SDL_GetCurrentDisplayOrientation(displayID: SDL_DisplayID) -> SDL_DisplayOrientation;
    pub fn SDL_GetDisplayContentScale(displayID: SDL_DisplayID) -> f32;

    /// Caller owns the returned array of pointers (a single allocation);
    /// release it with [`crate::stdinc::SDL_free`]. The pointed-to modes
    /// are owned by SDL.
    pub fn SDL_GetFullscreenDisplayModes(displayID: SDL_DisplayID, count: *mut c_int) -> *mut *mut SDL_DisplayMode;
    pub fn SDL_GetClosestFullscreenDisplayMode(displayID: SDL_DisplayID, w: c_int, h: c_int, refresh_rate: f32, include_high_density_modes: bool, closest: *mut SDL_DisplayMode) -> bool;
    /// Returned pointer is owned by SDL; null on failure.
    pub fn SDL_GetDesktopDisplayMode(displayID: SDL_DisplayID) -> *const SDL_DisplayMode;
    pub fn SDL_GetCurrentDisplayMode(displayID: SDL_DisplayID) -> *const SDL_DisplayMode;
    pub fn SDL_GetDisplayForPoint(point: *const SDL_Point) -> SDL_DisplayID;
    pub fn SDL_GetDisplayForRect(rect: *const SDL_Rect) -> SDL_DisplayID;
    pub fn SDL_GetDisplayForWindow(window: *mut SDL_Window) -> SDL_DisplayID;
}

// ---------------------------------------------------------------------------
// Window lifecycle and state
// ---------------------------------------------------------------------------

sdl3_fn! {
    pub fn SDL_CreateWindow(title: *const c_char, w: c_int, h: c_int, flags: SDL_WindowFlags) -> *mut SDL_Window;
    pub fn SDL_CreateWindowWithProperties(props: SDL_PropertiesID) -> *mut SDL_Window;
    pub fn SDL_DestroyWindow(window: *mut SDL_Window);

    pub fn SDL_GetWindowID(window: *mut SDL_Window) -> SDL_WindowID;
    pub fn SDL_GetWindowFromID(id: SDL_WindowID) -> *mut SDL_Window;
    /// Caller owns the returned array; release it with
    /// [`crate::stdinc::SDL_free`]. The windows themselves stay owned by SDL.
    pub fn SDL_GetWindows(count: *mut c_int) -> *mut *mut SDL_Window;
    pub fn SDL_GetWindowProperties(window: *mut SDL_Window) -> SDL_PropertiesID;
    pub fn SDL_GetWindowFlags(window: *mut SDL_Window) -> SDL_WindowFlags;
    pub fn SDL_GetWindowPixelFormat(window: *mut SDL_Window) -> SDL_PixelFormat;

    pub fn SDL_SetWindowTitle(window: *mut SDL_Window, title: *const c_char) -> bool;
    /// Returned string is owned by SDL; "" if there is no title.
    pub fn SDL_GetWindowTitle(window: *mut SDL_Window) -> *const c_char;
    pub fn SDL_SetWindowIcon(window: *mut SDL_Window, icon: *mut SDL_Surface) -> bool;

    pub fn SDL_SetWindowPosition(window: *mut SDL_Window, x: c_int, y: c_int) -> bool;
    pub fn SDL_GetWindowPosition(window: *mut SDL_Window, x: *mut c_int, y: *mut c_int) -> bool;
    pub fn SDL_SetWindowSize(window: *mut SDL_Window, w: c_int, h: c_int) -> bool;
    pub fn SDL_GetWindowSize(window: *mut SDL_Window, w: *mut c_int, h: *mut c_int) -> bool;
    pub fn SDL_SetWindowAspectRatio(window: *mut SDL_Window, min_aspect: f32, max_aspect: f32) -> bool;
    pub fn SDL_GetWindowAspectRatio(window: *mut SDL_Window, min_aspect: *mut f32, max_aspect: *mut f32) -> bool;
    pub fn SDL_GetWindowBordersSize(window: *mut SDL_Window, top: *mut c_int, left: *mut c_int, bottom: *mut c_int, right: *mut c_int) -> bool;
    pub fn SDL_GetWindowSizeInPixels(window: *mut SDL_Window, w: *mut c_int, h: *mut c_int) -> bool;
    pub fn SDL_SetWindowMinimumSize(window: *mut SDL_Window, min_w: c_int, min_h: c_int) -> bool;
    pub fn SDL_GetWindowMinimumSize(window: *mut SDL_Window, w: *mut c_int, h: *mut c_int) -> bool;
    pub fn SDL_SetWindowMaximumSize(window: *mut SDL_Window, max_w: c_int, max_h: c_int) -> bool;
    pub fn SDL_GetWindowMaximumSize(window: *mut SDL_Window, w: *mut c_int, h: *mut c_int) -> bool;
    pub fn SDL_GetWindowPixelDensity(window: *mut SDL_Window) -> f32;
    pub fn SDL_GetWindowDisplayScale(window: *mut SDL_Window) -> f32;

    pub fn SDL_SetWindowBordered(window: *mut SDL_Window, bordered: bool) -> bool;
    pub fn SDL_SetWindowResizable(window: *mut SDL_Window, resizable: bool) -> bool;
    pub fn SDL_SetWindowAlwaysOnTop(window: *mut SDL_Window, on_top: bool) -> bool;
    pub fn SDL_ShowWindow(window: *mut SDL_Window) -> bool;
    pub fn SDL_HideWindow(window: *mut SDL_Window) -> bool;
    pub fn SDL_RaiseWindow(window: *mut SDL_Window) -> bool;
    pub fn SDL_MaximizeWindow(window: *mut SDL_Window) -> bool;
    pub fn SDL_MinimizeWindow(window: *mut SDL_Window) -> bool;
    pub fn SDL_RestoreWindow(window: *mut SDL_Window) -> bool;
    pub fn SDL_SetWindowFullscreen(window: *mut SDL_Window, fullscreen: bool) -> bool;
    /// Pass null to pick borderless fullscreen-desktop mode.
    pub fn SDL_SetWindowFullscreenMode(window: *mut SDL_Window, mode: *const SDL_DisplayMode) -> bool;
    pub fn SDL_GetWindowFullscreenMode(window: *mut SDL_Window) -> *const SDL_DisplayMode;
    /// Blocks until any pending window state change has been applied.
    pub fn SDL_SyncWindow(window: *mut SDL_Window) -> bool;
    pub fn SDL_SetWindowOpacity(window: *mut SDL_Window, opacity: f32) -> bool;
    pub fn SDL_GetWindowOpacity(window: *mut SDL_Window) -> f32;
    pub fn SDL_FlashWindow(window: *mut SDL_Window, operation: SDL_FlashOperation) -> bool;

    pub fn SDL_ScreenSaverEnabled() -> bool;
    pub fn SDL_EnableScreenSaver() -> bool;
    pub fn SDL_DisableScreenSaver() -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{offset_of, size_of};

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn display_mode_layout_matches_native() {
        assert_eq!(size_of::<SDL_DisplayMode>(), 40);
        assert_eq!(offset_of!(SDL_DisplayMode, format), 4);
        assert_eq!(offset_of!(SDL_DisplayMode, pixel_density), 16);
        assert_eq!(offset_of!(SDL_DisplayMode, internal), 32);
    }

    #[test]
    fn window_flags_are_distinct_power_of_two_masks() {
        let flags = [
            SDL_WINDOW_FULLSCREEN,
            SDL_WINDOW_OPENGL,
            SDL_WINDOW_OCCLUDED,
            SDL_WINDOW_HIDDEN,
            SDL_WINDOW_BORDERLESS,
            SDL_WINDOW_RESIZABLE,
            SDL_WINDOW_MINIMIZED,
            SDL_WINDOW_MAXIMIZED,
            SDL_WINDOW_MOUSE_GRABBED,
            SDL_WINDOW_INPUT_FOCUS,
            SDL_WINDOW_MOUSE_FOCUS,
            SDL_WINDOW_EXTERNAL,
            SDL_WINDOW_MODAL,
            SDL_WINDOW_HIGH_PIXEL_DENSITY,
            SDL_WINDOW_MOUSE_CAPTURE,
            SDL_WINDOW_MOUSE_RELATIVE_MODE,
            SDL_WINDOW_ALWAYS_ON_TOP,
            SDL_WINDOW_UTILITY,
            SDL_WINDOW_TOOLTIP,
            SDL_WINDOW_POPUP_MENU,
            SDL_WINDOW_KEYBOARD_GRABBED,
            SDL_WINDOW_VULKAN,
            SDL_WINDOW_METAL,
            SDL_WINDOW_TRANSPARENT,
            SDL_WINDOW_NOT_FOCUSABLE,
        ];
        let mut seen: SDL_WindowFlags = 0;
        for flag in flags {
            assert_eq!(flag.count_ones(), 1);
            assert_eq!(seen & flag, 0);
            seen |= flag;
        }
    }

    #[test]
    fn header_enum_values() {
        assert_eq!(SDL_DisplayOrientation::PortraitFlipped as i32, 4);
        assert_eq!(SDL_FlashOperation::UntilFocused as i32, 2);
        assert_eq!(SDL_SystemTheme::Dark as i32, 2);
        assert_eq!(SDL_WINDOWPOS_UNDEFINED, 0x1FFF_0000);
        assert_eq!(SDL_WINDOWPOS_CENTERED, 0x2FFF_0000);
    }

    #[test]
    fn create_property_keys_are_verbatim() {
        assert_eq!(SDL_PROP_WINDOW_CREATE_TITLE_STRING, "SDL.window.create.title");
        assert_eq!(SDL_PROP_WINDOW_CREATE_WIDTH_NUMBER, "SDL.window.create.width");
        assert_eq!(SDL_PROP_WINDOW_CREATE_HEIGHT_NUMBER, "SDL.window.create.height");
        assert_eq!(SDL_PROP_WINDOW_CREATE_FLAGS_NUMBER, "SDL.window.create.flags");
    }
}
