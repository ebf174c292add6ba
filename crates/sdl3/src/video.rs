//! Windows, displays, and display modes.
//!
//! Everything here must run on the main thread; that rule comes from the
//! native library and is not enforced by these types.

use std::ffi::c_int;
use std::fmt;

use bitflags::bitflags;

use sdl3_sys::rect::{SDL_Point, SDL_Rect};
use sdl3_sys::video as sys;
pub use sdl3_sys::video::{
    SDL_DisplayOrientation as DisplayOrientation, SDL_FlashOperation as FlashOperation,
    SDL_SystemTheme as SystemTheme,
};

use crate::error::{Error, Result};
use crate::ffi_util::{copy_and_free, cstr_opt, cstr_to_string, opt_ptr, to_cstring};
use crate::pixels::PixelFormat;
use crate::properties::Properties;

bitflags! {
    /// Window state bits, mirroring the `SDL_WINDOW_*` masks.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
    pub struct WindowFlags: u64 {
        const FULLSCREEN = sys::SDL_WINDOW_FULLSCREEN;
        const OPENGL = sys::SDL_WINDOW_OPENGL;
        const OCCLUDED = sys::SDL_WINDOW_OCCLUDED;
        const HIDDEN = sys::SDL_WINDOW_HIDDEN;
        const BORDERLESS = sys::SDL_WINDOW_BORDERLESS;
        const RESIZABLE = sys::SDL_WINDOW_RESIZABLE;
        const MINIMIZED = sys::SDL_WINDOW_MINIMIZED;
        const MAXIMIZED = sys::SDL_WINDOW_MAXIMIZED;
        const MOUSE_GRABBED = sys::SDL_WINDOW_MOUSE_GRABBED;
        const INPUT_FOCUS = sys::SDL_WINDOW_INPUT_FOCUS;
        const MOUSE_FOCUS = sys::SDL_WINDOW_MOUSE_FOCUS;
        const EXTERNAL = sys::SDL_WINDOW_EXTERNAL;
        const MODAL = sys::SDL_WINDOW_MODAL;
        const HIGH_PIXEL_DENSITY = sys::SDL_WINDOW_HIGH_PIXEL_DENSITY;
        const MOUSE_CAPTURE = sys::SDL_WINDOW_MOUSE_CAPTURE;
        const MOUSE_RELATIVE_MODE = sys::SDL_WINDOW_MOUSE_RELATIVE_MODE;
        const ALWAYS_ON_TOP = sys::SDL_WINDOW_ALWAYS_ON_TOP;
        const UTILITY = sys::SDL_WINDOW_UTILITY;
        const TOOLTIP = sys::SDL_WINDOW_TOOLTIP;
        const POPUP_MENU = sys::SDL_WINDOW_POPUP_MENU;
        const KEYBOARD_GRABBED = sys::SDL_WINDOW_KEYBOARD_GRABBED;
        const VULKAN = sys::SDL_WINDOW_VULKAN;
        const METAL = sys::SDL_WINDOW_METAL;
        const TRANSPARENT = sys::SDL_WINDOW_TRANSPARENT;
        const NOT_FOCUSABLE = sys::SDL_WINDOW_NOT_FOCUSABLE;
    }
}

/// Window position request for [`Window::set_position`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WindowPos {
    /// Let the window system pick.
    Undefined,
    /// Center on the primary display.
    Centered,
    At(i32),
}

impl WindowPos {
    fn to_raw(self) -> c_int {
        match self {
            WindowPos::Undefined => sys::SDL_WINDOWPOS_UNDEFINED,
            WindowPos::Centered => sys::SDL_WINDOWPOS_CENTERED,
            WindowPos::At(v) => v,
        }
    }
}

/// Runtime window identifier. 0 never names a live window.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct WindowId(pub u32);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Runtime display identifier. 0 never names a live display.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DisplayId(pub u32);

impl fmt::Display for DisplayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One display mode of a display: size, format, and refresh rate.
#[derive(Debug, Copy, Clone)]
pub struct DisplayMode {
    pub display: DisplayId,
    pub format: PixelFormat,
    pub w: i32,
    pub h: i32,
    pub pixel_density: f32,
    pub refresh_rate: f32,
    pub refresh_rate_numerator: i32,
    pub refresh_rate_denominator: i32,
    raw: sys::SDL_DisplayMode,
}

impl DisplayMode {
    fn from_raw(raw: sys::SDL_DisplayMode) -> DisplayMode {
        DisplayMode {
            display: DisplayId(raw.displayID),
            format: PixelFormat::from_raw(raw.format),
            w: raw.w,
            h: raw.h,
            pixel_density: raw.pixel_density,
            refresh_rate: raw.refresh_rate,
            refresh_rate_numerator: raw.refresh_rate_numerator,
            refresh_rate_denominator: raw.refresh_rate_denominator,
            raw,
        }
    }

    /// The raw mode for passing back to the native library, with its
    /// driver-private `internal` pointer intact.
    pub(crate) fn raw(&self) -> &sys::SDL_DisplayMode {
        &self.raw
    }
}

// ---------------------------------------------------------------------------
// Driver and display queries
// ---------------------------------------------------------------------------

/// Names of the compiled-in video drivers, in SDL's preference order.
pub fn video_drivers() -> Vec<String> {
    let n = unsafe { sys::SDL_GetNumVideoDrivers() };
    (0..n)
        .filter_map(|i| unsafe { cstr_opt(sys::SDL_GetVideoDriver(i)) })
        .collect()
}

/// Name of the driver actually in use, if video is initialized.
pub fn current_video_driver() -> Option<String> {
    unsafe { cstr_opt(sys::SDL_GetCurrentVideoDriver()) }
}

pub fn system_theme() -> SystemTheme {
    unsafe { sys::SDL_GetSystemTheme() }
}

/// All connected displays.
pub fn displays() -> Result<Vec<DisplayId>> {
    let mut count: c_int = 0;
    let ptr = unsafe { sys::SDL_GetDisplays(&mut count) };
    if ptr.is_null() {
        return Err(Error::from_sdl());
    }
    Ok(unsafe { copy_and_free(ptr, count) }
        .into_iter()
        .map(DisplayId)
        .collect())
}

pub fn primary_display() -> Result<DisplayId> {
    let id = unsafe { sys::SDL_GetPrimaryDisplay() };
    if id == 0 {
        return Err(Error::from_sdl());
    }
    Ok(DisplayId(id))
}

pub fn display_for_point(point: SDL_Point) -> Result<DisplayId> {
    let id = unsafe { sys::SDL_GetDisplayForPoint(&point) };
    if id == 0 {
        return Err(Error::from_sdl());
    }
    Ok(DisplayId(id))
}

pub fn display_for_rect(rect: SDL_Rect) -> Result<DisplayId> {
    let id = unsafe { sys::SDL_GetDisplayForRect(&rect) };
    if id == 0 {
        return Err(Error::from_sdl());
    }
    Ok(DisplayId(id))
}

impl DisplayId {
    pub fn name(self) -> Result<String> {
        let ptr = unsafe { sys::SDL_GetDisplayName(self.0) };
        if ptr.is_null() {
            return Err(Error::from_sdl());
        }
        Ok(unsafe { cstr_to_string(ptr) })
    }

    pub fn properties(self) -> Result<Properties> {
        Properties::borrowed(unsafe { sys::SDL_GetDisplayProperties(self.0) })
    }

    pub fn bounds(self) -> Result<SDL_Rect> {
        let mut rect = SDL_Rect { x: 0, y: 0, w: 0, h: 0 };
        if unsafe { sys::SDL_GetDisplayBounds(self.0, &mut rect) } {
            Ok(rect)
        } else {
            Err(Error::from_sdl())
        }
    }

    /// Bounds minus OS reservations (task bars, docks, notches).
    pub fn usable_bounds(self) -> Result<SDL_Rect> {
        let mut rect = SDL_Rect { x: 0, y: 0, w: 0, h: 0 };
        if unsafe { sys::SDL_GetDisplayUsableBounds(self.0, &mut rect) } {
            Ok(rect)
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn natural_orientation(self) -> DisplayOrientation {
        unsafe { sys::SDL_GetNaturalDisplayOrientation(self.0) }
    }

    pub fn current_orientation(self) -> DisplayOrientation {
        unsafe { sys::SDL_GetCurrentDisplayOrientation(self.0) }
    }

    pub fn content_scale(self) -> Result<f32> {
        let scale = unsafe { sys::SDL_GetDisplayContentScale(self.0) };
        if scale == 0.0 {
            return Err(Error::from_sdl());
        }
        Ok(scale)
    }

    /// Every fullscreen mode of this display, best first.
    pub fn fullscreen_modes(self) -> Result<Vec<DisplayMode>> {
        let mut count: c_int = 0;
        let ptr = unsafe { sys::SDL_GetFullscreenDisplayModes(self.0, &mut count) };
        if ptr.is_null() {
            return Err(Error::from_sdl());
        }
        // The array of pointers is ours to free; the modes are SDL's,
        // so copy them before releasing the array.
        let pointers = unsafe { copy_and_free(ptr, count) };
        Ok(pointers
            .into_iter()
            .filter(|p| !p.is_null())
            .map(|p| DisplayMode::from_raw(unsafe { *p }))
            .collect())
    }

    pub fn closest_fullscreen_mode(
        self,
        w: i32,
        h: i32,
        refresh_rate: f32,
        include_high_density_modes: bool,
    ) -> Result<DisplayMode> {
        let mut raw = std::mem::MaybeUninit::<sys::SDL_DisplayMode>::uninit();
        let ok = unsafe {
            sys::SDL_GetClosestFullscreenDisplayMode(
                self.0,
                w,
                h,
                refresh_rate,
                include_high_density_modes,
                raw.as_mut_ptr(),
            )
        };
        if !ok {
            return Err(Error::from_sdl());
        }
        Ok(DisplayMode::from_raw(unsafe { raw.assume_init() }))
    }

    /// The mode the desktop uses when no fullscreen window is on it.
    pub fn desktop_mode(self) -> Result<DisplayMode> {
        let ptr = unsafe { sys::SDL_GetDesktopDisplayMode(self.0) };
        if ptr.is_null() {
            return Err(Error::from_sdl());
        }
        Ok(DisplayMode::from_raw(unsafe { *ptr }))
    }

    pub fn current_mode(self) -> Result<DisplayMode> {
        let ptr = unsafe { sys::SDL_GetCurrentDisplayMode(self.0) };
        if ptr.is_null() {
            return Err(Error::from_sdl());
        }
        Ok(DisplayMode::from_raw(unsafe { *ptr }))
    }
}

// ---------------------------------------------------------------------------
// Windows
// ---------------------------------------------------------------------------

/// An OS window. Dropping it calls `SDL_DestroyWindow`.
pub struct Window {
    ptr: *mut sys::SDL_Window,
}

impl Window {
    /// Create a window with the given title, client size, and flags.
    pub fn new(title: &str, w: i32, h: i32, flags: WindowFlags) -> Result<Window> {
        let title = to_cstring(title)?;
        let ptr = unsafe { sys::SDL_CreateWindow(title.as_ptr(), w, h, flags.bits()) };
        if ptr.is_null() {
            return Err(Error::from_sdl());
        }
        tracing::debug!(w, h, ?flags, "window created");
        Ok(Window { ptr })
    }

    /// Create a window from a property bag (`SDL.window.create.*` keys).
    pub fn with_properties(props: &Properties) -> Result<Window> {
        let ptr = unsafe { sys::SDL_CreateWindowWithProperties(props.id()) };
        if ptr.is_null() {
            return Err(Error::from_sdl());
        }
        Ok(Window { ptr })
    }

    pub(crate) fn from_raw(ptr: *mut sys::SDL_Window) -> Window {
        Window { ptr }
    }

    pub fn raw(&self) -> *mut sys::SDL_Window {
        self.ptr
    }

    pub fn id(&self) -> Result<WindowId> {
        let id = unsafe { sys::SDL_GetWindowID(self.ptr) };
        if id == 0 {
            return Err(Error::from_sdl());
        }
        Ok(WindowId(id))
    }

    /// The raw handle registered for `id`, or `None` if no window has that
    /// ID. The pointer is owned by SDL; it is only valid while the window
    /// it names stays alive.
    pub fn ptr_from_id(id: WindowId) -> Option<*mut sys::SDL_Window> {
        let ptr = unsafe { sys::SDL_GetWindowFromID(id.0) };
        if ptr.is_null() {
            None
        } else {
            Some(ptr)
        }
    }

    pub fn properties(&self) -> Result<Properties> {
        Properties::borrowed(unsafe { sys::SDL_GetWindowProperties(self.ptr) })
    }

    pub fn flags(&self) -> WindowFlags {
        WindowFlags::from_bits_truncate(unsafe { sys::SDL_GetWindowFlags(self.ptr) })
    }

    pub fn pixel_format(&self) -> PixelFormat {
        PixelFormat::from_raw(unsafe { sys::SDL_GetWindowPixelFormat(self.ptr) })
    }

    pub fn display(&self) -> Result<DisplayId> {
        let id = unsafe { sys::SDL_GetDisplayForWindow(self.ptr) };
        if id == 0 {
            return Err(Error::from_sdl());
        }
        Ok(DisplayId(id))
    }

    pub fn set_title(&self, title: &str) -> Result<()> {
        let title = to_cstring(title)?;
        if unsafe { sys::SDL_SetWindowTitle(self.ptr, title.as_ptr()) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    /// The current title; empty if none was ever set.
    pub fn title(&self) -> String {
        let ptr = unsafe { sys::SDL_GetWindowTitle(self.ptr) };
        if ptr.is_null() {
            String::new()
        } else {
            unsafe { cstr_to_string(ptr) }
        }
    }

    pub fn set_position(&self, x: WindowPos, y: WindowPos) -> Result<()> {
        if unsafe { sys::SDL_SetWindowPosition(self.ptr, x.to_raw(), y.to_raw()) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn position(&self) -> Result<(i32, i32)> {
        let (mut x, mut y) = (0, 0);
        if unsafe { sys::SDL_GetWindowPosition(self.ptr, &mut x, &mut y) } {
            Ok((x, y))
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn set_size(&self, w: i32, h: i32) -> Result<()> {
        if unsafe { sys::SDL_SetWindowSize(self.ptr, w, h) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    /// Client-area size in window coordinates.
    pub fn size(&self) -> Result<(i32, i32)> {
        let (mut w, mut h) = (0, 0);
        if unsafe { sys::SDL_GetWindowSize(self.ptr, &mut w, &mut h) } {
            Ok((w, h))
        } else {
            Err(Error::from_sdl())
        }
    }

    /// Client-area size in pixels, which differs from [`Window::size`] on
    /// high-density displays.
    pub fn size_in_pixels(&self) -> Result<(i32, i32)> {
        let (mut w, mut h) = (0, 0);
        if unsafe { sys::SDL_GetWindowSizeInPixels(self.ptr, &mut w, &mut h) } {
            Ok((w, h))
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn set_aspect_ratio(&self, min_aspect: f32, max_aspect: f32) -> Result<()> {
        if unsafe { sys::SDL_SetWindowAspectRatio(self.ptr, min_aspect, max_aspect) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn aspect_ratio(&self) -> Result<(f32, f32)> {
        let (mut min, mut max) = (0.0, 0.0);
        if unsafe { sys::SDL_GetWindowAspectRatio(self.ptr, &mut min, &mut max) } {
            Ok((min, max))
        } else {
            Err(Error::from_sdl())
        }
    }

    /// Decoration thickness as (top, left, bottom, right).
    pub fn borders_size(&self) -> Result<(i32, i32, i32, i32)> {
        let (mut top, mut left, mut bottom, mut right) = (0, 0, 0, 0);
        let ok = unsafe {
            sys::SDL_GetWindowBordersSize(self.ptr, &mut top, &mut left, &mut bottom, &mut right)
        };
        if ok {
            Ok((top, left, bottom, right))
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn set_minimum_size(&self, w: i32, h: i32) -> Result<()> {
        if unsafe { sys::SDL_SetWindowMinimumSize(self.ptr, w, h) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn minimum_size(&self) -> Result<(i32, i32)> {
        let (mut w, mut h) = (0, 0);
        if unsafe { sys::SDL_GetWindowMinimumSize(self.ptr, &mut w, &mut h) } {
            Ok((w, h))
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn set_maximum_size(&self, w: i32, h: i32) -> Result<()> {
        if unsafe { sys::SDL_SetWindowMaximumSize(self.ptr, w, h) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn maximum_size(&self) -> Result<(i32, i32)> {
        let (mut w, mut h) = (0, 0);
        if unsafe { sys::SDL_GetWindowMaximumSize(self.ptr, &mut w, &mut h) } {
            Ok((w, h))
        } else {
            Err(Error::from_sdl())
        }
    }

    /// Pixels per window-coordinate unit (1.0 on standard displays).
    pub fn pixel_density(&self) -> f32 {
        unsafe { sys::SDL_GetWindowPixelDensity(self.ptr) }
    }

    /// OS content scale for this window's display.
    pub fn display_scale(&self) -> f32 {
        unsafe { sys::SDL_GetWindowDisplayScale(self.ptr) }
    }

    pub fn set_bordered(&self, bordered: bool) -> Result<()> {
        if unsafe { sys::SDL_SetWindowBordered(self.ptr, bordered) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn set_resizable(&self, resizable: bool) -> Result<()> {
        if unsafe { sys::SDL_SetWindowResizable(self.ptr, resizable) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn set_always_on_top(&self, on_top: bool) -> Result<()> {
        if unsafe { sys::SDL_SetWindowAlwaysOnTop(self.ptr, on_top) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn show(&self) -> Result<()> {
        if unsafe { sys::SDL_ShowWindow(self.ptr) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn hide(&self) -> Result<()> {
        if unsafe { sys::SDL_HideWindow(self.ptr) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn raise(&self) -> Result<()> {
        if unsafe { sys::SDL_RaiseWindow(self.ptr) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn maximize(&self) -> Result<()> {
        if unsafe { sys::SDL_MaximizeWindow(self.ptr) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn minimize(&self) -> Result<()> {
        if unsafe { sys::SDL_MinimizeWindow(self.ptr) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn restore(&self) -> Result<()> {
        if unsafe { sys::SDL_RestoreWindow(self.ptr) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn set_fullscreen(&self, fullscreen: bool) -> Result<()> {
        if unsafe { sys::SDL_SetWindowFullscreen(self.ptr, fullscreen) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    /// Pick the mode used when the window goes fullscreen; `None` selects
    /// borderless fullscreen-desktop.
    pub fn set_fullscreen_mode(&self, mode: Option<&DisplayMode>) -> Result<()> {
        let raw = mode.map(DisplayMode::raw);
        if unsafe { sys::SDL_SetWindowFullscreenMode(self.ptr, opt_ptr(raw)) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn fullscreen_mode(&self) -> Option<DisplayMode> {
        let ptr = unsafe { sys::SDL_GetWindowFullscreenMode(self.ptr) };
        if ptr.is_null() {
            None
        } else {
            Some(DisplayMode::from_raw(unsafe { *ptr }))
        }
    }

    /// Block until pending window state changes (size, position,
    /// fullscreen) have been applied by the window system.
    pub fn sync(&self) -> Result<()> {
        if unsafe { sys::SDL_SyncWindow(self.ptr) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn set_opacity(&self, opacity: f32) -> Result<()> {
        if unsafe { sys::SDL_SetWindowOpacity(self.ptr, opacity) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn opacity(&self) -> Result<f32> {
        let opacity = unsafe { sys::SDL_GetWindowOpacity(self.ptr) };
        if opacity < 0.0 {
            return Err(Error::from_sdl());
        }
        Ok(opacity)
    }

    pub fn flash(&self, operation: FlashOperation) -> Result<()> {
        if unsafe { sys::SDL_FlashWindow(self.ptr, operation) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        unsafe { sys::SDL_DestroyWindow(self.ptr) }
    }
}

impl fmt::Debug for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Window").field("ptr", &self.ptr).finish()
    }
}

// ---------------------------------------------------------------------------
// Screensaver
// ---------------------------------------------------------------------------

pub fn screen_saver_enabled() -> bool {
    unsafe { sys::SDL_ScreenSaverEnabled() }
}

pub fn enable_screen_saver() -> Result<()> {
    if unsafe { sys::SDL_EnableScreenSaver() } {
        Ok(())
    } else {
        Err(Error::from_sdl())
    }
}

pub fn disable_screen_saver() -> Result<()> {
    if unsafe { sys::SDL_DisableScreenSaver() } {
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
        assert_eq!(WindowFlags::RESIZABLE.bits(), sys::SDL_WINDOW_RESIZABLE);
        assert_eq!(WindowFlags::HIDDEN.bits(), sys::SDL_WINDOW_HIDDEN);
        let set = WindowFlags::RESIZABLE | WindowFlags::HIGH_PIXEL_DENSITY;
        assert_eq!(WindowFlags::from_bits_truncate(set.bits()), set);
    }

    #[test]
    fn position_sentinels_map_to_native_values() {
        assert_eq!(WindowPos::Undefined.to_raw(), 0x1FFF_0000);
        assert_eq!(WindowPos::Centered.to_raw(), 0x2FFF_0000);
        assert_eq!(WindowPos::At(-7).to_raw(), -7);
    }

    #[test]
    fn unknown_flag_bits_are_dropped_not_kept() {
        let raw = sys::SDL_WINDOW_RESIZABLE | 0x4000_0000_0000_0000;
        assert_eq!(WindowFlags::from_bits_truncate(raw), WindowFlags::RESIZABLE);
    }
}
