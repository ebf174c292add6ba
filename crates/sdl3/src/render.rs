//! The 2D accelerated rendering API: renderers, textures, draw calls.

use std::ffi::{c_int, c_void};
use std::fmt;
use std::marker::PhantomData;

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

use sdl3_sys::blendmode as sys_blend;
use sdl3_sys::rect::{SDL_FPoint, SDL_FRect, SDL_Rect};
use sdl3_sys::render as sys;
use sdl3_sys::surface as sys_surface;
pub use sdl3_sys::render::{
    SDL_RendererLogicalPresentation as LogicalPresentation, SDL_TextureAccess as TextureAccess,
    SDL_Vertex as Vertex, SDL_SOFTWARE_RENDERER as SOFTWARE_RENDERER,
};
pub use sdl3_sys::surface::{SDL_FlipMode as FlipMode, SDL_ScaleMode as ScaleMode};

use crate::error::{Error, Result};
use crate::ffi_util::{cstr_opt, cstr_to_string, opt_ptr, to_cstring};
use crate::pixels::{FColor, PixelFormat};
use crate::properties::Properties;
use crate::video::{Window, WindowFlags};

// ---------------------------------------------------------------------------
// Blend modes and vsync
// ---------------------------------------------------------------------------

/// Predefined blend modes. The native value space also admits composed
/// custom modes, which this crate does not surface.
#[derive(Debug, Copy, Clone, PartialEq, Eq, FromPrimitive)]
#[repr(u32)]
pub enum BlendMode {
    None = sys_blend::SDL_BLENDMODE_NONE,
    Blend = sys_blend::SDL_BLENDMODE_BLEND,
    Add = sys_blend::SDL_BLENDMODE_ADD,
    Mod = sys_blend::SDL_BLENDMODE_MOD,
    Mul = sys_blend::SDL_BLENDMODE_MUL,
    BlendPremultiplied = sys_blend::SDL_BLENDMODE_BLEND_PREMULTIPLIED,
    AddPremultiplied = sys_blend::SDL_BLENDMODE_ADD_PREMULTIPLIED,
    Invalid = sys_blend::SDL_BLENDMODE_INVALID,
}

impl BlendMode {
    fn from_raw(raw: sys_blend::SDL_BlendMode) -> BlendMode {
        BlendMode::from_u32(raw).unwrap_or(BlendMode::Invalid)
    }
}

/// Present-synchronization setting for a renderer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Vsync {
    Disabled,
    /// Present every Nth vertical refresh (1 is ordinary vsync).
    EveryRefresh(i32),
    Adaptive,
}

impl Vsync {
    fn to_raw(self) -> c_int {
        match self {
            Vsync::Disabled => sys::SDL_RENDERER_VSYNC_DISABLED,
            Vsync::EveryRefresh(n) => n,
            Vsync::Adaptive => sys::SDL_RENDERER_VSYNC_ADAPTIVE,
        }
    }

    fn from_raw(raw: c_int) -> Vsync {
        match raw {
            sys::SDL_RENDERER_VSYNC_DISABLED => Vsync::Disabled,
            sys::SDL_RENDERER_VSYNC_ADAPTIVE => Vsync::Adaptive,
            n => Vsync::EveryRefresh(n),
        }
    }
}

// ---------------------------------------------------------------------------
// Driver queries
// ---------------------------------------------------------------------------

/// Names of the built-in render drivers, in SDL's preference order. The
/// `"software"` driver is always present.
pub fn render_drivers() -> Vec<String> {
    let n = unsafe { sys::SDL_GetNumRenderDrivers() };
    (0..n)
        .filter_map(|i| unsafe { cstr_opt(sys::SDL_GetRenderDriver(i)) })
        .collect()
}

// ---------------------------------------------------------------------------
// Surfaces
// ---------------------------------------------------------------------------

/// An owned pixel buffer, as handed out by [`Renderer::read_pixels`].
/// Dropping it calls `SDL_DestroySurface`.
pub struct Surface {
    ptr: *mut sys_surface::SDL_Surface,
}

impl Surface {
    pub(crate) fn from_raw(ptr: *mut sys_surface::SDL_Surface) -> Surface {
        Surface { ptr }
    }

    pub fn raw(&self) -> *mut sys_surface::SDL_Surface {
        self.ptr
    }

    pub fn width(&self) -> i32 {
        unsafe { (*self.ptr).w }
    }

    pub fn height(&self) -> i32 {
        unsafe { (*self.ptr).h }
    }

    pub fn pitch(&self) -> i32 {
        unsafe { (*self.ptr).pitch }
    }

    pub fn format(&self) -> PixelFormat {
        PixelFormat::from_raw(unsafe { (*self.ptr).format })
    }

    /// The pixel rows, `pitch` bytes apart. Empty if the surface has no
    /// backing memory.
    pub fn pixels(&self) -> &[u8] {
        unsafe {
            let s = &*self.ptr;
            if s.pixels.is_null() {
                return &[];
            }
            std::slice::from_raw_parts(s.pixels as *const u8, (s.h * s.pitch).max(0) as usize)
        }
    }
}

impl Drop for Surface {
    fn drop(&mut self) {
        unsafe { sys_surface::SDL_DestroySurface(self.ptr) }
    }
}

impl fmt::Debug for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Surface")
            .field("w", &self.width())
            .field("h", &self.height())
            .field("format", &self.format())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// A 2D rendering context bound to a window. Dropping it calls
/// `SDL_DestroyRenderer`, which also destroys any textures it created;
/// the borrow on [`Texture`] keeps those from outliving it.
pub struct Renderer {
    ptr: *mut sys::SDL_Renderer,
}

impl Renderer {
    /// Create a renderer on `window`. Pass `None` to let SDL pick the
    /// best available driver, or a driver name such as
    /// [`SOFTWARE_RENDERER`].
    pub fn new(window: &Window, driver: Option<&str>) -> Result<Renderer> {
        let driver_c = match driver {
            Some(name) => Some(to_cstring(name)?),
            None => None,
        };
        let name_ptr = driver_c
            .as_ref()
            .map_or(std::ptr::null(), |c| c.as_ptr());
        let ptr = unsafe { sys::SDL_CreateRenderer(window.raw(), name_ptr) };
        if ptr.is_null() {
            return Err(Error::from_sdl());
        }
        tracing::debug!(driver, "renderer created");
        Ok(Renderer { ptr })
    }

    /// Create a renderer from a property bag (`SDL.renderer.create.*`
    /// keys).
    pub fn with_properties(props: &Properties) -> Result<Renderer> {
        let ptr = unsafe { sys::SDL_CreateRendererWithProperties(props.id()) };
        if ptr.is_null() {
            return Err(Error::from_sdl());
        }
        Ok(Renderer { ptr })
    }

    /// Create a window and a renderer on it in one call.
    pub fn with_window(
        title: &str,
        width: i32,
        height: i32,
        window_flags: WindowFlags,
    ) -> Result<(Window, Renderer)> {
        let title = to_cstring(title)?;
        let mut window_ptr = std::ptr::null_mut();
        let mut renderer_ptr = std::ptr::null_mut();
        let ok = unsafe {
            sys::SDL_CreateWindowAndRenderer(
                title.as_ptr(),
                width,
                height,
                window_flags.bits(),
                &mut window_ptr,
                &mut renderer_ptr,
            )
        };
        if !ok {
            return Err(Error::from_sdl());
        }
        Ok((Window::from_raw(window_ptr), Renderer { ptr: renderer_ptr }))
    }

    pub fn raw(&self) -> *mut sys::SDL_Renderer {
        self.ptr
    }

    /// Driver name backing this renderer.
    pub fn name(&self) -> Result<String> {
        let ptr = unsafe { sys::SDL_GetRendererName(self.ptr) };
        if ptr.is_null() {
            return Err(Error::from_sdl());
        }
        Ok(unsafe { cstr_to_string(ptr) })
    }

    pub fn properties(&self) -> Result<Properties> {
        Properties::borrowed(unsafe { sys::SDL_GetRendererProperties(self.ptr) })
    }

    pub fn output_size(&self) -> Result<(i32, i32)> {
        let (mut w, mut h) = (0, 0);
        if unsafe { sys::SDL_GetRenderOutputSize(self.ptr, &mut w, &mut h) } {
            Ok((w, h))
        } else {
            Err(Error::from_sdl())
        }
    }

    /// Output size adjusted for the current render target and logical
    /// presentation.
    pub fn current_output_size(&self) -> Result<(i32, i32)> {
        let (mut w, mut h) = (0, 0);
        if unsafe { sys::SDL_GetCurrentRenderOutputSize(self.ptr, &mut w, &mut h) } {
            Ok((w, h))
        } else {
            Err(Error::from_sdl())
        }
    }

    // -- textures ----------------------------------------------------------

    pub fn create_texture(
        &self,
        format: PixelFormat,
        access: TextureAccess,
        w: i32,
        h: i32,
    ) -> Result<Texture<'_>> {
        let ptr = unsafe { sys::SDL_CreateTexture(self.ptr, format.to_raw(), access, w, h) };
        if ptr.is_null() {
            return Err(Error::from_sdl());
        }
        Ok(Texture { ptr, _renderer: PhantomData })
    }

    pub fn create_texture_from_surface(&self, surface: &Surface) -> Result<Texture<'_>> {
        let ptr = unsafe { sys::SDL_CreateTextureFromSurface(self.ptr, surface.raw()) };
        if ptr.is_null() {
            return Err(Error::from_sdl());
        }
        Ok(Texture { ptr, _renderer: PhantomData })
    }

    /// Create a texture from a property bag (`SDL.texture.create.*` keys).
    pub fn create_texture_with_properties(&self, props: &Properties) -> Result<Texture<'_>> {
        let ptr = unsafe { sys::SDL_CreateTextureWithProperties(self.ptr, props.id()) };
        if ptr.is_null() {
            return Err(Error::from_sdl());
        }
        Ok(Texture { ptr, _renderer: PhantomData })
    }

    /// Redirect drawing into `texture` (which must have been created with
    /// [`TextureAccess::Target`]), or back to the window for `None`.
    pub fn set_target(&self, texture: Option<&Texture<'_>>) -> Result<()> {
        let ptr = texture.map_or(std::ptr::null_mut(), |t| t.ptr);
        if unsafe { sys::SDL_SetRenderTarget(self.ptr, ptr) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    // -- state -------------------------------------------------------------

    pub fn set_logical_presentation(
        &self,
        w: i32,
        h: i32,
        mode: LogicalPresentation,
    ) -> Result<()> {
        if unsafe { sys::SDL_SetRenderLogicalPresentation(self.ptr, w, h, mode) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn logical_presentation(&self) -> Result<(i32, i32, LogicalPresentation)> {
        let (mut w, mut h) = (0, 0);
        let mut mode = LogicalPresentation::Disabled;
        if unsafe { sys::SDL_GetRenderLogicalPresentation(self.ptr, &mut w, &mut h, &mut mode) } {
            Ok((w, h, mode))
        } else {
            Err(Error::from_sdl())
        }
    }

    /// Map window coordinates into render coordinates, honoring logical
    /// presentation, viewport, and scale.
    pub fn coordinates_from_window(&self, window_x: f32, window_y: f32) -> Result<(f32, f32)> {
        let (mut x, mut y) = (0.0, 0.0);
        let ok = unsafe {
            sys::SDL_RenderCoordinatesFromWindow(self.ptr, window_x, window_y, &mut x, &mut y)
        };
        if ok {
            Ok((x, y))
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn coordinates_to_window(&self, x: f32, y: f32) -> Result<(f32, f32)> {
        let (mut wx, mut wy) = (0.0, 0.0);
        if unsafe { sys::SDL_RenderCoordinatesToWindow(self.ptr, x, y, &mut wx, &mut wy) } {
            Ok((wx, wy))
        } else {
            Err(Error::from_sdl())
        }
    }

    /// Restrict drawing to `rect`; `None` resets to the whole target.
    pub fn set_viewport(&self, rect: Option<&SDL_Rect>) -> Result<()> {
        if unsafe { sys::SDL_SetRenderViewport(self.ptr, opt_ptr(rect)) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn viewport(&self) -> Result<SDL_Rect> {
        let mut rect = SDL_Rect { x: 0, y: 0, w: 0, h: 0 };
        if unsafe { sys::SDL_GetRenderViewport(self.ptr, &mut rect) } {
            Ok(rect)
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn viewport_set(&self) -> bool {
        unsafe { sys::SDL_RenderViewportSet(self.ptr) }
    }

    pub fn set_clip_rect(&self, rect: Option<&SDL_Rect>) -> Result<()> {
        if unsafe { sys::SDL_SetRenderClipRect(self.ptr, opt_ptr(rect)) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn clip_rect(&self) -> Result<SDL_Rect> {
        let mut rect = SDL_Rect { x: 0, y: 0, w: 0, h: 0 };
        if unsafe { sys::SDL_GetRenderClipRect(self.ptr, &mut rect) } {
            Ok(rect)
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn clip_enabled(&self) -> bool {
        unsafe { sys::SDL_RenderClipEnabled(self.ptr) }
    }

    pub fn set_scale(&self, scale_x: f32, scale_y: f32) -> Result<()> {
        if unsafe { sys::SDL_SetRenderScale(self.ptr, scale_x, scale_y) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn scale(&self) -> Result<(f32, f32)> {
        let (mut x, mut y) = (0.0, 0.0);
        if unsafe { sys::SDL_GetRenderScale(self.ptr, &mut x, &mut y) } {
            Ok((x, y))
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn set_draw_color(&self, r: u8, g: u8, b: u8, a: u8) -> Result<()> {
        if unsafe { sys::SDL_SetRenderDrawColor(self.ptr, r, g, b, a) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn set_draw_color_float(&self, r: f32, g: f32, b: f32, a: f32) -> Result<()> {
        if unsafe { sys::SDL_SetRenderDrawColorFloat(self.ptr, r, g, b, a) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn draw_color(&self) -> Result<(u8, u8, u8, u8)> {
        let (mut r, mut g, mut b, mut a) = (0, 0, 0, 0);
        if unsafe { sys::SDL_GetRenderDrawColor(self.ptr, &mut r, &mut g, &mut b, &mut a) } {
            Ok((r, g, b, a))
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn set_draw_blend_mode(&self, mode: BlendMode) -> Result<()> {
        if unsafe { sys::SDL_SetRenderDrawBlendMode(self.ptr, mode as u32) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn draw_blend_mode(&self) -> Result<BlendMode> {
        let mut raw: sys_blend::SDL_BlendMode = 0;
        if unsafe { sys::SDL_GetRenderDrawBlendMode(self.ptr, &mut raw) } {
            Ok(BlendMode::from_raw(raw))
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn set_vsync(&self, vsync: Vsync) -> Result<()> {
        if unsafe { sys::SDL_SetRenderVSync(self.ptr, vsync.to_raw()) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn vsync(&self) -> Result<Vsync> {
        let mut raw: c_int = 0;
        if unsafe { sys::SDL_GetRenderVSync(self.ptr, &mut raw) } {
            Ok(Vsync::from_raw(raw))
        } else {
            Err(Error::from_sdl())
        }
    }

    // -- drawing -----------------------------------------------------------

    /// Fill the whole target with the draw color, ignoring viewport and
    /// clip rect.
    pub fn clear(&self) -> Result<()> {
        if unsafe { sys::SDL_RenderClear(self.ptr) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn point(&self, x: f32, y: f32) -> Result<()> {
        if unsafe { sys::SDL_RenderPoint(self.ptr, x, y) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn points(&self, points: &[SDL_FPoint]) -> Result<()> {
        let ok = unsafe {
            sys::SDL_RenderPoints(self.ptr, points.as_ptr(), points.len() as c_int)
        };
        if ok {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn line(&self, x1: f32, y1: f32, x2: f32, y2: f32) -> Result<()> {
        if unsafe { sys::SDL_RenderLine(self.ptr, x1, y1, x2, y2) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    /// Connected polyline through `points`.
    pub fn lines(&self, points: &[SDL_FPoint]) -> Result<()> {
        let ok = unsafe {
            sys::SDL_RenderLines(self.ptr, points.as_ptr(), points.len() as c_int)
        };
        if ok {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn rect(&self, rect: Option<&SDL_FRect>) -> Result<()> {
        if unsafe { sys::SDL_RenderRect(self.ptr, opt_ptr(rect)) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn rects(&self, rects: &[SDL_FRect]) -> Result<()> {
        let ok =
            unsafe { sys::SDL_RenderRects(self.ptr, rects.as_ptr(), rects.len() as c_int) };
        if ok {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn fill_rect(&self, rect: Option<&SDL_FRect>) -> Result<()> {
        if unsafe { sys::SDL_RenderFillRect(self.ptr, opt_ptr(rect)) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn fill_rects(&self, rects: &[SDL_FRect]) -> Result<()> {
        let ok =
            unsafe { sys::SDL_RenderFillRects(self.ptr, rects.as_ptr(), rects.len() as c_int) };
        if ok {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    /// Copy `src` (or all of `texture` for `None`) to `dst` (or the whole
    /// target for `None`).
    pub fn texture(
        &self,
        texture: &Texture<'_>,
        src: Option<&SDL_FRect>,
        dst: Option<&SDL_FRect>,
    ) -> Result<()> {
        let ok =
            unsafe { sys::SDL_RenderTexture(self.ptr, texture.ptr, opt_ptr(src), opt_ptr(dst)) };
        if ok {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    /// Like [`Renderer::texture`] with rotation about `center` (the dst
    /// center for `None`) and optional flipping.
    pub fn texture_rotated(
        &self,
        texture: &Texture<'_>,
        src: Option<&SDL_FRect>,
        dst: Option<&SDL_FRect>,
        angle: f64,
        center: Option<&SDL_FPoint>,
        flip: FlipMode,
    ) -> Result<()> {
        let ok = unsafe {
            sys::SDL_RenderTextureRotated(
                self.ptr,
                texture.ptr,
                opt_ptr(src),
                opt_ptr(dst),
                angle,
                opt_ptr(center),
                flip,
            )
        };
        if ok {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    /// Tile `src` across `dst` at `scale`.
    pub fn texture_tiled(
        &self,
        texture: &Texture<'_>,
        src: Option<&SDL_FRect>,
        scale: f32,
        dst: Option<&SDL_FRect>,
    ) -> Result<()> {
        let ok = unsafe {
            sys::SDL_RenderTextureTiled(self.ptr, texture.ptr, opt_ptr(src), scale, opt_ptr(dst))
        };
        if ok {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    /// 9-grid scaling: corners stay fixed, edges stretch along one axis,
    /// the middle stretches both ways.
    #[allow(clippy::too_many_arguments)]
    pub fn texture_9grid(
        &self,
        texture: &Texture<'_>,
        src: Option<&SDL_FRect>,
        left_width: f32,
        right_width: f32,
        top_height: f32,
        bottom_height: f32,
        scale: f32,
        dst: Option<&SDL_FRect>,
    ) -> Result<()> {
        let ok = unsafe {
            sys::SDL_RenderTexture9Grid(
                self.ptr,
                texture.ptr,
                opt_ptr(src),
                left_width,
                right_width,
                top_height,
                bottom_height,
                scale,
                opt_ptr(dst),
            )
        };
        if ok {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    /// Draw a triangle list, optionally textured and optionally indexed.
    pub fn geometry(
        &self,
        texture: Option<&Texture<'_>>,
        vertices: &[Vertex],
        indices: Option<&[i32]>,
    ) -> Result<()> {
        let texture_ptr = texture.map_or(std::ptr::null_mut(), |t| t.ptr);
        let (indices_ptr, num_indices) = match indices {
            Some(ix) => (ix.as_ptr(), ix.len() as c_int),
            None => (std::ptr::null(), 0),
        };
        let ok = unsafe {
            sys::SDL_RenderGeometry(
                self.ptr,
                texture_ptr,
                vertices.as_ptr(),
                vertices.len() as c_int,
                indices_ptr,
                num_indices,
            )
        };
        if ok {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    /// Triangle list from parallel position/color/uv arrays with explicit
    /// byte strides, for vertex data laid out by the caller.
    #[allow(clippy::too_many_arguments)]
    pub fn geometry_raw(
        &self,
        texture: Option<&Texture<'_>>,
        xy: &[f32],
        xy_stride: i32,
        colors: &[FColor],
        color_stride: i32,
        uv: &[f32],
        uv_stride: i32,
        num_vertices: i32,
        indices: Option<&[u32]>,
    ) -> Result<()> {
        let texture_ptr = texture.map_or(std::ptr::null_mut(), |t| t.ptr);
        let (indices_ptr, num_indices, size_indices) = match indices {
            Some(ix) => (ix.as_ptr() as *const c_void, ix.len() as c_int, 4),
            None => (std::ptr::null(), 0, 0),
        };
        let ok = unsafe {
            sys::SDL_RenderGeometryRaw(
                self.ptr,
                texture_ptr,
                xy.as_ptr(),
                xy_stride,
                colors.as_ptr(),
                color_stride,
                uv.as_ptr(),
                uv_stride,
                num_vertices,
                indices_ptr,
                num_indices,
                size_indices,
            )
        };
        if ok {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    /// Read back `rect` (or the full target for `None`) from the current
    /// render target. Slow; meant for screenshots and tests.
    pub fn read_pixels(&self, rect: Option<&SDL_Rect>) -> Result<Surface> {
        let ptr = unsafe { sys::SDL_RenderReadPixels(self.ptr, opt_ptr(rect)) };
        if ptr.is_null() {
            return Err(Error::from_sdl());
        }
        Ok(Surface::from_raw(ptr))
    }

    /// Flip the backbuffer. The backbuffer contents are undefined
    /// afterwards; clear and redraw every frame.
    pub fn present(&self) -> Result<()> {
        if unsafe { sys::SDL_RenderPresent(self.ptr) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    /// Force queued commands to the driver, for callers mixing in direct
    /// graphics API use.
    pub fn flush(&self) -> Result<()> {
        if unsafe { sys::SDL_FlushRenderer(self.ptr) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        unsafe { sys::SDL_DestroyRenderer(self.ptr) }
    }
}

impl fmt::Debug for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderer").field("ptr", &self.ptr).finish()
    }
}

// ---------------------------------------------------------------------------
// Texture
// ---------------------------------------------------------------------------

/// A GPU texture. Borrows its renderer, so it cannot outlive it; dropping
/// calls `SDL_DestroyTexture`.
pub struct Texture<'r> {
    ptr: *mut sys::SDL_Texture,
    _renderer: PhantomData<&'r Renderer>,
}

impl Texture<'_> {
    pub fn raw(&self) -> *mut sys::SDL_Texture {
        self.ptr
    }

    pub fn format(&self) -> PixelFormat {
        PixelFormat::from_raw(unsafe { (*self.ptr).format })
    }

    pub fn width(&self) -> i32 {
        unsafe { (*self.ptr).w }
    }

    pub fn height(&self) -> i32 {
        unsafe { (*self.ptr).h }
    }

    pub fn properties(&self) -> Result<Properties> {
        Properties::borrowed(unsafe { sys::SDL_GetTextureProperties(self.ptr) })
    }

    pub fn size(&self) -> Result<(f32, f32)> {
        let (mut w, mut h) = (0.0, 0.0);
        if unsafe { sys::SDL_GetTextureSize(self.ptr, &mut w, &mut h) } {
            Ok((w, h))
        } else {
            Err(Error::from_sdl())
        }
    }

    /// Multiply color channels during copies.
    pub fn set_color_mod(&self, r: u8, g: u8, b: u8) -> Result<()> {
        if unsafe { sys::SDL_SetTextureColorMod(self.ptr, r, g, b) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn color_mod(&self) -> Result<(u8, u8, u8)> {
        let (mut r, mut g, mut b) = (0, 0, 0);
        if unsafe { sys::SDL_GetTextureColorMod(self.ptr, &mut r, &mut g, &mut b) } {
            Ok((r, g, b))
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn set_alpha_mod(&self, alpha: u8) -> Result<()> {
        if unsafe { sys::SDL_SetTextureAlphaMod(self.ptr, alpha) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn alpha_mod(&self) -> Result<u8> {
        let mut alpha = 0;
        if unsafe { sys::SDL_GetTextureAlphaMod(self.ptr, &mut alpha) } {
            Ok(alpha)
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn set_blend_mode(&self, mode: BlendMode) -> Result<()> {
        if unsafe { sys::SDL_SetTextureBlendMode(self.ptr, mode as u32) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn blend_mode(&self) -> Result<BlendMode> {
        let mut raw: sys_blend::SDL_BlendMode = 0;
        if unsafe { sys::SDL_GetTextureBlendMode(self.ptr, &mut raw) } {
            Ok(BlendMode::from_raw(raw))
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn set_scale_mode(&self, mode: ScaleMode) -> Result<()> {
        if unsafe { sys::SDL_SetTextureScaleMode(self.ptr, mode) } {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    pub fn scale_mode(&self) -> Result<ScaleMode> {
        let mut mode = ScaleMode::Nearest;
        if unsafe { sys::SDL_GetTextureScaleMode(self.ptr, &mut mode) } {
            Ok(mode)
        } else {
            Err(Error::from_sdl())
        }
    }

    /// Upload pixels into `rect` (or the whole texture for `None`). The
    /// data is copied; `pitch` is the byte distance between source rows.
    pub fn update(&self, rect: Option<&SDL_Rect>, pixels: &[u8], pitch: i32) -> Result<()> {
        let ok = unsafe {
            sys::SDL_UpdateTexture(self.ptr, opt_ptr(rect), pixels.as_ptr().cast(), pitch)
        };
        if ok {
            Ok(())
        } else {
            Err(Error::from_sdl())
        }
    }

    /// Lock a streaming texture for direct writes; the closure receives
    /// the write-only buffer and its pitch. Unlocks on return, also when
    /// the closure errors.
    pub fn with_lock<R>(
        &self,
        rect: Option<&SDL_Rect>,
        f: impl FnOnce(&mut [u8], i32) -> R,
    ) -> Result<R> {
        let mut pixels: *mut c_void = std::ptr::null_mut();
        let mut pitch: c_int = 0;
        let ok =
            unsafe { sys::SDL_LockTexture(self.ptr, opt_ptr(rect), &mut pixels, &mut pitch) };
        if !ok {
            return Err(Error::from_sdl());
        }
        let height = match rect {
            Some(r) => r.h,
            None => self.height(),
        };
        let buf = unsafe {
            std::slice::from_raw_parts_mut(pixels as *mut u8, (height * pitch).max(0) as usize)
        };
        let out = f(buf, pitch);
        unsafe { sys::SDL_UnlockTexture(self.ptr) };
        Ok(out)
    }
}

impl Drop for Texture<'_> {
    fn drop(&mut self) {
        unsafe { sys::SDL_DestroyTexture(self.ptr) }
    }
}

impl fmt::Debug for Texture<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Texture")
            .field("format", &self.format())
            .field("w", &self.width())
            .field("h", &self.height())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_modes_round_trip_the_native_values() {
        assert_eq!(BlendMode::Blend as u32, sys_blend::SDL_BLENDMODE_BLEND);
        assert_eq!(BlendMode::from_raw(sys_blend::SDL_BLENDMODE_MUL), BlendMode::Mul);
        assert_eq!(
            BlendMode::from_raw(sys_blend::SDL_BLENDMODE_ADD_PREMULTIPLIED),
            BlendMode::AddPremultiplied
        );
        // Composed custom modes fall back to Invalid rather than panicking.
        assert_eq!(BlendMode::from_raw(0x1234_5678), BlendMode::Invalid);
    }

    #[test]
    fn vsync_sentinels_map_to_native_values() {
        assert_eq!(Vsync::Disabled.to_raw(), 0);
        assert_eq!(Vsync::Adaptive.to_raw(), -1);
        assert_eq!(Vsync::EveryRefresh(2).to_raw(), 2);
        assert_eq!(Vsync::from_raw(-1), Vsync::Adaptive);
        assert_eq!(Vsync::from_raw(1), Vsync::EveryRefresh(1));
    }
}
