//! SDL_render.h: the 2D accelerated rendering API.

use std::ffi::{c_char, c_int, c_void};

use crate::blendmode::SDL_BlendMode;
use crate::pixels::{SDL_FColor, SDL_PixelFormat};
use crate::properties::SDL_PropertiesID;
use crate::rect::{SDL_FPoint, SDL_FRect, SDL_Rect};
use crate::surface::{SDL_FlipMode, SDL_ScaleMode, SDL_Surface};
use crate::video::{SDL_Window, SDL_WindowFlags};

// ---------------------------------------------------------------------------
// Handles and value types
// ---------------------------------------------------------------------------

/// Opaque renderer handle; owned by the native library.
#[repr(C)]
pub struct SDL_Renderer {
    _private: [u8; 0],
}

/// Texture header. SDL3 exposes these fields publicly; everything else
/// about a texture is driver-private behind the pointer.
#[repr(C)]
#[derive(Debug)]
pub struct SDL_Texture {
    pub format: SDL_PixelFormat,
    pub w: c_int,
    pub h: c_int,
    pub refcount: c_int,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct SDL_Vertex {
    pub position: SDL_FPoint,
    pub color: SDL_FColor,
    pub tex_coord: SDL_FPoint,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SDL_TextureAccess {
    Static = 0,
    Streaming = 1,
    Target = 2,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SDL_RendererLogicalPresentation {
    Disabled = 0,
    Stretch = 1,
    Letterbox = 2,
    Overscan = 3,
    IntegerScale = 4,
}

/// Name of the always-available software render driver.
pub const SDL_SOFTWARE_RENDERER: &str = "software";

pub const SDL_RENDERER_VSYNC_DISABLED: c_int = 0;
pub const SDL_RENDERER_VSYNC_ADAPTIVE: c_int = -1;

// ---------------------------------------------------------------------------
// Property keys (runtime lookup strings, verbatim from SDL_render.h)
// ---------------------------------------------------------------------------

pub const SDL_PROP_RENDERER_CREATE_NAME_STRING: &str = "SDL.renderer.create.name";
pub const SDL_PROP_RENDERER_CREATE_WINDOW_POINTER: &str = "SDL.renderer.create.window";
pub const SDL_PROP_RENDERER_CREATE_SURFACE_POINTER: &str = "SDL.renderer.create.surface";
pub const SDL_PROP_RENDERER_CREATE_OUTPUT_COLORSPACE_NUMBER: &str =
    "SDL.renderer.create.output_colorspace";
pub const SDL_PROP_RENDERER_CREATE_PRESENT_VSYNC_NUMBER: &str = "SDL.renderer.create.present_vsync";

pub const SDL_PROP_RENDERER_NAME_STRING: &str = "SDL.renderer.name";
pub const SDL_PROP_RENDERER_WINDOW_POINTER: &str = "SDL.renderer.window";
pub const SDL_PROP_RENDERER_SURFACE_POINTER: &str = "SDL.renderer.surface";
pub const SDL_PROP_RENDERER_VSYNC_NUMBER: &str = "SDL.renderer.vsync";
pub const SDL_PROP_RENDERER_MAX_TEXTURE_SIZE_NUMBER: &str = "SDL.renderer.max_texture_size";
pub const SDL_PROP_RENDERER_TEXTURE_FORMATS_POINTER: &str = "SDL.renderer.texture_formats";
pub const SDL_PROP_RENDERER_OUTPUT_COLORSPACE_NUMBER: &str = "SDL.renderer.output_colorspace";
pub const SDL_PROP_RENDERER_HDR_ENABLED_BOOLEAN: &str = "SDL.renderer.HDR_enabled";
pub const SDL_PROP_RENDERER_SDR_WHITE_POINT_FLOAT: &str = "SDL.renderer.SDR_white_point";
pub const SDL_PROP_RENDERER_HDR_HEADROOM_FLOAT: &str = "SDL.renderer.HDR_headroom";

pub const SDL_PROP_TEXTURE_CREATE_COLORSPACE_NUMBER: &str = "SDL.texture.create.colorspace";
pub const SDL_PROP_TEXTURE_CREATE_FORMAT_NUMBER: &str = "SDL.texture.create.format";
pub const SDL_PROP_TEXTURE_CREATE_ACCESS_NUMBER: &str = "SDL.texture.create.access";
pub const SDL_PROP_TEXTURE_CREATE_WIDTH_NUMBER: &str = "SDL.texture.create.width";
pub const SDL_PROP_TEXTURE_CREATE_HEIGHT_NUMBER: &str = "SDL.texture.create.height";

pub const SDL_PROP_TEXTURE_COLORSPACE_NUMBER: &str = "SDL.texture.colorspace";
pub const SDL_PROP_TEXTURE_FORMAT_NUMBER: &str = "SDL.texture.format";
pub const SDL_PROP_TEXTURE_ACCESS_NUMBER: &str = "SDL.texture.access";
pub const SDL_PROP_TEXTURE_WIDTH_NUMBER: &str = "SDL.texture.width";
pub const SDL_PROP_TEXTURE_HEIGHT_NUMBER: &str = "SDL.texture.height";

// ---------------------------------------------------------------------------
// Driver queries and renderer lifecycle
// ---------------------------------------------------------------------------

sdl3_fn! {
    pub fn SDL_GetNumRenderDrivers() -> c_int;
    pub fn SDL_GetRenderDriver(index: c_int) -> *const c_char;

    pub fn SDL_CreateWindowAndRenderer(title: *const c_char, width: c_int, height: c_int, window_flags: SDL_WindowFlags, window: *mut *mut SDL_Window, renderer: *mut *mut SDL_Renderer) -> bool;
    /// Pass a null `name` to let SDL pick the best available driver.
    pub fn SDL_CreateRenderer(window: *mut SDL_Window, name: *const c_char) -> *mut SDL_Renderer;
    pub fn SDL_CreateRendererWithProperties(props: SDL_PropertiesID) -> *mut SDL_Renderer;
    pub fn SDL_CreateSoftwareRenderer(surface: *mut SDL_Surface) -> *mut SDL_Renderer;
    pub fn SDL_DestroyRenderer(renderer: *mut SDL_Renderer);

    pub fn SDL_GetRenderer(window: *mut SDL_Window) -> *mut SDL_Renderer;
    pub fn SDL_GetRenderWindow(renderer: *mut SDL_Renderer) -> *mut SDL_Window;
    pub fn SDL_GetRendererName(renderer: *mut SDL_Renderer) -> *const c_char;
    pub fn SDL_GetRendererProperties(renderer: *mut SDL_Renderer) -> SDL_PropertiesID;
    pub fn SDL_GetRenderOutputSize(renderer: *mut SDL_Renderer, w: *mut c_int, h: *mut c_int) -> bool;
    pub fn SDL_GetCurrentRenderOutputSize(renderer: *mut SDL_Renderer, w: *mut c_int, h: *mut c_int) -> bool;
}

// ---------------------------------------------------------------------------
// Textures
// ---------------------------------------------------------------------------

sdl3_fn! {
    pub fn SDL_CreateTexture(renderer: *mut SDL_Renderer, format: SDL_PixelFormat, access: SDL_TextureAccess, w: c_int, h: c_int) -> *mut SDL_Texture;
    pub fn SDL_CreateTextureFromSurface(renderer: *mut SDL_Renderer, surface: *mut SDL_Surface) -> *mut SDL_Texture;
    pub fn SDL_CreateTextureWithProperties(renderer: *mut SDL_Renderer, props: SDL_PropertiesID) -> *mut SDL_Texture;
    pub fn SDL_DestroyTexture(texture: *mut SDL_Texture);

    pub fn SDL_GetTextureProperties(texture: *mut SDL_Texture) -> SDL_PropertiesID;
    pub fn SDL_GetRendererFromTexture(texture: *mut SDL_Texture) -> *mut SDL_Renderer;
    pub fn SDL_GetTextureSize(texture: *mut SDL_Texture, w: *mut f32, h: *mut f32) -> bool;

    pub fn SDL_SetTextureColorMod(texture: *mut SDL_Texture, r: u8, g: u8, b: u8) -> bool;
    pub fn SDL_SetTextureColorModFloat(texture: *mut SDL_Texture, r: f32, g: f32, b: f32) -> bool;
    pub fn SDL_GetTextureColorMod(texture: *mut SDL_Texture, r: *mut u8, g: *mut u8, b: *mut u8) -> bool;
    pub fn SDL_GetTextureColorModFloat(texture: *mut SDL_Texture, r: *mut f32, g: *mut f32, b: *mut f32) -> bool;
    pub fn SDL_SetTextureAlphaMod(texture: *mut SDL_Texture, alpha: u8) -> bool;
    pub fn SDL_SetTextureAlphaModFloat(texture: *mut SDL_Texture, alpha: f32) -> bool;
    pub fn SDL_GetTextureAlphaMod(texture: *mut SDL_Texture, alpha: *mut u8) -> bool;
    pub fn SDL_GetTextureAlphaModFloat(texture: *mut SDL_Texture, alpha: *mut f32) -> bool;
    pub fn SDL_SetTextureBlendMode(texture: *mut SDL_Texture, blendMode: SDL_BlendMode) -> bool;
    pub fn SDL_GetTextureBlendMode(texture: *mut SDL_Texture, blendMode: *mut SDL_BlendMode) -> bool;
    pub fn SDL_SetTextureScaleMode(texture: *mut SDL_Texture, scaleMode: SDL_ScaleMode) -> bool;
    pub fn SDL_GetTextureScaleMode(texture: *mut SDL_Texture, scaleMode: *mut SDL_ScaleMode) -> bool;

    /// `pixels` is copied; pass null `rect` to update the whole texture.
    pub fn SDL_UpdateTexture(texture: *mut SDL_Texture, rect: *const SDL_Rect, pixels: *const c_void, pitch: c_int) -> bool;
    pub fn SDL_LockTexture(texture: *mut SDL_Texture, rect: *const SDL_Rect, pixels: *mut *mut c_void, pitch: *mut c_int) -> bool;
    pub fn SDL_UnlockTexture(texture: *mut SDL_Texture);
}

// ---------------------------------------------------------------------------
// Render state
// ---------------------------------------------------------------------------

sdl3_fn! {
    /// Pass a null texture to restore the default (window) target.
    pub fn SDL_SetRenderTarget(renderer: *mut SDL_Renderer, texture: *mut SDL_Texture) -> bool;
    pub fn SDL_GetRenderTarget(renderer: *mut SDL_Renderer) -> *mut SDL_Texture;

    pub fn SDL_SetRenderLogicalPresentation(renderer: *mut SDL_Renderer, w: c_int, h: c_int, mode: SDL_RendererLogicalPresentation) -> bool;
    pub fn SDL_GetRenderLogicalPresentation(renderer: *mut SDL_Renderer, w: *mut c_int, h: *mut c_int, mode: *mut SDL_RendererLogicalPresentation) -> bool;
    pub fn SDL_RenderCoordinatesFromWindow(renderer: *mut SDL_Renderer, window_x: f32, window_y: f32, x: *mut f32, y: *mut f32) -> bool;
    pub fn SDL_RenderCoordinatesToWindow(renderer: *mut SDL_Renderer, x: f32, y: f32, window_x: *mut f32, window_y: *mut f32) -> bool;

    pub fn SDL_SetRenderViewport(renderer: *mut SDL_Renderer, rect: *const SDL_Rect) -> bool;
    pub fn SDL_GetRenderViewport(renderer: *mut SDL_Renderer, rect: *mut SDL_Rect) -> bool;
    pub fn SDL_RenderViewportSet(renderer: *mut SDL_Renderer) -> bool;
    pub fn SDL_SetRenderClipRect(renderer: *mut SDL_Renderer, rect: *const SDL_Rect) -> bool;
    pub fn SDL_GetRenderClipRect(renderer: *mut SDL_Renderer, rect: *mut SDL_Rect) -> bool;
    pub fn SDL_RenderClipEnabled(renderer: *mut SDL_Renderer) -> bool;
    pub fn SDL_SetRenderScale(renderer: *mut SDL_Renderer, scaleX: f32, scaleY: f32) -> bool;
    pub fn SDL_GetRenderScale(renderer: *mut SDL_Renderer, scaleX: *mut f32, scaleY: *mut f32) -> bool;

    pub fn SDL_SetRenderDrawColor(renderer: *mut SDL_Renderer, r: u8, g: u8, b: u8, a: u8) -> bool;
    pub fn SDL_SetRenderDrawColorFloat(renderer: *mut SDL_Renderer, r: f32, g: f32, b: f32, a: f32) -> bool;
    pub fn SDL_GetRenderDrawColor(renderer: *mut SDL_Renderer, r: *mut u8, g: *mut u8, b: *mut u8, a: *mut u8) -> bool;
    pub fn SDL_GetRenderDrawColorFloat(renderer: *mut SDL_Renderer, r: *mut f32, g: *mut f32, b: *mut f32, a: *mut f32) -> bool;
    pub fn SDL_SetRenderDrawBlendMode(renderer: *mut SDL_Renderer, blendMode: SDL_BlendMode) -> bool;
    pub fn SDL_GetRenderDrawBlendMode(renderer: *mut SDL_Renderer, blendMode: *mut SDL_BlendMode) -> bool;

    pub fn SDL_SetRenderVSync(renderer: *mut SDL_Renderer, vsync: c_int) -> bool;
    pub fn SDL_GetRenderVSync(renderer: *mut SDL_Renderer, vsync: *mut c_int) -> bool;
}

// ---------------------------------------------------------------------------
// Drawing
// ---------------------------------------------------------------------------

sdl3_fn! {
    pub fn SDL_RenderClear(renderer: *mut SDL_Renderer) -> bool;
    pub fn SDL_RenderPoint(renderer: *mut SDL_Renderer, x: f32, y: f32) -> bool;
    pub fn SDL_RenderPoints(renderer: *mut SDL_Renderer, points: *const SDL_FPoint, count: c_int) -> bool;
    pub fn SDL_RenderLine(renderer: *mut SDL_Renderer, x1: f32, y1: f32, x2: f32, y2: f32) -> bool;
    pub fn SDL_RenderLines(renderer: *mut SDL_Renderer, points: *const SDL_FPoint, count: c_int) -> bool;
    pub fn SDL_RenderRect(renderer: *mut SDL_Renderer, rect: *const SDL_FRect) -> bool;
    pub fn SDL_RenderRects(renderer: *mut SDL_Renderer, rects: *const SDL_FRect, count: c_int) -> bool;
    pub fn SDL_RenderFillRect(renderer: *mut SDL_Renderer, rect: *const SDL_FRect) -> bool;
    pub fn SDL_RenderFillRects(renderer: *mut SDL_Renderer, rects: *const SDL_FRect, count: c_int) -> bool;

    /// Null `srcrect` uses the whole texture, null `dstrect` the whole target.
    pub fn SDL_RenderTexture(renderer: *mut SDL_Renderer, texture: *mut SDL_Texture, srcrect: *const SDL_FRect, dstrect: *const SDL_FRect) -> bool;
    pub fn SDL_RenderTextureRotated(renderer: *mut SDL_Renderer, texture: *mut SDL_Texture, srcrect: *const SDL_FRect, dstrect: *const SDL_FRect, angle: f64, center: *const SDL_FPoint, flip: SDL_FlipMode) -> bool;
    pub fn SDL_RenderTextureTiled(renderer: *mut SDL_Renderer, texture: *mut SDL_Texture, srcrect: *const SDL_FRect, scale: f32, dstrect: *const SDL_FRect) -> bool;
    pub fn SDL_RenderTexture9Grid(renderer: *mut SDL_Renderer, texture: *mut SDL_Texture, srcrect: *const SDL_FRect, left_width: f32, right_width: f32, top_height: f32, bottom_height: f32, scale: f32, dstrect: *const SDL_FRect) -> bool;

    pub fn SDL_RenderGeometry(renderer: *mut SDL_Renderer, texture: *mut SDL_Texture, vertices: *const SDL_Vertex, num_vertices: c_int, indices: *const c_int, num_indices: c_int) -> bool;
    pub fn SDL_RenderGeometryRaw(renderer: *mut SDL_Renderer, texture: *mut SDL_Texture, xy: *const f32, xy_stride: c_int, color: *const SDL_FColor, color_stride: c_int, uv: *const f32, uv_stride: c_int, num_vertices: c_int, indices: *const c_void, num_indices: c_int, size_indices: c_int) -> bool;

    /// Caller owns the returned surface; destroy it with
    /// [`crate::surface::SDL_DestroySurface`].
    pub fn SDL_RenderReadPixels(renderer: *mut SDL_Renderer, rect: *const SDL_Rect) -> *mut SDL_Surface;
    pub fn SDL_RenderPresent(renderer: *mut SDL_Renderer) -> bool;
    pub fn SDL_FlushRenderer(renderer: *mut SDL_Renderer) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{offset_of, size_of};

    #[test]
    fn vertex_layout_matches_native() {
        assert_eq!(size_of::<SDL_Vertex>(), 32);
        assert_eq!(offset_of!(SDL_Vertex, color), 8);
        assert_eq!(offset_of!(SDL_Vertex, tex_coord), 24);
    }

    #[test]
    fn texture_header_layout_matches_native() {
        assert_eq!(size_of::<SDL_Texture>(), 16);
        assert_eq!(offset_of!(SDL_Texture, refcount), 12);
    }

    #[test]
    fn header_enum_values() {
        assert_eq!(SDL_TextureAccess::Target as i32, 2);
        assert_eq!(SDL_RendererLogicalPresentation::IntegerScale as i32, 4);
    }

    #[test]
    fn property_keys_are_verbatim() {
        assert_eq!(SDL_PROP_RENDERER_CREATE_NAME_STRING, "SDL.renderer.create.name");
        assert_eq!(SDL_PROP_RENDERER_VSYNC_NUMBER, "SDL.renderer.vsync");
        assert_eq!(SDL_PROP_TEXTURE_CREATE_FORMAT_NUMBER, "SDL.texture.create.format");
        assert_eq!(SDL_PROP_TEXTURE_HEIGHT_NUMBER, "SDL.texture.height");
    }
}
