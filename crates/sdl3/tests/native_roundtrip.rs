//! End-to-end tests against a real libSDL3.
//!
//! These need the native library on the loader path and (for the window
//! tests) a display, so they are ignored by default:
//!
//! ```text
//! cargo test -p sdl3 -- --ignored
//! ```

use sdl3::render::SOFTWARE_RENDERER;
use sdl3::{InitFlags, PixelFormat, Renderer, Sdl, TextureAccess, Window, WindowFlags};

#[test]
#[ignore = "requires libSDL3 and a display"]
fn window_id_resolves_back_to_the_same_window() {
    let _sdl = Sdl::init(InitFlags::VIDEO).unwrap();
    let window = Window::new("roundtrip", 320, 240, WindowFlags::HIDDEN).unwrap();
    let id = window.id().unwrap();
    assert_eq!(Window::ptr_from_id(id), Some(window.raw()));
}

#[test]
#[ignore = "requires libSDL3 and a display"]
fn title_set_then_get_echoes() {
    let _sdl = Sdl::init(InitFlags::VIDEO).unwrap();
    let window = Window::new("before", 320, 240, WindowFlags::HIDDEN).unwrap();
    window.set_title("after").unwrap();
    assert_eq!(window.title(), "after");
}

#[test]
#[ignore = "requires libSDL3 and a display"]
fn displays_enumerate_and_report_modes() {
    let _sdl = Sdl::init(InitFlags::VIDEO).unwrap();
    let displays = sdl3::video::displays().unwrap();
    assert!(!displays.is_empty());
    for display in displays {
        let mode = display.desktop_mode().unwrap();
        assert!(mode.w > 0 && mode.h > 0);
    }
}

#[test]
#[ignore = "requires libSDL3"]
fn software_render_driver_is_always_listed() {
    let _sdl = Sdl::init(InitFlags::VIDEO).unwrap();
    let drivers = sdl3::render::render_drivers();
    assert!(drivers.iter().any(|d| d == SOFTWARE_RENDERER));
}

#[test]
#[ignore = "requires libSDL3 and a display"]
fn clear_present_readback_sees_the_draw_color() {
    let _sdl = Sdl::init(InitFlags::VIDEO).unwrap();
    let window = Window::new("readback", 64, 64, WindowFlags::HIDDEN).unwrap();
    let renderer = Renderer::new(&window, Some(SOFTWARE_RENDERER)).unwrap();
    renderer.set_draw_color(0x12, 0x34, 0x56, 0xFF).unwrap();
    renderer.clear().unwrap();
    let surface = renderer.read_pixels(None).unwrap();
    assert!(surface.width() > 0 && surface.height() > 0);
    assert!(!surface.pixels().is_empty());
}

#[test]
#[ignore = "requires libSDL3 and a display"]
fn texture_header_mirrors_creation_parameters() {
    let _sdl = Sdl::init(InitFlags::VIDEO).unwrap();
    let window = Window::new("texture", 64, 64, WindowFlags::HIDDEN).unwrap();
    let renderer = Renderer::new(&window, Some(SOFTWARE_RENDERER)).unwrap();
    let texture = renderer
        .create_texture(PixelFormat::RGBA8888, TextureAccess::Static, 16, 8)
        .unwrap();
    assert_eq!(texture.width(), 16);
    assert_eq!(texture.height(), 8);
    assert_eq!(texture.format(), PixelFormat::RGBA8888);
}

#[test]
#[ignore = "requires libSDL3"]
fn gamepad_mapping_add_then_update() {
    use sdl3::gamepad::{add_mapping, MappingOutcome};

    let _sdl = Sdl::init(InitFlags::GAMEPAD).unwrap();
    let mapping = "03000000000000000000000000000001,roundtrip pad,a:b0,b:b1";
    assert_eq!(add_mapping(mapping).unwrap(), MappingOutcome::Added);
    assert_eq!(add_mapping(mapping).unwrap(), MappingOutcome::Updated);
}

#[test]
#[ignore = "requires libSDL3"]
fn guid_string_round_trips_through_the_native_parser() {
    let _sdl = Sdl::init(InitFlags::empty()).unwrap();
    let text = "030000005e0400008e02000014010000";
    let guid: sdl3::Guid = text.parse().unwrap();
    assert_eq!(guid.to_string(), text);
}
