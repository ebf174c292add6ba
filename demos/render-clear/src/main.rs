//! Open a window, cycle the clear color for a few seconds, and read one
//! frame back to verify the pipeline end to end.

use std::time::{Duration, Instant};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use sdl3::{InitFlags, Renderer, Sdl, WindowFlags};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let _sdl = Sdl::init(InitFlags::VIDEO).context("SDL init failed")?;
    tracing::info!(version = %sdl3::init::version(), "SDL loaded");

    let (window, renderer) =
        Renderer::with_window("render-clear", 640, 480, WindowFlags::RESIZABLE)
            .context("window/renderer creation failed")?;
    tracing::info!(
        driver = %renderer.name()?,
        display = %window.display()?,
        "rendering"
    );

    let start = Instant::now();
    while start.elapsed() < Duration::from_secs(3) {
        let t = start.elapsed().as_secs_f32();
        let r = ((t.sin() * 0.5 + 0.5) * 255.0) as u8;
        let b = ((t.cos() * 0.5 + 0.5) * 255.0) as u8;
        renderer.set_draw_color(r, 0x40, b, 0xFF)?;
        renderer.clear()?;
        renderer.present()?;
        std::thread::sleep(Duration::from_millis(16));
    }

    let frame = renderer.read_pixels(None)?;
    tracing::info!(
        w = frame.width(),
        h = frame.height(),
        format = ?frame.format(),
        "read back final frame"
    );

    Ok(())
}
