//! Enumerate connected gamepads and print everything SDL knows about
//! them: identity, mapping, capabilities, and a live axis/button snapshot.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use sdl3::gamepad::{self, Axis, Button, Gamepad};
use sdl3::{InitFlags, Sdl};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let _sdl = Sdl::init(InitFlags::GAMEPAD).context("SDL init failed")?;

    let ids = gamepad::gamepads().context("gamepad enumeration failed")?;
    if ids.is_empty() {
        tracing::warn!("no gamepads connected");
        return Ok(());
    }
    tracing::info!(count = ids.len(), "gamepads found");

    for id in ids {
        let pad = Gamepad::open(id).with_context(|| format!("opening gamepad {id}"))?;
        probe(&pad)?;
    }

    Ok(())
}

fn probe(pad: &Gamepad) -> anyhow::Result<()> {
    tracing::info!(
        name = pad.name().as_deref().unwrap_or("?"),
        type_ = ?pad.gamepad_type(),
        guid = %pad.id().map(|id| id.guid()).map(|g| g.to_string()).unwrap_or_default(),
        vendor = pad.vendor(),
        product = pad.product(),
        serial = pad.serial().as_deref(),
        "identity"
    );

    if let Some(mapping) = pad.mapping() {
        tracing::info!(%mapping, "active mapping");
    }
    for binding in pad.bindings().unwrap_or_default() {
        tracing::debug!(?binding, "binding");
    }

    let power = pad.power_info()?;
    tracing::info!(state = ?power.state, percent = power.percent, "power");
    tracing::info!(
        touchpads = pad.num_touchpads(),
        connection = ?pad.connection_state()?,
        "capabilities"
    );

    // One manual pump so the snapshot below reflects reality without an
    // event loop.
    gamepad::update();
    let axes = [
        Axis::LeftX,
        Axis::LeftY,
        Axis::RightX,
        Axis::RightY,
        Axis::LeftTrigger,
        Axis::RightTrigger,
    ];
    for axis in axes {
        if pad.has_axis(axis) {
            tracing::info!(?axis, value = pad.axis(axis), "axis");
        }
    }
    for button in [Button::South, Button::East, Button::West, Button::North] {
        if pad.has_button(button) {
            tracing::info!(
                ?button,
                label = ?pad.button_label(button),
                down = pad.button(button),
                "button"
            );
        }
    }

    if pad.rumble(0x4000, 0x4000, 250).is_ok() {
        tracing::info!("rumble pulse sent");
        std::thread::sleep(std::time::Duration::from_millis(300));
    }

    Ok(())
}
