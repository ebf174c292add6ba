//! SDL_power.h: power-state reporting (used by gamepad battery queries).

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SDL_PowerState {
    Error = -1,
    Unknown = 0,
    OnBattery = 1,
    NoBattery = 2,
    Charging = 3,
    Charged = 4,
}
