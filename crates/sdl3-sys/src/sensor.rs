//! SDL_sensor.h: the sensor types exposed through gamepads.

/// Accelerometer readings are in m/s², gyroscope readings in rad/s.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SDL_SensorType {
    Invalid = -1,
    Unknown = 0,
    Accel = 1,
    Gyro = 2,
    AccelL = 3,
    GyroL = 4,
    AccelR = 5,
    GyroR = 6,
}

/// Earth gravity, the unit reference for accelerometer axes.
pub const SDL_STANDARD_GRAVITY: f32 = 9.80665;
