//! Register-level driver for FocalTech FT6x36 capacitive touch panel
//! controllers (FT6206, FT6236, FT6336 and friends).
//!
//! The driver is synchronous and polled: each call performs one register
//! transaction on an `embedded-hal` I2C bus and returns. Raw panel coordinates
//! are remapped to the display orientation selected with [`Rotation`].
//!
//! ```ignore
//! let mut touch = Ft6x36::new(i2c)
//!     .with_reset_pin(rst)
//!     .with_rotation(Rotation::LandscapeInverted);
//! touch.reset(&mut delay)?;
//! for point in &touch.get_positions()? {
//!     // ...
//! }
//! ```

#![cfg_attr(not(test), no_std)]

pub mod bus;
mod ft6x36;

pub use bus::{NoResetPin, RegisterBus};
pub use ft6x36::{
    ChipId, Config, ControlMode, DeviceInfo, Ft6x36, Gesture, GestureParams, InterruptMode,
    Register, Rotation, Setting, TouchPoint, TouchPoints, DEFAULT_ADDRESS, DEFAULT_HEIGHT,
    DEFAULT_WIDTH, MAX_POINTS,
};
