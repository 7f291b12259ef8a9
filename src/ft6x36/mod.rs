//! FocalTech FT6x36 self-capacitive touch panel driver
//!
//! Every accessor is a single register transaction: nothing is cached, writes
//! are not read back and values are not range checked; the controller clamps
//! or ignores what it does not accept.

mod registers;
mod touch;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::bus::{NoResetPin, RegisterBus};
pub use registers::{ChipId, ControlMode, InterruptMode, Register, Setting};
use touch::POINT_BLOCK_LEN;
pub use touch::{Gesture, GestureParams, Rotation, TouchPoint, TouchPoints, MAX_POINTS};

/// Factory I2C address
pub const DEFAULT_ADDRESS: u8 = 0x38;
pub const DEFAULT_WIDTH: u16 = 320;
pub const DEFAULT_HEIGHT: u16 = 240;

/// Minimum time the reset line is held low.
const RESET_HOLD_MS: u32 = 1;

/// Identification registers, read once per call of [`Ft6x36::device_info`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceInfo {
    pub chip_id: ChipId,
    pub firmware_id: u8,
    pub panel_id: u8,
    pub release_code: u8,
    pub library_version: u16,
}

/// Settings applied by [`Ft6x36::configure`]. `None` leaves the register untouched.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub threshold: Option<u8>,
    pub touch_filter: Option<u8>,
    pub control_mode: Option<ControlMode>,
    pub monitor_time: Option<u8>,
    pub active_period: Option<u8>,
    pub monitor_period: Option<u8>,
    pub interrupt_mode: Option<InterruptMode>,
    pub power_mode: Option<u8>,
}

impl Config {
    /// Raw register value for `setting`, if configured.
    pub fn get(&self, setting: Setting) -> Option<u8> {
        match setting {
            Setting::Threshold => self.threshold,
            Setting::TouchFilter => self.touch_filter,
            Setting::ControlMode => self.control_mode.map(u8::from),
            Setting::MonitorTime => self.monitor_time,
            Setting::ActivePeriod => self.active_period,
            Setting::MonitorPeriod => self.monitor_period,
            Setting::InterruptMode => self.interrupt_mode.map(u8::from),
            Setting::PowerMode => self.power_mode,
        }
    }
}

/// FT6x36 driver
///
/// Owns the bus handle for its whole lifetime. To share a physical bus with
/// other devices, hand in a shared-bus device from `embedded-hal-bus`.
pub struct Ft6x36<B, RST = NoResetPin> {
    address: u8,
    bus: B,
    reset_pin: Option<RST>,
    rotation: Rotation,
    width: u16,
    height: u16,
}

impl<B> Ft6x36<B, NoResetPin> {
    /// Creates a driver at [`DEFAULT_ADDRESS`], without reset line, in
    /// portrait orientation on a 320x240 panel. Nothing is sent on the bus.
    pub fn new(bus: B) -> Self {
        Self::new_with_address(bus, DEFAULT_ADDRESS)
    }

    pub fn new_with_address(bus: B, address: u8) -> Self {
        Ft6x36 {
            address,
            bus,
            reset_pin: None,
            rotation: Rotation::default(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl<B, RST> Ft6x36<B, RST> {
    /// Attaches the line wired to the controller's RST input.
    pub fn with_reset_pin<P: OutputPin>(self, reset_pin: P) -> Ft6x36<B, P> {
        Ft6x36 {
            address: self.address,
            bus: self.bus,
            reset_pin: Some(reset_pin),
            rotation: self.rotation,
            width: self.width,
            height: self.height,
        }
    }

    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_dimensions(mut self, width: u16, height: u16) -> Self {
        self.set_dimensions(width, height);
        self
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Takes effect on the next [`Ft6x36::get_positions`].
    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn set_dimensions(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Gives back the bus and the reset line.
    pub fn release(self) -> (B, Option<RST>) {
        (self.bus, self.reset_pin)
    }
}

impl<B, RST> Ft6x36<B, RST>
where
    RST: OutputPin,
{
    /// Hardware reset: RST low for at least 1ms, then high.
    ///
    /// Without a reset line this does nothing at all.
    pub fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), RST::Error> {
        let Some(reset_pin) = self.reset_pin.as_mut() else {
            return Ok(());
        };

        #[cfg(feature = "defmt")]
        defmt::debug!("Resetting touch controller at 0x{:02x}", self.address);

        reset_pin.set_low()?;
        delay.delay_ms(RESET_HOLD_MS);
        reset_pin.set_high()?;
        Ok(())
    }
}

impl<B, RST> Ft6x36<B, RST>
where
    B: RegisterBus,
{
    /// Reads the current contacts, rotated into display coordinates.
    ///
    /// The two-point register block is always read in full; only the number
    /// of points given by `TD_STATUS` is returned.
    pub fn get_positions(&mut self) -> Result<TouchPoints, B::Error> {
        let status = self.read_register(Register::TouchStatus)?;
        let mut block = [0_u8; POINT_BLOCK_LEN];
        self.bus
            .read_registers(self.address, Register::P1XHigh.addr(), &mut block)?;

        #[cfg(feature = "defmt")]
        defmt::trace!("TD_STATUS 0x{:02x}, points {:02x}", status, block);

        Ok(TouchPoints::decode(
            status,
            &block,
            self.rotation,
            self.width,
            self.height,
        ))
    }

    /// Gesture reported by the controller, [`Gesture::None`] for unknown codes.
    pub fn get_gesture(&mut self) -> Result<Gesture, B::Error> {
        let id = self.read_register(Register::GestureId)?;
        Ok(Gesture::from_u8(id))
    }

    pub fn read_setting(&mut self, setting: Setting) -> Result<u8, B::Error> {
        self.read_register(setting.register())
    }

    pub fn write_setting(&mut self, setting: Setting, value: u8) -> Result<(), B::Error> {
        self.write_register(setting.register(), value)
    }

    /// Writes every configured field, in [`Setting::ALL`] order.
    ///
    /// Stops at the first failing write; earlier writes are not rolled back.
    pub fn configure(&mut self, config: &Config) -> Result<(), B::Error> {
        for setting in Setting::ALL {
            if let Some(value) = config.get(setting) {
                self.write_setting(setting, value)?;
            }
        }
        Ok(())
    }

    /// Touch detection threshold
    pub fn threshold(&mut self) -> Result<u8, B::Error> {
        self.read_setting(Setting::Threshold)
    }

    pub fn set_threshold(&mut self, value: u8) -> Result<(), B::Error> {
        self.write_setting(Setting::Threshold, value)
    }

    pub fn touch_filter(&mut self) -> Result<u8, B::Error> {
        self.read_setting(Setting::TouchFilter)
    }

    pub fn set_touch_filter(&mut self, value: u8) -> Result<(), B::Error> {
        self.write_setting(Setting::TouchFilter, value)
    }

    /// Raw `CTRL` value, see [`ControlMode`]
    pub fn control_mode(&mut self) -> Result<u8, B::Error> {
        self.read_setting(Setting::ControlMode)
    }

    pub fn set_control_mode(&mut self, value: u8) -> Result<(), B::Error> {
        self.write_setting(Setting::ControlMode, value)
    }

    /// Time without touch before switching from Active to Monitor mode
    pub fn monitor_time(&mut self) -> Result<u8, B::Error> {
        self.read_setting(Setting::MonitorTime)
    }

    pub fn set_monitor_time(&mut self, value: u8) -> Result<(), B::Error> {
        self.write_setting(Setting::MonitorTime, value)
    }

    /// Report rate in Active mode
    pub fn active_period(&mut self) -> Result<u8, B::Error> {
        self.read_setting(Setting::ActivePeriod)
    }

    pub fn set_active_period(&mut self, value: u8) -> Result<(), B::Error> {
        self.write_setting(Setting::ActivePeriod, value)
    }

    /// Report rate in Monitor mode
    pub fn monitor_period(&mut self) -> Result<u8, B::Error> {
        self.read_setting(Setting::MonitorPeriod)
    }

    pub fn set_monitor_period(&mut self, value: u8) -> Result<(), B::Error> {
        self.write_setting(Setting::MonitorPeriod, value)
    }

    /// Raw `G_MODE` value, see [`InterruptMode`]
    pub fn interrupt_mode(&mut self) -> Result<u8, B::Error> {
        self.read_setting(Setting::InterruptMode)
    }

    pub fn set_interrupt_mode(&mut self, value: u8) -> Result<(), B::Error> {
        self.write_setting(Setting::InterruptMode, value)
    }

    pub fn power_mode(&mut self) -> Result<u8, B::Error> {
        self.read_setting(Setting::PowerMode)
    }

    pub fn set_power_mode(&mut self, value: u8) -> Result<(), B::Error> {
        self.write_setting(Setting::PowerMode, value)
    }

    /// Library version, `LIB_VER_H` and `LIB_VER_L` read in one transaction.
    pub fn library_version(&mut self) -> Result<u16, B::Error> {
        let mut buf = [0_u8; 2];
        self.bus
            .read_registers(self.address, Register::LibVersionHigh.addr(), &mut buf)?;
        Ok(u16::from_be_bytes(buf))
    }

    pub fn firmware_version(&mut self) -> Result<u8, B::Error> {
        self.read_register(Register::FirmwareId)
    }

    /// Chip selecting (cipher) register; see [`ChipId`] for known values.
    pub fn vendor_id(&mut self) -> Result<u8, B::Error> {
        self.read_register(Register::Cipher)
    }

    /// FocalTech's panel ID
    pub fn panel_id(&mut self) -> Result<u8, B::Error> {
        self.read_register(Register::FocaltechId)
    }

    pub fn device_mode(&mut self) -> Result<u8, B::Error> {
        self.read_register(Register::DeviceMode)
    }

    pub fn release_code(&mut self) -> Result<u8, B::Error> {
        self.read_register(Register::ReleaseCodeId)
    }

    pub fn operating_state(&mut self) -> Result<u8, B::Error> {
        self.read_register(Register::State)
    }

    pub fn gesture_params(&mut self) -> Result<GestureParams, B::Error> {
        let mut buf = [0_u8; GestureParams::LEN];
        self.bus
            .read_registers(self.address, Register::RadianValue.addr(), &mut buf)?;
        Ok(GestureParams::from_bytes(buf))
    }

    pub fn set_gesture_params(&mut self, params: &GestureParams) -> Result<(), B::Error> {
        self.bus
            .write_registers(self.address, Register::RadianValue.addr(), &params.to_bytes())
    }

    pub fn device_info(&mut self) -> Result<DeviceInfo, B::Error> {
        let info = DeviceInfo {
            chip_id: ChipId::from(self.vendor_id()?),
            firmware_id: self.firmware_version()?,
            panel_id: self.panel_id()?,
            release_code: self.release_code()?,
            library_version: self.library_version()?,
        };

        #[cfg(feature = "defmt")]
        defmt::info!("Touch controller: {}", info);

        Ok(info)
    }

    fn read_register(&mut self, register: Register) -> Result<u8, B::Error> {
        let mut rx = [0_u8; 1];
        self.bus.read_registers(self.address, register.addr(), &mut rx)?;
        Ok(rx[0])
    }

    fn write_register(&mut self, register: Register, value: u8) -> Result<(), B::Error> {
        #[cfg(feature = "defmt")]
        defmt::debug!("{} <= 0x{:02x}", register, value);

        self.bus.write_registers(self.address, register.addr(), &[value])
    }
}
