//! Register-level access to the controller and the optional reset line.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin};
use embedded_hal::i2c::{I2c, Operation};

/// Byte-addressed register access on a two-wire bus.
///
/// Every `embedded-hal` I2C bus implements this, so drivers are normally built
/// straight on top of a HAL bus or an `embedded-hal-bus` shared device.
pub trait RegisterBus {
    type Error;

    /// Reads `buf.len()` consecutive registers starting at `register`.
    ///
    /// Either the whole buffer is filled or an error is returned.
    fn read_registers(
        &mut self,
        address: u8,
        register: u8,
        buf: &mut [u8],
    ) -> Result<(), Self::Error>;

    /// Writes `data` to consecutive registers starting at `register`.
    fn write_registers(
        &mut self,
        address: u8,
        register: u8,
        data: &[u8],
    ) -> Result<(), Self::Error>;
}

impl<T> RegisterBus for T
where
    T: I2c,
{
    type Error = T::Error;

    fn read_registers(
        &mut self,
        address: u8,
        register: u8,
        buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.write_read(address, &[register], buf)
    }

    fn write_registers(
        &mut self,
        address: u8,
        register: u8,
        data: &[u8],
    ) -> Result<(), Self::Error> {
        // Adjacent writes are merged into a single frame by the HAL
        self.transaction(
            address,
            &mut [Operation::Write(&[register]), Operation::Write(data)],
        )
    }
}

/// Stand-in reset line for boards where the controller's reset pin is not wired.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoResetPin;

impl ErrorType for NoResetPin {
    type Error = Infallible;
}

impl OutputPin for NoResetPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
