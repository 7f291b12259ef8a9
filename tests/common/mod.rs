//! Register-file mock of the controller plus recording reset line and delay.

#![allow(dead_code)]

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, OutputPin};
use embedded_hal::i2c::{self, ErrorKind, I2c, NoAcknowledgeSource, Operation};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BusFault;

impl i2c::Error for BusFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transfer {
    Read { address: u8, register: u8, len: usize },
    Write { address: u8, register: u8, data: Vec<u8> },
}

/// 256 byte register file; the first written byte of a transaction sets the
/// register pointer, further written bytes are stored from there on.
pub struct MockBus {
    pub registers: [u8; 256],
    pub log: Vec<Transfer>,
    pub fail: bool,
    /// Transactions still allowed to succeed before every later one fails.
    pub fail_after: Option<usize>,
}

impl MockBus {
    pub fn new() -> Self {
        MockBus {
            registers: [0; 256],
            log: Vec::new(),
            fail: false,
            fail_after: None,
        }
    }

    pub fn with_registers(start: u8, values: &[u8]) -> Self {
        let mut bus = Self::new();
        bus.set(start, values);
        bus
    }

    pub fn set(&mut self, start: u8, values: &[u8]) {
        let start = usize::from(start);
        self.registers[start..start + values.len()].copy_from_slice(values);
    }
}

impl i2c::ErrorType for MockBus {
    type Error = BusFault;
}

impl I2c for MockBus {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if self.fail {
            return Err(BusFault);
        }
        match self.fail_after {
            Some(0) => return Err(BusFault),
            Some(n) => self.fail_after = Some(n - 1),
            None => {}
        }

        let mut pointer: Option<u8> = None;
        let mut written = Vec::new();
        for op in operations.iter_mut() {
            match op {
                Operation::Write(bytes) => {
                    for &b in bytes.iter() {
                        match pointer {
                            None => pointer = Some(b),
                            Some(_) => written.push(b),
                        }
                    }
                }
                Operation::Read(buf) => {
                    let register = pointer.expect("read without register pointer");
                    for (i, b) in buf.iter_mut().enumerate() {
                        *b = self.registers[(usize::from(register) + i) & 0xFF];
                    }
                    self.log.push(Transfer::Read {
                        address,
                        register,
                        len: buf.len(),
                    });
                }
            }
        }

        if !written.is_empty() {
            let register = pointer.expect("write without register pointer");
            for (i, &b) in written.iter().enumerate() {
                self.registers[(usize::from(register) + i) & 0xFF] = b;
            }
            self.log.push(Transfer::Write {
                address,
                register,
                data: written,
            });
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LineEvent {
    Low,
    High,
    DelayNs(u32),
}

pub type EventLog = Rc<RefCell<Vec<LineEvent>>>;

pub struct MockPin {
    pub events: EventLog,
}

impl digital::ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.events.borrow_mut().push(LineEvent::Low);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.events.borrow_mut().push(LineEvent::High);
        Ok(())
    }
}

pub struct MockDelay {
    pub events: EventLog,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.events.borrow_mut().push(LineEvent::DelayNs(ns));
    }
}
