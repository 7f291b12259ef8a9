//! FT6x36 register map and the typed values stored in it.

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    DeviceMode = 0x00,
    GestureId = 0x01,
    TouchStatus = 0x02,

    P1XHigh = 0x03,
    P1XLow = 0x04,
    P1YHigh = 0x05,
    P1YLow = 0x06,
    P1Weight = 0x07,
    P1Misc = 0x08,

    P2XHigh = 0x09,
    P2XLow = 0x0A,
    P2YHigh = 0x0B,
    P2YLow = 0x0C,
    P2Weight = 0x0D,
    P2Misc = 0x0E,

    Threshold = 0x80,
    ThresholdDiff = 0x85,
    Control = 0x86,
    TimeEnterMonitor = 0x87,
    PeriodActive = 0x88,
    PeriodMonitor = 0x89,

    RadianValue = 0x91,
    OffsetLeftRight = 0x92,
    OffsetUpDown = 0x93,
    DistanceLeftRight = 0x94,
    DistanceUpDown = 0x95,
    DistanceZoom = 0x96,

    LibVersionHigh = 0xA1,
    LibVersionLow = 0xA2,
    Cipher = 0xA3,
    InterruptMode = 0xA4,
    PowerMode = 0xA5,
    FirmwareId = 0xA6,
    FocaltechId = 0xA8,
    ReleaseCodeId = 0xAF,
    State = 0xBC,
}

impl Register {
    pub fn addr(self) -> u8 {
        self as u8
    }
}

/// Writable single-byte settings.
///
/// Each variant is backed by exactly one register; reading or writing a
/// setting is a single bus transaction with no read-back.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Setting {
    /// Touch detection threshold
    Threshold,
    /// Touch filter coefficient (point difference threshold)
    TouchFilter,
    /// See [`ControlMode`]
    ControlMode,
    /// Idle time before switching from Active to Monitor mode
    MonitorTime,
    /// Report rate in Active mode
    ActivePeriod,
    /// Report rate in Monitor mode
    MonitorPeriod,
    /// See [`InterruptMode`]
    InterruptMode,
    /// Current power mode
    PowerMode,
}

impl Setting {
    pub const ALL: [Setting; 8] = [
        Setting::Threshold,
        Setting::TouchFilter,
        Setting::ControlMode,
        Setting::MonitorTime,
        Setting::ActivePeriod,
        Setting::MonitorPeriod,
        Setting::InterruptMode,
        Setting::PowerMode,
    ];

    pub fn register(self) -> Register {
        match self {
            Setting::Threshold => Register::Threshold,
            Setting::TouchFilter => Register::ThresholdDiff,
            Setting::ControlMode => Register::Control,
            Setting::MonitorTime => Register::TimeEnterMonitor,
            Setting::ActivePeriod => Register::PeriodActive,
            Setting::MonitorPeriod => Register::PeriodMonitor,
            Setting::InterruptMode => Register::InterruptMode,
            Setting::PowerMode => Register::PowerMode,
        }
    }
}

/// Behaviour of the INT pin when touch data is valid (`G_MODE`).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum InterruptMode {
    /// INT held low while touch data is valid
    Polling = 0x00,
    /// INT pulsed once per report
    Trigger = 0x01,
}

impl From<InterruptMode> for u8 {
    fn from(mode: InterruptMode) -> Self {
        mode as u8
    }
}

impl TryFrom<u8> for InterruptMode {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x00 => Ok(InterruptMode::Polling),
            0x01 => Ok(InterruptMode::Trigger),
            other => Err(other),
        }
    }
}

/// Active/Monitor switching policy (`CTRL`).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ControlMode {
    /// Stay in Active mode when nothing touches the panel
    KeepActive = 0x00,
    /// Drop to Monitor mode once the monitor time has elapsed without touches
    SwitchToMonitor = 0x01,
}

impl From<ControlMode> for u8 {
    fn from(mode: ControlMode) -> Self {
        mode as u8
    }
}

impl TryFrom<u8> for ControlMode {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x00 => Ok(ControlMode::KeepActive),
            0x01 => Ok(ControlMode::SwitchToMonitor),
            other => Err(other),
        }
    }
}

/// Chip family as reported by the cipher register.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChipId {
    Ft6206,
    Ft6236,
    Ft6236U,
    Unknown(u8),
}

impl From<u8> for ChipId {
    fn from(value: u8) -> Self {
        match value {
            0x06 => ChipId::Ft6206,
            0x36 => ChipId::Ft6236,
            0x64 => ChipId::Ft6236U,
            other => ChipId::Unknown(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_addresses_match_datasheet() {
        assert_eq!(Register::DeviceMode.addr(), 0x00);
        assert_eq!(Register::GestureId.addr(), 0x01);
        assert_eq!(Register::TouchStatus.addr(), 0x02);
        assert_eq!(Register::P1XHigh.addr(), 0x03);
        assert_eq!(Register::P2XHigh.addr(), 0x09);
        assert_eq!(Register::Threshold.addr(), 0x80);
        assert_eq!(Register::LibVersionHigh.addr(), 0xA1);
        assert_eq!(Register::LibVersionLow.addr(), 0xA2);
        assert_eq!(Register::Cipher.addr(), 0xA3);
        assert_eq!(Register::FirmwareId.addr(), 0xA6);
        assert_eq!(Register::FocaltechId.addr(), 0xA8);
        assert_eq!(Register::State.addr(), 0xBC);
    }

    #[test]
    fn settings_map_to_their_registers() {
        let addrs: [u8; 8] = Setting::ALL.map(|s| s.register().addr());
        assert_eq!(addrs, [0x80, 0x85, 0x86, 0x87, 0x88, 0x89, 0xA4, 0xA5]);
    }

    #[test]
    fn mode_bytes() {
        assert_eq!(u8::from(InterruptMode::Trigger), 0x01);
        assert_eq!(InterruptMode::try_from(0x00), Ok(InterruptMode::Polling));
        assert_eq!(InterruptMode::try_from(0x07), Err(0x07));
        assert_eq!(u8::from(ControlMode::SwitchToMonitor), 0x01);
        assert_eq!(ControlMode::try_from(0x00), Ok(ControlMode::KeepActive));
        assert_eq!(ControlMode::try_from(0xFF), Err(0xFF));
    }

    #[test]
    fn chip_ids() {
        assert_eq!(ChipId::from(0x06), ChipId::Ft6206);
        assert_eq!(ChipId::from(0x36), ChipId::Ft6236);
        assert_eq!(ChipId::from(0x64), ChipId::Ft6236U);
        assert_eq!(ChipId::from(0x11), ChipId::Unknown(0x11));
    }
}
